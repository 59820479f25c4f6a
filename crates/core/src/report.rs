#![allow(clippy::format_push_string)]

//! Plain-text reports for streak statistics and progression tables.

use crate::format;
use crate::params::BetParams;
use crate::progression::ProgressionRow;
use crate::streak::StreakStats;

pub struct ReportFormatter;

impl ReportFormatter {
    /// Renders the headline statistics block for a parameter set.
    #[must_use]
    pub fn format(params: &BetParams, stats: &StreakStats) -> String {
        let params = params.normalized();
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════\n");
        output.push_str("              MARTINGALE STREAK ANALYSIS               \n");
        output.push_str("═══════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("Inputs\n");
        output.push_str("───────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "Balance:               {}\n",
            format::amount(params.balance)
        ));
        output.push_str(&format!(
            "Base Bet:              {}\n",
            format::amount(params.base_bet)
        ));
        output.push_str(&format!(
            "Payout:                {}\n",
            format::multiple(params.payout)
        ));
        output.push_str(&format!(
            "Chance:                {}\n",
            format::percent(params.chance)
        ));
        output.push_str(&format!(
            "Loss Multiplier:       {}\n",
            format::multiple(params.multiplier)
        ));
        output.push_str(&format!(
            "House Edge:            {}\n",
            format::percent(params.house_edge)
        ));
        output.push('\n');

        output.push_str("Results\n");
        output.push_str("───────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "Max Loss Streak:       {}\n",
            stats.max_loss_streak
        ));
        output.push_str(&format!(
            "Bust Probability:      {}\n",
            format::probability_percent(stats.bust_probability)
        ));
        output.push_str(&format!(
            "Payout After Edge:     {}\n",
            format::multiple(stats.actual_payout)
        ));
        // Base-stake profit at the edge-adjusted payout; the table's
        // gross profit column uses the nominal payout instead.
        output.push_str(&format!(
            "Profit Per Win:        {}\n",
            format::amount(stats.profit_per_win)
        ));
        output.push('\n');

        output.push_str(&format!(
            "The bankroll funds {} consecutive losses; losing {} in a\n",
            stats.max_loss_streak,
            u64::from(stats.max_loss_streak) + 1
        ));
        output.push_str(&format!(
            "row busts it with probability {}.\n",
            format::probability_percent(stats.bust_probability)
        ));
        output.push_str("═══════════════════════════════════════════════════════\n");

        output
    }

    /// Renders progression rows as an aligned text table.
    #[must_use]
    pub fn format_table(rows: impl IntoIterator<Item = ProgressionRow>) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{:>5}  {:>16}  {:>16}  {:>16}  {:>16}  {:>12}  {:>14}\n",
            "loss", "bet", "cumulative", "gross profit", "net profit", "probability", "odds"
        ));
        for row in rows {
            output.push_str(&format!(
                "{:>5}  {:>16}  {:>16}  {:>16}  {:>16}  {:>12}  {:>14}\n",
                row.loss_index,
                format::amount(row.bet_amount),
                format::amount(row.cumulative_bet),
                format::amount(row.gross_profit),
                format::amount(row.net_profit),
                format::probability_percent(row.loss_probability),
                format::odds(row.odds),
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::build_progression;
    use crate::streak::compute_statistics;

    #[test]
    fn report_contains_headline_figures() {
        let params = BetParams::default();
        let stats = compute_statistics(&params);
        let report = ReportFormatter::format(&params, &stats);

        assert!(report.contains("Max Loss Streak:       17"));
        assert!(report.contains("Payout After Edge:     1.9800"));
        assert!(report.contains("Profit Per Win:        0.00000001"));
    }

    #[test]
    fn table_has_header_and_one_line_per_row() {
        let rows = build_progression(&BetParams::default(), 5);
        let table = ReportFormatter::format_table(rows);
        assert_eq!(table.lines().count(), 6);
        assert!(table.lines().next().unwrap().contains("cumulative"));
    }

    #[test]
    fn table_renders_missing_odds_as_dash() {
        let params = BetParams {
            chance: 100.0,
            ..BetParams::default()
        };
        let table = ReportFormatter::format_table(build_progression(&params, 1));
        let data_line = table.lines().nth(1).unwrap();
        assert!(data_line.trim_end().ends_with('-'));
    }
}
