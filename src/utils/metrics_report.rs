//! Human-readable summary of an engine turn.
//!
//! Mirrors a metrics panel: depth, node count, wall time, estimated
//! branching factor with the implied `O(b^d)` complexity, and the position
//! score. Unknown values print as `-`.

use crate::interface::core_api::AiMoveReport;

const MISSING: &str = "-";

/// `1234567` -> `"1,234,567"`.
pub fn with_thousands_separators(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_report(report: &AiMoveReport) -> String {
    let best_move = report
        .best_move
        .map(|mv| mv.to_string())
        .unwrap_or_else(|| MISSING.to_owned());
    let (branching, complexity) = match report.branching_factor {
        Some(b) => (format!("{b:.2}"), format!("O({b:.1}^{})", report.depth)),
        None => (MISSING.to_owned(), MISSING.to_owned()),
    };

    format!(
        "Best Move:        {best_move}\n\
         Search Depth:     {}\n\
         Nodes Visited:    {}\n\
         Execution Time:   {:.3}s\n\
         Branching Factor: {branching}\n\
         Complexity:       {complexity}\n\
         Position Score:   {:+.1}",
        report.depth,
        with_thousands_separators(report.nodes_visited),
        report.elapsed.as_secs_f64(),
        f64::from(report.score),
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::game_state::board_types::{Move, Square};

    #[test]
    fn separators_group_by_three() {
        assert_eq!(with_thousands_separators(0), "0");
        assert_eq!(with_thousands_separators(999), "999");
        assert_eq!(with_thousands_separators(1_000), "1,000");
        assert_eq!(with_thousands_separators(1_234_567), "1,234,567");
    }

    #[test]
    fn report_lists_every_metric() {
        let report = AiMoveReport {
            best_move: Some(Move::new(
                Square::new(1, 4).expect("on board"),
                Square::new(2, 4).expect("on board"),
            )),
            score: 35,
            depth: 3,
            nodes_visited: 12_345,
            elapsed: Duration::from_millis(1_250),
            branching_factor: Some(23.11),
        };

        let text = format_report(&report);
        assert!(text.contains("Best Move:        e7e6"));
        assert!(text.contains("Nodes Visited:    12,345"));
        assert!(text.contains("Execution Time:   1.250s"));
        assert!(text.contains("Branching Factor: 23.11"));
        assert!(text.contains("Complexity:       O(23.1^3)"));
        assert!(text.contains("Position Score:   +35.0"));
    }

    #[test]
    fn missing_values_print_dash() {
        let report = AiMoveReport {
            best_move: None,
            score: -40,
            depth: 0,
            nodes_visited: 1,
            elapsed: Duration::ZERO,
            branching_factor: None,
        };

        let text = format_report(&report);
        assert!(text.contains("Best Move:        -"));
        assert!(text.contains("Complexity:       -"));
        assert!(text.contains("Position Score:   -40.0"));
    }
}
