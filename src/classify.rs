use crate::models::Outcome;

/// A literal marker whose presence in the captured output maps the run to
/// an outcome.
pub struct Rule {
    pub marker: &'static str,
    pub outcome: Outcome,
}

/// Priority-ordered classification rules; the first marker found wins.
///
/// The violation marker outranks the error marker on purpose: the
/// simulator's own diagnostics can emit "Error"-adjacent text while the
/// assertion fires, and a detected violation is still a pass.
pub const RULES: &[Rule] = &[
    Rule {
        marker: "VIOLATION",
        outcome: Outcome::Passed,
    },
    Rule {
        marker: "Error",
        outcome: Outcome::Failed,
    },
];

/// Maps captured simulator text to an outcome.
///
/// Case-sensitive substring search only; no marker at all is the valid
/// `Warning` outcome, not an error.
pub fn classify(output: &str) -> Outcome {
    RULES
        .iter()
        .find(|rule| output.contains(rule.marker))
        .map_or(Outcome::Warning, |rule| rule.outcome)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("...VIOLATION detected at t=500ns...", Outcome::Passed)]
    #[case("Error: unresolved reference in module X", Outcome::Failed)]
    #[case("Simulation complete. 0 errors.", Outcome::Warning)]
    #[case("", Outcome::Warning)]
    fn test_marker_classification(#[case] output: &str, #[case] expected: Outcome) {
        assert_eq!(classify(output), expected);
    }

    #[test]
    fn test_violation_outranks_error() {
        let output = "Error: bus contention\nVIOLATION raised by checker\n";
        assert_eq!(classify(output), Outcome::Passed);

        // Order of appearance in the text does not matter.
        let output = "VIOLATION raised by checker\nError: bus contention\n";
        assert_eq!(classify(output), Outcome::Passed);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(classify("violation at t=10ns"), Outcome::Warning);
        assert_eq!(classify("error: something odd"), Outcome::Warning);
    }

    #[test]
    fn test_marker_inside_larger_word_still_matches() {
        assert_eq!(classify("PROTOCOL_VIOLATION_FLAG=1"), Outcome::Passed);
    }
}
