const PERIOD: char = '.';

/// Check that exactly one period appears anywhere in the sentence
#[inline]
pub fn has_single_period(sentence: &str) -> bool {
    sentence.matches(PERIOD).count() == 1
}

/// Check that the last character of the sentence is a period
///
/// Empty text fails.
#[inline]
pub fn ends_with_period(sentence: &str) -> bool {
    sentence.ends_with(PERIOD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_period() {
        assert!(has_single_period("Hello."));
        assert!(has_single_period(".Hello"));
        assert!(!has_single_period(".Hello."));
        assert!(!has_single_period("hello"));
        assert!(!has_single_period(""));
    }

    #[test]
    fn test_ellipsis_counts_each_dot() {
        assert!(!has_single_period("Wait..."));
    }

    #[test]
    fn test_ends_with_period() {
        assert!(ends_with_period("Hello."));
        assert!(ends_with_period(".Hello."));
        assert!(!ends_with_period(".Hello"));
        assert!(!ends_with_period("Hello. "));
    }

    #[test]
    fn test_ends_with_period_empty() {
        assert!(!ends_with_period(""));
    }

    #[test]
    fn test_quote_after_period() {
        assert!(!ends_with_period("He said \"hello.\""));
    }
}
