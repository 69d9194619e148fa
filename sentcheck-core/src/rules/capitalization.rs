/// Check that the sentence starts with an uppercase letter
///
/// Uses the Unicode `Uppercase` property, so the result does not depend on
/// locale. Empty text has no first character and fails.
#[inline]
pub fn starts_with_capital(sentence: &str) -> bool {
    sentence.chars().next().is_some_and(char::is_uppercase)
}
