// Small pure helpers shared across modules

/// Tests whether the text reads the same reversed
///
/// Compares code point by code point: no case folding, no whitespace
/// handling, no grapheme clustering.
///
/// # Example
/// ```
/// use greet_utils::is_palindrome;
///
/// assert!(is_palindrome("racecar"));
/// assert!(!is_palindrome("hello"));
/// ```
pub fn is_palindrome(text: &str) -> bool {
    text.chars().rev().eq(text.chars())
}
