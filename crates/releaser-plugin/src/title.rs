//! Fallback section titles.

/// Capitalises the first letter of every word in a category key.
///
/// Letters, digits and underscores form words; any other character is a
/// separator and is kept as is. The rest of each word is left untouched.
#[must_use]
pub fn title_case(key: &str) -> String {
    let mut title = String::with_capacity(key.len());
    let mut at_word_start = true;

    for c in key.chars() {
        if at_word_start {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }

    title
}
