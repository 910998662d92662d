/// Returns `word` if `count` is one, otherwise its regular English plural.
///
/// The plural adds `es` after a sibilant ending (`s`, `x`, `z`, `ch`, `sh`) and `s` otherwise,
/// in upper case if the word is written in upper case. Irregular plurals need
/// [`plural_with()`].
///
/// ```rust
/// use tiny_text::plural;
///
/// assert_eq!(plural(1, "cat"), "cat");
/// assert_eq!(plural(2, "cat"), "cats");
/// assert_eq!(plural(2_u64, "DOG"), "DOGS");
/// assert_eq!(plural(2.3, "platypus"), "platypuses");
/// ```
#[must_use]
pub fn plural<N>(count: N, word: &str) -> String
where
    N: PartialEq + From<u8>,
{
    if count == N::from(1) {
        word.to_string()
    } else {
        regular_plural(word)
    }
}

/// Returns `singular` if `count` is one, otherwise `plural`.
///
/// ```rust
/// use tiny_text::plural_with;
///
/// assert_eq!(plural_with(2, "mouse", "mice"), "mice");
/// assert_eq!(plural_with(1, "mouse", "mice"), "mouse");
/// ```
#[must_use]
pub fn plural_with<N>(count: N, singular: &str, plural: &str) -> String
where
    N: PartialEq + From<u8>,
{
    if count == N::from(1) {
        singular.to_string()
    } else {
        plural.to_string()
    }
}

fn regular_plural(word: &str) -> String {
    let lower = word.to_lowercase();
    let sibilant = ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|ending| lower.ends_with(ending));

    let suffix = if sibilant { "es" } else { "s" };

    let shouting = word.chars().any(char::is_alphabetic)
        && word
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase);

    if shouting {
        format!("{word}{}", suffix.to_uppercase())
    } else {
        format!("{word}{suffix}")
    }
}
