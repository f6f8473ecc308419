/// Pure masking of a secret phrase for display
use std::collections::BTreeSet;

/// Symbol shown in place of a letter that has not been revealed yet.
pub const PLACEHOLDER: char = '_';

/// Build the display mask for `phrase` given the set of revealed letters.
///
/// Letters are compared uppercase; anything that is not an ASCII letter
/// (spaces, apostrophes, digits) is shown as-is and is never guessable.
pub fn apply(phrase: &str, revealed: &BTreeSet<char>) -> String {
    phrase
        .chars()
        .map(|c| {
            if !c.is_ascii_alphabetic() {
                c
            } else if revealed.contains(&c.to_ascii_uppercase()) {
                c
            } else {
                PLACEHOLDER
            }
        })
        .collect()
}

/// The fully-hidden mask, before any letter has been revealed.
pub fn hidden(phrase: &str) -> String {
    apply(phrase, &BTreeSet::new())
}
