pub const DELIMITER: char = '.';

/// Split text on every period, re-appending the period to each non-empty piece.
///
/// `"One. Two."` becomes `["One.", " Two."]`. Surrounding whitespace is kept so
/// the pieces concatenate back to the input.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    text.split(DELIMITER)
        .filter(|piece| !piece.is_empty())
        .map(|piece| format!("{piece}{DELIMITER}"))
        .collect()
}
