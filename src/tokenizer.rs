//! Quote-aware word splitting.
//!
//! Single quotes keep everything literal, backslashes included. Double quotes
//! keep everything literal except that a backslash still escapes `\`, `$`,
//! `"` and newline. Outside quotes a backslash escapes any character.

/// Characters a backslash may escape inside double quotes.
const DOUBLE_QUOTE_ESCAPES: [char; 4] = ['\\', '$', '"', '\n'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Unquoted,
    InSingle,
    InDouble,
}

fn is_delimiter(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Appended to every line so the last word is closed by an ordinary delimiter
const SYNTHETIC_DELIMITER: char = ' ';

/// Split a raw input line into words.
///
/// An unterminated quote swallows the rest of the line: the open word is
/// never closed, so it does not appear in the output. A trailing backslash
/// escapes the synthetic delimiter and has the same effect.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut state = QuoteState::Unquoted;
    let mut chars = line.chars().chain(std::iter::once(SYNTHETIC_DELIMITER));

    while let Some(c) = chars.next() {
        match (c, state) {
            ('\\', _) => match (state, chars.next()) {
                (QuoteState::InSingle, Some(next)) => {
                    current.push('\\');
                    current.push(next);
                }
                (QuoteState::InDouble, Some(next)) if !DOUBLE_QUOTE_ESCAPES.contains(&next) => {
                    current.push('\\');
                    current.push(next);
                }
                (_, Some(next)) => current.push(next),
                // unreachable: the synthetic delimiter always follows
                (_, None) => {}
            },
            ('\'', QuoteState::Unquoted) => state = QuoteState::InSingle,
            ('\'', QuoteState::InSingle) => state = QuoteState::Unquoted,
            ('"', QuoteState::Unquoted) => state = QuoteState::InDouble,
            ('"', QuoteState::InDouble) => state = QuoteState::Unquoted,
            (c, QuoteState::Unquoted) if is_delimiter(c) => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            (c, _) => current.push(c),
        }
    }

    words
}
