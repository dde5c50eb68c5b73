//! Splits string literals into literal text and substitution spans.
//!
//! Recognized substitutions are `$name`, `${name}`, and `$( ... )`. Command substitutions
//! are matched with balanced parentheses, so `$(a $(b) c)` is a single span. A `$` that
//! does not begin a complete substitution is ordinary text, as is any character preceded
//! by a backslash.

use std::borrow::Cow;

/// A piece of a string literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Literal text, before escape processing.
    Text(&'a str),
    /// A substitution span, including its leading `$`.
    Substitution(&'a str),
}

/// Splits the given raw string contents into pieces.
///
/// Adjacent text is coalesced; an empty input yields no pieces.
///
/// # Arguments
///
/// * `raw` - String literal contents, without surrounding quotes.
pub fn split(raw: &str) -> Vec<Piece<'_>> {
    match interpolation::pieces(raw) {
        Ok(pieces) => pieces,
        // Every character is either text or part of a span, so this is unreachable in
        // practice; degrade to treating the input as plain text.
        Err(e) => {
            tracing::debug!(target: "interpolation", "failed to split '{raw}': {e}");
            vec![Piece::Text(raw)]
        }
    }
}

peg::parser! {
    grammar interpolation() for str {
        pub(crate) rule pieces() -> Vec<Piece<'input>> =
            p:piece()* ![_] { p }

        rule piece() -> Piece<'input> =
            s:$(substitution()) { Piece::Substitution(s) } /
            s:$(text_char()+) { Piece::Text(s) }

        rule text_char() =
            "\\" [_] /
            !substitution() [_]

        rule substitution() =
            "$(" balanced()* ")" /
            "${" identifier() "}" /
            "$" identifier()

        rule balanced() =
            "(" balanced()* ")" /
            [^ '(' | ')']

        rule identifier() =
            ['a'..='z' | 'A'..='Z' | '_'] ['a'..='z' | 'A'..='Z' | '0'..='9' | '_']*
    }
}

/// Processes backslash escapes in literal text.
///
/// Supported escapes are `\n`, `\t`, `\r`, `\0`, `\\`, `\$`, `\"`, `\xHH`, and `\u{H...}`. Any
/// other escape (including a trailing lone backslash) is kept as written.
///
/// # Arguments
///
/// * `text` - The text to process.
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('n') => {
                chars.next();
                result.push('\n');
            }
            Some('t') => {
                chars.next();
                result.push('\t');
            }
            Some('r') => {
                chars.next();
                result.push('\r');
            }
            Some('0') => {
                chars.next();
                result.push('\0');
            }
            Some('\\') => {
                chars.next();
                result.push('\\');
            }
            Some('$') => {
                chars.next();
                result.push('$');
            }
            Some('"') => {
                chars.next();
                result.push('"');
            }
            Some('x') => {
                let mut lookahead = chars.clone();
                lookahead.next();
                let digits: String = lookahead.by_ref().take(2).collect();
                match u8::from_str_radix(&digits, 16) {
                    Ok(byte) if digits.len() == 2 => {
                        result.push(char::from(byte));
                        chars = lookahead;
                    }
                    _ => result.push('\\'),
                }
            }
            Some('u') => {
                let mut lookahead = chars.clone();
                lookahead.next();
                if let Some(c) = parse_braced_code_point(&mut lookahead) {
                    result.push(c);
                    chars = lookahead;
                } else {
                    result.push('\\');
                }
            }
            _ => result.push('\\'),
        }
    }

    Cow::Owned(result)
}

fn parse_braced_code_point(chars: &mut impl Iterator<Item = char>) -> Option<char> {
    if chars.next()? != '{' {
        return None;
    }

    let mut digits = String::new();
    for c in chars.by_ref() {
        if c == '}' {
            let value = u32::from_str_radix(&digits, 16).ok()?;
            return char::from_u32(value);
        }
        if digits.len() == 6 || !c.is_ascii_hexdigit() {
            return None;
        }
        digits.push(c);
    }

    None
}
