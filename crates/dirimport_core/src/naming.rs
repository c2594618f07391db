//! Property names derived from file names.
//!
//! A file `b-c.js` inside an aggregated directory is exposed as `bC` (camelCase,
//! the default) or `b_c` (snake_case). Only the final path segment, without its
//! extension, is transformed.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameCase {
    #[default]
    Camel,
    Snake,
}

impl NameCase {
    pub fn transform(self, raw: &str) -> String {
        match self {
            NameCase::Camel => to_camel_case(raw),
            NameCase::Snake => to_snake_case(raw),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `-`, `_` or `.` followed by a word character collapses into that character, upper-cased.
pub fn to_camel_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if matches!(c, '-' | '_' | '.')
            && let Some(&next) = chars.peek()
            && is_word_char(next)
        {
            out.push(next.to_ascii_uppercase());
            chars.next();
        } else {
            out.push(c);
        }
    }

    out
}

/// `.` and `-` become `_`; an upper-case letter becomes `_` plus its lower-case form.
pub fn to_snake_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);

    for c in raw.chars() {
        match c {
            '.' | '-' => out.push('_'),
            'A'..='Z' => {
                out.push('_');
                out.push(c.to_ascii_lowercase());
            }
            _ => out.push(c),
        }
    }

    out
}
