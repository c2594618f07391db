use log::trace;
use oxc_syntax::identifier::{is_identifier_name, is_identifier_part};
use std::collections::HashSet;

/// Source of identifiers guaranteed unused in the scope being rewritten.
///
/// Hosts with their own scope tracking implement this directly; [`ScopeUids`]
/// covers hosts that can only enumerate the names already in use.
pub trait UidGenerator {
    fn fresh_identifier(&mut self, hint: &str) -> String;
}

/// Registry of names taken in one program, handing out `_hint`, `_hint2`, ...
#[derive(Debug, Default, Clone)]
pub struct ScopeUids {
    used: HashSet<String>,
}

impl ScopeUids {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_used<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { used: names.into_iter().map(Into::into).collect() }
    }

    pub fn reserve(&mut self, name: impl Into<String>) {
        self.used.insert(name.into());
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }
}

impl UidGenerator for ScopeUids {
    fn fresh_identifier(&mut self, hint: &str) -> String {
        let identifier = to_identifier(hint);
        let base = identifier.trim_start_matches('_').trim_end_matches(|c: char| c.is_ascii_digit());

        let mut i = 1usize;
        let uid = loop {
            let candidate = if i > 1 { format!("_{}{}", base, i) } else { format!("_{}", base) };
            if !self.used.contains(&candidate) {
                break candidate;
            }
            i += 1;
        };

        trace!("Generated uid '{}' for hint '{}'", uid, hint);
        self.used.insert(uid.clone());
        uid
    }
}

/// Coerces arbitrary text into a valid identifier.
///
/// Characters that cannot appear in an identifier act as word breaks: they are
/// dropped and the next character is upper-cased (`b-c` becomes `bC`). Leading
/// digits are dropped.
pub fn to_identifier(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut upper_next = false;

    for c in raw.chars() {
        if !is_identifier_part(c) {
            upper_next = !out.is_empty();
            continue;
        }
        if out.is_empty() && c.is_ascii_digit() {
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    if out.is_empty() {
        return "_".to_string();
    }
    if !is_identifier_name(&out) {
        out.insert(0, '_');
    }
    out
}
