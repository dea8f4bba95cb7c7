//! Positional message formatting.

use std::fmt::{self, Write};

/// Substitute `{0}`, `{1}`, ... in `pattern` with `args`.
///
/// `''` produces a single apostrophe. Placeholders whose index has no
/// argument are kept verbatim.
pub fn format_message(pattern: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.char_indices().peekable();
    while let Some((start, ch)) = chars.next() {
        match ch {
            '\'' if chars.peek().is_some_and(|(_, next)| *next == '\'') => {
                chars.next();
                out.push('\'');
            }
            '{' => {
                let rest = &pattern[start + 1..];
                let Some(end) = rest.find('}') else {
                    out.push(ch);
                    continue;
                };
                let placeholder = &rest[..end];
                match placeholder.parse::<usize>().ok().and_then(|index| args.get(index)) {
                    Some(arg) => {
                        let _ = write!(out, "{arg}");
                        for _ in 0..=end {
                            chars.next();
                        }
                    }
                    None => out.push(ch),
                }
            }
            _ => out.push(ch),
        }
    }
    out
}
