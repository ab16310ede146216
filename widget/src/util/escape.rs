//! HTML escaping for message text.
//!
//! Every string the widget inserts as markup (user input, remote replies,
//! the lead's name) goes through [`escape_html`] first.

#[cfg(test)]
#[path = "escape_test.rs"]
mod escape_test;

/// Escape `&`, `<`, `>`, `"` and `'` for insertion into HTML.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        push_escaped(&mut out, ch);
    }
    out
}

/// Escape a single character. Used by the streaming reveal, which inserts
/// one character per tick.
pub fn escape_char(ch: char) -> String {
    let mut out = String::with_capacity(6);
    push_escaped(&mut out, ch);
    out
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#039;"),
        other => out.push(other),
    }
}
