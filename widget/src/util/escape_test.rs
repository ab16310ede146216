use super::*;

// =============================================================
// escape_html
// =============================================================

#[test]
fn escape_html_script_tag_becomes_literal() {
    assert_eq!(escape_html("<script>alert(1)</script>"), "&lt;script&gt;alert(1)&lt;/script&gt;");
}

#[test]
fn escape_html_ampersand_first() {
    assert_eq!(escape_html("a & <b>"), "a &amp; &lt;b&gt;");
    assert_eq!(escape_html("&lt;"), "&amp;lt;");
}

#[test]
fn escape_html_quotes() {
    assert_eq!(escape_html(r#"say "hi" it's"#), "say &quot;hi&quot; it&#039;s");
}

#[test]
fn escape_html_leaves_plain_text_alone() {
    assert_eq!(escape_html("Olá, Maria! Tudo bem?"), "Olá, Maria! Tudo bem?");
    assert_eq!(escape_html(""), "");
}

// =============================================================
// escape_char
// =============================================================

#[test]
fn escape_char_matches_escape_html() {
    let input = "<a href='x'>&\"ç</a>";
    let joined: String = input.chars().map(escape_char).collect();
    assert_eq!(joined, escape_html(input));
}
