/// Escapes markup so it displays as literal text inside a text field.
///
/// Matches how a DOM text node serializes: `&`, `<` and `>` are replaced and
/// quotes are left alone.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_markup_characters_only() {
        assert_eq!(
            escape_html(r#"<h3 class="t">A&nbsp;B</h3>"#),
            r#"&lt;h3 class="t"&gt;A&amp;nbsp;B&lt;/h3&gt;"#
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
