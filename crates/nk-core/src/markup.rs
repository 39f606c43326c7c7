//! HTML projection of plain text and back
//!
//! `render_document` produces the markup representation of a plain-text
//! document, one `<p>` per line. `to_plain` strips markup back down to text:
//! block elements start new lines, `<br>` is a line break, entities are
//! decoded and the contents of non-visible elements are dropped.

/// Elements whose contents never show up as text
const HIDDEN_ELEMENTS: &[&str] = &["head", "title", "style", "script"];

/// Elements that begin a new line when opened
const BLOCK_ELEMENTS: &[&str] = &[
    "p", "div", "li", "tr", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre",
];

/// Escape text for inclusion in HTML
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render plain text as a standalone HTML document
pub fn render_document(plain: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html>\n<head><meta charset=\"utf-8\"></head>\n<body>\n");
    for line in plain.split('\n') {
        html.push_str("<p>");
        html.push_str(&escape(line));
        html.push_str("</p>\n");
    }
    html.push_str("</body>\n</html>\n");
    html
}

/// Strip markup down to its visible text
pub fn to_plain(markup: &str) -> String {
    let mut out = String::new();
    let mut seen_block = false;
    let mut rest = markup;

    while !rest.is_empty() {
        match rest.find('<') {
            Some(0) => {
                if let Some(comment) = rest.strip_prefix("<!--") {
                    match comment.find("-->") {
                        Some(close) => rest = &comment[close + 3..],
                        None => break,
                    }
                    continue;
                }
                let Some(end) = tag_end(rest) else {
                    // Unterminated tag, treat the remainder as text
                    push_text(&mut out, rest);
                    break;
                };
                let tag = Tag::parse(&rest[1..end]);
                rest = &rest[end + 1..];

                if tag.closing || tag.name.is_empty() {
                    continue;
                }
                if HIDDEN_ELEMENTS.contains(&tag.name.as_str()) && !tag.self_closing {
                    rest = skip_element(rest, &tag.name);
                } else if tag.name == "br" {
                    out.push('\n');
                } else if BLOCK_ELEMENTS.contains(&tag.name.as_str()) {
                    if seen_block || !out.is_empty() {
                        out.push('\n');
                    }
                    seen_block = true;
                }
            }
            Some(start) => {
                push_text(&mut out, &rest[..start]);
                rest = &rest[start..];
            }
            None => {
                push_text(&mut out, rest);
                break;
            }
        }
    }

    out
}

/// Byte offset of the `>` closing the tag at the start of `s`
///
/// A `>` inside a quoted attribute value does not end the tag.
fn tag_end(s: &str) -> Option<usize> {
    let mut quote = None;
    for (i, ch) in s.char_indices().skip(1) {
        match (quote, ch) {
            (None, '"' | '\'') => quote = Some(ch),
            (Some(q), c) if c == q => quote = None,
            (None, '>') => return Some(i),
            _ => {}
        }
    }
    None
}

/// Decode HTML entities in a text run
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];
        match candidate.find(';').and_then(|semi| {
            decode_entity(&candidate[1..semi]).map(|ch| (ch, semi))
        }) {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &candidate[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

fn push_text(out: &mut String, text: &str) {
    // Whitespace runs spanning lines are source formatting
    if text.trim().is_empty() && text.contains('\n') {
        return;
    }
    out.push_str(&unescape(text));
}

fn skip_element<'a>(rest: &'a str, name: &str) -> &'a str {
    let closing = format!("</{}", name);
    let lower = rest.to_ascii_lowercase();
    match lower.find(&closing) {
        Some(pos) => match rest[pos..].find('>') {
            Some(end) => &rest[pos + end + 1..],
            None => "",
        },
        None => "",
    }
}

struct Tag {
    name: String,
    closing: bool,
    self_closing: bool,
}

impl Tag {
    fn parse(inner: &str) -> Self {
        let inner = inner.trim();
        let (closing, body) = match inner.strip_prefix('/') {
            Some(body) => (true, body),
            None => (false, inner),
        };
        let self_closing = body.ends_with('/');
        let name = body
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();

        // Comments and doctypes carry no text
        let name = if name.starts_with('!') || name.starts_with('?') {
            String::new()
        } else {
            name
        };

        Self {
            name,
            closing,
            self_closing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\" > d"), "a &lt; b &amp; &quot;c&quot; &gt; d");
    }

    #[test]
    fn test_render_document_paragraphs() {
        let html = render_document("one\n\ntwo");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<p>one</p>\n<p></p>\n<p>two</p>"));
        assert!(html.contains("charset=\"utf-8\""));
    }

    #[test]
    fn test_to_plain_inverts_render() {
        for text in ["", "Hello, world!", "a\nb", "a\n\nb", "  indented\n<tag> & more", "\n"] {
            assert_eq!(to_plain(&render_document(text)), text);
        }
    }

    #[test]
    fn test_to_plain_inline_tags() {
        assert_eq!(to_plain("<b>Hello</b> <i>there</i>"), "Hello there");
    }

    #[test]
    fn test_to_plain_breaks_and_blocks() {
        assert_eq!(to_plain("first<br>second<br/>third"), "first\nsecond\nthird");
        assert_eq!(to_plain("intro<p>para</p>"), "intro\npara");
    }

    #[test]
    fn test_to_plain_drops_hidden_elements() {
        let html = "<html><head><title>T</title><style>p { color: red; }</style></head>\
                    <body><p>visible</p><script>var x = 1;</script></body></html>";
        assert_eq!(to_plain(html), "visible");
    }

    #[test]
    fn test_to_plain_ignores_comments_and_doctype() {
        assert_eq!(to_plain("<!DOCTYPE html><!-- note --><p>x</p>"), "x");
    }

    #[test]
    fn test_to_plain_comment_containing_gt() {
        assert_eq!(to_plain("<p>keep</p><!-- a > b --><p>z</p>"), "keep\nz");
        assert_eq!(to_plain("text<!-- never closed > <p>hidden</p>"), "text");
    }

    #[test]
    fn test_to_plain_quoted_attribute_containing_gt() {
        assert_eq!(to_plain("<p title=\"x>y\">z</p>"), "z");
        assert_eq!(to_plain("<span data-x='a > b'>in</span> out"), "in out");
        assert_eq!(
            to_plain("<p>keep</p><!-- a > b --><p title=\"x>y\">z</p>"),
            "keep\nz"
        );
    }

    #[test]
    fn test_unescape_entities() {
        assert_eq!(unescape("&lt;b&gt; &amp; &quot;q&quot; &#65;&#x42;&nbsp;"), "<b> & \"q\" AB ");
        assert_eq!(unescape("fish & chips &bogus; &"), "fish & chips &bogus; &");
    }

    #[test]
    fn test_unterminated_tag_is_text() {
        assert_eq!(to_plain("a <b"), "a <b");
    }
}
