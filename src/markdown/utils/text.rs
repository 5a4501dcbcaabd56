use once_cell::sync::Lazy;
use regex::Regex;

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Strip HTML tags (and HTML comments) from text
pub fn strip_html_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").into_owned()
}

/// Visible text of an HTML fragment: tags stripped, entities decoded.
///
/// Both slug passes derive ids from this, so `A &amp; B` in rendered HTML
/// and `A & B` in Markdown source produce the same anchor.
pub fn html_to_plain_text(html: &str) -> String {
    let stripped = strip_html_tags(html);
    html_escape::decode_html_entities(&stripped).into_owned()
}

/// Number of characters a reader sees in an HTML fragment. Tags count for
/// nothing and an entity such as `&lt;` counts as one character.
pub fn visible_char_count(html: &str) -> usize {
    let mut count = 0;
    let mut rest = html;
    while let Some((len, visible)) = next_token(rest) {
        if visible {
            count += 1;
        }
        rest = &rest[len..];
    }
    count
}

/// Truncate an HTML fragment to at most `max_chars` visible characters,
/// appending `...` when anything was cut.
///
/// The cut never lands inside a tag or an entity, and a `<code>` left open
/// by the cut is closed before the ellipsis.
pub fn truncate_html(html: &str, max_chars: usize) -> String {
    let mut visible = 0;
    let mut offset = 0;

    while let Some((len, is_visible)) = next_token(&html[offset..]) {
        if is_visible {
            if visible == max_chars {
                break;
            }
            visible += 1;
        }
        offset += len;
    }

    if offset == html.len() {
        return html.to_string();
    }

    let cut = &html[..offset];
    let mut truncated = cut.to_string();
    if cut.matches("<code>").count() > cut.matches("</code>").count() {
        truncated.push_str("</code>");
    }
    truncated.push_str("...");
    truncated
}

// Byte length of the next tag, entity or character, and whether it is visible
fn next_token(html: &str) -> Option<(usize, bool)> {
    let first = html.chars().next()?;
    match first {
        '<' => match html.find('>') {
            Some(end) => Some((end + 1, false)),
            None => Some((1, true)),
        },
        '&' => Some((entity_len(html).unwrap_or(1), true)),
        other => Some((other.len_utf8(), true)),
    }
}

// Length of a `&name;` or `&#123;` entity at the start of `html`
fn entity_len(html: &str) -> Option<usize> {
    let end = html.find(';')?;
    let body = &html[1..end];
    let well_formed = !body.is_empty()
        && body.len() <= 32
        && body.chars().all(|c| c.is_ascii_alphanumeric() || c == '#');
    if well_formed {
        Some(end + 1)
    } else {
        None
    }
}
