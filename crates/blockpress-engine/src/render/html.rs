use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::render::RenderBlock;

/// Render a preview as a standalone HTML fragment
///
/// Class names match the ones the desktop preview uses so the same
/// stylesheet applies to exported posts.
pub fn to_html(blocks: &[RenderBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        out.push_str(&fragment(block));
        out.push('\n');
    }
    out
}

fn fragment(block: &RenderBlock) -> String {
    match block {
        RenderBlock::Paragraph { text, size, .. } => format!(
            r#"<p class="paragraph size-{}">{}</p>"#,
            size.as_str(),
            encode_text(text)
        ),
        RenderBlock::Heading {
            text, level, size, ..
        } => format!(
            r#"<{tag} class="heading size-{}">{}</{tag}>"#,
            size.as_str(),
            encode_text(text),
            tag = level.tag()
        ),
        RenderBlock::Figure {
            url,
            alt,
            caption,
            size,
            ..
        } => {
            let caption = caption
                .as_deref()
                .map(|c| format!("<figcaption>{}</figcaption>", encode_text(c)))
                .unwrap_or_default();
            format!(
                r#"<figure class="image size-{}"><img src="{}" alt="{}" style="width: {}"/>{}</figure>"#,
                size.as_str(),
                encode_double_quoted_attribute(url),
                encode_double_quoted_attribute(alt),
                size.css_width(),
                caption
            )
        }
        RenderBlock::Video {
            embed_url, size, ..
        } => format!(
            r#"<div class="video size-{}"><iframe src="{}" style="width: {}" allowfullscreen></iframe></div>"#,
            size.as_str(),
            encode_double_quoted_attribute(embed_url),
            size.css_width()
        ),
        RenderBlock::Quote { text, author, .. } => {
            let cite = author
                .as_deref()
                .map(|a| format!("<cite>— {}</cite>", encode_text(a)))
                .unwrap_or_default();
            format!(
                r#"<blockquote class="quote"><p>{}</p>{}</blockquote>"#,
                encode_text(text),
                cite
            )
        }
        RenderBlock::List { ordered, items, .. } => {
            let tag = if *ordered { "ol" } else { "ul" };
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", encode_text(item)))
                .collect();
            format!(r#"<{tag} class="list">{items}</{tag}>"#)
        }
        RenderBlock::Code { code, .. } => format!(
            r#"<pre class="code"><code>{}</code></pre>"#,
            encode_text(code)
        ),
    }
}
