//! Preview projection: parsed blocks to an HTML fragment.
//!
//! Each block maps to exactly one element, in source order, with no
//! merging. Both the live editor preview and the published-post view go
//! through this one projection. All user text and URLs are escaped.

use crate::document::{Block, Inline};

/// Render a block sequence as an HTML fragment, one element per line.
pub fn to_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        render_block(&mut out, block);
    }
    out
}

fn render_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { level, inlines } => {
            let body = render_inlines(inlines);
            out.push_str(&format!("<h{level}>{body}</h{level}>\n"));
        }
        Block::Paragraph(inlines) => {
            out.push_str(&format!("<p>{}</p>\n", render_inlines(inlines)));
        }
        Block::CodeBlock { language, code } => {
            let class = language
                .as_deref()
                .map_or_else(String::new, |lang| {
                    format!(" class=\"language-{}\"", escape(lang))
                });
            out.push_str(&format!(
                "<pre><code{class}>{}</code></pre>\n",
                escape(code)
            ));
        }
        Block::Blockquote(inlines) => {
            out.push_str(&format!(
                "<blockquote>{}</blockquote>\n",
                render_inlines(inlines)
            ));
        }
        Block::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            out.push_str(&format!("<{tag}>"));
            for item in items {
                out.push_str(&format!("<li>{}</li>", render_inlines(item)));
            }
            out.push_str(&format!("</{tag}>\n"));
        }
    }
}

fn render_inlines(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for run in inlines {
        match run {
            Inline::Text(t) => out.push_str(&escape(t)),
            Inline::Bold(t) => out.push_str(&format!("<strong>{}</strong>", escape(t))),
            Inline::Italic(t) => out.push_str(&format!("<em>{}</em>", escape(t))),
            Inline::Code(t) => out.push_str(&format!("<code>{}</code>", escape(t))),
            Inline::Link { text, url } => {
                out.push_str(&format!("<a href=\"{}\">{}</a>", escape(url), escape(text)));
            }
        }
    }
    out
}

fn escape(text: &str) -> String {
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
