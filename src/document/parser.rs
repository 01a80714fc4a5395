//! Markdown-subset parsing.
//!
//! The grammar is deliberately small: blocks are separated by blank lines,
//! each chunk is classified by its leading marker, and inline runs are
//! recognized in a single left-to-right scan. Parsing is total — any input
//! produces a block sequence, and malformed markup degrades to plain text
//! instead of erroring, so the editor can re-parse on every keystroke.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::types::{Block, Inline};

/// Ordered-list marker anchored at the start of a line, e.g. `12. `.
static ORDERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s").expect("ordered marker pattern compiles"));

/// Inline-run patterns, each anchored at the scan position. Precedence is
/// bold, italic, code, link: bold must win over italic at the same position
/// so `**` is never misread as an empty emphasis pair.
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*(.+?)\*\*").expect("bold compiles"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*([^*]+)\*").expect("italic compiles"));
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^`([^`]+)`").expect("code compiles"));
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([^\]]+)\]\(([^)]+)\)").expect("link compiles"));

/// Parse markdown-subset source into an ordered block sequence.
///
/// Never fails; empty or whitespace-only input yields an empty sequence.
///
/// # Example
///
/// ```
/// use marklet::document::{parse, Block, Inline};
///
/// let blocks = parse("# Title");
/// assert_eq!(
///     blocks,
///     vec![Block::Heading {
///         level: 1,
///         inlines: vec![Inline::Text("Title".to_string())],
///     }]
/// );
/// ```
pub fn parse(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    for chunk in source.split("\n\n") {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        blocks.push(classify_chunk(chunk));
    }
    debug!(blocks = blocks.len(), bytes = source.len(), "parsed document");
    blocks
}

/// Classify one blank-line-separated chunk. First match wins; anything
/// without a recognized marker falls back to a paragraph.
fn classify_chunk(chunk: &str) -> Block {
    for (marker, level) in [("# ", 1), ("## ", 2), ("### ", 3)] {
        if let Some(rest) = chunk.strip_prefix(marker) {
            return Block::Heading {
                level,
                inlines: parse_inlines(&collapse_newlines(rest)),
            };
        }
    }
    if chunk.starts_with("```") {
        return parse_code_chunk(chunk);
    }
    if chunk.starts_with("> ") {
        return parse_quote_chunk(chunk);
    }
    if chunk.lines().any(is_list_line) {
        return parse_list_chunk(chunk);
    }
    Block::Paragraph(parse_inlines(&collapse_newlines(chunk)))
}

/// Newlines inside non-code blocks are collapsed to spaces; only code
/// blocks keep their line structure.
fn collapse_newlines(text: &str) -> String {
    text.replace('\n', " ")
}

fn is_list_line(line: &str) -> bool {
    line.starts_with("- ") || ORDERED_MARKER.is_match(line)
}

/// Fenced code block. The closing fence is optional: an unterminated
/// fence takes all remaining lines rather than erroring.
fn parse_code_chunk(chunk: &str) -> Block {
    let mut lines = chunk.lines();
    let tag = lines.next().unwrap_or_default().trim_start_matches('`').trim();
    let language = if tag.is_empty() {
        None
    } else {
        Some(tag.to_string())
    };
    let mut body: Vec<&str> = lines.collect();
    if body.last().is_some_and(|line| line.trim() == "```") {
        body.pop();
    }
    Block::CodeBlock {
        language,
        code: body.join("\n"),
    }
}

/// Block quote: the `> ` marker is stripped from every line of the chunk
/// (the toolbar prefixes every selected line, so the parser mirrors that).
fn parse_quote_chunk(chunk: &str) -> Block {
    let text = chunk
        .lines()
        .map(|line| line.strip_prefix("> ").unwrap_or(line))
        .collect::<Vec<_>>()
        .join(" ");
    Block::Blockquote(parse_inlines(&text))
}

/// List chunk: non-blank lines become items, each stripped of its marker.
/// The list is ordered iff the first kept line carries a numeric marker.
fn parse_list_chunk(chunk: &str) -> Block {
    let lines: Vec<&str> = chunk.lines().filter(|line| !line.trim().is_empty()).collect();
    let ordered = lines.first().is_some_and(|line| ORDERED_MARKER.is_match(line));
    let items = lines
        .iter()
        .map(|line| {
            let text = line.strip_prefix("- ").unwrap_or_else(|| {
                ORDERED_MARKER
                    .find(line)
                    .map_or(*line, |m| &line[m.end()..])
            });
            parse_inlines(text)
        })
        .collect();
    Block::List { ordered, items }
}

/// Scan text left-to-right into inline runs.
///
/// At each position the patterns are tried in precedence order (bold,
/// italic, code, link); the first match is consumed whole, otherwise one
/// character joins the pending plain-text run. Left-to-right consumption
/// means the earliest opening delimiter owns everything up to its closer,
/// so `` `code with *stars*` `` is one code run, not code plus emphasis.
pub(crate) fn parse_inlines(text: &str) -> Vec<Inline> {
    let mut runs = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if let Some((run, consumed)) = match_run(rest, ch) {
            if !plain.is_empty() {
                runs.push(Inline::Text(std::mem::take(&mut plain)));
            }
            runs.push(run);
            rest = &rest[consumed..];
        } else {
            let len = ch.len_utf8();
            plain.push_str(&rest[..len]);
            rest = &rest[len..];
        }
    }
    if !plain.is_empty() {
        runs.push(Inline::Text(plain));
    }
    runs
}

/// Try to match an inline run at the start of `rest`. Returns the run and
/// the number of bytes it consumed.
fn match_run(rest: &str, first: char) -> Option<(Inline, usize)> {
    match first {
        '*' => BOLD
            .captures(rest)
            .map(|c| (Inline::Bold(c[1].to_string()), c[0].len()))
            .or_else(|| {
                ITALIC
                    .captures(rest)
                    .map(|c| (Inline::Italic(c[1].to_string()), c[0].len()))
            }),
        '`' => CODE
            .captures(rest)
            .map(|c| (Inline::Code(c[1].to_string()), c[0].len())),
        '[' => LINK.captures(rest).map(|c| {
            (
                Inline::Link {
                    text: c[1].to_string(),
                    url: c[2].to_string(),
                },
                c[0].len(),
            )
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    // --- Block classification ---

    #[test]
    fn test_empty_input_yields_no_blocks() {
        assert_eq!(parse(""), vec![]);
        assert_eq!(parse("\n\n\n\n"), vec![]);
        assert_eq!(parse("   \n\n \t "), vec![]);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            parse("# Title"),
            vec![Block::Heading {
                level: 1,
                inlines: vec![text("Title")],
            }]
        );
        assert_eq!(
            parse("## Sub"),
            vec![Block::Heading {
                level: 2,
                inlines: vec![text("Sub")],
            }]
        );
        assert_eq!(
            parse("### Deep"),
            vec![Block::Heading {
                level: 3,
                inlines: vec![text("Deep")],
            }]
        );
    }

    #[test]
    fn test_heading_then_paragraph() {
        assert_eq!(
            parse("## Sub\n\nplain text"),
            vec![
                Block::Heading {
                    level: 2,
                    inlines: vec![text("Sub")],
                },
                Block::Paragraph(vec![text("plain text")]),
            ]
        );
    }

    #[test]
    fn test_hash_without_space_is_paragraph() {
        assert_eq!(parse("#nope"), vec![Block::Paragraph(vec![text("#nope")])]);
    }

    #[test]
    fn test_code_block_with_language() {
        assert_eq!(
            parse("```js\nconst a=1;\n```"),
            vec![Block::CodeBlock {
                language: Some("js".to_string()),
                code: "const a=1;".to_string(),
            }]
        );
    }

    #[test]
    fn test_code_block_without_language() {
        assert_eq!(
            parse("```\nplain\n```"),
            vec![Block::CodeBlock {
                language: None,
                code: "plain".to_string(),
            }]
        );
    }

    #[test]
    fn test_code_block_skips_inline_parsing() {
        let blocks = parse("```\nlet x = *a* ** b;\n```");
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                language: None,
                code: "let x = *a* ** b;".to_string(),
            }]
        );
    }

    #[test]
    fn test_unterminated_code_fence_takes_rest() {
        assert_eq!(
            parse("```rust\nfn main() {}"),
            vec![Block::CodeBlock {
                language: Some("rust".to_string()),
                code: "fn main() {}".to_string(),
            }]
        );
    }

    #[test]
    fn test_code_block_preserves_inner_lines() {
        let blocks = parse("```\na\nb\nc\n```");
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                language: None,
                code: "a\nb\nc".to_string(),
            }]
        );
    }

    #[test]
    fn test_blockquote_single_line() {
        assert_eq!(
            parse("> wise words"),
            vec![Block::Blockquote(vec![text("wise words")])]
        );
    }

    #[test]
    fn test_blockquote_strips_marker_per_line() {
        assert_eq!(
            parse("> first\n> second"),
            vec![Block::Blockquote(vec![text("first second")])]
        );
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            parse("- a\n- b\n- c"),
            vec![Block::List {
                ordered: false,
                items: vec![vec![text("a")], vec![text("b")], vec![text("c")]],
            }]
        );
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            parse("1. a\n2. b"),
            vec![Block::List {
                ordered: true,
                items: vec![vec![text("a")], vec![text("b")]],
            }]
        );
    }

    #[test]
    fn test_list_ignores_blank_lines_inside_chunk() {
        // A single stray newline does not split the chunk; blank lines
        // within it are dropped rather than becoming empty items.
        assert_eq!(
            parse("- a\n \n- b"),
            vec![Block::List {
                ordered: false,
                items: vec![vec![text("a")], vec![text("b")]],
            }]
        );
    }

    #[test]
    fn test_list_items_carry_inline_runs() {
        assert_eq!(
            parse("- **bold** item"),
            vec![Block::List {
                ordered: false,
                items: vec![vec![Inline::Bold("bold".to_string()), text(" item")]],
            }]
        );
    }

    #[test]
    fn test_unrecognized_chunk_is_paragraph() {
        assert_eq!(
            parse("just some text"),
            vec![Block::Paragraph(vec![text("just some text")])]
        );
    }

    #[test]
    fn test_paragraph_newlines_collapse_to_spaces() {
        assert_eq!(
            parse("line one\nline two"),
            vec![Block::Paragraph(vec![text("line one line two")])]
        );
    }

    #[test]
    fn test_blocks_keep_source_order() {
        let blocks = parse("# A\n\npara\n\n- x\n\n> q");
        assert_eq!(blocks.len(), 4);
        assert!(matches!(blocks[0], Block::Heading { level: 1, .. }));
        assert!(matches!(blocks[1], Block::Paragraph(_)));
        assert!(matches!(blocks[2], Block::List { ordered: false, .. }));
        assert!(matches!(blocks[3], Block::Blockquote(_)));
    }

    // --- Inline runs ---

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(
            parse("**bold** and *italic*"),
            vec![Block::Paragraph(vec![
                Inline::Bold("bold".to_string()),
                text(" and "),
                Inline::Italic("italic".to_string()),
            ])]
        );
    }

    #[test]
    fn test_bold_markers_never_misread_as_italic() {
        assert_eq!(
            parse_inlines("**strong**"),
            vec![Inline::Bold("strong".to_string())]
        );
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(
            parse_inlines("use `cargo` here"),
            vec![
                text("use "),
                Inline::Code("cargo".to_string()),
                text(" here"),
            ]
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            parse_inlines("see [docs](https://example.com) now"),
            vec![
                text("see "),
                Inline::Link {
                    text: "docs".to_string(),
                    url: "https://example.com".to_string(),
                },
                text(" now"),
            ]
        );
    }

    #[test]
    fn test_code_owns_enclosed_stars() {
        // Pinned nesting case: the earlier backtick wins, stars inside a
        // code span stay literal.
        assert_eq!(
            parse_inlines("`code with *stars*`"),
            vec![Inline::Code("code with *stars*".to_string())]
        );
    }

    #[test]
    fn test_bold_inside_link_text_stays_literal() {
        assert_eq!(
            parse_inlines("[**b**](u)"),
            vec![Inline::Link {
                text: "**b**".to_string(),
                url: "u".to_string(),
            }]
        );
    }

    #[test]
    fn test_unmatched_markers_pass_through() {
        assert_eq!(parse_inlines("**open"), vec![text("**open")]);
        assert_eq!(parse_inlines("a ` b"), vec![text("a ` b")]);
        assert_eq!(parse_inlines("[text](no-close"), vec![text("[text](no-close")]);
    }

    #[test]
    fn test_adjacent_runs_without_plain_text() {
        assert_eq!(
            parse_inlines("**a***b*"),
            vec![
                Inline::Bold("a".to_string()),
                Inline::Italic("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_multibyte_text_survives() {
        assert_eq!(
            parse_inlines("café **crème**"),
            vec![text("café "), Inline::Bold("crème".to_string())]
        );
    }

    // --- Totality ---

    mod props {
        use proptest::prelude::*;

        use super::super::parse;

        proptest! {
            #[test]
            fn parse_never_panics(s in "\\PC*") {
                let _ = parse(&s);
            }

            #[test]
            fn parse_never_panics_on_marker_soup(
                s in "[-*`#>\\[\\]()0-9. \n]{0,200}"
            ) {
                let _ = parse(&s);
            }

            #[test]
            fn block_count_bounded_by_chunks(s in "\\PC{0,500}") {
                let blocks = parse(&s);
                prop_assert!(blocks.len() <= s.split("\n\n").count());
            }
        }
    }
}
