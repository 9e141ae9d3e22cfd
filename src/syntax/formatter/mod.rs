//! Rowan-based formatter for C# sources
//!
//! Normalizes whitespace and indentation while keeping every significant
//! token, comment and directive exactly as written. Line structure comes from
//! the source: the formatter re-indents lines, it never joins or breaks them.

mod options;


use crate::parser::{SyntaxKind, SyntaxNode, parse};
pub use options::FormatOptions;
use tokio_util::sync::CancellationToken;

/// Parse and format C# source code with cancellation support.
/// Returns `None` if the cancellation token is signalled.
pub fn format_async(
    source: &str,
    options: &FormatOptions,
    cancel: &CancellationToken,
) -> Option<String> {
    if cancel.is_cancelled() {
        return None;
    }
    let root = parse(source).syntax();
    format_node(&root, options, cancel)
}

/// Format an existing tree.
/// Returns `None` if the cancellation token is signalled.
pub fn format_node(
    node: &SyntaxNode,
    options: &FormatOptions,
    cancel: &CancellationToken,
) -> Option<String> {
    let lines = render(node, options, cancel)?;
    let newline = node
        .descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == SyntaxKind::NEWLINE)
        .map(|t| t.text().to_string())
        .unwrap_or_else(|| "\n".to_string());

    let lines = tidy_blank_lines(lines);
    if lines.is_empty() {
        return Some(String::new());
    }

    let mut output = String::new();
    for line in &lines {
        output.push_str(&line.text);
        output.push_str(&newline);
    }
    Some(output)
}

/// One output line. Verbatim lines are continuation lines of a multi-line
/// token (block comment, verbatim string) and are emitted untouched.
#[derive(Debug)]
struct Line {
    text: String,
    verbatim: bool,
    /// The last non-trivia token on the line is `{`
    opens_block: bool,
}

impl Line {
    fn is_blank(&self) -> bool {
        !self.verbatim && self.text.is_empty()
    }
}

fn render(
    node: &SyntaxNode,
    options: &FormatOptions,
    cancel: &CancellationToken,
) -> Option<Vec<Line>> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_verbatim = false;
    let mut current_opens = false;
    let mut line_started = false;
    let mut pending_space = false;
    let mut indent_level: usize = 0;
    let mut paren_depth: usize = 0;

    for token in node.descendants_with_tokens().filter_map(|e| e.into_token()) {
        if cancel.is_cancelled() {
            return None;
        }

        let kind = token.kind();
        let text = token.text();

        match kind {
            SyntaxKind::NEWLINE => {
                lines.push(Line {
                    text: std::mem::take(&mut current),
                    verbatim: current_verbatim,
                    opens_block: current_opens,
                });
                current_verbatim = false;
                current_opens = false;
                line_started = false;
                pending_space = false;
                continue;
            }
            SyntaxKind::WHITESPACE => {
                // Collapse runs of spaces between tokens, drop indentation
                if line_started {
                    pending_space = true;
                }
                continue;
            }
            SyntaxKind::R_BRACE => indent_level = indent_level.saturating_sub(1),
            _ => {}
        }

        if !line_started {
            // Non-region directives conventionally sit at column zero
            if kind != SyntaxKind::DIRECTIVE {
                let continuation = usize::from(paren_depth > 0);
                current.push_str(&options.indent(indent_level + continuation));
            }
            line_started = true;
        } else if pending_space {
            current.push(' ');
        }
        pending_space = false;

        let mut segments = text.split('\n');
        if let Some(first) = segments.next() {
            current.push_str(first.strip_suffix('\r').unwrap_or(first));
        }
        for segment in segments {
            lines.push(Line {
                text: std::mem::take(&mut current),
                verbatim: current_verbatim,
                opens_block: false,
            });
            current.push_str(segment.strip_suffix('\r').unwrap_or(segment));
            current_verbatim = true;
        }
        if !kind.is_trivia() {
            current_opens = kind == SyntaxKind::L_BRACE;
        }

        match kind {
            SyntaxKind::L_BRACE => indent_level += 1,
            SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET => paren_depth += 1,
            SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET => {
                paren_depth = paren_depth.saturating_sub(1)
            }
            _ => {}
        }
    }

    if line_started {
        lines.push(Line {
            text: current,
            verbatim: current_verbatim,
            opens_block: current_opens,
        });
    }

    Some(lines)
}

/// Drop leading and trailing blank lines, collapse blank-line runs to one,
/// and drop blank lines right after an opening brace or before a closing one.
fn tidy_blank_lines(lines: Vec<Line>) -> Vec<Line> {
    let mut out: Vec<Line> = Vec::with_capacity(lines.len());
    for line in lines {
        if line.is_blank() {
            match out.last() {
                None => continue,
                Some(prev) if prev.is_blank() => continue,
                Some(prev) if prev.opens_block => continue,
                _ => out.push(line),
            }
        } else {
            if !line.verbatim && line.text.trim_start().starts_with('}') {
                while out.last().is_some_and(Line::is_blank) {
                    out.pop();
                }
            }
            out.push(line);
        }
    }
    while out.last().is_some_and(Line::is_blank) {
        out.pop();
    }
    out
}
