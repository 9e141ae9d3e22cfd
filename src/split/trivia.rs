//! Trivia policy for moved declarations and region name matching.
//!
//! Every trivia token falls into one [`TriviaKind`]; [`classify`] is the
//! single place deciding what survives a move.

use crate::parser::{GreenNode, GreenToken, NodeOrToken, SyntaxKind, SyntaxToken};

/// Closed set of trivia categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriviaKind {
    Whitespace,
    Newline,
    LineComment,
    BlockComment,
    DocComment,
    RegionStart,
    RegionEnd,
    OtherDirective,
}

impl TriviaKind {
    /// Category of a syntax kind, `None` for significant tokens
    pub fn from_syntax(kind: SyntaxKind) -> Option<Self> {
        Some(match kind {
            SyntaxKind::WHITESPACE => Self::Whitespace,
            SyntaxKind::NEWLINE => Self::Newline,
            SyntaxKind::LINE_COMMENT => Self::LineComment,
            SyntaxKind::BLOCK_COMMENT => Self::BlockComment,
            SyntaxKind::DOC_COMMENT => Self::DocComment,
            SyntaxKind::REGION_START => Self::RegionStart,
            SyntaxKind::REGION_END => Self::RegionEnd,
            SyntaxKind::DIRECTIVE => Self::OtherDirective,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriviaAction {
    Keep,
    Drop,
}

/// What happens to a trivia item attached to a moved member
pub fn classify(kind: TriviaKind) -> TriviaAction {
    match kind {
        TriviaKind::RegionStart | TriviaKind::RegionEnd => TriviaAction::Drop,
        TriviaKind::DocComment
        | TriviaKind::Whitespace
        | TriviaKind::Newline
        | TriviaKind::LineComment
        | TriviaKind::BlockComment
        | TriviaKind::OtherDirective => TriviaAction::Keep,
    }
}

/// Region names recognized by the split, in default priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionName {
    StandardCode,
    DesignerGeneratedCode,
    ComponentFields,
}

impl RegionName {
    pub const PRIORITY: [RegionName; 3] = [
        RegionName::StandardCode,
        RegionName::DesignerGeneratedCode,
        RegionName::ComponentFields,
    ];

    /// Pattern matched against marker text. `...` stands for any text.
    pub fn pattern(self) -> &'static str {
        match self {
            RegionName::StandardCode => "Standard ... code",
            RegionName::DesignerGeneratedCode => "Designer generated code",
            RegionName::ComponentFields => "Component fields",
        }
    }

    /// Whether a `#region` marker's raw text names this region
    pub fn matches(self, marker_text: &str) -> bool {
        matches_pattern(marker_text, self.pattern())
    }
}

/// Case-insensitive substring match where `...` in `pattern` is a gap.
///
/// The pattern's pieces must occur in `text` in order without overlapping.
pub fn matches_pattern(text: &str, pattern: &str) -> bool {
    let text = text.to_lowercase();
    let mut rest = text.as_str();
    for piece in pattern.split("...").map(str::trim).filter(|p| !p.is_empty()) {
        let piece = piece.to_lowercase();
        match rest.find(&piece) {
            Some(index) => rest = &rest[index + piece.len()..],
            None => return false,
        }
    }
    true
}

type GreenElement = NodeOrToken<GreenNode, GreenToken>;

/// Rebuild a run of trivia, dropping every token `drop` selects.
///
/// A dropped token takes the indentation in front of it and the line break
/// after it along, so no blank line is left where it stood.
pub fn filter_trivia<'a>(
    tokens: impl IntoIterator<Item = &'a SyntaxToken>,
    mut drop: impl FnMut(&SyntaxToken) -> bool,
) -> Vec<GreenElement> {
    let mut out: Vec<GreenElement> = Vec::new();
    let mut skip_newline = false;
    for token in tokens {
        if drop(token) {
            if matches!(
                out.last(),
                Some(NodeOrToken::Token(last))
                    if last.kind() == rowan::SyntaxKind::from(SyntaxKind::WHITESPACE)
            ) {
                out.pop();
            }
            skip_newline = true;
            continue;
        }
        if skip_newline && token.kind() == SyntaxKind::NEWLINE {
            skip_newline = false;
            continue;
        }
        skip_newline = false;
        out.push(NodeOrToken::Token(token.green().to_owned()));
    }
    out
}

/// Drop the trivia the move policy rejects
pub fn apply_move_policy<'a>(tokens: impl IntoIterator<Item = &'a SyntaxToken>) -> Vec<GreenElement> {
    filter_trivia(tokens, |token| {
        TriviaKind::from_syntax(token.kind()).map(classify) == Some(TriviaAction::Drop)
    })
}
