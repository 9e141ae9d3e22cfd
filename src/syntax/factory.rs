//! Green tree construction for synthesized declarations.
//!
//! Builders here produce raw, minimally spaced trees. Layout is left to the
//! formatter, so only line breaks are significant in what they emit.

use rowan::NodeOrToken;

use crate::parser::{AstNode, GreenNode, GreenToken, SyntaxKind, TypeDecl, tokenize};

type GreenElement = NodeOrToken<GreenNode, GreenToken>;

fn token(kind: SyntaxKind, text: &str) -> GreenElement {
    NodeOrToken::Token(GreenToken::new(kind.into(), text))
}

fn node(kind: SyntaxKind, children: Vec<GreenElement>) -> GreenNode {
    GreenNode::new(kind.into(), children)
}

/// Run `text` through the lexer, yielding one green token per lexeme
fn lexed(text: &str) -> impl Iterator<Item = GreenElement> + '_ {
    tokenize(text).into_iter().map(|t| token(t.kind, t.text))
}

/// The declaration with a `partial` modifier placed right before its keyword.
///
/// Returns the declaration unchanged when it is already partial, or when it
/// has no keyword to anchor the modifier to.
pub fn with_partial_modifier(decl: &TypeDecl) -> GreenNode {
    let green = decl.syntax().green().into_owned();
    if decl.is_partial() {
        return green;
    }
    let Some(keyword) = decl.keyword_token() else {
        return green;
    };
    let index = keyword.index();
    green.splice_children(
        index..index,
        [
            token(SyntaxKind::PARTIAL_KW, "partial"),
            token(SyntaxKind::WHITESPACE, " "),
        ],
    )
}

/// A new `partial` declaration mirroring `original`'s keyword, name and type
/// parameters, holding `members` in order. No modifiers besides `partial`,
/// no attributes and no base list are carried over.
pub fn partial_type_decl(original: &TypeDecl, members: &[GreenNode], newline: &str) -> GreenNode {
    let mut children = vec![
        token(SyntaxKind::PARTIAL_KW, "partial"),
        token(SyntaxKind::WHITESPACE, " "),
    ];

    match original.keyword_token() {
        Some(keyword) => {
            children.push(token(keyword.kind(), keyword.text()));
            // `record class` / `record struct`
            let record_kind = keyword
                .siblings_with_tokens(rowan::Direction::Next)
                .skip(1)
                .filter_map(|e| e.into_token())
                .find(|t| !t.kind().is_trivia())
                .filter(|t| {
                    keyword.kind() == SyntaxKind::IDENT
                        && matches!(t.kind(), SyntaxKind::CLASS_KW | SyntaxKind::STRUCT_KW)
                });
            if let Some(next) = record_kind {
                children.push(token(SyntaxKind::WHITESPACE, " "));
                children.push(token(next.kind(), next.text()));
            }
        }
        None => children.push(token(SyntaxKind::CLASS_KW, "class")),
    }
    children.push(token(SyntaxKind::WHITESPACE, " "));

    let name = original.name().unwrap_or_default();
    children.push(NodeOrToken::Node(node(
        SyntaxKind::NAME,
        vec![token(SyntaxKind::IDENT, &name)],
    )));

    if let Some(params) = original.type_params_text() {
        children.extend(lexed(&params));
    }
    children.push(token(SyntaxKind::NEWLINE, newline));

    let mut body = vec![
        token(SyntaxKind::L_BRACE, "{"),
        token(SyntaxKind::NEWLINE, newline),
    ];
    body.extend(members.iter().cloned().map(NodeOrToken::Node));
    body.push(token(SyntaxKind::R_BRACE, "}"));
    children.push(NodeOrToken::Node(node(SyntaxKind::TYPE_BODY, body)));
    children.push(token(SyntaxKind::NEWLINE, newline));

    node(SyntaxKind::TYPE_DECL, children)
}

/// `namespace <name> { items }`, or `namespace <name>;` followed by the
/// items when `file_scoped` is set
pub fn namespace_decl(name: &str, items: &[GreenNode], file_scoped: bool, newline: &str) -> GreenNode {
    let mut children = vec![
        token(SyntaxKind::NAMESPACE_KW, "namespace"),
        token(SyntaxKind::WHITESPACE, " "),
        NodeOrToken::Node(node(SyntaxKind::NAME, lexed(name).collect())),
    ];
    let items = items.iter().cloned().map(NodeOrToken::Node);

    if file_scoped {
        children.push(token(SyntaxKind::SEMICOLON, ";"));
        children.push(token(SyntaxKind::NEWLINE, newline));
        let mut body = vec![token(SyntaxKind::NEWLINE, newline)];
        body.extend(items);
        children.push(NodeOrToken::Node(node(SyntaxKind::NAMESPACE_BODY, body)));
    } else {
        children.push(token(SyntaxKind::NEWLINE, newline));
        let mut body = vec![
            token(SyntaxKind::L_BRACE, "{"),
            token(SyntaxKind::NEWLINE, newline),
        ];
        body.extend(items);
        body.push(token(SyntaxKind::R_BRACE, "}"));
        children.push(NodeOrToken::Node(node(SyntaxKind::NAMESPACE_BODY, body)));
        children.push(token(SyntaxKind::NEWLINE, newline));
    }

    node(SyntaxKind::NAMESPACE_DECL, children)
}

/// A compilation unit holding `items`
pub fn source_file(items: &[GreenNode]) -> GreenNode {
    node(
        SyntaxKind::SOURCE_FILE,
        items.iter().cloned().map(NodeOrToken::Node).collect(),
    )
}
