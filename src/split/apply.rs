//! Tree construction for a planned split.
//!
//! Both output trees are built from the untouched input; the input tree is
//! never modified and nothing is returned until both roots exist.

use rowan::NodeOrToken;

use super::plan::SplitPlan;
use super::trivia::{apply_move_policy, filter_trivia};
use crate::parser::{
    AstNode, GreenNode, GreenToken, NamespaceDecl, SyntaxKind, SyntaxNode, SyntaxToken, TypeDecl,
    leading_trivia,
};
use crate::syntax::factory;

type GreenElement = NodeOrToken<GreenNode, GreenToken>;

/// Unformatted roots of the two output documents
#[derive(Debug, Clone)]
pub(super) struct SplitTrees {
    pub primary: GreenNode,
    pub secondary: GreenNode,
}

/// Line break used by the document, `\n` when it has none
pub(super) fn document_newline(node: &SyntaxNode) -> String {
    node.ancestors()
        .last()
        .unwrap_or_else(|| node.clone())
        .descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == SyntaxKind::NEWLINE)
        .map(|t| t.text().to_string())
        .unwrap_or_else(|| "\n".to_string())
}

pub(super) fn apply(decl: &TypeDecl, plan: &SplitPlan) -> SplitTrees {
    let newline = document_newline(decl.syntax());
    let mut primary_type = factory::with_partial_modifier(decl);
    let mut moved = Vec::new();

    if let Some(body) = decl.body() {
        let (new_body, mut members) = rebuild_body(body.syntax(), plan);
        // Moved members join the new declaration in claim order, one blank
        // line between region groups
        for region in &plan.regions {
            let separate = !moved.is_empty();
            for (n, &index) in region.members.iter().enumerate() {
                let Some(position) = members.iter().position(|(i, _)| *i == index) else {
                    continue;
                };
                let (_, mut green) = members.swap_remove(position);
                if separate && n == 0 {
                    green = green.insert_child(0, newline_token(&newline));
                }
                moved.push(with_trailing_newline(green, &newline));
            }
        }
        let inserted = primary_type.children().len() - decl.syntax().green().children().len();
        primary_type = primary_type.replace_child(
            body.syntax().index() + inserted,
            NodeOrToken::Node(new_body),
        );
    }

    tracing::debug!(
        "[SPLIT] moving {} member(s) out of '{}'",
        moved.len(),
        decl.name().unwrap_or_default()
    );

    let primary = decl.syntax().replace_with(primary_type);
    let secondary_type = factory::partial_type_decl(decl, &moved, &newline);
    let secondary = factory::source_file(&[wrap_in_namespace(decl, secondary_type, &newline)]);

    SplitTrees { primary, secondary }
}

/// The body without moved members and matched markers, plus the moved
/// members (by index) with their leading trivia passed through the move policy.
fn rebuild_body(body: &SyntaxNode, plan: &SplitPlan) -> (GreenNode, Vec<(usize, GreenNode)>) {
    let mut children: Vec<GreenElement> = Vec::new();
    let mut moved = Vec::new();
    let mut tokens: Vec<SyntaxToken> = Vec::new();
    let mut member_index = 0;

    for element in body.children_with_tokens() {
        match element {
            NodeOrToken::Token(token) => tokens.push(token),
            NodeOrToken::Node(node) => {
                children.extend(filter_trivia(&tokens, |t| plan.is_removed_marker(t)));
                tokens.clear();

                if !node.kind().is_member() {
                    children.push(NodeOrToken::Node(node.green().into_owned()));
                    continue;
                }
                let index = member_index;
                member_index += 1;
                if plan.is_moved(index) {
                    moved.push((index, rewrite_leading(&node, |leading| apply_move_policy(leading))));
                } else {
                    let green = rewrite_leading(&node, |leading| {
                        filter_trivia(leading, |t| plan.is_removed_marker(t))
                    });
                    children.push(NodeOrToken::Node(green));
                }
            }
        }
    }
    children.extend(filter_trivia(&tokens, |t| plan.is_removed_marker(t)));

    (GreenNode::new(body.kind().into(), children), moved)
}

/// Replace `node`'s leading trivia with `rewrite`'s output
fn rewrite_leading(
    node: &SyntaxNode,
    rewrite: impl FnOnce(&[SyntaxToken]) -> Vec<GreenElement>,
) -> GreenNode {
    let green = node.green().into_owned();
    let leading = leading_trivia(node);
    if leading.is_empty() {
        return green;
    }
    green.splice_children(0..leading.len(), rewrite(&leading))
}

fn with_trailing_newline(green: GreenNode, newline: &str) -> GreenNode {
    let ends_with_newline = SyntaxNode::new_root(green.clone())
        .last_token()
        .is_some_and(|t| t.kind() == SyntaxKind::NEWLINE);
    if ends_with_newline {
        return green;
    }
    let end = green.children().len();
    green.insert_child(end, newline_token(newline))
}

fn newline_token(newline: &str) -> GreenElement {
    NodeOrToken::Token(GreenToken::new(SyntaxKind::NEWLINE.into(), newline))
}

/// Wrap the new declaration in a namespace named like the one the original
/// is declared in, when its direct container is a namespace.
fn wrap_in_namespace(decl: &TypeDecl, secondary_type: GreenNode, newline: &str) -> GreenNode {
    if decl.parent_type().is_some() {
        return secondary_type;
    }
    let namespaces: Vec<NamespaceDecl> = decl.enclosing_namespaces().collect();
    let Some(innermost) = namespaces.first() else {
        return secondary_type;
    };

    let file_scoped = innermost.is_file_scoped();
    let name = namespaces
        .iter()
        .rev()
        .filter_map(|ns| ns.name())
        .collect::<Vec<_>>()
        .join(".");
    factory::namespace_decl(&name, &[secondary_type], file_scoped, newline)
}
