//! Split planning: which members move and which markers disappear.
//!
//! Planning reads the type body once and decides everything up front, so
//! tree construction never has to look at partially rewritten syntax.

use rustc_hash::FxHashSet;

use super::trivia::RegionName;
use crate::base::{TextRange, TextSize};
use crate::parser::{AstNode, Member, SyntaxKind, SyntaxNode, SyntaxToken, TypeDecl, leading_trivia};

/// One region name resolved to a marker pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMatch {
    pub region: RegionName,
    /// Range of the `#region` marker
    pub start: TextRange,
    /// Range of the paired `#endregion` marker
    pub end: TextRange,
    /// Indices of the direct members claimed by this region, in document order
    pub members: Vec<usize>,
}

/// The outcome of planning a split over one type declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitPlan {
    pub regions: Vec<RegionMatch>,
    removed_markers: FxHashSet<TextSize>,
}

#[derive(Debug)]
struct Marker {
    token: SyntaxToken,
    is_start: bool,
}

impl SplitPlan {
    /// Plan the split of `decl` along `regions`, in priority order.
    pub fn new(decl: &TypeDecl, regions: &[RegionName]) -> Self {
        let mut plan = Self::default();
        let Some(body) = decl.body() else {
            return plan;
        };

        let members: Vec<Member> = body.members().collect();
        let markers = collect_markers(body.syntax());
        let mut claimed = vec![false; members.len()];
        let mut used_starts = FxHashSet::default();

        for &region in regions {
            let Some(start) = markers.iter().enumerate().position(|(i, m)| {
                m.is_start && !used_starts.contains(&i) && region.matches(m.token.text())
            }) else {
                tracing::trace!("[SPLIT] region '{}' not present", region.pattern());
                continue;
            };
            // Nearest following end marker, whatever it closes
            let Some(end) = markers[start + 1..]
                .iter()
                .position(|m| !m.is_start)
                .map(|offset| start + 1 + offset)
            else {
                tracing::debug!(
                    "[SPLIT] region '{}' has no end marker, skipped",
                    markers[start].token.text().trim()
                );
                continue;
            };
            used_starts.insert(start);

            let start_range = markers[start].token.text_range();
            let end_range = markers[end].token.text_range();
            let mut region_members = Vec::new();
            for (index, member) in members.iter().enumerate() {
                if claimed[index] {
                    continue;
                }
                let Some(range) = significant_range(member.syntax()) else {
                    continue;
                };
                if range.start() > start_range.start() && range.end() <= end_range.start() {
                    claimed[index] = true;
                    region_members.push(index);
                }
            }

            tracing::debug!(
                "[SPLIT] region '{}' claims {} member(s)",
                markers[start].token.text().trim(),
                region_members.len()
            );
            plan.removed_markers.insert(start_range.start());
            plan.removed_markers.insert(end_range.start());
            plan.regions.push(RegionMatch {
                region,
                start: start_range,
                end: end_range,
                members: region_members,
            });
        }

        plan
    }

    /// Member indices to move, in the order they join the new declaration
    pub fn moved_members(&self) -> impl Iterator<Item = usize> + '_ {
        self.regions.iter().flat_map(|r| r.members.iter().copied())
    }

    pub fn is_moved(&self, index: usize) -> bool {
        self.moved_members().any(|i| i == index)
    }

    /// Whether `token` is a matched marker that must be removed
    pub fn is_removed_marker(&self, token: &SyntaxToken) -> bool {
        token.kind().is_region_marker() && self.removed_markers.contains(&token.text_range().start())
    }

    pub fn matched_regions(&self) -> impl Iterator<Item = RegionName> + '_ {
        self.regions.iter().map(|r| r.region)
    }
}

/// Region markers at member level of a type body, in document order:
/// body trivia after `{` and before `}`, and each member's leading trivia.
fn collect_markers(body: &SyntaxNode) -> Vec<Marker> {
    let mut markers = Vec::new();
    let mut push = |token: SyntaxToken| {
        if token.kind().is_region_marker() {
            markers.push(Marker {
                is_start: token.kind() == SyntaxKind::REGION_START,
                token,
            });
        }
    };
    for element in body.children_with_tokens() {
        match element {
            rowan::NodeOrToken::Token(token) => push(token),
            rowan::NodeOrToken::Node(node) => leading_trivia(&node).into_iter().for_each(&mut push),
        }
    }
    markers
}

/// Range from the first to the last non-trivia token of `node`
fn significant_range(node: &SyntaxNode) -> Option<TextRange> {
    let mut tokens = node
        .descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| !t.kind().is_trivia());
    let first = tokens.next()?;
    let last = tokens.last().unwrap_or_else(|| first.clone());
    Some(TextRange::new(
        first.text_range().start(),
        last.text_range().end(),
    ))
}
