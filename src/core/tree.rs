//! Typed queries over a declarative chart tree.
//!
//! A chart is declared as a forest of [`ChartNode`]s. Groups only nest other
//! nodes; queries walk them depth-first in declaration order.

use serde::{Deserialize, Serialize};

use crate::core::{LegendDeclaration, SeriesDeclaration, TooltipDeclaration};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartNode {
    Series(SeriesDeclaration),
    Legend(LegendDeclaration),
    Tooltip(TooltipDeclaration),
    Group(Vec<ChartNode>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Series,
    Legend,
    Tooltip,
    Group,
}

impl ChartNode {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Series(_) => NodeKind::Series,
            Self::Legend(_) => NodeKind::Legend,
            Self::Tooltip(_) => NodeKind::Tooltip,
            Self::Group(_) => NodeKind::Group,
        }
    }
}

/// Declaration types that can be extracted from a [`ChartNode`].
pub trait DeclarationNode {
    const KIND: NodeKind;

    fn from_node(node: &ChartNode) -> Option<&Self>;
}

impl DeclarationNode for SeriesDeclaration {
    const KIND: NodeKind = NodeKind::Series;

    fn from_node(node: &ChartNode) -> Option<&Self> {
        match node {
            ChartNode::Series(series) => Some(series),
            _ => None,
        }
    }
}

impl DeclarationNode for LegendDeclaration {
    const KIND: NodeKind = NodeKind::Legend;

    fn from_node(node: &ChartNode) -> Option<&Self> {
        match node {
            ChartNode::Legend(legend) => Some(legend),
            _ => None,
        }
    }
}

impl DeclarationNode for TooltipDeclaration {
    const KIND: NodeKind = NodeKind::Tooltip;

    fn from_node(node: &ChartNode) -> Option<&Self> {
        match node {
            ChartNode::Tooltip(tooltip) => Some(tooltip),
            _ => None,
        }
    }
}

/// Returns every node of `kind`, depth-first and in declaration order.
#[must_use]
pub fn find_all_by_type(tree: &[ChartNode], kind: NodeKind) -> Vec<&ChartNode> {
    let mut found = Vec::new();
    walk(tree, &mut |node| {
        if node.kind() == kind {
            found.push(node);
        }
        true
    });
    found
}

/// Returns the first node of `kind` in the same order as [`find_all_by_type`].
#[must_use]
pub fn find_child_by_type(tree: &[ChartNode], kind: NodeKind) -> Option<&ChartNode> {
    let mut found = None;
    walk(tree, &mut |node| {
        if node.kind() == kind {
            found = Some(node);
            return false;
        }
        true
    });
    found
}

#[must_use]
pub fn find_all<T: DeclarationNode>(tree: &[ChartNode]) -> Vec<&T> {
    find_all_by_type(tree, T::KIND)
        .into_iter()
        .filter_map(T::from_node)
        .collect()
}

#[must_use]
pub fn find_first<T: DeclarationNode>(tree: &[ChartNode]) -> Option<&T> {
    find_child_by_type(tree, T::KIND).and_then(T::from_node)
}

// Visitor returns `false` to stop the walk.
fn walk<'a>(tree: &'a [ChartNode], visit: &mut impl FnMut(&'a ChartNode) -> bool) -> bool {
    for node in tree {
        if !visit(node) {
            return false;
        }
        if let ChartNode::Group(children) = node {
            if !walk(children, visit) {
                return false;
            }
        }
    }
    true
}
