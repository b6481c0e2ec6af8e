use crate::core::models::tree::{Merge, MergeTree};
use serde::Serialize;

/// Renderer-agnostic description of the family tree: the left-to-right leaf
/// order of the drawn dendrogram plus the raw merge records. Carries no
/// algorithmic content beyond the merge tree itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dendrogram {
    pub leaf_order: Vec<String>,
    pub merges: Vec<Merge>,
}

/// Serializes the merge tree to a Newick string.
///
/// Each merge renders as `(left:h,right:h)` with `h = distance / 2` applied
/// identically to both children. This equal halving is the UPGMA ultrametric
/// convention (both children are assumed equidistant from their parent) and
/// is a modeling choice, not a general tree-construction law.
pub fn to_newick(tree: &MergeTree, labels: &[String], precision: usize) -> String {
    let n = tree.leaf_count();
    if n == 0 {
        return ";".to_string();
    }

    // Node ids index this vector directly: leaves first, then one rendered
    // subtree per merge.
    let mut nodes: Vec<String> = labels.to_vec();
    for merge in tree.merges() {
        let half = merge.distance / 2.0;
        nodes.push(format!(
            "({}:{:.prec$},{}:{:.prec$})",
            nodes[merge.left],
            half,
            nodes[merge.right],
            half,
            prec = precision,
        ));
    }
    match nodes.last() {
        Some(root) => format!("{};", root),
        None => ";".to_string(),
    }
}

/// Describes the tree for interactive rendering: depth-first leaf order (left
/// child first) and the merge records.
pub fn describe(tree: &MergeTree, labels: &[String]) -> Dendrogram {
    let mut leaf_order = Vec::with_capacity(tree.leaf_count());
    if let Some(root) = tree.root() {
        collect_leaves(tree, root, labels, &mut leaf_order);
    }
    Dendrogram {
        leaf_order,
        merges: tree.merges().to_vec(),
    }
}

fn collect_leaves(tree: &MergeTree, node: usize, labels: &[String], out: &mut Vec<String>) {
    let n = tree.leaf_count();
    if node < n {
        out.push(labels[node].clone());
    } else {
        let merge = &tree.merges()[node - n];
        collect_leaves(tree, merge.left, labels, out);
        collect_leaves(tree, merge.right, labels, out);
    }
}
