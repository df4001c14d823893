//! Forest traversal into per-node resolution paths.

use super::PathRecord;
use crate::forest::InspectedNode;

/// Walks a forest pre-order and emits one root-first chain per node.
///
/// Every node — roots and all nested descendants — contributes exactly one
/// [`PathRecord`], in pre-order: a node before its children, children in
/// their given order, depth-first. A node's chain is its `local_chain`
/// reversed (nearest-first becomes root-first); no deduplication or merging
/// happens across nodes at this stage, so chains may repeat ids that also
/// appear in an ancestor's chain.
///
/// Output order is a contract: downstream consumers key legends and
/// first-seen indexes off it.
///
/// # Examples
///
/// ```
/// use injectree::descriptor::InjectorDescriptor;
/// use injectree::forest::InspectedNode;
/// use injectree::paths::resolution_paths;
///
/// let forest = vec![InspectedNode::new("AppComponent").with_chain(vec![
///     InjectorDescriptor::element("1", "AppComponent"),
///     InjectorDescriptor::environment("2", "AppModule"),
///     InjectorDescriptor::null_root("0"),
/// ])];
///
/// let records = resolution_paths(&forest);
/// assert_eq!(records.len(), 1);
/// // Nearest-first input comes out root-first.
/// assert_eq!(records[0].chain[0].id, "0");
/// assert_eq!(records[0].chain[2].id, "1");
/// ```
#[must_use]
pub fn resolution_paths(forest: &[InspectedNode]) -> Vec<PathRecord<'_>> {
    let mut records = Vec::new();
    collect(forest, &mut records);
    tracing::debug!(records = records.len(), "extracted resolution paths");
    records
}

fn collect<'a>(nodes: &'a [InspectedNode], out: &mut Vec<PathRecord<'a>>) {
    for node in nodes {
        let chain = node.local_chain.iter().rev().cloned().collect();
        out.push(PathRecord { node, chain });
        collect(&node.children, out);
    }
}
