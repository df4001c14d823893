//! Folding many overlapping chains into one deduplicated tree.

use super::PathRecord;
use crate::tree::InjectorTree;

/// Merges a list of root-first chains into a single [`InjectorTree`].
///
/// Each chain is walked from the synthetic hidden root: at every step the
/// current slot's children are searched for one matching the entry's id
/// (id-only equality), descending into a match or appending a fresh slot
/// otherwise. Shared prefixes therefore collapse into shared slots, chains
/// branch at the first differing id, and a chain that is a strict prefix of
/// an earlier one simply stops at an existing slot. Children keep first-seen
/// order at every branching point, so the same input list always produces an
/// identical tree.
///
/// Every slot a chain visits is tagged with the chain's originating
/// inspected node, so after the fold a slot's origin is the last record
/// whose chain reached it; in particular, chains terminating at the same
/// slot overwrite each other, last one wins. Callers that need every origin
/// must aggregate before merging.
///
/// This function never fails: a malformed chain (say, one repeating an id)
/// produces an unspecified but well-formed tree rather than a panic.
///
/// # Examples
///
/// ```
/// use injectree::descriptor::InjectorDescriptor;
/// use injectree::forest::InspectedNode;
/// use injectree::paths::{PathRecord, merge_paths};
///
/// let node = InspectedNode::new("AppComponent");
/// let records = vec![
///     PathRecord {
///         node: &node,
///         chain: vec![
///             InjectorDescriptor::element("r", "Root"),
///             InjectorDescriptor::element("1", "A"),
///         ],
///     },
///     PathRecord {
///         node: &node,
///         chain: vec![
///             InjectorDescriptor::element("r", "Root"),
///             InjectorDescriptor::element("2", "B"),
///         ],
///     },
/// ];
///
/// let tree = merge_paths(&records);
/// let r = tree.children(tree.root())[0];
/// assert_eq!(tree.node(r).injector.id, "r");
/// assert_eq!(tree.children(r).len(), 2);
/// ```
#[must_use]
pub fn merge_paths<'a>(records: &[PathRecord<'a>]) -> InjectorTree<'a> {
    let mut tree = InjectorTree::new();

    for record in records {
        let mut cursor = tree.root();
        for injector in &record.chain {
            cursor = tree.find_or_create_child(cursor, injector);
            tree.set_origin(cursor, record.node);
        }
    }

    tracing::debug!(chains = records.len(), slots = tree.len(), "merged resolution paths");
    tree
}
