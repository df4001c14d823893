//! Arena-backed injector tree produced by the chain merger.
//!
//! The merged topology is stored as an arena of slots addressed by
//! [`NodeIdx`] rather than as a pointer graph: parents are `Option<NodeIdx>`
//! back-references, child lists are append-only index vectors, and each slot
//! keeps a child-lookup map so "find-or-create child by id" is a constant
//! time arena operation. This keeps the structure cycle-free by construction
//! and cheap to hand to a rendering layer that needs stable child ordering.
//!
//! Alongside the arena live the two small rendering helpers: the
//! ancestor-chain reader ([`InjectorTree::ancestor_ids`]) and the connector
//! key generator ([`edge_ids`]).
//!
//! # Examples
//!
//! ```
//! use injectree::descriptor::InjectorDescriptor;
//! use injectree::tree::{InjectorTree, edge_ids};
//!
//! let mut tree = InjectorTree::new();
//! let root = tree.root();
//! let r = tree.find_or_create_child(root, &InjectorDescriptor::element("r", "Root"));
//! let leaf = tree.find_or_create_child(r, &InjectorDescriptor::element("1", "Child"));
//!
//! let ids = tree.ancestor_ids(leaf);
//! assert_eq!(ids, vec!["1", "r", ""]);
//! assert_eq!(edge_ids(&ids), vec!["1-to-r", "r-to-"]);
//! ```

use rustc_hash::FxHashMap;

use crate::descriptor::InjectorDescriptor;
use crate::forest::InspectedNode;

/// Index of a slot in an [`InjectorTree`] arena.
///
/// Only ever minted by the arena that owns the slot; indices from one tree
/// must not be used against another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeIdx(usize);

impl NodeIdx {
    /// The synthetic hidden root, present in every tree.
    pub const ROOT: NodeIdx = NodeIdx(0);
}

/// One slot of the merged injector tree.
#[derive(Clone, Debug)]
pub struct InjectorTreeNode<'a> {
    /// The injector this slot represents.
    pub injector: InjectorDescriptor,
    /// Back-reference to the parent slot; `None` only for the hidden root.
    pub parent: Option<NodeIdx>,
    /// Children in first-seen order. Append-only, never reordered.
    pub children: Vec<NodeIdx>,
    /// The inspected node whose chain last terminated at this slot.
    pub origin: Option<&'a InspectedNode>,
    /// Child lookup by injector id, kept in sync with `children`.
    child_index: FxHashMap<String, NodeIdx>,
}

/// The merged, deduplicated injector topology.
///
/// Built once per merge call and owned exclusively by the caller afterwards.
/// Slot zero is always the synthetic hidden root
/// ([`InjectorDescriptor::hidden_root`]); real chains attach strictly below
/// it.
#[derive(Clone, Debug)]
pub struct InjectorTree<'a> {
    slots: Vec<InjectorTreeNode<'a>>,
}

impl<'a> InjectorTree<'a> {
    /// Creates a tree holding only the synthetic hidden root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![InjectorTreeNode {
                injector: InjectorDescriptor::hidden_root(),
                parent: None,
                children: Vec::new(),
                origin: None,
                child_index: FxHashMap::default(),
            }],
        }
    }

    /// Index of the hidden root slot.
    #[must_use]
    pub fn root(&self) -> NodeIdx {
        NodeIdx::ROOT
    }

    /// Number of slots, hidden root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// `true` when the tree holds nothing but the hidden root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.len() == 1
    }

    /// Borrows the slot at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` was not minted by this tree.
    #[must_use]
    pub fn node(&self, idx: NodeIdx) -> &InjectorTreeNode<'a> {
        &self.slots[idx.0]
    }

    /// Borrows the slot at `idx`, or `None` for a foreign index.
    #[must_use]
    pub fn get(&self, idx: NodeIdx) -> Option<&InjectorTreeNode<'a>> {
        self.slots.get(idx.0)
    }

    /// Children of `idx` in first-seen order.
    #[must_use]
    pub fn children(&self, idx: NodeIdx) -> &[NodeIdx] {
        &self.slots[idx.0].children
    }

    /// Looks up the child of `parent` carrying `injector`'s id, creating and
    /// appending a fresh slot if none exists yet.
    ///
    /// Matching is by id alone, so an existing child is reused even when its
    /// recorded name or kind differs from `injector`'s. Child order is
    /// insertion order and is never revised afterwards.
    pub fn find_or_create_child(&mut self, parent: NodeIdx, injector: &InjectorDescriptor) -> NodeIdx {
        if let Some(&existing) = self.slots[parent.0].child_index.get(injector.id.as_str()) {
            return existing;
        }
        let idx = NodeIdx(self.slots.len());
        self.slots.push(InjectorTreeNode {
            injector: injector.clone(),
            parent: Some(parent),
            children: Vec::new(),
            origin: None,
            child_index: FxHashMap::default(),
        });
        let parent_slot = &mut self.slots[parent.0];
        parent_slot.children.push(idx);
        parent_slot.child_index.insert(injector.id.clone(), idx);
        idx
    }

    /// Records `origin` as the inspected node whose chain terminated at
    /// `idx`, replacing any earlier origin.
    pub fn set_origin(&mut self, idx: NodeIdx, origin: &'a InspectedNode) {
        self.slots[idx.0].origin = Some(origin);
    }

    /// Collects injector ids from `idx` up to the tree's root, start node
    /// first.
    ///
    /// The walk follows `parent` back-references and terminates at the slot
    /// with no parent, so the hidden root's id (the empty string) is always
    /// the final entry.
    #[must_use]
    pub fn ancestor_ids(&self, idx: NodeIdx) -> Vec<String> {
        let mut ids = Vec::new();
        let mut cursor = Some(idx);
        while let Some(current) = cursor {
            let slot = &self.slots[current.0];
            ids.push(slot.injector.id.clone());
            cursor = slot.parent;
        }
        ids
    }
}

impl Default for InjectorTree<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Produces one connector key per consecutive pair of ids, in traversal
/// order: `["1", "2", "3"]` yields `["1-to-2", "2-to-3"]`.
///
/// Sequences of length zero or one yield an empty result. Ids are combined
/// verbatim, with no normalization.
///
/// # Examples
///
/// ```
/// use injectree::tree::edge_ids;
///
/// assert_eq!(edge_ids(&["1", "2", "3"]), vec!["1-to-2", "2-to-3"]);
/// assert!(edge_ids(&["1"]).is_empty());
/// let none: [&str; 0] = [];
/// assert!(edge_ids(&none).is_empty());
/// ```
#[must_use]
pub fn edge_ids<S: AsRef<str>>(ids: &[S]) -> Vec<String> {
    ids.windows(2)
        .map(|pair| format!("{}-to-{}", pair[0].as_ref(), pair[1].as_ref()))
        .collect()
}
