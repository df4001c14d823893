//! Resolution-path transforms over the inspected forest.
//!
//! This is the core of the crate: three pure transforms that take the raw,
//! per-node resolution paths reported by the inspected application and
//! re-shape them for rendering.
//!
//! - [`resolution_paths`]: walks the forest pre-order and normalizes each
//!   node's nearest-first path into a root-first [`PathRecord`].
//! - [`split_injector_paths`]: partitions each chain into element-only and
//!   environment-only sub-chains and builds the starting-element →
//!   environment-chain index.
//! - [`merge_paths`]: folds many overlapping chains into one deduplicated
//!   [`InjectorTree`](crate::tree::InjectorTree).
//!
//! Data flows one way: forest → extractor → records → splitter; separately,
//! any record list (raw or split) → merger → tree. Every transform builds
//! fresh output and leaves its input untouched.

mod extract;
mod merge;
mod split;

pub use extract::resolution_paths;
pub use merge::merge_paths;
pub use split::{SplitPaths, split_injector_paths};

use crate::descriptor::InjectorDescriptor;
use crate::forest::InspectedNode;

/// A root-first injector chain paired with the node that reported it.
///
/// The chain runs from the injector hierarchy's root down to the injector
/// nearest the node, with no duplicate ids in well-formed input. The node is
/// borrowed from the forest; records never take ownership of it.
#[derive(Clone, Debug)]
pub struct PathRecord<'a> {
    /// The inspected node whose resolution path produced this chain.
    pub node: &'a InspectedNode,
    /// Root-first injector chain for that node.
    pub chain: Vec<InjectorDescriptor>,
}
