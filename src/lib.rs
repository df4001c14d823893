//! # Injectree: Injector Topology Reconstruction
//!
//! Injectree rebuilds the dependency-injection topology of an inspected UI
//! application from the raw, per-node "resolution path" data its runtime
//! reports. Each inspected node independently describes its own chain of
//! ancestor injectors nearest-first; this crate normalizes those chains to
//! root-first order, splits them into element- and environment-scoped
//! sub-chains, and merges many overlapping chains into one deduplicated tree
//! ready for rendering.
//!
//! ## Core Concepts
//!
//! - **Descriptors**: id/name/kind records standing in for injectors; equal
//!   iff their ids match
//! - **Forest**: the inspected application's component tree, each node
//!   carrying its nearest-first `local_chain`
//! - **Path records**: one root-first chain per node, extracted pre-order
//! - **Split paths**: element/environment partitions plus the
//!   starting-element → environment-chain index
//! - **Injector tree**: the merged topology, an arena with stable child
//!   ordering
//!
//! ## Quick Start
//!
//! ```
//! use injectree::descriptor::InjectorDescriptor;
//! use injectree::forest::InspectedNode;
//! use injectree::paths::{merge_paths, resolution_paths, split_injector_paths};
//!
//! // One inspected node, reporting its injectors nearest-first.
//! let forest = vec![InspectedNode::new("AppComponent").with_chain(vec![
//!     InjectorDescriptor::element("1", "AppComponent"),
//!     InjectorDescriptor::environment("2", "AppModule"),
//!     InjectorDescriptor::null_root("0"),
//! ])];
//!
//! // Extract root-first chains, one per node.
//! let records = resolution_paths(&forest);
//! assert_eq!(records[0].chain[0].id, "0");
//!
//! // Partition into element-/environment-scoped chains.
//! let split = split_injector_paths(&records);
//! assert_eq!(split.element_paths[0].chain[0].id, "1");
//! assert_eq!(split.starting_element_index["1"][0].name, "AppModule");
//!
//! // Merge the element chains into a renderable tree.
//! let tree = merge_paths(&split.element_paths);
//! let top = tree.children(tree.root())[0];
//! assert_eq!(tree.node(top).injector.id, "1");
//! ```
//!
//! ## Guarantees
//!
//! Every transform is a synchronous, pure computation: inputs are never
//! mutated, outputs are built fresh per call, and no state survives between
//! calls. All transforms are total over well-formed input and degrade
//! gracefully on malformed input; use [`validate::validate_forest`] when a
//! hard error is preferable.
//!
//! ## Module Guide
//!
//! - [`types`] - Injector kind enumeration
//! - [`descriptor`] - Injector descriptor records and id-based identity
//! - [`forest`] - The inspected application's component forest (input model)
//! - [`paths`] - The extract / split / merge transforms
//! - [`tree`] - The merged injector tree arena and rendering helpers
//! - [`validate`] - Opt-in strict input validation

pub mod descriptor;
pub mod forest;
pub mod paths;
pub mod tree;
pub mod types;
pub mod validate;
