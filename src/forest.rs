//! Input model: the inspected application's component forest.
//!
//! The directive-forest provider (the part of the surrounding tool that talks
//! to the inspected application over its message-passing protocol) delivers a
//! forest of [`InspectedNode`] values. Each node independently reports its own
//! injector resolution path in `local_chain`, ordered nearest-first: the
//! node's own injector first, the root null injector last. Everything in this
//! crate reads that forest without mutating it.
//!
//! # Examples
//!
//! ```
//! use injectree::descriptor::InjectorDescriptor;
//! use injectree::forest::InspectedNode;
//!
//! let node = InspectedNode::new("AppComponent")
//!     .with_chain(vec![
//!         InjectorDescriptor::element("1", "AppComponent"),
//!         InjectorDescriptor::environment("2", "AppModule"),
//!         InjectorDescriptor::null_root("0"),
//!     ])
//!     .with_child(InspectedNode::new("TodosComponent"));
//!
//! assert_eq!(node.children.len(), 1);
//! assert_eq!(node.local_chain.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::descriptor::InjectorDescriptor;

/// A node in the inspected application's live component/directive tree.
///
/// Owned by the forest; read-only to this crate's transforms.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InspectedNode {
    /// Display label for this node (usually the component name).
    pub label: String,
    /// The component hosted on this node's element, if any.
    pub host: Option<InjectorDescriptor>,
    /// Directives attached to this node's element.
    pub directives: Vec<InjectorDescriptor>,
    /// Child nodes, in document order.
    pub children: Vec<InspectedNode>,
    /// This node's injector resolution path, nearest-first: its own injector
    /// first, the root null injector last.
    pub local_chain: Vec<InjectorDescriptor>,
}

impl InspectedNode {
    /// Creates a node with the given label and no chain, host, or children.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the hosted component descriptor.
    #[must_use]
    pub fn with_host(mut self, host: InjectorDescriptor) -> Self {
        self.host = Some(host);
        self
    }

    /// Appends an attached directive descriptor.
    #[must_use]
    pub fn with_directive(mut self, directive: InjectorDescriptor) -> Self {
        self.directives.push(directive);
        self
    }

    /// Sets the nearest-first resolution path reported for this node.
    #[must_use]
    pub fn with_chain(mut self, chain: Vec<InjectorDescriptor>) -> Self {
        self.local_chain = chain;
        self
    }

    /// Appends a child node.
    #[must_use]
    pub fn with_child(mut self, child: InspectedNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Total number of nodes in a forest, roots and all descendants.
#[must_use]
pub fn node_count(forest: &[InspectedNode]) -> usize {
    forest.iter().map(|n| 1 + node_count(&n.children)).sum()
}
