//! Core identifier types for the injector topology model.
//!
//! This module defines [`InjectorKind`], the scope category attached to every
//! injector record the inspected application reports. Kinds drive the chain
//! splitter (element vs. environment sub-chains) and mark the merger's
//! synthetic root, but play no role in injector identity — two descriptors
//! are the same injector iff their ids match, whatever their kinds say.
//!
//! # Examples
//!
//! ```rust
//! use injectree::types::InjectorKind;
//!
//! let element = InjectorKind::Element;
//! let environment = InjectorKind::Environment;
//!
//! assert!(element.is_element());
//! assert!(!environment.is_element());
//! println!("scope: {}", environment);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The scope category of an injector in the inspected application.
///
/// The inspected application's dependency-injection system distinguishes
/// injectors scoped to a UI element instance from injectors scoped to a
/// broader module/platform context, with a sentinel null injector terminating
/// every resolution path. [`Hidden`](Self::Hidden) is reserved for the
/// synthetic root the chain merger places above all real chains; it never
/// appears in input data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectorKind {
    /// An injector scoped to a UI element/component instance.
    Element,

    /// An injector scoped to a module/platform context, ancestor to one or
    /// more element injectors.
    Environment,

    /// The root sentinel injector with no parent, terminating every chain.
    Null,

    /// Reserved kind for the merger's synthetic root node.
    ///
    /// Never reported by the inspected application and never matches a real
    /// injector, so real chains attach strictly below it.
    Hidden,
}

impl InjectorKind {
    /// Returns `true` for [`Element`](Self::Element) injectors.
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element)
    }

    /// Returns `true` for [`Environment`](Self::Environment) injectors.
    #[must_use]
    pub fn is_environment(&self) -> bool {
        matches!(self, Self::Environment)
    }

    /// Returns `true` for the [`Null`](Self::Null) root sentinel.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for the merger's [`Hidden`](Self::Hidden) root kind.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl fmt::Display for InjectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element => write!(f, "element"),
            Self::Environment => write!(f, "environment"),
            Self::Null => write!(f, "null"),
            Self::Hidden => write!(f, "hidden"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Checks that each kind predicate matches exactly its own variant.
    fn test_kind_predicates() {
        assert!(InjectorKind::Element.is_element());
        assert!(InjectorKind::Environment.is_environment());
        assert!(InjectorKind::Null.is_null());
        assert!(InjectorKind::Hidden.is_hidden());

        assert!(!InjectorKind::Element.is_environment());
        assert!(!InjectorKind::Environment.is_element());
        assert!(!InjectorKind::Null.is_hidden());
    }

    #[test]
    /// Validates the lowercase wire form used by the inspected application.
    fn test_kind_serialization() {
        let json = serde_json::to_string(&InjectorKind::Environment).unwrap();
        assert_eq!(json, "\"environment\"");

        let parsed: InjectorKind = serde_json::from_str("\"element\"").unwrap();
        assert_eq!(parsed, InjectorKind::Element);
    }

    #[test]
    /// Display forms are stable; the rendering layer keys styling off them.
    fn test_kind_display() {
        assert_eq!(InjectorKind::Element.to_string(), "element");
        assert_eq!(InjectorKind::Environment.to_string(), "environment");
        assert_eq!(InjectorKind::Null.to_string(), "null");
        assert_eq!(InjectorKind::Hidden.to_string(), "hidden");
    }
}
