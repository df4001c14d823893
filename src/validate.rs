//! Opt-in strict validation of inspected-forest input.
//!
//! The path transforms are total: malformed input degrades to empty or
//! oddly-shaped output instead of failing. Callers that want a hard error on
//! malformed forests — a node reporting no injectors, or an id repeated
//! within one resolution path — run [`validate_forest`] first.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::forest::InspectedNode;

/// A malformed resolution path found during strict validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The provider guarantees every node a non-empty chain; this node broke
    /// that guarantee.
    #[error("inspected node `{label}` reported an empty resolution path")]
    EmptyChain {
        /// Display label of the offending node.
        label: String,
    },

    /// An injector id occurred more than once within a single node's path.
    #[error("inspected node `{label}` repeats injector `{id}` in its resolution path")]
    DuplicateId {
        /// Display label of the offending node.
        label: String,
        /// The repeated injector id.
        id: String,
    },
}

/// Checks every node in the forest for an empty or id-repeating resolution
/// path, depth-first, returning the first violation found.
///
/// # Errors
///
/// Returns [`ChainError::EmptyChain`] or [`ChainError::DuplicateId`] for the
/// first offending node in pre-order.
///
/// # Examples
///
/// ```
/// use injectree::descriptor::InjectorDescriptor;
/// use injectree::forest::InspectedNode;
/// use injectree::validate::{ChainError, validate_forest};
///
/// let ok = vec![InspectedNode::new("a").with_chain(vec![
///     InjectorDescriptor::element("1", "A"),
///     InjectorDescriptor::null_root("0"),
/// ])];
/// assert!(validate_forest(&ok).is_ok());
///
/// let empty = vec![InspectedNode::new("b")];
/// assert_eq!(
///     validate_forest(&empty),
///     Err(ChainError::EmptyChain { label: "b".into() })
/// );
/// ```
pub fn validate_forest(forest: &[InspectedNode]) -> Result<(), ChainError> {
    for node in forest {
        if node.local_chain.is_empty() {
            return Err(ChainError::EmptyChain {
                label: node.label.clone(),
            });
        }
        let mut seen = FxHashSet::default();
        for injector in &node.local_chain {
            if !seen.insert(injector.id.as_str()) {
                return Err(ChainError::DuplicateId {
                    label: node.label.clone(),
                    id: injector.id.clone(),
                });
            }
        }
        validate_forest(&node.children)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::InjectorDescriptor;

    fn chained(label: &str, ids: &[&str]) -> InspectedNode {
        InspectedNode::new(label).with_chain(
            ids.iter()
                .map(|id| InjectorDescriptor::element(*id, format!("El{id}")))
                .collect(),
        )
    }

    #[test]
    fn test_accepts_well_formed_forest() {
        let forest = vec![
            chained("a", &["1", "2"]).with_child(chained("b", &["3", "1", "2"])),
        ];
        assert_eq!(validate_forest(&forest), Ok(()));
    }

    #[test]
    fn test_rejects_empty_chain_in_descendant() {
        let forest = vec![chained("a", &["1"]).with_child(InspectedNode::new("b"))];
        assert_eq!(
            validate_forest(&forest),
            Err(ChainError::EmptyChain { label: "b".into() })
        );
    }

    #[test]
    fn test_rejects_duplicate_id_within_one_chain() {
        let forest = vec![chained("a", &["1", "2", "1"])];
        let err = validate_forest(&forest).unwrap_err();
        assert_eq!(
            err,
            ChainError::DuplicateId {
                label: "a".into(),
                id: "1".into()
            }
        );
        assert!(err.to_string().contains("repeats injector `1`"));
    }
}
