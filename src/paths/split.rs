//! Chain splitting into element- and environment-scoped sub-chains.

use rustc_hash::FxHashMap;

use super::PathRecord;
use crate::descriptor::InjectorDescriptor;

/// Output of [`split_injector_paths`].
///
/// `element_paths` and `environment_paths` stay index-aligned 1:1 with the
/// input record list: a chain left empty by filtering still produces a
/// record, never a gap. The index is queryable by element id in O(1).
#[derive(Clone, Debug, Default)]
pub struct SplitPaths<'a> {
    /// One record per input, chain filtered to element injectors only,
    /// relative order preserved.
    pub element_paths: Vec<PathRecord<'a>>,
    /// One record per input, chain filtered to environment injectors only,
    /// relative order preserved.
    pub environment_paths: Vec<PathRecord<'a>>,
    /// Maps a chain's starting element injector id (the element injector its
    /// resolution begins at, nearest the node) to the root-first environment
    /// chain that precedes the chain's element section.
    pub starting_element_index: FxHashMap<String, Vec<InjectorDescriptor>>,
}

/// Partitions each root-first chain into element-only and environment-only
/// sub-chains and records which environment chain each starting element
/// resolves through.
///
/// Null-injector entries are dropped from both outputs and never indexed.
/// Index population is first-writer-wins: once a starting element id is
/// present, later chains with the same id leave it untouched. That is safe
/// because in the upstream injector hierarchy every chain starting at the
/// same element resolves through the same environment prefix; this function
/// does not re-check that invariant.
///
/// # Examples
///
/// ```
/// use injectree::descriptor::InjectorDescriptor;
/// use injectree::forest::InspectedNode;
/// use injectree::paths::{resolution_paths, split_injector_paths};
///
/// let forest = vec![InspectedNode::new("AppComponent").with_chain(vec![
///     InjectorDescriptor::element("1", "AppComponent"),
///     InjectorDescriptor::environment("2", "AppModule"),
///     InjectorDescriptor::null_root("0"),
/// ])];
/// let records = resolution_paths(&forest);
///
/// let split = split_injector_paths(&records);
/// assert_eq!(split.element_paths[0].chain.len(), 1);
/// assert_eq!(split.environment_paths[0].chain.len(), 1);
/// assert_eq!(split.starting_element_index["1"][0].id, "2");
/// ```
#[must_use]
pub fn split_injector_paths<'a>(records: &[PathRecord<'a>]) -> SplitPaths<'a> {
    let mut split = SplitPaths::default();

    for record in records {
        let element_chain: Vec<InjectorDescriptor> = record
            .chain
            .iter()
            .filter(|d| d.kind.is_element())
            .cloned()
            .collect();
        let environment_chain: Vec<InjectorDescriptor> = record
            .chain
            .iter()
            .filter(|d| d.kind.is_environment())
            .cloned()
            .collect();

        // The chain is root-first, so the injector a node's resolution
        // starts at is the last element entry.
        if let Some(starting_element) = element_chain.last() {
            let env_prefix: Vec<InjectorDescriptor> = record
                .chain
                .iter()
                .take_while(|d| !d.kind.is_element())
                .filter(|d| d.kind.is_environment())
                .cloned()
                .collect();
            split
                .starting_element_index
                .entry(starting_element.id.clone())
                .or_insert(env_prefix);
        }

        split.element_paths.push(PathRecord {
            node: record.node,
            chain: element_chain,
        });
        split.environment_paths.push(PathRecord {
            node: record.node,
            chain: environment_chain,
        });
    }

    tracing::debug!(
        records = records.len(),
        indexed = split.starting_element_index.len(),
        "split injector paths"
    );
    split
}
