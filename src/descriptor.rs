//! Injector descriptor records reported by the inspected application.
//!
//! A descriptor is the only representation of an injector this crate ever
//! sees: an id, a human-readable name, and an [`InjectorKind`]. Descriptors
//! arrive over the inspection wire as JSON and are treated as immutable
//! values from then on.
//!
//! # Identity
//!
//! Equality, ordering into trees, and index keys all go through the id alone.
//! Two descriptors with the same id are the same injector even when their
//! names or kinds disagree; this is a deliberate simplifying invariant of the
//! topology model, encoded directly in the `PartialEq`/`Hash` impls below.
//!
//! # Examples
//!
//! ```
//! use injectree::descriptor::InjectorDescriptor;
//!
//! let a = InjectorDescriptor::element("12", "TodosComponent");
//! let b = InjectorDescriptor::environment("12", "SomethingElse");
//!
//! // Same id, same injector, regardless of name/kind.
//! assert_eq!(a, b);
//! ```

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::types::InjectorKind;

/// A single injector as reported by the inspected application's runtime.
///
/// # Equality
///
/// Compares by [`id`](Self::id) alone. `Hash` is consistent with `PartialEq`
/// (also id-only), so descriptors can key hash maps safely.
///
/// # Examples
///
/// ```
/// use injectree::descriptor::InjectorDescriptor;
/// use injectree::types::InjectorKind;
///
/// let env = InjectorDescriptor::environment("2", "AppModule");
/// assert_eq!(env.kind, InjectorKind::Environment);
/// assert_eq!(env.name, "AppModule");
/// ```
#[derive(Clone, Debug, Eq, Serialize, Deserialize)]
pub struct InjectorDescriptor {
    /// Runtime-assigned identifier, unique within one inspected application.
    pub id: String,
    /// Human-readable injector name, display-only.
    pub name: String,
    /// Scope category of this injector.
    pub kind: InjectorKind,
}

impl InjectorDescriptor {
    /// Id carried by the merger's synthetic hidden root.
    ///
    /// The empty string is reserved: the inspected runtime never assigns it,
    /// so the hidden root can never match a real chain entry.
    pub const HIDDEN_ROOT_ID: &'static str = "";

    /// Creates a descriptor with an explicit kind.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: InjectorKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    /// Creates an element-scoped injector descriptor.
    ///
    /// # Examples
    /// ```
    /// use injectree::descriptor::InjectorDescriptor;
    ///
    /// let el = InjectorDescriptor::element("9", "AppTodoComponent");
    /// assert!(el.kind.is_element());
    /// ```
    #[must_use]
    pub fn element(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, InjectorKind::Element)
    }

    /// Creates an environment-scoped injector descriptor.
    ///
    /// # Examples
    /// ```
    /// use injectree::descriptor::InjectorDescriptor;
    ///
    /// let env = InjectorDescriptor::environment("7", "DemoAppModule");
    /// assert!(env.kind.is_environment());
    /// ```
    #[must_use]
    pub fn environment(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, InjectorKind::Environment)
    }

    /// Creates the null-injector sentinel that terminates a resolution path.
    #[must_use]
    pub fn null_root(id: impl Into<String>) -> Self {
        Self::new(id, "Null Injector", InjectorKind::Null)
    }

    /// Creates the synthetic hidden root used by the chain merger.
    #[must_use]
    pub fn hidden_root() -> Self {
        Self::new(Self::HIDDEN_ROOT_ID, "", InjectorKind::Hidden)
    }

    /// Returns `true` if both descriptors refer to the same injector.
    ///
    /// Alias for `==`; reads better at call sites that compare across
    /// differently-kinded records.
    #[must_use]
    pub fn same_injector(&self, other: &InjectorDescriptor) -> bool {
        self.id == other.id
    }
}

impl PartialEq for InjectorDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Hash for InjectorDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
