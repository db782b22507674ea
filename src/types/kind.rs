//! Failure kinds and the expected-failure set.
//!
//! A capture policy decides whether a fault becomes data by checking its kind
//! against an [`ExpectedFailures`] set. The empty set admits every kind.
//!
//! # Examples
//!
//! ```
//! use error_or_value::{failures, ExpectedFailures, Fault};
//!
//! #[derive(Debug)]
//! struct ArgumentError;
//! #[derive(Debug)]
//! struct InvalidOperationError;
//!
//! let expected = failures![InvalidOperationError];
//! assert!(!expected.admits(&Fault::new(ArgumentError)));
//! assert!(ExpectedFailures::any().admits(&Fault::new(ArgumentError)));
//! ```

use core::any::{type_name, Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

use smallvec::SmallVec;

use crate::types::Fault;

/// Identity of a failure kind: the [`TypeId`] of the raised payload.
#[derive(Clone, Copy)]
pub struct FailureKind {
    id: TypeId,
    name: &'static str,
}

impl FailureKind {
    /// Returns the kind for payloads of type `K`.
    #[must_use]
    #[inline]
    pub fn of<K: Any>() -> Self {
        Self { id: TypeId::of::<K>(), name: type_name::<K>() }
    }

    #[must_use]
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Type name of the kind, for diagnostics only.
    #[must_use]
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if `fault` is of this kind.
    #[must_use]
    #[inline]
    pub fn matches(&self, fault: &Fault) -> bool {
        fault.kind_id() == self.id
    }
}

impl PartialEq for FailureKind {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FailureKind {}

impl Hash for FailureKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FailureKind").field(&self.name).finish()
    }
}

impl fmt::Display for FailureKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The set of failure kinds a caller is prepared to treat as data.
///
/// Order is irrelevant and duplicates are ignored. An empty set admits every
/// kind, so a policy without a filter never re-raises.
///
/// Backed by a [`SmallVec`] since filters are almost always a handful of
/// kinds.
#[derive(Clone, Default)]
pub struct ExpectedFailures {
    kinds: SmallVec<[FailureKind; 4]>,
}

impl ExpectedFailures {
    /// Creates an empty set, which admits every kind.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self { kinds: SmallVec::new() }
    }

    /// Alias for [`new`](Self::new) that reads better at call sites.
    #[must_use]
    #[inline]
    pub fn any() -> Self {
        Self::new()
    }

    /// Adds the kind `K` to the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or_value::{ExpectedFailures, Fault};
    ///
    /// let expected = ExpectedFailures::new().with::<std::io::Error>().with::<String>();
    /// assert_eq!(expected.len(), 2);
    /// assert!(expected.admits(&Fault::new(String::from("oops"))));
    /// ```
    #[must_use]
    pub fn with<K: Any>(mut self) -> Self {
        self.insert(FailureKind::of::<K>());
        self
    }

    /// Inserts a kind, returning `false` if it was already present.
    pub fn insert(&mut self, kind: FailureKind) -> bool {
        if self.contains_kind(kind) {
            return false;
        }
        self.kinds.push(kind);
        true
    }

    #[must_use]
    #[inline]
    pub fn contains_kind(&self, kind: FailureKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Returns `true` if a policy with this set captures `fault`.
    ///
    /// This is the default-open rule: no declared kinds means everything is
    /// admitted.
    #[must_use]
    pub fn admits(&self, fault: &Fault) -> bool {
        self.kinds.is_empty() || self.kinds.iter().any(|kind| kind.matches(fault))
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = FailureKind> + '_ {
        self.kinds.iter().copied()
    }
}

impl PartialEq for ExpectedFailures {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|kind| other.contains_kind(kind))
    }
}

impl Eq for ExpectedFailures {}

impl FromIterator<FailureKind> for ExpectedFailures {
    fn from_iter<I: IntoIterator<Item = FailureKind>>(iter: I) -> Self {
        let mut expected = Self::new();
        expected.extend(iter);
        expected
    }
}

impl Extend<FailureKind> for ExpectedFailures {
    fn extend<I: IntoIterator<Item = FailureKind>>(&mut self, iter: I) {
        for kind in iter {
            self.insert(kind);
        }
    }
}

impl fmt::Debug for ExpectedFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.kinds.iter()).finish()
    }
}

impl fmt::Display for ExpectedFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kinds.is_empty() {
            return f.write_str("{any}");
        }
        f.write_str("{")?;
        for (i, kind) in self.kinds.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(kind.name())?;
        }
        f.write_str("}")
    }
}

/// Contract violation: a captured fault had to become the declared kind
/// without a handler, and its runtime kind was something else.
///
/// Raised by unwinding from [`Catch::downcast`](crate::Catch::downcast)
/// policies so the mismatch is never mistaken for a captured value.
#[derive(Debug)]
pub struct KindMismatch {
    expected: &'static str,
    fault: Fault,
}

impl KindMismatch {
    #[must_use]
    pub fn new(expected: &'static str, fault: Fault) -> Self {
        Self { expected, fault }
    }

    /// Type name of the declared target kind.
    #[must_use]
    #[inline]
    pub const fn expected(&self) -> &'static str {
        self.expected
    }

    #[must_use]
    #[inline]
    pub const fn fault(&self) -> &Fault {
        &self.fault
    }

    #[must_use]
    #[inline]
    pub fn into_fault(self) -> Fault {
        self.fault
    }
}

impl fmt::Display for KindMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "captured failure ({}) is not of the declared kind `{}`",
            self.fault, self.expected
        )
    }
}

impl std::error::Error for KindMismatch {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.fault)
    }
}
