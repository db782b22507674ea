//! The captured failure signal.
//!
//! A [`Fault`] owns whatever was raised while an operation ran. In Rust the
//! only stack-unwinding signal is a panic, so a fault is the panic payload
//! plus whatever the crate knows about its kind.
//!
//! # Examples
//!
//! ```
//! use error_or_value::Fault;
//!
//! #[derive(Debug, PartialEq)]
//! struct ArgumentError(&'static str);
//!
//! let fault = Fault::new(ArgumentError("name"));
//! assert!(fault.is::<ArgumentError>());
//! assert_eq!(fault.downcast::<ArgumentError>().ok(), Some(ArgumentError("name")));
//! ```

use core::any::{type_name, Any, TypeId};
use core::cell::Cell;
use core::fmt;
use std::panic;

thread_local! {
    // Kind of the most recent `raise` or `resume` on this thread, consumed by
    // the next `Fault::from_panic`.
    static RAISED_KIND: Cell<Option<(TypeId, &'static str)>> = const { Cell::new(None) };
}

fn record_raised_kind(id: TypeId, name: &'static str) {
    let _ = RAISED_KIND.try_with(|slot| slot.set(Some((id, name))));
}

fn take_raised_kind(id: TypeId) -> Option<&'static str> {
    RAISED_KIND
        .try_with(Cell::take)
        .ok()
        .flatten()
        .filter(|(raised, _)| *raised == id)
        .map(|(_, name)| name)
}

/// Owned payload of a raised failure.
///
/// The concrete type of the payload is the failure's *kind*; all filtering in
/// this crate compares kinds by [`TypeId`].
///
/// Faults are produced by the capture executor from unwinding payloads, or
/// built directly with [`Fault::new`]. A fault can be re-raised unchanged
/// with [`Fault::resume`].
///
/// `Fault` is `Send + Sync`, so it converts into
/// `Box<dyn Error + Send + Sync>` like any other error.
pub struct Fault {
    payload: Box<dyn Any + Send + 'static>,
    kind_name: Option<&'static str>,
}

impl Fault {
    /// Creates a fault whose kind is `K`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or_value::Fault;
    ///
    /// let fault = Fault::new(String::from("disk full"));
    /// assert_eq!(fault.message(), Some("disk full"));
    /// ```
    #[must_use]
    pub fn new<K: Any + Send>(kind: K) -> Self {
        Self { payload: Box::new(kind), kind_name: Some(type_name::<K>()) }
    }

    /// Wraps a payload obtained from an unwinding boundary.
    ///
    /// The kind's type name is known for the two string payloads produced by
    /// `panic!`, and for kinds raised with [`raise`] or [`Fault::resume`] when
    /// the payload is caught on the thread that raised it. Other kinds are
    /// still identified by [`TypeId`] but report no name.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let raised = take_raised_kind((*payload).type_id());
        let kind_name = if payload.is::<&'static str>() {
            Some(type_name::<&'static str>())
        } else if payload.is::<String>() {
            Some(type_name::<String>())
        } else {
            raised
        };
        Self { payload, kind_name }
    }

    /// Returns `true` if the fault's kind is `K`.
    #[must_use]
    #[inline]
    pub fn is<K: Any>(&self) -> bool {
        self.payload.is::<K>()
    }

    /// Returns the [`TypeId`] of the fault's kind.
    #[must_use]
    #[inline]
    pub fn kind_id(&self) -> TypeId {
        (*self.payload).type_id()
    }

    /// Returns the type name of the fault's kind, when known.
    #[must_use]
    #[inline]
    pub const fn kind_name(&self) -> Option<&'static str> {
        self.kind_name
    }

    /// Borrows the payload as `K`, if that is the fault's kind.
    ///
    /// `K` must be `Sync` because a `&Fault` may be shared across threads.
    #[must_use]
    #[inline]
    pub fn downcast_ref<K: Any + Sync>(&self) -> Option<&K> {
        self.payload.downcast_ref::<K>()
    }

    /// Recovers the payload as `K`, handing the fault back untouched on a
    /// kind mismatch.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or_value::Fault;
    ///
    /// let fault = Fault::new(7_u8);
    /// let fault = fault.downcast::<i32>().unwrap_err();
    /// assert_eq!(fault.downcast::<u8>().ok(), Some(7));
    /// ```
    pub fn downcast<K: Any>(self) -> Result<K, Self> {
        let Self { payload, kind_name } = self;
        match payload.downcast::<K>() {
            Ok(kind) => Ok(*kind),
            Err(payload) => Err(Self { payload, kind_name }),
        }
    }

    /// Returns the message carried by string payloads (`panic!("...")`,
    /// `panic!("{}", ..)` or a raised `String`).
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            return Some(message);
        }
        self.payload.downcast_ref::<String>().map(String::as_str)
    }

    /// Gives up the raw payload.
    #[must_use]
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Re-raises the fault with its original payload.
    ///
    /// The panic hook is not invoked a second time.
    pub fn resume(self) -> ! {
        if let Some(name) = self.kind_name {
            record_raised_kind(self.kind_id(), name);
        }
        panic::resume_unwind(self.payload)
    }
}

// SAFETY: a shared `&Fault` only reaches the payload through its `TypeId`,
// through `downcast_ref::<K>` with `K: Sync`, or as `&str` for the two string
// payload kinds. No `&` path exposes a non-`Sync` value.
unsafe impl Sync for Fault {}

impl From<Box<dyn Any + Send + 'static>> for Fault {
    #[inline]
    fn from(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self::from_panic(payload)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("kind", &self.kind_name.unwrap_or("<erased>"))
            .field("message", &self.message())
            .finish()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.message(), self.kind_name) {
            (Some(message), _) => f.write_str(message),
            (None, Some(name)) => write!(f, "failure of kind `{}`", name),
            (None, None) => f.write_str("failure of an unnamed kind"),
        }
    }
}

impl std::error::Error for Fault {}

/// Raises `kind` as a failure signal.
///
/// The payload is `kind` itself, so a capture filter declared with
/// [`ExpectedFailures::with::<K>()`](crate::ExpectedFailures::with) matches it.
///
/// # Examples
///
/// ```
/// use error_or_value::{raise, try_call};
///
/// #[derive(Debug)]
/// struct ArgumentError;
///
/// let result = try_call(|| -> u32 { raise(ArgumentError) });
/// assert!(result.error().is_some_and(|fault| fault.is::<ArgumentError>()));
/// ```
#[track_caller]
pub fn raise<K: Any + Send>(kind: K) -> ! {
    record_raised_kind(TypeId::of::<K>(), type_name::<K>());
    panic::panic_any(kind)
}
