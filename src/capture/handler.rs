//! What a policy does with a fault it has decided to capture.

use core::any::{type_name, Any};
use core::fmt;
use core::marker::PhantomData;

use crate::macros::log_event;
use crate::types::{raise, Fault, KindMismatch};

/// Converts a captured [`Fault`] into the failure value a caller receives.
///
/// Runs only after the expected-failure filter has admitted the fault, so it
/// always sees the original raised kind.
pub trait FaultHandler {
    /// The failure type handed back to the caller.
    type Output;

    fn handle(self, fault: Fault) -> Self::Output;
}

/// Hands the fault back unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl FaultHandler for Identity {
    type Output = Fault;

    #[inline]
    fn handle(self, fault: Fault) -> Fault {
        fault
    }
}

/// Replaces the fault with the result of a caller-supplied catch handler.
#[derive(Clone, Copy)]
pub struct MapFault<F> {
    f: F,
}

impl<F> MapFault<F> {
    #[inline]
    pub const fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> fmt::Debug for MapFault<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapFault").finish_non_exhaustive()
    }
}

impl<F, E> FaultHandler for MapFault<F>
where
    F: FnOnce(Fault) -> E,
{
    type Output = E;

    #[inline]
    fn handle(self, fault: Fault) -> E {
        (self.f)(fault)
    }
}

/// Recovers the fault as the declared kind `E`.
///
/// A fault of any other kind is a contract violation and is raised again as
/// a [`KindMismatch`].
pub struct Downcast<E> {
    _kind: PhantomData<fn() -> E>,
}

impl<E> Downcast<E> {
    #[inline]
    pub const fn new() -> Self {
        Self { _kind: PhantomData }
    }
}

impl<E> Default for Downcast<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Downcast<E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Downcast<E> {}

impl<E> fmt::Debug for Downcast<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Downcast").field(&type_name::<E>()).finish()
    }
}

impl<E: Any> FaultHandler for Downcast<E> {
    type Output = E;

    fn handle(self, fault: Fault) -> E {
        match fault.downcast::<E>() {
            Ok(kind) => kind,
            Err(fault) => {
                let mismatch = KindMismatch::new(type_name::<E>(), fault);
                log_event!(error, error = %mismatch, "captured failure has an undeclared kind");
                raise(mismatch)
            },
        }
    }
}
