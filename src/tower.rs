//! Tower integration for error-or-value.
//!
//! This module provides a Tower `Layer` and `Service` that capture faults
//! raised by a wrapped service, either while building the response future in
//! `call` or while polling it, and return them as errors.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! error-or-value = { version = "0.3", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use error_or_value::tower::CatchLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(CatchLayer::new())
//!     .service(my_service);
//! ```

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::async_ext::CatchFuture;
use crate::capture::{Catch, FaultHandler, Identity};
use crate::types::{ErrorOr, Fault};

/// Error returned by [`CatchService`]: either the inner service's own error
/// or a captured fault.
#[derive(Debug)]
pub enum ServiceFault<E, F = Fault> {
    /// The inner service returned an error.
    Inner(E),
    /// The inner service raised a fault that the policy captured.
    Panicked(F),
}

impl<E, F> ServiceFault<E, F> {
    #[inline]
    pub const fn is_inner(&self) -> bool {
        matches!(self, Self::Inner(_))
    }

    #[inline]
    pub const fn is_panicked(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }

    #[inline]
    pub fn into_inner(self) -> Option<E> {
        match self {
            Self::Inner(error) => Some(error),
            Self::Panicked(_) => None,
        }
    }

    #[inline]
    pub fn into_fault(self) -> Option<F> {
        match self {
            Self::Inner(_) => None,
            Self::Panicked(fault) => Some(fault),
        }
    }
}

impl<E: fmt::Display, F: fmt::Display> fmt::Display for ServiceFault<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inner(error) => write!(f, "service error: {}", error),
            Self::Panicked(fault) => write!(f, "service panicked: {}", fault),
        }
    }
}

impl<E, F> std::error::Error for ServiceFault<E, F>
where
    E: std::error::Error + 'static,
    F: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Inner(error) => Some(error),
            Self::Panicked(fault) => Some(fault),
        }
    }
}

/// A Tower [`Layer`] that applies a capture policy to every call of the
/// wrapped service.
///
/// The policy is cloned per request, so handlers must be `Clone`.
///
/// # Example
///
/// ```rust,ignore
/// use error_or_value::{tower::CatchLayer, Catch};
///
/// // Capture everything
/// let layer = CatchLayer::new();
///
/// // Or only declared kinds, converted to strings
/// let layer = CatchLayer::with_policy(
///     Catch::all().expect_kind::<&'static str>().map_fault(|fault| fault.to_string()),
/// );
/// ```
#[derive(Clone, Debug)]
pub struct CatchLayer<H = Identity> {
    policy: Catch<H>,
}

impl CatchLayer<Identity> {
    /// Creates a layer that captures every fault.
    #[inline]
    pub fn new() -> Self {
        Self { policy: Catch::all() }
    }
}

impl Default for CatchLayer<Identity> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<H> CatchLayer<H> {
    #[inline]
    pub const fn with_policy(policy: Catch<H>) -> Self {
        Self { policy }
    }

    #[inline]
    pub const fn policy(&self) -> &Catch<H> {
        &self.policy
    }
}

impl<S, H: Clone> Layer<S> for CatchLayer<H> {
    type Service = CatchService<S, H>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        CatchService { inner, policy: self.policy.clone() }
    }
}

/// A Tower [`Service`] that turns faults raised by the inner service into
/// [`ServiceFault::Panicked`] errors.
///
/// Faults raised from `poll_ready` are not intercepted.
#[derive(Clone, Debug)]
pub struct CatchService<S, H = Identity> {
    inner: S,
    policy: Catch<H>,
}

impl<S, H> CatchService<S, H> {
    #[inline]
    pub const fn new(inner: S, policy: Catch<H>) -> Self {
        Self { inner, policy }
    }

    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }

    #[inline]
    pub const fn policy(&self) -> &Catch<H> {
        &self.policy
    }
}

impl<S, H, Request> Service<Request> for CatchService<S, H>
where
    S: Service<Request>,
    H: FaultHandler + Clone,
{
    type Response = S::Response;
    type Error = ServiceFault<S::Error, H::Output>;
    type Future = CatchServiceFuture<S::Future, H>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(ServiceFault::Inner)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let inner = &mut self.inner;
        let future = self.policy.clone().call_async(move || inner.call(request));
        CatchServiceFuture { inner: future }
    }
}

pin_project! {
    /// Future returned by [`CatchService`].
    ///
    /// Flattens the captured outcome into the service's `Result`.
    #[must_use = "futures do nothing unless polled"]
    pub struct CatchServiceFuture<F, H> {
        #[pin]
        inner: CatchFuture<F, H>,
    }
}

impl<F, T, E, H> Future for CatchServiceFuture<F, H>
where
    F: Future<Output = Result<T, E>>,
    H: FaultHandler,
{
    type Output = Result<T, ServiceFault<E, H::Output>>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(cx).map(|outcome| match outcome {
            ErrorOr::Success(Ok(response)) => Ok(response),
            ErrorOr::Success(Err(error)) => Err(ServiceFault::Inner(error)),
            ErrorOr::Failure(fault) => Err(ServiceFault::Panicked(fault)),
        })
    }
}

impl<F, T, E, H> FusedFuture for CatchServiceFuture<F, H>
where
    F: Future<Output = Result<T, E>>,
    H: FaultHandler,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.inner.is_terminated()
    }
}

/// Extension trait for wrapping a service in a capture policy.
pub trait ServiceCatchExt<Request>: Service<Request> + Sized {
    /// Wraps this service so faults it raises are settled by `policy`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_or_value::{tower::ServiceCatchExt, Catch};
    ///
    /// let wrapped = my_service.catch_faults(Catch::all());
    /// ```
    fn catch_faults<H>(self, policy: Catch<H>) -> CatchService<Self, H>
    where
        H: FaultHandler + Clone,
    {
        CatchService::new(self, policy)
    }
}

impl<S, Request> ServiceCatchExt<Request> for S where S: Service<Request> {}
