use crate::types::Fault;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of one fallible operation: a success value or a captured failure.
///
/// Exactly one side is populated. A failure never carries a placeholder
/// value, so there is no default to leak out of the failure branch.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The failure type, [`Fault`] unless a handler or downcast declared
///   another kind
///
/// # Examples
///
/// ```
/// use error_or_value::ErrorOr;
///
/// let ok: ErrorOr<i32, &str> = ErrorOr::success(42);
/// assert!(ok.is_success());
/// assert_eq!(ok.value(), Some(&42));
///
/// let failed: ErrorOr<i32, &str> = ErrorOr::failure("bad input");
/// let (error, value) = failed.into_parts();
/// assert_eq!(error, Some("bad input"));
/// assert_eq!(value, None);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum ErrorOr<T, E = Fault> {
    Success(T),
    Failure(E),
}

impl<T, E> ErrorOr<T, E> {
    /// Creates a successful outcome.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    #[must_use]
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the success value; `None` for a failure.
    #[must_use]
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure; `None` for a success.
    #[must_use]
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Splits the outcome into `(error, value)`, exactly one of which is
    /// `Some`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or_value::ErrorOr;
    ///
    /// let (error, number) = ErrorOr::<u8, String>::success(1).into_parts();
    /// assert!(error.is_none());
    /// assert_eq!(number, Some(1));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_parts(self) -> (Option<E>, Option<T>) {
        match self {
            Self::Success(value) => (None, Some(value)),
            Self::Failure(error) => (Some(error), None),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with the failure's `Debug` output if this is a failure. Check
    /// [`is_success`](Self::is_success) first or use
    /// [`value`](Self::value) to avoid it.
    #[track_caller]
    #[inline]
    pub fn unwrap_value(self) -> T
    where
        E: core::fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("called `ErrorOr::unwrap_value()` on a failure: {:?}", error)
            },
        }
    }

    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    /// Returns the success value or computes one from the failure.
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> ErrorOr<&T, &E> {
        match self {
            Self::Success(value) => ErrorOr::Success(value),
            Self::Failure(error) => ErrorOr::Failure(error),
        }
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> ErrorOr<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => ErrorOr::Success(f(value)),
            Self::Failure(error) => ErrorOr::Failure(error),
        }
    }

    #[inline]
    pub fn map_err<G, F>(self, f: F) -> ErrorOr<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => ErrorOr::Success(value),
            Self::Failure(error) => ErrorOr::Failure(f(error)),
        }
    }

    /// Chains another step that only runs on success.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> ErrorOr<U, E>
    where
        F: FnOnce(T) -> ErrorOr<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => ErrorOr::Failure(error),
        }
    }

    /// Converts into a standard `Result` for use with `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or_value::{try_call_with, ErrorOr};
    ///
    /// fn parse() -> Result<u32, String> {
    ///     let parsed: ErrorOr<u32, String> = try_call_with(|| 7, |fault| fault.to_string());
    ///     let value = parsed.into_result()?;
    ///     Ok(value * 6)
    /// }
    ///
    /// assert_eq!(parse(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for ErrorOr<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<ErrorOr<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: ErrorOr<T, E>) -> Self {
        outcome.into_result()
    }
}
