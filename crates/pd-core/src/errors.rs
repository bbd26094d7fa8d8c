//! Error types for paydate-rs.
//!
//! Every failure the workspace can report is a variant of the single
//! `thiserror`-derived [`Error`] enum.  Request validation produces one of the
//! three validation kinds ([`Error::InvalidDate`], [`Error::InvalidRule`],
//! [`Error::InvalidJurisdiction`]); the remaining variants cover date
//! arithmetic and configuration problems.  The `ensure!` convenience macro
//! builds errors in place.

use thiserror::Error;

/// The top-level error type used throughout paydate-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The base date (or another input date) is missing or not a valid
    /// calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The business-day count is missing, non-numeric, zero, or negative.
    #[error("invalid rule: {0}")]
    InvalidRule(String),

    /// A jurisdiction code was supplied but is not a supported subdivision.
    #[error("invalid jurisdiction: {0}")]
    InvalidJurisdiction(String),

    /// Date arithmetic left the representable range.
    #[error("date error: {0}")]
    Date(String),

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Machine-readable classification of an [`Error`].
///
/// The request layer reports failures as "kind + message"; the kind is the
/// stable part of that pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::InvalidDate`].
    InvalidDate,
    /// See [`Error::InvalidRule`].
    InvalidRule,
    /// See [`Error::InvalidJurisdiction`].
    InvalidJurisdiction,
    /// See [`Error::Date`].
    Date,
    /// See [`Error::Config`].
    Config,
    /// See [`Error::Precondition`].
    Precondition,
}

impl ErrorKind {
    /// Snake-case identifier (e.g. `"invalid_rule"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidDate => "invalid_date",
            ErrorKind::InvalidRule => "invalid_rule",
            ErrorKind::InvalidJurisdiction => "invalid_jurisdiction",
            ErrorKind::Date => "date",
            ErrorKind::Config => "config",
            ErrorKind::Precondition => "precondition",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Return the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidDate(_) => ErrorKind::InvalidDate,
            Error::InvalidRule(_) => ErrorKind::InvalidRule,
            Error::InvalidJurisdiction(_) => ErrorKind::InvalidJurisdiction,
            Error::Date(_) => ErrorKind::Date,
            Error::Config(_) => ErrorKind::Config,
            Error::Precondition(_) => ErrorKind::Precondition,
        }
    }
}

/// Shorthand `Result` type used throughout paydate-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use pd_core::{ensure, errors::Error};
/// fn positive(x: i64) -> pd_core::errors::Result<i64> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
///
/// A specific variant can be named before the condition:
/// ```
/// use pd_core::{ensure, errors::Error};
/// fn rule(n: i64) -> pd_core::errors::Result<u32> {
///     ensure!(InvalidRule => n >= 1, "rule must be a positive number, got {n}");
///     Ok(n as u32)
/// }
/// assert_eq!(rule(0), Err(Error::InvalidRule("rule must be a positive number, got 0".into())));
/// ```
#[macro_export]
macro_rules! ensure {
    ($variant:ident => $cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$variant(format!($($msg)*)));
        }
    };
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
