//! Error types for forward-mode AD

use thiserror::Error;

/// AD engine error type.
///
/// Every variant except [`Error::Internal`] is caused by misuse of the public
/// API; `Internal` means an engine invariant was broken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Derivative index outside the established seed-space width
    #[error("index {index} out of bounds [0,{width})")]
    IndexOutOfBounds {
        /// Requested derivative index
        index: usize,
        /// Width of the derivative vector
        width: usize,
    },

    /// Two dependent operands carry derivative vectors of different widths
    #[error("derivative vectors not of same size: {left},{right}")]
    WidthMismatch {
        /// Width of the left-hand (or receiving) variable
        left: usize,
        /// Width of the right-hand (or seeding) request
        right: usize,
    },

    /// Indexed derivative access on a variable that carries no derivative vector
    #[error("derivative {index} accessed on a non-dependent variable")]
    NotDependent {
        /// Requested derivative index
        index: usize,
    },

    /// Engine invariant violation
    #[error("{0}")]
    Internal(String),
}

impl Error {
    /// `true` for engine defects, `false` for user misuse.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
