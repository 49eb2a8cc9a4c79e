/*!
Errors raised while declaring unions, assembling case sets and dispatching instances
*/
use itertools::Itertools;
use thiserror::Error;

/// An error in the definition or use of a tagged union
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// A variant was declared with an empty name
    #[error("variant names must be non-empty")]
    EmptyVariantName,
    /// A variant name was declared more than once
    #[error("variant `{0}` is declared more than once")]
    DuplicateVariant(String),
    /// A variant name collides with a placeholder token
    #[error("variant `{0}` collides with a placeholder (`_` and `__` are reserved)")]
    ReservedVariantName(String),
    /// A case set mentions a name which is neither a variant nor a placeholder
    #[error("case `{0}` is neither a variant of this union nor a placeholder")]
    UnknownCase(String),
    /// A case set mentions the same key twice
    #[error("case `{0}` is given more than once")]
    DuplicateCase(String),
    /// A handler cannot be called with what its key dispatches
    #[error("the handler for case `{0}` does not accept what that case is called with")]
    MalformedHandler(String),
    /// A placeholder was given to an operation which supplies its own
    #[error("case `{0}` is a placeholder, which this operation does not accept")]
    ReservedCase(String),
    /// A case set neither covers every variant nor provides a default
    #[error("non-exhaustive cases: missing {}", .missing.iter().format(", "))]
    NonExhaustive {
        /// The uncovered variants, in declaration order
        missing: Vec<String>,
    },
    /// An instance was unwrapped as a variant it does not belong to
    #[error("expected an instance of `{expected}`, found {}", .found.as_deref().unwrap_or("an untagged value"))]
    TypeMismatch {
        /// The variant the instance was unwrapped as
        expected: String,
        /// The variant the instance actually belongs to, if any of the same union
        found: Option<String>,
    },
    /// An untagged instance was dispatched through cases without a `__` handler
    #[error("instance carries no tag of this union, and the cases do not include `__`")]
    Untagged,
}

impl Error {
    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        use Error::*;
        match self {
            EmptyVariantName | DuplicateVariant(_) | UnknownCase(_) | DuplicateCase(_)
            | MalformedHandler(_) => ErrorKind::Validation,
            ReservedVariantName(_) | ReservedCase(_) => ErrorKind::ReservedToken,
            NonExhaustive { .. } => ErrorKind::NonExhaustive,
            TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Untagged => ErrorKind::Invariant,
        }
    }
}

/// The broad category of an [`Error`]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// An invalid variant declaration or case set
    Validation,
    /// A placeholder token used where it is not allowed
    ReservedToken,
    /// A case set which does not cover every variant
    NonExhaustive,
    /// An unwrap through the wrong variant
    TypeMismatch,
    /// Dispatch on an instance the cases cannot handle
    Invariant,
}

impl ErrorKind {
    /// Whether this kind of error is raised by definition-time validation of names or cases
    ///
    /// Reserved tokens count as validation failures: they are caught by the same checks.
    #[inline]
    pub fn is_validation(self) -> bool {
        matches!(self, ErrorKind::Validation | ErrorKind::ReservedToken)
    }
}
