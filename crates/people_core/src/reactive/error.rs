use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ReactiveResult<T> = Result<T, ReactiveError>;

/// Failure carried by a `Mono` or `Flux` subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactiveError {
    /// Exactly one element was required but the source completed empty.
    NoSuchElement,
    /// Exactly one element was required but the source emitted more.
    TooManyElements,
    /// Error injected by a source or an explicit `error` constructor.
    Upstream(String),
}

impl ReactiveError {
    /// Returns whether this error came from an "exactly one" cardinality check.
    pub fn is_cardinality_violation(&self) -> bool {
        matches!(self, Self::NoSuchElement | Self::TooManyElements)
    }
}

impl Display for ReactiveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSuchElement => write!(f, "source was empty; expected exactly one element"),
            Self::TooManyElements => {
                write!(f, "source emitted more than one element; expected exactly one")
            }
            Self::Upstream(message) => write!(f, "upstream error: {message}"),
        }
    }
}

impl Error for ReactiveError {}
