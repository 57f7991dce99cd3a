use thiserror::Error;

use crate::core::EventDisposition;

pub type ScrollResult<T> = Result<T, ScrollError>;

#[derive(Debug, Error)]
pub enum ScrollError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("scroll host failure: {0}")]
    Host(String),

    /// The host rejected a gesture effect after the event was classified.
    /// The native event must still receive `disposition`.
    #[error("gesture effect not applied: {source}")]
    GestureEffect {
        disposition: EventDisposition,
        #[source]
        source: Box<ScrollError>,
    },
}

impl ScrollError {
    /// Disposition the native event still needs despite this error, if any.
    #[must_use]
    pub fn disposition(&self) -> Option<EventDisposition> {
        match self {
            Self::GestureEffect { disposition, .. } => Some(*disposition),
            _ => None,
        }
    }

    /// Innermost error, looking through [`Self::GestureEffect`].
    #[must_use]
    pub fn root_cause(&self) -> &ScrollError {
        match self {
            Self::GestureEffect { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
