//! Results of manager actions that the shell reacts to.

/// The user's answer to a delete prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(accepted: bool) -> Self {
        if accepted {
            Self::Accepted
        } else {
            Self::Declined
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    Created(T),
    Updated(T),
}

impl<T> SubmitOutcome<T> {
    pub fn record(&self) -> &T {
        match self {
            Self::Created(r) | Self::Updated(r) => r,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Prompt declined; nothing was sent.
    Cancelled,
}
