// Pipeline state management
// Fetching -> Loading -> Preparing -> Ready, any working state may fail

use serde::Serialize;

/// User-facing failure messages, one per working state
pub const DOWNLOAD_FAILED: &str = "Downloading failed";
pub const READ_FAILED: &str = "Could not read data";
pub const DATA_MISSING: &str = "Data is missing";

/// Pipeline state enum representing the progress of a single run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum PipelineState {
    /// Downloading the word list
    Fetching,
    /// Reading the local file
    Loading,
    /// Sectioning the loaded words
    Preparing,
    /// Snapshot published, remove and search are available
    Ready,
    /// Run ended with a user-facing message
    Failed { reason: String },
}

impl PipelineState {
    /// Starting state: skip the download when a local copy exists
    pub fn initial(local_copy_exists: bool) -> Self {
        if local_copy_exists {
            Self::Loading
        } else {
            Self::Fetching
        }
    }

    /// Lowercase state name used in events and logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fetching => "fetching",
            Self::Loading => "loading",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Failed { .. } => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed { .. })
    }

    /// Failure reason, if this is the failed state
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    /// The failed state a working state falls into
    ///
    /// Terminal states have no failure of their own and return `None`.
    pub fn failure(&self) -> Option<Self> {
        let reason = match self {
            Self::Fetching => DOWNLOAD_FAILED,
            Self::Loading => READ_FAILED,
            Self::Preparing => DATA_MISSING,
            Self::Ready | Self::Failed { .. } => return None,
        };
        Some(Self::Failed {
            reason: reason.to_string(),
        })
    }
}

/// Errors that can occur during state transitions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineStateError {
    /// Invalid state transition attempted
    #[error("Invalid state transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: PipelineState,
        to: PipelineState,
    },
}

/// Holds the current pipeline state and enforces the transition table
#[derive(Debug)]
pub struct PipelineStateMachine {
    state: PipelineState,
}

impl PipelineStateMachine {
    pub fn new(initial: PipelineState) -> Self {
        Self { state: initial }
    }

    /// Get the current pipeline state
    pub fn get_state(&self) -> &PipelineState {
        &self.state
    }

    /// Transition to a new state with validation
    ///
    /// Valid transitions:
    /// - Fetching -> Loading
    /// - Loading -> Preparing
    /// - Preparing -> Ready
    /// - Fetching | Loading | Preparing -> Failed
    ///
    /// Ready and Failed are terminal. Returns error for invalid transitions
    #[must_use = "this returns a Result that should be handled"]
    pub fn transition_to(&mut self, new_state: PipelineState) -> Result<(), PipelineStateError> {
        let valid = matches!(
            (&self.state, &new_state),
            (PipelineState::Fetching, PipelineState::Loading)
                | (PipelineState::Loading, PipelineState::Preparing)
                | (PipelineState::Preparing, PipelineState::Ready)
                | (
                    PipelineState::Fetching | PipelineState::Loading | PipelineState::Preparing,
                    PipelineState::Failed { .. }
                )
        );

        if !valid {
            return Err(PipelineStateError::InvalidTransition {
                from: self.state.clone(),
                to: new_state,
            });
        }

        self.state = new_state;
        Ok(())
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
