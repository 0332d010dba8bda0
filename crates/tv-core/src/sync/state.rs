use serde::{Deserialize, Serialize};

/// Add-destination upload state machine
///
/// Design principle: This is a pure type state machine with only state
/// definitions and transition validation logic. Runtime behaviors like
/// I/O sequencing and user notification are handled by the application
/// layer (tv-app).
///
/// State transitions:
///
/// ```text
/// Idle ──→ Uploading ──→ Succeeded
///                     └─→ Failed
///
/// Succeeded / Failed ──→ Idle (reset)
/// ```
///
/// While `Uploading`, the triggering affordance is disabled: a second
/// `start_upload` is rejected until the flow reaches a terminal state and
/// is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadState {
    /// No upload in progress
    Idle,

    /// Materialize → local insert → remote upsert in flight
    Uploading,

    /// Upload completed; the presentation list may be patched locally
    Succeeded,

    /// Upload failed with the originating fault; form input is preserved
    Failed,
}

impl UploadState {
    /// Check if this is a terminal state
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    /// Check if an upload is currently in flight
    pub fn is_uploading(self) -> bool {
        self == Self::Uploading
    }

    /// Begin an upload. Only valid from `Idle`.
    pub fn start_upload(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Uploading),
            _ => None,
        }
    }

    /// Transition after the final step settles
    pub fn on_settled(self, success: bool) -> Self {
        match self {
            Self::Uploading if success => Self::Succeeded,
            Self::Uploading => Self::Failed,
            _ => self,
        }
    }

    /// Mark as failed
    pub fn fail(self) -> Self {
        if self.is_uploading() {
            Self::Failed
        } else {
            self
        }
    }

    /// Reset to idle
    pub fn reset(self) -> Self {
        if self.is_terminal() {
            Self::Idle
        } else {
            self
        }
    }
}

impl Default for UploadState {
    fn default() -> Self {
        Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_upload_flow() {
        let mut state = UploadState::Idle;

        state = state.start_upload().unwrap();
        assert_eq!(state, UploadState::Uploading);
        assert!(state.is_uploading());

        state = state.on_settled(true);
        assert_eq!(state, UploadState::Succeeded);
        assert!(state.is_terminal());
    }

    #[test]
    fn test_failed_upload() {
        let state = UploadState::Uploading;
        let failed = state.on_settled(false);

        assert_eq!(failed, UploadState::Failed);
        assert!(failed.is_terminal());
    }

    #[test]
    fn test_duplicate_submission_rejected() {
        // Can't start a second upload while one is in flight
        let state = UploadState::Uploading;
        assert!(state.start_upload().is_none());

        // Nor from a terminal state without a reset
        assert!(UploadState::Failed.start_upload().is_none());
    }

    #[test]
    fn test_reset_from_terminal() {
        assert_eq!(UploadState::Succeeded.reset(), UploadState::Idle);
        assert_eq!(UploadState::Failed.reset(), UploadState::Idle);
    }

    #[test]
    fn test_no_reset_from_active() {
        let state = UploadState::Uploading;
        assert_eq!(state.reset(), UploadState::Uploading);
    }

    #[test]
    fn test_fail_only_from_active() {
        assert_eq!(UploadState::Uploading.fail(), UploadState::Failed);
        assert_eq!(UploadState::Idle.fail(), UploadState::Idle);
    }

    #[test]
    fn test_default_state() {
        assert_eq!(UploadState::default(), UploadState::Idle);
    }
}
