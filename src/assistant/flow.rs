use crate::{Error, Result};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Received,
    Validated,
    Admitted,
    Classified,
    AwaitingCompletion,
    Done,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatEvent {
    InputValidated,
    InputRejected,
    LengthExceeded,
    LengthAccepted,
    TopicRestricted,
    TopicAllowed,
    CredentialMissing,
    CompletionRequested,
    CompletionSucceeded,
    CompletionFailed,
}

/// Per-request state machine. Created fresh for every message and dropped
/// with the reply.
#[derive(Debug)]
pub struct ChatFlow {
    state: ChatState,
    trail: Vec<ChatState>,
}

impl Default for ChatFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatFlow {
    pub fn new() -> Self {
        Self {
            state: ChatState::Received,
            trail: vec![ChatState::Received],
        }
    }

    pub fn current_state(&self) -> ChatState {
        self.state
    }

    /// Every state visited so far, starting with `Received`.
    pub fn trail(&self) -> &[ChatState] {
        &self.trail
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, ChatState::Done | ChatState::Rejected)
    }

    pub fn transition(&mut self, event: ChatEvent) -> Result<ChatState> {
        use ChatEvent::*;
        use ChatState::*;

        let next = match (self.state, event) {
            (Received, InputValidated) => Validated,
            (Received, InputRejected) => Rejected,
            (Validated, LengthExceeded) => Done,
            (Validated, LengthAccepted) => Admitted,
            (Admitted, TopicRestricted) => Done,
            (Admitted, TopicAllowed) => Classified,
            (Classified, CredentialMissing) => Done,
            (Classified, CompletionRequested) => AwaitingCompletion,
            (AwaitingCompletion, CompletionSucceeded) => Done,
            (AwaitingCompletion, CompletionFailed) => Done,
            (state, event) => {
                warn!("Invalid chat flow transition from {:?} with event {:?}", state, event);
                return Err(Error::fsm(format!(
                    "Invalid transition from {:?} with event {:?}",
                    state, event
                )));
            }
        };

        debug!("Chat flow: {:?} -> {:?} (event: {:?})", self.state, next, event);
        self.state = next;
        self.trail.push(next);
        Ok(next)
    }
}
