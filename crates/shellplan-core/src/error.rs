use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("empty step sequence: nothing to render")]
    EmptyScript,

    #[error("empty state machine for action '{0}'")]
    EmptyStateMachine(String),

    #[error("duplicate node id '{id}' in state machine for action '{action}'")]
    DuplicateNodeId { action: String, id: String },

    #[error("reserved word '{id}' used as a node id in state machine for action '{action}'")]
    ReservedNodeId { action: String, id: String },

    #[error("terminal node '{id}' in action '{action}' carries a success/failure transition")]
    TerminalTransition { action: String, id: String },

    #[error("reserved command '{target}' used as a transition target from node '{id}' in action '{action}'")]
    ReservedTransitionTarget {
        action: String,
        id: String,
        target: String,
    },

    #[error("transition from node '{id}' in action '{action}' points at '{target}', which is neither a node id nor ERROR")]
    UnresolvedTransition {
        action: String,
        id: String,
        target: String,
    },

    #[error("unknown schema variant '{0}': expected steps, action, actions, or state-machines")]
    UnknownVariant(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
