use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::SchemaVariant;

// ─── Sentinel values ──────────────────────────────────────────────────────

/// Command value signaling the model cannot complete the task at all.
pub const VOID: &str = "VOID";
/// Command value signaling the task is complete.
pub const END: &str = "END";
/// Command value signaling a state the model does not know how to handle.
pub const IDHTT: &str = "IDHTT";
/// Transition target closing a failure branch instead of nesting deeper.
pub const ERROR: &str = "ERROR";

/// Reserved command values. These mark terminal/unknown states and are never
/// valid node ids or transition targets.
pub const SENTINEL_COMMANDS: [&str; 3] = [VOID, END, IDHTT];

pub fn is_sentinel_command(command: &str) -> bool {
    SENTINEL_COMMANDS.contains(&command)
}

// ─── Response shapes ──────────────────────────────────────────────────────
//
// Wire field names (`stateMachine`, `actionStateMachines`) follow the schema
// sent to the generation API. `deny_unknown_fields` keeps shape validation
// honest: a response with extra keys is malformed, not silently accepted.

/// One action unit: a shell command and the reasoning behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub explanation: String,
    pub command: String,
}

/// The flat variant: an ordered command sequence with no task grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepScript {
    pub steps: Vec<Step>,
}

/// A named task with its ordered steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionScript {
    pub action: String,
    pub steps: Vec<Step>,
}

/// The grouped variant: one [`ActionScript`] per task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionSet {
    pub actions: Vec<ActionScript>,
}

/// A node in a requested command state machine. `success`/`failure` hold the
/// id of the next node (or [`ERROR`]); sentinel-command nodes carry neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandNode {
    pub id: String,
    pub explanation: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl CommandNode {
    /// True when `command` is one of the reserved sentinel values.
    pub fn is_terminal(&self) -> bool {
        is_sentinel_command(&self.command)
    }
}

/// A declarative, per-task directed graph of command nodes. Requested from
/// the model; never walked by this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionStateMachine {
    pub action: String,
    #[serde(rename = "stateMachine")]
    pub state_machine: Vec<CommandNode>,
}

/// The state-machine variant: one machine per task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineSet {
    #[serde(rename = "actionStateMachines")]
    pub action_state_machines: Vec<ActionStateMachine>,
}

// ─── Plan ─────────────────────────────────────────────────────────────────

/// A parsed generation result in whichever shape the active variant
/// requested. Serializes back to the exact wire shape (untagged).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Plan {
    Steps(StepScript),
    Action(ActionScript),
    Actions(ActionSet),
    StateMachines(MachineSet),
}

impl Plan {
    /// Parse a raw response value into the shape declared by `variant`.
    /// A value that does not match the declared shape is an error — it is
    /// never passed through.
    pub fn from_value(variant: SchemaVariant, value: serde_json::Value) -> Result<Self> {
        Ok(match variant {
            SchemaVariant::Steps => Plan::Steps(serde_json::from_value(value)?),
            SchemaVariant::Action => Plan::Action(serde_json::from_value(value)?),
            SchemaVariant::Actions => Plan::Actions(serde_json::from_value(value)?),
            SchemaVariant::StateMachines => Plan::StateMachines(serde_json::from_value(value)?),
        })
    }
}
