use std::fmt;
use std::str::FromStr;

use serde_json::{json, Value};

use crate::error::PlanError;
use crate::prompt;

/// The output schema requested from the generation API. One variant is
/// active per server instance; the four shapes are iterative redesigns of
/// the same concept, not simultaneous modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVariant {
    /// `{ steps: [Step] }` — flat command sequence.
    Steps,
    /// `{ action, steps: [Step] }` — a single named task.
    Action,
    /// `{ actions: [ActionScript] }` — steps grouped per task.
    Actions,
    /// `{ actionStateMachines: [ActionStateMachine] }` — one command graph
    /// per task with success/failure transitions.
    StateMachines,
}

impl SchemaVariant {
    pub const ALL: [SchemaVariant; 4] = [
        SchemaVariant::Steps,
        SchemaVariant::Action,
        SchemaVariant::Actions,
        SchemaVariant::StateMachines,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVariant::Steps => "steps",
            SchemaVariant::Action => "action",
            SchemaVariant::Actions => "actions",
            SchemaVariant::StateMachines => "state-machines",
        }
    }

    /// Name under which the schema is registered in the request. Every
    /// revision of the original endpoint called its schema "script".
    pub fn schema_name(&self) -> &'static str {
        "script"
    }

    /// The fixed system prompt paired with this schema.
    pub fn system_prompt(&self) -> &'static str {
        match self {
            SchemaVariant::Steps => prompt::STEPS,
            SchemaVariant::Action => prompt::ACTION,
            SchemaVariant::Actions => prompt::ACTIONS,
            SchemaVariant::StateMachines => prompt::STATE_MACHINES,
        }
    }

    /// JSON Schema for the response, in the strict form the structured-output
    /// API requires: every object closes `additionalProperties`, every
    /// property is required, and optional transitions are nullable strings.
    pub fn response_schema(&self) -> Value {
        match self {
            SchemaVariant::Steps => object(
                json!({ "steps": { "type": "array", "items": step_schema() } }),
                &["steps"],
            ),
            SchemaVariant::Action => action_script_schema(),
            SchemaVariant::Actions => object(
                json!({ "actions": { "type": "array", "items": action_script_schema() } }),
                &["actions"],
            ),
            SchemaVariant::StateMachines => object(
                json!({
                    "actionStateMachines": {
                        "type": "array",
                        "items": machine_schema(),
                    }
                }),
                &["actionStateMachines"],
            ),
        }
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVariant {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "steps" => Ok(SchemaVariant::Steps),
            "action" => Ok(SchemaVariant::Action),
            "actions" => Ok(SchemaVariant::Actions),
            "state-machines" => Ok(SchemaVariant::StateMachines),
            other => Err(PlanError::UnknownVariant(other.to_string())),
        }
    }
}

// ─── Schema building blocks ───────────────────────────────────────────────

fn object(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}

fn step_schema() -> Value {
    object(
        json!({
            "explanation": { "type": "string" },
            "command": { "type": "string" },
        }),
        &["explanation", "command"],
    )
}

fn action_script_schema() -> Value {
    object(
        json!({
            "action": { "type": "string" },
            "steps": { "type": "array", "items": step_schema() },
        }),
        &["action", "steps"],
    )
}

fn command_node_schema() -> Value {
    object(
        json!({
            "id": { "type": "string" },
            "explanation": { "type": "string" },
            "command": { "type": "string" },
            "success": { "type": ["string", "null"] },
            "failure": { "type": ["string", "null"] },
        }),
        &["id", "explanation", "command", "success", "failure"],
    )
}

fn machine_schema() -> Value {
    object(
        json!({
            "action": { "type": "string" },
            "stateMachine": { "type": "array", "items": command_node_schema() },
        }),
        &["action", "stateMachine"],
    )
}
