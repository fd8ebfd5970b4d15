//! Invariant checks on parsed generation results. The schema constrains the
//! shape; these checks cover what JSON Schema cannot express (id uniqueness,
//! transition resolution, sentinel rules, non-empty sequences).

use std::collections::HashSet;

use crate::error::{PlanError, Result};
use crate::types::{
    is_sentinel_command, ActionScript, ActionStateMachine, Plan, Step, ERROR,
};

impl Plan {
    /// Check every declarative invariant for this plan's shape. A plan that
    /// fails validation is rejected, never passed through to the client.
    pub fn validate(&self) -> Result<()> {
        match self {
            Plan::Steps(script) => validate_steps(&script.steps),
            Plan::Action(action) => validate_action(action),
            Plan::Actions(set) => {
                if set.actions.is_empty() {
                    return Err(PlanError::EmptyScript);
                }
                set.actions.iter().try_for_each(validate_action)
            }
            Plan::StateMachines(set) => {
                if set.action_state_machines.is_empty() {
                    return Err(PlanError::EmptyScript);
                }
                set.action_state_machines
                    .iter()
                    .try_for_each(validate_machine)
            }
        }
    }
}

fn validate_steps(steps: &[Step]) -> Result<()> {
    if steps.is_empty() {
        return Err(PlanError::EmptyScript);
    }
    Ok(())
}

fn validate_action(action: &ActionScript) -> Result<()> {
    validate_steps(&action.steps)
}

/// Validate a single requested state machine:
/// - node ids are unique and never a reserved word;
/// - sentinel-command nodes carry no transitions;
/// - every transition resolves to a node id in the same machine or `ERROR`.
pub fn validate_machine(machine: &ActionStateMachine) -> Result<()> {
    if machine.state_machine.is_empty() {
        return Err(PlanError::EmptyStateMachine(machine.action.clone()));
    }

    let mut ids: HashSet<&str> = HashSet::new();
    for node in &machine.state_machine {
        if is_sentinel_command(&node.id) || node.id == ERROR {
            return Err(PlanError::ReservedNodeId {
                action: machine.action.clone(),
                id: node.id.clone(),
            });
        }
        if !ids.insert(&node.id) {
            return Err(PlanError::DuplicateNodeId {
                action: machine.action.clone(),
                id: node.id.clone(),
            });
        }
    }

    for node in &machine.state_machine {
        let transitions = [&node.success, &node.failure];
        if node.is_terminal() && transitions.iter().any(|t| t.is_some()) {
            return Err(PlanError::TerminalTransition {
                action: machine.action.clone(),
                id: node.id.clone(),
            });
        }
        for target in transitions.into_iter().flatten() {
            if is_sentinel_command(target) {
                return Err(PlanError::ReservedTransitionTarget {
                    action: machine.action.clone(),
                    id: node.id.clone(),
                    target: target.clone(),
                });
            }
            if target != ERROR && !ids.contains(target.as_str()) {
                return Err(PlanError::UnresolvedTransition {
                    action: machine.action.clone(),
                    id: node.id.clone(),
                    target: target.clone(),
                });
            }
        }
    }

    Ok(())
}
