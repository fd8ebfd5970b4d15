//! Fixed system prompts, one per schema variant. The prompt and the schema
//! are the only constraints on the generation call; the user message is the
//! only variable input.

/// Flat command sequence.
pub const STEPS: &str = "\
- You will be given a task description. Your goal is to produce an ordered \
series of shell commands that completes the task.
- Respond with a list of steps. Each step has an explanation and a command.
- The explanation states the reasoning behind the command.
- Order the steps so that running the commands top to bottom completes the task.";

/// A single named task with its steps.
pub const ACTION: &str = "\
- You will be given a task description. Your goal is to produce an ordered \
series of shell commands that completes the task.
- Respond with the action (the task as it was written) and a list of steps. \
Each step has an explanation and a command.
- The explanation states the reasoning behind the command.
- Order the steps so that running the commands top to bottom completes the task.";

/// Steps grouped per task.
pub const ACTIONS: &str = "\
- You will be given a set of tasks. Your goal is to produce an ordered series \
of shell commands that completes each of them.
- Respond with one action per task. An action holds the task as it was \
written in the original list, plus its list of steps.
- Each step has an explanation and a command. The explanation states the \
reasoning behind the command.
- Order the steps so that running the commands top to bottom completes the task.";

/// One command state machine per task.
pub const STATE_MACHINES: &str = "\
- You will be given a set of tasks. Your goal is to create a series of shell \
commands to complete the tasks.
- In order to do this you will create a state machine per task, where the \
nodes are the commands, and the transitions are the success or failure of \
said command.
- You will only create one state machine per task.
- A state machine is represented by an array of nodes. A node is an object \
with an id, explanation, command, success and failure.
- The explanation of the command should indicate the reasoning behind the \
command.
- The success and failure are the transitions of the node and their value is \
the id of the appropriate node.
- You have one special command, VOID, that indicates you do not know how to \
complete the task; in the explanation you will also mention what you would \
need from the user. VOID is only used when you cannot proceed with the task \
from the very beginning. Do not use it inside a more complex state machine.
- You have one special command, END, that indicates the task is complete; \
you still need to add the reasoning as to why you think it is the final state.
- You have one special command, IDHTT, that marks a state you do not know \
how to handle partway through a task; explain what is missing.
- VOID, END and IDHTT nodes have no success or failure fields.
- VOID, END and IDHTT are command values, not node ids.
- VOID, END and IDHTT are not valid success or failure values.
- We cannot build an infinite branch of error handling, so set the failure \
to the special failure value ERROR under these conditions: the node itself \
was reached through a failure transition, or the node's success transition \
goes back into the normal state machine flow or happy path. The explanation \
of such a node will also suggest what to do in case of failure.
- The action property is the task as it is written in the original list of \
tasks; the stateMachine property is the array of commands alongside their \
explanations.";
