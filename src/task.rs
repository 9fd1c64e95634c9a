//! # Task Model
//!
//! A task is one schedulable unit of work: a unique identifier, a lifecycle
//! state, and exclusive ownership of the execution context it runs on. The
//! entry closure itself lives in the context's entry slot from the moment
//! the task factory binds it; the task is the handle the ready queue and
//! dispatcher pass around.

use crate::context::ExecutionContext;

// ---------------------------------------------------------------------------
// Task state machine
// ---------------------------------------------------------------------------

/// Lifecycle state of a task.
///
/// ```text
///   ┌───────┐   dispatched    ┌─────────┐   entry returns   ┌────────────┐
///   │ Ready │ ──────────────► │ Running │ ────────────────► │ Terminated │
///   └───────┘                 └─────────┘                   └────────────┘
/// ```
///
/// The transition to `Running` happens as a side effect of the dispatcher
/// transferring control into the task; `Terminated` is set the instant
/// control returns, immediately before the task is reclaimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Queued and waiting to be dispatched.
    Ready,
    /// Currently holding the flow of control.
    Running,
    /// Reserved for suspension support. No code path ever enters this
    /// state; it exists for interface completeness only.
    Waiting,
    /// Ran to completion. The task is reclaimed immediately after.
    Terminated,
}

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// One unit of scheduled work.
///
/// A task exclusively owns its [`ExecutionContext`]; dropping the task
/// reclaims the context (stack and worker included). A task lives in at
/// most one ready queue at a time, and once dispatched it is never
/// re-queued — it runs to completion and is destroyed.
pub struct Task {
    /// Unique, strictly increasing identifier assigned by the scheduler.
    pub id: u64,
    /// Current lifecycle state.
    pub state: TaskState,
    context: ExecutionContext,
}

impl Task {
    /// Wrap a primed context into a `Ready` task. Called by the task
    /// factory after the context has been created and bound.
    pub(crate) fn new(id: u64, context: ExecutionContext) -> Self {
        Self {
            id,
            state: TaskState::Ready,
            context,
        }
    }

    /// The execution context this task runs on.
    pub(crate) fn context(&self) -> &ExecutionContext {
        &self.context
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
