//! # coopsched — a minimal cooperative FIFO task scheduler
//!
//! A fixed batch of independent tasks, each bound to its own execution
//! stack, run to completion one at a time in first-come-first-served order.
//! Control moves between the scheduler and a task by an explicit,
//! synchronous context transfer — never by OS scheduling decisions.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  Application Tasks                   │
//! ├──────────────────────────────────────────────────────┤
//! │              Scheduler (scheduler.rs)                │
//! │        spawn() · run() · id allocation               │
//! ├───────────────────────────┬──────────────────────────┤
//! │   Task Model (task.rs)    │  Ready Queue (queue.rs)  │
//! │   Task · TaskState        │  append · pop_front      │
//! ├───────────────────────────┴──────────────────────────┤
//! │          Execution Context (context.rs)              │
//! │   bootstrap · new · bind · transfer · drop           │
//! ├──────────────────────────────────────────────────────┤
//! │           Hand-off Gate (sync.rs)                    │
//! │        open · wait · retire                          │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Execution model
//!
//! Single logical thread of control, cooperative and non-preemptive. Each
//! execution context is backed by an OS thread parked on a hand-off gate;
//! at any instant exactly one context holds the run right, so the program
//! behaves as one flow of control hopping between dedicated stacks. Once
//! dispatched, a task runs to completion — there is no yield, no
//! time-slicing, and no priority beyond arrival order. A task's context is
//! successor-linked to the scheduler, so an entry function that returns
//! automatically resumes the dispatch loop.
//!
//! ## Error model
//!
//! Binary and coarse: precondition violations (resuming an unbound context,
//! a broken queue invariant, failure to allocate a context stack) abort via
//! panic; the only non-fatal "failure" is popping an empty queue, which is
//! an ordinary `None` the dispatcher checks for. Nothing is retried.
//!
//! ## Example
//!
//! ```
//! use coopsched::scheduler::Scheduler;
//!
//! let mut scheduler = Scheduler::new();
//! for greeting in ["hello", "world"] {
//!     scheduler.spawn(|g: &str| println!("{g}"), greeting);
//! }
//! assert_eq!(scheduler.run(), 2);
//! ```

pub mod config;
pub mod context;
pub mod queue;
pub mod scheduler;
pub mod sync;
pub mod task;
