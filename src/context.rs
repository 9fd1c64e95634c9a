//! # Execution Context
//!
//! A suspendable, resumable thread of control with its own dedicated stack.
//!
//! Each context is backed by an OS worker thread that spends its whole life
//! parked on the context's [`Gate`] except while it holds the flow of
//! control. Because gates grant the run right to exactly one context at a
//! time, the crate behaves as a single logical thread hopping between
//! stacks — there is no parallelism, only explicit hand-off.
//!
//! ## Lifecycle
//!
//! ```text
//! bootstrap()        the scheduler's own context: a gate, no worker
//! new(successor)     spawn a parked worker with a fresh fixed-size stack
//! bind(entry)        install the closure the worker runs on first resume
//! transfer(from, to) open `to`'s gate, block on `from`'s gate
//! <entry returns>    worker opens the successor's gate and exits
//! drop               retire the gate, join the worker
//! ```
//!
//! The only supported unwind pattern is the last one: an entry function that
//! runs to completion automatically resumes its successor. Every other
//! change of control is an explicit `transfer`.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::sync::{Gate, Pass};

/// The closure a context executes on its first (and only) resume.
type Entry = Box<dyn FnOnce() + Send + 'static>;

/// An isolated stack plus the hand-off state needed to enter and leave it.
pub struct ExecutionContext {
    gate: Arc<Gate>,
    entry_slot: Arc<Mutex<Option<Entry>>>,
    /// `None` for the bootstrap context, which runs on the caller's thread.
    worker: Option<JoinHandle<()>>,
}

impl ExecutionContext {
    /// The scheduler's own context.
    ///
    /// It has no dedicated worker — it *is* the thread that calls into the
    /// dispatcher — and it is the one context permitted to lack a successor:
    /// when the ready queue drains, control simply stays here.
    pub fn bootstrap() -> Self {
        Self {
            gate: Arc::new(Gate::new()),
            entry_slot: Arc::new(Mutex::new(None)),
            worker: None,
        }
    }

    /// Create a fresh context with a dedicated stack of `stack_size` bytes,
    /// wired to resume `successor` when its entry function returns.
    ///
    /// The worker starts parked on the context's gate and runs nothing until
    /// the first [`transfer`](Self::transfer) into it. If the gate is
    /// retired instead (the context is dropped without ever being
    /// dispatched), the worker exits without running the entry and without
    /// touching the successor.
    ///
    /// # Panics
    /// Aborts the process if the worker thread (and with it the stack)
    /// cannot be allocated. There is no recovery path for resource
    /// exhaustion here.
    pub fn new(name: &str, stack_size: usize, successor: &ExecutionContext) -> Self {
        let gate = Arc::new(Gate::new());
        let entry_slot: Arc<Mutex<Option<Entry>>> = Arc::new(Mutex::new(None));

        let worker = {
            let gate = Arc::clone(&gate);
            let entry_slot = Arc::clone(&entry_slot);
            let successor = Arc::clone(&successor.gate);
            thread::Builder::new()
                .name(name.to_owned())
                .stack_size(stack_size)
                .spawn(move || {
                    if let Pass::Granted = gate.wait() {
                        let entry = entry_slot
                            .lock()
                            .take()
                            .expect("context resumed before an entry function was bound");
                        entry();
                        // Natural return: resume the successor automatically.
                        successor.open();
                    }
                })
                .expect("failed to allocate an execution context stack")
        };

        Self {
            gate,
            entry_slot,
            worker: Some(worker),
        }
    }

    /// Install the entry closure this context executes on first resume.
    ///
    /// Must be called before the context is transferred into; resuming an
    /// unbound context is a fatal precondition violation.
    pub fn bind<F>(&self, entry: F)
    where
        F: FnOnce() + Send + 'static,
    {
        *self.entry_slot.lock() = Some(Box::new(entry));
    }

    /// Synchronous hand-off: suspend `self`, resume `to`.
    ///
    /// Opens `to`'s gate and then blocks on `self`'s own gate. The call does
    /// not return until some context opens `self`'s gate — for the
    /// dispatcher that happens when the task's entry function returns and
    /// its automatic successor-resume fires.
    pub fn transfer(&self, to: &ExecutionContext) {
        to.gate.open();
        match self.gate.wait() {
            Pass::Granted => {}
            Pass::Retired => unreachable!("context retired while awaiting control back"),
        }
    }
}

impl Drop for ExecutionContext {
    /// Reclaim the stack. Retires the gate first so a worker that was never
    /// dispatched wakes up and exits instead of parking forever, then joins
    /// the worker thread. For a context that already ran to completion the
    /// join returns immediately.
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            self.gate.retire();
            let _ = worker.join();
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
