//! # Synchronization Primitives
//!
//! The hand-off gate that serializes execution between contexts. Each
//! execution context owns one [`Gate`]; a context may run only after its
//! gate has been opened, and opening a gate is only ever done by the single
//! context that currently holds the flow of control. At any instant exactly
//! one gate grant is outstanding, so exactly one context is runnable — the
//! cooperative, non-preemptive model depends on this.
//!
//! A gate can also be *retired*: permanently released without granting the
//! right to run. This is how a context that was created but never dispatched
//! gets torn down at shutdown without deadlocking its parked worker.

use parking_lot::{Condvar, Mutex};

/// Outcome of blocking on a [`Gate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// The gate was opened; the waiter now holds the flow of control.
    Granted,
    /// The gate was retired; the waiter must unwind without running.
    Retired,
}

#[derive(Default)]
struct GateState {
    /// An un-consumed grant is outstanding.
    open: bool,
    /// The gate will never be opened again.
    retired: bool,
}

/// A single-grant hand-off point between two threads of control.
///
/// `open()` and `wait()` form a rendezvous: the opener proceeds immediately
/// (it is about to block on its *own* gate), while the waiter wakes holding
/// the sole right to run. Grants do not accumulate — a gate is either open
/// or closed, and `wait()` consumes the grant.
pub struct Gate {
    state: Mutex<GateState>,
    cond: Condvar,
}

impl Gate {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(GateState::default()),
            cond: Condvar::new(),
        }
    }

    /// Grant the right to run to whoever waits on this gate.
    pub fn open(&self) {
        let mut state = self.state.lock();
        state.open = true;
        self.cond.notify_one();
    }

    /// Permanently release any waiter without granting the run right.
    pub fn retire(&self) {
        let mut state = self.state.lock();
        state.retired = true;
        self.cond.notify_one();
    }

    /// Block until the gate is opened or retired.
    ///
    /// A grant that arrived before the call is consumed immediately; this is
    /// the normal case when the dispatcher opens a task's gate an instant
    /// before the task's worker reaches its first `wait()`.
    pub fn wait(&self) -> Pass {
        let mut state = self.state.lock();
        while !state.open && !state.retired {
            self.cond.wait(&mut state);
        }
        if state.open {
            state.open = false;
            Pass::Granted
        } else {
            Pass::Retired
        }
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
