//! # Scheduler
//!
//! Task factory and dispatcher. The scheduler owns the bootstrap context
//! (its own thread of control), the ready queue, and the id counter; all
//! three are mutated only from the single flow of control that calls
//! [`Scheduler::spawn`] and [`Scheduler::run`].
//!
//! ## Dispatch loop
//!
//! ```text
//! while the ready queue is non-empty:
//!   1. pop the head task
//!   2. mark it Running and transfer control into its context
//!      (the transfer returns only after the task's entry has run to
//!       completion and its automatic successor-resume fired)
//!   3. mark it Terminated and drop it, reclaiming context and argument
//! ```
//!
//! This gives strict first-come-first-served execution: the Nth task
//! spawned is the Nth to run, and every task runs to completion before the
//! next begins. There is no yield, no preemption, and no re-queueing.

use log::{debug, trace};

use crate::config::STACK_SIZE;
use crate::context::ExecutionContext;
use crate::queue::ReadyQueue;
use crate::task::{Task, TaskState};

/// The central scheduler state: bootstrap context, ready queue, id counter.
pub struct Scheduler {
    /// The scheduler's own context. Every task context is successor-linked
    /// back to this, so finishing tasks resume the dispatch loop.
    main_context: ExecutionContext,
    ready: ReadyQueue,
    /// Next task id. Ids are unique and strictly increasing for the life
    /// of the scheduler; no atomicity is needed under the single flow of
    /// control.
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            main_context: ExecutionContext::bootstrap(),
            ready: ReadyQueue::new(),
            next_id: 0,
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Create a task and append it to the ready queue.
    ///
    /// The entry function and its owned argument are fused into the
    /// context's entry closure, so the argument's ownership and type are
    /// checked at compile time rather than erased. The new task starts in
    /// `Ready` with a context primed to begin at `entry(arg)` on its own
    /// stack, successor-linked to the scheduler.
    ///
    /// # Returns
    /// The task's id.
    pub fn spawn<A, F>(&mut self, entry: F, arg: A) -> u64
    where
        F: FnOnce(A) + Send + 'static,
        A: Send + 'static,
    {
        let id = self.allocate_id();
        let context =
            ExecutionContext::new(&format!("task-{id}"), STACK_SIZE, &self.main_context);
        context.bind(move || entry(arg));

        trace!("task {id} created and queued");
        self.ready.append(Task::new(id, context));
        id
    }

    /// Number of tasks currently awaiting dispatch.
    pub fn pending(&self) -> usize {
        self.ready.len()
    }

    /// Drain the ready queue, running every task to completion in FIFO
    /// order. Returns the number of tasks executed.
    ///
    /// Starting with an empty queue performs zero transfers and returns
    /// immediately. Each task is destroyed the moment control returns from
    /// it; no task handle survives its own completion.
    ///
    /// # Panics
    /// If the queue yields no task immediately after reporting non-empty —
    /// a queue invariant violation, not a recoverable condition.
    pub fn run(&mut self) -> usize {
        let mut completed = 0usize;

        while !self.ready.is_empty() {
            let mut task = self
                .ready
                .pop_front()
                .expect("non-empty ready queue yielded no task");

            task.state = TaskState::Running;
            trace!("dispatching task {}", task.id);

            // Returns once the task's entry has run to completion and the
            // automatic successor-resume handed control back.
            self.main_context.transfer(task.context());

            task.state = TaskState::Terminated;
            trace!("task {} terminated", task.id);
            completed += 1;
            // `task` drops here, reclaiming its context and argument.
        }

        debug!("ready queue drained after {completed} task(s)");
        completed
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_empty_queue_terminates_immediately() {
        let mut scheduler = Scheduler::new();
        assert_eq!(scheduler.run(), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_fifo_execution_order() {
        let mut scheduler = Scheduler::new();
        let order: Arc<Mutex<Vec<u64>>> = Arc::new(Mutex::new(Vec::new()));

        for i in 0..10u64 {
            let log = Arc::clone(&order);
            let id = scheduler.spawn(move |n: u64| log.lock().push(n), i);
            assert_eq!(id, i);
        }

        assert_eq!(scheduler.run(), 10);
        assert_eq!(*order.lock(), (0..10).collect::<Vec<u64>>());
    }

    #[test]
    fn test_three_task_scenario() {
        // Three tasks each bump a shared counter and append their id.
        let mut scheduler = Scheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let order: Arc<Mutex<Vec<u64>>> = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3u64 {
            let counter = Arc::clone(&counter);
            let log = Arc::clone(&order);
            scheduler.spawn(
                move |n: u64| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    log.lock().push(n);
                },
                i,
            );
        }

        scheduler.run();
        assert_eq!(*order.lock(), vec![0, 1, 2]);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_completion_count_matches_spawn_count() {
        let mut scheduler = Scheduler::new();
        let invocations = Arc::new(AtomicUsize::new(0));

        for _ in 0..25 {
            let invocations = Arc::clone(&invocations);
            scheduler.spawn(move |_: ()| {
                invocations.fetch_add(1, Ordering::SeqCst);
            }, ());
        }

        assert_eq!(scheduler.pending(), 25);
        assert_eq!(scheduler.run(), 25);
        assert_eq!(invocations.load(Ordering::SeqCst), 25);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_ids_unique_and_strictly_increasing() {
        let mut scheduler = Scheduler::new();
        let mut ids = Vec::new();
        for _ in 0..8 {
            ids.push(scheduler.spawn(|_: ()| {}, ()));
        }
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    /// Argument payload whose destructor is observable, for checking that
    /// every task's resources are reclaimed exactly once.
    struct Payload {
        drops: Arc<AtomicUsize>,
    }

    impl Drop for Payload {
        fn drop(&mut self) {
            self.drops.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_dispatched_tasks_reclaimed_exactly_once() {
        let drops = Arc::new(AtomicUsize::new(0));
        let mut scheduler = Scheduler::new();

        for _ in 0..5 {
            let payload = Payload {
                drops: Arc::clone(&drops),
            };
            scheduler.spawn(|_p: Payload| {}, payload);
        }

        assert_eq!(scheduler.run(), 5);
        assert_eq!(drops.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_undispatched_tasks_reclaimed_at_shutdown() {
        let drops = Arc::new(AtomicUsize::new(0));
        let mut scheduler = Scheduler::new();

        for _ in 0..3 {
            let payload = Payload {
                drops: Arc::clone(&drops),
            };
            scheduler.spawn(|_p: Payload| {}, payload);
        }

        // Never run; dropping the scheduler drains the queue and reclaims
        // every queued task without executing any entry.
        drop(scheduler);
        assert_eq!(drops.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_each_task_runs_to_completion_before_next() {
        // Every task observes the previous one fully finished: the shared
        // cell must hold the prior task's final value when the next starts.
        let mut scheduler = Scheduler::new();
        let cell = Arc::new(AtomicUsize::new(0));
        let violations = Arc::new(AtomicUsize::new(0));

        for i in 0..6usize {
            let cell = Arc::clone(&cell);
            let violations = Arc::clone(&violations);
            scheduler.spawn(
                move |expected: usize| {
                    if cell.load(Ordering::SeqCst) != expected {
                        violations.fetch_add(1, Ordering::SeqCst);
                    }
                    cell.store(expected + 1, Ordering::SeqCst);
                },
                i,
            );
        }

        scheduler.run();
        assert_eq!(violations.load(Ordering::SeqCst), 0);
        assert_eq!(cell.load(Ordering::SeqCst), 6);
    }
}
