//! # Demo
//!
//! Enqueues a fixed batch of tasks and drains them. Each task runs on its
//! own stack and simply announces itself; with `RUST_LOG=trace` the
//! per-task dispatch and termination hand-offs are visible too.

use log::info;

use coopsched::config::TASK_BATCH;
use coopsched::scheduler::Scheduler;

fn main() {
    env_logger::init();

    info!("starting, enqueueing {TASK_BATCH} tasks");
    let mut scheduler = Scheduler::new();

    for n in 0..TASK_BATCH {
        scheduler.spawn(|n: usize| println!("task {n} ran"), n);
    }

    let completed = scheduler.run();
    info!("finished, {completed} tasks completed");
}
