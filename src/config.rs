//! # Configuration
//!
//! Compile-time constants governing the scheduler. There is no runtime
//! configuration surface — every context gets the same stack size and the
//! demo binary enqueues a fixed batch of tasks.

/// Per-context stack size in bytes, applied uniformly to every execution
/// context. There is no per-task override. 64 KiB is comfortably more than
/// the demo tasks need and leaves room for real workloads with moderate
/// call depth.
pub const STACK_SIZE: usize = 64 * 1024;

/// Number of tasks the demo binary creates and enqueues at startup.
pub const TASK_BATCH: usize = 100;
