//! Library side of the `lesson-reconcile` binary.

pub mod logging;
pub mod pipeline;
