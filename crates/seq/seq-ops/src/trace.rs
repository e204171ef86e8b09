//! Completion events for the `tracing` feature.
//!
//! All operations report through [`trace_op!`] so the feature gate lives in
//! one place. With the feature disabled the macro expands to nothing and the
//! field expressions are never evaluated.

/// Emit a `trace`-level event with target `seq_ops`.
///
/// Only usable in statement position.
macro_rules! trace_op {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(target: "seq_ops", $($arg)+);
    };
}

pub(crate) use trace_op;
