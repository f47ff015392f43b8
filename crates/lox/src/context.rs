//! Evaluation context configuration

/// Default limit on expression nesting depth.
///
/// Each level of nesting costs two evaluator frames, so this is kept low
/// enough that a tree at the limit still evaluates on a 2 MiB thread stack
/// in an unoptimized build.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration for evaluation.
///
/// This is passed through all evaluation calls and is never mutated by
/// them, so one context can serve any number of evaluations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalContext {
    /// Maximum expression nesting depth (stack overflow protection)
    pub max_depth: usize,

    /// Whether to trace evaluation to stderr (for debugging)
    pub trace: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            trace: false,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Enable or disable evaluation tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
