//! Evaluation limits.

/// Default for [`EvalConfig::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Policy knobs for an [`Interpreter`](crate::Interpreter).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EvalConfig {
    /// Maximum number of nested reductions and lambda applications before
    /// evaluation gives up with a recursion-limit error.
    pub max_depth: usize,
}

impl EvalConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
