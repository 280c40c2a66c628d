//! Stack growth for deep recursion.
//!
//! The reader, the evaluator and value rendering all walk expression trees
//! recursively. A pathological input such as ten thousand nested `(`s would
//! overflow the default thread stack long before the evaluator's own
//! recursion limit kicks in, so every recursive entry point wraps its body in
//! [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker::maybe_grow` allocates a new segment when
//!   fewer than [`RED_ZONE`] bytes remain.
//! - **WASM targets**: passthrough.

/// Remaining stack below which a new segment is allocated (100 KiB).
pub const RED_ZONE: usize = 100 * 1024;

/// Size of each freshly allocated stack segment (1 MiB).
pub const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if it is close to exhaustion.
///
/// ```text
/// fn read(node: &SyntaxNode) -> Value {
///     ensure_sufficient_stack(|| {
///         // ... recurse into node.children() ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
