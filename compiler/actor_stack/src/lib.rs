//! Host stack growth for the tree-walking evaluator.
//!
//! Evaluation recurses once per AST node and once per function call, so a
//! deep (but legal) program can exhaust the native stack long before the
//! interpreter's own recursion limit is reached. Wrapping each recursive step
//! in [`ensure_sufficient_stack`] moves the work onto a freshly allocated
//! segment when the current one runs low, which keeps the recursion limit the
//! only way deep recursion can fail.
//!
//! On `wasm32` the wrapper is a plain call.

/// Remaining stack below which a new segment is allocated (128 KiB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment (2 MiB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if fewer than
/// [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::ensure_sufficient_stack;

    fn nest(depth: u64) -> u64 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { 1 + nest(depth - 1) })
    }

    #[test]
    fn returns_the_closure_result() {
        assert_eq!(ensure_sufficient_stack(|| "done"), "done");
    }

    #[test]
    fn survives_recursion_deeper_than_the_main_stack() {
        assert_eq!(nest(200_000), 200_000);
    }
}
