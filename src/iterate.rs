//! Step-bounded iteration for `const fn`.
//!
//! A `const fn` cannot take a closure, so every iterative process in the
//! crate is a `Copy` state with a `done: bool` field plus a `const fn` that
//! advances it by one step. `iterate!` generates the driver that applies
//! the step up to `steps` times. The driver halves the step count and
//! recurses on each half, so `n` steps nest only ⌈log2 n⌉ + 2 frames deep
//! and stay far below the frame limit of the const evaluator.

/// Generate `const fn $name(state: $state, steps: u32) -> $state`, which
/// applies `$step` until `state.done` is set or `steps` steps have run.
macro_rules! iterate {
    ($(#[$meta:meta])* $vis:vis fn $name:ident($state:ty) => $step:path;) => {
        $(#[$meta])*
        $vis const fn $name(state: $state, steps: u32) -> $state {
            if state.done || steps == 0 {
                state
            } else if steps == 1 {
                $step(state)
            } else {
                let half = steps / 2;
                $name($name(state, half), steps - half)
            }
        }
    };
}
