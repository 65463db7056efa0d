//! Count-based windows: [`FixedWindow`] and [`SlidingWindow`].

use crate::error::{GatherError, GatherResult};
use crate::gatherer::{Gatherer, Step};
use anyhow::Result;
use std::collections::VecDeque;
use std::mem::take;

/* ===================== FixedWindow ===================== */

/// Non-overlapping windows of `size` consecutive elements.
///
/// - State: `Vec<T>` (the window being filled)
/// - Step: emits the window once it holds `size` elements
/// - Finisher: emits the trailing partial window, if any
///
/// Flattening the outputs reproduces the input exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedWindow {
    size: usize,
}

impl FixedWindow {
    /// Fails with [`GatherError::InvalidArgument`] when `size == 0`.
    pub fn new(size: usize) -> GatherResult<Self> {
        if size == 0 {
            return Err(GatherError::invalid(
                "size",
                "fixed window size must be greater than zero",
            ));
        }
        Ok(Self { size })
    }

    /// Number of elements per full window.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<T> Gatherer<T, Vec<T>> for FixedWindow {
    type State = Vec<T>;

    fn init(&self) -> Vec<T> {
        Vec::new()
    }

    fn integrate(&self, window: &mut Vec<T>, item: T) -> Result<Step<Vec<T>>> {
        window.push(item);
        if window.len() < self.size {
            return Ok(Step::empty());
        }
        Ok(Step::emit(take(window)))
    }

    fn finish(&self, window: Vec<T>) -> Result<Vec<Vec<T>>> {
        if window.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![window])
        }
    }
}

/* ===================== SlidingWindow ===================== */

/// Overlapping windows of `size` elements, advancing one element at a time.
///
/// - State: the trailing `size` elements
/// - Step: once at least `size` elements were seen, emits the trailing window
/// - Finisher: none (input shorter than `size` produces no output)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlidingWindow {
    size: usize,
}

impl SlidingWindow {
    /// Fails with [`GatherError::InvalidArgument`] when `size == 0`.
    pub fn new(size: usize) -> GatherResult<Self> {
        if size == 0 {
            return Err(GatherError::invalid(
                "size",
                "sliding window size must be greater than zero",
            ));
        }
        Ok(Self { size })
    }

    /// Number of elements per window.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<T: Clone> Gatherer<T, Vec<T>> for SlidingWindow {
    type State = VecDeque<T>;

    // Grows with the input, never preallocated to `size`.
    fn init(&self) -> VecDeque<T> {
        VecDeque::new()
    }

    fn integrate(&self, trailing: &mut VecDeque<T>, item: T) -> Result<Step<Vec<T>>> {
        trailing.push_back(item);
        if trailing.len() > self.size {
            trailing.pop_front();
        }
        if trailing.len() < self.size {
            return Ok(Step::empty());
        }
        Ok(Step::emit(trailing.iter().cloned().collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run;

    #[test]
    fn zero_sizes_are_rejected() {
        assert!(matches!(
            FixedWindow::new(0),
            Err(GatherError::InvalidArgument { what: "size", .. })
        ));
        assert!(SlidingWindow::new(0).is_err());
    }

    #[test]
    fn window_of_one_emits_singletons() -> Result<()> {
        let fixed = run(FixedWindow::new(1)?, vec!['a', 'b'])?;
        let sliding = run(SlidingWindow::new(1)?, vec!['a', 'b'])?;
        assert_eq!(fixed, vec![vec!['a'], vec!['b']]);
        assert_eq!(fixed, sliding);
        Ok(())
    }

    #[test]
    fn sliding_window_longer_than_input_is_silent() -> Result<()> {
        let out: Vec<Vec<u8>> = run(SlidingWindow::new(4)?, vec![1u8, 2, 3])?;
        assert!(out.is_empty());
        Ok(())
    }

    #[test]
    fn huge_window_sizes_only_hold_what_was_seen() -> Result<()> {
        let fixed = run(FixedWindow::new(1 << 40)?, vec![1u64, 2, 3])?;
        assert_eq!(fixed, vec![vec![1, 2, 3]]);

        let widest = run(FixedWindow::new(usize::MAX / 2)?, vec![1u64, 2, 3])?;
        assert_eq!(widest, vec![vec![1, 2, 3]]);

        let sliding: Vec<Vec<u64>> = run(SlidingWindow::new(usize::MAX / 2)?, vec![1u64, 2, 3])?;
        assert!(sliding.is_empty());
        Ok(())
    }
}
