//! Built-in gatherers.
//!
//! These are reusable implementations of [`Gatherer`](crate::Gatherer):
//!
//! - [`FixedWindow`] -- non-overlapping windows of `n` elements.
//! - [`SlidingWindow`] -- overlapping windows of `n` elements.
//! - [`Scan`] -- every intermediate value of a running accumulation.
//! - [`Fold`] -- the final value of a running accumulation.
//! - [`ConsecutiveGroup`] -- runs of equal adjacent elements.
//! - [`Distinct`] -- first occurrence of each value.
//! - [`SkipTake`] -- alternately drop `skip` and keep `take` elements.
//! - [`Map`] / [`Filter`] -- element-wise building blocks for chains.
//! - [`Limit`] / [`TakeWhile`] -- short-circuiting selection.
//!
//! Constructors that take a size validate it up front and return
//! [`GatherError::InvalidArgument`](crate::GatherError::InvalidArgument);
//! no built-in gatherer fails mid-run.
//!
//! # Examples
//! ```
//! use gatherbeam::*;
//!
//! let input = vec![1, 2, 3, 4, 5];
//!
//! let fixed = run(FixedWindow::new(2)?, input.clone())?;
//! assert_eq!(fixed, vec![vec![1, 2], vec![3, 4], vec![5]]);
//!
//! let sliding = run(SlidingWindow::new(2)?, input.clone())?;
//! assert_eq!(sliding, vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5]]);
//!
//! let sums = run(Scan::new(0, |a: i32, x: i32| a + x), input.clone())?;
//! assert_eq!(sums, vec![1, 3, 6, 10, 15]);
//!
//! let total = run(Fold::new(0, |a: i32, x: i32| a + x), input.clone())?;
//! assert_eq!(total, vec![15]);
//!
//! let kept = run(SkipTake::new(1, 2)?, input)?;
//! assert_eq!(kept, vec![2, 3, 5]);
//! # anyhow::Result::<()>::Ok(())
//! ```

mod accumulate;
mod group;
mod select;
mod window;

pub use accumulate::{Fold, Scan};
pub use group::{ConsecutiveGroup, Distinct};
pub use select::{Filter, Limit, Map, SkipTake, TakeWhile};
pub use window::{FixedWindow, SlidingWindow};
