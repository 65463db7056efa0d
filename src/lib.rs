//! # Gatherbeam
//!
//! **Sequential stream gatherers** for Rust: small, reusable state machines that
//! turn an ordered input sequence into an ordered output sequence.
//!
//! ## Key Features
//!
//! - **One abstraction** - initializer, per-element step, end-of-input finisher
//! - **Short-circuiting** - a step can end the run early, even on infinite input
//! - **Lazy runs** - outputs are produced as input is pulled, never ahead of it
//! - **Composition** - chain gatherers with [`and_then`](Gatherer::and_then)
//! - **Built-in gatherers** - fixed and sliding windows, scan, fold, grouping,
//!   skip/take cycling, distinct, limit, take-while
//! - **Parallel batches** - run one descriptor over many inputs with rayon
//!
//! ## Quick Start
//!
//! ```
//! use gatherbeam::*;
//! # use anyhow::Result;
//!
//! # fn main() -> Result<()> {
//! let groups = run(ConsecutiveGroup, vec![1, 1, 2, 3, 3, 3, 1, 2, 2])?;
//! assert_eq!(
//!     groups,
//!     vec![vec![1, 1], vec![2], vec![3, 3, 3], vec![1], vec![2, 2]]
//! );
//!
//! // Lazily, over an infinite source
//! let firsts: Vec<u64> = (1u64..)
//!     .gather(SkipTake::new(1, 2)?.and_then(Limit::new(6)))
//!     .collect::<Result<_>>()?;
//! assert_eq!(firsts, vec![2, 3, 5, 6, 8, 9]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Gatherer
//!
//! A [`Gatherer<I, O>`] is an immutable *descriptor*. Its associated `State`
//! is created by [`init`](Gatherer::init) at the start of each run, mutated by
//! [`integrate`](Gatherer::integrate) for every element, and consumed by
//! [`finish`](Gatherer::finish) once input is exhausted. Build one by
//! implementing the trait, or from closures with [`of_sequential`] /
//! [`of_integrator`].
//!
//! ### Step
//!
//! Each [`integrate`](Gatherer::integrate) call returns a [`Step`]: the
//! outputs it produced, tagged `Continue` or `Stop`. A `Stop` ends the run
//! immediately and skips the finisher.
//!
//! ### Run
//!
//! A run is one pass of a gatherer over one input. [`GatherExt::gather`]
//! starts a lazy run ([`Gather`], an iterator of `Result<O>`); [`run`]
//! collects one eagerly. [`Runner::run_many`] executes many independent runs,
//! optionally in parallel.
//!
//! ## Error Handling
//!
//! - Constructors reject meaningless parameters with
//!   [`GatherError::InvalidArgument`].
//! - Steps and finishers return [`anyhow::Result`]; a failure ends the run and
//!   is handed back unmodified after any outputs emitted before it.
//!
//! ## Logging
//!
//! Run lifecycle events are emitted through [`tracing`] (`debug` on completion,
//! `warn` on failure, `trace` for stops and finishers). Install any subscriber
//! to see them.
//!
//! ## Module Overview
//!
//! - [`gatherer`] - the `Gatherer` trait, `Step`, closure-built gatherers
//! - [`chain`] - `AndThen` composition
//! - [`run`] - the lazy run driver and run statistics
//! - [`runner`] - sequential / parallel execution of many runs
//! - [`gatherers`] - built-in gatherers
//! - [`error`] - construction errors
//! - [`testing`] - assertions and a call-counting probe

pub mod chain;
pub mod error;
pub mod gatherer;
pub mod gatherers;
pub mod run;
pub mod runner;
pub mod testing;

// General re-exports
pub use chain::AndThen;
pub use error::{GatherError, GatherResult};
pub use gatherer::{FnGatherer, Gatherer, Step, of_integrator, of_sequential};
pub use gatherers::{
    ConsecutiveGroup, Distinct, Filter, FixedWindow, Fold, Limit, Map, Scan, SkipTake,
    SlidingWindow, TakeWhile,
};
pub use run::{Gather, GatherExt, RunOutcome, RunStats, run};
pub use runner::{ExecMode, Runner};
