//! Execution of one or many runs.
//!
//! A single run is always sequential: its steps depend on each other through
//! the run state. What *can* run in parallel are independent runs of the same
//! descriptor over different inputs, each with its own state. [`Runner`]
//! chooses between doing those one after another ([`ExecMode::Sequential`]) or
//! spreading them over a rayon pool ([`ExecMode::Parallel`], feature
//! `parallel`).
//!
//! ```
//! use gatherbeam::*;
//!
//! let windows = FixedWindow::new(2)?;
//! let batches = vec![vec![1, 2, 3], vec![], vec![4, 5, 6, 7]];
//!
//! let out = Runner::default().run_many(&windows, batches)?;
//! assert_eq!(out, vec![
//!     vec![vec![1, 2], vec![3]],
//!     vec![],
//!     vec![vec![4, 5], vec![6, 7]],
//! ]);
//! # anyhow::Result::<()>::Ok(())
//! ```

use crate::gatherer::Gatherer;
use crate::run::run;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "parallel")]
use anyhow::Context;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::{Arc, OnceLock};

/// How [`Runner::run_many`] schedules independent runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecMode {
    /// One run after another on the calling thread.
    Sequential,
    /// Runs distributed over a rayon pool owned by the [`Runner`].
    #[cfg(feature = "parallel")]
    Parallel {
        /// Worker threads in the pool; `None` uses the number of logical CPUs.
        threads: Option<usize>,
    },
}

/// Executes gatherer runs according to an [`ExecMode`].
///
/// A parallel runner builds its thread pool on the first [`run_many`](Runner::run_many)
/// call and reuses it afterwards. Clones share the pool.
#[derive(Clone, Debug)]
pub struct Runner {
    mode: ExecMode,
    #[cfg(feature = "parallel")]
    pool: Arc<OnceLock<rayon::ThreadPool>>,
}

impl Default for Runner {
    /// Parallel over all CPUs when the `parallel` feature is on, otherwise sequential.
    fn default() -> Self {
        #[cfg(feature = "parallel")]
        let mode = ExecMode::Parallel { threads: None };
        #[cfg(not(feature = "parallel"))]
        let mode = ExecMode::Sequential;
        Self::new(mode)
    }
}

impl Runner {
    /// Runner for an explicit mode.
    pub fn new(mode: ExecMode) -> Self {
        Self {
            mode,
            #[cfg(feature = "parallel")]
            pool: Arc::new(OnceLock::new()),
        }
    }

    /// Runner that executes runs one after another.
    pub fn sequential() -> Self {
        Self::new(ExecMode::Sequential)
    }

    /// Runner backed by its own pool of `threads` workers (all CPUs if `None`).
    #[cfg(feature = "parallel")]
    pub fn parallel(threads: Option<usize>) -> Self {
        Self::new(ExecMode::Parallel { threads })
    }

    /// The scheduling mode.
    pub fn mode(&self) -> ExecMode {
        self.mode
    }

    /// Run `gatherer` once over `input` and collect the outputs.
    ///
    /// Always sequential, whatever the mode.
    pub fn run<G, I, O, S>(&self, gatherer: G, input: S) -> Result<Vec<O>>
    where
        S: IntoIterator<Item = I>,
        G: Gatherer<I, O>,
    {
        run(gatherer, input)
    }

    /// Run `gatherer` once per input, returning the outputs in input order.
    ///
    /// Every run gets a fresh state from [`Gatherer::init`]. If any run fails,
    /// an error from a failing run is returned.
    pub fn run_many<G, I, O, S>(&self, gatherer: &G, inputs: Vec<S>) -> Result<Vec<Vec<O>>>
    where
        G: Gatherer<I, O> + Sync,
        S: IntoIterator<Item = I> + Send,
        O: Send,
    {
        debug!(runs = inputs.len(), mode = ?self.mode, "starting gather runs");
        match self.mode {
            ExecMode::Sequential => inputs.into_iter().map(|input| run(gatherer, input)).collect(),
            #[cfg(feature = "parallel")]
            ExecMode::Parallel { threads } => self.pool(threads)?.install(|| {
                inputs
                    .into_par_iter()
                    .map(|input| run(gatherer, input))
                    .collect()
            }),
        }
    }

    #[cfg(feature = "parallel")]
    fn pool(&self, threads: Option<usize>) -> Result<&rayon::ThreadPool> {
        if let Some(pool) = self.pool.get() {
            return Ok(pool);
        }
        let threads = threads.unwrap_or_else(num_cpus::get).max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("gather-{i}"))
            .build()
            .context("failed to build gather thread pool")?;
        debug!(threads, "built gather thread pool");
        // A pool built concurrently by a clone may win; this one is then dropped.
        Ok(self.pool.get_or_init(|| pool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exec_mode_serializes_in_kebab_case() -> Result<()> {
        let seq = serde_json::to_string(&ExecMode::Sequential)?;
        assert_eq!(seq, r#""sequential""#);
        assert_eq!(serde_json::from_str::<ExecMode>(&seq)?, ExecMode::Sequential);
        Ok(())
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_mode_round_trips_through_json() -> Result<()> {
        let mode = ExecMode::Parallel { threads: Some(4) };
        let json = serde_json::to_value(mode)?;
        assert_eq!(json, serde_json::json!({ "parallel": { "threads": 4 } }));
        assert_eq!(serde_json::from_value::<ExecMode>(json)?, mode);
        Ok(())
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn pool_is_built_once_and_shared_by_clones() -> Result<()> {
        use crate::gatherer::{Step, of_integrator};

        let widths = of_integrator(
            || (),
            |_: &mut (), _: u8| Ok(Step::emit(rayon::current_num_threads())),
        );
        let runner = Runner::parallel(Some(2));
        assert!(runner.pool.get().is_none());

        let out = runner.run_many(&widths, vec![vec![0u8], vec![1, 2]])?;
        assert_eq!(out, vec![vec![2], vec![2, 2]]);
        let first: *const rayon::ThreadPool = runner.pool.get().unwrap();

        let clone = runner.clone();
        clone.run_many(&widths, vec![vec![3u8]])?;
        let second: *const rayon::ThreadPool = clone.pool.get().unwrap();
        assert_eq!(first, second);
        Ok(())
    }
}
