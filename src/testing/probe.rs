//! A pass-through gatherer that records how it is driven.

use crate::gatherer::{Gatherer, Step};
use anyhow::Result;
use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::trace;

/// Snapshot of the calls a [`Probe`] has seen, summed over all runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProbeCounts {
    /// Runs started.
    pub init: usize,
    /// Elements integrated, including ones whose step failed.
    pub integrate: usize,
    /// Finishers invoked.
    pub finish: usize,
}

/// Wraps a gatherer and counts `init` / `integrate` / `finish` calls.
///
/// Outputs are forwarded unchanged and logged at `trace` level under `label`.
/// Counters are atomic, so a probe can be shared across parallel runs.
#[derive(Debug)]
pub struct Probe<G> {
    inner: G,
    label: String,
    init: AtomicUsize,
    integrate: AtomicUsize,
    finish: AtomicUsize,
}

impl<G> Probe<G> {
    /// Wrap `inner` under the label `"probe"`.
    pub fn new(inner: G) -> Self {
        Self::labeled("probe", inner)
    }

    /// Wrap `inner`, tagging its trace events with `label`.
    pub fn labeled<S: Into<String>>(label: S, inner: G) -> Self {
        Self {
            inner,
            label: label.into(),
            init: AtomicUsize::new(0),
            integrate: AtomicUsize::new(0),
            finish: AtomicUsize::new(0),
        }
    }

    /// Calls seen so far, across every run.
    pub fn counts(&self) -> ProbeCounts {
        ProbeCounts {
            init: self.init.load(Ordering::SeqCst),
            integrate: self.integrate.load(Ordering::SeqCst),
            finish: self.finish.load(Ordering::SeqCst),
        }
    }

    /// The wrapped gatherer.
    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<I, O, G> Gatherer<I, O> for Probe<G>
where
    G: Gatherer<I, O>,
    O: Debug,
{
    type State = G::State;

    fn init(&self) -> G::State {
        self.init.fetch_add(1, Ordering::SeqCst);
        self.inner.init()
    }

    fn integrate(&self, state: &mut G::State, item: I) -> Result<Step<O>> {
        let n = self.integrate.fetch_add(1, Ordering::SeqCst);
        let step = self.inner.integrate(state, item)?;
        trace!(label = %self.label, call = n, stop = step.is_stop(), outputs = ?step.outputs(), "integrate");
        Ok(step)
    }

    fn finish(&self, state: G::State) -> Result<Vec<O>> {
        self.finish.fetch_add(1, Ordering::SeqCst);
        let outs = self.inner.finish(state)?;
        trace!(label = %self.label, outputs = ?outs, "finish");
        Ok(outs)
    }
}
