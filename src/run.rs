//! The run driver: a lazy iterator that pushes input through a [`Gatherer`].
//!
//! [`Gather`] pulls one element at a time from its input, integrates it, and
//! yields the resulting outputs before pulling the next element. This keeps a
//! run strictly sequential and makes it safe on infinite inputs: nothing is
//! consumed ahead of what the caller asks for.
//!
//! Lifecycle of a run:
//! 1. the state is created when the [`Gather`] is built;
//! 2. each pulled element goes through [`Gatherer::integrate`];
//! 3. on [`Step::Stop`](crate::Step::Stop) the state is dropped, no more input
//!    is pulled and the finisher is skipped;
//! 4. on input exhaustion [`Gatherer::finish`] runs once;
//! 5. an error from either call is yielded after any outputs emitted before
//!    it, and ends the run.

use crate::gatherer::Gatherer;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use tracing::{debug, trace, warn};

/// How a run ended (or that it has not ended yet).
///
/// Serialized in kebab-case, matching [`Display`](fmt::Display).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunOutcome {
    /// Input is still being consumed.
    Running,
    /// Input ran out and the finisher completed.
    Exhausted,
    /// A step returned [`Step::Stop`](crate::Step::Stop).
    ShortCircuited,
    /// A step or the finisher returned an error.
    Failed,
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunOutcome::Running => "running",
            RunOutcome::Exhausted => "exhausted",
            RunOutcome::ShortCircuited => "short-circuited",
            RunOutcome::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Counters describing a single run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Input elements handed to the gatherer.
    pub consumed: u64,
    /// Outputs produced by steps and the finisher.
    pub emitted: u64,
    /// Current or final state of the run.
    pub outcome: RunOutcome,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            consumed: 0,
            emitted: 0,
            outcome: RunOutcome::Running,
        }
    }
}

impl RunStats {
    /// Whether the run has ended, for whatever reason.
    pub fn is_done(&self) -> bool {
        self.outcome != RunOutcome::Running
    }

    /// Render as a JSON object, using the serde encoding.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// A lazy run of gatherer `G` over the iterator `It`.
///
/// Yields `Ok(output)` in emission order. If a step or the finisher fails, the
/// error is yielded once and the iterator is fused afterwards.
pub struct Gather<It, G, I, O>
where
    It: Iterator<Item = I>,
    G: Gatherer<I, O>,
{
    input: It,
    gatherer: G,
    state: Option<G::State>,
    pending: VecDeque<O>,
    stats: RunStats,
    _io: PhantomData<fn(I) -> O>,
}

impl<It, G, I, O> Gather<It, G, I, O>
where
    It: Iterator<Item = I>,
    G: Gatherer<I, O>,
{
    /// Start a run of `gatherer` over `input`.
    pub fn new(input: It, gatherer: G) -> Self {
        let state = gatherer.init();
        Self {
            input,
            gatherer,
            state: Some(state),
            pending: VecDeque::new(),
            stats: RunStats::default(),
            _io: PhantomData,
        }
    }

    /// Counters for this run so far.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    fn push(&mut self, outs: Vec<O>) {
        self.stats.emitted += outs.len() as u64;
        self.pending.extend(outs);
    }

    fn end(&mut self, outcome: RunOutcome) {
        self.stats.outcome = outcome;
        debug!(
            outcome = %outcome,
            consumed = self.stats.consumed,
            emitted = self.stats.emitted,
            "gather run finished"
        );
    }

    fn fail(&mut self, err: anyhow::Error) -> anyhow::Error {
        self.stats.outcome = RunOutcome::Failed;
        warn!(
            consumed = self.stats.consumed,
            emitted = self.stats.emitted,
            error = %err,
            "gather run failed"
        );
        err
    }
}

impl<It, G, I, O> Iterator for Gather<It, G, I, O>
where
    It: Iterator<Item = I>,
    G: Gatherer<I, O>,
{
    type Item = Result<O>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(out) = self.pending.pop_front() {
                return Some(Ok(out));
            }
            let mut state = self.state.take()?;

            let Some(item) = self.input.next() else {
                trace!(consumed = self.stats.consumed, "input exhausted; finishing");
                match self.gatherer.finish(state) {
                    Ok(outs) => {
                        self.push(outs);
                        self.end(RunOutcome::Exhausted);
                        continue;
                    }
                    Err(e) => return Some(Err(self.fail(e))),
                }
            };

            self.stats.consumed += 1;
            match self.gatherer.integrate(&mut state, item) {
                Ok(step) => {
                    let (outs, more) = step.into_parts();
                    self.push(outs);
                    if more {
                        self.state = Some(state);
                    } else {
                        trace!(consumed = self.stats.consumed, "step requested stop");
                        self.end(RunOutcome::ShortCircuited);
                    }
                }
                Err(e) => return Some(Err(self.fail(e))),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self.pending.len();
        if self.state.is_some() {
            (buffered, None)
        } else {
            (buffered, Some(buffered))
        }
    }
}

impl<It, G, I, O> FusedIterator for Gather<It, G, I, O>
where
    It: Iterator<Item = I>,
    G: Gatherer<I, O>,
{
}

/// Adds [`gather`](GatherExt::gather) to everything iterable.
pub trait GatherExt: IntoIterator + Sized {
    /// Lazily run `gatherer` over this sequence.
    ///
    /// ```
    /// use gatherbeam::*;
    ///
    /// let windows = FixedWindow::new(2)?;
    /// let out: Vec<Vec<i32>> = vec![1, 2, 3, 4, 5]
    ///     .gather(&windows)
    ///     .collect::<anyhow::Result<_>>()?;
    /// assert_eq!(out, vec![vec![1, 2], vec![3, 4], vec![5]]);
    /// # anyhow::Result::<()>::Ok(())
    /// ```
    fn gather<G, O>(self, gatherer: G) -> Gather<Self::IntoIter, G, Self::Item, O>
    where
        G: Gatherer<Self::Item, O>,
    {
        Gather::new(self.into_iter(), gatherer)
    }
}

impl<T: IntoIterator> GatherExt for T {}

/// Run `gatherer` over `input` to completion and collect every output.
///
/// Returns the first error raised by a step or the finisher.
pub fn run<G, I, O, S>(gatherer: G, input: S) -> Result<Vec<O>>
where
    S: IntoIterator<Item = I>,
    G: Gatherer<I, O>,
{
    input.gather(gatherer).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gatherer::{Step, of_integrator};

    #[test]
    fn stats_track_consumption_and_outcome() {
        let limit = of_integrator(
            || 0usize,
            |n: &mut usize, x: u32| {
                *n += 1;
                Ok(if *n == 3 { Step::Stop(vec![x]) } else { Step::emit(x) })
            },
        );
        let mut it = (0u32..).gather(&limit);
        assert_eq!(it.stats().outcome, RunOutcome::Running);
        let out: Vec<u32> = it.by_ref().map(|r| r.unwrap()).collect();
        assert_eq!(out, vec![0, 1, 2]);
        assert_eq!(
            it.stats(),
            &RunStats {
                consumed: 3,
                emitted: 3,
                outcome: RunOutcome::ShortCircuited
            }
        );
        assert_eq!(it.stats().to_json().unwrap()["outcome"], "short-circuited");
    }

    #[test]
    fn stats_json_round_trips() -> Result<()> {
        let stats = RunStats {
            consumed: 7,
            emitted: 3,
            outcome: RunOutcome::ShortCircuited,
        };
        let json = stats.to_json()?;
        assert_eq!(
            json,
            serde_json::json!({ "consumed": 7, "emitted": 3, "outcome": "short-circuited" })
        );
        let back: RunStats = serde_json::from_value(json)?;
        assert_eq!(back, stats);
        Ok(())
    }

    #[test]
    fn outcome_serializes_like_it_displays() -> Result<()> {
        for outcome in [
            RunOutcome::Running,
            RunOutcome::Exhausted,
            RunOutcome::ShortCircuited,
            RunOutcome::Failed,
        ] {
            let text = serde_json::to_string(&outcome)?;
            assert_eq!(text, format!("\"{outcome}\""));
            assert_eq!(serde_json::from_str::<RunOutcome>(&text)?, outcome);
        }
        Ok(())
    }

    #[test]
    fn size_hint_is_exact_once_done() {
        let mut it = Vec::<u8>::new().gather(of_integrator(|| (), |_: &mut (), x: u8| Ok(Step::emit(x))));
        assert_eq!(it.size_hint(), (0, None));
        assert!(it.next().is_none());
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert!(it.stats().is_done());
    }
}
