//! The [`Gatherer`] trait and closure-built descriptors.
//!
//! A gatherer is an immutable *descriptor* of a sequential state machine:
//!
//! - [`init`](Gatherer::init) produces a fresh state at the start of every run,
//! - [`integrate`](Gatherer::integrate) consumes one element, mutates the state
//!   and reports zero or more outputs plus whether the run should continue,
//! - [`finish`](Gatherer::finish) flushes trailing outputs once input is exhausted.
//!
//! The descriptor itself never holds run data, so one value can drive any number
//! of runs (sequentially through `&G`, or concurrently from several threads when
//! `G: Sync`).
//!
//! # Example
//! ```
//! use gatherbeam::*;
//!
//! // Emit the running maximum, stopping as soon as it exceeds 10.
//! let running_max = of_integrator(
//!     || i32::MIN,
//!     |max: &mut i32, x: i32| {
//!         *max = (*max).max(x);
//!         Ok(if *max > 10 { Step::stop() } else { Step::emit(*max) })
//!     },
//! );
//!
//! let out = run(&running_max, vec![3, 1, 7, 12, 4])?;
//! assert_eq!(out, vec![3, 3, 7]);
//! # anyhow::Result::<()>::Ok(())
//! ```

use crate::chain::AndThen;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Outcome of integrating one element: the outputs it produced, tagged with
/// whether the run should keep pulling input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step<O> {
    /// Emit these outputs and keep going.
    Continue(Vec<O>),
    /// Emit these outputs, then end the run without invoking the finisher.
    Stop(Vec<O>),
}

impl<O> Step<O> {
    /// Continue without emitting anything.
    #[inline]
    pub fn empty() -> Self {
        Step::Continue(Vec::new())
    }

    /// Continue after emitting a single output.
    #[inline]
    pub fn emit(out: O) -> Self {
        Step::Continue(vec![out])
    }

    /// Stop without emitting anything.
    #[inline]
    pub fn stop() -> Self {
        Step::Stop(Vec::new())
    }

    /// Whether this step ends the run.
    #[inline]
    pub fn is_stop(&self) -> bool {
        matches!(self, Step::Stop(_))
    }

    /// Outputs produced by this step, in emission order.
    #[inline]
    pub fn outputs(&self) -> &[O] {
        match self {
            Step::Continue(v) | Step::Stop(v) => v,
        }
    }

    /// Split into `(outputs, keep_going)`.
    #[inline]
    pub fn into_parts(self) -> (Vec<O>, bool) {
        match self {
            Step::Continue(v) => (v, true),
            Step::Stop(v) => (v, false),
        }
    }
}

/// A sequential, stateful stream operator from `I` to `O`.
///
/// Implementations must not assume their steps are commutative: the driver
/// always integrates elements one at a time, in input order, against a state
/// that belongs to exactly one run.
pub trait Gatherer<I, O> {
    /// Per-run mutable state.
    type State;

    /// Create the state for a new run.
    fn init(&self) -> Self::State;

    /// Consume one element.
    ///
    /// Returning an error ends the run immediately; the error is handed to
    /// the caller as-is.
    fn integrate(&self, state: &mut Self::State, item: I) -> Result<Step<O>>;

    /// Flush trailing outputs after the last element.
    ///
    /// Called exactly once per run that was not short-circuited, including
    /// runs over empty input. The default emits nothing.
    fn finish(&self, state: Self::State) -> Result<Vec<O>> {
        drop(state);
        Ok(Vec::new())
    }

    /// Chain `next` after this gatherer, producing a single `I -> P` descriptor.
    ///
    /// See [`AndThen`] for the exact flushing and short-circuit rules.
    fn and_then<P, B>(self, next: B) -> AndThen<Self, B, O>
    where
        Self: Sized,
        B: Gatherer<O, P>,
    {
        AndThen::new(self, next)
    }
}

impl<I, O, G> Gatherer<I, O> for &G
where
    G: Gatherer<I, O> + ?Sized,
{
    type State = G::State;

    #[inline]
    fn init(&self) -> Self::State {
        (**self).init()
    }

    #[inline]
    fn integrate(&self, state: &mut Self::State, item: I) -> Result<Step<O>> {
        (**self).integrate(state, item)
    }

    #[inline]
    fn finish(&self, state: Self::State) -> Result<Vec<O>> {
        (**self).finish(state)
    }
}

/* ===================== FnGatherer ===================== */

/// A gatherer assembled from three closures.
///
/// Built with [`of_sequential`] or [`of_integrator`].
#[derive(Clone)]
pub struct FnGatherer<S, Init, Int, Fin> {
    init: Init,
    integrate: Int,
    finish: Fin,
    _s: PhantomData<fn() -> S>,
}

impl<I, O, S, Init, Int, Fin> Gatherer<I, O> for FnGatherer<S, Init, Int, Fin>
where
    Init: Fn() -> S,
    Int: Fn(&mut S, I) -> Result<Step<O>>,
    Fin: Fn(S) -> Result<Vec<O>>,
{
    type State = S;

    fn init(&self) -> S {
        (self.init)()
    }

    fn integrate(&self, state: &mut S, item: I) -> Result<Step<O>> {
        (self.integrate)(state, item)
    }

    fn finish(&self, state: S) -> Result<Vec<O>> {
        (self.finish)(state)
    }
}

/// Build a gatherer from an initializer, an integrator and a finisher.
///
/// ```
/// use gatherbeam::*;
///
/// // Group consecutive duplicates by hand.
/// let groups = of_sequential(
///     Vec::<i32>::new,
///     |group: &mut Vec<i32>, x: i32| {
///         if group.first().is_none_or(|f| *f == x) {
///             group.push(x);
///             return Ok(Step::empty());
///         }
///         Ok(Step::emit(std::mem::replace(group, vec![x])))
///     },
///     |group: Vec<i32>| Ok(if group.is_empty() { vec![] } else { vec![group] }),
/// );
///
/// let out = run(&groups, vec![1, 1, 2, 3, 3])?;
/// assert_eq!(out, vec![vec![1, 1], vec![2], vec![3, 3]]);
/// # anyhow::Result::<()>::Ok(())
/// ```
pub fn of_sequential<I, O, S, Init, Int, Fin>(
    init: Init,
    integrate: Int,
    finish: Fin,
) -> FnGatherer<S, Init, Int, Fin>
where
    Init: Fn() -> S,
    Int: Fn(&mut S, I) -> Result<Step<O>>,
    Fin: Fn(S) -> Result<Vec<O>>,
{
    FnGatherer {
        init,
        integrate,
        finish,
        _s: PhantomData,
    }
}

/// Build a gatherer with no finisher.
pub fn of_integrator<I, O, S, Init, Int>(
    init: Init,
    integrate: Int,
) -> FnGatherer<S, Init, Int, fn(S) -> Result<Vec<O>>>
where
    Init: Fn() -> S,
    Int: Fn(&mut S, I) -> Result<Step<O>>,
{
    of_sequential(init, integrate, no_finish::<S, O>)
}

fn no_finish<S, O>(_state: S) -> Result<Vec<O>> {
    Ok(Vec::new())
}
