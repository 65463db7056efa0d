//! Composition of two gatherers into one descriptor.
//!
//! `a.and_then(b)` does not nest closures: it builds an [`AndThen`] value whose
//! state is an explicit pair of both upstream and downstream states, so the
//! lifetime of each state is exactly the lifetime of the composed run.

use crate::gatherer::{Gatherer, Step};
use anyhow::Result;
use std::marker::PhantomData;

/// Two gatherers `A: I -> M` and `B: M -> O` fused into one `I -> O` gatherer.
///
/// Rules:
/// - every output of `A` (from a step or from its finisher) is fed to `B`'s
///   step, in order;
/// - `B`'s finisher runs only after `A`'s finisher has been fully drained
///   into `B`;
/// - when `B` stops part-way through a batch from `A`, the composed run stops
///   and the remainder of that batch is dropped;
/// - when `A` stops, its last batch is still fed to `B`, then the composed run
///   stops. Neither finisher runs after a stop.
///
/// ```
/// use gatherbeam::*;
///
/// let running_sum = Scan::new(0, |acc: i32, x: i32| acc + x);
/// let small = TakeWhile::new(|x: &i32| *x < 10);
///
/// let out = run(&running_sum.and_then(small), 1..)?;
/// assert_eq!(out, vec![1, 3, 6]);
/// # anyhow::Result::<()>::Ok(())
/// ```
#[derive(Clone, Debug)]
pub struct AndThen<A, B, M> {
    first: A,
    second: B,
    _mid: PhantomData<fn(M) -> M>,
}

/// Run state of an [`AndThen`].
pub struct AndThenState<SA, SB> {
    first: SA,
    second: SB,
}

impl<A, B, M> AndThen<A, B, M> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            _mid: PhantomData,
        }
    }

    /// The upstream gatherer.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// The downstream gatherer.
    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<A, B, M> AndThen<A, B, M> {
    /// Feed a batch of intermediate values to the downstream gatherer.
    ///
    /// Appends downstream outputs to `out`; returns `false` once the downstream stopped.
    fn feed<O>(
        &self,
        state: &mut <B as Gatherer<M, O>>::State,
        batch: Vec<M>,
        out: &mut Vec<O>,
    ) -> Result<bool>
    where
        B: Gatherer<M, O>,
    {
        for mid in batch {
            let (emitted, more) = self.second.integrate(state, mid)?.into_parts();
            out.extend(emitted);
            if !more {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<I, M, O, A, B> Gatherer<I, O> for AndThen<A, B, M>
where
    A: Gatherer<I, M>,
    B: Gatherer<M, O>,
{
    type State = AndThenState<A::State, B::State>;

    fn init(&self) -> Self::State {
        AndThenState {
            first: self.first.init(),
            second: self.second.init(),
        }
    }

    fn integrate(&self, state: &mut Self::State, item: I) -> Result<Step<O>> {
        let (batch, upstream_more) = self.first.integrate(&mut state.first, item)?.into_parts();
        let mut out = Vec::new();
        let downstream_more = self.feed(&mut state.second, batch, &mut out)?;
        if upstream_more && downstream_more {
            Ok(Step::Continue(out))
        } else {
            Ok(Step::Stop(out))
        }
    }

    fn finish(&self, state: Self::State) -> Result<Vec<O>> {
        let AndThenState { first, mut second } = state;
        let tail = self.first.finish(first)?;
        let mut out = Vec::new();
        if self.feed(&mut second, tail, &mut out)? {
            out.extend(self.second.finish(second)?);
        }
        Ok(out)
    }
}
