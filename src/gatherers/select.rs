//! Element selection: [`SkipTake`], [`Map`], [`Filter`], [`Limit`] and [`TakeWhile`].
//!
//! `Limit` and `TakeWhile` are the short-circuiting members of the family: they
//! stop the run instead of draining the rest of the input, so they are safe to
//! use on unbounded sources.

use crate::error::{GatherError, GatherResult};
use crate::gatherer::{Gatherer, Step};
use anyhow::Result;

/* ===================== SkipTake ===================== */

/// Alternately drops `skip` elements and keeps `take` elements.
///
/// - State: position within the current `skip + take` cycle
/// - Step: emits the element iff its position is `>= skip`
/// - Finisher: none
///
/// `SkipTake::new(1, 2)` over `1..=9` keeps `[2, 3, 5, 6, 8, 9]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkipTake {
    skip: usize,
    take: usize,
    period: usize,
}

impl SkipTake {
    /// Fails with [`GatherError::InvalidArgument`] when `skip + take` is zero
    /// or overflows.
    pub fn new(skip: usize, take: usize) -> GatherResult<Self> {
        let period = skip
            .checked_add(take)
            .ok_or_else(|| GatherError::invalid("skip + take", "cycle length overflows usize"))?;
        if period == 0 {
            return Err(GatherError::invalid(
                "skip + take",
                "cycle length must be greater than zero",
            ));
        }
        Ok(Self { skip, take, period })
    }

    /// Elements dropped at the start of every cycle.
    pub fn skip(&self) -> usize {
        self.skip
    }

    /// Elements kept at the end of every cycle.
    pub fn take(&self) -> usize {
        self.take
    }
}

impl<T> Gatherer<T, T> for SkipTake {
    type State = usize;

    fn init(&self) -> usize {
        0
    }

    fn integrate(&self, pos: &mut usize, item: T) -> Result<Step<T>> {
        let current = *pos;
        *pos = (current + 1) % self.period;
        if current < self.skip {
            Ok(Step::empty())
        } else {
            Ok(Step::emit(item))
        }
    }
}

/* ===================== Map ===================== */

/// Stateless one-to-one transform; mostly useful inside [`and_then`](Gatherer::and_then) chains.
#[derive(Clone, Debug)]
pub struct Map<F>(pub F);

impl<F> Map<F> {
    /// Same as `Map(f)`.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<I, O, F> Gatherer<I, O> for Map<F>
where
    F: Fn(I) -> O,
{
    type State = ();

    fn init(&self) {}

    fn integrate(&self, _state: &mut (), item: I) -> Result<Step<O>> {
        Ok(Step::emit((self.0)(item)))
    }
}

/* ===================== Filter ===================== */

/// Keeps elements matching a predicate.
#[derive(Clone, Debug)]
pub struct Filter<P>(pub P);

impl<P> Filter<P> {
    /// Same as `Filter(pred)`.
    pub fn new(pred: P) -> Self {
        Self(pred)
    }
}

impl<T, P> Gatherer<T, T> for Filter<P>
where
    P: Fn(&T) -> bool,
{
    type State = ();

    fn init(&self) {}

    fn integrate(&self, _state: &mut (), item: T) -> Result<Step<T>> {
        if (self.0)(&item) {
            Ok(Step::emit(item))
        } else {
            Ok(Step::empty())
        }
    }
}

/* ===================== Limit ===================== */

/// Emits at most `n` elements, then stops the run.
///
/// The stop is signalled together with the `n`-th element, so no extra element
/// is pulled from the input. `Limit::new(0)` stops on the first element
/// without emitting it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limit {
    n: usize,
}

impl Limit {
    /// Keep the first `n` elements. Never fails: `n == 0` is valid.
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl<T> Gatherer<T, T> for Limit {
    type State = usize;

    fn init(&self) -> usize {
        0
    }

    fn integrate(&self, emitted: &mut usize, item: T) -> Result<Step<T>> {
        if *emitted >= self.n {
            return Ok(Step::stop());
        }
        *emitted += 1;
        if *emitted == self.n {
            Ok(Step::Stop(vec![item]))
        } else {
            Ok(Step::emit(item))
        }
    }
}

/* ===================== TakeWhile ===================== */

/// Emits elements while the predicate holds; the first failing element stops
/// the run and is dropped.
#[derive(Clone, Debug)]
pub struct TakeWhile<P>(pub P);

impl<P> TakeWhile<P> {
    /// Same as `TakeWhile(pred)`.
    pub fn new(pred: P) -> Self {
        Self(pred)
    }
}

impl<T, P> Gatherer<T, T> for TakeWhile<P>
where
    P: Fn(&T) -> bool,
{
    type State = ();

    fn init(&self) {}

    fn integrate(&self, _state: &mut (), item: T) -> Result<Step<T>> {
        if (self.0)(&item) {
            Ok(Step::emit(item))
        } else {
            Ok(Step::stop())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run;

    #[test]
    fn skip_take_rejects_empty_cycle() {
        assert!(SkipTake::new(0, 0).is_err());
        assert!(SkipTake::new(usize::MAX, 1).is_err());
        assert!(SkipTake::new(0, 1).is_ok());
    }

    #[test]
    fn skip_zero_keeps_everything() -> Result<()> {
        assert_eq!(run(SkipTake::new(0, 3)?, 1..=5)?, vec![1, 2, 3, 4, 5]);
        Ok(())
    }

    #[test]
    fn take_zero_drops_everything() -> Result<()> {
        let out: Vec<i32> = run(SkipTake::new(2, 0)?, 1..=5)?;
        assert!(out.is_empty());
        Ok(())
    }

    #[test]
    fn limit_zero_stops_immediately() -> Result<()> {
        let out: Vec<u8> = run(Limit::new(0), 0u8..)?;
        assert!(out.is_empty());
        Ok(())
    }

    #[test]
    fn map_and_filter_are_element_wise() -> Result<()> {
        assert_eq!(run(Map::new(|x: i32| x * 10), vec![1, 2])?, vec![10, 20]);
        assert_eq!(run(Filter::new(|x: &i32| x % 2 == 0), 1..=6)?, vec![2, 4, 6]);
        Ok(())
    }
}
