//! Running accumulations: [`Scan`] and [`Fold`].
//!
//! Both thread a running value through a `combine(acc, element)` function
//! starting at `seed`. `Scan` emits every intermediate value; `Fold` emits
//! only the final one, from its finisher. For the same seed and input of
//! length N, the last of Scan's N outputs equals Fold's single output.

use crate::gatherer::{Gatherer, Step};
use anyhow::Result;
use std::mem::replace;

/* ===================== Scan ===================== */

/// Prefix scan: emits the running value after every element.
///
/// - State: running value, starting at `seed`
/// - Step: `running = combine(running, element)`; emits `running`
/// - Finisher: none
///
/// Requires `A: Clone` (the seed is cloned per run, the running value per step).
#[derive(Clone, Debug)]
pub struct Scan<A, F> {
    seed: A,
    combine: F,
}

impl<A, F> Scan<A, F> {
    /// Scan starting from `seed`, combining with `combine(running, element)`.
    pub fn new(seed: A, combine: F) -> Self {
        Self { seed, combine }
    }
}

impl<I, A, F> Gatherer<I, A> for Scan<A, F>
where
    A: Clone,
    F: Fn(A, I) -> A,
{
    type State = A;

    fn init(&self) -> A {
        self.seed.clone()
    }

    fn integrate(&self, running: &mut A, item: I) -> Result<Step<A>> {
        // `combine` takes the running value by value; park the seed meanwhile.
        let acc = replace(running, self.seed.clone());
        *running = (self.combine)(acc, item);
        Ok(Step::emit(running.clone()))
    }
}

/* ===================== Fold ===================== */

/// Ordered reduction: emits the final value once input is exhausted.
///
/// - State: running value, starting at `seed`
/// - Step: `running = combine(running, element)`; emits nothing
/// - Finisher: emits `running` (the seed itself for empty input)
#[derive(Clone, Debug)]
pub struct Fold<A, F> {
    seed: A,
    combine: F,
}

impl<A, F> Fold<A, F> {
    /// Fold starting from `seed`, combining with `combine(running, element)`.
    pub fn new(seed: A, combine: F) -> Self {
        Self { seed, combine }
    }
}

impl<I, A, F> Gatherer<I, A> for Fold<A, F>
where
    A: Clone,
    F: Fn(A, I) -> A,
{
    type State = A;

    fn init(&self) -> A {
        self.seed.clone()
    }

    fn integrate(&self, running: &mut A, item: I) -> Result<Step<A>> {
        let acc = replace(running, self.seed.clone());
        *running = (self.combine)(acc, item);
        Ok(Step::empty())
    }

    fn finish(&self, running: A) -> Result<Vec<A>> {
        Ok(vec![running])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run;

    #[test]
    fn scan_can_change_element_type() -> Result<()> {
        let lengths = Scan::new(0usize, |n: usize, s: &str| n + s.len());
        assert_eq!(run(&lengths, ["ab", "", "cde"])?, vec![2, 2, 5]);
        Ok(())
    }

    #[test]
    fn fold_is_reusable_across_runs() -> Result<()> {
        let product = Fold::new(1u64, |acc: u64, x: u64| acc * x);
        assert_eq!(run(&product, 1..=5)?, vec![120]);
        assert_eq!(run(&product, 2..=3)?, vec![6]);
        Ok(())
    }

    #[test]
    fn running_value_is_threaded_not_reseeded() -> Result<()> {
        let digits = Scan::new(String::from("#"), |acc: String, d: u8| format!("{acc}{d}"));
        assert_eq!(run(&digits, [1u8, 2, 3])?, vec!["#1", "#12", "#123"]);

        let digits = Fold::new(String::from("#"), |acc: String, d: u8| format!("{acc}{d}"));
        assert_eq!(run(&digits, [4u8, 5])?, vec!["#45"]);
        assert_eq!(run(&digits, Vec::<u8>::new())?, vec!["#"]);
        Ok(())
    }
}
