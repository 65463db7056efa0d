//! Grouping and de-duplication: [`ConsecutiveGroup`] and [`Distinct`].

use crate::gatherer::{Gatherer, Step};
use anyhow::Result;
use std::collections::HashSet;
use std::hash::Hash;
use std::mem::replace;

/* ===================== ConsecutiveGroup ===================== */

/// Runs of equal adjacent elements, each emitted as one `Vec`.
///
/// - State: the current group
/// - Step: an element equal to the group's first element joins the group;
///   any other element closes the group (emitting it) and starts a new one
/// - Finisher: emits the last group, if any
///
/// Flattening the outputs reproduces the input, and no two adjacent groups
/// share a value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsecutiveGroup;

impl ConsecutiveGroup {
    /// Convenience constructor (same as `Default`).
    pub fn new() -> Self {
        Self
    }
}

impl<T: PartialEq> Gatherer<T, Vec<T>> for ConsecutiveGroup {
    type State = Vec<T>;

    fn init(&self) -> Vec<T> {
        Vec::new()
    }

    fn integrate(&self, group: &mut Vec<T>, item: T) -> Result<Step<Vec<T>>> {
        if group.first().is_none_or(|head| *head == item) {
            group.push(item);
            return Ok(Step::empty());
        }
        Ok(Step::emit(replace(group, vec![item])))
    }

    fn finish(&self, group: Vec<T>) -> Result<Vec<Vec<T>>> {
        if group.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![group])
        }
    }
}

/* ===================== Distinct ===================== */

/// First occurrence of every value, in input order.
///
/// - State: `HashSet<T>` of values already emitted
/// - Step: emits the element iff it was not seen before
/// - Finisher: none
///
/// Memory grows with the number of distinct values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Distinct;

impl Distinct {
    /// Convenience constructor (same as `Default`).
    pub fn new() -> Self {
        Self
    }
}

impl<T> Gatherer<T, T> for Distinct
where
    T: Eq + Hash + Clone,
{
    type State = HashSet<T>;

    fn init(&self) -> HashSet<T> {
        HashSet::new()
    }

    fn integrate(&self, seen: &mut HashSet<T>, item: T) -> Result<Step<T>> {
        if seen.insert(item.clone()) {
            Ok(Step::emit(item))
        } else {
            Ok(Step::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run;

    #[test]
    fn distinct_keeps_first_occurrences_in_order() -> Result<()> {
        let out = run(Distinct, vec![1, 1, 2, 3, 3, 3, 4, 5, 5, 1])?;
        assert_eq!(out, vec![1, 2, 3, 4, 5]);
        Ok(())
    }

    #[test]
    fn single_run_is_one_group() -> Result<()> {
        let out = run(ConsecutiveGroup, "aaaa".chars())?;
        assert_eq!(out, vec![vec!['a'; 4]]);
        Ok(())
    }
}
