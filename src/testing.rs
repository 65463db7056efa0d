//! Testing utilities for gatherers.
//!
//! - **Assertions**: compare run outputs with expected results and check the
//!   structural properties windows and groups must satisfy.
//! - **Probe**: wrap any gatherer to count how often `init`, `integrate` and
//!   `finish` are invoked.
//!
//! # Quick Start
//!
//! ```
//! use gatherbeam::*;
//! use gatherbeam::testing::*;
//!
//! let probe = Probe::new(Fold::new(0, |a: i32, x: i32| a + x));
//! let out = run(&probe, Vec::<i32>::new())?;
//!
//! assert_collections_equal(&out, &[0]);
//! assert_eq!(probe.counts().integrate, 0);
//! assert_eq!(probe.counts().finish, 1);
//! # anyhow::Result::<()>::Ok(())
//! ```

pub mod assertions;
pub mod probe;

pub use assertions::*;
pub use probe::{Probe, ProbeCounts};
