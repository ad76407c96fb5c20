//! Creational patterns workshop.
//!
//! The reusable core behind the demo binaries: an ordered part container,
//! a tag-dispatched builder contract, a director that sequences named
//! recipes, keyed factories over closed variant sets, a memoizing
//! factorial cache, and prototype templates with explicit duplication.
//! Each `src/bin/pattern_*` binary wires one pattern to a toy domain and
//! walks through it on the console; the library itself never prints.

pub mod builder;
pub mod director;
pub mod factory;
pub mod memo;
pub mod product;
pub mod prototype;

pub use builder::{BuildError, BuildStep, Builder};
pub use director::{Director, DirectorError};
pub use factory::FactoryError;
pub use memo::{FactorialCache, FactorialError};
pub use product::{Part, Product};
