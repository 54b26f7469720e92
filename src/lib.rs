//! fpkit – small functional building blocks and a date helper.
//!
//! The crate is a set of pure transformations:
//! * [`combinator`] – Currying with an explicit arity ([`combinator::curry`]),
//!   prefix binding ([`combinator::partial`], [`combinator::partial1`]),
//!   left-to-right and right-to-left composition ([`combinator::pipe`],
//!   [`combinator::compose`], [`combinator::Pipeline`], [`pipe!`],
//!   [`compose!`]), branching
//!   ([`combinator::if_else`]) and a handful of function builders (`once`,
//!   `identity`, `not`, `negate`).
//! * [`future`] – The same composition and branching for async stages. Stages
//!   are awaited strictly one after the other.
//! * [`collection`] – Non-mutating slice utilities (`map`, `filter`, `batch`,
//!   `uniq`, `sort`, ...). Every transform returns a new `Vec`.
//! * [`record`] – Key-ordered JSON objects ([`record::Record`]) and the
//!   `pick`/`project`/`omit_by` family.
//! * [`predicate`] – Nil and emptiness checks, strict equality, `default_to`.
//! * [`date`] – Normalizes strings, epoch milliseconds, chrono values and JSON
//!   values into a UTC instant, renders it (epoch, ISO, locale) and builds
//!   comparators and sorters over a named property.
//!
//! ## Arguments
//! Curried functions collect a `Vec<A>` of uniformly typed arguments; use an
//! enum or `serde_json::Value` when they differ. Pipelines take a single entry
//! argument, so several values go in as a tuple.
//!
//! ## Quick Start
//! ```
//! use fpkit::combinator::{curry, pipe, unary};
//! use fpkit::date::sort_by_prop;
//! use serde_json::json;
//!
//! let add = curry(|args: Vec<i64>| args.iter().sum::<i64>(), 2);
//! let add_one = add.call([1]).into_partial().unwrap();
//! assert_eq!(add_one.call([41]).ready(), Some(42));
//!
//! let shout = pipe(|s: &str| s.to_uppercase(), vec![unary(|s: String| s + "!")]);
//! assert_eq!(shout("hey"), "HEY!");
//!
//! let oldest_first = sort_by_prop("at", true);
//! let sorted = oldest_first(&[json!({"at": 3}), json!({"at": 1})]).unwrap();
//! assert_eq!(sorted, vec![json!({"at": 1}), json!({"at": 3})]);
//! ```
//!
//! ## Errors
//! Only the date helper, `batch` and settings loading can fail; they return
//! [`Result`] with an [`FpkitError`]. Panics raised by caller-supplied
//! closures propagate untouched.
//!
//! ## Settings & Logging
//! [`settings::Settings`] reads the default locale and UTC offset from an
//! optional `fpkit` file and `FPKIT_*` environment variables.
//! [`logging::init`] installs a `tracing` subscriber honoring `RUST_LOG`.

pub mod collection;
pub mod combinator;
pub mod date;
pub mod future;
pub mod logging;
pub mod predicate;
pub mod record;
pub mod settings;

mod error;

pub use error::{FpkitError, Result};
