//! Lightweight six-field cron expression parser.
#![deny(unsafe_code, warnings, missing_docs)]

//! This is a tiny crate, intended to:
//! - parse six-field cron schedule expressions into a structured form;
//! - report malformed expressions with the expected construct and its exact position.
//!
//! _This is not a cron jobs scheduler or runner_, and it doesn't compute event times:
//! the parsed [`Schedule`] exposes the fields and their items as written, so a consumer
//! can match or expand them with whatever calendar semantics it needs.
//!
//! ## Cron expression format
//!
//! An expression consists of exactly six fields, in this order, separated by exactly
//! one whitespace character each:
//!
//! | Field        | Allowed values  | Allowed special characters |
//! |--------------|-----------------|----------------------------|
//! | Seconds      | 0-59            | * , - /                    |
//! | Minutes      | 0-59            | * , - /                    |
//! | Hours        | 0-23            | * , - /                    |
//! | Day of Month | 1-31            | * , - /                    |
//! | Month        | 1-12 or JAN-DEC | * , - /                    |
//! | Day of Week  | 0-6 or SUN-SAT  | * , - /                    |
//!
//! Patterns meanings:
//! - `*` - any value;
//! - `,` - list of items, i.e. `1,7,12`, `JAN,JUN-AUG`;
//! - `-` - range of values, i.e. `0-15`, `JAN-MAR`;
//! - `/` - step, i.e. `*/12`, `10/5`, `30-59/2`.
//!
//! Month and day of week mnemonics are uppercase three-letter English names,
//! `JAN`-`DEC` mapped to 1-12 and `SUN`-`SAT` mapped to 0-6; lowercase or
//! mixed-case forms are rejected. Numeric values may carry leading zeros.
//!
//! The parser checks every value against its field's bounds but doesn't interpret
//! items beyond that:
//! - range bounds are kept in source order, so `10-5` or `FRI-MON` parse as written
//!   and the consumer decides whether such a range wraps or is empty;
//! - any step that fits the step type is kept, including `0`;
//! - list items may repeat and may mix `*` with values.
//!
//! ## How to use
//!
//! The entry point of the crate is the [`Schedule`] structure: [`Schedule::new`]
//! parses an expression, and the per-field accessors expose the parsed [`Field`]s
//! with their [`Item`]s.
//!
//! ### Example with field inspection
//! ```rust
//! use cron_expr::{Result, Schedule};
//!
//! fn inspect() -> Result<()> {
//!     let schedule = Schedule::new("0 0,15,30,45 * 1-30/2 JUN-AUG,DEC-FEB MON-FRI")?;
//!
//!     for (name, field) in [
//!         ("seconds:", schedule.second()),
//!         ("minutes:", schedule.minute()),
//!         ("hours:", schedule.hour()),
//!         ("day of month:", schedule.day_of_month()),
//!         ("month:", schedule.month()),
//!         ("day of week:", schedule.day_of_week()),
//!     ] {
//!         let items: Vec<String> = field
//!             .items()
//!             .iter()
//!             .map(|item| format!("{}-{}:{}", item.start(), item.end(), item.step()))
//!             .collect();
//!         println!("{name:<15}{}", items.join(", "));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Example with a malformed expression
//! ```rust
//! use cron_expr::Schedule;
//!
//! let error = Schedule::new("0 0 0 1 FOO MON").unwrap_err();
//! assert_eq!(error.to_string(), "expecting 'month value' at position 9");
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`Schedule`].

/// Crate specific Error implementation.
pub mod error;
/// Fields of a parsed schedule and their items.
pub mod field;
mod parser;
/// Cron schedule expression parser.
pub mod schedule;
mod utils;

// Re-export of public entities.
pub use error::CronError;
pub use field::{Field, Item, ItemValueType};
pub use schedule::Schedule;

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
