//! # chronokit
//!
//! Millisecond duration constructors and calendar arithmetic over
//! epoch-millisecond instants.
//!
//! The crate is a thin convenience layer: [`duration`] turns human time
//! units into a normalized millisecond count, and [`time`] builds
//! calendar-aware operations (add, compare, format, parse, truncate) on top
//! of the [`Instant`] value type. Every function is a pure computation over
//! its inputs except [`time::now`], which samples the [`SystemClock`] —
//! deterministic callers implement [`Clock`] and supply their own provider.
//!
//! ## Modules
//!
//! - [`duration`] — unit constructors (seconds through weeks) → milliseconds
//! - [`instant`] — the epoch-millisecond [`Instant`] type and its civil views
//! - [`clock`] — the injectable current-instant provider
//! - [`time`] — calendar arithmetic, formatting, parsing, truncation
//!
//! ## Example
//!
//! ```
//! use chronokit::time;
//!
//! let start = time::parse("2024-01-01T00:00:00.000Z");
//! let end = time::add(start, time::hours(10.0));
//! assert!(time::before(start, end));
//! assert_eq!(time::format(end, time::LAYOUT_TIME, true), "10:00");
//! ```

pub mod clock;
pub mod duration;
pub mod instant;
pub mod time;

pub use clock::{Clock, SystemClock};
pub use instant::Instant;
