//! Calendar cursor and month grid derivation.
//!
//! # Responsibility
//! - Track the displayed month/year and wrap it across year boundaries.
//! - Derive the Monday-first month grid joining document dates and user
//!   events.
//!
//! # Invariants
//! - `month` is 0-based (0 = January) and always stays in `0..=11`.
//! - Grid derivation is pure; state lives in the cursor and the service.

mod cursor;
mod grid;

pub use cursor::MonthCursor;
pub use grid::{DayCell, MonthGrid};
