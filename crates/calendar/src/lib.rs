//! # tmy-calendar
//!
//! Pure hour arithmetic for the 8760-hour no-leap year.
//!
//! An hourly record covering one non-leap calendar year holds exactly 8760
//! values, January 1st 00:00 first. Each calendar month occupies a fixed,
//! contiguous hour range within that record; the twelve ranges tile the year
//! with no gap or overlap.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tmy_calendar::{HOURS_PER_YEAR, MonthWindow, month_windows};
//!
//! // February occupies hours 744..1416 (28 days x 24).
//! let feb = MonthWindow::for_month(2)?;
//! assert_eq!(feb.range(), 744..1416);
//!
//! // The twelve windows partition the year in calendar order.
//! let total: usize = month_windows().iter().map(|w| w.hours()).sum();
//! assert_eq!(total, HOURS_PER_YEAR);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `window` | Month windows and the fixed hour tables |
//! | `error` | Error types |

mod error;
mod window;

pub use error::CalendarError;
pub use window::{
    HOURS_PER_MONTH, HOURS_PER_YEAR, MONTH_NAMES, MONTH_START_HOUR, MonthWindow, month_windows,
};
