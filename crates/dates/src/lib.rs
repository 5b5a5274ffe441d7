//! `ledgerkit-dates` — fixed-pattern conversion between calendar values and
//! persistence text.
//!
//! Pure functions over their arguments; no state, no I/O, no timezone or
//! locale handling.

pub mod convert;

pub use convert::{
    DATE_FORMAT, DATE_TIME_FORMAT, format_date, format_date_time, parse_date, parse_date_time,
};
