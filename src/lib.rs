//! Promocal - Tour promotion calendar and booking availability.
//!
//! This crate implements the date-range core of a tour-promotion calendar:
//! an inclusive range predicate over string-dated records, a pure month-grid
//! generator, and a stable projector from a promotion list onto a calendar
//! day. Around that core sits the REST boundary the calendar consumes
//! (promotions list, availability check, booking creation) and a small CLI.
//!
//! # Modules
//!
//! - [`calendar`] - Inclusive date ranges, month grids, date formatting
//! - [`projector`] - Per-day filtering of promotions (stable order)
//! - [`domain`] - Promotion, booking, and availability types
//! - [`api`] - REST client for the tour backend
//! - [`config`] - Configuration loading from TOML files
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use promocal::calendar::{is_date_in_range, MonthGrid};
//!
//! let day = NaiveDate::from_ymd_opt(2025, 9, 3).unwrap();
//! assert!(is_date_in_range(day, "2025-09-01", "2025-09-05"));
//!
//! let grid = MonthGrid::new(day, day);
//! assert_eq!(grid.cells().len() % 7, 0);
//! ```

pub mod api;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod projector;
