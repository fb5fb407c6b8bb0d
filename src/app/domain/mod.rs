//! Core data structures, independent of any widget.
//!
//! Everything in here is plain data and plain functions so it can be tested
//! without an FLTK display.

pub mod counter;
pub mod form;
pub mod theme;
