//! Pagelet - a small interactive contact-page demo.
//!
//! Three independent page behaviors, each attached to its own region of a
//! single window: a contact form with inline validation, a bounded-below
//! counter, and a dark-mode toggle.

pub mod app;
pub mod ui;
