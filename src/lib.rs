//! Terminal typing speed test.
//!
//! A round fetches ten random words from a word service, the user types them
//! out, and the result is reported as words per minute and accuracy.

pub mod app;
pub mod config;
pub mod event;
pub mod generator;
pub mod logging;
pub mod session;
pub mod ui;
