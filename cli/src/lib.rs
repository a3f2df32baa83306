//! Command-line front end for the polynomial calculator.
//!
//! The binary reads two coefficient lists, runs one operation and prints a short
//! report. Everything except argument parsing and printing lives here so it can
//! be tested without spawning a process.

pub mod parsers;
pub mod report;
