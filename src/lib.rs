//! Counts fixed-length knight paths over a small board of symbols, voiding
//! any path once it has landed on a threshold number of restricted cells.

pub mod app;
pub mod board;
pub mod path;
