//! Terminal presentation
//!
//! Compiler output itself is formatted by [`crate::report`]; this module
//! covers everything elm-live prints about its own work.

pub mod blocks;
pub mod console;
pub mod context;
pub mod error;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
