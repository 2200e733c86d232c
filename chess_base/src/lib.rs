//! # Base types for movelaw
//!
//! This is an auxiliary crate for `movelaw`, which contains squares, colors, piece kinds and
//! square sets. It was split from the main crate, so everything declared here can be used in
//! the build script for `movelaw`.
//!
//! Normally you don't want to use this crate directly. Use `movelaw` instead.

pub mod bitboard;
pub mod bitboard_consts;
pub mod geometry;
pub mod types;
