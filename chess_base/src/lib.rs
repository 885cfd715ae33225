//! # Base types for regicide
//!
//! This is an auxiliary crate for `regicide`, which contains the board geometry: squares, colors,
//! pieces and square sets. Nothing here knows how pieces move.
//!
//! Normally you don't want to use this crate directly. Use `regicide` instead.

pub mod bitboard;
pub mod geometry;
pub mod types;
