//! # Order Desk Library
//!
//! This library exposes the desk's components for integration testing.

pub mod board;
pub mod catalog;
pub mod composer;
pub mod lifecycle;
pub mod model;
