//! # Game Catalog
//!
//! The vocabulary of the game advisor: the ten questions and their answers,
//! the platforms and genres derived from them, and the table of titles that
//! can be recommended. This crate holds no inference logic.

pub mod catalog;
pub mod questions;
pub mod session;

pub use catalog::*;
pub use questions::*;
pub use session::*;
