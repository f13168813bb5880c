//! Application services layer.

pub mod board;
pub mod error;
pub mod repos;
pub mod stream;
