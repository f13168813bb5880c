//! Server-rendered views and askama templates.

pub mod board;
pub mod views;
