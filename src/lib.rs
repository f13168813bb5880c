//! postboard: a server-rendered board for the posts held by a remote REST service.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
