//! Shared library surface for the upto server and its tests.

pub mod api;
pub mod cache;
pub mod config;
pub mod state;
pub mod trail_search;
