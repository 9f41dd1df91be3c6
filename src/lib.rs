//! Library exports for conduit-shell, shared between the binary and tests.

pub mod client;
pub mod config;
pub mod credential;
pub mod models;
pub mod navigator;
pub mod routes;
pub mod shell;
pub mod storage;
pub mod store;
pub mod utils;
