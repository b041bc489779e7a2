//! tests/api/main.rs
mod aggregate;
mod helpers;
