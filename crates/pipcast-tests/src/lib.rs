//! Shared helpers for Pipcast integration tests.

pub mod helpers;
