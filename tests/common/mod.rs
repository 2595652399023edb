//! Shared fixtures for integration tests

pub mod fixture;

pub use fixture::{build_fixture, FixtureConfig};
