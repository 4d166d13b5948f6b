//! Shared utilities for the Scout workspace.
//!
//! Currently this is just the centralised `tracing` setup in
//! [`observability`]; it is kept as its own crate so binaries and
//! integration tests initialise logging the same way without pulling
//! in the bot or browser stacks.

pub mod observability;
