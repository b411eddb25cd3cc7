//! reelhub - movie and TV browsing backend
//!
//! This library crate exposes the binary's configuration handling for
//! integration testing. The server itself lives in `rh-server`.

pub mod config;
