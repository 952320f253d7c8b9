//! Runs cppcheck over the NeSTiNg model sources.
//!
//! The include paths for OMNeT++, INET and NeSTiNg are taken from the
//! `OMNETPP`, `INET` and `NESTING` environment variables.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;
