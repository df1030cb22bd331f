//! Core types shared across ccdiff facilities
//!
//! This crate provides the canonical schema constants used by both the
//! error and logging facilities, so that every crate in the workspace
//! emits the same field keys and event names.

pub mod schema;
