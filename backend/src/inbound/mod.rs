//! Inbound adapters translating external requests into driving port calls.
//!
//! HTTP is the only transport; handlers live under [`http`].

pub mod http;
