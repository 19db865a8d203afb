//! Gratitude journal service library.
//!
//! Users keep one journal each and write at most one gratitude entry per
//! day. The crate follows a hexagonal layout: [`domain`] holds entities,
//! services and ports; [`inbound`] exposes them over HTTP; [`outbound`]
//! stores them in memory or in PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seed;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
