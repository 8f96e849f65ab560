//! service-core: infrastructure shared by the catalog services.
pub mod config;
pub mod error;
pub mod observability;
