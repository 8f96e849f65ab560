pub mod health;
pub mod products;

pub use health::{liveness_check, readiness_check};
pub use products::{add_product, get_product, get_products};
