pub mod routes;

pub use routes::{AppRoutes, Route};
