pub mod api;
pub mod config;
pub mod model;
pub mod routes;
pub mod spa;
pub mod store;
