pub mod library;
pub mod models;
pub mod routes;
