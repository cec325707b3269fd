pub mod cookies;
pub mod routes;
