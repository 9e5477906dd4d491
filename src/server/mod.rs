pub mod app;
mod deserializers;
pub mod error;
mod extract;
mod routes;
