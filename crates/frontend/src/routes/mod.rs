pub mod routes;
pub mod section;
