pub mod custom_reply;
pub mod error_reply;
pub mod route_convert;
pub mod route_index;
pub mod routes;
