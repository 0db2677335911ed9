pub mod decode;
pub mod filename;
pub mod persist;
pub mod request;
