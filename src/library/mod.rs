pub mod logger;
pub mod resource_uri;
pub mod sync;
