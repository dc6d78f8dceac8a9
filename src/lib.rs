pub mod config;
pub mod constants;
pub mod errors;
pub mod geolocation;
pub mod handlers;
pub mod types;
pub mod utils;
