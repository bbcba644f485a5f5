pub mod analyzer;
pub mod config;
pub mod gate;
pub mod model;
pub mod normalizer;
pub mod render;
pub mod server;
pub mod utils;
