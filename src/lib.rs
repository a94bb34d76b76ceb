pub mod background;
pub mod config;
