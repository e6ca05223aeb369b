pub mod blocks;
pub mod config;
