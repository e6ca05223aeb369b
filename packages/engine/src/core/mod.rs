//! Core utilities shared by every layer (logging).

pub mod log;
