//! Utility modules for Artistly

pub mod network;
pub mod parsers;
