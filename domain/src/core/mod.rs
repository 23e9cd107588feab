//! Core value objects

pub mod credential;
pub mod model;
