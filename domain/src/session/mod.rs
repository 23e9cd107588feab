//! Session entities

pub mod entities;
