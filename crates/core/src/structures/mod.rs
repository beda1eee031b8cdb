//! Hydrated domain entities.

pub mod sample;
