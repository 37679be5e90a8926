//! Core library components.

pub mod document;
pub mod inputs;
pub mod keystore;
pub mod publish;
pub mod secret;
