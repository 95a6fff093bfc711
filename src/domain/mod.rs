//! Domain Layer
//!
//! The address model, the error taxonomy and the ports providers plug into.
//! Nothing in here performs I/O.

pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;
