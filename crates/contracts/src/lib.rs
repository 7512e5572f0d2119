//! Shared types and pure logic of the console: access control, response
//! normalization and view models. Target-independent, used by the frontend
//! and tested natively.

pub mod shared;
pub mod system;
