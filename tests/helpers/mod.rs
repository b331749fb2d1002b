// Shared fixtures for unit, contract and integration tests.
//
// Include from a test target with:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;

#![allow(dead_code)]

pub mod assertions;
pub mod test_data;

pub use assertions::*;
pub use test_data::*;
