//! Game implementations.

pub mod dutch;
pub mod papayoo;
