mod views;
pub mod utils;
pub mod persist;
pub mod stores;
mod routes;
pub mod configs;
mod error;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::stores::*;
pub use crate::error::StorageError;
