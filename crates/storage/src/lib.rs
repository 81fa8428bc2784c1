#![warn(clippy::pedantic)]

pub mod backend;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod rest;

pub use backend::Backend;
