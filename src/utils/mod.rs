pub mod errors;
pub mod constants;
pub mod layout_config;

pub use errors::*;
pub use constants::*;
pub use layout_config::*;

#[cfg(test)]
mod layout_config_tests;
