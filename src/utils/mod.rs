pub mod errors;
mod constants;
mod constants_config;

pub use errors::*;
pub use constants::*;
pub use constants_config::*;

#[cfg(test)]
mod constants_config_tests;
