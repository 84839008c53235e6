pub mod cli;
pub mod config;
pub mod data_loader;
pub mod errors;
pub mod intake;
pub mod nutrients;
pub mod records;
pub mod view;

pub use errors::IntakeError;
