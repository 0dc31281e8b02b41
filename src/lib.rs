//! OneLogin AWS connector configuration
//!
//! Library interface for reading, editing and writing the service and app
//! profiles the connector uses to exchange OneLogin credentials for AWS ones.
//! A missing file loads as an empty configuration, and every save rewrites the
//! whole file in one canonical, sorted layout.

pub mod cli;
pub mod config;
pub mod error;

pub use config::{AppConfig, Config, ConfigFile, ServiceConfig};
pub use error::Error;
