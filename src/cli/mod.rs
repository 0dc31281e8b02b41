//! CLI interface for the connector configuration

pub mod commands;
mod output;

pub use output::*;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::CONFIG_ENV_VAR;

#[derive(Parser)]
#[command(name = "onelogin-aws-connector")]
#[command(author = "Krakaw")]
#[command(version)]
#[command(about = "Manage OneLogin service and AWS app profiles", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file if it does not exist yet
    Init,

    /// List all service and app profiles
    List {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show a single profile
    Show {
        /// Which collection the profile belongs to
        kind: ProfileKind,

        /// Profile name
        name: String,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Manage identity-provider service profiles
    Service {
        #[command(subcommand)]
        action: ServiceAction,
    },

    /// Manage application role profiles
    App {
        #[command(subcommand)]
        action: AppAction,
    },

    /// Print the canonical form of the configuration file without writing it
    Render,
}

#[derive(Subcommand)]
pub enum ServiceAction {
    /// Create or update a service profile
    Set {
        /// Profile name
        #[arg(default_value = "default")]
        name: String,

        #[command(flatten)]
        fields: ServiceFields,
    },
}

#[derive(Subcommand)]
pub enum AppAction {
    /// Create or update an app profile
    Set {
        /// Profile name
        #[arg(default_value = "default")]
        name: String,

        #[command(flatten)]
        fields: AppFields,
    },
}

/// Service fields to overwrite; omitted flags keep their current value
#[derive(Args, Debug, Default, Clone)]
pub struct ServiceFields {
    /// OneLogin API endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// API client token
    #[arg(long)]
    pub client_token: Option<String>,

    /// API client secret
    #[arg(long)]
    pub client_secret: Option<String>,

    /// OneLogin subdomain
    #[arg(long)]
    pub subdomain: Option<String>,

    /// Login name
    #[arg(long)]
    pub username_or_email: Option<String>,
}

/// App fields to overwrite; omitted flags keep their current value
#[derive(Args, Debug, Default, Clone)]
pub struct AppFields {
    /// OneLogin application id
    #[arg(long)]
    pub app_id: Option<String>,

    /// AWS role ARN to assume
    #[arg(long)]
    pub role_arn: Option<String>,

    /// AWS SAML provider ARN
    #[arg(long)]
    pub principal_arn: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileKind {
    Service,
    App,
}

impl ProfileKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileKind::Service => "service",
            ProfileKind::App => "app",
        }
    }
}
