//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::{AppConfig, Config, ServiceConfig};

const MASK: &str = "********";

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Hide a secret value, keeping empty values visibly empty
pub fn mask_secret(value: &str) -> &str {
    if value.is_empty() {
        ""
    } else {
        MASK
    }
}

/// Both collections with names in sorted order, for json/yaml output
#[derive(Debug, Serialize)]
pub struct Listing<'a> {
    pub service: BTreeMap<&'a str, &'a ServiceConfig>,
    pub app: BTreeMap<&'a str, &'a AppConfig>,
}

impl<'a> From<&'a Config> for Listing<'a> {
    fn from(config: &'a Config) -> Self {
        Self {
            service: config.service.iter().map(|(k, v)| (k.as_str(), v)).collect(),
            app: config.app.iter().map(|(k, v)| (k.as_str(), v)).collect(),
        }
    }
}

fn header(names: &[&str]) -> Vec<Cell> {
    names.iter().map(|n| Cell::new(n).fg(Color::Cyan)).collect()
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Print every profile as two tables
pub fn print_profiles_table(config: &Config) {
    if config.is_empty() {
        info("No profiles configured. Add one with 'onelogin-aws-connector service set'");
        return;
    }

    let listing = Listing::from(config);

    if !listing.service.is_empty() {
        let mut table = new_table();
        table.set_header(header(&[
            "Service",
            "Endpoint",
            "Client Token",
            "Client Secret",
            "Subdomain",
            "Username/Email",
        ]));
        for (name, service) in &listing.service {
            table.add_row(vec![
                Cell::new(name).fg(Color::Green),
                Cell::new(&service.endpoint),
                Cell::new(&service.client_token),
                Cell::new(mask_secret(&service.client_secret)),
                Cell::new(&service.subdomain),
                Cell::new(&service.username_or_email),
            ]);
        }
        println!("{table}");
    }

    if !listing.app.is_empty() {
        let mut table = new_table();
        table.set_header(header(&["App", "App ID", "Role ARN", "Principal ARN"]));
        for (name, app) in &listing.app {
            table.add_row(vec![
                Cell::new(name).fg(Color::Green),
                Cell::new(&app.app_id),
                Cell::new(&app.role_arn),
                Cell::new(&app.principal_arn),
            ]);
        }
        println!("{table}");
    }
}

/// Print one service profile
pub fn print_service_detail(name: &str, service: &ServiceConfig) {
    println!("{}", format!("Service: {}", name).bold().underline());
    println!();
    for (field, value) in service.fields() {
        let value = if field == "client_secret" {
            mask_secret(value)
        } else {
            value
        };
        println!("  {} {}", format!("{}:", field).bold(), value);
    }
}

/// Print one app profile
pub fn print_app_detail(name: &str, app: &AppConfig) {
    println!("{}", format!("App: {}", name).bold().underline());
    println!();
    for (field, value) in app.fields() {
        println!("  {} {}", format!("{}:", field).bold(), value);
    }
}
