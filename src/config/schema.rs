//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root of the on-disk document: named service profiles and named app profiles
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub service: HashMap<String, ServiceConfig>,

    #[serde(default)]
    pub app: HashMap<String, AppConfig>,
}

/// Identity-provider connection settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    #[serde(default)]
    pub endpoint: String,

    #[serde(default)]
    pub client_token: String,

    #[serde(default)]
    pub client_secret: String,

    #[serde(default)]
    pub subdomain: String,

    #[serde(default)]
    pub username_or_email: String,
}

/// Role mapping used to federate into one application
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub app_id: String,

    #[serde(default)]
    pub role_arn: String,

    #[serde(default)]
    pub principal_arn: String,
}

impl ServiceConfig {
    /// Field names and values in the order they are written to disk
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("endpoint", self.endpoint.as_str()),
            ("client_token", self.client_token.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("subdomain", self.subdomain.as_str()),
            ("username_or_email", self.username_or_email.as_str()),
        ]
    }
}

impl AppConfig {
    /// Field names and values in the order they are written to disk
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("app_id", self.app_id.as_str()),
            ("role_arn", self.role_arn.as_str()),
            ("principal_arn", self.principal_arn.as_str()),
        ]
    }
}

impl Config {
    /// Get a service profile by name
    pub fn get_service(&self, name: &str) -> Option<&ServiceConfig> {
        self.service.get(name)
    }

    /// Get an app profile by name
    pub fn get_app(&self, name: &str) -> Option<&AppConfig> {
        self.app.get(name)
    }

    /// Insert or replace a service profile, returning the previous one
    pub fn set_service(
        &mut self,
        name: impl Into<String>,
        profile: ServiceConfig,
    ) -> Option<ServiceConfig> {
        self.service.insert(name.into(), profile)
    }

    /// Insert or replace an app profile, returning the previous one
    pub fn set_app(&mut self, name: impl Into<String>, profile: AppConfig) -> Option<AppConfig> {
        self.app.insert(name.into(), profile)
    }

    pub fn is_empty(&self) -> bool {
        self.service.is_empty() && self.app.is_empty()
    }
}
