//! CLI command implementations

use anyhow::Result;
use std::path::Path;

use crate::cli::{
    info, print_app_detail, print_profiles_table, print_service_detail, success, warn, AppFields,
    Listing, OutputFormat, ProfileKind, ServiceFields,
};
use crate::config::{self, AppConfig, ConfigFile, ServiceConfig};
use crate::error::Error;

/// Create the configuration file for a fresh install
pub fn init(path: &Path) -> Result<()> {
    if path.exists() {
        // Surface a broken file now rather than on the next edit
        ConfigFile::load(path)?;
        warn(&format!("{} already exists", path.display()));
        return Ok(());
    }

    config::ensure_parent_dir(path)?;
    ConfigFile::load(path)?.save()?;

    success(&format!("Created {}", path.display()));
    info("Add a profile with 'onelogin-aws-connector service set --endpoint <url> ...'");
    Ok(())
}

/// List all profiles
pub fn list(path: &Path, format: OutputFormat) -> Result<()> {
    let file = ConfigFile::load(path)?;

    match format {
        OutputFormat::Table => print_profiles_table(&file),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&Listing::from(&*file))?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&Listing::from(&*file))?;
            println!("{}", yaml);
        }
    }

    Ok(())
}

/// Show one profile
pub fn show(path: &Path, kind: ProfileKind, name: &str, format: OutputFormat) -> Result<()> {
    let file = ConfigFile::load(path)?;

    let not_found = || Error::ProfileNotFound {
        kind: kind.as_str(),
        name: name.to_string(),
    };

    match kind {
        ProfileKind::Service => {
            let service = file.get_service(name).ok_or_else(not_found)?;
            match format {
                OutputFormat::Table => print_service_detail(name, service),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(service)?),
                OutputFormat::Yaml => println!("{}", serde_yaml::to_string(service)?),
            }
        }
        ProfileKind::App => {
            let app = file.get_app(name).ok_or_else(not_found)?;
            match format {
                OutputFormat::Table => print_app_detail(name, app),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(app)?),
                OutputFormat::Yaml => println!("{}", serde_yaml::to_string(app)?),
            }
        }
    }

    Ok(())
}

/// Create or update a service profile
pub fn service_set(path: &Path, name: &str, fields: ServiceFields) -> Result<()> {
    config::ensure_parent_dir(path)?;
    let mut file = ConfigFile::load(path)?;

    let mut profile = file.get_service(name).cloned().unwrap_or_default();
    fields.apply(&mut profile);
    let replaced = file.set_service(name, profile).is_some();

    file.save()?;
    success(&format!(
        "{} service profile '{}'",
        if replaced { "Updated" } else { "Added" },
        name
    ));
    Ok(())
}

/// Create or update an app profile
pub fn app_set(path: &Path, name: &str, fields: AppFields) -> Result<()> {
    config::ensure_parent_dir(path)?;
    let mut file = ConfigFile::load(path)?;

    let mut profile = file.get_app(name).cloned().unwrap_or_default();
    fields.apply(&mut profile);
    let replaced = file.set_app(name, profile).is_some();

    file.save()?;
    success(&format!(
        "{} app profile '{}'",
        if replaced { "Updated" } else { "Added" },
        name
    ));
    Ok(())
}

/// Print the canonical document to stdout
pub fn render(path: &Path) -> Result<()> {
    let file = ConfigFile::load(path)?;
    print!("{}", config::render(&file));
    Ok(())
}

impl ServiceFields {
    /// Overwrite the fields that were supplied
    pub fn apply(self, profile: &mut ServiceConfig) {
        let updates = [
            (self.endpoint, &mut profile.endpoint),
            (self.client_token, &mut profile.client_token),
            (self.client_secret, &mut profile.client_secret),
            (self.subdomain, &mut profile.subdomain),
            (self.username_or_email, &mut profile.username_or_email),
        ];
        for (value, slot) in updates {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

impl AppFields {
    /// Overwrite the fields that were supplied
    pub fn apply(self, profile: &mut AppConfig) {
        let updates = [
            (self.app_id, &mut profile.app_id),
            (self.role_arn, &mut profile.role_arn),
            (self.principal_arn, &mut profile.principal_arn),
        ];
        for (value, slot) in updates {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_service_fields_apply_keeps_unset() {
        let mut profile = ServiceConfig {
            endpoint: "old".into(),
            client_secret: "keep".into(),
            ..Default::default()
        };
        ServiceFields {
            endpoint: Some("new".into()),
            ..Default::default()
        }
        .apply(&mut profile);

        assert_eq!(profile.endpoint, "new");
        assert_eq!(profile.client_secret, "keep");
    }

    #[test]
    fn test_app_fields_apply() {
        let mut profile = AppConfig::default();
        AppFields {
            role_arn: Some("arn:aws:iam::1:role/r".into()),
            ..Default::default()
        }
        .apply(&mut profile);

        assert_eq!(profile.role_arn, "arn:aws:iam::1:role/r");
        assert_eq!(profile.app_id, "");
    }

    #[test]
    fn test_init_creates_minimal_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        init(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[service]\n\n[app]\n");
    }

    #[test]
    fn test_init_leaves_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        let content = "[service.default]\nendpoint = \"api\"\n";
        std::fs::write(&path, content).unwrap();

        init(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_set_commands_merge_into_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        service_set(
            &path,
            "default",
            ServiceFields {
                endpoint: Some("api".into()),
                ..Default::default()
            },
        )
        .unwrap();
        service_set(
            &path,
            "default",
            ServiceFields {
                subdomain: Some("acme".into()),
                ..Default::default()
            },
        )
        .unwrap();
        app_set(
            &path,
            "other",
            AppFields {
                app_id: Some("7".into()),
                ..Default::default()
            },
        )
        .unwrap();

        let loaded = config::load_config_from_path(&path).unwrap();
        assert_eq!(loaded.service["default"].endpoint, "api");
        assert_eq!(loaded.service["default"].subdomain, "acme");
        assert_eq!(loaded.app["other"].app_id, "7");
    }

    #[test]
    fn test_show_missing_profile() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        let err = show(&path, ProfileKind::App, "nope", OutputFormat::Json).unwrap_err();
        assert!(err.to_string().contains("app profile 'nope' not found"));
    }
}
