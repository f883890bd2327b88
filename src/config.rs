use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".toastswaprc.json";

/// Names of the replacement helpers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Targets {
    /// Used for destructive notifications.
    #[serde(default = "default_error_target")]
    pub error: String,
    /// Used when a title and a description are present.
    #[serde(default = "default_success_target")]
    pub success: String,
    /// Used when only a title is present.
    #[serde(default = "default_toast_target")]
    pub toast: String,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            error: default_error_target(),
            success: default_success_target(),
            toast: default_toast_target(),
        }
    }
}

fn default_error_target() -> String {
    "showError".to_string()
}

fn default_success_target() -> String {
    "showSuccess".to_string()
}

fn default_toast_target() -> String {
    "showToast".to_string()
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Files to migrate, relative to the source root. Entries containing
    /// `*` or `?` are glob patterns. Empty means every file with one of
    /// `extensions` under the source root.
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_callee")]
    pub callee: String,
    /// Identifier removed from dependency lists.
    #[serde(default = "default_callee")]
    pub dependency: String,
    #[serde(default)]
    pub targets: Targets,
    #[serde(default = "default_backup")]
    pub backup: bool,
    #[serde(default = "default_backup_suffix")]
    pub backup_suffix: String,
    /// Application shell whose toaster mounts are removed, relative to the
    /// source root.
    #[serde(default = "default_shell_file")]
    pub shell_file: String,
}

fn default_source_root() -> String {
    "src".to_string()
}

fn default_extensions() -> Vec<String> {
    ["tsx", "ts", "jsx", "js"].map(String::from).to_vec()
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

fn default_callee() -> String {
    "toast".to_string()
}

fn default_backup() -> bool {
    true
}

fn default_backup_suffix() -> String {
    ".bak".to_string()
}

fn default_shell_file() -> String {
    "App.tsx".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            files: Vec::new(),
            extensions: default_extensions(),
            ignores: default_ignores(),
            callee: default_callee(),
            dependency: default_callee(),
            targets: Targets::default(),
            backup: default_backup(),
            backup_suffix: default_backup_suffix(),
            shell_file: default_shell_file(),
        }
    }
}

/// Plain JS identifier: what the matcher and cleaner can target safely.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid glob patterns, names that are not plain identifiers,
    /// and targets equal to the callee (a rerun would match its own output).
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for pattern in self.files.iter().filter(|p| is_glob_pattern(p)) {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'files': \"{}\"", pattern))?;
        }

        let names = [
            ("callee", &self.callee),
            ("dependency", &self.dependency),
            ("targets.error", &self.targets.error),
            ("targets.success", &self.targets.success),
            ("targets.toast", &self.targets.toast),
        ];
        for (field, name) in names {
            if !is_identifier(name) {
                bail!("'{}' must be a plain identifier, got \"{}\"", field, name);
            }
        }

        for target in [
            &self.targets.error,
            &self.targets.success,
            &self.targets.toast,
        ] {
            if *target == self.callee {
                bail!("Target \"{}\" must differ from the callee", target);
            }
        }

        if self.backup_suffix.is_empty() {
            bail!("'backupSuffix' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source_root, "src");
        assert!(config.files.is_empty());
        assert_eq!(config.callee, "toast");
        assert_eq!(config.targets.error, "showError");
        assert!(config.backup);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "sourceRoot": "frontend/src",
              "files": ["pages/Tasks.tsx", "components/**/*.tsx"],
              "targets": { "error": "notifyError" },
              "backup": false
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.source_root, "frontend/src");
        assert_eq!(config.files, vec!["pages/Tasks.tsx", "components/**/*.tsx"]);
        assert_eq!(config.targets.error, "notifyError");
        assert_eq!(config.targets.success, "showSuccess");
        assert!(!config.backup);
        assert_eq!(config.backup_suffix, ".bak");
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("src").join("components");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        assert!(find_config_file(dir.path()).is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "files": ["App.tsx"] }"#,
        )
        .unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert_eq!(result.config.files, vec!["App.tsx"]);
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(!result.from_file);
        assert_eq!(result.config.extensions, default_extensions());
    }

    #[test]
    fn test_validate_invalid_glob() {
        let config = Config {
            files: vec!["pages/[invalid*".to_string()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("files"));

        let config = Config {
            ignores: vec!["[invalid".to_string()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ignores"));
    }

    #[test]
    fn test_validate_identifiers() {
        let config = Config {
            callee: "toast(".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            targets: Targets {
                toast: "show-toast".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_target_equal_to_callee() {
        let config = Config {
            targets: Targets {
                toast: "toast".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("differ from the callee"));
    }

    #[test]
    fn test_load_config_with_invalid_value_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{ "backupSuffix": "" }"#).unwrap();

        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let json = default_config_json().unwrap();
        assert!(json.contains("sourceRoot"));
        assert!(json.contains("backupSuffix"));
        assert!(json.contains("shellFile"));
    }
}
