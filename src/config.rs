//! Layered configuration: defaults, TOML file, environment, CLI overrides.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, ColorCombination};
use crate::color::{ParseColorError, parse_hex};
use crate::suggest::DEFAULT_TARGET_RATIO;
use crate::wcag::{MAX_RATIO, MIN_RATIO};

/// Prefix for environment overrides, e.g. `CONTRAST_AUDIT_AUDIT__TARGET_RATIO=7`.
pub const ENV_PREFIX: &str = "CONTRAST_AUDIT_";

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file does not exist
    NotFound(PathBuf),
    /// IO error reading/writing file
    Io(std::io::Error),
    /// Figment extraction error (bad TOML, wrong types, bad env values)
    Figment(figment::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// Invalid color in a configured combination
    InvalidColor {
        name: String,
        value: String,
        source: ParseColorError,
    },
    /// Target ratio is not a finite value within the WCAG range
    InvalidTargetRatio(f64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(p) => write!(f, "Config file not found: {}", p.display()),
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Figment(e) => write!(f, "Config error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
            Self::InvalidColor {
                name,
                value,
                source,
            } => write!(f, "Invalid color '{}' in combination '{}': {}", value, name, source),
            Self::InvalidTargetRatio(r) => write!(
                f,
                "Invalid target ratio {}: must be between {} and {}",
                r, MIN_RATIO, MAX_RATIO
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Figment(e) => Some(e),
            Self::Serialize(e) => Some(e),
            Self::InvalidColor { source, .. } => Some(source),
            Self::NotFound(_) | Self::InvalidTargetRatio(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Figment(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Audit settings
    pub audit: AuditSettings,
    /// Extra combinations appended to (or replacing) the built-in catalog
    pub combinations: Vec<CombinationConfig>,
    /// Combinations highlighted in the audit
    pub critical: Vec<CriticalCombination>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            audit: AuditSettings::default(),
            combinations: Vec::new(),
            critical: default_critical(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditSettings {
    /// Ratio recommendations and suggestions aim for
    pub target_ratio: f64,
    /// Whether the built-in design-system catalog is audited
    pub include_builtin: bool,
    /// Catalog names that get a recommendation when below the target
    pub recommend: Vec<String>,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            target_ratio: DEFAULT_TARGET_RATIO,
            include_builtin: true,
            recommend: default_recommend(),
        }
    }
}

fn default_recommend() -> Vec<String> {
    [
        "textSecondaryOnWhite",
        "secondaryOnWhite",
        "whiteOnAccent",
        "accentOnWhite",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// A user-defined combination. Colors are strict six-digit hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationConfig {
    pub name: String,
    pub foreground: String,
    pub background: String,
}

/// A catalog entry singled out in the audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalCombination {
    /// Display label
    pub label: String,
    /// Catalog name
    pub key: String,
}

impl CriticalCombination {
    pub fn new(label: &str, key: &str) -> Self {
        Self {
            label: label.to_string(),
            key: key.to_string(),
        }
    }
}

fn default_critical() -> Vec<CriticalCombination> {
    vec![
        CriticalCombination::new("Primary Text on White", "textPrimaryOnWhite"),
        CriticalCombination::new("Secondary Text on White", "textSecondaryOnWhite"),
        CriticalCombination::new("White on Primary", "whiteOnPrimary"),
        CriticalCombination::new("Primary on Secondary", "primaryOnSecondary"),
        CriticalCombination::new("White on Accent", "whiteOnAccent"),
    ]
}

/// Settings that may be overridden from the command line.
///
/// Unset fields are skipped during serialization so they don't clobber
/// values from lower layers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "AuditOverrides::is_empty")]
    pub audit: AuditOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_builtin: Option<bool>,
}

impl AuditOverrides {
    fn is_empty(&self) -> bool {
        self.target_ratio.is_none() && self.include_builtin.is_none()
    }
}

impl AuditConfig {
    /// Figment with defaults, the optional TOML file and environment layered.
    pub fn figment(path: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(AuditConfig::default()));
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Load configuration from all layers, with CLI overrides on top.
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(path)?
            .merge(Serialized::defaults(overrides))
            .extract()?;
        config.validate()?;
        debug!(
            path = ?path,
            target_ratio = config.audit.target_ratio,
            extra = config.combinations.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Load a single TOML file over the defaults, ignoring the environment.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = Figment::from(Serialized::defaults(AuditConfig::default()))
            .merge(Toml::string(&content))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no audit can use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let target = self.audit.target_ratio;
        // NaN fails the range check
        if !(MIN_RATIO..=MAX_RATIO).contains(&target) {
            return Err(ConfigError::InvalidTargetRatio(target));
        }
        Ok(())
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build the catalog this configuration describes.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        let parse = |name: &str, value: &str| {
            parse_hex(value).map_err(|source| ConfigError::InvalidColor {
                name: name.to_string(),
                value: value.to_string(),
                source,
            })
        };

        let extra = self
            .combinations
            .iter()
            .map(|c| {
                Ok(ColorCombination::new(
                    c.name.clone(),
                    parse(&c.name, &c.foreground)?,
                    parse(&c.name, &c.background)?,
                ))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Catalog::build(self.audit.include_builtin, extra))
    }
}
