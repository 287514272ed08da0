use serde::Deserialize;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use toml::de;

use buildcost_types::{Area, CityType, ConstructionType, MaterialPercent, ui::UiOptions};

use crate::app::filter_area_text;

pub const DEFAULT_SHARE_URL: &str = "https://buildcost.example.com";
pub const DEFAULT_AREA_TEXT: &str = "1200";
pub const DEFAULT_MATERIAL_PERCENT: u8 = 5;

/// Set to `1` to force ASCII glyphs and the `Rs.` currency prefix.
pub const ASCII_ENV_VAR: &str = "BUILDCOST_ASCII";

// Default value function for serde (bool::default() is false, so only true needs a fn)
pub(crate) const fn default_true() -> bool {
    true
}

/// Raw contents of `~/.buildcost/config.toml`. Every section is optional.
#[derive(Debug, Default, Deserialize)]
pub struct BuildcostConfig {
    pub app: Option<AppConfig>,
    /// Initial form values. Never written back.
    pub defaults: Option<DefaultsConfig>,
    pub share: Option<ShareConfig>,
    pub print: Option<PrintConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs and the `Rs.` currency prefix.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Render advertisement placeholders.
    #[serde(default = "default_true")]
    pub show_ads: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ascii_only: false,
            high_contrast: false,
            show_ads: true,
        }
    }
}

/// Starting values for the calculator form.
///
/// ```toml
/// [defaults]
/// area = 1200
/// construction = "standard"
/// city = "tier2"
/// material_percent = 5
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct DefaultsConfig {
    pub area: Option<f64>,
    pub construction: Option<ConstructionType>,
    pub city: Option<CityType>,
    /// Clamped into `0..=20`.
    pub material_percent: Option<MaterialPercent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ShareConfig {
    /// Page URL appended to shared estimates.
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PrintConfig {
    /// Directory for printed quotes. Supports `~/` and `${VAR}`.
    pub dir: Option<String>,
}

pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) if end > 0 => {
                out.push_str(&env::var(&after[..end]).unwrap_or_default());
                rest = &after[end + 1..];
            }
            Some(end) => {
                // `${}` is kept verbatim.
                out.push_str("${}");
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

fn expand_home(value: &str) -> PathBuf {
    match value.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(value),
        },
        None if value == "~" => dirs::home_dir().unwrap_or_else(|| PathBuf::from(value)),
        None => PathBuf::from(value),
    }
}

impl BuildcostConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from an explicit path. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

}

/// `~/.buildcost`
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".buildcost"))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

// ============================================================================
// Resolved settings
// ============================================================================

/// Initial form values after applying config over built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDefaults {
    pub area_text: String,
    pub construction_type: ConstructionType,
    pub city_type: CityType,
    pub material_percent: MaterialPercent,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            area_text: DEFAULT_AREA_TEXT.to_string(),
            construction_type: ConstructionType::Standard,
            city_type: CityType::Tier2,
            material_percent: MaterialPercent::new(DEFAULT_MATERIAL_PERCENT),
        }
    }
}

/// Fully-resolved settings. No `Option`s: every value has been defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub ui_options: UiOptions,
    pub form: FormDefaults,
    pub share_url: String,
    pub print_dir: PathBuf,
}

impl AppSettings {
    #[must_use]
    pub fn from_config(config: Option<&BuildcostConfig>) -> Self {
        let app = config.and_then(|cfg| cfg.app.as_ref());
        let ui_options = app.map_or_else(UiOptions::default, |app| UiOptions {
            ascii_only: app.ascii_only,
            high_contrast: app.high_contrast,
            show_ads: app.show_ads,
        });

        let mut form = FormDefaults::default();
        if let Some(defaults) = config.and_then(|cfg| cfg.defaults.as_ref()) {
            if let Some(area) = defaults.area {
                match default_area_text(area) {
                    Some(text) => form.area_text = text,
                    None => tracing::warn!(
                        area,
                        "Ignoring [defaults] area that the area field cannot hold"
                    ),
                }
            }
            if let Some(kind) = defaults.construction {
                form.construction_type = kind;
            }
            if let Some(city) = defaults.city {
                form.city_type = city;
            }
            if let Some(material) = defaults.material_percent {
                form.material_percent = material;
            }
        }

        let share_url = config
            .and_then(|cfg| cfg.share.as_ref())
            .and_then(|share| share.url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map_or_else(|| DEFAULT_SHARE_URL.to_string(), ToString::to_string);

        let print_dir = config
            .and_then(|cfg| cfg.print.as_ref())
            .and_then(|print| print.dir.as_deref())
            .map(str::trim)
            .filter(|dir| !dir.is_empty())
            .map_or_else(default_print_dir, |dir| expand_home(&expand_env_vars(dir)));

        Self {
            ui_options,
            form,
            share_url,
            print_dir,
        }
    }
}

/// The form text for a configured area, or `None` when the value is not a
/// valid area or would not survive the area field's own filtering.
fn default_area_text(area: f64) -> Option<String> {
    let text = Area::new(area).ok()?.to_string();
    (filter_area_text(&text) == text).then_some(text)
}

impl AppSettings {
    /// Apply environment overrides on top of the file config.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        let ascii = env::var(ASCII_ENV_VAR).ok();
        self.with_ascii_override(ascii.as_deref())
    }

    fn with_ascii_override(mut self, value: Option<&str>) -> Self {
        if value.is_some_and(env_flag_enabled) {
            self.ui_options.ascii_only = true;
        }
        self
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from_config(None)
    }
}

fn env_flag_enabled(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn default_print_dir() -> PathBuf {
    config_dir()
        .unwrap_or_else(|| PathBuf::from(".buildcost"))
        .join("quotes")
}
