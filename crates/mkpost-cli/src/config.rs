//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`MKPOST_*`, `__` as section separator)
//! 3. Config file (TOML; `--config` or the platform config dir)
//! 4. Built-in defaults (always present)
//!
//! The `[site]` section is deliberately inert: it is the declarative record
//! a static-site generator consumes (theme, menu, social links, plugins).
//! mkpost deserializes and carries it but never validates or acts on it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Settings consumed by the post scaffolder.
    pub scaffold: ScaffoldConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Declarative site settings, passed through to the site generator.
    pub site: SiteConfig,
}

/// Settings the scaffolder actually reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Default content root; posts land here unless `--dir` overrides it.
    pub content_dir: PathBuf,
    /// File extension for generated posts.
    pub extension: String,
    /// Static default tag list written into every new post header.
    pub default_tags: Vec<String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            extension: "md".into(),
            default_tags: vec!["Python".into(), "Pelican".into()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

// ── Site settings (opaque pass-through) ───────────────────────────────────────

/// The declarative site record.
///
/// One canonical schema with one canonical default instance.  mkpost never
/// interprets these values; they exist so the whole site configuration
/// lives in a single typed file instead of drifting duplicate blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub url: String,
    pub logo: String,
    pub theme: String,
    pub pygments_style: String,
    pub timezone: String,
    pub default_language: String,
    pub pagination: u32,
    pub robots: String,
    pub menu: Vec<MenuItem>,
    pub social: Vec<SocialLink>,
    pub plugin_paths: Vec<String>,
    pub plugins: Vec<String>,
    pub license: LicenseConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub network: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseConfig {
    pub name: String,
    pub version: String,
    pub slug: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Python Computing".into(),
            title: "Python Computing".into(),
            subtitle: "Distributed Computing for the Rest of Us".into(),
            author: "Francesco Pierfederici".into(),
            url: String::new(),
            logo: "images/profile.jpg".into(),
            theme: "Flex".into(),
            pygments_style: "monokai".into(),
            timezone: "Europe/Paris".into(),
            default_language: "en".into(),
            pagination: 10,
            robots: "index, follow".into(),
            menu: vec![
                MenuItem { label: "The Book".into(), url: "/".into() },
                MenuItem { label: "Archives".into(), url: "archives.html".into() },
                MenuItem { label: "Categories".into(), url: "categories.html".into() },
                MenuItem { label: "Tags".into(), url: "tags.html".into() },
            ],
            social: vec![
                SocialLink {
                    network: "linkedin".into(),
                    url: "https://www.linkedin.com/in/francesco-pierfederici-babbb71/".into(),
                },
                SocialLink {
                    network: "github".into(),
                    url: "https://github.com/fpierfed".into(),
                },
                SocialLink {
                    network: "rss".into(),
                    url: "/blog/feeds/all.atom.xml".into(),
                },
            ],
            plugin_paths: vec!["pelican-plugins".into()],
            plugins: vec!["assets".into(), "gzip_cache".into()],
            license: LicenseConfig {
                name: "Creative Commons Attribution-ShareAlike".into(),
                version: "4.0".into(),
                slug: "by-sa".into(),
            },
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`.  An explicit
    /// path must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        let cfg = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(config::File::from(path.as_path()).required(required))
            .add_source(config::Environment::with_prefix("MKPOST").separator("__"))
            .build()?;

        Ok(cfg.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.mkpost.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "mkpost", "mkpost")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".mkpost.toml"))
    }
}
