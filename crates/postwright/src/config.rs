//! Application configuration.
//!
//! Configuration is assembled from up to three TOML sources:
//! - Bundled defaults (include_str! from postwright.toml)
//! - User overrides in ~/.config/postwright/postwright.toml
//! - Project overrides in ./postwright.toml
//!
//! Later sources win. Every key has a default, so override files may be partial.

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use postwright_error::{ConfigError, PostwrightError, PostwrightResult};
use postwright_models::DEFAULT_MODEL;
use postwright_storage::FilePromptStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../postwright.toml");

/// Generation settings.
///
/// # Example
///
/// ```toml
/// [generation]
/// model = "gemini-2.5-flash"
/// batch_size = 3
/// timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Gemini model name
    pub model: String,

    /// Number of options generated when the caller does not say
    pub batch_size: usize,

    /// Per-call deadline in seconds (no deadline when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            batch_size: 1,
            timeout_secs: None,
        }
    }
}

impl GenerationConfig {
    /// The per-call deadline, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Where saved prompts live.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PromptsConfig {
    /// Directory holding the prompt files
    pub dir: PathBuf,

    /// File name of the system prompt
    pub system_file: String,

    /// File name of the user prompt
    pub user_file: String,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("prompts"),
            system_file: FilePromptStore::SYSTEM_FILE.to_string(),
            user_file: FilePromptStore::USER_FILE.to_string(),
        }
    }
}

impl PromptsConfig {
    /// A file-backed prompt store for these settings.
    pub fn store(&self) -> FilePromptStore {
        FilePromptStore::with_file_names(&self.dir, &self.system_file, &self.user_file)
    }
}

/// Post presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PostConfig {
    /// Character count above which a post is flagged
    pub char_limit: usize,
}

impl Default for PostConfig {
    fn default() -> Self {
        Self { char_limit: 3000 }
    }
}

/// Complete Postwright configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PostwrightConfig {
    /// Generation settings
    pub generation: GenerationConfig,

    /// Prompt storage settings
    pub prompts: PromptsConfig,

    /// Post settings
    pub post: PostConfig,
}

impl PostwrightConfig {
    /// Load configuration from a specific file path.
    ///
    /// Keys missing from the file take their built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> PostwrightResult<Self> {
        debug!("Loading configuration file");
        Self::build(Config::builder().add_source(File::from(path.as_ref())))
    }

    /// The bundled defaults alone, ignoring user files.
    pub fn bundled() -> PostwrightResult<Self> {
        Self::build(Self::with_bundled())
    }

    /// Load the bundled defaults, then each file from [`override_paths`] that exists.
    ///
    /// Later files override earlier ones key by key.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use postwright::PostwrightConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = PostwrightConfig::load()?;
    /// println!("Generating with {}", config.generation.model);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// [`override_paths`]: Self::override_paths
    #[instrument]
    pub fn load() -> PostwrightResult<Self> {
        let mut builder = Self::with_bundled();
        for path in Self::override_paths() {
            debug!(path = %path.display(), "Layering optional configuration file");
            builder = builder.add_source(File::from(path).required(false));
        }
        Self::build(builder)
    }

    /// Optional override files, lowest precedence first.
    ///
    /// The home-directory file is skipped when no home directory is known.
    pub fn override_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config/postwright/postwright.toml"));
        }
        paths.push(PathBuf::from("postwright.toml"));
        paths
    }

    fn with_bundled() -> ConfigBuilder<DefaultState> {
        let defaults = File::from_str(DEFAULT_CONFIG, FileFormat::Toml);
        Config::builder().add_source(defaults)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> PostwrightResult<Self> {
        let merged = builder.build().map_err(|e| config_error("read", e))?;
        merged
            .try_deserialize()
            .map_err(|e| config_error("parse", e))
    }
}

fn config_error(action: &str, err: config::ConfigError) -> PostwrightError {
    ConfigError::new(format!("Failed to {action} configuration: {err}")).into()
}
