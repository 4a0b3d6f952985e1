//! File-backed prompt store.
//!
//! Each prompt lives in its own UTF-8 text file inside one directory:
//!
//! ```text
//! prompts/
//! ├── system_prompt.txt
//! └── user_prompt.txt
//! ```

use crate::{default_text, normalize};
use async_trait::async_trait;
use postwright_error::{PostwrightResult, StorageError, StorageErrorKind};
use postwright_interface::{PromptKey, PromptStore};
use std::path::{Path, PathBuf};

/// Prompt store that reads and writes text files.
///
/// A missing file is an absent prompt. A file that exists but cannot be read
/// is logged and also treated as absent.
#[derive(Debug, Clone)]
pub struct FilePromptStore {
    dir: PathBuf,
    system_file: String,
    user_file: String,
}

impl FilePromptStore {
    /// Default file name for the system prompt.
    pub const SYSTEM_FILE: &'static str = "system_prompt.txt";
    /// Default file name for the user prompt.
    pub const USER_FILE: &'static str = "user_prompt.txt";

    /// Store rooted at `dir` with the default file names.
    ///
    /// The directory is created on first save, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_file_names(dir, Self::SYSTEM_FILE, Self::USER_FILE)
    }

    /// Store rooted at `dir` with custom file names.
    pub fn with_file_names(
        dir: impl Into<PathBuf>,
        system_file: impl Into<String>,
        user_file: impl Into<String>,
    ) -> Self {
        Self {
            dir: dir.into(),
            system_file: system_file.into(),
            user_file: user_file.into(),
        }
    }

    /// Directory holding the prompt files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: PromptKey) -> PathBuf {
        let name = match key {
            PromptKey::System => &self.system_file,
            PromptKey::User => &self.user_file,
        };
        self.dir.join(name)
    }
}

#[async_trait]
impl PromptStore for FilePromptStore {
    #[tracing::instrument(skip(self), fields(dir = %self.dir.display()))]
    async fn load_text(&self, key: PromptKey) -> Option<String> {
        let path = self.path_for(key);

        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                let text = normalize(&text);
                tracing::debug!(
                    path = %path.display(),
                    present = text.is_some(),
                    "Loaded prompt file"
                );
                text
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Prompt file not found");
                None
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Error reading prompt file");
                None
            }
        }
    }

    #[tracing::instrument(skip(self, text), fields(dir = %self.dir.display(), len = text.len()))]
    async fn save_text(&self, key: PromptKey, text: &str) -> PostwrightResult<()> {
        let path = self.path_for(key);

        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                self.dir.display(),
                e
            )))
        })?;

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, text).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(path = %path.display(), "Saved prompt");
        Ok(())
    }

    async fn reset(&self, key: PromptKey) -> PostwrightResult<()> {
        self.save_text(key, default_text(key)).await
    }
}
