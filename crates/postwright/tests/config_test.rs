//! Tests for the configuration system.

use postwright::{PostwrightConfig, PromptKey, PromptStore};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::Builder;

#[test]
fn test_bundled_defaults() -> anyhow::Result<()> {
    let config = PostwrightConfig::bundled()?;

    assert_eq!(config.generation.model, "gemini-1.5-flash");
    assert_eq!(config.generation.batch_size, 1);
    assert_eq!(config.generation.timeout_secs, None);
    assert_eq!(config.prompts.dir, Path::new("prompts"));
    assert_eq!(config.prompts.system_file, "system_prompt.txt");
    assert_eq!(config.prompts.user_file, "user_prompt.txt");
    assert_eq!(config.post.char_limit, 3000);
    Ok(())
}

#[test]
fn test_bundled_matches_code_defaults() -> anyhow::Result<()> {
    assert_eq!(PostwrightConfig::bundled()?, PostwrightConfig::default());
    Ok(())
}

#[test]
fn test_config_from_file() -> anyhow::Result<()> {
    let mut temp_file = Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        temp_file,
        r#"
[generation]
model = "gemini-2.5-flash"
batch_size = 3
timeout_secs = 45

[prompts]
dir = "/srv/postwright/prompts"
system_file = "system.txt"
user_file = "user.txt"

[post]
char_limit = 1300
"#
    )?;

    let config = PostwrightConfig::from_file(temp_file.path())?;

    assert_eq!(config.generation.model, "gemini-2.5-flash");
    assert_eq!(config.generation.batch_size, 3);
    assert_eq!(config.generation.timeout(), Some(Duration::from_secs(45)));
    assert_eq!(config.prompts.dir, Path::new("/srv/postwright/prompts"));
    assert_eq!(config.prompts.system_file, "system.txt");
    assert_eq!(config.post.char_limit, 1300);
    Ok(())
}

#[test]
fn test_partial_file_keeps_defaults() -> anyhow::Result<()> {
    let mut temp_file = Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        temp_file,
        r#"
[post]
char_limit = 500
"#
    )?;

    let config = PostwrightConfig::from_file(temp_file.path())?;

    assert_eq!(config.post.char_limit, 500);
    assert_eq!(config.generation, PostwrightConfig::default().generation);
    assert_eq!(config.prompts, PostwrightConfig::default().prompts);
    Ok(())
}

#[test]
fn test_override_paths_end_with_project_file() {
    let paths = PostwrightConfig::override_paths();
    assert_eq!(paths.last(), Some(&PathBuf::from("postwright.toml")));
    assert!(paths.len() <= 2);
}

#[test]
fn test_missing_file_is_error() {
    let result = PostwrightConfig::from_file("/nonexistent/postwright.toml");
    assert!(result.is_err());
}

#[test]
fn test_malformed_file_is_error() -> anyhow::Result<()> {
    let mut temp_file = Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        temp_file,
        r#"
[post]
char_limit = "lots"
"#
    )?;

    let err = PostwrightConfig::from_file(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("Configuration Error"));
    Ok(())
}

#[tokio::test]
async fn test_prompts_config_builds_store() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut config = PostwrightConfig::default();
    config.prompts.dir = dir.path().join("prompts");
    config.prompts.user_file = "mine.txt".to_string();

    let store = config.prompts.store();
    store.save_text(PromptKey::User, "Write about cargo workspaces").await?;

    assert_eq!(
        std::fs::read_to_string(dir.path().join("prompts/mine.txt"))?,
        "Write about cargo workspaces"
    );
    assert_eq!(
        store.load_text(PromptKey::User).await.as_deref(),
        Some("Write about cargo workspaces")
    );
    assert_eq!(store.load_text(PromptKey::System).await, None);
    Ok(())
}
