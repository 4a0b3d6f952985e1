//! Tests for the prompt store backends.

use postwright_interface::{DEFAULT_SYSTEM_PROMPT, PromptKey, PromptStore};
use postwright_storage::{DEFAULT_USER_PROMPT_TEMPLATE, FilePromptStore, InMemoryPromptStore};
use tempfile::TempDir;

#[tokio::test]
async fn test_missing_directory_is_absent() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilePromptStore::new(temp_dir.path().join("does-not-exist"));

    assert_eq!(store.load_text(PromptKey::System).await, None);
    assert_eq!(store.load_text(PromptKey::User).await, None);
}

#[tokio::test]
async fn test_save_then_load_trims() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FilePromptStore::new(temp_dir.path().join("prompts"));

    store
        .save_text(PromptKey::User, "\n  Write about async Rust.  \n")
        .await?;

    assert_eq!(
        store.load_text(PromptKey::User).await.as_deref(),
        Some("Write about async Rust.")
    );
    assert_eq!(store.load_text(PromptKey::System).await, None);
    assert!(store.path_for(PromptKey::User).exists());
    let temp_path = store.path_for(PromptKey::User).with_extension("tmp");
    assert!(!temp_path.exists());
    Ok(())
}

#[tokio::test]
async fn test_blank_file_is_absent() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("system_prompt.txt"), "   \n\t")?;
    let store = FilePromptStore::new(temp_dir.path());

    assert_eq!(store.load_text(PromptKey::System).await, None);
    Ok(())
}

#[tokio::test]
async fn test_reads_existing_files() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("system_prompt.txt"),
        "You write crisp posts.\n",
    )?;
    let store = FilePromptStore::new(temp_dir.path());

    assert_eq!(
        store.load_text(PromptKey::System).await.as_deref(),
        Some("You write crisp posts.")
    );
    Ok(())
}

#[tokio::test]
async fn test_custom_file_names() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FilePromptStore::with_file_names(temp_dir.path(), "sys.md", "usr.md");

    store.save_text(PromptKey::System, "Be brief.").await?;

    assert!(temp_dir.path().join("sys.md").exists());
    assert_eq!(
        store.load_text(PromptKey::System).await.as_deref(),
        Some("Be brief.")
    );
    Ok(())
}

#[tokio::test]
async fn test_reset_restores_templates() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FilePromptStore::new(temp_dir.path());

    store.save_text(PromptKey::User, "Something custom").await?;
    store.reset(PromptKey::User).await?;
    store.reset(PromptKey::System).await?;

    assert_eq!(
        store.load_text(PromptKey::User).await.as_deref(),
        Some(DEFAULT_USER_PROMPT_TEMPLATE)
    );
    assert_eq!(
        store.load_text(PromptKey::System).await.as_deref(),
        Some(DEFAULT_SYSTEM_PROMPT)
    );
    Ok(())
}

#[tokio::test]
async fn test_in_memory_store_round_trip() -> anyhow::Result<()> {
    let store = InMemoryPromptStore::new();
    assert_eq!(store.load_text(PromptKey::User).await, None);

    store.save_text(PromptKey::User, "Write about Rust").await?;
    assert_eq!(
        store.load_text(PromptKey::User).await.as_deref(),
        Some("Write about Rust")
    );

    store.save_text(PromptKey::User, "").await?;
    assert_eq!(store.load_text(PromptKey::User).await, None);
    Ok(())
}
