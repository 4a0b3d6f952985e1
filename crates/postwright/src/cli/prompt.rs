//! Prompt management command handlers.

use super::commands::{OutputFormat, PromptCommands};
use postwright::{
    ConfigError, FilePromptStore, GenerationOptions, JsonError, PostwrightConfig, PostwrightResult,
    PromptKey, PromptStore, StorageError, StorageErrorKind, resolve_prompts,
};
use std::path::Path;

/// Handle prompt management commands.
pub async fn handle_prompt_command(
    cmd: PromptCommands,
    config: &PostwrightConfig,
) -> PostwrightResult<()> {
    let store = config.prompts.store();

    match cmd {
        PromptCommands::Show { date, format } => show_prompt(&store, date, format).await,

        PromptCommands::Save { key, text, file } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => read_prompt_file(&path).await?,
                (None, None) => {
                    let err = ConfigError::new("Provide the prompt text or --file PATH");
                    return Err(err.into());
                }
            };
            store.save_text(key, &text).await?;
            println!("Saved {} prompt to {}", key, store.path_for(key).display());
            Ok(())
        }

        PromptCommands::Reset { key } => {
            store.reset(key).await?;
            println!("Reset {} prompt to default", key);
            Ok(())
        }
    }
}

/// Print the combined prompt without calling the generation capability.
async fn show_prompt(
    store: &FilePromptStore,
    date: Option<String>,
    format: OutputFormat,
) -> PostwrightResult<()> {
    let options = GenerationOptions {
        date,
        ..Default::default()
    };
    let resolved = resolve_prompts(store, &options).await;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&resolved)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            for key in [PromptKey::System, PromptKey::User] {
                let source = if store.load_text(key).await.is_some() {
                    store.path_for(key).display().to_string()
                } else {
                    "built-in default".to_string()
                };
                println!("{} prompt: {}", key, source);
            }
            println!("{:-<80}", "");
            println!("{}", resolved.combined());
        }
    }

    Ok(())
}

async fn read_prompt_file(path: &Path) -> PostwrightResult<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
        .into()
    })
}
