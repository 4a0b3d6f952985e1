//! Post generation command handler.

use super::commands::{GenerateArgs, OutputFormat};
use postwright::{
    GeminiClient, GenerationErrorKind, GenerationOptions, JsonError, PostPipeline, PostRecord,
    PostwrightConfig, PostwrightDriver, PostwrightError, PostwrightErrorKind, PostwrightResult,
    TimeoutDriver,
};
use std::time::Duration;
use tracing::{info, warn};

/// Advice printed alongside errors the user can fix before retrying.
pub fn startup_hint(err: &PostwrightError) -> Option<&'static str> {
    match err.kind() {
        PostwrightErrorKind::Generation(err) if err.kind == GenerationErrorKind::MissingApiKey => {
            Some("Set GEMINI_API_KEY in your environment or in a .env file, then try again.")
        }
        _ => None,
    }
}

/// Handle `postwright generate`.
///
/// Client construction fails before any generation is attempted.
pub async fn handle_generate(
    args: GenerateArgs,
    config: &PostwrightConfig,
) -> PostwrightResult<()> {
    let model = args.model.as_deref().unwrap_or(&config.generation.model);
    let client = GeminiClient::from_env(model)?;

    let timeout = args
        .timeout_secs
        .map(Duration::from_secs)
        .or_else(|| config.generation.timeout());
    let driver: Box<dyn PostwrightDriver> = match timeout {
        Some(limit) => Box::new(TimeoutDriver::new(client, limit)),
        None => Box::new(client),
    };

    let pipeline = PostPipeline::new(driver, config.prompts.store());
    let options = GenerationOptions {
        date: args.date,
        system_prompt: args.system,
        user_prompt: args.user,
    };
    let count = args.count.unwrap_or(config.generation.batch_size);

    info!(count, model, "Generating posts");
    let posts = if count == 1 {
        vec![pipeline.generate(&options).await]
    } else {
        pipeline.generate_batch(count, &options).await
    };

    for post in &posts {
        if post.exceeds_char_limit(config.post.char_limit) {
            warn!(
                char_count = post.char_count(),
                limit = config.post.char_limit,
                "Post exceeds character limit"
            );
        }
    }

    match args.format {
        OutputFormat::Json => print_json(&posts)?,
        OutputFormat::Human => print_human(&posts, config.post.char_limit),
    }

    Ok(())
}

/// One post prints as an object, several as an array.
fn print_json(posts: &[PostRecord]) -> PostwrightResult<()> {
    let json = match posts {
        [post] => serde_json::to_string_pretty(post),
        _ => serde_json::to_string_pretty(posts),
    }
    .map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn print_human(posts: &[PostRecord], char_limit: usize) {
    if posts.is_empty() {
        println!("No posts requested.");
        return;
    }

    for (index, post) in posts.iter().enumerate() {
        if posts.len() > 1 {
            println!("Option {} of {}", index + 1, posts.len());
        }
        println!("{:-<80}", "");
        println!("{}", post.content());
        println!("{:-<80}", "");
        println!(
            "Words: {} | Characters: {}",
            post.word_count(),
            post.char_count()
        );
        println!("Date: {}", post.date());
        println!(
            "Generated: {}",
            post.generated_at().format("%Y-%m-%d %H:%M:%S")
        );
        if post.is_fallback() {
            println!("Note: generation failed, showing the fallback post.");
        }
        if post.exceeds_char_limit(char_limit) {
            println!(
                "Warning: {} characters exceeds the {}-character limit.",
                post.char_count(),
                char_limit
            );
        }
        println!();
    }
}
