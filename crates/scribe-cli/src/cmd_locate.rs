use scribe_transcript::{TestContext, TranscriptConfig};
use std::path::PathBuf;

/// `scribe locate --class <C> --test <T> [--root <R>]`
pub fn execute(class_name: &str, test_name: &str, root: Option<PathBuf>) -> anyhow::Result<()> {
    let config = resolve_config(root);
    let ctx = TestContext::new(class_name, test_name);
    let path = config.locate(&ctx);
    let status = if path.is_file() { "exists" } else { "missing" };
    println!("{}  ({status}, root: {})", path.display(), config.root().display());
    Ok(())
}

/// `--root` beats the environment.
fn resolve_config(root: Option<PathBuf>) -> TranscriptConfig {
    match root {
        Some(root) => TranscriptConfig::new(root),
        None => TranscriptConfig::from_env(),
    }
}
