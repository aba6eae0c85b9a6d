use crate::error::TranscriptError;
use scribe_core::Activity;
use std::io::Write;
use std::path::Path;

/// Write `activities` to `path` as a pretty-printed JSON array.
///
/// Atomic: the data goes to a temp file in the same directory, which is then
/// renamed over `path`. Parent directories are created as needed.
pub fn save(path: &Path, activities: &[Activity]) -> Result<(), TranscriptError> {
    let data = serde_json::to_string_pretty(activities).map_err(|source| {
        TranscriptError::Encode {
            path: path.to_path_buf(),
            source,
        }
    })?;
    write_atomic(path, data.as_bytes()).map_err(|source| TranscriptError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        activities = activities.len(),
        "saved transcript"
    );
    Ok(())
}

fn write_atomic(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
