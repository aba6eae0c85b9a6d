use crate::config::{TestContext, TranscriptConfig};
use crate::error::TranscriptError;
use scribe_core::Activity;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Load the activities of a `.transcript` file, in file order.
///
/// The file must hold a single UTF-8 JSON array, optionally preceded by a
/// byte-order mark. A missing file is reported as
/// [`TranscriptError::NotFound`] rather than an I/O error.
pub fn load(path: &Path) -> Result<Vec<Activity>, TranscriptError> {
    load_in(path, None)
}

/// Locate the transcript for `ctx` under `config.root` and load it.
pub fn load_for_test(
    config: &TranscriptConfig,
    ctx: &TestContext,
) -> Result<Vec<Activity>, TranscriptError> {
    let path = config.locate(ctx);
    load_in(&path, Some(config.root()))
}

fn load_in(path: &Path, root: Option<&Path>) -> Result<Vec<Activity>, TranscriptError> {
    if !path.is_file() {
        return Err(TranscriptError::NotFound {
            path: path.to_path_buf(),
            root: root.map(Path::to_path_buf),
        });
    }
    let bytes = std::fs::read(path).map_err(|source| TranscriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    // a leading BOM is skipped; invalid UTF-8 is a Parse error, not Io
    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);
    let activities: Vec<Activity> =
        serde_json::from_slice(content).map_err(|source| TranscriptError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        path = %path.display(),
        activities = activities.len(),
        "loaded transcript"
    );
    Ok(activities)
}
