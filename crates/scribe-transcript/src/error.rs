use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("required transcript file '{}' does not exist{}", .path.display(), root_hint(.root))]
    NotFound {
        path: PathBuf,
        root: Option<PathBuf>,
    },
    #[error("reading transcript '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("transcript '{}' is not a JSON array of activities", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("encoding transcript '{}'", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("writing transcript '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TranscriptError {
    /// The transcript path the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path, .. }
            | Self::Io { path, .. }
            | Self::Parse { path, .. }
            | Self::Encode { path, .. }
            | Self::Write { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn root_hint(root: &Option<PathBuf>) -> String {
    match root {
        Some(root) => format!(
            " in '{}' folder. Review the '{}' environment variable value.",
            root.display(),
            crate::config::ROOT_ENV
        ),
        None => String::new(),
    }
}
