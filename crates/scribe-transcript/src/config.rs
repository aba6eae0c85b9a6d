use std::path::{Path, PathBuf};

/// Environment variable naming the transcripts root folder.
pub const ROOT_ENV: &str = "TRANSCRIPTS_ROOT_FOLDER";

/// Older key name, still honored when `TRANSCRIPTS_ROOT_FOLDER` is unset.
pub const LEGACY_ROOT_ENV: &str = "TranscriptsRootFolder";

/// Root used when neither root variable is set to a non-empty value.
pub const DEFAULT_ROOT: &str = "../../../../../transcripts";

pub const TRANSCRIPT_EXT: &str = "transcript";

/// Where transcript fixtures live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptConfig {
    pub root: PathBuf,
}

impl TranscriptConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read the root from `TRANSCRIPTS_ROOT_FOLDER`, then `TranscriptsRootFolder`,
    /// falling back to [`DEFAULT_ROOT`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let root = [ROOT_ENV, LEGACY_ROOT_ENV]
            .into_iter()
            .filter_map(|key| lookup(key))
            .find(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ROOT.to_string());
        Self::new(root)
    }

    /// `<root>/<class dir>/<test name>.transcript`. Pure, no I/O.
    pub fn locate(&self, ctx: &TestContext) -> PathBuf {
        let path = self
            .root
            .join(ctx.class_dir())
            .join(format!("{}.{TRANSCRIPT_EXT}", ctx.test_name));
        tracing::debug!(path = %path.display(), "located transcript");
        path
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

/// Identity of the test a transcript belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestContext {
    /// Test class or module, possibly fully qualified (`a.b.Class` or `a::b::module`).
    pub class_name: String,
    pub test_name: String,
}

impl TestContext {
    pub fn new(class_name: impl Into<String>, test_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            test_name: test_name.into(),
        }
    }

    /// Last segment of `class_name`; this is the transcript sub-directory.
    pub fn class_dir(&self) -> &str {
        self.class_name
            .rsplit(['.', ':'])
            .next()
            .unwrap_or(&self.class_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> TranscriptConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TranscriptConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn env_value_wins_when_set() {
        let cfg = from_vars(&[(ROOT_ENV, "/data/transcripts")]);
        assert_eq!(cfg.root, PathBuf::from("/data/transcripts"));
    }

    #[test]
    fn legacy_key_used_when_primary_unset() {
        let cfg = from_vars(&[(LEGACY_ROOT_ENV, "/legacy")]);
        assert_eq!(cfg.root, PathBuf::from("/legacy"));

        let cfg = from_vars(&[(ROOT_ENV, " "), (LEGACY_ROOT_ENV, "/legacy")]);
        assert_eq!(cfg.root, PathBuf::from("/legacy"));
    }

    #[test]
    fn primary_key_beats_legacy_key() {
        let cfg = from_vars(&[(ROOT_ENV, "/primary"), (LEGACY_ROOT_ENV, "/legacy")]);
        assert_eq!(cfg.root, PathBuf::from("/primary"));
    }

    #[test]
    fn unset_or_blank_env_falls_back_to_default() {
        assert_eq!(from_vars(&[]).root, PathBuf::from(DEFAULT_ROOT));
        assert_eq!(
            from_vars(&[(ROOT_ENV, "  "), (LEGACY_ROOT_ENV, "")]).root,
            PathBuf::from(DEFAULT_ROOT)
        );
        assert_eq!(TranscriptConfig::default().root, PathBuf::from(DEFAULT_ROOT));
    }

    #[test]
    fn class_dir_takes_last_segment() {
        assert_eq!(
            TestContext::new("Microsoft.Bot.Builder.Tests.TranscriptTests", "x").class_dir(),
            "TranscriptTests"
        );
        assert_eq!(
            TestContext::new("my_crate::tests::ReferenceTests", "x").class_dir(),
            "ReferenceTests"
        );
        assert_eq!(TestContext::new("Plain", "x").class_dir(), "Plain");
    }

    #[test]
    fn locate_builds_expected_path() {
        let cfg = TranscriptConfig::new("/tmp/transcripts");
        let ctx = TestContext::new("a.b.CoreTests", "EchoesBack");
        assert_eq!(
            cfg.locate(&ctx),
            PathBuf::from("/tmp/transcripts/CoreTests/EchoesBack.transcript")
        );
    }
}
