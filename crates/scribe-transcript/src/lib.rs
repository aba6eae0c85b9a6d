mod config;
mod error;
mod loader;
mod writer;

pub use config::{
    TestContext, TranscriptConfig, DEFAULT_ROOT, LEGACY_ROOT_ENV, ROOT_ENV, TRANSCRIPT_EXT,
};
pub use error::TranscriptError;
pub use loader::{load, load_for_test};
pub use writer::save;
