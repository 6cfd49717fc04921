//! Settings for the `visie` command.
//!
//! The shipped values live in `defaults/visie.default.toml`, compiled into the crate. A
//! [`Loader`] starts from them and stacks TOML files and single-key overrides on top; later
//! layers win. [`Loader::build`] produces the typed [`VisieConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/visie.default.toml");

/// Everything the command needs to run
#[derive(Debug, Clone, Deserialize)]
pub struct VisieConfig {
    pub generate: GenerateConfig,
    pub dictionary: DictionaryConfig,
}

/// The `[generate]` table
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateConfig {
    pub min_length: usize,
    pub use_variants: bool,
}

/// The `[dictionary]` table
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
    pub path: PathBuf,
}

/// Stacks settings sources over the shipped defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the shipped defaults so far.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Stack a TOML file that must exist, e.g. one named with `--config`.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Stack a TOML file that may be absent, e.g. the user's own `visie.toml`.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        self
    }

    /// Set one dotted key, such as `generate.min_length`, above every file.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and read them into a [`VisieConfig`].
    pub fn build(self) -> Result<VisieConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The shipped settings, with nothing stacked on top.
pub fn load_defaults() -> Result<VisieConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.generate.min_length, 4);
        assert!(!config.generate.use_variants);
        assert_eq!(
            config.dictionary.path,
            PathBuf::from(crate::dictionary::DEFAULT_DICTIONARY_PATH)
        );
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("generate.min_length", 3_i64)
            .expect("override to apply")
            .set_override("generate.use_variants", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.generate.min_length, 3);
        assert!(config.generate.use_variants);
    }

    #[test]
    fn layers_files_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[dictionary]\npath = \"/tmp/words\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.dictionary.path, PathBuf::from("/tmp/words"));
        assert_eq!(config.generate.min_length, 4);
    }

    #[test]
    fn later_layers_win() {
        let mut user = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(user, "[generate]\nmin_length = 3\n\n[dictionary]\npath = \"/a\"")
            .expect("write config");
        let mut explicit = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(explicit, "[dictionary]\npath = \"/b\"").expect("write config");

        let config = Loader::new()
            .with_optional_file(user.path())
            .with_file(explicit.path())
            .build()
            .expect("config to build");
        assert_eq!(config.generate.min_length, 3);
        assert_eq!(config.dictionary.path, PathBuf::from("/b"));
    }

    #[test]
    fn optional_file_may_be_missing() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.generate.min_length, 4);
    }

    #[test]
    fn required_file_must_exist() {
        assert!(Loader::new()
            .with_file("/definitely/not/here.toml")
            .build()
            .is_err());
    }
}
