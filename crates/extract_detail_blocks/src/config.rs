// crates/extract_detail_blocks/src/config.rs

use std::path::PathBuf;

/// Input document read when no path is given.
pub const DEFAULT_INPUT: &str = "README.rst";

/// Section id whose literal blocks are extracted by default.
pub const DEFAULT_SECTION: &str = "detail";

/// Written after every extracted block by default.
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Runtime configuration for one extraction run, composed by the CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractConfig {
    pub input: PathBuf,
    pub section_id: String,
    pub separator: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            section_id: DEFAULT_SECTION.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl ExtractConfig {
    /// Default configuration reading from `input`.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn with_section(mut self, section_id: impl Into<String>) -> Self {
        self.section_id = section_id.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_fixed_pipeline() {
        let config = ExtractConfig::default();
        assert_eq!(config.input, PathBuf::from("README.rst"));
        assert_eq!(config.section_id, "detail");
        assert_eq!(config.separator, "\n");
    }

    #[test]
    fn test_builder_overrides() {
        let config = ExtractConfig::new("docs/index.rst")
            .with_section("usage")
            .with_separator("\0");
        assert_eq!(config.input, PathBuf::from("docs/index.rst"));
        assert_eq!(config.section_id, "usage");
        assert_eq!(config.separator, "\0");
    }
}
