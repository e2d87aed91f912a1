use std::path::PathBuf;

/// Where to find a story and how strictly to load it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryConfig {
    /// Path of the YAML story file.
    pub path: PathBuf,
    /// Reject books in which two pages share a number.
    pub strict: bool,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("sample.yaml"),
            strict: false,
        }
    }
}

impl StoryConfig {
    /// Load the story at `path` with default settings.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Set whether duplicate page numbers are an error.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = StoryConfig::default();
        assert_eq!(cfg.path, PathBuf::from("sample.yaml"));
        assert!(!cfg.strict);
    }

    #[test]
    fn builder_methods() {
        let cfg = StoryConfig::new("stories/cave.yaml").with_strict(true);
        assert_eq!(cfg.path, PathBuf::from("stories/cave.yaml"));
        assert!(cfg.strict);
    }
}
