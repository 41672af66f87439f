use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for selecting page files inside a directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFilterConfig {
    /// File extensions (without the dot) that count as pages, compared case-insensitively
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Regex patterns for file names to include (if empty, all names are included unless excluded)
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Regex patterns for file names to exclude (these take precedence over include patterns)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["html".to_string()]
}

impl Default for FileFilterConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
        }
    }
}

impl FileFilterConfig {
    /// Default filter plus the given exclude patterns
    pub fn excluding(patterns: &[&str]) -> Self {
        Self {
            exclude_patterns: patterns.iter().map(|p| p.to_string()).collect(),
            ..Self::default()
        }
    }
}

/// File filter that uses an extension list and regex patterns to pick page files
#[derive(Debug)]
pub struct FileFilter {
    config: FileFilterConfig,
    include_regexes: Vec<Regex>,
    exclude_regexes: Vec<Regex>,
}

impl Default for FileFilter {
    fn default() -> Self {
        Self::new(FileFilterConfig::default()).expect("Default filter has no patterns to compile")
    }
}

impl FileFilter {
    /// Create a new file filter from configuration
    pub fn new(config: FileFilterConfig) -> std::result::Result<Self, regex::Error> {
        let mut include_regexes = Vec::with_capacity(config.include_patterns.len());
        for pattern in &config.include_patterns {
            include_regexes.push(Regex::new(pattern)?);
        }

        let mut exclude_regexes = Vec::with_capacity(config.exclude_patterns.len());
        for pattern in &config.exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            config,
            include_regexes,
            exclude_regexes,
        })
    }

    /// Determine if a file name should be treated as a page based on all filtering rules
    pub fn should_include(&self, file_name: &str) -> bool {
        if !self.has_page_extension(file_name) {
            return false;
        }

        // Exclusions take precedence
        if self.exclude_regexes.iter().any(|re| re.is_match(file_name)) {
            return false;
        }

        if !self.include_regexes.is_empty()
            && !self.include_regexes.iter().any(|re| re.is_match(file_name))
        {
            return false;
        }

        true
    }

    fn has_page_extension(&self, file_name: &str) -> bool {
        let Some(ext) = Path::new(file_name).extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.config
            .extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    }

    /// List the page files directly inside `dir`, sorted by file name.
    ///
    /// Subdirectories are never entered. Entries whose names are not valid
    /// UTF-8 are skipped.
    pub fn list_pages(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

        let mut pages = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                ::log::debug!("Skipping non UTF-8 file name: {:?}", path);
                continue;
            };
            if !path.is_file() {
                continue;
            }
            if self.should_include(name) {
                pages.push(path);
            }
        }

        pages.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        ::log::debug!("Found {} page files in {}", pages.len(), dir.display());
        Ok(pages)
    }
}
