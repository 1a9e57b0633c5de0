// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::model::Marker;
use crate::storage::FileStore;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_true() -> bool {
    true
}

fn default_tag_names() -> String {
    "todo".to_string()
}

/// Per-marker show/hide preferences: one independent flag per kind,
/// default-on except `done`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerVisibility {
    #[serde(default = "default_true")]
    pub show_todo: bool,
    #[serde(default = "default_true")]
    pub show_incomplete: bool,
    #[serde(default)]
    pub show_done: bool,
    #[serde(default = "default_true")]
    pub show_canceled: bool,
    #[serde(default = "default_true")]
    pub show_forwarded: bool,
    #[serde(default = "default_true")]
    pub show_scheduling: bool,
    #[serde(default = "default_true")]
    pub show_question: bool,
    #[serde(default = "default_true")]
    pub show_important: bool,
    #[serde(default = "default_true")]
    pub show_star: bool,
    #[serde(default = "default_true")]
    pub show_quote: bool,
    #[serde(default = "default_true")]
    pub show_location: bool,
    #[serde(default = "default_true")]
    pub show_bookmark: bool,
    #[serde(default = "default_true")]
    pub show_information: bool,
    #[serde(default = "default_true")]
    pub show_savings: bool,
    #[serde(default = "default_true")]
    pub show_idea: bool,
    #[serde(default = "default_true")]
    pub show_pros: bool,
    #[serde(default = "default_true")]
    pub show_cons: bool,
    #[serde(default = "default_true")]
    pub show_fire: bool,
    #[serde(default = "default_true")]
    pub show_key: bool,
    #[serde(default = "default_true")]
    pub show_win: bool,
    #[serde(default = "default_true")]
    pub show_up: bool,
    #[serde(default = "default_true")]
    pub show_down: bool,
}

impl Default for MarkerVisibility {
    fn default() -> Self {
        Self {
            show_todo: true,
            show_incomplete: true,
            // Match the serde default: completed items are hidden unless
            // asked for.
            show_done: false,
            show_canceled: true,
            show_forwarded: true,
            show_scheduling: true,
            show_question: true,
            show_important: true,
            show_star: true,
            show_quote: true,
            show_location: true,
            show_bookmark: true,
            show_information: true,
            show_savings: true,
            show_idea: true,
            show_pros: true,
            show_cons: true,
            show_fire: true,
            show_key: true,
            show_win: true,
            show_up: true,
            show_down: true,
        }
    }
}

impl MarkerVisibility {
    /// The single place mapping each kind to its flag.
    pub fn shows(&self, marker: Marker) -> bool {
        match marker {
            Marker::Todo => self.show_todo,
            Marker::Incomplete => self.show_incomplete,
            Marker::Done => self.show_done,
            Marker::Canceled => self.show_canceled,
            Marker::Forwarded => self.show_forwarded,
            Marker::Scheduling => self.show_scheduling,
            Marker::Question => self.show_question,
            Marker::Important => self.show_important,
            Marker::Star => self.show_star,
            Marker::Quote => self.show_quote,
            Marker::Location => self.show_location,
            Marker::Bookmark => self.show_bookmark,
            Marker::Information => self.show_information,
            Marker::Savings => self.show_savings,
            Marker::Idea => self.show_idea,
            Marker::Pros => self.show_pros,
            Marker::Cons => self.show_cons,
            Marker::Fire => self.show_fire,
            Marker::Key => self.show_key,
            Marker::Win => self.show_win,
            Marker::Up => self.show_up,
            Marker::Down => self.show_down,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Requested tag labels, newline separated (e.g. "todo\nchores").
    /// Empty means "match every document".
    #[serde(default = "default_tag_names")]
    pub tag_names: String,
    /// Inclusion glob patterns, newline separated. Empty means include
    /// everything.
    #[serde(default)]
    pub include_files: String,
    /// Deprecated single toggle kept for older configs; superseded by
    /// `visibility.show_done`.
    #[serde(default)]
    pub show_checked: bool,
    /// Scan whole documents that carry a requested tag anywhere, instead of
    /// only the tagged blocks.
    #[serde(default)]
    pub show_all_todos: bool,
    #[serde(default)]
    pub visibility: MarkerVisibility,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tag_names: default_tag_names(),
            include_files: String::new(),
            show_checked: false,
            show_all_todos: false,
            visibility: MarkerVisibility::default(),
        }
    }
}

impl Settings {
    /// Load the configuration from disk.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        FileStore::with_lock(path, || {
            let toml_str = toml::to_string_pretty(self)?;
            FileStore::atomic_write(path, toml_str)?;
            Ok(())
        })?;
        Ok(())
    }

    /// The requested tag labels as a normalized list. An empty setting
    /// becomes the wildcard list `["*"]`, which matches every document.
    pub fn requested_tags(&self) -> Vec<String> {
        let trimmed = self.tag_names.trim();
        if trimmed.is_empty() {
            return vec!["*".to_string()];
        }
        trimmed
            .lines()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Compiled inclusion patterns. An empty setting compiles to an empty
    /// list, which the scanner reads as "include everything"; an invalid
    /// pattern is skipped with a warning.
    pub fn include_patterns(&self) -> Vec<glob::Pattern> {
        let trimmed = self.include_files.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        trimmed
            .lines()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .filter_map(|p| match glob::Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    log::warn!("Ignoring invalid include pattern '{}': {}", p, e);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tag_names_mean_wildcard() {
        let mut settings = Settings::default();
        settings.tag_names = String::new();
        assert_eq!(settings.requested_tags(), vec!["*".to_string()]);

        settings.tag_names = "todo\nchores\n".to_string();
        assert_eq!(settings.requested_tags(), vec!["todo", "chores"]);
    }

    #[test]
    fn defaults_match_serde_defaults() {
        let parsed: Settings = toml::from_str("").unwrap();
        assert_eq!(parsed, Settings::default());
        assert!(!parsed.visibility.show_done);
        assert!(parsed.visibility.show_canceled);
    }
}
