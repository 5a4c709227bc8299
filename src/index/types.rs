//! Types for the suffix-array index

use serde::{Deserialize, Serialize};

/// Position or rank inside the indexed text.
///
/// u32 keeps the four construction arrays at sixteen bytes per suffix;
/// texts above `u32::MAX` bytes are rejected at build time.
pub type SuffixIndex = u32;

/// Default keyword-in-context window radius in bytes.
pub const DEFAULT_CONTEXT_WIDTH: usize = 15;

/// Configuration for the query surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Bytes of context emitted on each side of a keyword-in-context hit
    #[serde(default = "default_context_width")]
    pub context_width: usize,
    /// Fold text and patterns to ASCII lowercase before indexing/searching
    #[serde(default)]
    pub case_insensitive: bool,
}

fn default_context_width() -> usize {
    DEFAULT_CONTEXT_WIDTH
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            context_width: DEFAULT_CONTEXT_WIDTH,
            case_insensitive: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = SearchConfig::default();
        assert_eq!(config.context_width, DEFAULT_CONTEXT_WIDTH);
        assert!(!config.case_insensitive);
    }

    #[test]
    fn test_config_partial_json() {
        // Missing fields fall back to defaults
        let json = r#"{"case_insensitive": true}"#;
        let config: SearchConfig = serde_json::from_str(json).unwrap();

        assert!(config.case_insensitive);
        assert_eq!(config.context_width, DEFAULT_CONTEXT_WIDTH);
    }

    #[test]
    fn test_config_round_trip() {
        let config = SearchConfig {
            context_width: 40,
            case_insensitive: true,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SearchConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.context_width, 40);
        assert!(parsed.case_insensitive);
    }
}
