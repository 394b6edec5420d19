use anyhow::Result;
use serde::{Deserialize, Serialize};

// folio configuration
//
// these are presentation tuning values only; the defaults reproduce the stock page and a host
// page may override any subset of them with an inline toml block
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct FolioConfig {
    pub scroll: ScrollConfig,
    pub reveal: RevealConfig,
    pub notify: NotifyConfig,
    pub contact: ContactConfig,
    pub typing: TypingConfig,
    pub hover: HoverConfig,
}

// all offsets are in css pixels
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ScrollConfig {
    // height of the fixed navbar, subtracted from anchor targets
    pub header_offset: f64,
    // sections are considered to start this far above their layout top
    pub section_offset: f64,
    // added to the scroll position before section matching
    pub lookahead: f64,
    pub navbar_threshold: f64,
    pub scroll_top_threshold: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct RevealConfig {
    // fraction of the element that must be in view
    pub threshold: f64,
    // the viewport bottom is shrunk by this many pixels
    pub bottom_margin: u32,
    // animation delay added per element within a selector group
    pub stagger_ms: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NotifyConfig {
    pub show_delay_ms: u32,
    pub display_ms: u32,
    pub fade_ms: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    // simulated round trip, no request is ever made
    pub latency_ms: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct TypingConfig {
    pub start_delay_ms: u32,
    pub interval_ms: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct HoverConfig {
    pub link_stagger_ms: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            header_offset: 70.0,
            section_offset: 100.0,
            lookahead: 100.0,
            navbar_threshold: 50.0,
            scroll_top_threshold: 300.0,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            threshold: 0.1,
            bottom_margin: 50,
            stagger_ms: 100,
        }
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        NotifyConfig {
            show_delay_ms: 100,
            display_ms: 5000,
            fade_ms: 300,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig { latency_ms: 2000 }
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        TypingConfig {
            start_delay_ms: 1000,
            interval_ms: 100,
        }
    }
}

impl Default for HoverConfig {
    fn default() -> Self {
        HoverConfig {
            link_stagger_ms: 100,
        }
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: FolioConfig,
}

impl FolioConfig {
    pub fn from_toml(doc: &str) -> Result<Self> {
        let data: TomlConfigFile = toml::from_str(doc)?;

        Ok(data.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = FolioConfig::from_toml("").unwrap();

        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.scroll.header_offset, 70.0);
        assert_eq!(config.notify.display_ms, 5000);
        assert_eq!(config.contact.latency_ms, 2000);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let doc = r#"
            [config.scroll]
            navbar_threshold = 80.0

            [config.typing]
            interval_ms = 40
        "#;

        let config = FolioConfig::from_toml(doc).unwrap();

        assert_eq!(config.scroll.navbar_threshold, 80.0);
        assert_eq!(config.scroll.scroll_top_threshold, 300.0);
        assert_eq!(config.typing.interval_ms, 40);
        assert_eq!(config.typing.start_delay_ms, 1000);
        assert_eq!(config.reveal, RevealConfig::default());
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(FolioConfig::from_toml("[config.scroll]\nlookahead = \"far\"").is_err());
        assert!(FolioConfig::from_toml("[config").is_err());
    }
}
