//! Encoder configuration, loaded from TOML.

use std::path::Path;

use serde::Deserialize;

/// Settings applied by [`crate::encoder::PacketEncoder`].
///
/// ```toml
/// maximum_packet_size = 1048576
/// initial_capacity = 512
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EncoderConfig {
    /// Packets larger than this many bytes are rejected. No limit when unset.
    #[serde(default)]
    pub maximum_packet_size: Option<u32>,

    /// Initial capacity of the sink each packet is encoded into
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            maximum_packet_size: None,
            initial_capacity: default_initial_capacity(),
        }
    }
}

impl EncoderConfig {
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: EncoderConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

fn default_initial_capacity() -> usize {
    256
}

#[cfg(test)]
mod tests {
    use crate::{config::EncoderConfig, error::Error};

    #[test]
    fn test_config_defaults() -> crate::Result<()> {
        let config = EncoderConfig::from_toml_str("")?;

        assert_eq!(config, EncoderConfig::default());
        assert_eq!(config.maximum_packet_size, None);
        assert_eq!(config.initial_capacity, 256);

        Ok(())
    }

    #[test]
    fn test_config_from_toml() -> crate::Result<()> {
        let config = EncoderConfig::from_toml_str(
            r#"
            maximum_packet_size = 1048576
            initial_capacity = 64
            "#,
        )?;

        assert_eq!(config.maximum_packet_size, Some(1048576));
        assert_eq!(config.initial_capacity, 64);

        Ok(())
    }

    #[test]
    fn test_config_invalid_toml() {
        match EncoderConfig::from_toml_str("maximum_packet_size = \"big\"") {
            Err(Error::Config(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_config_missing_file() {
        let path = std::path::Path::new("/nonexistent/mercurio-wire.toml");

        match EncoderConfig::from_file(path) {
            Err(Error::Io(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
