//! Widget configuration.
//!
//! The allow-list is deliberately not configurable; see
//! [`ALLOWED_EXTENSIONS`](crate::ALLOWED_EXTENSIONS).

use serde::{Deserialize, Serialize};

/// Default upload endpoint.
pub const DEFAULT_ENDPOINT: &str = "/php/upload.php";

/// Default multipart field name carrying the file.
pub const DEFAULT_FIELD_NAME: &str = "file";

/// Errors from loading or validating a [`WidgetConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON overrides could not be parsed.
    #[error("failed to parse widget configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// `endpoint` is empty.
    #[error("upload endpoint must not be empty")]
    EmptyEndpoint,

    /// `field_name` is empty.
    #[error("multipart field name must not be empty")]
    EmptyFieldName,

    /// `thumbnail_edge` is zero.
    #[error("thumbnail edge must be at least 1 pixel")]
    ZeroThumbnailEdge,
}

/// Configuration for one upload widget instance.
///
/// Fixed at construction: [`WidgetState`](crate::WidgetState) never
/// mutates it. Missing fields in JSON fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// URL each file is POSTed to.
    pub endpoint: String,

    /// Name of the multipart form field holding the file content.
    pub field_name: String,

    /// Longest edge of a raster thumbnail, in pixels. Larger images are
    /// downscaled to fit; smaller ones are kept at their size.
    pub thumbnail_edge: u32,

    /// Bottom padding reserved on the drop zone while the submission
    /// control is shown, in pixels.
    pub reserved_padding_px: u32,

    /// Delay before a new notification fades in, in milliseconds.
    pub notify_reveal_ms: u32,

    /// How long a notification stays visible, in milliseconds.
    pub notify_display_ms: u32,

    /// Fade-out duration before a notification is removed, in milliseconds.
    pub notify_fade_ms: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            field_name: DEFAULT_FIELD_NAME.to_owned(),
            thumbnail_edge: 160,
            reserved_padding_px: 60,
            notify_reveal_ms: 300,
            notify_display_ms: 3000,
            notify_fade_ms: 300,
        }
    }
}

/// The three notification timer intervals, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyTimings {
    /// Delay before fade-in.
    pub reveal_ms: u32,
    /// Visible duration.
    pub display_ms: u32,
    /// Fade-out duration.
    pub fade_ms: u32,
}

impl WidgetConfig {
    /// Parse JSON overrides on top of the defaults and validate them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped
    /// fields, or the relevant validation error from [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants that defaults always satisfy.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if self.field_name.is_empty() {
            return Err(ConfigError::EmptyFieldName);
        }
        if self.thumbnail_edge == 0 {
            return Err(ConfigError::ZeroThumbnailEdge);
        }
        Ok(())
    }

    /// Notification timer intervals.
    #[must_use]
    pub const fn notify_timings(&self) -> NotifyTimings {
        NotifyTimings {
            reveal_ms: self.notify_reveal_ms,
            display_ms: self.notify_display_ms,
            fade_ms: self.notify_fade_ms,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_endpoint_and_field() {
        let config = WidgetConfig::default();
        assert_eq!(config.endpoint, "/php/upload.php");
        assert_eq!(config.field_name, "file");
        assert_eq!(config.reserved_padding_px, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = WidgetConfig::from_json(r#"{ "endpoint": "/api/upload" }"#).unwrap();
        assert_eq!(config.endpoint, "/api/upload");
        assert_eq!(config.field_name, "file");
        assert_eq!(config.notify_display_ms, 3000);
    }

    #[test]
    fn empty_object_is_default() {
        let config = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = WidgetConfig::from_json("{ endpoint: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let result = WidgetConfig::from_json(r#"{ "thumbnail_edge": "big" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            WidgetConfig::from_json(r#"{ "endpoint": "  " }"#),
            Err(ConfigError::EmptyEndpoint)
        ));
        assert!(matches!(
            WidgetConfig::from_json(r#"{ "field_name": "" }"#),
            Err(ConfigError::EmptyFieldName)
        ));
        assert!(matches!(
            WidgetConfig::from_json(r#"{ "thumbnail_edge": 0 }"#),
            Err(ConfigError::ZeroThumbnailEdge)
        ));
    }

    #[test]
    fn timings_come_from_config() {
        let config = WidgetConfig {
            notify_reveal_ms: 1,
            notify_display_ms: 2,
            notify_fade_ms: 3,
            ..WidgetConfig::default()
        };
        assert_eq!(
            config.notify_timings(),
            NotifyTimings {
                reveal_ms: 1,
                display_ms: 2,
                fade_ms: 3
            }
        );
    }
}
