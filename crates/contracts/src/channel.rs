//! Sales-channel catalog and the export gate.
//!
//! The catalog is built once at startup from a static base list filtered
//! against the configured supported-label set, then handed to whoever needs
//! it. Selecting an unsupported channel is allowed (the user can see it in
//! the dropdown); exporting through it is not.

use thiserror::Error;

/// Static channel list; support status comes from configuration.
const BASE_CHANNEL_OPTIONS: [(&str, &str); 3] = [
    ("smartstore", "SmartStore"),
    ("coupang", "Coupang"),
    ("gmarket", "Gmarket"),
];

/// Fallback when no supported-label list is configured.
pub const DEFAULT_SUPPORTED_LABELS: &str = "SmartStore";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelOption {
    pub value: String,
    pub label: String,
    pub supported: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// The value is not in the catalog at all.
    #[error("아직 지원하지 않는 채널")]
    Unknown,
    /// Known channel, but exporting through it is not available yet.
    #[error("아직 지원하지 않는 채널")]
    Unsupported,
}

/// Immutable, process-wide channel list.
///
/// Invariant carried over from the catalog definition: the first base entry
/// is always part of the configured supported set, so `first()` yields a
/// supported channel. The catalog itself does not re-check this.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelCatalog {
    options: Vec<ChannelOption>,
}

impl ChannelCatalog {
    /// Build the catalog from a comma-separated list of supported channel
    /// labels. Matching is case-insensitive and ignores surrounding spaces;
    /// empty entries are dropped.
    pub fn from_supported_labels(labels: &str) -> Self {
        let supported: Vec<String> = labels
            .split(',')
            .map(|label| label.trim().to_lowercase())
            .filter(|label| !label.is_empty())
            .collect();

        let options = BASE_CHANNEL_OPTIONS
            .iter()
            .map(|(value, label)| ChannelOption {
                value: (*value).to_string(),
                label: (*label).to_string(),
                supported: supported.contains(&label.to_lowercase()),
            })
            .collect();

        Self { options }
    }

    pub fn options(&self) -> &[ChannelOption] {
        &self.options
    }

    /// Initial selection: the first catalog entry.
    pub fn first(&self) -> &ChannelOption {
        &self.options[0]
    }

    pub fn find(&self, value: &str) -> Option<&ChannelOption> {
        self.options.iter().find(|option| option.value == value)
    }

    /// Look up a channel for selection. Unknown values are rejected and the
    /// caller keeps its current selection; known-but-unsupported channels are
    /// returned as-is.
    pub fn select(&self, value: &str) -> Result<&ChannelOption, ChannelError> {
        self.find(value).ok_or(ChannelError::Unknown)
    }
}

impl Default for ChannelCatalog {
    fn default() -> Self {
        Self::from_supported_labels(DEFAULT_SUPPORTED_LABELS)
    }
}

/// Channel value → bulk-export endpoint path.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRegistry {
    endpoints: Vec<(String, String)>,
}

impl ExportRegistry {
    pub fn new() -> Self {
        Self {
            endpoints: vec![(
                "smartstore".to_string(),
                "/api/exports/channel/smartstore".to_string(),
            )],
        }
    }

    pub fn endpoint(&self, value: &str) -> Option<&str> {
        self.endpoints
            .iter()
            .find(|(channel, _)| channel == value)
            .map(|(_, path)| path.as_str())
    }

    /// Gate an export against the current channel. Runs before the request
    /// is built, so an unsupported channel never reaches the backend.
    pub fn assert_export_allowed(&self, channel: &ChannelOption) -> Result<(), ChannelError> {
        if !channel.supported || self.endpoint(&channel.value).is_none() {
            return Err(ChannelError::Unsupported);
        }
        Ok(())
    }
}

impl Default for ExportRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_supports_only_smartstore() {
        let catalog = ChannelCatalog::default();
        let supported: Vec<&str> = catalog
            .options()
            .iter()
            .filter(|option| option.supported)
            .map(|option| option.value.as_str())
            .collect();
        assert_eq!(supported, vec!["smartstore"]);
        assert!(catalog.first().supported);
    }

    #[test]
    fn label_list_is_case_insensitive_and_trimmed() {
        let catalog = ChannelCatalog::from_supported_labels(" smartstore , COUPANG ,, ");
        assert!(catalog.find("smartstore").unwrap().supported);
        assert!(catalog.find("coupang").unwrap().supported);
        assert!(!catalog.find("gmarket").unwrap().supported);
    }

    #[test]
    fn selecting_an_unknown_channel_fails() {
        let catalog = ChannelCatalog::default();
        assert_eq!(catalog.select("aliexpress"), Err(ChannelError::Unknown));
    }

    #[test]
    fn selecting_an_unsupported_channel_is_still_allowed() {
        let catalog = ChannelCatalog::default();
        let coupang = catalog.select("coupang").unwrap();
        assert!(!coupang.supported);
    }

    #[test]
    fn export_is_blocked_for_unsupported_channels() {
        let catalog = ChannelCatalog::default();
        let registry = ExportRegistry::new();

        let coupang = catalog.find("coupang").unwrap();
        assert_eq!(
            registry.assert_export_allowed(coupang),
            Err(ChannelError::Unsupported)
        );

        let smartstore = catalog.find("smartstore").unwrap();
        assert_eq!(registry.assert_export_allowed(smartstore), Ok(()));
    }

    #[test]
    fn export_requires_an_endpoint_even_for_supported_channels() {
        // gmarket marked supported via config, but no export endpoint exists.
        let catalog = ChannelCatalog::from_supported_labels("SmartStore,Gmarket");
        let registry = ExportRegistry::new();

        let gmarket = catalog.find("gmarket").unwrap();
        assert!(gmarket.supported);
        assert_eq!(
            registry.assert_export_allowed(gmarket),
            Err(ChannelError::Unsupported)
        );
    }

    #[test]
    fn registry_maps_smartstore_to_its_export_path() {
        let registry = ExportRegistry::new();
        assert_eq!(
            registry.endpoint("smartstore"),
            Some("/api/exports/channel/smartstore")
        );
        assert_eq!(registry.endpoint("coupang"), None);
    }
}
