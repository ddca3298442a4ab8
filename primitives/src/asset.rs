use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Localization, Platform};

const BYTES_IN_MEGABYTE: f64 = 1024.0 * 1024.0;

/// A size in megabytes, always formatted with exactly two decimal digits.
///
/// Halves are rounded away from zero, e.g. `131_072` bytes (`0.125` MB) is `"0.13"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeMb(String);

impl SizeMb {
    pub fn from_bytes(bytes: f64) -> Self {
        let hundredths = (bytes / BYTES_IN_MEGABYTE * 100.0).round();

        Self(format!("{:.2}", hundredths / 100.0))
    }

    /// `"0.00"`, used for files without a size.
    pub fn zero() -> Self {
        Self::from_bytes(0.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SizeMb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The flattened, client-facing view of a crosspromo file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedAsset {
    #[serde(rename = "AdType")]
    pub ad_type: String,
    /// `"Unknown"` when the file has no format
    #[serde(rename = "AdFormat")]
    pub ad_format: String,
    #[serde(rename = "sizeMB")]
    pub size_mb: SizeMb,
    /// Empty when the file has no url
    #[serde(rename = "Url")]
    pub url: String,
    /// Only set for `Rewarded` assets which have an `IconBig` sibling
    #[serde(rename = "iconUrl")]
    pub icon_url: Option<String>,
    #[serde(rename = "iconSizeMB")]
    pub icon_size_mb: Option<SizeMb>,
    pub platform: Platform,
    pub localization: Localization,
}

/// The assets of one [`Localization`], split by [`Platform`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizationAssets {
    pub localization: Localization,
    pub ios: Vec<ExtractedAsset>,
    pub android: Vec<ExtractedAsset>,
}

impl LocalizationAssets {
    pub fn new(localization: Localization) -> Self {
        Self {
            localization,
            ios: vec![],
            android: vec![],
        }
    }

    pub fn platform(&self, platform: Platform) -> &[ExtractedAsset] {
        match platform {
            Platform::Ios => &self.ios,
            Platform::Android => &self.android,
        }
    }

    pub fn platform_mut(&mut self, platform: Platform) -> &mut Vec<ExtractedAsset> {
        match platform {
            Platform::Ios => &mut self.ios,
            Platform::Android => &mut self.android,
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn size_has_two_decimal_digits() {
        assert_eq!("0.00", SizeMb::zero().as_str());
        assert_eq!("1.00", SizeMb::from_bytes(1_048_576.0).as_str());
        assert_eq!("2.00", SizeMb::from_bytes(2_097_152.0).as_str());
        assert_eq!("0.50", SizeMb::from_bytes(524_288.0).as_str());
        assert_eq!("0.13", SizeMb::from_bytes(131_072.0).as_str());
        assert_eq!("0.38", SizeMb::from_bytes(393_216.0).as_str());
        assert_eq!("1.23", SizeMb::from_bytes(1_290_000.0).as_str());
        assert_eq!("0.00", SizeMb::from_bytes(1.0).as_str());
    }

    #[test]
    fn asset_serializes_with_client_field_names() {
        let asset = ExtractedAsset {
            ad_type: "Banner".into(),
            ad_format: "Unknown".into(),
            size_mb: SizeMb::zero(),
            url: "".into(),
            icon_url: None,
            icon_size_mb: None,
            platform: Platform::Android,
            localization: Localization::Ger,
        };

        assert_eq!(
            json!({
                "AdType": "Banner",
                "AdFormat": "Unknown",
                "sizeMB": "0.00",
                "Url": "",
                "iconUrl": null,
                "iconSizeMB": null,
                "platform": "android",
                "localization": "ger"
            }),
            serde_json::to_value(&asset).expect("Should serialize")
        );
    }
}
