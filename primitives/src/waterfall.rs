//! Read-only, lenient views over the untyped `AdWaterfall` payload of a document.
//!
//! Nothing in here fails: a missing or mistyped value is reported as absent (`None`)
//! or as an empty sequence.

use std::fmt;

use serde_json::{Map, Value};

/// The `AdType` of the crosspromo file used as an icon for `Rewarded` files.
pub const ICON_BIG: &str = "IconBig";

/// The ad types of the waterfall which contribute assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdType {
    Rewarded,
    Banner,
    Interstitial,
}

impl AdType {
    /// The order in which the waterfall is traversed.
    pub const WATERFALL_ORDER: [AdType; 3] = [AdType::Rewarded, AdType::Banner, AdType::Interstitial];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdType::Rewarded => "Rewarded",
            AdType::Banner => "Banner",
            AdType::Interstitial => "Interstitial",
        }
    }
}

impl fmt::Display for AdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `AdWaterfall` object of the dynamic data.
#[derive(Debug, Clone, Copy)]
pub struct AdWaterfall<'a>(&'a Map<String, Value>);

impl<'a> AdWaterfall<'a> {
    /// Returns `None` when `AdWaterfall` is absent or is not an object.
    pub fn from_dynamic_data(dynamic_data: &'a Value) -> Option<Self> {
        dynamic_data
            .get("AdWaterfall")
            .and_then(Value::as_object)
            .map(Self)
    }

    /// The waterfall entries of the given [`AdType`].
    ///
    /// Returns `None` when the key is absent or its value is not a sequence.
    pub fn entries(&self, ad_type: AdType) -> Option<impl Iterator<Item = WaterfallEntry<'a>>> {
        self.0
            .get(ad_type.as_str())
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(WaterfallEntry))
    }
}

/// A single entry of an ad type's waterfall.
#[derive(Debug, Clone, Copy)]
pub struct WaterfallEntry<'a>(pub(crate) &'a Value);

impl<'a> WaterfallEntry<'a> {
    /// The `CrosspromoData.CrosspromoFiles` of the entry.
    ///
    /// Files which are not objects are skipped.
    pub fn crosspromo_files(&self) -> impl Iterator<Item = CrosspromoFile<'a>> {
        self.0
            .get("CrosspromoData")
            .and_then(|data| data.get("CrosspromoFiles"))
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|file| file.as_object().map(CrosspromoFile))
    }
}

/// A creative file of a waterfall entry.
#[derive(Debug, Clone, Copy)]
pub struct CrosspromoFile<'a>(&'a Map<String, Value>);

impl<'a> CrosspromoFile<'a> {
    fn str_field(&self, field: &str) -> Option<&'a str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn ad_type(&self) -> Option<&'a str> {
        self.str_field("AdType")
    }

    pub fn is_ad_type(&self, ad_type: &str) -> bool {
        self.ad_type() == Some(ad_type)
    }

    /// An empty `AdFormat` is treated as absent.
    pub fn ad_format(&self) -> Option<&'a str> {
        self.str_field("AdFormat").filter(|format| !format.is_empty())
    }

    pub fn url(&self) -> Option<&'a str> {
        self.str_field("Url")
    }

    /// The file size in bytes.
    ///
    /// Numeric strings are accepted, a zero or non-numeric size is treated as absent.
    pub fn file_size(&self) -> Option<f64> {
        let size = match self.0.get("FileSize")? {
            Value::Number(number) => number.as_f64(),
            Value::String(string) => string.trim().parse::<f64>().ok(),
            _ => None,
        }?;

        (size.is_finite() && size != 0.0).then_some(size)
    }
}
