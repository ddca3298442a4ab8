use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The identity of a waterfall document:
/// which app, in which store, for which locale and platform.
///
/// Every field is read with [`lenient_string`], so a missing, `null` or mistyped value
/// never fails the deserialization of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cluster {
    #[serde(rename = "Platform", deserialize_with = "lenient_string")]
    pub platform: String,
    #[serde(rename = "LocalizationCode", deserialize_with = "lenient_string")]
    pub localization_code: String,
    #[serde(rename = "StoreCode", deserialize_with = "lenient_string")]
    pub store_code: String,
    #[serde(rename = "AppId", deserialize_with = "lenient_string")]
    pub app_id: String,
}

impl Cluster {
    /// The recognized [`Platform`] of the cluster, compared case-insensitively.
    pub fn platform(&self) -> Option<Platform> {
        self.platform.parse().ok()
    }

    /// The recognized [`Localization`] of the cluster, compared exactly.
    pub fn localization(&self) -> Option<Localization> {
        self.localization_code.parse().ok()
    }
}

/// Strings are kept and numbers are stringified, any other value becomes an empty string.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let string = match Value::deserialize(deserializer)? {
        Value::String(string) => string,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    };

    Ok(string)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown platform '{0}', expected `ios` or `android`")]
    Platform(String),
    #[error("Unknown localization code '{0}', expected one of `ru`, `ger`, `eng`, `french`")]
    Localization(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }
}

impl FromStr for Platform {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            _ => Err(ParseError::Platform(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of localizations reported by the assets API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Localization {
    Ru,
    Ger,
    Eng,
    French,
}

impl Localization {
    /// All localizations in report order.
    pub const ALL: [Localization; 4] = [
        Localization::Ru,
        Localization::Ger,
        Localization::Eng,
        Localization::French,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Localization::Ru => "ru",
            Localization::Ger => "ger",
            Localization::Eng => "eng",
            Localization::French => "french",
        }
    }
}

impl FromStr for Localization {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Localization::ALL
            .into_iter()
            .find(|localization| localization.as_str() == s)
            .ok_or_else(|| ParseError::Localization(s.to_string()))
    }
}

impl fmt::Display for Localization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A [`Cluster`] field which the gateway can filter on or list the distinct values of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterField {
    StoreCode,
    AppId,
}

impl ClusterField {
    /// The dotted path of the field inside a stored document.
    pub fn path(&self) -> &'static str {
        match self {
            ClusterField::StoreCode => "Cluster.StoreCode",
            ClusterField::AppId => "Cluster.AppId",
        }
    }

    pub fn value<'a>(&self, cluster: &'a Cluster) -> &'a str {
        match self {
            ClusterField::StoreCode => &cluster.store_code,
            ClusterField::AppId => &cluster.app_id,
        }
    }
}

/// Equality constraints on [`Cluster`] fields.
///
/// All set constraints must hold (AND). An empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterFilter {
    pub store_code: Option<String>,
    pub app_id: Option<String>,
}

impl ClusterFilter {
    /// The set constraints as `(field, expected value)` pairs.
    pub fn constraints(&self) -> impl Iterator<Item = (ClusterField, &str)> {
        [
            (ClusterField::StoreCode, self.store_code.as_deref()),
            (ClusterField::AppId, self.app_id.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.constraints().next().is_none()
    }

    pub fn matches(&self, cluster: &Cluster) -> bool {
        self.constraints()
            .all(|(field, expected)| field.value(cluster) == expected)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn cluster(store_code: &str, app_id: &str) -> Cluster {
        Cluster {
            platform: "iOS".into(),
            localization_code: "eng".into(),
            store_code: store_code.into(),
            app_id: app_id.into(),
        }
    }

    #[test]
    fn platform_is_parsed_case_insensitively() {
        assert_eq!(Ok(Platform::Ios), "iOS".parse::<Platform>());
        assert_eq!(Ok(Platform::Android), "ANDROID".parse::<Platform>());
        assert_eq!(
            Err(ParseError::Platform("webgl".into())),
            "webgl".parse::<Platform>()
        );
        assert_eq!(Some(Platform::Ios), cluster("s1", "a1").platform());
    }

    #[test]
    fn localization_is_parsed_exactly() {
        assert_eq!(Ok(Localization::French), "french".parse::<Localization>());
        assert!("ENG".parse::<Localization>().is_err());
        assert!("de".parse::<Localization>().is_err());
    }

    #[test]
    fn cluster_deserializes_with_missing_fields() {
        let cluster = serde_json::from_value::<Cluster>(json!({
            "Platform": "Android",
            "StoreCode": "s1"
        }))
        .expect("Should deserialize");

        assert_eq!(Some(Platform::Android), cluster.platform());
        assert_eq!(None, cluster.localization());
        assert_eq!("", cluster.app_id);
    }

    #[test]
    fn cluster_deserializes_null_and_mistyped_fields() {
        let cluster = serde_json::from_value::<Cluster>(json!({
            "Platform": "iOS",
            "LocalizationCode": ["eng"],
            "StoreCode": 42,
            "AppId": null
        }))
        .expect("Should deserialize");

        assert_eq!(
            Cluster {
                platform: "iOS".into(),
                localization_code: "".into(),
                store_code: "42".into(),
                app_id: "".into(),
            },
            cluster
        );
    }

    #[test]
    fn filter_applies_all_constraints() {
        let empty = ClusterFilter::default();
        assert!(empty.is_empty());
        assert!(empty.matches(&cluster("s1", "a1")));

        let by_store = ClusterFilter {
            store_code: Some("s1".into()),
            app_id: None,
        };
        assert!(by_store.matches(&cluster("s1", "a2")));
        assert!(!by_store.matches(&cluster("s2", "a1")));

        let by_both = ClusterFilter {
            store_code: Some("s1".into()),
            app_id: Some("a1".into()),
        };
        assert_eq!(
            vec![(ClusterField::StoreCode, "s1"), (ClusterField::AppId, "a1")],
            by_both.constraints().collect::<Vec<_>>()
        );
        assert!(by_both.matches(&cluster("s1", "a1")));
        assert!(!by_both.matches(&cluster("s1", "a2")));
    }
}
