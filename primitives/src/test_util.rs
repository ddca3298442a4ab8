//! Dummy waterfall documents and helpers for testing.

use once_cell::sync::Lazy;
use serde_json::json;
use slog::{o, Discard, Logger};

use crate::WaterfallDocument;

pub const DUMMY_STORE_CODES: [&str; 2] = ["GooglePlay", "AppStore"];
pub const DUMMY_APP_IDS: [&str; 2] = ["com.example.puzzle", "com.example.racer"];

/// One document per store & app combination:
///
/// 0. `GooglePlay` / `com.example.puzzle`: Android, `eng`, Rewarded with an icon & a Banner
/// 1. `AppStore` / `com.example.puzzle`: iOS, `eng`, a single Interstitial
/// 2. `AppStore` / `com.example.racer`: iOS, `ru`, Rewarded without an icon
/// 3. `GooglePlay` / `com.example.racer`: unrecognized platform, `ger`, a single Banner
pub static DUMMY_DOCUMENTS: Lazy<[WaterfallDocument; 4]> = Lazy::new(|| {
    let documents = json!([
        {
            "Cluster": {
                "Platform": "Android",
                "LocalizationCode": "eng",
                "StoreCode": "GooglePlay",
                "AppId": "com.example.puzzle"
            },
            "AppDynamicData": {
                "AdWaterfall": {
                    "Rewarded": [{
                        "CrosspromoData": {
                            "CrosspromoFiles": [
                                { "AdType": "IconBig", "Url": "https://cdn.example.com/puzzle/icon.png", "FileSize": 262144 },
                                { "AdType": "Rewarded", "AdFormat": "Video", "Url": "https://cdn.example.com/puzzle/rewarded.mp4", "FileSize": 5242880 }
                            ]
                        }
                    }],
                    "Banner": [{
                        "CrosspromoData": {
                            "CrosspromoFiles": [
                                { "AdType": "Banner", "AdFormat": "Static", "Url": "https://cdn.example.com/puzzle/banner.png", "FileSize": 102400 }
                            ]
                        }
                    }]
                }
            }
        },
        {
            "Cluster": {
                "Platform": "iOS",
                "LocalizationCode": "eng",
                "StoreCode": "AppStore",
                "AppId": "com.example.puzzle"
            },
            "AppDynamicData": {
                "AdWaterfall": {
                    "Interstitial": [{
                        "CrosspromoData": {
                            "CrosspromoFiles": [
                                { "AdType": "Interstitial", "AdFormat": "Playable", "Url": "https://cdn.example.com/puzzle/interstitial.html", "FileSize": 1048576 }
                            ]
                        }
                    }]
                }
            }
        },
        {
            "Cluster": {
                "Platform": "iOS",
                "LocalizationCode": "ru",
                "StoreCode": "AppStore",
                "AppId": "com.example.racer"
            },
            "AppDynamicData": {
                "AdWaterfall": {
                    "Rewarded": [{
                        "CrosspromoData": {
                            "CrosspromoFiles": [
                                { "AdType": "Rewarded", "Url": "https://cdn.example.com/racer/rewarded.mp4", "FileSize": 3145728 }
                            ]
                        }
                    }]
                }
            }
        },
        {
            "Cluster": {
                "Platform": "WebGL",
                "LocalizationCode": "ger",
                "StoreCode": "GooglePlay",
                "AppId": "com.example.racer"
            },
            "AppDynamicData": {
                "AdWaterfall": {
                    "Banner": [{
                        "CrosspromoData": {
                            "CrosspromoFiles": [
                                { "AdType": "Banner", "Url": "https://cdn.example.com/racer/banner.png" }
                            ]
                        }
                    }]
                }
            }
        }
    ]);

    serde_json::from_value(documents).expect("Should deserialize the dummy documents")
});

pub fn discard_logger() -> Logger {
    Logger::root(Discard, o!())
}
