//! The Waterfall extractor.
//!
//! Folds the fetched [`WaterfallDocument`]s into the fixed-shape report of the assets API:
//! one [`LocalizationAssets`] per [`Localization::ALL`], in that order.

use crate::{
    asset::{ExtractedAsset, LocalizationAssets, SizeMb},
    waterfall::{AdType, CrosspromoFile, WaterfallEntry, ICON_BIG},
    Localization, Platform, WaterfallDocument,
};

const UNKNOWN_AD_FORMAT: &str = "Unknown";

/// Builds the assets report of the documents, preserving the fetch order.
///
/// Documents with an unrecognized localization code or platform do not contribute
/// to the report, neither do documents without an `AdWaterfall`.
/// No deduplication is done.
pub fn extract_report<'a, I>(documents: I) -> Vec<LocalizationAssets>
where
    I: IntoIterator<Item = &'a WaterfallDocument>,
{
    let report = Localization::ALL.map(LocalizationAssets::new);

    documents
        .into_iter()
        .fold(report, |mut report, document| {
            let (platform, localization) =
                match (document.cluster.platform(), document.cluster.localization()) {
                    (Some(platform), Some(localization)) => (platform, localization),
                    _ => return report,
                };

            let bucket = report
                .iter_mut()
                .find(|assets| assets.localization == localization)
                .map(|assets| assets.platform_mut(platform));

            if let Some(bucket) = bucket {
                bucket.extend(extract_document(document, platform, localization));
            }

            report
        })
        .into()
}

/// All assets of a single document in waterfall order: `Rewarded`, `Banner`, `Interstitial`.
pub fn extract_document(
    document: &WaterfallDocument,
    platform: Platform,
    localization: Localization,
) -> Vec<ExtractedAsset> {
    let waterfall = match document.ad_waterfall() {
        Some(waterfall) => waterfall,
        None => return vec![],
    };

    AdType::WATERFALL_ORDER
        .into_iter()
        .filter_map(|ad_type| waterfall.entries(ad_type))
        .flatten()
        .flat_map(|entry| extract_entry(entry, platform, localization))
        .collect()
}

/// Extracts the assets of a single waterfall entry.
///
/// The first `Rewarded` file of the entry is paired with the first `IconBig` file
/// of the same entry, followed by every `Banner` and `Interstitial` file in list order.
pub fn extract_entry(
    entry: WaterfallEntry<'_>,
    platform: Platform,
    localization: Localization,
) -> Vec<ExtractedAsset> {
    let icon = entry
        .crosspromo_files()
        .find(|file| file.is_ad_type(ICON_BIG));

    let rewarded = entry
        .crosspromo_files()
        .find(|file| file.is_ad_type(AdType::Rewarded.as_str()))
        .map(|rewarded| {
            let mut asset = to_asset(rewarded, platform, localization);
            asset.icon_url = icon.and_then(|icon| icon.url()).map(ToString::to_string);
            asset.icon_size_mb = icon
                .and_then(|icon| icon.file_size())
                .map(SizeMb::from_bytes);

            asset
        });

    let others = entry.crosspromo_files().filter(|file| {
        file.is_ad_type(AdType::Banner.as_str()) || file.is_ad_type(AdType::Interstitial.as_str())
    });

    rewarded
        .into_iter()
        .chain(others.map(|file| to_asset(file, platform, localization)))
        .collect()
}

fn to_asset(
    file: CrosspromoFile<'_>,
    platform: Platform,
    localization: Localization,
) -> ExtractedAsset {
    ExtractedAsset {
        ad_type: file.ad_type().unwrap_or_default().to_string(),
        ad_format: file.ad_format().unwrap_or(UNKNOWN_AD_FORMAT).to_string(),
        size_mb: file
            .file_size()
            .map(SizeMb::from_bytes)
            .unwrap_or_else(SizeMb::zero),
        url: file.url().unwrap_or_default().to_string(),
        icon_url: None,
        icon_size_mb: None,
        platform,
        localization,
    }
}
