//! Response types of the `volumes` search endpoint.
//!
//! Every field is optional: a missing field means "no data", never a parse failure.

use bookverse_core::normalize_cover_url;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Volume {
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(rename = "imageLinks", default)]
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "smallThumbnail", default)]
    pub small_thumbnail: Option<String>,
}

impl VolumeInfo {
    /// Cover image URL, preferring `thumbnail` over `smallThumbnail`, served over https.
    #[must_use]
    pub fn cover_url(&self) -> Option<String> {
        let links = self.image_links.as_ref()?;
        non_blank(links.thumbnail.as_deref())
            .or_else(|| non_blank(links.small_thumbnail.as_deref()))
            .map(normalize_cover_url)
    }
}

fn non_blank(url: Option<&str>) -> Option<&str> {
    url.filter(|u| !u.trim().is_empty())
}
