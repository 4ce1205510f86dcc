use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub pk: i64,
    pub file: String,
    #[serde(default)]
    pub description: String,
}

/// One-time direct-upload target issued by the media service.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadTarget {
    #[serde(rename = "uploadURL")]
    pub upload_url: String,
    #[serde(default)]
    pub id: String,
}

/// The storage provider's record of a pushed image. `variants` are the
/// delivery URLs; the first one is registered with the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedImage {
    pub id: String,
    #[serde(default)]
    pub variants: Vec<String>,
}
