//! Derived URLs for located service centers.

use serde::Serialize;

/// Path under which catalog images are served.
pub const IMAGES_PATH: &str = "/images";

/// Navigation links for a service center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLinks {
    pub google_maps: String,
    pub waze: String,
}

impl MapLinks {
    /// Build search links for a center name and street address.
    pub fn new(name: &str, address: &str) -> Self {
        let destination = format!("{}, {}", name, address);
        let encoded = urlencoding::encode(&destination);
        Self {
            google_maps: format!("https://www.google.com/maps/search/?api=1&query={}", encoded),
            waze: format!("https://waze.com/ul?q={}&navigate=yes", encoded),
        }
    }
}

/// Absolute URL of a catalog image.
pub fn image_url(public_base_url: &str, image_file: &str) -> String {
    format!(
        "{}{}/{}",
        public_base_url.trim_end_matches('/'),
        IMAGES_PATH,
        urlencoding::encode(image_file)
    )
}
