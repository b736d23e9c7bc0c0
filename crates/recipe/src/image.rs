/// Prefix of the placeholder-service URLs used for recipes that have no real
/// image yet.
pub const PLACEHOLDER_IMAGE_PREFIX: &str = "https://placehold.co";

pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400.png";

/// True when `url` does not point at a real image and one may be generated.
pub fn is_placeholder_image(url: &str) -> bool {
    url.is_empty() || url.starts_with(PLACEHOLDER_IMAGE_PREFIX)
}
