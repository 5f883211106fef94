//! URL normalization - canonical dedup keys for profiles and videos
//!
//! A normalized id is the stable key used for global uniqueness and ban-list
//! matching, independent of how the URL was typed. Input is lower-cased and
//! trimmed before matching; beyond what the patterns capture, no query-string
//! or trailing-slash canonicalization is guaranteed.

use regex::Regex;
use std::sync::LazyLock;

use crate::value_objects::Platform;

static IG_PROFILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"instagram\.com/([^/?]+)").unwrap());
static TT_PROFILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"tiktok\.com/@([^/?]+)").unwrap());
static YT_PROFILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:youtube\.com/(?:c/|channel/|@)|youtu\.be/)([^/?]+)").unwrap());

static IG_VIDEO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"instagram\.com/(?:reel|p)/([^/?]+)").unwrap());
static TT_VIDEO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"tiktok\.com/@[^/]+/video/(\d+)").unwrap());
static YT_VIDEO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([^&?]+)").unwrap());

/// Derive the canonical profile key for a platform URL.
///
/// Returns `None` when the URL does not match the platform's expected shape;
/// callers treat that as a validation failure.
#[must_use]
pub fn normalize_profile_id(platform: Platform, url: &str) -> Option<String> {
    let url = url.trim().to_lowercase();
    let (regex, prefix) = match platform {
        Platform::Instagram => (&*IG_PROFILE, "ig"),
        Platform::TikTok => (&*TT_PROFILE, "tt"),
        Platform::YouTube => (&*YT_PROFILE, "yt"),
    };
    regex
        .captures(&url)
        .map(|caps| format!("{prefix}:{}", &caps[1]))
}

/// Derive the canonical video key for a platform URL.
#[must_use]
pub fn normalize_video_id(platform: Platform, url: &str) -> Option<String> {
    let url = url.trim().to_lowercase();
    let (regex, prefix) = match platform {
        Platform::Instagram => (&*IG_VIDEO, "ig_video"),
        Platform::TikTok => (&*TT_VIDEO, "tt_video"),
        Platform::YouTube => (&*YT_VIDEO, "yt_video"),
    };
    regex
        .captures(&url)
        .map(|caps| format!("{prefix}:{}", &caps[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instagram_profile() {
        assert_eq!(
            normalize_profile_id(Platform::Instagram, "https://instagram.com/somecreator"),
            Some("ig:somecreator".to_string())
        );
        assert_eq!(
            normalize_profile_id(Platform::Instagram, "https://www.instagram.com/somecreator/"),
            Some("ig:somecreator".to_string())
        );
    }

    #[test]
    fn test_tiktok_profile_requires_at_handle() {
        assert_eq!(
            normalize_profile_id(Platform::TikTok, "https://tiktok.com/@creator123"),
            Some("tt:creator123".to_string())
        );
        assert_eq!(
            normalize_profile_id(Platform::TikTok, "https://tiktok.com/creator123"),
            None
        );
    }

    #[test]
    fn test_youtube_profile_variants() {
        for url in [
            "https://youtube.com/@creator",
            "https://youtube.com/c/creator",
            "https://youtube.com/channel/creator",
        ] {
            assert_eq!(
                normalize_profile_id(Platform::YouTube, url),
                Some("yt:creator".to_string()),
                "url: {url}"
            );
        }
    }

    #[test]
    fn test_normalization_is_case_insensitive() {
        let lower = normalize_profile_id(Platform::Instagram, "https://instagram.com/creator");
        let upper = normalize_profile_id(Platform::Instagram, "HTTPS://INSTAGRAM.COM/CREATOR");
        assert_eq!(lower, upper);
        assert!(lower.is_some());
    }

    #[test]
    fn test_normalization_trims_whitespace() {
        assert_eq!(
            normalize_profile_id(Platform::TikTok, "  https://tiktok.com/@creator  "),
            Some("tt:creator".to_string())
        );
    }

    #[test]
    fn test_instagram_video() {
        assert_eq!(
            normalize_video_id(Platform::Instagram, "https://instagram.com/reel/AbC123"),
            Some("ig_video:abc123".to_string())
        );
        assert_eq!(
            normalize_video_id(Platform::Instagram, "https://instagram.com/p/AbC123"),
            Some("ig_video:abc123".to_string())
        );
    }

    #[test]
    fn test_tiktok_video_requires_numeric_id() {
        assert_eq!(
            normalize_video_id(Platform::TikTok, "https://tiktok.com/@creator/video/7123456789"),
            Some("tt_video:7123456789".to_string())
        );
        assert_eq!(
            normalize_video_id(Platform::TikTok, "https://tiktok.com/@creator/video/latest"),
            None
        );
    }

    #[test]
    fn test_youtube_video_variants() {
        assert_eq!(
            normalize_video_id(Platform::YouTube, "https://youtube.com/watch?v=xyz789"),
            Some("yt_video:xyz789".to_string())
        );
        assert_eq!(
            normalize_video_id(Platform::YouTube, "https://youtu.be/xyz789"),
            Some("yt_video:xyz789".to_string())
        );
    }

    #[test]
    fn test_wrong_platform_shape_returns_none() {
        assert_eq!(
            normalize_profile_id(Platform::Instagram, "https://tiktok.com/@creator"),
            None
        );
        assert_eq!(
            normalize_video_id(Platform::YouTube, "https://instagram.com/reel/abc"),
            None
        );
    }

    #[test]
    fn test_determinism() {
        let url = "https://youtube.com/watch?v=dQw4w9WgXcQ";
        assert_eq!(
            normalize_video_id(Platform::YouTube, url),
            normalize_video_id(Platform::YouTube, url)
        );
    }
}
