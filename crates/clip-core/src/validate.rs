//! Syntactic validators for URLs and payout addresses
//!
//! These run at the API boundary, before anything touches the store.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::DomainError;
use crate::value_objects::Platform;

static USDT_WALLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").unwrap());

/// Check an ERC-20 USDT wallet address.
#[must_use]
pub fn is_valid_usdt_wallet(wallet: &str) -> bool {
    USDT_WALLET.is_match(wallet)
}

/// Check that a profile URL plausibly belongs to the given platform.
pub fn validate_profile_url(platform: Platform, url: &str) -> Result<(), DomainError> {
    let url = url.trim().to_lowercase();
    let ok = match platform {
        Platform::Instagram => url.contains("instagram.com"),
        Platform::TikTok => url.contains("tiktok.com"),
        Platform::YouTube => url.contains("youtube.com") || url.contains("youtu.be"),
    };
    if ok {
        Ok(())
    } else {
        Err(DomainError::InvalidProfileUrl(platform))
    }
}

/// Check that a video URL plausibly belongs to the given platform.
pub fn validate_video_url(platform: Platform, url: &str) -> Result<(), DomainError> {
    let url = url.trim().to_lowercase();
    let ok = match platform {
        Platform::Instagram => {
            url.contains("instagram.com/reel/") || url.contains("instagram.com/p/")
        }
        Platform::TikTok => url.contains("tiktok.com/@") && url.contains("/video/"),
        Platform::YouTube => url.contains("youtube.com/watch?v=") || url.contains("youtu.be/"),
    };
    if ok {
        Ok(())
    } else {
        Err(DomainError::InvalidVideoUrl(platform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_validation() {
        assert!(is_valid_usdt_wallet(
            "0x52908400098527886E0F7030069857D2E4169EE7"
        ));
        assert!(!is_valid_usdt_wallet("0x123"));
        assert!(!is_valid_usdt_wallet(
            "52908400098527886E0F7030069857D2E4169EE7"
        ));
        assert!(!is_valid_usdt_wallet(
            "0xZZ908400098527886E0F7030069857D2E4169EE7"
        ));
    }

    #[test]
    fn test_profile_url_platform_mismatch() {
        assert!(validate_profile_url(Platform::Instagram, "https://instagram.com/a").is_ok());
        assert!(validate_profile_url(Platform::Instagram, "https://tiktok.com/@a").is_err());
        assert!(validate_profile_url(Platform::YouTube, "https://youtu.be/a").is_ok());
    }

    #[test]
    fn test_video_url_shape() {
        assert!(validate_video_url(Platform::Instagram, "https://instagram.com/reel/x").is_ok());
        assert!(validate_video_url(Platform::Instagram, "https://instagram.com/x").is_err());
        assert!(
            validate_video_url(Platform::TikTok, "https://tiktok.com/@a/video/123").is_ok()
        );
        assert!(validate_video_url(Platform::TikTok, "https://tiktok.com/@a").is_err());
        assert!(
            validate_video_url(Platform::YouTube, "https://youtube.com/watch?v=abc").is_ok()
        );
    }
}
