//! Campaign entity, budget fields, and the payout rate card

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use super::profile::UnknownStatus;
use crate::value_objects::{Platform, UsdCents};

/// Campaign lifecycle: `live -> ended`, terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignStatus {
    Live,
    Ended,
}

impl CampaignStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Ended => "ended",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "live" => Ok(Self::Live),
            "ended" => Ok(Self::Ended),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// The two competing payout tiers of a campaign.
///
/// A view increase is paid at whichever tier yields more. Integer cent math
/// with i128 intermediates, truncating division; repeated accrual never
/// drifts the way floating point would.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateCard {
    pub rate_per_100k: UsdCents,
    pub rate_per_1m: UsdCents,
}

impl RateCard {
    /// Raw (unclamped) earnings for a view increase
    #[must_use]
    pub fn earnings_for(&self, view_increase: u64) -> UsdCents {
        let increase = i128::from(view_increase);
        let per_100k = increase * i128::from(self.rate_per_100k.into_inner()) / 100_000;
        let per_1m = increase * i128::from(self.rate_per_1m.into_inner()) / 1_000_000;
        UsdCents::new(per_100k.max(per_1m) as i64)
    }
}

/// A sponsored campaign with a fixed budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    pub id: i64,
    /// Unique across all campaigns
    pub name: String,
    pub platform: Platform,
    pub total_budget: UsdCents,
    pub rate_per_100k: UsdCents,
    pub rate_per_1m: UsdCents,
    pub min_views: i64,
    pub min_followers: i64,
    pub max_earn_per_creator: UsdCents,
    pub max_earn_per_post: UsdCents,
    pub status: CampaignStatus,
    pub created_by: String,
    pub ended_at: Option<DateTime<Utc>>,
    /// Unspent allocation; `0 <= remaining_budget <= total_budget`,
    /// monotonically non-increasing while live
    pub remaining_budget: UsdCents,
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    #[inline]
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.status == CampaignStatus::Live
    }

    #[inline]
    #[must_use]
    pub fn rate_card(&self) -> RateCard {
        RateCard {
            rate_per_100k: self.rate_per_100k,
            rate_per_1m: self.rate_per_1m,
        }
    }

    /// Check the budget bounds invariant
    #[inline]
    #[must_use]
    pub fn budget_in_bounds(&self) -> bool {
        self.remaining_budget >= UsdCents::ZERO && self.remaining_budget <= self.total_budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates(per_100k: i64, per_1m: i64) -> RateCard {
        RateCard {
            rate_per_100k: UsdCents::from_dollars(per_100k),
            rate_per_1m: UsdCents::from_dollars(per_1m),
        }
    }

    #[test]
    fn test_higher_tier_wins() {
        // $10 per 100k vs $80 per 1M, 600k views:
        // 6 * $10 = $60 against 0.6 * $80 = $48
        let card = rates(10, 80);
        assert_eq!(card.earnings_for(600_000), UsdCents::from_dollars(60));
    }

    #[test]
    fn test_per_1m_tier_wins_on_generous_rate() {
        // $1 per 100k vs $80 per 1M, 1M views: $10 vs $80
        let card = rates(1, 80);
        assert_eq!(card.earnings_for(1_000_000), UsdCents::from_dollars(80));
    }

    #[test]
    fn test_zero_increase_pays_nothing() {
        assert_eq!(rates(10, 80).earnings_for(0), UsdCents::ZERO);
    }

    #[test]
    fn test_sub_unit_increase_truncates() {
        // 50 views at $10/100k = 0.5 cents, truncated to zero
        assert_eq!(rates(10, 80).earnings_for(50), UsdCents::ZERO);
    }

    #[test]
    fn test_large_counts_do_not_overflow() {
        let card = rates(10_000, 80_000);
        let earned = card.earnings_for(u64::from(u32::MAX) * 1_000);
        assert!(earned.is_positive());
    }

    #[test]
    fn test_status_roundtrip() {
        assert_eq!("live".parse::<CampaignStatus>().unwrap(), CampaignStatus::Live);
        assert_eq!("ended".parse::<CampaignStatus>().unwrap(), CampaignStatus::Ended);
        assert!("paused".parse::<CampaignStatus>().is_err());
    }
}
