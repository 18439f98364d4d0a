//! Intern Program Data Model
//!
//! Records exchanged between the data source and the views. Field names on the
//! wire follow the camelCase shape of the intern-profile and leaderboard
//! endpoints so a real backend can be dropped in behind the same types.

use serde::{Deserialize, Serialize};

/// Profile of the signed-in intern, as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternProfile {
    /// Display name
    #[serde(rename = "internName")]
    pub name: String,
    /// Opaque code attributed to the intern's fundraising link
    #[serde(rename = "referralCode")]
    pub referral_code: String,
    /// Cumulative donations in whole rupees
    #[serde(rename = "totalDonations")]
    pub total_donations: u64,
}

/// One row of the leaderboard.
///
/// Rank is not stored; it is the 1-based position in the list the data source
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: u64,
    pub name: String,
    pub donations: u64,
}

/// A donation threshold that unlocks a named benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardTier {
    pub threshold: u64,
    pub description: &'static str,
}

impl RewardTier {
    /// Whether `total_donations` reaches this tier.
    pub fn is_unlocked(&self, total_donations: u64) -> bool {
        total_donations >= self.threshold
    }
}

/// Reward tiers, lowest threshold first.
pub const REWARD_TIERS: [RewardTier; 4] = [
    RewardTier {
        threshold: 5_000,
        description: "Certificate of Appreciation",
    },
    RewardTier {
        threshold: 10_000,
        description: "Letter of Recommendation (LOR)",
    },
    RewardTier {
        threshold: 25_000,
        description: "LinkedIn Endorsement",
    },
    RewardTier {
        threshold: 50_000,
        description: "Bonus Swag Kit",
    },
];

/// Tiers paired with their unlock status for a donation total.
pub fn reward_status(total_donations: u64) -> Vec<(RewardTier, bool)> {
    REWARD_TIERS
        .iter()
        .map(|tier| (*tier, tier.is_unlocked(total_donations)))
        .collect()
}
