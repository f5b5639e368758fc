//! Reward tier catalogue
//!
//! The tiers are a fixed set; selection happens client-side and the chosen
//! tier's name and price are denormalized onto the pledge row.

use serde::Serialize;

use crate::value_objects::TierId;

/// A reward tier in the fixed catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RewardTier {
    pub id: TierId,
    pub name: &'static str,
    /// Price in minor currency units
    pub price: i64,
    pub description: &'static str,
}

/// The campaign's reward tiers
pub const TIER_CATALOGUE: [RewardTier; 3] = [
    RewardTier {
        id: TierId::new(1),
        name: "Early Bird Ticket",
        price: 50_000,
        description: "1x Ticket + Digital Program Book",
    },
    RewardTier {
        id: TierId::new(2),
        name: "VIP Package",
        price: 120_000,
        description: "1x VIP Ticket + OST CD + Backstage Tour",
    },
    RewardTier {
        id: TierId::new(3),
        name: "Angel Investor",
        price: 300_000,
        description: "2x VIP Tickets + Name on Seat + Merch Set",
    },
];

impl RewardTier {
    /// Look up a tier by id
    #[must_use]
    pub fn find(id: TierId) -> Option<&'static RewardTier> {
        TIER_CATALOGUE.iter().find(|tier| tier.id == id)
    }
}
