//! # fund-core
//!
//! Domain layer containing entities, value objects, repository traits, domain
//! events, and the session projections (running total, cheer feed, checkout).
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod checkout;
pub mod entities;
pub mod error;
pub mod events;
pub mod projection;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use checkout::{Checkout, CheckoutPhase};
pub use entities::{Cheer, Pledge, RewardTier, TIER_CATALOGUE};
pub use error::DomainError;
pub use events::{DomainEvent, InsertRecord};
pub use projection::{fallback_cheers, CheerFeed, FundingSession, FundingSnapshot};
pub use traits::{
    CheerRepository, EventPublisher, PledgeRepository, PreferenceStore, RepoResult,
};
pub use value_objects::{
    initials_of, time_ago, AvatarGradient, CheerId, PaymentId, PaymentMethod, PledgeId, ThemeMode,
    TierId, AVATAR_PALETTE,
};
