mod publisher;
mod repositories;

pub use publisher::EventPublisher;
pub use repositories::{CheerRepository, PledgeRepository, PreferenceStore, RepoResult};
