//! Redis Pub/Sub module.
//!
//! Distributes insert events between server instances and to live sessions.

mod channels;
mod publisher;
mod subscriber;

pub use channels::{LiveChannel, CHEERS_CHANNEL, PLEDGES_CHANNEL};
pub use publisher::LivePublisher;
pub use subscriber::{
    ReceivedMessage, Subscriber, SubscriberBuilder, SubscriberConfig, SubscriberError,
    SubscriberResult,
};
