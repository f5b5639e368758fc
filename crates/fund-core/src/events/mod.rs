mod domain_event;

pub use domain_event::{DomainEvent, InsertRecord, CHEERS_COLLECTION, PLEDGES_COLLECTION};
