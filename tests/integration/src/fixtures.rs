//! In-memory store implementations for integration tests
//!
//! These back the service context so the full HTTP surface runs without
//! PostgreSQL or Redis. Each store carries failure toggles for exercising the
//! degraded paths (fixture feed, local fallback cheers, failed checkouts).

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::broadcast;

use fund_core::entities::{Cheer, Pledge};
use fund_core::events::InsertRecord;
use fund_core::projection::FundingSnapshot;
use fund_core::traits::{
    CheerRepository, EventPublisher, PledgeRepository, PreferenceStore, RepoResult,
};
use fund_core::value_objects::{CheerId, PledgeId};
use fund_core::DomainError;

fn store_down() -> DomainError {
    DomainError::DatabaseError("connection refused".to_string())
}

/// In-memory pledge store
#[derive(Default)]
pub struct MemoryPledgeStore {
    rows: Mutex<Vec<Pledge>>,
    next_id: AtomicI64,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryPledgeStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    /// Seed a pledge directly, bypassing checkout
    pub fn seed(&self, amount: i64, tier_name: &str) -> Pledge {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let pledge = Pledge {
            id: PledgeId::new(id),
            amount,
            tier_name: tier_name.to_string(),
            mobile: "01012345678".to_string(),
            payment_id: fund_core::value_objects::PaymentId::new(format!("card-{id}")),
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(pledge.clone());
        pledge
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl PledgeRepository for MemoryPledgeStore {
    async fn sum_amounts(&self) -> RepoResult<FundingSnapshot> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(store_down());
        }
        let rows = self.rows.lock().unwrap();
        let total = rows.iter().map(Pledge::counted_amount).sum();
        let cursor = rows.iter().map(|p| p.id).max();
        Ok(FundingSnapshot { total, cursor })
    }

    async fn insert(&self, pledge: &Pledge) -> RepoResult<Pledge> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(store_down());
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut persisted = pledge.clone();
        persisted.id = PledgeId::new(id);
        persisted.created_at = Utc::now();
        self.rows.lock().unwrap().push(persisted.clone());
        Ok(persisted)
    }

    async fn list(&self) -> RepoResult<Vec<Pledge>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(store_down());
        }
        Ok(self.rows.lock().unwrap().clone())
    }
}

/// In-memory cheer store
#[derive(Default)]
pub struct MemoryCheerStore {
    rows: Mutex<Vec<Cheer>>,
    next_id: AtomicI64,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryCheerStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl CheerRepository for MemoryCheerStore {
    async fn latest(&self, limit: i64) -> RepoResult<Vec<Cheer>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(store_down());
        }
        let rows = self.rows.lock().unwrap();
        let take = usize::try_from(limit.max(0)).unwrap_or(0);
        Ok(rows.iter().rev().take(take).cloned().collect())
    }

    async fn insert(&self, cheer: &Cheer) -> RepoResult<Cheer> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(store_down());
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut persisted = cheer.clone();
        persisted.id = CheerId::new(id);
        persisted.created_at = Utc::now();
        self.rows.lock().unwrap().push(persisted.clone());
        Ok(persisted)
    }
}

/// In-memory preference store
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Publisher that feeds the in-process broadcast directly
///
/// Stands in for the Redis round trip: a confirmed insert reaches live
/// sessions through the same channel the subscriber forwarder uses.
pub struct BroadcastPublisher {
    events: broadcast::Sender<InsertRecord>,
}

impl BroadcastPublisher {
    pub fn new(events: broadcast::Sender<InsertRecord>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl EventPublisher for BroadcastPublisher {
    async fn pledge_recorded(&self, pledge: &Pledge) {
        let _ = self.events.send(InsertRecord::Pledge(pledge.clone()));
    }

    async fn cheer_posted(&self, cheer: &Cheer) {
        let _ = self.events.send(InsertRecord::Cheer(cheer.clone()));
    }
}
