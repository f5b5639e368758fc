//! Pledge entity <-> model mapper

use fund_core::entities::Pledge;
use fund_core::value_objects::{PaymentId, PledgeId};

use crate::models::PledgeModel;

/// Convert PledgeModel to Pledge entity
impl From<PledgeModel> for Pledge {
    fn from(model: PledgeModel) -> Self {
        let amount = model.amount_or_zero();
        Pledge {
            id: PledgeId::new(model.id),
            amount,
            tier_name: model.tier_name,
            mobile: model.mobile,
            payment_id: PaymentId::new(model.payment_id),
            created_at: model.created_at,
        }
    }
}

/// Convert Pledge entity reference to values for database insertion
pub struct PledgeInsert<'a> {
    pub amount: i64,
    pub tier_name: &'a str,
    pub mobile: &'a str,
    pub payment_id: &'a str,
}

impl<'a> PledgeInsert<'a> {
    pub fn new(pledge: &'a Pledge) -> Self {
        Self {
            amount: pledge.amount,
            tier_name: &pledge.tier_name,
            mobile: &pledge.mobile,
            payment_id: pledge.payment_id.as_str(),
        }
    }
}
