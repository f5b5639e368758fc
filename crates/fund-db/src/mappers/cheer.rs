//! Cheer entity <-> model mapper

use fund_core::entities::Cheer;
use fund_core::value_objects::CheerId;
use uuid::Uuid;

use crate::models::CheerModel;

/// Convert CheerModel to Cheer entity
impl From<CheerModel> for Cheer {
    fn from(model: CheerModel) -> Self {
        Cheer {
            id: CheerId::new(model.id),
            author: model.author,
            message: model.message,
            initials: model.initials,
            color_from: model.color_from,
            color_to: model.color_to,
            client_ref: model.client_ref,
            created_at: model.created_at,
        }
    }
}

/// Convert Cheer entity reference to values for database insertion
pub struct CheerInsert<'a> {
    pub author: &'a str,
    pub message: &'a str,
    pub initials: &'a str,
    pub color_from: &'a str,
    pub color_to: &'a str,
    pub client_ref: Option<Uuid>,
}

impl<'a> CheerInsert<'a> {
    pub fn new(cheer: &'a Cheer) -> Self {
        Self {
            author: &cheer.author,
            message: &cheer.message,
            initials: &cheer.initials,
            color_from: &cheer.color_from,
            color_to: &cheer.color_to,
            client_ref: cheer.client_ref,
        }
    }
}
