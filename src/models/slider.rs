use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::storage::SLIDER_FOLDER;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sliders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title1: String,
    pub title2: String,
    pub description: String,
    pub redirect_url: Option<String>,
    pub redirect_url_text: String,
    pub image_ref: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub modified_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Caller-supplied mutable fields for create/update.
///
/// Deliberately excludes `id`, `is_active`, `created_at` and the image
/// reference: identity and lifecycle are server-owned, and the image
/// reference is only ever written by the slider service.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SliderInput {
    pub title1: String,
    pub title2: String,
    pub description: String,
    pub redirect_url: Option<String>,
    pub redirect_url_text: String,
}

// DTO for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct Slider {
    pub id: i32,
    pub title1: String,
    pub title2: String,
    pub description: String,
    pub redirect_url: Option<String>,
    pub redirect_url_text: String,
    pub image_ref: Option<String>,
    /// Serving path under the content mount, derived from `image_ref`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub modified_at: Option<String>,
}

impl From<Model> for Slider {
    fn from(model: Model) -> Self {
        let image_url = model
            .image_ref
            .as_ref()
            .map(|r| format!("/content/{}/{}", SLIDER_FOLDER, r));

        Self {
            id: model.id,
            title1: model.title1,
            title2: model.title2,
            description: model.description,
            redirect_url: model.redirect_url,
            redirect_url_text: model.redirect_url_text,
            image_ref: model.image_ref,
            image_url,
            is_active: model.is_active,
            created_at: model.created_at,
            modified_at: model.modified_at,
        }
    }
}
