use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::storage::BOOK_FOLDER;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book_images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub book_id: i32,
    pub image_ref: String,
    /// One of "cover", "back", "detail" - see [`ImageKind`]
    pub kind: String,
    pub is_active: bool,
    pub created_at: String,
    pub modified_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::book::Entity",
        from = "Column::BookId",
        to = "super::book::Column::Id"
    )]
    Book,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Role of an image within a book's gallery.
///
/// Stored as text. Replaces the legacy nullable-boolean "is poster"
/// encoding, where `null` ambiguously meant "supplementary".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    /// Primary cover image
    Cover,
    /// Back cover
    Back,
    /// Supplementary detail shot
    Detail,
}

impl ImageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageKind::Cover => "cover",
            ImageKind::Back => "back",
            ImageKind::Detail => "detail",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cover" => Some(ImageKind::Cover),
            "back" => Some(ImageKind::Back),
            "detail" => Some(ImageKind::Detail),
            _ => None,
        }
    }
}

// DTO for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct BookImage {
    pub id: i32,
    pub book_id: i32,
    pub image_ref: String,
    pub image_url: String,
    pub kind: ImageKind,
    pub created_at: String,
}

impl From<Model> for BookImage {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            book_id: model.book_id,
            image_url: format!("/content/{}/{}", BOOK_FOLDER, model.image_ref),
            // Unknown values only appear if the column was edited by hand
            kind: ImageKind::parse(&model.kind).unwrap_or(ImageKind::Detail),
            image_ref: model.image_ref,
            created_at: model.created_at,
        }
    }
}
