use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::book_image::BookImage;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub genre_id: i32,
    pub author_id: i32,
    pub title: String,
    pub description: Option<String>,
    /// Business key, intended unique (not enforced at the schema level)
    pub book_code: String,
    pub cost_price: f64,
    pub sale_price: f64,
    pub discount_percent: Option<f64>,
    pub is_featured: bool,
    pub is_new: bool,
    pub is_best_seller: bool,
    pub is_available: bool,
    pub stock_count: i32,
    pub is_active: bool,
    pub created_at: String,
    pub modified_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::Id"
    )]
    Author,
    #[sea_orm(
        belongs_to = "super::genre::Entity",
        from = "Column::GenreId",
        to = "super::genre::Column::Id"
    )]
    Genre,
    #[sea_orm(has_many = "super::book_image::Entity")]
    Images,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Genre.def()
    }
}

impl Related<super::book_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Caller-supplied mutable fields for create/update.
///
/// Excludes `id`, `is_active` and `created_at` (server-owned) and any
/// image references (written only by the book service).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BookInput {
    pub genre_id: i32,
    pub author_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub book_code: String,
    pub cost_price: f64,
    pub sale_price: f64,
    pub discount_percent: Option<f64>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_best_seller: bool,
    #[serde(default = "default_true")]
    pub is_available: bool,
    pub stock_count: i32,
}

fn default_true() -> bool {
    true
}

// DTO for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub genre_id: i32,
    pub author_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub book_code: String,
    pub cost_price: f64,
    pub sale_price: f64,
    pub discount_percent: Option<f64>,
    pub is_featured: bool,
    pub is_new: bool,
    pub is_best_seller: bool,
    pub is_available: bool,
    pub stock_count: i32,
    pub is_active: bool,
    pub created_at: String,
    pub modified_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<BookImage>>,
}

impl From<Model> for Book {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            genre_id: model.genre_id,
            author_id: model.author_id,
            title: model.title,
            description: model.description,
            book_code: model.book_code,
            cost_price: model.cost_price,
            sale_price: model.sale_price,
            discount_percent: model.discount_percent,
            is_featured: model.is_featured,
            is_new: model.is_new,
            is_best_seller: model.is_best_seller,
            is_available: model.is_available,
            stock_count: model.stock_count,
            is_active: model.is_active,
            created_at: model.created_at,
            modified_at: model.modified_at,
            author_name: None,
            genre_name: None,
            images: None,
        }
    }
}
