//! Reference-data services for authors and genres
//!
//! Thin pass-through CRUD over the persistence layer; no asset handling
//! and no lifecycle policy beyond the shared entity columns.

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set};

use crate::domain::{FieldErrors, ServiceError};
use crate::models::{author, genre};

pub async fn list_authors(db: &DatabaseConnection) -> Result<Vec<author::Model>, ServiceError> {
    let authors = author::Entity::find()
        .order_by_asc(author::Column::FullName)
        .all(db)
        .await?;
    Ok(authors)
}

pub async fn get_author(db: &DatabaseConnection, id: i32) -> Result<author::Model, ServiceError> {
    author::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound("author"))
}

pub async fn create_author(
    db: &DatabaseConnection,
    full_name: String,
) -> Result<author::Model, ServiceError> {
    if full_name.trim().is_empty() {
        return Err(FieldErrors::single("full_name", "Name is required").into());
    }

    let model = author::ActiveModel {
        full_name: Set(full_name),
        is_active: Set(true),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        modified_at: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model)
}

pub async fn delete_author(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let author = get_author(db, id).await?;
    author.delete(db).await?;
    Ok(())
}

pub async fn list_genres(db: &DatabaseConnection) -> Result<Vec<genre::Model>, ServiceError> {
    let genres = genre::Entity::find()
        .order_by_asc(genre::Column::Name)
        .all(db)
        .await?;
    Ok(genres)
}

pub async fn get_genre(db: &DatabaseConnection, id: i32) -> Result<genre::Model, ServiceError> {
    genre::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound("genre"))
}

pub async fn create_genre(
    db: &DatabaseConnection,
    name: String,
) -> Result<genre::Model, ServiceError> {
    if name.trim().is_empty() {
        return Err(FieldErrors::single("name", "Name is required").into());
    }

    let model = genre::ActiveModel {
        name: Set(name),
        is_active: Set(true),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        modified_at: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model)
}

pub async fn delete_genre(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let genre = get_genre(db, id).await?;
    genre.delete(db).await?;
    Ok(())
}
