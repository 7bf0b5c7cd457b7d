//! Slider service - lifecycle of promotional sliders
//!
//! Orchestrates validation, asset storage and persistence for the
//! create/update/soft-delete/hard-delete flow. Expected failures
//! (validation, deactivate-first policy) come back as structured
//! errors; only lookups and infrastructure raise faults.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{FieldErrors, LifecycleState, ServiceError, UploadedFile};
use crate::models::slider::{ActiveModel, Column, Entity as SliderEntity, SliderInput};
use crate::models::Slider;
use crate::storage::{validate_image, AssetStore, SLIDER_FOLDER};

const KIND: &str = "slider";

/// Filter parameters for listing sliders
#[derive(Debug, Default, Clone)]
pub struct SliderFilter {
    /// When set, only sliders with `is_active == true` are returned
    pub active_only: bool,
}

fn validate_fields(input: &SliderInput) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if input.title1.trim().is_empty() {
        errors.push("title1", "Title 1 is required");
    } else if input.title1.chars().count() > 20 {
        errors.push("title1", "Title 1 must be at most 20 characters");
    }

    if input.title2.trim().is_empty() {
        errors.push("title2", "Title 2 is required");
    } else if input.title2.chars().count() > 20 {
        errors.push("title2", "Title 2 must be at most 20 characters");
    }

    if input.description.trim().is_empty() {
        errors.push("description", "Description is required");
    } else if input.description.chars().count() > 150 {
        errors.push("description", "Description must be at most 150 characters");
    }

    if input.redirect_url_text.trim().is_empty() {
        errors.push("redirect_url_text", "Redirect link text is required");
    } else if input.redirect_url_text.chars().count() > 40 {
        errors.push(
            "redirect_url_text",
            "Redirect link text must be at most 40 characters",
        );
    }

    errors
}

/// Create a slider. The image is mandatory here, unlike `update`.
///
/// Nothing is written (no row, no file) unless every field and the
/// image pass validation.
pub async fn create(
    db: &DatabaseConnection,
    assets: &AssetStore,
    input: SliderInput,
    file: Option<UploadedFile>,
) -> Result<Slider, ServiceError> {
    let mut errors = validate_fields(&input);
    if let Err(e) = validate_image("image_file", file.as_ref()) {
        errors.push_error(e);
    }
    errors.into_result()?;

    // validate_image rejects None, so the file is present past this point
    let file = file.ok_or_else(|| {
        ServiceError::Invalid(FieldErrors::single("image_file", "Please provide a file"))
    })?;

    let image_ref = assets.save(SLIDER_FOLDER, &file.file_name, &file.bytes)?;
    let now = chrono::Utc::now().to_rfc3339();

    let model = ActiveModel {
        title1: Set(input.title1),
        title2: Set(input.title2),
        description: Set(input.description),
        redirect_url: Set(input.redirect_url),
        redirect_url_text: Set(input.redirect_url_text),
        image_ref: Set(Some(image_ref)),
        is_active: Set(true),
        created_at: Set(now.clone()),
        modified_at: Set(Some(now)),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!("Created slider {} ({})", model.id, model.title1);
    Ok(Slider::from(model))
}

/// Update a slider's mutable fields, optionally replacing its image.
///
/// `id`, `is_active` and `created_at` are never taken from the caller.
/// A replacement image is validated before anything is touched; the old
/// asset is then deleted best-effort and the new one stored.
pub async fn update(
    db: &DatabaseConnection,
    assets: &AssetStore,
    id: i32,
    input: SliderInput,
    file: Option<UploadedFile>,
) -> Result<Slider, ServiceError> {
    let existing = SliderEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound(KIND))?;

    let mut errors = validate_fields(&input);
    if let Some(f) = &file {
        if let Err(e) = validate_image("image_file", Some(f)) {
            errors.push_error(e);
        }
    }
    errors.into_result()?;

    let old_ref = existing.image_ref.clone();
    let mut slider: ActiveModel = existing.into();

    if let Some(f) = file {
        if let Some(old) = &old_ref {
            assets.delete(SLIDER_FOLDER, old);
        }
        let new_ref = assets.save(SLIDER_FOLDER, &f.file_name, &f.bytes)?;
        slider.image_ref = Set(Some(new_ref));
    }

    slider.title1 = Set(input.title1);
    slider.title2 = Set(input.title2);
    slider.description = Set(input.description);
    slider.redirect_url = Set(input.redirect_url);
    slider.redirect_url_text = Set(input.redirect_url_text);
    slider.modified_at = Set(Some(chrono::Utc::now().to_rfc3339()));

    let model = slider.update(db).await?;
    tracing::info!("Updated slider {}", model.id);
    Ok(Slider::from(model))
}

/// Toggle the soft-delete flag. Reversible: applying it twice restores
/// the original state.
pub async fn soft_delete(db: &DatabaseConnection, id: i32) -> Result<Slider, ServiceError> {
    let existing = SliderEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound(KIND))?;

    let next = LifecycleState::from_flag(existing.is_active).toggled();

    let mut slider: ActiveModel = existing.into();
    slider.is_active = Set(next.as_flag());
    slider.modified_at = Set(Some(chrono::Utc::now().to_rfc3339()));

    let model = slider.update(db).await?;
    tracing::info!("Slider {} is now {:?}", model.id, next);
    Ok(Slider::from(model))
}

/// Hard delete. Requires a prior soft delete; an active slider is
/// rejected with a policy error and left untouched. The backing asset
/// is removed best-effort before the row goes.
pub async fn delete(
    db: &DatabaseConnection,
    assets: &AssetStore,
    id: i32,
) -> Result<(), ServiceError> {
    let existing = SliderEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound(KIND))?;

    LifecycleState::from_flag(existing.is_active).ensure_purgeable(KIND)?;

    if let Some(asset_ref) = &existing.image_ref {
        assets.delete(SLIDER_FOLDER, asset_ref);
    }
    existing.delete(db).await?;

    tracing::info!("Hard-deleted slider {}", id);
    Ok(())
}

/// Get a single slider by ID
pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Slider, ServiceError> {
    let model = SliderEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound(KIND))?;
    Ok(Slider::from(model))
}

/// List sliders, newest first
pub async fn list(
    db: &DatabaseConnection,
    filter: SliderFilter,
) -> Result<Vec<Slider>, ServiceError> {
    let mut query = SliderEntity::find();

    if filter.active_only {
        query = query.filter(Column::IsActive.eq(true));
    }

    let sliders = query.order_by_desc(Column::CreatedAt).all(db).await?;
    Ok(sliders.into_iter().map(Slider::from).collect())
}
