//! Book service - catalog books and their image galleries
//!
//! Multi-image create is all-or-nothing: every file in the batch is
//! validated before any asset is written, and the book plus its image
//! rows are inserted in one transaction.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::domain::{FieldErrors, LifecycleState, ServiceError, UploadedFile};
use crate::models::book::{ActiveModel as BookActiveModel, BookInput, Column, Entity as BookEntity};
use crate::models::book_image::{
    ActiveModel as ImageActiveModel, Entity as ImageEntity, ImageKind,
};
use crate::models::{Book, BookImage};
use crate::storage::{validate_image, AssetStore, BOOK_FOLDER};

const KIND: &str = "book";

/// Filter parameters for listing books
#[derive(Debug, Default, Clone)]
pub struct BookFilter {
    pub genre_id: Option<i32>,
    pub author_id: Option<i32>,
    pub title: Option<String>,
    pub active_only: bool,
}

/// Relations a book query may eager-load.
///
/// A closed set rather than free-form relation names, so a typo is a
/// compile error instead of a silently ignored include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookInclude {
    Images,
    Author,
    Genre,
}

fn validate_fields(input: &BookInput) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if input.title.trim().is_empty() {
        errors.push("title", "Title is required");
    } else if input.title.chars().count() > 50 {
        errors.push("title", "Title must be at most 50 characters");
    }

    if let Some(description) = &input.description {
        if description.chars().count() > 350 {
            errors.push("description", "Description must be at most 350 characters");
        }
    }

    if input.book_code.trim().is_empty() {
        errors.push("book_code", "Book code is required");
    } else if input.book_code.chars().count() > 50 {
        errors.push("book_code", "Book code must be at most 50 characters");
    }

    if input.cost_price < 0.0 {
        errors.push("cost_price", "Cost price must not be negative");
    }
    if input.sale_price < 0.0 {
        errors.push("sale_price", "Sale price must not be negative");
    }
    if let Some(discount) = input.discount_percent {
        if !(0.0..=100.0).contains(&discount) {
            errors.push("discount_percent", "Discount must be between 0 and 100");
        }
    }
    if input.stock_count < 0 {
        errors.push("stock_count", "Stock count must not be negative");
    }

    errors
}

async fn insert_book_with_images(
    txn: &DatabaseTransaction,
    input: BookInput,
    refs: &[String],
    now: &str,
) -> Result<Book, ServiceError> {
    let book = BookActiveModel {
        genre_id: Set(input.genre_id),
        author_id: Set(input.author_id),
        title: Set(input.title),
        description: Set(input.description),
        book_code: Set(input.book_code),
        cost_price: Set(input.cost_price),
        sale_price: Set(input.sale_price),
        discount_percent: Set(input.discount_percent),
        is_featured: Set(input.is_featured),
        is_new: Set(input.is_new),
        is_best_seller: Set(input.is_best_seller),
        is_available: Set(input.is_available),
        stock_count: Set(input.stock_count),
        is_active: Set(true),
        created_at: Set(now.to_string()),
        modified_at: Set(Some(now.to_string())),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let mut images = Vec::with_capacity(refs.len());
    for (index, asset_ref) in refs.iter().enumerate() {
        // First file of the batch is the cover, the rest are detail shots
        let kind = if index == 0 {
            ImageKind::Cover
        } else {
            ImageKind::Detail
        };

        let image = ImageActiveModel {
            book_id: Set(book.id),
            image_ref: Set(asset_ref.clone()),
            kind: Set(kind.as_str().to_string()),
            is_active: Set(true),
            created_at: Set(now.to_string()),
            modified_at: Set(None),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        images.push(BookImage::from(image));
    }

    let mut dto = Book::from(book);
    dto.images = Some(images);
    Ok(dto)
}

/// Create a book with zero or more gallery images.
///
/// The whole file batch is validated up front; the first failing file
/// aborts the operation before any asset or row is written. If the
/// database insert fails after assets were stored, the stored files are
/// cleaned up best-effort.
pub async fn create(
    db: &DatabaseConnection,
    assets: &AssetStore,
    input: BookInput,
    files: Vec<UploadedFile>,
) -> Result<Book, ServiceError> {
    let mut errors = validate_fields(&input);

    for (index, file) in files.iter().enumerate() {
        if let Err(e) = validate_image("image_files", Some(file)) {
            errors.push(e.field, format!("{} (file {})", e.message, index + 1));
            break;
        }
    }
    errors.into_result()?;

    let mut refs = Vec::with_capacity(files.len());
    for file in &files {
        match assets.save(BOOK_FOLDER, &file.file_name, &file.bytes) {
            Ok(asset_ref) => refs.push(asset_ref),
            Err(e) => {
                for stored in &refs {
                    assets.delete(BOOK_FOLDER, stored);
                }
                return Err(e);
            }
        }
    }

    let now = chrono::Utc::now().to_rfc3339();
    let txn = db.begin().await?;
    match insert_book_with_images(&txn, input, &refs, &now).await {
        Ok(book) => {
            txn.commit().await?;
            tracing::info!("Created book {} with {} image(s)", book.id, refs.len());
            Ok(book)
        }
        Err(e) => {
            let _ = txn.rollback().await;
            for stored in &refs {
                assets.delete(BOOK_FOLDER, stored);
            }
            Err(e)
        }
    }
}

async fn attach_relations(
    db: &DatabaseConnection,
    model: &crate::models::book::Model,
    dto: &mut Book,
    includes: &[BookInclude],
) -> Result<(), ServiceError> {
    if includes.contains(&BookInclude::Images) {
        let images = model
            .find_related(ImageEntity)
            .all(db)
            .await?
            .into_iter()
            .map(BookImage::from)
            .collect();
        dto.images = Some(images);
    }

    if includes.contains(&BookInclude::Author) {
        if let Some(author) = model.find_related(crate::models::author::Entity).one(db).await? {
            dto.author_name = Some(author.full_name);
        }
    }

    if includes.contains(&BookInclude::Genre) {
        if let Some(genre) = model.find_related(crate::models::genre::Entity).one(db).await? {
            dto.genre_name = Some(genre.name);
        }
    }

    Ok(())
}

/// Get a single book with all relations loaded
pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Book, ServiceError> {
    let model = BookEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound(KIND))?;

    let mut dto = Book::from(model.clone());
    attach_relations(
        db,
        &model,
        &mut dto,
        &[BookInclude::Images, BookInclude::Author, BookInclude::Genre],
    )
    .await?;
    Ok(dto)
}

/// List books with optional filters and eager-loaded relations
pub async fn list(
    db: &DatabaseConnection,
    filter: BookFilter,
    includes: &[BookInclude],
) -> Result<Vec<Book>, ServiceError> {
    tracing::info!(
        "List books - genre={:?} author={:?} title={:?} active_only={}",
        filter.genre_id,
        filter.author_id,
        filter.title,
        filter.active_only
    );

    let mut query = BookEntity::find();

    if let Some(genre_id) = filter.genre_id {
        query = query.filter(Column::GenreId.eq(genre_id));
    }
    if let Some(author_id) = filter.author_id {
        query = query.filter(Column::AuthorId.eq(author_id));
    }
    if let Some(title) = &filter.title {
        if !title.is_empty() {
            query = query.filter(Column::Title.contains(title));
        }
    }
    if filter.active_only {
        query = query.filter(Column::IsActive.eq(true));
    }

    let books = query.order_by_asc(Column::Title).all(db).await?;

    let mut dtos = Vec::with_capacity(books.len());
    for model in books {
        let mut dto = Book::from(model.clone());
        attach_relations(db, &model, &mut dto, includes).await?;
        dtos.push(dto);
    }
    Ok(dtos)
}

/// Update a book's mutable fields. Does not touch images; `id`,
/// `is_active` and `created_at` are protected from caller overwrite.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    input: BookInput,
) -> Result<Book, ServiceError> {
    let existing = BookEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound(KIND))?;

    validate_fields(&input).into_result()?;

    let mut book: BookActiveModel = existing.into();
    book.genre_id = Set(input.genre_id);
    book.author_id = Set(input.author_id);
    book.title = Set(input.title);
    book.description = Set(input.description);
    book.book_code = Set(input.book_code);
    book.cost_price = Set(input.cost_price);
    book.sale_price = Set(input.sale_price);
    book.discount_percent = Set(input.discount_percent);
    book.is_featured = Set(input.is_featured);
    book.is_new = Set(input.is_new);
    book.is_best_seller = Set(input.is_best_seller);
    book.is_available = Set(input.is_available);
    book.stock_count = Set(input.stock_count);
    book.modified_at = Set(Some(chrono::Utc::now().to_rfc3339()));

    let model = book.update(db).await?;
    tracing::info!("Updated book {}", model.id);
    Ok(Book::from(model))
}

/// Toggle the soft-delete flag
pub async fn soft_delete(db: &DatabaseConnection, id: i32) -> Result<Book, ServiceError> {
    let existing = BookEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound(KIND))?;

    let next = LifecycleState::from_flag(existing.is_active).toggled();

    let mut book: BookActiveModel = existing.into();
    book.is_active = Set(next.as_flag());
    book.modified_at = Set(Some(chrono::Utc::now().to_rfc3339()));

    let model = book.update(db).await?;
    tracing::info!("Book {} is now {:?}", model.id, next);
    Ok(Book::from(model))
}

/// Hard delete a book, its image rows and their backing assets.
/// Requires a prior soft delete, like the slider flow.
pub async fn delete(
    db: &DatabaseConnection,
    assets: &AssetStore,
    id: i32,
) -> Result<(), ServiceError> {
    let existing = BookEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound(KIND))?;

    LifecycleState::from_flag(existing.is_active).ensure_purgeable(KIND)?;

    let images = existing.find_related(ImageEntity).all(db).await?;

    let txn = db.begin().await?;
    ImageEntity::delete_many()
        .filter(crate::models::book_image::Column::BookId.eq(id))
        .exec(&txn)
        .await?;
    BookEntity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    // Row removal committed; asset cleanup is best-effort
    for image in &images {
        assets.delete(BOOK_FOLDER, &image.image_ref);
    }

    tracing::info!("Hard-deleted book {} and {} image(s)", id, images.len());
    Ok(())
}
