pub mod author;
pub mod book;
pub mod book_image;
pub mod genre;
pub mod slider;

pub use book::Book;
pub use book_image::{BookImage, ImageKind};
pub use slider::Slider;
