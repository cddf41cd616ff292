//! Wire types: response envelope, pagination, media.

mod media;
mod response;

pub use media::{Media, MediaFormat, MediaFormats};
pub use response::{Document, ListResponse, Meta, Pagination};
