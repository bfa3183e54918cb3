pub mod connection;
pub mod cursor;
#[cfg(test)]
mod cursor_tests;
pub mod entity;
pub mod query;
pub mod repository;

pub use connection::{PageInfo, PostConnection};
pub use cursor::PostCursor;
pub use entity::{Post, PostId, PostRecord};
pub use query::{MAX_PAGE_SIZE, PageRequest, PostsQuery};
pub use repository::PostConnectionRepository;
