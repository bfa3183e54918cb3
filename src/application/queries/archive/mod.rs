mod browse;
mod filter;
mod service;

pub use browse::BrowseArchiveQuery;
pub use filter::ApplyArchiveFilterQuery;
pub use service::ArchiveQueryService;
