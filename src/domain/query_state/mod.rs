pub mod entity;
pub mod params;
pub mod raw;
pub mod resolver;
pub mod value_objects;

pub use entity::{FilterPatch, QueryState};
pub use params::QueryParams;
pub use raw::{RawQuery, RawValue};
pub use resolver::QueryStateResolver;
pub use value_objects::{FilterId, SORT_OPTIONS, SortField, SortOption, SortOrder};
