mod service;

pub use service::{ARTIST_SUMMARY_LIMIT, MusicQueryService};
