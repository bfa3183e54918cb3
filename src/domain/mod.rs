pub mod archive;
pub mod errors;
pub mod music;
pub mod post;
pub mod query_state;
