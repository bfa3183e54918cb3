// src/infrastructure/repositories/mod.rs
mod fs_music;
mod graphql_post;
mod memory_post;

pub use fs_music::FsMusicLibrary;
pub use graphql_post::GraphqlPostRepository;
pub use memory_post::InMemoryPostRepository;
