pub mod entity;
pub mod repository;

pub use entity::{AUDIO_EXTENSIONS, ArtistName, Song, is_audio_extension};
pub use repository::MusicLibraryRepository;
