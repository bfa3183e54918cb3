pub mod archive;
pub mod music;
