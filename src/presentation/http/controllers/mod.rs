// src/presentation/http/controllers/mod.rs
pub mod archives;
pub mod music;
