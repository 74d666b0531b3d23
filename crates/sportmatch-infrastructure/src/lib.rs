pub mod dto;
pub mod file_image_repository;
pub mod paths;
pub mod storage;
pub mod toml_event_repository;

pub use crate::file_image_repository::{encode_data_url, FileImageRepository};
pub use crate::toml_event_repository::TomlEventRepository;
