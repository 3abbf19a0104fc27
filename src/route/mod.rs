pub mod courses;
pub mod folder;
pub mod videos;
