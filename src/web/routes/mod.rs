pub mod api;
pub mod pages;
pub mod static_files;
