pub mod cache_files;
pub mod convert;
pub mod health;
