pub mod apod;
pub mod check;
pub mod compare;
pub mod config;
pub mod gallery;
pub mod version;
