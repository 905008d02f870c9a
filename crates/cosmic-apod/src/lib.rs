//! NASA Astronomy Picture of the Day client

mod client;
mod types;

pub use client::{classify_status, ApodClient};
pub use types::{parse_date, validate_date, Apod, RawApod};
