//! Localized country names and metadata, read from a `countries` table.
//!
//! [`Country`](database::country::Country) holds the three lookups; language
//! tags are normalized by [`parse_language_code`](utils::lang::parse_language_code).

pub mod config;
pub mod database;
pub mod error;
pub mod global;
pub mod http;
pub mod utils;

mod test_utils;

pub use database::country::{Country, CountryName};
pub use error::{Error, Result};
pub use utils::lang::Language;
