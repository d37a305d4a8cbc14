//! Typed Rust client for the Google Custom Search and Google Translate REST APIs.
//!
//! The crate has three layers: a domain layer of validated request parameters
//! and parsed result types, a transport layer that turns raw JSON bodies into
//! those results, and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use googleapis::{ApiResponse, CustomSearch, GoogleApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), googleapis::GoogleApiError> {
//!     let client = GoogleApiClient::new();
//!     let request = CustomSearch::with_query("flowers")?
//!         .api_key("...")?
//!         .search_engine_id("...")?;
//!     match client.custom_search(&request).await? {
//!         ApiResponse::Success(result) => {
//!             for item in result.items().unwrap_or_default() {
//!                 println!("{} <{}>", item.title(), item.link());
//!             }
//!         }
//!         ApiResponse::Failure(error) => eprintln!("API error: {:?}", error.message()),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Raw bodies obtained elsewhere can be parsed directly:
//!
//! ```rust
//! let response =
//!     googleapis::transport::parse_translate_response(r#"{"data":{"translations":[]}}"#)?;
//! assert!(response.is_success());
//! # Ok::<(), googleapis::transport::ParseError>(())
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod transport;

pub use client::{GoogleApiClient, GoogleApiClientBuilder, GoogleApiError, MemoryCache, RequestCache};
pub use domain::{
    ApiError, ApiKey, ApiResponse, BodyLine, Context, CustomSearch, Facet, Image, Item,
    LanguageCode, LanguageRestriction, NumberOfResults, PageMap, Promotion, Query, SafetyLevel,
    SearchEngineId, SearchQuery, SearchResult, SourceText, SpecUrl, StartIndex, TextFormat,
    Translate, TranslateResult, Translation, ValidationError,
};
