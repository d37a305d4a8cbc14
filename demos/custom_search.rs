use std::io;

use googleapis::{ApiResponse, CustomSearch, GoogleApiClient, NumberOfResults};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("GOOGLE_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GOOGLE_API_KEY environment variable is required",
        )
    })?;
    let engine_id = std::env::var("GOOGLE_CSE_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GOOGLE_CSE_ID environment variable is required",
        )
    })?;
    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "flowers".to_owned());

    let client = GoogleApiClient::new();
    let request = CustomSearch::with_query(query)?
        .api_key(api_key)?
        .search_engine_id(engine_id)?
        .number_of_results(NumberOfResults::API_DEFAULT)?;

    match client.custom_search(&request).await? {
        ApiResponse::Success(result) => {
            if let Some(query) = result.query("request") {
                println!("total results: {}", query.total_results());
            }
            for item in result.items().unwrap_or_default() {
                println!("{}\n  {}", item.title(), item.link());
            }
        }
        ApiResponse::Failure(error) => {
            println!("code: {:?}, message: {:?}", error.code(), error.message());
        }
    }

    Ok(())
}
