use std::io;

use googleapis::{ApiResponse, GoogleApiClient, Translate};
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
    let target = std::env::var("GOOGLE_TRANSLATE_TARGET").unwrap_or_else(|_| "fr".to_owned());

    let texts: Vec<String> = std::env::args().skip(1).collect();
    let texts = if texts.is_empty() {
        vec!["Hello world".to_owned()]
    } else {
        texts
    };

    let client = GoogleApiClient::new();
    let request = Translate::new()
        .api_key(api_key)?
        .source_texts(texts)?
        .target_language(&target)?;

    match client.translate(&request).await? {
        ApiResponse::Success(result) => {
            for translation in result.translations() {
                println!(
                    "{} (detected: {:?})",
                    translation.translated_text(),
                    translation.detected_source_language()
                );
            }
        }
        ApiResponse::Failure(error) => {
            println!("code: {:?}, message: {:?}", error.code(), error.message());
        }
    }

    Ok(())
}
