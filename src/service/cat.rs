//! Client for TheCatAPI.

use serde::Deserialize;

use crate::error::AppError;

pub const CAT_API_URL: &str = "https://api.thecatapi.com/v1/images/search";

#[derive(Debug, Deserialize)]
struct CatImage {
    url: String,
}

pub struct CatService<'a> {
    http_client: &'a reqwest::Client,
    api_key: &'a str,
}

impl<'a> CatService<'a> {
    pub fn new(http_client: &'a reqwest::Client, api_key: &'a str) -> Self {
        Self {
            http_client,
            api_key,
        }
    }

    /// Fetches the URL of a random cat image.
    ///
    /// # Returns
    /// - `Ok(String)` - Image URL
    /// - `Err(AppError::Api)` - The API answered with an empty list
    /// - `Err(AppError::ReqwestErr)` - Request failed or returned a non-success status
    pub async fn random_image(&self) -> Result<String, AppError> {
        let images = self
            .http_client
            .get(CAT_API_URL)
            .header("x-api-key", self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<CatImage>>()
            .await?;

        images
            .into_iter()
            .next()
            .map(|image| image.url)
            .ok_or_else(|| AppError::Api("TheCatAPI returned no images".to_string()))
    }
}
