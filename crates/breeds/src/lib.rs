//! Client for the external cat-breed reference catalog.
//!
//! Wraps a TheCatAPI-compatible `GET /breeds` endpoint using [`reqwest`]
//! and exposes breed-name validation behind the [`BreedValidator`] trait so
//! the cat service can be tested against a fixed catalog.

use async_trait::async_trait;
use serde::Deserialize;

/// One entry from the catalog's `/breeds` listing. The catalog returns more
/// fields; only the ones the validator needs are decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct Breed {
    pub id: String,
    pub name: String,
}

/// Errors from the breed catalog client.
#[derive(Debug, thiserror::Error)]
pub enum BreedApiError {
    /// The HTTP round trip failed (network, DNS, TLS, or body decoding).
    #[error("breed catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog returned a non-2xx status code.
    #[error("breed catalog error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Confirms whether a breed name exists in the reference catalog.
#[async_trait]
pub trait BreedValidator: Send + Sync {
    async fn validate_breed(&self, breed: &str) -> Result<bool, BreedApiError>;
}

/// reqwest-backed client for a TheCatAPI-compatible catalog.
pub struct BreedCatalogApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl BreedCatalogApi {
    /// Create a new catalog client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `https://api.thecatapi.com/v1`.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Fetch the catalog's breed list.
    ///
    /// The catalog is assumed to return its complete set in one response;
    /// the client does not paginate.
    pub async fn list_breeds(&self) -> Result<Vec<Breed>, BreedApiError> {
        let response = self
            .client
            .get(format!("{}/breeds", self.base_url))
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(BreedApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Vec<Breed>>().await?)
    }
}

#[async_trait]
impl BreedValidator for BreedCatalogApi {
    /// True iff an exact, case-sensitive name match exists in the catalog.
    async fn validate_breed(&self, breed: &str) -> Result<bool, BreedApiError> {
        let breeds = self.list_breeds().await?;
        Ok(contains_breed(&breeds, breed))
    }
}

fn contains_breed(breeds: &[Breed], name: &str) -> bool {
    breeds.iter().any(|b| b.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(names: &[&str]) -> Vec<Breed> {
        names
            .iter()
            .map(|n| Breed {
                id: n.to_lowercase(),
                name: n.to_string(),
            })
            .collect()
    }

    #[test]
    fn exact_match_is_found() {
        let breeds = catalog(&["Persian", "Siamese"]);
        assert!(contains_breed(&breeds, "Persian"));
    }

    #[test]
    fn match_is_case_sensitive() {
        let breeds = catalog(&["Persian"]);
        assert!(!contains_breed(&breeds, "persian"));
        assert!(!contains_breed(&breeds, "PERSIAN"));
    }

    #[test]
    fn unknown_breed_is_not_found() {
        let breeds = catalog(&["Persian"]);
        assert!(!contains_breed(&breeds, "Sphynx"));
    }

    #[test]
    fn empty_catalog_matches_nothing() {
        assert!(!contains_breed(&[], "Persian"));
    }
}
