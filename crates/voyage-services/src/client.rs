//! HTTP client for the travel backend (`/api`).
//!
//! One request per call: no retry, batching or caching. Transport failures and
//! non-2xx statuses come back as `NetworkError`; callers decide whether to log
//! or surface them.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;
use voyage_core::{AppError, ConfigError, NetworkError, ReqwestErrorExt};

use crate::expense::{Expense, ExpenseRequest, ExpenseStats, RecordId};
use crate::packing::{PackingCategory, PackingItem, PackingRequest};

/// Travel REST API client
#[derive(Debug, Clone)]
pub struct TravelClient {
    base_url: Url,
    client: Arc<Client>,
}

impl TravelClient {
    /// Create a client for `api_url` (e.g. `http://localhost:5000/api`).
    ///
    /// `timeout` of `None` lets requests wait indefinitely.
    pub fn new(api_url: &str, timeout: Option<Duration>) -> Result<Self, AppError> {
        let mut normalized = api_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized)
            .map_err(|e| ConfigError::Invalid(format!("API URL {api_url:?}: {e}")))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(ReqwestErrorExt::into_network_error)?;

        Ok(Self {
            base_url,
            client: Arc::new(client),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, NetworkError> {
        self.base_url
            .join(path)
            .map_err(|e| NetworkError::ConnectionFailed(format!("Invalid endpoint {path}: {e}")))
    }

    /// Check response status and extract error
    async fn check_response(response: Response) -> Result<Response, NetworkError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NetworkError::ServerError {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, NetworkError> {
        let response = request
            .send()
            .await
            .map_err(ReqwestErrorExt::into_network_error)?;
        Self::check_response(response).await
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, NetworkError> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| NetworkError::InvalidResponse(e.to_string()))
    }

    // ============= Expenses =============

    pub async fn list_expenses(&self) -> Result<Vec<Expense>, NetworkError> {
        tracing::debug!("Fetching expenses");

        let url = self.endpoint("expenses")?;
        let expenses: Vec<Expense> = self.send_json(self.client.get(url)).await?;

        tracing::info!("Fetched {} expenses", expenses.len());
        Ok(expenses)
    }

    pub async fn create_expense(&self, request: &ExpenseRequest) -> Result<Expense, NetworkError> {
        tracing::debug!("Creating expense for {}", request.country);

        let url = self.endpoint("expenses")?;
        self.send_json(self.client.post(url).json(request)).await
    }

    pub async fn update_expense(
        &self,
        id: RecordId,
        request: &ExpenseRequest,
    ) -> Result<Expense, NetworkError> {
        tracing::debug!("Updating expense {}", id);

        let url = self.endpoint(&format!("expenses/{id}"))?;
        self.send_json(self.client.put(url).json(request)).await
    }

    pub async fn delete_expense(&self, id: RecordId) -> Result<(), NetworkError> {
        tracing::debug!("Deleting expense {}", id);

        let url = self.endpoint(&format!("expenses/{id}"))?;
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    pub async fn expense_stats(&self) -> Result<ExpenseStats, NetworkError> {
        tracing::debug!("Fetching expense stats");

        let url = self.endpoint("expenses/stats")?;
        self.send_json(self.client.get(url)).await
    }

    // ============= Packing =============

    /// List packing items, optionally only those of one category.
    pub async fn list_packing(
        &self,
        category: Option<PackingCategory>,
    ) -> Result<Vec<PackingItem>, NetworkError> {
        tracing::debug!("Fetching packing items (category: {:?})", category);

        let url = self.endpoint("packing")?;
        let mut request = self.client.get(url);
        if let Some(category) = category {
            request = request.query(&[("category", category.as_str())]);
        }
        let items: Vec<PackingItem> = self.send_json(request).await?;

        tracing::info!("Fetched {} packing items", items.len());
        Ok(items)
    }

    pub async fn create_packing(&self, request: &PackingRequest) -> Result<PackingItem, NetworkError> {
        tracing::debug!("Creating packing item {}", request.item);

        let url = self.endpoint("packing")?;
        self.send_json(self.client.post(url).json(request)).await
    }

    pub async fn update_packing(
        &self,
        id: RecordId,
        request: &PackingRequest,
    ) -> Result<PackingItem, NetworkError> {
        tracing::debug!("Updating packing item {}", id);

        let url = self.endpoint(&format!("packing/{id}"))?;
        self.send_json(self.client.put(url).json(request)).await
    }

    pub async fn delete_packing(&self, id: RecordId) -> Result<(), NetworkError> {
        tracing::debug!("Deleting packing item {}", id);

        let url = self.endpoint(&format!("packing/{id}"))?;
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    /// Flip `checked` server-side and return the updated item.
    pub async fn toggle_packing(&self, id: RecordId) -> Result<PackingItem, NetworkError> {
        tracing::debug!("Toggling packing item {}", id);

        let url = self.endpoint(&format!("packing/{id}/toggle"))?;
        self.send_json(self.client.patch(url)).await
    }

    // ============= Health =============

    /// `Ok(false)` when the backend answers with a non-2xx status.
    pub async fn health_check(&self) -> Result<bool, NetworkError> {
        let url = self.endpoint("health")?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ReqwestErrorExt::into_network_error)?;
        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = TravelClient::new("http://localhost:5000/api", None).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:5000/api/");
        assert_eq!(
            client.endpoint("expenses/stats").unwrap().as_str(),
            "http://localhost:5000/api/expenses/stats"
        );
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = TravelClient::new("not a url", None).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
