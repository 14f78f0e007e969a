use super::{ApiClient, ApiError};
use crate::schemas::product_schema::{Page, Product, ProductFormSchema, ProductUpdateRequestSchema};

impl ApiClient {
    /// GET /products. Fetch one page of the catalog, optionally filtered by
    /// title.
    pub async fn list_products(
        &self,
        token: &str,
        page: u32,
        page_size: u32,
        filter: Option<&str>,
    ) -> Result<Page<Product>, ApiError> {
        let mut query = vec![("page", page.to_string()), ("pageSize", page_size.to_string())];
        if let Some(filter) = filter {
            query.push(("filter", filter.to_string()));
        }

        let response = self
            .http
            .get(self.url("/products"))
            .bearer_auth(token)
            .query(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response, "Failed to fetch products").await);
        }

        Ok(response.json().await?)
    }

    /// POST /products.
    pub async fn create_product(
        &self,
        token: &str,
        payload: &ProductFormSchema,
    ) -> Result<Product, ApiError> {
        let response = self
            .http
            .post(self.url("/products"))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response, "Failed to create product").await);
        }

        Ok(response.json().await?)
    }

    /// PUT /products/{id}. Fields left `None` are not touched.
    pub async fn update_product(
        &self,
        token: &str,
        id: &str,
        payload: &ProductUpdateRequestSchema,
    ) -> Result<Product, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/products/{id}")))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response, "Failed to update product").await);
        }

        Ok(response.json().await?)
    }

    /// DELETE /products/{id}.
    pub async fn delete_product(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/products/{id}")))
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response, "Failed to delete product").await);
        }

        Ok(())
    }
}
