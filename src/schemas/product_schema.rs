use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Catalog entry as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

// Request schema shared by the create form and the edit modal; doubles as the
// POST /products body. The thumbnail is a URL, binary uploads are not part of
// this client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductFormSchema {
    #[validate(length(min = 3, message = "Title must be at least 3 characters long"))]
    pub title: String,

    #[validate(length(min = 5, message = "Description must be at least 5 characters long"))]
    pub description: String,

    #[validate(url(message = "Enter a valid image URL"))]
    pub thumbnail: String,
}

// Partial body for PUT /products/{id}; absent fields are left untouched by
// the backend.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdateRequestSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

impl From<ProductFormSchema> for ProductUpdateRequestSchema {
    fn from(form: ProductFormSchema) -> Self {
        Self {
            title: Some(form.title),
            description: Some(form.description),
            thumbnail: Some(form.thumbnail),
            status: None,
        }
    }
}

/// One slice of the catalog plus its pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
}
