//! In-process stand-in for the catalog backend.
//!
//! Serves the same wire contract the real API does and counts requests per
//! endpoint, so tests can assert "no request was sent" and "exactly one
//! reload" literally.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::time::{Duration, sleep};

pub const LOGIN_EMAIL: &str = "admin@example.com";
pub const LOGIN_PASSWORD: &str = "secret123";

#[derive(Default)]
pub struct BackendState {
    pub products: Mutex<Vec<Value>>,
    pub registered_emails: Mutex<Vec<String>>,
    pub last_register_body: Mutex<Option<Value>>,
    pub next_id: AtomicUsize,
    pub logins: AtomicUsize,
    pub registrations: AtomicUsize,
    pub listings: AtomicUsize,
    pub creations: AtomicUsize,
    pub updates: AtomicUsize,
    pub deletions: AtomicUsize,
    pub fail_listing: AtomicBool,
    pub list_delay_ms: AtomicUsize,
}

pub struct MockBackend {
    pub addr: SocketAddr,
    pub state: Arc<BackendState>,
}

impl MockBackend {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn seed_products(&self, count: usize) {
        let mut products = self.state.products.lock().unwrap();
        for _ in 0..count {
            let id = self.state.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            products.push(product_json(id));
        }
    }
}

/// Spawn the mock backend on an ephemeral port and serve it in the
/// background.
pub async fn spawn() -> MockBackend {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let state = Arc::new(BackendState::default());
    let app = router(state.clone());

    // Bind to an ephemeral port using tokio listener (host from APP_HOST)
    let host = std::env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let listener = tokio::net::TcpListener::bind(format!("{host}:0"))
        .await
        .expect("bind");
    let addr = listener.local_addr().unwrap();

    let server = axum::serve(listener, app.into_make_service());
    tokio::spawn(async move {
        server.await.unwrap();
    });

    // Give the server a moment to start
    sleep(Duration::from_millis(50)).await;

    MockBackend { addr, state }
}

fn router(state: Arc<BackendState>) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/users", post(register))
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", put(update_product).delete(delete_product))
        .with_state(state)
}

fn product_json(id: usize) -> Value {
    json!({
        "id": format!("p{id}"),
        "title": format!("Product {id}"),
        "description": format!("Description for product {id}"),
        "thumbnail": format!("https://cdn.example.com/p{id}.png"),
        "status": true,
        "updatedAt": Utc::now().to_rfc3339(),
    })
}

fn check_bearer(headers: &HeaderMap) -> Result<(), (StatusCode, Json<Value>)> {
    let value = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();
    if value
        .strip_prefix("Bearer ")
        .is_some_and(|token| !token.trim().is_empty())
    {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Missing or invalid Authorization header" })),
        ))
    }
}

async fn login(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let count = state.logins.fetch_add(1, Ordering::SeqCst) + 1;
    if body["email"] == LOGIN_EMAIL && body["password"] == LOGIN_PASSWORD {
        (
            StatusCode::OK,
            Json(json!({
                "token": format!("token-{count}"),
                "user": { "name": "Admin" },
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid email or password" })),
        )
    }
}

async fn register(
    State(state): State<Arc<BackendState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.registrations.fetch_add(1, Ordering::SeqCst);
    *state.last_register_body.lock().unwrap() = Some(body.clone());

    let email = body["email"].as_str().unwrap_or_default().to_string();
    if email == "boom@example.com" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "internal server error" })),
        );
    }
    if body["phone"]["ddd"] == "00" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "codeIntern": "USR-PHONE-400", "message": "invalid phone number" })),
        );
    }

    let mut emails = state.registered_emails.lock().unwrap();
    if emails.contains(&email) {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "codeIntern": "USR-EMAIL-409", "message": "email already registered" })),
        );
    }
    emails.push(email);

    (
        StatusCode::CREATED,
        Json(json!({
            "codeIntern": "USR-201",
            "message": "User registered",
            "token": "registration-token",
        })),
    )
}

#[derive(Deserialize)]
struct ListQuery {
    page: Option<u32>,
    #[serde(rename = "pageSize")]
    page_size: Option<u32>,
    filter: Option<String>,
}

async fn list_products(
    State(state): State<Arc<BackendState>>,
    Query(query): Query<ListQuery>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.listings.fetch_add(1, Ordering::SeqCst);
    if let Err(denied) = check_bearer(&headers) {
        return denied;
    }

    let delay = state.list_delay_ms.load(Ordering::SeqCst);
    if delay > 0 {
        sleep(Duration::from_millis(delay as u64)).await;
    }
    if state.fail_listing.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "internal server error" })),
        );
    }

    let page = query.page.unwrap_or(1).max(1);
    let page_size = query.page_size.unwrap_or(10).max(1);

    let products = state.products.lock().unwrap();
    let filtered: Vec<Value> = products
        .iter()
        .filter(|p| match &query.filter {
            Some(f) if !f.is_empty() => {
                p["title"].as_str().unwrap_or_default().contains(f.as_str())
            }
            _ => true,
        })
        .cloned()
        .collect();

    let total = filtered.len();
    let total_pages = total.div_ceil(page_size as usize);
    let start = ((page - 1) * page_size) as usize;
    let data: Vec<Value> = filtered
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();

    // The requested page is echoed back even when it is past the end; the
    // client is responsible for clamping.
    (
        StatusCode::OK,
        Json(json!({
            "data": data,
            "meta": {
                "page": page,
                "pageSize": page_size,
                "total": total,
                "totalPages": total_pages,
            },
        })),
    )
}

async fn create_product(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.creations.fetch_add(1, Ordering::SeqCst);
    if let Err(denied) = check_bearer(&headers) {
        return denied;
    }

    let id = state.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    let product = json!({
        "id": format!("p{id}"),
        "title": body["title"],
        "description": body["description"],
        "thumbnail": body["thumbnail"],
        "status": true,
        "updatedAt": Utc::now().to_rfc3339(),
    });
    state.products.lock().unwrap().push(product.clone());
    (StatusCode::CREATED, Json(product))
}

async fn update_product(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.updates.fetch_add(1, Ordering::SeqCst);
    if let Err(denied) = check_bearer(&headers) {
        return denied;
    }

    let mut products = state.products.lock().unwrap();
    let Some(product) = products.iter_mut().find(|p| p["id"] == id.as_str()) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Product not found" })),
        );
    };
    for key in ["title", "description", "thumbnail", "status"] {
        if let Some(value) = body.get(key) {
            product[key] = value.clone();
        }
    }
    product["updatedAt"] = json!(Utc::now().to_rfc3339());
    (StatusCode::OK, Json(product.clone()))
}

async fn delete_product(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.deletions.fetch_add(1, Ordering::SeqCst);
    if let Err(denied) = check_bearer(&headers) {
        return denied;
    }

    let mut products = state.products.lock().unwrap();
    let before = products.len();
    products.retain(|p| p["id"] != id.as_str());
    if products.len() == before {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Product not found" })),
        );
    }
    (StatusCode::OK, Json(json!({ "message": "Product deleted" })))
}
