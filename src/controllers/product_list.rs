use tokio::sync::watch;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::notify::NoticeSender;
use crate::schemas::product_schema::Product;
use crate::session::Session;

const DEFAULT_PAGE_SIZE: u32 = 10;

/// Paginated view over the product catalog.
///
/// State is replaced atomically on a successful load; a failed load keeps the
/// previous page visible and surfaces one notice. Token changes observed via
/// the session watch channel reload page 1.
#[derive(Debug)]
pub struct ProductListController {
    api: ApiClient,
    session: Session,
    session_rx: watch::Receiver<Option<String>>,
    notices: NoticeSender,
    page_size: u32,
    pub products: Vec<Product>,
    pub page: u32,
    pub total_pages: u32,
    pub loading: bool,
}

impl ProductListController {
    pub fn new(api: ApiClient, session: Session, notices: NoticeSender) -> Self {
        let session_rx = session.subscribe();
        Self {
            api,
            session,
            session_rx,
            notices,
            page_size: DEFAULT_PAGE_SIZE,
            products: Vec::new(),
            page: 1,
            total_pages: 0,
            loading: false,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Fetch one page. A no-op without a session token; on failure the
    /// previous state stays intact.
    pub async fn load(&mut self, page: u32) {
        let Some(token) = self.session.token() else {
            debug!("product load skipped: no session token");
            return;
        };

        self.loading = true;
        let result = self
            .api
            .list_products(&token, page, self.page_size, None)
            .await;
        self.loading = false;

        // A login or logout that landed while the request was in flight makes
        // this response stale; the change itself triggers the next reload.
        if self.session.token() != Some(token) {
            debug!("discarding stale product page response");
            return;
        }

        match result {
            Ok(fetched) => {
                self.products = fetched.data;
                self.page = fetched.meta.page;
                self.total_pages = fetched.meta.total_pages;
            }
            Err(err) => {
                warn!("product load failed: {err}");
                self.notices.error(err.to_string());
            }
        }
    }

    /// Reload the page currently shown. Used after create/update/delete; when
    /// the mutation emptied the last page, one follow-up load clamps back to
    /// the new last page.
    pub async fn refresh(&mut self) {
        self.load(self.page.max(1)).await;
        if self.total_pages >= 1 && self.page > self.total_pages {
            let last = self.total_pages;
            self.load(last).await;
        }
    }

    /// Advance one page; a no-op on the last page.
    pub async fn next(&mut self) {
        if self.page < self.total_pages {
            let page = self.page + 1;
            self.load(page).await;
        }
    }

    /// Go back one page; a no-op on the first page.
    pub async fn prev(&mut self) {
        if self.page > 1 {
            let page = self.page - 1;
            self.load(page).await;
        }
    }

    /// Delete one product and reload the current page. Guarded by `loading`
    /// the same way the form submit buttons are.
    pub async fn delete(&mut self, id: &str) {
        if self.loading {
            return;
        }
        let Some(token) = self.session.token() else {
            debug!("product delete skipped: no session token");
            return;
        };

        self.loading = true;
        let result = self.api.delete_product(&token, id).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.notices.info("Product deleted");
                self.refresh().await;
            }
            Err(err) => {
                warn!("product delete failed: {err}");
                self.notices.error(err.to_string());
            }
        }
    }

    /// Apply a pending session change: a new token reloads page 1, a cleared
    /// one resets the view. Returns whether a change was observed.
    pub async fn sync_session(&mut self) -> bool {
        if !self.session_rx.has_changed().unwrap_or(false) {
            return false;
        }
        let authenticated = self.session_rx.borrow_and_update().is_some();
        if authenticated {
            self.load(1).await;
        } else {
            self.reset();
        }
        true
    }

    /// Follow session changes until the session store goes away. Each new
    /// token reloads page 1.
    pub async fn run(&mut self) {
        while self.session_rx.changed().await.is_ok() {
            let authenticated = self.session_rx.borrow_and_update().is_some();
            if authenticated {
                self.load(1).await;
            } else {
                self.reset();
            }
        }
    }

    fn reset(&mut self) {
        self.products.clear();
        self.page = 1;
        self.total_pages = 0;
    }
}
