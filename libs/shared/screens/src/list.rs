use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use shared_models::page::PageRequest;

use crate::resource::{Entity, EntityClient};
use crate::ui::ScreenContext;

/// Epoch counter tied to a screen's active lifetime. Every fetch snapshots
/// the epoch before awaiting; `cancel` (unmount, navigation) bumps it, and a
/// response whose snapshot no longer matches is discarded instead of being
/// applied to a screen nobody is looking at.
#[derive(Clone, Default)]
pub struct ScreenLifetime {
    epoch: Arc<AtomicU64>,
}

impl ScreenLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    pub fn cancel(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_stale(&self, snapshot: u64) -> bool {
        self.snapshot() != snapshot
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
}

/// What the table currently shows. Search results are a different shape:
/// the full unpaginated match list, over which paging controls are inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMode {
    Paged,
    Search { query: String },
}

/// The table + search + add/edit/delete screen for one entity. Holds the
/// currently displayed rows and decides create-vs-update on save; all
/// network failures surface as toasts and leave the current rows in place.
pub struct ListScreen<E: Entity> {
    client: EntityClient<E>,
    ctx: ScreenContext,
    default_page: PageRequest,
    page: PageRequest,
    rows: Vec<E>,
    total_elements: u64,
    total_pages: u32,
    state: LoadState,
    mode: ListMode,
    selected: Option<E>,
    dialog_open: bool,
    lifetime: ScreenLifetime,
}

impl<E: Entity> ListScreen<E> {
    pub fn new(client: EntityClient<E>, ctx: ScreenContext, default_page: PageRequest) -> Self {
        Self {
            client,
            ctx,
            page: default_page.clone(),
            default_page,
            rows: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            state: LoadState::Idle,
            mode: ListMode::Paged,
            selected: None,
            dialog_open: false,
            lifetime: ScreenLifetime::new(),
        }
    }

    pub fn rows(&self) -> &[E] {
        &self.rows
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn mode(&self) -> &ListMode {
        &self.mode
    }

    pub fn page(&self) -> &PageRequest {
        &self.page
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn selected(&self) -> Option<&E> {
        self.selected.as_ref()
    }

    /// Handle for cancelling this screen's in-flight work from outside
    /// (navigation, shutdown).
    pub fn lifetime(&self) -> ScreenLifetime {
        self.lifetime.clone()
    }

    /// Fetch the current page. On error the previous rows stay visible;
    /// the failure is only a toast.
    pub async fn refresh(&mut self) {
        let snapshot = self.lifetime.snapshot();
        self.state = LoadState::Loading;

        let result = self.client.get_all(&self.page).await;
        if self.lifetime.is_stale(snapshot) {
            debug!(resource = E::RESOURCE, "discarding stale list response");
            return;
        }

        match result {
            Ok(page) => {
                self.rows = page.content;
                self.total_elements = page.total_elements;
                self.total_pages = page.total_pages;
                self.mode = ListMode::Paged;
            }
            Err(e) => {
                warn!(resource = E::RESOURCE, error = %e, "list fetch failed");
                self.ctx
                    .toasts
                    .error(&format!("Failed to fetch {}", E::NOUN_PLURAL));
            }
        }
        self.state = LoadState::Loaded;
    }

    /// Explicit search submit. A blank query restores the paged listing;
    /// otherwise the table switches to the unpaginated match list.
    pub async fn submit_search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.page = self.default_page.clone();
            self.refresh().await;
            return;
        }

        let snapshot = self.lifetime.snapshot();
        self.state = LoadState::Loading;

        let result = self.client.search(query).await;
        if self.lifetime.is_stale(snapshot) {
            debug!(resource = E::RESOURCE, "discarding stale search response");
            return;
        }

        match result {
            Ok(rows) => {
                self.rows = rows;
                self.mode = ListMode::Search {
                    query: query.to_string(),
                };
            }
            Err(e) => {
                warn!(resource = E::RESOURCE, error = %e, "search failed");
                self.ctx.toasts.error("Search failed");
            }
        }
        self.state = LoadState::Loaded;
    }

    pub fn begin_create(&mut self) {
        self.selected = None;
        self.dialog_open = true;
    }

    /// Open the form pre-populated with the row carrying `id`. Returns the
    /// selected row so the caller can seed the form screen.
    pub fn begin_edit(&mut self, id: &str) -> Option<&E> {
        let row = self.rows.iter().find(|row| row.id() == id)?.clone();
        self.selected = Some(row);
        self.dialog_open = true;
        self.selected.as_ref()
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.selected = None;
    }

    /// Persist a validated payload. The list screen - not the form - decides
    /// create vs update, from whether a row was selected when the dialog
    /// opened. Returns true when the save stuck (dialog closed, list
    /// re-fetched); false leaves the dialog open so the draft survives.
    pub async fn save<B: Serialize>(&mut self, payload: &B) -> bool {
        let result = match &self.selected {
            Some(selected) => self.client.update(selected.id(), payload).await,
            None => self.client.create(payload).await,
        };

        match result {
            Ok(_) => {
                let verb = if self.selected.is_some() {
                    "updated"
                } else {
                    "created"
                };
                self.ctx
                    .toasts
                    .success(&format!("{} {} successfully", capitalize(E::NOUN), verb));
                self.close_dialog();
                self.refresh().await;
                true
            }
            Err(e) => {
                warn!(resource = E::RESOURCE, error = %e, "save failed");
                self.ctx
                    .toasts
                    .error(&format!("Failed to save {}", E::NOUN));
                false
            }
        }
    }

    /// Delete after an interactive confirmation. The list is re-fetched
    /// whether or not the delete succeeded, so the table always reflects
    /// server state after a mutation attempt.
    pub async fn delete(&mut self, id: &str) {
        let prompt = format!("Are you sure you want to delete this {}?", E::NOUN);
        if !self.ctx.confirm.confirm(&prompt) {
            return;
        }

        match self.client.delete(id).await {
            Ok(()) => {
                self.ctx
                    .toasts
                    .success(&format!("{} deleted successfully", capitalize(E::NOUN)));
            }
            Err(e) => {
                warn!(resource = E::RESOURCE, error = %e, "delete failed");
                self.ctx
                    .toasts
                    .error(&format!("Failed to delete {}", E::NOUN));
            }
        }
        self.refresh().await;
    }

    /// Jump to a page. Inert while showing search results.
    pub async fn set_page(&mut self, page: u32) {
        if matches!(self.mode, ListMode::Search { .. }) {
            return;
        }
        self.page.page = page;
        self.refresh().await;
    }

    pub async fn next_page(&mut self) {
        if self.page.page + 1 < self.total_pages {
            let next = self.page.page + 1;
            self.set_page(next).await;
        }
    }

    pub async fn prev_page(&mut self) {
        if self.page.page > 0 {
            let prev = self.page.page - 1;
            self.set_page(prev).await;
        }
    }

    /// Fetch a binary export and hand it to the download sink.
    pub async fn export_excel(&self, path: &str, query: &[(&str, String)], filename: &str) {
        let saved = match self.client.download(path, query).await {
            Ok(bytes) => self.ctx.files.save(filename, &bytes).is_ok(),
            Err(e) => {
                warn!(resource = E::RESOURCE, error = %e, "export failed");
                false
            }
        };

        if saved {
            self.ctx.toasts.success("Export successful");
        } else {
            self.ctx.toasts.error("Export failed");
        }
    }

    /// Fetch a generated PDF and hand it to the viewer sink.
    pub async fn open_pdf(&self, id: &str) {
        let path = format!("{}/{}/pdf", E::RESOURCE, id);
        let filename = format!("{}-{}.pdf", E::NOUN, id);

        let opened = match self.client.download(&path, &[]).await {
            Ok(bytes) => self.ctx.files.open(&filename, &bytes).is_ok(),
            Err(e) => {
                warn!(resource = E::RESOURCE, error = %e, "pdf generation failed");
                false
            }
        };

        if opened {
            self.ctx.toasts.success("PDF generated successfully");
        } else {
            self.ctx.toasts.error("PDF generation failed");
        }
    }
}

fn capitalize(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
