use async_trait::async_trait;

use shared_http::ApiError;
use shared_models::page::{PageRequest, SortDir};

use crate::resource::{Entity, EntityClient};

/// Reference drop-downs fetch at most one page of this size, as the original
/// forms did.
pub const REFERENCE_PAGE_SIZE: u32 = 100;

/// One selectable entry in a reference picker. Selecting it copies both the
/// id and the synthesized display label into the draft; the label is the
/// denormalized name the backend stores alongside the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefOption {
    pub id: String,
    pub label: String,
}

/// Source of picker options. Forms and shells depend on this seam rather
/// than on a concrete client so tests can hand in canned lists.
#[async_trait]
pub trait ReferenceSource: Send + Sync {
    async fn options(&self) -> Result<Vec<RefOption>, ApiError>;
}

/// Picker options backed by the first page of an entity collection.
pub struct PagedOptions<E: Entity> {
    client: EntityClient<E>,
    label: fn(&E) -> String,
}

impl<E: Entity> PagedOptions<E> {
    pub fn new(client: EntityClient<E>, label: fn(&E) -> String) -> Self {
        Self { client, label }
    }
}

#[async_trait]
impl<E: Entity> ReferenceSource for PagedOptions<E> {
    async fn options(&self) -> Result<Vec<RefOption>, ApiError> {
        let page = PageRequest::new("createdAt", SortDir::Desc).with_size(REFERENCE_PAGE_SIZE);
        let result = self.client.get_all(&page).await?;
        Ok(result
            .content
            .iter()
            .map(|entity| RefOption {
                id: entity.id().to_string(),
                label: (self.label)(entity),
            })
            .collect())
    }
}
