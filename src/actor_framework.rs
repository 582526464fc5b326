use std::fmt::{Debug, Display};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, instrument, warn};

use crate::storage::KvStore;

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with hooks and actions)
// =============================================================================

/// Trait that any persisted record must implement to be managed by [`ResourceActor`].
///
/// The whole collection is stored as one JSON array under [`Entity::COLLECTION_KEY`].
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    type Id: PartialEq + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Key the collection is persisted under.
    const COLLECTION_KEY: &'static str;

    /// Where unparseable stored bytes are moved before the collection is rewritten.
    fn unreadable_key() -> String {
        format!("{}.unreadable", Self::COLLECTION_KEY)
    }

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, String>;

    fn on_create(&mut self) -> Result<(), String> {
        Ok(())
    }

    /// Handle a domain-specific action against one record
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Rejected: {0}")]
    Rejected(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// All records, newest first.
    List {
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    /// Drop every record and the stored key. Replies with how many were removed.
    Clear {
        respond_to: Response<usize>,
    },
    Shutdown,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    items: Vec<T>,
    store: Arc<dyn KvStore>,
    /// Cleared when the stored collection could not be loaded or set aside.
    /// Writes are refused so the stored value is never overwritten unseen.
    writable: bool,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        store: Arc<dyn KvStore>,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            items: Vec::new(),
            store,
            writable: true,
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient { sender };
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self), fields(collection = T::COLLECTION_KEY))]
    pub async fn run(mut self) {
        self.items = self.load();
        info!(count = self.items.len(), "Resource actor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.items.iter().find(|item| item.id() == &id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let newest_first = self.items.iter().rev().cloned().collect();
                    let _ = respond_to.send(Ok(newest_first));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.handle_action(id, action));
                }
                ResourceRequest::Clear { respond_to } => {
                    let _ = respond_to.send(self.handle_clear());
                }
                ResourceRequest::Shutdown => {
                    info!("Resource actor shutting down");
                    break;
                }
            }
        }

        info!("Resource actor stopped");
    }

    /// Read the stored collection. Unreadable data is reported and treated as empty.
    ///
    /// Bytes that fail to parse are copied to [`Entity::unreadable_key`] first.
    /// If that copy or the read itself fails, the actor serves reads but
    /// refuses writes.
    fn load(&mut self) -> Vec<T> {
        match self.store.get(T::COLLECTION_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(items) => items,
                Err(e) => {
                    warn!(error = %e, "Failed to parse stored collection, starting empty");
                    let backup_key = T::unreadable_key();
                    match self.store.set(&backup_key, &bytes) {
                        Ok(()) => warn!(backup_key = %backup_key, "Unreadable collection set aside"),
                        Err(e) => {
                            error!(error = %e, "Could not set unreadable collection aside, refusing writes");
                            self.writable = false;
                        }
                    }
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                error!(error = %e, "Failed to read stored collection, refusing writes");
                self.writable = false;
                Vec::new()
            }
        }
    }

    fn ensure_writable(&self) -> Result<(), FrameworkError> {
        if self.writable {
            Ok(())
        } else {
            Err(FrameworkError::Storage(
                "stored collection could not be loaded; refusing to overwrite it".to_string(),
            ))
        }
    }

    fn persist(&self) -> Result<(), FrameworkError> {
        let bytes =
            serde_json::to_vec(&self.items).map_err(|e| FrameworkError::Storage(e.to_string()))?;
        self.store
            .set(T::COLLECTION_KEY, &bytes)
            .map_err(|e| FrameworkError::Storage(e.to_string()))
    }

    fn handle_create(&mut self, payload: T::CreatePayload) -> Result<T::Id, FrameworkError> {
        self.ensure_writable()?;
        let id = (self.next_id_fn)();
        let mut item = T::from_create(id.clone(), payload).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;

        self.items.push(item);
        if let Err(e) = self.persist() {
            self.items.pop();
            return Err(e);
        }
        debug!(id = %id, "Record created");
        Ok(id)
    }

    fn handle_action(
        &mut self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.ensure_writable()?;
        let index = self
            .items
            .iter()
            .position(|item| item.id() == &id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;

        let previous = self.items[index].clone();
        let result = self.items[index]
            .handle_action(action)
            .map_err(FrameworkError::Rejected)?;

        if let Err(e) = self.persist() {
            self.items[index] = previous;
            return Err(e);
        }
        debug!(id = %id, "Action applied");
        Ok(result)
    }

    fn handle_clear(&mut self) -> Result<usize, FrameworkError> {
        self.ensure_writable()?;
        self.store
            .delete(T::COLLECTION_KEY)
            .map_err(|e| FrameworkError::Storage(e.to_string()))?;
        let removed = self.items.len();
        self.items.clear();
        info!(removed, "Collection cleared");
        Ok(removed)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    #[cfg(test)]
    pub(crate) fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { payload, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action { id, action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn clear(&self) -> Result<usize, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Clear { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn shutdown(&self) -> Result<(), FrameworkError> {
        self.sender
            .send(ResourceRequest::Shutdown)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
