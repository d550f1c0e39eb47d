use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with Actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug;

    // --- Custom Actions ---
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;
    type Error: Send + Sync + Debug + Clone;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    // --- Action Handler ---

    /// Handle a custom domain-specific action.
    ///
    /// A failed action must leave `self` unchanged.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

/// Failures surfaced by a [`ResourceClient`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResourceError<I, E> {
    #[error("Item not found: {0}")]
    NotFound(I),
    #[error("{0}")]
    Entity(E),
    #[error("Actor closed")]
    Closed,
    #[error("Actor dropped")]
    Dropped,
}

pub type ResourceResult<T, R> = Result<R, ResourceError<<T as Entity>::Id, <T as Entity>::Error>>;

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, R> = oneshot::Sender<ResourceResult<T, R>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Get {
        id: T::Id,
        respond_to: Response<T, Option<T>>,
    },
    List {
        respond_to: Response<T, Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T, T::ActionResult>,
    },
    /// Applies every action or none of them.
    Batch {
        actions: Vec<(T::Id, T::Action)>,
        respond_to: Response<T, Vec<T::ActionResult>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: Entity> ResourceActor<T> {
    /// Creates an actor owning `items` and the client handle that reaches it.
    pub fn new(
        buffer_size: usize,
        items: impl IntoIterator<Item = T>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = items
            .into_iter()
            .map(|item| (item.id().clone(), item))
            .collect();
        let actor = Self { receiver, store };
        let client = ResourceClient { sender };
        (actor, client)
    }

    /// Serves requests until every client handle has been dropped.
    pub async fn run(mut self) {
        info!(items = self.store.len(), "ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let mut items: Vec<T> = self.store.values().cloned().collect();
                    items.sort_by(|a, b| a.id().cmp(b.id()));
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item.handle_action(action).map_err(ResourceError::Entity),
                        None => Err(ResourceError::NotFound(id)),
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Batch { actions, respond_to } => {
                    let _ = respond_to.send(self.apply_batch(actions));
                }
            }
        }
        info!("ResourceActor stopped");
    }

    /// Runs the actions against staged copies and commits them only when all succeed.
    fn apply_batch(&mut self, actions: Vec<(T::Id, T::Action)>) -> ResourceResult<T, Vec<T::ActionResult>> {
        let mut staged: HashMap<T::Id, T> = HashMap::new();
        let mut results = Vec::with_capacity(actions.len());

        for (id, action) in actions {
            let item = match staged.entry(id) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let current = self
                        .store
                        .get(entry.key())
                        .ok_or_else(|| ResourceError::NotFound(entry.key().clone()))?;
                    entry.insert(current.clone())
                }
            };
            results.push(item.handle_action(action).map_err(ResourceError::Entity)?);
        }

        debug!(items = staged.len(), "Committing batch");
        self.store.extend(staged);
        Ok(results)
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
    #[allow(dead_code)]
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<T, R>) -> ResourceRequest<T>,
    ) -> ResourceResult<T, R> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ResourceError::Closed)?;
        response.await.map_err(|_| ResourceError::Dropped)?
    }

    pub async fn get(&self, id: T::Id) -> ResourceResult<T, Option<T>> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> ResourceResult<T, Vec<T>> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> ResourceResult<T, T::ActionResult> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }

    pub async fn perform_batch(&self, actions: Vec<(T::Id, T::Action)>) -> ResourceResult<T, Vec<T::ActionResult>> {
        self.request(|respond_to| ResourceRequest::Batch { actions, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
