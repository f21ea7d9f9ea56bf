//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns a store of entities and
//! processes requests against it one at a time.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of entities.
///
/// This struct is the "server" half of a store. It owns the records (`store`) and the
/// receiving end of the request channel, and handles every [`ResourceRequest`] to
/// completion before it looks at the next one. That sequential loop is the store's
/// exclusive region: a check-and-mutate inside [`ActorEntity::handle_action`] can never
/// interleave with another request on the same store, and no `Mutex` is needed.
/// Two actors never share state, so each store is an independent lock domain.
///
/// # Key assignment
///
/// * [`ResourceActor::new`] builds a store keyed by the records themselves. Records enter
///   through `Put`; `Create` is answered with [`FrameworkError::Unsupported`].
/// * [`ResourceActor::with_sequence`] builds a store that assigns keys on `Create` from a
///   counter that starts at 1 and is bumped before the record is built, so a key is never
///   handed out twice even when construction fails.
///
/// # Usage Pattern
///
/// 1.  **Create**: call a constructor to get the `actor` (server) and `client` (handle).
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use async_trait::async_trait;
/// use resource_actor::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)]
/// struct Counter { id: u64, hits: u32 }
/// #[derive(Debug)] struct Hit;
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Id = u64;
///     type Create = ();
///     type Update = ();
///     type Action = Hit;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     fn id(&self) -> u64 { self.id }
///     fn from_create_params(id: u64, _: ()) -> Result<Self, Self::Error> { Ok(Self { id, hits: 0 }) }
///     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: Hit, _: &()) -> Result<u32, Self::Error> {
///         self.hits += 1;
///         Ok(self.hits)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Counter>::with_sequence(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(()).await.unwrap();
///     assert_eq!(id, 1);
///     assert_eq!(client.perform_action(id, Hit).await.unwrap(), 1);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u64,
    key_from_sequence: Option<fn(u64) -> T::Id>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an actor whose records are keyed by themselves (see [`ActorEntity::id`]).
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, client calls
    /// wait until there is room. A capacity of 0 is raised to 1.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::build(buffer_size, None)
    }

    /// Creates an actor that assigns sequential keys (1, 2, 3, …) on `Create`.
    pub fn with_sequence(buffer_size: usize) -> (Self, ResourceClient<T>)
    where
        T::Id: From<u64>,
    {
        let key_from_sequence: fn(u64) -> T::Id = <T::Id as From<u64>>::from;
        Self::build(buffer_size, Some(key_from_sequence))
    }

    fn build(
        buffer_size: usize,
        key_from_sequence: Option<fn(u64) -> T::Id>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
            key_from_sequence,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` argument is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = entity_type::<T>();
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let _ = respond_to.send(self.create(params, &context).await);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Put { entity, respond_to } => {
                    let _ = respond_to.send(Ok(self.put(entity)));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let _ = respond_to.send(self.update(id, update, &context).await);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let _ = respond_to.send(self.act(id, action, &context).await);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let entity_type = entity_type::<T>();
        let Some(key_from_sequence) = self.key_from_sequence else {
            warn!(entity_type, "Create on a store without key sequence");
            return Err(FrameworkError::Unsupported("create"));
        };
        // The key is spent even if construction fails below.
        let id = key_from_sequence(self.next_id);
        self.next_id += 1;

        let built = match T::from_create_params(id.clone(), params) {
            Ok(mut item) => match item.on_create(context).await {
                Ok(()) => Ok(item),
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        };
        match built {
            Ok(item) => {
                self.store.insert(id.clone(), item);
                info!(entity_type, %id, size = self.store.len(), "Created");
                Ok(id)
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Create failed");
                Err(FrameworkError::EntityError(Box::new(e)))
            }
        }
    }

    fn put(&mut self, entity: T) -> Option<T> {
        let id = entity.id();
        let previous = self.store.insert(id.clone(), entity);
        info!(
            entity_type = entity_type::<T>(),
            %id,
            replaced = previous.is_some(),
            size = self.store.len(),
            "Put"
        );
        previous
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let entity_type = entity_type::<T>();
        let item = self.record_mut(&id)?;
        match item.on_update(update, context).await {
            Ok(()) => {
                info!(entity_type, %id, "Updated");
                Ok(item.clone())
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Update failed");
                Err(FrameworkError::EntityError(Box::new(e)))
            }
        }
    }

    async fn act(
        &mut self,
        id: T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let entity_type = entity_type::<T>();
        let item = self.record_mut(&id)?;
        match item.handle_action(action, context).await {
            Ok(result) => {
                info!(entity_type, %id, "Action ok");
                Ok(result)
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Action failed");
                Err(FrameworkError::EntityError(Box::new(e)))
            }
        }
    }

    fn record_mut(&mut self, id: &T::Id) -> Result<&mut T, FrameworkError> {
        self.store.get_mut(id).ok_or_else(|| {
            warn!(entity_type = entity_type::<T>(), %id, "Not found");
            FrameworkError::NotFound(id.to_string())
        })
    }
}

/// Short type name used to tag log lines, e.g. `Stock` for `loms::model::stock::Stock`.
fn entity_type<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}
