//! # Generic Messages
//!
//! The request type exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor to request an operation.
///
/// Every variant maps to one store operation:
///
/// - **Create**: the actor assigns the next key and builds the record from [`ActorEntity::Create`].
/// - **Get**: fetches a copy of the record by key.
/// - **Put**: stores a whole record under its own key, replacing any previous one.
/// - **Update**: applies an [`ActorEntity::Update`] to an existing record.
/// - **Action**: runs a record-specific [`ActorEntity::Action`] atomically.
///
/// Records are never deleted, so there is no `Delete` request.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Put {
        entity: T,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
