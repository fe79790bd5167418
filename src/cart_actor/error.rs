use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors surfaced by the cart client. Cart operations themselves never fail,
/// so only the actor going away is reported.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(#[from] FrameworkError),
}
