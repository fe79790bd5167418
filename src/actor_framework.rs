use std::fmt::Debug;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION (State holder with a reducer)
// =============================================================================

/// Trait that any state holder must implement to be run by a StoreActor.
///
/// The store owns its state. Every action is applied synchronously and in
/// arrival order, so a mutation is atomic from the caller's point of view.
pub trait Store: Send + 'static {
    /// Name used in tracing spans.
    const NAME: &'static str;

    /// Immutable value handed to observers.
    type State: Clone + Send + Sync + Debug + 'static;
    type Action: Send + Sync + Debug;

    /// Current state as a fresh immutable value.
    fn snapshot(&self) -> Self::State;

    /// Apply an action, reporting whether observers need to hear about it.
    fn reduce(&mut self, action: Self::Action) -> Transition;
}

/// Outcome of [`Store::reduce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Unchanged,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<T>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

#[derive(Debug)]
pub enum StoreRequest<S: Store> {
    Dispatch {
        action: S::Action,
        respond_to: Response<S::State>,
    },
    Snapshot {
        respond_to: Response<S::State>,
    },
    Shutdown,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct StoreActor<S: Store> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    store: S,
    publisher: watch::Sender<S::State>,
}

impl<S: Store> StoreActor<S> {
    pub fn new(buffer_size: usize, store: S) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, state) = watch::channel(store.snapshot());
        let actor = Self {
            receiver,
            store,
            publisher,
        };
        let client = StoreClient::new(sender, state);
        (actor, client)
    }

    /// Main actor loop.
    ///
    /// A changed state is published to every subscriber before the
    /// dispatching caller gets its answer.
    #[instrument(name = "store_actor", skip(self), fields(store = S::NAME))]
    pub async fn run(mut self) {
        info!("Store starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { action, respond_to } => {
                    debug!(?action, "Processing dispatch");
                    let state = match self.store.reduce(action) {
                        Transition::Changed => {
                            let state = self.store.snapshot();
                            self.publisher.send_replace(state.clone());
                            state
                        }
                        Transition::Unchanged => self.publisher.borrow().clone(),
                    };
                    let _ = respond_to.send(state);
                }
                StoreRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(self.publisher.borrow().clone());
                }
                StoreRequest::Shutdown => {
                    info!("Store shutting down");
                    break;
                }
            }
        }

        info!("Store stopped");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct StoreClient<S: Store> {
    sender: mpsc::Sender<StoreRequest<S>>,
    state: watch::Receiver<S::State>,
}

impl<S: Store> Clone for StoreClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            state: self.state.clone(),
        }
    }
}

impl<S: Store> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>, state: watch::Receiver<S::State>) -> Self {
        Self { sender, state }
    }

    pub async fn dispatch(&self, action: S::Action) -> Result<S::State, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn snapshot(&self) -> Result<S::State, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    /// Last published state, without a round trip to the actor.
    pub fn current(&self) -> S::State {
        self.state.borrow().clone()
    }

    /// Registers a new observer. Dropping the receiver unsubscribes it.
    pub fn subscribe(&self) -> watch::Receiver<S::State> {
        let mut observer = self.state.clone();
        observer.borrow_and_update();
        observer
    }

    pub async fn shutdown(&self) -> Result<(), FrameworkError> {
        self.sender
            .send(StoreRequest::Shutdown)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
