/// Generates the methods every store client shares: a round-trip snapshot
/// (`fetch_<name>`), the last published value (`current_<name>`),
/// `subscribe` and `shutdown`.
///
/// The client must hold its generic [`StoreClient`](crate::actor_framework::StoreClient)
/// in a field named `inner`.
#[macro_export]
macro_rules! impl_store_client {
    ($client_name:ident, $store:ty, $error:ty, $state_name:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<fetch_ $state_name>](&self) -> Result< <$store as $crate::actor_framework::Store>::State, $error> {
                    tracing::debug!("Sending request");
                    self.inner.snapshot().await.map_err(<$error>::from)
                }

                pub fn [<current_ $state_name>](&self) -> <$store as $crate::actor_framework::Store>::State {
                    self.inner.current()
                }

                /// Registers an observer; drop the receiver to unsubscribe.
                pub fn subscribe(&self) -> tokio::sync::watch::Receiver< <$store as $crate::actor_framework::Store>::State> {
                    self.inner.subscribe()
                }

                #[tracing::instrument(skip(self))]
                pub async fn shutdown(&self) -> Result<(), $error> {
                    tracing::debug!("Sending request");
                    self.inner.shutdown().await.map_err(<$error>::from)
                }
            }
        }
    };
}
