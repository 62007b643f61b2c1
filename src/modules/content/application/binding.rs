// src/modules/content/application/binding.rs
//
// Per-entity data bindings. A binding owns the last-fetched rows for one
// collection plus the loading/error flags, and funnels every mutation
// through the gateway followed by an unconditional re-fetch. The state
// machine is INITIAL -> LOADING -> {SUCCESS, ERROR}, with both terminal
// states able to re-enter LOADING on the next refresh.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::error;

use crate::modules::content::application::ports::outgoing::content_gateway::{
    CollectionGateway, GatewayError, ProfileGateway,
};
use crate::modules::content::application::ports::outgoing::records::ProfilePatch;
use crate::modules::content::domain::entities::{Profile, RecordId};

/// Point-in-time view of a binding's state.
#[derive(Debug, Clone)]
pub struct BindingSnapshot<T> {
    /// None until the first fetch completes successfully. A failed fetch
    /// leaves previously-loaded data untouched.
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

struct BindingState<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> Default for BindingState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// CollectionBinding
// ──────────────────────────────────────────────────────────
//

pub struct CollectionBinding<R, N, P> {
    gateway: Arc<dyn CollectionGateway<R, N, P>>,
    state: Mutex<BindingState<Vec<R>>>,
    // Each refresh takes a new generation; a fetch whose generation is no
    // longer current discards its result instead of racing the newer one.
    generation: AtomicU64,
    label: &'static str,
}

impl<R, N, P> CollectionBinding<R, N, P>
where
    R: Clone + Send + Sync + 'static,
    N: Send + 'static,
    P: Send + 'static,
{
    pub fn new(label: &'static str, gateway: Arc<dyn CollectionGateway<R, N, P>>) -> Self {
        Self {
            gateway,
            state: Mutex::new(BindingState::default()),
            generation: AtomicU64::new(0),
            label,
        }
    }

    /// Fetch the full collection and install it, unless a newer refresh
    /// started in the meantime.
    pub async fn refresh(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state
            .lock()
            .expect("binding state poisoned")
            .loading = true;

        let result = self.gateway.list().await;

        let mut state = self.state.lock().expect("binding state poisoned");
        if self.generation.load(Ordering::SeqCst) != generation {
            // Superseded; the in-flight newer fetch owns the state now.
            return;
        }

        state.loading = false;
        match result {
            Ok(rows) => {
                state.data = Some(rows);
                state.error = None;
            }
            Err(err) => {
                error!("fetching {} failed: {}", self.label, err);
                state.error = Some(err.to_string());
            }
        }
    }

    /// Create, then re-fetch. The re-fetch is sequenced strictly after the
    /// mutation response; its failure only lands in the binding state.
    pub async fn add(&self, data: N) -> Result<R, GatewayError> {
        let created = self.gateway.create(data).await?;
        self.refresh().await;
        Ok(created)
    }

    pub async fn update(&self, id: &RecordId, data: P) -> Result<R, GatewayError> {
        let updated = self.gateway.update(id, data).await?;
        self.refresh().await;
        Ok(updated)
    }

    pub async fn remove(&self, id: &RecordId) -> Result<(), GatewayError> {
        self.gateway.delete(id).await?;
        self.refresh().await;
        Ok(())
    }

    pub async fn get(&self, id: &RecordId) -> Result<R, GatewayError> {
        self.gateway.get(id).await
    }

    pub fn snapshot(&self) -> BindingSnapshot<Vec<R>> {
        let state = self.state.lock().expect("binding state poisoned");
        BindingSnapshot {
            data: state.data.clone(),
            loading: state.loading,
            error: state.error.clone(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// ProfileBinding (singleton)
// ──────────────────────────────────────────────────────────
//

pub struct ProfileBinding {
    gateway: Arc<dyn ProfileGateway>,
    state: Mutex<BindingState<Profile>>,
    generation: AtomicU64,
}

impl ProfileBinding {
    pub fn new(gateway: Arc<dyn ProfileGateway>) -> Self {
        Self {
            gateway,
            state: Mutex::new(BindingState::default()),
            generation: AtomicU64::new(0),
        }
    }

    pub async fn refresh(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state
            .lock()
            .expect("binding state poisoned")
            .loading = true;

        let result = self.gateway.get().await;

        let mut state = self.state.lock().expect("binding state poisoned");
        if self.generation.load(Ordering::SeqCst) != generation {
            return;
        }

        state.loading = false;
        match result {
            Ok(profile) => {
                state.data = Some(profile);
                state.error = None;
            }
            Err(err) => {
                error!("fetching profile failed: {}", err);
                state.error = Some(err.to_string());
            }
        }
    }

    pub async fn update(&self, data: ProfilePatch) -> Result<Profile, GatewayError> {
        let updated = self.gateway.update(data).await?;
        self.refresh().await;
        Ok(updated)
    }

    pub fn snapshot(&self) -> BindingSnapshot<Profile> {
        let state = self.state.lock().expect("binding state poisoned");
        BindingSnapshot {
            data: state.data.clone(),
            loading: state.loading,
            error: state.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    use crate::modules::content::application::ports::outgoing::records::{NewStat, StatPatch};
    use crate::modules::content::domain::entities::Stat;

    fn stat(id: &str, value: &str) -> Stat {
        Stat {
            id: RecordId::from(id),
            value: value.to_string(),
            label: "Projects".to_string(),
            order_index: 0,
        }
    }

    /// Scripted gateway: every call pops the next queued result.
    struct ScriptedGateway {
        lists: Mutex<VecDeque<Result<Vec<Stat>, GatewayError>>>,
        creates: Mutex<VecDeque<Result<Stat, GatewayError>>>,
    }

    impl ScriptedGateway {
        fn new(
            lists: Vec<Result<Vec<Stat>, GatewayError>>,
            creates: Vec<Result<Stat, GatewayError>>,
        ) -> Self {
            Self {
                lists: Mutex::new(lists.into()),
                creates: Mutex::new(creates.into()),
            }
        }
    }

    #[async_trait]
    impl CollectionGateway<Stat, NewStat, StatPatch> for ScriptedGateway {
        async fn list(&self) -> Result<Vec<Stat>, GatewayError> {
            self.lists
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected list() call")
        }

        async fn get(&self, _id: &RecordId) -> Result<Stat, GatewayError> {
            unimplemented!("not needed for binding tests")
        }

        async fn create(&self, _data: NewStat) -> Result<Stat, GatewayError> {
            self.creates
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected create() call")
        }

        async fn update(&self, _id: &RecordId, _data: StatPatch) -> Result<Stat, GatewayError> {
            unimplemented!("not needed for binding tests")
        }

        async fn delete(&self, _id: &RecordId) -> Result<(), GatewayError> {
            Ok(())
        }
    }

    /// Gateway whose list() calls block until the test releases them, so
    /// resolution order can be forced.
    struct GatedGateway {
        gates: Mutex<VecDeque<oneshot::Receiver<Result<Vec<Stat>, GatewayError>>>>,
    }

    #[async_trait]
    impl CollectionGateway<Stat, NewStat, StatPatch> for GatedGateway {
        async fn list(&self) -> Result<Vec<Stat>, GatewayError> {
            let gate = self
                .gates
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected list() call");
            gate.await.expect("gate dropped")
        }

        async fn get(&self, _id: &RecordId) -> Result<Stat, GatewayError> {
            unimplemented!()
        }

        async fn create(&self, _data: NewStat) -> Result<Stat, GatewayError> {
            unimplemented!()
        }

        async fn update(&self, _id: &RecordId, _data: StatPatch) -> Result<Stat, GatewayError> {
            unimplemented!()
        }

        async fn delete(&self, _id: &RecordId) -> Result<(), GatewayError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_initial_snapshot_is_empty() {
        let gateway = Arc::new(ScriptedGateway::new(vec![], vec![]));
        let gateway: Arc<dyn CollectionGateway<Stat, NewStat, StatPatch>> = gateway;
        let binding = CollectionBinding::new("stats", gateway);

        let snap = binding.snapshot();
        assert!(snap.data.is_none());
        assert!(!snap.loading);
        assert!(snap.error.is_none());
    }

    #[tokio::test]
    async fn test_refresh_installs_rows() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(vec![stat("st1", "10+")])], vec![]));
        let gateway: Arc<dyn CollectionGateway<Stat, NewStat, StatPatch>> = gateway;
        let binding = CollectionBinding::new("stats", gateway);

        binding.refresh().await;

        let snap = binding.snapshot();
        assert_eq!(snap.data.unwrap().len(), 1);
        assert!(!snap.loading);
        assert!(snap.error.is_none());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_stale_data() {
        let gateway = Arc::new(ScriptedGateway::new(
            vec![
                Ok(vec![stat("st1", "10+")]),
                Err(GatewayError::DatabaseError("backend down".to_string())),
            ],
            vec![],
        ));
        let gateway: Arc<dyn CollectionGateway<Stat, NewStat, StatPatch>> = gateway;
        let binding = CollectionBinding::new("stats", gateway);

        binding.refresh().await;
        binding.refresh().await;

        let snap = binding.snapshot();
        assert_eq!(snap.data.as_ref().unwrap()[0].value, "10+");
        assert!(snap.error.as_ref().unwrap().contains("backend down"));
        assert!(!snap.loading);
    }

    #[tokio::test]
    async fn test_recovery_clears_error() {
        let gateway = Arc::new(ScriptedGateway::new(
            vec![
                Err(GatewayError::DatabaseError("down".to_string())),
                Ok(vec![stat("st1", "10+")]),
            ],
            vec![],
        ));
        let gateway: Arc<dyn CollectionGateway<Stat, NewStat, StatPatch>> = gateway;
        let binding = CollectionBinding::new("stats", gateway);

        binding.refresh().await;
        assert!(binding.snapshot().error.is_some());

        binding.refresh().await;
        let snap = binding.snapshot();
        assert!(snap.error.is_none());
        assert!(snap.data.is_some());
    }

    #[tokio::test]
    async fn test_add_refetches_after_create() {
        let created = stat("st9", "500+");
        let gateway = Arc::new(ScriptedGateway::new(
            vec![Ok(vec![stat("st1", "10+"), created.clone()])],
            vec![Ok(created.clone())],
        ));
        let gateway: Arc<dyn CollectionGateway<Stat, NewStat, StatPatch>> = gateway;
        let binding = CollectionBinding::new("stats", gateway);

        let result = binding
            .add(NewStat {
                value: "500+".to_string(),
                label: "Commits".to_string(),
                order_index: 1,
            })
            .await
            .unwrap();

        assert_eq!(result.id, created.id);
        // The re-fetch ran and installed the post-write rows.
        assert_eq!(binding.snapshot().data.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_create_skips_refetch() {
        let gateway = Arc::new(ScriptedGateway::new(
            vec![],
            vec![Err(GatewayError::DatabaseError("insert failed".to_string()))],
        ));
        let gateway: Arc<dyn CollectionGateway<Stat, NewStat, StatPatch>> = gateway;
        let binding = CollectionBinding::new("stats", gateway);

        let result = binding
            .add(NewStat {
                value: "1".to_string(),
                label: "X".to_string(),
                order_index: 0,
            })
            .await;

        assert!(matches!(result, Err(GatewayError::DatabaseError(_))));
        // No list() was queued; reaching this point proves none was issued.
        assert!(binding.snapshot().data.is_none());
    }

    #[tokio::test]
    async fn test_superseded_fetch_is_discarded() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let gateway = Arc::new(GatedGateway {
            gates: Mutex::new(VecDeque::from([first_rx, second_rx])),
        });
        let gateway: Arc<dyn CollectionGateway<Stat, NewStat, StatPatch>> = gateway;
        let binding = Arc::new(CollectionBinding::new("stats", gateway));

        let first = tokio::spawn({
            let binding = Arc::clone(&binding);
            async move { binding.refresh().await }
        });
        // Let the first refresh claim its generation and block on the gate.
        tokio::task::yield_now().await;
        let second = tokio::spawn({
            let binding = Arc::clone(&binding);
            async move { binding.refresh().await }
        });
        tokio::task::yield_now().await;

        // Resolve the newer fetch first, then the stale one.
        second_tx.send(Ok(vec![stat("st2", "new")])).unwrap();
        second.await.unwrap();
        first_tx.send(Ok(vec![stat("st1", "stale")])).unwrap();
        first.await.unwrap();

        let snap = binding.snapshot();
        assert_eq!(snap.data.unwrap()[0].value, "new");
    }
}
