use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::catalog::CatalogLoader;
use crate::domain::aggregates::Product;
use crate::domain::value_objects::ProductId;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogState {
    #[default]
    Loading,
    Loaded(Arc<Vec<Product>>),
}

impl CatalogState {
    pub fn is_loading(&self) -> bool { matches!(self, Self::Loading) }

    pub fn products(&self) -> &[Product] {
        match self {
            Self::Loading => &[],
            Self::Loaded(products) => products,
        }
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products().iter().find(|p| p.id() == id)
    }
}

/// Publishes the catalog to every page that renders it.
#[derive(Debug)]
pub struct CatalogStore {
    state: watch::Sender<CatalogState>,
    generation: AtomicU64,
}

impl Default for CatalogStore {
    fn default() -> Self { Self::new() }
}

impl CatalogStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(CatalogState::Loading);
        Self { state, generation: AtomicU64::new(0) }
    }

    pub fn current(&self) -> CatalogState { self.state.borrow().clone() }

    pub fn subscribe(&self) -> watch::Receiver<CatalogState> { self.state.subscribe() }

    /// Marks the catalog as loading and runs `loader` in the background.
    ///
    /// A load that finishes after the store is dropped, or after a newer
    /// load was started, is discarded.
    pub fn spawn_load(self: &Arc<Self>, loader: CatalogLoader) -> JoinHandle<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(CatalogState::Loading);

        let store = Arc::downgrade(self);
        tokio::spawn(async move {
            let products = loader.load().await;
            match store.upgrade() {
                Some(store) => store.finish(generation, products),
                None => debug!(generation, "catalog store gone, discarding load"),
            }
        })
    }

    fn finish(&self, generation: u64, products: Vec<Product>) {
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "superseded catalog load discarded");
            return;
        }
        info!(products = products.len(), "catalog loaded");
        self.state.send_replace(CatalogState::Loaded(Arc::new(products)));
    }
}
