// crates/thai-address-core/src/session.rs

//! # Search Session
//!
//! The stateful controller a front-end drives: it tracks whether the
//! provider finished loading, routes each submission, and publishes the
//! newest result set.
//!
//! Shared state is limited to
//! - a readiness flag that goes from `false` to `true` once,
//! - a generation counter stamping each submission,
//! - the latest published [`SearchView`].
//!
//! A submission that finishes after a newer one has already published is
//! returned to its caller but never published (last write wins).

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::SearchError;
use crate::model::AddressHit;
use crate::router::{QueryRouter, RouterConfig};
use crate::traits::AddressProvider;

/// Status line shown when a search succeeds with no hits.
pub const NO_RESULTS_MESSAGE: &str = "ไม่พบผลลัพธ์";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    Found(usize),
    NoResults,
    Failed(SearchError),
}

impl SearchStatus {
    /// The Thai status line for this state, if one is shown.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SearchStatus::Idle | SearchStatus::Found(_) => None,
            SearchStatus::NoResults => Some(NO_RESULTS_MESSAGE),
            SearchStatus::Failed(err) => Some(err.user_message()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStatus::Idle => "idle",
            SearchStatus::Found(_) => "found",
            SearchStatus::NoResults => "no_results",
            SearchStatus::Failed(_) => "failed",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, SearchStatus::Failed(_))
    }
}

/// What the front-end renders after a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchView {
    pub query: String,
    pub status: SearchStatus,
    /// Always empty when `status` is a failure.
    pub hits: Vec<AddressHit>,
}

impl SearchView {
    fn from_outcome(query: String, outcome: Result<Vec<AddressHit>, SearchError>) -> Self {
        match outcome {
            Ok(hits) if hits.is_empty() => Self {
                query,
                status: SearchStatus::NoResults,
                hits,
            },
            Ok(hits) => Self {
                query,
                status: SearchStatus::Found(hits.len()),
                hits,
            },
            Err(err) => Self {
                query,
                status: SearchStatus::Failed(err),
                hits: Vec::new(),
            },
        }
    }
}

#[derive(Debug, Default)]
struct Published {
    generation: u64,
    view: SearchView,
}

/// Front-end controller over a [`QueryRouter`].
///
/// ```rust
/// use thai_address_core::{SearchSession, SearchStatus, ThaiAddressProvider};
///
/// # futures::executor::block_on(async {
/// let session = SearchSession::new(ThaiAddressProvider::embedded());
/// session.initialize().await;
/// let view = session.submit("10330").await;
/// assert!(matches!(view.status, SearchStatus::Found(_)));
/// assert_eq!(session.view(), view);
/// # });
/// ```
#[derive(Debug)]
pub struct SearchSession<P> {
    router: QueryRouter<P>,
    ready: AtomicBool,
    init_failure: Mutex<Option<SearchError>>,
    generation: AtomicU64,
    published: Mutex<Published>,
}

impl<P: AddressProvider> SearchSession<P> {
    pub fn new(provider: P) -> Self {
        Self::with_router(QueryRouter::new(Arc::new(provider)))
    }

    pub fn with_config(provider: P, config: RouterConfig) -> Self {
        Self::with_router(QueryRouter::with_config(Arc::new(provider), config))
    }

    pub fn with_router(router: QueryRouter<P>) -> Self {
        let ready = router.provider().is_ready();
        Self {
            router,
            ready: AtomicBool::new(ready),
            init_failure: Mutex::new(None),
            generation: AtomicU64::new(0),
            published: Mutex::new(Published::default()),
        }
    }

    pub fn provider(&self) -> &P {
        self.router.provider()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Load the provider's data. Returns the readiness after the attempt.
    ///
    /// A failure is published as [`SearchError::ProviderInitFailed`] and kept:
    /// later submissions report it instead of "still loading". The session
    /// never retries on its own.
    pub async fn initialize(&self) -> bool {
        if self.is_ready() {
            return true;
        }
        match self.router.provider().initialize().await {
            Ok(()) => {
                self.ready.store(true, Ordering::Release);
                tracing::info!("search session ready");
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "address provider failed to initialize");
                let failure = SearchError::ProviderInitFailed(err.to_string());
                *lock(&self.init_failure) = Some(failure.clone());
                let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
                self.publish(
                    generation,
                    SearchView {
                        status: SearchStatus::Failed(failure),
                        ..SearchView::default()
                    },
                );
                false
            }
        }
    }

    /// Route `query` and publish the result unless a newer submission has
    /// already published.
    ///
    /// The generation number is taken when this method is called, not when
    /// the returned future is first polled.
    pub fn submit(&self, query: &str) -> impl Future<Output = SearchView> + Send + '_ {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let query = query.trim().to_owned();
        let ready = self.is_ready();

        async move {
            let outcome = match self.router.route(&query, ready).await {
                Err(SearchError::ProviderNotInitialized) => {
                    Err(lock(&self.init_failure).clone().unwrap_or(SearchError::ProviderNotInitialized))
                }
                other => other,
            };
            let view = SearchView::from_outcome(query, outcome);
            self.publish(generation, view.clone());
            view
        }
    }

    /// The latest published view.
    pub fn view(&self) -> SearchView {
        lock(&self.published).view.clone()
    }

    fn publish(&self, generation: u64, view: SearchView) {
        let mut published = lock(&self.published);
        if generation < published.generation {
            tracing::debug!(generation, newest = published.generation, "dropping stale view");
            return;
        }
        published.generation = generation;
        published.view = view;
    }
}

// The guarded values are plain data, so a poisoned lock is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
