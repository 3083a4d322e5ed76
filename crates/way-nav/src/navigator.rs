//! Session controller.
//!
//! A [`Navigator`] owns at most one navigation session. Entering a destination
//! is split into [`Navigator::begin`], which returns a self-contained
//! [`DiscoveryJob`], and [`Navigator::complete`], which applies the job's
//! result only if its session is still the active one. Leaving or entering
//! another destination in between turns the result stale.
//!
//! Every state change is published as an `Option<SessionSnapshot>` on a
//! watch channel (`None` while no session is active).

use std::sync::Arc;

use tokio::sync::watch;
use way_assets::{AssetError, AssetStore};
use way_core::{Destination, DiscoveryState, NavError, SessionId, SessionSnapshot};

use crate::discover::{Discoverer, Discovery};
use crate::prefetch;
use crate::stepper::{Stepper, Transition};

/// Discovery for one session, detached from the navigator so it can be
/// awaited without holding a borrow on it.
#[derive(Debug)]
pub struct DiscoveryJob<S> {
    session: SessionId,
    destination: Destination,
    discoverer: Discoverer,
    store: Arc<S>,
}

impl<S: AssetStore> DiscoveryJob<S> {
    #[must_use]
    pub const fn session(&self) -> SessionId {
        self.session
    }

    #[must_use]
    pub const fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Probe the store for the route.
    pub async fn run(self) -> Discovered {
        let discovery = self.discoverer.run(&*self.store, &self.destination).await;
        Discovered {
            session: self.session,
            discovery,
        }
    }
}

/// A finished discovery tagged with the session it was started for.
#[derive(Debug, Clone)]
pub struct Discovered {
    pub session: SessionId,
    pub discovery: Discovery,
}

/// What [`Navigator::complete`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The active session settled into this state.
    Applied(DiscoveryState),
    /// The originating session is gone; the result was dropped.
    Stale,
}

#[derive(Debug)]
struct Session {
    id: SessionId,
    destination: Option<Destination>,
    stepper: Stepper,
}

/// Owns the active navigation session and drives it.
#[derive(Debug)]
pub struct Navigator<S> {
    store: Arc<S>,
    discoverer: Discoverer,
    last_id: u64,
    active: Option<Session>,
    snapshots: watch::Sender<Option<SessionSnapshot>>,
}

impl<S: AssetStore> Navigator<S> {
    pub fn new(store: S, discoverer: Discoverer) -> Self {
        Self::with_shared_store(Arc::new(store), discoverer)
    }

    pub fn with_shared_store(store: Arc<S>, discoverer: Discoverer) -> Self {
        let (snapshots, _) = watch::channel(None);
        Self {
            store,
            discoverer,
            last_id: 0,
            active: None,
            snapshots,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    #[must_use]
    pub const fn discoverer(&self) -> &Discoverer {
        &self.discoverer
    }

    /// Receive a snapshot after every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<SessionSnapshot>> {
        self.snapshots.subscribe()
    }

    /// Start a new session, replacing any active one.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::DestinationMissing`] when `destination` is absent
    /// or empty. The session is still created, in the `failed` state.
    pub fn begin(&mut self, destination: Option<&str>) -> Result<DiscoveryJob<S>, NavError> {
        self.last_id += 1;
        let id = SessionId(self.last_id);

        let destination = match Destination::from_param(destination) {
            Ok(destination) => destination,
            Err(error) => {
                tracing::warn!(session = %id, "navigation started without a destination");
                self.active = Some(Session {
                    id,
                    destination: None,
                    stepper: Stepper::failed(),
                });
                self.publish();
                return Err(error);
            }
        };

        tracing::info!(session = %id, %destination, "navigation session started");
        self.active = Some(Session {
            id,
            destination: Some(destination.clone()),
            stepper: Stepper::loading(),
        });
        self.publish();

        Ok(DiscoveryJob {
            session: id,
            destination,
            discoverer: self.discoverer.clone(),
            store: Arc::clone(&self.store),
        })
    }

    /// Apply a discovery result if its session is still active.
    pub fn complete(&mut self, done: Discovered) -> Completion {
        let Some(session) = self.active.as_mut().filter(|s| s.id == done.session) else {
            tracing::debug!(session = %done.session, "discarding discovery for an inactive session");
            return Completion::Stale;
        };

        let state = session.stepper.settle(done.discovery.sequence);
        tracing::debug!(session = %session.id, %state, "discovery applied");
        self.prefetch_upcoming();
        self.publish();
        Completion::Applied(state)
    }

    /// Begin, discover and complete in one call.
    ///
    /// # Errors
    ///
    /// [`NavError::DestinationMissing`] without a destination and
    /// [`NavError::NoRouteFound`] when discovery finds no step. In both cases
    /// the session stays active so front-ends can show its terminal state.
    pub async fn enter(&mut self, destination: Option<&str>) -> Result<SessionSnapshot, NavError> {
        let job = self.begin(destination)?;
        let target = job.destination().clone();
        let done = job.run().await;

        match self.complete(done) {
            Completion::Applied(DiscoveryState::Ready) => {
                self.snapshot().ok_or(NavError::DestinationMissing)
            }
            Completion::Applied(_) | Completion::Stale => Err(NavError::NoRouteFound {
                destination: target.to_string(),
            }),
        }
    }

    /// Tear down the active session. Pending discoveries become stale.
    pub fn leave(&mut self) {
        if let Some(session) = self.active.take() {
            tracing::info!(session = %session.id, "navigation session ended");
            self.publish();
        }
    }

    pub fn advance(&mut self) -> Transition {
        self.transition(Stepper::advance)
    }

    pub fn retreat(&mut self) -> Transition {
        self.transition(Stepper::retreat)
    }

    pub fn restart(&mut self) -> Transition {
        self.transition(Stepper::restart)
    }

    /// Mark the current step's asset as loaded.
    ///
    /// Returns `false` when there is no current step. A snapshot is only
    /// published when the flag actually flips.
    pub fn mark_asset_ready(&mut self) -> bool {
        let Some(session) = self.active.as_mut() else {
            return false;
        };
        let was_ready = session.stepper.cursor().asset_ready();
        let has_step = session.stepper.mark_asset_ready();
        if has_step && !was_ready {
            self.publish();
        }
        has_step
    }

    /// Load the current step's asset, then mark it ready.
    ///
    /// A failed load still marks the asset ready so the front-end stops
    /// waiting; the error is returned for display. `None` when there is no
    /// current step.
    pub async fn load_current(&mut self) -> Option<Result<u64, AssetError>> {
        let step = self.active.as_ref()?.stepper.current()?.clone();
        let result = self.store.fetch(&step.locator).await;
        if let Err(error) = &result {
            tracing::warn!(index = step.index, %error, "failed to load step asset");
        }
        self.mark_asset_ready();
        Some(result)
    }

    fn transition(&mut self, apply: fn(&mut Stepper) -> Transition) -> Transition {
        let Some(session) = self.active.as_mut() else {
            return Transition::Unavailable;
        };
        let outcome = apply(&mut session.stepper);
        match outcome {
            Transition::Moved { from, to } => {
                tracing::debug!(session = %session.id, from, to, "cursor moved");
                self.prefetch_upcoming();
                self.publish();
            }
            Transition::Reset => self.publish(),
            Transition::Unchanged | Transition::Unavailable => {}
        }
        outcome
    }

    fn prefetch_upcoming(&self) {
        if let Some(step) = self
            .active
            .as_ref()
            .and_then(|s| s.stepper.upcoming())
            .cloned()
        {
            prefetch::spawn(&self.store, step);
        }
    }

    /// Current view of the active session.
    #[must_use]
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.active.as_ref().map(|session| {
            let stepper = &session.stepper;
            let cursor = stepper.cursor();
            let ready = cursor.discovery_state() == DiscoveryState::Ready;
            SessionSnapshot {
                session: session.id,
                destination: session.destination.clone(),
                state: cursor.discovery_state(),
                position: cursor.position(),
                total: stepper.total(),
                step_number: if ready { cursor.position() + 1 } else { 0 },
                last_direction: cursor.last_direction(),
                asset_ready: cursor.asset_ready(),
                at_destination: stepper.at_destination(),
                current: stepper.current().cloned(),
                upcoming: stepper.upcoming().cloned(),
            }
        })
    }

    /// Id of the active session.
    #[must_use]
    pub fn active_session(&self) -> Option<SessionId> {
        self.active.as_ref().map(|s| s.id)
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.snapshot());
    }
}
