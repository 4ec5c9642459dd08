//! Bootstrap sequencer.
//!
//! Joins the launch inputs (session load, biometric flag read, capability
//! probe, entry animation) through a [`BootstrapBarrier`] and hands the single
//! resulting decision to the router.
//!
//! Inputs can be pushed one at a time with [`BootstrapSequencer::signal`] or
//! resolved concurrently by [`BootstrapSequencer::run`]. Either way the router
//! is called at most once.

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use tokio::sync::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use ev_core::biometric::BiometricCapability;
use ev_core::bootstrap::{BootstrapBarrier, BootstrapPhase, BootstrapSignal, RoutingDecision};
use ev_core::ports::{BiometricProbePort, RouterPort};

use crate::session_store::SessionStore;
use crate::usecases::biometric::BiometricPreference;

pub struct BootstrapSequencer {
    session_store: Arc<SessionStore>,
    preference: Arc<BiometricPreference>,
    probe: Arc<dyn BiometricProbePort>,
    router: Arc<dyn RouterPort>,
    barrier: Mutex<BootstrapBarrier>,
}

impl BootstrapSequencer {
    pub fn new(
        session_store: Arc<SessionStore>,
        preference: Arc<BiometricPreference>,
        probe: Arc<dyn BiometricProbePort>,
        router: Arc<dyn RouterPort>,
    ) -> Self {
        Self {
            session_store,
            preference,
            probe,
            router,
            barrier: Mutex::new(BootstrapBarrier::new()),
        }
    }

    /// Resolve every input concurrently and route once the barrier is satisfied.
    ///
    /// `animation` completes when the entry animation has finished playing.
    /// Returns the decision, or `None` if the sequencer was unmounted first.
    /// Dropping the returned future drops any input still in flight.
    pub async fn run<'a, A>(&'a self, animation: A) -> Option<RoutingDecision>
    where
        A: Future<Output = ()> + Send + 'a,
    {
        let span = info_span!("usecase.bootstrap_sequencer.run");

        async move {
            let mut inputs: FuturesUnordered<BoxFuture<'a, BootstrapSignal>> =
                FuturesUnordered::new();
            inputs.push(self.resolve_session().boxed());
            inputs.push(self.resolve_biometric_enabled().boxed());
            inputs.push(self.resolve_capability().boxed());
            inputs.push(
                async move {
                    animation.await;
                    BootstrapSignal::AnimationFinished
                }
                .boxed(),
            );

            while let Some(signal) = inputs.next().await {
                if let Some(decision) = self.signal(signal).await {
                    return Some(decision);
                }
                match self.phase().await {
                    BootstrapPhase::Pending => {}
                    BootstrapPhase::Decided(decision) => return Some(decision),
                    BootstrapPhase::Abandoned => {
                        info!("launch screen unmounted before a decision was made");
                        return None;
                    }
                }
            }

            self.barrier.lock().await.decision()
        }
        .instrument(span)
        .await
    }

    /// Feed one input into the barrier.
    ///
    /// Returns the decision on the call that completes the join; the router is
    /// invoked exactly then. Every other call, including calls after a
    /// decision or after [`unmount`](Self::unmount), is a no-op.
    pub async fn signal(&self, signal: BootstrapSignal) -> Option<RoutingDecision> {
        let decision = {
            let mut barrier = self.barrier.lock().await;
            let decision = barrier.apply(signal);
            if decision.is_none() {
                debug!(?signal, phase = ?barrier.phase(), "bootstrap signal recorded");
            }
            decision
        };

        if let Some(decision) = decision {
            info!(?decision, "bootstrap decided");
            self.router.replace_root(decision.destination());
        }
        decision
    }

    /// Entry animation finished playing.
    pub async fn animation_finished(&self) -> Option<RoutingDecision> {
        self.signal(BootstrapSignal::AnimationFinished).await
    }

    /// Launch screen torn down. Late inputs become no-ops.
    pub async fn unmount(&self) -> bool {
        self.barrier.lock().await.abandon()
    }

    pub async fn phase(&self) -> BootstrapPhase {
        self.barrier.lock().await.phase()
    }

    async fn resolve_session(&self) -> BootstrapSignal {
        // load() already maps read/decode failures to "absent"
        let present = self.session_store.load().await.is_some();
        BootstrapSignal::SessionLoaded { present }
    }

    async fn resolve_biometric_enabled(&self) -> BootstrapSignal {
        BootstrapSignal::BiometricEnabledResolved(self.preference.is_enabled_or_default().await)
    }

    async fn resolve_capability(&self) -> BootstrapSignal {
        let capability = match self.probe.check_support().await {
            Ok(capability) => capability,
            Err(err) => {
                warn!(error = %err, "biometric probe failed, treating as unsupported");
                BiometricCapability::unsupported()
            }
        };
        BootstrapSignal::CapabilityResolved(capability)
    }
}
