//! Idle-blur tracker
//!
//! Observes pointer movement over a host region, reports region-local
//! coordinates, and flips an idle flag once no qualifying movement has been
//! seen for the configured delay.
//!
//! Everything tied to a single attachment (region handle, state, the pending
//! timer) lives in one [`Attachment`] value. Detaching drops it, which aborts
//! the timer, so there is no exit path that leaves a live timer behind.
//!
//! Host regions are only queried while the tracker's lock is released, and
//! every notification carries a sequence number taken under that lock. The
//! dispatcher drops anything older than what it already delivered, so the
//! observer's last frame always matches the tracker's latest transition.

use crate::capture::input::types::PointerMove;
use crate::capture::region::Region;
use crate::tracker::config::TrackerConfig;
use crate::tracker::error::{TrackerError, TrackerResult};
use crate::tracker::state::{IdleState, Snapshot, TimerToken};
use crate::tracker::timer::IdleTimer;
use parking_lot::{Mutex as ParkingMutex, ReentrantMutex};
use std::cell::Cell;
use std::sync::{Arc, Weak};
use tokio::runtime::Handle;

/// Receives every `(position, idle)` transition.
///
/// Called without the tracker's state lock held, so an observer may call
/// back into the tracker.
pub trait Observer: Send + Sync {
    fn notify(&self, snapshot: Snapshot);
}

impl<F> Observer for F
where
    F: Fn(Snapshot) + Send + Sync,
{
    fn notify(&self, snapshot: Snapshot) {
        self(snapshot)
    }
}

/// Serializes delivery and discards out-of-date frames.
///
/// Re-entrant so an observer that feeds the tracker from inside `notify`
/// does not deadlock.
struct Dispatcher {
    observer: Box<dyn Observer>,
    delivered: ReentrantMutex<Cell<u64>>,
}

impl Dispatcher {
    fn deliver(&self, seq: u64, snapshot: Snapshot) {
        let last = self.delivered.lock();
        if seq <= last.get() {
            tracing::debug!("Dropping stale notification (seq={}, delivered={})", seq, last.get());
            return;
        }
        last.set(seq);
        self.observer.notify(snapshot);
    }
}

struct Attachment {
    id: u64,
    region: Weak<dyn Region>,
    state: IdleState,
    timer: IdleTimer,
}

#[derive(Default)]
struct Inner {
    attachment: Option<Attachment>,
    attach_count: u64,
    notify_seq: u64,
}

impl Inner {
    fn next_seq(&mut self) -> u64 {
        self.notify_seq += 1;
        self.notify_seq
    }
}

pub struct IdleBlurTracker {
    config: TrackerConfig,
    runtime: Handle,
    inner: Arc<ParkingMutex<Inner>>,
    dispatcher: Arc<Dispatcher>,
}

impl IdleBlurTracker {
    /// Create an inert tracker.
    ///
    /// Must be called from within a tokio runtime; timers are spawned on it
    /// even when pointer events arrive from other threads.
    pub fn new(config: TrackerConfig, observer: impl Observer + 'static) -> TrackerResult<Self> {
        config.validate()?;
        let runtime = Handle::try_current().map_err(|e| {
            TrackerError::ConfigurationError(format!("Idle tracker needs a tokio runtime: {}", e))
        })?;

        Ok(Self {
            config,
            runtime,
            inner: Arc::new(ParkingMutex::new(Inner::default())),
            dispatcher: Arc::new(Dispatcher {
                observer: Box::new(observer),
                delivered: ReentrantMutex::new(Cell::new(0)),
            }),
        })
    }

    /// Begin observing `region`.
    ///
    /// Any previous attachment is torn down first. If the handle is dead or
    /// the region has no bounds the tracker simply stays detached.
    pub fn attach(&self, region: Weak<dyn Region>) {
        let available = region.upgrade().and_then(|r| r.bounding_rect()).is_some();

        let mut guard = self.inner.lock();
        let previous = guard.attachment.take();

        if !available {
            tracing::debug!("Attach target unavailable, tracker stays inert");
            drop(guard);
            drop(previous);
            return;
        }

        guard.attach_count += 1;
        let mut attachment = Attachment {
            id: guard.attach_count,
            region,
            state: IdleState::new(self.config.arm_on_attach),
            timer: IdleTimer::new(self.runtime.clone()),
        };

        if self.config.arm_on_attach {
            let token = attachment.state.arm();
            self.arm_timer(&mut attachment, token);
        }

        tracing::info!(
            "Idle tracker attached (id={}, delay={}ms, arm_on_attach={})",
            attachment.id,
            self.config.idle_delay_ms,
            self.config.arm_on_attach
        );
        guard.attachment = Some(attachment);
        drop(guard);
        drop(previous);
    }

    /// Stop observing. Safe to call repeatedly or before `attach`.
    pub fn detach(&self) {
        let previous = self.inner.lock().attachment.take();
        if let Some(attachment) = previous {
            tracing::info!("Idle tracker detached (id={})", attachment.id);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.inner.lock().attachment.is_some()
    }

    /// Current state, or `None` while detached
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.inner
            .lock()
            .attachment
            .as_ref()
            .map(|a| a.state.snapshot())
    }

    pub fn is_idle(&self) -> bool {
        self.snapshot().is_some_and(|s| s.idle)
    }

    pub fn has_pending_timer(&self) -> bool {
        self.inner
            .lock()
            .attachment
            .as_ref()
            .is_some_and(|a| a.state.pending_timer().is_some() && a.timer.is_pending())
    }

    /// Feed one pointer-move notification from the host.
    ///
    /// Ignored while detached, when the region has gone away, or when the
    /// point falls outside the region's current bounds.
    pub fn handle_pointer_move(&self, event: &PointerMove) {
        let Some((id, region)) = self
            .inner
            .lock()
            .attachment
            .as_ref()
            .map(|a| (a.id, a.region.clone()))
        else {
            return;
        };

        let Some(bounds) = region.upgrade().and_then(|r| r.bounding_rect()) else {
            tracing::debug!("Region unavailable, dropping pointer move");
            return;
        };

        if !bounds.contains(event.client_x, event.client_y) {
            tracing::trace!(
                "Pointer ({}, {}) outside region, ignored",
                event.client_x,
                event.client_y
            );
            return;
        }

        let position = bounds.to_local(event.client_x, event.client_y);
        let (seq, snapshot) = {
            let mut guard = self.inner.lock();
            let inner = &mut *guard;
            // Detached or re-attached while the region was being queried
            let Some(attachment) = inner.attachment.as_mut().filter(|a| a.id == id) else {
                return;
            };
            let (snapshot, token) = attachment.state.on_pointer_move(position);
            self.arm_timer(attachment, token);
            (inner.next_seq(), snapshot)
        };

        self.dispatcher.deliver(seq, snapshot);
    }

    fn arm_timer(&self, attachment: &mut Attachment, token: TimerToken) {
        let inner = Arc::downgrade(&self.inner);
        let dispatcher = self.dispatcher.clone();
        let id = attachment.id;

        attachment
            .timer
            .reschedule(self.config.idle_delay(), move || async move {
                if let Some(inner) = inner.upgrade() {
                    expire(&inner, &dispatcher, id, token);
                }
            });
    }
}

impl Drop for IdleBlurTracker {
    fn drop(&mut self) {
        self.detach();
    }
}

fn expire(inner: &ParkingMutex<Inner>, dispatcher: &Dispatcher, id: u64, token: TimerToken) {
    let (seq, snapshot) = {
        let mut guard = inner.lock();
        let inner = &mut *guard;
        let Some(attachment) = inner.attachment.as_mut().filter(|a| a.id == id) else {
            return;
        };
        match attachment.state.on_timer_expired(token) {
            Some(snapshot) => (inner.next_seq(), snapshot),
            None => return,
        }
    };

    tracing::debug!("Idle delay elapsed, blurring (id={})", id);
    dispatcher.deliver(seq, snapshot);
}
