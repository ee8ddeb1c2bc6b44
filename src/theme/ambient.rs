//! Ambient (system-wide) light/dark preference signals.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

/// A source of the environment's "prefers dark" signal.
///
/// `prefers_dark` returns `None` when the environment cannot report a
/// preference. Listeners registered through `subscribe` receive every
/// subsequent change until the returned [`Subscription`] is dropped.
pub trait AmbientSignal {
    fn prefers_dark(&self) -> Option<bool>;

    fn subscribe(&self, listener: Box<dyn FnMut(bool)>) -> Subscription;
}

/// Handle for a registered listener. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Removes the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }

    /// Keeps the listener registered for as long as the signal lives.
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

type Listener = Box<dyn FnMut(bool)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    dispatching: bool,
    pending: VecDeque<bool>,
    removed_during_dispatch: Vec<u64>,
}

/// Listener list shared by the signal implementations.
///
/// Listeners may subscribe, unsubscribe or change the signal from inside a
/// notification. Values raised during a dispatch are queued and delivered to
/// every listener, in order, once the current pass finishes.
#[derive(Clone, Default)]
struct Listeners {
    registry: Rc<RefCell<Registry>>,
}

impl Registry {
    /// Moves registered listeners into the dispatch list and drops the ones
    /// unsubscribed since the last pass.
    fn absorb_into(&mut self, active: &mut Vec<(u64, Listener)>) {
        let removed = std::mem::take(&mut self.removed_during_dispatch);
        active.retain(|(id, _)| !removed.contains(id));
        active.append(&mut self.listeners);
    }
}

impl Listeners {
    fn add(&self, listener: Listener) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, listener));
            id
        };

        let weak: Weak<RefCell<Registry>> = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = weak.upgrade() {
                let mut registry = registry.borrow_mut();
                let before = registry.listeners.len();
                registry.listeners.retain(|(lid, _)| *lid != id);
                if registry.listeners.len() == before && registry.dispatching {
                    registry.removed_during_dispatch.push(id);
                }
            }
        })
    }

    fn notify(&self, value: bool) {
        {
            let mut registry = self.registry.borrow_mut();
            registry.pending.push_back(value);
            if registry.dispatching {
                return;
            }
            registry.dispatching = true;
        }

        let mut active = Vec::new();
        loop {
            let next = {
                let mut registry = self.registry.borrow_mut();
                registry.absorb_into(&mut active);
                registry.pending.pop_front()
            };
            let Some(value) = next else {
                break;
            };

            for (id, listener) in active.iter_mut() {
                if self.registry.borrow().removed_during_dispatch.contains(id) {
                    continue;
                }
                listener(value);
            }
        }

        let mut registry = self.registry.borrow_mut();
        registry.absorb_into(&mut active);
        registry.listeners = active;
        registry.dispatching = false;
    }

    fn len(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// An in-process ambient signal driven by the embedding application.
///
/// Clones share the same value and listeners, so one clone can be handed to
/// a controller while another is fed by the host's change events.
#[derive(Clone, Default)]
pub struct ManualAmbient {
    value: Rc<Cell<Option<bool>>>,
    listeners: Listeners,
}

impl ManualAmbient {
    /// A signal that does not report any preference yet.
    pub fn unsupported() -> Self {
        Self::default()
    }

    pub fn new(prefers_dark: bool) -> Self {
        let signal = Self::default();
        signal.value.set(Some(prefers_dark));
        signal
    }

    /// Updates the preference, notifying listeners if it changed.
    pub fn set(&self, prefers_dark: bool) {
        if self.value.replace(Some(prefers_dark)) != Some(prefers_dark) {
            self.listeners.notify(prefers_dark);
        }
    }

    /// Reverts to reporting no preference. Listeners are not notified.
    pub fn clear(&self) {
        self.value.set(None);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl AmbientSignal for ManualAmbient {
    fn prefers_dark(&self) -> Option<bool> {
        self.value.get()
    }

    fn subscribe(&self, listener: Box<dyn FnMut(bool)>) -> Subscription {
        self.listeners.add(listener)
    }
}

impl std::fmt::Debug for ManualAmbient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualAmbient")
            .field("value", &self.value.get())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

type AmbientDetector = fn() -> Option<bool>;

static AMBIENT_DETECTOR: Lazy<Mutex<AmbientDetector>> =
    Lazy::new(|| Mutex::new(os_ambient_detector));

/// Overrides the detector [`OsAmbient`] uses to read the system preference.
///
/// This is useful for testing or when you want to force a specific mode.
pub fn set_ambient_detector(detector: AmbientDetector) {
    let mut guard = AMBIENT_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores the operating-system detector.
pub fn reset_ambient_detector() {
    set_ambient_detector(os_ambient_detector);
}

fn detect_ambient() -> Option<bool> {
    let detector = AMBIENT_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_ambient_detector() -> Option<bool> {
    match detect_os_theme() {
        OsThemeMode::Dark => Some(true),
        OsThemeMode::Light => Some(false),
        OsThemeMode::Default => None,
    }
}

/// The operating system's light/dark preference.
///
/// The OS offers no push notification here, so hosts call [`OsAmbient::poll`]
/// from their event loop; listeners fire only when the value changed.
#[derive(Default)]
pub struct OsAmbient {
    last: Cell<Option<bool>>,
    listeners: Listeners,
}

impl OsAmbient {
    pub fn new() -> Self {
        let signal = Self::default();
        signal.last.set(detect_ambient());
        signal
    }

    /// Re-reads the system preference. Returns `true` if it changed.
    pub fn poll(&self) -> bool {
        let now = detect_ambient();
        if self.last.replace(now) == now {
            return false;
        }
        tracing::debug!(prefers_dark = ?now, "system color preference changed");
        if let Some(dark) = now {
            self.listeners.notify(dark);
        }
        true
    }
}

impl AmbientSignal for OsAmbient {
    fn prefers_dark(&self) -> Option<bool> {
        self.last.get()
    }

    fn subscribe(&self, listener: Box<dyn FnMut(bool)>) -> Subscription {
        self.listeners.add(listener)
    }
}
