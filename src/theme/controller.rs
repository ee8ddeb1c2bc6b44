//! Theme resolution, persistence and ambient tracking.

use std::cell::RefCell;
use std::rc::Rc;

use super::ambient::{AmbientSignal, Subscription};
use super::mode::{ColorMode, ThemePreference, ToggleLabel};
use crate::config::ThemeConfig;
use crate::storage::PreferenceStore;
use crate::surface::RenderSurface;

/// Keeps the persisted preference, the ambient preference and the rendered
/// surface consistent.
///
/// The rendered mode is always the explicit (persisted) preference when one
/// exists, otherwise the latest ambient value, otherwise the configured
/// fallback. Only [`toggle`](Self::toggle) writes to the store.
///
/// # Example
///
/// ```rust
/// use portfolio_view::{ColorMode, MemoryStore, RecordingSurface, ThemeController};
///
/// let mut theme = ThemeController::new(MemoryStore::new(), RecordingSurface::new());
/// assert_eq!(theme.initialize(Some(true)), ColorMode::Dark);
/// assert_eq!(theme.surface().label().text, "Light");
///
/// assert_eq!(theme.toggle(), ColorMode::Light);
/// assert_eq!(theme.on_ambient_change(true), ColorMode::Light);
/// ```
#[derive(Debug)]
pub struct ThemeController<S, R> {
    store: S,
    surface: R,
    config: ThemeConfig,
    rendered: ColorMode,
    ambient: Option<ColorMode>,
}

impl<S: PreferenceStore, R: RenderSurface> ThemeController<S, R> {
    pub fn new(store: S, surface: R) -> Self {
        Self::with_config(store, surface, ThemeConfig::default())
    }

    pub fn with_config(store: S, surface: R, config: ThemeConfig) -> Self {
        Self {
            store,
            surface,
            rendered: config.fallback,
            config,
            ambient: None,
        }
    }

    /// Resolves the initial mode and applies it.
    ///
    /// `prefers_dark` is the ambient signal at call time, `None` when the
    /// environment does not report one.
    pub fn initialize(&mut self, prefers_dark: Option<bool>) -> ColorMode {
        self.ambient = prefers_dark.map(ColorMode::from_dark);
        let preference = self.preference();
        let mode = preference.resolve(self.config.fallback);
        tracing::debug!(
            mode = %mode,
            source = ?preference.source,
            "initialized theme"
        );
        self.apply(mode);
        mode
    }

    /// Inverts the rendered mode and persists it as the explicit preference.
    pub fn toggle(&mut self) -> ColorMode {
        let next = self.rendered.opposite();
        self.apply(next);
        if let Err(err) = self.store.set(&self.config.storage_key, next.as_str()) {
            tracing::warn!(error = %err, mode = %next, "could not persist theme preference");
        }
        tracing::debug!(mode = %next, "toggled theme");
        next
    }

    /// Follows an ambient change unless an explicit preference is stored.
    ///
    /// Nothing is persisted here.
    pub fn on_ambient_change(&mut self, prefers_dark: bool) -> ColorMode {
        let ambient = ColorMode::from_dark(prefers_dark);
        self.ambient = Some(ambient);

        let persisted = self.read_explicit();
        let next = reconcile_ambient(persisted, ambient, self.rendered);
        if persisted.is_some() {
            tracing::debug!(ambient = %ambient, "ambient change ignored, explicit preference stored");
        } else if next != self.rendered {
            tracing::debug!(mode = %next, "following ambient preference");
            self.apply(next);
        }
        next
    }

    /// The mode currently applied to the surface.
    pub fn current(&self) -> ColorMode {
        self.rendered
    }

    /// The preference the rendered mode derives from.
    pub fn preference(&self) -> ThemePreference {
        match self.read_explicit() {
            Some(mode) => ThemePreference::explicit(mode),
            None => ThemePreference::ambient(self.ambient),
        }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn into_parts(self) -> (S, R) {
        (self.store, self.surface)
    }

    fn apply(&mut self, mode: ColorMode) {
        self.rendered = mode;
        self.surface.set_dark_mode(mode.is_dark());
        self.surface.set_toggle_label(ToggleLabel::for_rendered(mode));
    }

    /// Reads the stored preference. Storage faults and malformed values both
    /// count as "no explicit preference".
    fn read_explicit(&self) -> Option<ColorMode> {
        let key = &self.config.storage_key;
        match self.store.get(key) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(mode) => Some(mode),
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "ignoring malformed theme preference");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "theme preference unreadable");
                None
            }
        }
    }
}

impl<S, R> ThemeController<S, R>
where
    S: PreferenceStore + 'static,
    R: RenderSurface + 'static,
{
    /// Initializes a shared controller from `ambient` and subscribes it to
    /// later ambient changes.
    ///
    /// The listener holds a weak reference; once the controller is dropped
    /// notifications are ignored. Dropping the returned subscription stops
    /// ambient tracking.
    pub fn attach<A: AmbientSignal + ?Sized>(
        controller: &Rc<RefCell<Self>>,
        ambient: &A,
    ) -> Subscription {
        controller.borrow_mut().initialize(ambient.prefers_dark());

        let weak = Rc::downgrade(controller);
        ambient.subscribe(Box::new(move |prefers_dark| {
            let Some(controller) = weak.upgrade() else {
                return;
            };
            match controller.try_borrow_mut() {
                Ok(mut controller) => {
                    controller.on_ambient_change(prefers_dark);
                }
                Err(_) => {
                    tracing::warn!("ambient change delivered while theme controller is busy");
                }
            };
        }))
    }
}

/// The rendered mode after an ambient change.
///
/// An explicit preference keeps the current rendering; otherwise the new
/// ambient value is rendered.
pub fn reconcile_ambient(
    persisted: Option<ColorMode>,
    ambient: ColorMode,
    rendered: ColorMode,
) -> ColorMode {
    match persisted {
        Some(_) => rendered,
        None => ambient,
    }
}
