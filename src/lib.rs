//! # Portfolio View
//!
//! View-state logic for a personal portfolio page, kept apart from any
//! particular rendering environment.
//!
//! The core is the [`ThemeController`], which reconciles three inputs into the
//! rendered light/dark mode:
//!
//! - an explicit preference persisted under `"portfolio-theme"` in a
//!   [`PreferenceStore`]
//! - the environment's ambient preference, read from an [`AmbientSignal`]
//! - live ambient changes, delivered through a [`Subscription`]
//!
//! The explicit preference always wins. Ambient values are rendered only when
//! nothing explicit is stored, and they are never persisted.
//!
//! ## Quick start
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use portfolio_view::{ColorMode, ManualAmbient, MemoryStore, RecordingSurface, ThemeController};
//!
//! let ambient = ManualAmbient::new(true);
//! let theme = Rc::new(RefCell::new(ThemeController::new(
//!     MemoryStore::new(),
//!     RecordingSurface::new(),
//! )));
//! let _subscription = ThemeController::attach(&theme, &ambient);
//! assert_eq!(theme.borrow().current(), ColorMode::Dark);
//!
//! ambient.set(false);
//! assert_eq!(theme.borrow().current(), ColorMode::Light);
//!
//! theme.borrow_mut().toggle();
//! ambient.set(true);
//! assert_eq!(theme.borrow().current(), ColorMode::Dark);
//! ```
//!
//! The remaining modules cover the page's other stateful pieces: contact form
//! validation ([`contact`]), notifications ([`notify`]), the mobile menu and
//! skill tabs ([`nav`]) and scroll-position predicates ([`scroll`]).

pub mod config;
pub mod contact;
pub mod nav;
pub mod notify;
pub mod scroll;
pub mod storage;
pub mod surface;
pub mod theme;

pub use config::{ConfigError, ThemeConfig, DEFAULT_STORAGE_KEY};
pub use contact::{ContactForm, ContactFormError, ValidContact};
pub use nav::{CategoryTabs, MobileMenu};
pub use notify::{Notification, NotificationKind, NotificationSlot};
pub use storage::{FileStore, MemoryStore, PreferenceStore, StoreError};
pub use surface::{RecordingSurface, RenderSurface};
pub use theme::{
    reconcile_ambient, reset_ambient_detector, set_ambient_detector, AmbientSignal, ColorMode,
    ManualAmbient, OsAmbient, Subscription, ThemeController, ThemePreference, ThemeSource,
    ToggleLabel, UnknownColorMode,
};
