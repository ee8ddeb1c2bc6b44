//! Theme state for the portfolio page.
//!
//! This module provides:
//!
//! - [`ColorMode`]: Light or dark
//! - [`ThemePreference`] / [`ThemeSource`]: The preference behind the rendered mode
//! - [`ToggleLabel`]: Icon and text of the theme toggle control
//! - [`ThemeController`]: Resolves, applies and persists the active mode
//! - [`AmbientSignal`]: The environment's light/dark preference, with
//!   [`ManualAmbient`] and [`OsAmbient`] implementations

mod ambient;
mod controller;
mod mode;

pub use ambient::{
    reset_ambient_detector, set_ambient_detector, AmbientSignal, ManualAmbient, OsAmbient,
    Subscription,
};
pub use controller::{reconcile_ambient, ThemeController};
pub use mode::{ColorMode, ThemePreference, ThemeSource, ToggleLabel, UnknownColorMode};
