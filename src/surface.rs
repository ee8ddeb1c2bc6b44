//! The rendered surface the theme is applied to.

use crate::theme::{ColorMode, ToggleLabel};

/// A document-like target exposing the dark-mode flag and the toggle control.
pub trait RenderSurface {
    fn set_dark_mode(&mut self, enabled: bool);

    fn set_toggle_label(&mut self, label: ToggleLabel);
}

impl<T: RenderSurface + ?Sized> RenderSurface for &mut T {
    fn set_dark_mode(&mut self, enabled: bool) {
        (**self).set_dark_mode(enabled);
    }

    fn set_toggle_label(&mut self, label: ToggleLabel) {
        (**self).set_toggle_label(label);
    }
}

/// A headless surface that remembers what was applied to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingSurface {
    dark_mode: bool,
    label: ToggleLabel,
    applied: usize,
}

impl RecordingSurface {
    /// A fresh surface: light, with the default "Dark" label.
    pub fn new() -> Self {
        Self {
            dark_mode: false,
            label: ToggleLabel::for_rendered(ColorMode::Light),
            applied: 0,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    pub fn mode(&self) -> ColorMode {
        ColorMode::from_dark(self.dark_mode)
    }

    pub fn label(&self) -> ToggleLabel {
        self.label
    }

    /// Number of dark-mode flag writes received.
    pub fn applied(&self) -> usize {
        self.applied
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for RecordingSurface {
    fn set_dark_mode(&mut self, enabled: bool) {
        self.dark_mode = enabled;
        self.applied += 1;
    }

    fn set_toggle_label(&mut self, label: ToggleLabel) {
        self.label = label;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_tracks_state() {
        let mut surface = RecordingSurface::new();
        assert_eq!(surface.mode(), ColorMode::Light);

        surface.set_dark_mode(true);
        surface.set_toggle_label(ToggleLabel::for_rendered(ColorMode::Dark));

        assert!(surface.is_dark());
        assert_eq!(surface.label().text, "Light");
        assert_eq!(surface.applied(), 1);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn apply<R: RenderSurface>(mut target: R) {
            target.set_dark_mode(true);
        }

        let mut surface = RecordingSurface::new();
        apply(&mut surface);
        assert!(surface.is_dark());
    }
}
