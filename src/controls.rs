//! Presentation state: which solid and palette the user has picked.
//!
//! [`Controls`] owns the selection and turns key presses into
//! [`ControlEvent`]s. The owner reacts to `SolidChanged` by retargeting its
//! field; palette changes need no notification because every
//! [`advance`](crate::field::ParticleField::advance) reads the current mode.

use winit::keyboard::KeyCode;

use crate::config::ViewConfig;
use crate::palette::PaletteMode;
use crate::solid::Solid;

/// A change the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// The active solid changed; the field must retarget.
    SolidChanged(Solid),
    /// The active palette changed.
    PaletteChanged(PaletteMode),
    /// Pause or resume the simulation.
    TogglePause,
    /// Leave the viewer.
    Quit,
}

/// The user's current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    solid: Solid,
    palette: PaletteMode,
}

impl Controls {
    pub fn new(solid: Solid, palette: PaletteMode) -> Self {
        Self { solid, palette }
    }

    pub fn from_view_config(config: &ViewConfig) -> Self {
        Self::new(config.initial_solid, config.initial_palette)
    }

    #[inline]
    pub fn solid(&self) -> Solid {
        self.solid
    }

    #[inline]
    pub fn palette(&self) -> PaletteMode {
        self.palette
    }

    /// Cycle to the next solid ("Change Shape").
    pub fn next_solid(&mut self) -> ControlEvent {
        self.solid = self.solid.next();
        ControlEvent::SolidChanged(self.solid)
    }

    pub fn previous_solid(&mut self) -> ControlEvent {
        self.solid = self.solid.previous();
        ControlEvent::SolidChanged(self.solid)
    }

    /// Select a solid. Returns `None` if it is already active.
    pub fn set_solid(&mut self, solid: Solid) -> Option<ControlEvent> {
        if self.solid == solid {
            return None;
        }
        self.solid = solid;
        Some(ControlEvent::SolidChanged(solid))
    }

    /// Select a palette. Returns `None` if it is already active.
    pub fn set_palette(&mut self, palette: PaletteMode) -> Option<ControlEvent> {
        if self.palette == palette {
            return None;
        }
        self.palette = palette;
        Some(ControlEvent::PaletteChanged(palette))
    }

    /// Apply a key press.
    ///
    /// Space, Enter and Right cycle forward, Left cycles back. Digits 1-4
    /// pick rainbow, warm, nature and cool, in the order of the palette
    /// buttons. P pauses, Escape quits.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<ControlEvent> {
        match key {
            KeyCode::Space | KeyCode::Enter | KeyCode::ArrowRight => Some(self.next_solid()),
            KeyCode::ArrowLeft => Some(self.previous_solid()),
            KeyCode::Digit1 => self.set_palette(PaletteMode::Rainbow),
            KeyCode::Digit2 => self.set_palette(PaletteMode::Warm),
            KeyCode::Digit3 => self.set_palette(PaletteMode::Nature),
            KeyCode::Digit4 => self.set_palette(PaletteMode::Cool),
            KeyCode::KeyP => Some(ControlEvent::TogglePause),
            KeyCode::Escape => Some(ControlEvent::Quit),
            _ => None,
        }
    }

    /// Window title text, e.g. `SHIFT - Current Shape: Cube`.
    pub fn title(&self) -> String {
        format!("SHIFT - Current Shape: {}", self.solid.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_cycles_solids() {
        let mut controls = Controls::default();
        assert_eq!(
            controls.handle_key(KeyCode::Space),
            Some(ControlEvent::SolidChanged(Solid::Cube))
        );
        controls.handle_key(KeyCode::Enter);
        controls.handle_key(KeyCode::ArrowRight);
        assert_eq!(controls.solid(), Solid::Torus);
        controls.handle_key(KeyCode::Space);
        assert_eq!(controls.solid(), Solid::Sphere);
        assert_eq!(
            controls.handle_key(KeyCode::ArrowLeft),
            Some(ControlEvent::SolidChanged(Solid::Torus))
        );
    }

    #[test]
    fn test_palette_keys() {
        let mut controls = Controls::default();
        assert_eq!(controls.handle_key(KeyCode::Digit1), None);
        assert_eq!(
            controls.handle_key(KeyCode::Digit3),
            Some(ControlEvent::PaletteChanged(PaletteMode::Nature))
        );
        assert_eq!(controls.palette(), PaletteMode::Nature);
        controls.handle_key(KeyCode::Digit4);
        assert_eq!(controls.palette(), PaletteMode::Cool);
    }

    #[test]
    fn test_set_solid_reports_changes_only() {
        let mut controls = Controls::new(Solid::Cube, PaletteMode::Warm);
        assert_eq!(controls.set_solid(Solid::Cube), None);
        assert_eq!(
            controls.set_solid(Solid::Pyramid),
            Some(ControlEvent::SolidChanged(Solid::Pyramid))
        );
    }

    #[test]
    fn test_other_keys() {
        let mut controls = Controls::default();
        assert_eq!(controls.handle_key(KeyCode::KeyP), Some(ControlEvent::TogglePause));
        assert_eq!(controls.handle_key(KeyCode::Escape), Some(ControlEvent::Quit));
        assert_eq!(controls.handle_key(KeyCode::KeyZ), None);
    }

    #[test]
    fn test_title() {
        let controls = Controls::new(Solid::Torus, PaletteMode::Rainbow);
        assert_eq!(controls.title(), "SHIFT - Current Shape: Torus");
    }
}
