//! Virtual bulb — tracks the state a real RGBW group would end up in.

use std::sync::{Mutex, MutexGuard, PoisonError};

use pushlight_domain::light::{Group, LightCommand};

/// What the LEDs are currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    White,
    Color(u8),
}

/// Observable state of the simulated group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulbState {
    pub powered: bool,
    /// Group selected by the last `on` or `white_mode` command.
    pub selected: Option<Group>,
    pub brightness: u8,
    pub mode: ColorMode,
}

impl Default for BulbState {
    fn default() -> Self {
        Self {
            powered: false,
            selected: None,
            brightness: 100,
            mode: ColorMode::White,
        }
    }
}

impl BulbState {
    /// Apply a command the way the bridge does.
    ///
    /// Brightness and hue are ignored until a group has been selected.
    pub fn apply(&mut self, command: LightCommand) {
        match command {
            LightCommand::On(group) => {
                self.powered = true;
                self.selected = Some(group);
            }
            LightCommand::WhiteMode(group) => {
                self.selected = Some(group);
                self.mode = ColorMode::White;
            }
            LightCommand::Brightness(pct) if self.selected.is_some() => {
                self.brightness = pct.min(100);
            }
            LightCommand::Hue(hue) if self.selected.is_some() => {
                self.mode = ColorMode::Color(hue);
            }
            LightCommand::Brightness(_) | LightCommand::Hue(_) => {}
        }
    }
}

/// A simulated bulb group with a command log.
#[derive(Default)]
pub struct VirtualBulb {
    state: Mutex<BulbState>,
    history: Mutex<Vec<LightCommand>>,
}

impl VirtualBulb {
    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> BulbState {
        *lock(&self.state)
    }

    /// Every command received so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<LightCommand> {
        lock(&self.history).clone()
    }

    /// Record and apply a command, returning the resulting state.
    pub fn apply(&self, command: LightCommand) -> BulbState {
        lock(&self.history).push(command);
        let mut state = lock(&self.state);
        state.apply(command);
        *state
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
