//! Per-object on/off flags flipped by pointer interactions.

use bevy::prelude::*;
use std::collections::HashMap;

/// Named boolean flags of the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleFlag {
    /// Desk lamp, flipped by hovering the shade
    DeskLamp,
    /// Laptop power. One combined toggle: it lights the screen and the
    /// laptop lamp together.
    Laptop,
    /// String lights, flipped by hovering the wall switch
    StringLights,
}

impl ToggleFlag {
    pub const ALL: [ToggleFlag; 3] = [
        ToggleFlag::DeskLamp,
        ToggleFlag::Laptop,
        ToggleFlag::StringLights,
    ];
}

/// Current value of every toggle flag. All flags start off.
#[derive(Resource, Debug, Clone)]
pub struct ToggleStore {
    flags: HashMap<ToggleFlag, bool>,
}

impl Default for ToggleStore {
    fn default() -> Self {
        Self {
            flags: ToggleFlag::ALL.into_iter().map(|f| (f, false)).collect(),
        }
    }
}

impl ToggleStore {
    /// Flip a flag and return its new value.
    pub fn interact(&mut self, flag: ToggleFlag) -> bool {
        let value = self.flags.entry(flag).or_insert(false);
        *value = !*value;
        *value
    }

    pub fn is_on(&self, flag: ToggleFlag) -> bool {
        self.flags.get(&flag).copied().unwrap_or(false)
    }

    /// True when every listed flag is off.
    pub fn all_off(&self, flags: &[ToggleFlag]) -> bool {
        flags.iter().all(|&f| !self.is_on(f))
    }
}
