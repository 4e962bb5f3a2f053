//! Dresser drawers with mutual exclusion.

use bevy::prelude::*;

use crate::core::SmoothTranslation;
use crate::world::{vec3, DrawerConfig};

/// Target position and board flag for one drawer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerState {
    pub target: Vec3,
    /// Set on every click of this drawer, read by the docking animator
    pub board_animating: bool,
}

/// All drawers of the dresser.
///
/// At most one drawer is open at a time: opening one closes every other open
/// drawer inside the same call.
#[derive(Resource, Debug, Clone)]
pub struct DrawerBank {
    drawers: Vec<DrawerState>,
    open_x: f32,
    closed_x: Vec<f32>,
    open_threshold: f32,
}

impl DrawerBank {
    pub fn new(config: &DrawerConfig) -> Self {
        Self {
            drawers: config
                .closed
                .iter()
                .map(|&p| DrawerState {
                    target: vec3(p),
                    board_animating: false,
                })
                .collect(),
            open_x: config.open_x,
            closed_x: config.closed.iter().map(|p| p.0).collect(),
            open_threshold: config.open_threshold,
        }
    }

    pub fn len(&self) -> usize {
        self.drawers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawers.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&DrawerState> {
        self.drawers.get(slot)
    }

    /// Whether the drawer's target is at the open position.
    pub fn is_open(&self, slot: usize) -> bool {
        self.drawers
            .get(slot)
            .is_some_and(|d| d.target.x >= self.open_threshold)
    }

    /// Apply a click on a drawer and return whether it is now heading out.
    ///
    /// A closed drawer opens and closes every other open drawer; an open
    /// drawer closes. Either way its board starts animating.
    pub fn click(&mut self, slot: usize) -> Option<bool> {
        if slot >= self.drawers.len() {
            return None;
        }

        let opened = if self.is_open(slot) {
            self.drawers[slot].target.x = self.closed_x[slot];
            false
        } else {
            self.drawers[slot].target.x = self.open_x;
            for other in 0..self.drawers.len() {
                if other != slot && self.is_open(other) {
                    self.drawers[other].target.x = self.closed_x[other];
                }
            }
            true
        };

        self.drawers[slot].board_animating = true;
        Some(opened)
    }
}

/// Links a drawer mesh to its slot in the bank.
#[derive(Component, Debug, Clone, Copy)]
pub struct DrawerSlot(pub usize);

/// Copy bank targets onto the drawer easing components.
pub fn sync_drawer_targets(
    bank: Res<DrawerBank>,
    mut drawers: Query<(&DrawerSlot, &mut SmoothTranslation)>,
) {
    if !bank.is_changed() {
        return;
    }

    for (slot, mut smooth) in drawers.iter_mut() {
        if let Some(state) = bank.get(slot.0) {
            smooth.target = state.target;
        }
    }
}
