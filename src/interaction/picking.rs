//! Forward mesh picking events into room interaction events.

use bevy::picking::events::{Click, Over, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

use crate::core::{InteractEvent, PointerKind};

/// Pointer entered a mesh.
pub fn forward_pointer_over(trigger: Trigger<Pointer<Over>>, mut events: EventWriter<InteractEvent>) {
    events.send(InteractEvent {
        target: trigger.entity(),
        kind: PointerKind::Over,
    });
}

/// Primary-button click on a mesh.
pub fn forward_pointer_click(
    trigger: Trigger<Pointer<Click>>,
    mut events: EventWriter<InteractEvent>,
) {
    if trigger.event().event.button != PointerButton::Primary {
        return;
    }
    events.send(InteractEvent {
        target: trigger.entity(),
        kind: PointerKind::Click,
    });
}
