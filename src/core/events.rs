//! Events used for cross-system communication.
//!
//! Picking observers, UI buttons and animators never call each other
//! directly: they exchange these events so each system stays testable in a
//! headless `App`.

use bevy::prelude::*;

/// Which pointer interaction reached a hotspot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Pointer entered the mesh.
    Over,
    /// Primary button click on the mesh.
    Click,
}

/// Sent when the pointer interacts with a scene entity.
///
/// The dispatcher looks the pair up in the interaction table and runs the
/// registered room action.
#[derive(Event, Debug, Clone, Copy)]
pub struct InteractEvent {
    /// Entity that was hovered or clicked
    pub target: Entity,
    pub kind: PointerKind,
}

/// Sent when an external URL should be opened in a new browsing context.
#[derive(Event, Debug, Clone)]
pub struct OpenLinkEvent {
    pub url: String,
}

/// Sent after a drawer click has been applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct DrawerToggled {
    /// Drawer slot, 0 is the top drawer
    pub slot: usize,
    /// Whether the drawer is now heading out
    pub opened: bool,
}

/// Sent when the book has been opened by hovering it.
#[derive(Event, Debug, Clone, Copy)]
pub struct BookOpened;

/// Sent when the about-me panel asks the book to close.
#[derive(Event, Debug, Clone, Copy)]
pub struct BookClosed;
