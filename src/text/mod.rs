//! Text module - typewriter reveal and the room font.

mod fonts;
mod plugin;
mod typewriter;

pub use fonts::{FontStatus, RoomFonts};
pub use plugin::TextPlugin;
pub use typewriter::{
    run_typewriters, EntryCompleted, Typewriter, TypewriterCue, TypewriterEntry, TypewriterText,
};
