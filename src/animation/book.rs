//! About-me book: the cover swings open on hover and reveals a text panel.

use std::time::Duration;

use bevy::prelude::*;

use crate::core::{ease_toward, BookClosed, BookOpened};
use crate::world::BookConfig;

/// Cover animation and panel timing.
#[derive(Resource, Debug, Clone)]
pub struct BookState {
    pub open: bool,
    pub angle: f32,
    pub target: f32,
    open_angle: f32,
    rate: f32,
    /// Counts down from the hover to showing the panel
    reveal: Option<Timer>,
    reveal_delay: Duration,
}

impl BookState {
    pub fn new(config: &BookConfig) -> Self {
        Self {
            open: false,
            angle: 0.0,
            target: 0.0,
            open_angle: config.open_angle,
            rate: config.rate,
            reveal: None,
            reveal_delay: Duration::from_millis(config.reveal_delay_ms),
        }
    }

    /// Start opening. Returns false if the book is already open.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.target = self.open_angle;
        self.reveal = Some(Timer::new(self.reveal_delay, TimerMode::Once));
        true
    }

    pub fn close(&mut self) {
        self.open = false;
        self.target = 0.0;
        self.reveal = None;
    }

    /// Advance the cover; returns true on the frame the panel should appear.
    pub fn step(&mut self, dt: Duration) -> bool {
        self.angle = ease_toward(self.angle, self.target, self.rate, dt.as_secs_f32());

        let Some(timer) = self.reveal.as_mut() else {
            return false;
        };
        timer.tick(dt);
        if timer.finished() {
            self.reveal = None;
            return true;
        }
        false
    }
}

/// The hinged cover mesh.
#[derive(Component, Debug, Clone, Copy)]
pub struct BookCover;

/// Ease the cover and announce when the about-me panel is due.
pub fn animate_book(
    time: Res<Time>,
    mut book: ResMut<BookState>,
    mut closed: EventReader<BookClosed>,
    mut opened: EventWriter<BookOpened>,
    mut covers: Query<&mut Transform, With<BookCover>>,
) {
    if closed.read().count() > 0 {
        book.close();
        info!("About-me book closed");
    }

    if book.angle == book.target && book.reveal.is_none() {
        return;
    }

    if book.step(time.delta()) {
        opened.send(BookOpened);
    }

    for mut transform in covers.iter_mut() {
        transform.rotation = Quat::from_rotation_z(-book.angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> BookState {
        BookState::new(&BookConfig::default())
    }

    #[test]
    fn open_is_idempotent_while_open() {
        let mut book = book();
        assert!(book.open());
        assert!(!book.open());
        book.close();
        assert!(book.open());
    }

    #[test]
    fn panel_appears_after_delay_once() {
        let mut book = book();
        book.open();
        let frame = Duration::from_millis(16);

        let mut shown = 0;
        let mut frames_until_shown = None;
        for i in 0..30 {
            if book.step(frame) {
                shown += 1;
                frames_until_shown.get_or_insert(i + 1);
            }
        }
        assert_eq!(shown, 1);
        // 100 ms at 16 ms per frame.
        assert_eq!(frames_until_shown, Some(7));
    }

    #[test]
    fn closing_cancels_pending_panel_and_folds_cover() {
        let mut book = book();
        book.open();
        book.step(Duration::from_millis(16));
        book.close();

        for _ in 0..120 {
            assert!(!book.step(Duration::from_millis(16)));
        }
        assert!(book.angle.abs() < 1e-3);
    }
}
