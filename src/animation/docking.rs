//! Project display boards docking in and out with their drawers.

use bevy::prelude::*;

use super::drawers::DrawerBank;
use crate::world::{vec3, BoardConfig};

/// Shared docking parameters for every board.
#[derive(Resource, Debug, Clone)]
pub struct Docking {
    /// Stowed position shared by all boards
    pub start: Vec3,
    /// Per-frame lerp fraction toward the docked position
    pub open_fraction: f32,
    /// Per-frame lerp fraction back to the stowed position
    pub close_fraction: f32,
    /// Height above `start` a board must reach before clicks count
    pub click_margin: f32,
}

impl Docking {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            start: vec3(config.start),
            open_fraction: config.open_fraction,
            close_fraction: config.close_fraction,
            click_margin: config.click_margin,
        }
    }

    /// One frame of board motion. Fast snap out, slow glide back.
    pub fn step(&self, position: Vec3, end: Vec3, drawer_open: bool) -> Vec3 {
        if drawer_open {
            position.lerp(end, self.open_fraction)
        } else {
            position.lerp(self.start, self.close_fraction)
        }
    }

    /// Boards hidden inside the dresser can still be picked through the
    /// geometry in front of them, so only a visibly raised board is clickable.
    pub fn accepts_click(&self, position: Vec3) -> bool {
        position.y > self.start.y + self.click_margin
    }
}

/// A project board linked 1:1 to a drawer.
#[derive(Component, Debug, Clone)]
pub struct DisplayBoard {
    pub slot: usize,
    /// Docked position while the drawer is open
    pub end: Vec3,
    pub link: String,
}

/// Move every board whose drawer was clicked.
///
/// The drawer's open/closed state picks the direction. The animator does not
/// detect arrival: a board keeps easing (a no-op once docked) until the next
/// drawer click restarts it.
pub fn dock_boards(
    docking: Res<Docking>,
    bank: Res<DrawerBank>,
    mut boards: Query<(&DisplayBoard, &mut Transform)>,
) {
    for (board, mut transform) in boards.iter_mut() {
        let animating = bank.get(board.slot).is_some_and(|d| d.board_animating);
        if !animating {
            continue;
        }

        let open = bank.is_open(board.slot);
        let next = docking.step(transform.translation, board.end, open);
        if next != transform.translation {
            transform.translation = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docking() -> Docking {
        Docking::new(&BoardConfig::default())
    }

    #[test]
    fn open_drawer_snaps_board_out() {
        let docking = docking();
        let end = Vec3::new(0.0, 2.1, 0.5);
        let next = docking.step(docking.start, end, true);
        let expected = docking.start.lerp(end, 0.2);
        assert!(next.distance(expected) < 1e-6);
    }

    #[test]
    fn closing_is_slower_than_opening() {
        let docking = docking();
        let end = Vec3::new(0.2, 1.7, 0.5);
        let out = docking.step(docking.start, end, true);
        let back = docking.step(end, end, false);
        assert!(out.distance(docking.start) > back.distance(end));
    }

    #[test]
    fn stowed_board_ignores_clicks() {
        let docking = docking();
        assert!(!docking.accepts_click(docking.start));
        assert!(!docking.accepts_click(docking.start + Vec3::Y * 0.05));
        assert!(docking.accepts_click(docking.start + Vec3::Y * 0.06));
    }

    #[test]
    fn boards_converge_on_their_dock() {
        let docking = docking();
        let end = Vec3::new(0.2, 0.9, 0.5);
        let mut position = docking.start;
        for _ in 0..120 {
            position = docking.step(position, end, true);
        }
        assert!(position.distance(end) < 1e-3);
        assert!(docking.accepts_click(position));
    }

    #[test]
    fn board_follows_its_drawer() {
        let mut app = App::new();
        let config = crate::world::RoomConfig::default();
        app.insert_resource(Docking::new(&config.boards));
        app.insert_resource(DrawerBank::new(&config.drawers));
        app.add_systems(Update, dock_boards);

        let end = Vec3::new(0.0, 2.1, 0.5);
        let start = vec3(config.boards.start);
        let board = app
            .world_mut()
            .spawn((
                DisplayBoard {
                    slot: 0,
                    end,
                    link: String::new(),
                },
                Transform::from_translation(start),
            ))
            .id();

        // Untouched drawer: board stays stowed.
        app.update();
        assert_eq!(app.world().get::<Transform>(board).unwrap().translation, start);

        app.world_mut().resource_mut::<DrawerBank>().click(0);
        for _ in 0..60 {
            app.update();
        }
        let raised = app.world().get::<Transform>(board).unwrap().translation;
        assert!(raised.distance(end) < 1e-3);

        app.world_mut().resource_mut::<DrawerBank>().click(0);
        for _ in 0..300 {
            app.update();
        }
        let stowed = app.world().get::<Transform>(board).unwrap().translation;
        assert!(stowed.distance(start) < 1e-3);
    }
}
