//! Dispatch table from (entity, pointer kind) to room actions.

use bevy::prelude::*;
use std::collections::HashMap;

use super::toggles::{ToggleFlag, ToggleStore};
use crate::animation::{Ball, BallPhysics, BookState, DisplayBoard, Docking, DrawerBank, HingeState};
use crate::core::{DrawerToggled, InteractEvent, OpenLinkEvent, PointerKind};
use crate::world::RoomConfig;

/// What a hotspot does when it is hovered or clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomAction {
    ToggleLamp,
    /// Only acts while the laptop is off
    PowerLaptop,
    ToggleStringLights,
    ClickDrawer(usize),
    ClickBoard(usize),
    LaunchBall,
    ToggleWindows,
    OpenBook,
    /// Index into the configured social links; only while the laptop is on
    OpenSocialLink(usize),
}

/// Handlers registered once during scene construction.
#[derive(Resource, Debug, Default)]
pub struct InteractionTable {
    handlers: HashMap<(Entity, PointerKind), RoomAction>,
}

impl InteractionTable {
    pub fn register(&mut self, entity: Entity, kind: PointerKind, action: RoomAction) {
        if let Some(previous) = self.handlers.insert((entity, kind), action) {
            warn!("Replaced {:?} handler {:?} on {:?}", kind, previous, entity);
        }
    }

    pub fn lookup(&self, entity: Entity, kind: PointerKind) -> Option<RoomAction> {
        self.handlers.get(&(entity, kind)).copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Run the registered action for every interaction of this frame.
#[allow(clippy::too_many_arguments)]
pub fn dispatch_interactions(
    table: Res<InteractionTable>,
    config: Res<RoomConfig>,
    docking: Res<Docking>,
    physics: Res<BallPhysics>,
    mut interactions: EventReader<InteractEvent>,
    mut toggles: ResMut<ToggleStore>,
    mut drawers: ResMut<DrawerBank>,
    mut hinge: ResMut<HingeState>,
    mut book: ResMut<BookState>,
    mut balls: Query<&mut Ball>,
    boards: Query<(&DisplayBoard, &Transform)>,
    mut links: EventWriter<OpenLinkEvent>,
    mut drawer_events: EventWriter<DrawerToggled>,
) {
    for event in interactions.read() {
        let Some(action) = table.lookup(event.target, event.kind) else {
            continue;
        };

        match action {
            RoomAction::ToggleLamp => {
                let on = toggles.interact(ToggleFlag::DeskLamp);
                debug!("Desk lamp {}", if on { "on" } else { "off" });
            }
            RoomAction::PowerLaptop => {
                if !toggles.is_on(ToggleFlag::Laptop) {
                    toggles.interact(ToggleFlag::Laptop);
                    info!("Laptop powered on");
                }
            }
            RoomAction::ToggleStringLights => {
                let on = toggles.interact(ToggleFlag::StringLights);
                debug!("String lights {}", if on { "on" } else { "off" });
            }
            RoomAction::ClickDrawer(slot) => {
                if let Some(opened) = drawers.click(slot) {
                    drawer_events.send(DrawerToggled { slot, opened });
                }
            }
            RoomAction::ClickBoard(slot) => {
                let board = boards.iter().find(|(board, _)| board.slot == slot);
                if let Some((board, transform)) = board {
                    if docking.accepts_click(transform.translation) {
                        links.send(OpenLinkEvent {
                            url: board.link.clone(),
                        });
                    }
                }
            }
            RoomAction::LaunchBall => {
                if let Ok(mut ball) = balls.get_mut(event.target) {
                    if ball.trigger(&physics) {
                        info!("Ball launched");
                    }
                }
            }
            RoomAction::ToggleWindows => {
                hinge.toggle();
            }
            RoomAction::OpenBook => {
                if book.open() {
                    info!("About-me book opened");
                }
            }
            RoomAction::OpenSocialLink(index) => {
                if !toggles.is_on(ToggleFlag::Laptop) {
                    continue;
                }
                if let Some(link) = config.social_links.get(index) {
                    links.send(OpenLinkEvent {
                        url: link.url.clone(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{init_animation_state, BallPhase};
    use crate::world::vec3;

    fn app() -> App {
        let mut app = App::new();
        app.add_event::<InteractEvent>()
            .add_event::<OpenLinkEvent>()
            .add_event::<DrawerToggled>()
            .init_resource::<InteractionTable>()
            .init_resource::<ToggleStore>()
            .insert_resource(RoomConfig::default())
            .add_systems(Startup, init_animation_state)
            .add_systems(Update, dispatch_interactions);
        app.update();
        app
    }

    fn hotspot(app: &mut App, kind: PointerKind, action: RoomAction) -> Entity {
        let entity = app.world_mut().spawn_empty().id();
        app.world_mut()
            .resource_mut::<InteractionTable>()
            .register(entity, kind, action);
        entity
    }

    fn interact(app: &mut App, target: Entity, kind: PointerKind) {
        app.world_mut().send_event(InteractEvent { target, kind });
        app.update();
    }

    fn sent_links(app: &mut App) -> Vec<String> {
        app.world_mut()
            .resource_mut::<Events<OpenLinkEvent>>()
            .drain()
            .map(|e| e.url)
            .collect()
    }

    #[test]
    fn hover_toggles_lamp() {
        let mut app = app();
        let lamp = hotspot(&mut app, PointerKind::Over, RoomAction::ToggleLamp);

        interact(&mut app, lamp, PointerKind::Over);
        assert!(app.world().resource::<ToggleStore>().is_on(ToggleFlag::DeskLamp));

        // Clicks are not registered on the lamp.
        interact(&mut app, lamp, PointerKind::Click);
        assert!(app.world().resource::<ToggleStore>().is_on(ToggleFlag::DeskLamp));

        interact(&mut app, lamp, PointerKind::Over);
        assert!(!app.world().resource::<ToggleStore>().is_on(ToggleFlag::DeskLamp));
    }

    #[test]
    fn laptop_only_powers_on() {
        let mut app = app();
        let screen = hotspot(&mut app, PointerKind::Over, RoomAction::PowerLaptop);

        interact(&mut app, screen, PointerKind::Over);
        interact(&mut app, screen, PointerKind::Over);
        assert!(app.world().resource::<ToggleStore>().is_on(ToggleFlag::Laptop));
    }

    #[test]
    fn social_links_need_a_powered_laptop() {
        let mut app = app();
        let screen = hotspot(&mut app, PointerKind::Over, RoomAction::PowerLaptop);
        let github = hotspot(&mut app, PointerKind::Click, RoomAction::OpenSocialLink(1));

        interact(&mut app, github, PointerKind::Click);
        assert!(sent_links(&mut app).is_empty());

        interact(&mut app, screen, PointerKind::Over);
        interact(&mut app, github, PointerKind::Click);
        assert_eq!(sent_links(&mut app), vec!["https://github.com/bradyrichardson"]);
    }

    #[test]
    fn drawer_clicks_are_mutually_exclusive() {
        let mut app = app();
        let top = hotspot(&mut app, PointerKind::Click, RoomAction::ClickDrawer(0));
        let third = hotspot(&mut app, PointerKind::Click, RoomAction::ClickDrawer(2));

        interact(&mut app, top, PointerKind::Click);
        interact(&mut app, third, PointerKind::Click);

        let bank = app.world().resource::<DrawerBank>();
        assert!(!bank.is_open(0));
        assert!(bank.is_open(2));

        let toggled: Vec<_> = app
            .world_mut()
            .resource_mut::<Events<DrawerToggled>>()
            .drain()
            .map(|e| (e.slot, e.opened))
            .collect();
        assert_eq!(toggled, vec![(0, true), (2, true)]);
    }

    #[test]
    fn stowed_board_click_is_a_no_op() {
        let mut app = app();
        let config = RoomConfig::default();
        let start = vec3(config.boards.start);

        let board = app
            .world_mut()
            .spawn((
                DisplayBoard {
                    slot: 1,
                    end: vec3(config.boards.projects[1].end),
                    link: config.boards.projects[1].link.clone(),
                },
                Transform::from_translation(start),
            ))
            .id();
        app.world_mut()
            .resource_mut::<InteractionTable>()
            .register(board, PointerKind::Click, RoomAction::ClickBoard(1));

        interact(&mut app, board, PointerKind::Click);
        assert!(sent_links(&mut app).is_empty());

        app.world_mut().get_mut::<Transform>(board).unwrap().translation.y = start.y + 0.5;
        interact(&mut app, board, PointerKind::Click);
        assert_eq!(
            sent_links(&mut app),
            vec!["https://github.com/bradyrichardson/turdle"]
        );
    }

    #[test]
    fn ball_hover_launches_once() {
        let mut app = app();
        let ball = app.world_mut().spawn(Ball::default()).id();
        app.world_mut()
            .resource_mut::<InteractionTable>()
            .register(ball, PointerKind::Over, RoomAction::LaunchBall);

        interact(&mut app, ball, PointerKind::Over);
        let launched = app.world().get::<Ball>(ball).unwrap().clone();
        assert_eq!(launched.phase, BallPhase::Falling);

        interact(&mut app, ball, PointerKind::Over);
        let again = app.world().get::<Ball>(ball).unwrap();
        assert_eq!(again.velocity, launched.velocity);
        assert!(again.triggered);
    }

    #[test]
    fn sill_hover_toggles_shared_hinge_target() {
        let mut app = app();
        let left_sill = hotspot(&mut app, PointerKind::Over, RoomAction::ToggleWindows);
        let right_sill = hotspot(&mut app, PointerKind::Over, RoomAction::ToggleWindows);

        interact(&mut app, left_sill, PointerKind::Over);
        assert!(app.world().resource::<HingeState>().target > 1.0);

        interact(&mut app, right_sill, PointerKind::Over);
        assert_eq!(app.world().resource::<HingeState>().target, 0.0);
    }

    #[test]
    fn unregistered_entities_are_ignored() {
        let mut app = app();
        let stray = app.world_mut().spawn_empty().id();
        interact(&mut app, stray, PointerKind::Click);
        assert!(sent_links(&mut app).is_empty());
        assert!(app.world().resource::<InteractionTable>().is_empty());
    }
}
