//! Start screen and control hints.

use std::time::Duration;

use bevy::picking::PickingBehavior;
use bevy::prelude::*;

use crate::core::RoomState;
use crate::text::{RoomFonts, Typewriter, TypewriterEntry, TypewriterText};
use crate::world::RoomConfig;

/// Marker for start screen UI entities.
#[derive(Component)]
pub struct IntroUi;

/// Marker for the control hints shown while exploring.
#[derive(Component)]
pub struct HintsUi;

/// Set up the start screen with the typed welcome lines.
pub fn setup_intro(mut commands: Commands, config: Res<RoomConfig>, fonts: Res<RoomFonts>) {
    let root = commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            IntroUi,
        ))
        .id();

    let Some(font) = fonts.text_font(36.0) else {
        return;
    };

    let interval = Duration::from_millis(config.text.intro_interval_ms);
    let entries: Vec<_> = config
        .text
        .intro
        .iter()
        .map(|line| {
            TypewriterEntry::new(line.text.clone())
                .with_delay(Duration::from_millis(line.delay_ms))
        })
        .collect();

    let mut targets = Vec::with_capacity(entries.len());
    commands.entity(root).with_children(|parent| {
        for _ in &entries {
            let line = parent
                .spawn((
                    Text::new(""),
                    font.clone(),
                    TextColor(Color::srgb(0.95, 0.95, 0.95)),
                    Node {
                        margin: UiRect::bottom(Val::Px(12.0)),
                        ..default()
                    },
                ))
                .id();
            targets.push(line);
        }

        parent.spawn(TypewriterText::new(Typewriter::new(entries, interval), targets));
    });
}

/// Leave the start screen on a primary click or Enter.
pub fn intro_input(
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<RoomState>>,
) {
    if mouse.just_pressed(MouseButton::Left) || keyboard.just_pressed(KeyCode::Enter) {
        info!("Entering the room");
        next_state.set(RoomState::Exploring);
    }
}

/// Clean up start screen entities. Any running typewriter goes with them.
pub fn cleanup_intro(mut commands: Commands, query: Query<Entity, With<IntroUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Static control hints in the bottom-right corner.
pub fn setup_hints(mut commands: Commands, config: Res<RoomConfig>, fonts: Res<RoomFonts>) {
    let Some(font) = fonts.text_font(16.0) else {
        return;
    };

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(20.0),
                bottom: Val::Px(20.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::FlexEnd,
                ..default()
            },
            PickingBehavior::IGNORE,
            HintsUi,
        ))
        .with_children(|parent| {
            for hint in &config.text.hints {
                parent.spawn((
                    Text::new(hint.clone()),
                    font.clone(),
                    TextColor(Color::srgb(0.85, 0.85, 0.85)),
                ));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;
    use crate::text::FontStatus;

    fn app(status: FontStatus) -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<RoomState>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(RoomConfig::default())
            .insert_resource(RoomFonts {
                handle: Handle::default(),
                status,
            })
            .add_systems(OnEnter(RoomState::Start), setup_intro)
            .add_systems(OnExit(RoomState::Start), cleanup_intro)
            .add_systems(Update, intro_input.run_if(in_state(RoomState::Start)));
        app.world_mut()
            .resource_mut::<NextState<RoomState>>()
            .set(RoomState::Start);
        app.update();
        app
    }

    fn count<C: Component>(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, With<C>>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn intro_types_each_line() {
        let mut app = app(FontStatus::Ready);
        assert_eq!(count::<IntroUi>(&mut app), 1);

        let driver = app
            .world_mut()
            .query::<&TypewriterText>()
            .single(app.world());
        assert_eq!(driver.targets.len(), 2);
        assert_eq!(driver.typewriter.entries()[0].text, "Welcome to my portfolio,");
    }

    #[test]
    fn missing_font_skips_text() {
        let mut app = app(FontStatus::Failed);
        assert_eq!(count::<IntroUi>(&mut app), 1);
        assert_eq!(count::<TypewriterText>(&mut app), 0);
        assert_eq!(count::<Text>(&mut app), 0);
    }

    #[test]
    fn enter_leaves_the_start_screen() {
        let mut app = app(FontStatus::Ready);
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Enter);
        app.update();
        app.update();

        assert_eq!(
            *app.world().resource::<State<RoomState>>().get(),
            RoomState::Exploring
        );
        assert_eq!(count::<IntroUi>(&mut app), 0);
        assert_eq!(count::<TypewriterText>(&mut app), 0);
    }
}
