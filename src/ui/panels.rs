//! About-me panel and project captions.

use std::time::Duration;

use bevy::picking::PickingBehavior;
use bevy::prelude::*;

use crate::core::{BookClosed, BookOpened, DrawerToggled};
use crate::text::{RoomFonts, Typewriter, TypewriterText};
use crate::world::RoomConfig;

/// Root of the about-me panel.
#[derive(Component)]
pub struct AboutPanel;

/// The panel's close button.
#[derive(Component)]
pub struct CloseAboutButton;

/// Title of the project whose drawer is open.
#[derive(Component, Debug)]
pub struct ProjectCaption {
    pub slot: usize,
}

const BUTTON_IDLE: Color = Color::srgb(0.15, 0.15, 0.2);
const BUTTON_HOVER: Color = Color::srgb(0.25, 0.25, 0.3);
const BUTTON_PRESSED: Color = Color::srgb(0.3, 0.3, 0.35);

/// Spawn a text node typed out by its own driver child.
fn spawn_typed_text(
    parent: &mut ChildBuilder,
    text: &str,
    font: TextFont,
    interval: Duration,
    node: Node,
) {
    let target = parent
        .spawn((Text::new(""), font, TextColor(Color::srgb(0.95, 0.95, 0.95)), node))
        .id();
    parent.spawn(TypewriterText::new(
        Typewriter::single(text, interval),
        vec![target],
    ));
}

/// Show the about-me panel when the book has opened.
pub fn show_about_panel(
    mut commands: Commands,
    mut opened: EventReader<BookOpened>,
    config: Res<RoomConfig>,
    fonts: Res<RoomFonts>,
    existing: Query<(), With<AboutPanel>>,
) {
    if opened.read().count() == 0 || !existing.is_empty() {
        return;
    }

    let body_font = fonts.text_font(20.0);
    let button_font = fonts.text_font(20.0);
    let interval = Duration::from_millis(config.text.about_interval_ms);

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(20.0),
                right: Val::Percent(20.0),
                top: Val::Percent(15.0),
                padding: UiRect::all(Val::Px(24.0)),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.05, 0.05, 0.08, 0.9)),
            AboutPanel,
        ))
        .with_children(|parent| {
            if let Some(font) = body_font {
                spawn_typed_text(
                    parent,
                    &config.book.about_text,
                    font,
                    interval,
                    Node {
                        margin: UiRect::bottom(Val::Px(20.0)),
                        ..default()
                    },
                );
            }

            parent
                .spawn((
                    Button,
                    Node {
                        width: Val::Px(120.0),
                        height: Val::Px(40.0),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BackgroundColor(BUTTON_IDLE),
                    CloseAboutButton,
                ))
                .with_children(|button| {
                    if let Some(font) = button_font {
                        button.spawn((
                            Text::new("Close"),
                            font,
                            TextColor(Color::srgb(0.8, 0.8, 0.85)),
                        ));
                    }
                });
        });
}

/// Close button: hide the panel and fold the book.
pub fn about_panel_input(
    mut commands: Commands,
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<CloseAboutButton>),
    >,
    panels: Query<Entity, With<AboutPanel>>,
    mut closed: EventWriter<BookClosed>,
) {
    for (interaction, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = BUTTON_PRESSED.into();
                closed.send(BookClosed);
                for panel in panels.iter() {
                    commands.entity(panel).despawn_recursive();
                }
            }
            Interaction::Hovered => {
                *bg_color = BUTTON_HOVER.into();
            }
            Interaction::None => {
                *bg_color = BUTTON_IDLE.into();
            }
        }
    }
}

/// Type the project title while its drawer is open.
pub fn update_captions(
    mut commands: Commands,
    mut toggled: EventReader<DrawerToggled>,
    config: Res<RoomConfig>,
    fonts: Res<RoomFonts>,
    captions: Query<(Entity, &ProjectCaption)>,
) {
    for event in toggled.read() {
        // Opening a drawer closes every other one, so at most one caption.
        for (entity, _) in captions.iter() {
            commands.entity(entity).despawn_recursive();
        }

        if !event.opened {
            continue;
        }
        let Some(project) = config.boards.projects.get(event.slot) else {
            continue;
        };
        let Some(font) = fonts.text_font(28.0) else {
            continue;
        };
        let interval = Duration::from_millis(config.text.caption_interval_ms);

        commands
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(24.0),
                    width: Val::Percent(100.0),
                    justify_content: JustifyContent::Center,
                    ..default()
                },
                PickingBehavior::IGNORE,
                ProjectCaption { slot: event.slot },
            ))
            .with_children(|parent| {
                spawn_typed_text(parent, &project.title, font, interval, Node::default());
            });
    }
}
