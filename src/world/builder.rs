//! Room construction from the configuration table.
//!
//! Geometry is plain data placed once. Every hotspot is registered in the
//! interaction table as it is spawned.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_6};

use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;

use super::data::{vec3, RoomConfig};
use super::geometry::*;
use super::lights::{DarkGlow, ShowWhen, ToggleLight, ToggleTint};
use super::materials::MaterialRegistry;
use crate::animation::{Ball, BookCover, DisplayBoard, DrawerSlot, HingeLeaf, HingeSide};
use crate::core::{PointerKind, SmoothTranslation};
use crate::interaction::{InteractionTable, RoomAction, ToggleFlag};

/// Glow strength of hover and click hints.
const HINT_GLOW: f32 = 0.5;

/// Light intensities in lumens.
const LAMP_LUMENS: f32 = 200_000.0;
const LAMP_GLOW_LUMENS: f32 = 8_000.0;
const LAPTOP_LUMENS: f32 = 40_000.0;
const SCREEN_GLOW_LUMENS: f32 = 8_000.0;
const SWITCH_GLOW_LUMENS: f32 = 2_000.0;
const BULB_LUMENS: f32 = 15_000.0;

/// Everything needed to place room pieces.
pub struct RoomBuilder<'w, 's, 'a> {
    pub commands: &'a mut Commands<'w, 's>,
    pub meshes: &'a mut Assets<Mesh>,
    pub materials: MaterialRegistry<'a>,
    pub table: &'a mut InteractionTable,
}

impl RoomBuilder<'_, '_, '_> {
    fn cuboid(&mut self, color: &str, size: Vec3, position: Vec3) -> Entity {
        let material = self.materials.get(color);
        spawn_box(self.commands, self.meshes, material, size, position)
    }

    /// A box whose material is owned by the entity so it can glow or tint.
    fn unique_cuboid(&mut self, color: &str, size: Vec3, position: Vec3) -> Entity {
        let material = self.materials.unique(color);
        spawn_box(self.commands, self.meshes, material, size, position)
    }

    fn child(&mut self, parent: Entity, child: Entity) {
        self.commands.entity(parent).add_child(child);
    }

    fn hotspot(&mut self, entity: Entity, kind: PointerKind, action: RoomAction) {
        self.table.register(entity, kind, action);
    }

    /// Emissive hint shown while every flag is off.
    fn dark_glow(&mut self, entity: Entity, color: &str, when_all_off: Vec<ToggleFlag>) {
        let color = self.materials.palette().color(color).to_linear() * HINT_GLOW;
        self.commands.entity(entity).insert(DarkGlow {
            when_all_off,
            color,
        });
    }

    fn tint(&mut self, entity: Entity, flag: ToggleFlag, on: &str, off: &str) {
        let palette = self.materials.palette();
        let tint = ToggleTint {
            flag,
            on: palette.color(on),
            off: palette.color(off),
        };
        self.commands.entity(entity).insert(tint);
    }

    fn light(&mut self, color: &str, position: Vec3, range: f32, toggle: ToggleLight) -> Entity {
        let color = self.materials.palette().color(color);
        spawn_toggle_light(self.commands, position, color, range, toggle)
    }
}

/// Build the whole room.
pub fn build_room(builder: &mut RoomBuilder, config: &RoomConfig) {
    setup_environment(builder);
    build_shell(builder);
    build_desk(builder, config);
    build_dresser(builder, config);
    build_boards(builder, config);
    build_ball(builder, config);
    build_windows(builder);
    build_lamp(builder);
    build_switch_and_lights(builder);
    build_bookshelf(builder, config);

    info!(
        "Room built with {} interaction handlers",
        builder.table.len()
    );
}

/// Ambient fill and a dim moonlight through the windows.
fn setup_environment(builder: &mut RoomBuilder) {
    builder.commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
    });

    builder.commands.spawn((
        DirectionalLight {
            color: Color::srgb(0.7, 0.7, 0.75),
            illuminance: 1500.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -FRAC_PI_3,
            FRAC_PI_6,
            0.0,
        )),
        RoomGeometry,
    ));
}

/// Ground plane, room floor and the two walls.
fn build_shell(builder: &mut RoomBuilder) {
    let ground = builder.cuboid("floor", Vec3::new(200.0, 0.01, 200.0), Vec3::new(0.0, -0.1, 0.0));
    builder.commands.entity(ground).insert(NotShadowCaster);

    builder.cuboid("lightBeige", Vec3::new(5.1, 0.1, 5.1), Vec3::ZERO);

    // Back wall, leaving the window opening clear.
    let back = [
        ((-1.62, 0.9), 1.85),
        ((-1.65, 2.45), 1.8),
        ((-1.62, 4.075), 1.85),
        ((1.675, 0.9), 1.75),
        ((1.675, 2.45), 1.75),
        ((1.675, 4.075), 1.75),
        ((0.0, 0.9), 1.75),
        ((0.0, 4.075), 1.75),
    ];
    for ((x, y), width) in back {
        builder.cuboid("darkBlue", Vec3::new(width, 1.75, 0.1), Vec3::new(x, y, -2.5));
    }

    // Left wall, same layout along z.
    let left = [
        (-1.62, 0.9),
        (-1.62, 2.45),
        (-1.62, 4.075),
        (1.675, 0.9),
        (1.675, 2.45),
        (1.675, 4.075),
        (0.0, 0.9),
        (0.0, 4.075),
    ];
    for (z, y) in left {
        builder.cuboid("darkBlue", Vec3::new(0.1, 1.75, 1.75), Vec3::new(-2.5, y, z));
    }
}

/// Desk and the laptop with its link tiles.
fn build_desk(builder: &mut RoomBuilder, config: &RoomConfig) {
    builder.cuboid("beige", Vec3::new(1.0, 0.1, 1.6), Vec3::new(-2.0, 1.0, -1.7));
    for (x, z) in [(-2.4, -2.4), (-2.4, -0.95), (-1.55, -2.4), (-1.55, -0.95)] {
        builder.cuboid("beige", Vec3::new(0.1, 1.0, 0.1), Vec3::new(x, 0.5, z));
    }

    let laptop = spawn_pivot(
        builder.commands,
        Transform::from_xyz(-1.6, 1.06, -1.7).with_rotation(Quat::from_rotation_y(-FRAC_PI_6)),
    );

    let base = builder.cuboid("silver", Vec3::new(0.5, 0.02, 0.5), Vec3::ZERO);
    builder.child(laptop, base);

    // The lid is hinged open at 120 degrees around z.
    let lid_rotation = Quat::from_rotation_z(2.0 * FRAC_PI_3);
    let lid = builder.unique_cuboid("lightBlue", Vec3::new(0.5, 0.02, 0.5), Vec3::ZERO);
    builder
        .commands
        .entity(lid)
        .insert(Transform::from_xyz(-0.35, 0.22, 0.0).with_rotation(lid_rotation));
    builder.tint(lid, ToggleFlag::Laptop, "silver", "lightBlue");
    builder.dark_glow(lid, "orange", vec![ToggleFlag::Laptop]);
    builder.hotspot(lid, PointerKind::Over, RoomAction::PowerLaptop);
    builder.child(laptop, lid);

    let screen = spawn_pivot(
        builder.commands,
        Transform::from_xyz(-0.34, 0.23, 0.0).with_rotation(lid_rotation),
    );
    builder.child(laptop, screen);

    let background = builder.unique_cuboid("black", Vec3::new(0.42, 0.02, 0.45), Vec3::ZERO);
    builder.tint(background, ToggleFlag::Laptop, "trueWhite", "black");
    builder.child(screen, background);

    let tile_count = config.social_links.len().max(1) as f32;
    for (index, link) in config.social_links.iter().enumerate() {
        // Tiles are spread evenly across the screen's depth.
        let z = (index as f32 + 0.5) / tile_count * 0.4 - 0.2;
        let tile = builder.cuboid(&link.color, Vec3::new(0.15, 0.01, 0.15), Vec3::new(0.0, -0.02, z));
        builder
            .commands
            .entity(tile)
            .insert((Visibility::Hidden, ShowWhen(ToggleFlag::Laptop)));
        builder.hotspot(tile, PointerKind::Click, RoomAction::OpenSocialLink(index));
        builder.child(screen, tile);
    }

    let glow = builder.light(
        "orange",
        Vec3::new(-0.35, 0.22, 0.0),
        0.5,
        ToggleLight {
            flag: ToggleFlag::Laptop,
            lit_when_on: false,
            intensity: SCREEN_GLOW_LUMENS,
        },
    );
    builder.child(laptop, glow);

    let light = builder.light(
        "white",
        Vec3::new(-0.34, 0.3, 0.0),
        3.0,
        ToggleLight {
            flag: ToggleFlag::Laptop,
            lit_when_on: true,
            intensity: LAPTOP_LUMENS,
        },
    );
    builder.child(laptop, light);
}

/// Dresser body and its four sliding drawers.
fn build_dresser(builder: &mut RoomBuilder, config: &RoomConfig) {
    let drawers = &config.drawers;

    builder.cuboid("darkBrown", Vec3::new(0.1, 2.0, 1.498), Vec3::new(-2.4, 1.0, 1.8));
    builder.cuboid("darkBrown", Vec3::new(1.5, 2.0, 0.1), Vec3::new(-1.8, 1.0, 1.1));
    builder.cuboid("darkBrown", Vec3::new(1.5, 2.0, 0.1), Vec3::new(-1.8, 1.0, 2.499));
    builder.cuboid("darkBrown", Vec3::new(1.5, 0.1, 1.5), Vec3::new(-1.8, 1.95, 1.799));
    builder.cuboid("darkBrown", Vec3::new(0.5, 0.2, 1.5), Vec3::new(-1.8, 0.15, 1.799));

    let dresser = spawn_pivot(builder.commands, Transform::from_translation(vec3(drawers.dresser)));

    for (slot, &closed) in drawers.closed.iter().enumerate() {
        let closed = vec3(closed);
        let drawer = spawn_pivot(builder.commands, Transform::from_translation(closed));
        builder
            .commands
            .entity(drawer)
            .insert((DrawerSlot(slot), SmoothTranslation::new(closed, drawers.rate)));
        builder.child(dresser, drawer);

        let parts = [
            (Vec3::new(1.4, 0.01, 1.25), Vec3::ZERO),
            (Vec3::new(0.05, 0.417, 1.4), Vec3::new(0.77, 0.2, 0.0)),
            (Vec3::new(0.05, 0.409, 1.4), Vec3::new(0.0, 0.2, 0.0)),
            (Vec3::new(1.3, 0.38, 0.05), Vec3::new(0.1, 0.18, -0.625)),
            (Vec3::new(1.3, 0.38, 0.05), Vec3::new(0.1, 0.18, 0.625)),
        ];
        for (size, position) in parts {
            let part = builder.cuboid("darkBrown", size, position);
            builder.child(drawer, part);
        }

        let handle = builder.unique_cuboid("black", Vec3::new(0.1, 0.1, 0.3), Vec3::new(0.82, 0.25, 0.0));
        builder.dark_glow(handle, "darkBlue", vec![ToggleFlag::DeskLamp]);
        builder.hotspot(handle, PointerKind::Click, RoomAction::ClickDrawer(slot));
        builder.child(drawer, handle);
    }
}

/// Project boards, stowed behind the dresser until their drawer opens.
fn build_boards(builder: &mut RoomBuilder, config: &RoomConfig) {
    let boards = &config.boards;
    let group = spawn_pivot(builder.commands, Transform::from_rotation(Quat::from_rotation_y(boards.yaw)));

    for (slot, project) in boards.projects.iter().enumerate() {
        let board = builder.cuboid(&project.color, Vec3::new(0.5, 0.5, 0.01), vec3(boards.start));
        builder.commands.entity(board).insert(DisplayBoard {
            slot,
            end: vec3(project.end),
            link: project.link.clone(),
        });
        builder.hotspot(board, PointerKind::Click, RoomAction::ClickBoard(slot));
        builder.child(group, board);
    }
}

/// Lacrosse stick leaning on the desk and its ball.
fn build_ball(builder: &mut RoomBuilder, config: &RoomConfig) {
    let stick = spawn_pivot(
        builder.commands,
        Transform::from_xyz(-2.0, 0.54, -0.55).with_rotation(Quat::from_euler(
            EulerRot::XYZ,
            2.6,
            0.0,
            -std::f32::consts::PI,
        )),
    );
    let material = builder.materials.get("darkCharcoal");
    let shaft = spawn_cylinder(builder.commands, builder.meshes, material, 0.015, 1.0, Vec3::ZERO);
    builder.child(stick, shaft);
    let head = builder.cuboid("trueWhite", Vec3::new(0.2, 0.25, 0.05), Vec3::new(0.0, -0.6, 0.0));
    builder.child(stick, head);

    let material = builder.materials.unique("trueWhite");
    let ball = spawn_sphere(
        builder.commands,
        builder.meshes,
        material,
        config.ball.radius,
        vec3(config.ball.start),
    );
    builder.commands.entity(ball).insert(Ball::default());
    builder.dark_glow(ball, "orange", vec![ToggleFlag::DeskLamp, ToggleFlag::Laptop]);
    builder.hotspot(ball, PointerKind::Over, RoomAction::LaunchBall);
}

/// Two window frames, on the back and left walls, each with two leaves.
fn build_windows(builder: &mut RoomBuilder) {
    let frames = [
        Transform::IDENTITY,
        Transform::from_xyz(0.0, 0.0, 0.05).with_rotation(Quat::from_rotation_y(FRAC_PI_2)),
    ];

    for frame_transform in frames {
        let frame = spawn_pivot(builder.commands, frame_transform);

        let posts = [
            (Vec3::new(0.05, 1.5, 0.15), Vec3::new(-0.75, 2.5, -2.5)),
            (Vec3::new(0.05, 1.5, 0.15), Vec3::new(0.775, 2.5, -2.5)),
            (Vec3::new(1.5, 0.06, 0.15), Vec3::new(0.0, 3.22, -2.5)),
        ];
        for (size, position) in posts {
            let post = builder.cuboid("white", size, position);
            builder.child(frame, post);
        }

        let sill = builder.unique_cuboid("white", Vec3::new(1.6, 0.1, 0.5), Vec3::new(0.012, 1.8, -2.5));
        builder.dark_glow(sill, "orange", vec![ToggleFlag::DeskLamp, ToggleFlag::StringLights]);
        builder.hotspot(sill, PointerKind::Over, RoomAction::ToggleWindows);
        builder.child(frame, sill);

        for (side, hinge_x, pane_x) in [
            (HingeSide::Left, -0.75, 0.375),
            (HingeSide::Right, 0.775, -0.375),
        ] {
            let leaf = spawn_pivot(builder.commands, Transform::from_xyz(hinge_x, 2.5, -2.5));
            builder.commands.entity(leaf).insert(HingeLeaf(side));
            builder.child(frame, leaf);

            let glass = builder.materials.glass("white", 0.1);
            let pane = spawn_box(
                builder.commands,
                builder.meshes,
                glass,
                Vec3::new(0.75, 1.29, 0.05),
                Vec3::new(pane_x, 0.05, 0.0),
            );
            builder.commands.entity(pane).insert(NotShadowCaster);
            builder.child(leaf, pane);

            let muntins = [
                (Vec3::new(0.05, 1.29, 0.075), Vec3::new(pane_x, 0.04, 0.0)),
                (Vec3::new(0.75, 0.05, 0.075), Vec3::new(pane_x, 0.4, 0.0)),
                (Vec3::new(0.75, 0.05, 0.075), Vec3::new(pane_x, -0.1, 0.0)),
                (Vec3::new(0.76, 0.05, 0.075), Vec3::new(pane_x, 0.67, 0.0)),
            ];
            for (size, position) in muntins {
                let muntin = builder.cuboid("white", size, position);
                builder.child(leaf, muntin);
            }
        }
    }
}

/// Desk lamp standing on the dresser.
fn build_lamp(builder: &mut RoomBuilder) {
    let lamp = spawn_pivot(builder.commands, Transform::from_xyz(-1.8, 2.47, 1.799));

    let material = builder.materials.get("silver");
    let pole = spawn_cylinder(builder.commands, builder.meshes, material, 0.02, 0.45, Vec3::new(0.0, -0.25, 0.0));
    builder.child(lamp, pole);

    let material = builder.materials.unique("white");
    let shade = builder
        .commands
        .spawn((
            Mesh3d(builder.meshes.add(Cone {
                radius: 0.25,
                height: 0.3,
            })),
            MeshMaterial3d(material),
            Transform::from_xyz(0.0, 0.3, 0.0),
            RoomGeometry,
        ))
        .id();
    builder.tint(shade, ToggleFlag::DeskLamp, "lightYellow", "white");
    builder.hotspot(shade, PointerKind::Over, RoomAction::ToggleLamp);
    builder.child(lamp, shade);

    let glow = builder.light(
        "orange",
        Vec3::new(0.0, 0.3, 0.0),
        1.0,
        ToggleLight {
            flag: ToggleFlag::DeskLamp,
            lit_when_on: false,
            intensity: LAMP_GLOW_LUMENS,
        },
    );
    builder.child(lamp, glow);

    let light = builder.light(
        "lightYellow",
        Vec3::new(0.3, 0.0, 0.1),
        6.0,
        ToggleLight {
            flag: ToggleFlag::DeskLamp,
            lit_when_on: true,
            intensity: LAMP_LUMENS,
        },
    );
    builder.child(lamp, light);
}

/// Light switch on the back wall and the string lights it controls.
fn build_switch_and_lights(builder: &mut RoomBuilder) {
    let toggle = builder.unique_cuboid("orange", Vec3::new(0.05, 0.1, 0.05), Vec3::new(1.675, 2.0, -2.39));
    builder.tint(toggle, ToggleFlag::StringLights, "white", "orange");

    let plate = builder.unique_cuboid("black", Vec3::new(0.1, 0.15, 0.1), Vec3::new(1.675, 2.0, -2.45));
    builder.tint(plate, ToggleFlag::StringLights, "white", "black");
    builder.hotspot(plate, PointerKind::Over, RoomAction::ToggleStringLights);

    builder.light(
        "orange",
        Vec3::new(1.675, 2.0, -2.3),
        0.3,
        ToggleLight {
            flag: ToggleFlag::StringLights,
            lit_when_on: false,
            intensity: SWITCH_GLOW_LUMENS,
        },
    );

    // Bulbs hang along the top of both walls, alternating in height.
    let back = (0..9).map(|i| Vec3::new(-2.0 + i as f32 * 0.5, 0.0, -2.35));
    let left = (0..8).map(|i| Vec3::new(-2.35, 0.0, -1.5 + i as f32 * 0.5));
    for (i, mut position) in back.chain(left).enumerate() {
        position.y = if i % 2 == 0 { 3.6 } else { 3.5 };

        let material = builder.materials.unique("white");
        let bulb = spawn_sphere(builder.commands, builder.meshes, material, 0.06, position);
        builder.tint(bulb, ToggleFlag::StringLights, "lightYellow", "white");

        if i % 2 == 0 {
            builder.light(
                "lightYellow",
                position,
                5.0,
                ToggleLight {
                    flag: ToggleFlag::StringLights,
                    lit_when_on: true,
                    intensity: BULB_LUMENS,
                },
            );
        }
    }
}

/// Bookshelf, a cactus and the about-me book.
fn build_bookshelf(builder: &mut RoomBuilder, config: &RoomConfig) {
    builder.cuboid("beige", Vec3::new(0.05, 0.6, 3.0), Vec3::new(-2.45, 4.0, 0.0));
    builder.cuboid("beige", Vec3::new(0.4, 0.06, 3.0), Vec3::new(-2.33, 4.3, 0.0));
    builder.cuboid("beige", Vec3::new(0.4, 0.06, 3.0), Vec3::new(-2.33, 3.68, 0.0));
    builder.cuboid("beige", Vec3::new(0.4, 0.6, 0.05), Vec3::new(-2.33, 4.0, 1.475));
    builder.cuboid("beige", Vec3::new(0.4, 0.6, 0.05), Vec3::new(-2.33, 4.0, -1.475));

    for (z, color) in [(1.35, "darkRed"), (1.2, "lightGreen"), (1.12, "darkGreen"), (0.96, "lightBlue")] {
        builder.cuboid(color, Vec3::new(0.2, 0.3, 0.08), Vec3::new(-2.33, 3.86, z));
    }

    let material = builder.materials.get("darkOrange");
    spawn_cylinder(builder.commands, builder.meshes, material, 0.09, 0.12, Vec3::new(-2.33, 3.7, -1.2));
    let material = builder.materials.get("darkGreen");
    spawn_cylinder(builder.commands, builder.meshes, material, 0.06, 0.29, Vec3::new(-2.33, 3.8, -1.2));

    let book = spawn_pivot(
        builder.commands,
        Transform::from_translation(vec3(config.book.position))
            .with_rotation(Quat::from_rotation_y(FRAC_PI_2)),
    );

    let pages = builder.cuboid("white", Vec3::new(0.5, 0.05, 0.5), Vec3::ZERO);
    builder.hotspot(pages, PointerKind::Over, RoomAction::OpenBook);
    builder.child(book, pages);

    let back_cover = builder.cuboid("silver", Vec3::new(0.5, 0.02, 0.5), Vec3::new(0.0, -0.03, 0.0));
    builder.child(book, back_cover);

    // The cover rotates around its spine on the +x edge.
    let hinge = spawn_pivot(builder.commands, Transform::from_xyz(0.25, 0.03, 0.0));
    builder.commands.entity(hinge).insert(BookCover);
    builder.child(book, hinge);

    let cover = builder.unique_cuboid("silver", Vec3::new(0.5, 0.02, 0.5), Vec3::new(-0.25, 0.0, 0.0));
    builder.dark_glow(cover, "orange", vec![ToggleFlag::StringLights, ToggleFlag::DeskLamp]);
    builder.hotspot(cover, PointerKind::Over, RoomAction::OpenBook);
    builder.child(hinge, cover);
}
