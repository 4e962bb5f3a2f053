//! Room configuration table and RON loading.
//!
//! Everything the scene and the animators need as literal data lives here:
//! palette, physics constants, drawer/board layout, links and intro text.
//! The table is loaded once at startup and is read-only afterwards.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};
use std::fs;

use super::error::ConfigError;

/// Path of the optional configuration override.
pub const ROOM_CONFIG_PATH: &str = "assets/data/room.ron";

/// Convert a RON tuple into a vector.
pub fn vec3(t: (f32, f32, f32)) -> Vec3 {
    Vec3::new(t.0, t.1, t.2)
}

/// Lacrosse ball physics.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub start: (f32, f32, f32),
    pub radius: f32,
    /// Velocity given to the ball when it leaves the stick
    pub launch_velocity: (f32, f32, f32),
    pub gravity: f32,
    /// Fraction of vertical speed kept on each bounce (1 = perfect bounce)
    pub bounce_factor: f32,
    /// Fraction of horizontal speed kept on each bounce
    pub friction: f32,
    /// Impact speed at or below which the ball comes to rest
    pub rest_threshold: f32,
    /// Floor height plus ball radius
    pub floor_y: f32,
    /// Decorative spin per unit of horizontal speed
    pub spin: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            start: (-2.0, 1.02, -0.82),
            radius: 0.06,
            launch_velocity: (0.5, -1.0, 0.3),
            gravity: -9.8,
            bounce_factor: 0.6,
            friction: 0.9,
            rest_threshold: 0.1,
            floor_y: 0.105,
            spin: 2.0,
        }
    }
}

/// Dresser drawers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    /// Dresser origin in the room
    pub dresser: (f32, f32, f32),
    /// Closed local positions, top drawer first
    pub closed: Vec<(f32, f32, f32)>,
    /// Local x of an open drawer
    pub open_x: f32,
    /// Target x at or above which a drawer counts as open
    pub open_threshold: f32,
    /// Easing rate per second
    pub rate: f32,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            dresser: (-1.8, 0.5, 1.799),
            closed: vec![
                (0.0, 1.0, 0.0),
                (0.0, 0.583, 0.0),
                (0.0, 0.167, 0.0),
                (0.0, -0.25, 0.0),
            ],
            open_x: 0.6,
            open_threshold: 0.59,
            rate: 5.0,
        }
    }
}

/// One project shown on a display board.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectDef {
    pub title: String,
    pub link: String,
    /// Palette entry for the board face
    pub color: String,
    /// Docked position when the owning drawer is open
    pub end: (f32, f32, f32),
}

/// Project display boards.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Shared stowed position of every board
    pub start: (f32, f32, f32),
    /// Y rotation of the board group
    pub yaw: f32,
    /// Per-frame lerp fraction while docking out
    pub open_fraction: f32,
    /// Per-frame lerp fraction while stowing
    pub close_fraction: f32,
    /// Height above `start` a board must reach before clicks count
    pub click_margin: f32,
    /// One project per drawer, top drawer first
    pub projects: Vec<ProjectDef>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let project = |title: &str, link: &str, color: &str, end| ProjectDef {
            title: title.to_string(),
            link: link.to_string(),
            color: color.to_string(),
            end,
        };

        Self {
            start: (-1.4, 0.1, 0.4),
            yaw: std::f32::consts::FRAC_PI_4,
            open_fraction: 0.2,
            close_fraction: 0.05,
            click_margin: 0.05,
            projects: vec![
                project("LazyNotes", "https://github.com/bradyrichardson/LazyNotes", "pink", (0.0, 2.1, 0.5)),
                project("Turdl", "https://github.com/bradyrichardson/turdle", "darkGreen", (0.2, 1.7, 0.5)),
                project("Poke-vision", "https://github.com/bradyrichardson/poke-vision", "canaryYellow", (0.2, 1.3, 0.5)),
                project("ParaPal", "https://github.com/bradyrichardson/ParaPal-demo", "trueWhite", (0.2, 0.9, 0.5)),
            ],
        }
    }
}

/// Window leaves.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HingeConfig {
    pub open_angle: f32,
    pub rate: f32,
}

impl Default for HingeConfig {
    fn default() -> Self {
        Self {
            open_angle: FRAC_PI_3,
            rate: 5.0,
        }
    }
}

/// About-me book.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    pub position: (f32, f32, f32),
    pub open_angle: f32,
    pub rate: f32,
    /// Delay between the hover and the panel appearing
    pub reveal_delay_ms: u64,
    pub about_text: String,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            position: (-2.1, 3.75, 0.0),
            open_angle: FRAC_PI_2,
            rate: 10.0,
            reveal_delay_ms: 100,
            about_text: "Hi, I'm Brady Richardson!\n\n\
                I'm a software engineer with a passion for creating intuitive and \
                engaging user experiences. I work on everything from web development \
                to mobile apps to machine learning projects.\n\n\
                My resume and projects are one click away on the laptop in this room."
                .to_string(),
        }
    }
}

/// A link tile on the laptop screen.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    /// Palette entry for the tile
    pub color: String,
}

/// One typed line of the intro overlay.
#[derive(Debug, Clone, Deserialize)]
pub struct IntroLine {
    pub text: String,
    #[serde(default)]
    pub delay_ms: u64,
}

/// Typewriter text shown by the UI.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub font_path: String,
    /// Typed one after another on the start screen
    pub intro: Vec<IntroLine>,
    /// Static control hints shown while exploring
    pub hints: Vec<String>,
    pub intro_interval_ms: u64,
    pub about_interval_ms: u64,
    pub caption_interval_ms: u64,
}

impl Default for TextConfig {
    fn default() -> Self {
        let line = |text: &str, delay_ms| IntroLine {
            text: text.to_string(),
            delay_ms,
        };

        Self {
            font_path: "fonts/RobotoCondensed-Regular.ttf".to_string(),
            intro: vec![
                line("Welcome to my portfolio,", 0),
                line("please click anywhere to continue", 0),
            ],
            hints: vec![
                "Orange: Mouse over".to_string(),
                "Blue: Click".to_string(),
                "Click + drag mouse to rotate room".to_string(),
                "Scroll to zoom in/out".to_string(),
            ],
            intro_interval_ms: 50,
            about_interval_ms: 10,
            caption_interval_ms: 30,
        }
    }
}

/// The room configuration table.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    /// Named hex colors
    pub palette: HashMap<String, String>,
    pub ball: BallConfig,
    pub drawers: DrawerConfig,
    pub boards: BoardConfig,
    pub hinge: HingeConfig,
    pub book: BookConfig,
    pub social_links: Vec<SocialLink>,
    pub text: TextConfig,
}

impl Default for RoomConfig {
    fn default() -> Self {
        let palette = [
            ("trueWhite", "#ffffff"),
            ("black", "#0f1626"),
            ("beige", "#ab987a"),
            ("white", "#f5f5f5"),
            ("gray", "#aaaaaa"),
            ("orange", "#E16A54"),
            ("lightOrange", "#F39E60"),
            ("darkOrange", "#9F5255"),
            ("lightBlue", "#99D1DB"),
            ("darkBlue", "#5E8FB1"),
            ("lightGreen", "#A2C579"),
            ("darkGreen", "#6F8F3F"),
            ("lightRed", "#D1605D"),
            ("darkRed", "#8F3F3F"),
            ("silver", "#818589"),
            ("lightBeige", "#F5F5DC"),
            ("lightYellow", "#FFFFC5"),
            ("pink", "#FF8DA1"),
            ("canaryYellow", "#FFEF00"),
            ("darkBrown", "#5C4033"),
            ("darkCharcoal", "#808080"),
            ("floor", "#6B6B6B"),
        ]
        .into_iter()
        .map(|(name, hex)| (name.to_string(), hex.to_string()))
        .collect();

        Self {
            palette,
            ball: BallConfig::default(),
            drawers: DrawerConfig::default(),
            boards: BoardConfig::default(),
            hinge: HingeConfig::default(),
            book: BookConfig::default(),
            social_links: vec![
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/brady-r-richardson/".to_string(),
                    color: "darkBlue".to_string(),
                },
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/bradyrichardson".to_string(),
                    color: "black".to_string(),
                },
            ],
            text: TextConfig::default(),
        }
    }
}

impl RoomConfig {
    /// Parse and validate a configuration from RON text.
    ///
    /// Sections left out of the file keep their default values.
    pub fn from_ron_str(path: &str, contents: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(contents).map_err(|e| ConfigError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron_str(path, &contents)
    }

    /// Load the room configuration, falling back to defaults.
    pub fn load() -> Self {
        match Self::from_file(ROOM_CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded room config from {}", ROOM_CONFIG_PATH);
                config
            }
            Err(e @ ConfigError::ReadError { .. }) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Check cross-section invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let drawers = self.drawers.closed.len();
        let boards = self.boards.projects.len();
        if drawers != boards {
            return Err(ConfigError::SlotMismatch { drawers, boards });
        }

        let positive = [
            ("drawers.rate", self.drawers.rate),
            ("hinge.rate", self.hinge.rate),
            ("book.rate", self.book.rate),
            ("boards.open_fraction", self.boards.open_fraction),
            ("boards.close_fraction", self.boards.close_fraction),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        if !(0.0..1.0).contains(&self.ball.bounce_factor) {
            return Err(ConfigError::InvalidValue {
                field: "ball.bounce_factor",
                value: self.ball.bounce_factor,
            });
        }

        Ok(())
    }
}

/// System to load the room config at startup.
pub fn load_room_config(mut commands: Commands) {
    let config = RoomConfig::load();
    commands.insert_resource(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RoomConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.drawers.closed.len(), 4);
        assert_eq!(config.boards.projects.len(), 4);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let ron = r#"(
            ball: (gravity: -5.0),
            hinge: (rate: 8.0),
        )"#;
        let config = RoomConfig::from_ron_str("test.ron", ron).unwrap();
        assert_eq!(config.ball.gravity, -5.0);
        assert_eq!(config.ball.bounce_factor, 0.6);
        assert_eq!(config.hinge.rate, 8.0);
        assert_eq!(config.boards.projects[0].title, "LazyNotes");
    }

    #[test]
    fn mismatched_boards_are_rejected() {
        let ron = r#"(
            drawers: (closed: [(0.0, 1.0, 0.0)]),
        )"#;
        let err = RoomConfig::from_ron_str("test.ron", ron).unwrap_err();
        assert!(matches!(err, ConfigError::SlotMismatch { drawers: 1, boards: 4 }));
    }

    #[test]
    fn malformed_file_reports_path() {
        let err = RoomConfig::from_ron_str("broken.ron", "(ball: ").unwrap_err();
        assert!(err.to_string().contains("broken.ron"));
    }

    #[test]
    fn zero_rate_is_rejected() {
        let ron = "(drawers: (rate: 0.0))";
        let err = RoomConfig::from_ron_str("test.ron", ron).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "drawers.rate", .. }));
    }
}
