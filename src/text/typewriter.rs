//! Typewriter text: one character per tick across a list of entries.
//!
//! The state machine knows nothing about clocks. The Bevy wrapper below
//! drives it from a repeating timer, tests drive it by calling `tick`.

use std::time::Duration;

use bevy::prelude::*;

/// One string to reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterEntry {
    pub text: String,
    /// Pause after this entry before the next one starts
    pub delay: Duration,
    /// Reported with the completion of this entry
    pub cue: Option<String>,
}

impl TypewriterEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delay: Duration::ZERO,
            cue: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_cue(mut self, cue: impl Into<String>) -> Self {
        self.cue = Some(cue.into());
        self
    }
}

/// Reported exactly once per entry, on the tick that reveals its last
/// character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCompleted {
    pub index: usize,
    pub cue: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Revealing entry `index`, `shown` characters so far
    Typing { index: usize, shown: usize },
    /// Entry `index` is done; waiting `ticks_left` ticks before the next
    Pausing { index: usize, ticks_left: u32 },
    Finished,
}

/// Sequential character reveal over one or more entries.
#[derive(Debug, Clone)]
pub struct Typewriter {
    entries: Vec<TypewriterEntry>,
    /// Byte offset of each char boundary, per entry
    boundaries: Vec<Vec<usize>>,
    interval: Duration,
    phase: Phase,
}

impl Typewriter {
    pub fn new(entries: Vec<TypewriterEntry>, interval: Duration) -> Self {
        let boundaries = entries
            .iter()
            .map(|e| {
                e.text
                    .char_indices()
                    .map(|(i, _)| i)
                    .skip(1)
                    .chain(std::iter::once(e.text.len()))
                    .collect()
            })
            .collect();

        let mut typewriter = Self {
            entries,
            boundaries,
            interval,
            phase: Phase::Finished,
        };
        typewriter.restart();
        typewriter
    }

    /// Single-entry convenience constructor.
    pub fn single(text: impl Into<String>, interval: Duration) -> Self {
        Self::new(vec![TypewriterEntry::new(text)], interval)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn entries(&self) -> &[TypewriterEntry] {
        &self.entries
    }

    /// Start again from empty.
    pub fn restart(&mut self) {
        self.phase = if self.entries.is_empty() {
            Phase::Finished
        } else {
            Phase::Typing { index: 0, shown: 0 }
        };
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Advance by one tick.
    pub fn tick(&mut self) -> Option<EntryCompleted> {
        match self.phase {
            Phase::Finished => None,
            Phase::Pausing { index, ticks_left } => {
                if ticks_left > 1 {
                    self.phase = Phase::Pausing {
                        index,
                        ticks_left: ticks_left - 1,
                    };
                } else {
                    self.begin(index + 1);
                }
                None
            }
            Phase::Typing { index, shown } => {
                let total = self.boundaries[index].len();
                let shown = (shown + 1).min(total);
                self.phase = Phase::Typing { index, shown };

                if shown < total {
                    return None;
                }

                let pause = self.pause_ticks(self.entries[index].delay);
                if pause > 0 {
                    self.phase = Phase::Pausing {
                        index,
                        ticks_left: pause,
                    };
                } else {
                    self.begin(index + 1);
                }

                Some(EntryCompleted {
                    index,
                    cue: self.entries[index].cue.clone(),
                })
            }
        }
    }

    /// Text currently visible for an entry: full once completed, partial
    /// while typing, empty before it starts.
    pub fn revealed(&self, entry: usize) -> &str {
        let Some(text) = self.entries.get(entry).map(|e| e.text.as_str()) else {
            return "";
        };

        let current = match self.phase {
            Phase::Finished => return text,
            Phase::Pausing { index, .. } => {
                return if entry <= index { text } else { "" };
            }
            Phase::Typing { index, shown } => (index, shown),
        };

        match entry.cmp(&current.0) {
            std::cmp::Ordering::Less => text,
            std::cmp::Ordering::Greater => "",
            std::cmp::Ordering::Equal => {
                if current.1 == 0 {
                    ""
                } else {
                    &text[..self.boundaries[entry][current.1 - 1]]
                }
            }
        }
    }

    /// Move to `index`, or finish past the last entry.
    fn begin(&mut self, index: usize) {
        self.phase = if index < self.entries.len() {
            Phase::Typing { index, shown: 0 }
        } else {
            Phase::Finished
        };
    }

    fn pause_ticks(&self, delay: Duration) -> u32 {
        if delay.is_zero() || self.interval.is_zero() {
            return 0;
        }
        delay.as_nanos().div_ceil(self.interval.as_nanos()) as u32
    }
}

/// Drives a typewriter on a fixed-interval timer and writes each entry into
/// its target `Text` entity.
///
/// The driver entity must not carry a `Text` itself. Despawning it stops the
/// animation.
#[derive(Component, Debug)]
pub struct TypewriterText {
    pub typewriter: Typewriter,
    /// One `Text` entity per entry
    pub targets: Vec<Entity>,
    timer: Timer,
}

impl TypewriterText {
    pub fn new(typewriter: Typewriter, targets: Vec<Entity>) -> Self {
        let timer = Timer::new(typewriter.interval(), TimerMode::Repeating);
        Self {
            typewriter,
            targets,
            timer,
        }
    }
}

/// Sent when a typewriter entry that carries a cue completes.
///
/// The room's own text does not set cues; this is the hook for anything that
/// needs to follow the end of a typed entry.
#[derive(Event, Debug, Clone)]
pub struct TypewriterCue {
    /// The driver entity
    pub source: Entity,
    pub cue: String,
}

/// Advance every typewriter by the ticks elapsed this frame.
pub fn run_typewriters(
    time: Res<Time>,
    mut drivers: Query<(Entity, &mut TypewriterText)>,
    mut texts: Query<&mut Text, Without<TypewriterText>>,
    mut cues: EventWriter<TypewriterCue>,
) {
    for (source, mut driver) in drivers.iter_mut() {
        if driver.typewriter.is_finished() {
            continue;
        }

        driver.timer.tick(time.delta());
        let ticks = driver.timer.times_finished_this_tick();
        if ticks == 0 {
            continue;
        }

        for _ in 0..ticks {
            if let Some(done) = driver.typewriter.tick() {
                if let Some(cue) = done.cue {
                    cues.send(TypewriterCue { source, cue });
                }
            }
        }

        for (entry, &target) in driver.targets.iter().enumerate() {
            if let Ok(mut text) = texts.get_mut(target) {
                let revealed = driver.typewriter.revealed(entry);
                if text.0 != revealed {
                    text.0 = revealed.to_string();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(10);

    #[test]
    fn reveals_one_character_per_tick() {
        let mut tw = Typewriter::single("abc", TICK);
        assert_eq!(tw.revealed(0), "");

        assert_eq!(tw.tick(), None);
        assert_eq!(tw.revealed(0), "a");
        assert_eq!(tw.tick(), None);
        assert_eq!(tw.revealed(0), "ab");

        let done = tw.tick();
        assert_eq!(tw.revealed(0), "abc");
        assert_eq!(done, Some(EntryCompleted { index: 0, cue: None }));
        assert!(tw.is_finished());
    }

    #[test]
    fn completion_fires_exactly_once() {
        let entry = TypewriterEntry::new("abc").with_cue("done");
        let mut tw = Typewriter::new(vec![entry], TICK);

        let completions: Vec<_> = (0..10).filter_map(|_| tw.tick()).collect();
        assert_eq!(completions.len(), 1);
        assert_eq!(completions[0].cue.as_deref(), Some("done"));
        assert_eq!(tw.revealed(0), "abc");
    }

    #[test]
    fn delay_pauses_between_entries() {
        let entries = vec![
            TypewriterEntry::new("ab").with_delay(Duration::from_millis(25)),
            TypewriterEntry::new("cd"),
        ];
        let mut tw = Typewriter::new(entries, TICK);

        tw.tick();
        assert!(tw.tick().is_some());
        assert_eq!(tw.revealed(0), "ab");

        // 25 ms at 10 ms per tick rounds up to three idle ticks.
        for _ in 0..3 {
            tw.tick();
            assert_eq!(tw.revealed(1), "");
        }
        tw.tick();
        assert_eq!(tw.revealed(1), "c");
        assert_eq!(tw.revealed(0), "ab");

        assert_eq!(tw.tick().map(|c| c.index), Some(1));
        assert!(tw.is_finished());
    }

    #[test]
    fn total_length_is_characters_plus_delays() {
        let entries = vec![
            TypewriterEntry::new("hello").with_delay(Duration::from_millis(20)),
            TypewriterEntry::new("world"),
        ];
        let mut tw = Typewriter::new(entries, TICK);
        let mut ticks = 0;
        while !tw.is_finished() {
            tw.tick();
            ticks += 1;
        }
        assert_eq!(ticks, 5 + 2 + 5);
    }

    #[test]
    fn multibyte_text_is_split_on_char_boundaries() {
        let mut tw = Typewriter::single("héé", TICK);
        tw.tick();
        tw.tick();
        assert_eq!(tw.revealed(0), "hé");
    }

    #[test]
    fn empty_entry_completes_on_first_tick() {
        let entries = vec![TypewriterEntry::new(""), TypewriterEntry::new("x")];
        let mut tw = Typewriter::new(entries, TICK);
        assert_eq!(tw.tick().map(|c| c.index), Some(0));
        tw.tick();
        assert_eq!(tw.revealed(1), "x");
    }

    #[test]
    fn restart_begins_from_empty() {
        let mut tw = Typewriter::single("abc", TICK);
        while !tw.is_finished() {
            tw.tick();
        }
        tw.restart();
        assert_eq!(tw.revealed(0), "");
        assert!(!tw.is_finished());
    }

    fn driver_app(text: &str) -> (App, Entity, Entity) {
        let mut app = App::new();
        app.init_resource::<Time>()
            .add_event::<TypewriterCue>()
            .add_systems(Update, run_typewriters);

        let target = app.world_mut().spawn(Text::new("")).id();
        let entry = TypewriterEntry::new(text).with_cue("typed");
        let driver = app
            .world_mut()
            .spawn(TypewriterText::new(
                Typewriter::new(vec![entry], TICK),
                vec![target],
            ))
            .id();
        (app, target, driver)
    }

    /// Advance the clock, run one frame and return the cues it sent.
    fn frame(app: &mut App, elapsed: Duration) -> Vec<String> {
        app.world_mut().resource_mut::<Time>().advance_by(elapsed);
        app.update();
        app.world_mut()
            .resource_mut::<Events<TypewriterCue>>()
            .drain()
            .map(|c| c.cue)
            .collect()
    }

    fn shown(app: &App, target: Entity) -> String {
        app.world().get::<Text>(target).unwrap().0.clone()
    }

    #[test]
    fn driver_writes_each_tick_into_its_target() {
        let (mut app, target, _) = driver_app("abc");

        let mut cues = Vec::new();
        for expected in ["a", "ab", "abc"] {
            cues.extend(frame(&mut app, TICK));
            assert_eq!(shown(&app, target), expected);
        }
        for _ in 0..5 {
            cues.extend(frame(&mut app, TICK));
        }

        assert_eq!(shown(&app, target), "abc");
        assert_eq!(cues, vec!["typed".to_string()]);
    }

    #[test]
    fn long_frames_apply_every_elapsed_tick() {
        let (mut app, target, _) = driver_app("abcd");

        frame(&mut app, TICK * 2);
        assert_eq!(shown(&app, target), "ab");

        let cues = frame(&mut app, TICK * 5);
        assert_eq!(shown(&app, target), "abcd");
        assert_eq!(cues.len(), 1);
    }

    #[test]
    fn despawning_the_driver_stops_typing() {
        let (mut app, target, driver) = driver_app("abc");

        frame(&mut app, TICK);
        assert_eq!(shown(&app, target), "a");

        app.world_mut().despawn(driver);
        let cues = frame(&mut app, TICK * 3);
        assert_eq!(shown(&app, target), "a");
        assert!(cues.is_empty());
    }

    #[test]
    fn no_entries_is_already_finished() {
        let mut tw = Typewriter::new(Vec::new(), TICK);
        assert!(tw.is_finished());
        assert_eq!(tw.tick(), None);
        assert_eq!(tw.revealed(0), "");
    }
}
