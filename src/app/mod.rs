pub mod clock;
pub mod renderer;
pub mod scheduler;

use std::time::Duration;

use crate::{
    app::{
        clock::Clock,
        scheduler::{Placement, Scheduler},
    },
    generators::MazeRng,
    maze::Maze,
    seeds::{AM, BLANK, DIGITS, HEART, PM, ROCKET, SMILEY},
};

/// What the face is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Displaying {
    /// The time, drawn as digits carved into the maze
    WatchFace,
    /// A maze with a single small seed at a random spot
    Blank,
    Heart,
    Smiley,
    Rocket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Up,
    Right,
    Down,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEvent {
    Tap,
    LongTap,
    Swipe(Swipe),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ClockType {
    #[default]
    H24,
    H12,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceConfig {
    /// How often [`WatchFace::refresh`] is called
    pub refresh_period: Duration,
    /// Share of the refresh period a single refresh may spend carving
    pub budget_fraction: f64,
    pub clock_type: ClockType,
    /// Offset of local time from UTC
    pub utc_offset_minutes: i32,
    /// Two long taps closer together than this switch to the blank maze
    pub double_tap_window: Duration,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            refresh_period: Duration::from_millis(20),
            budget_fraction: 0.75,
            clock_type: ClockType::H24,
            utc_offset_minutes: 0,
            double_tap_window: Duration::from_millis(2500),
        }
    }
}

impl FaceConfig {
    pub fn budget(&self) -> Duration {
        self.refresh_period.mul_f64(self.budget_fraction)
    }
}

/// Number of swipes remembered for code entry.
const CODE_LEN: usize = 8;

/// Swipe codes that unlock the pictures, in the order they are entered.
const PICTURE_CODES: [(Displaying, [Swipe; CODE_LEN]); 3] = {
    use Swipe::*;
    [
        (Displaying::Heart, [Up, Up, Down, Down, Left, Right, Left, Right]),
        (Displaying::Smiley, [Left, Left, Right, Right, Up, Down, Up, Down]),
        (Displaying::Rocket, [Up, Up, Up, Up, Down, Down, Down, Down]),
    ]
};

/// The maze watch face: decides what the maze should show and when a new one is due, and
/// drives the scheduler one slice per refresh.
pub struct WatchFace<C: Clock> {
    clock: C,
    config: FaceConfig,
    scheduler: Scheduler,
    displaying: Displaying,
    /// A new maze was asked for by the user
    refresh_required: bool,
    /// Local minute seen by the last refresh
    last_minute: Option<u64>,
    last_long_tap: Option<Duration>,
    /// Most recent swipe first
    code: [Option<Swipe>; CODE_LEN],
}

impl<C: Clock> WatchFace<C> {
    pub fn new(clock: C, config: FaceConfig) -> Self {
        Self::with_rng(clock, config, MazeRng::from_os_rng())
    }

    pub fn with_rng(clock: C, config: FaceConfig, rng: MazeRng) -> Self {
        WatchFace {
            clock,
            scheduler: Scheduler::new(Maze::watch(), rng, config.budget()),
            config,
            displaying: Displaying::WatchFace,
            refresh_required: false,
            last_minute: None,
            last_long_tap: None,
            code: [None; CODE_LEN],
        }
    }

    pub fn displaying(&self) -> Displaying {
        self.displaying
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Minutes since the epoch in local time.
    fn local_minute(&self) -> u64 {
        let minutes = (self.clock.now().as_secs() / 60) as i64;
        (minutes + self.config.utc_offset_minutes as i64).max(0) as u64
    }

    /// Called once per refresh period. Returns the maze when a new one has been finished and
    /// should be drawn.
    pub fn refresh(&mut self) -> Option<&Maze> {
        if !self.scheduler.is_generating() {
            let minute = self.local_minute();
            let minute_changed = self.last_minute != Some(minute);
            self.last_minute = Some(minute);

            let rollover = self.displaying == Displaying::WatchFace
                && !self.refresh_required
                && minute_changed;
            if !rollover && !self.refresh_required {
                return None;
            }

            // Only a new minute gets a new seed; a manual refresh keeps drawing from the stream
            let reseed = rollover.then_some(minute);
            let plan = self.seed_plan(minute);
            tracing::debug!(
                "[face] starting {:?} cycle (rollover: {})",
                self.displaying,
                rollover
            );
            self.scheduler.start_cycle(&plan, reseed);
            // Requests made while this cycle runs stay pending for the next one
            self.refresh_required = false;
        }

        self.scheduler.step(&self.clock);
        self.scheduler.take_finished()
    }

    fn seed_plan(&self, minute: u64) -> Vec<Placement> {
        match self.displaying {
            Displaying::WatchFace => self.time_plan(minute),
            Displaying::Blank => vec![Placement::Scattered {
                pattern: &BLANK,
                x: (0, 20),
                y: (3, 20),
            }],
            Displaying::Heart => vec![Placement::Fixed {
                origin: (2, 4),
                pattern: &HEART,
            }],
            Displaying::Smiley => vec![Placement::Fixed {
                origin: (2, 4),
                pattern: &SMILEY,
            }],
            Displaying::Rocket => vec![Placement::Fixed {
                origin: (6, 5),
                pattern: &ROCKET,
            }],
        }
    }

    /// Hour and minute digits, plus an AM/PM marker on a 12 hour clock.
    fn time_plan(&self, minute: u64) -> Vec<Placement> {
        let mut hours = ((minute / 60) % 24) as usize;
        let minutes = (minute % 60) as usize;
        let mut plan = Vec::with_capacity(5);

        if self.config.clock_type == ClockType::H12 {
            let marker = if hours >= 12 { &PM } else { &AM };
            plan.push(Placement::Fixed {
                origin: (18, 15),
                pattern: marker,
            });
            hours %= 12;
            if hours == 0 {
                hours = 12;
            }
        }

        let digits = [
            ((3, 1), hours / 10),
            ((10, 1), hours % 10),
            ((3, 13), minutes / 10),
            ((10, 13), minutes % 10),
        ];
        plan.extend(digits.into_iter().map(|(origin, digit)| Placement::Fixed {
            origin,
            pattern: &DIGITS[digit],
        }));
        plan
    }

    /// Handles a touch event. Returns whether it was used.
    pub fn on_touch(&mut self, event: TouchEvent) -> bool {
        // Finish the maze being built first
        if self.scheduler.is_generating() {
            return false;
        }
        let now = self.clock.now();

        match event {
            TouchEvent::LongTap if self.displaying == Displaying::WatchFace => {
                let double = self
                    .last_long_tap
                    .is_some_and(|last| now < last + self.config.double_tap_window);
                if double {
                    self.displaying = Displaying::Blank;
                    self.code = [None; CODE_LEN];
                }
                self.refresh_required = true;
                self.last_long_tap = Some(now);
                haptic(Duration::from_millis(20));
                true
            }
            TouchEvent::LongTap => {
                self.displaying = Displaying::WatchFace;
                self.refresh_required = true;
                // Getting back to the blank maze always takes two fresh long taps
                self.last_long_tap = None;
                haptic(Duration::from_millis(20));
                true
            }
            TouchEvent::Swipe(swipe) if self.displaying != Displaying::WatchFace => {
                self.code.rotate_right(1);
                self.code[0] = Some(swipe);

                let unlocked = PICTURE_CODES
                    .iter()
                    .find(|(_, code)| {
                        self.code.iter().rev().copied().eq(code.iter().copied().map(Some))
                    })
                    .map(|&(picture, _)| picture);
                if let Some(picture) = unlocked.filter(|&p| p != self.displaying) {
                    tracing::info!("[face] code entered, showing {:?}", picture);
                    self.displaying = picture;
                    self.refresh_required = true;
                    haptic(Duration::from_millis(10));
                }
                true
            }
            _ => false,
        }
    }

    /// Handles the side button. Returns whether it was used.
    pub fn on_button(&mut self) -> bool {
        if self.displaying == Displaying::WatchFace {
            return false;
        }
        self.displaying = Displaying::WatchFace;
        self.refresh_required = true;
        true
    }
}

fn haptic(duration: Duration) {
    tracing::debug!("[face] haptic pulse for {:?}", duration);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::clock::ManualClock;

    /// 2024-01-01 13:07 UTC
    const NOON_ISH: Duration = Duration::from_secs(1_704_114_420);

    fn face(config: FaceConfig) -> WatchFace<ManualClock> {
        WatchFace::with_rng(ManualClock::new(NOON_ISH), config, MazeRng::seeded(0))
    }

    fn pattern_at(
        plan: &[Placement],
        origin: (u8, u8),
    ) -> Option<&'static crate::seeds::SeedPattern> {
        plan.iter().find_map(|p| match *p {
            Placement::Fixed { origin: o, pattern } if o == origin => Some(pattern),
            _ => None,
        })
    }

    #[test]
    fn test_time_plan_24h() {
        let face = face(FaceConfig::default());
        let plan = face.time_plan(face.local_minute());
        assert_eq!(plan.len(), 4);
        assert_eq!(pattern_at(&plan, (3, 1)), Some(&DIGITS[1]));
        assert_eq!(pattern_at(&plan, (10, 1)), Some(&DIGITS[3]));
        assert_eq!(pattern_at(&plan, (3, 13)), Some(&DIGITS[0]));
        assert_eq!(pattern_at(&plan, (10, 13)), Some(&DIGITS[7]));
    }

    #[test]
    fn test_time_plan_12h_with_offset() {
        let face = face(FaceConfig {
            clock_type: ClockType::H12,
            utc_offset_minutes: -13 * 60,
            ..FaceConfig::default()
        });
        // 00:07 local
        let plan = face.time_plan(face.local_minute());
        assert_eq!(pattern_at(&plan, (18, 15)), Some(&AM));
        assert_eq!(pattern_at(&plan, (3, 1)), Some(&DIGITS[1]));
        assert_eq!(pattern_at(&plan, (10, 1)), Some(&DIGITS[2]));

        let plan = face.time_plan(13 * 60 + 7);
        assert_eq!(pattern_at(&plan, (18, 15)), Some(&PM));
        assert_eq!(pattern_at(&plan, (10, 1)), Some(&DIGITS[1]));
    }

    #[test]
    fn test_first_refresh_draws_then_waits_for_next_minute() {
        let mut face = face(FaceConfig {
            refresh_period: Duration::from_secs(60),
            ..FaceConfig::default()
        });
        let maze = face.refresh().expect("first refresh draws the time");
        assert!(maze.is_connected());
        assert!(face.refresh().is_none());

        face.clock.advance(Duration::from_secs(60));
        assert!(face.refresh().is_some());
    }

    #[test]
    fn test_generation_spans_refreshes_with_tight_budget() {
        let clock = ManualClock::ticking(NOON_ISH, Duration::from_millis(50));
        let mut face = WatchFace::with_rng(clock, FaceConfig::default(), MazeRng::seeded(0));
        let mut refreshes = 1;
        while face.refresh().is_none() {
            assert!(face.scheduler().is_generating());
            // Input is ignored until the maze is done
            assert!(!face.on_touch(TouchEvent::LongTap));
            refreshes += 1;
        }
        assert!(refreshes > 1);
        assert!(!face.scheduler().is_generating());
    }

    #[test]
    fn test_double_long_tap_switches_to_blank() {
        let mut face = face(FaceConfig::default());
        face.refresh();

        assert!(face.on_touch(TouchEvent::LongTap));
        assert_eq!(face.displaying(), Displaying::WatchFace);
        assert!(face.refresh().is_some());

        face.clock.advance(Duration::from_secs(1));
        assert!(face.on_touch(TouchEvent::LongTap));
        assert_eq!(face.displaying(), Displaying::Blank);
        let maze = face.refresh().unwrap();
        assert!(maze.is_connected());
    }

    #[test]
    fn test_slow_long_taps_only_refresh() {
        let mut face = face(FaceConfig::default());
        face.refresh();
        face.on_touch(TouchEvent::LongTap);
        face.clock.advance(Duration::from_secs(3));
        face.on_touch(TouchEvent::LongTap);
        assert_eq!(face.displaying(), Displaying::WatchFace);
    }

    #[test]
    fn test_swipe_code_unlocks_picture() {
        let mut face = face(FaceConfig::default());
        face.refresh();
        face.on_touch(TouchEvent::LongTap);
        face.on_touch(TouchEvent::LongTap);
        assert_eq!(face.displaying(), Displaying::Blank);
        face.refresh();

        // Some noise before the code
        face.on_touch(TouchEvent::Swipe(Swipe::Left));
        let (_, code) = PICTURE_CODES[0];
        for swipe in code {
            assert!(face.on_touch(TouchEvent::Swipe(swipe)));
        }
        assert_eq!(face.displaying(), Displaying::Heart);
        assert!(face.refresh().unwrap().is_connected());

        assert!(face.on_button());
        assert_eq!(face.displaying(), Displaying::WatchFace);
        assert!(!face.on_button());
    }

    #[test]
    fn test_manual_refresh_continues_stream() {
        let snapshot = |maze: &Maze| maze.coords().map(|c| maze.get(c)).collect::<Vec<_>>();

        let mut face = face(FaceConfig::default());
        let first = snapshot(face.refresh().unwrap());
        face.on_touch(TouchEvent::LongTap);
        let second = snapshot(face.refresh().unwrap());
        assert_ne!(first, second);

        // A rollover reseeds from the minute, whatever the stream was before
        let mut other = WatchFace::with_rng(
            ManualClock::new(NOON_ISH),
            FaceConfig::default(),
            MazeRng::seeded(99),
        );
        assert_eq!(first, snapshot(other.refresh().unwrap()));
    }

    #[test]
    fn test_long_tap_elsewhere_returns_and_resets_double_tap() {
        let mut face = face(FaceConfig::default());
        face.refresh();
        face.on_touch(TouchEvent::LongTap);
        face.on_touch(TouchEvent::LongTap);
        assert_eq!(face.displaying(), Displaying::Blank);
        face.refresh();

        assert!(face.on_touch(TouchEvent::LongTap));
        assert_eq!(face.displaying(), Displaying::WatchFace);
        assert_eq!(face.last_long_tap, None);
        face.refresh();

        // Still inside the window of the earlier taps, but one tap is not a double tap
        assert!(face.on_touch(TouchEvent::LongTap));
        assert_eq!(face.displaying(), Displaying::WatchFace);
        face.refresh();
        face.on_touch(TouchEvent::LongTap);
        assert_eq!(face.displaying(), Displaying::Blank);
    }

    #[test]
    fn test_code_on_same_picture_does_not_refresh() {
        let mut face = face(FaceConfig::default());
        face.refresh();
        face.on_touch(TouchEvent::LongTap);
        face.on_touch(TouchEvent::LongTap);
        face.refresh();

        let (_, code) = PICTURE_CODES[0];
        for swipe in code {
            face.on_touch(TouchEvent::Swipe(swipe));
        }
        assert_eq!(face.displaying(), Displaying::Heart);
        assert!(face.refresh().is_some());

        for swipe in code {
            assert!(face.on_touch(TouchEvent::Swipe(swipe)));
        }
        assert_eq!(face.displaying(), Displaying::Heart);
        assert!(!face.refresh_required);
        assert!(face.refresh().is_none());
    }

    #[test]
    fn test_swipes_ignored_on_watch_face() {
        let mut face = face(FaceConfig::default());
        face.refresh();
        assert!(!face.on_touch(TouchEvent::Swipe(Swipe::Up)));
        assert!(!face.on_touch(TouchEvent::Tap));
    }
}
