//! One-shot boot sequence: BIOS text, randomized loading bar, optional login.
//!
//! [`BootSequence`] is a pure state machine. Every timer the UI needs is returned as a
//! [`BootCommand::Schedule`] so the component layer owns the clock and tests can drive the
//! machine step by step.

use platform_host::SoundCue;

/// Delay between revealed BIOS lines.
pub const BIOS_LINE_INTERVAL_MS: u32 = 150;
/// Period of the "Loading System" ellipsis animation.
pub const LOADING_DOTS_INTERVAL_MS: u32 = 500;
/// Hold after the last BIOS line before the loading stage starts.
pub const BIOS_HOLD_MS: u32 = 4_000;
/// Progress value above which the loading bar advances on a fixed cadence.
pub const SLOW_PROGRESS_THRESHOLD: u16 = 80;
/// Fixed delay used above [`SLOW_PROGRESS_THRESHOLD`].
pub const SLOW_PROGRESS_DELAY_MS: u32 = 300;
/// Pause at 100% before leaving the loading stage.
pub const PROGRESS_SETTLE_MS: u32 = 1_500;
/// Delay between selecting the user tile and entering the desktop.
pub const LOGIN_COMPLETE_MS: u32 = 1_500;
/// Smallest loading increment.
pub const MIN_PROGRESS_INCREMENT: u16 = 3;
/// Largest loading increment.
pub const MAX_PROGRESS_INCREMENT: u16 = 10;
/// Lower bound (inclusive) of the randomized fast-phase delay.
pub const MIN_PROGRESS_DELAY_MS: u32 = 100;
/// Upper bound (exclusive) of the randomized fast-phase delay.
pub const MAX_PROGRESS_DELAY_MS: u32 = 500;

/// Final BIOS line, rendered with the animated ellipsis.
pub const LOADING_SYSTEM_LINE: &str = "Loading System";

/// Builds the BIOS script shown line by line during the first stage.
pub fn bios_script(owner: &str) -> Vec<String> {
    [
        "AWARD BIOS (c) 1997 AWARD Software Inc.",
        "MAIN BIOS Checksum: E10A",
        "AWDBEIOS 4.51PG",
        "04-12-1998-I440BX-W977-2A6LMT3DC-00",
        "",
        "CPU: Intel(R) Pentium(R) II Processor 300MHz",
        "Memory Test: 16384K OK",
        "",
        "Detecting IDE drives...",
        "Primary Master: QUANTUM FIREBALL CX 6.4GB",
        "Primary Slave: SONY CD-ROM CDU701",
        "Secondary Master: None",
        "Secondary Slave: None",
        "",
        "Initializing Hard Drives...",
        "Initializing CD-ROM drive...",
        "",
        "CMOS Setup Utility - Copyright (C) 1984-1998",
        "",
        "ART PORTFOLIO SYSTEM",
        "VERSION 1.0",
    ]
    .into_iter()
    .map(str::to_string)
    .chain([
        format!("Copyright (C) 2023 {owner}"),
        String::new(),
        LOADING_SYSTEM_LINE.to_string(),
    ])
    .collect()
}

/// Source of randomness for loading-bar pacing.
pub trait BootRandom {
    /// Returns a value uniformly distributed in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Next loading increment in `MIN_PROGRESS_INCREMENT..=MAX_PROGRESS_INCREMENT`.
    fn next_increment(&mut self) -> u16 {
        let span = f64::from(MAX_PROGRESS_INCREMENT - MIN_PROGRESS_INCREMENT + 1);
        let offset = (self.next_unit().clamp(0.0, 1.0) * span).floor() as u16;
        MIN_PROGRESS_INCREMENT + offset.min(MAX_PROGRESS_INCREMENT - MIN_PROGRESS_INCREMENT)
    }

    /// Next fast-phase delay in `MIN_PROGRESS_DELAY_MS..MAX_PROGRESS_DELAY_MS`.
    fn next_delay_ms(&mut self) -> u32 {
        let span = f64::from(MAX_PROGRESS_DELAY_MS - MIN_PROGRESS_DELAY_MS);
        let offset = (self.next_unit().clamp(0.0, 1.0) * span).floor() as u32;
        MIN_PROGRESS_DELAY_MS + offset.min(MAX_PROGRESS_DELAY_MS - MIN_PROGRESS_DELAY_MS - 1)
    }
}

/// Randomness backed by `Math.random()` in the browser and a xorshift generator elsewhere.
#[derive(Debug, Clone)]
pub struct SystemBootRandom {
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    state: u64,
}

impl Default for SystemBootRandom {
    fn default() -> Self {
        Self {
            state: 0x9E37_79B9_7F4A_7C15,
        }
    }
}

impl BootRandom for SystemBootRandom {
    fn next_unit(&mut self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Math::random()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.state ^= self.state << 13;
            self.state ^= self.state >> 7;
            self.state ^= self.state << 17;
            (self.state >> 11) as f64 / (1u64 << 53) as f64
        }
    }
}

/// Visible boot stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStage {
    /// BIOS text reveal.
    Bios,
    /// Segmented loading bar.
    Loading,
    /// User tile selection.
    Login,
    /// Desktop is shown.
    Complete,
}

impl BootStage {
    /// Stable token for the `data-stage` attribute.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Bios => "bios",
            Self::Loading => "loading",
            Self::Login => "login",
            Self::Complete => "complete",
        }
    }
}

/// Inputs to [`BootSequence::handle`]. Everything except [`BootEvent::UserSelected`] is a timer
/// the machine scheduled itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootEvent {
    /// Starts the sequence.
    Start,
    /// Reveal the next BIOS line.
    LineTick,
    /// Advance the ellipsis animation.
    DotsTick,
    /// BIOS hold elapsed.
    BiosHoldElapsed,
    /// Advance the loading bar.
    ProgressTick,
    /// Loading settle delay elapsed.
    ProgressSettled,
    /// The visitor clicked the user tile.
    UserSelected,
    /// Login delay elapsed.
    LoginElapsed,
}

/// Side effects requested by [`BootSequence::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootCommand {
    /// Deliver `event` after `delay_ms`.
    Schedule {
        /// Delay in milliseconds.
        delay_ms: u32,
        /// Event to deliver.
        event: BootEvent,
    },
    /// Play a sound cue.
    PlaySound(SoundCue),
    /// Boot finished; show the desktop.
    Complete,
}

/// Boot sequence state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootSequence {
    stage: BootStage,
    line_count: usize,
    revealed_lines: usize,
    dots: u8,
    progress: u16,
    show_login: bool,
    started: bool,
    user_selected: bool,
}

impl BootSequence {
    /// Creates a sequence over `line_count` BIOS lines.
    pub fn new(line_count: usize, show_login: bool) -> Self {
        Self {
            stage: BootStage::Bios,
            line_count,
            revealed_lines: 0,
            dots: 1,
            progress: 0,
            show_login,
            started: false,
            user_selected: false,
        }
    }

    /// Current stage.
    pub fn stage(&self) -> BootStage {
        self.stage
    }

    /// Number of BIOS lines revealed so far.
    pub fn revealed_lines(&self) -> usize {
        self.revealed_lines
    }

    /// Ellipsis length, cycling `1..=3`.
    pub fn dots(&self) -> u8 {
        self.dots
    }

    /// Loading progress in percent.
    pub fn progress(&self) -> u16 {
        self.progress
    }

    /// Whether the user tile has been selected.
    pub fn user_selected(&self) -> bool {
        self.user_selected
    }

    /// Applies `event` and returns the commands the host must run.
    ///
    /// Events that do not apply to the current stage are ignored.
    pub fn handle(&mut self, event: BootEvent, rng: &mut dyn BootRandom) -> Vec<BootCommand> {
        match (self.stage, event) {
            (BootStage::Bios, BootEvent::Start) if !self.started => {
                self.started = true;
                if self.line_count == 0 {
                    return self.finish_bios();
                }
                vec![schedule(BIOS_LINE_INTERVAL_MS, BootEvent::LineTick)]
            }
            (BootStage::Bios, BootEvent::LineTick) if self.revealed_lines < self.line_count => {
                self.revealed_lines += 1;
                if self.revealed_lines < self.line_count {
                    vec![schedule(BIOS_LINE_INTERVAL_MS, BootEvent::LineTick)]
                } else {
                    self.finish_bios()
                }
            }
            (BootStage::Bios, BootEvent::DotsTick) => {
                self.dots = self.dots % 3 + 1;
                vec![schedule(LOADING_DOTS_INTERVAL_MS, BootEvent::DotsTick)]
            }
            (BootStage::Bios, BootEvent::BiosHoldElapsed) => {
                self.stage = BootStage::Loading;
                self.step_progress(rng)
            }
            (BootStage::Loading, BootEvent::ProgressTick) => self.step_progress(rng),
            (BootStage::Loading, BootEvent::ProgressSettled) if self.progress >= 100 => {
                if self.show_login {
                    self.stage = BootStage::Login;
                    Vec::new()
                } else {
                    self.stage = BootStage::Complete;
                    vec![BootCommand::Complete]
                }
            }
            (BootStage::Login, BootEvent::UserSelected) if !self.user_selected => {
                self.user_selected = true;
                vec![
                    BootCommand::PlaySound(SoundCue::Login),
                    schedule(LOGIN_COMPLETE_MS, BootEvent::LoginElapsed),
                ]
            }
            (BootStage::Login, BootEvent::LoginElapsed) if self.user_selected => {
                self.stage = BootStage::Complete;
                vec![BootCommand::Complete]
            }
            _ => Vec::new(),
        }
    }

    fn finish_bios(&mut self) -> Vec<BootCommand> {
        vec![
            BootCommand::PlaySound(SoundCue::Boot),
            schedule(LOADING_DOTS_INTERVAL_MS, BootEvent::DotsTick),
            schedule(BIOS_HOLD_MS, BootEvent::BiosHoldElapsed),
        ]
    }

    fn step_progress(&mut self, rng: &mut dyn BootRandom) -> Vec<BootCommand> {
        let increment = rng.next_increment().max(1);
        self.progress = (self.progress + increment).min(100);
        let next = if self.progress < SLOW_PROGRESS_THRESHOLD {
            schedule(rng.next_delay_ms(), BootEvent::ProgressTick)
        } else if self.progress < 100 {
            schedule(SLOW_PROGRESS_DELAY_MS, BootEvent::ProgressTick)
        } else {
            schedule(PROGRESS_SETTLE_MS, BootEvent::ProgressSettled)
        };
        vec![next]
    }
}

fn schedule(delay_ms: u32, event: BootEvent) -> BootCommand {
    BootCommand::Schedule { delay_ms, event }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use pretty_assertions::assert_eq;

    use super::*;

    struct ScriptedRandom {
        units: VecDeque<f64>,
    }

    impl ScriptedRandom {
        fn new(units: &[f64]) -> Self {
            Self {
                units: units.iter().copied().collect(),
            }
        }
    }

    impl BootRandom for ScriptedRandom {
        fn next_unit(&mut self) -> f64 {
            let value = self.units.pop_front().unwrap_or(0.5);
            self.units.push_back(value);
            value
        }
    }

    /// Drives the machine until it stops scheduling, returning the elapsed time and sounds.
    fn run_to_idle(
        boot: &mut BootSequence,
        rng: &mut dyn BootRandom,
        first: BootEvent,
    ) -> (u32, Vec<SoundCue>, bool) {
        let mut queue: Vec<(u32, BootEvent)> = vec![(0, first)];
        let mut now = 0;
        let mut sounds = Vec::new();
        let mut completed = false;
        let mut progress_seen = Vec::new();
        while !queue.is_empty() {
            queue.sort_by_key(|(at, _)| *at);
            let (at, event) = queue.remove(0);
            now = at;
            // The ellipsis interval only matters while BIOS is showing.
            if event == BootEvent::DotsTick && boot.stage() != BootStage::Bios {
                continue;
            }
            for command in boot.handle(event, rng) {
                match command {
                    BootCommand::Schedule { delay_ms, event } => {
                        queue.push((now + delay_ms, event))
                    }
                    BootCommand::PlaySound(cue) => sounds.push(cue),
                    BootCommand::Complete => completed = true,
                }
            }
            if boot.stage() == BootStage::Loading {
                progress_seen.push(boot.progress());
            }
        }
        assert!(progress_seen.windows(2).all(|pair| pair[0] <= pair[1]));
        (now, sounds, completed)
    }

    #[test]
    fn bios_script_ends_with_loading_line_and_names_owner() {
        let lines = bios_script("Lillulette");
        assert_eq!(lines.len(), 24);
        assert_eq!(lines.last().map(String::as_str), Some(LOADING_SYSTEM_LINE));
        assert!(lines.contains(&"Copyright (C) 2023 Lillulette".to_string()));
    }

    #[test]
    fn increments_and_delays_stay_in_range() {
        let mut rng = ScriptedRandom::new(&[0.0, 0.999_999, 0.5]);
        for _ in 0..6 {
            let inc = rng.next_increment();
            assert!((MIN_PROGRESS_INCREMENT..=MAX_PROGRESS_INCREMENT).contains(&inc));
            let delay = rng.next_delay_ms();
            assert!((MIN_PROGRESS_DELAY_MS..MAX_PROGRESS_DELAY_MS).contains(&delay));
        }
        let mut low = ScriptedRandom::new(&[0.0]);
        assert_eq!(low.next_increment(), 3);
        let mut high = ScriptedRandom::new(&[0.999_999]);
        assert_eq!(high.next_increment(), 10);
    }

    #[test]
    fn bios_reveals_lines_then_holds_before_loading() {
        let mut boot = BootSequence::new(3, true);
        let mut rng = ScriptedRandom::new(&[0.5]);

        assert_eq!(
            boot.handle(BootEvent::Start, &mut rng),
            vec![schedule(BIOS_LINE_INTERVAL_MS, BootEvent::LineTick)]
        );
        boot.handle(BootEvent::LineTick, &mut rng);
        boot.handle(BootEvent::LineTick, &mut rng);
        let last = boot.handle(BootEvent::LineTick, &mut rng);
        assert_eq!(boot.revealed_lines(), 3);
        assert_eq!(
            last,
            vec![
                BootCommand::PlaySound(SoundCue::Boot),
                schedule(LOADING_DOTS_INTERVAL_MS, BootEvent::DotsTick),
                schedule(BIOS_HOLD_MS, BootEvent::BiosHoldElapsed),
            ]
        );
        assert!(boot.handle(BootEvent::LineTick, &mut rng).is_empty());
        assert_eq!(boot.stage(), BootStage::Bios);
    }

    #[test]
    fn dots_cycle_one_to_three() {
        let mut boot = BootSequence::new(1, true);
        let mut rng = ScriptedRandom::new(&[0.5]);
        let mut seen = Vec::new();
        for _ in 0..4 {
            boot.handle(BootEvent::DotsTick, &mut rng);
            seen.push(boot.dots());
        }
        assert_eq!(seen, vec![2, 3, 1, 2]);
    }

    #[test]
    fn loading_uses_fixed_cadence_above_threshold() {
        let mut boot = BootSequence::new(1, false);
        let mut rng = ScriptedRandom::new(&[0.999_999]);
        boot.handle(BootEvent::Start, &mut rng);
        boot.handle(BootEvent::LineTick, &mut rng);
        boot.handle(BootEvent::BiosHoldElapsed, &mut rng);
        assert_eq!(boot.stage(), BootStage::Loading);
        assert_eq!(boot.progress(), 10);

        for _ in 0..7 {
            boot.handle(BootEvent::ProgressTick, &mut rng);
        }
        assert_eq!(boot.progress(), 80);
        assert_eq!(
            boot.handle(BootEvent::ProgressTick, &mut rng),
            vec![schedule(SLOW_PROGRESS_DELAY_MS, BootEvent::ProgressTick)]
        );
        assert_eq!(boot.progress(), 90);
        assert_eq!(
            boot.handle(BootEvent::ProgressTick, &mut rng),
            vec![schedule(PROGRESS_SETTLE_MS, BootEvent::ProgressSettled)]
        );
        assert_eq!(boot.progress(), 100);
    }

    #[test]
    fn progress_is_capped_at_one_hundred() {
        let mut boot = BootSequence::new(1, false);
        let mut rng = ScriptedRandom::new(&[0.4, 0.999_999, 0.1]);
        boot.handle(BootEvent::BiosHoldElapsed, &mut rng);
        for _ in 0..60 {
            boot.handle(BootEvent::ProgressTick, &mut rng);
        }
        assert_eq!(boot.progress(), 100);
    }

    #[test]
    fn full_run_without_login_completes() {
        let mut boot = BootSequence::new(bios_script("owner").len(), false);
        let mut rng = ScriptedRandom::new(&[0.2, 0.7, 0.9, 0.35]);
        let (_, sounds, completed) = run_to_idle(&mut boot, &mut rng, BootEvent::Start);
        assert!(completed);
        assert_eq!(boot.stage(), BootStage::Complete);
        assert_eq!(sounds, vec![SoundCue::Boot]);
    }

    #[test]
    fn login_stage_waits_for_user_then_completes_after_delay() {
        let mut boot = BootSequence::new(2, true);
        let mut rng = ScriptedRandom::new(&[0.6]);
        let (_, _, completed) = run_to_idle(&mut boot, &mut rng, BootEvent::Start);
        assert!(!completed);
        assert_eq!(boot.stage(), BootStage::Login);

        let commands = boot.handle(BootEvent::UserSelected, &mut rng);
        assert_eq!(
            commands,
            vec![
                BootCommand::PlaySound(SoundCue::Login),
                schedule(LOGIN_COMPLETE_MS, BootEvent::LoginElapsed),
            ]
        );
        assert!(boot.handle(BootEvent::UserSelected, &mut rng).is_empty());
        assert_eq!(
            boot.handle(BootEvent::LoginElapsed, &mut rng),
            vec![BootCommand::Complete]
        );
        assert_eq!(boot.stage(), BootStage::Complete);
    }

    #[test]
    fn user_input_cannot_skip_earlier_stages() {
        let mut boot = BootSequence::new(5, true);
        let mut rng = ScriptedRandom::new(&[0.5]);
        boot.handle(BootEvent::Start, &mut rng);
        assert!(boot.handle(BootEvent::UserSelected, &mut rng).is_empty());
        assert!(boot.handle(BootEvent::LoginElapsed, &mut rng).is_empty());
        assert!(boot.handle(BootEvent::ProgressSettled, &mut rng).is_empty());
        assert_eq!(boot.stage(), BootStage::Bios);
    }

    #[test]
    fn system_random_stays_in_unit_interval() {
        let mut rng = SystemBootRandom::default();
        for _ in 0..1_000 {
            let value = rng.next_unit();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
