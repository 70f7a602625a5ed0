use std::time::{Duration, Instant};

use proscenium_engine::core::{App, AppControl, Canvas, FrameCtx};
use proscenium_engine::paint::Color;

use crate::config::{valid_time_scale, GameConfig};
use crate::control::StageControl;
use crate::error::GameError;
use crate::pacing::{FpsLimit, Pacer, ThreadPacer};
use crate::perf::FrameCounters;
use crate::registry::StageRegistry;
use crate::stage::{EventPayload, Stage, StageBuilder, STATUS_EVENT};
use crate::status::EngineStatus;
use crate::switcher::{PendingStage, StageSwitcher};

/// Color the frame is cleared to before the active stage renders.
pub const CLEAR_SENTINEL: Color = Color::MAGENTA;

/// Engine context and main loop.
///
/// Owns the active stage, the stage registry with its pending-swap slot, the
/// engine status, the time scale and the frame-rate limit. Implements
/// [`App`], so the runtime drives it directly:
///
/// 1. swap in a stage queued during the previous frame (old `dispose`, then new `create`)
/// 2. `update` with the time-scaled wall-clock delta
/// 3. clear to [`CLEAR_SENTINEL`], then `render`
/// 4. once the runtime has presented the frame, sleep out the rest of the
///    frame budget if an FPS limit is set
pub struct Game {
    stage: Box<dyn Stage>,
    stage_name: String,
    switcher: StageSwitcher,

    status: EngineStatus,
    time_scale: f32,
    fps_limit: FpsLimit,
    pacer: Box<dyn Pacer>,

    /// Last size reported by the runtime, replayed to newly swapped stages.
    size: Option<(u32, u32)>,
    counters: FrameCounters,
    exit_requested: bool,
}

impl Game {
    /// Builds the engine context with `initial` as the active stage.
    ///
    /// Fails if `initial` is not registered: a game always has an active stage.
    pub fn new(registry: StageRegistry, initial: &str, config: &GameConfig) -> Result<Self, GameError> {
        let started = Instant::now();

        let switcher = StageSwitcher::new(registry);
        let stage = switcher
            .registry()
            .build(initial)
            .ok_or_else(|| GameError::UnknownStage(initial.to_string()))?;

        let time_scale = if valid_time_scale(config.time_scale) {
            config.time_scale
        } else {
            log::warn!("invalid time scale {} in config, using 1.0", config.time_scale);
            1.0
        };

        let game = Self {
            stage,
            stage_name: initial.to_string(),
            switcher,
            // Set before any stage could observe it: Init is never broadcast.
            status: EngineStatus::Init,
            time_scale,
            fps_limit: FpsLimit::new(config.fps_limit),
            pacer: Box::new(ThreadPacer),
            size: None,
            counters: FrameCounters::default(),
            exit_requested: false,
        };

        log::info!(
            "game initialized in {:.3} ms (stage `{initial}`, fps limit {})",
            started.elapsed().as_secs_f64() * 1000.0,
            game.fps_limit.limit_fps(),
        );

        Ok(game)
    }

    /// Replaces the thread-sleeping pacer.
    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    /// Registers `builder` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, builder: impl StageBuilder + 'static) {
        self.switcher.registry_mut().register(name, builder);
    }

    /// Builds the stage registered under `name` and activates it at the top of
    /// the next frame.
    ///
    /// Returns `false` and changes nothing when `name` is unknown. Of several
    /// requests within one frame only the last is activated.
    pub fn request_stage_load(&mut self, name: &str) -> bool {
        self.switcher.request(name)
    }

    /// Caps the frame rate; `0` removes the cap.
    pub fn set_fps_limit(&mut self, fps: u32) {
        self.fps_limit = FpsLimit::new(fps);
        log::debug!("fps limit set to {fps}");
    }

    pub fn fps_limit(&self) -> FpsLimit {
        self.fps_limit
    }

    /// Negative or non-finite values are ignored.
    pub fn set_time_scale(&mut self, scale: f32) {
        if valid_time_scale(scale) {
            self.time_scale = scale;
        } else {
            log::warn!("ignoring invalid time scale {scale}");
        }
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn status(&self) -> EngineStatus {
        self.status
    }

    pub fn active_stage_name(&self) -> &str {
        &self.stage_name
    }

    pub fn pending_stage_name(&self) -> Option<&str> {
        self.switcher.pending_name()
    }

    pub fn registry(&self) -> &StageRegistry {
        self.switcher.registry()
    }

    pub fn counters(&self) -> &FrameCounters {
        &self.counters
    }

    /// Delivers an event to the active stage. Ignored once stopped.
    pub fn trigger_event(&mut self, name: &str, payload: &EventPayload) {
        if !self.status.is_stopped() {
            self.stage.trigger_event(name, payload);
        }
    }

    fn set_status(&mut self, status: EngineStatus) {
        if self.status == status {
            return;
        }

        log::debug!("engine status {} -> {status}", self.status);
        self.status = status;

        // The stage is being torn down on Stop; don't poke it.
        if !status.is_stopped() {
            self.stage
                .trigger_event(STATUS_EVENT, &EventPayload::Status(status));
        }
    }

    fn swap_pending(&mut self) {
        let Some(PendingStage { name, stage }) = self.switcher.take_pending() else {
            return;
        };

        log::info!("switching stage `{}` -> `{name}`", self.stage_name);

        // Release the outgoing stage fully before the incoming one allocates.
        self.stage.dispose();
        self.stage = stage;
        self.stage_name = name;
        self.stage.create();

        if let Some((width, height)) = self.size {
            self.stage.resize(width, height);
        }
    }

    fn update_logic(&mut self, delta: f32) {
        self.counters.update.start();

        let scaled = delta * self.time_scale;
        let mut ctl = StageControl::new(
            &mut self.switcher,
            &mut self.time_scale,
            &mut self.fps_limit,
            &mut self.exit_requested,
            self.status,
        );
        self.stage.update(scaled, &mut ctl);

        self.counters.update.stop();
    }

    fn render_graphics(&mut self, canvas: &mut dyn Canvas) {
        self.counters.draw.start();

        canvas.clear(CLEAR_SENTINEL);
        self.stage.render(canvas);

        self.counters.draw.stop();
    }

    fn limit_rate(&mut self, elapsed: Duration) {
        let Some(remaining) = self.fps_limit.remaining(elapsed) else {
            return;
        };

        if let Err(e) = self.pacer.sleep(remaining) {
            log::error!("failed to sleep: {e}");
        }
    }
}

impl App for Game {
    fn create(&mut self) {
        if self.status != EngineStatus::Init {
            log::warn!("create called in status {}; ignored", self.status);
            return;
        }

        self.stage.create();
        self.set_status(EngineStatus::Run);
    }

    fn resize(&mut self, width: u32, height: u32) {
        if self.status.is_stopped() {
            return;
        }

        log::debug!("resizing screen to {width}x{height}");
        self.size = Some((width, height));
        self.stage.resize(width, height);
    }

    fn render(&mut self, frame: &mut FrameCtx<'_>) -> AppControl {
        if self.status.is_stopped() {
            log::warn!("frame requested after dispose; ignored");
            return AppControl::Exit;
        }

        self.counters.frame.start();

        self.swap_pending();
        if self.status == EngineStatus::Resume {
            self.set_status(EngineStatus::Run);
        }

        // Unclamped: the stage sees exactly the measured interval, scaled.
        self.update_logic(frame.time.raw_dt);
        self.render_graphics(&mut *frame.canvas);

        if self.exit_requested {
            AppControl::Exit
        } else {
            AppControl::Continue
        }
    }

    fn frame_presented(&mut self) {
        // Frames ignored after dispose never started the counter.
        if let Some(elapsed) = self.counters.frame.stop() {
            self.limit_rate(elapsed);
        }
    }

    fn pause(&mut self) {
        if self.status.is_stopped() {
            return;
        }

        self.set_status(EngineStatus::Pause);
        self.stage.pause();
    }

    fn resume(&mut self) {
        if self.status.is_stopped() {
            return;
        }

        self.set_status(EngineStatus::Resume);
        self.stage.resume();
    }

    fn dispose(&mut self) {
        if self.status.is_stopped() {
            return;
        }

        self.set_status(EngineStatus::Stop);
        self.stage.dispose();

        if let Some(pending) = self.switcher.take_pending() {
            log::debug!("dropping stage `{}` queued before shutdown", pending.name);
        }

        for counter in self.counters.iter() {
            log::info!("{counter}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use proscenium_engine::time::FrameTime;

    use super::*;
    use crate::testing::{Journal, RecordingCanvas, RecordingPacer, RecordingStage};

    fn registry(journal: &Journal) -> StageRegistry {
        let mut registry = StageRegistry::new();
        registry.register("a", journal.builder("a"));
        registry.register("b", journal.builder("b"));
        registry.register("c", journal.builder("c"));
        registry
    }

    fn config(fps: u32) -> GameConfig {
        GameConfig {
            fps_limit: fps,
            ..GameConfig::default()
        }
    }

    /// Game on stage `a`, created, with a recording pacer.
    fn running_game(journal: &Journal, fps: u32) -> (Game, RecordingPacer) {
        let pacer = RecordingPacer::default();
        let mut game = Game::new(registry(journal), "a", &config(fps))
            .unwrap()
            .with_pacer(pacer.clone());
        game.create();
        journal.clear();
        (game, pacer)
    }

    /// One runtime frame: render, then presentation.
    fn frame(game: &mut Game, dt: f32) -> (AppControl, RecordingCanvas) {
        let mut canvas = RecordingCanvas::default();
        let control = game.render(&mut FrameCtx::new(FrameTime::from_secs(dt, 0), &mut canvas));
        game.frame_presented();
        (control, canvas)
    }

    fn status_events(journal: &Journal) -> Vec<String> {
        journal
            .entries()
            .into_iter()
            .filter(|e| e.contains("event(game:status"))
            .collect()
    }

    // ── construction & create ─────────────────────────────────────────────

    #[test]
    fn unknown_initial_stage_is_rejected() {
        let journal = Journal::default();
        let err = Game::new(registry(&journal), "missing", &config(0)).err();
        assert!(matches!(err, Some(GameError::UnknownStage(name)) if name == "missing"));
    }

    #[test]
    fn construction_builds_initial_stage_without_broadcast() {
        let journal = Journal::default();
        let game = Game::new(registry(&journal), "a", &config(0)).unwrap();

        assert_eq!(game.status(), EngineStatus::Init);
        assert_eq!(game.active_stage_name(), "a");
        assert_eq!(journal.entries(), ["a.build"]);
    }

    #[test]
    fn create_forwards_then_enters_run() {
        let journal = Journal::default();
        let mut game = Game::new(registry(&journal), "a", &config(0)).unwrap();
        game.create();

        assert_eq!(game.status(), EngineStatus::Run);
        assert_eq!(journal.entries(), ["a.build", "a.create", "a.event(game:status=RUN)"]);
    }

    #[test]
    fn second_create_is_ignored() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);
        game.create();
        assert!(journal.entries().is_empty());
    }

    // ── frame sequence ────────────────────────────────────────────────────

    #[test]
    fn frame_updates_then_clears_then_renders() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);

        let (control, canvas) = frame(&mut game, 0.016);

        assert_eq!(control, AppControl::Continue);
        assert_eq!(journal.entries(), ["a.update", "a.render"]);
        assert_eq!(canvas.clears, [CLEAR_SENTINEL]);
    }

    #[test]
    fn time_scale_multiplies_delta() {
        let journal = Journal::default();
        let deltas = Rc::new(RefCell::new(Vec::new()));
        let mut registry = StageRegistry::new();
        {
            let (journal, deltas) = (journal.clone(), deltas.clone());
            registry.register("scaled", move || -> Box<dyn Stage> {
                Box::new(RecordingStage::new("scaled", journal.clone()).with_deltas(deltas.clone()))
            });
        }

        let mut game = Game::new(registry, "scaled", &config(0)).unwrap();
        game.create();
        game.set_time_scale(0.5);
        frame(&mut game, 0.02);

        let seen = deltas.borrow()[0];
        assert!((seen - 0.01).abs() < 1e-7, "update saw {seen}");
    }

    #[test]
    fn update_receives_the_unclamped_delta() {
        let journal = Journal::default();
        let deltas = Rc::new(RefCell::new(Vec::new()));
        let mut registry = StageRegistry::new();
        {
            let (journal, deltas) = (journal.clone(), deltas.clone());
            registry.register("stalled", move || -> Box<dyn Stage> {
                Box::new(RecordingStage::new("stalled", journal.clone()).with_deltas(deltas.clone()))
            });
        }

        let mut game = Game::new(registry, "stalled", &config(0)).unwrap();
        game.create();
        game.set_time_scale(0.5);

        // A 500 ms stall, which the runtime clock clamps to 250 ms in `dt`.
        let stall = FrameTime {
            dt: 0.25,
            raw_dt: 0.5,
            now: Instant::now(),
            frame_index: 0,
        };
        let mut canvas = RecordingCanvas::default();
        game.render(&mut FrameCtx::new(stall, &mut canvas));

        // And a zero interval, raised to 0.1 ms in `dt`.
        let instant = FrameTime {
            dt: 0.0001,
            raw_dt: 0.0,
            now: Instant::now(),
            frame_index: 1,
        };
        game.render(&mut FrameCtx::new(instant, &mut canvas));

        assert_eq!(*deltas.borrow(), [0.25, 0.0]);
    }

    #[test]
    fn invalid_time_scale_is_ignored() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);
        game.set_time_scale(2.0);
        game.set_time_scale(-1.0);
        game.set_time_scale(f32::NAN);
        assert_eq!(game.time_scale(), 2.0);
    }

    #[test]
    fn resize_is_forwarded() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);
        game.resize(800, 600);
        assert_eq!(journal.entries(), ["a.resize(800x600)"]);
    }

    // ── stage loading & swapping ──────────────────────────────────────────

    #[test]
    fn load_activates_the_built_stage_on_next_frame() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);

        assert!(game.request_stage_load("b"));
        assert_eq!(game.pending_stage_name(), Some("b"));
        assert_eq!(game.active_stage_name(), "a");
        assert_eq!(journal.entries(), ["b.build"]);

        frame(&mut game, 0.016);

        assert_eq!(game.active_stage_name(), "b");
        assert_eq!(game.pending_stage_name(), None);
        assert_eq!(journal.count("b.build"), 1);
        assert_eq!(
            journal.entries(),
            ["b.build", "a.dispose", "b.create", "b.update", "b.render"]
        );
    }

    #[test]
    fn outgoing_dispose_precedes_incoming_create() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);

        game.request_stage_load("b");
        frame(&mut game, 0.016);

        let dispose = journal.position("a.dispose").unwrap();
        let create = journal.position("b.create").unwrap();
        assert!(dispose < create);
    }

    #[test]
    fn unknown_stage_changes_nothing() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);

        assert!(!game.request_stage_load("nope"));
        assert_eq!(game.pending_stage_name(), None);

        frame(&mut game, 0.016);
        assert_eq!(game.active_stage_name(), "a");
        assert_eq!(journal.entries(), ["a.update", "a.render"]);
    }

    #[test]
    fn unknown_stage_keeps_previous_request() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);

        assert!(game.request_stage_load("b"));
        assert!(!game.request_stage_load("nope"));
        assert_eq!(game.pending_stage_name(), Some("b"));
    }

    #[test]
    fn only_the_last_request_is_activated() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);

        game.request_stage_load("b");
        game.request_stage_load("c");
        frame(&mut game, 0.016);

        assert_eq!(game.active_stage_name(), "c");
        assert_eq!(journal.count("b.build"), 1);
        assert_eq!(journal.count("b.create"), 0);
        assert_eq!(journal.count("b.dispose"), 0);
        assert_eq!(journal.count("c.create"), 1);
    }

    #[test]
    fn load_from_update_is_deferred_to_next_frame() {
        let journal = Journal::default();
        let mut registry = registry(&journal);
        {
            let journal = journal.clone();
            registry.register("menu", move || -> Box<dyn Stage> {
                Box::new(RecordingStage::new("menu", journal.clone()).on_update(|ctl| {
                    assert!(ctl.load_stage("b"));
                    assert!(!ctl.load_stage("nope"));
                    assert_eq!(ctl.pending_stage(), Some("b"));
                }))
            });
        }
        let mut game = Game::new(registry, "menu", &config(0))
            .unwrap()
            .with_pacer(RecordingPacer::default());
        game.create();
        journal.clear();

        frame(&mut game, 0.016);
        // Still the same stage for the rest of this frame.
        assert_eq!(journal.entries(), ["menu.update", "b.build", "menu.render"]);

        journal.clear();
        frame(&mut game, 0.016);
        assert_eq!(journal.entries(), ["menu.dispose", "b.create", "b.update", "b.render"]);
    }

    #[test]
    fn swapped_stage_receives_last_size() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);
        game.resize(640, 480);
        journal.clear();

        game.request_stage_load("b");
        frame(&mut game, 0.016);

        assert_eq!(
            journal.entries(),
            ["b.build", "a.dispose", "b.create", "b.resize(640x480)", "b.update", "b.render"]
        );
    }

    #[test]
    fn registering_after_construction_is_visible() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);
        game.register("late", journal.builder("late"));

        assert!(game.registry().contains("late"));
        assert!(game.request_stage_load("late"));
    }

    // ── pacing ────────────────────────────────────────────────────────────

    #[test]
    fn disabled_limit_never_paces() {
        let journal = Journal::default();
        let (mut game, pacer) = running_game(&journal, 0);

        for _ in 0..5 {
            frame(&mut game, 0.016);
        }
        assert!(pacer.sleeps.borrow().is_empty());
    }

    #[test]
    fn fast_frame_sleeps_out_the_budget() {
        let journal = Journal::default();
        let (mut game, pacer) = running_game(&journal, 1);

        frame(&mut game, 0.016);

        let sleeps = pacer.sleeps.borrow();
        assert_eq!(sleeps.len(), 1);
        let slept = sleeps[0];
        let work = game.counters().frame.current();
        assert_eq!(slept + work, Duration::from_millis(1000));
    }

    #[test]
    fn pacing_waits_for_presentation() {
        let journal = Journal::default();
        let (mut game, pacer) = running_game(&journal, 1);

        let mut canvas = RecordingCanvas::default();
        game.render(&mut FrameCtx::new(FrameTime::from_secs(0.016, 0), &mut canvas));
        assert!(pacer.sleeps.borrow().is_empty());

        // Clear and present time counts against the budget.
        std::thread::sleep(Duration::from_millis(5));
        game.frame_presented();

        let sleeps = pacer.sleeps.borrow();
        assert_eq!(sleeps.len(), 1);
        let work = game.counters().frame.current();
        assert!(work >= Duration::from_millis(5), "frame measured {work:?}");
        assert_eq!(sleeps[0] + work, Duration::from_millis(1000));
    }

    #[test]
    fn presentation_without_a_frame_never_paces() {
        let journal = Journal::default();
        let (mut game, pacer) = running_game(&journal, 1);

        game.frame_presented();
        game.dispose();
        frame(&mut game, 0.016);

        assert!(pacer.sleeps.borrow().is_empty());
        assert_eq!(game.counters().frame.count(), 0);
    }

    #[test]
    fn limit_changes_apply_to_later_frames() {
        let journal = Journal::default();
        let (mut game, pacer) = running_game(&journal, 0);

        game.set_fps_limit(1);
        assert_eq!(game.fps_limit().max_frame_millis(), 1000);
        frame(&mut game, 0.016);
        game.set_fps_limit(0);
        frame(&mut game, 0.016);

        assert_eq!(pacer.sleeps.borrow().len(), 1);
    }

    #[test]
    fn pacing_failure_does_not_abort_the_loop() {
        let journal = Journal::default();
        let pacer = RecordingPacer {
            fail: true,
            ..RecordingPacer::default()
        };
        let mut game = Game::new(registry(&journal), "a", &config(1))
            .unwrap()
            .with_pacer(pacer.clone());
        game.create();

        assert_eq!(frame(&mut game, 0.016).0, AppControl::Continue);
        assert_eq!(frame(&mut game, 0.016).0, AppControl::Continue);
        assert_eq!(pacer.sleeps.borrow().len(), 2);
        assert_eq!(journal.count("a.render"), 2);
    }

    // ── status broadcasts ─────────────────────────────────────────────────

    #[test]
    fn pause_broadcasts_once() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);

        game.pause();

        assert_eq!(game.status(), EngineStatus::Pause);
        assert_eq!(status_events(&journal), ["a.event(game:status=PAUSE)"]);
        assert_eq!(journal.entries(), ["a.event(game:status=PAUSE)", "a.pause"]);
    }

    #[test]
    fn resume_is_transient() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);

        game.pause();
        game.resume();
        assert_eq!(game.status(), EngineStatus::Resume);

        frame(&mut game, 0.016);
        assert_eq!(game.status(), EngineStatus::Run);

        frame(&mut game, 0.016);
        assert_eq!(
            status_events(&journal),
            [
                "a.event(game:status=PAUSE)",
                "a.event(game:status=RESUME)",
                "a.event(game:status=RUN)",
            ]
        );
    }

    #[test]
    fn dispose_never_broadcasts() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);

        game.dispose();

        assert_eq!(game.status(), EngineStatus::Stop);
        assert!(status_events(&journal).is_empty());
        assert_eq!(journal.entries(), ["a.dispose"]);
    }

    #[test]
    fn user_events_reach_the_active_stage() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);

        game.trigger_event("score", &EventPayload::Json(serde_json::json!({ "points": 3 })));
        assert_eq!(journal.entries(), [r#"a.event(score={"points":3})"#]);
    }

    // ── shutdown ──────────────────────────────────────────────────────────

    #[test]
    fn dispose_is_terminal() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);

        game.dispose();
        journal.clear();

        let (control, canvas) = frame(&mut game, 0.016);
        game.pause();
        game.resume();
        game.resize(10, 10);
        game.trigger_event("late", &EventPayload::None);
        game.dispose();

        assert_eq!(control, AppControl::Exit);
        assert!(canvas.clears.is_empty());
        assert!(journal.entries().is_empty());
        assert_eq!(game.status(), EngineStatus::Stop);
    }

    #[test]
    fn pending_stage_is_dropped_on_dispose() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);

        game.request_stage_load("b");
        game.dispose();

        assert_eq!(journal.entries(), ["b.build", "a.dispose"]);
        assert_eq!(game.pending_stage_name(), None);
    }

    #[test]
    fn stage_can_request_exit() {
        let journal = Journal::default();
        let mut registry = StageRegistry::new();
        {
            let journal = journal.clone();
            registry.register("quit", move || -> Box<dyn Stage> {
                Box::new(RecordingStage::new("quit", journal.clone()).on_update(|ctl| ctl.exit()))
            });
        }
        let mut game = Game::new(registry, "quit", &config(0)).unwrap();
        game.create();

        assert_eq!(frame(&mut game, 0.016).0, AppControl::Exit);
    }

    #[test]
    fn stage_control_adjusts_scale_and_limit() {
        let journal = Journal::default();
        let mut registry = StageRegistry::new();
        {
            let journal = journal.clone();
            registry.register("tuner", move || -> Box<dyn Stage> {
                Box::new(RecordingStage::new("tuner", journal.clone()).on_update(|ctl| {
                    assert_eq!(ctl.status(), EngineStatus::Run);
                    ctl.set_time_scale(0.25);
                    ctl.set_time_scale(-3.0);
                    ctl.set_fps_limit(30);
                }))
            });
        }
        let mut game = Game::new(registry, "tuner", &config(0))
            .unwrap()
            .with_pacer(RecordingPacer::default());
        game.create();
        frame(&mut game, 0.016);

        assert_eq!(game.time_scale(), 0.25);
        assert_eq!(game.fps_limit().max_frame_millis(), 33);
    }

    #[test]
    fn counters_track_frames() {
        let journal = Journal::default();
        let (mut game, _) = running_game(&journal, 0);

        frame(&mut game, 0.016);
        frame(&mut game, 0.016);

        for counter in game.counters().iter() {
            assert_eq!(counter.count(), 2, "{}", counter.name());
        }
    }
}
