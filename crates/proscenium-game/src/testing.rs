//! Test doubles shared by the unit tests of this crate.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use proscenium_engine::core::Canvas;
use proscenium_engine::paint::Color;

use crate::control::StageControl;
use crate::pacing::{Pacer, PacingError};
use crate::stage::{EventPayload, Stage};

/// Ordered log of side effects, shared between stages and the test body.
#[derive(Debug, Default, Clone)]
pub(crate) struct Journal(Rc<RefCell<Vec<String>>>);

impl Journal {
    pub(crate) fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub(crate) fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub(crate) fn count(&self, entry: &str) -> usize {
        self.0.borrow().iter().filter(|e| *e == entry).count()
    }

    pub(crate) fn position(&self, entry: &str) -> Option<usize> {
        self.0.borrow().iter().position(|e| e == entry)
    }

    pub(crate) fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Builder that logs `<label>.build` and yields a [`RecordingStage`].
    pub(crate) fn builder(&self, label: &'static str) -> impl Fn() -> Box<dyn Stage> + 'static {
        let journal = self.clone();
        move || -> Box<dyn Stage> {
            journal.push(format!("{label}.build"));
            Box::new(RecordingStage::new(label, journal.clone()))
        }
    }
}

type UpdateHook = Box<dyn FnMut(&mut StageControl<'_>)>;

/// Stage that logs every hook as `<label>.<hook>`.
pub(crate) struct RecordingStage {
    label: &'static str,
    journal: Journal,
    deltas: Rc<RefCell<Vec<f32>>>,
    on_update: Option<UpdateHook>,
}

impl RecordingStage {
    pub(crate) fn new(label: &'static str, journal: Journal) -> Self {
        Self {
            label,
            journal,
            deltas: Rc::default(),
            on_update: None,
        }
    }

    /// Shares the list of deltas passed to `update`.
    pub(crate) fn with_deltas(mut self, deltas: Rc<RefCell<Vec<f32>>>) -> Self {
        self.deltas = deltas;
        self
    }

    /// Runs `hook` on every update.
    pub(crate) fn on_update(mut self, hook: impl FnMut(&mut StageControl<'_>) + 'static) -> Self {
        self.on_update = Some(Box::new(hook));
        self
    }

    fn log(&self, hook: &str) {
        self.journal.push(format!("{}.{hook}", self.label));
    }
}

impl Stage for RecordingStage {
    fn create(&mut self) {
        self.log("create");
    }

    fn update(&mut self, delta: f32, ctl: &mut StageControl<'_>) {
        self.log("update");
        self.deltas.borrow_mut().push(delta);
        if let Some(hook) = &mut self.on_update {
            hook(ctl);
        }
    }

    fn render(&mut self, _canvas: &mut dyn Canvas) {
        self.log("render");
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.log(&format!("resize({width}x{height})"));
    }

    fn pause(&mut self) {
        self.log("pause");
    }

    fn resume(&mut self) {
        self.log("resume");
    }

    fn dispose(&mut self) {
        self.log("dispose");
    }

    fn trigger_event(&mut self, name: &str, payload: &EventPayload) {
        let payload = match payload {
            EventPayload::None => "-".to_string(),
            EventPayload::Status(status) => status.to_string(),
            EventPayload::Text(text) => text.clone(),
            EventPayload::Json(value) => value.to_string(),
        };
        self.log(&format!("event({name}={payload})"));
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingCanvas {
    pub(crate) clears: Vec<Color>,
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.clears.push(color);
    }
}

/// Pacer that records requested delays instead of sleeping.
#[derive(Debug, Default, Clone)]
pub(crate) struct RecordingPacer {
    pub(crate) sleeps: Rc<RefCell<Vec<Duration>>>,
    pub(crate) fail: bool,
}

impl Pacer for RecordingPacer {
    fn sleep(&mut self, duration: Duration) -> Result<(), PacingError> {
        self.sleeps.borrow_mut().push(duration);
        if self.fail {
            Err(PacingError::Interrupted("test interrupt".to_string()))
        } else {
            Ok(())
        }
    }
}
