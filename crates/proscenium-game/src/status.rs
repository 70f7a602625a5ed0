use std::fmt;

/// Lifecycle state of the engine.
///
/// ```text
/// Init --create--> Run --pause--> Pause --resume--> Resume --next frame--> Run
///   any --dispose--> Stop
/// ```
///
/// `Resume` is transient: it lasts until the next rendered frame. `Stop` is
/// terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EngineStatus {
    Init,
    Run,
    Pause,
    Resume,
    Stop,
}

impl EngineStatus {
    #[inline]
    pub fn is_stopped(self) -> bool {
        self == EngineStatus::Stop
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EngineStatus::Init => "INIT",
            EngineStatus::Run => "RUN",
            EngineStatus::Pause => "PAUSE",
            EngineStatus::Resume => "RESUME",
            EngineStatus::Stop => "STOP",
        }
    }
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
