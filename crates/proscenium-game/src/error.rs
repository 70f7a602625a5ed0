use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// The initial stage must resolve, so that a stage is active from the first frame on.
    #[error("no stage builder registered under `{0}`")]
    UnknownStage(String),
}
