//! Face-by-face capture workflow.

use cube_scan_core::{CubeState, Face, FaceCapture};
use cube_scan_validate::{validate, ValidationReport};
use log::info;

/// Errors from the capture workflow.
#[derive(thiserror::Error, Debug, Eq, PartialEq)]
pub enum SessionError {
    #[error("face {0} is already captured; undo or recapture it explicitly")]
    FaceAlreadyCaptured(Face),

    #[error("nothing to undo")]
    NothingToUndo,
}

/// Linear capture workflow over the six face slots with an undo stack.
///
/// The session owns the [`CubeState`] while capture is in progress; callers
/// get the state back via [`CaptureSession::into_state`] once every face is
/// filled.
#[derive(Clone, Debug, Default)]
pub struct CaptureSession {
    state: CubeState,
    history: Vec<Face>,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next face to capture, in [`Face::ALL`] order; `None` when done.
    pub fn next_face(&self) -> Option<Face> {
        Face::ALL.into_iter().find(|&f| self.state.get(f).is_none())
    }

    /// Record a capture for `face`.
    ///
    /// Refuses to overwrite silently; call [`CaptureSession::recapture`] to
    /// replace a face on purpose.
    pub fn record(&mut self, face: Face, capture: FaceCapture) -> Result<(), SessionError> {
        if self.state.get(face).is_some() {
            return Err(SessionError::FaceAlreadyCaptured(face));
        }
        info!("captured {face} face ({} of 6)", self.history.len() + 1);
        self.state.set(face, capture);
        self.history.push(face);
        Ok(())
    }

    /// Replace an already-captured face.
    pub fn recapture(&mut self, face: Face, capture: FaceCapture) {
        if self.state.clear(face).is_some() {
            self.history.retain(|&f| f != face);
        }
        self.state.set(face, capture);
        self.history.push(face);
    }

    /// Drop the most recently captured face and return it.
    pub fn undo(&mut self) -> Result<Face, SessionError> {
        let face = self.history.pop().ok_or(SessionError::NothingToUndo)?;
        self.state.clear(face);
        info!("undid capture of {face} face");
        Ok(face)
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// Validate the current snapshot, complete or not.
    pub fn validate(&self) -> ValidationReport {
        validate(&self.state)
    }

    pub fn into_state(self) -> CubeState {
        self.state
    }
}
