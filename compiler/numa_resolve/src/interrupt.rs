//! Binding of `next`, `stop` and `return` to their enclosing construct.
//!
//! The resolver pushes a frame on entering a loop, a `switch`/`sweep` or a
//! function body and pops it on leaving. A control-transfer statement
//! scans the stack from the top for the nearest frame it may target.
//!
//! A `Function` frame is a wall for `next` and `stop`: a loop enclosing a
//! nested function is never their target.

use numa_ir::StmtId;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FrameKind {
    /// `while` or `for`.
    Loop,
    /// `switch` or `sweep`.
    Switch,
    /// A function body.
    Function,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Frame {
    pub kind: FrameKind,
    /// The statement that pushed the frame.
    pub target: StmtId,
}

/// Why a control transfer found no target.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BindError {
    /// No enclosing frame of an accepted kind.
    NoTarget,
    /// The scan reached the enclosing function first.
    CrossesFunction,
}

#[derive(Clone, Default, Debug)]
pub struct InterruptStack {
    frames: Vec<Frame>,
}

impl InterruptStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: FrameKind, target: StmtId) {
        self.frames.push(Frame { kind, target });
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Innermost enclosing loop.
    pub fn bind_next(&self) -> Result<StmtId, BindError> {
        self.scan(|kind| kind == FrameKind::Loop)
    }

    /// Innermost enclosing loop or switch.
    pub fn bind_stop(&self) -> Result<StmtId, BindError> {
        self.scan(|kind| matches!(kind, FrameKind::Loop | FrameKind::Switch))
    }

    /// Innermost enclosing function.
    pub fn bind_return(&self) -> Option<StmtId> {
        self.frames
            .iter()
            .rev()
            .find(|frame| frame.kind == FrameKind::Function)
            .map(|frame| frame.target)
    }

    /// `CrossesFunction` only when an accepted frame exists beyond the
    /// innermost function wall.
    fn scan(&self, accepts: impl Fn(FrameKind) -> bool) -> Result<StmtId, BindError> {
        let mut frames = self.frames.iter().rev();
        for frame in frames.by_ref() {
            if accepts(frame.kind) {
                return Ok(frame.target);
            }
            if frame.kind == FrameKind::Function {
                break;
            }
        }
        if frames.any(|frame| accepts(frame.kind)) {
            Err(BindError::CrossesFunction)
        } else {
            Err(BindError::NoTarget)
        }
    }
}
