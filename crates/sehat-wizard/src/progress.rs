use serde::Serialize;
use ts_rs::TS;

/// Position within the question phase, for the progress bar and the
/// "n of m" caption. Derived from session state on demand; meaningless
/// outside the question phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Progress {
    /// 1-based position of the question being shown.
    pub position: usize,
    pub total: usize,
    /// `position / total`, in (0, 1].
    pub fraction: f32,
}

impl Progress {
    pub(crate) fn at(index: usize, total: usize) -> Self {
        Self {
            position: index + 1,
            total,
            fraction: (index + 1) as f32 / total as f32,
        }
    }
}
