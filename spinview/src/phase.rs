/// Lifecycle of a viewer.
///
/// `Uninitialized -> Loading -> Ready`, or `Loading -> Failed` on the first texture error.
/// `Failed` has no way back. Any phase may move to `Disposed`, which is also terminal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewerPhase {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    Failed,
    Disposed,
}

impl ViewerPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewerPhase::Uninitialized => "uninitialized",
            ViewerPhase::Loading => "loading",
            ViewerPhase::Ready => "ready",
            ViewerPhase::Failed => "failed",
            ViewerPhase::Disposed => "disposed",
        }
    }
}

impl std::fmt::Display for ViewerPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
