//! Input modality and the DOM events each modality listens to.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum InputMode {
    Touch,
    Pointer,
}

/// Which drag handler an event feeds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Start,
    Move,
    End,
}

const TOUCH_BINDINGS: &[(&str, DragPhase)] = &[
    ("touchstart", DragPhase::Start),
    ("touchmove", DragPhase::Move),
    ("touchend", DragPhase::End),
    ("touchcancel", DragPhase::End),
];

// Leaving the canvas ends the drag, same as releasing the button.
const POINTER_BINDINGS: &[(&str, DragPhase)] = &[
    ("mousedown", DragPhase::Start),
    ("mousemove", DragPhase::Move),
    ("mouseup", DragPhase::End),
    ("mouseleave", DragPhase::End),
];

impl InputMode {
    /// Touch if `user_agent` contains any entry of `mobile_agents`, pointer otherwise.
    ///
    /// An empty user agent or an empty allow-list always selects pointer input.
    pub fn detect<S: AsRef<str>>(user_agent: &str, mobile_agents: &[S]) -> Self {
        let is_mobile = mobile_agents
            .iter()
            .map(|needle| needle.as_ref())
            .filter(|needle| !needle.is_empty())
            .any(|needle| user_agent.contains(needle));
        if is_mobile {
            InputMode::Touch
        } else {
            InputMode::Pointer
        }
    }

    /// An explicit choice wins over sniffing the user agent.
    pub fn resolve<S: AsRef<str>>(
        preferred: Option<InputMode>,
        user_agent: &str,
        mobile_agents: &[S],
    ) -> Self {
        preferred.unwrap_or_else(|| Self::detect(user_agent, mobile_agents))
    }

    pub fn bindings(self) -> &'static [(&'static str, DragPhase)] {
        match self {
            InputMode::Touch => TOUCH_BINDINGS,
            InputMode::Pointer => POINTER_BINDINGS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Touch => "touch",
            InputMode::Pointer => "pointer",
        }
    }
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
