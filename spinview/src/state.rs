//! Mutable runtime state of one viewer.

/// Backing size of the canvas, in CSS pixels.
///
/// The unrounded values are kept for drawing math; the canvas element itself only accepts whole
/// pixels, see [`CanvasSize::pixel_width`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn from_viewport(viewport_width: f64, viewport_height: f64, divisor: f64) -> Self {
        Self {
            width: (viewport_width / divisor).max(0.0),
            height: (viewport_height / divisor).max(0.0),
        }
    }

    pub fn pixel_width(&self) -> u32 {
        self.width as u32
    }

    pub fn pixel_height(&self) -> u32 {
        self.height as u32
    }
}

/// Direction of one drag step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Backward,
    Forward,
}

impl Step {
    /// Direction from the anchor to `x`. Equal coordinates produce no step.
    pub fn between(anchor: i32, x: i32) -> Option<Self> {
        match x.cmp(&anchor) {
            std::cmp::Ordering::Less => Some(Step::Backward),
            std::cmp::Ordering::Greater => Some(Step::Forward),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn delta(self) -> isize {
        match self {
            Step::Backward => -1,
            Step::Forward => 1,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    pub active: bool,
    pub anchor_x: i32,
}

/// Result of a move event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DragMove {
    /// No drag is active; nothing changed and nothing needs redrawing.
    Inactive,
    /// The drag advanced. `step` is `None` when the pointer did not move horizontally.
    Moved { step: Option<Step>, frame_index: usize },
}

impl DragMove {
    pub fn needs_redraw(&self) -> bool {
        matches!(self, DragMove::Moved { .. })
    }
}

/// Frame index, canvas size and drag tracking.
///
/// `frame_index` is always in `[0, frame_count)`; for an empty ring it stays `0`.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerState {
    frame_count: usize,
    frame_index: usize,
    canvas: CanvasSize,
    drag: DragState,
}

impl ViewerState {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count,
            frame_index: 0,
            canvas: CanvasSize::default(),
            drag: DragState::default(),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    pub fn set_canvas(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
    }

    pub fn drag_start(&mut self, x: i32) {
        self.drag = DragState {
            active: true,
            anchor_x: x,
        };
    }

    /// Steps one frame toward the side `x` lies on relative to the anchor, then re-anchors at
    /// `x`. Speed follows the number of move events, not the distance travelled.
    pub fn drag_move(&mut self, x: i32) -> DragMove {
        if !self.drag.active {
            return DragMove::Inactive;
        }
        let step = Step::between(self.drag.anchor_x, x);
        if let Some(step) = step {
            self.advance(step);
        }
        self.drag.anchor_x = x;
        DragMove::Moved {
            step,
            frame_index: self.frame_index,
        }
    }

    pub fn drag_end(&mut self) {
        self.drag.active = false;
    }

    pub fn advance(&mut self, step: Step) {
        self.frame_index = wrap_index(self.frame_index as isize + step.delta(), self.frame_count);
    }
}

/// Wraps `index` into `[0, frame_count)`, including negative values. An empty ring maps to `0`.
pub fn wrap_index(index: isize, frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    index.rem_euclid(frame_count as isize) as usize
}
