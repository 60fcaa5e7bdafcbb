use crate::{
    CanvasSize, DecodedFrames, DragMove, DragPhase, DrawSurface, Error, InputMode, PreloadSignal,
    RedrawThrottle, TextureSet, ViewerConfig, ViewerPhase, ViewerState, draw_frame,
};

/// What a drag event asks of the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DragOutcome {
    pub drag: DragMove,
    /// The host must queue a deferred redraw. `false` when none is needed or one is already
    /// queued.
    pub schedule_redraw: bool,
}

impl DragOutcome {
    const IGNORED: Self = Self {
        drag: DragMove::Inactive,
        schedule_redraw: false,
    };
}

/// Platform-free viewer: config, textures, decoded frames, state and lifecycle.
///
/// The host (a browser front-end, or a test) owns the real surface and event sources and feeds
/// results in. `T` is the host's decoded image type.
#[derive(Debug)]
pub struct RingViewer<T> {
    config: ViewerConfig,
    textures: TextureSet,
    frames: DecodedFrames<T>,
    state: ViewerState,
    phase: ViewerPhase,
    throttle: RedrawThrottle,
    input_mode: Option<InputMode>,
}

impl<T> RingViewer<T> {
    pub fn new(config: ViewerConfig) -> Result<Self, Error> {
        config.validate()?;
        let textures = TextureSet::from_config(&config);
        Ok(Self {
            frames: DecodedFrames::new(textures.len()),
            state: ViewerState::new(textures.len()),
            textures,
            config,
            phase: ViewerPhase::Uninitialized,
            throttle: RedrawThrottle::new(),
            input_mode: None,
        })
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn textures(&self) -> &TextureSet {
        &self.textures
    }

    pub fn frames(&self) -> &DecodedFrames<T> {
        &self.frames
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn phase(&self) -> ViewerPhase {
        self.phase
    }

    pub fn frame_index(&self) -> usize {
        self.state.frame_index()
    }

    /// The chosen input wiring, once the viewer is active.
    pub fn input_mode(&self) -> Option<InputMode> {
        self.input_mode
    }

    pub fn throttle(&self) -> &RedrawThrottle {
        &self.throttle
    }

    /// Recomputes the canvas size from the viewport. The host redraws right after.
    pub fn resize(&mut self, viewport_width: f64, viewport_height: f64) -> CanvasSize {
        let size = CanvasSize::from_viewport(
            viewport_width,
            viewport_height,
            self.config.viewport_divisor,
        );
        self.state.set_canvas(size);
        size
    }

    /// Enters `Loading`. The host issues every load in [`textures`](Self::textures) before
    /// reporting any result.
    pub fn begin_preload(&mut self) -> Result<PreloadSignal, Error> {
        if self.phase != ViewerPhase::Uninitialized {
            return Err(Error::InvalidPhase {
                action: "start preloading",
                phase: self.phase,
            });
        }
        self.phase = ViewerPhase::Loading;
        let signal = self.frames.begin();
        self.settle(&signal);
        Ok(signal)
    }

    pub fn texture_loaded(&mut self, index: usize, image: T) -> Result<PreloadSignal, Error> {
        let signal = self.frames.resolve(index, image)?;
        self.settle(&signal);
        Ok(signal)
    }

    pub fn texture_failed(
        &mut self,
        index: usize,
        message: impl Into<String>,
    ) -> Result<PreloadSignal, Error> {
        let error = Error::TextureLoad {
            index,
            url: self.textures.url(index).unwrap_or_default().to_string(),
            message: message.into(),
        };
        let signal = self.frames.reject(index, error)?;
        self.settle(&signal);
        Ok(signal)
    }

    fn settle(&mut self, signal: &PreloadSignal) {
        if self.phase != ViewerPhase::Loading {
            return;
        }
        match signal {
            PreloadSignal::Complete => self.phase = ViewerPhase::Ready,
            PreloadSignal::Failed(_) => self.phase = ViewerPhase::Failed,
            PreloadSignal::Pending { .. } | PreloadSignal::Ignored => {}
        }
    }

    /// Picks the input wiring once the ring is ready. The first choice sticks.
    pub fn activate(&mut self, user_agent: &str) -> Result<InputMode, Error> {
        if self.phase != ViewerPhase::Ready {
            return Err(Error::InvalidPhase {
                action: "attach input",
                phase: self.phase,
            });
        }
        if let Some(mode) = self.input_mode {
            return Ok(mode);
        }
        let mode = InputMode::resolve(
            self.config.input_mode,
            user_agent,
            &self.config.mobile_agents,
        );
        self.input_mode = Some(mode);
        Ok(mode)
    }

    fn accepts_input(&self) -> bool {
        self.phase == ViewerPhase::Ready && self.input_mode.is_some()
    }

    pub fn drag_start(&mut self, x: i32) {
        if self.accepts_input() {
            self.state.drag_start(x);
        }
    }

    pub fn drag_move(&mut self, x: i32) -> DragOutcome {
        if !self.accepts_input() {
            return DragOutcome::IGNORED;
        }
        let drag = self.state.drag_move(x);
        let schedule_redraw = drag.needs_redraw() && self.throttle.request();
        DragOutcome {
            drag,
            schedule_redraw,
        }
    }

    pub fn drag_end(&mut self) {
        self.state.drag_end();
    }

    /// Routes a normalized event to the matching drag handler.
    pub fn handle_drag(&mut self, phase: DragPhase, x: i32) -> DragOutcome {
        match phase {
            DragPhase::Start => {
                self.drag_start(x);
                DragOutcome::IGNORED
            }
            DragPhase::Move => self.drag_move(x),
            DragPhase::End => {
                self.drag_end();
                DragOutcome::IGNORED
            }
        }
    }

    /// Releases the viewer. Later events and redraws are ignored.
    pub fn dispose(&mut self) {
        self.phase = ViewerPhase::Disposed;
        self.state.drag_end();
        self.throttle.cancel();
    }
}

impl<T> RingViewer<T> {
    /// Draws the current frame now. Returns `Ok(false)` if nothing was drawn.
    pub fn redraw<S>(&self, surface: &mut S) -> Result<bool, S::Error>
    where
        S: DrawSurface<Image = T>,
    {
        if self.phase == ViewerPhase::Disposed {
            return Ok(false);
        }
        draw_frame(
            surface,
            self.state.canvas(),
            &self.frames,
            self.state.frame_index(),
            self.config.image_scale,
        )
    }

    /// Runs a deferred redraw queued by [`drag_move`](Self::drag_move). Draws the state as it
    /// is now, so every move absorbed while the redraw was queued is reflected.
    pub fn run_scheduled_redraw<S>(&mut self, surface: &mut S) -> Result<bool, S::Error>
    where
        S: DrawSurface<Image = T>,
    {
        if !self.throttle.fire() {
            return Ok(false);
        }
        self.redraw(surface)
    }
}
