//! Decoded frames and the all-or-nothing preload that fills them.

use crate::Error;

#[derive(Clone, Debug, PartialEq)]
pub enum FrameSlot<T> {
    Absent,
    Loading,
    Ready(T),
    Failed,
}

impl<T> FrameSlot<T> {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FrameSlot::Ready(_) | FrameSlot::Failed)
    }
}

/// Outcome of feeding one load result into [`DecodedFrames`].
#[derive(Clone, Debug, PartialEq)]
pub enum PreloadSignal {
    /// Still waiting on `remaining` frames.
    Pending { remaining: usize },
    /// Every frame is ready. Returned exactly once.
    Complete,
    /// The first failure. Returned exactly once; later results are ignored.
    Failed(Error),
    /// Duplicate result, or a result that arrived after the preload settled.
    Ignored,
}

/// Frame index to decoded image, plus the fan-in counter that settles the preload.
///
/// All loads are issued at once by the caller (`begin`), and each load reports back through
/// [`resolve`](Self::resolve) or [`reject`](Self::reject) in any order. The preload settles
/// once: either when the last frame becomes ready or on the first failure.
#[derive(Clone, Debug)]
pub struct DecodedFrames<T> {
    slots: Vec<FrameSlot<T>>,
    ready: usize,
    settled: bool,
}

impl<T> DecodedFrames<T> {
    pub fn new(frame_count: usize) -> Self {
        Self {
            slots: (0..frame_count).map(|_| FrameSlot::Absent).collect(),
            ready: 0,
            settled: false,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn ready_count(&self) -> usize {
        self.ready
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn is_complete(&self) -> bool {
        self.settled && self.ready == self.slots.len()
    }

    /// Marks every absent slot as loading. An empty ring completes immediately.
    pub fn begin(&mut self) -> PreloadSignal {
        if self.settled {
            return PreloadSignal::Ignored;
        }
        for slot in &mut self.slots {
            if matches!(slot, FrameSlot::Absent) {
                *slot = FrameSlot::Loading;
            }
        }
        if self.ready == self.slots.len() {
            self.settled = true;
            return PreloadSignal::Complete;
        }
        PreloadSignal::Pending {
            remaining: self.slots.len() - self.ready,
        }
    }

    pub fn resolve(&mut self, index: usize, image: T) -> Result<PreloadSignal, Error> {
        let frame_count = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(Error::FrameOutOfRange { index, frame_count })?;
        if !matches!(slot, FrameSlot::Loading) {
            return Ok(PreloadSignal::Ignored);
        }
        *slot = FrameSlot::Ready(image);
        self.ready += 1;

        if self.settled {
            return Ok(PreloadSignal::Ignored);
        }
        if self.ready == frame_count {
            self.settled = true;
            return Ok(PreloadSignal::Complete);
        }
        Ok(PreloadSignal::Pending {
            remaining: frame_count - self.ready,
        })
    }

    pub fn reject(&mut self, index: usize, error: Error) -> Result<PreloadSignal, Error> {
        let frame_count = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(Error::FrameOutOfRange { index, frame_count })?;
        if !matches!(slot, FrameSlot::Loading) {
            return Ok(PreloadSignal::Ignored);
        }
        *slot = FrameSlot::Failed;

        if self.settled {
            return Ok(PreloadSignal::Ignored);
        }
        self.settled = true;
        Ok(PreloadSignal::Failed(error))
    }

    pub fn slot(&self, index: usize) -> Option<&FrameSlot<T>> {
        self.slots.get(index)
    }

    /// The decoded image for `index`, if it finished loading.
    pub fn get(&self, index: usize) -> Option<&T> {
        match self.slots.get(index) {
            Some(FrameSlot::Ready(image)) => Some(image),
            _ => None,
        }
    }
}
