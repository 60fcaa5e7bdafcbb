//! Drawing the current frame onto a 2D surface.

use crate::{CanvasSize, DecodedFrames};

/// Natural size of a decoded frame, in pixels.
pub trait FrameImage {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
}

/// The subset of a 2D canvas context the viewer draws with.
///
/// `save`/`restore` bracket a transform scope; implementations must restore exactly the
/// transform that was current at the matching `save`.
pub trait DrawSurface {
    type Image: FrameImage;
    type Error;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn save(&mut self);
    fn translate(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;
    fn scale(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;
    fn draw_image(&mut self, image: &Self::Image, x: f64, y: f64) -> Result<(), Self::Error>;
    fn restore(&mut self);
}

/// Top-left offset that centers an image of `image_w`x`image_h`, drawn at `scale`, in `canvas`.
pub fn centered_origin(canvas: CanvasSize, image_w: f64, image_h: f64, scale: f64) -> [f64; 2] {
    [
        canvas.width / 2.0 - image_w * scale / 2.0,
        canvas.height / 2.0 - image_h * scale / 2.0,
    ]
}

/// Clears the canvas and draws frame `index` centered at `scale`.
///
/// A frame that is not decoded leaves the canvas cleared. The transform is always restored,
/// also when a drawing call fails.
pub fn draw_frame<S: DrawSurface>(
    surface: &mut S,
    canvas: CanvasSize,
    frames: &DecodedFrames<S::Image>,
    index: usize,
    scale: f64,
) -> Result<bool, S::Error> {
    surface.clear_rect(0.0, 0.0, canvas.width, canvas.height);
    let Some(image) = frames.get(index) else {
        return Ok(false);
    };

    let [x, y] = centered_origin(canvas, image.width(), image.height(), scale);
    surface.save();
    let drawn = draw_transformed(surface, image, x, y, scale);
    surface.restore();
    drawn.map(|()| true)
}

fn draw_transformed<S: DrawSurface>(
    surface: &mut S,
    image: &S::Image,
    x: f64,
    y: f64,
    scale: f64,
) -> Result<(), S::Error> {
    surface.translate(x, y)?;
    surface.scale(scale, scale)?;
    surface.draw_image(image, 0.0, 0.0)
}
