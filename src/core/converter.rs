use crate::core::{Axis, LinearScale, Scale, Viewport};

/// Converts value-space numbers into pixel coordinates along one axis.
///
/// The pixel-space scale spans `[0, extent]` for the axis; Y axes are
/// inverted so larger values land nearer the top edge.
#[derive(Debug, Clone, Copy)]
pub struct PixelConverter<'a> {
    value_scale: &'a dyn Scale,
    pixel_scale: LinearScale,
}

impl<'a> PixelConverter<'a> {
    #[must_use]
    pub fn new(value_scale: &'a dyn Scale, axis: Axis, viewport: Viewport) -> Self {
        Self {
            value_scale,
            pixel_scale: LinearScale::pixel_span(viewport.extent(axis), axis.is_pixel_inverted()),
        }
    }

    #[must_use]
    pub fn pixel_scale(&self) -> LinearScale {
        self.pixel_scale
    }

    /// Raw pixel coordinate for `value`. Out-of-domain values extrapolate.
    #[must_use]
    pub fn to_pixel(&self, value: f64) -> f64 {
        self.value_scale.convert_to(&self.pixel_scale, value)
    }

    /// Pixel coordinate of a 1px tick stroke centered for crisp output.
    #[must_use]
    pub fn tick_coordinate(&self, value: f64) -> f64 {
        snap_to_half_pixel(self.to_pixel(value))
    }
}

/// `floor(pixel) + 0.5`.
#[must_use]
pub fn snap_to_half_pixel(pixel: f64) -> f64 {
    pixel.floor() + 0.5
}
