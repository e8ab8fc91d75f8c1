pub mod converter;
pub mod log_scale;
pub mod scale;
pub mod types;

pub use converter::{PixelConverter, snap_to_half_pixel};
pub use log_scale::LogScale;
pub use scale::{LinearScale, Scale};
pub use types::{Axis, TickTier, ViewBox, Viewport};
