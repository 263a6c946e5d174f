//! # pipcast-chart
//! Hand-rolled 2D line chart renderer.
//!
//! Maps numeric sequences onto an axis-labeled line chart: a vertical axis
//! with labels counting down from a maximum, a horizontal axis ticked in
//! fixed index increments, and one connected polyline per data series, all
//! sharing a single coordinate system.
//!
//! Layout runs in surface pixel coordinates against the [`Surface`] trait;
//! the bundled [`Pixmap`] backend rasterizes into an owned RGB buffer with
//! an embedded 5×7 bitmap font and exports PNG via the `image` crate. This
//! is deliberately not a general charting library: it draws exactly the
//! chart shape described above and nothing else.

pub mod color;
pub mod error;
pub mod font;
pub mod line;
pub mod pixmap;
pub mod render;
pub mod surface;

pub use color::Rgb;
pub use error::ChartError;
pub use line::{ChartLine, ChartSpec};
pub use pixmap::Pixmap;
pub use render::{render, render_one};
pub use surface::{Point, Surface, TextAlign};
