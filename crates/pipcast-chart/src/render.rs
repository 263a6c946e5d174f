//! Chart layout and rendering.
//!
//! One call clears the surface, draws both axes with ticks, labels, and
//! titles, then strokes every data line through a shared coordinate system.
//! Nothing persists between calls; callers re-render from scratch on every
//! input change.

use tracing::debug;

use crate::color::Rgb;
use crate::error::ChartError;
use crate::line::{ChartLine, ChartSpec, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH};
use crate::surface::{Point, Surface, TextAlign};

/// Padding between the plot area and every surface edge.
pub const BORDER: f32 = 10.0;
/// Height of the strip reserved under the plot for x labels.
pub const X_AXIS_MARGIN: f32 = 20.0;
/// Width of the strip reserved left of the plot for y labels.
pub const Y_AXIS_MARGIN: f32 = 30.0;

/// Tick dashes extend this far to each side of their axis.
const TICK_HALF: f32 = 3.0;
/// Axes, ticks, and labels share one stroke color.
const AXIS_COLOR: Rgb = Rgb::WHITE;
const TICK_TEXT_SCALE: u32 = 1;
const TITLE_TEXT_SCALE: u32 = 2;

/// Plot-area geometry for one render pass.
struct Frame {
    width: f32,
    height: f32,
    tick_cap: usize,
    x_increment: usize,
    y_max: f32,
}

impl Frame {
    /// Horizontal pixel position of data index `i`.
    fn plot_x(&self, index: f32) -> f32 {
        let span = self.width - Y_AXIS_MARGIN - 2.0 * BORDER;
        Y_AXIS_MARGIN + BORDER + index / (self.tick_cap * self.x_increment) as f32 * span
    }

    /// Vertical pixel position of data value `v`; larger values plot higher.
    fn plot_y(&self, value: f32) -> f32 {
        let span = self.height - X_AXIS_MARGIN - 2.0 * BORDER;
        span * (1.0 - value / self.y_max) + BORDER
    }

    fn origin(&self) -> Point {
        Point {
            x: Y_AXIS_MARGIN + BORDER,
            y: self.height - X_AXIS_MARGIN - BORDER,
        }
    }
}

/// Draws a set of lines onto `surface` under one axis specification.
///
/// Every line must hold at least one data point. The surface is cleared
/// first; lines draw in the order supplied, each independently styled.
pub fn render<S: Surface>(
    lines: &[ChartLine],
    surface: &mut S,
    spec: &ChartSpec,
) -> Result<(), ChartError> {
    if lines.is_empty() {
        return Err(ChartError::NoLines);
    }
    if let Some(index) = lines.iter().position(|line| line.values.is_empty()) {
        return Err(ChartError::EmptyLine { index });
    }
    if spec.x_increment == 0 {
        return Err(ChartError::InvalidAxis("x_increment must be positive".into()));
    }
    if spec.y_max <= 0.0 || spec.y_increment <= 0.0 {
        return Err(ChartError::InvalidAxis(format!(
            "y axis needs positive max and increment, got {} / {}",
            spec.y_max, spec.y_increment
        )));
    }

    let tick_cap = lines
        .iter()
        .map(|line| line.values.len().div_ceil(spec.x_increment))
        .max()
        .unwrap_or(1)
        .max(1);

    let frame = Frame {
        width: surface.width() as f32,
        height: surface.height() as f32,
        tick_cap,
        x_increment: spec.x_increment,
        y_max: spec.y_max as f32,
    };
    let origin = frame.origin();

    surface.clear();

    // Axes: one path up the left edge and along the bottom.
    surface.stroke_path(
        &[
            Point { x: origin.x, y: 0.0 },
            origin,
            Point { x: frame.width - BORDER, y: origin.y },
        ],
        AXIS_COLOR,
        1.0,
    );

    // Y ticks, labeled from y_max down to 0.
    let y_steps = (spec.y_max / spec.y_increment).round() as usize;
    for step in 0..=y_steps {
        let value = spec.y_max - step as f64 * spec.y_increment;
        let dash_y = frame.plot_y(value as f32);
        surface.stroke_path(
            &[
                Point { x: origin.x - TICK_HALF, y: dash_y },
                Point { x: origin.x + TICK_HALF, y: dash_y },
            ],
            AXIS_COLOR,
            1.0,
        );
        surface.fill_text(
            &format_axis_value(value),
            origin.x - 6.0,
            dash_y + 4.0,
            TextAlign::Right,
            TICK_TEXT_SCALE,
        );
    }
    surface.fill_text_rotated(&spec.y_label, 5.0, frame.height / 2.0, TITLE_TEXT_SCALE);

    // X ticks at every increment, aligned with the data mapping.
    for step in 0..=tick_cap {
        let dash_x = frame.plot_x((step * spec.x_increment) as f32);
        surface.stroke_path(
            &[
                Point { x: dash_x, y: origin.y - TICK_HALF },
                Point { x: dash_x, y: origin.y + TICK_HALF },
            ],
            AXIS_COLOR,
            1.0,
        );
        surface.fill_text(
            &format_axis_value((step * spec.x_increment) as f64),
            dash_x,
            origin.y + 14.0,
            TextAlign::Center,
            TICK_TEXT_SCALE,
        );
    }
    surface.fill_text(
        &spec.x_label,
        frame.width / 2.0,
        frame.height - 5.0,
        TextAlign::Center,
        TITLE_TEXT_SCALE,
    );

    // Data lines, each extended flat to the right plot edge.
    for line in lines {
        let stroke = line.stroke.unwrap_or(DEFAULT_STROKE);
        let width = line.width.unwrap_or(DEFAULT_STROKE_WIDTH);
        let mut path: Vec<Point> = line
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| Point {
                x: frame.plot_x(i as f32),
                y: frame.plot_y(v as f32),
            })
            .collect();
        if let Some(&last) = line.values.last() {
            path.push(Point {
                x: frame.width - BORDER,
                y: frame.plot_y(last as f32),
            });
        }
        surface.stroke_path(&path, stroke, width);
    }

    debug!(
        lines = lines.len(),
        tick_cap,
        width = frame.width,
        height = frame.height,
        "rendered chart"
    );
    Ok(())
}

/// Single-line convenience form of [`render`].
pub fn render_one<S: Surface>(
    line: &ChartLine,
    surface: &mut S,
    spec: &ChartSpec,
) -> Result<(), ChartError> {
    render(std::slice::from_ref(line), surface, spec)
}

/// Integer formatting for whole axis values, two decimals otherwise.
fn format_axis_value(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Captures drawing commands instead of rasterizing them.
    #[derive(Default)]
    struct Recorder {
        cleared: bool,
        paths: Vec<(Vec<Point>, Rgb, f32)>,
        texts: Vec<(String, f32, f32, TextAlign, u32)>,
        rotated_texts: Vec<String>,
    }

    impl Recorder {
        /// Right-aligned tick labels down the y axis.
        fn y_labels(&self) -> Vec<&str> {
            self.texts
                .iter()
                .filter(|(_, _, _, align, _)| *align == TextAlign::Right)
                .map(|(t, _, _, _, _)| t.as_str())
                .collect()
        }

        /// Centered tick labels along the x axis, excluding the title.
        fn x_labels(&self) -> Vec<&str> {
            self.texts
                .iter()
                .filter(|(_, _, _, align, scale)| {
                    *align == TextAlign::Center && *scale == TICK_TEXT_SCALE
                })
                .map(|(t, _, _, _, _)| t.as_str())
                .collect()
        }
    }

    impl Surface for Recorder {
        fn width(&self) -> u32 {
            700
        }

        fn height(&self) -> u32 {
            480
        }

        fn clear(&mut self) {
            self.cleared = true;
        }

        fn stroke_path(&mut self, points: &[Point], color: Rgb, width: f32) {
            self.paths.push((points.to_vec(), color, width));
        }

        fn fill_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign, scale: u32) {
            self.texts.push((text.to_string(), x, y, align, scale));
        }

        fn fill_text_rotated(&mut self, text: &str, _x: f32, _y: f32, _scale: u32) {
            self.rotated_texts.push(text.to_string());
        }
    }

    fn spec() -> ChartSpec {
        ChartSpec {
            x_increment: 10,
            y_max: 100.0,
            y_increment: 10.0,
            x_label: "Years".into(),
            y_label: "Tradition".into(),
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        let mut surface = Recorder::default();
        assert_eq!(render(&[], &mut surface, &spec()), Err(ChartError::NoLines));
        let lines = [ChartLine::new(vec![1.0]), ChartLine::new(vec![])];
        assert_eq!(
            render(&lines, &mut surface, &spec()),
            Err(ChartError::EmptyLine { index: 1 })
        );
    }

    #[test]
    fn zero_increments_are_rejected() {
        let mut surface = Recorder::default();
        let line = ChartLine::new(vec![1.0, 2.0]);
        let mut bad = spec();
        bad.x_increment = 0;
        assert!(matches!(
            render_one(&line, &mut surface, &bad),
            Err(ChartError::InvalidAxis(_))
        ));
        let mut bad = spec();
        bad.y_increment = 0.0;
        assert!(matches!(
            render_one(&line, &mut surface, &bad),
            Err(ChartError::InvalidAxis(_))
        ));
    }

    #[test]
    fn clears_before_drawing() {
        let mut surface = Recorder::default();
        render_one(&ChartLine::new(vec![50.0]), &mut surface, &spec()).unwrap();
        assert!(surface.cleared);
    }

    #[test]
    fn three_points_at_increment_ten_yield_one_tick_span() {
        // ceil(3 / 10) = 1, so the x axis carries labels "0" and "10".
        let mut surface = Recorder::default();
        let line = ChartLine::new(vec![10.0, 20.0, 30.0]);
        render_one(&line, &mut surface, &spec()).unwrap();
        assert_eq!(surface.x_labels(), ["0", "10"]);
    }

    #[test]
    fn y_labels_count_down_from_max_to_zero() {
        let mut surface = Recorder::default();
        render_one(&ChartLine::new(vec![50.0]), &mut surface, &spec()).unwrap();
        assert_eq!(
            surface.y_labels(),
            ["100", "90", "80", "70", "60", "50", "40", "30", "20", "10", "0"]
        );
        assert_eq!(surface.rotated_texts, ["Tradition"]);
    }

    #[test]
    fn lines_draw_in_order_with_their_styles() {
        let mut surface = Recorder::default();
        let lines = [
            ChartLine::styled(vec![10.0, 20.0], Rgb::GREY, 2.0),
            ChartLine::new(vec![30.0, 40.0]),
        ];
        render(&lines, &mut surface, &spec()).unwrap();
        // Last two recorded paths are the data lines.
        let data: Vec<_> = surface.paths.iter().rev().take(2).collect();
        let (_, second_color, second_width) = data[0];
        let (_, first_color, first_width) = data[1];
        assert_eq!((*first_color, *first_width), (Rgb::GREY, 2.0));
        assert_eq!((*second_color, *second_width), (DEFAULT_STROKE, DEFAULT_STROKE_WIDTH));
    }

    #[test]
    fn data_lines_extend_to_the_right_plot_edge() {
        let mut surface = Recorder::default();
        let line = ChartLine::new(vec![10.0, 20.0, 30.0]);
        render_one(&line, &mut surface, &spec()).unwrap();
        let (path, _, _) = surface.paths.last().unwrap();
        assert_eq!(path.len(), 4);
        let last = path.last().unwrap();
        assert_eq!(last.x, 700.0 - BORDER);
        // Height matches the final data value, not the final index.
        assert_eq!(last.y, path[2].y);
    }

    #[test]
    fn value_extremes_map_to_plot_edges() {
        let mut surface = Recorder::default();
        let line = ChartLine::new(vec![0.0, 100.0]);
        render_one(&line, &mut surface, &spec()).unwrap();
        let (path, _, _) = surface.paths.last().unwrap();
        // v = 0 sits on the x axis, v = y_max at the top border.
        assert_eq!(path[0].y, 480.0 - X_AXIS_MARGIN - BORDER);
        assert_eq!(path[1].y, BORDER);
        // Index 0 starts at the y axis.
        assert_eq!(path[0].x, Y_AXIS_MARGIN + BORDER);
    }

    #[test]
    fn longest_line_sets_the_tick_span() {
        let mut surface = Recorder::default();
        let lines = [
            ChartLine::new(vec![1.0; 5]),
            ChartLine::new(vec![2.0; 31]),
        ];
        render(&lines, &mut surface, &spec()).unwrap();
        // ceil(31 / 10) = 4 spans, so labels run 0..=40.
        assert_eq!(surface.x_labels(), ["0", "10", "20", "30", "40"]);
    }

    proptest! {
        #[test]
        fn any_nonempty_line_renders(
            values in proptest::collection::vec(0.0f64..=100.0, 1..200)
        ) {
            let mut surface = Recorder::default();
            prop_assert!(render_one(&ChartLine::new(values), &mut surface, &spec()).is_ok());
            prop_assert!(surface.cleared);
        }

        #[test]
        fn data_points_stay_inside_the_plot_area(
            values in proptest::collection::vec(0.0f64..=100.0, 1..100)
        ) {
            let mut surface = Recorder::default();
            render_one(&ChartLine::new(values), &mut surface, &spec()).unwrap();
            let (path, _, _) = surface.paths.last().unwrap();
            for point in path {
                prop_assert!(point.x >= Y_AXIS_MARGIN + BORDER - 0.001);
                prop_assert!(point.x <= 700.0 - BORDER + 0.001);
                prop_assert!(point.y >= BORDER - 0.001);
                prop_assert!(point.y <= 480.0 - X_AXIS_MARGIN - BORDER + 0.001);
            }
        }
    }
}
