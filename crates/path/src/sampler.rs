//! The path data state machine.
//!
//! Path data is split into sub-paths at each move-to. Each sub-path is
//! tokenized into commands which drive a [`Cursor`] and append sampled points.
//!
//! Malformed input never fails: bad numbers, unsupported commands and
//! incomplete argument groups are skipped and reported as [`Warning`]s. The
//! only error is running out of [`PointBudget`].

use crate::commands::{tokenize, CommandKind};
use crate::diagnostics::{report, Warning};
use crate::geom::utils::points_coincide;
use crate::geom::{
    CubicBezierSegment, LineSegment, PointBudget, QuadraticBezierSegment, SampleError, Segment,
};
use crate::math::{point, vector, Point};
use crate::numbers::parse_number_list;
use crate::SampleOptions;

/// The state threaded through the commands of a sub-path.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Cursor {
    pub current: Point,
    pub subpath_start: Point,
    /// Control point of the previous `Q` or `T` command, if the previous
    /// command was one of them.
    pub last_quadratic_ctrl: Option<Point>,
    /// Second control point of the previous `C` or `S` command, if the
    /// previous command was one of them.
    pub last_cubic_ctrl: Option<Point>,
}

impl Cursor {
    pub fn new() -> Self {
        Cursor::default()
    }

    fn reset_ctrls(&mut self) {
        self.last_quadratic_ctrl = None;
        self.last_cubic_ctrl = None;
    }
}

/// The points of one sub-path.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SubPath {
    pub points: Vec<Point>,
    /// Whether the sub-path data ends with a close command.
    pub closed: bool,
}

/// Split path data before each move-to.
///
/// Returns the byte offset and text of each non-blank chunk. Text preceding
/// the first move-to forms its own chunk.
///
/// ```
/// use svg_points_path::sampler::split_subpaths;
///
/// let chunks = split_subpaths("M 0 0 L 1 1 m 5 5 z");
/// assert_eq!(chunks, vec![(0, "M 0 0 L 1 1 "), (12, "m 5 5 z")]);
/// ```
pub fn split_subpaths(data: &str) -> Vec<(usize, &str)> {
    let mut bounds: Vec<usize> = data
        .char_indices()
        .filter(|&(_, c)| c == 'M' || c == 'm')
        .map(|(i, _)| i)
        .collect();

    if bounds.first() != Some(&0) {
        bounds.insert(0, 0);
    }
    bounds.push(data.len());

    bounds
        .windows(2)
        .map(|w| (w[0], &data[w[0]..w[1]]))
        .filter(|(_, chunk)| !chunk.trim().is_empty())
        .collect()
}

/// Samples path data into sub-paths.
///
/// The sampler keeps a scratch buffer for argument lists, so it is worth
/// reusing across path elements.
///
/// ## Example
///
/// ```
/// use svg_points_path::{PathSampler, SampleOptions};
/// use svg_points_path::geom::PointBudget;
/// use svg_points_path::math::point;
///
/// let mut sampler = PathSampler::new();
/// let mut budget = PointBudget::default();
/// let mut warnings = Vec::new();
/// let sub_paths = sampler.sample(
///     "M 10 10 L 90 10 L 90 90 Z",
///     &SampleOptions::density(10.0),
///     &mut budget,
///     &mut warnings,
/// ).unwrap();
///
/// assert_eq!(sub_paths.len(), 1);
/// let points = &sub_paths[0].points;
/// assert_eq!(points[0], point(10.0, 10.0));
/// assert_eq!(points.last(), Some(&point(10.0, 10.0)));
/// assert!(points.contains(&point(90.0, 10.0)));
/// assert!(points.contains(&point(90.0, 90.0)));
/// assert!(warnings.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathSampler {
    args: Vec<f64>,
}

impl PathSampler {
    pub fn new() -> Self {
        PathSampler { args: Vec::new() }
    }

    /// Sample all sub-paths of `data`.
    ///
    /// Sub-paths that produce no point are dropped.
    pub fn sample(
        &mut self,
        data: &str,
        options: &SampleOptions,
        budget: &mut PointBudget,
        warnings: &mut Vec<Warning>,
    ) -> Result<Vec<SubPath>, SampleError> {
        let mut output = Vec::new();
        let mut cursor = Cursor::new();

        for (offset, chunk) in split_subpaths(data) {
            if !options.chain_subpaths {
                cursor = Cursor::new();
            }

            let sub_path =
                self.sample_subpath(chunk, offset, &mut cursor, options, budget, warnings)?;

            if !sub_path.points.is_empty() {
                output.push(sub_path);
            }
        }

        log::trace!("Sampled {} sub-path(s) from {:?}.", output.len(), data);

        Ok(output)
    }

    /// Sample a single sub-path, starting from `cursor`.
    ///
    /// `offset` is the position of `src` in the complete path data and is only
    /// used to locate warnings.
    pub fn sample_subpath(
        &mut self,
        src: &str,
        offset: usize,
        cursor: &mut Cursor,
        options: &SampleOptions,
        budget: &mut PointBudget,
        warnings: &mut Vec<Warning>,
    ) -> Result<SubPath, SampleError> {
        let density = options.density;
        let mut points = Vec::new();

        let tokens = tokenize(src);
        let leading = tokens.leading();
        if let Some(start) = leading.find(|c: char| !c.is_whitespace()) {
            report(warnings, Warning::StrayData { offset: offset + start });
        }

        for token in tokens {
            let (kind, relative) = (token.kind(), token.is_relative());
            let token_offset = offset + token.offset;

            match kind {
                CommandKind::Close => {
                    // Arguments of a close command are meaningless.
                    close(cursor, density, &mut points, budget)?;
                    continue;
                }
                CommandKind::Arc => {
                    report(
                        warnings,
                        Warning::UnsupportedCommand {
                            command: token.letter,
                            offset: token_offset,
                        },
                    );
                    continue;
                }
                _ => {}
            }

            self.args.clear();
            for malformed in parse_number_list(token.arguments, &mut self.args) {
                report(
                    warnings,
                    Warning::MalformedNumber {
                        command: token.letter,
                        offset: token_offset,
                        src: malformed.to_string(),
                    },
                );
            }

            let group_size = kind.num_arguments();
            let mut command = kind;
            for group in self.args.chunks_exact(group_size) {
                apply(command, relative, group, cursor, density, &mut points, budget)?;
                command = command.repeated();
            }

            let leftover = self.args.len() % group_size;
            if leftover != 0 || self.args.is_empty() {
                report(
                    warnings,
                    Warning::MissingArguments {
                        command: token.letter,
                        offset: token_offset,
                        expected: group_size,
                        found: leftover,
                    },
                );
            }
        }

        let closed = src.trim_end().ends_with(|c: char| c == 'z' || c == 'Z');
        if closed && options.close_paths {
            if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
                if !points_coincide(first, last) {
                    budget.reserve(1)?;
                    points.push(first);
                }
            }
        }

        Ok(SubPath { points, closed })
    }
}

/// Sample path data with the default point budget, discarding warnings.
pub fn sample_path(data: &str, options: &SampleOptions) -> Result<Vec<SubPath>, SampleError> {
    let mut budget = PointBudget::default();
    let mut warnings = Vec::new();
    PathSampler::new().sample(data, options, &mut budget, &mut warnings)
}

/// Execute one argument group of a command.
///
/// `args` must hold exactly `kind.num_arguments()` values. Points are appended
/// to `output`; apart from move-to, the starting point of each command is not
/// emitted since it is the end of the previous one.
pub fn apply(
    kind: CommandKind,
    relative: bool,
    args: &[f64],
    cursor: &mut Cursor,
    density: f64,
    output: &mut Vec<Point>,
    budget: &mut PointBudget,
) -> Result<(), SampleError> {
    let current = cursor.current;
    let origin = if relative {
        current.to_vector()
    } else {
        vector(0.0, 0.0)
    };
    let at = |i: usize| point(args[i], args[i + 1]) + origin;

    match kind {
        CommandKind::MoveTo => {
            let to = at(0);
            budget.reserve(1)?;
            output.push(to);
            cursor.current = to;
            cursor.subpath_start = to;
            cursor.reset_ctrls();
        }
        CommandKind::LineTo => {
            line_to(cursor, at(0), density, output, budget)?;
        }
        CommandKind::HorizontalLineTo => {
            let to = point(args[0] + origin.x, current.y);
            line_to(cursor, to, density, output, budget)?;
        }
        CommandKind::VerticalLineTo => {
            let to = point(current.x, args[0] + origin.y);
            line_to(cursor, to, density, output, budget)?;
        }
        CommandKind::CubicTo => {
            let curve = CubicBezierSegment {
                from: current,
                ctrl1: at(0),
                ctrl2: at(2),
                to: at(4),
            };
            cubic_to(cursor, curve, density, output, budget)?;
        }
        CommandKind::SmoothCubicTo => {
            let ctrl1 = match cursor.last_cubic_ctrl {
                Some(ctrl) => current + (current - ctrl),
                None => current,
            };
            let curve = CubicBezierSegment {
                from: current,
                ctrl1,
                ctrl2: at(0),
                to: at(2),
            };
            cubic_to(cursor, curve, density, output, budget)?;
        }
        CommandKind::QuadraticTo => {
            let curve = QuadraticBezierSegment {
                from: current,
                ctrl: at(0),
                to: at(2),
            };
            quadratic_to(cursor, curve, density, output, budget)?;
        }
        CommandKind::SmoothQuadraticTo => {
            let previous = cursor.last_quadratic_ctrl.unwrap_or(current);
            let curve = QuadraticBezierSegment {
                from: current,
                ctrl: current + (current - previous),
                to: at(0),
            };
            quadratic_to(cursor, curve, density, output, budget)?;
        }
        CommandKind::Close => {
            close(cursor, density, output, budget)?;
        }
        CommandKind::Arc => {}
    }

    Ok(())
}

fn line_to(
    cursor: &mut Cursor,
    to: Point,
    density: f64,
    output: &mut Vec<Point>,
    budget: &mut PointBudget,
) -> Result<(), SampleError> {
    let segment = LineSegment {
        from: cursor.current,
        to,
    };
    emit_tail(segment, density, output, budget)?;
    cursor.current = to;
    cursor.reset_ctrls();

    Ok(())
}

fn cubic_to(
    cursor: &mut Cursor,
    curve: CubicBezierSegment,
    density: f64,
    output: &mut Vec<Point>,
    budget: &mut PointBudget,
) -> Result<(), SampleError> {
    emit_tail(curve, density, output, budget)?;
    cursor.current = curve.to;
    cursor.last_cubic_ctrl = Some(curve.ctrl2);
    cursor.last_quadratic_ctrl = None;

    Ok(())
}

fn quadratic_to(
    cursor: &mut Cursor,
    curve: QuadraticBezierSegment,
    density: f64,
    output: &mut Vec<Point>,
    budget: &mut PointBudget,
) -> Result<(), SampleError> {
    emit_tail(curve, density, output, budget)?;
    cursor.current = curve.to;
    cursor.last_quadratic_ctrl = Some(curve.ctrl);
    cursor.last_cubic_ctrl = None;

    Ok(())
}

fn close(
    cursor: &mut Cursor,
    density: f64,
    output: &mut Vec<Point>,
    budget: &mut PointBudget,
) -> Result<(), SampleError> {
    if !points_coincide(cursor.current, cursor.subpath_start) {
        let segment = LineSegment {
            from: cursor.current,
            to: cursor.subpath_start,
        };
        emit_tail(segment, density, output, budget)?;
    }
    cursor.current = cursor.subpath_start;
    cursor.reset_ctrls();

    Ok(())
}

// Appends all sampled points of the segment but the first one.
fn emit_tail<S: Segment>(
    segment: S,
    density: f64,
    output: &mut Vec<Point>,
    budget: &mut PointBudget,
) -> Result<(), SampleError> {
    let samples = segment.sampled(density);
    let count = samples.num_points() - 1;
    budget.reserve(count)?;
    output.reserve(count);
    output.extend(samples.skip(1));

    Ok(())
}

#[cfg(test)]
fn sample_with(data: &str, options: &SampleOptions) -> (Vec<SubPath>, Vec<Warning>) {
    let mut budget = PointBudget::default();
    let mut warnings = Vec::new();
    let sub_paths = PathSampler::new()
        .sample(data, options, &mut budget, &mut warnings)
        .unwrap();
    (sub_paths, warnings)
}

#[cfg(test)]
fn assert_close(a: Point, b: Point) {
    assert!((a - b).length() < 1e-9, "{:?} != {:?}", a, b);
}

#[test]
fn closed_triangle() {
    let (sub_paths, warnings) =
        sample_with("M 10 10 L 90 10 L 90 90 Z", &SampleOptions::density(10.0));
    assert!(warnings.is_empty());
    assert_eq!(sub_paths.len(), 1);

    let sub_path = &sub_paths[0];
    assert!(sub_path.closed);
    let points = &sub_path.points;
    // 8 steps per straight edge, floor(113.13 / 10) = 11 on the diagonal.
    assert_eq!(points.len(), 1 + 8 + 8 + 11);
    assert_eq!(points[0], point(10.0, 10.0));
    assert_eq!(points[8], point(90.0, 10.0));
    assert_eq!(points[16], point(90.0, 90.0));
    assert_eq!(*points.last().unwrap(), point(10.0, 10.0));
}

#[test]
fn open_path_is_not_closed() {
    let (sub_paths, _) = sample_with("M 0 0 L 10 0 L 10 10", &SampleOptions::density(1.0));
    let points = &sub_paths[0].points;
    assert!(!sub_paths[0].closed);
    assert_eq!(points.len(), 21);
    assert_eq!(*points.last().unwrap(), point(10.0, 10.0));
}

#[test]
fn relative_commands() {
    let (sub_paths, _) = sample_with("m 10 10 l 10 0 v 10 h -10 z", &SampleOptions::density(100.0));
    assert_eq!(
        sub_paths[0].points,
        vec![
            point(10.0, 10.0),
            point(20.0, 10.0),
            point(20.0, 20.0),
            point(10.0, 20.0),
            point(10.0, 10.0),
        ]
    );
}

#[test]
fn close_on_start_adds_nothing() {
    let (sub_paths, _) = sample_with("M 0 0 L 10 0 L 0 0 Z", &SampleOptions::density(100.0));
    assert_eq!(
        sub_paths[0].points,
        vec![point(0.0, 0.0), point(10.0, 0.0), point(0.0, 0.0)]
    );
}

#[test]
fn closure_can_be_disabled() {
    let options = SampleOptions::density(100.0).with_close_paths(false);
    // The close command still draws back to the start.
    let (sub_paths, _) = sample_with("M 0 0 L 10 0 L 10 10 Z", &options);
    assert_eq!(*sub_paths[0].points.last().unwrap(), point(0.0, 0.0));
}

#[test]
fn quadratic_endpoints() {
    let (sub_paths, _) = sample_with("M 0 0 Q 50 100 100 0", &SampleOptions::density(10.0));
    let points = &sub_paths[0].points;
    assert_eq!(points.len(), 11);
    assert_eq!(points[0], point(0.0, 0.0));
    assert_eq!(points[10], point(100.0, 0.0));
    assert_close(points[5], point(50.0, 50.0));
}

#[test]
fn smooth_quadratic_reflects() {
    // The T control point is (150, -100), so the second arch peaks at y = -50.
    let (sub_paths, _) = sample_with(
        "M 0 0 Q 50 100 100 0 T 200 0",
        &SampleOptions::density(10.0),
    );
    let points = &sub_paths[0].points;
    assert_eq!(points.len(), 21);
    assert_eq!(points[20], point(200.0, 0.0));
    assert_close(points[15], point(150.0, -50.0));
}

#[test]
fn chained_smooth_quadratics() {
    let mut cursor = Cursor::new();
    let mut output = Vec::new();
    let mut budget = PointBudget::default();
    let q = CommandKind::QuadraticTo;
    let t = CommandKind::SmoothQuadraticTo;
    apply(CommandKind::MoveTo, false, &[0.0, 0.0], &mut cursor, 10.0, &mut output, &mut budget).unwrap();
    apply(q, false, &[50.0, 100.0, 100.0, 0.0], &mut cursor, 10.0, &mut output, &mut budget).unwrap();
    apply(t, false, &[200.0, 0.0], &mut cursor, 10.0, &mut output, &mut budget).unwrap();
    assert_eq!(cursor.last_quadratic_ctrl, Some(point(150.0, -100.0)));
    apply(t, false, &[300.0, 0.0], &mut cursor, 10.0, &mut output, &mut budget).unwrap();
    assert_eq!(cursor.last_quadratic_ctrl, Some(point(250.0, 100.0)));
}

#[test]
fn smooth_quadratic_without_previous_curve() {
    let mut cursor = Cursor::new();
    let mut output = Vec::new();
    let mut budget = PointBudget::default();
    apply(CommandKind::MoveTo, false, &[0.0, 0.0], &mut cursor, 1.0, &mut output, &mut budget).unwrap();
    apply(CommandKind::LineTo, false, &[10.0, 0.0], &mut cursor, 1.0, &mut output, &mut budget).unwrap();
    apply(CommandKind::SmoothQuadraticTo, false, &[20.0, 0.0], &mut cursor, 1.0, &mut output, &mut budget).unwrap();
    // The control point is the current point: a straight line.
    assert_eq!(cursor.last_quadratic_ctrl, Some(point(10.0, 0.0)));
    for p in &output {
        assert!(p.y.abs() < 1e-12);
    }
}

#[test]
fn smooth_cubic_reflects() {
    let (a, _) = sample_with(
        "M 0 0 C 0 50 50 50 50 0 S 100 -50 100 0",
        &SampleOptions::density(5.0),
    );
    let (b, _) = sample_with(
        "M 0 0 C 0 50 50 50 50 0 C 50 -50 100 -50 100 0",
        &SampleOptions::density(5.0),
    );
    assert_eq!(a, b);
}

#[test]
fn smooth_cubic_after_line_uses_current_point() {
    let (a, _) = sample_with("M 0 0 L 10 0 S 20 10 30 0", &SampleOptions::density(2.0));
    let (b, _) = sample_with("M 0 0 L 10 0 C 10 0 20 10 30 0", &SampleOptions::density(2.0));
    assert_eq!(a, b);
}

#[test]
fn implicit_repetition() {
    let (sub_paths, warnings) = sample_with("M 0 0 10 0 10 10", &SampleOptions::density(100.0));
    assert!(warnings.is_empty());
    assert_eq!(
        sub_paths[0].points,
        vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)]
    );

    let (sub_paths, _) = sample_with("m 5 5 10 0 0 10", &SampleOptions::density(100.0));
    assert_eq!(
        sub_paths[0].points,
        vec![point(5.0, 5.0), point(15.0, 5.0), point(15.0, 15.0)]
    );
}

#[test]
fn incomplete_group_is_skipped() {
    let (sub_paths, warnings) = sample_with("M 0 0 L 10 0 20", &SampleOptions::density(100.0));
    assert_eq!(sub_paths[0].points, vec![point(0.0, 0.0), point(10.0, 0.0)]);
    assert_eq!(
        warnings,
        vec![Warning::MissingArguments {
            command: 'L',
            offset: 6,
            expected: 2,
            found: 1
        }]
    );

    let (sub_paths, warnings) = sample_with("M 0 0 C 1 1 2 2", &SampleOptions::density(100.0));
    assert_eq!(sub_paths[0].points, vec![point(0.0, 0.0)]);
    assert_eq!(warnings.len(), 1);
}

#[test]
fn arcs_are_skipped() {
    let (sub_paths, warnings) = sample_with(
        "M 0 0 A 5 5 0 0 1 10 0 L 0 10",
        &SampleOptions::density(100.0),
    );
    assert_eq!(sub_paths[0].points, vec![point(0.0, 0.0), point(0.0, 10.0)]);
    assert_eq!(
        warnings,
        vec![Warning::UnsupportedCommand {
            command: 'A',
            offset: 6
        }]
    );
}

#[test]
fn malformed_numbers_are_dropped() {
    let (sub_paths, warnings) = sample_with("M 0 0 L 10 x 0", &SampleOptions::density(100.0));
    assert_eq!(sub_paths[0].points, vec![point(0.0, 0.0), point(10.0, 0.0)]);
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0], Warning::MalformedNumber { .. }));
}

#[test]
fn compact_numbers() {
    let (sub_paths, _) = sample_with("M10-5L20-5", &SampleOptions::density(100.0));
    assert_eq!(sub_paths[0].points, vec![point(10.0, -5.0), point(20.0, -5.0)]);
}

#[test]
fn stray_leading_data() {
    let (sub_paths, warnings) = sample_with("junk M 0 0 L 1 0", &SampleOptions::density(100.0));
    assert_eq!(sub_paths.len(), 1);
    assert_eq!(warnings, vec![Warning::StrayData { offset: 0 }]);
}

#[test]
fn sub_paths_use_a_fresh_cursor() {
    let data = "M 0 0 L 10 0 Z m 5 5 l 1 0";

    let (sub_paths, _) = sample_with(data, &SampleOptions::density(100.0));
    assert_eq!(sub_paths.len(), 2);
    assert!(sub_paths[0].closed);
    assert!(!sub_paths[1].closed);
    assert_eq!(sub_paths[1].points, vec![point(5.0, 5.0), point(6.0, 5.0)]);

    let chained = SampleOptions::density(100.0).with_chain_subpaths(true);
    let (sub_paths, _) = sample_with(data, &chained);
    // After z the current point is back at (0, 0).
    assert_eq!(sub_paths[1].points, vec![point(5.0, 5.0), point(6.0, 5.0)]);

    let (sub_paths, _) = sample_with("M 0 0 L 10 0 m 5 5 l 1 0", &chained);
    assert_eq!(sub_paths[1].points, vec![point(15.0, 5.0), point(16.0, 5.0)]);
}

#[test]
fn empty_data() {
    assert!(sample_with("", &SampleOptions::DEFAULT).0.is_empty());
    assert!(sample_with("   ", &SampleOptions::DEFAULT).0.is_empty());
    assert!(sample_with("Z", &SampleOptions::DEFAULT).0.is_empty());
}

#[test]
fn budget_is_enforced() {
    let mut warnings = Vec::new();
    let mut budget = PointBudget::new(10);
    let result = PathSampler::new().sample(
        "M 0 0 L 100 0",
        &SampleOptions::density(1.0),
        &mut budget,
        &mut warnings,
    );
    assert_eq!(result, Err(SampleError::TooManyPoints { limit: 10 }));

    // A huge step count fails before anything is allocated.
    let mut budget = PointBudget::new(1000);
    let result = PathSampler::new().sample(
        "M 0 0 L 1e300 0",
        &SampleOptions::density(1e-300),
        &mut budget,
        &mut warnings,
    );
    assert!(result.is_err());
}

#[test]
fn sample_path_has_a_ceiling() {
    assert_eq!(
        sample_path("M 0 0 L 1e300 0", &SampleOptions::density(1.0)),
        Err(SampleError::TooManyPoints {
            limit: PointBudget::DEFAULT_LIMIT
        })
    );
    assert!(sample_path("M 0 0 L 100 0", &SampleOptions::density(1.0)).is_ok());
}
