//! Integer rasterizers: lines, circles, discs and polygon scanline fill
//!
//! Every routine reports pixels through a `plot` callback instead of writing
//! into a buffer directly. The turtle uses the callback to route stroke pixels
//! through its bounds accounting and video sequencer, and fill pixels through
//! the cheaper flat-index check.

use std::ops::Range;

use crate::error::{Result, TurtleError};

/// Most x-intercepts a single scanline may collect
pub const MAX_INTERCEPTS: usize = 128;

// ============================================================================
// Lines
// ============================================================================

/// Draw a line using a Bresenham variant
///
/// The start pixel is always plotted. The dominant axis is walked one step at
/// a time; the error starts at half the dominant delta, drops by the minor
/// delta each step and steps the minor axis when it goes negative.
pub fn line<F>(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: F) -> Result<()>
where
    F: FnMut(i32, i32) -> Result<()>,
{
    // Deltas between saturated endpoints exceed i32
    let abs_x = (i64::from(x1) - i64::from(x0)).abs();
    let abs_y = (i64::from(y1) - i64::from(y0)).abs();
    let off_x = if x0 < x1 { 1 } else { -1 };
    let off_y = if y0 < y1 { 1 } else { -1 };
    let mut x = x0;
    let mut y = y0;

    plot(x, y)?;
    if abs_x > abs_y {
        // More horizontal: step along x
        let mut err = abs_x / 2;
        while x != x1 {
            err -= abs_y;
            if err < 0 {
                y += off_y;
                err += abs_x;
            }
            x += off_x;
            plot(x, y)?;
        }
    } else {
        // More vertical: step along y
        let mut err = abs_y / 2;
        while y != y1 {
            err -= abs_x;
            if err < 0 {
                x += off_x;
                err += abs_y;
            }
            y += off_y;
            plot(x, y)?;
        }
    }
    Ok(())
}

// ============================================================================
// Circles
// ============================================================================

/// Draw a circle outline with the midpoint algorithm (8-way symmetry)
pub fn circle<F>(cx: i32, cy: i32, radius: i32, mut plot: F) -> Result<()>
where
    F: FnMut(i32, i32) -> Result<()>,
{
    let mut x = radius;
    let mut y = 0;
    let mut decision = 1 - x;

    while x >= y {
        plot(cx.saturating_add(x), cy.saturating_add(y))?;
        plot(cx.saturating_add(y), cy.saturating_add(x))?;
        plot(cx.saturating_sub(x), cy.saturating_add(y))?;
        plot(cx.saturating_sub(y), cy.saturating_add(x))?;
        plot(cx.saturating_sub(x), cy.saturating_sub(y))?;
        plot(cx.saturating_sub(y), cy.saturating_sub(x))?;
        plot(cx.saturating_add(x), cy.saturating_sub(y))?;
        plot(cx.saturating_add(y), cy.saturating_sub(x))?;

        y += 1;
        if decision <= 0 {
            decision += 2 * y + 1;
        } else {
            x -= 1;
            decision += 2 * (y - x) + 1;
        }
    }
    Ok(())
}

/// Fill a disc by scanning its bounding square
///
/// Covers `[cx - r, cx + r)` on both axes and keeps points strictly inside
/// the radius. No antialiasing, and the right/top edge is one pixel short.
pub fn disc<F>(cx: i32, cy: i32, radius: i32, mut plot: F) -> Result<()>
where
    F: FnMut(i32, i32) -> Result<()>,
{
    let rad_sq = i64::from(radius) * i64::from(radius);
    for x in cx.saturating_sub(radius)..cx.saturating_add(radius) {
        for y in cy.saturating_sub(radius)..cy.saturating_add(radius) {
            let dx = i64::from(x) - i64::from(cx);
            let dy = i64::from(y) - i64::from(cy);
            if dx * dx + dy * dy < rad_sq {
                plot(x, y)?;
            }
        }
    }
    Ok(())
}

// ============================================================================
// Polygons
// ============================================================================

/// Fill a polygon row by row from edge intercepts
///
/// An edge `(j, i)` crosses row `y` when one end is strictly below `y` and the
/// other is at or above it, which counts a vertex sitting exactly on the row
/// once. Intercepts are sorted and pixels strictly between each pair are
/// plotted; a trailing unpaired intercept is ignored. Coverage is known to be
/// loose at acute vertices, so callers re-stroke the edges afterwards.
pub fn scanline_fill<F>(vertices: &[(f64, f64)], rows: Range<i32>, mut plot: F) -> Result<()>
where
    F: FnMut(i32, i32) -> Result<()>,
{
    let n = vertices.len();
    if n == 0 {
        return Ok(());
    }

    // Reused for every row
    let mut nodes: Vec<f64> = Vec::with_capacity(MAX_INTERCEPTS);
    let mut filled_rows = 0usize;

    for y in rows {
        nodes.clear();
        let yf = f64::from(y);

        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = vertices[i];
            let (xj, yj) = vertices[j];
            if (yi < yf && yj >= yf) || (yj < yf && yi >= yf) {
                if nodes.len() == MAX_INTERCEPTS {
                    return Err(TurtleError::InterceptOverflow {
                        row: y,
                        count: nodes.len() + 1,
                    });
                }
                nodes.push(xi + (yf - yi) / (yj - yi) * (xj - xi));
            }
            j = i;
        }

        if nodes.is_empty() {
            continue;
        }
        filled_rows += 1;
        insertion_sort(&mut nodes);

        for pair in nodes.chunks_exact(2) {
            let start = pair[0].floor() as i32 + 1;
            let end = pair[1].ceil() as i32;
            for x in start..end {
                plot(x, y)?;
            }
        }
    }

    log::trace!("scanline fill: {} vertices, {} rows crossed", n, filled_rows);
    Ok(())
}

/// Polygon edges with endpoints rounded to pixels, closing back to the start
pub fn polygon_edges(vertices: &[(f64, f64)]) -> impl Iterator<Item = ((i32, i32), (i32, i32))> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| {
        let (x0, y0) = vertices[i];
        let (x1, y1) = vertices[(i + 1) % n];
        (
            (x0.round() as i32, y0.round() as i32),
            (x1.round() as i32, y1.round() as i32),
        )
    })
}

/// Ascending insertion sort; intercept lists are short
fn insertion_sort(values: &mut [f64]) {
    for i in 1..values.len() {
        let temp = values[i];
        let mut j = i;
        while j > 0 && temp < values[j - 1] {
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = temp;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn collect<F>(draw: F) -> Vec<(i32, i32)>
    where
        F: FnOnce(&mut dyn FnMut(i32, i32) -> Result<()>) -> Result<()>,
    {
        let mut points = Vec::new();
        draw(&mut |x, y| {
            points.push((x, y));
            Ok(())
        })
        .unwrap();
        points
    }

    #[test]
    fn test_horizontal_line() {
        let points = collect(|plot| line(0, 0, 5, 0, plot));
        assert_eq!(points, (0..=5).map(|x| (x, 0)).collect::<Vec<_>>());
    }

    #[test]
    fn test_single_point_line() {
        let points = collect(|plot| line(3, -2, 3, -2, plot));
        assert_eq!(points, vec![(3, -2)]);
    }

    #[test]
    fn test_steep_line_visits_every_row() {
        let points = collect(|plot| line(0, 0, 2, -7, plot));
        assert_eq!(points.len(), 8);
        assert_eq!(points.first(), Some(&(0, 0)));
        assert_eq!(points.last(), Some(&(2, -7)));
        for (k, &(_, y)) in points.iter().enumerate() {
            assert_eq!(y, -(k as i32));
        }
    }

    #[test]
    fn test_diagonal_line() {
        let points = collect(|plot| line(0, 0, -4, -4, plot));
        assert_eq!(points, (0..=4).map(|k| (-k, -k)).collect::<Vec<_>>());
    }

    #[test]
    fn test_circle_symmetry_and_radius() {
        let points: HashSet<_> = collect(|plot| circle(0, 0, 10, plot)).into_iter().collect();
        for &(x, y) in &points {
            for mirrored in [(y, x), (-x, y), (x, -y), (-y, -x)] {
                assert!(points.contains(&mirrored), "missing mirror of ({}, {})", x, y);
            }
            let d = x * x + y * y;
            assert!((d - 100).abs() <= 10, "({}, {}) is off the circle", x, y);
        }
        assert!(points.contains(&(10, 0)));
        assert!(points.contains(&(0, -10)));
    }

    #[test]
    fn test_disc_is_strictly_inside() {
        let points = collect(|plot| disc(2, 3, 4, plot));
        assert!(!points.is_empty());
        for &(x, y) in &points {
            let (dx, dy) = (x - 2, y - 3);
            assert!(dx * dx + dy * dy < 16);
            assert!(x < 6 && y < 7);
        }
        assert!(points.contains(&(2, 3)));
    }

    #[test]
    fn test_zero_radius_disc_is_empty() {
        assert!(collect(|plot| disc(0, 0, 0, plot)).is_empty());
    }

    #[test]
    fn test_square_fill_interior() {
        let square = [(-5.0, -5.0), (5.0, -5.0), (5.0, 5.0), (-5.0, 5.0)];
        let points: HashSet<_> = collect(|plot| scanline_fill(&square, -10..10, plot))
            .into_iter()
            .collect();
        for x in -4..5 {
            for y in -4..=5 {
                assert!(points.contains(&(x, y)), "({}, {}) not filled", x, y);
            }
        }
        assert!(!points.contains(&(-5, 0)));
        assert!(!points.contains(&(5, 0)));
        assert!(!points.contains(&(0, -5)));
    }

    #[test]
    fn test_degenerate_polygon_fills_nothing() {
        let segment = [(0.0, 0.0), (4.0, 4.0)];
        let points = collect(|plot| scanline_fill(&segment, -10..10, plot));
        assert!(points.is_empty());
        assert!(collect(|plot| scanline_fill(&[], -10..10, plot)).is_empty());
    }

    #[test]
    fn test_intercept_overflow_is_reported() {
        // Zig-zag with 130 edges crossing row 0
        let vertices: Vec<(f64, f64)> = (0..130)
            .map(|i| (f64::from(i), if i % 2 == 0 { -1.0 } else { 1.0 }))
            .collect();
        let err = scanline_fill(&vertices, 0..1, |_, _| Ok(())).unwrap_err();
        assert!(matches!(
            err,
            TurtleError::InterceptOverflow { row: 0, count } if count == MAX_INTERCEPTS + 1
        ));
    }

    #[test]
    fn test_plot_errors_stop_the_walk() {
        let mut calls = 0;
        let result = line(0, 0, 10, 0, |_, _| {
            calls += 1;
            if calls == 3 {
                Err(TurtleError::InvalidFrameInterval)
            } else {
                Ok(())
            }
        });
        assert!(result.is_err());
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_line_across_the_whole_i32_range() {
        let mut points = Vec::new();
        let result = line(i32::MIN, 0, i32::MAX, 1, |x, y| {
            points.push((x, y));
            if points.len() == 3 {
                Err(TurtleError::InvalidFrameInterval)
            } else {
                Ok(())
            }
        });
        assert!(result.is_err());
        assert_eq!(points, vec![(i32::MIN, 0), (i32::MIN + 1, 0), (i32::MIN + 2, 0)]);
    }

    #[test]
    fn test_shapes_at_the_i32_edge() {
        let points = collect(|plot| disc(i32::MAX, i32::MIN, 2, plot));
        assert!(!points.is_empty());
        assert!(points.iter().all(|&(x, y)| x < i32::MAX && y >= i32::MIN));

        let points = collect(|plot| circle(i32::MAX, 0, 3, plot));
        assert!(points.contains(&(i32::MAX, 0)));
        assert!(points.contains(&(i32::MAX - 3, 0)));
    }

    #[test]
    fn test_polygon_edges_wrap() {
        let tri = [(0.4, 0.0), (3.6, 0.0), (0.0, 2.5)];
        let edges: Vec<_> = polygon_edges(&tri).collect();
        assert_eq!(edges, vec![((0, 0), (4, 0)), ((4, 0), (0, 3)), ((0, 3), (0, 0))]);
    }

    #[test]
    fn test_insertion_sort() {
        let mut v = [3.5, -1.0, 2.0, 2.0, 0.0];
        insertion_sort(&mut v);
        assert_eq!(v, [-1.0, 0.0, 2.0, 2.0, 3.5]);
    }
}
