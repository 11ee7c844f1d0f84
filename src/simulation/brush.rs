//! Terrain painting for interactive editors.
//!
//! A brush covers a clipped square around a point; strokes drag that square
//! along a Bresenham line so fast mouse motion leaves no gaps.

use super::config::Config;
use super::direction::Point;
use super::field::{Field, Terrain};

/// What a brush paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brush {
    /// Solid wall.
    Wall,
    /// Open ground with no food.
    Erase,
    /// Open ground holding this much food.
    Food(u32),
    /// Home ground.
    Home,
}

impl Brush {
    /// The food brush loaded with `config.paint_food` units per cell.
    pub fn food(config: &Config) -> Self {
        Brush::Food(config.paint_food)
    }

    fn apply(self, field: &mut Field, p: Point) {
        // Callers only pass on-grid points.
        let result = match self {
            Brush::Wall => field.set_terrain(p, Terrain::Wall),
            Brush::Erase => field
                .set_terrain(p, Terrain::Open)
                .and_then(|()| field.set_food(p, 0)),
            Brush::Food(amount) => field
                .set_terrain(p, Terrain::Open)
                .and_then(|()| field.set_food(p, amount)),
            Brush::Home => field.set_terrain(p, Terrain::Home),
        };
        debug_assert!(result.is_ok(), "brush applied off-grid at {p:?}");
    }
}

/// Paints the square `[c - radius, c + radius)²`, clipped to the field.
///
/// Returns the number of cells painted.
pub fn paint_spot(field: &mut Field, center: Point, radius: i32, brush: Brush) -> usize {
    let mut painted = 0;
    for x in center.x - radius..center.x + radius {
        for y in center.y - radius..center.y + radius {
            let p = Point::new(x, y);
            if field.contains(p) {
                brush.apply(field, p);
                painted += 1;
            }
        }
    }
    painted
}

/// Paints a spot at every point of the line from `from` to `to`.
pub fn paint_stroke(field: &mut Field, from: Point, to: Point, radius: i32, brush: Brush) {
    for p in line_points(from, to) {
        paint_spot(field, p, radius, brush);
    }
}

/// Integer points on the line from `from` to `to`, both ends included.
pub fn line_points(from: Point, to: Point) -> Vec<Point> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut p = from;
    let mut points = Vec::with_capacity((dx - dy) as usize + 1);

    loop {
        points.push(p);
        if p == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            p.x += sx;
        }
        if e2 <= dx {
            err += dx;
            p.y += sy;
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_endpoints_and_connectivity() {
        let points = line_points(Point::new(0, 0), Point::new(7, -3));
        assert_eq!(points.first(), Some(&Point::new(0, 0)));
        assert_eq!(points.last(), Some(&Point::new(7, -3)));
        for pair in points.windows(2) {
            assert!((pair[1].x - pair[0].x).abs() <= 1);
            assert!((pair[1].y - pair[0].y).abs() <= 1);
        }
    }

    #[test]
    fn test_single_point_line() {
        assert_eq!(line_points(Point::new(3, 3), Point::new(3, 3)), vec![Point::new(3, 3)]);
    }
}
