use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its top-left corner.
/// The origin may lie anywhere, including outside the buffer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// Circle given by its center and radius
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub radius: u32,
}

impl Circle {
    pub const fn new(x: i32, y: i32, radius: u32) -> Self {
        Self { x, y, radius }
    }

    /// True if `(px, py)` lies inside or on the boundary
    pub fn contains(&self, px: i64, py: i64) -> bool {
        let dx = i128::from(self.x) - i128::from(px);
        let dy = i128::from(self.y) - i128::from(py);
        let r = i128::from(self.radius);
        dx * dx + dy * dy <= r * r
    }
}

/// Line segment between two endpoints, in either order
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Line {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub const fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    /// Slope and y-intercept of the infinite line, `None` when vertical
    pub fn slope_intercept(&self) -> Option<(f64, f64)> {
        if self.is_vertical() {
            return None;
        }
        let rise = f64::from(self.y2) - f64::from(self.y1);
        let run = f64::from(self.x2) - f64::from(self.x1);
        let slope = rise / run;
        let intercept = f64::from(self.y1) - slope * f64::from(self.x1);
        Some((slope, intercept))
    }

    /// The part of this segment inside `[0, width-1] x [0, height-1]`,
    /// endpoints rounded to the nearest pixel. `None` when the segment misses.
    ///
    /// Liang-Barsky against the pixel-center rectangle.
    pub fn clip_to(&self, width: u32, height: u32) -> Option<Line> {
        if width == 0 || height == 0 {
            return None;
        }
        let x_max = f64::from(width - 1);
        let y_max = f64::from(height - 1);

        let (x1, y1) = (f64::from(self.x1), f64::from(self.y1));
        let dx = f64::from(self.x2) - x1;
        let dy = f64::from(self.y2) - y1;

        let mut t0 = 0.0f64;
        let mut t1 = 1.0f64;
        for (p, q) in [(-dx, x1), (dx, x_max - x1), (-dy, y1), (dy, y_max - y1)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
            if t0 > t1 {
                return None;
            }
        }

        let snap = |v: f64, max: f64| v.round().clamp(0.0, max).min(f64::from(i32::MAX)) as i32;
        Some(Line::new(
            snap(x1 + t0 * dx, x_max),
            snap(y1 + t0 * dy, y_max),
            snap(x1 + t1 * dx, x_max),
            snap(y1 + t1 * dy, y_max),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_contains_boundary() {
        let circle = Circle::new(10, 10, 5);
        assert!(circle.contains(10, 10));
        assert!(circle.contains(15, 10));
        assert!(circle.contains(10, 5));
        assert!(!circle.contains(15, 11));
    }

    #[test]
    fn test_circle_zero_radius_contains_only_center() {
        let circle = Circle::new(3, 4, 0);
        assert!(circle.contains(3, 4));
        assert!(!circle.contains(4, 4));
        assert!(!circle.contains(3, 3));
    }

    #[test]
    fn test_slope_intercept_diagonal() {
        let line = Line::new(0, 0, 799, 799);
        assert_eq!(line.slope_intercept(), Some((1.0, 0.0)));

        let anti = Line::new(799, 0, 0, 799);
        assert_eq!(anti.slope_intercept(), Some((-1.0, 799.0)));
    }

    #[test]
    fn test_slope_intercept_vertical_is_none() {
        assert!(Line::new(5, 0, 5, 100).slope_intercept().is_none());
        assert!(Line::new(5, 0, 5, 100).is_vertical());
    }

    #[test]
    fn test_clip_inside_is_unchanged() {
        let line = Line::new(1, 2, 7, 5);
        assert_eq!(line.clip_to(10, 10), Some(line));
    }

    #[test]
    fn test_clip_extreme_endpoints() {
        let line = Line::new(i32::MIN, 4, i32::MAX, 4);
        assert_eq!(line.clip_to(8, 8), Some(Line::new(0, 4, 7, 4)));

        let reversed = Line::new(i32::MAX, 4, i32::MIN, 4);
        assert_eq!(reversed.clip_to(8, 8), Some(Line::new(7, 4, 0, 4)));
    }

    #[test]
    fn test_clip_miss_is_none() {
        assert_eq!(Line::new(-1_000_000_000, -5, 1_000_000_000, -5).clip_to(8, 8), None);
        assert_eq!(Line::new(20, 0, 30, 7).clip_to(8, 8), None);
        assert_eq!(Line::new(0, 0, 5, 5).clip_to(0, 8), None);
    }
}
