use std::f64::consts::FRAC_PI_2;
use std::fmt::Write;

const BASIS_1: [f64; 4] = [0.0, 2.0 / 3.0, 1.0 / 3.0, 0.0];
const BASIS_2: [f64; 4] = [0.0, 1.0 / 3.0, 2.0 / 3.0, 0.0];
const BASIS_3: [f64; 4] = [0.0, 1.0 / 6.0, 2.0 / 3.0, 1.0 / 6.0];

/// Radial line generator with "bundle" interpolation.
///
/// Input points are `(angle in degrees, radius)`. They are converted to
/// cartesian coordinates, pulled toward the straight chord between the first
/// and last point by `1 - tension`, and drawn as a uniform cubic B-spline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialLine {
    pub tension: f64,
}

impl Default for RadialLine {
    fn default() -> Self {
        Self { tension: 0.85 }
    }
}

impl RadialLine {
    pub fn new(tension: f64) -> Self {
        Self { tension }
    }

    /// SVG path data for the waypoints; empty when there are none.
    pub fn path(&self, polar: &[(f64, f64)]) -> String {
        let mut points: Vec<(f64, f64)> = polar.iter().map(|&(x, y)| to_cartesian(x, y)).collect();
        if points.is_empty() {
            return String::new();
        }
        straighten(&mut points, self.tension);
        basis(&points)
    }
}

/// Point for an angle (degrees) and radius, with zero degrees at twelve o'clock.
pub fn to_cartesian(angle_deg: f64, radius: f64) -> (f64, f64) {
    let a = angle_deg / 180.0 * std::f64::consts::PI - FRAC_PI_2;
    (radius * a.cos(), radius * a.sin())
}

fn straighten(points: &mut [(f64, f64)], tension: f64) {
    let n = points.len() - 1;
    if n == 0 {
        return;
    }
    let (x0, y0) = points[0];
    let dx = points[n].0 - x0;
    let dy = points[n].1 - y0;

    for (i, p) in points.iter_mut().enumerate() {
        let t = i as f64 / n as f64;
        p.0 = tension * p.0 + (1.0 - tension) * (x0 + t * dx);
        p.1 = tension * p.1 + (1.0 - tension) * (y0 + t * dy);
    }
}

fn linear(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{}{},{}", cmd, num(*x), num(*y));
    }
    d
}

fn basis(points: &[(f64, f64)]) -> String {
    if points.len() < 3 {
        return linear(points);
    }

    let n = points.len();
    let (x0, y0) = points[0];
    let mut px = [x0, x0, x0, points[1].0];
    let mut py = [y0, y0, y0, points[1].1];

    let mut d = String::new();
    let _ = write!(
        d,
        "M{},{}L{},{}",
        num(x0),
        num(y0),
        num(dot4(&BASIS_3, &px)),
        num(dot4(&BASIS_3, &py))
    );

    // The last point is repeated once to close the spline.
    for i in 2..=n {
        let p = points[i.min(n - 1)];
        px.rotate_left(1);
        px[3] = p.0;
        py.rotate_left(1);
        py[3] = p.1;
        let _ = write!(
            d,
            "C{},{},{},{},{},{}",
            num(dot4(&BASIS_1, &px)),
            num(dot4(&BASIS_1, &py)),
            num(dot4(&BASIS_2, &px)),
            num(dot4(&BASIS_2, &py)),
            num(dot4(&BASIS_3, &px)),
            num(dot4(&BASIS_3, &py))
        );
    }

    let (xn, yn) = points[n - 1];
    let _ = write!(d, "L{},{}", num(xn), num(yn));
    d
}

fn dot4(a: &[f64; 4], b: &[f64; 4]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

/// Compact number for SVG output: at most three decimals, no trailing zeros.
pub fn num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{:.3}", rounded);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cartesian_orientation() {
        let (x, y) = to_cartesian(0.0, 10.0);
        assert!(x.abs() < 1e-9 && (y + 10.0).abs() < 1e-9);

        let (x, y) = to_cartesian(90.0, 10.0);
        assert!((x - 10.0).abs() < 1e-9 && y.abs() < 1e-9);
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(1.0), "1");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(2.5), "2.5");
        assert_eq!(num(1.23456), "1.235");
        assert_eq!(num(-10.0), "-10");
    }

    #[test]
    fn test_empty_and_short_paths() {
        let line = RadialLine::default();

        assert_eq!(line.path(&[]), "");
        assert_eq!(line.path(&[(90.0, 10.0)]), "M10,0");
        assert_eq!(line.path(&[(90.0, 10.0), (270.0, 10.0)]), "M10,0L-10,0");
    }

    #[test]
    fn test_bundle_path_shape() {
        let line = RadialLine::default();
        let d = line.path(&[(90.0, 100.0), (90.0, 50.0), (0.0, 0.0), (270.0, 50.0), (270.0, 100.0)]);

        assert!(d.starts_with("M100,0L"));
        assert!(d.ends_with("L-100,0"));
        // One cubic segment per point after the first, plus the closing repeat.
        assert_eq!(d.matches('C').count(), 4);
    }

    #[test]
    fn test_zero_tension_is_straight() {
        let line = RadialLine::new(0.0);
        let d = line.path(&[(90.0, 100.0), (0.0, 80.0), (270.0, 100.0)]);

        // Everything collapses onto the horizontal chord.
        for segment in d
            .split(|c: char| c.is_ascii_alphabetic())
            .filter(|s| !s.is_empty())
        {
            let values: Vec<&str> = segment.split(',').collect();
            for y in values.iter().skip(1).step_by(2) {
                assert_eq!(*y, "0");
            }
        }
    }
}
