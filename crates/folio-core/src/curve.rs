//! Catmull-Rom interpolation for the strap.
//!
//! Parametrisation matches the common three.js `CatmullRomCurve3` so the
//! sampled strap has the same shape: non-uniform variants weight each span by
//! a power of the chord length, and the open ends are extrapolated by
//! mirroring the neighbouring control point.

use glam::Vec3;
use smallvec::SmallVec;

const MIN_SPAN: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveType {
    /// Uniform knots with the given tension.
    Uniform { tension: f32 },
    /// Knot spacing `|Δp|^0.5`.
    Centripetal,
    /// Knot spacing `|Δp|`.
    Chordal,
}

impl CurveType {
    /// Exponent applied to the squared chord length.
    fn squared_power(self) -> Option<f32> {
        match self {
            CurveType::Uniform { .. } => None,
            CurveType::Centripetal => Some(0.25),
            CurveType::Chordal => Some(0.5),
        }
    }
}

/// Cubic `c0 + c1·t + c2·t² + c3·t³` over one span.
#[derive(Clone, Copy, Debug, Default)]
struct Cubic {
    c0: Vec3,
    c1: Vec3,
    c2: Vec3,
    c3: Vec3,
}

impl Cubic {
    /// Hermite form from end points and end tangents.
    fn hermite(x0: Vec3, x1: Vec3, t0: Vec3, t1: Vec3) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    fn non_uniform(p: [Vec3; 4], dt0: f32, dt1: f32, dt2: f32) -> Self {
        let [x0, x1, x2, x3] = p;
        let t1 = (x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1;
        let t2 = (x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2;
        Self::hermite(x1, x2, t1 * dt1, t2 * dt1)
    }

    fn eval(&self, t: f32) -> Vec3 {
        let t2 = t * t;
        self.c0 + self.c1 * t + self.c2 * t2 + self.c3 * t2 * t
    }
}

#[derive(Clone, Debug)]
pub struct CatmullRom {
    points: SmallVec<[Vec3; 4]>,
    kind: CurveType,
}

impl CatmullRom {
    pub fn new(kind: CurveType) -> Self {
        Self {
            points: SmallVec::new(),
            kind,
        }
    }

    pub fn with_points(kind: CurveType, points: &[Vec3]) -> Self {
        let mut curve = Self::new(kind);
        curve.set_points(points);
        curve
    }

    /// Replace the control points in place.
    pub fn set_points(&mut self, points: &[Vec3]) {
        self.points.clear();
        self.points.extend_from_slice(points);
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn kind(&self) -> CurveType {
        self.kind
    }

    /// Point at parameter `t ∈ [0, 1]` (clamped). The curve passes through
    /// every control point.
    pub fn point_at(&self, t: f32) -> Vec3 {
        let pts = &self.points;
        let l = pts.len();
        match l {
            0 => return Vec3::ZERO,
            1 => return pts[0],
            _ => {}
        }
        let p = (l - 1) as f32 * t.clamp(0.0, 1.0);
        let mut seg = p.floor() as usize;
        let mut weight = p - seg as f32;
        if seg >= l - 1 {
            seg = l - 2;
            weight = 1.0;
        }

        let p0 = if seg > 0 {
            pts[seg - 1]
        } else {
            2.0 * pts[0] - pts[1]
        };
        let p1 = pts[seg];
        let p2 = pts[seg + 1];
        let p3 = if seg + 2 < l {
            pts[seg + 2]
        } else {
            2.0 * pts[l - 1] - pts[l - 2]
        };

        let cubic = match self.kind.squared_power() {
            Some(pow) => {
                let mut dt0 = p0.distance_squared(p1).powf(pow);
                let mut dt1 = p1.distance_squared(p2).powf(pow);
                let mut dt2 = p2.distance_squared(p3).powf(pow);
                if dt1 < MIN_SPAN {
                    dt1 = 1.0;
                }
                if dt0 < MIN_SPAN {
                    dt0 = dt1;
                }
                if dt2 < MIN_SPAN {
                    dt2 = dt1;
                }
                Cubic::non_uniform([p0, p1, p2, p3], dt0, dt1, dt2)
            }
            None => {
                let tension = match self.kind {
                    CurveType::Uniform { tension } => tension,
                    _ => 0.5,
                };
                Cubic::hermite(p1, p2, tension * (p2 - p0), tension * (p3 - p1))
            }
        };
        cubic.eval(weight)
    }

    /// Sample `divisions + 1` evenly parametrised points into `out`.
    pub fn sample_into(&self, divisions: usize, out: &mut Vec<Vec3>) {
        out.clear();
        let divisions = divisions.max(1);
        out.extend((0..=divisions).map(|d| self.point_at(d as f32 / divisions as f32)));
    }

    pub fn sample(&self, divisions: usize) -> Vec<Vec3> {
        let mut out = Vec::with_capacity(divisions + 1);
        self.sample_into(divisions, &mut out);
        out
    }
}

/// Expand a polyline into a flat triangle strip in the XY plane: two vertices
/// per point, offset sideways by `half_width`.
pub fn ribbon_strip(points: &[Vec3], half_width: f32, out: &mut Vec<Vec3>) {
    out.clear();
    let n = points.len();
    if n < 2 {
        return;
    }
    for i in 0..n {
        let prev = points[i.saturating_sub(1)];
        let next = points[(i + 1).min(n - 1)];
        let side = (next - prev).cross(Vec3::Z).normalize_or_zero() * half_width;
        out.push(points[i] - side);
        out.push(points[i] + side);
    }
}
