use super::constants::{
    BEVEL_SEGMENTS, BEVEL_SIZE, BEVEL_THICKNESS, EXTRUDE_DEPTH, HEART_CURVE_DIVISIONS,
    MAX_MITER_LENGTH,
};
use glam::{Vec2, Vec3};

const POINT_EPSILON: f32 = 1e-5;

/// One cubic bezier segment continuing from the previous segment's end point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub c1: Vec2,
    pub c2: Vec2,
    pub end: Vec2,
}

impl CubicSegment {
    pub const fn new(c1: [f32; 2], c2: [f32; 2], end: [f32; 2]) -> Self {
        Self {
            c1: Vec2::new(c1[0], c1[1]),
            c2: Vec2::new(c2[0], c2[1]),
            end: Vec2::new(end[0], end[1]),
        }
    }

    #[inline]
    pub fn point_at(&self, start: Vec2, t: f32) -> Vec2 {
        let u = 1.0 - t;
        start * (u * u * u) + self.c1 * (3.0 * u * u * t) + self.c2 * (3.0 * u * t * t)
            + self.end * (t * t * t)
    }
}

/// A closed 2D profile made of cubic bezier segments.
#[derive(Clone, Debug)]
pub struct ShapeOutline {
    pub start: Vec2,
    pub segments: Vec<CubicSegment>,
}

/// The heart profile: notch at the origin, tip at y = -5.
pub fn heart_outline() -> ShapeOutline {
    ShapeOutline {
        start: Vec2::ZERO,
        segments: vec![
            CubicSegment::new([0.0, 0.0], [-0.5, 1.5], [-2.0, 1.5]),
            CubicSegment::new([-3.5, 1.5], [-3.5, -0.5], [-3.5, -0.5]),
            CubicSegment::new([-3.5, -2.0], [-1.5, -3.5], [0.0, -5.0]),
            CubicSegment::new([1.5, -3.5], [3.5, -2.0], [3.5, -0.5]),
            CubicSegment::new([3.5, -0.5], [3.5, 1.5], [2.0, 1.5]),
            CubicSegment::new([0.5, 1.5], [0.0, 0.0], [0.0, 0.0]),
        ],
    }
}

impl ShapeOutline {
    /// Sample the outline into a closed, counter-clockwise polygon.
    ///
    /// Consecutive duplicates are dropped, and so is the closing point when it
    /// coincides with the first one.
    pub fn sample(&self, divisions: usize) -> Vec<Vec2> {
        let divisions = divisions.max(1);
        let mut points = vec![self.start];
        let mut from = self.start;
        for seg in &self.segments {
            for k in 1..=divisions {
                let p = seg.point_at(from, k as f32 / divisions as f32);
                if points
                    .last()
                    .map_or(true, |last| last.distance(p) > POINT_EPSILON)
                {
                    points.push(p);
                }
            }
            from = seg.end;
        }
        while points.len() > 1 && points[0].distance(points[points.len() - 1]) <= POINT_EPSILON {
            points.pop();
        }
        if signed_area(&points) < 0.0 {
            points.reverse();
        }
        points
    }
}

/// Shoelace area; positive for counter-clockwise polygons.
pub fn signed_area(polygon: &[Vec2]) -> f32 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        sum += a.perp_dot(b);
    }
    sum * 0.5
}

fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = (b - a).perp_dot(p - a);
    let d2 = (c - b).perp_dot(p - b);
    let d3 = (a - c).perp_dot(p - c);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Ear-clipping triangulation of a simple polygon.
///
/// Returned triangles index into `polygon` and are wound counter-clockwise
/// regardless of the input winding.
pub fn triangulate(polygon: &[Vec2]) -> Vec<[usize; 3]> {
    let n = polygon.len();
    if n < 3 {
        return Vec::new();
    }
    let mut ring: Vec<usize> = (0..n).collect();
    if signed_area(polygon) < 0.0 {
        ring.reverse();
    }
    let mut tris = Vec::with_capacity(n - 2);
    while ring.len() > 3 {
        let m = ring.len();
        let ear = (0..m).find(|&i| {
            let a = ring[(i + m - 1) % m];
            let b = ring[i];
            let c = ring[(i + 1) % m];
            let (pa, pb, pc) = (polygon[a], polygon[b], polygon[c]);
            if (pb - pa).perp_dot(pc - pb) <= 1e-9 {
                return false;
            }
            !ring
                .iter()
                .filter(|&&j| j != a && j != b && j != c)
                .any(|&j| point_in_triangle(polygon[j], pa, pb, pc))
        });
        match ear {
            Some(i) => {
                tris.push([ring[(i + m - 1) % m], ring[i], ring[(i + 1) % m]]);
                ring.remove(i);
            }
            None => {
                // Degenerate remainder: close it with a fan.
                for i in 1..m - 1 {
                    tris.push([ring[0], ring[i], ring[i + 1]]);
                }
                ring.clear();
            }
        }
    }
    if ring.len() == 3 {
        tris.push([ring[0], ring[1], ring[2]]);
    }
    tris
}

/// Extrusion parameters for turning an outline into a solid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtrudeSettings {
    pub depth: f32,
    pub bevel_thickness: f32,
    pub bevel_size: f32,
    pub bevel_segments: u32,
}

impl Default for ExtrudeSettings {
    fn default() -> Self {
        Self {
            depth: EXTRUDE_DEPTH,
            bevel_thickness: BEVEL_THICKNESS,
            bevel_size: BEVEL_SIZE,
            bevel_segments: BEVEL_SEGMENTS,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Non-indexed triangle list with flat per-face normals.
#[derive(Clone, Debug, Default)]
pub struct SolidMesh {
    pub vertices: Vec<MeshVertex>,
}

impl SolidMesh {
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Vertex positions only, three per triangle (used for picking).
    pub fn positions(&self) -> Vec<Vec3> {
        self.vertices
            .iter()
            .map(|v| Vec3::from_array(v.position))
            .collect()
    }

    fn push_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let n = (b - a).cross(c - a);
        let len = n.length();
        if len <= 1e-12 {
            return;
        }
        let normal = (n / len).to_array();
        for p in [a, b, c] {
            self.vertices.push(MeshVertex {
                position: p.to_array(),
                normal,
            });
        }
    }
}

// Outward offset direction per vertex of a counter-clockwise contour, scaled
// so that offset edges stay parallel to the input edges.
fn bevel_vectors(contour: &[Vec2]) -> Vec<Vec2> {
    let n = contour.len();
    (0..n)
        .map(|i| {
            let prev = contour[(i + n - 1) % n];
            let cur = contour[i];
            let next = contour[(i + 1) % n];
            let e1 = (cur - prev).normalize_or_zero();
            let e2 = (next - cur).normalize_or_zero();
            let n1 = Vec2::new(e1.y, -e1.x);
            let n2 = Vec2::new(e2.y, -e2.x);
            let miter = (n1 + n2).normalize_or_zero();
            if miter == Vec2::ZERO {
                return n1;
            }
            let cos_half = miter.dot(n1).max(1.0 / MAX_MITER_LENGTH);
            miter / cos_half
        })
        .collect()
}

/// Extrude a closed outline along +Z with a rounded bevel on both faces.
///
/// The front cap sits at `-bevel_thickness`, the back cap at
/// `depth + bevel_thickness`; the side walls are pushed out by `bevel_size`.
pub fn extrude(outline: &[Vec2], settings: &ExtrudeSettings) -> SolidMesh {
    let mut mesh = SolidMesh::default();
    if outline.len() < 3 {
        return mesh;
    }
    let mut contour = outline.to_vec();
    if signed_area(&contour) < 0.0 {
        contour.reverse();
    }
    let bevels = bevel_vectors(&contour);

    let segs = settings.bevel_segments;
    let quarter = std::f32::consts::FRAC_PI_2;
    // (z, outward offset) per ring, front to back
    let mut rings: Vec<(f32, f32)> = Vec::new();
    if segs == 0 {
        rings.push((0.0, 0.0));
        rings.push((settings.depth, 0.0));
    } else {
        for b in 0..=segs {
            let t = b as f32 / segs as f32;
            rings.push((
                -settings.bevel_thickness * (t * quarter).cos(),
                settings.bevel_size * (t * quarter).sin(),
            ));
        }
        rings.push((settings.depth, settings.bevel_size));
        for b in (0..segs).rev() {
            let t = b as f32 / segs as f32;
            rings.push((
                settings.depth + settings.bevel_thickness * (t * quarter).cos(),
                settings.bevel_size * (t * quarter).sin(),
            ));
        }
    }

    let ring_point = |ring: usize, i: usize| -> Vec3 {
        let (z, offset) = rings[ring];
        let p = contour[i] + bevels[i] * offset;
        Vec3::new(p.x, p.y, z)
    };

    let n = contour.len();
    for r in 0..rings.len() - 1 {
        for i in 0..n {
            let j = (i + 1) % n;
            let a = ring_point(r, i);
            let b = ring_point(r, j);
            let c = ring_point(r + 1, j);
            let d = ring_point(r + 1, i);
            mesh.push_triangle(a, b, c);
            mesh.push_triangle(a, c, d);
        }
    }

    let front_z = rings[0].0;
    let back_z = rings[rings.len() - 1].0;
    let lift = |p: Vec2, z: f32| Vec3::new(p.x, p.y, z);
    for [a, b, c] in triangulate(&contour) {
        let (pa, pb, pc) = (contour[a], contour[b], contour[c]);
        mesh.push_triangle(lift(pa, front_z), lift(pc, front_z), lift(pb, front_z));
        mesh.push_triangle(lift(pa, back_z), lift(pb, back_z), lift(pc, back_z));
    }
    mesh
}

/// The heart solid with the default extrusion settings.
pub fn heart_mesh() -> SolidMesh {
    let outline = heart_outline().sample(HEART_CURVE_DIVISIONS);
    extrude(&outline, &ExtrudeSettings::default())
}
