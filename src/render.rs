//! A small software rasterizer for drawing a vertex-colored brain mesh from one of the fixed views.
//!
//! Projection is orthographic. Faces are filled with a depth buffer, vertex colors are interpolated
//! barycentrically, and each face is lit by a headlight: an ambient term plus a two-sided Lambert term on
//! the face normal. Pixels without a face stay white.

use glam::Vec3;
use image::{Rgb, RgbImage};
use ndarray::ArrayView1;
use ndarray_stats::QuantileExt;

use crate::error::{Du15Error, Result};
use crate::fs_surface::BrainMesh;
use crate::labelmap::LabelMap;
use crate::view::Camera;

pub const CANVAS_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Fraction of the image size left empty on each side.
    pub margin: f32,
    /// Whether the sulcal depth darkens the colors.
    pub bg_on_data: bool,
    /// How much the deepest sulci are darkened, in `[0, 1]`.
    pub sulc_darkness: f32,
    pub ambient: f32,
    pub diffuse: f32,
}

impl Default for RenderSettings {
    fn default() -> RenderSettings {
        RenderSettings {
            width: 1200,
            height: 1200,
            margin: 0.02,
            bg_on_data: true,
            sulc_darkness: 0.5,
            ambient: 0.35,
            diffuse: 0.65,
        }
    }
}


/// Rescale the sulcal depth to `[0, 1]`. A constant or empty map gives all zeros.
pub fn rescale_sulc(sulc: &[f32]) -> Vec<f32> {
    let view = ArrayView1::from(sulc);
    let (min, max) = match (view.min(), view.max()) {
        (Ok(min), Ok(max)) => (*min, *max),
        _ => return vec![0.0; sulc.len()],
    };
    let range = max - min;
    if range <= 0.0 {
        return vec![0.0; sulc.len()];
    }
    view.iter().map(|v| (v - min) / range).collect()
}


/// Per-vertex colors in `[0, 1]` for the label map, optionally darkened by the sulcal depth.
///
/// # Errors
///
/// [`Du15Error::VertexCountMismatch`] if the sulcal depth does not have one value per label.
pub fn vertex_colors(label_map: &LabelMap, sulc: &[f32], settings: &RenderSettings) -> Result<Vec<[f32; 3]>> {
    if sulc.len() != label_map.num_vertices() {
        return Err(Du15Error::VertexCountMismatch(
            format!("{}.sulc", label_map.hemi.prefix()).into(),
            sulc.len(),
            label_map.num_vertices(),
        ));
    }

    let depth = rescale_sulc(sulc);
    let cmap = label_map.colortable.colormap();
    let background = cmap.first().copied().unwrap_or([0.0; 3]);
    let colors = label_map
        .labels
        .iter()
        .zip(depth.iter())
        .map(|(label, d)| {
            let [r, g, b] = cmap.get(*label as usize).copied().unwrap_or(background);
            let shade = if settings.bg_on_data { 1.0 - settings.sulc_darkness * d } else { 1.0 };
            [r * shade, g * shade, b * shade]
        })
        .collect();
    Ok(colors)
}


/// Signed double area of the triangle `a, b, p` in screen space.
fn edge(a: (f32, f32), b: (f32, f32), p: (f32, f32)) -> f32 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

fn to_u8(v: f32) -> u8 {
    (v.max(0.0).min(1.0) * 255.0).round() as u8
}


/// Draw the mesh as seen by `camera`, with one color per vertex.
///
/// The mesh is centered on its bounding box center and scaled uniformly to fill the image minus the margin.
///
/// # Errors
///
/// * [`Du15Error::EmptyMesh`] if the mesh has no vertices or no faces.
/// * [`Du15Error::VertexCountMismatch`] if `colors` does not have one entry per vertex.
pub fn render_view(mesh: &BrainMesh, colors: &[[f32; 3]], camera: &Camera, settings: &RenderSettings) -> Result<RgbImage> {
    if mesh.num_faces() == 0 {
        return Err(Du15Error::EmptyMesh);
    }
    let center = Vec3::from(mesh.center().ok_or(Du15Error::EmptyMesh)?);
    if colors.len() != mesh.num_vertices() {
        return Err(Du15Error::VertexCountMismatch("vertex colors".into(), colors.len(), mesh.num_vertices()));
    }

    let points: Vec<Vec3> = (0..mesh.num_vertices()).map(|idx| Vec3::from(mesh.vertex(idx))).collect();
    let projected: Vec<(f32, f32, f32)> = points.iter().map(|p| camera.project(*p, center)).collect();

    let half_extent_x = projected.iter().fold(0.0f32, |acc, p| acc.max(p.0.abs()));
    let half_extent_y = projected.iter().fold(0.0f32, |acc, p| acc.max(p.1.abs()));
    let width = settings.width as f32;
    let height = settings.height as f32;
    let usable = (1.0 - 2.0 * settings.margin).max(0.0);
    let scale = {
        let sx = if half_extent_x > 0.0 { width * usable / (2.0 * half_extent_x) } else { f32::INFINITY };
        let sy = if half_extent_y > 0.0 { height * usable / (2.0 * half_extent_y) } else { f32::INFINITY };
        let s = sx.min(sy);
        if s.is_finite() { s } else { 1.0 }
    };

    let screen: Vec<(f32, f32)> = projected
        .iter()
        .map(|(x, y, _)| (width / 2.0 + x * scale, height / 2.0 - y * scale))
        .collect();

    let mut img = RgbImage::from_pixel(settings.width, settings.height, CANVAS_COLOR);
    let mut zbuf = vec![f32::INFINITY; (settings.width * settings.height) as usize];

    for face_idx in 0..mesh.num_faces() {
        let [ia, ib, ic] = mesh.face(face_idx);
        let (a, b, c) = (screen[ia], screen[ib], screen[ic]);

        let area = edge(a, b, c);
        if area.abs() < 1e-12 {
            continue;
        }

        let normal = (points[ib] - points[ia]).cross(points[ic] - points[ia]);
        if normal.length_squared() == 0.0 {
            continue;
        }
        let lambert = normal.normalize().dot(camera.forward).abs();
        let intensity = (settings.ambient + settings.diffuse * lambert).min(1.0);

        let min_x = a.0.min(b.0).min(c.0).floor().max(0.0) as u32;
        let max_x = a.0.max(b.0).max(c.0).ceil().min(width - 1.0).max(0.0) as u32;
        let min_y = a.1.min(b.1).min(c.1).floor().max(0.0) as u32;
        let max_y = a.1.max(b.1).max(c.1).ceil().min(height - 1.0).max(0.0) as u32;

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let p = (px as f32 + 0.5, py as f32 + 0.5);
                let w0 = edge(b, c, p) / area;
                let w1 = edge(c, a, p) / area;
                let w2 = edge(a, b, p) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = w0 * projected[ia].2 + w1 * projected[ib].2 + w2 * projected[ic].2;
                let buf_idx = (py * settings.width + px) as usize;
                if depth >= zbuf[buf_idx] {
                    continue;
                }
                zbuf[buf_idx] = depth;

                let mut rgb = [0u8; 3];
                for (channel, value) in rgb.iter_mut().enumerate() {
                    let interpolated = w0 * colors[ia][channel] + w1 * colors[ib][channel] + w2 * colors[ic][channel];
                    *value = to_u8(interpolated * intensity);
                }
                img.put_pixel(px, py, Rgb(rgb));
            }
        }
    }
    Ok(img)
}
