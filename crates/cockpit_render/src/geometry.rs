//! CPU-side geometry for instrument drawing
//!
//! Builds interleaved vertex data for textured quads and line strips, the
//! shared quad index pattern, and the pixel-space projection matrix.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};
use std::mem::size_of;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("quad geometry needs a non-zero multiple of 4 points, got {count}")]
    QuadPointCount { count: usize },

    #[error("{texcoords} texture coordinates given for {points} points")]
    TexcoordMismatch { points: usize, texcoords: usize },

    #[error("a line strip needs at least 2 points, got {count}")]
    LinePointCount { count: usize },

    #[error("{count} vertices cannot be addressed with 16-bit indices")]
    TooManyVertices { count: usize },

    #[error("index {position} (value {value}) is outside of vertex range {num_vtx}")]
    IndexOutOfRange {
        position: usize,
        value: u32,
        num_vtx: usize,
    },
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    pub pos: [f32; 2],
    pub tex: [f32; 2],
}

impl Vertex2D {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex3D {
    pub pos: [f32; 3],
    pub tex: [f32; 2],
}

impl Vertex3D {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub pos: [f32; 3],
}

impl LineVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

fn check_quads(points: usize, texcoords: Option<&[Vec2]>) -> Result<(), GeometryError> {
    if points == 0 || points % 4 != 0 {
        return Err(GeometryError::QuadPointCount { count: points });
    }
    if let Some(t) = texcoords {
        if t.len() != points {
            return Err(GeometryError::TexcoordMismatch {
                points,
                texcoords: t.len(),
            });
        }
    }
    Ok(())
}

fn texcoord(texcoords: Option<&[Vec2]>, i: usize) -> [f32; 2] {
    texcoords
        .and_then(|t| t.get(i))
        .map_or([0.0, 0.0], |t| t.to_array())
}

/// Interleave 2D quad corners with their texture coordinates.
///
/// Every 4 consecutive points form one quad, wound 0-1-2-3. Missing
/// texture coordinates are zero.
pub fn build_2d_quads(
    points: &[Vec2],
    texcoords: Option<&[Vec2]>,
) -> Result<Vec<Vertex2D>, GeometryError> {
    check_quads(points.len(), texcoords)?;
    Ok(points
        .iter()
        .enumerate()
        .map(|(i, p)| Vertex2D {
            pos: p.to_array(),
            tex: texcoord(texcoords, i),
        })
        .collect())
}

/// 3D counterpart of [`build_2d_quads`].
pub fn build_3d_quads(
    points: &[Vec3],
    texcoords: Option<&[Vec2]>,
) -> Result<Vec<Vertex3D>, GeometryError> {
    check_quads(points.len(), texcoords)?;
    Ok(points
        .iter()
        .enumerate()
        .map(|(i, p)| Vertex3D {
            pos: p.to_array(),
            tex: texcoord(texcoords, i),
        })
        .collect())
}

/// Vertices of a line strip through `points`.
pub fn build_3d_lines(points: &[Vec3]) -> Result<Vec<LineVertex>, GeometryError> {
    if points.len() < 2 {
        return Err(GeometryError::LinePointCount {
            count: points.len(),
        });
    }
    Ok(points
        .iter()
        .map(|p| LineVertex { pos: p.to_array() })
        .collect())
}

/// Triangle-list indices drawing `num_vtx` vertices as quads (0,1,2 + 0,2,3).
pub fn quad_indices(num_vtx: usize) -> Result<Vec<u16>, GeometryError> {
    if num_vtx == 0 || num_vtx % 4 != 0 {
        return Err(GeometryError::QuadPointCount { count: num_vtx });
    }
    if num_vtx > usize::from(u16::MAX) + 1 {
        return Err(GeometryError::TooManyVertices { count: num_vtx });
    }

    let mut indices = Vec::with_capacity(num_vtx / 4 * 6);
    for quad in 0..num_vtx / 4 {
        // bounded by the u16 range check above
        let base = (quad * 4) as u16;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    Ok(indices)
}

/// Number of indices [`quad_indices`] produces for `num_vtx` vertices.
pub fn quad_index_count(num_vtx: usize) -> usize {
    num_vtx / 4 * 6
}

/// Check that every index addresses one of `num_vtx` vertices.
pub fn validate_indices<I>(indices: &[I], num_vtx: usize) -> Result<(), GeometryError>
where
    I: Copy + Into<u32>,
{
    for (position, &index) in indices.iter().enumerate() {
        let value: u32 = index.into();
        if value as usize >= num_vtx {
            return Err(GeometryError::IndexOutOfRange {
                position,
                value,
                num_vtx,
            });
        }
    }
    Ok(())
}

/// Projection matrix mapping viewport pixels (origin bottom-left) to clip
/// space, for drawing instrument overlays in pixel coordinates.
pub fn viewport_pvm(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic_rh_gl(0.0, width, 0.0, height, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
        ]
    }

    #[test]
    fn quads_interleave_texcoords() {
        let p = unit_square();
        let t = unit_square();
        let vertices = build_2d_quads(&p, Some(t.as_slice())).unwrap();
        assert_eq!(vertices.len(), 4);
        let corner = Vertex2D {
            pos: [1.0, 1.0],
            tex: [1.0, 1.0],
        };
        assert_eq!(vertices[2], corner);
        let bytes: &[u8] = bytemuck::cast_slice(vertices.as_slice());
        assert_eq!(bytes.len(), 4 * 16);

        let untextured = build_3d_quads(&[Vec3::ZERO; 8], None).unwrap();
        assert_eq!(untextured.len(), 8);
        assert!(untextured.iter().all(|v| v.tex == [0.0, 0.0]));
    }

    #[test]
    fn quads_reject_bad_counts() {
        assert_eq!(
            build_2d_quads(&unit_square()[..3], None),
            Err(GeometryError::QuadPointCount { count: 3 })
        );
        assert_eq!(
            build_2d_quads(&unit_square(), Some(&[Vec2::ZERO; 2][..])),
            Err(GeometryError::TexcoordMismatch {
                points: 4,
                texcoords: 2
            })
        );
        assert_eq!(
            build_3d_lines(&[Vec3::ONE]),
            Err(GeometryError::LinePointCount { count: 1 })
        );
    }

    #[test]
    fn quad_index_pattern() {
        let indices = quad_indices(8).unwrap();
        assert_eq!(indices, vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
        assert_eq!(indices.len(), quad_index_count(8));
        assert!(validate_indices(&indices, 8).is_ok());
    }

    #[test]
    fn quad_indices_stay_within_u16() {
        let max = quad_indices(65536).unwrap();
        assert_eq!(max.last(), Some(&65535));
        assert_eq!(
            quad_indices(65540),
            Err(GeometryError::TooManyVertices { count: 65540 })
        );
        assert_eq!(
            quad_indices(0),
            Err(GeometryError::QuadPointCount { count: 0 })
        );
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let indices: [u32; 4] = [0, 1, 7, 2];
        assert_eq!(
            validate_indices(&indices, 4),
            Err(GeometryError::IndexOutOfRange {
                position: 2,
                value: 7,
                num_vtx: 4
            })
        );
    }

    #[test]
    fn pvm_maps_viewport_corners_to_clip_space() {
        let pvm = viewport_pvm(800.0, 600.0);
        let low = pvm.project_point3(Vec3::new(0.0, 0.0, 0.0));
        let high = pvm.project_point3(Vec3::new(800.0, 600.0, 0.0));
        assert!((low.x + 1.0).abs() < 1e-6 && (low.y + 1.0).abs() < 1e-6);
        assert!((high.x - 1.0).abs() < 1e-6 && (high.y - 1.0).abs() < 1e-6);
    }
}
