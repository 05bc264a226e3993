//! Ledger-tracked vertex and index buffers
//!
//! Each buffer reports its size to the GPU memory ledger on creation and
//! releases it in `destroy()`. Dropping a buffer without `destroy()` frees
//! the GPU side but leaves the bytes in the ledger, so the leak shows up at
//! ledger teardown with the call site that created the buffer.

use crate::geometry::{
    build_2d_quads, build_3d_lines, build_3d_quads, quad_index_count, quad_indices, GeometryError,
};
use crate::{LINES_VBO, QUADS_IBO, QUADS_VBO};
use cockpit_ledger::{CallSite, InstanceId, Token};
use glam::{Vec2, Vec3};
use wgpu::util::DeviceExt;

/// Bytes reported to the ledger for one GPU resource.
#[derive(Debug)]
struct Charge {
    token: &'static Token,
    instance: InstanceId,
    bytes: u64,
    /// Whether the ledger was active when the bytes were reported.
    tracked: bool,
}

impl Charge {
    fn new(token: &'static Token, bytes: u64, site: CallSite) -> Self {
        let instance = InstanceId::next();
        let tracked = cockpit_ledger::is_active();
        if tracked {
            cockpit_ledger::alloc_bytes(token, Some(instance), site, bytes);
        }
        Self {
            token,
            instance,
            bytes,
            tracked,
        }
    }

    /// Undo the report, if there was one. A ledger brought up after the
    /// charge was made never saw its bytes.
    fn release(self) {
        if self.tracked {
            cockpit_ledger::free_bytes(self.token, Some(self.instance), self.bytes);
        }
    }
}

#[derive(Debug)]
struct TrackedBuffer {
    buffer: wgpu::Buffer,
    charge: Charge,
}

impl TrackedBuffer {
    fn new(
        device: &wgpu::Device,
        token: &'static Token,
        contents: &[u8],
        usage: wgpu::BufferUsages,
        site: CallSite,
    ) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(token.name()),
            contents,
            usage,
        });
        let charge = Charge::new(token, contents.len() as u64, site);
        tracing::debug!(
            token = token.name(),
            instance = %charge.instance,
            bytes = charge.bytes,
            %site,
            "buffer created"
        );
        Self { buffer, charge }
    }

    fn destroy(self) {
        self.charge.release();
        self.buffer.destroy();
    }
}

fn vertex_count(len: usize) -> Result<u32, GeometryError> {
    u32::try_from(len).map_err(|_| GeometryError::TooManyVertices { count: len })
}

/// Shared index buffer drawing up to `num_vtx` vertices as quads.
#[derive(Debug)]
pub struct QuadIndexBuffer {
    inner: TrackedBuffer,
    num_vtx: u32,
}

impl QuadIndexBuffer {
    #[track_caller]
    pub fn new(device: &wgpu::Device, num_vtx: usize) -> Result<Self, GeometryError> {
        let site = CallSite::caller();
        let indices = quad_indices(num_vtx)?;
        let num_vtx = vertex_count(num_vtx)?;
        Ok(Self {
            inner: TrackedBuffer::new(
                device,
                &QUADS_IBO,
                bytemuck::cast_slice(&indices),
                wgpu::BufferUsages::INDEX,
                site,
            ),
            num_vtx,
        })
    }

    pub fn num_vtx(&self) -> u32 {
        self.num_vtx
    }

    pub fn destroy(self) {
        self.inner.destroy();
    }
}

/// Textured quads uploaded to a vertex buffer.
#[derive(Debug)]
pub struct QuadBuffer {
    inner: TrackedBuffer,
    num_vtx: u32,
}

impl QuadBuffer {
    /// Upload 2D quads; every 4 points form one quad.
    #[track_caller]
    pub fn new_2d(
        device: &wgpu::Device,
        points: &[Vec2],
        texcoords: Option<&[Vec2]>,
    ) -> Result<Self, GeometryError> {
        let site = CallSite::caller();
        let vertices = build_2d_quads(points, texcoords)?;
        Self::upload(
            device,
            bytemuck::cast_slice(&vertices),
            vertices.len(),
            site,
        )
    }

    /// Upload 3D quads; every 4 points form one quad.
    #[track_caller]
    pub fn new_3d(
        device: &wgpu::Device,
        points: &[Vec3],
        texcoords: Option<&[Vec2]>,
    ) -> Result<Self, GeometryError> {
        let site = CallSite::caller();
        let vertices = build_3d_quads(points, texcoords)?;
        Self::upload(
            device,
            bytemuck::cast_slice(&vertices),
            vertices.len(),
            site,
        )
    }

    fn upload(
        device: &wgpu::Device,
        contents: &[u8],
        len: usize,
        site: CallSite,
    ) -> Result<Self, GeometryError> {
        let num_vtx = vertex_count(len)?;
        Ok(Self {
            inner: TrackedBuffer::new(
                device,
                &QUADS_VBO,
                contents,
                wgpu::BufferUsages::VERTEX,
                site,
            ),
            num_vtx,
        })
    }

    pub fn num_vtx(&self) -> u32 {
        self.num_vtx
    }

    /// Record an indexed draw of every quad into `pass`.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, indices: &QuadIndexBuffer) {
        debug_assert!(
            indices.num_vtx() >= self.num_vtx,
            "index buffer covers {} vertices, quads need {}",
            indices.num_vtx(),
            self.num_vtx
        );
        let index_count = quad_index_count(self.num_vtx as usize) as u32;
        pass.set_vertex_buffer(0, self.inner.buffer.slice(..));
        pass.set_index_buffer(indices.inner.buffer.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..index_count, 0, 0..1);
    }

    pub fn destroy(self) {
        self.inner.destroy();
    }
}

/// A 3D line strip uploaded to a vertex buffer.
#[derive(Debug)]
pub struct LineBuffer {
    inner: TrackedBuffer,
    num_vtx: u32,
}

impl LineBuffer {
    #[track_caller]
    pub fn new(device: &wgpu::Device, points: &[Vec3]) -> Result<Self, GeometryError> {
        let site = CallSite::caller();
        let vertices = build_3d_lines(points)?;
        let num_vtx = vertex_count(vertices.len())?;
        Ok(Self {
            inner: TrackedBuffer::new(
                device,
                &LINES_VBO,
                bytemuck::cast_slice(&vertices),
                wgpu::BufferUsages::VERTEX,
                site,
            ),
            num_vtx,
        })
    }

    pub fn num_vtx(&self) -> u32 {
        self.num_vtx
    }

    /// Record a draw of the strip into `pass` (pipeline topology must be
    /// `LineStrip`).
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.inner.buffer.slice(..));
        pass.draw(0..self.num_vtx, 0..1);
    }

    pub fn destroy(self) {
        self.inner.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    cockpit_ledger::declare_token!(TEST_BUFFERS, "test_buffers");

    // The only test in this crate touching the process-wide ledger.
    #[test]
    fn charges_follow_the_ledger_state_at_creation() {
        let site = CallSite::new("buffers.rs", 1);
        let before_init = Charge::new(&TEST_BUFFERS, 64, site);
        assert!(!before_init.tracked);

        cockpit_ledger::init();
        let after_init = Charge::new(&TEST_BUFFERS, 256, site);
        assert!(after_init.tracked);
        assert_eq!(cockpit_ledger::total_bytes(), 256);

        // the ledger never saw these bytes, so nothing is freed
        before_init.release();
        assert_eq!(cockpit_ledger::total_bytes(), 256);

        after_init.release();
        assert_eq!(cockpit_ledger::total_bytes(), 0);
        cockpit_ledger::fini();
    }

    #[test]
    fn vertex_counts_fit_draw_ranges() {
        assert_eq!(vertex_count(65536), Ok(65536));
        if usize::BITS > 32 {
            let count = u32::MAX as usize + 1;
            assert_eq!(
                vertex_count(count),
                Err(GeometryError::TooManyVertices { count })
            );
        }
    }
}
