//! CPU-side, non-indexed triangle mesh produced by the OBJ loader.

use glam::{Vec2, Vec4};

/// Attribute values of one triangle corner. Values are in object space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Corner {
    pub position: Vec4,
    pub texcoord: Vec2,
    pub normal: Vec4,
}

/// Flat triangle list with three parallel per-corner attribute streams.
///
/// `positions[k]`, `texcoords[k]` and `normals[k]` describe the same corner;
/// every three consecutive corners form one triangle in file winding order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec4>,
    texcoords: Vec<Vec2>,
    normals: Vec<Vec4>,
}

impl Mesh {
    pub(crate) fn with_capacity(corners: usize) -> Self {
        Self {
            positions: Vec::with_capacity(corners),
            texcoords: Vec::with_capacity(corners),
            normals: Vec::with_capacity(corners),
        }
    }

    pub(crate) fn push_corner(&mut self, corner: Corner) {
        self.positions.push(corner.position);
        self.texcoords.push(corner.texcoord);
        self.normals.push(corner.normal);
    }

    /// Positions with `w = 1.0`.
    pub fn positions(&self) -> &[Vec4] {
        &self.positions
    }

    pub fn texcoords(&self) -> &[Vec2] {
        &self.texcoords
    }

    /// Normals with `w = 0.0`, exactly as written in the file.
    pub fn normals(&self) -> &[Vec4] {
        &self.normals
    }

    /// Number of corners (always a multiple of three).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.len() / 3
    }

    pub fn corner(&self, index: usize) -> Option<Corner> {
        Some(Corner {
            position: *self.positions.get(index)?,
            texcoord: *self.texcoords.get(index)?,
            normal: *self.normals.get(index)?,
        })
    }

    /// Triangles in file order, corners in winding order.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = [Corner; 3]> + '_ {
        (0..self.triangle_count()).map(move |t| {
            let at = |k: usize| Corner {
                position: self.positions[3 * t + k],
                texcoord: self.texcoords[3 * t + k],
                normal: self.normals[3 * t + k],
            };
            [at(0), at(1), at(2)]
        })
    }

    /// Raw bytes of the position stream, ready for a vertex buffer upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn texcoord_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texcoords)
    }

    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Take the three streams, e.g. to hand them to a renderer.
    pub fn into_parts(self) -> (Vec<Vec4>, Vec<Vec2>, Vec<Vec4>) {
        (self.positions, self.texcoords, self.normals)
    }
}
