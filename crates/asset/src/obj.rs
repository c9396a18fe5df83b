//! Triangulated OBJ loader producing flat, draw-ready attribute streams.
//!
//! Supported records: `v`, `vt`, `vn` and triangular `f p/t/n p/t/n p/t/n`.
//! Everything else (comments, objects, groups, materials, smoothing) is
//! skipped. Faces are resolved only after the whole input has been read, so
//! attributes may be declared after the faces that use them.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use glam::{Vec2, Vec4, vec2, vec4};

use crate::{
    error::{AttributeTable, LoadError, LoadResult},
    mesh::{Corner, Mesh},
    tokenizer::{MissingDelimiter, next_field_with},
};

/// Loader configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Cursor behavior when a record runs out of delimiters.
    pub missing_delimiter: MissingDelimiter,
}

impl LoadOptions {
    /// Options reproducing the legacy tokenizer, whose cursor stays put at
    /// the last field of a record. Field values are unaffected; a record
    /// that is short of fields repeats its final one instead of failing.
    pub fn legacy() -> Self {
        Self {
            missing_delimiter: MissingDelimiter::KeepRemainder,
        }
    }
}

/// Load a mesh from a file path with default options.
pub fn load_mesh(path: impl AsRef<Path>) -> LoadResult<Mesh> {
    load_mesh_with(path, &LoadOptions::default())
}

/// Load a mesh from a file path.
pub fn load_mesh_with(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<Mesh> {
    let path = path.as_ref();
    log::info!("Loading OBJ mesh from {:?}", path);

    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            context: format!("Failed to open OBJ file: {}", path.display()),
            source,
        },
    })?;

    let mesh = load_mesh_from_reader(BufReader::new(file), options)?;
    log::info!(
        "Loaded {:?}: {} triangles ({} corners)",
        path,
        mesh.triangle_count(),
        mesh.len()
    );
    Ok(mesh)
}

/// Load a mesh from any [`BufRead`] implementation.
pub fn load_mesh_from_reader<R: BufRead>(reader: R, options: &LoadOptions) -> LoadResult<Mesh> {
    let scratch = ingest(reader, options)?;
    scratch.expand()
}

/// Convenience helper to parse an OBJ string with default options.
pub fn load_mesh_from_str(contents: &str) -> LoadResult<Mesh> {
    load_mesh_from_reader(io::Cursor::new(contents), &LoadOptions::default())
}

/// 1-based indices of one face corner, as written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CornerRef {
    position: i64,
    texcoord: i64,
    normal: i64,
}

#[derive(Clone, Copy, Debug)]
struct FaceRecord {
    corners: [CornerRef; 3],
    line: usize,
}

/// Attribute tables and faces collected from one input.
#[derive(Debug, Default)]
struct Scratch {
    positions: Vec<Vec4>,
    texcoords: Vec<Vec2>,
    normals: Vec<Vec4>,
    faces: Vec<FaceRecord>,
}

fn ingest<R: BufRead>(reader: R, options: &LoadOptions) -> LoadResult<Scratch> {
    let mode = options.missing_delimiter;
    let mut scratch = Scratch::default();
    let mut skipped = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| LoadError::Io {
            context: format!("Failed to read line {}", line_no),
            source,
        })?;
        let record = Record {
            text: &line,
            line: line_no,
        };
        let trimmed = line.trim();

        if let Some(body) = trimmed.strip_prefix("v ") {
            let [x, y, z] = record.floats::<3>(body, mode, ["x", "y", "z"])?;
            scratch.positions.push(vec4(x, y, z, 1.0));
        } else if let Some(body) = trimmed.strip_prefix("f ") {
            scratch.faces.push(record.face(body, mode)?);
        } else if let Some(body) = trimmed.strip_prefix("vt ") {
            let [u, v] = record.floats::<2>(body, mode, ["u", "v"])?;
            scratch.texcoords.push(vec2(u, v));
        } else if let Some(body) = trimmed.strip_prefix("vn ") {
            let [x, y, z] = record.floats::<3>(body, mode, ["nx", "ny", "nz"])?;
            scratch.normals.push(vec4(x, y, z, 0.0));
        } else if !trimmed.is_empty() {
            skipped += 1;
        }
    }

    log::debug!(
        "OBJ ingest: {} positions, {} texcoords, {} normals, {} faces, {} skipped lines",
        scratch.positions.len(),
        scratch.texcoords.len(),
        scratch.normals.len(),
        scratch.faces.len(),
        skipped
    );
    Ok(scratch)
}

/// One input line being parsed, kept for error reporting.
struct Record<'a> {
    text: &'a str,
    line: usize,
}

impl Record<'_> {
    fn malformed(&self, what: &'static str) -> LoadError {
        LoadError::MalformedRecord {
            line: self.line,
            content: self.text.to_string(),
            what,
        }
    }

    /// Leading space-separated floats; extra trailing fields are ignored.
    fn floats<const N: usize>(
        &self,
        body: &str,
        mode: MissingDelimiter,
        names: [&'static str; N],
    ) -> LoadResult<[f32; N]> {
        let mut rest = body;
        let mut out = [0.0; N];
        for (slot, name) in out.iter_mut().zip(names) {
            let (field, tail) = next_field_with(rest, " ", mode);
            rest = tail;
            *slot = field.parse::<f32>().map_err(|_| self.malformed(name))?;
        }
        Ok(out)
    }

    fn face(&self, body: &str, mode: MissingDelimiter) -> LoadResult<FaceRecord> {
        if body.split_whitespace().count() > 3 {
            return Err(self.malformed("more than three corners"));
        }

        let mut rest = body;
        let mut corners = [CornerRef {
            position: 0,
            texcoord: 0,
            normal: 0,
        }; 3];

        for corner in &mut corners {
            let (position, tail) = next_field_with(rest, "/", mode);
            let (texcoord, tail) = next_field_with(tail, "/", mode);
            let (normal, tail) = next_field_with(tail, " ", mode);
            rest = tail;

            *corner = CornerRef {
                position: self.index(position, "position index")?,
                texcoord: self.index(texcoord, "texcoord index")?,
                normal: self.index(normal, "normal index")?,
            };
        }

        Ok(FaceRecord {
            corners,
            line: self.line,
        })
    }

    fn index(&self, field: &str, what: &'static str) -> LoadResult<i64> {
        field.parse::<i64>().map_err(|_| self.malformed(what))
    }
}

impl Scratch {
    /// Resolve every face corner against the complete attribute tables.
    fn expand(self) -> LoadResult<Mesh> {
        let mut mesh = Mesh::with_capacity(self.faces.len() * 3);
        for face in &self.faces {
            for corner in &face.corners {
                mesh.push_corner(Corner {
                    position: lookup(
                        &self.positions,
                        AttributeTable::Positions,
                        corner.position,
                        face.line,
                    )?,
                    texcoord: lookup(
                        &self.texcoords,
                        AttributeTable::Texcoords,
                        corner.texcoord,
                        face.line,
                    )?,
                    normal: lookup(
                        &self.normals,
                        AttributeTable::Normals,
                        corner.normal,
                        face.line,
                    )?,
                });
            }
        }
        Ok(mesh)
    }
}

fn lookup<T: Copy>(values: &[T], table: AttributeTable, index: i64, line: usize) -> LoadResult<T> {
    usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| values.get(i).copied())
        .ok_or(LoadError::IndexOutOfRange {
            table,
            index,
            table_size: values.len(),
            line,
        })
}
