//! Asset loading: triangulated OBJ meshes expanded into flat per-corner
//! attribute streams for direct vertex-buffer upload.

pub mod error;
pub mod mesh;
pub mod obj;
pub mod tokenizer;

pub use error::{AttributeTable, LoadError, LoadResult};
pub use mesh::{Corner, Mesh};
pub use obj::{LoadOptions, load_mesh, load_mesh_from_reader, load_mesh_from_str, load_mesh_with};
pub use tokenizer::{MissingDelimiter, next_field, next_field_with};
