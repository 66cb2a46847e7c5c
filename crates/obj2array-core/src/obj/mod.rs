//! OBJ file format support
//!
//! Wavefront OBJ is a line-oriented text format for 3D geometry. This
//! module provides the conversion pipeline: parsing the three record
//! kinds this tool consumes (positions, normals, triangular faces)
//! and re-emitting the face-expanded data as Kotlin float-array
//! literals.

mod parser;
mod serializer;

pub use parser::{Face, ObjMesh, ObjParser};
pub use serializer::{to_float_arrays, vertex_coords_block, vertex_normals_block};
