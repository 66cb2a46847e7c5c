//! OBJ record parser
//!
//! Parses Wavefront OBJ geometry line by line. Only three record
//! kinds are significant: vertex positions (`v`), vertex normals
//! (`vn`) and triangular faces (`f`), each on a line of exactly four
//! whitespace-delimited tokens. Positions are scaled at parse time;
//! every other line shape is skipped.

use crate::error::{ConvertError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One triangular face: per-corner attribute index slots.
///
/// Each slot holds a zero-based index into the corresponding sequence
/// of [`ObjMesh`]. `None` marks a slot the face record did not supply
/// (a missing descriptor field, an empty field as in `2//3`, or a raw
/// index of 0); an absent slot must never be dereferenced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Face {
    /// Vertex position indices
    pub v: [Option<usize>; 3],
    /// Vertex texture coordinate indices (parsed but not emitted)
    pub vt: [Option<usize>; 3],
    /// Vertex normal indices
    pub vn: [Option<usize>; 3],
}

/// Parsed OBJ mesh data
#[derive(Debug, Clone, PartialEq)]
pub struct ObjMesh {
    /// Vertex positions in file order, scale already applied
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals in file order, never scaled
    pub normals: Vec<[f32; 3]>,
    /// Triangular faces in file order
    pub faces: Vec<Face>,
    /// Scale factor that was applied to positions
    pub scale: f32,
}

impl ObjMesh {
    fn new(scale: f32) -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
            scale,
        }
    }

    /// Number of triangular faces
    #[inline]
    #[must_use = "face_count returns the number of parsed face records"]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// OBJ parser with a fixed position scale factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjParser {
    scale: f32,
}

impl Default for ObjParser {
    #[inline]
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl ObjParser {
    /// Create a parser that multiplies vertex positions by `scale`.
    ///
    /// Normals are never scaled.
    #[inline]
    #[must_use]
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    /// Parse an OBJ file from a path
    ///
    /// Reads the file line by line and accumulates positions, normals
    /// and faces in file order. The file handle is released before
    /// this function returns.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the OBJ file
    ///
    /// # Returns
    ///
    /// Parsed mesh with positions (scaled), normals and faces.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::IoError`] if the file cannot be read,
    /// or [`ConvertError::FormatError`] if a recognized record holds
    /// an unparsable numeric field.
    #[must_use = "parsing produces a result that should be handled"]
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ObjMesh> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        let mut mesh = ObjMesh::new(self.scale);
        for line in reader.lines() {
            let line = line?;
            self.parse_line(&line, &mut mesh)?;
        }

        Ok(mesh)
    }

    /// Parse OBJ data from a string
    ///
    /// Same contract as [`parse_file`](Self::parse_file), for callers
    /// that already hold the file content in memory.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::FormatError`] if a recognized record
    /// holds an unparsable numeric field.
    #[must_use = "parsing produces a result that should be handled"]
    pub fn parse_str(&self, content: &str) -> Result<ObjMesh> {
        let mut mesh = ObjMesh::new(self.scale);
        for line in content.lines() {
            self.parse_line(line, &mut mesh)?;
        }

        Ok(mesh)
    }

    /// Classify one line and append the parsed record to `mesh`.
    ///
    /// Lines that are not exactly four tokens, or whose marker is not
    /// `v`/`vn`/`f`, are skipped without error (comments, groups,
    /// `vt` records, quad faces, material references).
    fn parse_line(&self, line: &str, mesh: &mut ObjMesh) -> Result<()> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 4 {
            return Ok(());
        }

        match tokens[0] {
            "v" => {
                let [x, y, z] = Self::parse_triple(&tokens)?;
                mesh.positions
                    .push([x * self.scale, y * self.scale, z * self.scale]);
            }
            "vn" => {
                mesh.normals.push(Self::parse_triple(&tokens)?);
            }
            "f" => {
                mesh.faces.push(Self::parse_face(&tokens)?);
            }
            other => {
                log::debug!("skipping '{other}' record");
            }
        }

        Ok(())
    }

    /// Parse tokens 2-4 of a `v`/`vn` record as three floats.
    fn parse_triple(tokens: &[&str]) -> Result<[f32; 3]> {
        let mut out = [0.0f32; 3];
        for (slot, token) in out.iter_mut().zip(&tokens[1..4]) {
            *slot = token.parse().map_err(|_| {
                ConvertError::FormatError(format!(
                    "invalid float '{token}' in '{}' record",
                    tokens[0]
                ))
            })?;
        }

        Ok(out)
    }

    /// Parse tokens 2-4 of an `f` record as three vertex descriptors.
    ///
    /// The field count of the first descriptor decides how many of
    /// the position/texture/normal slots are populated for all three
    /// corners; slots beyond that count stay absent. Descriptors 2
    /// and 3 must carry at least as many fields as the first.
    fn parse_face(tokens: &[&str]) -> Result<Face> {
        let field_count = tokens[1].split('/').count().min(3);

        let mut face = Face::default();
        for (corner, descriptor) in tokens[1..4].iter().enumerate() {
            let fields: Vec<&str> = descriptor.split('/').collect();
            for slot in 0..field_count {
                let field = *fields.get(slot).ok_or_else(|| {
                    ConvertError::FormatError(format!(
                        "descriptor '{descriptor}' in 'f' record is missing field {}",
                        slot + 1
                    ))
                })?;

                let index = Self::parse_index(field)?;
                match slot {
                    0 => face.v[corner] = index,
                    1 => face.vt[corner] = index,
                    _ => face.vn[corner] = index,
                }
            }
        }

        Ok(face)
    }

    /// Parse one 1-based descriptor field to its zero-based index.
    ///
    /// An empty field and a raw index of 0 both mean the slot is
    /// absent.
    fn parse_index(field: &str) -> Result<Option<usize>> {
        if field.is_empty() {
            return Ok(None);
        }

        let raw: usize = field.parse().map_err(|_| {
            ConvertError::FormatError(format!("invalid index '{field}' in 'f' record"))
        })?;

        Ok(raw.checked_sub(1))
    }
}
