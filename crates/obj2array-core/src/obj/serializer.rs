//! Kotlin float-array serialization
//!
//! Re-expands each face into its three corner positions and normals
//! and renders two `floatArrayOf` literal blocks, one face (nine
//! literals) per line. Resolution happens entirely in memory; callers
//! write the returned string in one shot, so a bad index can never
//! leave a partially written array behind.

use std::fmt::Write;

use super::{Face, ObjMesh};
use crate::error::{ConvertError, Result};

/// Render the `vertexCoords` array literal block.
///
/// Resolves each face's position index slots against
/// [`ObjMesh::positions`], in file order.
///
/// # Errors
///
/// Returns [`ConvertError::IndexError`] if a face has no position
/// index for a corner or indexes outside the position sequence.
#[must_use = "serialization returns the rendered array block"]
pub fn vertex_coords_block(mesh: &ObjMesh) -> Result<String> {
    array_block("vertexCoords", &mesh.positions, &mesh.faces, |face| &face.v)
}

/// Render the `vertexNormal` array literal block.
///
/// Resolves each face's normal index slots against
/// [`ObjMesh::normals`], in file order.
///
/// # Errors
///
/// Returns [`ConvertError::IndexError`] if a face has no normal index
/// for a corner or indexes outside the normal sequence.
#[must_use = "serialization returns the rendered array block"]
pub fn vertex_normals_block(mesh: &ObjMesh) -> Result<String> {
    array_block("vertexNormal", &mesh.normals, &mesh.faces, |face| &face.vn)
}

/// Render the complete output: `vertexCoords` block, then
/// `vertexNormal` block.
///
/// # Errors
///
/// Returns [`ConvertError::IndexError`] on the first face slot that
/// is absent or out of bounds for its sequence.
#[must_use = "serialization returns the rendered output file content"]
pub fn to_float_arrays(mesh: &ObjMesh) -> Result<String> {
    let mut output = vertex_coords_block(mesh)?;
    output.push_str(&vertex_normals_block(mesh)?);

    Ok(output)
}

/// Render one `val <name> = floatArrayOf(...)` block.
///
/// Each face contributes one line of nine fixed-point literals with
/// an `f` suffix; every face line but the last carries a trailing
/// comma.
fn array_block(
    name: &str,
    values: &[[f32; 3]],
    faces: &[Face],
    slots: impl Fn(&Face) -> &[Option<usize>; 3],
) -> Result<String> {
    let mut output = String::new();
    let _ = writeln!(output, "val {name} = floatArrayOf(");

    for (i, face) in faces.iter().enumerate() {
        output.push_str("    ");
        for (corner, slot) in slots(face).iter().enumerate() {
            let [x, y, z] = resolve(name, values, *slot)?;
            let _ = write!(output, "{x:.6}f, {y:.6}f, {z:.6}f");
            if corner < 2 {
                output.push_str(", ");
            }
        }

        if i < faces.len() - 1 {
            output.push(',');
        }
        output.push('\n');
    }

    output.push_str(")\n");
    Ok(output)
}

/// Look up one corner's value, rejecting absent and out-of-bounds
/// indices.
fn resolve(name: &str, values: &[[f32; 3]], slot: Option<usize>) -> Result<[f32; 3]> {
    let index = slot.ok_or_else(|| {
        ConvertError::IndexError(format!("face corner has no index into {name}"))
    })?;

    values.get(index).copied().ok_or_else(|| {
        ConvertError::IndexError(format!(
            "index {index} out of bounds for {name} (length {})",
            values.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obj::ObjParser;

    const SINGLE_TRIANGLE: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
";

    #[test]
    fn test_single_face_coords_block_exact() {
        let mesh = ObjParser::default().parse_str(SINGLE_TRIANGLE).unwrap();
        let block = vertex_coords_block(&mesh).unwrap();

        assert_eq!(
            block,
            "val vertexCoords = floatArrayOf(\n    \
             0.000000f, 0.000000f, 0.000000f, \
             1.000000f, 0.000000f, 0.000000f, \
             0.000000f, 1.000000f, 0.000000f\n)\n"
        );
    }

    #[test]
    fn test_trailing_comma_on_all_but_last_face() {
        let content = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
f 1 2 3
f 2 4 3
";
        let mesh = ObjParser::default().parse_str(content).unwrap();
        let block = vertex_coords_block(&mesh).unwrap();

        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 4); // header, two faces, closing paren
        assert!(lines[1].ends_with(','));
        assert!(!lines[2].ends_with(','));
        assert_eq!(lines[3], ")");
    }

    #[test]
    fn test_nine_literals_per_face() {
        let content = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1
f 3//1 2//1 1//1
f 2//1 1//1 3//1
";
        let mesh = ObjParser::default().parse_str(content).unwrap();
        let output = to_float_arrays(&mesh).unwrap();

        for block in ["vertexCoords", "vertexNormal"] {
            let start = output.find(&format!("val {block}")).unwrap();
            let body = &output[start..];
            let body = &body[..body.find(")\n").unwrap()];
            let face_lines: Vec<&str> = body.lines().skip(1).collect();

            assert_eq!(face_lines.len(), mesh.face_count());
            for line in face_lines {
                let literals = line.trim().trim_end_matches(',').split(", ").count();
                assert_eq!(literals, 9);
            }
        }
    }

    #[test]
    fn test_block_order_coords_then_normals() {
        let content = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1
";
        let mesh = ObjParser::default().parse_str(content).unwrap();
        let output = to_float_arrays(&mesh).unwrap();

        let coords = output.find("val vertexCoords = floatArrayOf(").unwrap();
        let normals = output.find("val vertexNormal = floatArrayOf(").unwrap();
        assert!(coords < normals);
        assert!(output.ends_with(")\n"));
    }

    #[test]
    fn test_scaled_positions_in_output() {
        let mesh = ObjParser::new(2.0).parse_str(SINGLE_TRIANGLE).unwrap();
        let block = vertex_coords_block(&mesh).unwrap();

        assert!(block.contains("2.000000f"));
        assert!(!block.contains("1.000000f"));
    }

    #[test]
    fn test_empty_mesh_renders_empty_blocks() {
        let mesh = ObjParser::default().parse_str("").unwrap();
        let output = to_float_arrays(&mesh).unwrap();

        assert_eq!(
            output,
            "val vertexCoords = floatArrayOf(\n)\nval vertexNormal = floatArrayOf(\n)\n"
        );
    }

    #[test]
    fn test_absent_normal_slot_is_index_error() {
        // Faces carry only position indices, so the normals block
        // cannot be resolved
        let mesh = ObjParser::default().parse_str(SINGLE_TRIANGLE).unwrap();
        let result = vertex_normals_block(&mesh);

        match result {
            Err(ConvertError::IndexError(msg)) => assert!(msg.contains("vertexNormal")),
            other => panic!("Expected IndexError, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_bounds_index_is_index_error() {
        let content = "\
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 9
";
        let mesh = ObjParser::default().parse_str(content).unwrap();
        let result = vertex_coords_block(&mesh);

        match result {
            Err(ConvertError::IndexError(msg)) => assert!(msg.contains("out of bounds")),
            other => panic!("Expected IndexError, got {other:?}"),
        }
    }
}
