use crate::core::geometry::VertexInput;
use crate::error::{Error, Result};
use crate::scene::mesh::{Mesh, average_vertex_normals};
use log::{info, warn};
use nalgebra::{Point3, Vector2, Vector3};
use std::path::Path;

/// Loads an OBJ file into a single indexed mesh.
///
/// Sub-models are merged. Models without normals get averaged face normals
/// (+Y for vertices outside any triangle); missing vertex colors become white. The builtin source of each vertex mirrors its attributes.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::InvalidData(format!(
            "File not found: {}",
            path.display()
        )));
    }

    info!("Loading OBJ file: {}", path.display());

    let load_options = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };
    let (models, _materials) = tobj::load_obj(path, &load_options)?;

    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let mut index_offset = 0u32;

    for model in models {
        let mesh = &model.mesh;
        let num_vertices = mesh.positions.len() / 3;
        let has_normals = !mesh.normals.is_empty();
        let has_texcoords = !mesh.texcoords.is_empty();
        let has_colors = !mesh.vertex_color.is_empty();

        let positions: Vec<_> = mesh
            .positions
            .chunks_exact(3)
            .map(|p| Point3::new(p[0], p[1], p[2]))
            .collect();

        let averaged = if has_normals {
            Vec::new()
        } else {
            warn!(
                "Mesh '{}' is missing normals. Averaging face normals.",
                model.name
            );
            average_vertex_normals(&positions, &mesh.indices)
        };

        for (i, &position) in positions.iter().enumerate() {
            let normal = if has_normals {
                Vector3::new(
                    mesh.normals[i * 3],
                    mesh.normals[i * 3 + 1],
                    mesh.normals[i * 3 + 2],
                )
            } else {
                averaged[i].unwrap_or_else(|| Vector3::new(0.0, 1.0, 0.0))
            };
            let color = if has_colors {
                Vector3::new(
                    mesh.vertex_color[i * 3],
                    mesh.vertex_color[i * 3 + 1],
                    mesh.vertex_color[i * 3 + 2],
                )
            } else {
                Vector3::new(1.0, 1.0, 1.0)
            };
            let texcoord = if has_texcoords {
                Vector2::new(mesh.texcoords[i * 2], mesh.texcoords[i * 2 + 1])
            } else {
                Vector2::zeros()
            };

            vertices.push(VertexInput::new(position, normal, color).with_texcoord(texcoord));
        }

        indices.extend(mesh.indices.iter().map(|index| index + index_offset));
        index_offset += num_vertices as u32;
    }

    info!(
        "OBJ loaded. Total vertices: {}, total indices: {}",
        vertices.len(),
        indices.len()
    );

    Ok(Mesh::new(vertices, indices))
}
