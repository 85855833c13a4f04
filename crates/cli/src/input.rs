//! Loading faces (JSON) and points (CSV) from disk.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use nalgebra::Vector3;
use polars::prelude::*;
use polyface::Face;

/// Faces as a JSON array of vertex-index arrays, e.g. `[[0,1,2],[2,3,0]]`.
pub fn load_faces(path: &Path) -> Result<Vec<Face>> {
    let bytes = fs::read(path).with_context(|| format!("reading faces {}", path.display()))?;
    let raw: Vec<Vec<usize>> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing faces {}", path.display()))?;
    tracing::debug!(faces = raw.len(), path = %path.display(), "loaded faces");
    Ok(raw.into_iter().map(Face::new).collect())
}

/// Points from a CSV with header columns `x,y,z` (integers are accepted).
pub fn load_points(path: &Path) -> Result<Vec<Vector3<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening points {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
            col("z").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading points {}", path.display()))?;

    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let zs = df.column("z")?.f64()?;

    let mut points = Vec::with_capacity(df.height());
    for (row, ((x, y), z)) in xs.into_iter().zip(ys).zip(zs).enumerate() {
        match (x, y, z) {
            (Some(x), Some(y), Some(z)) => points.push(Vector3::new(x, y, z)),
            _ => bail!("{}: missing coordinate in row {}", path.display(), row),
        }
    }
    tracing::debug!(points = points.len(), path = %path.display(), "loaded points");
    Ok(points)
}

/// Reject faces that reference points outside `n_points`.
pub fn check_indices(faces: &[Face], n_points: usize) -> Result<()> {
    for (i, f) in faces.iter().enumerate() {
        if let Some(&v) = f.iter().find(|&&v| v >= n_points) {
            bail!("face {i} references point {v}, but only {n_points} points were loaded");
        }
    }
    Ok(())
}
