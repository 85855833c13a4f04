use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use polyface::{Face, SplitCounts, SplitMode, SplitOutput};

mod input;
mod provenance;

use provenance::{write_sidecar, Provenance};

#[derive(Parser)]
#[command(name = "polyface")]
#[command(about = "Face geometry and splitting over mesh files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Split every face into triangles (or triangles and quads)
    Split {
        #[arg(long)]
        faces: PathBuf,
        #[arg(long)]
        points: PathBuf,
        #[arg(long, value_enum, default_value_t = Mode::Tri)]
        mode: Mode,
        #[arg(long)]
        out: PathBuf,
    },
    /// Per-face centre, area vector and area
    Geom {
        #[arg(long)]
        faces: PathBuf,
        #[arg(long)]
        points: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Per-face swept volume between two point snapshots
    Swept {
        #[arg(long)]
        faces: PathBuf,
        #[arg(long)]
        old: PathBuf,
        #[arg(long)]
        new: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Triangles only
    Tri,
    /// Triangles and quads
    Quad,
}

impl From<Mode> for SplitMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Tri => SplitMode::Triangles,
            Mode::Quad => SplitMode::TrianglesQuads,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Split {
            faces,
            points,
            mode,
            out,
        } => split(&faces, &points, mode, &out),
        Action::Geom { faces, points, out } => geom(&faces, &points, &out),
        Action::Swept {
            faces,
            old,
            new,
            out,
        } => swept(&faces, &old, &new, &out),
        Action::Report => report(),
    }
}

#[derive(Serialize)]
struct SplitReport {
    tris: Vec<Vec<usize>>,
    quads: Vec<Vec<usize>>,
    n_tris: usize,
    n_quads: usize,
}

fn split(faces_path: &Path, points_path: &Path, mode: Mode, out: &Path) -> Result<()> {
    tracing::info!(faces = %faces_path.display(), points = %points_path.display(), ?mode, "split");
    let faces = input::load_faces(faces_path)?;
    let points = input::load_points(points_path)?;
    input::check_indices(&faces, points.len())?;

    let output = split_all(&faces, &points, mode.into())?;
    tracing::info!(
        tris = output.tris.len(),
        quads = output.quads.len(),
        "split_done"
    );

    let report = SplitReport {
        n_tris: output.tris.len(),
        n_quads: output.quads.len(),
        tris: output.tris.into_iter().map(Face::into_vec).collect(),
        quads: output.quads.into_iter().map(Face::into_vec).collect(),
    };
    write_json(out, &report)?;
    let prov = Provenance::new("split", json!({ "mode": format!("{mode:?}") }))
        .input(faces_path)
        .input(points_path);
    write_sidecar(out, &prov)?;
    Ok(())
}

/// Count first, then fill one pre-sized output for all faces.
fn split_all(
    faces: &[Face],
    points: &[nalgebra::Vector3<f64>],
    mode: SplitMode,
) -> Result<SplitOutput> {
    let mut counts = SplitCounts::default();
    for (i, f) in faces.iter().enumerate() {
        f.split(mode, points, &mut counts)
            .with_context(|| format!("face {i}"))?;
    }
    let mut output = SplitOutput::with_capacity(counts);
    for (i, f) in faces.iter().enumerate() {
        f.split(mode, points, &mut output)
            .with_context(|| format!("face {i}"))?;
    }
    Ok(output)
}

#[derive(Serialize)]
struct FaceGeom {
    face: usize,
    centre: [f64; 3],
    normal: [f64; 3],
    area: f64,
}

fn geom(faces_path: &Path, points_path: &Path, out: &Path) -> Result<()> {
    tracing::info!(faces = %faces_path.display(), points = %points_path.display(), "geom");
    let faces = input::load_faces(faces_path)?;
    let points = input::load_points(points_path)?;
    input::check_indices(&faces, points.len())?;

    let rows: Vec<FaceGeom> = faces
        .iter()
        .enumerate()
        .filter(|(i, f)| {
            let keep = f.len() >= 3;
            if !keep {
                tracing::warn!(face = i, n = f.len(), "skipping face below a triangle");
            }
            keep
        })
        .map(|(i, f)| {
            let n = f.normal(&points);
            FaceGeom {
                face: i,
                centre: f.centre(&points).into(),
                normal: n.into(),
                area: n.norm(),
            }
        })
        .collect();

    write_json(out, &rows)?;
    let prov = Provenance::new("geom", json!({ "faces": faces.len() }))
        .input(faces_path)
        .input(points_path);
    write_sidecar(out, &prov)?;
    Ok(())
}

fn swept(faces_path: &Path, old_path: &Path, new_path: &Path, out: &Path) -> Result<()> {
    tracing::info!(
        faces = %faces_path.display(),
        old = %old_path.display(),
        new = %new_path.display(),
        "swept"
    );
    let faces = input::load_faces(faces_path)?;
    let old = input::load_points(old_path)?;
    let new = input::load_points(new_path)?;
    anyhow::ensure!(
        old.len() == new.len(),
        "point snapshots differ in size: {} vs {}",
        old.len(),
        new.len()
    );
    input::check_indices(&faces, old.len())?;

    let volumes: Vec<f64> = faces.iter().map(|f| f.swept_vol(&old, &new)).collect();
    let total: f64 = volumes.iter().sum();
    tracing::info!(faces = faces.len(), total, "swept_done");

    write_json(out, &json!({ "volumes": volumes, "total": total }))?;
    let prov = Provenance::new("swept", json!({ "faces": faces.len() }))
        .input(faces_path)
        .input(old_path)
        .input(new_path);
    write_sidecar(out, &prov)?;
    Ok(())
}

fn report() -> Result<()> {
    let doc = Provenance::new("report", json!({})).to_json(&[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}
