//! Applying one operation to files and directory trees.
//!
//! A single [`Operation`] describes what to do; [`apply_to_file`] runs it
//! on one image, and [`run`] walks an input directory, processes every
//! supported image in parallel, and mirrors relative paths under the
//! output directory.
//!
//! Failures are fatal: the first file that cannot be decoded, transformed,
//! or written aborts the batch. Nothing is retried and nothing is skipped
//! silently; files whose extension the codec does not accept are not
//! images as far as this tool is concerned and are left alone.

use crate::imaging::{Codec, ImageError, ImageTransformer, SaveOptions};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Imaging(#[from] ImageError),
    #[error("failed to walk input directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("no supported images (jpg, jpeg, png) under {}", .0.display())]
    NoImages(PathBuf),
}

/// One transform to apply before saving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Scale { factor: f64 },
    Crop { width: u32, height: u32 },
    Center { width: u32, height: u32 },
    /// Decode and re-encode only; the output extension picks the format.
    Convert,
}

impl Operation {
    pub fn apply(self, image: &mut ImageTransformer) -> Result<(), ImageError> {
        match self {
            Operation::Scale { factor } => image.scale(factor),
            Operation::Crop { width, height } => image.crop(width, height),
            Operation::Center { width, height } => image.center(width, height),
            Operation::Convert => Ok(()),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Scale { factor } => write!(f, "scale x{factor}"),
            Operation::Crop { width, height } => write!(f, "crop {width}x{height}"),
            Operation::Center { width, height } => write!(f, "center {width}x{height}"),
            Operation::Convert => write!(f, "convert"),
        }
    }
}

/// What happened to one file.
#[derive(Debug, Clone, Serialize)]
pub struct TransformReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Dimensions as decoded.
    pub original: (u32, u32),
    /// Dimensions as saved.
    pub result: (u32, u32),
}

/// Open `input`, apply `op`, save to `output` (codec from the output
/// extension), and report the before/after dimensions.
pub fn apply_to_file(
    op: Operation,
    input: &Path,
    output: &Path,
    options: &SaveOptions,
) -> Result<TransformReport, ImageError> {
    let mut image = ImageTransformer::open(input)?;
    let original = image.dimensions();
    op.apply(&mut image)?;
    let result = image.dimensions();
    image.save(output, options)?;
    Ok(TransformReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        original,
        result,
    })
}

/// Apply `op` to every supported image under `input_root`, writing results
/// under `output_root` at the same relative paths.
///
/// Files are processed in parallel; the returned reports are sorted by
/// input path so output is deterministic regardless of scheduling.
pub fn run(
    op: Operation,
    input_root: &Path,
    output_root: &Path,
    options: &SaveOptions,
) -> Result<Vec<TransformReport>, BatchError> {
    let mut sources = Vec::new();
    for entry in WalkDir::new(input_root) {
        let entry = entry?;
        if entry.file_type().is_file() && Codec::from_path(entry.path()).is_ok() {
            sources.push(entry.into_path());
        }
    }
    if sources.is_empty() {
        return Err(BatchError::NoImages(input_root.to_path_buf()));
    }
    sources.sort();

    let mut reports: Vec<TransformReport> = sources
        .par_iter()
        .map(|source| {
            let relative = source
                .strip_prefix(input_root)
                .expect("walked path is under the walk root");
            let destination = output_root.join(relative);
            if let Some(parent) = destination.parent() {
                std::fs::create_dir_all(parent)?;
            }
            Ok(apply_to_file(op, source, &destination, options)?)
        })
        .collect::<Result<_, BatchError>>()?;

    reports.sort_by(|a, b| a.input.cmp(&b.input));
    Ok(reports)
}
