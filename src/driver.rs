//! Driver: open files, orchestrate compress/extract (spec.md §4.8).
//!
//! Destination naming mirrors `compressor/util.py::default_filename` 1:1:
//! `<basename>.comp` for compression, `<basename>.extr` for extraction,
//! optionally relocated under `output_dir`.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::container;
use crate::errors::HuffResult;

/// Compress the text file at `src_path` into a `huffc` container.
///
/// The destination is `dst_path` if given, else `<basename of src_path>.comp`
/// written in the current directory, optionally relocated under `output_dir`.
pub fn compress(src_path: &Path, dst_path: Option<&Path>, output_dir: Option<&Path>) -> HuffResult<()> {
    let destination = resolve_destination(src_path, dst_path, output_dir, "comp");
    info!(
        "compressing {} -> {}",
        src_path.display(),
        destination.display()
    );

    let mut text = String::new();
    BufReader::new(File::open(src_path)?).read_to_string(&mut text)?;

    run_with_cleanup(&destination, |w| container::write_container(&text, w))?;
    debug!(
        "{} characters from {} compressed",
        text.chars().count(),
        src_path.display()
    );
    Ok(())
}

/// Extract a `huffc` container at `src_path` back into plain text.
///
/// The destination is `dst_path` if given, else `<basename of src_path>.extr`
/// written in the current directory, optionally relocated under `output_dir`.
pub fn extract(src_path: &Path, dst_path: Option<&Path>, output_dir: Option<&Path>) -> HuffResult<()> {
    let destination = resolve_destination(src_path, dst_path, output_dir, "extr");
    info!(
        "extracting {} -> {}",
        src_path.display(),
        destination.display()
    );

    let mut reader = BufReader::new(File::open(src_path)?);
    run_with_cleanup(&destination, |w| container::read_container(&mut reader, w))
}

fn resolve_destination(
    src_path: &Path,
    dst_path: Option<&Path>,
    output_dir: Option<&Path>,
    suffix: &str,
) -> PathBuf {
    let default = dst_path
        .map(PathBuf::from)
        .unwrap_or_else(|| default_filename(src_path, suffix));

    match output_dir {
        Some(dir) => {
            let filename = default
                .file_name()
                .expect("destination always has a file name");
            dir.join(filename)
        }
        None => default,
    }
}

fn default_filename(src_path: &Path, suffix: &str) -> PathBuf {
    let mut name = src_path
        .file_name()
        .expect("source path always has a file name")
        .to_os_string();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// Create `destination`, run `body` against a buffered writer over it, and
/// remove the partially written file if `body` fails. Removal failure is
/// logged, not fatal — the original error is still returned.
fn run_with_cleanup(
    destination: &Path,
    body: impl FnOnce(&mut BufWriter<File>) -> HuffResult<()>,
) -> HuffResult<()> {
    let mut writer = BufWriter::new(File::create(destination)?);
    match body(&mut writer) {
        Ok(()) => Ok(()),
        Err(e) => {
            drop(writer);
            if let Err(remove_err) = fs::remove_file(destination) {
                warn!(
                    "failed to remove partially written {}: {}",
                    destination.display(),
                    remove_err
                );
            }
            Err(e)
        }
    }
}
