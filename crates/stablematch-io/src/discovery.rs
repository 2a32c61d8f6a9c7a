//! Input file discovery and output path derivation.

use std::path::{Path, PathBuf};

use stablematch_types::{Result, StablematchError};

/// All files in `folder` with the given extension, sorted by file name.
pub fn find_input_files(folder: impl AsRef<Path>, extension: &str) -> Result<Vec<PathBuf>> {
    let folder = folder.as_ref();
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, extension) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!(folder = %folder.display(), count = files.len(), "Input files discovered");
    Ok(files)
}

/// Resolve the single input for match mode.
///
/// `target` is either an input file (which must carry `extension`) or a
/// folder that contains exactly one such file.
pub fn resolve_match_target(target: impl AsRef<Path>, extension: &str) -> Result<PathBuf> {
    let target = target.as_ref();
    if target.is_file() {
        if !has_extension(target, extension) {
            return Err(StablematchError::Configuration(format!(
                "File must have .{extension} extension: {}",
                target.display()
            )));
        }
        return Ok(target.to_path_buf());
    }
    if !target.is_dir() {
        return Err(StablematchError::Configuration(format!(
            "Path '{}' does not exist",
            target.display()
        )));
    }

    let mut files = find_input_files(target, extension)?;
    if files.len() != 1 {
        return Err(StablematchError::Configuration(format!(
            "Folder must contain exactly one .{extension} file, found {}",
            files.len()
        )));
    }
    Ok(files.remove(0))
}

/// Output path next to `input`: same stem, `extension` swapped in.
#[must_use]
pub fn output_path_for(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}
