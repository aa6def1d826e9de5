use std::path::{Path, PathBuf};

/// Map an input TSV file into an output JSON file path.
/// This preserves the input directory structure relative to `input_dir`.
pub fn map_input_to_output(
    input_dir: &Path,
    input_file: &Path,
    output_dir: &Path,
    extension: &str,
) -> PathBuf {
    let relative = input_file.strip_prefix(input_dir).unwrap_or(input_file);
    let mut out = output_dir.join(relative);
    out.set_extension(extension);
    out
}
