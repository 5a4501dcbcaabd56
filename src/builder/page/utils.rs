use std::path::{Path, PathBuf};

/// Determine where a rendered document is written.
///
/// The extension becomes `.html`. With `preserve_structure` off, only the
/// file name is kept and the page lands in the destination root.
pub fn determine_output_path(
    relative_path: &Path,
    destination: &Path,
    preserve_structure: bool,
) -> PathBuf {
    let mut output_path = if preserve_structure {
        destination.join(relative_path)
    } else {
        match relative_path.file_name() {
            Some(name) => destination.join(name),
            None => destination.join(relative_path),
        }
    };

    output_path.set_extension("html");
    output_path
}
