use std::path::PathBuf;

use crate::{error, playlist, success};

/// Writes the playlist as CSV.
///
/// Without `output` the file lands in the working directory, named after
/// the playlist (see [`playlist::safe_file_name`]).
pub async fn export(reference: String, output: Option<PathBuf>) {
    let Some(result) = super::load_playlist(&reference).await else {
        return;
    };

    let csv = match playlist::to_csv(&result) {
        Ok(csv) => csv,
        Err(e) => error!("Failed to build CSV: {}", e),
    };

    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!("{}.csv", playlist::safe_file_name(&result.name)))
    });

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = async_fs::create_dir_all(parent).await {
            error!("Failed to create {}: {}", parent.display(), e);
        }
    }

    if let Err(e) = async_fs::write(&path, csv).await {
        error!("Failed to write {}: {}", path.display(), e);
    }

    success!(
        "Exported {} tracks of {} to {}",
        result.tracks.len(),
        result.name,
        path.display()
    );
}
