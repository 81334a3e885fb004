// Staging layout and scoped temp-directory ownership

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Temp subdirectory name inside the output directory.
pub const TEMP_DIR_NAME: &str = "tmp";

/// Filesystem locations for one run, derived deterministically from the
/// sanitized title and the chosen resolution label.
#[derive(Debug, Clone)]
pub struct StagingPaths {
    pub output_dir: PathBuf,
    pub temp_dir: PathBuf,
    pub video_file: PathBuf,
    pub audio_file: PathBuf,
    pub final_file: PathBuf,
}

impl StagingPaths {
    pub fn derive(output_dir: &Path, base_name: &str, label: &str) -> Self {
        let stem = format!("{}_{}", base_name, resolution_suffix(label));
        let temp_dir = output_dir.join(TEMP_DIR_NAME);
        Self {
            output_dir: output_dir.to_path_buf(),
            video_file: temp_dir.join(format!("{}_video.mp4", stem)),
            audio_file: temp_dir.join(format!("{}_audio.mp4", stem)),
            final_file: output_dir.join(format!("{}.mp4", stem)),
            temp_dir,
        }
    }
}

/// Filename suffix for a resolution label: its leading integer ("1080p" ->
/// "1080"). Labels without one are used verbatim.
fn resolution_suffix(label: &str) -> String {
    let digits: String = label.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        label.to_string()
    } else {
        digits
    }
}

/// Scoped owner of the temporary directory. Creation is idempotent; the
/// directory and its contents are removed when the guard drops, on every
/// exit path including unwinds.
#[derive(Debug)]
pub struct StagingDir {
    path: PathBuf,
}

impl StagingDir {
    pub fn create(path: &Path) -> std::io::Result<Self> {
        fs::create_dir_all(path)?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_dir_all(&self.path) {
                warn!("failed to remove temp dir {}: {}", self.path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_all_paths_from_base_and_label() {
        let paths = StagingPaths::derive(Path::new("/videos"), "Demo_Clip", "1080p");
        assert_eq!(paths.temp_dir, Path::new("/videos/tmp"));
        assert_eq!(
            paths.video_file,
            Path::new("/videos/tmp/Demo_Clip_1080_video.mp4")
        );
        assert_eq!(
            paths.audio_file,
            Path::new("/videos/tmp/Demo_Clip_1080_audio.mp4")
        );
        assert_eq!(paths.final_file, Path::new("/videos/Demo_Clip_1080.mp4"));
    }

    #[test]
    fn temp_dir_is_inside_output_dir() {
        let paths = StagingPaths::derive(Path::new("/out"), "Title", "720p");
        assert!(paths.temp_dir.starts_with(&paths.output_dir));
        assert!(paths.video_file.starts_with(&paths.temp_dir));
        assert!(paths.audio_file.starts_with(&paths.temp_dir));
    }

    #[test]
    fn suffix_keeps_unparsable_labels_verbatim() {
        let paths = StagingPaths::derive(Path::new("/out"), "Title", "source");
        assert_eq!(paths.final_file, Path::new("/out/Title_source.mp4"));
    }

    #[test]
    fn guard_creates_and_removes_directory() {
        let root = tempfile::tempdir().unwrap();
        let tmp = root.path().join("tmp");

        {
            let staging = StagingDir::create(&tmp).unwrap();
            assert!(staging.path().is_dir());
            fs::write(tmp.join("partial_video.mp4"), b"data").unwrap();
        }
        assert!(!tmp.exists());
    }

    #[test]
    fn guard_creation_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let tmp = root.path().join("tmp");
        fs::create_dir_all(&tmp).unwrap();

        let staging = StagingDir::create(&tmp).unwrap();
        assert!(staging.path().is_dir());
    }
}
