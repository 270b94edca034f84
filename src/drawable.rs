//! Static XML drawable resources

use std::fs;
use std::path::Path;

use crate::error::IconError;

/// Solid-color vector drawable referenced as the adaptive icon background.
///
/// A full-canvas 108x108 path; the fill matches the app's dark theme.
pub const BACKGROUND_DRAWABLE: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<vector xmlns:android="http://schemas.android.com/apk/res/android"
    android:width="108dp"
    android:height="108dp"
    android:viewportWidth="108"
    android:viewportHeight="108">
    <path
        android:fillColor="#1A1A1A"
        android:pathData="M0,0h108v108h-108z"/>
</vector>"##;

/// Write `drawable/ic_launcher_background.xml`, overwriting any existing file.
pub fn write_background(res_dir: &Path) -> Result<(), IconError> {
    let drawable_dir = res_dir.join("drawable");
    fs::create_dir_all(&drawable_dir).map_err(|e| IconError::CreateDir {
        path: drawable_dir.clone(),
        source: e,
    })?;

    let path = drawable_dir.join("ic_launcher_background.xml");
    fs::write(&path, BACKGROUND_DRAWABLE).map_err(|e| IconError::WriteFile {
        path: path.clone(),
        source: e,
    })?;

    println!("Created {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_background_drawable() {
        let res_dir = tempdir().unwrap();

        write_background(res_dir.path()).unwrap();

        let path = res_dir.path().join("drawable/ic_launcher_background.xml");
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, BACKGROUND_DRAWABLE);
        assert!(content.contains("#1A1A1A"));
        assert!(content.contains("android:viewportWidth=\"108\""));
    }

    #[test]
    fn overwrites_existing_file() {
        let res_dir = tempdir().unwrap();
        let drawable_dir = res_dir.path().join("drawable");
        fs::create_dir_all(&drawable_dir).unwrap();
        let path = drawable_dir.join("ic_launcher_background.xml");
        fs::write(&path, "stale content").unwrap();

        write_background(res_dir.path()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), BACKGROUND_DRAWABLE);
    }
}
