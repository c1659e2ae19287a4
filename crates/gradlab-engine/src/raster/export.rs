use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::RenderConfig;
use crate::model::GradientDescription;

use super::{RasterError, try_render_png};

/// `gradient-labs-<unix ms>.png`
pub fn download_file_name(unix_ms: u128) -> String {
    format!("gradient-labs-{unix_ms}.png")
}

fn now_unix_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// Renders descriptions to PNG files in the configured output directory.
///
/// Carries a busy flag for the export control. Only one export runs at a
/// time; a second request while busy is refused rather than queued.
pub struct Exporter {
    config: RenderConfig,
    busy: AtomicBool,
}

/// Clears the busy flag on every exit path.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Exporter {
    pub fn new(config: RenderConfig) -> Self {
        Self { config, busy: AtomicBool::new(false) }
    }

    #[inline]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// True while an export is rendering or writing.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Renders `desc` and writes it as `gradient-labs-<ms>.png`.
    ///
    /// `desc` is taken by value so later edits cannot leak into this export.
    /// Returns the written path, or `None` after logging any failure. The file
    /// only appears once fully written.
    pub fn export(&self, desc: GradientDescription) -> Option<PathBuf> {
        if self.busy.swap(true, Ordering::AcqRel) {
            log::warn!("export already in progress, ignoring request");
            return None;
        }
        let _guard = BusyGuard(&self.busy);

        let target = self.config.output_dir.join(download_file_name(now_unix_ms()));
        match self.write_png(&desc, &target) {
            Ok(()) => {
                log::info!("exported {}", target.display());
                Some(target)
            }
            Err(err) => {
                log::error!("error generating image: {err}");
                None
            }
        }
    }

    fn write_png(&self, desc: &GradientDescription, target: &Path) -> Result<(), RasterError> {
        let bytes = try_render_png(desc, &self.config)?;

        let partial = target.with_extension("png.part");
        if let Err(err) = fs::write(&partial, &bytes).and_then(|()| fs::rename(&partial, target)) {
            let _ = fs::remove_file(&partial);
            return Err(err.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &Path) -> RenderConfig {
        RenderConfig { output_dir: dir.to_path_buf(), ..RenderConfig::default() }.with_size(32, 18)
    }

    #[test]
    fn file_name_pattern() {
        assert_eq!(download_file_name(1700000000123), "gradient-labs-1700000000123.png");
    }

    #[test]
    fn export_writes_png_and_clears_busy() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(config(dir.path()));

        let path = exporter.export(GradientDescription::default()).unwrap();
        assert!(!exporter.is_busy());

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("gradient-labs-") && name.ends_with(".png"));

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 18));

        let leftovers = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "part"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(config(&dir.path().join("nope")));
        assert!(exporter.export(GradientDescription::default()).is_none());
        assert!(!exporter.is_busy());
    }

    #[test]
    fn surface_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(config(dir.path()).with_size(0, 18));
        assert!(exporter.export(GradientDescription::default()).is_none());
        assert!(!exporter.is_busy());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn busy_exporter_refuses() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(config(dir.path()));
        exporter.busy.store(true, Ordering::Release);
        assert!(exporter.export(GradientDescription::default()).is_none());
        assert!(exporter.is_busy());
    }
}
