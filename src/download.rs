//! Saving generated images and configuration exports to disk.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use chrono::Utc;
use image::ImageFormat;
use tracing::{info, warn};
use url::Url;

use crate::config::Settings;
use crate::configuration::Configuration;
use crate::error::Result;
use crate::fetch::ImageFetcher;

/// `<app_name>-image-<epoch-ms>.png`
pub fn image_filename(app_name: &str, epoch_ms: i64) -> String {
    format!("{app_name}-image-{epoch_ms}.png")
}

/// `<app_name>-config-<epoch-ms>.json`
pub fn config_filename(app_name: &str, epoch_ms: i64) -> String {
    format!("{app_name}-config-{epoch_ms}.json")
}

/// Makes sure the bytes we save as `.png` are a PNG.
///
/// Other formats are re-encoded when they can be decoded. Anything else is
/// kept as it came off the wire.
pub fn ensure_png(bytes: Vec<u8>) -> Vec<u8> {
    match image::guess_format(&bytes) {
        Ok(ImageFormat::Png) => bytes,
        Ok(format) => match reencode_png(&bytes, format) {
            Ok(png) => {
                info!("Re-encoded {:?} image as PNG", format);
                png
            }
            Err(err) => {
                warn!("Keeping {:?} bytes, couldn't re-encode: {}", format, err);
                bytes
            }
        },
        Err(err) => {
            warn!("Saving unrecognised image data as-is: {}", err);
            bytes
        }
    }
}

fn reencode_png(bytes: &[u8], format: ImageFormat) -> Result<Vec<u8>> {
    let decoded = image::load_from_memory_with_format(bytes, format)?;
    let mut out = Cursor::new(Vec::new());
    decoded.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// Fetches `url` and writes it into `out_dir` as a PNG, returning the path.
pub async fn download_image<F: ImageFetcher>(
    fetcher: &F,
    settings: &Settings,
    url: &Url,
    out_dir: &Path,
) -> Result<PathBuf> {
    let bytes = fetcher.fetch_bytes(url).await?;
    let png = ensure_png(bytes);

    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(image_filename(
        &settings.app_name,
        Utc::now().timestamp_millis(),
    ));
    fs::write(&path, &png)?;
    info!("Saved {} ({} bytes)", path.display(), png.len());
    Ok(path)
}

/// Writes the pretty-printed JSON export of `config` into `out_dir`.
pub fn save_config_export(
    settings: &Settings,
    config: &Configuration,
    out_dir: &Path,
) -> Result<PathBuf> {
    let json = config.to_pretty_json()?;
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(config_filename(
        &settings.app_name,
        Utc::now().timestamp_millis(),
    ));
    fs::write(&path, json)?;
    info!("Saved {}", path.display());
    Ok(path)
}
