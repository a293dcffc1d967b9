//! Platform launcher icons derived from the master icon.
//!
//! The master PNG is resampled into every slot an iOS `AppIcon.appiconset`
//! and an Android `mipmap-*` resource tree expect. iOS additionally needs a
//! `Contents.json` manifest describing each file.

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use serde::Serialize;

use crate::error::Result;

/// Asset catalog directory, relative to the project root.
pub const IOS_ICONSET_DIR: &str = "ios/App/App/Assets.xcassets/AppIcon.appiconset";

/// Android resource directory, relative to the project root.
pub const ANDROID_RES_DIR: &str = "android/app/src/main/res";

/// Which platform's assets to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Platform {
    Ios,
    Android,
    All,
}

impl Platform {
    fn includes_ios(self) -> bool {
        matches!(self, Self::Ios | Self::All)
    }

    fn includes_android(self) -> bool {
        matches!(self, Self::Android | Self::All)
    }
}

// ============================================================================
// iOS
// ============================================================================

/// One entry of the iOS app icon set: a point size at a display scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IosSlot {
    /// Size in points.
    pub points: f32,
    /// Display scale (1, 2 or 3).
    pub scale: u32,
}

pub const IOS_SLOTS: [IosSlot; 12] = [
    IosSlot::new(20.0, 2),
    IosSlot::new(20.0, 3),
    IosSlot::new(29.0, 2),
    IosSlot::new(29.0, 3),
    IosSlot::new(40.0, 2),
    IosSlot::new(40.0, 3),
    IosSlot::new(60.0, 2),
    IosSlot::new(60.0, 3),
    IosSlot::new(76.0, 1),
    IosSlot::new(76.0, 2),
    IosSlot::new(83.5, 2),
    IosSlot::new(1024.0, 1),
];

impl IosSlot {
    pub const fn new(points: f32, scale: u32) -> Self {
        Self { points, scale }
    }

    /// Edge length of the PNG in pixels.
    pub fn pixels(&self) -> u32 {
        (self.points * self.scale as f32).round() as u32
    }

    pub fn filename(&self) -> String {
        format!("AppIcon-{0}x{0}@{1}x.png", self.points, self.scale)
    }

    /// Device family the slot belongs to.
    pub fn idiom(&self) -> &'static str {
        if self.points >= 1024.0 {
            "ios-marketing"
        } else if self.points >= 76.0 {
            "ipad"
        } else {
            "iphone"
        }
    }

    fn contents_entry(&self) -> ContentsImage {
        ContentsImage {
            filename: self.filename(),
            idiom: self.idiom(),
            scale: format!("{}x", self.scale),
            size: format!("{0}x{0}", self.points),
        }
    }
}

/// `Contents.json` of an app icon set.
#[derive(Debug, Clone, Serialize)]
pub struct IconSetContents {
    pub images: Vec<ContentsImage>,
    pub info: ContentsInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentsImage {
    pub filename: String,
    pub idiom: &'static str,
    pub scale: String,
    pub size: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentsInfo {
    pub author: &'static str,
    pub version: u32,
}

impl IconSetContents {
    /// Manifest listing every slot in [`IOS_SLOTS`].
    pub fn for_slots(slots: &[IosSlot]) -> Self {
        Self {
            images: slots.iter().map(IosSlot::contents_entry).collect(),
            info: ContentsInfo {
                author: "xcode",
                version: 1,
            },
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Android
// ============================================================================

/// A density bucket of the Android launcher icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndroidDensity {
    pub folder: &'static str,
    pub pixels: u32,
}

pub const ANDROID_DENSITIES: [AndroidDensity; 5] = [
    AndroidDensity::new("mipmap-mdpi", 48),
    AndroidDensity::new("mipmap-hdpi", 72),
    AndroidDensity::new("mipmap-xhdpi", 96),
    AndroidDensity::new("mipmap-xxhdpi", 144),
    AndroidDensity::new("mipmap-xxxhdpi", 192),
];

impl AndroidDensity {
    pub const fn new(folder: &'static str, pixels: u32) -> Self {
        Self { folder, pixels }
    }
}

const ANDROID_LAUNCHER_FILES: [&str; 2] = ["ic_launcher.png", "ic_launcher_round.png"];

/// The adaptive-icon foreground only ships at the highest density.
const ANDROID_FOREGROUND: (&str, &str, u32) =
    ("mipmap-xxxhdpi", "ic_launcher_foreground.png", 192);

// ============================================================================
// Generation
// ============================================================================

/// Files written by [`generate_variants`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantReport {
    pub written: Vec<PathBuf>,
}

/// Resamples the icon at `source` into platform assets under `root`.
///
/// Missing directories are created. Existing files are overwritten.
pub fn generate_variants(source: &Path, root: &Path, platform: Platform) -> Result<VariantReport> {
    let master = image::open(source)?;
    log::info!(
        "generating {:?} variants from {} ({}x{})",
        platform,
        source.display(),
        master.width(),
        master.height()
    );

    let mut report = VariantReport::default();

    if platform.includes_ios() {
        let dir = root.join(IOS_ICONSET_DIR);
        fs::create_dir_all(&dir)?;

        for slot in &IOS_SLOTS {
            let path = dir.join(slot.filename());
            write_variant(&master, slot.pixels(), &path)?;
            report.written.push(path);
        }

        let manifest = dir.join("Contents.json");
        fs::write(&manifest, IconSetContents::for_slots(&IOS_SLOTS).to_json_pretty()?)?;
        log::info!("wrote {}", manifest.display());
        report.written.push(manifest);
    }

    if platform.includes_android() {
        let res = root.join(ANDROID_RES_DIR);

        for density in &ANDROID_DENSITIES {
            let dir = res.join(density.folder);
            fs::create_dir_all(&dir)?;
            for name in ANDROID_LAUNCHER_FILES {
                let path = dir.join(name);
                write_variant(&master, density.pixels, &path)?;
                report.written.push(path);
            }
        }

        let (folder, name, pixels) = ANDROID_FOREGROUND;
        let path = res.join(folder).join(name);
        write_variant(&master, pixels, &path)?;
        report.written.push(path);
    }

    Ok(report)
}

fn write_variant(master: &DynamicImage, pixels: u32, path: &Path) -> Result<()> {
    fit_contain(master, pixels).save(path)?;
    log::debug!("wrote {} ({pixels}x{pixels})", path.display());
    Ok(())
}

/// Scales `image` to fit a `pixels`-square box, centering it on a
/// transparent background when the aspect ratio is not square.
fn fit_contain(image: &DynamicImage, pixels: u32) -> RgbaImage {
    let resized = image.resize(pixels, pixels, FilterType::Lanczos3).to_rgba8();
    if resized.dimensions() == (pixels, pixels) {
        return resized;
    }

    let mut boxed = RgbaImage::new(pixels, pixels);
    let x = (pixels - resized.width()) / 2;
    let y = (pixels - resized.height()) / 2;
    imageops::overlay(&mut boxed, &resized, i64::from(x), i64::from(y));
    boxed
}
