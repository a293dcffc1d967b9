use std::fs;

use masjid_icon::{
    ANDROID_RES_DIR, Color, IOS_ICONSET_DIR, IconError, IconRenderer, IconStyle, Platform,
    generate_variants,
};

#[test]
fn writes_readable_png_into_existing_directory() {
    let root = tempfile::tempdir().unwrap();
    let resources = root.path().join("resources");
    fs::create_dir(&resources).unwrap();
    let output = resources.join("icon.png");

    let rendered = IconRenderer::default().render_to_file(&output).unwrap();

    let decoded = image::open(&output).unwrap();
    assert_eq!(decoded.width(), 1024);
    assert_eq!(decoded.height(), 1024);
    assert_eq!(decoded.color(), image::ColorType::Rgb8);
    assert_eq!(decoded.to_rgb8(), rendered.data);
}

#[test]
fn repeated_renders_write_identical_bytes() {
    let root = tempfile::tempdir().unwrap();
    let first = root.path().join("first.png");
    let second = root.path().join("second.png");

    IconRenderer::default().render_to_file(&first).unwrap();
    IconRenderer::default().render_to_file(&second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn missing_directory_fails_without_output() {
    let root = tempfile::tempdir().unwrap();
    let output = root.path().join("resources").join("icon.png");

    let err = IconRenderer::default().render_to_file(&output).unwrap_err();

    assert!(matches!(err, IconError::Image(image::ImageError::IoError(_))));
    assert!(!output.exists());
    assert!(!root.path().join("resources").exists());
}

#[test]
fn generates_every_platform_variant() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("icon.png");
    IconRenderer::new(IconStyle::new().with_size(256).with_scale(0.4))
        .render_to_file(&source)
        .unwrap();

    let report = generate_variants(&source, root.path(), Platform::All).unwrap();
    // 12 iOS images + Contents.json + 5 densities x 2 + foreground.
    assert_eq!(report.written.len(), 12 + 1 + 10 + 1);
    assert!(report.written.iter().all(|p| p.exists()));

    let iconset = root.path().join(IOS_ICONSET_DIR);
    let marketing = image::open(iconset.join("AppIcon-1024x1024@1x.png")).unwrap();
    assert_eq!(marketing.width(), 1024);
    let ipad = image::open(iconset.join("AppIcon-83.5x83.5@2x.png")).unwrap();
    assert_eq!(ipad.width(), 167);

    let manifest = fs::read_to_string(iconset.join("Contents.json")).unwrap();
    let contents: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(contents["images"][11]["idiom"], "ios-marketing");

    let res = root.path().join(ANDROID_RES_DIR);
    let round = image::open(res.join("mipmap-hdpi").join("ic_launcher_round.png")).unwrap();
    assert_eq!((round.width(), round.height()), (72, 72));
    let foreground =
        image::open(res.join("mipmap-xxxhdpi").join("ic_launcher_foreground.png")).unwrap();
    assert_eq!(foreground.width(), 192);
}

#[test]
fn android_only_leaves_ios_untouched() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("icon.png");
    IconRenderer::new(IconStyle::new().with_size(128).with_scale(0.2))
        .render_to_file(&source)
        .unwrap();

    let report = generate_variants(&source, root.path(), Platform::Android).unwrap();
    assert_eq!(report.written.len(), 11);
    assert!(!root.path().join("ios").exists());
}

#[test]
fn missing_source_is_an_error() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("nope.png");
    let err = generate_variants(&source, root.path(), Platform::Ios).unwrap_err();
    assert!(matches!(err, IconError::Image(_)));
}

#[test]
fn style_profile_drives_the_render() {
    let root = tempfile::tempdir().unwrap();
    let profile = root.path().join("style.json");
    fs::write(
        &profile,
        r##"{ "size": 300, "scale": 0.5, "foreground": "#000000" }"##,
    )
    .unwrap();

    let style = IconStyle::load(&profile).unwrap();
    let icon = IconRenderer::new(style).render();

    assert_eq!(icon.dimensions().width, 300);
    assert_eq!(icon.distinct_colors(), vec![Color::new(0, 0, 0), Color::EMERALD]);
}
