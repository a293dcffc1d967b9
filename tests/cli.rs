#![cfg(feature = "cli")]

use std::fs;
use std::process::Command;

fn masjid_icon(dir: &std::path::Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_masjid-icon"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn bare_invocation_writes_the_default_icon() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir(root.path().join("resources")).unwrap();

    let output = masjid_icon(root.path());

    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "✅ Icon generated: resources/icon.png\n\
         📱 Run: npx @capacitor/assets generate --android\n"
    );

    let icon = image::open(root.path().join("resources").join("icon.png")).unwrap();
    assert_eq!((icon.width(), icon.height()), (1024, 1024));
    assert_eq!(icon.color(), image::ColorType::Rgb8);
}

#[test]
fn bare_invocation_fails_without_resources_directory() {
    let root = tempfile::tempdir().unwrap();

    let output = masjid_icon(root.path());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!root.path().join("resources").exists());
    assert!(!root.path().join("resources").join("icon.png").exists());
}
