use std::env;
use std::path::PathBuf;

fn main() {
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    println!("cargo:rerun-if-changed=build.rs");

    if target_os == "macos" {
        create_macos_plist();
    }
}

fn create_macos_plist() {
    let plist_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleName</key>
    <string>Leaf Detection</string>
    <key>CFBundleDisplayName</key>
    <string>Leaf Detection</string>
    <key>CFBundleIdentifier</key>
    <string>com.leaf-detection.app</string>
    <key>CFBundleVersion</key>
    <string>0.1.0</string>
    <key>CFBundleShortVersionString</key>
    <string>0.1.0</string>
    <key>NSCameraUsageDescription</key>
    <string>Leaf Detection captures a photo to send for leaf detection.</string>
    <key>NSPhotoLibraryUsageDescription</key>
    <string>Leaf Detection lets you pick an existing photo for leaf detection.</string>
</dict>
</plist>"#;

    let Ok(out_dir) = env::var("OUT_DIR") else {
        println!("cargo:warning=OUT_DIR not set, skipping Info.plist");
        return;
    };
    let plist_path = PathBuf::from(&out_dir).join("Info.plist");

    if let Err(e) = std::fs::write(&plist_path, plist_content) {
        println!("cargo:warning=Failed to write Info.plist: {}", e);
        return;
    }

    println!("cargo:warning=Created Info.plist for macOS with usage descriptions");
}
