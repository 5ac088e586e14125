#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use phototime::models::capture_time::CaptureTime;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn pt() -> Command {
    cargo_bin_cmd!("phototime")
}

/// Fresh, empty folder inside the system temp dir
pub fn setup_folder(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("phototime_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test folder");
    path
}

/// Config path that does not exist, so defaults are used
pub fn temp_config(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("phototime_test_{}.conf", name));
    fs::remove_file(&path).ok();
    path
}

/// Parse `YYYY:MM:DD HH:MM:SS`
pub fn ts(s: &str) -> CaptureTime {
    CaptureTime::from_exif_str(s).expect("valid test timestamp")
}

/// Minimal JPEG whose only content is an EXIF block carrying `DateTimeOriginal`.
pub fn exif_jpeg(date: &str) -> Vec<u8> {
    assert_eq!(date.len(), 19, "date must be YYYY:MM:DD HH:MM:SS");

    // Little-endian TIFF: IFD0 @8 -> Exif IFD @26 -> ASCII value @44
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes());

    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x8769u16.to_le_bytes()); // ExifIFDPointer
    tiff.extend_from_slice(&4u16.to_le_bytes()); // LONG
    tiff.extend_from_slice(&1u32.to_le_bytes());
    tiff.extend_from_slice(&26u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());

    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x9003u16.to_le_bytes()); // DateTimeOriginal
    tiff.extend_from_slice(&2u16.to_le_bytes()); // ASCII
    tiff.extend_from_slice(&20u32.to_le_bytes());
    tiff.extend_from_slice(&44u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());

    tiff.extend_from_slice(date.as_bytes());
    tiff.push(0);

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    let len = (2 + 6 + tiff.len()) as u16;
    jpeg.extend_from_slice(&len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

pub fn write_photo(folder: &Path, name: &str, date: &str) -> PathBuf {
    let path = folder.join(name);
    fs::write(&path, exif_jpeg(date)).expect("write test photo");
    path
}

/// Stand-in for exiftool: prints the content of the file it is given.
/// Test "images" are plain text files holding the capture date.
#[cfg(unix)]
pub fn fake_exiftool(folder: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = folder.join("fake-exiftool.sh");
    fs::write(&path, "#!/bin/sh\nfor last; do :; done\ncat \"$last\"\n").expect("write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod script");
    path
}
