mod common;
use common::{exif_jpeg, setup_folder, ts, write_photo};
use phototime::extract::{self, ExtractorKind, NativeExtractor, TimestampExtractor};
use std::fs;

#[test]
fn test_native_reads_date_time_original() {
    let folder = setup_folder("extract_native");
    let photo = write_photo(&folder, "IMG_0001.JPG", "2024:05:01 10:05:00");

    let got = NativeExtractor.extract(&photo).unwrap();
    assert_eq!(got, Some(ts("2024:05:01 10:05:00")));
}

#[test]
fn test_native_garbage_file_is_absent() {
    let folder = setup_folder("extract_garbage");
    let path = folder.join("broken.jpg");
    fs::write(&path, b"\xFF\xD8 definitely not a jpeg").unwrap();

    assert_eq!(NativeExtractor.extract(&path).unwrap(), None);
}

#[test]
fn test_native_missing_file_is_absent() {
    let folder = setup_folder("extract_missing");
    assert_eq!(NativeExtractor.extract(&folder.join("gone.nef")).unwrap(), None);
}

#[test]
fn test_native_bad_date_is_absent() {
    let folder = setup_folder("extract_bad_date");
    let path = folder.join("odd.jpg");
    fs::write(&path, exif_jpeg("0000:00:00 00:00:00")).unwrap();

    assert_eq!(NativeExtractor.extract(&path).unwrap(), None);
}

#[test]
fn test_exiftool_missing_program_is_an_error() {
    let folder = setup_folder("extract_no_exiftool");
    let photo = write_photo(&folder, "a.jpg", "2024:05:01 10:05:00");

    let tool = extract::build(ExtractorKind::Exiftool, "/nonexistent/phototime-exiftool").unwrap();
    assert!(tool.extract(&photo).is_err());
}

#[cfg(unix)]
#[test]
fn test_exiftool_output_is_parsed() {
    let folder = setup_folder("extract_exiftool");
    let script = common::fake_exiftool(&folder);

    fs::write(folder.join("plain.nef"), "2024:05:01 10:05:00\n").unwrap();
    fs::write(folder.join("offset.jpg"), "2024:05:01 10:06:00+02:00\n").unwrap();
    fs::write(folder.join("subsec.jpg"), "2024:05:01 10:07:00.25\n").unwrap();
    fs::write(folder.join("empty.jpg"), "").unwrap();
    fs::write(folder.join("junk.jpg"), "Warning: bad file\n").unwrap();

    let tool = extract::build(ExtractorKind::Exiftool, &script.to_string_lossy()).unwrap();
    assert_eq!(tool.name(), "exiftool");

    let get = |name: &str| tool.extract(&folder.join(name)).unwrap();
    assert_eq!(get("plain.nef"), Some(ts("2024:05:01 10:05:00")));
    assert_eq!(get("offset.jpg"), Some(ts("2024:05:01 10:06:00")));
    assert_eq!(get("subsec.jpg"), Some(ts("2024:05:01 10:07:00")));
    assert_eq!(get("empty.jpg"), None);
    assert_eq!(get("junk.jpg"), None);
}

#[test]
fn test_image_extensions_case_insensitive() {
    use phototime::models::image_kind::{default_extensions, has_image_extension};
    use std::path::Path;

    let exts = default_extensions();
    assert!(has_image_extension(Path::new("a.JPG"), &exts));
    assert!(has_image_extension(Path::new("b.Nef"), &exts));
    assert!(has_image_extension(Path::new("c.jpeg"), &exts));
    assert!(has_image_extension(Path::new("d.PNG"), &exts));
    assert!(!has_image_extension(Path::new("e.txt"), &exts));
    assert!(!has_image_extension(Path::new("jpg"), &exts));
}

#[test]
fn test_listing_is_flat_and_filtered() {
    use phototime::models::image_kind::default_extensions;
    use phototime::utils::fs_scan::list_images;

    let folder = setup_folder("extract_listing");
    fs::write(folder.join("b.jpg"), b"").unwrap();
    fs::write(folder.join("a.NEF"), b"").unwrap();
    fs::write(folder.join("readme.md"), b"").unwrap();
    fs::create_dir_all(folder.join("sub")).unwrap();
    fs::write(folder.join("sub").join("c.jpg"), b"").unwrap();
    fs::create_dir_all(folder.join("dir.jpg")).unwrap();

    let names: Vec<String> = list_images(&folder, &default_extensions())
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(names, vec!["a.NEF", "b.jpg"]);
}

#[test]
fn test_listing_missing_folder_fails() {
    use phototime::models::image_kind::default_extensions;
    use phototime::utils::fs_scan::list_images;

    let folder = setup_folder("extract_listing_missing").join("nope");
    assert!(list_images(&folder, &default_extensions()).is_err());
}
