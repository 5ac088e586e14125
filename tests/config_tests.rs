mod common;
use common::{setup_folder, temp_config};
use phototime::config::Config;
use phototime::extract::ExtractorKind;
use std::fs;

#[test]
fn test_missing_file_gives_defaults() {
    let cfg = Config::load(&temp_config("cfg_missing")).unwrap();

    assert_eq!(cfg.break_minutes, 10);
    assert!(!cfg.ask_break);
    assert!(cfg.use_cache);
    assert_eq!(cfg.backend, ExtractorKind::Native);
    assert_eq!(cfg.exiftool_path, "exiftool");
    assert_eq!(cfg.cache_file, "image_timestamps.db");
    assert_eq!(cfg.extensions, vec!["jpg", "jpeg", "png", "nef"]);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let path = temp_config("cfg_partial");
    fs::write(&path, "break_minutes: 25\nbackend: exiftool\n").unwrap();

    let cfg = Config::load(&path).unwrap();
    assert_eq!(cfg.break_minutes, 25);
    assert_eq!(cfg.break_threshold().minutes(), 25);
    assert_eq!(cfg.backend, ExtractorKind::Exiftool);
    assert!(cfg.use_cache);
}

#[test]
fn test_save_then_load() {
    let folder = setup_folder("cfg_save");
    let path = folder.join("nested").join("phototime.conf");

    let cfg = Config {
        break_minutes: 3,
        ask_break: true,
        extensions: vec!["cr2".into()],
        ..Config::default()
    };
    cfg.save(&path).unwrap();

    let back = Config::load(&path).unwrap();
    assert_eq!(back.break_minutes, 3);
    assert!(back.ask_break);
    assert_eq!(back.extensions, vec!["cr2"]);
}

#[test]
fn test_broken_yaml_is_an_error() {
    let path = temp_config("cfg_broken");
    fs::write(&path, "break_minutes: [oops").unwrap();

    assert!(Config::load(&path).is_err());
}
