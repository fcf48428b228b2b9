use hny_cli::commands::{decode_input, load_config, read_message, render_record, render_view};
use hny_letter::LinkConfig;
use hny_test_utils::legacy::v1_param;
use hny_test_utils::sample_letter;
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn file_config_with_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "base_url = \"https://letters.example.com/open\"").unwrap();
    writeln!(file, "param_name = \"letter\"").unwrap();

    let config = load_config(Some(file.path()), None, true).unwrap();
    assert_eq!(config.base_url, "https://letters.example.com/open");
    assert_eq!(config.param_name, "letter");
    assert!(!config.stamp_date);

    let config = load_config(Some(file.path()), Some("https://other.example.com/"), false).unwrap();
    assert_eq!(config.base_url, "https://other.example.com/");
    assert!(config.stamp_date);
}

#[test]
fn invalid_files_are_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "utc_offset_minutes = 99999").unwrap();
    assert!(load_config(Some(file.path()), None, false).is_err());

    let missing = std::env::temp_dir().join("hny-config-that-does-not-exist.toml");
    assert!(load_config(Some(missing.as_path()), None, false).is_err());

    assert!(load_config(None, Some("not a url"), false).is_err());
}

#[test]
fn message_file_drops_one_trailing_newline() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "첫 줄\n둘째 줄\n\n").unwrap();
    assert_eq!(read_message(file.path()).unwrap(), "첫 줄\n둘째 줄\n");
}

#[test]
fn decode_and_view_legacy_link() {
    let config = LinkConfig::new();
    let url = format!(
        "https://happynewyear-2026.whitekiwi.link/?f={}",
        v1_param(&sample_letter(), "01012345678")
    );

    let record = decode_input(&config, &url).unwrap();
    let rendered = render_record(&record, true).unwrap();
    let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(json["senderPhone"], "01012345678");
    assert!(json.get("date").is_none());

    let (found, text) = render_view(&config, &url);
    assert!(found);
    assert_eq!(
        text,
        "김토스 님께\n새해 복 많이 받으세요\n새해 첫날\n장키위 올림"
    );
}
