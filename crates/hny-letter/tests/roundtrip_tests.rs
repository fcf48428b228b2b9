use chrono::{Duration, TimeZone, Utc};
use hny_letter::{
    decode, decode_url, display_date, ConfigError, LetterDecoder, LetterEncoder,
    LetterRecord, LinkConfig,
};
use hny_test_utils::{encoder_at, multiline_letter, sample_letter, FixedClock};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::Arc;

fn letter_strategy() -> impl Strategy<Value = LetterRecord> {
    (
        "\\PC{1,12}",
        "\\PC{1,6}",
        "[\\PC\n]{1,200}",
        "\\PC{1,12}",
        "\\PC{1,6}",
    )
        .prop_map(|(receiver, receiver_label, message, sender, sender_label)| {
            LetterRecord::new(receiver, receiver_label, message, sender, sender_label)
        })
}

proptest! {
    #[test]
    fn prop_roundtrip_preserves_every_field(letter in letter_strategy()) {
        let encoder = encoder_at(FixedClock::on(2026, 1, 1));
        let link = encoder.encode(&letter).unwrap();
        let decoded = decode(&link.param).unwrap();
        prop_assert_eq!(decoded, letter.with_date("2026년 1월 1일"));
    }

    #[test]
    fn prop_param_needs_no_percent_encoding(letter in letter_strategy()) {
        let link = encoder_at(FixedClock::on(2026, 1, 1)).encode(&letter).unwrap();
        prop_assert!(link
            .param
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')));
    }

    #[test]
    fn prop_phone_is_never_written(letter in letter_strategy(), phone in "[0-9]{10,11}") {
        let link = encoder_at(FixedClock::on(2026, 1, 1))
            .encode(&letter.clone().with_sender_phone(phone))
            .unwrap();
        prop_assert_eq!(decode(&link.param).unwrap().sender_phone, None);
    }
}

#[test]
fn concrete_letter_roundtrip() {
    let clock = FixedClock(Utc.with_ymd_and_hms(2026, 2, 17, 3, 0, 0).unwrap());
    let link = encoder_at(clock).encode(&sample_letter()).unwrap();

    let decoded = decode_url(&link.url).unwrap();
    assert_eq!(decoded.receiver_name, "김토스");
    assert_eq!(decoded.receiver_label, "님께");
    assert_eq!(decoded.message, "새해 복 많이 받으세요");
    assert_eq!(decoded.sender_name, "장키위");
    assert_eq!(decoded.sender_label, "올림");
    assert_eq!(decoded.date.as_deref(), Some("2026년 2월 17일"));
    assert_eq!(decoded.sender_phone, None);
}

#[test]
fn newlines_and_symbols_survive() {
    let link = encoder_at(FixedClock::on(2026, 1, 1))
        .encode(&multiline_letter())
        .unwrap();
    assert_eq!(decode(&link.param).unwrap().message, multiline_letter().message);
}

#[test]
fn date_is_frozen_at_encode_time() {
    let early = encoder_at(FixedClock::on(2026, 1, 1))
        .encode(&sample_letter())
        .unwrap();
    let late = encoder_at(FixedClock::on(2026, 3, 2))
        .encode(&sample_letter())
        .unwrap();
    assert_ne!(early.param, late.param);

    // Read back long after both were written.
    let viewing_day = display_date(&FixedClock::on(2026, 12, 31).0);
    let early_date = decode(&early.param).unwrap().date.unwrap();
    let late_date = decode(&late.param).unwrap().date.unwrap();
    assert_eq!(early_date, "2026년 1월 1일");
    assert_eq!(late_date, "2026년 3월 2일");
    assert_ne!(early_date, viewing_day);
    assert_ne!(late_date, viewing_day);
}

#[test]
fn reencoding_a_decoded_letter_keeps_its_date() {
    let first = encoder_at(FixedClock::on(2026, 1, 1))
        .encode(&sample_letter())
        .unwrap();
    let decoded = decode(&first.param).unwrap();

    let later = FixedClock(FixedClock::on(2026, 1, 1).0 + Duration::days(40));
    let second = encoder_at(later).encode(&decoded).unwrap();
    assert_eq!(second.param, first.param);
}

#[test]
fn unstamped_links_have_no_date() {
    let config = LinkConfig::new().with_stamp_date(false);
    let encoder = LetterEncoder::with_clock(config, Arc::new(FixedClock::on(2026, 1, 1))).unwrap();
    let decoded = decode(&encoder.encode(&sample_letter()).unwrap().param).unwrap();
    assert_eq!(decoded, sample_letter());
}

#[test]
fn long_letters_suggest_a_shortener() {
    let config = LinkConfig::new();
    let encoder = encoder_at(FixedClock::on(2026, 1, 1));
    let mut letter = sample_letter();
    letter.message = "새해 복 많이 받으세요\n".repeat(40);

    let link = encoder.encode(&letter).unwrap();
    assert!(link.suggests_shortener(&config));
    assert!(!encoder.encode(&sample_letter()).unwrap().suggests_shortener(&config));
}

#[test]
fn base_url_with_its_own_query() {
    let clock = Arc::new(FixedClock::on(2026, 1, 1));
    let config = LinkConfig::new().with_base_url("https://example.com/view?lang=ko");
    let encoder = LetterEncoder::with_clock(config, clock.clone()).unwrap();
    let link = encoder.encode(&sample_letter()).unwrap();
    assert!(link.url.starts_with("https://example.com/view?lang=ko&f="));
    assert_eq!(decode_url(&link.url).unwrap(), sample_letter().with_date("2026년 1월 1일"));

    // an encoder that would write a second `f` is never built
    let config = LinkConfig::new().with_base_url("https://example.com/?f=old");
    assert!(matches!(
        LetterEncoder::with_clock(config, clock.clone()),
        Err(ConfigError::ParamInBaseUrl { .. })
    ));

    let config = LinkConfig {
        param_name: "letter".to_string(),
        ..LinkConfig::new().with_base_url("https://example.com/?f=old")
    };
    let encoder = LetterEncoder::with_clock(config.clone(), clock).unwrap();
    let link = encoder.encode(&sample_letter()).unwrap();
    let decoded = LetterDecoder::new(&config).decode_url(&link.url).unwrap();
    assert_eq!(decoded.message, sample_letter().message);
}
