use hny_letter::{decode, decode_url, DecodeFailure, LetterDecoder, LetterView, Variant};
use hny_test_utils::legacy::{form_decoded, v1_param, v2_param};
use hny_test_utils::{encoder_at, sample_letter, symbol_heavy_letter, FixedClock};
use pretty_assertions::assert_eq;

// sample_letter() stamped on 2026-02-17, written by the current encoder
const V3_GOLDEN: &str = "eyJyZWNlaXZlck5hbWUiOiLquYDthqDsiqQiLCJyZWNlaXZlckxhYmVsIjoi64uY6ruYIiwibWVzc2FnZSI6IuyDiO2VtCDrs7Ug66eO7J20IOuwm.ycvOyEuOyalCIsInNlbmRlck5hbWUiOiLsnqXtgqTsnIQiLCJzZW5kZXJMYWJlbCI6IuyYrOumvCIsImRhdGUiOiIyMDI264WEIDLsm5QgMTfsnbwifQ";

// symbol_heavy_letter() in the second format
const V2_GOLDEN: &str = "eyJyZWNlaXZlck5hbWUiOiLquYDthqDsiqQiLCJyZWNlaXZlckxhYmVsIjoi64uY6ruYIiwibWVzc2FnZSI6Iuuwm-ycvOyEuOyalCDqsbTqsJXtlZjshLjsmpQ_PyDsg4jtlbQiLCJzZW5kZXJOYW1lIjoi7J6l7YKk7JyEIiwic2VuZGVyTGFiZWwiOiLsmKzrprwifQ";

#[test]
fn v1_link_keeps_phone() {
    let param = v1_param(&symbol_heavy_letter(), "01012345678");
    assert!(param.contains('+') && param.contains('/') && param.ends_with('='));

    let decoded = decode(&param).unwrap();
    assert_eq!(decoded, symbol_heavy_letter().with_sender_phone("01012345678"));
}

#[test]
fn v1_link_with_empty_phone_keeps_the_key() {
    let decoded = decode(&v1_param(&sample_letter(), "")).unwrap();
    assert_eq!(decoded.sender_phone.as_deref(), Some(""));
    assert_eq!(decoded.date, None);
}

#[test]
fn v1_link_after_form_decoding() {
    let param = form_decoded(&v1_param(&symbol_heavy_letter(), "01012345678"));
    assert!(param.contains(' '));

    let decoded = decode(&param).unwrap();
    assert_eq!(decoded.message, symbol_heavy_letter().message);
}

#[test]
fn v1_link_percent_escaped_in_url() {
    let param = v1_param(&symbol_heavy_letter(), "01012345678")
        .replace('+', "%2B")
        .replace('/', "%2F")
        .replace('=', "%3D");
    let url = format!("https://happynewyear-2026.whitekiwi.link/?f={param}");

    let decoded = decode_url(&url).unwrap();
    assert_eq!(decoded.sender_phone.as_deref(), Some("01012345678"));
}

#[test]
fn v2_link_decodes_without_optional_fields() {
    let param = v2_param(&symbol_heavy_letter());
    assert_eq!(param, V2_GOLDEN);
    assert!(param.contains('-') && param.contains('_'));

    assert_eq!(decode(&param).unwrap(), symbol_heavy_letter());
}

#[test]
fn v3_golden_link() {
    let clock = FixedClock::on(2026, 2, 17);
    let link = encoder_at(clock).encode(&sample_letter()).unwrap();
    assert_eq!(link.param, V3_GOLDEN);
    assert_eq!(link.variant, Variant::V3);

    let decoded = decode(V3_GOLDEN).unwrap();
    assert_eq!(decoded, sample_letter().with_date("2026년 2월 17일"));
}

#[test]
fn v3_link_uses_dot_and_underscore() {
    let link = encoder_at(FixedClock::on(2026, 1, 1))
        .encode(&symbol_heavy_letter())
        .unwrap();
    assert!(link.param.contains('.') && link.param.contains('_'));
    assert!(!link.param.contains('-'));

    let decoded = decode(&link.param).unwrap();
    assert_eq!(decoded, symbol_heavy_letter().with_date("2026년 1월 1일"));
}

#[test]
fn every_variant_through_the_viewer() {
    let decoder = LetterDecoder::default();
    let params = [
        v1_param(&sample_letter(), "01012345678"),
        v2_param(&sample_letter()),
        V3_GOLDEN.to_string(),
    ];
    for param in params {
        let url = format!("https://happynewyear-2026.whitekiwi.link/?f={param}");
        let view = LetterView::from_input(&decoder, &url);
        assert!(view.is_found(), "not found: {url}");
        assert_eq!(view.lines().first().map(String::as_str), Some("김토스 님께"));
    }
}

#[test]
fn failures_never_yield_a_record() {
    assert!(matches!(decode(""), Err(DecodeFailure::Empty)));
    assert!(matches!(decode("not-valid-base64!!"), Err(DecodeFailure::Base64(_))));
    assert!(matches!(decode("eyJ"), Err(_)));
    assert!(matches!(decode("e"), Err(DecodeFailure::BadPadding { len: 1 })));

    // truncated V3 link: valid symbols, broken JSON
    let truncated = &V3_GOLDEN[..V3_GOLDEN.len() - 8];
    assert!(decode(truncated).is_err());
}
