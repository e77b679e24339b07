//! Integration tests for AWS3-HTTPS signing.

use chrono::{TimeZone, Utc};
use http::HeaderMap;
use integrations_ses_mailer::signing::{
    authorization_header, compute_signature, format_http_date, sign_request, SigningAlgorithm,
    SigningParams,
};

#[test]
fn test_signature_vectors() {
    assert_eq!(
        compute_signature("123", "Thu, 05 Nov 1970 00:00:00 GMT", SigningAlgorithm::HmacSha256)
            .unwrap(),
        "5KGHeNdMDsXvKzbyrOQOLM1JpjTMnQidjoEyIloiEC8="
    );
    assert_eq!(
        compute_signature("123", "Thu, 05 Nov 1970 00:00:00 GMT", SigningAlgorithm::HmacSha1)
            .unwrap(),
        "GE+RwUIpN0/7TWQoLiCFLOhPOYc="
    );
    assert_eq!(
        compute_signature(
            "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
            "Fri, 15 Dec 2023 10:30:45 GMT",
            SigningAlgorithm::HmacSha256,
        )
        .unwrap(),
        "Ge/uwEPbaU/jycQ/0Tdq6tJ+XRNMmEcfT1Wk0cr3yqE="
    );
}

#[test]
fn test_same_instant_same_headers() {
    let params = SigningParams::new("abc", "123");
    let timestamp = Utc.with_ymd_and_hms(2023, 12, 15, 10, 30, 45).unwrap();

    let mut first = HeaderMap::new();
    let mut second = HeaderMap::new();
    sign_request(&mut first, &params, &timestamp).unwrap();
    sign_request(&mut second, &params, &timestamp).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_header_uses_formatted_date() {
    let params = SigningParams::new("abc", "123");
    let timestamp = Utc.with_ymd_and_hms(1970, 11, 5, 0, 0, 0).unwrap();
    let date = format_http_date(&timestamp);

    assert_eq!(date, "Thu, 05 Nov 1970 00:00:00 GMT");
    assert_eq!(
        authorization_header(&params, &date).unwrap(),
        "AWS3-HTTPS AWSAccessKeyId=abc,Algorithm=HmacSHA256,Signature=5KGHeNdMDsXvKzbyrOQOLM1JpjTMnQidjoEyIloiEC8="
    );
}

#[test]
fn test_dates_across_eras() {
    let cases = [
        ((2024, 6, 2, 23, 59, 59), "Sun, 02 Jun 2024 23:59:59 GMT"),
        ((1970, 1, 1, 0, 0, 0), "Thu, 01 Jan 1970 00:00:00 GMT"),
        ((2000, 2, 29, 12, 0, 0), "Tue, 29 Feb 2000 12:00:00 GMT"),
    ];

    for ((y, mo, d, h, mi, s), expected) in cases {
        let timestamp = Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap();
        assert_eq!(format_http_date(&timestamp), expected);
    }
}
