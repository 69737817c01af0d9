use super::*;

#[test]
fn data_uri_encodes_bytes_with_mime() {
    assert_eq!(
        data_uri("image/png", &[0x89, 0x50, 0x4e, 0x47]),
        Some("data:image/png;base64,iVBORw==".to_owned())
    );
}

#[test]
fn data_uri_falls_back_to_octet_stream_for_missing_mime() {
    let uri = data_uri("", b"abc").expect("uri");
    assert_eq!(uri, "data:application/octet-stream;base64,YWJj");
}

#[test]
fn data_uri_rejects_empty_file() {
    assert_eq!(data_uri("image/png", &[]), None);
}

#[test]
fn initial_uppercases_first_character() {
    assert_eq!(initial("alice"), "A");
    assert_eq!(initial("  émile"), "É");
}

#[test]
fn initial_placeholder_for_blank_name() {
    assert_eq!(initial(""), "?");
    assert_eq!(initial("   "), "?");
}

#[test]
fn failed_read_yields_no_avatar() {
    assert_eq!(avatar_from_read("image/png", None), None);
}

#[test]
fn successful_read_yields_data_uri() {
    assert_eq!(avatar_from_read("image/png", Some(&[0u8][..])).as_deref(), Some("data:image/png;base64,AA=="));
}
