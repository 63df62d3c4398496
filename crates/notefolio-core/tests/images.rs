use notefolio_core::error::CoreError;
use notefolio_core::models::image::{validate_data_uri, MAX_IMAGE_BYTES};

fn data_uri(mime: &str, payload_chars: usize) -> String {
    format!("data:{mime};base64,{}", "A".repeat(payload_chars))
}

#[test]
fn oversized_jpeg_is_rejected() {
    // 8 MiB of base64 decodes to 6 MiB, over the cap.
    let uri = data_uri("image/jpeg", 8 * 1024 * 1024);

    match validate_data_uri(&uri) {
        Err(CoreError::ImageTooLarge { size }) => assert!(size > MAX_IMAGE_BYTES),
        other => panic!("expected ImageTooLarge, got {other:?}"),
    }
}

#[test]
fn non_image_mime_is_rejected() {
    let uri = data_uri("text/plain", 64);

    match validate_data_uri(&uri) {
        Err(CoreError::UnsupportedImageType(mime)) => assert_eq!(mime, "text/plain"),
        other => panic!("expected UnsupportedImageType, got {other:?}"),
    }
}

#[test]
fn two_mib_png_is_accepted() {
    let uri = data_uri("image/png", 2_800_000);

    let image = validate_data_uri(&uri).unwrap();
    assert_eq!(image.mime_type, "image/png");
    assert_eq!(image.size, 2_100_000);
    assert!(image.size <= MAX_IMAGE_BYTES);
}

#[test]
fn all_accepted_types_validate() {
    for mime in ["image/jpeg", "image/png", "image/gif", "image/webp"] {
        assert!(validate_data_uri(&data_uri(mime, 128)).is_ok(), "{mime}");
    }
}

#[test]
fn malformed_uris_are_rejected() {
    assert!(matches!(
        validate_data_uri("not-a-data-uri"),
        Err(CoreError::MalformedDataUri(_))
    ));
    assert!(matches!(
        validate_data_uri("data:image/png;base64"),
        Err(CoreError::MalformedDataUri(_))
    ));
    // URL-encoded (non-base64) payloads are not accepted.
    assert!(matches!(
        validate_data_uri("data:image/png,rawpayload"),
        Err(CoreError::MalformedDataUri(_))
    ));
    assert!(matches!(
        validate_data_uri("data:image/png;base64,"),
        Err(CoreError::MalformedDataUri(_))
    ));
}

#[test]
fn padding_is_subtracted_from_decoded_size() {
    let image = validate_data_uri("data:image/png;base64,AAAAAAA=").unwrap();
    assert_eq!(image.size, 5);
}
