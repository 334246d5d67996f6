use super::*;

// =============================================================
// URL validation
// =============================================================

#[test]
fn http_and_https_urls_are_accepted() {
    assert!(is_valid_image_url("https://i.imgur.com/abc123.jpg"));
    assert!(is_valid_image_url("http://example.com/photo.png"));
}

#[test]
fn other_schemes_and_fragments_are_rejected() {
    assert!(!is_valid_image_url("ftp://example.com/photo.png"));
    assert!(!is_valid_image_url("just-a-path.jpg"));
    assert!(!is_valid_image_url("https://"));
    assert!(!is_valid_image_url(""));
}

// =============================================================
// Upload validation
// =============================================================

#[test]
fn only_images_under_the_size_limit_pass() {
    assert!(validate_upload("image/png", 1024.0).is_ok());
    assert!(validate_upload("text/plain", 1024.0).is_err());
    assert!(validate_upload("image/jpeg", MAX_IMAGE_BYTES + 1.0).is_err());
}

// =============================================================
// Imgur responses
// =============================================================

#[test]
fn successful_upload_yields_the_link() {
    let body = r#"{"success":true,"data":{"link":"https://i.imgur.com/abc123.jpg"}}"#;
    assert_eq!(
        parse_imgur_response(body),
        Ok("https://i.imgur.com/abc123.jpg".to_owned())
    );
}

#[test]
fn failed_upload_surfaces_the_imgur_message() {
    let body = r#"{"success":false,"data":{"error":"File is over the size limit"}}"#;
    assert_eq!(
        parse_imgur_response(body),
        Err("File is over the size limit".to_owned())
    );
}

#[test]
fn malformed_bodies_fail_with_a_generic_message() {
    assert_eq!(
        parse_imgur_response("<html></html>"),
        Err("Failed to upload image".to_owned())
    );
}
