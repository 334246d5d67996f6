//! Image upload helper.
//!
//! Uploads go to Imgur's anonymous endpoint when a client id is configured;
//! otherwise the picker falls back to direct URL entry. Validation and
//! response parsing are pure so they test natively; only the actual upload
//! needs a browser.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

/// Maximum accepted upload size.
pub const MAX_IMAGE_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

/// Accept only absolute http(s) URLs for direct entry.
#[must_use]
pub fn is_valid_image_url(url: &str) -> bool {
    url.strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .is_some_and(|rest| {
            let host = rest.split('/').next().unwrap_or("");
            !host.is_empty()
        })
}

/// Pre-upload validation mirrored from the backend's limits.
///
/// # Errors
///
/// Returns a display message when the file is not an image or too large.
pub fn validate_upload(content_type: &str, size: f64) -> Result<(), String> {
    if !content_type.starts_with("image/") {
        return Err("File must be an image".to_owned());
    }
    if size > MAX_IMAGE_BYTES {
        return Err("Image size must be less than 10MB".to_owned());
    }
    Ok(())
}

/// Extract the hosted image link from an Imgur response body.
///
/// # Errors
///
/// Returns the Imgur error message when present, a generic one otherwise.
pub fn parse_imgur_response(body: &str) -> Result<String, String> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|_| "Failed to upload image".to_owned())?;
    let success = value
        .get("success")
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false);
    let data = value.get("data");
    if success {
        if let Some(link) = data
            .and_then(|d| d.get("link"))
            .and_then(serde_json::Value::as_str)
        {
            return Ok(link.to_owned());
        }
    }
    let message = data
        .and_then(|d| d.get("error"))
        .and_then(serde_json::Value::as_str)
        .unwrap_or("Failed to upload image");
    Err(message.to_owned())
}

/// Upload a file to Imgur and return its hosted URL.
///
/// # Errors
///
/// Returns a display message when validation, the upload, or response
/// parsing fails, or when no Imgur client id is configured.
#[cfg(feature = "csr")]
pub async fn upload_image(file: &web_sys::File) -> Result<String, String> {
    let Some(client_id) = crate::config::imgur_client_id() else {
        return Err(
            "Image uploads are not configured; paste an image URL instead".to_owned(),
        );
    };

    validate_upload(&file.type_(), file.size())?;

    let form = web_sys::FormData::new().map_err(|_| "Failed to prepare upload".to_owned())?;
    form.append_with_blob("image", file)
        .map_err(|_| "Failed to prepare upload".to_owned())?;

    let request = gloo_net::http::Request::post("https://api.imgur.com/3/image")
        .header("Authorization", &format!("Client-ID {client_id}"))
        .body(form)
        .map_err(|e| e.to_string())?;
    let response = request.send().await.map_err(|e| e.to_string())?;
    let body = response.text().await.map_err(|e| e.to_string())?;
    parse_imgur_response(&body)
}
