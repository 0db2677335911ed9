use crate::app_error::AppResult;

/// Drops everything up to and including the last comma, e.g. a
/// `data:audio/mpeg;base64,` prefix added by browser APIs.
pub fn strip_data_url_prefix(input: &str) -> &str {
    match input.rfind(',') {
        Some(idx) => &input[idx + 1..],
        None => input,
    }
}

/// Decodes the payload with forgiving base64: whitespace is skipped and
/// missing padding is accepted. The bytes are not checked to be MP3.
pub fn decode_audio(base64_data: &str) -> AppResult<Vec<u8>> {
    let payload = strip_data_url_prefix(base64_data);
    let decoded = base64_simd::forgiving_decode_to_vec(payload.as_bytes())?;
    Ok(decoded)
}
