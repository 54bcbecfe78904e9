//! Acceptance rules for image selections.
//!
//! A rejected selection must change no form state: no preview update, no
//! stored file. The two rejection messages are distinct on purpose.

/// Upper bound for an uploaded image, 5 MiB.
pub const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRejection {
    NotAnImage,
    TooLarge,
}

impl ImageRejection {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotAnImage => "Please select a valid image file",
            Self::TooLarge => "Image size should be less than 5MB",
        }
    }
}

/// Validate a freshly picked file by MIME type and size.
///
/// Size is `f64` because that is what `File::size()` hands the client.
pub fn check_image_selection(mime: &str, size_bytes: f64) -> Result<(), ImageRejection> {
    if !mime.starts_with("image/") {
        return Err(ImageRejection::NotAnImage);
    }
    if size_bytes > MAX_IMAGE_BYTES {
        return Err(ImageRejection::TooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_image_mime_is_rejected_first() {
        // A huge PDF still reports the MIME problem, not the size one.
        let err = check_image_selection("application/pdf", MAX_IMAGE_BYTES * 2.0).unwrap_err();
        assert_eq!(err, ImageRejection::NotAnImage);
        assert_eq!(err.message(), "Please select a valid image file");
    }

    #[test]
    fn oversize_image_is_rejected_with_distinct_message() {
        let err = check_image_selection("image/png", MAX_IMAGE_BYTES + 1.0).unwrap_err();
        assert_eq!(err, ImageRejection::TooLarge);
        assert_eq!(err.message(), "Image size should be less than 5MB");
    }

    #[test]
    fn image_at_exactly_the_limit_is_accepted() {
        assert!(check_image_selection("image/jpeg", MAX_IMAGE_BYTES).is_ok());
        assert!(check_image_selection("image/webp", 1024.0).is_ok());
    }
}
