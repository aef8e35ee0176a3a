use crate::models::event::Attachment;
use crate::validation::result::{Field, ValidationFailure, ValidationResult};

pub const ALLOWED_IMAGE_CONTENT_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

pub fn is_allowed_image_content_type(content_type: &str) -> bool {
    ALLOWED_IMAGE_CONTENT_TYPES.contains(&content_type)
}

/// Checks the reported content type of an attached image. No image, no error.
pub fn event_image_should_have_valid_mime_type(
    image: Option<&dyn Attachment>,
    errors: &mut ValidationResult,
) {
    let Some(image) = image else {
        return;
    };

    let content_type = image.content_type();
    if !is_allowed_image_content_type(content_type) {
        errors.add(
            Field::EventImage,
            ValidationFailure::UnsupportedMimeType {
                actual: content_type.to_string(),
            },
        );
    }
}
