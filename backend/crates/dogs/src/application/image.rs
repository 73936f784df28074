//! Uploaded Image Handling

use chrono::Utc;

/// An image received with a create or update request
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original file name as sent by the client
    pub file_name: String,
    /// MIME type as sent by the client
    pub content_type: String,
    /// Raw image bytes
    pub bytes: Vec<u8>,
}

/// Build a storage key for an uploaded image
///
/// Prefixing the original file name with the upload instant keeps keys
/// unique across repeated uploads of the same file.
pub fn object_key(file_name: &str) -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key_keeps_file_name() {
        let key = object_key("rex.jpg");
        assert!(key.ends_with("-rex.jpg"));
    }

    #[test]
    fn test_object_key_has_numeric_prefix() {
        let key = object_key("rex.jpg");
        let (prefix, _) = key.split_once('-').unwrap();
        assert!(prefix.parse::<i64>().is_ok());
    }
}
