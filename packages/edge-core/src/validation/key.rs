use crate::errors::ValidationError;

/// URI からオブジェクトキーを導出する
///
/// パーセントデコード後、先頭スラッシュを除去し、連続スラッシュを
/// 1つに畳み込む。`..` セグメントや空のキーは拒否する。
pub fn derive_object_key(uri: &str) -> Result<String, ValidationError> {
    let decoded = urlencoding::decode(uri).map_err(|_| ValidationError::Encoding)?;

    if decoded.contains('\\') {
        return Err(ValidationError::Traversal);
    }

    let mut segments = Vec::new();
    for segment in decoded.split('/') {
        // 先頭・連続・末尾スラッシュによる空セグメントを畳み込む
        if segment.is_empty() {
            continue;
        }
        if segment == ".." {
            return Err(ValidationError::Traversal);
        }
        segments.push(segment);
    }

    if segments.is_empty() {
        return Err(ValidationError::EmptyKey);
    }

    Ok(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_slash() {
        assert_eq!(derive_object_key("/photo.jpg").unwrap(), "photo.jpg");
        assert_eq!(
            derive_object_key("/2024/01/photo.webp").unwrap(),
            "2024/01/photo.webp"
        );
    }

    #[test]
    fn test_collapses_doubled_slashes() {
        assert_eq!(derive_object_key("//a///b.png").unwrap(), "a/b.png");
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(
            derive_object_key("/folder/my%20photo.jpg").unwrap(),
            "folder/my photo.jpg"
        );
    }

    #[test]
    fn test_rejects_traversal() {
        assert_eq!(
            derive_object_key("/../etc/passwd"),
            Err(ValidationError::Traversal)
        );
        assert_eq!(
            derive_object_key("/a/../secret.png"),
            Err(ValidationError::Traversal)
        );
        // エンコードされたトラバーサルも拒否
        assert_eq!(
            derive_object_key("/%2e%2e/etc/passwd"),
            Err(ValidationError::Traversal)
        );
        assert_eq!(
            derive_object_key("/a\\b.png"),
            Err(ValidationError::Traversal)
        );
    }

    #[test]
    fn test_rejects_empty_key() {
        assert_eq!(derive_object_key(""), Err(ValidationError::EmptyKey));
        assert_eq!(derive_object_key("/"), Err(ValidationError::EmptyKey));
        assert_eq!(derive_object_key("///"), Err(ValidationError::EmptyKey));
    }
}
