//! Content classification for response bodies.

/// Content classification derived from the requested path's suffix.
///
/// The classification only selects the `Content-Type` value for a 200
/// response; it never verifies that the body actually matches the claimed
/// type. Suffix matching is case-sensitive, so `photo.JPG` falls through to
/// `Html`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// `.jpg` or `.jpeg`
    Jpeg,
    /// `.gif`
    Gif,
    /// `.ico`
    Icon,
    /// `.zip`
    Zip,
    /// Anything else
    Html,
}

impl ContentKind {
    /// Classify a path by its suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// use wheelhttp_rs::ContentKind;
    ///
    /// assert_eq!(ContentKind::classify("photo.jpg"), ContentKind::Jpeg);
    /// assert_eq!(ContentKind::classify("photo.JPG"), ContentKind::Html);
    /// ```
    pub fn classify(path: &str) -> Self {
        if path.ends_with(".jpg") || path.ends_with(".jpeg") {
            ContentKind::Jpeg
        } else if path.ends_with(".gif") {
            ContentKind::Gif
        } else if path.ends_with(".ico") {
            ContentKind::Icon
        } else if path.ends_with(".zip") {
            ContentKind::Zip
        } else {
            ContentKind::Html
        }
    }

    /// The `Content-Type` value for this classification.
    ///
    /// The `Icon` and `Zip` spellings are deliberate and must not be
    /// swapped for their registered equivalents.
    pub fn mime(&self) -> &'static str {
        match self {
            ContentKind::Jpeg => "image/jpeg",
            ContentKind::Gif => "image/gif",
            ContentKind::Icon => "image/icon",
            ContentKind::Zip => "application/zip-compressed",
            ContentKind::Html => "text/html",
        }
    }
}
