//! Destination classification for anchors and images.

/// Where an anchor points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorTarget {
    /// Site path starting with `/`, handled by client-side navigation.
    InternalPath,
    /// In-page fragment starting with `#`.
    Fragment,
    /// Anything else, opened in a new browsing context.
    External,
}

impl AnchorTarget {
    /// Classifies a link destination by prefix.
    ///
    /// Protocol-relative URLs (`//host/path`) leave the site and are
    /// therefore external.
    pub fn classify(href: &str) -> Self {
        if href.starts_with("//") {
            AnchorTarget::External
        } else if href.starts_with('/') {
            AnchorTarget::InternalPath
        } else if href.starts_with('#') {
            AnchorTarget::Fragment
        } else {
            AnchorTarget::External
        }
    }
}

/// Where an image is loaded from.
///
/// Both sources receive the same dimensions and styling; the distinction is
/// only reported in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Remote,
    Local,
}

impl ImageSource {
    pub fn classify(src: &str) -> Self {
        if src.starts_with("http://") || src.starts_with("https://") {
            ImageSource::Remote
        } else {
            ImageSource::Local
        }
    }
}
