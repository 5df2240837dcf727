//! Playable source selection for the video modal.

/// What the video modal should play, chosen fresh for every invocation.
///
/// A remote URL always wins over an uploaded file; with neither present the
/// source is [`VideoSource::Unavailable`] and renders to empty markup.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoSource {
    /// A provider or generic URL to embed in an iframe
    Remote { url: String },

    /// An uploaded file path, with an optional poster image
    Local {
        file: String,
        preview: Option<String>,
    },

    /// Nothing playable
    Unavailable,
}

impl VideoSource {
    /// Build a source from the fields a video API payload carries.
    ///
    /// Empty strings count as absent, matching how the page treats blank
    /// model fields.
    pub fn from_parts(
        url: Option<String>,
        file: Option<String>,
        preview: Option<String>,
    ) -> Self {
        let url = url.filter(|u| !u.is_empty());
        let file = file.filter(|f| !f.is_empty());

        match (url, file) {
            (Some(url), _) => Self::Remote { url },
            (None, Some(file)) => Self::Local { file, preview },
            (None, None) => Self::Unavailable,
        }
    }

    /// Whether there is anything to play
    pub fn is_available(&self) -> bool {
        !matches!(self, Self::Unavailable)
    }
}
