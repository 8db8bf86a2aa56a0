//! Image file naming convention
//!
//! Uploads are stored as one original plus resized renditions that share a
//! base name: `{base}.{ext}`, `{base}_thumb.webp`, `{base}_medium.webp` and
//! `{base}_full.webp`. Orphan detection compares base names, so the same
//! rule has to be applied to stored file names and to recorded image URLs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resized rendition encoded in an image file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageVariant {
    Original,
    Thumb,
    Medium,
    Full,
}

impl ImageVariant {
    /// Variants that carry a suffix, in the order they are checked
    pub const RESIZED: [Self; 3] = [Self::Thumb, Self::Medium, Self::Full];

    /// File name suffix for this variant (empty for the original)
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Original => "",
            Self::Thumb => "_thumb",
            Self::Medium => "_medium",
            Self::Full => "_full",
        }
    }
}

impl fmt::Display for ImageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => write!(f, "original"),
            Self::Thumb => write!(f, "thumb"),
            Self::Medium => write!(f, "medium"),
            Self::Full => write!(f, "full"),
        }
    }
}

/// A file name split into base name, variant and extension
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageName {
    pub base: String,
    pub variant: ImageVariant,
    pub extension: Option<String>,
}

impl ImageName {
    /// Split a file name into its parts.
    ///
    /// The extension is whatever follows the last `.`, unless that dot is the
    /// first character (dotfiles have no extension). A trailing `_thumb`,
    /// `_medium` or `_full` on the remaining stem selects the variant, as
    /// long as something is left in front of it.
    #[must_use]
    pub fn parse(file_name: &str) -> Self {
        let (stem, extension) = match file_name.rfind('.') {
            Some(idx) if idx > 0 => (
                &file_name[..idx],
                Some(file_name[idx + 1..].to_string()),
            ),
            _ => (file_name, None),
        };

        for variant in ImageVariant::RESIZED {
            if let Some(base) = stem.strip_suffix(variant.suffix()) {
                if !base.is_empty() {
                    return Self {
                        base: base.to_string(),
                        variant,
                        extension,
                    };
                }
            }
        }

        Self {
            base: stem.to_string(),
            variant: ImageVariant::Original,
            extension,
        }
    }

    /// Render the file name of a rendition of this image
    #[must_use]
    pub fn variant_file_name(&self, variant: ImageVariant, extension: &str) -> String {
        format!("{}{}.{extension}", self.base, variant.suffix())
    }
}

impl fmt::Display for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.variant.suffix())?;
        if let Some(ext) = &self.extension {
            write!(f, ".{ext}")?;
        }
        Ok(())
    }
}

/// Derive the image base name referenced by an image URL.
///
/// Only the trailing path segment matters; query strings and fragments
/// (cache busters, resize parameters) are ignored.
#[must_use]
pub fn base_name_from_url(url: &str) -> String {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let without_query = without_fragment
        .split('?')
        .next()
        .unwrap_or(without_fragment);
    let segment = without_query
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(without_query);
    ImageName::parse(segment).base
}
