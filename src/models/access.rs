//! Access tiers for gallery images.

use serde::{Deserialize, Serialize};

/// Visibility class of a gallery image.
///
/// Serialized with the server's wire names: `public`, `big` and `private`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessTier {
    #[default]
    #[serde(rename = "public")]
    Public,
    /// Reachable by direct link only; never listed by this client.
    #[serde(rename = "big")]
    Unlisted,
    #[serde(rename = "private")]
    Private,
}

impl AccessTier {
    /// Tiers offered as upload targets, in display order.
    pub const UPLOAD_TARGETS: [AccessTier; 3] =
        [AccessTier::Public, AccessTier::Unlisted, AccessTier::Private];

    /// Wire name of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Unlisted => "big",
            Self::Private => "private",
        }
    }

    /// Human readable label for forms.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Unlisted => "Unlisted",
            Self::Private => "Private",
        }
    }

    /// Parse a wire name back into a tier.
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::UPLOAD_TARGETS
            .into_iter()
            .find(|tier| tier.as_str() == value)
    }
}
