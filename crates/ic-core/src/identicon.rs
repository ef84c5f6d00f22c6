use serde::Serialize;

use crate::color::{Rgba, foreground};
use crate::digest::Digest;
use crate::pattern::BitMatrix;

/// Dérivation complète d'un identicon, avant rasterisation.
///
/// Both derivers read the same digest independently.
///
/// # Example
/// ```
/// use ic_core::{Identicon, Rgba};
/// let icon = Identicon::from_data(b"");
/// assert_eq!(icon.color, Rgba::opaque(205, 113, 219));
/// assert!(icon.matrix.is_symmetric());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Identicon {
    pub digest: Digest,
    pub color: Rgba,
    pub matrix: BitMatrix,
}

impl Identicon {
    /// Hash `data`, then derive color and pattern.
    #[must_use]
    pub fn from_data(data: &[u8]) -> Self {
        Self::from_digest(Digest::of(data))
    }

    #[must_use]
    pub fn from_digest(digest: Digest) -> Self {
        Self {
            digest,
            color: foreground(&digest),
            matrix: BitMatrix::from_digest(&digest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_input_same_identicon() {
        assert_eq!(Identicon::from_data(b"abc"), Identicon::from_data(b"abc"));
    }

    #[test]
    fn derivers_share_digest() {
        let icon = Identicon::from_data(b"hello");
        assert_eq!(icon.digest, Digest::of(b"hello"));
        assert_eq!(icon.color, foreground(&icon.digest));
        assert_eq!(icon.matrix, BitMatrix::from_digest(&icon.digest));
    }
}
