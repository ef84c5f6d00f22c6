use std::fmt;

use md5::{Digest as _, Md5};
use serde::{Serialize, Serializer};

/// Longueur fixe du digest en octets.
pub const DIGEST_LEN: usize = 16;

/// Empreinte MD5 de l'entrée. Seule source de déterminisme du pipeline.
///
/// # Example
/// ```
/// use ic_core::digest::Digest;
/// let d = Digest::of(b"");
/// assert_eq!(d.to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Hash `data` with MD5. Total over all inputs, empty included.
    #[must_use]
    pub fn of(data: &[u8]) -> Self {
        let hash = Md5::digest(data);
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&hash);
        Self(bytes)
    }

    /// Wrap an already computed 16-byte digest.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Les 8 premiers octets, consommés par le motif.
    #[must_use]
    pub fn pattern_bytes(&self) -> [u8; 8] {
        std::array::from_fn(|i| self.0[i])
    }

    /// Les 4 derniers octets, consommés par la couleur.
    ///
    /// Only the low nibble of the first one is significant.
    #[must_use]
    pub const fn color_bytes(&self) -> [u8; 4] {
        [self.0[12], self.0[13], self.0[14], self.0[15]]
    }

    /// Lowercase hex rendering, 32 characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_md5_vectors() {
        assert_eq!(Digest::of(b"").to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(
            Digest::of(b"hello").to_hex(),
            "5d41402abc4b2a76b9719d911017c592"
        );
    }

    #[test]
    fn deterministic() {
        assert_eq!(Digest::of(b"identicon"), Digest::of(b"identicon"));
        assert_ne!(Digest::of(b"identicon"), Digest::of(b"identicoN"));
    }

    #[test]
    fn byte_slices() {
        let raw: [u8; 16] = std::array::from_fn(|i| i as u8);
        let d = Digest::from_bytes(raw);
        assert_eq!(d.pattern_bytes(), [0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(d.color_bytes(), [12, 13, 14, 15]);
        assert_eq!(format!("{d:?}"), "Digest(000102030405060708090a0b0c0d0e0f)");
    }
}
