use serde::Serialize;

use crate::digest::Digest;

/// Côté de la grille.
pub const GRID: usize = 5;

/// Colonne centrale, axe du miroir.
const CENTER: usize = GRID / 2;

/// Grille 5×5 row-major, symétrique gauche-droite.
///
/// Invariant: `get(r, c) == get(r, 4 - c)` for every cell.
///
/// # Example
/// ```
/// use ic_core::{BitMatrix, Digest};
/// let m = BitMatrix::from_digest(&Digest::of(b"hello"));
/// assert!(m.is_symmetric());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct BitMatrix([[bool; GRID]; GRID]);

impl BitMatrix {
    /// Dérive la grille des 8 premiers octets du digest.
    ///
    /// Each byte yields two bits, high nibble first; a bit is on when the
    /// nibble is even. The 16-bit sequence fills the 5×3 source block one
    /// column offset at a time (index `j * 5 + row`), and each source bit is
    /// written at columns `2 + j` and `2 - j`. The last bit is never read.
    #[must_use]
    pub fn from_digest(digest: &Digest) -> Self {
        let bytes = digest.pattern_bytes();

        let mut bits = [false; 16];
        for (i, byte) in bytes.iter().enumerate() {
            bits[i * 2] = (byte >> 4) & 1 == 0;
            bits[i * 2 + 1] = byte & 1 == 0;
        }

        let mut cells = [[false; GRID]; GRID];
        for j in 0..=CENTER {
            for (row, line) in cells.iter_mut().enumerate() {
                let on = bits[j * GRID + row];
                line[CENTER + j] = on;
                line[CENTER - j] = on;
            }
        }
        Self(cells)
    }

    /// Cellule (ligne, colonne).
    #[inline(always)]
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> bool {
        self.0[row][col]
    }

    #[must_use]
    pub const fn rows(&self) -> &[[bool; GRID]; GRID] {
        &self.0
    }

    /// Itère sur les cellules allumées en `(row, col)`.
    pub fn on_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter(|(_, on)| **on)
                .map(move |(col, _)| (row, col))
        })
    }

    #[must_use]
    pub fn count_on(&self) -> usize {
        self.on_cells().count()
    }

    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.0
            .iter()
            .all(|line| (0..=CENTER).all(|i| line[i] == line[GRID - 1 - i]))
    }

    /// Rendu texte, une ligne par rangée.
    ///
    /// # Example
    /// ```
    /// use ic_core::{BitMatrix, Digest};
    /// let m = BitMatrix::from_digest(&Digest::of(b""));
    /// assert_eq!(m.to_ascii('#', '.').lines().next(), Some("##.##"));
    /// ```
    #[must_use]
    pub fn to_ascii(&self, on: char, off: char) -> String {
        self.0
            .iter()
            .map(|line| {
                line.iter()
                    .map(|&cell| if cell { on } else { off })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii(m: &BitMatrix) -> Vec<String> {
        m.to_ascii('#', '.').lines().map(str::to_owned).collect()
    }

    #[test]
    fn golden_empty_input() {
        let m = BitMatrix::from_digest(&Digest::of(b""));
        assert_eq!(ascii(&m), ["##.##", "#.#.#", ".....", "##.##", "#.#.#"]);
        assert_eq!(m.count_on(), 14);
    }

    #[test]
    fn golden_sequential_digest() {
        let raw: [u8; 16] = std::array::from_fn(|i| i as u8);
        let m = BitMatrix::from_digest(&Digest::from_bytes(raw));
        assert_eq!(ascii(&m), ["#####", ".###.", "#.#.#", "##.##", "#####"]);
    }

    #[test]
    fn center_column_reads_first_five_bits() {
        // 0x00 → on,on ; 0x11 → off,off ; 0x10 → off,on
        let mut raw = [0u8; 16];
        raw[0] = 0x00;
        raw[1] = 0x11;
        raw[2] = 0x10;
        let m = BitMatrix::from_digest(&Digest::from_bytes(raw));
        let center: Vec<bool> = (0..GRID).map(|r| m.get(r, CENTER)).collect();
        assert_eq!(center, [true, true, false, false, false]);
    }

    #[test]
    fn all_odd_nibbles_is_blank() {
        let m = BitMatrix::from_digest(&Digest::from_bytes([0x11; 16]));
        assert_eq!(m.count_on(), 0);
        let m = BitMatrix::from_digest(&Digest::from_bytes([0x00; 16]));
        assert_eq!(m.count_on(), 25);
    }

    #[test]
    fn symmetric_for_many_inputs() {
        for i in 0..512u32 {
            let m = BitMatrix::from_digest(&Digest::of(&i.to_le_bytes()));
            assert!(m.is_symmetric(), "asymmetric matrix for input {i}");
            for line in m.rows() {
                for c in 0..=CENTER {
                    assert_eq!(line[c], line[GRID - 1 - c]);
                }
            }
        }
    }

    #[test]
    fn only_head_bytes_matter() {
        let base = Digest::of(b"pattern");
        let mut raw = *base.as_bytes();
        for byte in &mut raw[8..] {
            *byte = !*byte;
        }
        assert_eq!(
            BitMatrix::from_digest(&base),
            BitMatrix::from_digest(&Digest::from_bytes(raw))
        );
    }

    #[test]
    fn unused_sixteenth_bit() {
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        a[7] = 0x00;
        b[7] = 0x01;
        assert_eq!(
            BitMatrix::from_digest(&Digest::from_bytes(a)),
            BitMatrix::from_digest(&Digest::from_bytes(b))
        );
    }
}
