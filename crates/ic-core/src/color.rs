use serde::Serialize;

use crate::digest::Digest;

/// Couleur RGBA 8 bits par canal.
///
/// # Example
/// ```
/// use ic_core::color::Rgba;
/// let c = Rgba::opaque(10, 20, 30);
/// assert_eq!(c.a, 255);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Couleur pleinement opaque.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Canaux dans l'ordre mémoire RGBA.
    #[inline(always)]
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Notation `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fond gris clair commun à tous les identicons.
pub const BACKGROUND: Rgba = Rgba::opaque(240, 240, 240);

/// Remappe linéairement `value` de `[vmin, vmax]` vers `[dmin, dmax]`.
///
/// The denominator is `(vmax - vmin) + dmin`. Numerator and denominator are
/// computed in wrapping u32 arithmetic before the division. Every call site
/// uses `dmin == 0`.
///
/// # Example
/// ```
/// use ic_core::color::remap;
/// assert!((remap(255, 0, 255, 0, 20) - 20.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn remap(value: u32, vmin: u32, vmax: u32, dmin: u32, dmax: u32) -> f64 {
    let num = value.wrapping_sub(vmin).wrapping_mul(dmax.wrapping_sub(dmin));
    let den = vmax.wrapping_sub(vmin).wrapping_add(dmin);
    f64::from(num) / f64::from(den)
}

/// Convertit HSL → RGBA opaque. H en degrés, S et L en pourcentage.
///
/// # Example
/// ```
/// use ic_core::color::{hsl_to_rgba, Rgba};
/// assert_eq!(hsl_to_rgba(0.0, 100.0, 50.0), Rgba::opaque(255, 0, 0));
/// assert_eq!(hsl_to_rgba(120.0, 100.0, 50.0), Rgba::opaque(0, 255, 0));
/// ```
#[must_use]
pub fn hsl_to_rgba(h: f64, s: f64, l: f64) -> Rgba {
    let hue = h / 360.0;
    let sat = s / 100.0;
    let lum = l / 100.0;

    let b = if lum < 0.5 {
        lum * (sat + 1.0)
    } else {
        lum + sat - lum * sat
    };
    let a = lum * 2.0 - b;

    Rgba::opaque(
        to_channel(hue_to_rgb(a, b, hue + 1.0 / 3.0)),
        to_channel(hue_to_rgb(a, b, hue)),
        to_channel(hue_to_rgb(a, b, hue - 1.0 / 3.0)),
    )
}

/// Lookup linéaire par morceaux d'un canal, `hue` en fraction de tour.
///
/// A hue outside `[0, 1]` is wrapped once.
#[must_use]
pub fn hue_to_rgb(a: f64, b: f64, hue: f64) -> f64 {
    let h = if hue < 0.0 {
        hue + 1.0
    } else if hue > 1.0 {
        hue - 1.0
    } else {
        hue
    };

    if h < 1.0 / 6.0 {
        a + (b - a) * 6.0 * h
    } else if h < 1.0 / 2.0 {
        b
    } else if h < 2.0 / 3.0 {
        a + (b - a) * (2.0 / 3.0 - h) * 6.0
    } else {
        a
    }
}

#[inline(always)]
fn to_channel(v: f64) -> u8 {
    (255.0 * v).round().clamp(0.0, 255.0) as u8
}

/// Couleur de premier plan dérivée des 4 derniers octets du digest.
///
/// Hue seed: 12 bits (low nibble of byte 12, then byte 13), saturation seed
/// byte 14, lightness seed byte 15. Saturation lands in [45, 65], lightness
/// in [55, 75].
///
/// # Example
/// ```
/// use ic_core::{color::foreground, Digest, Rgba};
/// assert_eq!(foreground(&Digest::of(b"")), Rgba::opaque(205, 113, 219));
/// ```
#[must_use]
pub fn foreground(digest: &Digest) -> Rgba {
    let [hb, hl, sb, lb] = digest.color_bytes();
    let h = (u32::from(hb & 0x0f) << 8) | u32::from(hl);
    let s = u32::from(sb);
    let l = u32::from(lb);

    let hue = remap(h, 0, 4095, 0, 360);
    let sat = remap(s, 0, 255, 0, 20);
    let lum = remap(l, 0, 255, 0, 20);

    hsl_to_rgba(hue, 65.0 - sat, 75.0 - lum)
}
