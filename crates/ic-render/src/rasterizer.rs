use ic_core::{BACKGROUND, Canvas, CoreError, Identicon};

/// Côté du canvas en cellules : 5 actives plus une demi-cellule de marge de chaque côté.
pub const GRID_CELLS: u32 = 6;

/// Vérifie la précondition sur la taille de cellule.
///
/// # Errors
/// Returns [`CoreError::InvalidCellSize`] when `cell_size` is 0, or when the
/// side (`6 × cell_size`) or the RGBA buffer length overflows.
///
/// # Example
/// ```
/// use ic_render::validate_cell_size;
/// assert!(validate_cell_size(1).is_ok());
/// assert!(validate_cell_size(600).is_ok());
/// assert!(validate_cell_size(0).is_err());
/// ```
pub fn validate_cell_size(cell_size: u32) -> Result<u32, CoreError> {
    let buffer_len = GRID_CELLS
        .checked_mul(cell_size)
        .and_then(|side| usize::try_from(side).ok())
        .and_then(|side| side.checked_mul(side))
        .and_then(|pixels| pixels.checked_mul(4));

    match buffer_len {
        Some(len) if len > 0 => Ok(cell_size),
        _ => Err(CoreError::InvalidCellSize { size: cell_size }),
    }
}

/// Largeur (et hauteur) du canvas pour une taille de cellule donnée.
#[must_use]
pub const fn canvas_side(cell_size: u32) -> u32 {
    GRID_CELLS * cell_size
}

/// Peint un identicon déjà dérivé.
///
/// Fond uni, puis un carré `cell_size`×`cell_size` par cellule allumée, à
/// `(cell_size / 2 + col * cell_size, cell_size / 2 + row * cell_size)`.
///
/// # Errors
/// Returns an error if `cell_size` is out of range.
///
/// # Example
/// ```
/// use ic_core::Identicon;
/// use ic_render::rasterize;
/// let canvas = rasterize(&Identicon::from_data(b"abc"), 4).unwrap();
/// assert_eq!((canvas.width, canvas.height), (24, 24));
/// ```
pub fn rasterize(icon: &Identicon, cell_size: u32) -> Result<Canvas, CoreError> {
    let cell_size = validate_cell_size(cell_size)?;
    let side = canvas_side(cell_size);
    let margin = cell_size / 2;

    let mut canvas = Canvas::new(side, side);
    canvas.fill(BACKGROUND);

    for (row, col) in icon.matrix.on_cells() {
        let x = margin + col as u32 * cell_size;
        let y = margin + row as u32 * cell_size;
        canvas.fill_rect(x, y, cell_size, cell_size, icon.color);
    }

    log::debug!(
        "identicon {} rendu en {side}×{side} ({} cellules, couleur {})",
        icon.digest,
        icon.matrix.count_on(),
        icon.color.to_hex()
    );
    Ok(canvas)
}

/// Pipeline complet : hash, dérivation, rasterisation.
///
/// # Errors
/// Returns an error if `cell_size` is out of range.
///
/// # Example
/// ```
/// use ic_render::render_image;
/// let canvas = render_image(b"", 10).unwrap();
/// assert_eq!((canvas.width, canvas.height), (60, 60));
/// ```
pub fn render_image(data: &[u8], cell_size: u32) -> Result<Canvas, CoreError> {
    rasterize(&Identicon::from_data(data), cell_size)
}
