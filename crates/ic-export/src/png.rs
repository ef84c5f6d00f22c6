use std::io::Cursor;

use ic_core::Canvas;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};

use crate::error::ExportError;

/// Encode le canvas en PNG RGBA8, sans perte.
///
/// # Errors
/// Returns an error if the buffer does not match the canvas dimensions or if
/// the encoder fails.
///
/// # Example
/// ```
/// use ic_export::encode_png;
/// let canvas = ic_render::render_image(b"", 1).unwrap();
/// let png = encode_png(&canvas).unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, ExportError> {
    let expected = canvas.width as usize * canvas.height as usize * 4;
    if canvas.width == 0 || canvas.height == 0 || canvas.data.len() != expected {
        return Err(ExportError::MalformedCanvas {
            width: canvas.width,
            height: canvas.height,
            len: canvas.data.len(),
        });
    }

    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            &canvas.data,
            canvas.width,
            canvas.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(ExportError::Encoding)?;
    Ok(out)
}

/// Décode un PNG vers un canvas RGBA8.
///
/// # Errors
/// Returns an error if `bytes` is not a decodable PNG.
pub fn decode_png(bytes: &[u8]) -> Result<Canvas, ExportError> {
    let img = image::load(Cursor::new(bytes), ImageFormat::Png).map_err(ExportError::Decoding)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Canvas {
        data: rgba.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ic_render::render_image;

    #[test]
    fn png_signature() {
        let png = encode_png(&render_image(b"sig", 2).unwrap()).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn decode_reproduces_canvas() {
        for (data, size) in [(&b""[..], 10), (&b"hello"[..], 1), (&b"identicon"[..], 7)] {
            let canvas = render_image(data, size).unwrap();
            let decoded = decode_png(&encode_png(&canvas).unwrap()).unwrap();
            assert_eq!(decoded, canvas);
        }
    }

    #[test]
    fn malformed_canvas_is_rejected() {
        let mut canvas = render_image(b"x", 2).unwrap();
        canvas.data.pop();
        assert!(matches!(
            encode_png(&canvas),
            Err(ExportError::MalformedCanvas { width: 12, height: 12, .. })
        ));
        assert!(matches!(
            encode_png(&Canvas::new(0, 0)),
            Err(ExportError::MalformedCanvas { .. })
        ));
    }

    #[test]
    fn garbage_is_not_a_png() {
        assert!(matches!(decode_png(b"not a png"), Err(ExportError::Decoding(_))));
    }
}
