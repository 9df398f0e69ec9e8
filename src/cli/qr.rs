//! Reading an otpauth URL out of a QR code image (PNG or JPEG).

use std::path::Path;

use image::GrayImage;

use crate::errors::{Result, TotpVaultError};

/// Open the image at `path` and return the text of the first QR code in it.
pub fn read_text_from_image(path: &Path) -> Result<String> {
    let img = image::open(path)
        .map_err(|e| TotpVaultError::QrDecode(format!("error decoding image: {e}")))?
        .to_luma8();
    decode_first(&img)
}

/// Return the text of the first decodable QR code in a greyscale image.
pub fn decode_first(img: &GrayImage) -> Result<String> {
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        img.width() as usize,
        img.height() as usize,
        |x, y| img.get_pixel(x as u32, y as u32).0[0],
    );

    let grids = prepared.detect_grids();
    if grids.is_empty() {
        return Err(TotpVaultError::QrDecode("no QR code found in image".into()));
    }

    let mut last_err = None;
    for grid in &grids {
        match grid.decode() {
            Ok((_meta, content)) => return Ok(content),
            Err(e) => last_err = Some(e),
        }
    }

    Err(TotpVaultError::QrDecode(format!(
        "error decoding QR code: {}",
        last_err.map(|e| e.to_string()).unwrap_or_default()
    )))
}
