//! `totp add-qrc` — import a QR code image into the database.

use std::path::Path;

use crate::cli::{qr, Cli};
use crate::errors::Result;

use super::add_url::add_from_url;

/// Execute the `add-qrc` command.
pub fn execute(cli: &Cli, image: &str) -> Result<()> {
    let url = qr::read_text_from_image(Path::new(image))?;
    add_from_url(cli, &url)
}
