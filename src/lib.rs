mod blank;
mod css;
mod error;
mod package;
mod settings;
mod template;
pub mod units;

pub use blank::{blank_document, blank_document_decode_count};
pub use css::clean_up_css;
pub use error::Error;
pub use settings::{ConverterSettings, FontDefaults, LineRule, PageGeometry, SpacingDescriptor};
pub use template::{default_settings, settings_from_template, settings_from_template_with};
pub use units::{
    EMUS_PER_INCH, Emu, Point, SizeEmu, Twip, UnitValue, points_to_emus, twips_to_emus,
};

use std::path::Path;

/// Read a template from disk and resolve its settings.
pub fn settings_from_template_file(
    path: &Path,
    font_defaults: FontDefaults,
) -> Result<ConverterSettings, Error> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => Error::Io(
            std::io::Error::new(e.kind(), format!("{}: {}", e, path.display())),
        ),
        _ => Error::Io(e),
    })?;
    settings_from_template_with(&bytes, font_defaults)
}
