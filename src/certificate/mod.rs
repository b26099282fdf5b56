mod draw;
mod error;
mod fonts;
mod layout;

pub use error::ComposeError;
pub use layout::{ImageSlot, Layout, Placement, TextField};

use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use tracing::debug;

use crate::config::ComposerConfig;
use fonts::FontSet;

/// One form submission: five text values and the raw bytes of two uploads.
#[derive(Debug, Clone)]
pub struct Submission {
    pub name: String,
    pub state: String,
    pub district: String,
    pub field: String,
    pub msme_reg: String,
    pub profile_pic: Vec<u8>,
    pub signature: Vec<u8>,
}

impl Submission {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::State => &self.state,
            TextField::District => &self.district,
            TextField::Field => &self.field,
            TextField::MsmeReg => &self.msme_reg,
        }
    }

    pub fn image(&self, slot: ImageSlot) -> &[u8] {
        match slot {
            ImageSlot::ProfilePic => &self.profile_pic,
            ImageSlot::Signature => &self.signature,
        }
    }
}

/// Renders submissions onto the certificate template.
///
/// Holds only paths and the layout; the template and fonts are read again on
/// every call, so a single composer can be shared across threads.
pub struct Composer {
    config: ComposerConfig,
}

impl Composer {
    pub fn new(config: ComposerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Composites `submission` onto a fresh copy of the template and returns
    /// the PNG bytes.
    pub fn compose(&self, submission: &Submission) -> Result<Vec<u8>, ComposeError> {
        let canvas = self.render(submission)?;

        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(canvas)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .map_err(ComposeError::Encode)?;
        Ok(buf)
    }

    fn render(&self, submission: &Submission) -> Result<RgbaImage, ComposeError> {
        let mut canvas = self.load_template()?;
        let layout = &self.config.layout;

        let mut fonts = None;
        for placement in &layout.placements {
            match *placement {
                Placement::Image { slot, x, y, width, height } => {
                    let decoded = image::load_from_memory(submission.image(slot))
                        .map_err(|source| ComposeError::Upload { slot, source })?;
                    debug!(
                        "Placing {} ({}x{} -> {}x{}) at ({}, {})",
                        slot,
                        decoded.width(),
                        decoded.height(),
                        width,
                        height,
                        x,
                        y
                    );
                    draw::paste(&mut canvas, &draw::fit(&decoded, width, height), x, y);
                }
                Placement::Text { field, x, y, font } => {
                    let fonts = fonts.get_or_insert_with(|| {
                        FontSet::load(
                            &self.config.script_font_path,
                            &self.config.regular_font_path,
                            layout.font_sizes,
                        )
                    });
                    draw::draw_text(
                        &mut canvas,
                        fonts.face(font),
                        x,
                        y,
                        draw::INK,
                        submission.text(field),
                    );
                }
            }
        }

        Ok(canvas)
    }

    fn load_template(&self) -> Result<RgbaImage, ComposeError> {
        let path = &self.config.template_path;
        let template = image::open(path).map_err(|source| ComposeError::Template {
            path: path.clone(),
            source,
        })?;
        Ok(template.to_rgba8())
    }
}
