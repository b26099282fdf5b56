use rusttype::Font;
use std::path::Path;
use tracing::warn;

use super::layout::{FontRole, FontSizes};

/// A face ready to draw at one pixel size.
#[derive(Clone)]
pub enum Typeface {
    Outline { font: Font<'static>, px: f32 },
    /// 8x8 bitmap font compiled into the binary; ignores the requested size.
    Builtin,
}

pub struct FontSet {
    script: Typeface,
    regular: Typeface,
}

impl FontSet {
    /// Loads both faces. A failure on either one drops both roles to the
    /// builtin font so the certificate never mixes a real face with the fallback.
    pub fn load(script_path: &Path, regular_path: &Path, sizes: FontSizes) -> Self {
        let loaded = load_font(script_path).and_then(|script| {
            load_font(regular_path).map(|regular| (script, regular))
        });

        match loaded {
            Ok((script, regular)) => Self {
                script: Typeface::Outline {
                    font: script,
                    px: sizes.for_role(FontRole::Script),
                },
                regular: Typeface::Outline {
                    font: regular,
                    px: sizes.for_role(FontRole::Regular),
                },
            },
            Err(e) => {
                warn!("Error loading fonts: {}; using builtin font", e);
                Self::builtin()
            }
        }
    }

    pub fn builtin() -> Self {
        Self {
            script: Typeface::Builtin,
            regular: Typeface::Builtin,
        }
    }

    pub fn face(&self, role: FontRole) -> &Typeface {
        match role {
            FontRole::Script => &self.script,
            FontRole::Regular => &self.regular,
        }
    }
}

fn load_font(path: &Path) -> Result<Font<'static>, String> {
    let bytes =
        std::fs::read(path).map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    Font::try_from_vec(bytes).ok_or_else(|| format!("{} is not a valid font", path.display()))
}
