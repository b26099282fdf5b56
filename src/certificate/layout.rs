use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Which uploaded image an image placement takes its pixels from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSlot {
    ProfilePic,
    Signature,
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSlot::ProfilePic => f.write_str("profile_pic"),
            ImageSlot::Signature => f.write_str("signature"),
        }
    }
}

/// Which submitted text value a text placement draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Name,
    State,
    District,
    Field,
    MsmeReg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontRole {
    /// Decorative face used for the headline name.
    Script,
    Regular,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    Image {
        slot: ImageSlot,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    Text {
        field: TextField,
        x: i32,
        y: i32,
        font: FontRole,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub script_px: f32,
    pub regular_px: f32,
}

impl FontSizes {
    pub fn for_role(&self, role: FontRole) -> f32 {
        match role {
            FontRole::Script => self.script_px,
            FontRole::Regular => self.regular_px,
        }
    }
}

/// Placements for the bundled "Certificate Main.png" template, applied in order.
pub const DEFAULT_PLACEMENTS: &[Placement] = &[
    Placement::Image { slot: ImageSlot::ProfilePic, x: 200, y: 350, width: 150, height: 150 },
    Placement::Image { slot: ImageSlot::Signature, x: 483, y: 1051, width: 200, height: 80 },
    Placement::Text { field: TextField::Name, x: 552, y: 663, font: FontRole::Script },
    Placement::Text { field: TextField::State, x: 517, y: 834, font: FontRole::Regular },
    Placement::Text { field: TextField::District, x: 1027, y: 835, font: FontRole::Regular },
    Placement::Text { field: TextField::Field, x: 1288, y: 874, font: FontRole::Regular },
    Placement::Text { field: TextField::MsmeReg, x: 1572, y: 835, font: FontRole::Regular },
    // signatory line
    Placement::Text { field: TextField::Name, x: 404, y: 1133, font: FontRole::Regular },
];

pub const DEFAULT_FONT_SIZES: FontSizes = FontSizes {
    script_px: 60.0,
    regular_px: 30.0,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub font_sizes: FontSizes,
    pub placements: Vec<Placement>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            font_sizes: DEFAULT_FONT_SIZES,
            placements: DEFAULT_PLACEMENTS.to_vec(),
        }
    }
}

impl Layout {
    pub fn from_json_file(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read layout {}: {}", path.display(), e))?;
        let layout: Layout = serde_json::from_str(&raw)
            .map_err(|e| format!("invalid layout {}: {}", path.display(), e))?;
        Ok(layout)
    }
}
