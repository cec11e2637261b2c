use crate::foundation::core::Rgba8;

/// Visual mode the transition is heading to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    #[serde(rename = "toRetro")]
    ToRetro,
    #[serde(rename = "toStandard")]
    ToStandard,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToRetro => "toRetro",
            Self::ToStandard => "toStandard",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = crate::foundation::error::GargantaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toretro" | "to_retro" | "to-retro" | "retro" => Ok(Self::ToRetro),
            "tostandard" | "to_standard" | "to-standard" | "standard" => Ok(Self::ToStandard),
            other => Err(crate::foundation::error::GargantaError::validation(format!(
                "unknown direction '{other}'"
            ))),
        }
    }
}

/// Per-direction colour theme and label copy.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    pub label_text: String,
    pub label_color: Rgba8,
    pub glow_color: Rgba8,
    pub spark_color: Rgba8,
    pub void_color: Rgba8,
}

impl Palette {
    pub fn to_retro() -> Self {
        Self {
            label_text: "ENTRER DANS L'ANOMALIE".to_string(),
            label_color: Rgba8::rgb(0x4a, 0xf6, 0x26),
            glow_color: Rgba8::rgba(0, 255, 255, 153),
            spark_color: Rgba8::rgb(0, 255, 255),
            void_color: Rgba8::BLACK,
        }
    }

    pub fn to_standard() -> Self {
        Self {
            label_text: "SORTIR DE L'ANOMALIE".to_string(),
            label_color: Rgba8::rgb(0xea, 0xea, 0xea),
            glow_color: Rgba8::rgba(44, 44, 255, 204),
            spark_color: Rgba8::rgb(0x2c, 0x2c, 0xff),
            void_color: Rgba8::BLACK,
        }
    }
}

/// Palettes for both directions.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palettes {
    #[serde(rename = "toRetro", default = "Palette::to_retro")]
    pub to_retro: Palette,
    #[serde(rename = "toStandard", default = "Palette::to_standard")]
    pub to_standard: Palette,
}

impl Palettes {
    pub fn for_direction(&self, direction: Direction) -> &Palette {
        match direction {
            Direction::ToRetro => &self.to_retro,
            Direction::ToStandard => &self.to_standard,
        }
    }
}

impl Default for Palettes {
    fn default() -> Self {
        Self {
            to_retro: Palette::to_retro(),
            to_standard: Palette::to_standard(),
        }
    }
}
