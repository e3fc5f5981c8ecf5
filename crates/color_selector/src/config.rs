use std::path::Path;

use anyhow::{Context as _, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{Color, ColorMode};

/// How the triangle indicator of the wheel is positioned.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorStrategy {
    /// Scan the triangle pixels for the closest saturation and lightness.
    #[default]
    Scan,
    /// Invert the barycentric mapping directly, sub-pixel accurate.
    ClosedForm,
}

/// Construction options of a [`crate::ColorSelector`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SelectorConfig {
    /// Show the RGB tab, default: true
    pub rgb_tab: bool,
    /// Show the HSL tab, default: true
    pub hsl_tab: bool,
    /// Show the CMYK tab, default: true
    pub cmyk_tab: bool,
    /// Show the hue wheel tab, default: true
    pub wheel_tab: bool,
    /// Show alpha controls on every tab, default: true
    pub alpha: bool,
    /// Show the color swatch button, default: true
    pub color_button: bool,
    /// Show the hex text field, default: true
    pub color_edit: bool,
    /// Color selected on creation, as hex text or a color name.
    #[schemars(with = "String")]
    pub initial_color: Color,
    pub wheel_indicator: IndicatorStrategy,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            rgb_tab: true,
            hsl_tab: true,
            cmyk_tab: true,
            wheel_tab: true,
            alpha: true,
            color_button: true,
            color_edit: true,
            initial_color: Color::BLACK,
            wheel_indicator: IndicatorStrategy::default(),
        }
    }
}

impl SelectorConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid color selector config")
    }

    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("failed to load {}", path.display()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize color selector config")
    }

    /// JSON schema of the config file.
    pub fn json_schema() -> serde_json::Value {
        schemars::schema_for!(SelectorConfig).to_value()
    }

    pub fn mode_enabled(&self, mode: ColorMode) -> bool {
        match mode {
            ColorMode::Rgb => self.rgb_tab,
            ColorMode::Hsl => self.hsl_tab,
            ColorMode::Cmyk => self.cmyk_tab,
            ColorMode::Wheel => self.wheel_tab,
        }
    }

    /// The enabled tabs in display order.
    ///
    /// A config without any tab still gets the RGB one.
    pub fn modes(&self) -> SmallVec<[ColorMode; 4]> {
        let modes: SmallVec<[ColorMode; 4]> = ColorMode::all()
            .filter(|mode| self.mode_enabled(*mode))
            .collect();

        if modes.is_empty() {
            tracing::warn!("color selector config enables no tab, falling back to RGB");
            return SmallVec::from_slice(&[ColorMode::Rgb]);
        }
        modes
    }
}
