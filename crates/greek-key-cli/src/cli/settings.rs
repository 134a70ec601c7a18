//! Pattern settings: YAML config files merged with command-line flags.
//!
//! Precedence is flags, then the config file, then the library defaults.
//!
//! ```yaml
//! file: border
//! stroke_width: 4.0
//! stroke_color: "32,64,128"
//! pattern:
//!   type: circle
//!   pattern_count: 12
//!   radius: 200
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use greek_key::{CircleConfig, KeyPattern, PatternKind, RectConfig, Style, min_outer_radius};

use super::args::CliArgs;

pub const DEFAULT_FILE: &str = "meander";

/// Contents of a `--config` YAML file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub stroke_width: Option<f64>,
    #[serde(default)]
    pub stroke_color: Option<String>,
    #[serde(default)]
    pub stroke_opacity: Option<f64>,
    #[serde(default)]
    pub border_margin: Option<f64>,
    #[serde(default)]
    pub pattern: Option<PatternSection>,
}

/// Type-specific section of a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
pub enum PatternSection {
    Rect {
        #[serde(default)]
        size: Option<f64>,
        #[serde(default)]
        width: Option<u32>,
        #[serde(default)]
        height: Option<u32>,
    },
    Circle {
        #[serde(default)]
        pattern_count: Option<u32>,
        #[serde(default)]
        radius: Option<f64>,
    },
}

impl PatternSection {
    pub fn kind(&self) -> PatternKind {
        match self {
            PatternSection::Rect { .. } => PatternKind::Rect,
            PatternSection::Circle { .. } => PatternKind::Circle,
        }
    }
}

impl SettingsFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pattern: KeyPattern,
    pub style: Style,
    pub file: String,
    pub json: bool,
    pub png: bool,
}

impl Settings {
    /// Merge flags over the config file over defaults, then validate.
    ///
    /// Returns `Ok(None)` when no pattern type was chosen anywhere.
    pub fn resolve(args: &CliArgs, file: &SettingsFile) -> Result<Option<Self>> {
        let Some(kind) = args.kind.or_else(|| file.pattern.as_ref().map(PatternSection::kind)) else {
            return Ok(None);
        };
        args.check_type_flags(kind)?;
        // A section for the other type contributes nothing.
        let section = file.pattern.as_ref().filter(|s| s.kind() == kind);

        let defaults = Style::default();
        let style = Style {
            stroke_width: args.stroke_width.or(file.stroke_width).unwrap_or(defaults.stroke_width),
            stroke_color: normalize_color(
                args.stroke_color
                    .as_deref()
                    .or(file.stroke_color.as_deref())
                    .unwrap_or(defaults.stroke_color.as_str()),
            ),
            stroke_opacity: args.stroke_opacity.or(file.stroke_opacity).unwrap_or(defaults.stroke_opacity),
        };
        style.validate()?;

        let pattern = match kind {
            PatternKind::Rect => {
                let (size, width, height) = match section {
                    Some(PatternSection::Rect { size, width, height }) => (*size, *width, *height),
                    _ => (None, None, None),
                };
                let defaults = RectConfig::default();
                let config = RectConfig {
                    key_unit_length: args.size.or(size).unwrap_or(defaults.key_unit_length),
                    width_units: args.width.or(width).unwrap_or(defaults.width_units),
                    height_units: args.height.or(height).unwrap_or(defaults.height_units),
                    border_margin: args.border_margin.or(file.border_margin).unwrap_or(defaults.border_margin),
                    stroke_width: style.stroke_width,
                };
                tracing::debug!(?config, "resolved rect settings");
                KeyPattern::rect(config)?
            }
            PatternKind::Circle => {
                let (pattern_count, radius) = match section {
                    Some(PatternSection::Circle { pattern_count, radius }) => (*pattern_count, *radius),
                    _ => (None, None),
                };
                let defaults = CircleConfig::default();
                let config = CircleConfig {
                    outer_radius: args.radius.or(radius).unwrap_or(defaults.outer_radius),
                    pattern_count: args.pattern_count.or(pattern_count).unwrap_or(defaults.pattern_count),
                    border_margin: args.border_margin.or(file.border_margin).unwrap_or(defaults.border_margin),
                    stroke_width: style.stroke_width,
                };
                tracing::debug!(?config, "resolved circle settings");
                let pattern = KeyPattern::circle(config.clone())?;

                let min = min_outer_radius(config.pattern_count, config.stroke_width);
                if config.outer_radius < min {
                    bail!(
                        "radius {} is too small for {} patterns at stroke width {}; use at least {:.1}",
                        config.outer_radius,
                        config.pattern_count,
                        config.stroke_width,
                        min
                    );
                }
                pattern
            }
        };

        Ok(Some(Self {
            pattern,
            style,
            file: args.file.clone().or_else(|| file.file.clone()).unwrap_or_else(|| DEFAULT_FILE.to_string()),
            json: args.json,
            png: !args.no_png,
        }))
    }
}

/// Accept `r,g,b` triples alongside SVG color names and hex codes.
pub fn normalize_color(color: &str) -> String {
    let parts: Vec<&str> = color.split(',').map(str::trim).collect();
    if parts.len() == 3 && parts.iter().all(|p| p.parse::<u8>().is_ok()) {
        format!("rgb({})", parts.join(","))
    } else {
        color.trim().to_string()
    }
}
