/*
MIT License

Copyright (c) 2025 Ritchie Mwewa

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Named style presets loaded from `~/.config/boxtree.toml` (or
//! `$XDG_CONFIG_HOME/boxtree.toml`). `--style` picks either one of the three
//! built-ins (`thin`/`thick`/`double`) or a preset name defined here.
//!
//! A missing or unparsable config file falls back silently to no presets at
//! all, so `--style` only ever resolves against the built-ins — mirroring
//! how a broken theme file falls back to the built-in Gruvbox theme.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, de};

use crate::color::{ColorRgb, parse_color};
use crate::style::{Style, TextAlignment, TreeAlignment};

fn deserialize_color<'de, D>(deserializer: D) -> Result<Option<ColorRgb>, D::Error>
where
    D: Deserializer<'de>,
{
    let name: Option<String> = Option::deserialize(deserializer)?;
    match name {
        None => Ok(None),
        Some(name) => parse_color(&name).map(Some).ok_or_else(|| de::Error::custom(format!("unrecognized color '{name}'"))),
    }
}

fn deserialize_text_align<'de, D>(deserializer: D) -> Result<Option<TextAlignment>, D::Error>
where
    D: Deserializer<'de>,
{
    let name: Option<String> = Option::deserialize(deserializer)?;
    match name.as_deref() {
        None => Ok(None),
        Some("none") => Ok(Some(TextAlignment::None)),
        Some("left") => Ok(Some(TextAlignment::Left)),
        Some("center") => Ok(Some(TextAlignment::Center)),
        Some("right") => Ok(Some(TextAlignment::Right)),
        Some(other) => Err(de::Error::custom(format!("unrecognized text alignment '{other}'"))),
    }
}

fn deserialize_tree_align<'de, D>(deserializer: D) -> Result<Option<TreeAlignment>, D::Error>
where
    D: Deserializer<'de>,
{
    let name: Option<String> = Option::deserialize(deserializer)?;
    match name.as_deref() {
        None => Ok(None),
        Some("none") => Ok(Some(TreeAlignment::None)),
        Some("left") => Ok(Some(TreeAlignment::Left)),
        Some("center") => Ok(Some(TreeAlignment::Center)),
        Some("right") => Ok(Some(TreeAlignment::Right)),
        Some(other) => Err(de::Error::custom(format!("unrecognized tree alignment '{other}'"))),
    }
}

/// One named style preset. Every field is optional; absent fields keep
/// whatever the base built-in style (`thin`, by convention) already has.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StylePreset {
    /// Glyph table to start from: `"thin"`, `"thick"`, or `"double"`.
    pub glyphs: Option<String>,

    #[serde(default, deserialize_with = "deserialize_color")]
    pub text_color: Option<ColorRgb>,
    #[serde(default, deserialize_with = "deserialize_color")]
    pub box_color: Option<ColorRgb>,
    #[serde(default, deserialize_with = "deserialize_color")]
    pub branch_color: Option<ColorRgb>,

    #[serde(default, deserialize_with = "deserialize_text_align")]
    pub text_align: Option<TextAlignment>,
    #[serde(default, deserialize_with = "deserialize_tree_align")]
    pub tree_align: Option<TreeAlignment>,

    pub sibling_margin: Option<i64>,
    pub level_margin: Option<i64>,
    pub horizontal_padding: Option<i64>,
    pub vertical_padding: Option<i64>,
    pub node_min_width: Option<i64>,
    pub node_min_height: Option<i64>,
}

impl StylePreset {
    /// Applies this preset's overrides on top of a base style, returning a
    /// new style. Fields left `None` pass the base value through unchanged.
    pub fn apply(&self, base: Style) -> Style {
        let glyph_base = match self.glyphs.as_deref() {
            Some("thick") => Style::thick(),
            Some("double") => Style::double(),
            _ => base,
        };

        Style {
            text_color: self.text_color.unwrap_or(glyph_base.text_color),
            box_color: self.box_color.unwrap_or(glyph_base.box_color),
            branch_color: self.branch_color.unwrap_or(glyph_base.branch_color),
            text_align: self.text_align.unwrap_or(glyph_base.text_align),
            tree_align: self.tree_align.unwrap_or(glyph_base.tree_align),
            sibling_margin: self.sibling_margin.unwrap_or(glyph_base.sibling_margin),
            level_margin: self.level_margin.unwrap_or(glyph_base.level_margin),
            node_horizontal_padding: self.horizontal_padding.unwrap_or(glyph_base.node_horizontal_padding),
            node_vertical_padding: self.vertical_padding.unwrap_or(glyph_base.node_vertical_padding),
            node_minimum_width: self.node_min_width.unwrap_or(glyph_base.node_minimum_width),
            node_minimum_height: self.node_min_height.unwrap_or(glyph_base.node_minimum_height),
            ..glyph_base
        }
    }
}

/// The full set of presets found in the config file, keyed by name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Config {
    presets: HashMap<String, StylePreset>,
}

impl Config {
    pub fn get(&self, name: &str) -> Option<&StylePreset> {
        self.presets.get(name)
    }
}

/// Loads `~/.config/boxtree.toml` (or `$XDG_CONFIG_HOME/boxtree.toml`), or
/// returns an empty config on any I/O or parse error.
pub fn load_config() -> Config {
    read_config().unwrap_or_default()
}

fn read_config() -> Result<Config, Box<dyn std::error::Error>> {
    let path = config_path()?;
    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

fn config_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .ok_or("could not find config directory")?;
    Ok(config_dir.join("boxtree.toml"))
}

/// Resolves `--style <name>` against the three built-ins, then against the
/// loaded config's presets. Returns `None` for an unrecognized name.
pub fn resolve_style(name: &str, config: &Config) -> Option<Style> {
    match name {
        "thin" => Some(Style::thin()),
        "thick" => Some(Style::thick()),
        "double" => Some(Style::double()),
        other => config.get(other).map(|preset| preset.apply(Style::thin())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_names_resolve_without_a_config() {
        let config = Config::default();
        assert_eq!(resolve_style("thin", &config), Some(Style::thin()));
        assert_eq!(resolve_style("thick", &config), Some(Style::thick()));
        assert_eq!(resolve_style("double", &config), Some(Style::double()));
    }

    #[test]
    fn unknown_name_resolves_to_none() {
        let config = Config::default();
        assert_eq!(resolve_style("nonexistent", &config), None);
    }

    #[test]
    fn preset_overrides_only_the_named_fields() {
        let toml_content = r#"
            [warm]
            text_color = "red"
            sibling_margin = 5
        "#;
        let config: Config = toml::from_str(toml_content).unwrap();
        let style = resolve_style("warm", &config).unwrap();
        assert_eq!(style.text_color, ColorRgb::RED);
        assert_eq!(style.sibling_margin, 5);
        assert_eq!(style.level_margin, Style::thin().level_margin);
    }

    #[test]
    fn preset_can_switch_the_glyph_table() {
        let toml_content = r#"
            [bold]
            glyphs = "thick"
        "#;
        let config: Config = toml::from_str(toml_content).unwrap();
        let style = resolve_style("bold", &config).unwrap();
        assert_eq!(style.box_horizontal_line, Style::thick().box_horizontal_line);
    }

    #[test]
    fn invalid_colour_name_is_rejected_at_parse_time() {
        let toml_content = r#"
            [broken]
            text_color = "not-a-color"
        "#;
        let result: Result<Config, _> = toml::from_str(toml_content);
        assert!(result.is_err());
    }

    /// Exercises the same read-then-parse path `read_config` takes, against
    /// a real file on disk rather than an inline string, without touching
    /// process-wide env vars (which `#[test]`s run concurrently and would
    /// race on).
    #[test]
    fn a_preset_file_written_to_disk_round_trips_through_toml_from_str() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boxtree.toml");
        fs::write(
            &path,
            r#"
                [warm]
                text_color = "red"
                sibling_margin = 5
            "#,
        )
        .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let config: Config = toml::from_str(&contents).unwrap();
        let style = resolve_style("warm", &config).unwrap();
        assert_eq!(style.text_color, ColorRgb::RED);
        assert_eq!(style.sibling_margin, 5);
    }

    #[test]
    fn a_missing_preset_file_is_a_plain_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");
        assert!(fs::read_to_string(&path).is_err());
    }
}
