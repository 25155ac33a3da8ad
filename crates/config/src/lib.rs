pub mod schema;

pub use schema::{
    Align, ColorConfig, ColorSpec, Dim, Orientation, Overflow, Placement, StyleConfig, TextConfig,
    MAX_OFFSET, MAX_WIDTH,
};

use obar_core::{BarError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "obar";
pub const CONFIG_FILENAME: &str = "styles.toml";
pub const DEFAULT_STYLE: &str = "default";
pub const SYSTEM_CONFIG_DIR: &str = "/etc";

/// Load style `style` from a TOML style file.  Returns `StyleConfig::default()`
/// if the file doesn't exist so the bar always has sensible defaults.
pub fn load(path: impl AsRef<Path>, style: &str) -> Result<StyleConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(StyleConfig::default());
    }

    tracing::info!("reading configuration from {}", path.display());
    let raw = std::fs::read_to_string(path)
        .map_err(|e| BarError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw, style)
}

/// Pick style `style` out of a style file and validate it.
pub fn parse(raw: &str, style: &str) -> Result<StyleConfig> {
    let mut styles: HashMap<String, StyleConfig> =
        toml::from_str(raw).map_err(|e| BarError::Config(format!("TOML parse error: {e}")))?;

    let config = styles
        .remove(style)
        .ok_or_else(|| BarError::Config(format!("no style named '{style}'")))?;
    config.validate()?;
    Ok(config)
}

/// First existing style file in discovery order, if any.
pub fn discover(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit.filter(|p| !p.exists()) {
        tracing::error!("could not open configuration file '{}'", path.display());
        tracing::info!("falling back to standard configuration files");
    }

    let xdg = std::env::var("XDG_CONFIG_HOME").ok();
    let home = std::env::var("HOME").ok();
    candidate_paths(explicit, xdg.as_deref(), home.as_deref())
        .into_iter()
        .find(|p| p.exists())
}

/// Style file locations, most specific first: the explicit path, then
/// `$XDG_CONFIG_HOME`, then `$HOME/.config`, then the system directory.
pub fn candidate_paths(explicit: Option<&Path>, xdg: Option<&str>, home: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
    }
    if let Some(xdg) = xdg.filter(|s| !s.is_empty()) {
        paths.push(PathBuf::from(xdg).join(APP_NAME).join(CONFIG_FILENAME));
    }
    if let Some(home) = home.filter(|s| !s.is_empty()) {
        paths.push(PathBuf::from(home).join(".config").join(APP_NAME).join(CONFIG_FILENAME));
    }
    paths.push(PathBuf::from(SYSTEM_CONFIG_DIR).join(APP_NAME).join(CONFIG_FILENAME));
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r##"
[default]
monitor = "relative_pointer"
orientation = "horizontal"
overflow = "proportional"
thickness = 30
length = { relative = 0.25, offset = 10 }

[default.color.alt]
fg = "#00ff00"
bg = "#000000"
border = "#00ff0080"

[[default.text]]
string = "Out: {1}"
alt_string = "muted"
size = 20
y = { relative = 1.0, offset = 4 }
align = { x = 0.5, y = 0.0 }

[compact]
thickness = 8
"##;

    #[test]
    fn parses_named_style_with_defaults() {
        let style = parse(SAMPLE, "default").unwrap();
        assert_eq!(style.monitor, Placement::RelativePointer);
        assert_eq!(style.orientation, Orientation::Horizontal);
        assert_eq!(style.overflow, Overflow::Proportional);
        assert_eq!(style.thickness, 30);
        assert_eq!(style.length, Dim::new(0.25, 10));
        assert_eq!(style.border, 4);
        assert_eq!(style.color.alt.fg, "#00ff00");
        assert_eq!(style.color.normal, ColorConfig::default().normal);

        let [text] = style.text.as_slice() else { panic!("expected one label") };
        assert_eq!(text.string, "Out: {1}");
        assert_eq!(text.alt_string.as_deref(), Some("muted"));
        assert_eq!(text.size, 20);
        assert_eq!(text.x, Dim::new(0.5, 0));
        assert_eq!(text.align, Align { x: 0.5, y: 0.0 });
    }

    #[test]
    fn other_style_is_independent() {
        let style = parse(SAMPLE, "compact").unwrap();
        assert_eq!(style.thickness, 8);
        assert_eq!(style.orientation, Orientation::Vertical);
        assert!(style.text.is_empty());
    }

    #[test]
    fn missing_style_is_an_error() {
        assert!(matches!(parse(SAMPLE, "nope"), Err(BarError::Config(_))));
    }

    #[test]
    fn invalid_values_are_errors() {
        let raw = "[default]\nx = { relative = 2.0 }\n";
        assert!(matches!(parse(raw, "default"), Err(BarError::Config(_))));
        assert!(matches!(parse("[default\n", "default"), Err(BarError::Config(_))));
    }

    #[test]
    fn huge_outline_is_a_config_error() {
        assert!(matches!(
            parse("[default]\noutline = 2000000000\n", "default"),
            Err(BarError::Config(_))
        ));
    }

    #[test]
    fn load_reads_file_and_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        assert_eq!(load(&path, "compact").unwrap().thickness, 8);
        assert_eq!(
            load(dir.path().join("missing.toml"), "default").unwrap(),
            StyleConfig::default()
        );
    }

    #[test]
    fn candidate_order() {
        let paths = candidate_paths(Some(Path::new("/tmp/s.toml")), Some("/xdg"), Some("/home/u"));
        assert_eq!(
            paths,
            [
                PathBuf::from("/tmp/s.toml"),
                PathBuf::from("/xdg/obar/styles.toml"),
                PathBuf::from("/home/u/.config/obar/styles.toml"),
                PathBuf::from("/etc/obar/styles.toml"),
            ]
        );
        assert_eq!(candidate_paths(None, Some(""), None), [PathBuf::from("/etc/obar/styles.toml")]);
    }
}
