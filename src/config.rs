// ⚙️ Configuration - input and output locations
// Defaults match the conventional inputs/ and outputs/ layout; each path can be
// overridden through an environment variable.

use std::env;
use std::path::PathBuf;

pub const RECTANGLES_VAR: &str = "SHAPES_RECTANGLES";
pub const CIRCLES_VAR: &str = "SHAPES_CIRCLES";
pub const TRIANGLES_VAR: &str = "SHAPES_TRIANGLES";
pub const OUTPUT_VAR: &str = "SHAPES_OUTPUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file with a `rectangle_list`
    pub rectangles_path: PathBuf,

    /// YAML file with a `circle_list`
    pub circles_path: PathBuf,

    /// JSON file with a `triangle_list`
    pub triangles_path: PathBuf,

    /// Summary file written at the end of the run
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rectangles_path: PathBuf::from("inputs/rectangle.json"),
            circles_path: PathBuf::from("inputs/circle.yml"),
            triangles_path: PathBuf::from("inputs/triangle_sides.json"),
            output_path: PathBuf::from("outputs/computations.json"),
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by any non-empty value `lookup` returns
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let path = |key: &str, default: PathBuf| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };

        Config {
            rectangles_path: path(RECTANGLES_VAR, defaults.rectangles_path),
            circles_path: path(CIRCLES_VAR, defaults.circles_path),
            triangles_path: path(TRIANGLES_VAR, defaults.triangles_path),
            output_path: path(OUTPUT_VAR, defaults.output_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.output_path, PathBuf::from("outputs/computations.json"));
    }

    #[test]
    fn test_overrides() {
        let mut vars = HashMap::new();
        vars.insert(CIRCLES_VAR, "data/round.yaml".to_string());
        vars.insert(OUTPUT_VAR, "/tmp/out.json".to_string());
        vars.insert(TRIANGLES_VAR, String::new());

        let config = Config::from_lookup(|key| vars.get(key).cloned());

        assert_eq!(config.circles_path, PathBuf::from("data/round.yaml"));
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.json"));
        assert_eq!(config.triangles_path, PathBuf::from("inputs/triangle_sides.json"));
        assert_eq!(config.rectangles_path, PathBuf::from("inputs/rectangle.json"));
    }
}
