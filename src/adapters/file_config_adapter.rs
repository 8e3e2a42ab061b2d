//! INI file configuration adapter.
//!
//! Keys are case-sensitive so that `[palette]` entries keep category names
//! exactly as they appear in the data.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

#[derive(Debug)]
pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new_cs();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new_cs();
        config.read(content.to_string())?;
        Ok(Self { config })
    }

    /// An empty configuration; every lookup returns its default.
    pub fn empty() -> Self {
        Self {
            config: Ini::new_cs(),
        }
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value.to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.config
            .get(section, key)
            .as_ref()
            .and_then(|v| Self::parse_bool(v))
            .unwrap_or(default)
    }

    fn entries(&self, section: &str) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .config
            .get_map_ref()
            .get(section)
            .map(|keys| {
                keys.iter()
                    .filter_map(|(k, v)| v.as_ref().map(|v| (k.clone(), v.clone())))
                    .collect()
            })
            .unwrap_or_default();
        entries.sort();
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn from_string_parses_config() {
        let content = r#"
[input]
delimiter = ~

[chart]
width = 800
"#;
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        assert_eq!(adapter.get_string("input", "delimiter"), Some("~".to_string()));
        assert_eq!(adapter.get_double("chart", "width", 0.0), 800.0);
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = FileConfigAdapter::from_string("[chart]\nwidth = 100\n").unwrap();
        assert_eq!(adapter.get_string("chart", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "key"), None);
    }

    #[test]
    fn get_double_returns_default_for_non_numeric() {
        let adapter = FileConfigAdapter::from_string("[chart]\nwidth = wide\n").unwrap();
        assert_eq!(adapter.get_double("chart", "width", 99.9), 99.9);
        assert_eq!(adapter.get_double("chart", "missing", 1.5), 1.5);
    }

    #[test]
    fn get_bool_parses_variants() {
        let adapter =
            FileConfigAdapter::from_string("[chart]\na = true\nb = no\nc = 1\nd = maybe\n").unwrap();
        assert!(adapter.get_bool("chart", "a", false));
        assert!(!adapter.get_bool("chart", "b", true));
        assert!(adapter.get_bool("chart", "c", false));
        assert!(adapter.get_bool("chart", "d", true));
        assert!(!adapter.get_bool("chart", "missing", false));
    }

    #[test]
    fn keys_keep_their_case() {
        let adapter = FileConfigAdapter::from_string("[palette]\nMale = 112233\n").unwrap();
        assert_eq!(adapter.get_string("palette", "Male"), Some("112233".to_string()));
        assert_eq!(adapter.get_string("palette", "male"), None);
    }

    #[test]
    fn entries_are_sorted() {
        let adapter = FileConfigAdapter::from_string(
            "[palette]\nTravel = A9CCE3\nFashion / Beauty = 2471A3\n>$1M = 7D3C98\n",
        )
        .unwrap();
        let keys: Vec<String> = adapter.entries("palette").into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![">$1M", "Fashion / Beauty", "Travel"]);
        assert!(adapter.entries("missing").is_empty());
    }

    #[test]
    fn from_file_reads_config() {
        let file = create_temp_config("[report]\ntemplate_path = /path/to/template.svg\n");
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("report", "template_path"),
            Some("/path/to/template.svg".to_string())
        );
    }

    #[test]
    fn from_file_returns_error_for_missing_file() {
        assert!(FileConfigAdapter::from_file("/nonexistent/path/config.ini").is_err());
    }

    #[test]
    fn empty_config_uses_defaults() {
        let adapter = FileConfigAdapter::empty();
        assert_eq!(adapter.get_double("chart", "width", 1000.0), 1000.0);
        assert!(adapter.entries("palette").is_empty());
    }
}
