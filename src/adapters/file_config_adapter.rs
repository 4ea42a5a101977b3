//! INI file configuration adapter.

use crate::domain::error::CotError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CotError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn from_string(content: &str) -> Result<Self, CotError> {
        Self::parse(content, "<string>")
    }

    /// A config with no sections; every lookup falls back to its default.
    pub fn empty() -> Self {
        Self { config: Ini::new() }
    }

    fn parse(content: &str, file: &str) -> Result<Self, CotError> {
        let mut config = Ini::new();
        config
            .read(content.to_string())
            .map_err(|reason| CotError::ConfigParse {
                file: file.to_string(),
                reason,
            })?;
        Ok(Self { config })
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

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
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
[sources]
cme_url = https://www.cftc.gov/dea/futures/deacmelf.htm
timeout_secs = 10

[analysis]
instrument = EURO FX
"#;
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        assert_eq!(
            adapter.get_string("sources", "cme_url"),
            Some("https://www.cftc.gov/dea/futures/deacmelf.htm".to_string())
        );
        assert_eq!(
            adapter.get_string("analysis", "instrument"),
            Some("EURO FX".to_string())
        );
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = FileConfigAdapter::from_string("[sources]\ntimeout_secs = 10\n").unwrap();
        assert_eq!(adapter.get_string("sources", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "key"), None);
    }

    #[test]
    fn get_int_returns_value() {
        let adapter = FileConfigAdapter::from_string("[sources]\ntimeout_secs = 5\n").unwrap();
        assert_eq!(adapter.get_int("sources", "timeout_secs", 30), 5);
    }

    #[test]
    fn get_int_returns_default_for_missing() {
        let adapter = FileConfigAdapter::from_string("[sources]\n").unwrap();
        assert_eq!(adapter.get_int("sources", "timeout_secs", 30), 30);
    }

    #[test]
    fn get_int_returns_default_for_non_numeric() {
        let adapter = FileConfigAdapter::from_string("[sources]\ntimeout_secs = abc\n").unwrap();
        assert_eq!(adapter.get_int("sources", "timeout_secs", 30), 30);
    }

    #[test]
    fn get_bool_returns_true_values() {
        let adapter =
            FileConfigAdapter::from_string("[output]\na = true\nb = yes\nc = 1\n").unwrap();
        assert!(adapter.get_bool("output", "a", false));
        assert!(adapter.get_bool("output", "b", false));
        assert!(adapter.get_bool("output", "c", false));
    }

    #[test]
    fn get_bool_returns_false_values() {
        let adapter =
            FileConfigAdapter::from_string("[output]\na = false\nb = no\nc = 0\n").unwrap();
        assert!(!adapter.get_bool("output", "a", true));
        assert!(!adapter.get_bool("output", "b", true));
        assert!(!adapter.get_bool("output", "c", true));
    }

    #[test]
    fn get_bool_returns_default_for_missing() {
        let adapter = FileConfigAdapter::from_string("[output]\n").unwrap();
        assert!(adapter.get_bool("output", "pretty", true));
        assert!(!adapter.get_bool("output", "pretty", false));
    }

    #[test]
    fn empty_config_has_no_values() {
        let adapter = FileConfigAdapter::empty();
        assert_eq!(adapter.get_string("output", "format"), None);
        assert_eq!(adapter.get_int("sources", "timeout_secs", 30), 30);
    }

    #[test]
    fn from_file_reads_config() {
        let file = create_temp_config("[output]\nformat = json\n");
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(adapter.get_string("output", "format"), Some("json".to_string()));
    }

    #[test]
    fn from_file_returns_io_error_for_missing_file() {
        let result = FileConfigAdapter::from_file("/nonexistent/path/cotbias.ini");
        assert!(matches!(result, Err(CotError::Io(_))));
    }
}
