use std::path::{Path, PathBuf};

use crate::certificate::Layout;

/// Resources the composer reads on every certificate.
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    pub template_path: PathBuf,
    pub script_font_path: PathBuf,
    pub regular_font_path: PathBuf,
    pub layout: Layout,
}

impl ComposerConfig {
    /// Default resource locations under `base_dir`.
    pub fn with_base_dir(base_dir: &Path) -> Self {
        let fonts = base_dir.join("static").join("fonts");
        Self {
            template_path: base_dir.join("Certificate Main.png"),
            script_font_path: fonts.join("Anastasia-Script.ttf"),
            regular_font_path: fonts.join("Lora-Regular.ttf"),
            layout: Layout::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_dir: PathBuf,
    pub upload_folder: PathBuf,
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub composer: ComposerConfig,
}

const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let base_dir = match var("BASE_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };
        let upload_folder =
            base_dir.join(var("UPLOAD_FOLDER").unwrap_or_else(|| "uploads".to_string()));

        let mut composer = ComposerConfig::with_base_dir(&base_dir);
        if let Some(path) = var("TEMPLATE_PATH") {
            composer.template_path = base_dir.join(path);
        }
        if let Some(path) = var("SCRIPT_FONT_PATH") {
            composer.script_font_path = base_dir.join(path);
        }
        if let Some(path) = var("REGULAR_FONT_PATH") {
            composer.regular_font_path = base_dir.join(path);
        }
        if let Some(path) = var("LAYOUT_PATH") {
            composer.layout = Layout::from_json_file(&base_dir.join(path))?;
        }

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = match var("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| format!("PORT must be a port number, got {:?}", raw))?,
            None => 5000,
        };
        let max_upload_bytes = match var("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse()
                .map_err(|_| format!("MAX_UPLOAD_BYTES must be a byte count, got {:?}", raw))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            base_dir,
            upload_folder,
            host,
            port,
            max_upload_bytes,
            composer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_resolve_under_base_dir() {
        let config = Config::from_lookup(lookup(&[("BASE_DIR", "/srv/certgen")])).unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.upload_folder, Path::new("/srv/certgen/uploads"));
        assert_eq!(
            config.composer.template_path,
            Path::new("/srv/certgen/Certificate Main.png")
        );
        assert_eq!(
            config.composer.script_font_path,
            Path::new("/srv/certgen/static/fonts/Anastasia-Script.ttf")
        );
        assert_eq!(
            config.composer.regular_font_path,
            Path::new("/srv/certgen/static/fonts/Lora-Regular.ttf")
        );
        assert_eq!(config.composer.layout, Layout::default());
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup(&[
            ("BASE_DIR", "/srv/certgen"),
            ("TEMPLATE_PATH", "/etc/certgen/alt.png"),
            ("PORT", "8080"),
            ("MAX_UPLOAD_BYTES", "1024"),
        ]))
        .unwrap();

        assert_eq!(config.composer.template_path, Path::new("/etc/certgen/alt.png"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn bad_upload_limit_is_rejected() {
        let err = Config::from_lookup(lookup(&[("MAX_UPLOAD_BYTES", "lots")])).unwrap_err();
        assert!(err.to_string().contains("MAX_UPLOAD_BYTES"));
    }

    #[test]
    fn bad_port_is_rejected() {
        for raw in ["http", "70000", ""] {
            let err = Config::from_lookup(lookup(&[("PORT", raw)])).unwrap_err();
            assert!(err.to_string().contains("PORT"), "{}", raw);
        }
    }

    #[test]
    fn unreadable_layout_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().to_str().unwrap();
        let err =
            Config::from_lookup(lookup(&[("BASE_DIR", base), ("LAYOUT_PATH", "missing.json")]))
                .unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
