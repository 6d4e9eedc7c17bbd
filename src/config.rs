use serde::Deserialize;
use std::path::PathBuf;

/// Service-side upload limit (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub base_url: String,
    #[serde(default)]
    pub download_dir: Option<String>,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_true")]
    pub upload_enabled: bool,
    #[serde(default = "default_true")]
    pub search_enabled: bool,
}

fn default_max_upload_bytes() -> u64 {
    DEFAULT_MAX_UPLOAD_BYTES
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Config used when only `--base-url` is given
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            download_dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            vim_mode: false,
            upload_enabled: true,
            search_enabled: true,
        }
    }

    /// Directory downloads are written into: config, then the platform
    /// download directory, then the working directory
    pub fn resolve_download_dir(&self) -> PathBuf {
        self.download_dir
            .as_ref()
            .map(PathBuf::from)
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
