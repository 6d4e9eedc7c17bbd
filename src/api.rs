use anyhow::{bail, Context, Result};
use reqwest::{multipart, Client};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Suffixes tried before giving up on a taken download name
const MAX_NAME_ATTEMPTS: u32 = 999;

/// Response body of `POST /upload`
///
/// The service reports the content hash as `file_hash`; older builds used `hash`.
/// Both are accepted.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct UploadResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default, alias = "file_hash", deserialize_with = "deserialize_empty_as_none")]
    pub hash: Option<String>,
    #[serde(default, deserialize_with = "deserialize_empty_as_none")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "deserialize_empty_as_none")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_empty_as_none")]
    pub filename: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_empty_as_none")]
    pub code_word: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SearchResultItem {
    #[serde(default)]
    pub filename: String,
    pub hash: String,
    #[serde(rename = "codeWord", default, deserialize_with = "deserialize_empty_as_none")]
    pub code_word: Option<String>,
}

/// Response body of `GET /search`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub results: Vec<SearchResultItem>,
}

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

// The service sends "" rather than omitting optional strings
fn deserialize_empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.is_empty()))
}

/// Relative search URL with the query percent-encoded (space becomes `%20`)
pub fn search_path(query: &str) -> String {
    format!("/search?q={}", urlencoding::encode(query))
}

/// Relative download URL for a content hash
pub fn download_path(hash: &str) -> String {
    format!("/download?hash={}", urlencoding::encode(hash))
}

/// Extract the file name from a `Content-Disposition` header value
///
/// Only the final path component is kept, so a hostile header cannot
/// direct the write outside the download directory.
pub fn content_disposition_filename(header: &str) -> Option<String> {
    let raw = header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))?
        .trim_matches('"');

    safe_file_name(raw)
}

fn safe_file_name(raw: &str) -> Option<String> {
    Path::new(raw)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

#[derive(Clone)]
pub struct DcasClient {
    base_url: String,
    client: Client,
}

impl DcasClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute download link shown next to a hash
    pub fn download_url(&self, hash: &str) -> String {
        format!("{}{}", self.base_url, download_path(hash))
    }

    /// Upload a file as multipart form data
    ///
    /// Sends the file under the `file` field and, when non-empty, the code word
    /// under `code_word`. A response that is not JSON is an error, whatever the
    /// HTTP status.
    pub async fn upload(&self, file_path: &Path, code_word: &str) -> Result<UploadResult> {
        let bytes = tokio::fs::read(file_path)
            .await
            .with_context(|| format!("Failed to read {}", file_path.display()))?;

        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        let mut form = multipart::Form::new()
            .part("file", multipart::Part::bytes(bytes).file_name(file_name));
        if !code_word.is_empty() {
            form = form.text("code_word", code_word.to_string());
        }

        let url = format!("{}/upload", self.base_url);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("Failed to upload file")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read upload response")?;

        let result: UploadResult = serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse upload response (HTTP {})", status))?;

        Ok(result)
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        let url = format!("{}{}", self.base_url, search_path(query));
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to search files")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read search response")?;

        let results: SearchResponse = serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse search response (HTTP {})", status))?;

        Ok(results)
    }

    /// Download a file by hash into `dest_dir`, returning the written path
    ///
    /// The file name comes from `Content-Disposition`, then `fallback_name`,
    /// then the hash itself.
    pub async fn download(&self, hash: &str, fallback_name: &str, dest_dir: &Path) -> Result<PathBuf> {
        let response = self
            .client
            .get(self.download_url(hash))
            .send()
            .await
            .context("Failed to download file")?
            .error_for_status()
            .context("Download rejected by server")?;

        save_response(response, &[fallback_name, hash], dest_dir).await
    }

    /// Retrieve a file by code word and/or hash via `POST /receive`
    ///
    /// With both set the service looks for the exact pair; with one set it
    /// matches on that alone. At least one must be non-empty.
    pub async fn receive(&self, code_word: &str, hash: &str, dest_dir: &Path) -> Result<PathBuf> {
        if code_word.is_empty() && hash.is_empty() {
            bail!("Either a code word or a file hash is required");
        }

        let url = format!("{}/receive", self.base_url);
        let response = self
            .client
            .post(&url)
            .form(&[("file_hash", hash), ("code_word", code_word)])
            .send()
            .await
            .context("Failed to receive file")?
            .error_for_status()
            .context("Receive rejected by server")?;

        save_response(response, &[code_word, hash], dest_dir).await
    }
}

/// Write a file response into `dest_dir` without replacing anything there
///
/// Name precedence: `Content-Disposition`, then each of `fallbacks` in order.
/// Every candidate is reduced to its final path component.
async fn save_response(
    response: reqwest::Response,
    fallbacks: &[&str],
    dest_dir: &Path,
) -> Result<PathBuf> {
    let file_name = response
        .headers()
        .get(reqwest::header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .and_then(content_disposition_filename)
        .or_else(|| fallbacks.iter().find_map(|name| safe_file_name(name)))
        .context("Server response carries no usable file name")?;

    let bytes = response
        .bytes()
        .await
        .context("Failed to read download body")?;

    tokio::fs::create_dir_all(dest_dir)
        .await
        .with_context(|| format!("Failed to create {}", dest_dir.display()))?;

    write_new_file(dest_dir, &file_name, &bytes).await
}

/// Create `name` in `dir`, or the first free `name (N).ext` if it is taken
async fn write_new_file(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf> {
    for n in 0..=MAX_NAME_ATTEMPTS {
        let target = dir.join(numbered_file_name(name, n));
        let file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .await;

        match file {
            Ok(mut file) => {
                file.write_all(bytes)
                    .await
                    .with_context(|| format!("Failed to write {}", target.display()))?;
                file.flush()
                    .await
                    .with_context(|| format!("Failed to write {}", target.display()))?;
                return Ok(target);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to create {}", target.display()))
            }
        }
    }

    bail!("No free file name for {} in {}", name, dir.display())
}

/// `report.pdf` -> `report (2).pdf`; `0` leaves the name unchanged
fn numbered_file_name(name: &str, n: u32) -> String {
    if n == 0 {
        return name.to_string();
    }

    let path = Path::new(name);
    match (
        path.file_stem().and_then(|s| s.to_str()),
        path.extension().and_then(|e| e.to_str()),
    ) {
        (Some(stem), Some(ext)) => format!("{} ({}).{}", stem, n, ext),
        _ => format!("{} ({})", name, n),
    }
}
