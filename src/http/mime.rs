//! MIME type detection module
//!
//! Maps a file extension (with its leading dot, lowercased) to a Content-Type.
//! The table is built once at startup and only read afterwards.

use std::collections::HashMap;
use std::path::Path;

/// Fallback type for unknown or missing extensions
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    // Text
    (".html", "text/html"),
    (".css", "text/css"),
    // JavaScript/WASM
    (".js", "application/javascript"),
    (".json", "application/json"),
    (".map", "application/json"),
    (".wasm", "application/wasm"),
    // Images
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".gif", "image/gif"),
    (".svg", "image/svg+xml"),
    (".ico", "image/x-icon"),
    // Fonts
    (".woff", "font/woff"),
    (".woff2", "font/woff2"),
    (".ttf", "font/ttf"),
    (".otf", "font/otf"),
    (".eot", "application/vnd.ms-fontobject"),
];

/// Immutable extension → Content-Type table
#[derive(Debug, Clone)]
pub struct MimeTable {
    types: HashMap<String, String>,
}

impl MimeTable {
    /// Build a table from custom `(".ext", "type")` entries
    ///
    /// Keys are lowercased so lookups stay case-insensitive.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let types = entries
            .into_iter()
            .map(|(ext, ty)| (ext.as_ref().to_ascii_lowercase(), ty.into()))
            .collect();
        Self { types }
    }

    /// Look up the Content-Type for a path
    ///
    /// # Examples
    /// ```
    /// use spa_server::http::mime::MimeTable;
    /// let table = MimeTable::default();
    /// assert_eq!(table.content_type(std::path::Path::new("build/app.JS")), "application/javascript");
    /// assert_eq!(table.content_type(std::path::Path::new("build/README")), "application/octet-stream");
    /// ```
    pub fn content_type(&self, path: &Path) -> &str {
        extension_key(path)
            .and_then(|key| self.types.get(&key))
            .map_or(DEFAULT_CONTENT_TYPE, String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for MimeTable {
    fn default() -> Self {
        Self::from_entries(DEFAULT_ENTRIES.iter().copied())
    }
}

/// Lowercased extension of `path` including the leading dot, e.g. `".html"`
///
/// Dotfiles such as `.env` have no extension.
pub fn extension_key(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(path: &str) -> String {
        MimeTable::default().content_type(Path::new(path)).to_string()
    }

    #[test]
    fn test_common_types() {
        assert_eq!(lookup("index.html"), "text/html");
        assert_eq!(lookup("style.css"), "text/css");
        assert_eq!(lookup("app.js"), "application/javascript");
        assert_eq!(lookup("data.json"), "application/json");
        assert_eq!(lookup("app.js.map"), "application/json");
        assert_eq!(lookup("logo.png"), "image/png");
        assert_eq!(lookup("photo.jpeg"), "image/jpeg");
        assert_eq!(lookup("photo.jpg"), "image/jpeg");
        assert_eq!(lookup("module.wasm"), "application/wasm");
    }

    #[test]
    fn test_font_types() {
        assert_eq!(lookup("a.woff"), "font/woff");
        assert_eq!(lookup("a.woff2"), "font/woff2");
        assert_eq!(lookup("a.ttf"), "font/ttf");
        assert_eq!(lookup("a.otf"), "font/otf");
        assert_eq!(lookup("a.eot"), "application/vnd.ms-fontobject");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(lookup("LOGO.PNG"), "image/png");
        assert_eq!(lookup("Index.Html"), "text/html");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(lookup("archive.xyz"), DEFAULT_CONTENT_TYPE);
        assert_eq!(lookup("dashboard"), DEFAULT_CONTENT_TYPE);
        assert_eq!(lookup(".env"), DEFAULT_CONTENT_TYPE);
        assert_eq!(lookup("trailing."), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn test_extension_key() {
        assert_eq!(extension_key(Path::new("a/b.WASM")).as_deref(), Some(".wasm"));
        assert_eq!(extension_key(Path::new("a/b")), None);
    }

    #[test]
    fn test_custom_table() {
        let table = MimeTable::from_entries([(".TXT", "text/plain")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.content_type(Path::new("notes.txt")), "text/plain");
        assert_eq!(table.content_type(Path::new("app.js")), DEFAULT_CONTENT_TYPE);
        assert!(MimeTable::from_entries(Vec::<(&str, &str)>::new()).is_empty());
    }
}
