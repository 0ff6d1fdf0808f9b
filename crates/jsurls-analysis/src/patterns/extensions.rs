//! Built-in filename extensions.

/// Extensions recognised by the filename predicate without caller configuration.
pub static KNOWN_EXTENSIONS: &[&str] = &[
    // Scripts and source maps
    "js", "mjs", "cjs", "jsx", "ts", "tsx", "wasm",
    // Styles
    "css", "scss", "sass", "less",
    // Markup and data
    "html", "htm", "xhtml", "xml", "json", "jsonld", "yaml", "yml", "toml", "csv", "txt", "md",
    "rss", "atom", "webmanifest",
    // Server pages
    "php", "asp", "aspx", "jsp", "cgi",
    // Images
    "png", "jpg", "jpeg", "gif", "svg", "webp", "ico", "bmp", "avif", "tif", "tiff",
    // Fonts
    "woff", "woff2", "ttf", "otf", "eot",
    // Audio and video
    "mp3", "mp4", "m4a", "wav", "ogg", "webm", "mov", "avi", "m3u8",
    // Documents
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt", "rtf",
    // Archives and binaries
    "zip", "gz", "tgz", "tar", "rar", "7z", "bz2", "xz", "exe", "dmg", "apk", "msi", "bin",
    "swf", "jar",
];
