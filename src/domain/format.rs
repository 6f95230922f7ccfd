//! Format tags understood by the preview engine and file-name detection.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Closed set of formats a document can be previewed as.
///
/// Deserialisation is lossy: any unknown tag string degrades to [`FormatTag::Plain`]
/// instead of failing, so stale values coming from collaborators never block a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FormatTag {
    #[default]
    Plain,
    Markdown,
    Html,
    Css,
    Javascript,
    Json,
    Xml,
    Csv,
}

impl FormatTag {
    /// Every tag, in the order the format selector lists them.
    pub const ALL: [FormatTag; 8] = [
        FormatTag::Plain,
        FormatTag::Markdown,
        FormatTag::Html,
        FormatTag::Css,
        FormatTag::Javascript,
        FormatTag::Json,
        FormatTag::Xml,
        FormatTag::Csv,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormatTag::Plain => "plain",
            FormatTag::Markdown => "markdown",
            FormatTag::Html => "html",
            FormatTag::Css => "css",
            FormatTag::Javascript => "javascript",
            FormatTag::Json => "json",
            FormatTag::Xml => "xml",
            FormatTag::Csv => "csv",
        }
    }

    /// Human-readable name shown in the status bar and in error renderings.
    pub fn display_name(self) -> &'static str {
        match self {
            FormatTag::Plain => "Plain text",
            FormatTag::Markdown => "Markdown",
            FormatTag::Html => "HTML",
            FormatTag::Css => "CSS",
            FormatTag::Javascript => "JavaScript",
            FormatTag::Json => "JSON",
            FormatTag::Xml => "XML",
            FormatTag::Csv => "CSV",
        }
    }

    /// Canonical file extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            FormatTag::Plain => "txt",
            FormatTag::Markdown => "md",
            FormatTag::Html => "html",
            FormatTag::Css => "css",
            FormatTag::Javascript => "js",
            FormatTag::Json => "json",
            FormatTag::Xml => "xml",
            FormatTag::Csv => "csv",
        }
    }

    /// Name suggested when saving a document that was never opened from disk.
    pub fn default_file_name(self) -> String {
        format!("document.{}", self.extension())
    }

    /// Parse a tag, degrading anything unrecognised to [`FormatTag::Plain`].
    pub fn parse_lossy(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "txt" => Some(FormatTag::Plain),
            "md" => Some(FormatTag::Markdown),
            "html" => Some(FormatTag::Html),
            "css" => Some(FormatTag::Css),
            "js" => Some(FormatTag::Javascript),
            "json" => Some(FormatTag::Json),
            "xml" => Some(FormatTag::Xml),
            "csv" => Some(FormatTag::Csv),
            _ => None,
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatTag {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FormatTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == value)
            .ok_or_else(|| DomainError::unknown_format(value))
    }
}

impl From<String> for FormatTag {
    fn from(value: String) -> Self {
        FormatTag::parse_lossy(&value)
    }
}

/// Map a file name to the format its extension declares.
///
/// The extension is whatever follows the last `.`. Unknown extensions resolve
/// to plain text. A name without any dot is matched as a whole, so a file
/// literally called `md` is Markdown, not plain text.
pub fn detect(file_name: &str) -> FormatTag {
    let extension = file_name
        .rsplit_once('.')
        .map_or(file_name, |(_, extension)| extension)
        .to_lowercase();

    FormatTag::from_extension(&extension).unwrap_or(FormatTag::Plain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_maps_known_extensions() {
        assert_eq!(detect("notes.txt"), FormatTag::Plain);
        assert_eq!(detect("README.md"), FormatTag::Markdown);
        assert_eq!(detect("index.html"), FormatTag::Html);
        assert_eq!(detect("site.css"), FormatTag::Css);
        assert_eq!(detect("app.js"), FormatTag::Javascript);
        assert_eq!(detect("package.json"), FormatTag::Json);
        assert_eq!(detect("feed.xml"), FormatTag::Xml);
        assert_eq!(detect("report.csv"), FormatTag::Csv);
    }

    #[test]
    fn detect_is_case_insensitive_and_uses_last_dot() {
        assert_eq!(detect("ARCHIVE.TAR.JSON"), FormatTag::Json);
        assert_eq!(detect("Page.Html"), FormatTag::Html);
        assert_eq!(detect("bundle.min.js"), FormatTag::Javascript);
    }

    #[test]
    fn detect_defaults_to_plain() {
        assert_eq!(detect("file.xyz"), FormatTag::Plain);
        assert_eq!(detect("Makefile"), FormatTag::Plain);
        assert_eq!(detect("trailing."), FormatTag::Plain);
        assert_eq!(detect(""), FormatTag::Plain);
        assert_eq!(detect(".gitignore"), FormatTag::Plain);
    }

    #[test]
    fn dotless_name_is_matched_whole() {
        assert_eq!(detect("md"), FormatTag::Markdown);
    }

    #[test]
    fn extension_round_trips_through_detect() {
        for tag in FormatTag::ALL {
            assert_eq!(detect(&tag.default_file_name()), tag);
        }
    }

    #[test]
    fn strict_parse_rejects_unknown_tags() {
        assert_eq!("json".parse::<FormatTag>().expect("json"), FormatTag::Json);
        let err = "yaml".parse::<FormatTag>().expect_err("unknown tag");
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn lossy_parse_and_serde_degrade_to_plain() {
        assert_eq!(FormatTag::parse_lossy("Markdown"), FormatTag::Plain);
        assert_eq!(FormatTag::parse_lossy("markdown"), FormatTag::Markdown);

        let tag: FormatTag = serde_json::from_str("\"yaml\"").expect("deserialize");
        assert_eq!(tag, FormatTag::Plain);
        let tag: FormatTag = serde_json::from_str("\"csv\"").expect("deserialize");
        assert_eq!(tag, FormatTag::Csv);
        assert_eq!(
            serde_json::to_string(&FormatTag::Javascript).expect("serialize"),
            "\"javascript\""
        );
    }
}
