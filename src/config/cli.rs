use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

use crate::domain::format::FormatTag;

/// Command-line arguments for the Seekeech binary.
#[derive(Debug, Parser)]
#[command(
    name = "seekeech",
    version,
    about = "Render live previews of text documents as safe HTML"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "SEEKEECH_CONFIG_FILE",
        value_name = "PATH",
        global = true
    )]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub logging: LoggingOverrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Render a document to HTML.
    Render(RenderArgs),
    /// Print the format a file name maps to.
    Detect(DetectArgs),
    /// Print character, line and word counts as JSON.
    Stats(StatsArgs),
    /// Print the CSS for highlighted code blocks.
    Stylesheet(StylesheetArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct LoggingOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct RenderOverrides {
    /// Override the highlight theme used for standalone pages.
    #[arg(long = "theme", value_name = "NAME")]
    pub theme: Option<String>,

    /// Toggle server-side highlighting of fenced code in Markdown.
    #[arg(
        long = "highlight-fenced-code",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub highlight_fenced_code: Option<bool>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct PreviewOverrides {
    /// Override the character count above which a document is flagged as large.
    #[arg(long = "large-document-chars", value_name = "COUNT")]
    pub large_document_chars: Option<usize>,
}

#[derive(Debug, Args, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub render: RenderOverrides,

    /// Render as this format instead of detecting it from the file name.
    #[arg(long = "format", value_name = "TAG")]
    pub format: Option<FormatTag>,

    /// File name used for detection when reading from stdin.
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Wrap the fragment in a complete HTML document with the highlight stylesheet.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub standalone: bool,

    /// Write the result here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Document to render; `-` reads stdin.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,
}

#[derive(Debug, Args, Clone)]
pub struct DetectArgs {
    /// File name to classify; only its extension matters.
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Debug, Args, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub preview: PreviewOverrides,

    /// Document to count; `-` reads stdin.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,
}

#[derive(Debug, Args, Default, Clone)]
pub struct StylesheetArgs {
    #[command(flatten)]
    pub render: RenderOverrides,

    /// List the available theme names instead of printing CSS.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub list: bool,
}
