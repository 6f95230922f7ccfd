use std::process;

use serde::Serialize;
use seekeech::{
    application::{
        error::AppError,
        preview::{PreviewPageError, PreviewService},
        render::{
            RenderPipelineConfig, available_themes, configure_render_service,
            highlight_stylesheet, render_service,
        },
    },
    config::{self, Command, DetectArgs, RenderArgs, Settings, StatsArgs, StylesheetArgs},
    domain::{
        format::{FormatTag, detect},
        stats::DocumentStats,
    },
    infra::{documents, error::InfraError, telemetry},
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(error.exit_code());
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli().map_err(|err| {
        InfraError::configuration(format!("failed to load configuration: {err}"))
    })?;

    telemetry::init(&settings.logging)?;
    configure_render_service(RenderPipelineConfig::from(&settings.render))
        .map_err(|err| AppError::unexpected(err.to_string()))?;

    match cli_args.command {
        Command::Render(args) => run_render(&settings, args),
        Command::Detect(args) => run_detect(args),
        Command::Stats(args) => run_stats(&settings, args),
        Command::Stylesheet(args) => run_stylesheet(&settings, args),
    }
}

fn run_render(settings: &Settings, args: RenderArgs) -> Result<(), AppError> {
    let document = documents::read_document(&args.input)?;
    let file_name = args.name.or(document.file_name);
    let service = PreviewService::new(
        render_service(),
        settings.preview.large_document_chars.get(),
    );

    let preview = match (args.format, file_name.as_deref()) {
        (Some(format), _) => service.refresh(format, &document.text),
        (None, Some(name)) => service.open(name, &document.text),
        (None, None) => service.refresh(FormatTag::Plain, &document.text),
    };

    info!(
        format = %preview.format,
        degraded = preview.degraded,
        chars = preview.stats.chars,
        "Rendered preview"
    );

    let output = if args.standalone {
        let title = file_name.unwrap_or_else(|| preview.format.default_file_name());
        service.standalone_page(&title, &preview, &settings.render.theme)?
    } else {
        preview.html
    };

    documents::write_output(args.output.as_deref(), &output)?;
    Ok(())
}

fn run_detect(args: DetectArgs) -> Result<(), AppError> {
    documents::write_output(None, detect(&args.name).as_str())?;
    Ok(())
}

#[derive(Serialize)]
struct StatsReport<'a> {
    file_name: Option<&'a str>,
    format: FormatTag,
    #[serde(flatten)]
    stats: DocumentStats,
    large: bool,
}

fn run_stats(settings: &Settings, args: StatsArgs) -> Result<(), AppError> {
    let document = documents::read_document(&args.input)?;
    let stats = DocumentStats::from_text(&document.text);
    let report = StatsReport {
        file_name: document.file_name.as_deref(),
        format: document
            .file_name
            .as_deref()
            .map_or(FormatTag::Plain, detect),
        stats,
        large: stats.is_large(settings.preview.large_document_chars.get()),
    };

    let json = serde_json::to_string_pretty(&report)
        .map_err(|err| AppError::unexpected(format!("failed to encode stats: {err}")))?;
    documents::write_output(None, &json)?;
    Ok(())
}

fn run_stylesheet(settings: &Settings, args: StylesheetArgs) -> Result<(), AppError> {
    if args.list {
        documents::write_output(None, &available_themes().join("\n"))?;
        return Ok(());
    }

    let css = highlight_stylesheet(&settings.render.theme).map_err(PreviewPageError::from)?;
    documents::write_output(None, &css)?;
    Ok(())
}
