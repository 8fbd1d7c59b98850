use anyhow::{Context, Result};
use pipegen::cli::commands::{CheckCommand, FieldsCommand, InitCommand, RenderCommand};
use pipegen::cli::output::*;
use pipegen::cli::{Cli, Command};
use pipegen::core::config::Settings;
use pipegen::core::{BlueGreenRecord, ConfigRecord, InputCollector, SimpleDeployRecord, Variant};
use pipegen::sink::OutputSink;
use pipegen::template::{self, Template};
use std::io::Write;
use tracing::{debug, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging; stdout is reserved for generated text
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    // Execute command
    match &cli.command {
        Command::Render(cmd) => match Variant::from(cmd.variant) {
            Variant::Simple => render::<SimpleDeployRecord>(cmd, &settings).await?,
            Variant::BlueGreen => render::<BlueGreenRecord>(cmd, &settings).await?,
        },
        Command::Fields(cmd) => list_fields(cmd)?,
        Command::Init(cmd) => match Variant::from(cmd.variant) {
            Variant::Simple => init_values::<SimpleDeployRecord>(cmd)?,
            Variant::BlueGreen => init_values::<BlueGreenRecord>(cmd)?,
        },
        Command::Check(cmd) => match Variant::from(cmd.variant) {
            Variant::Simple => check_template::<SimpleDeployRecord>(cmd)?,
            Variant::BlueGreen => check_template::<BlueGreenRecord>(cmd)?,
        },
    }

    Ok(())
}

async fn render<R: ConfigRecord>(cmd: &RenderCommand, settings: &Settings) -> Result<()> {
    // Collect field values
    let mut collector = InputCollector::<R>::new();
    if let Some(file) = &cmd.file {
        collector = collector.with_file(file)?;
    }
    let record = collector
        .with_overrides(&cmd.set)
        .context("Invalid field override")?
        .finish();

    let document = match &cmd.template {
        Some(path) => Template::from_file::<R, _>(path)?.render(&record),
        None => template::render(&record),
    };
    debug!(
        "Rendered {} pipeline: {} lines",
        R::VARIANT,
        document.line_count()
    );

    let mut sink = OutputSink::from_settings(settings);
    if let Some(filename) = &cmd.filename {
        sink = sink.with_filename(filename.clone());
    }

    let shown = sink.show(document);
    if !cmd.quiet {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(shown.as_bytes())?;
        stdout.flush()?;
    }

    if cmd.copy {
        let outcome = sink.copy_to_clipboard().await;
        eprintln!("{}", format_copy_outcome(outcome));
    }

    if cmd.download {
        let dir = cmd.output_dir.as_ref().unwrap_or(&settings.output_dir);
        let path = sink
            .download_as_file(dir)
            .await
            .context("Failed to save pipeline")?;
        eprintln!("{} Saved {}", CHECK, style(path.display()).bold());
    }

    Ok(())
}

fn list_fields(cmd: &FieldsCommand) -> Result<()> {
    let variant = Variant::from(cmd.variant);

    if cmd.json {
        let data = serde_json::json!({
            "variant": variant,
            "title": variant.title(),
            "fields": variant.fields(),
        });
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else {
        print!("{}", format_fields(variant, variant.fields()));
    }

    Ok(())
}

fn init_values<R: ConfigRecord>(_cmd: &InitCommand) -> Result<()> {
    let yaml = serde_yaml::to_string(&R::default())?;
    print!("{}", format_values_skeleton(R::VARIANT, &yaml));
    Ok(())
}

fn check_template<R: ConfigRecord>(cmd: &CheckCommand) -> Result<()> {
    eprintln!("{} Checking template...", INFO);

    match Template::from_file::<R, _>(&cmd.template) {
        Ok(template) => {
            let fields = template.field_names().count();
            let references = template.target_vars().count();
            eprintln!("{} Template is valid for {}", CHECK, style(R::VARIANT).bold());
            eprintln!("  Field placeholders: {}", style(fields).cyan());
            eprintln!("  Pipeline references: {}", style(references).cyan());
            Ok(())
        }
        Err(e) => {
            eprintln!("{} Check failed:", CROSS);
            eprintln!("  {}", style(e).red());
            std::process::exit(1);
        }
    }
}
