use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use ir2openapi_core::config::{self, CONFIG_FILE_NAME, Ir2OpenApiConfig, OutputFormat};
use ir2openapi_core::convert::{self, auth};
use ir2openapi_core::ir::{self, IrDocument};
use ir2openapi_core::{OpenApiFragment, build_fragment};

#[derive(Parser)]
#[command(
    name = "ir2openapi",
    about = "Convert an API IR into OpenAPI v3 components",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an IR document into an OpenAPI components fragment
    Convert {
        /// Path to the IR document (JSON or YAML)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file, or `-` for stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long)]
        format: Option<FormatArg>,
    },

    /// Validate that an IR document converts cleanly
    Validate {
        /// Path to the IR document
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Inspect the schema and security scheme names an IR document produces
    Inspect {
        /// Path to the IR document
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: FormatArg,
    },

    /// Initialize a new ir2openapi configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Yaml,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Yaml => OutputFormat::Yaml,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
        } => cmd_convert(input, output, format),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "ir2openapi", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<Ir2OpenApiConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_document(path: &Path) -> Result<IrDocument> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let document = match ext {
        "json" => ir::from_json(&content),
        _ => ir::from_yaml(&content),
    }
    .with_context(|| format!("failed to parse {}", path.display()))?;

    log::debug!(
        "loaded {} type declarations and {} auth schemes from {}",
        document.types.len(),
        document.auth.schemes.len(),
        path.display()
    );
    Ok(document)
}

fn render(value: &impl serde::Serialize, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml_ng::to_string(value)?,
        OutputFormat::Json => serde_json::to_string_pretty(value)? + "\n",
    })
}

fn cmd_convert(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<FormatArg>,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = output.unwrap_or_else(|| PathBuf::from(&cfg.output));
    let format = format.map(OutputFormat::from).unwrap_or(cfg.format);

    let document = load_document(&input)?;
    let fragment: OpenApiFragment = build_fragment(&document, &cfg.fragment_options())
        .with_context(|| format!("failed to convert {}", input.display()))?;
    let rendered = render(&fragment, format)?;

    if output.as_os_str() == "-" {
        std::io::stdout().write_all(rendered.as_bytes())?;
        return Ok(());
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(&output, rendered)
        .with_context(|| format!("failed to write {}", output.display()))?;

    eprintln!(
        "Converted {} schemas and {} security schemes → {}",
        fragment.components.schemas.len(),
        fragment.components.security_schemes.len(),
        output.display()
    );
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let document = load_document(&input)?;

    eprintln!("Valid IR document: {}", input.display());
    eprintln!("  Types: {}", document.types.len());
    eprintln!("  Auth schemes: {}", document.auth.schemes.len());

    // Also validate that every declaration converts
    let fragment = build_fragment(&document, &cfg.fragment_options())?;
    eprintln!("  Schemas: {}", fragment.components.schemas.len());
    eprintln!("  Security requirements: {}", fragment.security.len());

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: FormatArg) -> Result<()> {
    let document = load_document(&input)?;
    let summary = build_inspect_summary(&document)?;
    print!("{}", render(&summary, format.into())?);
    Ok(())
}

fn build_inspect_summary(document: &IrDocument) -> Result<serde_json::Value> {
    let schemas = document
        .types
        .iter()
        .map(|declaration| -> Result<serde_json::Value> {
            let converted = convert::convert(declaration)?;
            Ok(serde_json::json!({
                "declared": declaration.name.to_string(),
                "schema": converted.schema_name,
                "kind": declaration.shape.kind(),
            }))
        })
        .collect::<Result<Vec<_>>>()?;

    let schemes = document
        .auth
        .schemes
        .iter()
        .map(auth::scheme_name)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(serde_json::json!({
        "schemas": schemas,
        "auth": {
            "requirement": &document.auth.requirement,
            "schemes": schemes,
        },
    }))
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
