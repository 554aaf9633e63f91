//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use careerdocs_core::cover_letter::render_cover_letter;
use careerdocs_core::pipeline::{GenerateConfig, generate};
use careerdocs_core::resume::render_resume;
use careerdocs_shared::{
    AppConfig, ApplicantProfile, FIELDS, FieldKey, init_config, load_config, load_profile_from,
};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// CareerDocs — turn an applicant profile into a résumé and cover letter.
#[derive(Parser)]
#[command(
    name = "careerdocs",
    version,
    about = "Generate a résumé and cover letter (.docx) from an applicant profile.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Which document `preview` prints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum PreviewDocument {
    Resume,
    CoverLetter,
    Both,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Write Resume.docx and Cover_Letter.docx into a new timestamped folder.
    Generate {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Base output directory (defaults to the config value).
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Print a plain-text rendering without writing any file.
    Preview {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Document to print.
        #[arg(short, long, value_enum, default_value = "both")]
        document: PreviewDocument,
    },

    /// List the profile fields.
    Fields,

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

/// Profile input: a file plus per-field overrides.
#[derive(Args, Debug, Default)]
pub(crate) struct ProfileArgs {
    /// Profile file (.toml or .json).
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Full name (required).
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub github: Option<String>,
    #[arg(long)]
    pub portfolio: Option<String>,
    #[arg(long)]
    pub summary: Option<String>,
    /// Comma-separated skills.
    #[arg(long)]
    pub skills: Option<String>,
    /// One entry per line.
    #[arg(long)]
    pub education: Option<String>,
    /// One entry per line.
    #[arg(long)]
    pub experience: Option<String>,
    /// One entry per line.
    #[arg(long)]
    pub projects: Option<String>,
    /// One entry per line.
    #[arg(long)]
    pub certifications: Option<String>,
    #[arg(long)]
    pub target_role: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub hiring_manager: Option<String>,
}

impl ProfileArgs {
    fn flag(&self, key: FieldKey) -> Option<&String> {
        match key {
            FieldKey::Name => self.name.as_ref(),
            FieldKey::Email => self.email.as_ref(),
            FieldKey::Phone => self.phone.as_ref(),
            FieldKey::Address => self.address.as_ref(),
            FieldKey::Linkedin => self.linkedin.as_ref(),
            FieldKey::Github => self.github.as_ref(),
            FieldKey::Portfolio => self.portfolio.as_ref(),
            FieldKey::Summary => self.summary.as_ref(),
            FieldKey::Skills => self.skills.as_ref(),
            FieldKey::Education => self.education.as_ref(),
            FieldKey::Experience => self.experience.as_ref(),
            FieldKey::Projects => self.projects.as_ref(),
            FieldKey::Certifications => self.certifications.as_ref(),
            FieldKey::TargetRole => self.target_role.as_ref(),
            FieldKey::Company => self.company.as_ref(),
            FieldKey::HiringManager => self.hiring_manager.as_ref(),
        }
    }

    /// Load the profile file (if any), apply flag overrides, and trim every field.
    pub(crate) fn resolve(&self) -> Result<ApplicantProfile> {
        let mut profile = match &self.profile {
            Some(path) => load_profile_from(path)?,
            None => ApplicantProfile::default(),
        };

        for key in FieldKey::ALL {
            if let Some(value) = self.flag(key) {
                profile.set(key, value.as_str());
            }
        }

        Ok(profile.trimmed())
    }
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "careerdocs=info",
        1 => "careerdocs=debug",
        _ => "careerdocs=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate { profile, out } => cmd_generate(&profile, out.as_deref()),
        Command::Preview { profile, document } => cmd_preview(&profile, document),
        Command::Fields => cmd_fields(),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

fn cmd_generate(args: &ProfileArgs, out: Option<&str>) -> Result<()> {
    let config = load_config()?;
    let profile = args.resolve()?;

    let cwd = std::env::current_dir()
        .map_err(|e| eyre!("cannot determine working directory: {e}"))?;
    let output_dir = config.resolve_output_dir(out, &cwd);

    info!(output_dir = %output_dir.display(), "generating documents");

    let result = generate(&profile, &GenerateConfig { output_dir })?;

    println!();
    println!("  Files generated:");
    println!("  Résumé:       {}", result.resume_path.display());
    println!("  Cover letter: {}", result.cover_letter_path.display());
    println!();

    Ok(())
}

fn cmd_preview(args: &ProfileArgs, document: PreviewDocument) -> Result<()> {
    let profile = args.resolve()?;
    profile.validate()?;

    let today = chrono::Local::now().date_naive();

    if document != PreviewDocument::CoverLetter {
        print!("{}", render_resume(&profile).to_plain_text());
    }
    if document == PreviewDocument::Both {
        println!();
        println!("{}", "~".repeat(72));
        println!();
    }
    if document != PreviewDocument::Resume {
        print!("{}", render_cover_letter(&profile, today).to_plain_text());
    }

    Ok(())
}

fn cmd_fields() -> Result<()> {
    println!("  {:<16} {:<32} {}", "KEY", "LABEL", "INPUT");
    for field in &FIELDS {
        let kind = if field.multiline { "multi-line" } else { "single-line" };
        println!("  {:<16} {:<32} {kind}", field.key.as_str(), field.label);
    }
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
