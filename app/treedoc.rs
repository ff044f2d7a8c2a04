//! Command-line interface for treedoc.
//!
//! Documents a directory with one of the built-in presets, optionally
//! extended by a JSON policy file and individual exclusion flags.

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::exit;
use treedoc::{ExclusionPolicy, OutputFormat, Preset, TreedocBuilder, TreedocOptions, run};

/// Snapshot a directory tree and its files into one document
#[derive(Parser)]
#[command(name = "treedoc", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output file; must be outside the root directory
    /// [default: <root name>_documentation.<format extension>, next to the root]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Exclusion preset and root selection
    #[arg(long, value_enum, default_value_t = PresetArg::Backend)]
    preset: PresetArg,

    /// JSON policy file added to the preset
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Ignore the preset's rules and use only the policy file and flags
    #[arg(long)]
    no_preset_rules: bool,

    /// Exact file name to exclude (can be repeated)
    #[arg(long = "exclude-file")]
    exclude_files: Vec<String>,

    /// File name suffix to exclude, e.g. ".lock" (can be repeated)
    #[arg(long = "exclude-ext")]
    exclude_extensions: Vec<String>,

    /// Directory name to exclude (can be repeated)
    #[arg(long = "exclude-dir")]
    exclude_dirs: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Honour .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    Backend,
    Frontend,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Backend => Preset::Backend,
            PresetArg::Frontend => Preset::Frontend,
        }
    }
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    fn into_options(self) -> Result<TreedocOptions, treedoc::DocError> {
        let preset = Preset::from(self.preset);
        let mut policy = if self.no_preset_rules {
            ExclusionPolicy::new()
        } else {
            preset.policy()
        };
        if let Some(path) = &self.policy {
            policy = policy.merge(ExclusionPolicy::from_json_file(path)?);
        }
        let extra = ExclusionPolicy {
            files: self.exclude_files.into_iter().collect(),
            extensions: self.exclude_extensions.into_iter().collect(),
            directories: self.exclude_dirs.into_iter().collect(),
        };
        policy = policy.merge(extra);

        let format = OutputFormat::from(self.format);
        let output = match self.output {
            Some(output) => output,
            None => default_output(&self.root, format),
        };

        Ok(TreedocBuilder::new(self.root, output)
            .preset(preset)
            .policy(policy)
            .format(format)
            .follow_links(self.follow_links)
            .respect_gitignore(self.gitignore)
            .build())
    }
}

/// `<name>_documentation.<ext>` in the root's parent directory, so the
/// default never lands inside the documented tree.
fn default_output(root: &Path, format: OutputFormat) -> PathBuf {
    let absolute = std::fs::canonicalize(root)
        .or_else(|_| std::path::absolute(root))
        .unwrap_or_else(|_| root.to_path_buf());
    let name = absolute
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "treedoc".to_string());
    let parent = absolute.parent().unwrap_or(Path::new("."));
    parent.join(format!("{}_documentation.{}", name, format.extension()))
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "treedoc=debug" } else { "treedoc=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    init_logging(cli.verbose);

    let options = match cli.into_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    match run(&options) {
        Ok(_) => println!(
            "Documentation successfully written to '{}'.",
            options.output.display()
        ),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
