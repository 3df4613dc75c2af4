//! Extract command implementation

use crate::config::load_settings;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use rakers_core::{
    NumericSplit, Order, PossessiveStrip, Rake, RakeSettings, ScoreSorter, SmartStoplist,
    Stoplist, WordSorter,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input files or patterns (supports glob, `-` for stdin); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Stop-list file, one word per line (default: SMART list)
    #[arg(short, long, value_name = "FILE")]
    pub stoplist: Option<PathBuf>,

    /// Word or pattern to remove from the stop list
    #[arg(short, long, value_name = "WORD")]
    pub exclude: Vec<String>,

    /// Word or pattern to add to the stop list
    #[arg(long, value_name = "WORD")]
    pub include: Vec<String>,

    /// Candidate modifier (only the last one given takes effect)
    #[arg(short, long, value_enum)]
    pub modifier: Vec<ModifierKind>,

    /// Sort key
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    /// Sort direction
    #[arg(long, value_enum)]
    pub order: Option<SortOrder>,

    /// Print at most N phrases per input
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `score<TAB>phrase` lines
    Text,
    /// JSON array with one object per input
    Json,
}

/// Built-in modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModifierKind {
    /// Split candidates on standalone numbers
    Numeric,
    /// Strip possessive 's
    Possession,
}

impl ModifierKind {
    fn name(self) -> &'static str {
        match self {
            ModifierKind::Numeric => NumericSplit::NAME,
            ModifierKind::Possession => PossessiveStrip::NAME,
        }
    }
}

/// Sort keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    /// Phrase score
    Score,
    /// Phrase text
    Word,
}

/// Sort directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting keyword extraction");
        log::debug!("Arguments: {:?}", self);

        let rake = self.build_extractor()?;
        let sources = self.read_sources()?;

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output: {}", path.display()))?,
            )),
            None => Box::new(io::stdout().lock()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, sources.len() > 1)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        for (source, text) in &sources {
            let mut keywords = rake.extract(text);
            log::info!("{source}: {} phrases", keywords.len());
            if let Some(limit) = self.limit {
                keywords.truncate(limit);
            }
            formatter.format_keywords(source, &keywords)?;
        }

        formatter.finish()
    }

    /// Merge the config file and flags into extractor settings
    pub fn settings(&self) -> Result<RakeSettings> {
        let mut settings = match &self.config {
            Some(path) => load_settings(path)?,
            None => RakeSettings::default(),
        };

        settings.exclude.extend(self.exclude.iter().cloned());
        settings.include.extend(self.include.iter().cloned());
        settings
            .modifiers
            .extend(self.modifier.iter().map(|kind| kind.name().to_string()));

        if let Some(sort) = self.sort {
            settings.sorter.by = match sort {
                SortKey::Score => ScoreSorter::NAME,
                SortKey::Word => WordSorter::NAME,
            }
            .to_string();
        }
        if let Some(order) = self.order {
            settings.sorter.order = order.into();
        }

        Ok(settings)
    }

    /// Build the extractor from settings and the stop-list source
    pub fn build_extractor(&self) -> Result<Rake> {
        let settings = self.settings()?;

        let stoplist: Arc<dyn Stoplist> = match &self.stoplist {
            Some(path) => Arc::new(FileReader::read_stoplist(path)?),
            None => Arc::new(SmartStoplist),
        };

        let config = settings
            .into_config_with(stoplist)
            .map_err(CliError::from)?;
        let rake = Rake::with_config(config).map_err(CliError::from)?;
        log::debug!("{} effective stop words", rake.stopwords().len());
        Ok(rake)
    }

    fn read_sources(&self) -> Result<Vec<(String, String)>> {
        FileReader::resolve(&self.input)?
            .into_iter()
            .map(|source| {
                let text = source.read()?;
                Ok((source.to_string(), text))
            })
            .collect()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
