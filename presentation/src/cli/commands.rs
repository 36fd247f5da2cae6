//! CLI command definitions

use campus_domain::{InboxFilter, OutputFormat};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Human-readable, colored output
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for campus-faq
#[derive(Parser, Debug)]
#[command(name = "campus-faq")]
#[command(author, version, about = "Consolidate student questions into FAQs")]
#[command(long_about = r#"
campus-faq groups the questions students ask into common themes and turns
each theme into a single FAQ entry with an answer.

Questions can be given directly, read from a teacher's inbox, and the
resulting FAQs can be published to the FAQ store.

Configuration files are loaded from (in priority order):
1. CAMPUS_FAQ_* environment variables (e.g. CAMPUS_FAQ_GENERATOR__MODEL)
2. --config <path>     Explicit config file
3. ./campus-faq.toml   Project-level config
4. ~/.config/campus-faq/config.toml   Global config

Example:
  campus-faq generate "When is the deadline?" "What's the due date?"
  campus-faq generate --file questions.txt -o json
  campus-faq inbox --teacher teacher@school.edu --publish --mark-read
  campus-faq faq list
  campus-faq message ask --from student@school.edu --teacher teacher@school.edu "When is the deadline?"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Override the model (e.g. gemini-2.5-flash, llama3.2)
    #[arg(long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// Override the backend provider (gemini or ollama)
    #[arg(long, global = true, value_name = "PROVIDER")]
    pub provider: Option<String>,

    /// Output format (defaults to [output].format, then text)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Consolidate questions given on the command line, in a file or on stdin
    Generate {
        /// Questions to consolidate
        questions: Vec<String>,

        /// Read questions from a file, one per non-empty line
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Read questions from stdin, one per non-empty line
        #[arg(long)]
        stdin: bool,
    },

    /// Consolidate the questions in a teacher's inbox
    Inbox {
        /// Teacher email address
        #[arg(long, value_name = "EMAIL")]
        teacher: String,

        /// Include messages that were already read
        #[arg(long)]
        all: bool,

        /// Publish the generated FAQs to the FAQ store
        #[arg(long)]
        publish: bool,

        /// Mark the consumed messages read after a successful run
        #[arg(long)]
        mark_read: bool,
    },

    /// Manage published FAQs
    #[command(subcommand)]
    Faq(FaqCommand),

    /// Send and read inbox messages
    #[command(subcommand)]
    Message(MessageCommand),
}

#[derive(Subcommand, Debug)]
pub enum FaqCommand {
    /// List published FAQs
    List,

    /// Add an FAQ by hand
    Add { question: String, answer: String },

    /// Replace the question and answer of an FAQ
    Edit {
        id: String,
        question: String,
        answer: String,
    },

    /// Delete an FAQ
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum MessageCommand {
    /// Show a teacher's inbox, newest first
    List {
        /// Teacher email address
        #[arg(long, value_name = "EMAIL")]
        teacher: String,

        /// Include messages that were already read
        #[arg(long)]
        all: bool,
    },

    /// Ask a teacher a question (at least 10 characters)
    Ask {
        /// Student email address
        #[arg(long, value_name = "EMAIL")]
        from: String,

        /// Teacher email address
        #[arg(long, value_name = "EMAIL")]
        teacher: String,

        question: String,
    },

    /// Reply to a message in a teacher's inbox (at least 5 characters)
    Reply {
        /// Teacher email address
        #[arg(long, value_name = "EMAIL")]
        teacher: String,

        /// Id of the message being answered
        id: String,

        message: String,
    },
}

impl Command {
    /// Inbox filter for the `inbox` subcommand
    pub fn inbox_filter(all: bool) -> InboxFilter {
        if all {
            InboxFilter::All
        } else {
            InboxFilter::Unread
        }
    }
}
