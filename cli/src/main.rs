//! CLI entrypoint for campus-faq
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod questions;

use anyhow::{Context, Result, bail};
use campus_application::{
    ConsolidateError, ConsolidateFaqsUseCase, ConversationLogger, FaqRepository,
    GenerateFromInboxError, GenerateFromInboxInput, GenerateFromInboxUseCase,
    InboxMessagesUseCase, ManageFaqsUseCase, NoConversationLogger, NoProgress, ProgressNotifier,
};
use campus_domain::{FaqId, OutputFormat, QuestionBatch};
use campus_infrastructure::logging::DEFAULT_LOG_FILE;
use campus_infrastructure::{
    ConfigLoader, FileConfig, JsonFaqStore, JsonInbox, JsonlConversationLogger, build_generator,
};
use campus_presentation::{
    Cli, Command, ConsoleFormatter, FaqCommand, MessageCommand, ProgressReporter, SimpleProgress,
};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Exit code used when interrupted with Ctrl-C
const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    // Command line overrides
    if let Some(provider) = &cli.provider {
        config.generator.provider = provider.clone();
    }
    if let Some(model) = &cli.model {
        config.generator.model = Some(model.clone());
    }
    config.validate().context("Invalid configuration")?;

    if cli.show_config {
        println!();
        println!("Effective configuration:");
        println!("{}", config.to_toml_string()?);
        return Ok(ExitCode::SUCCESS);
    }

    let _log_guard = init_logging(cli.verbose, &config);

    if !config.output.color {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command else {
        bail!("No command given. Run `campus-faq --help` for usage.");
    };

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let app = App {
        config,
        format,
        quiet: cli.quiet,
    };

    // Ctrl-C cancels whatever is in flight
    let token = CancellationToken::new();
    let ctrl_c_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_token.cancel();
        }
    });

    tokio::select! {
        result = app.run(command) => result,
        _ = token.cancelled() => {
            warn!("Interrupted");
            eprintln!("Interrupted");
            Ok(ExitCode::from(EXIT_INTERRUPTED))
        }
    }
}

/// Install the tracing subscriber; the guard must live until exit
fn init_logging(verbose: u8, config: &FileConfig) -> Option<WorkerGuard> {
    // Initialize logging based on verbosity level, RUST_LOG wins when set
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = if config.logging.file {
        let appender = tracing_appender::rolling::daily(log_dir(config), "campus-faq.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

fn log_dir(config: &FileConfig) -> PathBuf {
    config
        .logging
        .dir
        .clone()
        .unwrap_or_else(|| config.store.resolve_data_dir().join("logs"))
}

struct App {
    config: FileConfig,
    format: OutputFormat,
    quiet: bool,
}

impl App {
    async fn run(&self, command: Command) -> Result<ExitCode> {
        info!("Starting campus-faq");

        match command {
            Command::Generate {
                questions,
                file,
                stdin,
            } => {
                let questions = questions::collect(questions, file.as_deref(), stdin).await?;
                self.generate(questions).await
            }
            Command::Inbox {
                teacher,
                all,
                publish,
                mark_read,
            } => {
                let mut input =
                    GenerateFromInboxInput::new(teacher).with_filter(Command::inbox_filter(all));
                if publish {
                    input = input.publishing();
                }
                if mark_read {
                    input = input.marking_read();
                }
                self.inbox(input).await
            }
            Command::Faq(faq) => self.manage(faq).await,
            Command::Message(message) => self.message(message).await,
        }
    }

    // === Dependency Injection ===

    fn consolidator(&self) -> Result<ConsolidateFaqsUseCase> {
        let generator =
            build_generator(&self.config).context("Failed to initialize the text generator")?;
        Ok(ConsolidateFaqsUseCase::new(generator)
            .with_conversation_logger(self.conversation_logger()))
    }

    fn conversation_logger(&self) -> Arc<dyn ConversationLogger> {
        if !self.config.logging.conversation_log {
            return Arc::new(NoConversationLogger);
        }
        match JsonlConversationLogger::open(log_dir(&self.config).join(DEFAULT_LOG_FILE)) {
            Some(logger) => {
                info!(path = %logger.path().display(), "Writing conversation transcript");
                Arc::new(logger)
            }
            None => Arc::new(NoConversationLogger),
        }
    }

    fn repository(&self) -> Arc<dyn FaqRepository> {
        Arc::new(JsonFaqStore::new(&self.config.store.resolve_data_dir()))
    }

    fn inbox_source(&self) -> Arc<JsonInbox> {
        Arc::new(JsonInbox::new(&self.config.store.resolve_data_dir()))
    }

    fn progress(&self) -> Box<dyn ProgressNotifier> {
        if self.quiet || self.format == OutputFormat::Json {
            Box::new(NoProgress)
        } else if std::io::stderr().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        }
    }

    // === Commands ===

    async fn generate(&self, questions: Vec<String>) -> Result<ExitCode> {
        let use_case = self.consolidator()?;
        let progress = self.progress();

        match use_case
            .consolidate_with_progress(QuestionBatch::new(questions), progress.as_ref())
            .await
        {
            Ok(result) => {
                match self.format {
                    OutputFormat::Json => println!("{}", ConsoleFormatter::format_result_json(&result)),
                    OutputFormat::Text => print!("{}", ConsoleFormatter::format_result(&result)),
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => Ok(Self::report_failure(&e)),
        }
    }

    async fn inbox(&self, input: GenerateFromInboxInput) -> Result<ExitCode> {
        let use_case = GenerateFromInboxUseCase::new(
            self.inbox_source(),
            self.consolidator()?,
            self.repository(),
        );
        let progress = self.progress();

        match use_case.execute_with_progress(input, progress.as_ref()).await {
            Ok(output) => {
                match self.format {
                    OutputFormat::Json => println!("{}", ConsoleFormatter::format_inbox_json(&output)),
                    OutputFormat::Text => print!("{}", ConsoleFormatter::format_inbox(&output)),
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(GenerateFromInboxError::Consolidate(e)) => Ok(Self::report_failure(&e)),
            Err(e) => Err(e.into()),
        }
    }

    async fn manage(&self, command: FaqCommand) -> Result<ExitCode> {
        let use_case = ManageFaqsUseCase::new(self.repository());
        let json = self.format == OutputFormat::Json;

        match command {
            FaqCommand::List => {
                let faqs = use_case.list().await?;
                if json {
                    println!("{}", ConsoleFormatter::format_json(&faqs));
                } else {
                    print!("{}", ConsoleFormatter::format_stored(&faqs));
                }
            }
            FaqCommand::Add { question, answer } => {
                let faq = use_case.add(&question, &answer).await?;
                if json {
                    println!("{}", ConsoleFormatter::format_json(&faq));
                } else {
                    print!("{}", ConsoleFormatter::format_stored_one(&faq));
                }
            }
            FaqCommand::Edit {
                id,
                question,
                answer,
            } => {
                let id: FaqId = id.parse()?;
                let faq = use_case.update(&id, &question, &answer).await?;
                if json {
                    println!("{}", ConsoleFormatter::format_json(&faq));
                } else {
                    print!("{}", ConsoleFormatter::format_stored_one(&faq));
                }
            }
            FaqCommand::Delete { id } => {
                let id: FaqId = id.parse()?;
                use_case.delete(&id).await?;
                if !json {
                    println!("Deleted {}", id);
                }
            }
        }

        Ok(ExitCode::SUCCESS)
    }

    async fn message(&self, command: MessageCommand) -> Result<ExitCode> {
        let use_case = InboxMessagesUseCase::new(self.inbox_source());
        let json = self.format == OutputFormat::Json;

        match command {
            MessageCommand::List { teacher, all } => {
                let notifications = use_case.list(&teacher, Command::inbox_filter(all)).await?;
                if json {
                    println!("{}", ConsoleFormatter::format_json(&notifications));
                } else {
                    print!("{}", ConsoleFormatter::format_notifications(&notifications));
                }
            }
            MessageCommand::Ask {
                from,
                teacher,
                question,
            } => {
                let sent = use_case.ask(&from, &teacher, &question).await?;
                if json {
                    println!("{}", ConsoleFormatter::format_json(&sent));
                } else {
                    print!("{}", ConsoleFormatter::format_sent(&sent));
                }
            }
            MessageCommand::Reply {
                teacher,
                id,
                message,
            } => {
                let sent = use_case.reply(&teacher, &id, &message).await?;
                if json {
                    println!("{}", ConsoleFormatter::format_json(&sent));
                } else {
                    print!("{}", ConsoleFormatter::format_sent(&sent));
                }
            }
        }

        Ok(ExitCode::SUCCESS)
    }

    /// Log the details, show the user only a generic notice
    fn report_failure(e: &ConsolidateError) -> ExitCode {
        error!(error = %e, transient = e.is_transient(), "FAQ generation failed");
        eprintln!("{}", ConsoleFormatter::format_failure(e.is_transient()));
        ExitCode::FAILURE
    }
}
