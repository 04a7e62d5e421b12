//! Resume analyzer: keyword matching against a job description with optional AI feedback

mod cli;
mod config;
mod error;
mod feedback;
mod input;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ResumeAnalyzerError};
use feedback::{Feedback, FeedbackRequester};
use indicatif::{ProgressBar, ProgressStyle};
use input::manager::InputManager;
use log::{error, info, warn};
use output::formatter::ReportGenerator;
use output::report::{AnalysisReport, ReportMetadata};
use processing::{analyze, KeywordExtractor, Lexicon};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            ai_feedback,
            detailed,
            output,
            save,
        } => {
            info!("Starting resume analysis");

            cli::validate_file_extension(&resume, &["pdf", "docx"])
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;

            cli::validate_file_extension(&job, &["txt", "md"]).map_err(|e| {
                ResumeAnalyzerError::InvalidInput(format!("Job description file: {}", e))
            })?;

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeAnalyzerError::InvalidInput)?;

            let mut input_manager = InputManager::new();

            let job_text = input_manager.extract_job(&job).await?;
            if job_text.trim().is_empty() {
                return Err(ResumeAnalyzerError::InvalidInput(
                    "Job description is empty; nothing to analyze".to_string(),
                ));
            }

            // Corrupt or unextractable resumes degrade to empty text so the
            // keyword analysis still runs and reports every keyword missing.
            let resume_text = match input_manager.extract_resume(&resume).await {
                Ok(text) => text,
                Err(e) if e.is_extraction_failure() => {
                    warn!("Resume extraction failed, continuing with empty text: {}", e);
                    eprintln!("Warning: could not extract resume text ({})", e);
                    String::new()
                }
                Err(e) => return Err(e),
            };

            info!(
                "Extracted {} resume characters, {} job description characters",
                resume_text.len(),
                job_text.len()
            );

            let lexicon = Lexicon::load(&config.analysis)?;
            let extractor = KeywordExtractor::new(lexicon);

            let jd_keywords = extractor.build_keyword_set(&job_text);
            info!("Job description yielded {} keywords", jd_keywords.len());

            let match_result = analyze(&resume_text, &jd_keywords);

            let feedback = if ai_feedback {
                Some(request_feedback(&config, &resume_text, &job_text).await)
            } else {
                None
            };

            let report = AnalysisReport {
                resume_path: resume.to_string_lossy().to_string(),
                job_path: job.to_string_lossy().to_string(),
                resume_char_count: resume_text.chars().count(),
                jd_keyword_count: jd_keywords.len(),
                match_result,
                feedback,
                metadata: ReportMetadata::now(),
            };

            let generator = ReportGenerator::new(config.output.color_output, detailed);
            let rendered = generator.generate(&report, &output_format)?;
            println!("{}", rendered);

            if let Some(save_path) = save {
                save_report(&generator, &rendered, &save_path)?;
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current Configuration\n");
                println!("Feedback endpoint: {}", config.feedback.endpoint);
                println!("Feedback model: {}", config.feedback.model);
                println!(
                    "Feedback credential: {}",
                    if config.has_feedback_credential() {
                        "configured"
                    } else {
                        "not configured"
                    }
                );
                match &config.analysis.stop_words_path {
                    Some(path) => println!("Stop-word list: {}", path.display()),
                    None => println!("Stop-word list: built-in English"),
                }
            }

            Some(ConfigAction::Reset) => {
                println!("Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

/// Run the feedback request behind a spinner. A missing credential or a
/// delegate failure both come back as displayable text; the keyword result
/// renders regardless.
async fn request_feedback(config: &Config, resume_text: &str, job_text: &str) -> Feedback {
    let requester = match FeedbackRequester::new(&config.feedback) {
        Ok(requester) => requester,
        Err(e) => {
            warn!("AI feedback unavailable: {}", e);
            return Feedback::Unavailable(format!("AI feedback is not available: {}", e));
        }
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Requesting AI feedback...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));

    let feedback = requester.request_feedback(resume_text, job_text).await;

    spinner.finish_and_clear();
    feedback
}

fn save_report(generator: &ReportGenerator, rendered: &str, path: &PathBuf) -> Result<()> {
    generator.save_to_file(rendered, path)?;
    println!("Report saved to {}", path.display());
    Ok(())
}
