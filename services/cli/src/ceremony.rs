use crate::cli::SortArgs;
use crate::presentation;
use crate::prompt::TerminalRespondent;
use sorting_hat::config::{AppConfig, QuizConfig};
use sorting_hat::error::AppError;
use sorting_hat::quiz::{QuizMode, RunOutcome, SortingHat};
use sorting_hat::referential::ReferentialTables;
use sorting_hat::telemetry;
use std::io::Write;
use tracing::info;

pub(crate) fn run(mut args: SortArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(dir) = args.data_dir.take() {
        config.quiz.source = QuizConfig::directory_source(dir)?;
    }
    if args.long_quiz {
        config.quiz.long_quiz = true;
    }

    telemetry::init(&config.telemetry)?;

    let tables = ReferentialTables::load(&config.quiz.source)?;
    let mut hat = SortingHat::new(&tables);
    let items = hat.select(QuizMode::from_long_flag(config.quiz.long_quiz));

    let mut stdout = std::io::stdout();
    presentation::render_opening(&mut stdout)?;
    stdout.flush()?;

    let mut respondent = TerminalRespondent::default();
    match hat.run(items, &mut respondent)? {
        RunOutcome::Sorted(verdict) => {
            presentation::render_verdict(&mut stdout, &verdict.house)?;
        }
        RunOutcome::Aborted => {
            info!("sorting cancelled by the respondent");
        }
    }

    Ok(())
}
