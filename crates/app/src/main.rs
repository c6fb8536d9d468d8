use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    Clock, FeedbackKind, GameRunner, GameSession, PlayerInput, QuestionBank, RenderRequest,
    ViewRenderer,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trivia_core::model::GameSettings;
use ui::{App, UiApp, build_app_context};

#[derive(Parser, Debug)]
#[command(name = "trivia", about = "A timed multiple-choice trivia game")]
struct Cli {
    #[command(flatten)]
    game: GameArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Open the desktop window (default).
    Ui,
    /// Play in the terminal.
    Play,
}

#[derive(Args, Debug)]
struct GameArgs {
    /// JSON question bank; the built-in questions are used when omitted.
    #[arg(long, env = "TRIVIA_QUESTIONS", global = true)]
    questions: Option<PathBuf>,
    /// Seconds to answer each question.
    #[arg(
        long,
        env = "TRIVIA_QUESTION_SECS",
        default_value_t = GameSettings::DEFAULT_QUESTION_SECS,
        global = true
    )]
    question_secs: u32,
    /// Seconds the answer stays on screen.
    #[arg(
        long,
        env = "TRIVIA_FEEDBACK_SECS",
        default_value_t = GameSettings::DEFAULT_FEEDBACK_SECS,
        global = true
    )]
    feedback_secs: u32,
}

impl GameArgs {
    fn settings(&self) -> Result<GameSettings, Box<dyn std::error::Error>> {
        Ok(GameSettings::new(self.question_secs, self.feedback_secs)?)
    }

    fn bank(&self) -> Result<QuestionBank, Box<dyn std::error::Error>> {
        match &self.questions {
            Some(path) => Ok(QuestionBank::from_path(path)?),
            None => Ok(QuestionBank::builtin()),
        }
    }
}

struct DesktopApp {
    question_bank: Arc<QuestionBank>,
    settings: GameSettings,
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.question_bank)
    }

    fn settings(&self) -> GameSettings {
        self.settings
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

/// Prints render requests as plain text.
#[derive(Default)]
struct TerminalRenderer;

impl ViewRenderer for TerminalRenderer {
    fn render(&mut self, request: RenderRequest) {
        let mut out = std::io::stdout().lock();
        // A closed stdout leaves nothing useful to report to.
        let _ = match request {
            RenderRequest::Question { prompt, choices } => {
                let mut text = format!("\n{prompt}\n");
                for (index, choice) in choices.iter().enumerate() {
                    text.push_str(&format!("  {}) {choice}\n", index + 1));
                }
                write!(out, "{text}")
            }
            RenderRequest::Countdown(seconds) => write!(out, "\r  time remaining: {seconds:>2} "),
            RenderRequest::Feedback {
                kind,
                correct_answer,
            } => match kind {
                FeedbackKind::Correct => writeln!(out, "\nCongratulations! That is correct."),
                FeedbackKind::Incorrect => {
                    writeln!(out, "\nOh-oh! The correct answer is: {correct_answer}")
                }
                FeedbackKind::TimedOut => {
                    writeln!(out, "\nTime's up! The correct answer is: {correct_answer}")
                }
            },
            RenderRequest::Summary { correct, incorrect } => writeln!(
                out,
                "\nWe have reached the end of the game!\n  \
                 {correct} answered correctly\n  \
                 {incorrect} answered incorrectly\n\
                 Press r to play again or q to quit."
            ),
        };
        let _ = out.flush();
    }
}

fn parse_input(line: &str) -> Option<PlayerInput> {
    match line.trim() {
        "r" | "R" => Some(PlayerInput::Restart),
        raw => raw
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .map(PlayerInput::SelectIndex),
    }
}

async fn forward_stdin(tx: mpsc::UnboundedSender<PlayerInput>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if matches!(line.trim(), "q" | "Q") {
            break;
        }
        let Some(input) = parse_input(&line) else {
            continue;
        };
        if tx.send(input).is_err() {
            break;
        }
    }
}

fn play(bank: &QuestionBank, settings: GameSettings) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(forward_stdin(tx));

        println!("Type the number of your answer and press enter. q quits.");
        let runner = GameRunner::new(
            GameSession::new(settings),
            TerminalRenderer,
            Clock::system(),
        );
        let (score, _) = runner.run(bank.questions(), rx).await?;
        info!(
            correct = score.correct(),
            incorrect = score.incorrect(),
            "terminal game closed"
        );
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}

fn launch_ui(bank: QuestionBank, settings: GameSettings) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        question_bank: Arc::new(bank),
        settings,
        clock: Clock::system(),
    });
    let context = build_app_context(&app);

    // Some dev setups default to an always-on-top window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Trivia")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = cli.game.settings()?;
    let bank = cli.game.bank()?;
    info!(
        questions = bank.len(),
        question_secs = settings.question_secs(),
        feedback_secs = settings.feedback_secs(),
        "configuration loaded"
    );

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            launch_ui(bank, settings);
            Ok(())
        }
        Command::Play => play(&bank, settings),
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
