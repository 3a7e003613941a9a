//! termnorm binary.
//!
//! # Usage
//!
//! ```bash
//! # Print normalized events until `q` or Ctrl+C
//! termnorm --log-file termnorm.log inspect --output-mode 256
//!
//! # Same, with an interrupt event injected every second
//! termnorm inspect --interrupt-every 1000
//!
//! # Turn command output into menu candidates
//! git branch -r | termnorm menu --filter '(?P<remote>[a-z_]+)/(?P<branch>.*)' \
//!     --value '{{ .branch }}' --label 'Remote: {{ .remote }}'
//! ```

use std::{
    fs::File,
    io::{self, stdout},
    path::PathBuf,
    sync::Mutex,
    thread,
    time::Duration,
};

use clap::{Parser, Subcommand, ValueEnum};
use termnorm_core::{EventLoop, OutputMode};
use termnorm_term::{TerminalConfig, TerminalGuard, TerminalSource, run_inspector, run_menu};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Terminal input normalization tools
#[derive(Parser, Debug)]
#[command(name = "termnorm")]
#[command(about = "Inspect normalized terminal input and extract menu candidates")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Write logs to this file; logging is off without it
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every normalized terminal event until `q` or Ctrl+C
    Inspect {
        /// Do not capture the mouse
        #[arg(long)]
        no_mouse: bool,

        /// Stay on the main screen
        #[arg(long)]
        no_alt_screen: bool,

        /// Colour capability of the terminal
        #[arg(long, value_enum, default_value_t = ModeArg::Truecolor)]
        output_mode: ModeArg,

        /// Inject an interrupt event every N milliseconds
        #[arg(long, value_name = "MS")]
        interrupt_every: Option<u64>,
    },

    /// Read command output on stdin and print `label<TAB>value` candidates
    Menu {
        /// Regular expression matched against each line
        #[arg(short, long)]
        filter: String,

        /// Template for the candidate value
        #[arg(short, long)]
        value: String,

        /// Template for the display label (defaults to the value)
        #[arg(short, long, default_value = "")]
        label: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    /// 16 colours
    Normal,
    /// 256 colours
    #[value(name = "256")]
    Palette256,
    /// 216-colour cube
    #[value(name = "216")]
    Cube216,
    /// 24-step grayscale
    Grayscale,
    /// 24-bit colour
    Truecolor,
}

impl From<ModeArg> for OutputMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Normal => OutputMode::Normal,
            ModeArg::Palette256 => OutputMode::Output256,
            ModeArg::Cube216 => OutputMode::Output216,
            ModeArg::Grayscale => OutputMode::Grayscale,
            ModeArg::Truecolor => OutputMode::TrueColor,
        }
    }
}

/// The terminal owns stdout, so logs only go to a file.
fn init_logging(level: &str, path: Option<&PathBuf>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log_level, args.log_file.as_ref())?;

    match args.command {
        Command::Inspect { no_mouse, no_alt_screen, output_mode, interrupt_every } => {
            let config = TerminalConfig {
                mouse_capture: !no_mouse,
                alternate_screen: !no_alt_screen,
                output_mode: output_mode.into(),
            };
            tracing::info!(?config, "starting inspector");

            let _guard = TerminalGuard::enter(config)?;
            let source = TerminalSource::new();
            if let Some(ms) = interrupt_every.filter(|&ms| ms > 0) {
                let interrupter = source.interrupter();
                // Detached; exits with the process.
                thread::spawn(move || {
                    loop {
                        thread::sleep(Duration::from_millis(ms));
                        interrupter.interrupt();
                    }
                });
            }
            let mut events = EventLoop::new(source);
            let printed = run_inspector(&mut events, &mut stdout(), config.output_mode)?;
            tracing::info!(printed, "inspector finished");
        },
        Command::Menu { filter, value, label } => {
            let count = run_menu(io::stdin().lock(), &mut stdout().lock(), &filter, &value, &label)?;
            tracing::info!(count, "menu candidates written");
        },
    }

    Ok(())
}
