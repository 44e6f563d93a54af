use hangman::cli::{CliInterface, parse_cli};
use hangman::logging::init_logger;
use hangman::tui::TuiInterface;
use hangman::{GameMode, GameOutcome, HangmanError, game_loop, info_log, resolve_wordbank};
use std::io;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logger(cli.verbose, cli.tui);
    info_log!("Starting hangman: {:?}", cli);

    let preset_mode = match cli.mode.as_deref().map(str::parse::<GameMode>).transpose() {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(exit_status(&Err(e)));
        }
    };

    let wordbank = resolve_wordbank(cli.wordbank_path.as_deref().map(Path::new));
    let mut rng = rand::rng();

    // The TUI is dropped before any error is printed so the terminal is restored
    let result = if cli.tui {
        TuiInterface::new()
            .map_err(HangmanError::from)
            .and_then(|mut tui| game_loop(&wordbank, preset_mode, &mut tui, &mut rng))
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&wordbank, preset_mode, &mut interface, &mut rng)
    };

    match &result {
        Ok(outcome) => {
            info_log!("Session finished: {:?}", outcome);
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
        }
    }
    ExitCode::from(exit_status(&result))
}

/// 0 for any finished or abandoned session, 1 when setup failed.
fn exit_status(result: &Result<GameOutcome, HangmanError>) -> u8 {
    match result {
        Ok(GameOutcome::Won | GameOutcome::Lost | GameOutcome::Abandoned) => 0,
        Err(HangmanError::InvalidMode(_))
        | Err(HangmanError::EmptySecret)
        | Err(HangmanError::InvalidSecret(_))
        | Err(HangmanError::Io(_)) => 1,
    }
}
