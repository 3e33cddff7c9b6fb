use anthill::frontend::{Headless, TerminalFrontend};
use anthill::logging;
use anthill::prelude::*;
use clap::Parser;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    if let Some(path) = &args.log_file {
        logging::init(path)?;
    }

    let config = GameConfig::try_from(&args)?;
    let rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };
    let glyphs = config.glyphs;
    let mut game = Game::new(config, rng)?;

    if args.headless {
        let mut frontend = Headless::new(io::stdin().lock(), io::stdout().lock());
        game.run(&mut frontend)?;
    } else {
        // dropping `term` restores the terminal on every early return
        let mut term = TerminalFrontend::new(glyphs);
        term.enter()?;
        let result = game.run(&mut term);
        term.exit()?;
        result?;
    }

    game.print_summary();
    Ok(())
}
