use std::{io, process::exit};

use anyhow::{Context, bail};

use crate::{
    state::SharedState,
    ticker::{TickerCommand, TickerHost},
};

pub fn run_cli(state: SharedState, ticker: TickerHost) {
    for line_res in io::stdin().lines() {
        let line = match line_res {
            Ok(line) => line,
            Err(e) => {
                log::error!("Reading console input: {e}");
                break;
            }
        };

        match handle_cmd(&state, &ticker, line.split_whitespace()) {
            Ok(Some(output)) => println!("{output}"),
            Ok(None) => println!("OK"),
            Err(e) => eprintln!("! {e:?}"),
        }
    }
}

fn handle_cmd<'a, I>(
    state: &SharedState,
    ticker: &TickerHost,
    mut args: I,
) -> anyhow::Result<Option<String>>
where
    I: Iterator<Item = &'a str>,
{
    match args.next().context("No command")? {
        "step" => {
            let times = args.next().unwrap_or("1").parse::<usize>()?;
            state.advance(times);
        }

        "pause" => ticker.send(TickerCommand::Pause),

        "resume" => ticker.send(TickerCommand::Resume),

        "speed" => {
            let speed = args
                .next()
                .context("missing generations per second")?
                .parse::<u32>()?;
            if speed == 0 {
                bail!("speed must be at least 1");
            }
            ticker.send(TickerCommand::SetSpeed(speed));
        }

        "random" => {
            let seed = args.next().map(str::parse::<u64>).transpose()?;
            state.write().reseed(seed);
        }

        "clear" => state.write().clear(),

        "show" => return Ok(Some(state.read().life.grid().to_string())),

        "stats" => {
            let state = state.read();
            let grid = state.life.grid();
            return Ok(Some(format!(
                "generation {} | {}x{} | population {}",
                state.generation,
                grid.height(),
                grid.width(),
                grid.population()
            )));
        }

        "exit" => {
            ticker.send(TickerCommand::Stop);
            exit(0);
        }

        _ => bail!("Unknown command"),
    }

    Ok(None)
}
