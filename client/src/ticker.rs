use std::{
    sync::mpsc::{self, Sender, TryRecvError},
    thread,
};

use crate::{config::tick_interval, sleeper::Sleeper, state::SharedState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerCommand {
    Pause,
    Resume,
    TogglePause,
    SetSpeed(u32),
    Stop,
}

/// Handle to the thread that advances the simulation `speed` times per second.
#[derive(Clone)]
pub struct TickerHost {
    command_sender: Sender<TickerCommand>,
}

impl TickerHost {
    pub fn start(state: SharedState, speed: u32) -> Self {
        let (command_sender, command_receiver) = mpsc::channel();

        thread::spawn(move || {
            let mut sleeper = Sleeper::new(tick_interval(speed));
            let mut paused = false;

            loop {
                loop {
                    let command = match command_receiver.try_recv() {
                        Ok(command) => command,
                        Err(TryRecvError::Empty) => break,
                        Err(TryRecvError::Disconnected) => return,
                    };

                    log::debug!("Ticker received {command:?}");
                    match command {
                        TickerCommand::Pause => paused = true,
                        TickerCommand::Resume => paused = false,
                        TickerCommand::TogglePause => paused = !paused,
                        TickerCommand::SetSpeed(speed) => {
                            sleeper.target_delta_time = tick_interval(speed)
                        }
                        TickerCommand::Stop => return,
                    }
                }

                if !paused {
                    state.write().advance(1);
                }

                sleeper.sleep();
            }
        });

        Self { command_sender }
    }

    /// A handle with no thread behind it; commands pile up in the returned receiver.
    #[cfg(test)]
    pub fn detached() -> (Self, mpsc::Receiver<TickerCommand>) {
        let (command_sender, command_receiver) = mpsc::channel();
        (Self { command_sender }, command_receiver)
    }

    pub fn send(&self, command: TickerCommand) {
        if self.command_sender.send(command).is_err() {
            log::warn!("Ticker has stopped, dropping {command:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use liblife::Grid;

    use super::*;
    use crate::state::State;

    fn wait_for<F>(mut condition: F) -> bool
    where
        F: FnMut() -> bool,
    {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if condition() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn test_ticks_until_paused() {
        let state = SharedState::new(State::new(Grid::new(4, 4), false));
        let ticker = TickerHost::start(state.clone(), 200);

        assert!(wait_for(|| state.read().generation >= 3));

        ticker.send(TickerCommand::Pause);
        thread::sleep(Duration::from_millis(50));
        let paused_at = state.read().generation;
        thread::sleep(Duration::from_millis(50));
        assert_eq!(state.read().generation, paused_at);

        ticker.send(TickerCommand::Resume);
        assert!(wait_for(|| state.read().generation > paused_at));

        ticker.send(TickerCommand::Stop);
    }
}
