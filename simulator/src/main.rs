//! ----- SIMULATOR -----
//! Driver for the elevator simulation: fires one tick per timer beat
//! (or per Enter keypress in manual mode) and redraws the live view
//! after each one. Type q and Enter to quit.

use std::io::stdin;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{select, tick, unbounded};
use rand::rngs::StdRng;
use rand::SeedableRng;

use simulation::building::Building;

pub mod config;
pub mod display;
pub mod logger;

fn main() -> std::io::Result<()> {
    // READ CONFIGURATION
    let config = config::SimulatorConfig::get();

    // INITIALIZE LOGGING
    let log_buffer = logger::init();

    // INITIALIZE RNG
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // INITIALIZE BUILDING
    let mut building = Building::new();
    for _ in 0..config.riders {
        building.spawn_rider(&mut rng).unwrap();
    }

    // INITIALIZE THREAD FOR KEYBOARD INPUT
    let (input_tx, input_rx) = unbounded();
    thread::spawn(move || {
        loop {
            let mut line = String::new();
            match stdin().read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {},
            }
            let quit = line.trim() == "q";
            if input_tx.send(!quit).is_err() || quit {
                break
            }
        }
    });

    // RUN SIMULATION
    let mut display = display::Display::new();
    display.prepare()?;
    let timer = tick(Duration::from_millis(config.tick_ms));
    loop {
        select! {
            recv(timer) -> _ => {
                if config.manual {
                    continue
                }
            },
            recv(input_rx) -> msg => {
                match msg {
                    Ok(true) => {
                        if !config.manual {
                            continue
                        }
                    },
                    Ok(false) | Err(_) => break,
                }
            },
        }

        if let Err(error) = building.tick(&mut rng) {
            log::error!("Tick failed: {}", error);
        }
        let log_lines: Vec<String> = log_buffer.lock().unwrap().iter().cloned().collect();
        display.print_status(&building, &log_lines)?;
    }

    println!("STOPPING SIMULATOR...");
    Ok(())
}
