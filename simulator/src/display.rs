//! ----- DISPLAY MODULE -----
//! Redraw-in-place terminal view: the shaft with the car and per-floor
//! waiting counts, a status table and the most recent log lines.

use std::io::{stdout, Stdout, Write};

use crossterm::{cursor, terminal, ExecutableCommand, Result};

use simulation::building::Building;
use simulation::elevator::ELEVATOR_CAPACITY;
use simulation::floor::FLOOR_MAX_LIMIT;

use crate::logger::LOG_CAPACITY;

// Shaft (2 lines per floor plus the closing edge), blank line, status
// table, blank line, log header, log panel.
const DISPLAY_SIZE: u16 =
    (FLOOR_MAX_LIMIT as u16) * 2 + 1 + 1 + 13 + 1 + 1 + (LOG_CAPACITY as u16);

pub struct Display {
    stdout: Stdout,
}

impl Display {
    pub fn new() -> Self {
        Display {
            stdout: stdout(),
        }
    }

    /// Scroll the terminal far enough that the first redraw has room
    /// to move up into.
    pub fn prepare(&mut self) -> Result<()> {
        for _ in 0..DISPLAY_SIZE {
            writeln!(self.stdout)?;
        }
        Ok(())
    }

    pub fn print_status(&mut self, building: &Building, log_lines: &[String]) -> Result<()> {
        self.stdout.execute(cursor::MoveUp(DISPLAY_SIZE))?;
        self.stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;

        let elevator = building.elevator();
        for floor in (1..=FLOOR_MAX_LIMIT).rev() {
            writeln!(self.stdout, "+-----+")?;
            let waiting = building.waiting_at(floor).len();
            if elevator.floor() == floor {
                writeln!(
                    self.stdout,
                    "| |{:^3}| | {:>2}f {:>2}p <-- ELEVATOR",
                    building.riders_in_car(), floor, waiting,
                )?;
            } else {
                writeln!(self.stdout, "|     | {:>2}f {:>2}p", floor, waiting)?;
            }
        }
        writeln!(self.stdout, "+-----+")?;
        writeln!(self.stdout)?;

        let queue = elevator
            .floor_queue()
            .floors()
            .iter()
            .map(|floor| floor.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        writeln!(self.stdout, "+-------------------------+")?;
        writeln!(self.stdout, "| ELEVATOR                |")?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "STATE", elevator.status().as_string())?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "FLOOR", elevator.floor())?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "DIRECTION", elevator.direction().as_string())?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "QUEUE", queue)?;
        writeln!(self.stdout, "+------------+------------+")?;
        let occupancy = format!("{}/{}", building.riders_in_car(), ELEVATOR_CAPACITY);
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "RIDERS", occupancy)?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout)?;

        writeln!(self.stdout, "----- LOG -----")?;
        for index in 0..LOG_CAPACITY {
            match log_lines.get(index) {
                Some(line) => writeln!(self.stdout, "{}", line)?,
                None => writeln!(self.stdout)?,
            }
        }

        Ok(())
    }
}
