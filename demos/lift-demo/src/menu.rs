//! Interactive main menu, canned-case menu, and manual input session.
//!
//! Everything reads through a [`Prompter`], so sessions can be scripted.

use std::io::{self, BufRead, Stdout, Write};

use anyhow::Result;
use lift_core::{CallRequest, Direction, Floor, FloorRange};
use lift_scenario::{Scenario, canned, find_canned};
use lift_sim::{Elevator, LiftObserver};

use crate::console::stop_list;

// ── Prompter ──────────────────────────────────────────────────────────────────

/// Line-oriented prompt over any reader/writer pair.
pub struct Prompter<R: BufRead, W: Write> {
    input:  R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line.  `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

// ── Menu choices ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MainChoice {
    Manual,
    TestCases,
    Exit,
}

impl MainChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1"               => Some(MainChoice::Manual),
            "2"               => Some(MainChoice::TestCases),
            "e" | "exit" | "q" => Some(MainChoice::Exit),
            _                 => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseChoice {
    Run(Scenario),
    Back,
}

impl CaseChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("b") {
            return Some(CaseChoice::Back);
        }
        find_canned(input).map(CaseChoice::Run)
    }
}

// ── Menus ─────────────────────────────────────────────────────────────────────

/// The main menu loop.  Returns on `e` or end of input.
///
/// One elevator serves the whole session; canned cases continue from
/// wherever the previous action left the car.
pub fn main_menu<O, R, W>(elevator: &mut Elevator<O>, p: &mut Prompter<R, W>) -> Result<()>
where
    O: LiftObserver,
    R: BufRead,
    W: Write,
{
    loop {
        p.say("\n=== Elevator Simulation ===")?;
        p.say("1. Manual Input")?;
        p.say("2. Run Test Case")?;
        p.say("e. Exit")?;
        let Some(line) = p.ask("> ")? else { return Ok(()) };

        match MainChoice::parse(&line) {
            Some(MainChoice::Manual)    => manual_session(elevator, p)?,
            Some(MainChoice::TestCases) => test_case_menu(elevator, p)?,
            Some(MainChoice::Exit)      => return Ok(()),
            None                        => p.say("Invalid option.")?,
        }
    }
}

/// The canned-case submenu.  Returns on `b` or end of input.
pub fn test_case_menu<O, R, W>(elevator: &mut Elevator<O>, p: &mut Prompter<R, W>) -> Result<()>
where
    O: LiftObserver,
    R: BufRead,
    W: Write,
{
    loop {
        p.say("\n=== Test Cases ===")?;
        for scenario in canned() {
            let key = scenario.name.trim_start_matches("case-");
            p.say(&format!("{key}. {}", scenario.description))?;
        }
        p.say("b. Back to Main Menu")?;
        let Some(line) = p.ask("> ")? else { return Ok(()) };

        match CaseChoice::parse(&line) {
            Some(CaseChoice::Back) => return Ok(()),
            Some(CaseChoice::Run(scenario)) => match scenario.execute(elevator) {
                Ok(outcome) => {
                    p.say(&format!(
                        "\nTest Case {} completed. Pickups: {}. Drop-offs: {}.",
                        scenario.name.trim_start_matches("case-"),
                        stop_list(&outcome.pickup.stops),
                        stop_list(&outcome.dropoff.stops),
                    ))?;
                }
                Err(e) => p.say(&format!("Test case failed: {e}"))?,
            },
            None => p.say("Invalid test case selection.")?,
        }
    }
}

// ── Manual input ──────────────────────────────────────────────────────────────

/// Collect hall calls, run, collect destinations, run.
///
/// The car is reset to the ground floor first.  Typing `e` at a floor prompt
/// abandons the session and resets again, so no half-entered calls linger.
/// A single-floor building has no valid call direction, so the session ends
/// before the first prompt.
pub fn manual_session<O, R, W>(elevator: &mut Elevator<O>, p: &mut Prompter<R, W>) -> Result<()>
where
    O: LiftObserver,
    R: BufRead,
    W: Write,
{
    elevator.reset();
    let range = elevator.floor_range();
    if range.len() < 2 {
        p.say(&format!("Manual input needs at least two floors; this building serves {range}."))?;
        return Ok(());
    }
    let span = span(&range);

    let Some(line) = p.ask("Enter number of external requests: ")? else { return Ok(()) };
    let count = match line.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            p.say("Invalid number.")?;
            return Ok(());
        }
    };

    for i in 1..=count {
        let floor = loop {
            let Some(line) = p.ask(&format!("Request {i} - Floor you're on ({span}): "))? else {
                return abandon(elevator);
            };
            if line.eq_ignore_ascii_case("e") {
                return abandon(elevator);
            }
            match line.parse::<Floor>().and_then(|f| range.check_floor(f)) {
                Ok(floor) => break floor,
                Err(_) => p.say("Invalid floor.")?,
            }
        };

        let direction = loop {
            let Some(line) = p.ask(&format!("Request {i} - Direction (up/down): "))? else {
                return abandon(elevator);
            };
            let direction = match line.parse::<Direction>() {
                Ok(d) if d.is_moving() => d,
                _ => {
                    p.say("Invalid direction.")?;
                    continue;
                }
            };
            match range.check_call(&CallRequest::new(floor, direction)) {
                Ok(()) => break direction,
                Err(_) if direction == Direction::Down => p.say("You're on the lowest floor. Can't go down.")?,
                Err(_) => p.say("You're on the top floor. Can't go up.")?,
            }
        };

        elevator.submit_call(CallRequest::new(floor, direction))?;
        p.say(&format!("Passenger externally pressed \"{direction}\" at floor {}.", floor.number()))?;
    }

    p.say("\nRunning elevator...")?;
    elevator.run();

    let Some(line) = p.ask("\nEnter number of internal destinations: ")? else { return Ok(()) };
    let count = match line.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => return Ok(()),
    };

    for i in 1..=count {
        loop {
            let Some(line) = p.ask(&format!("Destination {i} ({span}): "))? else { return Ok(()) };
            let floor = match line.parse::<Floor>().and_then(|f| range.check_floor(f)) {
                Ok(floor) => floor,
                Err(_) => {
                    p.say("Invalid floor.")?;
                    continue;
                }
            };
            if floor == elevator.current_floor() {
                p.say("Already at that floor. Choose another.")?;
                continue;
            }
            elevator.submit_destination(floor)?;
            p.say(&format!("Passenger internally selected \"{}\".", floor.number()))?;
            break;
        }
    }

    p.say("\nRunning elevator...")?;
    elevator.run();
    Ok(())
}

fn abandon<O: LiftObserver>(elevator: &mut Elevator<O>) -> Result<()> {
    elevator.reset();
    Ok(())
}

fn span(range: &FloorRange) -> String {
    format!("{}-{}", range.lowest.number(), range.highest.number())
}
