// Interactive passenger console over a built ShipIndex
use std::io::{self, BufRead, Write};
use crate::index::ShipIndex;

pub const WELCOME: &str = "Welcome to Intergalactic Airways, the premier service for coordinating your transportation needs!";
pub const INSTRUCTIONS: &str = "Please enter the number of passengers that need transportation below or type \"exit\" to leave.";
pub const REJECTION: &str = "That's not how the Force works!";
pub const FAREWELL: &str = "Thank you for using Intergalactic Airways and may the Force be with you!";
pub const RESULTS_HEADER: &str = "The following ship and pilot combinations can carry enough passengers:";
const RULE: &str = "--------------------------------------";
const PROMPT: &str = ": ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Query(u32),
    Exit,
    Invalid,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.eq_ignore_ascii_case("exit") {
            return Command::Exit;
        }
        match line.parse::<u32>() {
            Ok(passengers) => Command::Query(passengers),
            Err(_) => Command::Invalid,
        }
    }
}

pub struct Shell {
    index: ShipIndex,
}

impl Shell {
    pub fn new(index: ShipIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &ShipIndex {
        &self.index
    }

    /// Read commands until "exit" or end of input.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", WELCOME)?;
        writeln!(output, "{}", INSTRUCTIONS)?;

        let mut line = String::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            match Command::parse(&line) {
                Command::Exit => break,
                Command::Query(passengers) => self.write_results(passengers, &mut output)?,
                Command::Invalid => {
                    writeln!(output, "{}", REJECTION)?;
                    writeln!(output)?;
                }
            }
        }

        writeln!(output, "{}", FAREWELL)?;
        output.flush()
    }

    fn write_results<W: Write>(&self, passengers: u32, output: &mut W) -> io::Result<()> {
        let labels = self.index.query(passengers);
        if labels.is_empty() {
            return writeln!(output, "No starships found that can carry {} passengers.", passengers);
        }

        writeln!(output)?;
        writeln!(output, "{}", RULE)?;
        writeln!(output, "{}", RESULTS_HEADER)?;
        writeln!(output)?;
        for label in labels {
            writeln!(output, "{}", label)?;
        }
        writeln!(output, "{}", RULE)?;
        writeln!(output)
    }
}
