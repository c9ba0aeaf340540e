/*
 * Interactive single step control. Commands are read from the terminal
 * with rustyline and parsed with the monitor.pest grammar.
 */
use ansi_term::Colour;
use pest::error::{Error as PestError, ErrorVariant, InputLocation};
use pest::Parser;
use pest_derive::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;

use super::config::{parse_hex, ConfigError};
use super::memory::DebugIO;
use super::runner::{Command, Controller, StopSignal};
use super::Cpu;

const DEFAULT_DUMP_LINES: usize = 4;

#[derive(Parser)]
#[grammar = "monitor.pest"]
struct PestParser;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("syntax error: {0}")]
    Syntax(Box<PestError<Rule>>),
    #[error(transparent)]
    Value(#[from] ConfigError),
    #[error("cannot parse '{0}' as a number of lines")]
    Length(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorCommand {
    Step,
    Continue,
    Quit,
    Registers,
    Memory { address: u16, lines: usize },
    Help,
}

impl MonitorCommand {
    /// An empty line is a step.
    pub fn parse(line: &str) -> Result<MonitorCommand, MonitorError> {
        let mut pairs = PestParser::parse(Rule::sentence, line)
            .map_err(|e| MonitorError::Syntax(Box::new(e)))?;
        let command = match pairs.next().and_then(|sentence| sentence.into_inner().next()) {
            Some(pair) => pair,
            None => return Ok(MonitorCommand::Step),
        };

        let command = match command.as_rule() {
            Rule::step_cmd => MonitorCommand::Step,
            Rule::continue_cmd => MonitorCommand::Continue,
            Rule::quit_cmd => MonitorCommand::Quit,
            Rule::registers_cmd => MonitorCommand::Registers,
            Rule::help_cmd => MonitorCommand::Help,
            Rule::memory_cmd => {
                let mut address = 0x0000;
                let mut lines = DEFAULT_DUMP_LINES;
                for argument in command.into_inner() {
                    match argument.as_rule() {
                        Rule::address => address = parse_hex(argument.as_str())?,
                        Rule::length => {
                            lines = argument
                                .as_str()
                                .parse::<usize>()
                                .map_err(|_| MonitorError::Length(argument.as_str().to_owned()))?
                        }
                        _ => {}
                    }
                }
                MonitorCommand::Memory { address, lines }
            }
            // EOI
            _ => MonitorCommand::Step,
        };

        Ok(command)
    }
}

fn print_err(msg: &str) {
    println!("{}: {}", Colour::Red.paint("Error"), msg);
}

fn display_error(err: &PestError<Rule>) {
    let mark = match err.location {
        InputLocation::Pos(x) => format!("{}↑", " ".repeat(x)),
        InputLocation::Span((a, b)) => {
            format!("{}↑{}↑", " ".repeat(a), " ".repeat(b.saturating_sub(a)))
        }
    };
    println!("   {}", mark);
    print_err("could not parse the command");
    if let ErrorVariant::ParsingError { positives, .. } = &err.variant {
        println!(
            "{}",
            Colour::Fixed(240).paint(format!("hint: expected {:?}", positives))
        );
    }
}

fn help() {
    println!("{}", Colour::Green.paint("Available commands:"));
    println!("    (empty), step, s        execute the next instruction");
    println!("    continue, c             leave single step mode and run freely");
    println!("    registers, r            show the registers");
    println!("    memory, m ADDR [LINES]  hexadecimal dump of LINES × 16 bytes");
    println!("    help, h, ?              this help");
    println!("    quit, q                 stop the program");
    println!(
        "          Example: {}",
        Colour::Fixed(130).paint("memory #0x0200 8")
    );
}

/*
 * Monitor
 * Controller reading commands from the terminal. Commands that do not
 * drive the execution print their result and prompt again.
 */
pub struct Monitor {
    editor: DefaultEditor,
    prompt: String,
}

impl Monitor {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Monitor {
            editor: DefaultEditor::new()?,
            prompt: format!("{}", Colour::Fixed(148).bold().paint(">> ")),
        })
    }

    fn read_command(&mut self, cpu: &Cpu, stop: &StopSignal) -> Command {
        loop {
            if stop.is_raised() {
                return Command::Quit;
            }
            let line = match self.editor.readline(&self.prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    stop.raise();
                    return Command::Quit;
                }
                Err(ReadlineError::Eof) => return Command::Quit,
                Err(e) => {
                    print_err(&format!("{}", e));
                    return Command::Quit;
                }
            };
            if !line.trim().is_empty() {
                let _ = self.editor.add_history_entry(line.as_str());
            }

            match MonitorCommand::parse(&line) {
                Ok(MonitorCommand::Step) => return Command::Step,
                Ok(MonitorCommand::Continue) => return Command::Continue,
                Ok(MonitorCommand::Quit) => return Command::Quit,
                Ok(MonitorCommand::Registers) => println!("{:?}", cpu.registers),
                Ok(MonitorCommand::Memory { address, lines }) => {
                    match cpu.memory.dump(address as usize, lines) {
                        Ok(dump) => dump.iter().for_each(|line| println!("{}", line)),
                        Err(e) => print_err(&format!("{}", e)),
                    }
                }
                Ok(MonitorCommand::Help) => help(),
                Err(MonitorError::Syntax(e)) => display_error(&e),
                Err(e) => print_err(&format!("{}", e)),
            }
        }
    }
}

impl Controller for Monitor {
    fn wait_for_step(&mut self, cpu: &Cpu, stop: &StopSignal) -> Command {
        self.read_command(cpu, stop)
    }

    fn wait_for_resume(&mut self, cpu: &Cpu, stop: &StopSignal) -> Command {
        println!(
            "{}",
            Colour::Yellow.paint(format!(
                "breakpoint, next instruction at #0x{:04X}",
                cpu.registers.command_pointer
            ))
        );
        self.read_command(cpu, stop)
    }
}
