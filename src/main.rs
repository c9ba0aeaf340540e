/*
 * This is the CLI frontend for the emu6502 library.
 */
use std::io::{self, Write};
use std::path::PathBuf;

use ansi_term::Colour;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use emu6502::config::{Config, DisplayConfig, Mode};
use emu6502::console::ConsoleRenderer;
use emu6502::loader::load_image;
use emu6502::monitor::Monitor;
use emu6502::runner::{AutoResume, Controller, Pacing, RunReport, Runner, Schedule, StopReason, StopSignal};
use emu6502::{Cpu, Memory, Tick, VERSION};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Step,
    Free,
}

/// MOS 6502 emulator
/// Load a raw program image at 0x0600 and run it, either freely or one
/// instruction at a time.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct CommandLineArguments {
    /// Raw program image
    rom: PathBuf,

    /// YAML configuration file, flags take precedence over it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scheduling mode
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Target ticks per second in free mode, 0 is as fast as possible
    #[arg(short, long)]
    frequency: Option<u32>,

    /// Do not print the processor state after each tick
    #[arg(long)]
    no_diagnostics: bool,

    /// Open the display window (needs the minifb-display feature)
    #[arg(short, long)]
    display: bool,

    /// Address where the image is loaded
    #[arg(short, long)]
    load_address: Option<String>,

    /// Debug logs
    #[arg(short, long)]
    verbose: bool,
}

impl CommandLineArguments {
    fn as_config(&self) -> Config {
        Config {
            mode: self.mode.map(|mode| match mode {
                ModeArg::Step => Mode::Step,
                ModeArg::Free => Mode::Free,
            }),
            frequency: self.frequency,
            diagnostics: self.no_diagnostics.then_some(false),
            load_address: self.load_address.clone(),
            display: self.display.then(|| DisplayConfig {
                enabled: Some(true),
                ..DisplayConfig::default()
            }),
            ..Config::default()
        }
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "emu6502=debug" } else { "emu6502=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .with_writer(io::stderr)
        .init();

    Ok(())
}

fn load_config(args: &CommandLineArguments) -> Result<Config> {
    let file = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading configuration '{}'", path.display()))?,
        None => Config::default(),
    };

    Ok(Config::interactive().merge(file).merge(args.as_config()))
}

#[cfg(feature = "minifb-display")]
fn start_display(memory: &Memory, display: &DisplayConfig, stop: &StopSignal) -> Result<()> {
    let sampler = emu6502::display::DisplaySampler::new(memory, display.intensity())?;
    emu6502::display::spawn_window(sampler, display.scale(), display.fps(), stop.clone());

    Ok(())
}

#[cfg(not(feature = "minifb-display"))]
fn start_display(_memory: &Memory, _display: &DisplayConfig, _stop: &StopSignal) -> Result<()> {
    tracing::warn!("built without the minifb-display feature, no display window");

    Ok(())
}

fn print_snapshot(renderer: &ConsoleRenderer, cpu: &Cpu, tick: &Tick, schedule: &Schedule) {
    let snapshot = match renderer.render(cpu, schedule) {
        Ok(snapshot) => snapshot,
        Err(e) => format!("{}: {}", Colour::Red.paint("Error"), e),
    };
    let last = match tick {
        Tick::Executed(log_line) | Tick::Breakpoint(log_line) => format!("{}", log_line),
        Tick::EndOfProgram { address } => format!("end of program at #0x{:04X}", address),
        Tick::Inactive(state) => format!("processor {}", state),
    };
    // clear the terminal, cursor at home
    print!("\x1B[2J\x1B[H");
    println!("{}\n{}", snapshot, Colour::Fixed(240).paint(last));
    let _ = io::stdout().flush();
}

fn run<C: Controller>(runner: Runner<C>, diagnostics: bool) -> Result<RunReport> {
    let mut runner = runner;
    if diagnostics {
        let renderer = ConsoleRenderer::default();
        runner = runner.with_observer(move |cpu, tick, schedule| {
            print_snapshot(&renderer, cpu, tick, schedule)
        });
    }

    Ok(runner.run()?)
}

fn main() -> Result<()> {
    let args = CommandLineArguments::parse();
    init_tracing(args.verbose)?;
    let config = load_config(&args)?;

    // 1 memory & program
    let image = load_image(&args.rom)?;
    let memory = Memory::new(config.pop_policy());
    let display_memory = memory.share();
    let mut cpu = Cpu::with_memory(memory);
    let load_address = config.load_address()?;
    cpu.load_program(load_address, &image)
        .with_context(|| format!("loading '{}' at #0x{:04X}", args.rom.display(), load_address))?;
    for (address, value) in config.presets()? {
        cpu.memory.write_byte(address as usize, value)?;
    }

    // 2 CTRL-C handler
    let stop = StopSignal::new();
    let remote = stop.clone();
    ctrlc::set_handler(move || remote.raise()).context("installing the CTRL-C handler")?;

    // 3 display
    let display = config.display();
    if display.enabled() {
        start_display(&display_memory, &display, &stop)?;
    }

    // 4 run
    println!(
        "{}",
        Colour::Green.paint(format!("Welcome in emu6502 version {}", VERSION))
    );
    let schedule = config.schedule();
    info!("running '{}' in {} mode", args.rom.display(), schedule);
    let random_byte = config.random_byte_address()?;
    let continue_pacing = Pacing::from_frequency(config.frequency());
    let report = match schedule {
        Schedule::SingleStep => {
            let monitor = Monitor::new().context("starting the line editor")?;
            let runner = Runner::new(cpu, schedule, monitor)
                .with_stop_signal(stop)
                .with_random_byte(random_byte)
                .with_continue_pacing(continue_pacing);
            run(runner, config.diagnostics())?
        }
        Schedule::FreeRunning(_) => {
            let runner = Runner::new(cpu, schedule, AutoResume)
                .with_stop_signal(stop)
                .with_random_byte(random_byte);
            run(runner, config.diagnostics())?
        }
    };

    let reason = match report.reason {
        StopReason::EndOfProgram => "end of program",
        StopReason::Stopped => "interrupted",
        StopReason::Quit => "quit",
    };
    println!("{} ticks executed, {}.", report.ticks, reason);

    Ok(())
}
