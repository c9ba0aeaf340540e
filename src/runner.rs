use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use tracing::info;

use super::{Cpu, CpuError, Tick};

/// Longest time a wait goes without looking at the stop signal.
pub const STOP_POLL_INTERVAL: Duration = Duration::from_millis(10);

/*
 * Pacing
 * How long the runner waits between two ticks when free running.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    Unthrottled,
    FixedInterval(Duration),
}

impl Pacing {
    /// 0 Hz means as fast as possible.
    pub fn from_frequency(frequency: u32) -> Self {
        match frequency {
            0 => Pacing::Unthrottled,
            hz => Pacing::FixedInterval(Duration::from_secs(1) / hz),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    FreeRunning(Pacing),
    SingleStep,
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::FreeRunning(Pacing::Unthrottled) => write!(f, "free"),
            Schedule::FreeRunning(Pacing::FixedInterval(interval)) => {
                write!(f, "free ({:?}/tick)", interval)
            }
            Schedule::SingleStep => write!(f, "step"),
        }
    }
}

/*
 * StopSignal
 * Shared flag telling the runner to stop as soon as possible. The binary
 * raises it from its CTRL-C handler.
 */
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Sleep for the given duration unless the signal is raised meanwhile.
    /// Returns false when interrupted.
    pub fn sleep(&self, duration: Duration) -> bool {
        let mut remaining = duration;

        while !remaining.is_zero() {
            if self.is_raised() {
                return false;
            }
            let slice = remaining.min(STOP_POLL_INTERVAL);
            thread::sleep(slice);
            remaining -= slice;
        }

        !self.is_raised()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Step,
    Continue,
    Quit,
}

/*
 * Controller
 * What the runner asks when it needs someone to decide: before each tick
 * when single stepping and on every breakpoint. Implementations must give
 * up waiting when the stop signal is raised.
 */
pub trait Controller {
    fn wait_for_step(&mut self, cpu: &Cpu, stop: &StopSignal) -> Command;
    fn wait_for_resume(&mut self, cpu: &Cpu, stop: &StopSignal) -> Command;
}

/// Never waits: steps are granted and breakpoints resumed right away.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoResume;

impl Controller for AutoResume {
    fn wait_for_step(&mut self, _cpu: &Cpu, _stop: &StopSignal) -> Command {
        Command::Step
    }

    fn wait_for_resume(&mut self, _cpu: &Cpu, _stop: &StopSignal) -> Command {
        Command::Continue
    }
}

/// Takes its commands from a channel. A disconnected channel means quit.
pub struct ChannelController {
    receiver: mpsc::Receiver<Command>,
}

impl ChannelController {
    pub fn new() -> (mpsc::Sender<Command>, Self) {
        let (sender, receiver) = mpsc::channel();

        (sender, Self { receiver })
    }

    fn wait(&mut self, stop: &StopSignal) -> Command {
        loop {
            if stop.is_raised() {
                return Command::Quit;
            }
            match self.receiver.recv_timeout(STOP_POLL_INTERVAL) {
                Ok(command) => return command,
                Err(mpsc::RecvTimeoutError::Timeout) => continue,
                Err(mpsc::RecvTimeoutError::Disconnected) => return Command::Quit,
            }
        }
    }
}

impl Controller for ChannelController {
    fn wait_for_step(&mut self, _cpu: &Cpu, stop: &StopSignal) -> Command {
        self.wait(stop)
    }

    fn wait_for_resume(&mut self, _cpu: &Cpu, stop: &StopSignal) -> Command {
        self.wait(stop)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    EndOfProgram,
    Stopped,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub ticks: u64,
    pub reason: StopReason,
}

pub type Observer = Box<dyn FnMut(&Cpu, &Tick, &Schedule)>;

/*
 * Runner
 * Drives the processor with the schedule chosen at construction. The only
 * blocking points are the delay between ticks and the controller waits,
 * both give up when the stop signal is raised.
 */
pub struct Runner<C: Controller> {
    cpu: Cpu,
    schedule: Schedule,
    continue_pacing: Pacing,
    controller: C,
    stop: StopSignal,
    random_byte: Option<u16>,
    observer: Option<Observer>,
}

impl<C: Controller> Runner<C> {
    pub fn new(cpu: Cpu, schedule: Schedule, controller: C) -> Self {
        Runner {
            cpu,
            schedule,
            continue_pacing: Pacing::Unthrottled,
            controller,
            stop: StopSignal::new(),
            random_byte: None,
            observer: None,
        }
    }

    pub fn with_stop_signal(mut self, stop: StopSignal) -> Self {
        self.stop = stop;
        self
    }

    /// Pacing used when a single stepped run is told to continue.
    pub fn with_continue_pacing(mut self, pacing: Pacing) -> Self {
        self.continue_pacing = pacing;
        self
    }

    /// Write a fresh random byte at this address before every tick that
    /// executes an instruction.
    pub fn with_random_byte(mut self, address: Option<u16>) -> Self {
        self.random_byte = address;
        self
    }

    pub fn with_observer(mut self, observer: impl FnMut(&Cpu, &Tick, &Schedule) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn into_cpu(self) -> Cpu {
        self.cpu
    }

    fn switch_to_free_running(&mut self) {
        if self.schedule == Schedule::SingleStep {
            self.schedule = Schedule::FreeRunning(self.continue_pacing);
            info!("switching to {} mode", self.schedule);
        }
    }

    fn report(&self, ticks: u64, reason: StopReason) -> RunReport {
        info!("run over after {} ticks: {:?}", ticks, reason);

        RunReport { ticks, reason }
    }

    fn interrupted_or(&self, reason: StopReason) -> StopReason {
        if self.stop.is_raised() {
            StopReason::Stopped
        } else {
            reason
        }
    }

    pub fn run(&mut self) -> Result<RunReport, CpuError> {
        self.cpu.start();
        let mut ticks: u64 = 0;

        loop {
            if self.stop.is_raised() {
                return Ok(self.report(ticks, StopReason::Stopped));
            }

            if self.schedule == Schedule::SingleStep {
                match self.controller.wait_for_step(&self.cpu, &self.stop) {
                    Command::Step => {}
                    Command::Continue => self.switch_to_free_running(),
                    Command::Quit => {
                        let reason = self.interrupted_or(StopReason::Quit);
                        return Ok(self.report(ticks, reason));
                    }
                }
                if self.stop.is_raised() {
                    return Ok(self.report(ticks, StopReason::Stopped));
                }
            }

            // nothing is written once the program is over
            if let Some(address) = self.random_byte {
                if self.cpu.peek_instruction()?.is_some() {
                    self.cpu
                        .memory
                        .write_byte(address as usize, rand::random::<u8>())?;
                }
            }

            let tick = self.cpu.tick()?;
            if let Tick::Executed(_) | Tick::Breakpoint(_) = tick {
                ticks += 1;
            }
            if let Some(observer) = self.observer.as_mut() {
                observer(&self.cpu, &tick, &self.schedule);
            }

            match tick {
                Tick::EndOfProgram { .. } => {
                    return Ok(self.report(ticks, StopReason::EndOfProgram));
                }
                Tick::Inactive(_) => {
                    return Ok(self.report(ticks, StopReason::Stopped));
                }
                Tick::Breakpoint(_) => {
                    match self.controller.wait_for_resume(&self.cpu, &self.stop) {
                        Command::Step => {}
                        Command::Continue => self.switch_to_free_running(),
                        Command::Quit => {
                            let reason = self.interrupted_or(StopReason::Quit);
                            return Ok(self.report(ticks, reason));
                        }
                    }
                    self.cpu.resume();
                }
                Tick::Executed(_) => {
                    if let Schedule::FreeRunning(Pacing::FixedInterval(interval)) = self.schedule {
                        if !self.stop.sleep(interval) {
                            return Ok(self.report(ticks, StopReason::Stopped));
                        }
                    }
                }
            }
        }
    }
}
