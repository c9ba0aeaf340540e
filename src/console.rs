use ansi_term::{Colour, Style};

use super::memory::STACK_BASE_ADDR;
use super::runner::Schedule;
use super::{Cpu, CpuError, VERSION};

const LABEL_WIDTH: usize = 5;
const VALUE_WIDTH: usize = 17;
const LINE_WIDTH: usize = 2 * (LABEL_WIDTH + VALUE_WIDTH) + 13;
const STACK_DEPTH: usize = 4;

fn binary_word(value: u16) -> String {
    format!("{:08b} {:08b}", value >> 8, value & 0xff)
}

/*
 * ConsoleRenderer
 * Human readable snapshot of the processor: registers in binary, flags
 * with their legend, core state, the top of the stack and the next
 * instruction to be executed. Purely diagnostic, it only reads.
 */
#[derive(Debug, Clone, Copy)]
pub struct ConsoleRenderer {
    colored: bool,
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConsoleRenderer {
    pub fn new(colored: bool) -> Self {
        ConsoleRenderer { colored }
    }

    fn paint(&self, style: Style, text: String) -> String {
        if self.colored {
            style.paint(text).to_string()
        } else {
            text
        }
    }

    fn border(&self, fill: char) -> String {
        let label = fill.to_string().repeat(LABEL_WIDTH + 2);
        let value = fill.to_string().repeat(VALUE_WIDTH + 2);

        format!("+{}+{}+{}+{}+", label, value, label, value)
    }

    fn rule(&self, fill: char) -> String {
        format!("+{}+", fill.to_string().repeat(LINE_WIDTH - 2))
    }

    fn row(&self, left: (&str, String), right: (&str, String)) -> String {
        let value_style = Colour::Green.normal();

        format!(
            "| {:<lw$} | {} | {:<lw$} | {} |",
            left.0,
            self.paint(value_style, format!("{:<vw$}", left.1, vw = VALUE_WIDTH)),
            right.0,
            self.paint(value_style, format!("{:<vw$}", right.1, vw = VALUE_WIDTH)),
            lw = LABEL_WIDTH,
        )
    }

    fn line(&self, style: Style, text: String) -> String {
        format!(
            "| {} |",
            self.paint(style, format!("{:<w$}", text, w = LINE_WIDTH - 4))
        )
    }

    fn stack(&self, cpu: &Cpu) -> Result<String, CpuError> {
        let top = STACK_BASE_ADDR + 0xff;
        let mut cells = Vec::with_capacity(STACK_DEPTH);

        for address in (top + 1 - STACK_DEPTH..=top).rev() {
            cells.push(format!("{:02x}", cpu.memory.read_byte(address)?));
        }

        Ok(format!("stack #0x{:04X}↓  {}", top, cells.join(" ")))
    }

    pub fn render(&self, cpu: &Cpu, schedule: &Schedule) -> Result<String, CpuError> {
        let registers = &cpu.registers;
        let next = match cpu.peek_instruction()? {
            Some(cpu_instruction) => format!("next  {}", cpu_instruction),
            None => "next  end of program".to_owned(),
        };
        let lines = [
            self.rule('='),
            self.line(
                Colour::White.bold(),
                format!("emu6502 {}", VERSION),
            ),
            self.border('='),
            self.row(
                ("A", format!("{:08b}", registers.accumulator)),
                ("SP", format!("{:08b}", registers.stack_pointer)),
            ),
            self.border('-'),
            self.row(
                ("X", format!("{:08b}", registers.register_x)),
                ("PC", binary_word(registers.command_pointer)),
            ),
            self.border('-'),
            self.row(
                ("Y", format!("{:08b}", registers.register_y)),
                ("Flags", format!("{:08b}", registers.status_register)),
            ),
            self.row(
                ("", String::new()),
                ("", "NV-BDIZC".to_owned()),
            ),
            self.border('='),
            self.line(
                Colour::Yellow.normal(),
                format!("state: {:<12}mode: {}", cpu.state(), schedule),
            ),
            self.line(Style::new(), self.stack(cpu)?),
            self.line(Colour::Fixed(148).normal(), next),
            self.rule('='),
        ];

        Ok(lines.join("\n"))
    }
}
