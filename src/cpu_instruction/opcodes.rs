use super::cpu_instruction::{CPUInstruction, Microcode};
use super::microcode;
use crate::addressing_mode::AddressingMode;

const IMP: AddressingMode = AddressingMode::Implied;
const ACC: AddressingMode = AddressingMode::Accumulator;
const IMM: AddressingMode = AddressingMode::Immediate([0x00]);
const ZPG: AddressingMode = AddressingMode::ZeroPage([0x00]);
const ZPX: AddressingMode = AddressingMode::ZeroPageXIndexed([0x00]);
const ZPY: AddressingMode = AddressingMode::ZeroPageYIndexed([0x00]);
const IZX: AddressingMode = AddressingMode::ZeroPageXIndexedIndirect([0x00]);
const IZY: AddressingMode = AddressingMode::ZeroPageIndirectYIndexed([0x00]);
const ABS: AddressingMode = AddressingMode::Absolute([0x00, 0x00]);
const ABX: AddressingMode = AddressingMode::AbsoluteXIndexed([0x00, 0x00]);
const ABY: AddressingMode = AddressingMode::AbsoluteYIndexed([0x00, 0x00]);
const IND: AddressingMode = AddressingMode::Indirect([0x00, 0x00]);
const REL: AddressingMode = AddressingMode::Relative(0x0000, [0x00]);

type Definition = (u8, &'static str, AddressingMode, Microcode);

#[rustfmt::skip]
const SUPPORTED: &[Definition] = &[
    (0xea, "NOP", IMP, microcode::nop),
    (0xa9, "LDA", IMM, microcode::lda),
    (0xa5, "LDA", ZPG, microcode::lda),
    (0xb5, "LDA", ZPX, microcode::lda),
    (0xad, "LDA", ABS, microcode::lda),
    (0xbd, "LDA", ABX, microcode::lda),
    (0xb9, "LDA", ABY, microcode::lda),
    (0xa1, "LDA", IZX, microcode::lda),
    (0xb1, "LDA", IZY, microcode::lda),
    (0xa2, "LDX", IMM, microcode::ldx),
    (0xa6, "LDX", ZPG, microcode::ldx),
    (0xb6, "LDX", ZPY, microcode::ldx),
    (0xae, "LDX", ABS, microcode::ldx),
    (0xbe, "LDX", ABY, microcode::ldx),
    (0xa0, "LDY", IMM, microcode::ldy),
    (0xa4, "LDY", ZPG, microcode::ldy),
    (0xb4, "LDY", ZPX, microcode::ldy),
    (0xac, "LDY", ABS, microcode::ldy),
    (0xbc, "LDY", ABX, microcode::ldy),
    (0x85, "STA", ZPG, microcode::sta),
    (0x95, "STA", ZPX, microcode::sta),
    (0x8d, "STA", ABS, microcode::sta),
    (0x9d, "STA", ABX, microcode::sta),
    (0x99, "STA", ABY, microcode::sta),
    (0x81, "STA", IZX, microcode::sta),
    (0x91, "STA", IZY, microcode::sta),
    (0x86, "STX", ZPG, microcode::stx),
    (0x96, "STX", ZPY, microcode::stx),
    (0x8e, "STX", ABS, microcode::stx),
    (0x84, "STY", ZPG, microcode::sty),
    (0x94, "STY", ZPX, microcode::sty),
    (0x8c, "STY", ABS, microcode::sty),
    (0xaa, "TAX", IMP, microcode::tax),
    (0x8a, "TXA", IMP, microcode::txa),
    (0xa8, "TAY", IMP, microcode::tay),
    (0x98, "TYA", IMP, microcode::tya),
    (0xe8, "INX", IMP, microcode::inx),
    (0xc8, "INY", IMP, microcode::iny),
    (0xca, "DEX", IMP, microcode::dex),
    (0x88, "DEY", IMP, microcode::dey),
    (0xe6, "INC", ZPG, microcode::inc),
    (0xf6, "INC", ZPX, microcode::inc),
    (0xee, "INC", ABS, microcode::inc),
    (0xfe, "INC", ABX, microcode::inc),
    (0xc6, "DEC", ZPG, microcode::dec),
    (0xd6, "DEC", ZPX, microcode::dec),
    (0xce, "DEC", ABS, microcode::dec),
    (0xde, "DEC", ABX, microcode::dec),
    (0x29, "AND", IMM, microcode::and),
    (0x25, "AND", ZPG, microcode::and),
    (0x35, "AND", ZPX, microcode::and),
    (0x2d, "AND", ABS, microcode::and),
    (0x3d, "AND", ABX, microcode::and),
    (0x39, "AND", ABY, microcode::and),
    (0x21, "AND", IZX, microcode::and),
    (0x31, "AND", IZY, microcode::and),
    (0x24, "BIT", ZPG, microcode::bit),
    (0x2c, "BIT", ABS, microcode::bit),
    (0x4a, "LSR", ACC, microcode::lsr),
    (0x46, "LSR", ZPG, microcode::lsr),
    (0x56, "LSR", ZPX, microcode::lsr),
    (0x4e, "LSR", ABS, microcode::lsr),
    (0x5e, "LSR", ABX, microcode::lsr),
    (0x69, "ADC", IMM, microcode::adc),
    (0x65, "ADC", ZPG, microcode::adc),
    (0x75, "ADC", ZPX, microcode::adc),
    (0x6d, "ADC", ABS, microcode::adc),
    (0x7d, "ADC", ABX, microcode::adc),
    (0x79, "ADC", ABY, microcode::adc),
    (0x61, "ADC", IZX, microcode::adc),
    (0x71, "ADC", IZY, microcode::adc),
    (0xe9, "SBC", IMM, microcode::sbc),
    (0xe5, "SBC", ZPG, microcode::sbc),
    (0xf5, "SBC", ZPX, microcode::sbc),
    (0xed, "SBC", ABS, microcode::sbc),
    (0xfd, "SBC", ABX, microcode::sbc),
    (0xf9, "SBC", ABY, microcode::sbc),
    (0xe1, "SBC", IZX, microcode::sbc),
    (0xf1, "SBC", IZY, microcode::sbc),
    (0xc9, "CMP", IMM, microcode::cmp),
    (0xc5, "CMP", ZPG, microcode::cmp),
    (0xd5, "CMP", ZPX, microcode::cmp),
    (0xcd, "CMP", ABS, microcode::cmp),
    (0xdd, "CMP", ABX, microcode::cmp),
    (0xd9, "CMP", ABY, microcode::cmp),
    (0xc1, "CMP", IZX, microcode::cmp),
    (0xd1, "CMP", IZY, microcode::cmp),
    (0xe0, "CPX", IMM, microcode::cpx),
    (0xe4, "CPX", ZPG, microcode::cpx),
    (0xec, "CPX", ABS, microcode::cpx),
    (0xc0, "CPY", IMM, microcode::cpy),
    (0xc4, "CPY", ZPG, microcode::cpy),
    (0xcc, "CPY", ABS, microcode::cpy),
    (0x90, "BCC", REL, microcode::bcc),
    (0xb0, "BCS", REL, microcode::bcs),
    (0xf0, "BEQ", REL, microcode::beq),
    (0xd0, "BNE", REL, microcode::bne),
    (0x10, "BPL", REL, microcode::bpl),
    (0x30, "BMI", REL, microcode::bmi),
    (0x4c, "JMP", ABS, microcode::jmp),
    (0x6c, "JMP", IND, microcode::jmp),
    (0x20, "JSR", ABS, microcode::jsr),
    (0x60, "RTS", IMP, microcode::rts),
    (0x48, "PHA", IMP, microcode::pha),
    (0x68, "PLA", IMP, microcode::pla),
    (0x38, "SEC", IMP, microcode::sec),
    (0x18, "CLC", IMP, microcode::clc),
    (0x00, "BRK", IMP, microcode::brk),
];

#[derive(Clone, Copy)]
pub struct OpcodeEntry {
    pub mnemonic: &'static str,
    pub addressing_mode: AddressingMode,
    pub microcode: Microcode,
}

impl OpcodeEntry {
    const UNKNOWN: OpcodeEntry = OpcodeEntry {
        mnemonic: "???",
        addressing_mode: IMP,
        microcode: microcode::unknown,
    };

    pub fn is_known(&self) -> bool {
        self.mnemonic != OpcodeEntry::UNKNOWN.mnemonic
    }
}

/*
 * OpcodeTable
 * 256 entries indexed by the opcode byte. Every opcode not listed above
 * points to the unknown instruction microcode, so decoding never fails.
 */
pub struct OpcodeTable {
    entries: Vec<OpcodeEntry>,
}

impl Default for OpcodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl OpcodeTable {
    pub fn new() -> Self {
        let mut entries = vec![OpcodeEntry::UNKNOWN; 256];

        for (opcode, mnemonic, addressing_mode, microcode) in SUPPORTED {
            entries[*opcode as usize] = OpcodeEntry {
                mnemonic: *mnemonic,
                addressing_mode: *addressing_mode,
                microcode: *microcode,
            };
        }

        Self { entries }
    }

    pub fn entry(&self, opcode: u8) -> &OpcodeEntry {
        &self.entries[opcode as usize]
    }

    pub fn operand_len(&self, opcode: u8) -> usize {
        self.entry(opcode).addressing_mode.operand_len()
    }

    /// Build the instruction found at `address`. `operands` are the two
    /// bytes following the opcode, extra bytes are ignored.
    pub fn decode(&self, address: u16, opcode: u8, operands: [u8; 2]) -> CPUInstruction {
        let entry = self.entry(opcode);

        CPUInstruction::new(
            address,
            opcode,
            entry.mnemonic,
            entry.addressing_mode.with_operands(address, operands),
            entry.microcode,
        )
    }

    pub fn supported(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=255u8).filter(move |opcode| self.entry(*opcode).is_known())
    }
}
