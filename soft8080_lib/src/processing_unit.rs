use crate::cpu_instruction::microcode::*;
use crate::cpu_instruction::{CPUInstruction, LogLine};
use crate::memory::{little_endian, AddressableIO, MemoryMap as Memory, MEMMAX};
use crate::ports::PortIO;
use crate::registers::Registers;

fn instruction(
    address: usize,
    opcode: u8,
    mnemonic: &str,
    operand_len: usize,
    memory: &Memory,
    microcode: impl Fn(
            &mut Memory,
            &mut Registers,
            &mut dyn PortIO,
            &CPUInstruction,
        ) -> Result<LogLine>
        + 'static,
) -> Result<CPUInstruction> {
    let operands = if operand_len > 0 {
        memory.read(address + 1, operand_len)?
    } else {
        vec![]
    };

    Ok(CPUInstruction::new(
        address, opcode, mnemonic, operands, microcode,
    ))
}

/*
 * The mnemonic families follow the opcode bit fields: bits 5-3 select
 * the destination register or the branch condition, bits 2-0 the
 * source register, bits 5-4 the register pair.
 */
pub fn resolve_opcode(address: usize, opcode: u8, memory: &Memory) -> Result<CPUInstruction> {
    let destination = (opcode >> 3) & 0x07;
    let source = opcode & 0x07;
    let pair = (opcode >> 4) & 0x03;

    match opcode {
        0x00 => instruction(address, opcode, "NOP", 0, memory, nop),
        0x07 => instruction(address, opcode, "RLC", 0, memory, rlc),
        0x0f => instruction(address, opcode, "RRC", 0, memory, rrc),
        0x17 => instruction(address, opcode, "RAL", 0, memory, ral),
        0x1f => instruction(address, opcode, "RAR", 0, memory, rar),
        0x27 => instruction(address, opcode, "DAA", 0, memory, daa),
        0x2f => instruction(address, opcode, "CMA", 0, memory, cma),
        0x37 => instruction(address, opcode, "STC", 0, memory, stc),
        0x3f => instruction(address, opcode, "CMC", 0, memory, cmc),
        0x01 | 0x11 | 0x21 | 0x31 => {
            let mnemonic = format!("LXI {},", pair_name(pair));
            instruction(address, opcode, &mnemonic, 2, memory, lxi)
        }
        0x02 | 0x12 => {
            let mnemonic = format!("STAX {}", pair_name(pair));
            instruction(address, opcode, &mnemonic, 0, memory, stax)
        }
        0x0a | 0x1a => {
            let mnemonic = format!("LDAX {}", pair_name(pair));
            instruction(address, opcode, &mnemonic, 0, memory, ldax)
        }
        0x03 | 0x13 | 0x23 | 0x33 => {
            let mnemonic = format!("INX {}", pair_name(pair));
            instruction(address, opcode, &mnemonic, 0, memory, inx)
        }
        0x0b | 0x1b | 0x2b | 0x3b => {
            let mnemonic = format!("DCX {}", pair_name(pair));
            instruction(address, opcode, &mnemonic, 0, memory, dcx)
        }
        0x09 | 0x19 | 0x29 | 0x39 => {
            let mnemonic = format!("DAD {}", pair_name(pair));
            instruction(address, opcode, &mnemonic, 0, memory, dad)
        }
        0x04 | 0x0c | 0x14 | 0x1c | 0x24 | 0x2c | 0x34 | 0x3c => {
            let mnemonic = format!("INR {}", register_name(destination));
            instruction(address, opcode, &mnemonic, 0, memory, inr)
        }
        0x05 | 0x0d | 0x15 | 0x1d | 0x25 | 0x2d | 0x35 | 0x3d => {
            let mnemonic = format!("DCR {}", register_name(destination));
            instruction(address, opcode, &mnemonic, 0, memory, dcr)
        }
        0x06 | 0x0e | 0x16 | 0x1e | 0x26 | 0x2e | 0x36 | 0x3e => {
            let mnemonic = format!("MVI {},", register_name(destination));
            instruction(address, opcode, &mnemonic, 1, memory, mvi)
        }
        0x22 => instruction(address, opcode, "SHLD", 2, memory, shld),
        0x2a => instruction(address, opcode, "LHLD", 2, memory, lhld),
        0x32 => instruction(address, opcode, "STA", 2, memory, sta),
        0x3a => instruction(address, opcode, "LDA", 2, memory, lda),
        0x76 => instruction(address, opcode, "HLT", 0, memory, hlt),
        0x40..=0x7f => {
            let mnemonic = format!(
                "MOV {},{}",
                register_name(destination),
                register_name(source)
            );
            instruction(address, opcode, &mnemonic, 0, memory, mov)
        }
        0x80..=0x87 => {
            let mnemonic = format!("ADD {}", register_name(source));
            instruction(address, opcode, &mnemonic, 0, memory, add)
        }
        0x88..=0x8f => {
            let mnemonic = format!("ADC {}", register_name(source));
            instruction(address, opcode, &mnemonic, 0, memory, adc)
        }
        0x90..=0x97 => {
            let mnemonic = format!("SUB {}", register_name(source));
            instruction(address, opcode, &mnemonic, 0, memory, sub)
        }
        0x98..=0x9f => {
            let mnemonic = format!("SBB {}", register_name(source));
            instruction(address, opcode, &mnemonic, 0, memory, sbb)
        }
        0xa0..=0xa7 => {
            let mnemonic = format!("ANA {}", register_name(source));
            instruction(address, opcode, &mnemonic, 0, memory, ana)
        }
        0xa8..=0xaf => {
            let mnemonic = format!("XRA {}", register_name(source));
            instruction(address, opcode, &mnemonic, 0, memory, xra)
        }
        0xb0..=0xb7 => {
            let mnemonic = format!("ORA {}", register_name(source));
            instruction(address, opcode, &mnemonic, 0, memory, ora)
        }
        0xb8..=0xbf => {
            let mnemonic = format!("CMP {}", register_name(source));
            instruction(address, opcode, &mnemonic, 0, memory, cmp)
        }
        0xc6 => instruction(address, opcode, "ADI", 1, memory, adi),
        0xce => instruction(address, opcode, "ACI", 1, memory, aci),
        0xd6 => instruction(address, opcode, "SUI", 1, memory, sui),
        0xde => instruction(address, opcode, "SBI", 1, memory, sbi),
        0xe6 => instruction(address, opcode, "ANI", 1, memory, ani),
        0xee => instruction(address, opcode, "XRI", 1, memory, xri),
        0xf6 => instruction(address, opcode, "ORI", 1, memory, ori),
        0xfe => instruction(address, opcode, "CPI", 1, memory, cpi),
        0xc3 => instruction(address, opcode, "JMP", 2, memory, jmp),
        0xc2 | 0xca | 0xd2 | 0xda | 0xe2 | 0xea | 0xf2 | 0xfa => {
            let mnemonic = format!("J{}", condition_name(destination));
            instruction(address, opcode, &mnemonic, 2, memory, jmp_if)
        }
        0xcd => instruction(address, opcode, "CALL", 2, memory, call),
        0xc4 | 0xcc | 0xd4 | 0xdc | 0xe4 | 0xec | 0xf4 | 0xfc => {
            let mnemonic = format!("C{}", condition_name(destination));
            instruction(address, opcode, &mnemonic, 2, memory, call_if)
        }
        0xc9 => instruction(address, opcode, "RET", 0, memory, ret),
        0xc0 | 0xc8 | 0xd0 | 0xd8 | 0xe0 | 0xe8 | 0xf0 | 0xf8 => {
            let mnemonic = format!("R{}", condition_name(destination));
            instruction(address, opcode, &mnemonic, 0, memory, ret_if)
        }
        0xc7 | 0xcf | 0xd7 | 0xdf | 0xe7 | 0xef | 0xf7 | 0xff => {
            let mnemonic = format!("RST {}", destination);
            instruction(address, opcode, &mnemonic, 0, memory, rst)
        }
        0xe9 => instruction(address, opcode, "PCHL", 0, memory, pchl),
        0xc5 | 0xd5 | 0xe5 | 0xf5 => {
            let name = if pair == 0x03 { "PSW" } else { pair_name(pair) };
            let mnemonic = format!("PUSH {}", name);
            instruction(address, opcode, &mnemonic, 0, memory, push)
        }
        0xc1 | 0xd1 | 0xe1 | 0xf1 => {
            let name = if pair == 0x03 { "PSW" } else { pair_name(pair) };
            let mnemonic = format!("POP {}", name);
            instruction(address, opcode, &mnemonic, 0, memory, pop)
        }
        0xe3 => instruction(address, opcode, "XTHL", 0, memory, xthl),
        0xf9 => instruction(address, opcode, "SPHL", 0, memory, sphl),
        0xeb => instruction(address, opcode, "XCHG", 0, memory, xchg),
        0xdb => instruction(address, opcode, "IN", 1, memory, input),
        0xd3 => instruction(address, opcode, "OUT", 1, memory, output),
        0xfb => instruction(address, opcode, "EI", 0, memory, ei),
        0xf3 => instruction(address, opcode, "DI", 0, memory, di),
        // 0x08 0x10 0x18 0x20 0x28 0x30 0x38 0xcb 0xd9 0xdd 0xed 0xfd
        _ => Err(MicrocodeError::UnimplementedOpcode(address, opcode)),
    }
}

/*
 * The command pointer is moved past the whole instruction before the
 * microcode runs, so CALL & friends push the address of the next
 * instruction without any size bookkeeping of their own.
 */
pub fn execute_step(
    registers: &mut Registers,
    memory: &mut Memory,
    ports: &mut dyn PortIO,
) -> Result<LogLine> {
    if registers.halted {
        let cpu_instruction =
            CPUInstruction::new(registers.command_pointer, 0x00, "NOP", vec![], nop);
        return Ok(LogLine::new(&cpu_instruction, "[halted]".to_owned()));
    }
    let opcode = memory.read(registers.command_pointer, 1)?[0];
    let cpu_instruction = resolve_opcode(registers.command_pointer, opcode, memory)?;
    registers.command_pointer = (registers.command_pointer + cpu_instruction.size()) & MEMMAX;

    cpu_instruction.execute(memory, registers, ports)
}

/// RST delivery from the outside world. Returns false when the
/// interrupt system is disabled and the request is dropped.
pub fn interrupt(
    registers: &mut Registers,
    memory: &mut Memory,
    interrupt_number: usize,
) -> Result<bool> {
    assert!(interrupt_number < 8, "interrupt number must be below 8");

    if !registers.interrupt_enabled {
        return Ok(false);
    }
    registers.interrupt_enabled = false;
    registers.halted = false;
    let bytes = usize::to_le_bytes(registers.command_pointer);
    registers.stack_push(memory, bytes[1])?;
    registers.stack_push(memory, bytes[0])?;
    registers.command_pointer = interrupt_number * 8;

    Ok(true)
}

pub fn disassemble(start: usize, end: usize, memory: &Memory) -> Result<Vec<CPUInstruction>> {
    let mut instructions: Vec<CPUInstruction> = vec![];
    let mut address = start;

    while address < end {
        let opcode = memory.read(address, 1)?[0];
        let cpu_instruction = resolve_opcode(address, opcode, memory)?;
        address += cpu_instruction.size();
        instructions.push(cpu_instruction);
    }

    Ok(instructions)
}

/*
 * Streaming disassembler. Undocumented bytes come out as .DB lines so a
 * dump full of data does not stop the listing; running out of readable
 * memory ends the iteration.
 */
pub struct MemoryParserIterator<'a> {
    address: usize,
    memory: &'a Memory,
}

impl<'a> MemoryParserIterator<'a> {
    pub fn new(start_address: usize, memory: &'a Memory) -> MemoryParserIterator<'a> {
        MemoryParserIterator {
            address: start_address,
            memory,
        }
    }
}

impl Iterator for MemoryParserIterator<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let opcode = self.memory.read(self.address, 1).ok()?[0];

        match resolve_opcode(self.address, opcode, self.memory) {
            Ok(cpu_instruction) => {
                let line = format!("{}", cpu_instruction);
                self.address += cpu_instruction.size();
                Some(line)
            }
            Err(MicrocodeError::UnimplementedOpcode(_, _)) => {
                let line = format!(
                    "#0x{:04X}: {: <14}.DB ${:02x}",
                    self.address,
                    format!("({:02x})", opcode),
                    opcode
                );
                self.address += 1;
                Some(line)
            }
            Err(_) => None,
        }
    }
}

/// address the instruction at CP would transfer control to, when it is
/// a call that will actually be taken
pub fn call_destination(registers: &Registers, memory: &Memory) -> Result<Option<usize>> {
    let opcode = memory.read(registers.command_pointer, 1)?[0];
    let destination = match opcode {
        0xcd => Some(little_endian(memory.read(registers.command_pointer + 1, 2)?)),
        _ if opcode & 0xc7 == 0xc4 => {
            if condition_is_met((opcode >> 3) & 0x07, registers) {
                Some(little_endian(memory.read(registers.command_pointer + 1, 2)?))
            } else {
                None
            }
        }
        _ if opcode & 0xc7 == 0xc7 => Some((((opcode >> 3) & 0x07) as usize) * 8),
        _ => None,
    };

    Ok(destination)
}

/// same for returns, peeking the resume address on the stack
pub fn return_destination(registers: &Registers, memory: &Memory) -> Result<Option<usize>> {
    let opcode = memory.read(registers.command_pointer, 1)?[0];
    let destination = match opcode {
        0xc9 => Some(little_endian(memory.read(registers.stack_pointer, 2)?)),
        _ if opcode & 0xc7 == 0xc0 => {
            if condition_is_met((opcode >> 3) & 0x07, registers) {
                Some(little_endian(memory.read(registers.stack_pointer, 2)?))
            } else {
                None
            }
        }
        _ => None,
    };

    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::NullPorts;

    fn get_stuff(addr: usize, program: Vec<u8>) -> (Memory, Registers) {
        let mut memory = Memory::new_with_ram();
        memory.write(addr, &program).unwrap();
        let registers = Registers::new(addr);

        (memory, registers)
    }

    #[test]
    fn test_execute_step_advances_before_dispatch() {
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x3e, 0x42]); // MVI A,$42
        let log_line = execute_step(&mut registers, &mut memory, &mut NullPorts).unwrap();
        assert_eq!(0x1002, registers.command_pointer);
        assert_eq!(0x42, registers.accumulator);
        assert_eq!(7, log_line.cycles);
    }

    #[test]
    fn test_call_pushes_advanced_command_pointer() {
        let (mut memory, mut registers) = get_stuff(0x10a8, vec![0xcd, 0x00, 0x18]);
        registers.stack_pointer = 0x2400;
        let _log_line = execute_step(&mut registers, &mut memory, &mut NullPorts).unwrap();
        assert_eq!(0x1800, registers.command_pointer);
        assert_eq!(vec![0xab, 0x10], memory.read(0x23fe, 2).unwrap());
    }

    #[test]
    fn test_call_then_ret_round_trip() {
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xcd, 0x00, 0x18]);
        memory.write(0x1800, &[0xc9]).unwrap(); // RET
        registers.stack_pointer = 0x2400;
        let _log_line = execute_step(&mut registers, &mut memory, &mut NullPorts).unwrap();
        let _log_line = execute_step(&mut registers, &mut memory, &mut NullPorts).unwrap();
        assert_eq!(0x1003, registers.command_pointer);
        assert_eq!(0x2400, registers.stack_pointer);
    }

    #[test]
    fn test_undocumented_opcode_is_fatal() {
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x08]);
        match execute_step(&mut registers, &mut memory, &mut NullPorts) {
            Err(MicrocodeError::UnimplementedOpcode(addr, opcode)) => {
                assert_eq!(0x1000, addr);
                assert_eq!(0x08, opcode);
            }
            v => panic!("it should return the expected error, got {:?}", v.map(|l| l.to_string())),
        }
    }

    #[test]
    fn test_interrupt_delivery() {
        let (mut memory, mut registers) = get_stuff(0x10ab, vec![0x00]);
        registers.interrupt_enabled = true;
        registers.stack_pointer = 0x2400;
        assert!(interrupt(&mut registers, &mut memory, 1).unwrap());
        assert_eq!(0x0008, registers.command_pointer);
        assert_eq!(0x23fe, registers.stack_pointer);
        assert_eq!(vec![0xab, 0x10], memory.read(0x23fe, 2).unwrap());
        assert!(!registers.interrupt_enabled);
    }

    #[test]
    fn test_interrupt_dropped_when_disabled() {
        let (mut memory, mut registers) = get_stuff(0x10ab, vec![0x00]);
        registers.stack_pointer = 0x2400;
        assert!(!interrupt(&mut registers, &mut memory, 1).unwrap());
        assert_eq!(0x10ab, registers.command_pointer);
        assert_eq!(0x2400, registers.stack_pointer);
    }

    #[test]
    fn test_interrupt_wakes_a_halted_cpu() {
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x76]); // HLT
        registers.interrupt_enabled = true;
        registers.stack_pointer = 0x2400;
        let _log_line = execute_step(&mut registers, &mut memory, &mut NullPorts).unwrap();
        assert!(registers.halted);
        // a halted processor idles in place
        let log_line = execute_step(&mut registers, &mut memory, &mut NullPorts).unwrap();
        assert_eq!("[halted]", log_line.outcome);
        assert_eq!(0x1001, registers.command_pointer);
        assert!(interrupt(&mut registers, &mut memory, 2).unwrap());
        assert!(!registers.halted);
        assert_eq!(0x0010, registers.command_pointer);
    }

    #[test]
    fn test_disassemble() {
        let (memory, _registers) = get_stuff(0x1000, vec![0x3e, 0x42, 0xc3, 0x00, 0x18]);
        let instructions = disassemble(0x1000, 0x1005, &memory).unwrap();
        assert_eq!(2, instructions.len());
        assert_eq!("MVI A,$42", instructions[0].format_assembly());
        assert_eq!("JMP $1800", instructions[1].format_assembly());
    }

    #[test]
    fn test_parser_iterator_emits_db_for_undocumented_bytes() {
        let (memory, _registers) = get_stuff(0x1000, vec![0x08, 0x00]);
        let mut iterator = MemoryParserIterator::new(0x1000, &memory);
        assert_eq!(
            "#0x1000: (08)          .DB $08",
            iterator.next().unwrap()
        );
        assert_eq!("#0x1001: (00)          NOP", iterator.next().unwrap());
    }

    #[test]
    fn test_call_destination() {
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xc4, 0x00, 0x18]); // CNZ
        registers.set_z_flag(true);
        assert_eq!(None, call_destination(&registers, &memory).unwrap());
        registers.set_z_flag(false);
        assert_eq!(
            Some(0x1800),
            call_destination(&registers, &memory).unwrap()
        );
        memory.write(0x1000, &[0xef]).unwrap(); // RST 5
        assert_eq!(Some(0x28), call_destination(&registers, &memory).unwrap());
    }

    #[test]
    fn test_return_destination() {
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xc9]);
        registers.stack_pointer = 0x23fe;
        memory.write(0x23fe, &[0x03, 0x10]).unwrap();
        assert_eq!(
            Some(0x1003),
            return_destination(&registers, &memory).unwrap()
        );
        memory.write(0x1000, &[0xc0]).unwrap(); // RNZ
        registers.set_z_flag(true);
        assert_eq!(None, return_destination(&registers, &memory).unwrap());
    }
}
