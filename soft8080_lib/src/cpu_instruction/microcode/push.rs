use super::*;

/*
 * PUSH stores the high byte at SP - 1 and the low byte at SP - 2. The
 * fourth pair selector is PSW: accumulator high, status register low.
 */
pub fn push(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let pair = (cpu_instruction.opcode >> 4) & 0x03;
    let (high, low, name) = if pair == 0x03 {
        (
            registers.accumulator,
            registers.get_status_register(),
            "PSW",
        )
    } else {
        let word = read_pair(registers, pair);
        ((word >> 8) as u8, word as u8, pair_name(pair))
    };
    registers.stack_push(memory, high)?;
    registers.stack_push(memory, low)?;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[{}→stack][SP=0x{:04x}]", name, registers.stack_pointer),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::ports::NullPorts;

    #[test]
    fn test_push_pair() {
        let cpu_instruction = CPUInstruction::new(0x1000, 0xd5, "PUSH D", vec![], push);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xd5]);
        registers.stack_pointer = 0x2400;
        registers.set_de(0x1234);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers, &mut NullPorts)
            .unwrap();
        assert_eq!(0x23fe, registers.stack_pointer);
        assert_eq!(vec![0x34, 0x12], memory.read(0x23fe, 2).unwrap());
        assert_eq!(11, log_line.cycles);
    }

    #[test]
    fn test_push_psw() {
        let cpu_instruction = CPUInstruction::new(0x1000, 0xf5, "PUSH PSW", vec![], push);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xf5]);
        registers.stack_pointer = 0x2400;
        registers.accumulator = 0x5a;
        registers.set_z_flag(true);
        registers.set_c_flag(true);
        let _log_line = cpu_instruction
            .execute(&mut memory, &mut registers, &mut NullPorts)
            .unwrap();
        // low byte is the packed status with fixed bit 1 set
        assert_eq!(
            vec![0b0100_0011, 0x5a],
            memory.read(0x23fe, 2).unwrap()
        );
    }
}
