use super::*;

pub fn sub(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let byte = read_register(memory, registers, cpu_instruction.opcode & 0x07)?;
    registers.accumulator = subtract_and_set_flags(registers, byte, false);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            registers.accumulator,
            registers.format_status()
        ),
    ))
}

pub fn sui(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let byte = cpu_instruction.operands[0];
    registers.accumulator = subtract_and_set_flags(registers, byte, false);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            registers.accumulator,
            registers.format_status()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::ports::NullPorts;

    #[test]
    fn test_sub_itself_clears_carry() {
        let cpu_instruction = CPUInstruction::new(0x1000, 0x97, "SUB A", vec![], sub);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x97]);
        registers.accumulator = 0x3e;
        let _log_line = cpu_instruction
            .execute(&mut memory, &mut registers, &mut NullPorts)
            .unwrap();
        assert_eq!(0x00, registers.accumulator);
        assert!(registers.z_flag_is_set());
        assert!(!registers.c_flag_is_set());
        assert!(registers.ac_flag_is_set());
    }

    #[test]
    fn test_sui_borrow() {
        let cpu_instruction = CPUInstruction::new(0x1000, 0xd6, "SUI", vec![0x01], sui);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xd6, 0x01]);
        registers.accumulator = 0x00;
        let _log_line = cpu_instruction
            .execute(&mut memory, &mut registers, &mut NullPorts)
            .unwrap();
        // carry means borrow on the 8080
        assert_eq!(0xff, registers.accumulator);
        assert!(registers.c_flag_is_set());
        assert!(!registers.ac_flag_is_set());
        assert!(registers.s_flag_is_set());
    }
}
