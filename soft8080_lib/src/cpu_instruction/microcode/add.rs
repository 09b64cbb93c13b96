use super::*;

pub fn add(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let byte = read_register(memory, registers, cpu_instruction.opcode & 0x07)?;
    registers.accumulator = add_and_set_flags(registers, byte, false);

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[A=0x{:02x}][S={}]",
            registers.accumulator,
            registers.format_status()
        ),
    ))
}

pub fn adi(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let byte = cpu_instruction.operands[0];
    registers.accumulator = add_and_set_flags(registers, byte, false);

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
    fn test_add() {
        let cpu_instruction = CPUInstruction::new(0x1000, 0x80, "ADD B", vec![], add);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x80]);
        registers.accumulator = 0x6c;
        registers.register_b = 0x2e;
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers, &mut NullPorts)
            .unwrap();
        assert_eq!(0x9a, registers.accumulator);
        assert!(!registers.z_flag_is_set());
        assert!(registers.s_flag_is_set());
        assert!(registers.p_flag_is_set());
        assert!(registers.ac_flag_is_set());
        assert!(!registers.c_flag_is_set());
        assert_eq!(4, log_line.cycles);
    }

    #[test]
    fn test_add_sets_carry_and_zero() {
        let cpu_instruction = CPUInstruction::new(0x1000, 0x87, "ADD A", vec![], add);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x87]);
        registers.accumulator = 0x80;
        let _log_line = cpu_instruction
            .execute(&mut memory, &mut registers, &mut NullPorts)
            .unwrap();
        assert_eq!(0x00, registers.accumulator);
        assert!(registers.z_flag_is_set());
        assert!(registers.c_flag_is_set());
        assert!(!registers.ac_flag_is_set());
    }

    #[test]
    fn test_adi() {
        let cpu_instruction = CPUInstruction::new(0x1000, 0xc6, "ADI", vec![0x01], adi);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xc6, 0x01]);
        registers.accumulator = 0x0f;
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers, &mut NullPorts)
            .unwrap();
        assert_eq!(0x10, registers.accumulator);
        assert!(registers.ac_flag_is_set());
        assert!(!registers.c_flag_is_set());
        assert_eq!(7, log_line.cycles);
    }
}
