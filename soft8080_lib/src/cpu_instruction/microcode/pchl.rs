use super::*;

pub fn pchl(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    registers.command_pointer = registers.get_hl();

    Ok(LogLine::new(
        cpu_instruction,
        format!("[CP=0x{:04x}]", registers.command_pointer),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::ports::NullPorts;

    #[test]
    fn test_pchl() {
        let cpu_instruction = CPUInstruction::new(0x1000, 0xe9, "PCHL", vec![], pchl);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xe9]);
        registers.set_hl(0x1800);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers, &mut NullPorts)
            .unwrap();
        assert_eq!(0x1800, registers.command_pointer);
        assert_eq!(5, log_line.cycles);
    }
}
