use super::*;

pub fn ei(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    registers.interrupt_enabled = true;

    Ok(LogLine::new(cpu_instruction, "[INTE=1]".to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::ports::NullPorts;

    #[test]
    fn test_ei() {
        let cpu_instruction = CPUInstruction::new(0x1000, 0xfb, "EI", vec![], ei);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0xfb]);
        let _log_line = cpu_instruction
            .execute(&mut memory, &mut registers, &mut NullPorts)
            .unwrap();
        assert!(registers.interrupt_enabled);
    }
}
