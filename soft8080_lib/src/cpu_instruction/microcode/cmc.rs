use super::*;

pub fn cmc(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    registers.set_c_flag(!registers.c_flag_is_set());

    Ok(LogLine::new(
        cpu_instruction,
        format!("[S={}]", registers.format_status()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::ports::NullPorts;

    #[test]
    fn test_cmc() {
        let cpu_instruction = CPUInstruction::new(0x1000, 0x3f, "CMC", vec![], cmc);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x3f]);
        let _log_line = cpu_instruction
            .execute(&mut memory, &mut registers, &mut NullPorts)
            .unwrap();
        assert!(registers.c_flag_is_set());
        let _log_line = cpu_instruction
            .execute(&mut memory, &mut registers, &mut NullPorts)
            .unwrap();
        assert!(!registers.c_flag_is_set());
    }
}
