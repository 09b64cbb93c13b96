use super::*;

pub fn dcx(
    _memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let pair = (cpu_instruction.opcode >> 4) & 0x03;
    let word = read_pair(registers, pair).wrapping_sub(1) & 0xffff;
    write_pair(registers, pair, word);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[{}=0x{:04x}]", pair_name(pair), word),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::ports::NullPorts;

    #[test]
    fn test_dcx() {
        let cpu_instruction = CPUInstruction::new(0x1000, 0x0b, "DCX B", vec![], dcx);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x0b]);
        registers.set_bc(0x0000);
        let _log_line = cpu_instruction
            .execute(&mut memory, &mut registers, &mut NullPorts)
            .unwrap();
        assert_eq!(0xffff, registers.get_bc());
        assert!(!registers.z_flag_is_set());
    }
}
