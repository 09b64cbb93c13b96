use super::*;

pub fn lhld(
    memory: &mut Memory,
    registers: &mut Registers,
    _ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let addr = little_endian(cpu_instruction.operands.clone());
    let word = little_endian(memory.read(addr, 2)?);
    registers.set_hl(word);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[HL=0x{:04x}]", word),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::ports::NullPorts;

    #[test]
    fn test_lhld() {
        let cpu_instruction = CPUInstruction::new(0x1000, 0x2a, "LHLD", vec![0x00, 0x20], lhld);
        let (mut memory, mut registers) = get_stuff(0x1000, vec![0x2a, 0x00, 0x20]);
        memory.write(0x2000, &[0xcd, 0xab]).unwrap();
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers, &mut NullPorts)
            .unwrap();
        assert_eq!(0xab, registers.register_h);
        assert_eq!(0xcd, registers.register_l);
        assert_eq!(16, log_line.cycles);
    }
}
