use super::*;

pub fn input(
    _memory: &mut Memory,
    registers: &mut Registers,
    ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let port = cpu_instruction.operands[0];
    registers.accumulator = ports.port_in(port);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[A=0x{:02x}]", registers.accumulator),
    ))
}
