use super::*;

pub fn output(
    _memory: &mut Memory,
    registers: &mut Registers,
    ports: &mut dyn PortIO,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let port = cpu_instruction.operands[0];
    ports.port_out(port, registers.accumulator);

    Ok(LogLine::new(
        cpu_instruction,
        format!("[port 0x{:02x}=0x{:02x}]", port, registers.accumulator),
    ))
}
