use soft8080_lib::memory::{AddressableIO, MemoryError};
use soft8080_lib::*;
use tempfile::TempDir;

/// writes a ROM set where the first image starts with the given program
fn write_rom_set(program: &[u8]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let mut image = vec![0x00; ROM_FILE_SIZE];
    image[..program.len()].copy_from_slice(program);
    std::fs::write(dir.path().join(ROM_FILES[0]), &image).unwrap();
    for name in &ROM_FILES[1..] {
        std::fs::write(dir.path().join(name), vec![0x00; ROM_FILE_SIZE]).unwrap();
    }

    dir
}

#[test]
fn test_rom_set_size_is_checked() {
    let dir = tempfile::tempdir().unwrap();
    for name in &ROM_FILES {
        std::fs::write(dir.path().join(name), vec![0x00; ROM_FILE_SIZE]).unwrap();
    }
    std::fs::write(dir.path().join(ROM_FILES[2]), vec![0x00; 100]).unwrap();
    match Machine::new(dir.path()) {
        Err(MachineError::RomSize {
            expected, found, ..
        }) => {
            assert_eq!(ROM_FILE_SIZE, expected);
            assert_eq!(100, found);
        }
        _ => panic!("it should reject the truncated image"),
    }
}

#[test]
fn test_missing_rom_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Machine::new(dir.path()),
        Err(MachineError::Io(_, _))
    ));
}

#[test]
fn test_rom_region_rejects_program_writes() {
    let dir = write_rom_set(&[0x00]);
    let mut machine = Machine::new(dir.path()).unwrap();
    match machine.memory.write(0x0000, &[0xff]) {
        Err(MemoryError::ReadOnly(addr)) => assert_eq!(0x0000, addr),
        v => panic!("it should return the expected error, got {:?}", v),
    }
}

#[test]
fn test_ram_mirror() {
    let dir = write_rom_set(&[0x00]);
    let mut machine = Machine::new(dir.path()).unwrap();
    machine.memory.write(0x4000, &[0x42]).unwrap();
    assert_eq!(vec![0x42], machine.memory.read(0x2000, 1).unwrap());
}

#[test]
fn test_interrupt_delivery_into_board_ram() {
    let dir = write_rom_set(&[0x00]);
    let mut machine = Machine::new(dir.path()).unwrap();
    machine.registers.interrupt_enabled = true;
    machine.registers.stack_pointer = 0x2400;
    machine.registers.command_pointer = 0x10ab;
    assert!(interrupt(&mut machine.registers, &mut machine.memory, 1).unwrap());
    assert_eq!(vec![0xab, 0x10], machine.memory.read(0x23fe, 2).unwrap());
    assert_eq!(0x23fe, machine.registers.stack_pointer);
    assert_eq!(0x0008, machine.registers.command_pointer);
    assert!(!machine.registers.interrupt_enabled);
}

/*
 * Boot program plus two interrupt handlers. The handlers bump one RAM
 * counter each so the test can observe how many times the scanline and
 * vertical blank interrupts actually fired.
 */
fn counting_program() -> Vec<u8> {
    vec![
        0x31, 0x00, 0x24, // 0x0000 LXI SP,$2400
        0xfb, // 0x0003 EI
        0xc3, 0x04, 0x00, // 0x0004 JMP $0004
        0x00, // padding
        0x21, 0x00, 0x20, // 0x0008 LXI H,$2000 (mid screen handler)
        0x34, // 0x000b INR M
        0xfb, // 0x000c EI
        0xc9, // 0x000d RET
        0x00, 0x00, // padding
        0x21, 0x01, 0x20, // 0x0010 LXI H,$2001 (vertical blank handler)
        0x34, // 0x0013 INR M
        0xfb, // 0x0014 EI
        0xc9, // 0x0015 RET
    ]
}

#[test]
fn test_each_frame_fires_both_interrupts_once() {
    let dir = write_rom_set(&counting_program());
    let mut machine = Machine::new(dir.path()).unwrap();

    machine.run_frame().unwrap();
    assert_eq!(1, machine.frame_count());
    // the vertical blank was just delivered, its handler runs next frame
    assert_eq!(0x0010, machine.registers.command_pointer);
    assert!(!machine.registers.interrupt_enabled);
    assert_eq!(vec![0x01, 0x00], machine.memory.read(0x2000, 2).unwrap());

    machine.run_frame().unwrap();
    assert_eq!(2, machine.frame_count());
    assert_eq!(vec![0x02, 0x01], machine.memory.read(0x2000, 2).unwrap());
}

#[test]
fn test_halted_cpu_still_reaches_the_vertical_blank() {
    // EI then HLT: only the interrupts can move the machine forward
    let program = vec![
        0x31, 0x00, 0x24, // LXI SP,$2400
        0xfb, // EI
        0x76, // HLT
        0x00, 0x00, 0x00, // padding
        0xfb, // 0x0008 EI
        0x76, // 0x0009 HLT
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // padding
        0xfb, // 0x0010 EI
        0x76, // 0x0011 HLT
    ];
    let dir = write_rom_set(&program);
    let mut machine = Machine::new(dir.path()).unwrap();
    machine.run_frame().unwrap();
    assert_eq!(0x0010, machine.registers.command_pointer);
    assert!(!machine.registers.halted);
}

#[test]
fn test_shift_register_reached_through_the_port_bus() {
    let program = vec![
        0x31, 0x00, 0x24, // LXI SP,$2400
        0x3e, 0xaa, // MVI A,$aa
        0xd3, 0x04, // OUT $04
        0x3e, 0xff, // MVI A,$ff
        0xd3, 0x04, // OUT $04
        0x3e, 0x07, // MVI A,$07
        0xd3, 0x02, // OUT $02
        0xdb, 0x03, // IN $03
        0x32, 0x00, 0x20, // STA $2000
        0x76, // HLT
    ];
    let dir = write_rom_set(&program);
    let mut machine = Machine::new(dir.path()).unwrap();
    while !machine.registers.halted {
        machine.step().unwrap();
    }
    assert_eq!(vec![0xd5], machine.memory.read(0x2000, 1).unwrap());
}

#[test]
fn test_framebuffer_window() {
    let dir = write_rom_set(&[0x00]);
    let mut machine = Machine::new(dir.path()).unwrap();
    machine.memory.write(VRAM_ADDR, &[0x80]).unwrap();
    machine
        .memory
        .write(VRAM_ADDR + VRAM_SIZE - 1, &[0x01])
        .unwrap();
    let framebuffer = machine.framebuffer().unwrap();
    assert_eq!(VRAM_SIZE, framebuffer.len());
    assert_eq!(0x80, framebuffer[0]);
    assert_eq!(0x01, framebuffer[VRAM_SIZE - 1]);
}
