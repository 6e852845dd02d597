use super::*;

#[test]
fn loads_eight_bytes() {
    let mut fixture = Fixture::with_code(&[instr!(MOVML, 3, 1, 0, 0)]);
    fixture.set_reg(1, 0x10000);
    fixture.memory.write_dword(0x10000, 0xABCDEF).unwrap();

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(3), 0xABCDEF);
}

#[test]
fn negative_displacement() {
    let mut fixture = Fixture::with_code(&[instr!(MOVML, 3, 1, 0, 0xFF8)]);
    fixture.set_reg(1, 0x10008);
    fixture.memory.write_dword(0x10000, 77).unwrap();

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(3), 77);
}

#[test]
fn unaligned_address_is_allowed() {
    let mut fixture = Fixture::with_code(&[instr!(MOVML, 3, 1, 0, 0)]);
    fixture.set_reg(1, 0x10001);
    fixture.memory.write_dword(0x10000, 0xFF00).unwrap();

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(3), 0xFF00 >> 8);
}

#[test]
fn negative_effective_address_faults() {
    let mut fixture = Fixture::with_code(&[instr!(MOVML, 3, 1, 0, 0xFF8)]);
    fixture.set_reg(1, 4);

    assert_eq!(fixture.step(), Some(ExitCode::BadMemoryAccess));
}

#[test]
fn last_valid_address_succeeds() {
    let mut fixture = Fixture::with_code(&[instr!(MOVML, 3, 1, 0, 0)]);
    fixture.set_reg(1, MEM_SIZE - 8);

    assert_eq!(fixture.step(), None);
}

#[test]
fn one_past_last_valid_address_faults() {
    let mut fixture = Fixture::with_code(&[instr!(MOVML, 3, 1, 0, 0)]);
    fixture.set_reg(1, MEM_SIZE - 7);

    assert_eq!(fixture.step(), Some(ExitCode::BadMemoryAccess));
}
