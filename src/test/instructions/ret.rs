use super::*;

#[test]
fn jumps_to_stored_return_address() {
    let mut fixture = Fixture::with_code(&[instr!(RET, 0, 0, 0, 0)]);
    fixture.memory.write_dword(MEM_SIZE - 8, 0x2004).unwrap();

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.pc(), 0x2004);
}

#[test]
fn round_trip_with_call() {
    let mut fixture = Fixture::with_code(&[instr!(CALL, 1, 0, 0, 0)]);
    let target = CODE_SEG_BEGIN + 0x100;
    fixture.set_reg(1, target);
    let ret = code_from_words(&[instr!(RET, 0, 0, 0, 0)]);
    fixture
        .memory
        .slice_mut(target, 4)
        .unwrap()
        .copy_from_slice(&ret);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.pc(), CODE_SEG_BEGIN + 4);
}

#[test]
fn stack_underflow() {
    let mut fixture = Fixture::with_code(&[instr!(RET, 0, 0, 0, 0)]);
    fixture.set_reg(STACK_POINTER, 4);

    assert_eq!(fixture.step(), Some(ExitCode::StackUnderflow));
}

#[test]
fn misaligned_return_slot() {
    let mut fixture = Fixture::with_code(&[instr!(RET, 0, 0, 0, 0)]);
    fixture.set_reg(STACK_POINTER, 12);

    assert_eq!(fixture.step(), Some(ExitCode::BadAlignment));
}
