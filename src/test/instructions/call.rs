use super::*;

#[test]
fn stores_return_address_without_moving_sp() {
    let mut fixture = Fixture::with_code(&[instr!(CALL, 1, 0, 0, 0)]);
    fixture.set_reg(1, 0x6000);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.pc(), 0x6000);
    assert_eq!(
        fixture.memory.read_dword(MEM_SIZE - 8),
        Ok(CODE_SEG_BEGIN + 4)
    );
    // The stack pointer is not decremented; stack discipline is the
    // callee's job.
    assert_eq!(fixture.reg(STACK_POINTER), MEM_SIZE);
}

#[test]
fn stack_underflow() {
    let mut fixture = Fixture::with_code(&[instr!(CALL, 1, 0, 0, 0)]);
    fixture.set_reg(1, 0x6000).set_reg(STACK_POINTER, 0);

    assert_eq!(fixture.step(), Some(ExitCode::StackUnderflow));
}

#[test]
fn misaligned_return_slot() {
    let mut fixture = Fixture::with_code(&[instr!(CALL, 1, 0, 0, 0)]);
    fixture.set_reg(1, 0x6000).set_reg(STACK_POINTER, 12);

    assert_eq!(fixture.step(), Some(ExitCode::BadAlignment));
}
