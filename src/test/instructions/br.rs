use super::*;

#[test]
fn jumps_to_register_value() {
    let mut fixture = Fixture::with_code(&[instr!(BR, 1, 0, 0, 0)]);
    fixture.set_reg(1, 0x3000);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.pc(), 0x3000);
}

#[test]
fn misaligned_target_faults_at_next_fetch() {
    let mut fixture = Fixture::with_code(&[instr!(BR, 1, 0, 0, 0)]);
    fixture.set_reg(1, 0x3001);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.step(), Some(ExitCode::BadAlignment));
}
