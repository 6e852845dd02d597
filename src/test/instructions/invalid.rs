use super::*;

#[test]
fn unassigned_opcode_faults() {
    // 0x1E and 0x1F are the only unassigned values of the 5-bit op field.
    let mut fixture = Fixture::with_code(&[0xF000_0000]);

    assert_eq!(fixture.step(), Some(ExitCode::InvalidOpcode));

    let mut fixture = Fixture::with_code(&[0xF800_0000]);

    assert_eq!(fixture.step(), Some(ExitCode::InvalidOpcode));
}
