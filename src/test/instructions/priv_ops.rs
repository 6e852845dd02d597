use super::*;

#[test]
fn subcode_zero_halts() {
    let mut fixture = Fixture::with_code(&[instr!(PRIV, 0, 0, 0, 0)]);

    assert_eq!(fixture.step(), Some(ExitCode::Halted));
}

#[test]
fn subcode_three_reads_into_rd() {
    let mut fixture = Fixture::with_code(&[instr!(PRIV, 1, 0, 0, 3)]);
    fixture.console.input.push_back(12345);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(1), 12345);
}

#[test]
fn subcode_three_fails_on_bad_input() {
    let mut fixture = Fixture::with_code(&[instr!(PRIV, 1, 0, 0, 3)]);

    assert_eq!(fixture.step(), Some(ExitCode::BadInput));
}

#[test]
fn port_one_prints_decimal() {
    let mut fixture = Fixture::with_code(&[instr!(PRIV, 1, 2, 0, 4)]);
    fixture.set_reg(1, 1).set_reg(2, 9000);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.console.decimals, vec![9000]);
}

#[test]
fn port_three_prints_low_byte() {
    let mut fixture = Fixture::with_code(&[instr!(PRIV, 1, 2, 0, 4)]);
    fixture.set_reg(1, 3).set_reg(2, 0x1FF41);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.console.bytes, vec![0x41]);
}

#[test]
fn unknown_port_faults() {
    let mut fixture = Fixture::with_code(&[instr!(PRIV, 1, 2, 0, 4)]);
    fixture.set_reg(1, 2).set_reg(2, 1);

    assert_eq!(fixture.step(), Some(ExitCode::InvalidPort));
}

#[test]
fn unknown_subcode_faults() {
    let mut fixture = Fixture::with_code(&[instr!(PRIV, 0, 0, 0, 7)]);

    assert_eq!(fixture.step(), Some(ExitCode::InvalidPrivCode));
}
