use super::*;

#[test]
fn works() {
    let mut fixture = Fixture::with_code(&[instr!(DIVF, 3, 1, 2, 0)]);
    fixture.set_float(1, 5.5).set_float(2, 2.0);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.float(3), 2.75);
}

#[test]
fn division_by_zero_faults() {
    let mut fixture = Fixture::with_code(&[instr!(DIVF, 3, 1, 2, 0)]);
    fixture.set_float(1, 5.5).set_float(2, 0.0);

    assert_eq!(fixture.step(), Some(ExitCode::DivisionByZero));
}

#[test]
fn division_by_negative_zero_faults() {
    let mut fixture = Fixture::with_code(&[instr!(DIVF, 3, 1, 2, 0)]);
    fixture.set_float(1, 5.5).set_float(2, -0.0);

    assert_eq!(fixture.step(), Some(ExitCode::DivisionByZero));
}
