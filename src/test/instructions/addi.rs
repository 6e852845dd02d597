use super::*;

#[test]
fn accumulates_into_rd() {
    // addi reads rd, not rs: the immediate is added to the destination.
    let mut fixture = Fixture::with_code(&[instr!(ADDI, 1, 0, 0, 5)]);
    fixture.set_reg(1, 10);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(1), 15);
}

#[test]
fn ignores_rs() {
    let mut fixture = Fixture::with_code(&[instr!(ADDI, 1, 2, 0, 5)]);
    fixture.set_reg(1, 10).set_reg(2, 1000);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(1), 15);
}

#[test]
fn wraps_on_overflow() {
    let mut fixture = Fixture::with_code(&[instr!(ADDI, 1, 0, 0, 1)]);
    fixture.set_reg(1, u64::max_value());

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(1), 0);
}
