use super::*;

#[test]
fn accumulates_into_rd() {
    let mut fixture = Fixture::with_code(&[instr!(SUBI, 1, 0, 0, 5)]);
    fixture.set_reg(1, 15);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(1), 10);
}
