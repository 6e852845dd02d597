use super::*;

#[test]
fn works() {
    let mut fixture = Fixture::with_code(&[instr!(XOR, 3, 1, 2, 0)]);
    fixture.set_reg(1, 0xC).set_reg(2, 0xA);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(3), 0x6);
}

#[test]
fn clears_when_operands_alias() {
    let mut fixture = Fixture::with_code(&[instr!(XOR, 1, 1, 1, 0)]);
    fixture.set_reg(1, 0xDEAD_BEEF);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(1), 0);
}
