use super::*;

#[test]
fn copies_register() {
    let mut fixture = Fixture::with_code(&[instr!(MOVRR, 4, 2, 0, 0)]);
    fixture.set_reg(2, 0xABCDEF);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(4), 0xABCDEF);
}
