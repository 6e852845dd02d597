use super::*;

#[test]
fn works() {
    let mut fixture = Fixture::with_code(&[instr!(OR, 3, 1, 2, 0)]);
    fixture.set_reg(1, 0xC).set_reg(2, 0xA);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(3), 0xE);
}
