use super::*;

#[test]
fn works() {
    let mut fixture = Fixture::with_code(&[instr!(MUL, 3, 1, 2, 0)]);
    fixture.set_reg(1, 10).set_reg(2, 3);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(3), 30);
}
