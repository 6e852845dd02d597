use super::*;

#[test]
fn works() {
    let mut fixture = Fixture::with_code(&[instr!(NOT, 3, 1, 0, 0)]);
    fixture.set_reg(1, 0xC);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(3), !0xCu64);
}
