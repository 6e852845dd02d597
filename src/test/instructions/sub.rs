use super::*;

#[test]
fn works() {
    let mut fixture = Fixture::with_code(&[instr!(SUB, 3, 1, 2, 0)]);
    fixture.set_reg(1, 10).set_reg(2, 3);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(3), 7);
}

#[test]
fn wraps_below_zero() {
    let mut fixture = Fixture::with_code(&[instr!(SUB, 3, 1, 2, 0)]);
    fixture.set_reg(1, 3).set_reg(2, 10);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(3), (3u64).wrapping_sub(10));
}
