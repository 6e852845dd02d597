use super::*;

#[test]
fn works() {
    let mut fixture = Fixture::with_code(&[instr!(SHFTR, 3, 1, 2, 0)]);
    fixture.set_reg(1, 16).set_reg(2, 2);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(3), 4);
}

#[test]
fn oversized_count_clears() {
    let mut fixture = Fixture::with_code(&[instr!(SHFTR, 3, 1, 2, 0)]);
    fixture.set_reg(1, u64::max_value()).set_reg(2, 64);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.reg(3), 0);
}
