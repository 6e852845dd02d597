use super::*;

#[test]
fn works() {
    let mut fixture = Fixture::with_code(&[instr!(SUBF, 3, 1, 2, 0)]);
    fixture.set_float(1, 5.5).set_float(2, 2.0);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.float(3), 3.5);
}
