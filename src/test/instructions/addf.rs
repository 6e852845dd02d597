use super::*;

#[test]
fn works() {
    let mut fixture = Fixture::with_code(&[instr!(ADDF, 3, 1, 2, 0)]);
    fixture.set_float(1, 5.5).set_float(2, 2.0);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.float(3), 7.5);
}

#[test]
fn shares_registers_with_integers() {
    let mut fixture = Fixture::with_code(&[instr!(ADDF, 3, 1, 2, 0)]);
    fixture.set_float(1, 1.0).set_float(2, 0.0);

    assert_eq!(fixture.step(), None);
    // The result is visible bit-for-bit through the integer view.
    assert_eq!(fixture.reg(3), 1.0f64.to_bits());
}
