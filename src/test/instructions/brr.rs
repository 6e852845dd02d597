use super::*;

#[test]
fn offsets_from_current_instruction() {
    let mut fixture = Fixture::with_code(&[instr!(BRR, 1, 0, 0, 0)]);
    fixture.set_reg(1, 8);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.pc(), CODE_SEG_BEGIN + 8);
}
