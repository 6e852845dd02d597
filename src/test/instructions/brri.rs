use super::*;

#[test]
fn positive_byte_offset() {
    let mut fixture = Fixture::with_code(&[instr!(BRRI, 0, 0, 0, 8)]);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.pc(), CODE_SEG_BEGIN + 8);
}

#[test]
fn negative_byte_offset() {
    let mut fixture = Fixture::with_code(&[instr!(BRRI, 0, 0, 0, 0xFF8)]);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.pc(), CODE_SEG_BEGIN - 8);
}

#[test]
fn zero_offset_lands_on_the_branch_itself() {
    let mut fixture = Fixture::with_code(&[instr!(BRRI, 0, 0, 0, 0)]);

    assert_eq!(fixture.step(), None);
    assert_eq!(fixture.pc(), CODE_SEG_BEGIN);
}
