/*
 * ALU
 * Stateless computations shared by the arithmetic, compare and branch
 * microcodes. Everything is done in 8 bits, the carry keeps what the
 * truncation loses. Decimal mode is not supported.
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sum {
    pub value: u8,
    pub carry: bool,
    pub overflow: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub carry: bool,
    pub zero: bool,
    pub negative: bool,
}

pub fn zero(value: u8) -> bool {
    value == 0
}

pub fn negative(value: u8) -> bool {
    value & 0x80 != 0
}

/// `a + b + carry`, the overflow is set when both operands share a sign the
/// result does not have.
pub fn add_with_carry(a: u8, b: u8, carry: bool) -> Sum {
    let sum = a as u16 + b as u16 + carry as u16;
    let value = sum as u8;

    Sum {
        value,
        carry: sum > 0xff,
        overflow: (a ^ value) & (b ^ value) & 0x80 != 0,
    }
}

/// Subtraction is the addition of the one's complement, the carry in being
/// "no borrow" and so is the carry out.
pub fn subtract_with_carry(a: u8, b: u8, carry: bool) -> Sum {
    add_with_carry(a, !b, carry)
}

pub fn compare(register: u8, operand: u8) -> Comparison {
    Comparison {
        carry: register >= operand,
        zero: register == operand,
        negative: negative(register.wrapping_sub(operand)),
    }
}

/// Decode a branch operand: a byte with bit 7 set is a negative offset.
pub fn signed_displacement(byte: u8) -> i16 {
    if negative(byte) {
        -(((!byte) as i16) + 1)
    } else {
        byte as i16
    }
}

/// Encode an offset back in a branch operand, None when it does not fit.
pub fn displacement_byte(offset: i16) -> Option<u8> {
    i8::try_from(offset).ok().map(|offset| offset as u8)
}

/// Where a branch located at `address` lands when taken: the displacement
/// counts from the instruction following the branch.
pub fn branch_target(address: u16, displacement: u8) -> u16 {
    address
        .wrapping_add(2)
        .wrapping_add(signed_displacement(displacement) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_negative() {
        assert!(zero(0x00));
        assert!(!zero(0x01));
        assert!(negative(0x80));
        assert!(negative(0xff));
        assert!(!negative(0x7f));
    }

    #[test]
    fn test_add_overflow() {
        let sum = add_with_carry(0x7f, 0x01, false);
        assert_eq!(0x80, sum.value);
        assert!(sum.overflow);
        assert!(!sum.carry);
    }

    #[test]
    fn test_add_carry() {
        let sum = add_with_carry(0xff, 0x01, false);
        assert_eq!(0x00, sum.value);
        assert!(sum.carry);
        assert!(!sum.overflow);
        let sum = add_with_carry(0x80, 0xff, true);
        assert_eq!(0x80, sum.value);
        assert!(sum.carry);
        assert!(!sum.overflow);
        let sum = add_with_carry(0x80, 0x80, false);
        assert_eq!(0x00, sum.value);
        assert!(sum.carry);
        assert!(sum.overflow);
    }

    #[test]
    fn test_subtract() {
        let sum = subtract_with_carry(0x05, 0x03, true);
        assert_eq!(0x02, sum.value);
        assert!(sum.carry);
        let sum = subtract_with_carry(0x03, 0x05, true);
        assert_eq!(0xfe, sum.value);
        assert!(!sum.carry);
        let sum = subtract_with_carry(0x05, 0x03, false);
        assert_eq!(0x01, sum.value);
        let sum = subtract_with_carry(0x80, 0x01, true);
        assert_eq!(0x7f, sum.value);
        assert!(sum.overflow);
    }

    #[test]
    fn test_compare() {
        assert_eq!(
            Comparison {
                carry: true,
                zero: true,
                negative: false
            },
            compare(0x10, 0x10)
        );
        assert_eq!(
            Comparison {
                carry: false,
                zero: false,
                negative: true
            },
            compare(0x10, 0x11)
        );
        assert_eq!(
            Comparison {
                carry: true,
                zero: false,
                negative: true
            },
            compare(0xff, 0x01)
        );
    }

    #[test]
    fn test_displacement() {
        assert_eq!(0x10, signed_displacement(0x10));
        assert_eq!(-1, signed_displacement(0xff));
        assert_eq!(-128, signed_displacement(0x80));
        assert_eq!(Some(0xfe), displacement_byte(-2));
        assert_eq!(None, displacement_byte(128));
        assert_eq!(None, displacement_byte(-129));
    }

    #[test]
    fn test_branch_target() {
        assert_eq!(0x0612, branch_target(0x0600, 0x10));
        assert_eq!(0x0600, branch_target(0x0600, 0xfe));
        assert_eq!(0x0001, branch_target(0xffff, 0x00));
    }
}
