use std::cmp::{max, Ordering};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};
use std::str::FromStr;

use super::primitive;
use super::{digit_from_ascii, digit_to_ascii, digits_per_word};
use super::{Digit, HalfDigit, DIGIT_BITS, HALF_DIGIT_BITS, KARATSUBA_CUTOFF};
use crate::error::Error;

/// An arbitrary-precision unsigned integer.
///
/// Stored as a little-endian sequence of 64-bit digits with no trailing
/// zeros; zero is the empty sequence. Subtraction records its final borrow
/// in a flag readable through [`BigUint::carry`]; every other operation
/// resets it.
#[derive(Clone, Default)]
pub struct BigUint {
    digits: Vec<Digit>,
    carry: bool,
}

fn trim(v: &mut Vec<Digit>) {
    while v.last() == Some(&0) {
        v.pop();
    }
}

/// Reserves room for `need` digits, growing capacity by at least 1.5x.
fn grow(v: &mut Vec<Digit>, need: usize) {
    if need > v.capacity() {
        let target = max(need, v.capacity() + v.capacity() / 2);
        v.reserve(target - v.len());
    }
}

fn get(v: &[Digit], idx: usize) -> Digit {
    if idx < v.len() {
        v[idx]
    } else {
        0
    }
}

fn cmp_digits(lhs: &[Digit], rhs: &[Digit]) -> Ordering {
    if lhs.len() != rhs.len() {
        return lhs.len().cmp(&rhs.len());
    }
    for (l, r) in lhs.iter().rev().zip(rhs.iter().rev()) {
        if l != r {
            return l.cmp(r);
        }
    }
    Ordering::Equal
}

fn add_digits(lhs: &[Digit], rhs: &[Digit]) -> Vec<Digit> {
    let n = max(lhs.len(), rhs.len());
    let mut out = Vec::with_capacity(n + 1);
    let mut carry = 0;
    for i in 0..n {
        let (sum, c) = primitive::add_carry(get(lhs, i), get(rhs, i), carry);
        out.push(sum);
        carry = c;
    }
    if carry != 0 {
        out.push(carry);
    }
    trim(&mut out);
    out
}

/// `acc += addend << (offset digits)`, extending `acc` as needed.
fn add_into(acc: &mut Vec<Digit>, addend: &[Digit], offset: usize) {
    if addend.is_empty() {
        return;
    }
    if acc.len() < offset + addend.len() {
        grow(acc, offset + addend.len());
        acc.resize(offset + addend.len(), 0);
    }
    let mut carry = 0;
    for (i, &d) in addend.iter().enumerate() {
        let (sum, c) = primitive::add_carry(acc[offset + i], d, carry);
        acc[offset + i] = sum;
        carry = c;
    }
    let mut i = offset + addend.len();
    while carry != 0 {
        if i == acc.len() {
            acc.push(carry);
            break;
        }
        let (sum, c) = primitive::add_carry(acc[i], 0, carry);
        acc[i] = sum;
        carry = c;
        i += 1;
    }
}

/// Fixed-width subtraction over `max` length; the final borrow is returned
/// rather than extending the result.
fn sub_digits(lhs: &[Digit], rhs: &[Digit]) -> (Vec<Digit>, bool) {
    let n = max(lhs.len(), rhs.len());
    let mut out = Vec::with_capacity(n);
    let mut borrow = 0;
    for i in 0..n {
        let (diff, b) = primitive::sub_borrow(get(lhs, i), get(rhs, i), borrow);
        out.push(diff);
        borrow = b;
    }
    trim(&mut out);
    (out, borrow != 0)
}

/// `lhs -= rhs`; requires `lhs >= rhs`.
fn sub_in_place(lhs: &mut Vec<Digit>, rhs: &[Digit]) {
    let mut borrow = 0;
    for i in 0..lhs.len() {
        if borrow == 0 && i >= rhs.len() {
            break;
        }
        let (diff, b) = primitive::sub_borrow(lhs[i], get(rhs, i), borrow);
        lhs[i] = diff;
        borrow = b;
    }
    debug_assert_eq!(borrow, 0);
    trim(lhs);
}

/// Single-digit long multiplication; the fast inner kernel.
fn single_mult(lhs: &[Digit], rhs: Digit) -> Vec<Digit> {
    let mut out = Vec::with_capacity(lhs.len() + 1);
    let mut carry = 0;
    for &d in lhs {
        let (hi, lo) = primitive::mul_add_wide(d, rhs, 0, carry);
        out.push(lo);
        carry = hi;
    }
    if carry != 0 {
        out.push(carry);
    }
    trim(&mut out);
    out
}

/// Schoolbook long multiplication, O(n m).
fn long_mult(lhs: &[Digit], rhs: &[Digit]) -> Vec<Digit> {
    let (small, large) = if lhs.len() <= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    if small.is_empty() {
        return Vec::new();
    }
    if small.len() == 1 {
        return single_mult(large, small[0]);
    }
    let mut out = vec![0; small.len() + large.len()];
    for (i, &s) in small.iter().enumerate() {
        if s == 0 {
            continue;
        }
        let mut carry = 0;
        for (j, &l) in large.iter().enumerate() {
            let (hi, lo) = primitive::mul_add_wide(l, s, out[i + j], carry);
            out[i + j] = lo;
            carry = hi;
        }
        out[i + large.len()] = carry;
    }
    trim(&mut out);
    out
}

/// The degenerate Karatsuba case: when one operand has at least twice the
/// digits of the other, view the larger one as a sequence of slices the
/// smaller operand's size and accumulate slice products at their offsets.
fn lopsided_mult(small: &[Digit], large: &[Digit]) -> Vec<Digit> {
    let mut out = Vec::with_capacity(small.len() + large.len());
    let mut shift = 0;
    for chunk in large.chunks(small.len()) {
        let p = karatsuba_mult(small, chunk);
        add_into(&mut out, &p, shift);
        shift += chunk.len();
    }
    trim(&mut out);
    out
}

/// Karatsuba multiplication:
///
/// ```text
///              A      B
///           x  C      D
/// ---------------------
///   AC    AD + BC    BD      with AD + BC = (A + B)(C + D) - AC - BD
/// ```
fn karatsuba_mult(lhs: &[Digit], rhs: &[Digit]) -> Vec<Digit> {
    let (small, large) = if lhs.len() <= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    if small.len() <= KARATSUBA_CUTOFF {
        return long_mult(small, large);
    }
    if 2 * small.len() <= large.len() {
        return lopsided_mult(small, large);
    }

    // Split both operands near the middle of the larger one.
    let shift = large.len() / 2;
    let (b, a) = small.split_at(shift);
    let (d, c) = large.split_at(shift);

    let ac = karatsuba_mult(a, c);
    let bd = karatsuba_mult(b, d);
    let mut ad_bc = karatsuba_mult(&add_digits(a, b), &add_digits(c, d));
    sub_in_place(&mut ad_bc, &ac);
    sub_in_place(&mut ad_bc, &bd);

    // Join AC and BD (they cannot overlap) into the result, then add the
    // middle term at the split offset.
    let mut out = bd;
    out.resize(2 * shift, 0);
    out.extend_from_slice(&ac);
    add_into(&mut out, &ad_bc, shift);
    trim(&mut out);
    out
}

fn mult_digits(lhs: &[Digit], rhs: &[Digit]) -> Vec<Digit> {
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }
    if lhs == [1] {
        return rhs.to_vec();
    }
    if rhs == [1] {
        return lhs.to_vec();
    }
    karatsuba_mult(lhs, rhs)
}

/// Single-digit long division: sweep from the top, carrying the running
/// remainder into each two-digit divide.
fn single_divmod(lhs: &[Digit], rhs: Digit) -> (Vec<Digit>, Digit) {
    let mut q = vec![0; lhs.len()];
    let mut r = 0;
    for i in (0..lhs.len()).rev() {
        let (qd, rd) = primitive::div_wide_rem(r, lhs[i], rhs);
        q[i] = qd;
        r = rd;
    }
    trim(&mut q);
    (q, r)
}

/// `v <<= r` for `r < 64`, appending the carry-out digit if nonzero.
fn shl_bits_in_place(v: &mut Vec<Digit>, r: u32) {
    if r == 0 || v.is_empty() {
        return;
    }
    let mut carry = 0;
    for d in v.iter_mut() {
        let shifted = (*d << r) | carry;
        carry = *d >> (DIGIT_BITS - r);
        *d = shifted;
    }
    if carry != 0 {
        grow(v, v.len() + 1);
        v.push(carry);
    }
}

/// `v >>= r` for `r < 64`.
fn shr_bits_in_place(v: &mut Vec<Digit>, r: u32) {
    if r == 0 || v.is_empty() {
        return;
    }
    for i in 0..v.len() {
        let next = get(v, i + 1);
        v[i] = (v[i] >> r) | (next << (DIGIT_BITS - r));
    }
    trim(v);
}

/// Knuth's Algorithm D. Requires a divisor of at least two digits no larger
/// than the dividend.
fn knuth_divmod(lhs: &[Digit], rhs: &[Digit]) -> (Vec<Digit>, Vec<Digit>) {
    let n = rhs.len();
    debug_assert!(n >= 2 && lhs.len() >= n);

    // D1. Normalise: shift both operands left so the divisor's top digit
    // has its high bit set.
    let d = DIGIT_BITS - primitive::bits(rhs[n - 1]);
    let mut v = lhs.to_vec();
    let mut w = rhs.to_vec();
    shl_bits_in_place(&mut v, d);
    shl_bits_in_place(&mut w, d);
    debug_assert_eq!(w.len(), n);

    if v[v.len() - 1] >= w[n - 1] {
        v.push(0);
    }
    let v_size = v.len();
    v.push(0);

    // Quotient has at most (and usually exactly) k + 1 digits.
    let k = v_size - n;
    let mut q = vec![0; k + 1];

    let wm1 = w[n - 1];
    let wm2 = w[n - 2];
    let radix = 1u128 << DIGIT_BITS;

    for j in (0..=k).rev() {
        // D3. Estimate the quotient digit from the top two dividend digits;
        // the estimate is at most two too large.
        let x_hi = v[j + n];
        let x_lo = v[j + n - 1];
        let x = (u128::from(x_hi) << DIGIT_BITS) | u128::from(x_lo);
        let (mut qhat, mut rhat) = if x_hi >= wm1 {
            let q = u128::from(Digit::MAX);
            (q, x - q * u128::from(wm1))
        } else {
            (x / u128::from(wm1), x % u128::from(wm1))
        };
        while rhat < radix
            && qhat * u128::from(wm2) > (rhat << DIGIT_BITS | u128::from(v[j + n - 2]))
        {
            qhat -= 1;
            rhat += u128::from(wm1);
        }
        #[allow(clippy::cast_possible_truncation)]
        let mut qhat = qhat as Digit;

        // D4. Multiply and subtract qhat * w from v[j..=j+n].
        let mut mul_hi = 0;
        let mut borrow = 0;
        for (i, &wd) in w.iter().enumerate() {
            let (hi, lo) = primitive::mul_add_wide(wd, qhat, 0, mul_hi);
            mul_hi = hi;
            let (diff, b) = primitive::sub_borrow(v[j + i], lo, borrow);
            v[j + i] = diff;
            borrow = b;
        }
        let (diff, b) = primitive::sub_borrow(v[j + n], mul_hi, borrow);
        v[j + n] = diff;

        if b != 0 {
            // D6. The estimate was one too large after all; add w back.
            qhat -= 1;
            let mut carry = 0;
            for (i, &wd) in w.iter().enumerate() {
                let (sum, c) = primitive::add_carry(v[j + i], wd, carry);
                v[j + i] = sum;
                carry = c;
            }
            // The final carry cancels the borrow.
            let (sum, _) = primitive::add_carry(v[j + n], 0, carry);
            v[j + n] = sum;
        }

        q[j] = qhat;
    }

    // D8. Denormalise the remainder.
    v.truncate(n);
    shr_bits_in_place(&mut v, d);
    trim(&mut v);
    trim(&mut q);
    (q, v)
}

impl BigUint {
    /// Zero.
    pub const fn new() -> Self {
        Self {
            digits: Vec::new(),
            carry: false,
        }
    }

    fn from_vec(mut digits: Vec<Digit>) -> Self {
        trim(&mut digits);
        Self {
            digits,
            carry: false,
        }
    }

    fn clone_value(&self) -> Self {
        Self {
            digits: self.digits.clone(),
            carry: false,
        }
    }

    /// Builds a value from little-endian digits; trailing zeros are trimmed.
    pub fn from_digits(digits: &[Digit]) -> Self {
        Self::from_vec(digits.to_vec())
    }

    /// Builds a value from most-significant-first digits.
    pub fn from_digits_be(digits: &[Digit]) -> Self {
        Self::from_vec(digits.iter().rev().copied().collect())
    }

    /// Interprets a byte slice as a big-endian magnitude. Empty input is
    /// zero.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let mut digits = Vec::new();
        grow(&mut digits, bytes.len().div_ceil(8));
        for chunk in bytes.rchunks(8) {
            let mut d: Digit = 0;
            for &b in chunk {
                d = (d << 8) | Digit::from(b);
            }
            digits.push(d);
        }
        Self::from_vec(digits)
    }

    /// Parses digits of `base` from a byte slice.
    ///
    /// Bases 2..=36 use the symbols `0-9` then letters in either case; base
    /// 256 treats the bytes as a big-endian magnitude. Empty input is zero.
    ///
    /// # Errors
    /// `UnsupportedBase` for any other base; `InvalidDigitForBase` for a
    /// symbol outside the base.
    pub fn from_bytes_radix(bytes: &[u8], base: u32) -> Result<Self, Error> {
        match base {
            2..=36 => {
                let mut out = Self::new();
                out.reserve_digits(bytes.len() / digits_per_word(base) + 1);
                if base.is_power_of_two() {
                    let bits = base.trailing_zeros();
                    for &ch in bytes {
                        let d = match digit_from_ascii(ch) {
                            Some(d) if d < Digit::from(base) => d,
                            _ => {
                                return Err(Error::InvalidDigitForBase {
                                    ch: char::from(ch),
                                    base,
                                })
                            }
                        };
                        out.shl_bits_or(bits, d);
                    }
                } else {
                    for &ch in bytes {
                        let d = match digit_from_ascii(ch) {
                            Some(d) if d < Digit::from(base) => d,
                            _ => {
                                return Err(Error::InvalidDigitForBase {
                                    ch: char::from(ch),
                                    base,
                                })
                            }
                        };
                        out.mul_digit_add(Digit::from(base), d);
                    }
                }
                Ok(out)
            }
            256 => Ok(Self::from_bytes_be(bytes)),
            _ => Err(Error::UnsupportedBase { base }),
        }
    }

    /// Parses a string of digits in `base`; see [`BigUint::from_bytes_radix`].
    ///
    /// # Errors
    /// As [`BigUint::from_bytes_radix`].
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self, Error> {
        Self::from_bytes_radix(s.as_bytes(), base)
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// The borrow flag of the most recent subtraction that produced this
    /// value; false after every other operation.
    pub const fn carry(&self) -> bool {
        self.carry
    }

    /// The little-endian digit view.
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Digit at `idx`, zero beyond the length.
    pub fn digit(&self, idx: usize) -> Digit {
        get(&self.digits, idx)
    }

    /// Value of bit `n`.
    pub fn bit(&self, n: usize) -> bool {
        (self.digit(n / DIGIT_BITS as usize) >> (n % DIGIT_BITS as usize)) & 1 == 1
    }

    /// Bit length: position of the highest set bit plus one, zero for zero.
    pub fn bits(&self) -> usize {
        match self.digits.last() {
            Some(&top) => {
                (self.digits.len() - 1) * DIGIT_BITS as usize + primitive::bits(top) as usize
            }
            None => 0,
        }
    }

    /// Quotient and remainder in one pass.
    ///
    /// ```
    /// use basex::BigUint;
    ///
    /// let (q, r) = BigUint::from(100u64).divmod(&BigUint::from(7u64)).unwrap();
    /// assert_eq!(q, BigUint::from(14u64));
    /// assert_eq!(r, BigUint::from(2u64));
    /// ```
    ///
    /// # Errors
    /// `DivisionByZero` when `rhs` is zero.
    pub fn divmod(&self, rhs: &Self) -> Result<(Self, Self), Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self.digits.len() == 1 && rhs.digits.len() == 1 {
            let (a, b) = (self.digits[0], rhs.digits[0]);
            return Ok((Self::from(a / b), Self::from(a % b)));
        }
        if rhs.digits == [1] {
            return Ok((self.clone_value(), Self::new()));
        }
        match cmp_digits(&self.digits, &rhs.digits) {
            Ordering::Equal => return Ok((Self::from(1u64), Self::new())),
            Ordering::Less => return Ok((Self::new(), self.clone_value())),
            Ordering::Greater => {}
        }
        if rhs.digits.len() == 1 {
            let (q, r) = single_divmod(&self.digits, rhs.digits[0]);
            return Ok((Self::from_vec(q), Self::from(r)));
        }
        let (q, r) = knuth_divmod(&self.digits, &rhs.digits);
        Ok((Self::from_vec(q), Self::from_vec(r)))
    }

    /// Quotient and single-digit remainder; `rhs` must be nonzero.
    pub(crate) fn divmod_digit(&self, rhs: Digit) -> (Self, Digit) {
        debug_assert!(rhs != 0);
        if self.digits.len() <= 1 {
            let a = self.digit(0);
            return (Self::from(a / rhs), a % rhs);
        }
        let (q, r) = single_divmod(&self.digits, rhs);
        (Self::from_vec(q), r)
    }

    /// `self = (self << bits) | d` in one sweep; `bits < 64`, `d < 2^bits`.
    pub(crate) fn shl_bits_or(&mut self, bits: u32, d: Digit) {
        shl_bits_in_place(&mut self.digits, bits);
        if d != 0 {
            if self.digits.is_empty() {
                self.digits.push(d);
            } else {
                self.digits[0] |= d;
            }
        }
        self.carry = false;
    }

    /// `self = self * m + a` in one sweep; `m` must be nonzero.
    pub(crate) fn mul_digit_add(&mut self, m: Digit, a: Digit) {
        debug_assert!(m != 0);
        let mut carry = a;
        for d in &mut self.digits {
            let (hi, lo) = primitive::mul_add_wide(*d, m, carry, 0);
            *d = lo;
            carry = hi;
        }
        if carry != 0 {
            let need = self.digits.len() + 1;
            grow(&mut self.digits, need);
            self.digits.push(carry);
        }
        self.carry = false;
    }

    pub(crate) fn reserve_digits(&mut self, n: usize) {
        grow(&mut self.digits, n);
    }

    /// The value as a little-endian stream of half-digits.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn half_digits(&self) -> impl Iterator<Item = HalfDigit> + '_ {
        self.digits
            .iter()
            .flat_map(|&d| [d as HalfDigit, (d >> HALF_DIGIT_BITS) as HalfDigit])
    }

    /// Renders the value in `base`, 2..=36. For raw bytes use
    /// [`BigUint::to_bytes_be`].
    ///
    /// ```
    /// use basex::BigUint;
    ///
    /// let n = BigUint::from(255u64);
    /// assert_eq!(n.to_string_radix(2).unwrap(), "11111111");
    /// assert_eq!(n.to_string_radix(16).unwrap(), "ff");
    /// assert_eq!(n.to_string_radix(36).unwrap(), "73");
    /// ```
    ///
    /// # Errors
    /// `UnsupportedBase` outside 2..=36.
    pub fn to_string_radix(&self, base: u32) -> Result<String, Error> {
        if !(2..=36).contains(&base) {
            return Err(Error::UnsupportedBase { base });
        }
        Ok(self.format_radix(base))
    }

    /// `base` is pre-validated to 2..=36.
    fn format_radix(&self, base: u32) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut out = Vec::with_capacity(self.digits.len() * digits_per_word(base));
        if base.is_power_of_two() {
            // Pack bits straight out of the half-digit stream; no division.
            let bits = base.trailing_zeros();
            let mask = Digit::from(base) - 1;
            let mut acc: Digit = 0;
            let mut acc_bits = 0;
            for hd in self.half_digits() {
                acc |= Digit::from(hd) << acc_bits;
                acc_bits += HALF_DIGIT_BITS;
                while acc_bits >= bits {
                    out.push(digit_to_ascii(acc & mask));
                    acc >>= bits;
                    acc_bits -= bits;
                }
            }
            while acc != 0 {
                out.push(digit_to_ascii(acc & mask));
                acc >>= bits;
            }
            while out.last() == Some(&b'0') {
                out.pop();
            }
        } else {
            let mut quotient = self.clone_value();
            loop {
                let (q, r) = quotient.divmod_digit(Digit::from(base));
                out.push(digit_to_ascii(r));
                quotient = q;
                if quotient.is_zero() {
                    break;
                }
            }
        }
        out.reverse();
        out.into_iter().map(char::from).collect()
    }

    /// The big-endian byte representation, leading zeros stripped; zero is a
    /// single `0x00` byte. Note that this makes the byte round-trip lossy
    /// for inputs with leading zero bytes.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        if self.is_zero() {
            return vec![0];
        }
        let mut out = Vec::with_capacity(self.digits.len() * 8);
        for &d in self.digits.iter().rev() {
            out.extend_from_slice(&d.to_be_bytes());
        }
        let first = out.iter().position(|&b| b != 0).unwrap_or(0);
        out.drain(..first);
        out
    }
}

impl From<u64> for BigUint {
    fn from(value: u64) -> Self {
        if value == 0 {
            Self::new()
        } else {
            Self {
                digits: vec![value],
                carry: false,
            }
        }
    }
}

impl From<u8> for BigUint {
    fn from(value: u8) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<u16> for BigUint {
    fn from(value: u16) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<u32> for BigUint {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<usize> for BigUint {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

impl From<u128> for BigUint {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: u128) -> Self {
        Self::from_vec(vec![value as Digit, (value >> DIGIT_BITS) as Digit])
    }
}

impl PartialEq for BigUint {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for BigUint {}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_digits(&self.digits, &other.digits)
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for BigUint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl Add<&BigUint> for &BigUint {
    type Output = BigUint;

    fn add(self, rhs: &BigUint) -> BigUint {
        if rhs.is_zero() {
            return self.clone_value();
        }
        if self.is_zero() {
            return rhs.clone_value();
        }
        BigUint::from_vec(add_digits(&self.digits, &rhs.digits))
    }
}

impl Sub<&BigUint> for &BigUint {
    type Output = BigUint;

    /// Subtraction is fixed-width: when `rhs > self` the digits wrap and the
    /// result's [`BigUint::carry`] flag is set.
    fn sub(self, rhs: &BigUint) -> BigUint {
        if rhs.is_zero() {
            return self.clone_value();
        }
        let (digits, borrow) = sub_digits(&self.digits, &rhs.digits);
        BigUint {
            digits,
            carry: borrow,
        }
    }
}

impl Mul<&BigUint> for &BigUint {
    type Output = BigUint;

    fn mul(self, rhs: &BigUint) -> BigUint {
        BigUint::from_vec(mult_digits(&self.digits, &rhs.digits))
    }
}

impl Div<&BigUint> for &BigUint {
    type Output = BigUint;

    /// # Panics
    /// On a zero divisor; use [`BigUint::divmod`] to handle that case.
    fn div(self, rhs: &BigUint) -> BigUint {
        match self.divmod(rhs) {
            Ok((q, _)) => q,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl Rem<&BigUint> for &BigUint {
    type Output = BigUint;

    /// # Panics
    /// On a zero divisor; use [`BigUint::divmod`] to handle that case.
    fn rem(self, rhs: &BigUint) -> BigUint {
        match self.divmod(rhs) {
            Ok((_, r)) => r,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

impl BitAnd<&BigUint> for &BigUint {
    type Output = BigUint;

    fn bitand(self, rhs: &BigUint) -> BigUint {
        let n = max(self.digits.len(), rhs.digits.len());
        BigUint::from_vec((0..n).map(|i| self.digit(i) & rhs.digit(i)).collect())
    }
}

impl BitOr<&BigUint> for &BigUint {
    type Output = BigUint;

    fn bitor(self, rhs: &BigUint) -> BigUint {
        let n = max(self.digits.len(), rhs.digits.len());
        BigUint::from_vec((0..n).map(|i| self.digit(i) | rhs.digit(i)).collect())
    }
}

impl BitXor<&BigUint> for &BigUint {
    type Output = BigUint;

    fn bitxor(self, rhs: &BigUint) -> BigUint {
        let n = max(self.digits.len(), rhs.digits.len());
        BigUint::from_vec((0..n).map(|i| self.digit(i) ^ rhs.digit(i)).collect())
    }
}

impl Not for &BigUint {
    type Output = BigUint;

    /// Inverts over the operand's current bit length (minimum one bit):
    /// `!x == (2^max(bits(x), 1) - 1) - x`, so `!0 == 1`. This is a ring
    /// operation; two's-complement negation is `!x + 1`.
    fn not(self) -> BigUint {
        let width = self.bits().max(1);
        let n = width.div_ceil(DIGIT_BITS as usize);
        let mut out: Vec<Digit> = (0..n).map(|i| !self.digit(i)).collect();
        let top = (width % DIGIT_BITS as usize) as u32;
        if top != 0 {
            if let Some(last) = out.last_mut() {
                *last &= (1 << top) - 1;
            }
        }
        BigUint::from_vec(out)
    }
}

impl Not for BigUint {
    type Output = BigUint;

    fn not(self) -> BigUint {
        !&self
    }
}

impl Shl<usize> for &BigUint {
    type Output = BigUint;

    fn shl(self, rhs: usize) -> BigUint {
        if self.is_zero() || rhs == 0 {
            return self.clone_value();
        }
        let whole = rhs / DIGIT_BITS as usize;
        let rest = (rhs % DIGIT_BITS as usize) as u32;
        let mut out = vec![0; whole];
        out.extend_from_slice(&self.digits);
        shl_bits_in_place(&mut out, rest);
        BigUint::from_vec(out)
    }
}

impl Shr<usize> for &BigUint {
    type Output = BigUint;

    fn shr(self, rhs: usize) -> BigUint {
        if rhs == 0 {
            return self.clone_value();
        }
        if rhs >= self.bits() {
            return BigUint::new();
        }
        let whole = rhs / DIGIT_BITS as usize;
        let rest = (rhs % DIGIT_BITS as usize) as u32;
        let mut out = self.digits[whole..].to_vec();
        shr_bits_in_place(&mut out, rest);
        BigUint::from_vec(out)
    }
}

impl Shl<usize> for BigUint {
    type Output = BigUint;

    fn shl(self, rhs: usize) -> BigUint {
        &self << rhs
    }
}

impl Shr<usize> for BigUint {
    type Output = BigUint;

    fn shr(self, rhs: usize) -> BigUint {
        &self >> rhs
    }
}

impl ShlAssign<usize> for BigUint {
    fn shl_assign(&mut self, rhs: usize) {
        *self = &*self << rhs;
    }
}

impl ShrAssign<usize> for BigUint {
    fn shr_assign(&mut self, rhs: usize) {
        *self = &*self >> rhs;
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<BigUint> for BigUint {
            type Output = BigUint;

            fn $method(self, rhs: BigUint) -> BigUint {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&BigUint> for BigUint {
            type Output = BigUint;

            fn $method(self, rhs: &BigUint) -> BigUint {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<BigUint> for &BigUint {
            type Output = BigUint;

            fn $method(self, rhs: BigUint) -> BigUint {
                $imp::$method(self, &rhs)
            }
        }
    };
}

macro_rules! forward_assign {
    ($imp:ident, $method:ident, $base:ident, $base_method:ident) => {
        impl $imp<&BigUint> for BigUint {
            fn $method(&mut self, rhs: &BigUint) {
                *self = $base::$base_method(&*self, rhs);
            }
        }

        impl $imp<BigUint> for BigUint {
            fn $method(&mut self, rhs: BigUint) {
                *self = $base::$base_method(&*self, &rhs);
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
forward_binop!(Rem, rem);
forward_binop!(BitAnd, bitand);
forward_binop!(BitOr, bitor);
forward_binop!(BitXor, bitxor);

forward_assign!(AddAssign, add_assign, Add, add);
forward_assign!(SubAssign, sub_assign, Sub, sub);
forward_assign!(MulAssign, mul_assign, Mul, mul);
forward_assign!(DivAssign, div_assign, Div, div);
forward_assign!(RemAssign, rem_assign, Rem, rem);
forward_assign!(BitAndAssign, bitand_assign, BitAnd, bitand);
forward_assign!(BitOrAssign, bitor_assign, BitOr, bitor);
forward_assign!(BitXorAssign, bitxor_assign, BitXor, bitxor);

impl FromStr for BigUint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_str_radix(s, 10)
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_radix(10))
    }
}

impl fmt::Binary for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_radix(2))
    }
}

impl fmt::Octal for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_radix(8))
    }
}

impl fmt::LowerHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_radix(16))
    }
}

impl fmt::Debug for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.digits)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BigUint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format_radix(10))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigUint {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = BigUint;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal string")
            }

            fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<BigUint, E> {
                BigUint::from_str_radix(s, 10).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}
