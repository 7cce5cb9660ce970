//! Arbitrary precision rational numbers.
//!
//! This module provides the exact fraction type every solver engine
//! operates on. Values are always stored in lowest terms with a positive
//! denominator (the `dashu::RBig` invariant).

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::RationalError;
use crate::integer::Integer;

/// Default tolerance for the near-zero heuristic.
///
/// Near-zero tests are only used for pivot candidate exclusion on values
/// that originated as floats; every final equality decision in the solver
/// uses exact comparison.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Largest denominator kept when approximating a float.
///
/// Floats carry binary noise (`0.1` is not exactly 1/10); clamping the
/// denominator recovers the decimal the user meant and keeps repeating
/// expansions from blowing up intermediate sizes.
const MAX_APPROX_DENOMINATOR: i64 = 10_000;

/// An arbitrary precision rational number.
///
/// Rationals are immutable values: arithmetic produces new instances and
/// always reduces to lowest terms. Equality and ordering are exact.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// A negative denominator moves its sign to the numerator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        let numerator = if denominator.is_negative() {
            -numerator
        } else {
            numerator
        };
        Ok(Self(RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        )))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Approximates a float by the closest rational with denominator at
    /// most 10 000, via continued-fraction convergents.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::NotFinite`] for NaN or infinite input.
    pub fn from_f64(value: f64) -> Result<Self, RationalError> {
        if !value.is_finite() {
            return Err(RationalError::NotFinite);
        }
        if value == 0.0 {
            return Ok(Self::zero());
        }

        // Exact binary fraction of the float: mantissa * 2^exponent.
        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        let biased = ((bits >> 52) & 0x7ff) as i64;
        let fraction = bits & ((1u64 << 52) - 1);
        let (mantissa, exponent) = if biased == 0 {
            (fraction, -1074i64)
        } else {
            (fraction | (1u64 << 52), biased - 1075)
        };

        let mut num = IBig::from(mantissa);
        let mut den = IBig::ONE;
        if exponent >= 0 {
            num *= IBig::from(2).pow(usize::try_from(exponent).unwrap_or(0));
        } else {
            den = IBig::from(2).pow(usize::try_from(-exponent).unwrap_or(0));
        }

        let exact = Self(RBig::from_parts(num.clone(), den.clone().unsigned_abs()));
        let (p, q) = limit_denominator(&num, &den, &IBig::from(MAX_APPROX_DENOMINATOR), &exact.0);
        let approx = Self(RBig::from_parts(p, q.unsigned_abs()));
        Ok(if negative { -approx } else { approx })
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x), or `None` for zero.
    #[must_use]
    pub fn recip(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Checked division.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, RationalError> {
        if rhs.is_zero() {
            Err(RationalError::DivisionByZero)
        } else {
            Ok(Self(&self.0 / &rhs.0))
        }
    }

    /// Returns the closest float approximation.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    /// Returns true if the float approximation of this value has magnitude
    /// below `tolerance`.
    ///
    /// Intentionally inexact; used only as a pivot-selection heuristic.
    /// Final equality decisions must use [`Zero::is_zero`] instead.
    #[must_use]
    pub fn is_near_zero(&self, tolerance: f64) -> bool {
        self.to_f64().abs() < tolerance
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }
}

/// Best rational approximation of `num/den` (both non-negative, `den > 0`)
/// with denominator at most `max_den`.
///
/// Ports the classic `limit_denominator` convergent walk; `exact` is the
/// same value as an `RBig`, used for the final closeness comparison.
fn limit_denominator(num: &IBig, den: &IBig, max_den: &IBig, exact: &RBig) -> (IBig, IBig) {
    if den <= max_den {
        return (num.clone(), den.clone());
    }

    let (mut p0, mut q0) = (IBig::ZERO, IBig::ONE);
    let (mut p1, mut q1) = (IBig::ONE, IBig::ZERO);
    let (mut n, mut d) = (num.clone(), den.clone());

    loop {
        let a = &n / &d;
        let q2 = &q0 + &a * &q1;
        if &q2 > max_den {
            break;
        }
        let p2 = &p0 + &a * &p1;
        p0 = std::mem::replace(&mut p1, p2);
        q0 = std::mem::replace(&mut q1, q2);
        let r = &n - &a * &d;
        n = std::mem::replace(&mut d, r);
        if d.is_zero() {
            // Terminated exactly within the bound.
            return (p1, q1);
        }
    }

    let k = (max_den - &q0) / &q1;
    let bound_num = &p0 + &k * &p1;
    let bound_den = &q0 + &k * &q1;

    let bound = RBig::from_parts(bound_num.clone(), bound_den.clone().unsigned_abs());
    let convergent = RBig::from_parts(p1.clone(), q1.clone().unsigned_abs());

    let bound_dist = (&bound - exact).abs();
    let convergent_dist = (&convergent - exact).abs();
    if convergent_dist <= bound_dist {
        (p1, q1)
    } else {
        (bound_num, bound_den)
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Parses `"p/q"`, integer and plain decimal literals.
    ///
    /// String decimals are exact (`"0.3"` becomes 3/10); only float input
    /// goes through the bounded approximation of [`Rational::from_f64`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RationalError::Parse(s.to_string()));
        }

        if let Some((num, den)) = trimmed.split_once('/') {
            let numerator: IBig = num
                .trim()
                .parse()
                .map_err(|_| RationalError::Parse(s.to_string()))?;
            let denominator: IBig = den
                .trim()
                .parse()
                .map_err(|_| RationalError::Parse(s.to_string()))?;
            return Self::new(Integer::from(numerator), Integer::from(denominator));
        }

        if let Some((int_part, frac_part)) = trimmed.split_once('.') {
            let (negative, int_digits) = match int_part.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, int_part.strip_prefix('+').unwrap_or(int_part)),
            };
            let all_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
            if !all_digits(int_digits)
                || !all_digits(frac_part)
                || (int_digits.is_empty() && frac_part.is_empty())
            {
                return Err(RationalError::Parse(s.to_string()));
            }
            let mut digits = String::with_capacity(int_digits.len() + frac_part.len() + 1);
            digits.push('0');
            digits.push_str(int_digits);
            digits.push_str(frac_part);
            let numerator: IBig = digits
                .parse()
                .map_err(|_| RationalError::Parse(s.to_string()))?;
            let denominator = UBig::from(10u8).pow(frac_part.len());
            let value = Self(RBig::from_parts(numerator, denominator));
            return Ok(if negative { -value } else { value });
        }

        let numerator: IBig = trimmed
            .parse()
            .map_err(|_| RationalError::Parse(s.to_string()))?;
        Ok(Self(RBig::from(numerator)))
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}

impl Div for Rational {
    type Output = Self;

    /// Panics on division by zero; use [`Rational::checked_div`] when the
    /// divisor is not already known to be non-zero.
    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div<&Rational> for Rational {
    type Output = Self;

    fn div(self, rhs: &Rational) -> Self::Output {
        Self(self.0 / &rhs.0)
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        Rational(&self.0 / &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::new(i64::from(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d).unwrap()
    }

    #[test]
    fn test_basic_ops() {
        let a = rat(1, 2);
        let b = rat(1, 3);

        // 1/2 + 1/3 = 5/6
        let sum = a.clone() + b.clone();
        assert_eq!(sum.numerator().to_i64(), Some(5));
        assert_eq!(sum.denominator().to_i64(), Some(6));

        // 1/2 * 1/3 = 1/6
        let prod = a * b;
        assert_eq!(prod, rat(1, 6));
    }

    #[test]
    fn test_reduction_and_sign() {
        // 4/6 reduces to 2/3
        assert_eq!(rat(4, 6), rat(2, 3));
        // 1/-2 normalizes to -1/2
        let r = rat(1, -2);
        assert!(r.is_negative());
        assert_eq!(r.denominator().to_i64(), Some(2));
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(
            Rational::from_i64(1, 0),
            Err(RationalError::DivisionByZero)
        );
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(rat(1, 2).checked_div(&rat(1, 3)), Ok(rat(3, 2)));
        assert_eq!(
            rat(1, 2).checked_div(&Rational::zero()),
            Err(RationalError::DivisionByZero)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(rat(3, 1).to_string(), "3");
        assert_eq!(rat(2, 3).to_string(), "2/3");
        assert_eq!(rat(-2, 3).to_string(), "-2/3");
    }

    #[test]
    fn test_parse() {
        assert_eq!("3/4".parse::<Rational>(), Ok(rat(3, 4)));
        assert_eq!(" -3/2 ".parse::<Rational>(), Ok(rat(-3, 2)));
        assert_eq!("5".parse::<Rational>(), Ok(rat(5, 1)));
        assert_eq!("0.3".parse::<Rational>(), Ok(rat(3, 10)));
        assert_eq!("-1.25".parse::<Rational>(), Ok(rat(-5, 4)));
        assert_eq!(".5".parse::<Rational>(), Ok(rat(1, 2)));
        assert!("abc".parse::<Rational>().is_err());
        assert_eq!(
            "1/0".parse::<Rational>(),
            Err(RationalError::DivisionByZero)
        );
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Rational::from_f64(0.5), Ok(rat(1, 2)));
        // 0.1 is not exactly 1/10 in binary; the bounded approximation
        // recovers the intended decimal.
        assert_eq!(Rational::from_f64(0.1), Ok(rat(1, 10)));
        assert_eq!(Rational::from_f64(1.0 / 3.0), Ok(rat(1, 3)));
        assert_eq!(Rational::from_f64(-2.0), Ok(rat(-2, 1)));
        assert_eq!(Rational::from_f64(f64::NAN), Err(RationalError::NotFinite));
    }

    #[test]
    fn test_near_zero() {
        assert!(Rational::zero().is_near_zero(DEFAULT_TOLERANCE));
        assert!(rat(1, 10_000_000_000_000).is_near_zero(DEFAULT_TOLERANCE));
        assert!(!rat(1, 1000).is_near_zero(DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_recip() {
        assert_eq!(rat(3, 5).recip(), Some(rat(5, 3)));
        assert_eq!(Rational::zero().recip(), None);
    }
}
