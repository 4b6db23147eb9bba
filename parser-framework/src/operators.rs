//! Operator sugar for the most common combinators.
//!
//! | operator | combinator                  | result      |
//! |----------|-----------------------------|-------------|
//! | `a + b`  | [`and_then`](crate::and_then)   | `(A, B)`    |
//! | `a - b`  | [`keep_left`](crate::keep_left) | `A`         |
//! | `a * b`  | [`keep_right`](crate::keep_right) | `B`       |
//! | `a \| b` | [`or_else`](crate::or_else)     | `A`         |
//! | `a >> f` | [`map`](crate::map)             | `f(A)`      |

use crate::combinators;
use crate::parser::Parser;
use std::ops::{Add, BitOr, Mul, Shr, Sub};

/// `+` for sequence: A + B -> (A, B)
impl<T: 'static, U: 'static> Add<Parser<U>> for Parser<T> {
    type Output = Parser<(T, U)>;

    fn add(self, rhs: Parser<U>) -> Self::Output {
        combinators::and_then(self, rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<T: 'static, U: 'static> Sub<Parser<U>> for Parser<T> {
    type Output = Parser<T>;

    fn sub(self, rhs: Parser<U>) -> Self::Output {
        combinators::keep_left(self, rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<T: 'static, U: 'static> Mul<Parser<U>> for Parser<T> {
    type Output = Parser<U>;

    fn mul(self, rhs: Parser<U>) -> Self::Output {
        combinators::keep_right(self, rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<T: 'static> BitOr<Parser<T>> for Parser<T> {
    type Output = Parser<T>;

    fn bitor(self, rhs: Parser<T>) -> Self::Output {
        combinators::or_else(self, rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F> for Parser<T> {
    type Output = Parser<U>;

    fn shr(self, f: F) -> Self::Output {
        combinators::map(self, f)
    }
}
