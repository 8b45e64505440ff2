use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::{InputError, MAX_EXPONENT, MAX_NESTING, Var, Variables};

use super::Polynomial;

/// Coefficients may not grow past this many bits through `^`.
const MAX_COEFFICIENT_BITS: u64 = 1 << 20;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(BigRational),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Number(n) => n.to_string(),
            Token::Ident(name) => name.clone(),
            Token::Plus => "+".into(),
            Token::Minus => "-".into(),
            Token::Star => "*".into(),
            Token::Slash => "/".into(),
            Token::Caret => "^".into(),
            Token::LParen => "(".into(),
            Token::RParen => ")".into(),
        }
    }
}

pub(super) fn parse(source: &str, vars: &Variables) -> Result<Polynomial, InputError> {
    let tokens = tokenize(source)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        vars,
    };
    let poly = parser.expr()?;
    match parser.tokens.get(parser.pos) {
        None => Ok(poly),
        Some((token, position)) => Err(InputError::UnexpectedToken {
            found: token.describe(),
            position: *position,
        }),
    }
}

fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, InputError> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        let start = i;
        let token = match c {
            b' ' | b'\t' | b'\n' | b'\r' => {
                i += 1;
                continue;
            }
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'/' => Token::Slash,
            b'^' => Token::Caret,
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b'*' if bytes.get(i + 1) == Some(&b'*') => {
                i += 1;
                Token::Caret
            }
            b'*' => Token::Star,
            b'0'..=b'9' | b'.' => {
                let (number, end) = lex_number(source, start)?;
                tokens.push((Token::Number(number), start));
                i = end;
                continue;
            }
            c if c.is_ascii_alphabetic() || c == b'_' => {
                let end = source[start..]
                    .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '_'))
                    .map_or(source.len(), |n| start + n);
                tokens.push((Token::Ident(source[start..end].to_owned()), start));
                i = end;
                continue;
            }
            _ => {
                let found = source[start..].chars().next().map(String::from);
                return Err(InputError::UnexpectedToken {
                    found: found.unwrap_or_default(),
                    position: start,
                });
            }
        };
        tokens.push((token, start));
        i += 1;
    }

    Ok(tokens)
}

/// Lexes `digits[.digits][(e|E)[+|-]digits]` into an exact rational.
fn lex_number(source: &str, start: usize) -> Result<(BigRational, usize), InputError> {
    let bytes = source.as_bytes();
    let digits_end = |from: usize| {
        bytes[from..]
            .iter()
            .position(|b| !b.is_ascii_digit())
            .map_or(bytes.len(), |n| from + n)
    };

    let int_end = digits_end(start);
    let mut mantissa: String = source[start..int_end].to_owned();
    let mut frac_len = 0usize;
    let mut end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_end(end + 1);
        mantissa.push_str(&source[end + 1..frac_end]);
        frac_len = frac_end - end - 1;
        end = frac_end;
    }

    if mantissa.is_empty() {
        return Err(InputError::UnexpectedToken {
            found: ".".into(),
            position: start,
        });
    }

    let mut exponent: i64 = 0;
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        let negative = bytes.get(exp_start) == Some(&b'-');
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_end(exp_start);
        if exp_end == exp_start {
            return Err(InputError::UnexpectedToken {
                found: source[end..exp_start].to_owned(),
                position: end,
            });
        }
        let magnitude: i64 = source[exp_start..exp_end]
            .parse()
            .map_err(|_| InputError::ExponentTooLarge { position: end })?;
        exponent = if negative { -magnitude } else { magnitude };
        end = exp_end;
    }

    let numerator: BigInt = mantissa
        .parse()
        .map_err(|_| InputError::UnexpectedToken {
            found: source[start..end].to_owned(),
            position: start,
        })?;

    let shift = exponent.saturating_sub(i64::try_from(frac_len).unwrap_or(i64::MAX));
    if shift.unsigned_abs() > u64::from(MAX_EXPONENT) * 4 {
        return Err(InputError::ExponentTooLarge { position: start });
    }
    let ten = BigRational::from_integer(BigInt::from(10));
    let scale = num_traits::pow(ten, usize::try_from(shift.unsigned_abs()).unwrap_or(0));
    let value = BigRational::from_integer(numerator);
    let value = if shift >= 0 { value * scale } else { value / scale };

    Ok((value, end))
}

struct Parser<'a> {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    depth: usize,
    vars: &'a Variables,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn position(&self) -> usize {
        self.tokens.get(self.pos).map_or(usize::MAX, |(_, p)| *p)
    }

    fn advance(&mut self) -> Option<(Token, usize)> {
        let next = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        next
    }

    /// expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<Polynomial, InputError> {
        let mut acc = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.advance();
                    acc = &acc + &self.term()?;
                }
                Some(Token::Minus) => {
                    self.advance();
                    acc = &acc - &self.term()?;
                }
                _ => return Ok(acc),
            }
        }
    }

    /// term := unary (('*' | '/') unary)*
    fn term(&mut self) -> Result<Polynomial, InputError> {
        let mut acc = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    let position = self.position();
                    self.advance();
                    let rhs = self.unary()?;
                    check_product(&acc, &rhs, position)?;
                    acc = &acc * &rhs;
                }
                Some(Token::Slash) => {
                    let position = self.position();
                    self.advance();
                    let divisor = self
                        .unary()?
                        .as_constant()
                        .ok_or(InputError::DivisionByNonConstant { position })?;
                    if divisor.is_zero() {
                        return Err(InputError::DivisionByZero { position });
                    }
                    acc = acc.scale(&divisor.recip());
                }
                _ => return Ok(acc),
            }
        }
    }

    /// unary := ('-' | '+') unary | power
    ///
    /// Every recursive path of the grammar passes through here, so this is
    /// where nesting is bounded.
    fn unary(&mut self) -> Result<Polynomial, InputError> {
        if self.depth >= MAX_NESTING {
            return Err(InputError::NestingTooDeep {
                position: self.position(),
            });
        }

        self.depth += 1;
        let result = match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                self.unary().map(|p| -&p)
            }
            Some(Token::Plus) => {
                self.advance();
                self.unary()
            }
            _ => self.power(),
        };
        self.depth -= 1;
        result
    }

    /// power := atom ('^' unary)?
    fn power(&mut self) -> Result<Polynomial, InputError> {
        let base = self.atom()?;
        if self.peek() != Some(&Token::Caret) {
            return Ok(base);
        }

        let position = self.position();
        self.advance();
        let exponent = self
            .unary()?
            .as_constant()
            .filter(|e| e.is_integer() && !e.is_negative())
            .ok_or(InputError::InvalidExponent { position })?;
        let exponent = exponent
            .to_integer()
            .to_u32()
            .filter(|e| *e <= MAX_EXPONENT)
            .ok_or(InputError::ExponentTooLarge { position })?;

        check_power(&base, exponent, position)?;
        Ok(base.pow(exponent))
    }

    /// atom := number | variable | '(' expr ')'
    fn atom(&mut self) -> Result<Polynomial, InputError> {
        let Some((token, position)) = self.advance() else {
            return Err(InputError::UnexpectedEnd);
        };

        match token {
            Token::Number(value) => Ok(Polynomial::constant(self.vars.clone(), value)),
            Token::Ident(name) => {
                if self.peek() == Some(&Token::LParen) {
                    return Err(InputError::UnsupportedFunction { name, position });
                }
                match self.vars.lookup(&name) {
                    Some(var) => Ok(Polynomial::var(self.vars.clone(), var)),
                    None => Err(InputError::UnknownVariable { name, position }),
                }
            }
            Token::LParen => {
                let inner = self.expr()?;
                match self.advance() {
                    Some((Token::RParen, _)) => Ok(inner),
                    Some((other, position)) => Err(InputError::UnexpectedToken {
                        found: other.describe(),
                        position,
                    }),
                    None => Err(InputError::UnexpectedEnd),
                }
            }
            other => Err(InputError::UnexpectedToken {
                found: other.describe(),
                position,
            }),
        }
    }
}

/// Rejects `lhs * rhs` before expanding it if a degree would pass the cap.
fn check_product(lhs: &Polynomial, rhs: &Polynomial, position: usize) -> Result<(), InputError> {
    for var in [Var::X1, Var::X2] {
        let degree = lhs.degree_in(var).checked_add(rhs.degree_in(var));
        if degree.is_none_or(|d| d > MAX_EXPONENT) {
            return Err(InputError::ExponentTooLarge { position });
        }
    }
    Ok(())
}

/// Rejects `base^exponent` before expanding it if a degree would pass the
/// cap or the coefficients would grow unreasonably large.
fn check_power(base: &Polynomial, exponent: u32, position: usize) -> Result<(), InputError> {
    for var in [Var::X1, Var::X2] {
        let degree = base.degree_in(var).checked_mul(exponent);
        if degree.is_none_or(|d| d > MAX_EXPONENT) {
            return Err(InputError::ExponentTooLarge { position });
        }
    }

    let bits = base
        .terms()
        .map(|(_, c)| c.numer().bits().max(c.denom().bits()))
        .max()
        .unwrap_or(0);
    if bits.saturating_mul(u64::from(exponent)) > MAX_COEFFICIENT_BITS {
        return Err(InputError::ExponentTooLarge { position });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> Variables {
        Variables::default()
    }

    fn r(n: i64, d: i64) -> BigRational {
        BigRational::new(n.into(), d.into())
    }

    #[test]
    fn parses_course_function() {
        let f = parse("3*x1**2 + 2*x1*x2 + 2*x2^2 + 7", &vars()).unwrap();
        assert_eq!(f.coefficient([2, 0]), r(3, 1));
        assert_eq!(f.coefficient([1, 1]), r(2, 1));
        assert_eq!(f.coefficient([0, 2]), r(2, 1));
        assert_eq!(f.coefficient([0, 0]), r(7, 1));
    }

    #[test]
    fn decimals_are_exact() {
        let f = parse("0.1*x1 + 2.5e-1 + 1E2*x2", &vars()).unwrap();
        assert_eq!(f.coefficient([1, 0]), r(1, 10));
        assert_eq!(f.coefficient([0, 0]), r(1, 4));
        assert_eq!(f.coefficient([0, 1]), r(100, 1));
    }

    #[test]
    fn unary_minus_binds_looser_than_power() {
        let f = parse("-x1^2", &vars()).unwrap();
        assert_eq!(f.coefficient([2, 0]), r(-1, 1));
    }

    #[test]
    fn power_is_right_associative() {
        let f = parse("x1^2^2", &vars()).unwrap();
        assert_eq!(f.coefficient([4, 0]), r(1, 1));
    }

    #[test]
    fn division_by_constant_expression() {
        let f = parse("x1 / (2 + 2)", &vars()).unwrap();
        assert_eq!(f.coefficient([1, 0]), r(1, 4));
    }

    #[test]
    fn rejects_unknown_variable() {
        let err = parse("x1 + x3", &vars()).unwrap_err();
        assert_eq!(
            err,
            InputError::UnknownVariable {
                name: "x3".into(),
                position: 5
            }
        );
    }

    #[test]
    fn rejects_functions() {
        let err = parse("sin(x1)", &vars()).unwrap_err();
        assert!(matches!(err, InputError::UnsupportedFunction { ref name, .. } if name == "sin"));
    }

    #[test]
    fn rejects_non_polynomial_exponents() {
        assert!(matches!(
            parse("x1^0.5", &vars()),
            Err(InputError::InvalidExponent { .. })
        ));
        assert!(matches!(
            parse("x1^-1", &vars()),
            Err(InputError::InvalidExponent { .. })
        ));
        assert!(matches!(
            parse("x1^x2", &vars()),
            Err(InputError::InvalidExponent { .. })
        ));
        assert!(matches!(
            parse("x1^300", &vars()),
            Err(InputError::ExponentTooLarge { .. })
        ));
    }

    #[test]
    fn rejects_expansion_past_the_degree_cap() {
        assert!(matches!(
            parse("((x1 + 1)^255)^255", &vars()),
            Err(InputError::ExponentTooLarge { .. })
        ));
        assert!(matches!(
            parse("(x2 - 1)^200 * (x2 + 1)^100", &vars()),
            Err(InputError::ExponentTooLarge { .. })
        ));
        assert!(matches!(
            parse("((2^255)^255)^255", &vars()),
            Err(InputError::ExponentTooLarge { .. })
        ));

        let f = parse("(x1^5)^51 * x2^255", &vars()).unwrap();
        assert_eq!(f.coefficient([255, 255]), r(1, 1));
    }

    #[test]
    fn rejects_deep_nesting() {
        let deep = format!("{}x1{}", "(".repeat(5_000), ")".repeat(5_000));
        assert!(matches!(
            parse(&deep, &vars()),
            Err(InputError::NestingTooDeep { .. })
        ));

        let signs = format!("{}x1", "-".repeat(5_000));
        assert!(matches!(
            parse(&signs, &vars()),
            Err(InputError::NestingTooDeep { .. })
        ));

        let nested = format!("{}x1{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(parse(&nested, &vars()), Ok(parse("x1", &vars()).unwrap()));
    }

    #[test]
    fn rejects_bad_division() {
        assert_eq!(
            parse("x1 / x2", &vars()),
            Err(InputError::DivisionByNonConstant { position: 3 })
        );
        assert_eq!(
            parse("x1 / (1 - 1)", &vars()),
            Err(InputError::DivisionByZero { position: 3 })
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse("", &vars()), Err(InputError::UnexpectedEnd));
        assert_eq!(parse("(x1 + 1", &vars()), Err(InputError::UnexpectedEnd));
        assert_eq!(
            parse("x1 x2", &vars()),
            Err(InputError::UnexpectedToken {
                found: "x2".into(),
                position: 3
            })
        );
        assert_eq!(
            parse("x1 # 2", &vars()),
            Err(InputError::UnexpectedToken {
                found: "#".into(),
                position: 3
            })
        );
    }

    #[test]
    fn custom_variable_names() {
        let vars = Variables::new("x", "y").unwrap();
        let f = parse("2*x^2 + y^2 - 2*x*y - 3*x - 2*y", &vars).unwrap();
        assert_eq!(f.coefficient([1, 1]), r(-2, 1));
        assert!(parse("x1", &vars).is_err());
    }
}
