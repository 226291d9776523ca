//! A toy arithmetic-expression evaluator built on the combinators.
//!
//! Grammar, in PEG order (alternatives tried left to right):
//!
//! ```text
//! factor = Int sp mulop sp Int / Int
//! expr   = factor sp addop sp factor / factor
//! sp     = Skip(Many(' '))
//! ```
//!
//! Usage: `cargo run --example calc -- "12 + 3 * 4"`. With no argument,
//! evaluates `"1337 - 259 * 5"`.

use std::process::ExitCode;

use pique::{choice, complete, many, sequence, skip, Char, Int, Parse, ParseError, Parsed, Value};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ExprOp {
    Plus,
    Minus,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FactorOp {
    Times,
    Divide,
}

/// A multiplication or division and its two integer operands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Factor {
    lhs: i64,
    op: FactorOp,
    rhs: i64,
}

impl Factor {
    fn run(&self) -> i64 {
        match self.op {
            FactorOp::Times => self.lhs * self.rhs,
            FactorOp::Divide => self.lhs / self.rhs,
        }
    }
}

/// An addition or subtraction whose operands are factors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Expr {
    lhs: Factor,
    op: ExprOp,
    rhs: Factor,
}

impl Expr {
    fn run(&self) -> i64 {
        match self.op {
            ExprOp::Plus => self.lhs.run() + self.rhs.run(),
            ExprOp::Minus => self.lhs.run() - self.rhs.run(),
        }
    }
}

/// The grammar's registered payload: everything its parsers carry through
/// the combinators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Ast {
    Expr(Expr),
    Factor(Factor),
    ExprOp(ExprOp),
    FactorOp(FactorOp),
}

/// Parses `+` or `-` into an [`ExprOp`].
fn expr_op(input: &str) -> Parsed<'_, Ast> {
    let (out, rest): (pique::Output, _) = choice((Char::lit('+'), Char::lit('-'))).parse(input)?;
    let op = match out.into_single() {
        Some(Value::Char('+')) => ExprOp::Plus,
        Some(Value::Char('-')) => ExprOp::Minus,
        _ => return Err(ParseError::Mismatch("expected + or -")),
    };
    Ok((Value::Ext(Ast::ExprOp(op)).into(), rest))
}

/// Parses `*` or `/` into a [`FactorOp`].
fn factor_op(input: &str) -> Parsed<'_, Ast> {
    let (out, rest): (pique::Output, _) = choice((Char::lit('*'), Char::lit('/'))).parse(input)?;
    let op = match out.into_single() {
        Some(Value::Char('*')) => FactorOp::Times,
        Some(Value::Char('/')) => FactorOp::Divide,
        _ => return Err(ParseError::Mismatch("expected * or /")),
    };
    Ok((Value::Ext(Ast::FactorOp(op)).into(), rest))
}

/// Parses `Int (mulop Int)?` into a [`Factor`].
///
/// A bare integer becomes the factor `n * 1`.
fn factor(input: &str) -> Parsed<'_, Ast> {
    let sp = skip(many(Char::lit(' ')));
    let rule = choice((
        sequence((Int::any(), sp, factor_op, sp, Int::any())),
        sequence((Int::any(),)),
    ));

    let (out, rest) = rule.parse(input)?;
    let slots = out
        .into_slots()
        .ok_or(ParseError::Mismatch("expected a factor"))?;
    let mut vals = slots.values();

    let lhs = match vals.next().and_then(Value::as_int) {
        Some(lhs) => lhs,
        None => return Err(ParseError::Mismatch("expected a factor")),
    };
    let fac = match (vals.next(), vals.next()) {
        (Some(&Value::Ext(Ast::FactorOp(op))), Some(&Value::Int(rhs))) => {
            Factor { lhs, op, rhs }
        }
        _ => Factor {
            lhs,
            op: FactorOp::Times,
            rhs: 1,
        },
    };

    Ok((Value::Ext(Ast::Factor(fac)).into(), rest))
}

/// Parses `factor (addop factor)?` into an [`Expr`].
///
/// A bare factor becomes the expression `f + 0*0`.
fn expr(input: &str) -> Parsed<'_, Ast> {
    let sp = skip(many(Char::lit(' ')));
    let rule = choice((
        sequence((factor, sp, expr_op, sp, factor)),
        sequence((factor,)),
    ));

    let (out, rest) = rule.parse(input)?;
    let slots = out
        .into_slots()
        .ok_or(ParseError::Mismatch("expected an expression"))?;
    let mut vals = slots.values();

    let lhs = match vals.next().and_then(Value::as_ext) {
        Some(&Ast::Factor(lhs)) => lhs,
        _ => return Err(ParseError::Mismatch("expected an expression")),
    };
    let exp = match (vals.next(), vals.next()) {
        (Some(&Value::Ext(Ast::ExprOp(op))), Some(&Value::Ext(Ast::Factor(rhs)))) => {
            Expr { lhs, op, rhs }
        }
        _ => Expr {
            lhs,
            op: ExprOp::Plus,
            rhs: Factor {
                lhs: 0,
                op: FactorOp::Times,
                rhs: 0,
            },
        },
    };

    Ok((Value::Ext(Ast::Expr(exp)).into(), rest))
}

fn main() -> ExitCode {
    let args = std::env::args().collect::<Vec<_>>();
    let input = match args.get(1) {
        Some(arg) => arg.clone(),
        None => String::from("1337 - 259 * 5"),
    };

    let parser = complete(expr);
    match parser.parse(&input) {
        Ok((out, _)) => match out.into_single().and_then(|v| v.as_ext().copied()) {
            Some(Ast::Expr(exp)) => {
                println!("{} = {}", input, exp.run());
                ExitCode::SUCCESS
            }
            _ => {
                eprintln!("parser yielded something other than an expression");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
