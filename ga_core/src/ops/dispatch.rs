/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use crate::errors::{GaError, NoSuchOpError};
use crate::ops::{derived, products};
use crate::types::algebra::Ga;
use crate::types::blade::Blade;
use crate::types::multivector::Multivector;
use ga_num::Scalar;
use std::collections::HashMap;

/// The full set of recognized operator symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Geometric,
    Wedge,
    LeftContraction,
    RightContraction,
    SymmetricInner,
    Reverse,
    GradeInvolution,
    Negation,
    Dual,
    HodgeDual,
    Meet,
    Join,
    Sandwich,
    NormSquared,
    Length,
    Normalize,
    Inverse,
    Exp,
}

/// Runtime kind of a dispatcher operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Number,
    Blade,
    Multivector,
}

/// Whether two operand bitmaps overlap; only meaningful for binary
/// blade-level products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dependency {
    Independent,
    Dependent,
    NotApplicable,
}

/// Coarse grade classification used by the dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeClass {
    Scalar,
    NonScalar,
    Grades,
}

/// A tagged-variant operand, normalized to a [`Multivector`] before
/// reaching a handler (`kind ∈ {number, blade, multivector}`).
#[derive(Debug, Clone)]
pub enum Operand<S: Scalar> {
    Number(S),
    Blade(Blade<S>),
    Multivector(Multivector<S>),
}

impl<S: Scalar> Operand<S> {
    pub fn kind(&self) -> Kind {
        match self {
            Operand::Number(_) => Kind::Number,
            Operand::Blade(_) => Kind::Blade,
            Operand::Multivector(_) => Kind::Multivector,
        }
    }

    pub fn gradeclass(&self) -> GradeClass {
        match self {
            Operand::Number(_) => GradeClass::Scalar,
            Operand::Blade(b) if b.grade() == 0 => GradeClass::Scalar,
            Operand::Blade(_) => GradeClass::NonScalar,
            Operand::Multivector(_) => GradeClass::Grades,
        }
    }

    pub fn into_multivector(self) -> Multivector<S> {
        match self {
            Operand::Number(n) => Multivector::scalar(n),
            Operand::Blade(b) => Multivector::from_blade(b),
            Operand::Multivector(mv) => mv,
        }
    }
}

fn dependency<S: Scalar>(operands: &[Operand<S>]) -> Dependency {
    if operands.len() != 2 {
        return Dependency::NotApplicable;
    }
    let bitmap_of = |o: &Operand<S>| -> Option<u64> {
        match o {
            Operand::Number(_) => Some(0),
            Operand::Blade(b) => Some(b.bitmap()),
            Operand::Multivector(_) => None,
        }
    };
    match (bitmap_of(&operands[0]), bitmap_of(&operands[1])) {
        (Some(a), Some(b)) if a & b != 0 => Dependency::Dependent,
        (Some(_), Some(_)) => Dependency::Independent,
        _ => Dependency::NotApplicable,
    }
}

/// `[op, dependency, kind_a, kind_b, gradeclass_a, gradeclass_b]`.
/// Computed for every dispatch, primarily to describe a
/// [`NoSuchOpError`] precisely; unary operators leave the `_b` fields
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchKey {
    pub op: OpKind,
    pub dependency: Dependency,
    pub kind_a: Kind,
    pub kind_b: Option<Kind>,
    pub gradeclass_a: GradeClass,
    pub gradeclass_b: Option<GradeClass>,
}

impl DispatchKey {
    pub fn compute<S: Scalar>(op: OpKind, operands: &[Operand<S>]) -> Self {
        let a = &operands[0];
        let b = operands.get(1);
        DispatchKey {
            op,
            dependency: dependency(operands),
            kind_a: a.kind(),
            kind_b: b.map(Operand::kind),
            gradeclass_a: a.gradeclass(),
            gradeclass_b: b.map(Operand::gradeclass),
        }
    }

    pub fn describe(&self) -> String {
        format!("{:?}({:?}{:?}, {:?}{:?})", self.op, self.kind_a, self.gradeclass_a, self.kind_b, self.gradeclass_b)
    }
}

type Handler<S> = fn(&Ga<S>, &[Multivector<S>]) -> Result<Multivector<S>, GaError>;

fn arity_error(op: &str, found: usize) -> GaError {
    GaError::NoSuchOp(NoSuchOpError::new(op, format!("{found} operand(s)")))
}

fn geometric_handler<S: Scalar>(ga: &Ga<S>, ops: &[Multivector<S>]) -> Result<Multivector<S>, GaError> {
    match ops {
        [a, b] => Ok(products::geometric_product(ga, a, b)),
        _ => Err(arity_error("geometric", ops.len())),
    }
}

fn wedge_handler<S: Scalar>(ga: &Ga<S>, ops: &[Multivector<S>]) -> Result<Multivector<S>, GaError> {
    match ops {
        [a, b] => Ok(products::wedge(ga, a, b)),
        _ => Err(arity_error("wedge", ops.len())),
    }
}

fn left_contraction_handler<S: Scalar>(ga: &Ga<S>, ops: &[Multivector<S>]) -> Result<Multivector<S>, GaError> {
    match ops {
        [a, b] => Ok(products::left_contraction(ga, a, b)),
        _ => Err(arity_error("left_contraction", ops.len())),
    }
}

fn right_contraction_handler<S: Scalar>(ga: &Ga<S>, ops: &[Multivector<S>]) -> Result<Multivector<S>, GaError> {
    match ops {
        [a, b] => Ok(products::right_contraction(ga, a, b)),
        _ => Err(arity_error("right_contraction", ops.len())),
    }
}

fn symmetric_inner_handler<S: Scalar>(ga: &Ga<S>, ops: &[Multivector<S>]) -> Result<Multivector<S>, GaError> {
    match ops {
        [a, b] => Ok(products::symmetric_inner(ga, a, b)),
        _ => Err(arity_error("symmetric_inner", ops.len())),
    }
}

fn reverse_handler<S: Scalar>(_ga: &Ga<S>, ops: &[Multivector<S>]) -> Result<Multivector<S>, GaError> {
    match ops {
        [a] => Ok(derived::reverse(a)),
        _ => Err(arity_error("reverse", ops.len())),
    }
}

fn grade_involution_handler<S: Scalar>(_ga: &Ga<S>, ops: &[Multivector<S>]) -> Result<Multivector<S>, GaError> {
    match ops {
        [a] => Ok(derived::grade_involution(a)),
        _ => Err(arity_error("grade_involution", ops.len())),
    }
}

fn negation_handler<S: Scalar>(_ga: &Ga<S>, ops: &[Multivector<S>]) -> Result<Multivector<S>, GaError> {
    match ops {
        [a] => Ok(-(a.clone())),
        _ => Err(arity_error("negation", ops.len())),
    }
}

fn dual_handler<S: Scalar>(ga: &Ga<S>, ops: &[Multivector<S>]) -> Result<Multivector<S>, GaError> {
    match ops {
        [a] => Ok(derived::dual(ga, a)),
        _ => Err(arity_error("dual", ops.len())),
    }
}

fn hodge_dual_handler<S: Scalar>(ga: &Ga<S>, ops: &[Multivector<S>]) -> Result<Multivector<S>, GaError> {
    match ops {
        [a] => Ok(derived::hodge_dual(ga, a)),
        _ => Err(arity_error("hodge_dual", ops.len())),
    }
}

fn join_handler<S: Scalar>(ga: &Ga<S>, ops: &[Multivector<S>]) -> Result<Multivector<S>, GaError> {
    if ops.is_empty() {
        return Err(arity_error("join", 0));
    }
    Ok(derived::join_n(ga, ops))
}

fn sandwich_handler<S: Scalar>(ga: &Ga<S>, ops: &[Multivector<S>]) -> Result<Multivector<S>, GaError> {
    match ops {
        [r, x] => Ok(derived::sandwich(ga, r, x)),
        _ => Err(arity_error("sandwich", ops.len())),
    }
}

fn norm_squared_handler<S: Scalar>(ga: &Ga<S>, ops: &[Multivector<S>]) -> Result<Multivector<S>, GaError> {
    match ops {
        [a] => Ok(Multivector::scalar(derived::norm_squared(ga, a))),
        _ => Err(arity_error("norm_squared", ops.len())),
    }
}

fn length_handler<S: Scalar>(ga: &Ga<S>, ops: &[Multivector<S>]) -> Result<Multivector<S>, GaError> {
    match ops {
        [a] => Ok(Multivector::scalar(derived::length(ga, a))),
        _ => Err(arity_error("length", ops.len())),
    }
}

fn normalize_handler<S: Scalar>(ga: &Ga<S>, ops: &[Multivector<S>]) -> Result<Multivector<S>, GaError> {
    match ops {
        [a] => Ok(derived::normalize(ga, a)),
        _ => Err(arity_error("normalize", ops.len())),
    }
}

fn inverse_handler<S: Scalar>(ga: &Ga<S>, ops: &[Multivector<S>]) -> Result<Multivector<S>, GaError> {
    match ops {
        [a] => derived::inverse(ga, a).map_err(GaError::from),
        _ => Err(arity_error("inverse", ops.len())),
    }
}

fn exp_handler<S: Scalar>(ga: &Ga<S>, ops: &[Multivector<S>]) -> Result<Multivector<S>, GaError> {
    match ops {
        [a] => Ok(derived::exponential(ga, a)),
        _ => Err(arity_error("exp", ops.len())),
    }
}

/// Precomputed operator table: one direct lookup per dispatch, built
/// once at algebra construction ("precompute the dispatch table
/// at algebra construction so per-call cost is a direct lookup").
#[derive(Clone)]
pub struct OpTable<S: Scalar>(HashMap<OpKind, Handler<S>>);

impl<S: Scalar> OpTable<S> {
    pub fn build() -> Self {
        let mut table: HashMap<OpKind, Handler<S>> = HashMap::new();
        table.insert(OpKind::Geometric, geometric_handler);
        table.insert(OpKind::Wedge, wedge_handler);
        table.insert(OpKind::Meet, wedge_handler);
        table.insert(OpKind::LeftContraction, left_contraction_handler);
        table.insert(OpKind::RightContraction, right_contraction_handler);
        table.insert(OpKind::SymmetricInner, symmetric_inner_handler);
        table.insert(OpKind::Reverse, reverse_handler);
        table.insert(OpKind::GradeInvolution, grade_involution_handler);
        table.insert(OpKind::Negation, negation_handler);
        table.insert(OpKind::Dual, dual_handler);
        table.insert(OpKind::HodgeDual, hodge_dual_handler);
        table.insert(OpKind::Join, join_handler);
        table.insert(OpKind::Sandwich, sandwich_handler);
        table.insert(OpKind::NormSquared, norm_squared_handler);
        table.insert(OpKind::Length, length_handler);
        table.insert(OpKind::Normalize, normalize_handler);
        table.insert(OpKind::Inverse, inverse_handler);
        table.insert(OpKind::Exp, exp_handler);
        OpTable(table)
    }

    pub fn get(&self, op: OpKind) -> Option<&Handler<S>> {
        self.0.get(&op)
    }
}

impl OpKind {
    /// Whether more than two operands should be reduced left-to-right
    /// through this op's binary handler. `Join` carries its own n-ary
    /// handler (`join_n`) and folds internally instead; unary ops never
    /// take more than one operand.
    fn folds_left(self) -> bool {
        matches!(
            self,
            OpKind::Geometric
                | OpKind::Wedge
                | OpKind::LeftContraction
                | OpKind::RightContraction
                | OpKind::SymmetricInner
                | OpKind::Meet
                | OpKind::Sandwich
        )
    }
}

/// Computes the dispatch key, looks up the handler, and runs it;
/// `NoSuchOp` carries the operator symbol and the resolved key when no
/// handler is registered. More than two operands on a binary op reduce
/// left-to-right through that op's handler, unless the op registers its
/// own n-ary handler (`Join`).
pub fn dispatch<S: Scalar>(ga: &Ga<S>, op: OpKind, operands: Vec<Operand<S>>) -> Result<Multivector<S>, GaError> {
    if operands.is_empty() {
        return Err(GaError::NoSuchOp(NoSuchOpError::new(format!("{op:?}"), "no operands")));
    }
    let key = DispatchKey::compute(op, &operands);
    let mvs: Vec<Multivector<S>> = operands.into_iter().map(Operand::into_multivector).collect();
    let handler = match ga.ops().get(op) {
        Some(handler) => *handler,
        None => return Err(GaError::NoSuchOp(NoSuchOpError::new(format!("{op:?}"), key.describe()))),
    };
    if op.folds_left() && mvs.len() > 2 {
        let mut operands = mvs.into_iter();
        let first = operands.next().expect("non-empty operands checked above");
        return operands.try_fold(first, |acc, next| handler(ga, &[acc, next]));
    }
    handler(ga, &mvs)
}
