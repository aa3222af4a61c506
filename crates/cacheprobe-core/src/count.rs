//! Counting policies for the auto-vectorization experiments.
//!
//! A counting loop looks trivial, but two properties of its *declaration*
//! decide whether a compiler can turn it into SIMD lane arithmetic:
//!
//! 1. **The predicate's declared result type.** When every predicate
//!    result is squeezed through a boolean gate before being summed, the
//!    optimizer loses the information that the summed values are small
//!    integers it could accumulate in parallel lanes. Generic counting
//!    utilities do exactly this gating internally, which is why they can
//!    be slower than a hand-written loop computing the same count.
//! 2. **The accumulator's width.** Accumulating at the sequence's offset
//!    width (`isize`) forces a widening per element; accumulating at the
//!    element's own width lets the vectorizer keep counts in the same
//!    lanes as the data.
//!
//! Both knobs are modeled explicitly here. The gate is a named adapter,
//! [`BoolGated`], never an implicit conversion, and the accumulator width
//! is a type parameter chosen at the call site. Sibling variants differ in
//! exactly one of these and in nothing else; every variant produces the
//! identical count for identical input, which tests assert and which is
//! the precondition for any timing comparison between them.
//!
//! # Example
//!
//! ```
//! use cacheprobe_core::count::{
//!     count_adapted, count_std, is_even, is_even_at, BoolGated, TypePreserving,
//! };
//!
//! let data = [1u32, 2, 3, 4, 5, 6];
//!
//! let gated: isize = count_adapted(&data, &BoolGated::new(is_even));
//! let preserved: isize = count_adapted(&data, &TypePreserving::new(is_even_at::<isize>));
//! let baseline = count_std(&data, is_even);
//!
//! assert_eq!(gated, 3);
//! assert_eq!(preserved, 3);
//! assert_eq!(baseline, 3);
//! ```

use num_traits::PrimInt;

/// Adapts one predicate evaluation into the value added to the
/// accumulator.
///
/// The adapter is the seam the predicate-type experiment varies: the same
/// counting loop runs with different adapters, and the adapter alone
/// decides whether a boolean coercion sits between the predicate and the
/// accumulator.
pub trait PredicateAdapter<T, A> {
    /// Evaluates the predicate on `el` and returns the accumulator
    /// contribution (zero or one).
    fn adapt(&self, el: &T) -> A;
}

/// Adapter that forces every predicate result through an explicit boolean
/// gate before widening it back to the accumulator type.
///
/// This reproduces what generic count utilities do to arbitrary
/// predicates: collapse the result to `bool`, then re-widen for the sum.
/// The round trip is the phenomenon under test, so it is spelled out here
/// rather than hidden in a coercion.
#[derive(Debug, Clone, Copy)]
pub struct BoolGated<P> {
    pred: P,
}

impl<P> BoolGated<P> {
    /// Wraps a boolean predicate.
    #[must_use]
    pub const fn new(pred: P) -> Self {
        Self { pred }
    }
}

impl<T, A, P> PredicateAdapter<T, A> for BoolGated<P>
where
    A: PrimInt,
    P: Fn(&T) -> bool,
{
    #[inline]
    fn adapt(&self, el: &T) -> A {
        // The gate: a 1-bit logical value, re-widened to the accumulator.
        if (self.pred)(el) {
            A::one()
        } else {
            A::zero()
        }
    }
}

/// Adapter that forwards the predicate's integer result unchanged.
///
/// The predicate already produces a zero-or-one value at the accumulator
/// width, so nothing intervenes between evaluation and accumulation.
#[derive(Debug, Clone, Copy)]
pub struct TypePreserving<P> {
    pred: P,
}

impl<P> TypePreserving<P> {
    /// Wraps an integer-valued predicate.
    #[must_use]
    pub const fn new(pred: P) -> Self {
        Self { pred }
    }
}

impl<T, A, P> PredicateAdapter<T, A> for TypePreserving<P>
where
    A: PrimInt,
    P: Fn(&T) -> A,
{
    #[inline]
    fn adapt(&self, el: &T) -> A {
        (self.pred)(el)
    }
}

/// The shared scalar counting loop.
///
/// Walks `data` once, adding each adapted predicate result to an
/// accumulator that starts at zero. The loop body is deliberately the
/// same for every adapter and accumulator width; only the type-level
/// choices differ between sibling variants.
#[inline]
pub fn count_adapted<T, A, Ad>(data: &[T], adapter: &Ad) -> A
where
    A: PrimInt,
    Ad: PredicateAdapter<T, A>,
{
    let mut acc = A::zero();
    for el in data {
        acc = acc + adapter.adapt(el);
    }
    acc
}

/// The library baseline: the standard iterator idiom for counting.
///
/// `filter(..).count()` is the control the explicit variants are measured
/// against. Its internal accumulator width (`usize`) and its boolean
/// gating are chosen by the standard library, not by the experiment.
#[inline]
pub fn count_std<T, P>(data: &[T], pred: P) -> usize
where
    P: Fn(&T) -> bool,
{
    data.iter().filter(|el| pred(el)).count()
}

/// Evenness as a boolean condition. Reference predicate for the
/// experiments.
#[inline]
#[must_use]
pub fn is_even(el: &u32) -> bool {
    el & 1 == 0
}

/// Evenness produced directly at the accumulator width, with no boolean
/// intermediate in the declared signature.
#[inline]
#[must_use]
pub fn is_even_at<A: PrimInt>(el: &u32) -> A {
    if el & 1 == 0 {
        A::one()
    } else {
        A::zero()
    }
}
