//! Unit-interval blend functions.
//!
//! Every function maps `(t, y1, y2)` to a value that equals `y1` at `t = 0`
//! and `y2` at `t = 1`. The caller guarantees `t ∈ [0, 1]`; nothing here
//! re-clamps it. The formulas are fixed: rendered shapes depend on them
//! bit-for-bit.

use num_traits::Float;

#[inline]
fn lit<T: Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

#[inline]
fn blend<T: Float>(factor: T, y1: T, y2: T) -> T {
    y1 + factor * (y2 - y1)
}

/// Linear blend.
///
/// # Mathematical Definition
/// ```text
/// y = y1 + t(y2 − y1)
/// ```
///
/// # Examples
/// ```
/// use curve_core::math::interpolators::linear;
///
/// assert_eq!(linear(0.25_f64, 0.0, 4.0), 1.0);
/// ```
#[inline]
pub fn linear<T: Float>(t: T, y1: T, y2: T) -> T {
    blend(t, y1, y2)
}

/// Cubic ease in/out, C¹ continuous.
///
/// # Mathematical Definition
/// ```text
/// y = y1 + (3t² − 2t³)(y2 − y1)
/// ```
#[inline]
pub fn smoothstep<T: Float>(t: T, y1: T, y2: T) -> T {
    let factor = t * t * (lit::<T>(3.0) - lit::<T>(2.0) * t);
    blend(factor, y1, y2)
}

/// Quintic ease in/out, C² continuous.
///
/// # Mathematical Definition
/// ```text
/// y = y1 + (6t⁵ − 15t⁴ + 10t³)(y2 − y1)
/// ```
#[inline]
pub fn smootherstep<T: Float>(t: T, y1: T, y2: T) -> T {
    let factor = t * t * t * (t * (t * lit::<T>(6.0) - lit::<T>(15.0)) + lit::<T>(10.0));
    blend(factor, y1, y2)
}

/// Half-cosine ease.
///
/// # Mathematical Definition
/// ```text
/// y = y1 + 0.5(1 − cos(tπ))(y2 − y1)
/// ```
#[inline]
pub fn cosine<T: Float>(t: T, y1: T, y2: T) -> T {
    let pi = lit::<T>(std::f64::consts::PI);
    let factor = (T::one() - (t * pi).cos()) * lit::<T>(0.5);
    blend(factor, y1, y2)
}

/// Exponential ease-in.
///
/// `2^(10(t−1))` is not exactly zero at `t = 0`, so that point is pinned.
#[inline]
pub fn exp_ease_in<T: Float>(t: T, y1: T, y2: T) -> T {
    let factor = if t == T::zero() {
        T::zero()
    } else {
        lit::<T>(2.0).powf(lit::<T>(10.0) * (t - T::one()))
    };
    blend(factor, y1, y2)
}

/// Exponential ease-out.
///
/// `1 − 2^(−10t)` is not exactly one at `t = 1`, so that point is pinned.
#[inline]
pub fn exp_ease_out<T: Float>(t: T, y1: T, y2: T) -> T {
    let factor = if t == T::one() {
        T::one()
    } else {
        T::one() - lit::<T>(2.0).powf(lit::<T>(-10.0) * t)
    };
    blend(factor, y1, y2)
}

/// Elastic ease-out: decaying sine overshoot around `y2`.
///
/// Period `p = 0.3`, phase `s = p / 4`. The result may leave `[y1, y2]`.
///
/// # Mathematical Definition
/// ```text
/// factor = 2^(−10t) · sin((t − s) · 2π / p) + 1
/// ```
#[inline]
pub fn elastic<T: Float>(t: T, y1: T, y2: T) -> T {
    if t == T::zero() {
        return y1;
    }
    if t == T::one() {
        return y2;
    }

    let p = lit::<T>(0.3);
    let s = p / lit::<T>(4.0);
    let two_pi = lit::<T>(2.0 * std::f64::consts::PI);
    let factor =
        lit::<T>(2.0).powf(lit::<T>(-10.0) * t) * ((t - s) * two_pi / p).sin() + T::one();
    blend(factor, y1, y2)
}

/// Bounce ease-out: four parabolic bands of decreasing height.
///
/// Band edges sit at `1/2.75`, `2/2.75` and `2.5/2.75`; `y2` is reached
/// only at `t = 1`.
#[inline]
pub fn bounce<T: Float>(t: T, y1: T, y2: T) -> T {
    let n = lit::<T>(7.5625);
    let d = lit::<T>(2.75);

    let factor = if t < T::one() / d {
        n * t * t
    } else if t < lit::<T>(2.0) / d {
        let u = t - lit::<T>(1.5) / d;
        n * u * u + lit::<T>(0.75)
    } else if t < lit::<T>(2.5) / d {
        let u = t - lit::<T>(2.25) / d;
        n * u * u + lit::<T>(0.9375)
    } else {
        let u = t - lit::<T>(2.625) / d;
        n * u * u + lit::<T>(0.984375)
    };
    blend(factor, y1, y2)
}

/// Hermite cubic between two values with zero end tangents.
///
/// Numerically the same curve as [`smoothstep`], written in basis form.
///
/// # Mathematical Definition
/// ```text
/// y = y1(2t³ − 3t² + 1) + y2(−2t³ + 3t²)
/// ```
///
/// # Examples
/// ```
/// use curve_core::math::interpolators::cubic_spline_segment;
///
/// let y = cubic_spline_segment(0.5_f64, 0.3, 0.7);
/// assert!((y - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn cubic_spline_segment<T: Float>(t: T, y1: T, y2: T) -> T {
    let t2 = t * t;
    let t3 = t2 * t;
    let two = lit::<T>(2.0);
    let three = lit::<T>(3.0);
    y1 * (two * t3 - three * t2 + T::one()) + y2 * (-two * t3 + three * t2)
}
