//! The six Dubins word families (LSL, RSR, LSR, RSL, RLR, LRL), dispatched
//! through a tagged enum instead of the original's function-pointer table.
//!
//! References
//! - original_source: src/dubins/dubins.cpp (`primitives[6]`, `ksigns[6][3]`,
//!   `LSL`/`RSR`/`LSR`/`RSL`/`RLR`/`LRL`)

use std::f64::consts::PI;

/// The six admissible Dubins words. `S` is the straight segment common to
/// four of the six; `RLR`/`LRL` are the two curvature-only words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Lsl,
    Rsr,
    Lsr,
    Rsl,
    Rlr,
    Lrl,
}

impl Family {
    pub const ALL: [Family; 6] = [
        Family::Lsl,
        Family::Rsr,
        Family::Lsr,
        Family::Rsl,
        Family::Rlr,
        Family::Lrl,
    ];

    /// Curvature sign of each of the three arcs: `1` for a left turn, `-1`
    /// for a right turn, `0` for the straight segment. Replaces the
    /// original's `ksigns[6][3]` table.
    pub fn k_signs(self) -> [f64; 3] {
        match self {
            Family::Lsl => [1.0, 0.0, 1.0],
            Family::Rsr => [-1.0, 0.0, -1.0],
            Family::Lsr => [1.0, 0.0, -1.0],
            Family::Rsl => [-1.0, 0.0, 1.0],
            Family::Rlr => [-1.0, 1.0, -1.0],
            Family::Lrl => [1.0, -1.0, 1.0],
        }
    }
}

/// Standard-form arc lengths `(t, p, q)` for a candidate word, before
/// re-scaling back to world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WordLengths {
    pub t: f64,
    pub p: f64,
    pub q: f64,
}

impl WordLengths {
    #[inline]
    pub fn total(&self) -> f64 {
        self.t + self.p + self.q
    }
}

#[inline]
fn mod2pi(angle: f64) -> f64 {
    let two_pi = 2.0 * PI;
    let mut a = angle % two_pi;
    if a < 0.0 {
        a += two_pi;
    }
    a
}

/// Evaluate the standard-form word lengths for `family` given the
/// standard-form problem `(alpha, beta, d)`. Returns `None` when the family
/// admits no solution for this configuration (the usual case for `RLR`/`LRL`
/// when the endpoints are far apart).
pub fn evaluate(family: Family, alpha: f64, beta: f64, d: f64) -> Option<WordLengths> {
    match family {
        Family::Lsl => lsl(alpha, beta, d),
        Family::Rsr => rsr(alpha, beta, d),
        Family::Lsr => lsr(alpha, beta, d),
        Family::Rsl => rsl(alpha, beta, d),
        Family::Rlr => rlr(alpha, beta, d),
        Family::Lrl => lrl(alpha, beta, d),
    }
}

fn lsl(alpha: f64, beta: f64, d: f64) -> Option<WordLengths> {
    let (sa, ca) = alpha.sin_cos();
    let (sb, cb) = beta.sin_cos();
    let c_ab = (alpha - beta).cos();

    let p_sq = 2.0 + d * d - 2.0 * c_ab + 2.0 * d * (sa - sb);
    if p_sq < 0.0 {
        return None;
    }
    let tmp0 = d + sa - sb;
    let tmp1 = (cb - ca).atan2(tmp0);
    let t = mod2pi(tmp1 - alpha);
    let p = p_sq.sqrt();
    let q = mod2pi(beta - tmp1);
    Some(WordLengths { t, p, q })
}

fn rsr(alpha: f64, beta: f64, d: f64) -> Option<WordLengths> {
    let (sa, ca) = alpha.sin_cos();
    let (sb, cb) = beta.sin_cos();
    let c_ab = (alpha - beta).cos();

    let p_sq = 2.0 + d * d - 2.0 * c_ab + 2.0 * d * (sb - sa);
    if p_sq < 0.0 {
        return None;
    }
    let tmp0 = d - sa + sb;
    let tmp1 = (ca - cb).atan2(tmp0);
    let t = mod2pi(alpha - tmp1);
    let p = p_sq.sqrt();
    let q = mod2pi(-beta + tmp1);
    Some(WordLengths { t, p, q })
}

fn rsl(alpha: f64, beta: f64, d: f64) -> Option<WordLengths> {
    let (sa, ca) = alpha.sin_cos();
    let (sb, cb) = beta.sin_cos();
    let c_ab = (alpha - beta).cos();

    let p_sq = d * d - 2.0 + 2.0 * c_ab - 2.0 * d * (sa + sb);
    if p_sq < 0.0 {
        return None;
    }
    let p = p_sq.sqrt();
    let tmp2 = (ca + cb).atan2(d - sa - sb) - (2.0_f64).atan2(p);
    let t = mod2pi(alpha - tmp2);
    let q = mod2pi(beta - tmp2);
    Some(WordLengths { t, p, q })
}

fn lsr(alpha: f64, beta: f64, d: f64) -> Option<WordLengths> {
    let (sa, ca) = alpha.sin_cos();
    let (sb, cb) = beta.sin_cos();
    let c_ab = (alpha - beta).cos();

    let p_sq = -2.0 + d * d + 2.0 * c_ab + 2.0 * d * (sa + sb);
    if p_sq < 0.0 {
        return None;
    }
    let p = p_sq.sqrt();
    let tmp2 = (-ca - cb).atan2(d + sa + sb) - (-2.0_f64).atan2(p);
    let t = mod2pi(tmp2 - alpha);
    let q = mod2pi(tmp2 - beta);
    Some(WordLengths { t, p, q })
}

fn rlr(alpha: f64, beta: f64, d: f64) -> Option<WordLengths> {
    let (sa, ca) = alpha.sin_cos();
    let (sb, cb) = beta.sin_cos();
    let c_ab = (alpha - beta).cos();

    let tmp = (6.0 - d * d + 2.0 * c_ab + 2.0 * d * (sa - sb)) / 8.0;
    if tmp.abs() > 1.0 {
        return None;
    }
    let p = mod2pi(2.0 * PI - tmp.acos());
    let t = mod2pi(alpha - (ca - cb).atan2(d - sa + sb) + p / 2.0);
    let q = mod2pi(alpha - beta - t + p);
    Some(WordLengths { t, p, q })
}

fn lrl(alpha: f64, beta: f64, d: f64) -> Option<WordLengths> {
    let (sa, ca) = alpha.sin_cos();
    let (sb, cb) = beta.sin_cos();
    let c_ab = (alpha - beta).cos();

    let tmp = (6.0 - d * d + 2.0 * c_ab + 2.0 * d * (sb - sa)) / 8.0;
    if tmp.abs() > 1.0 {
        return None;
    }
    let p = mod2pi(2.0 * PI - tmp.acos());
    let t = mod2pi(-alpha - (ca - cb).atan2(d + sa - sb) + p / 2.0);
    let q = mod2pi(mod2pi(beta) - alpha - t + mod2pi(p));
    Some(WordLengths { t, p, q })
}
