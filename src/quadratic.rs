//! Real roots of `a·t² + b·t + c = 0`.

/// Returns both real roots ordered so that `r0 <= r1`, or `None` when the
/// discriminant is negative. A zero discriminant yields the double root twice.
///
/// `a` must be non-zero; for ray queries it is the squared length of the
/// ray direction.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    let disc = b*b - 4.0*a*c;
    if disc < 0.0 { return None; }

    let (r0, r1) = if disc == 0.0 {
        let r = -b / (2.0 * a);
        (r, r)
    } else {
        let sqrt_d = disc.sqrt();
        ((-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a))
    };

    if r0 > r1 { Some((r1, r0)) } else { Some((r0, r1)) }
}
