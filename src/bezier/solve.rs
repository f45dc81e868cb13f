use roots::{find_roots_quadratic, find_roots_cubic, Roots};

///
/// Converts a set of roots into a list of finite real values
///
fn real_roots(roots: Roots<f64>) -> Vec<f64> {
    let mut roots = match roots {
        Roots::No(r)    => r.to_vec(),
        Roots::One(r)   => r.to_vec(),
        Roots::Two(r)   => r.to_vec(),
        Roots::Three(r) => r.to_vec(),
        Roots::Four(r)  => r.to_vec()
    };

    roots.retain(|r| r.is_finite());
    roots
}

///
/// Real roots of the linear equation `a*t + b = 0`
///
pub fn solve_linear_roots_real(a: f64, b: f64) -> Vec<f64> {
    if a == 0.0 {
        vec![]
    } else {
        vec![-b/a]
    }
}

///
/// Real roots of the quadratic equation `a*t^2 + b*t + c = 0`
///
/// Callers filter to their own parameter range themselves.
///
pub fn solve_quadratic_roots_real(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a == 0.0 {
        solve_linear_roots_real(b, c)
    } else {
        real_roots(find_roots_quadratic(a, b, c))
    }
}

///
/// Real roots of the cubic equation `a*t^3 + b*t^2 + c*t + d = 0`
///
/// Callers filter to their own parameter range themselves.
///
pub fn solve_cubic_roots_real(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    if a == 0.0 {
        solve_quadratic_roots_real(b, c, d)
    } else {
        real_roots(find_roots_cubic(a, b, c, d))
    }
}

///
/// Signed cube root (behaves like x^(1/3) for negative values too)
///
#[inline]
pub fn cube_root(x: f64) -> f64 {
    if x < 0.0 {
        -((-x).powf(1.0/3.0))
    } else {
        x.powf(1.0/3.0)
    }
}
