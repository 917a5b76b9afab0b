extern crate nalgebra as na;
use self::na::Matrix3;

/// Returns whether the provided square matrix (3x3) is diagonal, i.e. all off-diagonal terms are within `tol` of zero.
pub fn is_diagonal(m: &Matrix3<f64>, tol: f64) -> bool {
    for i in 0..3 {
        for j in 0..3 {
            if i != j && m[(i, j)].abs() > tol {
                return false;
            }
        }
    }
    true
}

/// Returns whether the provided square matrix (3x3) is symmetric within `tol`.
pub fn is_symmetric(m: &Matrix3<f64>, tol: f64) -> bool {
    for i in 1..3 {
        for j in 0..i {
            if (m[(i, j)] - m[(j, i)]).abs() > tol {
                return false;
            }
        }
    }
    true
}
