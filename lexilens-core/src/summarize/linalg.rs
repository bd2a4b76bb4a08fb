//! Dense symmetric eigen-decomposition
//!
//! Cyclic Jacobi rotations on a small dense matrix. The summarizer only needs
//! the right singular vectors of a term-sentence matrix, which are the
//! eigenvectors of its sentence Gram matrix.

/// Sweeps before giving up on convergence
const MAX_SWEEPS: usize = 64;

/// Relative off-diagonal mass treated as converged
const TOLERANCE: f64 = 1e-24;

/// Eigenvalues in descending order with their unit eigenvectors
#[derive(Debug, Clone)]
pub struct SymmetricEigen {
    /// Eigenvalues, largest first
    pub values: Vec<f64>,
    /// `vectors[k]` is the eigenvector for `values[k]`
    pub vectors: Vec<Vec<f64>>,
}

/// Gram matrix `AᵀA` of a column-major `columns` matrix
pub fn gram(columns: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = columns.len();
    let mut out = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i..n {
            let dot: f64 = columns[i]
                .iter()
                .zip(&columns[j])
                .map(|(a, b)| a * b)
                .sum();
            out[i][j] = dot;
            out[j][i] = dot;
        }
    }
    out
}

/// Eigen-decomposition of a symmetric matrix
///
/// Only the upper triangle is trusted to be symmetric with the lower one; the
/// caller is responsible for passing a square symmetric matrix.
pub fn symmetric_eigen(matrix: &[Vec<f64>]) -> SymmetricEigen {
    let n = matrix.len();
    let mut a: Vec<Vec<f64>> = matrix.to_vec();
    let mut v: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect();

    let scale: f64 = a.iter().flatten().map(|x| x * x).sum::<f64>().max(f64::MIN_POSITIVE);

    for sweep in 0..MAX_SWEEPS {
        let off: f64 = (0..n)
            .flat_map(|p| (p + 1..n).map(move |q| (p, q)))
            .map(|(p, q)| a[p][q] * a[p][q])
            .sum();
        if off <= TOLERANCE * scale {
            log::trace!("Jacobi converged after {sweep} sweeps");
            break;
        }

        for p in 0..n {
            for q in p + 1..n {
                if a[p][q] == 0.0 {
                    continue;
                }
                let theta = (a[q][q] - a[p][p]) / (2.0 * a[p][q]);
                let t = if theta.abs() > 1e150 {
                    1.0 / (2.0 * theta)
                } else {
                    theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt())
                };
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                for row in a.iter_mut() {
                    let (kp, kq) = (row[p], row[q]);
                    row[p] = c * kp - s * kq;
                    row[q] = s * kp + c * kq;
                }
                for k in 0..n {
                    let (pk, qk) = (a[p][k], a[q][k]);
                    a[p][k] = c * pk - s * qk;
                    a[q][k] = s * pk + c * qk;
                }
                for row in v.iter_mut() {
                    let (kp, kq) = (row[p], row[q]);
                    row[p] = c * kp - s * kq;
                    row[q] = s * kp + c * kq;
                }
            }
        }
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| a[j][j].total_cmp(&a[i][i]));

    SymmetricEigen {
        values: order.iter().map(|&k| a[k][k]).collect(),
        vectors: order
            .iter()
            .map(|&k| v.iter().map(|row| row[k]).collect())
            .collect(),
    }
}
