/// compute the cross product of two vectors, used for cell volumes
pub fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[1] * b[2] - a[2] * b[1],
     a[2] * b[0] - a[0] * b[2],
     a[0] * b[1] - a[1] * b[0]]
}

/// row vector times matrix, converts between fractional and cartesian
pub fn dot(v: [f64; 3], m: [[f64; 3]; 3]) -> [f64; 3] {
    let mut out = [0f64; 3];
    for (i, out) in out.iter_mut().enumerate() {
        *out = v[0] * m[0][i] + v[1] * m[1][i] + v[2] * m[2][i]
    }
    out
}

/// compute the dot product between two vectors
pub fn vdot(a: [f64; 3], b: [f64; 3]) -> f64 {
    let mut out = 0f64;
    for i in 0..3 {
        out += a[i] * b[i]
    }
    out
}

/// compute the norm of a vector
pub fn norm(a: [f64; 3]) -> f64 {
    a.iter().map(|a| a.powi(2)).sum::<f64>().sqrt()
}

/// swap the rows and columns of a 3x3 matrix
pub fn transpose(m: [[f64; 3]; 3]) -> [[f64; 3]; 3] {
    [[m[0][0], m[1][0], m[2][0]],
     [m[0][1], m[1][1], m[2][1]],
     [m[0][2], m[1][2], m[2][2]]]
}

/// inverse of a 3x3 lattice, None if it doesn't span 3D space
///
/// Its transpose is the reciprocal basis without the factor of 2 pi.
pub fn invert_lattice(lattice: &[[f64; 3]; 3]) -> Option<[[f64; 3]; 3]> {
    let minor00 = lattice[1][1] * lattice[2][2] - lattice[1][2] * lattice[2][1];
    let minor01 = lattice[1][0] * lattice[2][2] - lattice[1][2] * lattice[2][0];
    let minor02 = lattice[1][0] * lattice[2][1] - lattice[1][1] * lattice[2][0];
    let determinant = lattice[0][0] * minor00 - lattice[0][1] * minor01
                      + lattice[0][2] * minor02;
    if determinant.abs() < 1e-16 {
        None
    } else {
        Some([[minor00 / determinant,
               (lattice[0][2] * lattice[2][1] - lattice[2][2] * lattice[0][1])
               / determinant,
               (lattice[0][1] * lattice[1][2] - lattice[1][1] * lattice[0][2])
               / determinant],
              [-minor01 / determinant,
               (lattice[0][0] * lattice[2][2] - lattice[2][0] * lattice[0][2])
               / determinant,
               (lattice[0][2] * lattice[1][0] - lattice[1][2] * lattice[0][0])
               / determinant],
              [minor02 / determinant,
               (lattice[0][1] * lattice[2][0] - lattice[2][1] * lattice[0][0])
               / determinant,
               (lattice[0][0] * lattice[1][1] - lattice[1][0] * lattice[0][1])
               / determinant]])
    }
}
