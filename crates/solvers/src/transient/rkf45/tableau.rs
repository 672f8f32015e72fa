//! Runge-Kutta-Fehlberg 4(5) coefficients.

/// Butcher tableau of an explicit embedded pair with six stages.
///
/// Stage `s` is evaluated at `t + c[s]·h` with the state shifted by
/// `Σ a[s][j]·k[j]` over the earlier stages `j < s`. The `k` values are
/// already scaled by `h`.
pub(crate) struct Tableau {
    pub(crate) c: [f64; 6],
    pub(crate) a: [[f64; 5]; 6],
    /// Weights of the 4th-order solution, which is the one committed.
    pub(crate) b4: [f64; 6],
    /// Weights of the 5th-order solution, used only for error estimation.
    pub(crate) b5: [f64; 6],
}

pub(crate) const FEHLBERG45: Tableau = Tableau {
    c: [0.0, 1. / 4., 3. / 8., 12. / 13., 1.0, 1. / 2.],
    a: [
        [0., 0., 0., 0., 0.],
        [1. / 4., 0., 0., 0., 0.],
        [3. / 32., 9. / 32., 0., 0., 0.],
        [1932. / 2197., -7200. / 2197., 7296. / 2197., 0., 0.],
        [439. / 216., -8., 3680. / 513., -845. / 4104., 0.],
        [-8. / 27., 2., -3544. / 2565., 1859. / 4104., -11. / 40.],
    ],
    b4: [25. / 216., 0., 1408. / 2565., 2197. / 4104., -1. / 5., 0.],
    b5: [
        16. / 135.,
        0.,
        6656. / 12825.,
        28561. / 56430.,
        -9. / 50.,
        2. / 55.,
    ],
};
