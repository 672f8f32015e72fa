use std::fmt;

/// The right-hand side of a first-order ODE system `dy/dt = f(t, y)`.
///
/// A vector field is evaluated one component at a time: component `i` reads
/// the time and the full state vector and returns the derivative of `y[i]`.
/// Solvers call [`VectorField::component`] several times per step with
/// perturbed time and state arguments, so implementations must be pure.
///
/// Callers are responsible for passing a state of length [`dimension`].
///
/// [`dimension`]: VectorField::dimension
pub trait VectorField {
    /// Returns the number of equations, which is also the state dimension.
    fn dimension(&self) -> usize;

    /// Evaluates the derivative of component `index` at time `t` and `state`.
    ///
    /// # Panics
    ///
    /// May panic if `index >= self.dimension()`.
    fn component(&self, index: usize, t: f64, state: &[f64]) -> f64;

    /// Evaluates every component at `(t, state)` into `derivative`.
    ///
    /// # Panics
    ///
    /// May panic if `derivative` is shorter than `self.dimension()`.
    fn evaluate(&self, t: f64, state: &[f64], derivative: &mut [f64]) {
        for (index, value) in derivative.iter_mut().take(self.dimension()).enumerate() {
            *value = self.component(index, t, state);
        }
    }
}

impl<F: VectorField + ?Sized> VectorField for &F {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn component(&self, index: usize, t: f64, state: &[f64]) -> f64 {
        (**self).component(index, t, state)
    }
}

/// A single scalar equation `f_i(t, y)`.
pub type Equation = Box<dyn Fn(f64, &[f64]) -> f64 + Send + Sync>;

/// An ordered set of scalar equations forming a [`VectorField`].
///
/// Equation `i` defines the derivative of state component `i`. The set is
/// immutable once a solver borrows it.
///
/// # Example
///
/// ```
/// use runge_core::{EquationSet, VectorField};
///
/// // Harmonic oscillator: y0' = y1, y1' = -y0
/// let oscillator = EquationSet::new()
///     .with_equation(|_t, y| y[1])
///     .with_equation(|_t, y| -y[0]);
///
/// assert_eq!(oscillator.dimension(), 2);
/// assert_eq!(oscillator.component(1, 0.0, &[2.0, 0.0]), -2.0);
/// ```
#[derive(Default)]
pub struct EquationSet {
    equations: Vec<Equation>,
}

impl EquationSet {
    /// Creates an empty equation set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an equation, returning the extended set.
    #[must_use]
    pub fn with_equation<F>(mut self, equation: F) -> Self
    where
        F: Fn(f64, &[f64]) -> f64 + Send + Sync + 'static,
    {
        self.push(equation);
        self
    }

    /// Appends an equation in place.
    pub fn push<F>(&mut self, equation: F)
    where
        F: Fn(f64, &[f64]) -> f64 + Send + Sync + 'static,
    {
        self.equations.push(Box::new(equation));
    }

    /// Returns the number of equations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    /// Returns `true` if the set holds no equations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }
}

impl From<Vec<Equation>> for EquationSet {
    fn from(equations: Vec<Equation>) -> Self {
        Self { equations }
    }
}

impl FromIterator<Equation> for EquationSet {
    fn from_iter<T: IntoIterator<Item = Equation>>(iter: T) -> Self {
        Self {
            equations: iter.into_iter().collect(),
        }
    }
}

impl VectorField for EquationSet {
    fn dimension(&self) -> usize {
        self.equations.len()
    }

    fn component(&self, index: usize, t: f64, state: &[f64]) -> f64 {
        (self.equations[index])(t, state)
    }
}

impl fmt::Debug for EquationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EquationSet")
            .field("len", &self.equations.len())
            .finish()
    }
}
