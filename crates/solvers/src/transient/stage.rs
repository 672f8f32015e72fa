use runge_core::VectorField;

/// Stage workspace for an explicit Runge-Kutta step with `S` stages.
///
/// Stages are evaluated in order across the whole system. Stage `s` builds
/// its argument from the frozen pre-step state shifted by the weighted
/// earlier stages of every component, evaluates every component there, and
/// stores `h·f` as that stage's `k`. The pre-step state itself is never
/// written, so no evaluation sees a partially committed step.
#[derive(Debug)]
pub(crate) struct Stages<const S: usize> {
    k: Vec<[f64; S]>,
    argument: Vec<f64>,
    derivative: Vec<f64>,
    evaluations: usize,
}

impl<const S: usize> Default for Stages<S> {
    fn default() -> Self {
        Self {
            k: Vec::new(),
            argument: Vec::new(),
            derivative: Vec::new(),
            evaluations: 0,
        }
    }
}

impl<const S: usize> Stages<S> {
    /// Evaluates stage `stage` of every component.
    ///
    /// The argument is `state + Σ weights[j]·k[j]` over the earlier stages
    /// `j < weights.len()`, evaluated at time `t`.
    pub(crate) fn eval<F: VectorField>(
        &mut self,
        field: &F,
        stage: usize,
        t: f64,
        h: f64,
        state: &[f64],
        weights: &[f64],
    ) {
        let dimension = state.len();
        self.k.resize(dimension, [0.0; S]);
        self.argument.resize(dimension, 0.0);
        self.derivative.resize(dimension, 0.0);

        for ((argument, &y), k) in self.argument.iter_mut().zip(state).zip(&self.k) {
            let shift: f64 = weights.iter().zip(k).map(|(a, k)| a * k).sum();
            *argument = y + shift;
        }

        field.evaluate(t, &self.argument, &mut self.derivative);
        for (k, &derivative) in self.k.iter_mut().zip(&self.derivative) {
            k[stage] = h * derivative;
        }
        self.evaluations += dimension;
    }

    /// Returns the stages of component `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a component of the last evaluated state.
    pub(crate) fn row(&self, index: usize) -> &[f64; S] {
        &self.k[index]
    }

    /// Number of component evaluations performed so far.
    pub(crate) fn evaluations(&self) -> usize {
        self.evaluations
    }
}
