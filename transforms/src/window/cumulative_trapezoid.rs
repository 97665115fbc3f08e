use super::Window;
use crate::Real;

/// Running integral by the trapezoidal rule, starting from zero at the
/// first sample.
#[derive(Default, Clone)]
pub(crate) struct CumulativeTrapezoid {
    sampling_interval: Real,
    previous: Option<Real>,
    integral: Real,
}

impl CumulativeTrapezoid {
    pub(crate) fn new(sampling_interval: Real) -> Self {
        CumulativeTrapezoid {
            sampling_interval,
            ..Default::default()
        }
    }
}

impl Window for CumulativeTrapezoid {
    type InputType = Real;
    type OutputType = Real;

    fn push(&mut self, value: Real) -> bool {
        if let Some(previous) = self.previous {
            self.integral += 0.5 * self.sampling_interval * (previous + value);
        }
        self.previous = Some(value);
        true
    }

    fn output(&self) -> Option<Real> {
        self.previous.map(|_| self.integral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowFilter;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn no_data() {
        let input: Vec<Real> = vec![];
        assert!(
            input
                .into_iter()
                .window(CumulativeTrapezoid::new(1.0))
                .next()
                .is_none()
        );
    }

    #[test]
    fn single_sample_is_zero() {
        let output: Vec<_> = [7.0]
            .into_iter()
            .window(CumulativeTrapezoid::new(0.1))
            .collect();
        assert_eq!(output, vec![0.0]);
    }

    #[test]
    fn triangle_pulse() {
        let output: Vec<_> = [0.0, 1.0, 2.0, 1.0, 0.0]
            .into_iter()
            .window(CumulativeTrapezoid::new(1.0))
            .collect();

        assert_eq!(output, vec![0.0, 0.5, 2.0, 3.5, 4.0]);
    }

    #[test]
    fn constant_data_scales_with_interval() {
        let output: Vec<_> = [2.0; 11]
            .into_iter()
            .window(CumulativeTrapezoid::new(0.1))
            .collect();

        for (i, value) in output.iter().enumerate() {
            assert_approx_eq!(*value, 0.2 * i as Real, 1e-12);
        }
    }
}
