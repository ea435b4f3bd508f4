/// Temperature sequence applied to successive layout steps.
///
/// The temperature scales every displacement, so early steps make large
/// exploratory moves and late steps only fine adjustments.
///
/// # Examples
///
/// ```
/// use rs_layout::layout::CoolingSchedule;
///
/// let linear = CoolingSchedule::Linear { start: 1.0, steps: 5 };
/// let temps: Vec<f64> = linear.temperatures().collect();
/// assert_eq!(temps, vec![1.0, 0.75, 0.5, 0.25, 0.0]);
///
/// let geometric = CoolingSchedule::Geometric { start: 1.0, factor: 0.5, stop: 0.2 };
/// assert_eq!(geometric.temperatures().collect::<Vec<_>>(), vec![1.0, 0.5, 0.25]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CoolingSchedule {
    /// Falls linearly from `start` to zero over `steps` steps.
    Linear { start: f64, steps: usize },
    /// Multiplies by `factor` after each step; ends once below `stop`.
    Geometric { start: f64, factor: f64, stop: f64 },
}

impl CoolingSchedule {
    /// Temperature of step `step` (zero-based).
    pub fn temperature(&self, step: usize) -> f64 {
        match *self {
            CoolingSchedule::Linear { start, steps } => linear_temperature(start, steps, step),
            CoolingSchedule::Geometric { start, factor, .. } => {
                (0..step).fold(start, |t, _| t * factor)
            }
        }
    }

    /// Every temperature of the schedule, in order.
    pub fn temperatures(&self) -> Temperatures {
        let state = match *self {
            CoolingSchedule::Linear { start, steps } => TemperatureState::Linear { start, steps, step: 0 },
            CoolingSchedule::Geometric { start, factor, stop } => {
                TemperatureState::Geometric { current: start, factor, stop }
            }
        };
        Temperatures { state }
    }
}

fn linear_temperature(start: f64, steps: usize, step: usize) -> f64 {
    if step >= steps {
        0.0
    } else if steps == 1 {
        start
    } else {
        start * (steps - 1 - step) as f64 / (steps - 1) as f64
    }
}

#[derive(Clone, Copy, Debug)]
enum TemperatureState {
    Linear { start: f64, steps: usize, step: usize },
    Geometric { current: f64, factor: f64, stop: f64 },
}

/// Iterator returned by `CoolingSchedule::temperatures`.
#[derive(Clone, Copy, Debug)]
pub struct Temperatures {
    state: TemperatureState,
}

impl Temperatures {
    /// Where the schedule currently stands: the next temperature while one
    /// remains, otherwise the value it cooled down to.
    pub fn current(&self) -> f64 {
        match self.state {
            TemperatureState::Linear { start, steps, step } => linear_temperature(start, steps, step),
            TemperatureState::Geometric { current, .. } => current,
        }
    }

    /// The next temperature without advancing.
    pub fn peek(&self) -> Option<f64> {
        let mut ahead = *self;
        ahead.next()
    }
}

impl Iterator for Temperatures {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        match &mut self.state {
            TemperatureState::Linear { start, steps, step } => {
                if *step >= *steps {
                    return None;
                }
                let t = linear_temperature(*start, *steps, *step);
                *step += 1;
                Some(t)
            }
            TemperatureState::Geometric { current, factor, stop } => {
                // Factors at or above one would never cool down.
                if *current < *stop || *current <= 0.0 || !(*factor > 0.0 && *factor < 1.0) {
                    return None;
                }
                let t = *current;
                *current *= *factor;
                Some(t)
            }
        }
    }
}
