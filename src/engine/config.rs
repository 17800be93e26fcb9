use crate::core::colour_mapping::sine_gradient::SineGradient;
use crate::core::tuning::rate_limiter::RateLimiter;

/// Iteration cap after a reset, matching the classic full-set view.
pub const DEFAULT_MAX_ITERATIONS: u32 = 500;

/// Frequency change per second while a colour key is held.
pub const FREQUENCY_DRIFT_PER_SECOND: f64 = 0.1;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AdjustDirection {
    Increase,
    Decrease,
}

impl AdjustDirection {
    #[must_use]
    pub fn signum(&self) -> f64 {
        match self {
            Self::Increase => 1.0,
            Self::Decrease => -1.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrequencyChannel {
    One,
    Two,
    Three,
}

/// Externally supplied bounds and cadences. The engine never reads global
/// state; anything environment-dependent arrives through this struct.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EngineLimits {
    /// Upper bound for the iteration cap.
    pub iteration_cap_max: u32,
    /// Upper bound for the worker count, normally the hardware thread count.
    pub thread_cap: usize,
    /// Seconds between iteration-cap steps while the key is held.
    pub resolution_step_period: f64,
    /// Seconds between thread-count steps while the key is held.
    pub thread_step_period: f64,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            iteration_cap_max: 2048,
            thread_cap: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            resolution_step_period: 0.05,
            thread_step_period: 0.5,
        }
    }
}

/// The engine's tunable state: iteration cap, worker count and the colour
/// gradient, plus the rate limiters that pace held-key adjustment.
///
/// All tunables clamp on write; out-of-range requests are absorbed silently.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    limits: EngineLimits,
    max_iterations: u32,
    threads: usize,
    gradient: SineGradient,
    resolution_limiter: RateLimiter,
    thread_limiter: RateLimiter,
}

impl EngineConfig {
    #[must_use]
    pub fn new(limits: EngineLimits) -> Self {
        Self {
            limits,
            max_iterations: DEFAULT_MAX_ITERATIONS.min(limits.iteration_cap_max),
            threads: limits.thread_cap.max(1),
            gradient: SineGradient::default(),
            resolution_limiter: RateLimiter::new(limits.resolution_step_period),
            thread_limiter: RateLimiter::new(limits.thread_step_period),
        }
    }

    #[must_use]
    pub fn limits(&self) -> EngineLimits {
        self.limits
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        self.threads
    }

    #[must_use]
    pub fn gradient(&self) -> &SineGradient {
        &self.gradient
    }

    /// Restores the iteration cap and colour frequencies to their defaults.
    /// Thread count is left alone; it tracks the machine, not the view.
    pub fn reset(&mut self) {
        self.max_iterations = DEFAULT_MAX_ITERATIONS.min(self.limits.iteration_cap_max);
        self.gradient = SineGradient::default();
    }

    /// One rate-limited ±1 step of the iteration cap, clamped to
    /// `[0, iteration_cap_max]`.
    pub fn adjust_resolution(&mut self, direction: AdjustDirection, dt: f64) {
        if !self.resolution_limiter.tick(dt) {
            return;
        }

        match direction {
            AdjustDirection::Increase => {
                if self.max_iterations < self.limits.iteration_cap_max {
                    self.max_iterations += 1;
                }
            }
            AdjustDirection::Decrease => {
                if self.max_iterations > 0 {
                    self.max_iterations -= 1;
                }
            }
        }
    }

    /// One rate-limited ±1 step of the worker count, clamped to
    /// `[1, thread_cap]`. Takes effect on the next compute call.
    pub fn adjust_threads(&mut self, direction: AdjustDirection, dt: f64) {
        if !self.thread_limiter.tick(dt) {
            return;
        }

        match direction {
            AdjustDirection::Increase => {
                if self.threads < self.limits.thread_cap {
                    self.threads += 1;
                }
            }
            AdjustDirection::Decrease => {
                if self.threads > 1 {
                    self.threads -= 1;
                }
            }
        }
    }

    /// Continuous, unclamped frequency drift; no rate limiting here so the
    /// colours glide smoothly while the key is held.
    pub fn adjust_frequency(
        &mut self,
        channel: FrequencyChannel,
        direction: AdjustDirection,
        dt: f64,
    ) {
        let delta = (direction.signum() * FREQUENCY_DRIFT_PER_SECOND * dt) as f32;

        match channel {
            FrequencyChannel::One => self.gradient.frequency_one += delta,
            FrequencyChannel::Two => self.gradient.frequency_two += delta,
            FrequencyChannel::Three => self.gradient.frequency_three += delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::sine_gradient::DEFAULT_FREQUENCY;

    fn limits() -> EngineLimits {
        EngineLimits {
            iteration_cap_max: 2048,
            thread_cap: 8,
            resolution_step_period: 0.05,
            thread_step_period: 0.5,
        }
    }

    #[test]
    fn test_new_starts_at_defaults() {
        let config = EngineConfig::new(limits());

        assert_eq!(config.max_iterations(), 500);
        assert_eq!(config.threads(), 8);
        assert_eq!(config.gradient().frequency_one, DEFAULT_FREQUENCY);
    }

    #[test]
    fn test_default_cap_respects_small_limit() {
        let config = EngineConfig::new(EngineLimits {
            iteration_cap_max: 100,
            ..limits()
        });

        assert_eq!(config.max_iterations(), 100);
    }

    #[test]
    fn test_resolution_steps_only_after_period_accumulates() {
        let mut config = EngineConfig::new(limits());

        for _ in 0..4 {
            config.adjust_resolution(AdjustDirection::Increase, 0.01);
            assert_eq!(config.max_iterations(), 500);
        }

        config.adjust_resolution(AdjustDirection::Increase, 0.01);
        assert_eq!(config.max_iterations(), 501);
    }

    #[test]
    fn test_resolution_clamps_at_zero() {
        let mut config = EngineConfig::new(EngineLimits {
            iteration_cap_max: 2,
            ..limits()
        });

        for _ in 0..10 {
            config.adjust_resolution(AdjustDirection::Decrease, 1.0);
        }

        assert_eq!(config.max_iterations(), 0);
    }

    #[test]
    fn test_resolution_clamps_at_cap() {
        let mut config = EngineConfig::new(EngineLimits {
            iteration_cap_max: 502,
            ..limits()
        });

        for _ in 0..10 {
            config.adjust_resolution(AdjustDirection::Increase, 1.0);
        }

        assert_eq!(config.max_iterations(), 502);
    }

    #[test]
    fn test_threads_never_leave_bounds() {
        let mut config = EngineConfig::new(limits());

        for _ in 0..50 {
            config.adjust_threads(AdjustDirection::Decrease, 1.0);
            assert!(config.threads() >= 1);
        }
        assert_eq!(config.threads(), 1);

        for _ in 0..50 {
            config.adjust_threads(AdjustDirection::Increase, 1.0);
            assert!(config.threads() <= 8);
        }
        assert_eq!(config.threads(), 8);
    }

    #[test]
    fn test_thread_steps_use_their_own_slower_cadence() {
        let mut config = EngineConfig::new(limits());

        // 0.1 s is enough for two resolution steps but no thread step.
        config.adjust_resolution(AdjustDirection::Increase, 0.05);
        config.adjust_resolution(AdjustDirection::Increase, 0.05);
        config.adjust_threads(AdjustDirection::Decrease, 0.05);
        config.adjust_threads(AdjustDirection::Decrease, 0.05);

        assert_eq!(config.max_iterations(), 502);
        assert_eq!(config.threads(), 8);

        config.adjust_threads(AdjustDirection::Decrease, 0.4);
        assert_eq!(config.threads(), 7);
    }

    #[test]
    fn test_frequency_drift_is_continuous_and_unclamped() {
        let mut config = EngineConfig::new(limits());

        config.adjust_frequency(FrequencyChannel::Two, AdjustDirection::Increase, 0.5);
        let expected = DEFAULT_FREQUENCY + 0.1 * 0.5;
        assert!((config.gradient().frequency_two - expected).abs() < 1e-6);

        for _ in 0..100 {
            config.adjust_frequency(FrequencyChannel::Two, AdjustDirection::Decrease, 1.0);
        }
        assert!(config.gradient().frequency_two < 0.0);
    }

    #[test]
    fn test_frequency_channels_are_independent() {
        let mut config = EngineConfig::new(limits());

        config.adjust_frequency(FrequencyChannel::Three, AdjustDirection::Increase, 1.0);

        assert_eq!(config.gradient().frequency_one, DEFAULT_FREQUENCY);
        assert_eq!(config.gradient().frequency_two, DEFAULT_FREQUENCY);
        assert!(config.gradient().frequency_three > DEFAULT_FREQUENCY);
    }

    #[test]
    fn test_reset_restores_cap_and_frequencies_but_not_threads() {
        let mut config = EngineConfig::new(limits());

        config.adjust_resolution(AdjustDirection::Decrease, 1.0);
        config.adjust_threads(AdjustDirection::Decrease, 1.0);
        config.adjust_frequency(FrequencyChannel::One, AdjustDirection::Increase, 2.0);

        config.reset();

        assert_eq!(config.max_iterations(), 500);
        assert_eq!(config.gradient(), &SineGradient::default());
        assert_eq!(config.threads(), 7);
    }
}
