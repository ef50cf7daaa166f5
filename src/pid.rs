// working variables

use num_traits::clamp;
use num_traits::float::FloatCore;

/// Error returned by the validated configuration setters and by
/// [`PidConfigBuilder::build`].
///
/// Each variant names the parameter that was rejected. A failed setter leaves
/// the previously stored value untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum PidConfigError {
    /// The proportional gain is not a finite number.
    #[cfg_attr(feature = "std", error("proportional gain must be finite"))]
    InvalidProportionalGain,

    /// The integral gain is not a finite number.
    #[cfg_attr(feature = "std", error("integral gain must be finite"))]
    InvalidIntegralGain,

    /// The derivative gain is not a finite number.
    #[cfg_attr(feature = "std", error("derivative gain must be finite"))]
    InvalidDerivativeGain,

    /// The target setpoint is not a finite number.
    #[cfg_attr(feature = "std", error("target setpoint must be finite"))]
    InvalidTarget,

    /// The output limits are NaN or inverted (minimum above maximum).
    #[cfg_attr(
        feature = "std",
        error("output limits must be non-NaN and satisfy min <= max")
    )]
    InvalidOutputLimits,

    /// The integral limits are NaN or inverted (minimum above maximum).
    #[cfg_attr(
        feature = "std",
        error("integral limits must be non-NaN and satisfy min <= max")
    )]
    InvalidIntegralLimits,

    /// The dead-zone threshold is negative or not finite.
    #[cfg_attr(
        feature = "std",
        error("dead-zone threshold must be finite and non-negative")
    )]
    InvalidDeadZone,

    /// The output offset magnitude is negative or not finite.
    #[cfg_attr(
        feature = "std",
        error("output offset must be finite and non-negative")
    )]
    InvalidOutputOffset,
}

/// Error returned by the step function when the feedback sample is unusable.
///
/// A rejected step mutates no recurrence state, so the surrounding control
/// loop can hold the last output, alert, or shut the actuator down and then
/// resume stepping with clean samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum PidComputeError {
    /// The feedback sample is NaN or infinite, typically a sensor fault.
    #[cfg_attr(feature = "std", error("feedback sample must be finite"))]
    NonFiniteFeedback,
}

/// The control law evaluated by the step function.
///
/// The law is bound into a [`PidContext`] when the context is created and
/// stays fixed for the lifetime of that context. Writing a new law into
/// [`PidConfig`] only takes effect at the next (re)initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlLaw {
    /// Difference-form PID. Each step yields a delta, suited to actuators
    /// that accept relative moves. With full-scale accumulation enabled the
    /// deltas are summed into a running absolute output instead.
    Incremental,

    /// Standard-form (position) PID. Each step yields a self-contained
    /// command value built from the error, its integral, and its slope.
    Absolute,
}

/// Tunable parameters and optional-behavior toggles of the controller.
///
/// All values are mutated through validated setters; a rejected value
/// leaves the stored one untouched.
#[derive(Copy, Clone, Debug)]
pub struct PidConfig<T> {
    /// Proportional gain coefficient.
    /// Defaults to 1.0.
    kp: T,

    /// Integral gain coefficient.
    /// Defaults to 0.0. Applies to the raw error sum; no sample-time scaling
    /// is performed, so retune when the loop rate changes.
    ki: T,

    /// Derivative gain coefficient.
    /// Defaults to 0.0.
    kd: T,

    /// Target setpoint the controller drives the feedback toward.
    /// Defaults to 0.0.
    target: T,

    /// Minimum output value of the controller.
    /// Defaults to negative infinity, i.e. no limit.
    output_min: T,

    /// Maximum output value of the controller.
    /// Defaults to positive infinity, i.e. no limit.
    output_max: T,

    /// Minimum value of the integral accumulator (absolute law only).
    /// Defaults to negative infinity, i.e. no limit.
    integral_min: T,

    /// Maximum value of the integral accumulator (absolute law only).
    /// Defaults to positive infinity, i.e. no limit.
    integral_max: T,

    /// Error magnitude below which no corrective action is taken.
    /// Defaults to 0.0.
    dead_zone: T,

    /// Magnitude added to the output, following its sign, to overcome
    /// actuator stiction. Defaults to 0.0.
    output_offset: T,

    /// Whether the output clamp is applied.
    use_output_limits: bool,

    /// Whether the integral clamp (anti-windup) is applied.
    use_integral_limits: bool,

    /// Whether the input dead-zone is applied.
    use_dead_zone: bool,

    /// Whether the output offset is applied.
    use_output_offset: bool,

    /// Whether incremental deltas accumulate into a running output.
    use_incremental_accumulation: bool,

    /// Control law bound at the next context (re)initialization.
    law: ControlLaw,
}

impl<T: FloatCore> Default for PidConfig<T> {
    fn default() -> Self {
        PidConfig {
            kp: T::one(),
            ki: T::zero(),
            kd: T::zero(),
            target: T::zero(),
            output_min: T::neg_infinity(),
            output_max: T::infinity(),
            integral_min: T::neg_infinity(),
            integral_max: T::infinity(),
            dead_zone: T::zero(),
            output_offset: T::zero(),
            use_output_limits: false,
            use_integral_limits: false,
            use_dead_zone: false,
            use_output_offset: false,
            use_incremental_accumulation: false,
            law: ControlLaw::Absolute,
        }
    }
}

impl<T: FloatCore> PidConfig<T> {
    /// Returns the proportional gain.
    pub fn kp(&self) -> T {
        self.kp
    }

    /// Returns the integral gain.
    pub fn ki(&self) -> T {
        self.ki
    }

    /// Returns the derivative gain.
    pub fn kd(&self) -> T {
        self.kd
    }

    /// Convenience method that returns the proportional, integral, and derivative gains together as a tuple.
    pub fn gains(&self) -> (T, T, T) {
        (self.kp, self.ki, self.kd)
    }

    /// Returns the target setpoint.
    pub fn target(&self) -> T {
        self.target
    }

    /// Returns the minimum and maximum output limits together as a tuple.
    pub fn output_limits(&self) -> (T, T) {
        (self.output_min, self.output_max)
    }

    /// Returns the minimum output limit.
    pub fn output_min(&self) -> T {
        self.output_min
    }

    /// Returns the maximum output limit.
    pub fn output_max(&self) -> T {
        self.output_max
    }

    /// Returns the minimum and maximum integral limits together as a tuple.
    pub fn integral_limits(&self) -> (T, T) {
        (self.integral_min, self.integral_max)
    }

    /// Returns the dead-zone threshold.
    pub fn dead_zone(&self) -> T {
        self.dead_zone
    }

    /// Returns the output offset magnitude.
    pub fn output_offset(&self) -> T {
        self.output_offset
    }

    /// Returns the flag indicating whether the output clamp is applied.
    pub fn use_output_limits(&self) -> bool {
        self.use_output_limits
    }

    /// Returns the flag indicating whether the integral clamp is applied.
    pub fn use_integral_limits(&self) -> bool {
        self.use_integral_limits
    }

    /// Returns the flag indicating whether the input dead-zone is applied.
    pub fn use_dead_zone(&self) -> bool {
        self.use_dead_zone
    }

    /// Returns the flag indicating whether the output offset is applied.
    pub fn use_output_offset(&self) -> bool {
        self.use_output_offset
    }

    /// Returns the flag indicating whether incremental deltas accumulate
    /// into a running output.
    pub fn use_incremental_accumulation(&self) -> bool {
        self.use_incremental_accumulation
    }

    /// Returns the selected control law.
    pub fn law(&self) -> ControlLaw {
        self.law
    }

    /// Sets the proportional gain.
    ///
    /// The gain may take any sign or magnitude; only non-finite values are
    /// rejected. To suppress the controller output, disable the controller
    /// instead of zeroing gains.
    ///
    /// # Errors
    /// - [`PidConfigError::InvalidProportionalGain`] if `kp` is not finite.
    pub fn set_kp(&mut self, kp: T) -> Result<(), PidConfigError> {
        if !kp.is_finite() {
            return Err(PidConfigError::InvalidProportionalGain);
        }
        self.kp = kp;
        Ok(())
    }

    /// Sets the integral gain.
    ///
    /// The gain applies to the raw error sum. No sample-time scaling is
    /// performed; the caller owns the loop rate.
    ///
    /// # Errors
    /// - [`PidConfigError::InvalidIntegralGain`] if `ki` is not finite.
    pub fn set_ki(&mut self, ki: T) -> Result<(), PidConfigError> {
        if !ki.is_finite() {
            return Err(PidConfigError::InvalidIntegralGain);
        }
        self.ki = ki;
        Ok(())
    }

    /// Sets the derivative gain.
    ///
    /// # Errors
    /// - [`PidConfigError::InvalidDerivativeGain`] if `kd` is not finite.
    pub fn set_kd(&mut self, kd: T) -> Result<(), PidConfigError> {
        if !kd.is_finite() {
            return Err(PidConfigError::InvalidDerivativeGain);
        }
        self.kd = kd;
        Ok(())
    }

    /// Convenience method to set the proportional, integral, and derivative gains together
    pub fn set_gains(&mut self, kp: T, ki: T, kd: T) -> Result<(), PidConfigError> {
        self.set_kp(kp)?;
        self.set_ki(ki)?;
        self.set_kd(kd)
    }

    /// Sets the target setpoint. May be called between any two steps; the
    /// next step observes the new target.
    ///
    /// # Errors
    /// - [`PidConfigError::InvalidTarget`] if `target` is not finite.
    pub fn set_target(&mut self, target: T) -> Result<(), PidConfigError> {
        if !target.is_finite() {
            return Err(PidConfigError::InvalidTarget);
        }
        self.target = target;
        Ok(())
    }

    /// Sets the minimum and maximum output limits.
    ///
    /// These limits may be infinite to disable clamping on one side. Setting
    /// the bounds does not enable the clamp; see
    /// [`set_use_output_limits`](Self::set_use_output_limits).
    ///
    /// # Errors
    /// - [`PidConfigError::InvalidOutputLimits`] if either bound is NaN or
    ///   `output_min > output_max`.
    pub fn set_output_limits(
        &mut self,
        output_min: T,
        output_max: T,
    ) -> Result<(), PidConfigError> {
        if output_min.is_nan() || output_max.is_nan() || output_min > output_max {
            return Err(PidConfigError::InvalidOutputLimits);
        }
        self.output_min = output_min;
        self.output_max = output_max;
        Ok(())
    }

    /// Sets the minimum and maximum limits of the integral accumulator.
    ///
    /// Only meaningful under the absolute law, where the clamp bounds the
    /// accumulator to prevent reset windup during sustained error.
    ///
    /// # Errors
    /// - [`PidConfigError::InvalidIntegralLimits`] if either bound is NaN or
    ///   `integral_min > integral_max`.
    pub fn set_integral_limits(
        &mut self,
        integral_min: T,
        integral_max: T,
    ) -> Result<(), PidConfigError> {
        if integral_min.is_nan() || integral_max.is_nan() || integral_min > integral_max {
            return Err(PidConfigError::InvalidIntegralLimits);
        }
        self.integral_min = integral_min;
        self.integral_max = integral_max;
        Ok(())
    }

    /// Sets the error magnitude below which a step takes no corrective
    /// action, to avoid actuator chatter near the setpoint.
    ///
    /// # Errors
    /// - [`PidConfigError::InvalidDeadZone`] if `dead_zone` is negative or
    ///   not finite.
    pub fn set_dead_zone(&mut self, dead_zone: T) -> Result<(), PidConfigError> {
        if !dead_zone.is_finite() || dead_zone < T::zero() {
            return Err(PidConfigError::InvalidDeadZone);
        }
        self.dead_zone = dead_zone;
        Ok(())
    }

    /// Sets the output offset magnitude.
    ///
    /// The offset follows the sign of the output, pushing it further from
    /// zero to overcome actuator stiction; an output of exactly zero is left
    /// untouched.
    ///
    /// # Errors
    /// - [`PidConfigError::InvalidOutputOffset`] if `output_offset` is
    ///   negative or not finite.
    pub fn set_output_offset(&mut self, output_offset: T) -> Result<(), PidConfigError> {
        if !output_offset.is_finite() || output_offset < T::zero() {
            return Err(PidConfigError::InvalidOutputOffset);
        }
        self.output_offset = output_offset;
        Ok(())
    }

    /// Sets whether the output clamp is applied.
    pub fn set_use_output_limits(&mut self, use_output_limits: bool) {
        self.use_output_limits = use_output_limits;
    }

    /// Sets whether the integral clamp (anti-windup) is applied.
    pub fn set_use_integral_limits(&mut self, use_integral_limits: bool) {
        self.use_integral_limits = use_integral_limits;
    }

    /// Sets whether the input dead-zone is applied.
    pub fn set_use_dead_zone(&mut self, use_dead_zone: bool) {
        self.use_dead_zone = use_dead_zone;
    }

    /// Sets whether the output offset is applied.
    pub fn set_use_output_offset(&mut self, use_output_offset: bool) {
        self.use_output_offset = use_output_offset;
    }

    /// Sets whether incremental deltas accumulate into a running output
    /// (incremental law only).
    pub fn set_use_incremental_accumulation(&mut self, use_incremental_accumulation: bool) {
        self.use_incremental_accumulation = use_incremental_accumulation;
    }

    /// Selects the control law bound at the next context (re)initialization.
    ///
    /// Changing the law does NOT retarget a live context; the recurrence
    /// keeps evaluating the law it was initialized with until
    /// [`PidController::initialize`] is called or a fresh [`PidContext`] is
    /// constructed.
    pub fn set_law(&mut self, law: ControlLaw) {
        self.law = law;
    }
}

/// A builder for [`PidConfig`] that funnels every parameter through the same
/// validation as the corresponding setter.
#[derive(Copy, Clone, Debug)]
pub struct PidConfigBuilder<T> {
    kp: T,
    ki: T,
    kd: T,
    target: T,
    output_limits: (T, T),
    integral_limits: (T, T),
    dead_zone: T,
    output_offset: T,
    use_output_limits: bool,
    use_integral_limits: bool,
    use_dead_zone: bool,
    use_output_offset: bool,
    use_incremental_accumulation: bool,
    law: ControlLaw,
}

impl<T: FloatCore> Default for PidConfigBuilder<T> {
    fn default() -> Self {
        let config = PidConfig::default();
        PidConfigBuilder {
            kp: config.kp,
            ki: config.ki,
            kd: config.kd,
            target: config.target,
            output_limits: (config.output_min, config.output_max),
            integral_limits: (config.integral_min, config.integral_max),
            dead_zone: config.dead_zone,
            output_offset: config.output_offset,
            use_output_limits: config.use_output_limits,
            use_integral_limits: config.use_integral_limits,
            use_dead_zone: config.use_dead_zone,
            use_output_offset: config.use_output_offset,
            use_incremental_accumulation: config.use_incremental_accumulation,
            law: config.law,
        }
    }
}

impl<T: FloatCore> PidConfigBuilder<T> {
    /// Sets the proportional gain to build with.
    pub fn kp(mut self, kp: T) -> Self {
        self.kp = kp;
        self
    }

    /// Sets the integral gain to build with.
    pub fn ki(mut self, ki: T) -> Self {
        self.ki = ki;
        self
    }

    /// Sets the derivative gain to build with.
    pub fn kd(mut self, kd: T) -> Self {
        self.kd = kd;
        self
    }

    /// Sets the target setpoint to build with.
    pub fn target(mut self, target: T) -> Self {
        self.target = target;
        self
    }

    /// Sets the output limits to build with and enables the output clamp.
    pub fn output_limits(mut self, output_min: T, output_max: T) -> Self {
        self.output_limits = (output_min, output_max);
        self.use_output_limits = true;
        self
    }

    /// Sets the integral limits to build with and enables the integral clamp.
    pub fn integral_limits(mut self, integral_min: T, integral_max: T) -> Self {
        self.integral_limits = (integral_min, integral_max);
        self.use_integral_limits = true;
        self
    }

    /// Sets the dead-zone threshold to build with and enables the dead-zone.
    pub fn dead_zone(mut self, dead_zone: T) -> Self {
        self.dead_zone = dead_zone;
        self.use_dead_zone = true;
        self
    }

    /// Sets the output offset to build with and enables the offset.
    pub fn output_offset(mut self, output_offset: T) -> Self {
        self.output_offset = output_offset;
        self.use_output_offset = true;
        self
    }

    /// Sets whether incremental deltas accumulate into a running output.
    pub fn use_incremental_accumulation(mut self, use_incremental_accumulation: bool) -> Self {
        self.use_incremental_accumulation = use_incremental_accumulation;
        self
    }

    /// Sets the control law to build with.
    pub fn law(mut self, law: ControlLaw) -> Self {
        self.law = law;
        self
    }

    /// Validates the accumulated parameters and builds the configuration.
    ///
    /// # Errors
    /// Returns the first [`PidConfigError`] produced by the setter
    /// validation.
    pub fn build(self) -> Result<PidConfig<T>, PidConfigError> {
        let mut config = PidConfig::default();
        config.set_kp(self.kp)?;
        config.set_ki(self.ki)?;
        config.set_kd(self.kd)?;
        config.set_target(self.target)?;
        config.set_output_limits(self.output_limits.0, self.output_limits.1)?;
        config.set_integral_limits(self.integral_limits.0, self.integral_limits.1)?;
        config.set_dead_zone(self.dead_zone)?;
        config.set_output_offset(self.output_offset)?;
        config.set_use_output_limits(self.use_output_limits);
        config.set_use_integral_limits(self.use_integral_limits);
        config.set_use_dead_zone(self.use_dead_zone);
        config.set_use_output_offset(self.use_output_offset);
        config.set_use_incremental_accumulation(self.use_incremental_accumulation);
        config.set_law(self.law);
        Ok(config)
    }
}

/// The recurrence state of the controller, bound to one control law.
///
/// Holds the error history, the integral accumulator, the running output,
/// and the enable flag. `error_prev2` is only read by the incremental law
/// and `integral` only by the absolute law; under the other law each is
/// carried as inert state.
#[derive(Copy, Clone, Debug)]
pub struct PidContext<T> {
    error_now: T,
    error_prev: T,
    error_prev2: T,
    integral: T,
    last_output: T,
    enabled: bool,
    law: ControlLaw,
}

impl<T: FloatCore> PidContext<T> {
    /// Creates a zeroed, enabled context bound to `law`.
    pub fn new(law: ControlLaw) -> Self {
        Self {
            error_now: T::zero(),
            error_prev: T::zero(),
            error_prev2: T::zero(),
            integral: T::zero(),
            last_output: T::zero(),
            enabled: true,
            law,
        }
    }

    /// Creates an enabled context whose running output starts at `output`
    /// instead of zero.
    ///
    /// Under the incremental law with full-scale accumulation this lets the
    /// controller take over an actuator that is already commanded away from
    /// rest, without a jump on the first step.
    pub fn with_initial_output(law: ControlLaw, output: T) -> Self {
        Self {
            last_output: output,
            ..Self::new(law)
        }
    }

    /// Returns the last computed output.
    ///
    /// Reads back unchanged if a step was skipped by the dead-zone or the
    /// controller is disabled.
    pub fn output(&self) -> T {
        self.last_output
    }

    /// Returns the error observed by the most recent step.
    pub fn error(&self) -> T {
        self.error_now
    }

    /// Returns the integral accumulator (absolute law only; inert otherwise).
    pub fn integral(&self) -> T {
        self.integral
    }

    /// Returns the control law this context was initialized with.
    pub fn law(&self) -> ControlLaw {
        self.law
    }

    /// Returns whether steps evaluate the control law.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables the controller. Performs no state reset by itself; the
    /// recurrence resumes from whatever [`disable`](Self::disable) left
    /// behind.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disables the controller and clears the error history and the
    /// integral accumulator.
    ///
    /// Clearing guarantees that re-enabling starts the recurrence from a
    /// clean slate with no stale derivative or integral kick. The running
    /// output is retained so accumulated actuator state is not forgotten.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.error_now = T::zero();
        self.error_prev = T::zero();
        self.error_prev2 = T::zero();
        self.integral = T::zero();
    }
}

/// A functional implementation of the dual-law PID controller.
///
/// This implementation is stateless: a [`PidContext`] must be passed in and
/// is returned updated with each call to `compute`, which is functionally
/// pure over the pair of context and feedback. If the configuration is
/// final, the controller itself can be non-`mut` as well.
pub struct FuncPidController<T> {
    config: PidConfig<T>,
}

/// A stateful implementation of the dual-law PID controller.
///
/// This implementation embeds a [`PidContext`] so it can be stepped without
/// threading a context through the call site. The controller **must** be
/// `mut`.
pub struct PidController<T> {
    ctx: PidContext<T>,
    controller: FuncPidController<T>,
}

impl<T: FloatCore> FuncPidController<T> {
    /// Creates a functional controller owning `config`.
    pub fn new(config: PidConfig<T>) -> Self {
        FuncPidController { config }
    }

    /// Returns a shared reference to the configuration.
    pub fn config(&self) -> &PidConfig<T> {
        &self.config
    }

    /// Returns a mutable reference to the configuration for on-the-fly
    /// retuning.
    pub fn config_mut(&mut self) -> &mut PidConfig<T> {
        &mut self.config
    }

    /// Performs one sample step of the control law bound in `ctx`.
    ///
    /// A disabled context short-circuits to zero without touching the error
    /// or integral history.
    ///
    /// # Errors
    /// - [`PidComputeError::NonFiniteFeedback`] if `feedback` is NaN or
    ///   infinite. Since [`PidContext`] is `Copy`, the caller's context is
    ///   untouched on error and stepping may resume once the sensor fault
    ///   clears.
    pub fn compute(
        &self,
        mut ctx: PidContext<T>,
        feedback: T,
    ) -> Result<(T, PidContext<T>), PidComputeError> {
        if !feedback.is_finite() {
            return Err(PidComputeError::NonFiniteFeedback);
        }

        if !ctx.enabled {
            return Ok((T::zero(), ctx));
        }

        let output = match ctx.law {
            ControlLaw::Incremental => self.step_incremental(&mut ctx, feedback),
            ControlLaw::Absolute => self.step_absolute(&mut ctx, feedback),
        };
        Ok((output, ctx))
    }

    /// Difference-form recurrence. Yields a raw delta, or the running sum of
    /// deltas when full-scale accumulation is on.
    fn step_incremental(&self, ctx: &mut PidContext<T>, feedback: T) -> T {
        ctx.error_prev2 = ctx.error_prev;
        ctx.error_prev = ctx.error_now;
        ctx.error_now = self.config.target - feedback;

        if self.config.use_dead_zone && ctx.error_now.abs() < self.config.dead_zone {
            // No delta this sample; the running output is left as-is
            return T::zero();
        }

        let two = T::one() + T::one();
        let delta = self.config.kp * (ctx.error_now - ctx.error_prev)
            + self.config.ki * ctx.error_now
            + self.config.kd * (ctx.error_now - two * ctx.error_prev + ctx.error_prev2);

        let raw = if self.config.use_incremental_accumulation {
            ctx.last_output + delta
        } else {
            delta
        };

        ctx.last_output = self.shape_output(raw);
        ctx.last_output
    }

    /// Standard-form recurrence. Yields a self-contained command value.
    fn step_absolute(&self, ctx: &mut PidContext<T>, feedback: T) -> T {
        ctx.error_prev = ctx.error_now;
        ctx.error_now = self.config.target - feedback;

        if self.config.use_dead_zone && ctx.error_now.abs() < self.config.dead_zone {
            return T::zero();
        }

        ctx.integral = ctx.integral + ctx.error_now;
        if self.config.use_integral_limits {
            ctx.integral = clamp(
                ctx.integral,
                self.config.integral_min,
                self.config.integral_max,
            );
        }

        let raw = self.config.kp * ctx.error_now
            + self.config.ki * ctx.integral
            + self.config.kd * (ctx.error_now - ctx.error_prev);

        ctx.last_output = self.shape_output(raw);
        ctx.last_output
    }

    /// Applies the offset and clamp stages, in that order.
    fn shape_output(&self, raw: T) -> T {
        let mut output = raw;
        if self.config.use_output_offset {
            if output > T::zero() {
                output = output + self.config.output_offset;
            } else if output < T::zero() {
                output = output - self.config.output_offset;
            }
        }
        if self.config.use_output_limits {
            output = clamp(output, self.config.output_min, self.config.output_max);
        }
        output
    }
}

impl<T: FloatCore> PidController<T> {
    /// Creates a stateful controller with a zeroed, enabled context bound to
    /// the law selected in `config`.
    pub fn new(config: PidConfig<T>) -> Self {
        Self {
            ctx: PidContext::new(config.law()),
            controller: FuncPidController::new(config),
        }
    }

    /// Creates a stateful controller whose running output starts at `output`
    /// instead of zero. See [`PidContext::with_initial_output`].
    pub fn with_initial_output(config: PidConfig<T>, output: T) -> Self {
        Self {
            ctx: PidContext::with_initial_output(config.law(), output),
            controller: FuncPidController::new(config),
        }
    }

    /// Returns a shared reference to the configuration.
    pub fn config(&self) -> &PidConfig<T> {
        &self.controller.config
    }

    /// Returns a mutable reference to the configuration for on-the-fly
    /// retuning.
    pub fn config_mut(&mut self) -> &mut PidConfig<T> {
        &mut self.controller.config
    }

    /// Performs one sample step. See [`FuncPidController::compute`].
    ///
    /// # Errors
    /// - [`PidComputeError::NonFiniteFeedback`] if `feedback` is NaN or
    ///   infinite; the embedded context is not mutated.
    pub fn compute(&mut self, feedback: T) -> Result<T, PidComputeError> {
        let (output, ctx) = self.controller.compute(self.ctx, feedback)?;
        self.ctx = ctx;
        Ok(output)
    }

    /// Re-initializes the controller: rebinds the control law currently
    /// selected in the configuration, zeroes all recurrence state, and
    /// forces the controller enabled.
    pub fn initialize(&mut self) {
        self.ctx = PidContext::new(self.controller.config.law());
    }

    /// Returns the last computed output.
    pub fn output(&self) -> T {
        self.ctx.output()
    }

    /// Returns the error observed by the most recent step.
    pub fn error(&self) -> T {
        self.ctx.error()
    }

    /// Returns the integral accumulator (absolute law only; inert otherwise).
    pub fn integral(&self) -> T {
        self.ctx.integral()
    }

    /// Returns the control law the embedded context was initialized with.
    pub fn law(&self) -> ControlLaw {
        self.ctx.law()
    }

    /// Returns whether steps evaluate the control law.
    pub fn is_enabled(&self) -> bool {
        self.ctx.is_enabled()
    }

    /// Enables the controller without resetting any state.
    pub fn enable(&mut self) {
        self.ctx.enable();
    }

    /// Disables the controller and clears the error/integral history. See
    /// [`PidContext::disable`].
    pub fn disable(&mut self) {
        self.ctx.disable();
    }
}
