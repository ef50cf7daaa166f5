//! Example of step response of a mass-spring-damper system under PID control
//! This example requires the `--features simulation` flag to be enabled.
// Copyright © 2025 Hs293Go
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included
// in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES
// OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
// IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
// DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
// TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE
// OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

#[cfg(feature = "simulation")]
pub fn main() {
    use nalgebra as na;

    use servo_pid::pid::{ControlLaw, FuncPidController, PidConfigBuilder, PidContext};
    use servo_pid::sim;
    use servo_pid::sim::SignalGenerator;

    const FIXED_STEP_SIZE_S: f64 = 0.01;

    let cfg = PidConfigBuilder::default()
        .kp(1.5)
        .ki(0.01)
        .kd(2.0)
        .output_limits(-5.0, 5.0)
        .law(ControlLaw::Absolute)
        .build()
        .unwrap();
    let mut pid = FuncPidController::new(cfg);

    let mut ctx = PidContext::new(ControlLaw::Absolute);

    let mut state = na::Vector2::<f64>::zeros();
    let mut control: f64;
    let mut output: f64 = 0.0;

    let mdl = sim::MassSpringDamper {
        natural_frequency: 0.5 * std::f64::consts::PI,
        damping_ratio: 0.2,
    };

    let square = SignalGenerator::new(sim::WaveForm::Square, 0.0, 0.5, 0.5);

    println!("time,setpoint,output,control");
    for i in 0..1000usize {
        let time = i as f64 * FIXED_STEP_SIZE_S;

        let setpoint = square.generate(time);
        pid.config_mut()
            .set_target(setpoint)
            .expect("waveform setpoints are finite");

        (control, ctx) = pid
            .compute(ctx, output)
            .expect("plant output stays finite in closed loop");
        state = sim::rk4_step(|x| mdl.f(x, control), state, FIXED_STEP_SIZE_S);
        output = mdl.h(state);

        println!("{time:.2},{setpoint},{output},{control}");
    }
}

#[cfg(not(feature = "simulation"))]
fn main() {
    eprintln!("This example requires `--features simulation` to run.");
}
