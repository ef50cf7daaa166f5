#![warn(missing_docs)]

//! # Servo PID Controller Library
//!
//! This library provides a PID (Proportional-Integral-Derivative) controller for actuator servo
//! loops, selectable between an incremental (velocity-form) and an absolute (position-form)
//! control law.
//!
//! It includes both functional and stateful implementations, allowing users to choose the approach
//! that best suits their needs.
//!
//! ## Features
//!
//! - Two control laws, selected at context initialization:
//!   - **Incremental**: computes an output change from the last three error samples. Feed the
//!     change to integrating actuators such as stepper or servo drives, or let the controller
//!     accumulate it into a full-scale command.
//!   - **Absolute**: the textbook position-form law with an explicit integral accumulator.
//!
//! - Output shaping for real actuators:
//!   - Configurable and fully validated gains, setpoint, and shaping parameters.
//!   - Anti reset-windup: bounded output and integral terms.
//!   - Dead-zone suppression of small-error jitter.
//!   - Sign-following output offset to overcome static friction.
//!
//! - Robustness:
//!   - Non-finite feedback is rejected with an error and never corrupts controller state.
//!   - Disabling a controller clears its history so re-enabling starts from a clean slate.
//!
//! ## Usage
//!
//! ### Functional PID Controller
//!
//! The functional PID controller lets you explicitly manage the state of the controller.
//!
//! In exchange, the controller holds no mutable state and the `compute` method is **functionally
//! pure**, making it exceptionally easy to test and validate, or to make thread-safe. If the PID
//! configuration is final, the controller itself can be non-`mut` as well.
//!
//! ```rust
//! use servo_pid::pid::{ControlLaw, FuncPidController, PidConfigBuilder, PidContext};
//!
//! let config = PidConfigBuilder::default()
//!     .kp(2.0)
//!     .ki(0.5)
//!     .target(10.0)
//!     .build()
//!     .expect("Invalid PID config");
//! let pid = FuncPidController::new(config);
//! let context = PidContext::new(ControlLaw::Absolute);
//!
//! // pid.config_mut().set_kp(2.0); // Can't do this
//! // You can make `pid` mutable to tune gains on-the-fly. The `compute` method remains pure
//!
//! let feedback = 4.0;
//!
//! let (output, updated_context) = pid.compute(context, feedback).expect("finite feedback");
//! assert_eq!(output, 2.0 * 6.0 + 0.5 * 6.0);
//! ```
//!
//! ### Stateful PID Controller
//!
//! The stateful PID controller manages a `PidContext` internally.
//!
//! Using the stateful PID controller saves some boilerplate at the cost of embedding mutable state
//! inside the controller: The `compute` method is not pure, and its output changes as the state of
//! the error history and integrator changes. The controller **must** be `mut`.
//!
//! ```rust
//! use servo_pid::pid::{ControlLaw, PidConfigBuilder, PidController};
//!
//! let config = PidConfigBuilder::default()
//!     .kp(0.8)
//!     .ki(0.1)
//!     .target(100.0)
//!     .law(ControlLaw::Incremental)
//!     .use_incremental_accumulation(true)
//!     .build()
//!     .expect("Invalid PID config");
//!
//! let mut pid = PidController::new(config);
//!
//! // Freely change the PID configuration, but take good care keeping track of your changes
//! assert!(pid.config_mut().set_ki(0.2).is_ok());
//!
//! let output = pid.compute(95.0).expect("finite feedback");
//! assert!(output > 0.0);
//! ```
//!
//! ## License
//!
#![no_std]

#[cfg(feature = "std")]
extern crate std;

/// The main module for the PID controller library.
pub mod pid;

#[doc(hidden)]
#[cfg(feature = "simulation")]
pub mod sim;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
