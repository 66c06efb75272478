//! Runtime support for builders generated by `screen-starter-gen`.
//!
//! Generated `<Screen>Builder` types encode their fields into a [`Payload`],
//! hand it to a [`Context`] to navigate, and decode the [`Extras`] back into the
//! target [`Screen`] once it is running.

use std::any::Any;

mod extras;
mod finite;
mod payload;

pub use extras::{Extras, ExtrasError};
pub use payload::{LaunchFlags, Payload, ScreenTarget};

/// Anything that can start a screen.
pub trait Context {
  /// Starts the screen described by `payload`.
  fn start_screen(&self, payload: Payload, options: Option<&Extras>);

  /// Whether this context is itself a running screen.
  ///
  /// Payloads started from a non-screen context get [`LaunchFlags::NEW_TASK`].
  fn is_screen(&self) -> bool {
    false
  }
}

/// A navigable screen that generated builders can inject into.
///
/// Implementors should also override [`Context::is_screen`] to return `true`.
pub trait Screen: Context + Any {
  /// The payload the screen was last started or re-entered with.
  fn payload(&self) -> Option<&Payload>;

  fn set_payload(&mut self, payload: Option<Payload>);

  fn start_screen_for_result(&self, payload: Payload, request_code: i32, options: Option<&Extras>);

  fn as_any(&self) -> &dyn Any;

  fn as_any_mut(&mut self) -> &mut dyn Any;
}
