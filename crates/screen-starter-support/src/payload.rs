use std::{
  any::{TypeId, type_name},
  fmt::{Display, Formatter},
  ops::{BitOr, BitOrAssign},
};

use serde::Serialize;

use crate::{Extras, ExtrasError, Screen};

/// Flags applied to a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LaunchFlags(u32);

impl LaunchFlags {
  pub const NONE: Self = Self(0);
  /// Start the screen in a new task; required when the caller is not a screen.
  pub const NEW_TASK: Self = Self(1 << 0);
  pub const CLEAR_TOP: Self = Self(1 << 1);
  pub const SINGLE_TOP: Self = Self(1 << 2);

  #[must_use]
  pub const fn bits(self) -> u32 {
    self.0
  }

  #[must_use]
  pub const fn contains(self, other: Self) -> bool {
    self.0 & other.0 == other.0
  }

  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }
}

impl BitOr for LaunchFlags {
  type Output = Self;

  fn bitor(self, rhs: Self) -> Self {
    Self(self.0 | rhs.0)
  }
}

impl BitOrAssign for LaunchFlags {
  fn bitor_assign(&mut self, rhs: Self) {
    self.0 |= rhs.0;
  }
}

/// Identity of the screen a payload navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenTarget {
  type_id: TypeId,
  type_name: &'static str,
}

impl ScreenTarget {
  #[must_use]
  pub fn of<S: Screen>() -> Self {
    Self {
      type_id: TypeId::of::<S>(),
      type_name: type_name::<S>(),
    }
  }

  #[must_use]
  pub fn is<S: Screen>(&self) -> bool {
    self.type_id == TypeId::of::<S>()
  }

  #[must_use]
  pub const fn type_name(&self) -> &'static str {
    self.type_name
  }
}

impl Display for ScreenTarget {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.type_name)
  }
}

/// A navigation request: the target screen plus the extras it is started with.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
  target: ScreenTarget,
  extras: Extras,
  flags: LaunchFlags,
}

impl Payload {
  #[must_use]
  pub fn for_screen<S: Screen>() -> Self {
    Self {
      target: ScreenTarget::of::<S>(),
      extras: Extras::new(),
      flags: LaunchFlags::NONE,
    }
  }

  #[must_use]
  pub const fn target(&self) -> ScreenTarget {
    self.target
  }

  #[must_use]
  pub fn targets<S: Screen>(&self) -> bool {
    self.target.is::<S>()
  }

  pub fn put_extra<T>(&mut self, key: &str, value: &T) -> Result<(), ExtrasError>
  where
    T: Serialize + ?Sized,
  {
    self.extras.put(key, value)
  }

  #[must_use]
  pub const fn extras(&self) -> &Extras {
    &self.extras
  }

  pub fn extras_mut(&mut self) -> &mut Extras {
    &mut self.extras
  }

  #[must_use]
  pub fn into_extras(self) -> Extras {
    self.extras
  }

  #[must_use]
  pub const fn flags(&self) -> LaunchFlags {
    self.flags
  }

  pub fn add_flags(&mut self, flags: LaunchFlags) {
    self.flags |= flags;
  }
}
