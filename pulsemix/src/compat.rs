use crate::error::{PulseError, Result};

/// A value that is always present, paired with whether the call succeeded.
///
/// Used by the legacy-shaped mute queries, whose callers historically read the
/// boolean without checking for an error. `value` carries no meaning when
/// `status` is an error; prefer [`BestEffort::into_result`].
#[derive(Debug, Clone, PartialEq)]
pub struct BestEffort<T> {
  pub value: T,
  pub status: Result<()>,
}

impl<T> BestEffort<T> {
  pub fn ok(value: T) -> Self {
    Self { value, status: Ok(()) }
  }

  pub fn failed(value: T, err: PulseError) -> Self {
    Self { value, status: Err(err) }
  }

  pub fn is_ok(&self) -> bool {
    self.status.is_ok()
  }

  pub fn error(&self) -> Option<&PulseError> {
    self.status.as_ref().err()
  }

  pub fn into_result(self) -> Result<T> {
    self.status.map(|_| self.value)
  }
}
