use crate::uservalidator::Anchoring;

/// Internal field matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
  /// Returns whether the given field value matches `pattern`. With
  /// [`Anchoring::Full`] the whole value must be consumed, with
  /// [`Anchoring::Start`] a match beginning at the first character is enough.
  fn match_field(&self, value: &str, pattern: &'static str, anchoring: Anchoring) -> bool;
}
