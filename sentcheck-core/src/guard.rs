//! Type guard for values of unknown type
//!
//! Only textual values reach the rules. The guard recognizes the standard
//! string types behind a `&dyn Any`, and string values inside a
//! `serde_json::Value`.

use serde_json::Value;
use std::any::Any;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// Borrow the text behind a dynamically typed value
///
/// Returns `None` unless the value is a `String`, `&'static str`,
/// `Box<str>`, `Cow<'static, str>`, `Rc<str>` or `Arc<str>`.
pub fn as_text(input: &dyn Any) -> Option<&str> {
    input
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| input.downcast_ref::<&'static str>().copied())
        .or_else(|| input.downcast_ref::<Box<str>>().map(|s| &**s))
        .or_else(|| input.downcast_ref::<Cow<'static, str>>().map(|s| &**s))
        .or_else(|| input.downcast_ref::<Rc<str>>().map(|s| &**s))
        .or_else(|| input.downcast_ref::<Arc<str>>().map(|s| &**s))
}

/// Borrow the text of a JSON string value
pub fn value_text(value: &Value) -> Option<&str> {
    value.as_str()
}
