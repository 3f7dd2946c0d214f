// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Nested-Path Kernels** - *erfc⁻¹ over JSON Records*
//!
//! Applies [`erfcinv`] to a value nested inside each record of a JSON array,
//! addressed by a separator-delimited key path such as `"x.y"`. The result
//! replaces the source value in place.
//!
//! JSON has no NaN or infinity, so a non-finite result (`erfc⁻¹(0)`,
//! `erfc⁻¹(2)`, or a missing/non-numeric source) is stored as `null`.
//! Missing intermediate objects are created on the way down.

use serde_json::{Map, Number, Value};
use tracing::trace;

use crate::config::DEFAULT_PATH_SEPARATOR;
use crate::errors::{log_domain, KernelError};
use crate::kernels::scientific::erfcinv::erfcinv;

/// Replaces the value at `path` in every record with its `erfc⁻¹`.
///
/// `sep` defaults to [`DEFAULT_PATH_SEPARATOR`]. Errors when the path has an
/// empty key, when a record or intermediate value is not an object, or when
/// a value lies outside `[0, 2]`. Records before the failing one have
/// already been updated.
pub fn erfcinv_at_path(
    records: &mut [Value],
    path: &str,
    sep: Option<char>,
) -> Result<(), KernelError> {
    let sep = sep.unwrap_or(DEFAULT_PATH_SEPARATOR);
    let keys: Vec<&str> = path.split(sep).collect();
    let empty_key = || {
        KernelError::InvalidArguments(format!(
            "erfcinv_at_path => path `{}` has an empty key (separator `{}`)",
            path, sep
        ))
    };
    if keys.iter().any(|k| k.is_empty()) {
        return Err(empty_key());
    }
    let (leaf, parents) = keys.split_last().ok_or_else(empty_key)?;
    trace!(records = records.len(), path, "erfcinv_at_path");

    for (i, rec) in records.iter_mut().enumerate() {
        let obj = parent_object(rec, parents, i, path)?;
        let z = match obj.get(*leaf).and_then(Value::as_f64) {
            Some(x) => erfcinv(x).map_err(|_| {
                KernelError::Domain(log_domain("erfcinv_at_path", Some(i), x))
            })?,
            None => f64::NAN,
        };
        let out = Number::from_f64(z).map_or(Value::Null, Value::Number);
        obj.insert((*leaf).to_string(), out);
    }
    Ok(())
}

/// Walks `parents` from `rec`, creating empty objects for absent keys.
fn parent_object<'a>(
    rec: &'a mut Value,
    parents: &[&str],
    idx: usize,
    path: &str,
) -> Result<&'a mut Map<String, Value>, KernelError> {
    let not_object = || {
        KernelError::InvalidArguments(format!(
            "erfcinv_at_path => record {} has a non-object on path `{}`",
            idx, path
        ))
    };
    let mut node = rec;
    for key in parents {
        let obj = node.as_object_mut().ok_or_else(not_object)?;
        node = obj
            .entry((*key).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    node.as_object_mut().ok_or_else(not_object)
}
