// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{TypeUtilsError, TypeUtilsResult};

/// Copy every field of `src` whose name also exists in `dst` into `dst`. Fields of `dst`
/// that `src` doesn't have keep their values. Fields of `src` that `dst` doesn't have
/// are ignored.
///
/// Both records go through their [`serde`] representation, so field names are the
/// serialized names (`#[serde(rename = "..")]` applies). `dst` is only written once
/// the whole merge has succeeded.
///
/// ```
/// use r3bl_type_utils::copy_matching_fields;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize)]
/// struct Full { code: i32, ts: i64 }
///
/// #[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
/// struct Short { code: i32, note: String }
///
/// let mut short = Short { code: 0, note: "kept".into() };
/// copy_matching_fields(&Full { code: 7, ts: 1 }, &mut short).unwrap();
/// assert_eq!(short, Short { code: 7, note: "kept".into() });
/// ```
///
/// # Errors
///
/// [`TypeUtilsError::InvalidArgument`] when either side doesn't serialize to a map of
/// named fields, or when a copied value doesn't fit the type of the destination field.
pub fn copy_matching_fields<S, D>(src: &S, dst: &mut D) -> TypeUtilsResult<()>
where
    S: Serialize,
    D: Serialize + DeserializeOwned,
{
    let src_fields = to_fields(src, "source")?;
    let mut dst_fields = to_fields(dst, "destination")?;

    let mut copied = 0_usize;
    for (name, value) in src_fields {
        if let Some(slot) = dst_fields.get_mut(&name) {
            *slot = value;
            copied += 1;
        }
    }

    *dst = serde_json::from_value(Value::Object(dst_fields)).map_err(|err| {
        TypeUtilsError::invalid_argument(format!("destination rejected copied fields: {err}"))
    })?;

    tracing::trace!(copied, "copy_matching_fields");
    Ok(())
}

fn to_fields<T: Serialize>(record: &T, side: &str) -> TypeUtilsResult<Map<String, Value>> {
    match serde_json::to_value(record) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(TypeUtilsError::invalid_argument(format!(
            "{side} is not a record with named fields"
        ))),
        Err(err) => Err(TypeUtilsError::invalid_argument(format!(
            "{side} can't be serialized: {err}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::assert_eq2;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Rsp {
        code: i32,
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Rspt {
        code: i32,
        ts: i64,
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct TextCode {
        code: String,
        ts: i64,
    }

    #[test]
    fn test_copies_matching_and_skips_the_rest() {
        let mut rsp = Rsp::default();
        copy_matching_fields(&Rspt { code: 1, ts: 123 }, &mut rsp).unwrap();
        assert_eq2!(rsp, Rsp { code: 1 });

        let mut rspt = Rspt { code: 0, ts: 99 };
        copy_matching_fields(&rsp, &mut rspt).unwrap();
        assert_eq2!(rspt, Rspt { code: 1, ts: 99 });
    }

    #[test]
    fn test_type_mismatch_leaves_destination_alone() {
        let mut dst = TextCode {
            code: "x".into(),
            ts: 5,
        };
        let result = copy_matching_fields(&Rspt { code: 1, ts: 2 }, &mut dst);
        assert!(matches!(result, Err(TypeUtilsError::InvalidArgument { .. })));
        assert_eq2!(
            dst,
            TextCode {
                code: "x".into(),
                ts: 5
            }
        );
    }

    #[test]
    fn test_non_record_source_is_rejected() {
        let mut rsp = Rsp::default();
        let err = copy_matching_fields(&42, &mut rsp).unwrap_err();
        assert_eq2!(
            err,
            TypeUtilsError::invalid_argument("source is not a record with named fields")
        );

        let mut not_a_record = vec![1, 2];
        let err = copy_matching_fields(&rsp, &mut not_a_record).unwrap_err();
        assert_eq2!(
            err.to_string(),
            "invalid argument: destination is not a record with named fields"
        );
    }
}
