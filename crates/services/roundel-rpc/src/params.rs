use serde_json::Value;

use crate::error::QueryError;

/// Reject a parameter list whose arity differs from the operation's
/// fixed schema. Validation happens here, at the boundary, before any
/// business logic runs.
pub fn expect_arity(params: &[Value], expected: usize) -> Result<(), QueryError> {
    if params.len() != expected {
        return Err(QueryError::InvalidParams {
            expected,
            actual: params.len(),
        });
    }
    Ok(())
}

/// Render an untyped RPC parameter as text. Strings pass through
/// unquoted; any other JSON value uses its literal rendering.
pub fn param_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Decode a round number parameter as a non-negative 64-bit integer.
pub fn parse_round_number(text: &str) -> Result<u64, QueryError> {
    text.parse::<u64>()
        .map_err(|_| QueryError::MalformedNumber(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn arity_mismatch_is_invalid_params() {
        let params = vec![json!("a")];
        let err = expect_arity(&params, 2).unwrap_err();
        assert!(matches!(
            err,
            QueryError::InvalidParams {
                expected: 2,
                actual: 1
            }
        ));
        assert!(expect_arity(&params, 1).is_ok());
    }

    #[test]
    fn strings_pass_through_unquoted() {
        assert_eq!(param_text(&json!("abc")), "abc");
        assert_eq!(param_text(&json!(7)), "7");
        assert_eq!(param_text(&json!(null)), "null");
    }

    #[test]
    fn round_numbers_must_be_non_negative_integers() {
        assert_eq!(parse_round_number("7").unwrap(), 7);
        assert_eq!(parse_round_number("0").unwrap(), 0);
        assert!(matches!(
            parse_round_number("-1"),
            Err(QueryError::MalformedNumber(_))
        ));
        assert!(matches!(
            parse_round_number("seven"),
            Err(QueryError::MalformedNumber(_))
        ));
        assert!(matches!(
            parse_round_number("18446744073709551616"),
            Err(QueryError::MalformedNumber(_))
        ));
    }
}
