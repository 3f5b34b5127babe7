//! Recover a typed JSON value from model reply text.

use serde::de::DeserializeOwned;

use crate::error::LlmError;

/// Parse `raw` as `T`, tolerating a surrounding Markdown code fence.
///
/// Tries the text as-is first. On failure, trims it, strips a leading
/// ```` ```json ```` and a trailing ```` ``` ````, trims again and retries.
///
/// # Errors
///
/// Returns [`LlmError::ResponseParse`] with the diagnostic of the second
/// attempt if neither parses, including when the JSON is valid but does not
/// have the shape of `T`.
pub fn parse_json_reply<T: DeserializeOwned>(raw: &str) -> Result<T, LlmError> {
    let first = match serde_json::from_str(raw) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    let cleaned = strip_code_fence(raw);
    match serde_json::from_str(cleaned) {
        Ok(value) => {
            tracing::warn!(%first, "reply needed cleanup before it parsed as JSON");
            Ok(value)
        }
        Err(e) => Err(LlmError::ResponseParse {
            message: e.to_string(),
        }),
    }
}

/// Remove surrounding whitespace, a leading ```` ```json ```` and a trailing
/// ```` ``` ````.
#[must_use]
pub fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();
    let text = text.strip_prefix("```json").unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Plan {
        title: String,
    }

    #[rstest]
    #[case::plain(r#"{"title": "PAPP"}"#)]
    #[case::fenced("```json\n{\"title\": \"PAPP\"}\n```")]
    #[case::fenced_with_padding("  \n```json{\"title\": \"PAPP\"}```\n\n")]
    #[case::trailing_fence_only("{\"title\": \"PAPP\"}\n```")]
    fn recovers_object(#[case] raw: &str) {
        let plan: Plan = parse_json_reply(raw).unwrap();
        assert_eq!(
            plan,
            Plan {
                title: "PAPP".into()
            }
        );
    }

    #[rstest]
    #[case::truncated(r#"{"title": "PA"#)]
    #[case::bare_fence("```\n{\"title\": \"PAPP\"}\n```")]
    #[case::prose("Aqui está o seu plano!")]
    #[case::empty("")]
    #[case::wrong_shape(r#"{"name": "PAPP"}"#)]
    #[case::array(r#"[{"title": "PAPP"}]"#)]
    fn unrecoverable_reply_is_parse_error(#[case] raw: &str) {
        let err = parse_json_reply::<Plan>(raw).unwrap_err();
        assert!(matches!(err, LlmError::ResponseParse { .. }), "{err:?}");
    }

    #[test]
    fn strip_only_touches_the_edges() {
        assert_eq!(strip_code_fence(" ```json {\"a\": \"```\"} ``` "), "{\"a\": \"```\"}");
        assert_eq!(strip_code_fence("no fence"), "no fence");
    }
}
