//! Sanitizer + tokenizer: the text end of the pipeline.
//!
//! Both accept anything viewable as bytes so raw file contents can be handed
//! over unchecked; input that is not UTF-8 text is rejected.

use std::str;

use crate::core::error::StatsError;

#[inline]
fn as_text<'a>(input: &'a [u8], message: &'static str) -> Result<&'a str, StatsError> {
    str::from_utf8(input).map_err(|source| StatsError::InvalidArgument { message, source })
}

/// Lowercase `text` for analysis. No trimming, no normalization.
pub fn sanitize(text: impl AsRef<[u8]>) -> Result<String, StatsError> {
    let text = as_text(text.as_ref(), "Only texts can be sanitized")?;
    Ok(text.to_lowercase())
}

/// Split `text` into its characters, in order.
pub fn get_chars(text: impl AsRef<[u8]>) -> Result<Vec<char>, StatsError> {
    let text = as_text(text.as_ref(), "text parameter must be a string")?;
    Ok(text.chars().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_lowercases() {
        assert_eq!(
            sanitize("HEY: ThIs Is hArD tO rEaD!").unwrap(),
            "hey: this is hard to read!"
        );
    }

    #[test]
    fn sanitize_keeps_whitespace() {
        assert_eq!(sanitize("  A\tB\n").unwrap(), "  a\tb\n");
    }

    #[test]
    fn sanitize_folds_non_ascii() {
        assert_eq!(sanitize("ÀÉÎ Ωmega").unwrap(), "àéî ωmega");
    }

    #[test]
    fn sanitize_rejects_non_text() {
        let err = sanitize([0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, StatsError::InvalidArgument { .. }));
        assert!(err.to_string().starts_with("Only texts can be sanitized"));
    }

    #[test]
    fn get_chars_of_empty_text() {
        assert!(get_chars("").unwrap().is_empty());
    }

    #[test]
    fn get_chars_in_order() {
        let expected = vec!['T', 'e', 's', 't', 'i', 'n', 'g', ' ', 'i', 'n', 'p', 'u', 't'];
        assert_eq!(get_chars("Testing input").unwrap(), expected);
    }

    #[test]
    fn get_chars_counts_scalar_values() {
        let chars = get_chars("añ日").unwrap();
        assert_eq!(chars, vec!['a', 'ñ', '日']);
    }

    #[test]
    fn get_chars_rejects_non_text() {
        let err = get_chars(vec![b'a', 0xc3]).unwrap_err();
        assert!(matches!(err, StatsError::InvalidArgument { .. }));
        assert!(err.to_string().starts_with("text parameter must be a string"));
    }
}
