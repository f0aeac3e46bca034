//! URL decoding helper.

/// Percent-decodes a string, returning the input unchanged if it is not
/// valid percent-encoding.
pub fn url_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_percent_sequences() {
        assert_eq!(url_decode("Tokyo%2001"), "Tokyo 01");
        assert_eq!(url_decode("plain"), "plain");
    }

    #[test]
    fn test_decode_invalid_sequence_is_passthrough() {
        assert_eq!(url_decode("bad%zz"), "bad%zz");
    }
}
