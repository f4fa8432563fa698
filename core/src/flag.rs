//! Splitting of command-line arguments into flag name and value.

/// One command-line argument split on its first `=`.
///
/// `value` is `None` for a bare `--flag` and `Some("")` for `--flag=`.
///
/// # Examples
///
/// ```
/// use omg_protoc_core::FlagArg;
///
/// let arg = FlagArg::parse("--gogo_out=plugins=grpc:.");
/// assert_eq!(arg.name, "--gogo_out");
/// assert_eq!(arg.value.as_deref(), Some("plugins=grpc:."));
///
/// let bare = FlagArg::parse("--go_out");
/// assert!(bare.value.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagArg {
    pub name: String,
    pub value: Option<String>,
}

impl FlagArg {
    pub fn parse(arg: &str) -> Self {
        match arg.split_once('=') {
            Some((name, value)) => Self {
                name: name.to_string(),
                value: Some(value.to_string()),
            },
            None => Self {
                name: arg.to_string(),
                value: None,
            },
        }
    }

    /// Returns the plugin stem of an output flag (`gogo` for `--gogo_out`).
    ///
    /// Anything that is not `--<stem>_out` with a non-empty stem yields
    /// `None` and is passed through to the compiler untouched.
    pub fn output_stem(&self) -> Option<&str> {
        self.name
            .strip_prefix("--")
            .and_then(|rest| rest.strip_suffix("_out"))
            .filter(|stem| !stem.is_empty())
    }

    /// Renders the flag back to a single argument with a replacement value.
    pub fn with_value(&self, value: &str) -> String {
        format!("{}={value}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_first_equals_only() {
        let arg = FlagArg::parse("--gogo_out=Mfoo.proto=bar:./out");
        assert_eq!(arg.name, "--gogo_out");
        assert_eq!(arg.value.as_deref(), Some("Mfoo.proto=bar:./out"));
    }

    #[test]
    fn test_parse_empty_value_is_present() {
        let arg = FlagArg::parse("--gogo_out=");
        assert_eq!(arg.value.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_plain_argument() {
        let arg = FlagArg::parse("a.proto");
        assert_eq!(arg.name, "a.proto");
        assert!(arg.value.is_none());
        assert!(arg.output_stem().is_none());
    }

    #[test]
    fn test_output_stem_detection() {
        assert_eq!(FlagArg::parse("--gogofaster_out=.").output_stem(), Some("gogofaster"));
        assert_eq!(FlagArg::parse("--go_out").output_stem(), Some("go"));
        assert_eq!(FlagArg::parse("-go_out=.").output_stem(), None);
        assert_eq!(FlagArg::parse("--go_output=.").output_stem(), None);
        assert_eq!(FlagArg::parse("--_out=.").output_stem(), None);
        assert_eq!(FlagArg::parse("--proto_path=x_out").output_stem(), None);
    }

    #[test]
    fn test_with_value_keeps_name() {
        let arg = FlagArg::parse("--go_out=.");
        assert_eq!(arg.with_value("X:."), "--go_out=X:.");
    }
}
