/// Delimiter names and encoder option validation.
use codeindex_toon::{Delimiter, EncodeOptions, ToonError};

#[test]
fn delimiter_names_parse() {
    assert_eq!("comma".parse::<Delimiter>().unwrap(), Delimiter::Comma);
    assert_eq!("tab".parse::<Delimiter>().unwrap(), Delimiter::Tab);
    assert_eq!("pipe".parse::<Delimiter>().unwrap(), Delimiter::Pipe);
}

#[test]
fn delimiter_characters_parse() {
    assert_eq!(",".parse::<Delimiter>().unwrap(), Delimiter::Comma);
    assert_eq!("\t".parse::<Delimiter>().unwrap(), Delimiter::Tab);
    assert_eq!("|".parse::<Delimiter>().unwrap(), Delimiter::Pipe);
}

#[test]
fn unknown_delimiter_is_rejected() {
    for name in ["semicolon", ";", "", "Comma", " pipe"] {
        let err = name.parse::<Delimiter>().unwrap_err();
        assert!(
            matches!(&err, ToonError::UnknownDelimiter(got) if got == name),
            "{:?} gave {:?}",
            name,
            err
        );
    }
    assert_eq!(
        "semicolon".parse::<Delimiter>().unwrap_err().to_string(),
        "unknown delimiter 'semicolon': expected comma, tab or pipe"
    );
}

#[test]
fn delimiter_markers() {
    assert_eq!(Delimiter::Comma.marker(), None);
    assert_eq!(Delimiter::Tab.marker(), Some('\t'));
    assert_eq!(Delimiter::Pipe.marker(), Some('|'));
}

#[test]
fn default_options() {
    let opts = EncodeOptions::default();
    assert_eq!(opts.indent(), 2);
    assert_eq!(opts.delimiter(), Delimiter::Comma);
}

#[test]
fn zero_indent_is_rejected() {
    let err = EncodeOptions::new().with_indent(0).unwrap_err();
    assert!(matches!(err, ToonError::InvalidIndent(0)));
}
