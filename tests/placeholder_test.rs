use litdoc::error::Error;
use litdoc::parameters::ParameterSet;
use litdoc::placeholder::{replace_placeholders, substitute};

fn params(pairs: &[(&str, &str)]) -> ParameterSet {
    pairs.iter().copied().collect()
}

#[test]
fn test_replaces_every_occurrence() {
    let p = params(&[("title", "Guide"), ("document", "<p>body</p>")]);
    let result = replace_placeholders("<h1>{title}</h1>{document}<footer>{title}</footer>", &p);
    assert_eq!(result, "<h1>Guide</h1><p>body</p><footer>Guide</footer>");
}

#[test]
fn test_values_are_not_resubstituted() {
    let p = params(&[("a", "{b}"), ("b", "X")]);
    assert_eq!(replace_placeholders("{a}", &p), "{b}");

    // Same result whichever pair comes first.
    let p = params(&[("b", "X"), ("a", "{b}")]);
    assert_eq!(replace_placeholders("{a}", &p), "{b}");

    let p = params(&[("a", "{a}")]);
    assert_eq!(replace_placeholders("{a}{a}", &p), "{a}{a}");
}

#[test]
fn test_template_without_known_placeholders_is_unchanged() {
    let template = "plain text with {unknown} and {{ jinja }}";
    let p = params(&[("title", "Guide"), ("document", "body")]);
    assert_eq!(replace_placeholders(template, &p), template);
    assert_eq!(replace_placeholders(template, &ParameterSet::new()), template);
}

#[test]
fn test_unknown_placeholder_is_left_verbatim() {
    let p = params(&[("title", "Guide")]);
    assert_eq!(replace_placeholders("{title} - {missing}", &p), "Guide - {missing}");
}

#[test]
fn test_names_sharing_a_prefix() {
    let p = params(&[("page", "1"), ("page-title", "Intro")]);
    assert_eq!(replace_placeholders("{page}:{page-title}", &p), "1:Intro");
}

#[test]
fn test_substitution_is_stable_when_values_hold_no_placeholders() {
    let p = params(&[("title", "Guide"), ("document", "body")]);
    let once = replace_placeholders("{title}\n{document}\n{other}", &p);
    let twice = replace_placeholders(&once, &p);
    assert_eq!(once, twice);
}

#[test]
fn test_no_template_joins_content_and_tooltips() {
    let p = params(&[("content", "BODY"), ("tooltips", "TIPS")]);
    assert_eq!(substitute(None, "content", &p).unwrap(), "BODY\n\nTIPS");
}

#[test]
fn test_no_template_requires_tooltips() {
    let p = params(&[("content", "BODY")]);
    match substitute(None, "content", &p) {
        Err(Error::MissingParameter { name }) => assert_eq!(name, "tooltips"),
        other => panic!("Expected MissingParameter, got {other:?}"),
    }
}

#[test]
fn test_no_template_requires_content_tag() {
    let p = params(&[("tooltips", "TIPS")]);
    match substitute(None, "document", &p) {
        Err(Error::MissingParameter { name }) => assert_eq!(name, "document"),
        other => panic!("Expected MissingParameter, got {other:?}"),
    }
}

#[test]
fn test_template_mode_ignores_content_tag() {
    let p = params(&[("title", "Guide")]);
    assert_eq!(substitute(Some("# {title}"), "document", &p).unwrap(), "# Guide");
}
