//! Lossless parsing over realistic and malformed sources.

use crate::helpers::source_fixtures::*;
use formsplit::parser::{AstNode, SourceFile, SyntaxKind, parse};
use rstest::rstest;

#[rstest]
#[case::form_without_regions(FORM_WITHOUT_REGIONS)]
#[case::form_with_regions(FORM_WITH_REGIONS)]
#[case::designer_region_only(FORM_WITH_DESIGNER_REGION_ONLY)]
#[case::control_part(CONTROL_PART)]
#[case::control_designer_part(CONTROL_DESIGNER_PART)]
#[case::non_controls(NON_CONTROLS)]
#[case::crlf("class A\r\n{\r\n    #region Component fields\r\n    int a;\r\n    #endregion\r\n}\r\n")]
#[case::unclosed_type("class A : Form\n{\n    void M() {\n")]
#[case::stray_tokens("}} ;; class ) A { int x = ; }")]
#[case::only_trivia("// nothing here\n/* or here */\n#if DEBUG\n#endif\n")]
#[case::strings_with_braces("class A { string s = \"{ not a block }\"; char c = '}'; string v = @\"a \"\"}\"\" b\"; }")]
fn test_parse_is_lossless(#[case] source: &str) {
    let parse = parse(source);
    assert_eq!(parse.syntax().text().to_string(), source);
}

#[test]
fn test_regions_attach_to_following_member() {
    let root = parse(FORM_WITH_DESIGNER_REGION_ONLY).syntax();
    let ty = SourceFile::cast(root).unwrap().all_types().next().unwrap();
    let members = ty.members();
    assert_eq!(members.len(), 2);

    let leading: Vec<_> = members[1]
        .leading_trivia()
        .iter()
        .map(|t| t.kind())
        .collect();
    assert!(leading.contains(&SyntaxKind::REGION_START));

    // The closing marker sits before `}` and stays in the body
    let body = ty.body().unwrap();
    assert!(
        body.syntax()
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .any(|t| t.kind() == SyntaxKind::REGION_END)
    );
}

#[test]
fn test_well_formed_sources_have_no_errors() {
    for source in [FORM_WITH_REGIONS, CONTROL_PART, NON_CONTROLS] {
        let parse = parse(source);
        assert!(parse.errors.is_empty(), "{:?}", parse.errors);
    }
}

#[test]
fn test_unclosed_body_reports_error() {
    let parse = parse("class A\n{\n    int a;\n");
    assert!(!parse.errors.is_empty());
}
