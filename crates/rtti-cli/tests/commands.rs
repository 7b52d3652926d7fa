// Error surfacing through the command layer.

use miette::Diagnostic;
use rtti_cli::commands::{list_command, report_command, ReportArgs};
use rtti_cli::CliError;

#[test]
fn report_on_unknown_type_surfaces_type_not_found() {
    let err = report_command(ReportArgs {
        type_name: "Cat".to_string(),
        section: None,
    })
    .unwrap_err();
    match err {
        CliError::Introspection(rtti_core::Error::TypeNotFound(name)) => {
            assert_eq!(name, "Cat");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn cli_errors_render_as_miette_diagnostics() {
    let err = report_command(ReportArgs {
        type_name: "Cat".to_string(),
        section: None,
    })
    .unwrap_err();
    assert_eq!(
        err.code().expect("diagnostic code").to_string(),
        "rtti::introspection_error"
    );
    let rendered = format!("{:?}", miette::Report::new(err));
    assert!(rendered.contains("no type named `Cat` is registered"));
}

#[test]
fn list_command_completes() {
    assert!(list_command().is_ok());
}

#[test]
fn descriptor_dump_is_valid_json() {
    let registry = rtti_demo::demo::registry();
    let info = registry.type_by_name("Dog").unwrap();
    let json = serde_json::to_string_pretty(&info).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["name"], "Dog");
    assert_eq!(parsed["superclass"]["simple"], "Animal");
}
