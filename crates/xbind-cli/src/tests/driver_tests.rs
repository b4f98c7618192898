use super::*;
use xbind_binder::BindErrorKind;

const HOST: &str = r#"{
    "types": [
        {
            "name": "Acme.Widget",
            "methods": [
                { "name": "Foo", "returns": "string" },
                { "name": "get_Name", "returns": "string" }
            ]
        }
    ],
    "owner": "Acme.Widget",
    "identifiers": [{ "name": "x", "type": "int" }]
}"#;

fn host() -> HostDescription {
    HostDescription::parse(HOST).expect("valid host")
}

#[test]
fn binds_to_tree_text() {
    let expr = r#"{
        "kind": "binary",
        "operator": "+",
        "left": { "kind": "identifier", "name": "x" },
        "right": { "kind": "constant", "value": { "type": "int32", "value": 1 } }
    }"#;
    let output = bind_text(&host(), expr, None, OutputFormat::Tree).expect("binds");
    assert_eq!(
        output,
        "BinaryExpression + : int\n  VariableAccess slot 0 : int\n  Constant 1 : int"
    );
}

#[test]
fn binds_owner_call_to_json() {
    let expr = r#"{
        "kind": "method_call",
        "target": { "kind": "identifier", "name": "Foo" }
    }"#;
    let output = bind_text(&host(), expr, None, OutputFormat::Json).expect("binds");
    let json: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(json["type"], "string");
    assert_eq!(json["tree"]["kind"], "MethodCall");
    assert_eq!(json["tree"]["method"]["name"], "Foo");
    assert_eq!(json["tree"]["operand"]["kind"], "VariableAccess");
    assert_eq!(json["tree"]["operand"]["slot"], 0);
    let owner_id = json["tree"]["operand"]["ty"].as_u64().expect("type id") as usize;
    assert_eq!(json["types"][owner_id], "Acme.Widget");
}

#[test]
fn case_override_applies() {
    let expr = r#"{ "kind": "identifier", "name": "NAME" }"#;
    assert!(bind_text(&host(), expr, None, OutputFormat::Tree).is_err());
    let output = bind_text(
        &host(),
        expr,
        Some(CaseSensitivity::Insensitive),
        OutputFormat::Tree,
    )
    .expect("binds ignoring case");
    assert!(output.starts_with("MethodCall get_Name() : string"), "{output}");
}

#[test]
fn bind_errors_keep_their_kind() {
    let expr = r#"{ "kind": "identifier", "name": "y" }"#;
    let err = bind_text(&host(), expr, None, OutputFormat::Tree).expect_err("y is unknown");
    assert!(format!("{err:#}").contains("cannot bind `y`"));
    let bind_error = err
        .downcast_ref::<xbind_binder::BindError>()
        .expect("BindError source");
    assert_eq!(bind_error.kind(), BindErrorKind::UnresolvedReference);
}

#[test]
fn malformed_expression_json() {
    let err = bind_text(&host(), r#"{ "kind": "lambda" }"#, None, OutputFormat::Tree)
        .expect_err("unknown node kind");
    assert!(format!("{err:#}").contains("failed to parse expression JSON"));
}

#[test]
fn run_reads_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let host_path = dir.path().join("host.json");
    let expr_path = dir.path().join("expr.json");
    std::fs::write(&host_path, HOST).expect("write host");
    std::fs::write(
        &expr_path,
        r#"{ "kind": "cast", "operand": { "kind": "identifier", "name": "x" }, "type_name": "long" }"#,
    )
    .expect("write expr");

    let args = CliArgs {
        host: host_path,
        expr: expr_path,
        case_insensitive: false,
        format: OutputFormat::Tree,
    };
    let output = run(&args).expect("runs");
    assert_eq!(output, "Cast : long\n  VariableAccess slot 0 : int");
}
