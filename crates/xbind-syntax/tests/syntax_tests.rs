use xbind_syntax::{Literal, OperatorToken, SyntaxNode};

#[test]
fn display_renders_nested_expression() {
    let node = SyntaxNode::binary(
        OperatorToken::Plus,
        SyntaxNode::call(
            SyntaxNode::member(SyntaxNode::ident("list"), "Get"),
            vec![SyntaxNode::constant(Literal::Int32(0))],
        ),
        SyntaxNode::index(
            SyntaxNode::ident("grid"),
            vec![SyntaxNode::ident("i"), SyntaxNode::ident("j")],
        ),
    );
    assert_eq!(node.to_string(), "(list.Get(0) + grid[i, j])");
}

#[test]
fn display_renders_cast_with_rank() {
    let node = SyntaxNode::cast(SyntaxNode::ident("values"), "int", 2);
    assert_eq!(node.to_string(), "cast(values, int[,])");
    let node = SyntaxNode::unary(OperatorToken::Exclamation, SyntaxNode::ident("done"));
    assert_eq!(node.to_string(), "!done");
}

#[test]
fn literal_display_marks_suffixes() {
    assert_eq!(Literal::Int64(5).to_string(), "5L");
    assert_eq!(Literal::Decimal("1.25".to_string()).to_string(), "1.25m");
    assert_eq!(Literal::String("a\"b".to_string()).to_string(), "\"a\\\"b\"");
    assert_eq!(Literal::Null.to_string(), "null");
}

#[test]
fn kind_names_follow_ast_vocabulary() {
    assert_eq!(SyntaxNode::ident("x").kind_name(), "IdentifierAccess");
    assert_eq!(
        SyntaxNode::binary(
            OperatorToken::Minus,
            SyntaxNode::ident("a"),
            SyntaxNode::ident("b")
        )
        .kind_name(),
        "BinaryOp"
    );
}

#[test]
fn deserializes_tagged_json_tree() {
    let json = r#"{
        "kind": "binary",
        "operator": "+",
        "left": { "kind": "identifier", "name": "x" },
        "right": { "kind": "constant", "value": { "type": "int32", "value": 1 } }
    }"#;
    let node: SyntaxNode = serde_json::from_str(json).expect("valid tree");
    assert_eq!(
        node,
        SyntaxNode::binary(
            OperatorToken::Plus,
            SyntaxNode::ident("x"),
            SyntaxNode::constant(Literal::Int32(1)),
        )
    );
}

#[test]
fn deserializes_defaults_for_optional_fields() {
    let json = r#"{
        "kind": "method_call",
        "target": { "kind": "identifier", "name": "Now" }
    }"#;
    let node: SyntaxNode = serde_json::from_str(json).expect("valid tree");
    assert_eq!(node, SyntaxNode::call(SyntaxNode::ident("Now"), vec![]));

    let json = r#"{
        "kind": "cast",
        "operand": { "kind": "constant", "value": { "type": "null" } },
        "type_name": "string"
    }"#;
    let node: SyntaxNode = serde_json::from_str(json).expect("valid tree");
    assert_eq!(
        node,
        SyntaxNode::cast(SyntaxNode::constant(Literal::Null), "string", 0)
    );
}
