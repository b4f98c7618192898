use super::*;

#[test]
fn test_intrinsic_ids_round_trip_through_kind() {
    for kind in IntrinsicKind::ALL {
        let id = kind.type_id();
        assert!(id.is_intrinsic());
        assert_eq!(IntrinsicKind::from_type_id(id), Some(kind));
    }
    assert_eq!(IntrinsicKind::Int32.type_id(), TypeId::INT32);
    assert_eq!(IntrinsicKind::String.type_id(), TypeId::STRING);
    assert_eq!(IntrinsicKind::from_type_id(TypeId(TypeId::FIRST_INTERNED)), None);
}

#[test]
fn test_numeric_classification_excludes_char_and_bool() {
    assert!(IntrinsicKind::Byte.is_numeric());
    assert!(IntrinsicKind::Decimal.is_numeric());
    assert!(!IntrinsicKind::Char.is_numeric());
    assert!(!IntrinsicKind::Boolean.is_numeric());
    assert!(!IntrinsicKind::String.is_numeric());
}

#[test]
fn test_literal_types() {
    assert_eq!(literal_type(&Literal::Int32(1)), TypeId::INT32);
    assert_eq!(literal_type(&Literal::Double(1.5)), TypeId::DOUBLE);
    assert_eq!(literal_type(&Literal::String("a".into())), TypeId::STRING);
    assert_eq!(literal_type(&Literal::Decimal("2.5".into())), TypeId::DECIMAL);
    assert_eq!(literal_type(&Literal::Null), TypeId::OBJECT);
}

#[test]
fn test_member_builders() {
    let getter = MethodSignature::getter("Count", TypeId::INT32);
    assert_eq!(getter.name, "get_Count");
    assert_eq!(getter.arity(), 0);
    assert!(!getter.is_static);

    let parse = MethodSignature::new("Parse", &[TypeId::STRING], TypeId::INT32)
        .into_static()
        .with_visibility(Visibility::Internal);
    assert!(parse.is_static);
    assert_eq!(parse.visibility, Visibility::Internal);
    assert_eq!(parse.parameters.as_slice(), &[TypeId::STRING]);

    let field = FieldInfo::new("MaxValue", TypeId::INT32).into_static();
    assert!(field.is_static);
    assert_eq!(field.handle, MemberHandle::UNASSIGNED);
}
