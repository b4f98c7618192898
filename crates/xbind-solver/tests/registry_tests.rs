use super::*;
use crate::TypeInterner;
use crate::metadata::VisibilityFilter;
use crate::types::Visibility;

fn order_type() -> HostTypeInfo {
    HostTypeInfo::new("Acme.Sales.Order")
        .with_method(MethodSignature::getter("Total", TypeId::DECIMAL))
        .with_method(MethodSignature::new("Discount", &[TypeId::DOUBLE], TypeId::DECIMAL))
        .with_method(
            MethodSignature::new("Create", &[TypeId::STRING], TypeId::OBJECT).into_static(),
        )
        .with_method(
            MethodSignature::new("Audit", &[], TypeId::VOID).with_visibility(Visibility::Private),
        )
        .with_field(FieldInfo::new("Id", TypeId::INT64))
        .with_field(FieldInfo::new("MaxLines", TypeId::INT32).into_static())
        .with_default_member("Line")
}

#[test]
fn test_register_assigns_distinct_handles() {
    let interner = TypeInterner::new();
    let registry = HostTypeRegistry::new();
    let ty = registry.register(&interner, order_type());

    assert!(registry.contains(ty));
    assert_eq!(registry.len(), 1);
    assert_eq!(interner.type_name(ty), "Acme.Sales.Order");

    let info = registry.get(ty).expect("registered");
    let mut handles: Vec<_> = info
        .methods
        .iter()
        .map(|m| m.handle)
        .chain(info.fields.iter().map(|f| f.handle))
        .collect();
    assert!(handles.iter().all(|h| *h != MemberHandle::UNASSIGNED));
    handles.sort_by_key(|h| h.0);
    handles.dedup();
    assert_eq!(handles.len(), 6);
}

#[test]
fn test_registries_number_handles_independently() {
    let interner = TypeInterner::new();
    let first = HostTypeRegistry::new();
    let second = HostTypeRegistry::new();
    let ty = first.register(&interner, order_type());
    let same = second.register(&interner, order_type());
    assert_eq!(ty, same);

    let handles = |registry: &HostTypeRegistry| {
        let info = registry.get(ty).expect("registered");
        info.methods.iter().map(|m| m.handle).collect::<Vec<_>>()
    };
    assert_eq!(handles(&first), handles(&second));
}

#[test]
fn test_member_filter_separates_static_and_instance() {
    let interner = TypeInterner::new();
    let registry = HostTypeRegistry::new();
    let ty = registry.register(&interner, order_type());

    let instance: Vec<_> = registry
        .methods(ty, MemberFilter::public(false))
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(instance, vec!["get_Total", "Discount"]);

    let statics: Vec<_> = registry
        .methods(ty, MemberFilter::public(true))
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(statics, vec!["Create"]);

    let fields: Vec<_> = registry
        .fields(ty, MemberFilter::public(true))
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(fields, vec!["MaxLines"]);
}

#[test]
fn test_visibility_filter_admits_requested_set() {
    let interner = TypeInterner::new();
    let registry = HostTypeRegistry::new();
    let ty = registry.register(&interner, order_type());

    let filter = MemberFilter {
        is_static: false,
        visibility: VisibilityFilter::PUBLIC | VisibilityFilter::PRIVATE,
    };
    let names: Vec<_> = registry
        .methods(ty, filter)
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["get_Total", "Discount", "Audit"]);
}

#[test]
fn test_default_members() {
    let interner = TypeInterner::new();
    let registry = HostTypeRegistry::new();
    let order = registry.register(&interner, order_type());
    assert_eq!(registry.default_indexer_name(order).as_deref(), Some("Line"));

    let table = registry.register(
        &interner,
        HostTypeInfo::new("Acme.Table")
            .with_default_member("Row")
            .with_default_member("Cell"),
    );
    assert_eq!(registry.default_member_names(table).len(), 2);
    assert_eq!(registry.default_indexer_name(table), None);
    assert_eq!(registry.default_indexer_name(TypeId::STRING), None);
}

#[test]
fn test_unknown_type_has_no_members() {
    let registry = HostTypeRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.methods(TypeId::INT32, MemberFilter::public(false)).is_empty());
    assert!(registry.fields(TypeId::INT32, MemberFilter::public(true)).is_empty());
}

#[test]
fn test_simple_name() {
    assert_eq!(HostTypeInfo::new("Acme.Sales.Order").simple_name(), "Order");
    assert_eq!(HostTypeInfo::new("Order").simple_name(), "Order");
}
