//! Host fixture shared by the resolution tests.
#![allow(dead_code)]

use xbind_binder::{BindError, BoundExpr, ResolutionContext, resolve};
use xbind_solver::{
    FieldInfo, HostEnvironment, HostTypeInfo, MethodSignature, TypeDatabase, TypeId, Visibility,
};
use xbind_syntax::{Literal, SyntaxNode};

pub struct Fixture {
    pub env: HostEnvironment,
    pub widget: TypeId,
    pub math: TypeId,
    pub grid: TypeId,
    pub bag: TypeId,
    pub multi: TypeId,
    pub ambiguous: TypeId,
    pub labels: TypeId,
}

impl Fixture {
    pub fn new() -> Self {
        init_tracing();
        let env = HostEnvironment::new();
        let widget_ty = env.interner().host("Acme.Widget");

        let widget = env.register_type(
            HostTypeInfo::new("Acme.Widget")
                .with_method(MethodSignature::new("Foo", &[], TypeId::STRING))
                .with_method(MethodSignature::getter("Name", TypeId::STRING))
                .with_method(MethodSignature::new("Scale", &[TypeId::INT32], TypeId::INT32))
                .with_method(MethodSignature::new("Scale", &[TypeId::DOUBLE], TypeId::DOUBLE))
                .with_method(
                    MethodSignature::new("Create", &[TypeId::INT32], widget_ty).into_static(),
                )
                .with_method(MethodSignature::getter("Default", widget_ty).into_static())
                .with_method(
                    MethodSignature::getter("Secret", TypeId::STRING)
                        .with_visibility(Visibility::Private),
                )
                .with_field(FieldInfo::new("Count", TypeId::INT32))
                .with_field(FieldInfo::new("Total", TypeId::INT64).into_static())
                .with_field(FieldInfo::new("hidden", TypeId::INT32).with_visibility(Visibility::Internal)),
        );

        let math = env.register_type(
            HostTypeInfo::new("Acme.Math")
                .with_method(
                    MethodSignature::new("Max", &[TypeId::INT32, TypeId::INT32], TypeId::INT32)
                        .into_static(),
                )
                .with_method(
                    MethodSignature::new("Max", &[TypeId::DOUBLE, TypeId::DOUBLE], TypeId::DOUBLE)
                        .into_static(),
                )
                .with_method(
                    MethodSignature::new("Abs", &[TypeId::DOUBLE], TypeId::DOUBLE).into_static(),
                )
                .with_method(
                    MethodSignature::new("Round", &[TypeId::DOUBLE], TypeId::INT64).into_static(),
                )
                .with_method(
                    MethodSignature::new("Round", &[TypeId::DECIMAL], TypeId::DECIMAL)
                        .into_static(),
                )
                .with_field(FieldInfo::new("Pi", TypeId::DOUBLE).into_static()),
        );

        let grid = env.register_type(
            HostTypeInfo::new("Acme.Grid")
                .with_default_member("Item")
                .with_method(MethodSignature::new(
                    "get_Item",
                    &[TypeId::INT32, TypeId::INT32],
                    TypeId::STRING,
                )),
        );

        let labels = env.register_type(
            HostTypeInfo::new("Acme.Labels")
                .with_default_member("Chars")
                .with_method(MethodSignature::getter("Length", TypeId::INT32)),
        );

        let bag = env.register_type(HostTypeInfo::new("Acme.Bag"));

        let multi = env.register_type(
            HostTypeInfo::new("Acme.Multi")
                .with_default_member("A")
                .with_default_member("B"),
        );

        let ambiguous = env.register_type(
            HostTypeInfo::new("Acme.Ambiguous")
                .with_method(MethodSignature::new("get_Value", &[], TypeId::INT32))
                .with_method(MethodSignature::new("get_Value", &[TypeId::INT32], TypeId::INT32))
                .with_field(FieldInfo::new("Value", TypeId::INT64)),
        );

        Self {
            env,
            widget,
            math,
            grid,
            bag,
            multi,
            ambiguous,
            labels,
        }
    }

    pub fn resolve(
        &self,
        ast: &SyntaxNode,
        ctx: &ResolutionContext,
    ) -> Result<BoundExpr, BindError> {
        resolve(ast, &self.env, ctx)
    }

    pub fn array(&self, element: TypeId, rank: u32) -> TypeId {
        self.env.interner().array(element, rank)
    }
}

/// Opt-in trace output for a test run, e.g. `XBIND_TEST_LOG=trace`.
pub fn init_tracing() {
    if let Ok(filter) = std::env::var("XBIND_TEST_LOG") {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
            .with_test_writer()
            .try_init();
    }
}

pub fn int(value: i32) -> SyntaxNode {
    SyntaxNode::constant(Literal::Int32(value))
}

pub fn double(value: f64) -> SyntaxNode {
    SyntaxNode::constant(Literal::Double(value))
}

pub fn string(value: &str) -> SyntaxNode {
    SyntaxNode::constant(Literal::String(value.to_string()))
}

pub fn boolean(value: bool) -> SyntaxNode {
    SyntaxNode::constant(Literal::Bool(value))
}

/// Name of the method a bound `MethodCall` selected.
pub fn called_method(expr: &BoundExpr) -> Option<&str> {
    match expr {
        BoundExpr::MethodCall { method, .. } => Some(method.name.as_str()),
        _ => None,
    }
}
