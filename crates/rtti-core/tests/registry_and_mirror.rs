// Registry lookups, stateless queries, and access-checked mirror reads
// exercised against a small fixture type.

use pretty_assertions::assert_eq;
use rtti_core::{
    AccessPolicy, Annotation, ConstructorInfo, Error, FieldInfo, Mirror, Modifiers, ParamInfo,
    Reflect, TypeId, TypeInfo, TypeQueries, TypeRef, TypeRegistry, Value,
};
use std::sync::Arc;

struct Widget {
    label: String,
    visible: bool,
}

impl Reflect for Widget {
    fn type_info() -> TypeInfo {
        TypeInfo {
            id: TypeId::new(),
            name: "Widget".to_string(),
            qualified_name: format!("{}::Widget", module_path!()),
            superclass: None,
            interfaces: Vec::new(),
            constructors: vec![ConstructorInfo {
                name: "new".to_string(),
                modifiers: Modifiers::public_static(),
                params: vec![ParamInfo::new("label", TypeRef::of::<String>())],
            }],
            methods: Vec::new(),
            fields: vec![
                FieldInfo {
                    name: "label".to_string(),
                    ty: TypeRef::of::<String>(),
                    modifiers: Modifiers::private(),
                    annotations: vec![Annotation::new("Deprecated")],
                },
                FieldInfo {
                    name: "visible".to_string(),
                    ty: TypeRef::of::<bool>(),
                    modifiers: Modifiers::public(),
                    annotations: Vec::new(),
                },
            ],
        }
    }

    fn type_name(&self) -> &'static str {
        "Widget"
    }

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "label" => Some(Value::Str(self.label.clone())),
            "visible" => Some(Value::Bool(self.visible)),
            _ => None,
        }
    }
}

fn registry() -> Arc<TypeRegistry> {
    let registry = TypeRegistry::new();
    registry.register::<Widget>();
    Arc::new(registry)
}

#[test]
fn lookup_by_simple_and_qualified_name() {
    let registry = registry();
    let by_simple = registry.type_by_name("Widget").unwrap();
    let by_qualified = registry
        .type_by_name(&format!("{}::Widget", module_path!()))
        .unwrap();
    assert_eq!(by_simple.id, by_qualified.id);
    assert_eq!(by_simple.name, "Widget");
}

#[test]
fn unknown_name_is_an_error() {
    let registry = registry();
    let err = registry.type_by_name("Gadget").unwrap_err();
    assert!(matches!(err, Error::TypeNotFound(name) if name == "Gadget"));
}

#[test]
fn queries_agree_with_the_declared_table() {
    let queries = TypeQueries::new(registry());
    assert!(queries.has_field("Widget", "label").unwrap());
    assert!(!queries.has_field("Widget", "size").unwrap());
    assert_eq!(queries.field_count("Widget").unwrap(), 2);
    assert_eq!(queries.method_count("Widget").unwrap(), 0);
    assert_eq!(
        queries.reflect_fields("Widget").unwrap(),
        vec![
            ("label".to_string(), "String".to_string()),
            ("visible".to_string(), "bool".to_string()),
        ]
    );
    assert_eq!(queries.field_type("Widget", "visible").unwrap().simple, "bool");
    assert!(matches!(
        queries.field_type("Widget", "size"),
        Err(Error::FieldNotFound { .. })
    ));
    assert!(matches!(
        queries.field_count("Gadget"),
        Err(Error::TypeNotFound(_))
    ));
    assert_eq!(queries.superclass_of("Widget").unwrap(), None);
    assert_eq!(queries.interfaces_of("Widget").unwrap(), Vec::new());
}

#[test]
fn registry_enumerates_registered_types() {
    let registry = registry();
    assert!(registry.contains("Widget"));
    assert!(registry.contains(&format!("{}::Widget", module_path!())));
    assert!(!registry.contains("Gadget"));

    let types = registry.list_types();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].1, "Widget");
    assert_eq!(registry.get_type_info(types[0].0).unwrap().name, "Widget");
}

#[test]
fn private_field_requires_the_override() {
    let registry = registry();
    let widget = Widget {
        label: "ok".to_string(),
        visible: true,
    };
    let mirror = Mirror::of(&widget, &registry).unwrap();

    let unprivileged = mirror.field("label").unwrap();
    assert!(matches!(unprivileged.get(), Err(Error::AccessDenied { .. })));

    let mut privileged = mirror.field("label").unwrap();
    privileged.set_accessible(true).unwrap();
    assert_eq!(privileged.get().unwrap(), Value::Str("ok".to_string()));

    // Public fields read without any override.
    let visible = mirror.field("visible").unwrap();
    assert_eq!(visible.get().unwrap(), Value::Bool(true));
}

#[test]
fn restricted_policy_refuses_the_override() {
    let registry = TypeRegistry::with_policy(AccessPolicy::Restricted);
    registry.register::<Widget>();
    let widget = Widget {
        label: "ok".to_string(),
        visible: false,
    };
    let mirror = Mirror::of(&widget, &registry).unwrap();

    let mut field = mirror.field("label").unwrap();
    let err = field.set_accessible(true).unwrap_err();
    assert!(matches!(err, Error::AccessDenied { .. }));
    // The refusal leaves the field unprivileged.
    assert!(matches!(field.get(), Err(Error::AccessDenied { .. })));
}

#[test]
fn undeclared_field_is_an_error() {
    let registry = registry();
    let widget = Widget {
        label: String::new(),
        visible: false,
    };
    let mirror = Mirror::of(&widget, &registry).unwrap();
    assert!(matches!(
        mirror.field("size"),
        Err(Error::FieldNotFound { .. })
    ));
}
