use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use nova_config::{ResolutionConfig, ResolverConfig};
use nova_types::ast::{ClassDecl, LocalVar, MethodCallExpr, NameExpr};
use nova_types::{Context, JavaSymbolSolver, PrimitiveType, ResolveError, ResolvedType, TypeSolver};
use pretty_assertions::assert_eq;
use tracing::{field::Visit, Event};
use tracing_subscriber::{layer::Context as LayerContext, prelude::*, Layer};

use super::support::{decl, project, qualified_names, reference, type_ref, unit};

#[derive(Debug, Clone)]
struct CapturedEvent {
    target: String,
    fields: HashMap<String, String>,
}

#[derive(Clone)]
struct CapturingLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S> Layer<S> for CapturingLayer
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: LayerContext<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events
            .lock()
            .expect("events mutex poisoned")
            .push(CapturedEvent {
                target: event.metadata().target().to_string(),
                fields: visitor.fields,
            });
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.fields.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields.insert(field.name().to_string(), value.to_string());
    }
}

fn orphan_solver() -> Arc<dyn TypeSolver> {
    Arc::new(project(vec![unit().with_type(
        ClassDecl::class("Orphan")
            .extending(type_ref("com.missing.Parent"))
            .implementing(type_ref("Runnable")),
    )]))
}

#[test]
fn ancestor_policy_comes_from_the_config() {
    let solver = orphan_solver();
    let orphan = reference(solver.as_ref(), "Orphan");

    let strict = JavaSymbolSolver::from_config(solver.clone(), &ResolverConfig::default());
    assert!(!strict.config().accept_incomplete_ancestors);
    assert_eq!(
        strict.all_ancestors(&orphan).unwrap_err(),
        ResolveError::InconsistentClasspath {
            ancestor: "com.missing.Parent".to_string(),
            declaration: "com.example.Orphan".to_string(),
        }
    );

    let config = ResolverConfig::from_toml_str("[resolution]\naccept_incomplete_ancestors = true\n").unwrap();
    let lenient = JavaSymbolSolver::from_config(solver, &config);
    assert_eq!(
        qualified_names(&lenient.all_ancestors(&orphan).unwrap()),
        vec!["java.lang.Runnable", "java.lang.Object"]
    );
}

#[test]
fn skipped_ancestors_are_logged() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(CapturingLayer {
        events: events.clone(),
    });
    let _guard = tracing::subscriber::set_default(subscriber);

    let solver = orphan_solver();
    let facade = JavaSymbolSolver::new(
        solver.clone(),
        ResolutionConfig {
            accept_incomplete_ancestors: true,
        },
    );
    facade.all_ancestors(&reference(solver.as_ref(), "Orphan")).unwrap();

    let events = events.lock().expect("events mutex poisoned");
    let skipped = events
        .iter()
        .find(|event| {
            event
                .fields
                .get("message")
                .is_some_and(|message| message.contains("skipping unresolvable ancestor"))
        })
        .expect("skip event");
    assert_eq!(skipped.target, "nova.types");
    assert_eq!(skipped.fields.get("ancestor").map(String::as_str), Some("com.missing.Parent"));
    assert_eq!(skipped.fields.get("declaration").map(String::as_str), Some("com.example.Orphan"));
}

#[test]
fn facade_delegates_to_the_solver() {
    let solver = orphan_solver();
    let facade = JavaSymbolSolver::new(solver.clone(), ResolutionConfig::default());
    let string = facade.solve_type("java.lang.String").unwrap();
    let string_type: ResolvedType = nova_types::ReferenceType::raw(string.clone()).unwrap().into();
    let object: ResolvedType = reference(solver.as_ref(), "Object").into();

    assert!(facade.is_assignable_by(&object, &string_type).unwrap());
    assert!(!facade.is_assignable_by(&string_type, &object).unwrap());
    assert!(facade.solve_type("com.missing.Parent").unwrap_err().is_unsolved());

    let value_of = facade
        .solve_method(&string, "valueOf", &[PrimitiveType::Char.into()], true)
        .unwrap()
        .into_declaration()
        .unwrap();
    assert_eq!(value_of.signature(facade.type_solver()).unwrap(), "valueOf(char)");

    let runnable: ResolvedType = reference(solver.as_ref(), "Runnable").into();
    assert!(facade.is_functional_interface(&runnable).unwrap());
    assert_eq!(facade.functional_method(&runnable).unwrap().unwrap().name(), "run");
    assert!(!facade.is_functional_interface(&string_type).unwrap());

    let context = Context::for_declaration(&decl(solver.as_ref(), "com.example.Orphan"));
    let block = Context::block(context, &[LocalVar::new(type_ref("String"), "name")], facade.type_solver()).unwrap();
    let name = facade.resolve(&NameExpr::new("name"), &block).unwrap();
    assert_eq!(name.ty(facade.type_solver()).unwrap(), string_type);
    let length = facade
        .resolve(&MethodCallExpr::new(Some(string_type.clone()), "length", vec![]), &block)
        .unwrap();
    assert_eq!(length.return_type(), &ResolvedType::Primitive(PrimitiveType::Int));
    assert_eq!(facade.resolve(&type_ref("String[]"), &block).unwrap(), ResolvedType::array_of(string_type));
}
