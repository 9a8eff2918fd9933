use std::sync::Arc;

use nova_types::ast::{
    ClassDecl, CompilationUnit, FieldDecl, Import, LocalVar, MethodCallExpr, MethodDecl, Modifier,
    NameExpr, Param, TypeParam,
};
use nova_types::{
    CombinedTypeSolver, Context, MethodDeclaration, PrimitiveType, Resolvable, ResolveError,
    ResolvedType, Scope, SymbolReference, TypeDeclaration, TypeSolver, ValueDeclaration,
};
use pretty_assertions::assert_eq;

use super::support::{decl, project, ty, type_ref, unit};

fn outer_unit() -> CompilationUnit {
    unit()
        .with_import(Import::single("java.util.List"))
        .with_import(Import::on_demand("java.util.function"))
        .with_import(Import::static_single("java.lang.Integer.MAX_VALUE"))
        .with_import(Import::static_on_demand("java.util.Comparator"))
        .with_type(
            ClassDecl::class("Outer")
                .with_type_param(TypeParam::new("T"))
                .with_field(FieldDecl::new(type_ref("int"), "count"))
                .with_method(
                    MethodDecl::new(type_ref("M"), "pick")
                        .with_type_param(TypeParam::new("M"))
                        .with_param(Param::new(type_ref("T"), "first"))
                        .with_param(Param::new(type_ref("M"), "second")),
                )
                .with_method(
                    MethodDecl::new(type_ref("void"), "helper")
                        .with_param(Param::new(type_ref("String"), "text")),
                )
                .with_member(
                    ClassDecl::class("Inner")
                        .with_field(FieldDecl::new(type_ref("String"), "label"))
                        .with_method(MethodDecl::new(type_ref("void"), "run")),
                ),
        )
}

fn solver() -> CombinedTypeSolver {
    project(vec![
        outer_unit(),
        unit().with_type(
            ClassDecl::interface("Function")
                .with_method(MethodDecl::new(type_ref("void"), "call"))
                .with_modifiers(&[Modifier::Public]),
        ),
    ])
}

fn method(declaration: &TypeDeclaration, name: &str) -> MethodDeclaration {
    declaration
        .declared_methods()
        .unwrap()
        .into_iter()
        .find(|method| method.name() == name)
        .unwrap()
}

fn type_name(context: &Context, name: &str, solver: &dyn TypeSolver) -> Option<String> {
    match context.solve_type(name, solver).unwrap() {
        SymbolReference::Solved(found) => Some(found.qualified_name().to_string()),
        SymbolReference::Unsolved => None,
    }
}

#[test]
fn type_names_resolve_in_scope_order() {
    let solver = solver();
    let context = Context::for_declaration(&decl(&solver, "com.example.Outer"));
    let cases = [
        ("Function", Some("com.example.Function")),
        ("Supplier", Some("java.util.function.Supplier")),
        ("List", Some("java.util.List")),
        ("String", Some("java.lang.String")),
        ("Outer", Some("com.example.Outer")),
        ("Inner", Some("com.example.Outer.Inner")),
        ("Outer.Inner", Some("com.example.Outer.Inner")),
        ("java.util.Map.Entry", Some("java.util.Map.Entry")),
        ("Map", None),
        ("Map.Entry", None),
        ("Nope", None),
    ];
    for (name, expected) in cases {
        assert_eq!(type_name(&context, name, &solver).as_deref(), expected, "{name}");
    }
}

#[test]
fn unit_scope_has_no_implicit_fallback_past_itself() {
    let solver = solver();
    let context = Context::compilation_unit(Arc::new(outer_unit()));
    assert_eq!(type_name(&context, "Outer", &solver).as_deref(), Some("com.example.Outer"));
    assert_eq!(type_name(&context, "Object", &solver).as_deref(), Some("java.lang.Object"));
    assert_eq!(type_name(&context, "Inner", &solver), None);
    assert!(context.parent().is_none());
    assert!(matches!(context.scope(), Scope::CompilationUnit(_)));
}

#[test]
fn type_variables_come_from_methods_and_enclosing_classes() {
    let solver = solver();
    let outer = decl(&solver, "com.example.Outer");
    let pick = Context::for_method(&method(&outer, "pick"));

    let m = pick.solve_generic_type("M", &solver).unwrap().unwrap();
    assert_eq!(m.as_type_parameter().unwrap().qualified_signature(), "com.example.Outer.pick.M");
    let t = pick.solve_generic_type("T", &solver).unwrap().unwrap();
    assert_eq!(t.as_type_parameter().unwrap().qualified_signature(), "com.example.Outer.T");
    assert_eq!(pick.solve_generic_type("X", &solver).unwrap(), None);

    let inner = Context::for_declaration(&decl(&solver, "com.example.Outer.Inner"));
    assert!(inner.solve_generic_type("T", &solver).unwrap().is_some());
    assert_eq!(
        inner.resolve_type_ref(&type_ref("List<T>"), &solver).unwrap().describe(),
        "java.util.List<T>"
    );
}

#[test]
fn values_resolve_innermost_first() {
    let solver = solver();
    let outer = decl(&solver, "com.example.Outer");
    let pick = Context::for_method(&method(&outer, "pick"));

    let first = pick.solve_symbol("first", &solver).unwrap().into_declaration().unwrap();
    assert!(first.is_parameter());
    assert_eq!(first.ty(&solver).unwrap().describe(), "T");

    let field = pick.solve_symbol("count", &solver).unwrap().into_declaration().unwrap();
    assert!(field.is_field());
    assert_eq!(field.ty(&solver).unwrap(), ResolvedType::Primitive(PrimitiveType::Int));

    let block = Context::block(pick.clone(), &[LocalVar::new(type_ref("List<M>"), "count")], &solver).unwrap();
    let local = block.solve_symbol("count", &solver).unwrap().into_declaration().unwrap();
    assert!(local.is_local());
    assert_eq!(local.ty(&solver).unwrap().describe(), "java.util.List<M>");

    let nested = Context::block(
        block.clone(),
        &[
            LocalVar::new(type_ref("String"), "count"),
            LocalVar::new(type_ref("long"), "count"),
        ],
        &solver,
    )
    .unwrap();
    let shadowing = nested.solve_symbol("count", &solver).unwrap().into_declaration().unwrap();
    assert_eq!(shadowing.ty(&solver).unwrap(), ResolvedType::Primitive(PrimitiveType::Long));

    assert_eq!(pick.solve_symbol("label", &solver).unwrap(), SymbolReference::Unsolved);
}

#[test]
fn static_imports_and_enclosing_classes_provide_values() {
    let solver = solver();
    let inner = Context::for_declaration(&decl(&solver, "com.example.Outer.Inner"));

    let label = inner.solve_symbol("label", &solver).unwrap().into_declaration().unwrap();
    assert_eq!(label.name(), "label");
    let count = inner.solve_symbol("count", &solver).unwrap().into_declaration().unwrap();
    let ValueDeclaration::Field(count) = count else {
        panic!("expected a field");
    };
    assert_eq!(count.declaring_type().qualified_name(), "com.example.Outer");

    let max = inner.solve_symbol("MAX_VALUE", &solver).unwrap().into_declaration().unwrap();
    let ValueDeclaration::Field(max) = max else {
        panic!("expected a field");
    };
    assert!(max.is_static());
    assert_eq!(max.declaring_type().qualified_name(), "java.lang.Integer");

    assert_eq!(inner.solve_symbol("MIN_VALUE", &solver).unwrap(), SymbolReference::Unsolved);
}

#[test]
fn unqualified_calls_search_enclosing_classes_then_static_imports() {
    let solver = solver();
    let inner = Context::for_declaration(&decl(&solver, "com.example.Outer.Inner"));

    let helper = inner
        .solve_method("helper", &[ty(&solver, "String")], &solver)
        .unwrap()
        .into_declaration()
        .unwrap();
    assert_eq!(helper.qualified_name(), "com.example.Outer.helper");

    let run = inner.solve_method("run", &[], &solver).unwrap().into_declaration().unwrap();
    assert_eq!(run.qualified_name(), "com.example.Outer.Inner.run");

    let natural = inner
        .solve_method("naturalOrder", &[], &solver)
        .unwrap()
        .into_declaration()
        .unwrap();
    assert_eq!(natural.qualified_name(), "java.util.Comparator.naturalOrder");

    assert_eq!(inner.solve_method("reversed", &[], &solver).unwrap(), SymbolReference::Unsolved);
}

#[test]
fn type_refs_resolve_through_the_context() {
    let solver = solver();
    let outer = Context::for_declaration(&decl(&solver, "com.example.Outer"));

    assert_eq!(
        type_ref("List<? extends Supplier<T>>[]")
            .resolve(&outer, &solver)
            .unwrap()
            .describe(),
        "java.util.List<? extends java.util.function.Supplier<T>>[]"
    );
    assert_eq!(
        type_ref("Missing").resolve(&outer, &solver).unwrap_err(),
        ResolveError::UnsolvedSymbol {
            name: "Missing".to_string(),
            context: "type com.example.Outer".to_string(),
        }
    );
}

#[test]
fn names_resolve_or_report_the_scope() {
    let solver = solver();
    let pick = Context::for_method(&method(&decl(&solver, "com.example.Outer"), "pick"));
    let block = Context::block(pick.clone(), &[LocalVar::new(type_ref("int"), "i")], &solver).unwrap();

    assert!(NameExpr::new("i").resolve(&block, &solver).unwrap().is_local());
    assert!(NameExpr::new("second").resolve(&block, &solver).unwrap().is_parameter());
    assert_eq!(
        NameExpr::new("ghost").resolve(&block, &solver).unwrap_err(),
        ResolveError::UnsolvedSymbol {
            name: "ghost".to_string(),
            context: "block in method com.example.Outer.pick".to_string(),
        }
    );
}

#[test]
fn method_calls_resolve_against_receivers_and_scopes() {
    let solver = solver();
    let outer = decl(&solver, "com.example.Outer");
    let pick = Context::for_method(&method(&outer, "pick"));
    let string = ty(&solver, "String");

    let call = MethodCallExpr::new(None, "pick", vec![string.clone(), ty(&solver, "Integer")]);
    let usage = call.resolve(&pick, &solver).unwrap();
    assert_eq!(usage.signature(), "pick(T, java.lang.Integer)");
    assert_eq!(usage.return_type().describe(), "java.lang.Integer");

    let length = MethodCallExpr::new(Some(string.clone()), "length", vec![]);
    assert_eq!(
        length.resolve(&pick, &solver).unwrap().return_type(),
        &ResolvedType::Primitive(PrimitiveType::Int)
    );

    let t = pick.solve_generic_type("T", &solver).unwrap().unwrap();
    let hash = MethodCallExpr::new(Some(t), "hashCode", vec![]);
    assert_eq!(
        hash.resolve(&pick, &solver).unwrap().declaring_type().qualified_name(),
        "java.lang.Object"
    );

    let on_array = MethodCallExpr::new(Some(ty(&solver, "String[]")), "toString", vec![]);
    assert_eq!(on_array.resolve(&pick, &solver).unwrap().return_type(), &string);

    let missing = MethodCallExpr::new(Some(string), "missing", vec![]);
    assert_eq!(
        missing.resolve(&pick, &solver).unwrap_err(),
        ResolveError::UnsolvedSymbol {
            name: "missing".to_string(),
            context: "type java.lang.String".to_string(),
        }
    );

    let on_int = MethodCallExpr::new(Some(PrimitiveType::Int.into()), "toString", vec![]);
    assert_eq!(
        on_int.resolve(&pick, &solver).unwrap_err(),
        ResolveError::UnsupportedOperation {
            operation: "method call",
            target: "receiver of type int".to_string(),
        }
    );

    let unknown = MethodCallExpr::new(None, "nowhere", vec![]);
    assert!(unknown.resolve(&pick, &solver).unwrap_err().is_unsolved());
}
