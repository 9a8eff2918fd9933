use nova_types::ast::{ClassDecl, MethodDecl, Modifier, Param};
use nova_types::{
    CombinedTypeSolver, HostTypeSolver, MethodDeclaration, PrimitiveType, ResolveError, ResolvedType,
    SymbolReference, TypeSolver,
};
use pretty_assertions::assert_eq;

use super::support::{decl, project, reference, ty, type_ref, unit};

fn method(return_type: &str, name: &str, params: &[&str]) -> MethodDecl {
    params
        .iter()
        .enumerate()
        .fold(MethodDecl::new(type_ref(return_type), name), |method, (index, param)| {
            method.with_param(Param::new(type_ref(param), &format!("p{index}")))
        })
}

fn printer_project() -> CombinedTypeSolver {
    project(vec![unit().with_type(
        ClassDecl::class("Printer")
            .with_method(method("void", "print", &["int"]))
            .with_method(method("void", "print", &["long"]))
            .with_method(method("void", "print", &["Object"]))
            .with_method(method("void", "print", &["String"]))
            .with_method(
                MethodDecl::new(type_ref("void"), "print").with_param(Param::varargs(type_ref("String"), "rest")),
            )
            .with_method(method("void", "take", &["Integer", "Object"]))
            .with_method(method("void", "take", &["Object", "Integer"])),
    )])
}

fn solve(solver: &dyn TypeSolver, name: &str, arguments: &[ResolvedType]) -> nova_types::Result<SymbolReference<MethodDeclaration>> {
    decl(solver, "com.example.Printer").solve_method(name, arguments, false, solver)
}

/// Parameter types of the chosen `print` overload.
fn chosen(solver: &dyn TypeSolver, arguments: &[ResolvedType]) -> Vec<String> {
    solve(solver, "print", arguments)
        .unwrap()
        .into_declaration()
        .unwrap()
        .param_types(solver)
        .unwrap()
        .iter()
        .map(ResolvedType::describe)
        .collect()
}

#[test]
fn identical_types_win() {
    let solver = printer_project();
    assert_eq!(chosen(&solver, &[PrimitiveType::Int.into()]), vec!["int"]);
    assert_eq!(chosen(&solver, &[PrimitiveType::Long.into()]), vec!["long"]);
    assert_eq!(chosen(&solver, &[ty(&solver, "String")]), vec!["java.lang.String"]);
}

#[test]
fn narrowest_widening_is_most_specific() {
    let solver = printer_project();
    assert_eq!(chosen(&solver, &[PrimitiveType::Short.into()]), vec!["int"]);
    assert_eq!(chosen(&solver, &[PrimitiveType::Char.into()]), vec!["int"]);
}

#[test]
fn subtyping_is_preferred_over_unboxing() {
    let solver = printer_project();
    assert_eq!(chosen(&solver, &[ty(&solver, "Integer")]), vec!["java.lang.Object"]);
    assert_eq!(chosen(&solver, &[ty(&solver, "CharSequence")]), vec!["java.lang.Object"]);
}

#[test]
fn boxing_is_used_when_nothing_else_applies() {
    let solver = printer_project();
    assert_eq!(chosen(&solver, &[PrimitiveType::Boolean.into()]), vec!["java.lang.Object"]);
}

#[test]
fn variable_arity_is_the_last_resort() {
    let solver = printer_project();
    let string = ty(&solver, "String");
    assert_eq!(chosen(&solver, &[string.clone(), string]), vec!["java.lang.String[]"]);
    assert_eq!(chosen(&solver, &[]), vec!["java.lang.String[]"]);
    assert_eq!(
        chosen(&solver, &[ty(&solver, "String[]")]),
        vec!["java.lang.String[]"]
    );
}

#[test]
fn inapplicable_calls_are_unsolved() {
    let solver = printer_project();
    let int: ResolvedType = PrimitiveType::Int.into();
    assert_eq!(solve(&solver, "print", &[int.clone(), int]).unwrap(), SymbolReference::Unsolved);
    assert_eq!(solve(&solver, "nope", &[]).unwrap(), SymbolReference::Unsolved);
}

#[test]
fn null_matches_several_unrelated_overloads() {
    let solver = printer_project();
    let err = solve(&solver, "print", &[ResolvedType::Null]).unwrap_err();
    let ResolveError::AmbiguousOverload { name, candidates, .. } = err else {
        panic!("expected an ambiguity, got {err:?}");
    };
    assert_eq!(name, "print");
    assert_eq!(candidates.len(), 3);
}

#[test]
fn crosswise_overloads_are_ambiguous() {
    let solver = printer_project();
    let integer = ty(&solver, "Integer");
    let err = solve(&solver, "take", &[integer.clone(), integer]).unwrap_err();
    assert_eq!(
        err,
        ResolveError::AmbiguousOverload {
            name: "take".to_string(),
            arguments: vec!["java.lang.Integer".to_string(), "java.lang.Integer".to_string()],
            candidates: vec![
                "com.example.Printer.take(java.lang.Integer, java.lang.Object)".to_string(),
                "com.example.Printer.take(java.lang.Object, java.lang.Integer)".to_string(),
            ],
        }
    );
    assert!(err.to_string().starts_with("ambiguous call `take(java.lang.Integer, java.lang.Integer)`"));
}

#[test]
fn inherited_overloads_join_the_pool() {
    let solver = project(vec![unit()
        .with_type(
            ClassDecl::class("Base")
                .with_method(method("void", "show", &["Object"]))
                .with_method(method("void", "show", &["CharSequence"])),
        )
        .with_type(
            ClassDecl::class("Derived")
                .extending(type_ref("Base"))
                .with_method(method("void", "show", &["String"])),
        )]);
    let derived = decl(&solver, "com.example.Derived");
    let owner = |argument: &str| {
        derived
            .solve_method("show", &[ty(&solver, argument)], false, &solver)
            .unwrap()
            .into_declaration()
            .unwrap()
            .declaring_type()
            .qualified_name()
            .to_string()
    };
    assert_eq!(owner("String"), "com.example.Derived");
    assert_eq!(owner("Integer"), "com.example.Base");

    let hash = derived
        .solve_method("hashCode", &[], false, &solver)
        .unwrap()
        .into_declaration()
        .unwrap();
    assert!(hash.declaring_type().is_java_lang_object());
}

#[test]
fn subclass_overload_settles_a_tie_between_inherited_ones() {
    let solver = project(vec![unit()
        .with_type(
            ClassDecl::class("Base")
                .with_method(method("void", "m", &["Object", "String"]))
                .with_method(method("void", "m", &["String", "Object"])),
        )
        .with_type(
            ClassDecl::class("Derived")
                .extending(type_ref("Base"))
                .with_method(method("void", "m", &["String", "String"])),
        )
        .with_type(ClassDecl::class("Leaf").extending(type_ref("Base")))]);
    let string = ty(&solver, "String");
    let arguments = [string.clone(), string];

    let chosen = decl(&solver, "com.example.Derived")
        .solve_method("m", &arguments, false, &solver)
        .unwrap()
        .into_declaration()
        .unwrap();
    assert_eq!(chosen.qualified_name(), "com.example.Derived.m");
    assert_eq!(
        chosen.signature(&solver).unwrap(),
        "m(java.lang.String, java.lang.String)"
    );

    let err = decl(&solver, "com.example.Leaf")
        .solve_method("m", &arguments, false, &solver)
        .unwrap_err();
    let ResolveError::AmbiguousOverload { candidates, .. } = err else {
        panic!("expected an ambiguity, got {err:?}");
    };
    assert_eq!(
        candidates,
        vec![
            "com.example.Base.m(java.lang.Object, java.lang.String)".to_string(),
            "com.example.Base.m(java.lang.String, java.lang.Object)".to_string(),
        ]
    );
}

#[test]
fn static_only_skips_instance_methods() {
    let solver = project(vec![unit().with_type(
        ClassDecl::class("Util")
            .with_method(method("int", "size", &[]))
            .with_method(method("int", "count", &[]).with_modifiers(&[Modifier::Static])),
    )]);
    let util = decl(&solver, "com.example.Util");
    assert!(!util.solve_method("size", &[], true, &solver).unwrap().is_solved());
    assert!(util.solve_method("size", &[], false, &solver).unwrap().is_solved());
    assert!(util.solve_method("count", &[], true, &solver).unwrap().is_solved());
}

#[test]
fn unresolvable_ancestors_do_not_hide_the_others() {
    let solver = project(vec![unit().with_type(
        ClassDecl::class("Orphan")
            .extending(type_ref("com.missing.Parent"))
            .implementing(type_ref("Runnable")),
    )]);
    let run = decl(&solver, "com.example.Orphan")
        .solve_method("run", &[], false, &solver)
        .unwrap()
        .into_declaration()
        .unwrap();
    assert_eq!(run.qualified_name(), "java.lang.Runnable.run");
}

#[test]
fn generic_method_type_arguments_are_inferred_from_varargs() {
    let solver = HostTypeSolver;
    let string = ty(&solver, "String");
    let usage = reference(&solver, "List")
        .solve_method_as_usage("of", &[string.clone(), string], &solver)
        .unwrap()
        .unwrap();
    assert_eq!(usage.return_type().describe(), "java.util.List<java.lang.String>");
    assert_eq!(usage.signature(), "of(java.lang.String[])");
}

#[test]
fn receiver_type_arguments_flow_into_inherited_methods() {
    let solver = HostTypeSolver;
    let string = ty(&solver, "String");
    let list = reference(&solver, "ArrayList<String>");

    let add = list.solve_method_as_usage("add", &[string.clone()], &solver).unwrap().unwrap();
    assert_eq!(add.signature(), "add(java.lang.String)");
    assert_eq!(add.declaring_type().qualified_name(), "java.util.ArrayList");

    let contains = list
        .solve_method_as_usage("contains", &[string.clone()], &solver)
        .unwrap()
        .unwrap();
    assert_eq!(contains.declaring_type().qualified_name(), "java.util.AbstractCollection");
    assert_eq!(contains.return_type(), &ResolvedType::Primitive(PrimitiveType::Boolean));

    let iterator = list.solve_method_as_usage("iterator", &[], &solver).unwrap().unwrap();
    assert_eq!(iterator.return_type().describe(), "java.util.Iterator<java.lang.String>");

    assert!(list.solve_method_as_usage("missing", &[string], &solver).unwrap().is_none());
}
