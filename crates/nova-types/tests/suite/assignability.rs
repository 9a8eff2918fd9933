use nova_types::ast::{ClassDecl, TypeParam};
use nova_types::{CombinedTypeSolver, HostTypeSolver, ReferenceType, ResolvedType, Wildcard};

use super::support::{decl, project, ty, type_ref, unit};

fn assignable(solver: &dyn nova_types::TypeSolver, target: &str, candidate: &str) -> bool {
    ty(solver, target)
        .is_assignable_by(&ty(solver, candidate), solver)
        .unwrap()
}

#[test]
fn every_non_void_type_accepts_itself() {
    let solver = HostTypeSolver;
    for text in ["String", "List<String>", "Map<String, List<Integer>>", "int", "int[]", "Object"] {
        assert!(assignable(&solver, text, text), "{text} should accept itself");
    }
    assert!(!ResolvedType::Void
        .is_assignable_by(&ResolvedType::Void, &solver)
        .unwrap());
}

#[test]
fn primitives_accept_widening_only() {
    let solver = HostTypeSolver;
    assert!(assignable(&solver, "long", "int"));
    assert!(assignable(&solver, "double", "char"));
    assert!(!assignable(&solver, "int", "long"));
    assert!(!assignable(&solver, "boolean", "int"));
    assert!(!assignable(&solver, "int", "Integer"));
}

#[test]
fn primitives_box_into_their_wrappers_and_supertypes() {
    let solver = HostTypeSolver;
    assert!(assignable(&solver, "Integer", "int"));
    assert!(assignable(&solver, "Number", "int"));
    assert!(assignable(&solver, "Number", "double"));
    assert!(assignable(&solver, "Object", "boolean"));
    assert!(assignable(&solver, "Comparable<Integer>", "int"));
    assert!(assignable(&solver, "Long", "int"));
    assert!(!assignable(&solver, "Number", "boolean"));
    assert!(!assignable(&solver, "String", "int"));
}

#[test]
fn subtyping_through_ancestors() {
    let solver = HostTypeSolver;
    assert!(assignable(&solver, "CharSequence", "String"));
    assert!(assignable(&solver, "Object", "CharSequence"));
    assert!(!assignable(&solver, "String", "CharSequence"));
    assert!(assignable(&solver, "Collection<String>", "ArrayList<String>"));
    assert!(assignable(&solver, "Iterable<String>", "LinkedList<String>"));
    assert!(!assignable(&solver, "Collection<Object>", "ArrayList<String>"));
}

#[test]
fn type_arguments_are_invariant_unless_wildcarded() {
    let solver = HostTypeSolver;
    assert!(!assignable(&solver, "List<Object>", "List<String>"));
    assert!(!assignable(&solver, "List<String>", "List<Object>"));
    assert!(assignable(&solver, "List<?>", "List<String>"));
    assert!(assignable(&solver, "List<? extends Object>", "List<String>"));
    assert!(assignable(&solver, "List<? extends CharSequence>", "ArrayList<String>"));
    assert!(!assignable(&solver, "List<? extends Number>", "List<String>"));
    assert!(assignable(&solver, "List<? super String>", "List<Object>"));
    assert!(assignable(&solver, "List<? super Integer>", "List<Number>"));
    assert!(!assignable(&solver, "List<? super String>", "List<Integer>"));
    assert!(assignable(&solver, "List<? extends Number>", "List<? extends Integer>"));
    assert!(!assignable(&solver, "List<? extends Number>", "List<? super Integer>"));
}

#[test]
fn raw_types_accept_and_are_accepted_by_parameterized_ones() {
    let solver = HostTypeSolver;
    assert!(assignable(&solver, "List", "List<String>"));
    assert!(assignable(&solver, "List<String>", "List"));
    assert!(assignable(&solver, "Collection", "ArrayList<Integer>"));
}

#[test]
fn null_and_void() {
    let solver = HostTypeSolver;
    let string = ty(&solver, "String");
    assert!(string.is_assignable_by(&ResolvedType::Null, &solver).unwrap());
    assert!(ty(&solver, "int[]").is_assignable_by(&ResolvedType::Null, &solver).unwrap());
    assert!(!ty(&solver, "int").is_assignable_by(&ResolvedType::Null, &solver).unwrap());
    assert!(!ResolvedType::Null.is_assignable_by(&string, &solver).unwrap());
    assert!(!ty(&solver, "Object").is_assignable_by(&ResolvedType::Void, &solver).unwrap());
}

#[test]
fn arrays() {
    let solver = HostTypeSolver;
    assert!(assignable(&solver, "Object", "String[]"));
    assert!(assignable(&solver, "Cloneable", "int[]"));
    assert!(assignable(&solver, "java.io.Serializable", "int[][]"));
    assert!(assignable(&solver, "Object[]", "String[]"));
    assert!(assignable(&solver, "CharSequence[]", "String[]"));
    assert!(!assignable(&solver, "String[]", "Object[]"));
    assert!(!assignable(&solver, "long[]", "int[]"));
    assert!(!assignable(&solver, "Object[]", "int[]"));
    assert!(!assignable(&solver, "String", "String[]"));
}

#[test]
fn wildcard_and_intersection_targets() {
    let solver = HostTypeSolver;
    let number = ty(&solver, "Number");
    let integer = ty(&solver, "Integer");
    let string = ty(&solver, "String");

    let extends_number: ResolvedType = Wildcard::extends_bound(number.clone()).into();
    assert!(extends_number.is_assignable_by(&integer, &solver).unwrap());
    assert!(!extends_number.is_assignable_by(&string, &solver).unwrap());
    let unbounded: ResolvedType = Wildcard::Unbounded.into();
    assert!(unbounded.is_assignable_by(&string, &solver).unwrap());
    assert!(!unbounded.is_assignable_by(&ty(&solver, "int"), &solver).unwrap());

    let both = ResolvedType::Intersection(vec![number, ty(&solver, "Comparable<Integer>")]);
    assert!(both.is_assignable_by(&integer, &solver).unwrap());
    assert!(!both.is_assignable_by(&ty(&solver, "Long"), &solver).unwrap());
}

fn bazzing_project() -> CombinedTypeSolver {
    project(vec![unit()
        .with_type(ClassDecl::class("Foo"))
        .with_type(ClassDecl::class("Bar").extending(type_ref("Foo")))
        .with_type(
            ClassDecl::class("Bazzer")
                .with_type_param(TypeParam::new("A"))
                .with_type_param(TypeParam::new("B"))
                .with_type_param(TypeParam::new("C")),
        )
        .with_type(
            ClassDecl::class("MoreBazzing")
                .with_type_param(TypeParam::new("A"))
                .with_type_param(TypeParam::new("B"))
                .extending(type_ref("Bazzer<B, String, A>")),
        )])
}

#[test]
fn generic_ancestors_reorder_type_arguments() {
    let solver = bazzing_project();
    let yes = [
        ("MoreBazzing<Foo, Bar>", "MoreBazzing<Foo, Bar>"),
        ("MoreBazzing<? extends Foo, Bar>", "MoreBazzing<Foo, Bar>"),
        ("MoreBazzing<Foo, ? extends Bar>", "MoreBazzing<Foo, Bar>"),
        ("MoreBazzing<? extends Foo, ? extends Foo>", "MoreBazzing<Foo, Bar>"),
        ("MoreBazzing<? extends Foo, ? extends Foo>", "MoreBazzing<Bar, Bar>"),
        ("Bazzer<Object, String, String>", "MoreBazzing<String, Object>"),
        ("Bazzer<String, String, String>", "MoreBazzing<String, String>"),
        ("Bazzer<Bar, String, Foo>", "MoreBazzing<Foo, Bar>"),
        ("Bazzer<Foo, String, Bar>", "MoreBazzing<Bar, Foo>"),
    ];
    for (target, candidate) in yes {
        assert!(assignable(&solver, target, candidate), "{target} = {candidate}");
    }
    let no = [
        ("Bazzer<Bar, String, Foo>", "MoreBazzing<Bar, Foo>"),
        ("Bazzer<Bar, String, Bar>", "MoreBazzing<Bar, Foo>"),
        ("Bazzer<Foo, Object, Bar>", "MoreBazzing<Bar, Foo>"),
    ];
    for (target, candidate) in no {
        assert!(!assignable(&solver, target, candidate), "{target} = {candidate}");
    }
}

#[test]
fn type_variable_arguments_accept_any_argument() {
    let solver = project(vec![unit().with_type(
        ClassDecl::class("Scope")
            .with_type_param(TypeParam::new("A"))
            .with_field(nova_types::ast::FieldDecl::new(type_ref("java.util.List<A>"), "items")),
    )]);
    let scope = decl(&solver, "com.example.Scope");
    let list_of_a = scope.field("items", &solver).unwrap().ty(&solver).unwrap();
    let list_of_string = ty(&solver, "List<String>");

    assert!(list_of_a.is_assignable_by(&list_of_string, &solver).unwrap());
    assert!(list_of_a.is_assignable_by(&ty(&solver, "List<? extends Number>"), &solver).unwrap());
    assert!(!list_of_string.is_assignable_by(&list_of_a, &solver).unwrap());
    assert!(list_of_a.is_assignable_by(&list_of_a, &solver).unwrap());
    assert!(!list_of_a.is_assignable_by(&ty(&solver, "Set<String>"), &solver).unwrap());
}

#[test]
fn type_variable_targets_check_their_bounds() {
    let solver = project(vec![unit().with_type(
        ClassDecl::class("Bounded")
            .with_type_param(TypeParam::new("N").with_bound(type_ref("Number")))
            .with_type_param(TypeParam::new("T")),
    )]);
    let params = decl(&solver, "com.example.Bounded").type_parameters().unwrap();
    let n: ResolvedType = params[0].clone().into();
    let t: ResolvedType = params[1].clone().into();

    assert!(n.is_assignable_by(&ty(&solver, "Integer"), &solver).unwrap());
    assert!(!n.is_assignable_by(&ty(&solver, "String"), &solver).unwrap());
    assert!(t.is_assignable_by(&ty(&solver, "String"), &solver).unwrap());
    assert!(t.is_assignable_by(&ResolvedType::Null, &solver).unwrap());
    assert!(ty(&solver, "Number").is_assignable_by(&n, &solver).unwrap());
    assert!(ty(&solver, "Object").is_assignable_by(&t, &solver).unwrap());
    assert!(!ty(&solver, "String").is_assignable_by(&t, &solver).unwrap());
}

#[test]
fn raw_reference_is_assignable_by_its_subtypes() {
    let solver = HostTypeSolver;
    let list = ReferenceType::raw(decl(&solver, "java.util.List")).unwrap();
    let array_list: ResolvedType = ReferenceType::raw(decl(&solver, "java.util.ArrayList"))
        .unwrap()
        .into();
    assert!(list.is_assignable_by(&array_list, &solver).unwrap());
}
