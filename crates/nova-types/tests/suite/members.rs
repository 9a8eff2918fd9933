use nova_types::ast::{ClassDecl, ConstructorDecl, FieldDecl, MethodDecl, Modifier, Param, TypeParam};
use nova_types::{
    AccessSpecifier, CombinedTypeSolver, HostTypeSolver, MethodUsage, ResolvedType, SymbolReference,
    TypeParametersMap, ValueDeclaration,
};
use pretty_assertions::assert_eq;

use super::support::{decl, project, ty, type_ref, unit};

fn shapes() -> CombinedTypeSolver {
    project(vec![unit()
        .with_type(
            ClassDecl::class("Shape")
                .with_modifiers(&[Modifier::Public, Modifier::Abstract])
                .with_field(FieldDecl::new(type_ref("String"), "name").with_modifiers(&[Modifier::Protected]))
                .with_field(FieldDecl::new(type_ref("int"), "id").with_modifiers(&[Modifier::Private]))
                .with_field(
                    FieldDecl::new(type_ref("int"), "COUNT").with_modifiers(&[Modifier::Public, Modifier::Static]),
                )
                .with_constructor(
                    ConstructorDecl::new()
                        .with_modifiers(&[Modifier::Protected])
                        .with_param(Param::new(type_ref("String"), "name")),
                )
                .with_method(
                    MethodDecl::new(type_ref("double"), "area").with_modifiers(&[Modifier::Public, Modifier::Abstract]),
                )
                .with_method(
                    MethodDecl::new(type_ref("T"), "convert")
                        .with_modifiers(&[Modifier::Public])
                        .with_type_param(TypeParam::new("T").with_bound(type_ref("Number")))
                        .with_param(Param::new(type_ref("java.util.List<? extends T>"), "values"))
                        .with_param(Param::varargs(type_ref("int"), "weights")),
                ),
        )
        .with_type(
            ClassDecl::class("Circle")
                .extending(type_ref("Shape"))
                .with_field(FieldDecl::new(type_ref("double"), "radius")),
        )])
}

#[test]
fn fields_carry_access_staticness_and_type() {
    let solver = shapes();
    let shape = decl(&solver, "com.example.Shape");
    let fields: Vec<(String, AccessSpecifier, bool, String)> = shape
        .declared_fields()
        .unwrap()
        .iter()
        .map(|field| {
            (
                field.name().to_string(),
                field.access_specifier(),
                field.is_static(),
                field.ty(&solver).unwrap().describe(),
            )
        })
        .collect();
    assert_eq!(
        fields,
        vec![
            ("name".to_string(), AccessSpecifier::Protected, false, "java.lang.String".to_string()),
            ("id".to_string(), AccessSpecifier::Private, false, "int".to_string()),
            ("COUNT".to_string(), AccessSpecifier::Public, true, "int".to_string()),
        ]
    );
    assert_eq!(shape.field("id", &solver).unwrap().declaring_type(), &shape);
}

#[test]
fn inherited_fields_follow_declared_ones() {
    let solver = shapes();
    let circle = decl(&solver, "com.example.Circle");

    let all: Vec<String> = circle
        .all_fields(&solver)
        .unwrap()
        .iter()
        .map(|field| field.name().to_string())
        .collect();
    assert_eq!(all, vec!["radius", "name", "id", "COUNT"]);

    let visible: Vec<String> = circle
        .all_fields_visible_to_inheritors(&solver)
        .unwrap()
        .iter()
        .map(|field| field.name().to_string())
        .collect();
    assert_eq!(visible, vec!["radius", "name", "COUNT"]);

    assert!(circle.has_field("name", &solver));
    assert!(!circle.has_field("area", &solver));
    assert_eq!(
        circle
            .field("name", &solver)
            .unwrap()
            .declaring_type()
            .qualified_name(),
        "com.example.Shape"
    );

    let SymbolReference::Solved(ValueDeclaration::Field(radius)) = circle.solve_symbol("radius", &solver).unwrap()
    else {
        panic!("radius should resolve to a field");
    };
    assert_eq!(radius.ty(&solver).unwrap(), ResolvedType::Primitive(nova_types::PrimitiveType::Double));
    assert_eq!(circle.solve_symbol("missing", &solver).unwrap(), SymbolReference::Unsolved);
}

#[test]
fn methods_and_their_parameters() {
    let solver = shapes();
    let shape = decl(&solver, "com.example.Shape");
    let methods = shape.declared_methods().unwrap();
    assert_eq!(methods.len(), 2);

    let area = &methods[0];
    assert!(area.is_abstract());
    assert_eq!(area.access_specifier(), AccessSpecifier::Public);
    assert_eq!(area.number_of_params(), 0);
    assert_eq!(area.return_type(&solver).unwrap().describe(), "double");

    let convert = &methods[1];
    assert_eq!(convert.qualified_name(), "com.example.Shape.convert");
    assert!(convert.is_variadic());
    assert!(!convert.is_abstract());
    assert_eq!(
        convert.signature(&solver).unwrap(),
        "convert(java.util.List<? extends T>, int[])"
    );
    let type_params = convert.type_parameters();
    assert_eq!(type_params.len(), 1);
    assert!(type_params[0].declared_on_method());
    assert_eq!(
        type_params[0].bounds(&solver).unwrap(),
        vec![ty(&solver, "Number")]
    );
    let ResolvedType::TypeVariable(returned) = convert.return_type(&solver).unwrap() else {
        panic!("convert returns its type parameter");
    };
    assert_eq!(returned, type_params[0]);

    let params = convert.params();
    assert_eq!(params.iter().map(|p| p.name()).collect::<Vec<_>>(), vec!["values", "weights"]);
    assert!(!params[0].is_variadic());
    assert!(params[1].is_variadic());
    assert_eq!(params[1].ty(&solver).unwrap().describe(), "int[]");
    assert!(convert.param(2).is_none());
    assert!(convert.param_type(2, &solver).unwrap_err().is_unsolved());
}

#[test]
fn generic_overloads_own_distinct_type_parameters() {
    let generic = |arity: usize| {
        (0..arity).fold(
            MethodDecl::new(type_ref("T"), "pick").with_type_param(TypeParam::new("T")),
            |method, index| method.with_param(Param::new(type_ref("T"), &format!("p{index}"))),
        )
    };
    let solver = project(vec![unit().with_type(
        ClassDecl::class("Picker")
            .with_method(generic(1))
            .with_method(generic(2)),
    )]);
    let methods = decl(&solver, "com.example.Picker").declared_methods().unwrap();
    let one = methods[0].type_parameters().remove(0);
    let two = methods[1].type_parameters().remove(0);
    assert_ne!(one, two);
    assert_eq!(one.qualified_signature(), two.qualified_signature());

    let bindings = TypeParametersMap::identity([one.clone()]).with_value(&one, ty(&solver, "String"));
    assert_eq!(bindings.value(&two), None);
    let untouched = MethodUsage::new(methods[1].clone(), &solver).unwrap().substitute(&bindings);
    assert_eq!(untouched.return_type(), &ResolvedType::TypeVariable(two));
    let bound = MethodUsage::new(methods[0].clone(), &solver).unwrap().substitute(&bindings);
    assert_eq!(bound.signature(), "pick(java.lang.String)");
}

#[test]
fn constructors_explicit_and_implicit() {
    let solver = shapes();
    let shape = decl(&solver, "com.example.Shape");
    let constructors = shape.constructors().unwrap();
    assert_eq!(constructors.len(), 1);
    assert_eq!(constructors[0].access_specifier(), AccessSpecifier::Protected);
    assert_eq!(constructors[0].signature(&solver).unwrap(), "<init>(java.lang.String)");
    assert_eq!(constructors[0].param(0).unwrap().name(), "name");

    let circle = decl(&solver, "com.example.Circle");
    let implicit = circle.constructors().unwrap();
    assert_eq!(implicit.len(), 1);
    assert_eq!(implicit[0].access_specifier(), AccessSpecifier::Public);
    assert_eq!(implicit[0].number_of_params(), 0);
    assert_eq!(implicit[0].declaring_type(), &circle);
}

#[test]
fn host_members() {
    let solver = HostTypeSolver;
    let string = decl(&solver, "java.lang.String");
    let format = string
        .declared_methods()
        .unwrap()
        .into_iter()
        .find(|method| method.name() == "format")
        .unwrap();
    assert!(format.is_static());
    assert!(format.is_variadic());
    assert_eq!(
        format.signature(&solver).unwrap(),
        "format(java.lang.String, java.lang.Object[])"
    );
    assert_eq!(string.constructors().unwrap().len(), 3);

    let order = string.field("CASE_INSENSITIVE_ORDER", &solver).unwrap();
    assert!(order.is_static());
    assert_eq!(
        order.ty(&solver).unwrap().describe(),
        "java.util.Comparator<java.lang.String>"
    );

    let object = decl(&solver, "java.lang.Object");
    let clone = object
        .declared_methods()
        .unwrap()
        .into_iter()
        .find(|method| method.name() == "clone")
        .unwrap();
    assert_eq!(clone.access_specifier(), AccessSpecifier::Protected);
    assert!(!clone.is_abstract());

    let list = decl(&solver, "java.util.List");
    let sort = list
        .declared_methods()
        .unwrap()
        .into_iter()
        .find(|method| method.name() == "sort")
        .unwrap();
    assert!(sort.is_default());
    assert_eq!(sort.signature(&solver).unwrap(), "sort(java.util.Comparator<? super E>)");
}
