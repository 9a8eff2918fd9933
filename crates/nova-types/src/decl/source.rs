use std::sync::Arc;

use crate::ast::{ClassDecl, CompilationUnit, Modifier, Param, TypeParam, TypeRef};
use crate::context::Context;
use crate::decl::{
    AccessSpecifier, CallableData, ConstructorDeclaration, DeclaredSupertypes, FieldDeclaration,
    MethodDeclaration, NativeType, NativeTypeParam, TypeBackend, TypeDeclaration, TypeKind,
};
use crate::error::Result;
use crate::solver::TypeSolver;
use crate::symbol::SymbolReference;

/// Declaration backed by a parsed source class.
pub(crate) struct SourceType {
    unit: Arc<CompilationUnit>,
    class: Arc<ClassDecl>,
    enclosing: Option<TypeDeclaration>,
    qualified_name: String,
    class_name: String,
}

impl SourceType {
    pub(crate) fn new(
        unit: Arc<CompilationUnit>,
        class: Arc<ClassDecl>,
        enclosing: Option<TypeDeclaration>,
    ) -> Self {
        let class_name = match &enclosing {
            Some(outer) => format!("{}.{}", outer.class_name(), class.name),
            None => class.name.clone(),
        };
        let qualified_name = match unit.package_name() {
            "" => class_name.clone(),
            package => format!("{package}.{class_name}"),
        };
        Self {
            unit,
            class,
            enclosing,
            qualified_name,
            class_name,
        }
    }

    pub(crate) fn unit(&self) -> &Arc<CompilationUnit> {
        &self.unit
    }

    pub(crate) fn enclosing(&self) -> Option<&TypeDeclaration> {
        self.enclosing.as_ref()
    }

    pub(crate) fn member_types(&self, this: &TypeDeclaration) -> Vec<TypeDeclaration> {
        self.class
            .members
            .iter()
            .map(|member| {
                TypeDeclaration::from_source(SourceType::new(
                    self.unit.clone(),
                    member.clone(),
                    Some(this.clone()),
                ))
            })
            .collect()
    }

    fn in_interface(&self) -> bool {
        matches!(self.class.kind, TypeKind::Interface | TypeKind::Annotation)
    }

    fn member_access(&self, modifiers: &[Modifier]) -> AccessSpecifier {
        if let Some(access) = explicit_access(modifiers) {
            access
        } else if self.in_interface() {
            AccessSpecifier::Public
        } else {
            AccessSpecifier::PackagePrivate
        }
    }

    fn callable(
        &self,
        this: &TypeDeclaration,
        name: &str,
        modifiers: &[Modifier],
        type_params: &[TypeParam],
        params: &[Param],
        return_type: Option<&TypeRef>,
    ) -> CallableData {
        let is_static = modifiers.contains(&Modifier::Static);
        let is_default = modifiers.contains(&Modifier::Default);
        let is_private = modifiers.contains(&Modifier::Private);
        let is_abstract = modifiers.contains(&Modifier::Abstract)
            || (self.in_interface() && return_type.is_some() && !is_static && !is_default && !is_private);
        CallableData {
            declaring: this.clone(),
            name: name.to_string(),
            access: self.member_access(modifiers),
            is_static,
            is_abstract,
            is_default,
            is_variadic: params.last().is_some_and(|param| param.varargs),
            type_params: type_params.iter().map(native_type_param).collect(),
            params: params
                .iter()
                .map(|param| {
                    let ty = if param.varargs {
                        TypeRef::array_of(param.ty.clone())
                    } else {
                        param.ty.clone()
                    };
                    (param.name.clone(), NativeType::Source(ty))
                })
                .collect(),
            return_type: return_type
                .filter(|ty| **ty != TypeRef::Void)
                .map(|ty| NativeType::Source(ty.clone())),
        }
    }
}

fn explicit_access(modifiers: &[Modifier]) -> Option<AccessSpecifier> {
    modifiers.iter().find_map(|modifier| match modifier {
        Modifier::Public => Some(AccessSpecifier::Public),
        Modifier::Protected => Some(AccessSpecifier::Protected),
        Modifier::Private => Some(AccessSpecifier::Private),
        _ => None,
    })
}

fn native_type_param(param: &TypeParam) -> NativeTypeParam {
    NativeTypeParam {
        name: param.name.clone(),
        bounds: param.bounds.iter().cloned().map(NativeType::Source).collect(),
    }
}

impl TypeBackend for SourceType {
    fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn package_name(&self) -> &str {
        self.unit.package_name()
    }

    fn kind(&self) -> TypeKind {
        self.class.kind
    }

    fn access_specifier(&self) -> AccessSpecifier {
        match explicit_access(&self.class.modifiers) {
            Some(access) => access,
            None if self.enclosing.as_ref().is_some_and(|outer| {
                matches!(outer.kind(), TypeKind::Interface | TypeKind::Annotation)
            }) =>
            {
                AccessSpecifier::Public
            }
            None => AccessSpecifier::PackagePrivate,
        }
    }

    fn native_type_parameters(&self) -> Result<Vec<NativeTypeParam>> {
        Ok(self.class.type_params.iter().map(native_type_param).collect())
    }

    fn declared_supertypes(&self) -> Result<DeclaredSupertypes> {
        let source = |ty: &TypeRef| NativeType::Source(ty.clone());
        Ok(match self.class.kind {
            TypeKind::Class => DeclaredSupertypes {
                superclass: self.class.extends.first().map(source),
                interfaces: self.class.implements.iter().map(source).collect(),
            },
            TypeKind::Interface | TypeKind::Annotation => DeclaredSupertypes {
                superclass: None,
                interfaces: self.class.extends.iter().map(source).collect(),
            },
            TypeKind::Enum => DeclaredSupertypes {
                superclass: None,
                interfaces: self.class.implements.iter().map(source).collect(),
            },
        })
    }

    fn declared_fields(&self, this: &TypeDeclaration) -> Result<Vec<FieldDeclaration>> {
        let constants = self.class.enum_constants.iter().map(|name| {
            FieldDeclaration::new(
                this.clone(),
                name.as_str(),
                AccessSpecifier::Public,
                true,
                NativeType::Source(TypeRef::named(&self.class.name)),
            )
        });
        let fields = self.class.fields.iter().map(|field| {
            FieldDeclaration::new(
                this.clone(),
                field.name.as_str(),
                self.member_access(&field.modifiers),
                self.in_interface() || field.modifiers.contains(&Modifier::Static),
                NativeType::Source(field.ty.clone()),
            )
        });
        Ok(constants.chain(fields).collect())
    }

    fn declared_methods(&self, this: &TypeDeclaration) -> Result<Vec<MethodDeclaration>> {
        Ok(self
            .class
            .methods
            .iter()
            .map(|method| {
                MethodDeclaration::new(self.callable(
                    this,
                    &method.name,
                    &method.modifiers,
                    &method.type_params,
                    &method.params,
                    Some(&method.return_type),
                ))
            })
            .collect())
    }

    fn constructors(&self, this: &TypeDeclaration) -> Result<Vec<ConstructorDeclaration>> {
        if self.in_interface() {
            return Ok(Vec::new());
        }
        if self.class.constructors.is_empty() {
            // Implicit default constructor.
            let modifiers: Vec<Modifier> = match self.class.kind {
                TypeKind::Enum => vec![Modifier::Private],
                _ => self
                    .class
                    .modifiers
                    .iter()
                    .copied()
                    .filter(|modifier| {
                        matches!(modifier, Modifier::Public | Modifier::Protected | Modifier::Private)
                    })
                    .collect(),
            };
            return Ok(vec![ConstructorDeclaration::new(self.callable(
                this,
                "<init>",
                &modifiers,
                &[],
                &[],
                None,
            ))]);
        }
        Ok(self
            .class
            .constructors
            .iter()
            .map(|constructor| {
                ConstructorDeclaration::new(self.callable(
                    this,
                    "<init>",
                    &constructor.modifiers,
                    &[],
                    &constructor.params,
                    None,
                ))
            })
            .collect())
    }

    fn internal_types(
        &self,
        this: &TypeDeclaration,
        _solver: &dyn TypeSolver,
    ) -> Result<Vec<TypeDeclaration>> {
        Ok(self.member_types(this))
    }

    fn containing_type(&self, _solver: &dyn TypeSolver) -> Result<Option<TypeDeclaration>> {
        Ok(self.enclosing.clone())
    }

    fn has_direct_annotation(
        &self,
        this: &TypeDeclaration,
        qualified_name: &str,
        solver: &dyn TypeSolver,
    ) -> bool {
        let context = Context::for_declaration(this);
        self.class.annotations.iter().any(|annotation| {
            annotation == qualified_name
                || matches!(
                    context.solve_type(annotation, solver),
                    Ok(SymbolReference::Solved(decl)) if decl.qualified_name() == qualified_name
                )
        })
    }

    fn enum_constants(&self) -> Vec<String> {
        self.class.enum_constants.clone()
    }
}
