use std::collections::HashMap;
use std::sync::Arc;

use nova_classfile::access::{has, ACC_ABSTRACT, ACC_STATIC, ACC_VARARGS};
use nova_classfile::{
    parse_class_signature, parse_field_signature, parse_method_signature, ClassSignature,
    TypeSignature,
};
use once_cell::sync::Lazy;

use crate::decl::jdk::{HostClass, HostMember, HOST_CLASSES};
use crate::decl::{
    AccessSpecifier, CallableData, ConstructorDeclaration, DeclaredSupertypes, FieldDeclaration,
    MethodDeclaration, NativeType, NativeTypeParam, TypeBackend, TypeDeclaration, TypeKind,
};
use crate::error::{ResolveError, Result};
use crate::solver::TypeSolver;

/// Declaration backed by the built-in descriptors of the host platform's core library.
pub(crate) struct HostType {
    class: &'static HostClass,
    class_name: &'static str,
    signature: ClassSignature,
}

static HOST_TYPES: Lazy<HashMap<&'static str, TypeDeclaration>> = Lazy::new(|| {
    let mut types = HashMap::with_capacity(HOST_CLASSES.len());
    for class in HOST_CLASSES {
        match HostType::new(class) {
            Ok(host) => {
                types.insert(class.name, TypeDeclaration::from_host(host));
            }
            Err(err) => {
                tracing::error!(
                    target: "nova.types",
                    class = class.name,
                    error = %err,
                    "skipping malformed host class"
                );
            }
        }
    }
    types
});

pub(crate) fn host_type(qualified_name: &str) -> Option<TypeDeclaration> {
    HOST_TYPES.get(qualified_name).cloned()
}

#[cfg(test)]
fn host_types() -> impl Iterator<Item = &'static TypeDeclaration> {
    HOST_TYPES.values()
}

impl HostType {
    fn new(class: &'static HostClass) -> Result<Self> {
        // `java.lang.Object` is the only class without a super class signature.
        let signature = if class.signature.is_empty() {
            ClassSignature {
                type_parameters: Vec::new(),
                super_class: None,
                interfaces: Vec::new(),
            }
        } else {
            parse_class_signature(class.signature)?
        };
        let class_name = class
            .name
            .strip_prefix(class.package)
            .and_then(|rest| rest.strip_prefix('.'))
            .ok_or_else(|| ResolveError::Malformed {
                subject: format!("host class {}", class.name),
                message: format!("not in package {}", class.package),
            })?;
        Ok(Self {
            class,
            class_name,
            signature,
        })
    }

    fn callable(&self, this: &TypeDeclaration, member: &HostMember) -> Result<CallableData> {
        let signature = parse_method_signature(member.signature)?;
        let is_abstract = has(member.flags, ACC_ABSTRACT);
        let is_static = has(member.flags, ACC_STATIC);
        Ok(CallableData {
            declaring: this.clone(),
            name: member.name.to_string(),
            access: AccessSpecifier::from_flags(member.flags),
            is_static,
            is_abstract,
            is_default: self.class.kind == TypeKind::Interface && !is_abstract && !is_static,
            is_variadic: has(member.flags, ACC_VARARGS),
            type_params: signature
                .type_parameters
                .iter()
                .map(native_type_param)
                .collect::<Arc<[_]>>(),
            params: signature
                .parameters
                .into_iter()
                .enumerate()
                .map(|(index, ty)| (format!("arg{index}"), NativeType::Signature(ty)))
                .collect(),
            return_type: signature.return_type.map(NativeType::Signature),
        })
    }
}

fn native_type_param(param: &nova_classfile::TypeParameter) -> NativeTypeParam {
    NativeTypeParam {
        name: param.name.clone(),
        bounds: param.bounds().cloned().map(NativeType::Signature).collect(),
    }
}

impl TypeBackend for HostType {
    fn qualified_name(&self) -> &str {
        self.class.name
    }

    fn class_name(&self) -> &str {
        self.class_name
    }

    fn package_name(&self) -> &str {
        self.class.package
    }

    fn kind(&self) -> TypeKind {
        self.class.kind
    }

    fn access_specifier(&self) -> AccessSpecifier {
        AccessSpecifier::Public
    }

    fn native_type_parameters(&self) -> Result<Vec<NativeTypeParam>> {
        Ok(self
            .signature
            .type_parameters
            .iter()
            .map(native_type_param)
            .collect())
    }

    fn declared_supertypes(&self) -> Result<DeclaredSupertypes> {
        let as_native = |class: &nova_classfile::ClassTypeSignature| {
            NativeType::Signature(TypeSignature::Class(class.clone()))
        };
        let superclass = match self.class.kind {
            TypeKind::Interface | TypeKind::Annotation => None,
            TypeKind::Class | TypeKind::Enum => self.signature.super_class.as_ref().map(as_native),
        };
        Ok(DeclaredSupertypes {
            superclass,
            interfaces: self.signature.interfaces.iter().map(as_native).collect(),
        })
    }

    fn declared_fields(&self, this: &TypeDeclaration) -> Result<Vec<FieldDeclaration>> {
        self.class
            .fields
            .iter()
            .map(|field| {
                Ok(FieldDeclaration::new(
                    this.clone(),
                    field.name,
                    AccessSpecifier::from_flags(field.flags),
                    has(field.flags, ACC_STATIC),
                    NativeType::Signature(parse_field_signature(field.signature)?),
                ))
            })
            .collect()
    }

    fn declared_methods(&self, this: &TypeDeclaration) -> Result<Vec<MethodDeclaration>> {
        self.class
            .methods
            .iter()
            .filter(|method| method.name != "<init>")
            .map(|method| Ok(MethodDeclaration::new(self.callable(this, method)?)))
            .collect()
    }

    fn constructors(&self, this: &TypeDeclaration) -> Result<Vec<ConstructorDeclaration>> {
        self.class
            .methods
            .iter()
            .filter(|method| method.name == "<init>")
            .map(|method| Ok(ConstructorDeclaration::new(self.callable(this, method)?)))
            .collect()
    }

    fn internal_types(
        &self,
        _this: &TypeDeclaration,
        solver: &dyn TypeSolver,
    ) -> Result<Vec<TypeDeclaration>> {
        self.class
            .nested
            .iter()
            .map(|name| solver.solve_type(name))
            .collect()
    }

    fn containing_type(&self, solver: &dyn TypeSolver) -> Result<Option<TypeDeclaration>> {
        self.class
            .enclosing
            .map(|name| solver.solve_type(name))
            .transpose()
    }

    fn has_direct_annotation(
        &self,
        _this: &TypeDeclaration,
        qualified_name: &str,
        _solver: &dyn TypeSolver,
    ) -> bool {
        self.class
            .annotations
            .iter()
            .any(|annotation| *annotation == qualified_name)
    }

    fn enum_constants(&self) -> Vec<String> {
        Vec::new()
    }
}
