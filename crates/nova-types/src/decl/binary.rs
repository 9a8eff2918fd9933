use std::sync::Arc;

use nova_classfile::access::{has, ACC_ABSTRACT, ACC_STATIC};
use nova_classfile::{canonical_name, ClassSignature, ClassStub, MethodStub, TypeSignature};
use once_cell::sync::OnceCell;

use crate::decl::{
    AccessSpecifier, CallableData, ConstructorDeclaration, DeclaredSupertypes, FieldDeclaration,
    MethodDeclaration, NativeType, NativeTypeParam, TypeBackend, TypeDeclaration, TypeKind,
};
use crate::error::{ResolveError, Result};
use crate::solver::TypeSolver;

/// Declaration backed by a compiled class stub.
pub(crate) struct BinaryType {
    stub: ClassStub,
    qualified_name: String,
    package_name: String,
    class_name: String,
    signature: OnceCell<Result<ClassSignature>>,
}

impl BinaryType {
    pub(crate) fn new(stub: ClassStub) -> Self {
        let qualified_name = canonical_name(&stub.internal_name);
        let package_name = stub.package_name();
        let class_name = if package_name.is_empty() {
            qualified_name.clone()
        } else {
            qualified_name[package_name.len() + 1..].to_string()
        };
        Self {
            stub,
            qualified_name,
            package_name,
            class_name,
            signature: OnceCell::new(),
        }
    }

    fn class_signature(&self) -> Result<&ClassSignature> {
        self.signature
            .get_or_init(|| self.stub.class_signature().map_err(ResolveError::from))
            .as_ref()
            .map_err(Clone::clone)
    }

    fn own_inner_class_flags(&self) -> Option<u16> {
        self.stub
            .inner_classes
            .iter()
            .find(|info| info.inner_class == self.stub.internal_name)
            .map(|info| info.access_flags)
    }

    fn method_data(&self, this: &TypeDeclaration, method: &MethodStub) -> Result<CallableData> {
        let signature = method.method_signature()?;
        let type_params: Arc<[NativeTypeParam]> = signature
            .type_parameters
            .iter()
            .map(native_type_param)
            .collect();
        let params = signature
            .parameters
            .into_iter()
            .enumerate()
            .map(|(index, ty)| (format!("arg{index}"), NativeType::Signature(ty)))
            .collect();
        let is_abstract = has(method.access_flags, ACC_ABSTRACT);
        let is_static = has(method.access_flags, ACC_STATIC);
        Ok(CallableData {
            declaring: this.clone(),
            name: method.name.clone(),
            access: AccessSpecifier::from_flags(method.access_flags),
            is_static,
            is_abstract,
            is_default: self.stub.is_interface() && !is_abstract && !is_static,
            is_variadic: method.is_varargs(),
            type_params,
            params,
            return_type: signature.return_type.map(NativeType::Signature),
        })
    }
}

fn native_type_param(param: &nova_classfile::TypeParameter) -> NativeTypeParam {
    NativeTypeParam {
        name: param.name.clone(),
        bounds: param
            .bounds()
            .cloned()
            .map(NativeType::Signature)
            .collect(),
    }
}

/// Annotations may be recorded as internal names or as descriptors (`Ljava/lang/Deprecated;`).
fn annotation_name(raw: &str) -> String {
    let internal = raw
        .strip_prefix('L')
        .and_then(|rest| rest.strip_suffix(';'))
        .unwrap_or(raw);
    canonical_name(internal)
}

impl TypeBackend for BinaryType {
    fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn package_name(&self) -> &str {
        &self.package_name
    }

    fn kind(&self) -> TypeKind {
        if self.stub.is_annotation() {
            TypeKind::Annotation
        } else if self.stub.is_interface() {
            TypeKind::Interface
        } else if self.stub.is_enum() {
            TypeKind::Enum
        } else {
            TypeKind::Class
        }
    }

    fn access_specifier(&self) -> AccessSpecifier {
        AccessSpecifier::from_flags(
            self.own_inner_class_flags()
                .unwrap_or(self.stub.access_flags),
        )
    }

    fn native_type_parameters(&self) -> Result<Vec<NativeTypeParam>> {
        Ok(self
            .class_signature()?
            .type_parameters
            .iter()
            .map(native_type_param)
            .collect())
    }

    fn declared_supertypes(&self) -> Result<DeclaredSupertypes> {
        let signature = self.class_signature()?;
        let as_native = |class: &nova_classfile::ClassTypeSignature| {
            NativeType::Signature(TypeSignature::Class(class.clone()))
        };
        // Interfaces record `java/lang/Object` as their super class.
        let superclass = if self.stub.is_interface() {
            None
        } else {
            signature.super_class.as_ref().map(as_native)
        };
        Ok(DeclaredSupertypes {
            superclass,
            interfaces: signature.interfaces.iter().map(as_native).collect(),
        })
    }

    fn declared_fields(&self, this: &TypeDeclaration) -> Result<Vec<FieldDeclaration>> {
        self.stub
            .fields
            .iter()
            .filter(|field| !field.is_synthetic())
            .map(|field| {
                Ok(FieldDeclaration::new(
                    this.clone(),
                    field.name.as_str(),
                    AccessSpecifier::from_flags(field.access_flags),
                    field.is_static(),
                    NativeType::Signature(field.type_signature()?),
                ))
            })
            .collect()
    }

    fn declared_methods(&self, this: &TypeDeclaration) -> Result<Vec<MethodDeclaration>> {
        self.stub
            .methods
            .iter()
            .filter(|method| {
                !method.is_constructor()
                    && !method.is_static_initializer()
                    && !method.is_compiler_generated()
            })
            .map(|method| Ok(MethodDeclaration::new(self.method_data(this, method)?)))
            .collect()
    }

    fn constructors(&self, this: &TypeDeclaration) -> Result<Vec<ConstructorDeclaration>> {
        self.stub
            .methods
            .iter()
            .filter(|method| method.is_constructor() && !method.is_synthetic())
            .map(|method| Ok(ConstructorDeclaration::new(self.method_data(this, method)?)))
            .collect()
    }

    fn internal_types(
        &self,
        _this: &TypeDeclaration,
        solver: &dyn TypeSolver,
    ) -> Result<Vec<TypeDeclaration>> {
        self.stub
            .member_classes()
            .map(|info| solver.solve_type(&canonical_name(&info.inner_class)))
            .collect()
    }

    fn containing_type(&self, solver: &dyn TypeSolver) -> Result<Option<TypeDeclaration>> {
        let outer = self
            .stub
            .inner_classes
            .iter()
            .find(|info| info.inner_class == self.stub.internal_name)
            .and_then(|info| info.outer_class.as_deref());
        match outer {
            Some(outer) => Ok(Some(solver.solve_type(&canonical_name(outer))?)),
            None => Ok(None),
        }
    }

    fn has_direct_annotation(
        &self,
        _this: &TypeDeclaration,
        qualified_name: &str,
        _solver: &dyn TypeSolver,
    ) -> bool {
        self.stub
            .annotations
            .iter()
            .any(|annotation| annotation_name(annotation) == qualified_name)
    }

    fn enum_constants(&self) -> Vec<String> {
        self.stub
            .fields
            .iter()
            .filter(|field| field.is_enum_constant())
            .map(|field| field.name.clone())
            .collect()
    }
}
