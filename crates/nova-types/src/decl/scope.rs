use std::collections::HashSet;
use std::sync::Arc;

use nova_classfile::{TypeArgument, TypeSignature};

use crate::ast::TypeRef;
use crate::context::Context;
use crate::decl::TypeDeclaration;
use crate::error::{ResolveError, Result};
use crate::lookup::{resolve_type_ref, TypeNameLookup};
use crate::reference::ReferenceType;
use crate::solver::TypeSolver;
use crate::symbol::SymbolReference;
use crate::ty::{ResolvedType, Wildcard};
use crate::type_params::{TypeParameter, TypeParameterOwner};

/// A type as the backend stores it, resolved lazily against a [`TypeScope`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NativeType {
    /// Generic signature or descriptor from compiled metadata.
    Signature(TypeSignature),
    /// Type as written in source.
    Source(TypeRef),
}

impl NativeType {
    /// Spelling of the type without type arguments: `java.util.List`, `T`, `int[]`.
    pub(crate) fn erased_name(&self) -> String {
        match self {
            NativeType::Signature(signature) => signature.erased_source_name(),
            NativeType::Source(type_ref) => erased_source_name(type_ref),
        }
    }
}

fn erased_source_name(type_ref: &TypeRef) -> String {
    match type_ref {
        TypeRef::Primitive(primitive) => primitive.name().to_string(),
        TypeRef::Void => "void".to_string(),
        TypeRef::Named { name, .. } => name.clone(),
        TypeRef::Array(component) => format!("{}[]", erased_source_name(component)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NativeTypeParam {
    pub(crate) name: String,
    pub(crate) bounds: Vec<NativeType>,
}

#[derive(Clone)]
pub(crate) struct MethodScope {
    pub(crate) name: String,
    pub(crate) descriptor: String,
    pub(crate) type_params: Arc<[NativeTypeParam]>,
}

/// Where a member's types are resolved: the declaring type, and the generic method when the
/// member is one.
#[derive(Clone)]
pub(crate) struct TypeScope {
    declaring: TypeDeclaration,
    method: Option<MethodScope>,
}

impl TypeScope {
    pub(crate) fn for_type(declaring: TypeDeclaration) -> Self {
        Self {
            declaring,
            method: None,
        }
    }

    pub(crate) fn for_method(declaring: TypeDeclaration, method: MethodScope) -> Self {
        Self {
            declaring,
            method: Some(method),
        }
    }

    pub(crate) fn resolve(&self, ty: &NativeType, solver: &dyn TypeSolver) -> Result<ResolvedType> {
        match ty {
            NativeType::Signature(signature) => self.resolve_signature(signature, solver),
            NativeType::Source(type_ref) => resolve_type_ref(self, type_ref, solver),
        }
    }

    fn resolve_signature(
        &self,
        signature: &TypeSignature,
        solver: &dyn TypeSolver,
    ) -> Result<ResolvedType> {
        match signature {
            TypeSignature::Base(base) => Ok(ResolvedType::Primitive((*base).into())),
            TypeSignature::Array(component) => Ok(ResolvedType::array_of(
                self.resolve_signature(component, solver)?,
            )),
            TypeSignature::TypeVariable(name) => match self.type_variable(name, solver)? {
                Some(param) => Ok(ResolvedType::TypeVariable(param)),
                None => Err(ResolveError::unsolved(name.as_str(), self.describe_scope())),
            },
            TypeSignature::Class(class) => {
                let declaration = solver.solve_type(&class.canonical_name())?;
                let arguments = class
                    .type_arguments()
                    .iter()
                    .map(|argument| self.resolve_type_argument(argument, solver))
                    .collect::<Result<Vec<_>>>()?;
                Ok(ReferenceType::new(declaration, arguments)?.into())
            }
        }
    }

    fn resolve_type_argument(
        &self,
        argument: &TypeArgument,
        solver: &dyn TypeSolver,
    ) -> Result<ResolvedType> {
        Ok(match argument {
            TypeArgument::Any => Wildcard::Unbounded.into(),
            TypeArgument::Exact(ty) => self.resolve_signature(ty, solver)?,
            TypeArgument::Extends(ty) => {
                Wildcard::extends_bound(self.resolve_signature(ty, solver)?).into()
            }
            TypeArgument::Super(ty) => {
                Wildcard::super_bound(self.resolve_signature(ty, solver)?).into()
            }
        })
    }

    fn method_type_variable(&self, name: &str) -> Option<TypeParameter> {
        let method = self.method.as_ref()?;
        let index = method.type_params.iter().position(|param| param.name == name)?;
        Some(TypeParameter::declared(
            name,
            TypeParameterOwner::method_owner(
                self.declaring.qualified_name(),
                method.name.as_str(),
                method.descriptor.as_str(),
            ),
            index,
            method.type_params[index].bounds.clone(),
            self.clone(),
        ))
    }
}

impl TypeNameLookup for TypeScope {
    /// Method type parameters shadow those of the declaring type, which shadow those of the
    /// enclosing types.
    fn type_variable(&self, name: &str, solver: &dyn TypeSolver) -> Result<Option<TypeParameter>> {
        if let Some(param) = self.method_type_variable(name) {
            return Ok(Some(param));
        }
        let mut visited = HashSet::new();
        let mut current = Some(self.declaring.clone());
        while let Some(declaration) = current {
            // Compiled metadata may describe enclosing classes in a cycle.
            if !visited.insert(declaration.qualified_name().to_string()) {
                break;
            }
            if let Some(param) = declaration
                .type_parameters()?
                .into_iter()
                .find(|param| param.name() == name)
            {
                return Ok(Some(param));
            }
            current = declaration.containing_type(solver)?;
        }
        Ok(None)
    }

    fn type_declaration(
        &self,
        name: &str,
        solver: &dyn TypeSolver,
    ) -> Result<SymbolReference<TypeDeclaration>> {
        Context::for_declaration(&self.declaring).solve_type(name, solver)
    }

    fn describe_scope(&self) -> String {
        match &self.method {
            Some(method) => format!("method {}.{}", self.declaring.qualified_name(), method.name),
            None => format!("type {}", self.declaring.qualified_name()),
        }
    }
}
