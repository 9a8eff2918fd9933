use std::fmt;
use std::sync::Arc;

use crate::decl::{AccessSpecifier, MethodScope, NativeType, NativeTypeParam, TypeDeclaration, TypeScope};
use crate::error::{ResolveError, Result};
use crate::solver::TypeSolver;
use crate::ty::ResolvedType;
use crate::type_params::{TypeParameter, TypeParameterOwner};

#[derive(Clone)]
pub struct FieldDeclaration {
    declaring: TypeDeclaration,
    name: String,
    access: AccessSpecifier,
    is_static: bool,
    ty: NativeType,
}

impl FieldDeclaration {
    pub(crate) fn new(
        declaring: TypeDeclaration,
        name: impl Into<String>,
        access: AccessSpecifier,
        is_static: bool,
        ty: NativeType,
    ) -> Self {
        Self {
            declaring,
            name: name.into(),
            access,
            is_static,
            ty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declaring_type(&self) -> &TypeDeclaration {
        &self.declaring
    }

    pub fn access_specifier(&self) -> AccessSpecifier {
        self.access
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Declared type, with type variables referring to the declaring type's parameters.
    pub fn ty(&self, solver: &dyn TypeSolver) -> Result<ResolvedType> {
        TypeScope::for_type(self.declaring.clone()).resolve(&self.ty, solver)
    }
}

impl PartialEq for FieldDeclaration {
    fn eq(&self, other: &Self) -> bool {
        self.declaring == other.declaring && self.name == other.name
    }
}

impl Eq for FieldDeclaration {}

impl fmt::Debug for FieldDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldDeclaration({}.{})", self.declaring.qualified_name(), self.name)
    }
}

/// Shared representation of methods and constructors.
pub(crate) struct CallableData {
    pub(crate) declaring: TypeDeclaration,
    pub(crate) name: String,
    pub(crate) access: AccessSpecifier,
    pub(crate) is_static: bool,
    pub(crate) is_abstract: bool,
    pub(crate) is_default: bool,
    pub(crate) is_variadic: bool,
    pub(crate) type_params: Arc<[NativeTypeParam]>,
    pub(crate) params: Vec<(String, NativeType)>,
    /// `None` for `void` and for constructors.
    pub(crate) return_type: Option<NativeType>,
}

impl CallableData {
    fn scope(&self) -> TypeScope {
        if self.type_params.is_empty() {
            TypeScope::for_type(self.declaring.clone())
        } else {
            TypeScope::for_method(
                self.declaring.clone(),
                MethodScope {
                    name: self.name.clone(),
                    descriptor: self.descriptor(),
                    type_params: self.type_params.clone(),
                },
            )
        }
    }

    fn qualified_name(&self) -> String {
        format!("{}.{}", self.declaring.qualified_name(), self.name)
    }

    /// Parameter types as written, erased: `(java.util.List, T[])`.
    fn descriptor(&self) -> String {
        let params: Vec<String> = self.params.iter().map(|(_, ty)| ty.erased_name()).collect();
        format!("({})", params.join(", "))
    }

    fn param_type(&self, index: usize, solver: &dyn TypeSolver) -> Result<ResolvedType> {
        let (_, ty) = self.params.get(index).ok_or_else(|| {
            ResolveError::unsolved(
                format!("parameter #{index}"),
                format!("method {}", self.qualified_name()),
            )
        })?;
        self.scope().resolve(ty, solver)
    }

    fn param_types(&self, solver: &dyn TypeSolver) -> Result<Vec<ResolvedType>> {
        let scope = self.scope();
        self.params
            .iter()
            .map(|(_, ty)| scope.resolve(ty, solver))
            .collect()
    }

    fn type_parameters(&self) -> Vec<TypeParameter> {
        let scope = self.scope();
        self.type_params
            .iter()
            .enumerate()
            .map(|(index, param)| {
                TypeParameter::declared(
                    param.name.as_str(),
                    TypeParameterOwner::method_owner(
                        self.declaring.qualified_name(),
                        self.name.as_str(),
                        self.descriptor(),
                    ),
                    index,
                    param.bounds.clone(),
                    scope.clone(),
                )
            })
            .collect()
    }

    fn signature(&self, solver: &dyn TypeSolver) -> Result<String> {
        let params: Vec<String> = self
            .param_types(solver)?
            .iter()
            .map(ResolvedType::describe)
            .collect();
        Ok(format!("{}({})", self.name, params.join(", ")))
    }

    fn same_declaration(&self, other: &CallableData) -> bool {
        self.declaring == other.declaring
            && self.name == other.name
            && self.params.len() == other.params.len()
            && self
                .params
                .iter()
                .zip(&other.params)
                .all(|((_, a), (_, b))| a == b)
    }
}

#[derive(Clone)]
pub struct MethodDeclaration(Arc<CallableData>);

impl MethodDeclaration {
    pub(crate) fn new(data: CallableData) -> Self {
        Self(Arc::new(data))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// `java.util.List.add`
    pub fn qualified_name(&self) -> String {
        self.0.qualified_name()
    }

    pub fn declaring_type(&self) -> &TypeDeclaration {
        &self.0.declaring
    }

    pub fn access_specifier(&self) -> AccessSpecifier {
        self.0.access
    }

    pub fn is_static(&self) -> bool {
        self.0.is_static
    }

    pub fn is_abstract(&self) -> bool {
        self.0.is_abstract
    }

    /// Interface method with a body.
    pub fn is_default(&self) -> bool {
        self.0.is_default
    }

    pub fn is_variadic(&self) -> bool {
        self.0.is_variadic
    }

    pub fn number_of_params(&self) -> usize {
        self.0.params.len()
    }

    pub fn param(&self, index: usize) -> Option<ParameterDeclaration> {
        (index < self.0.params.len()).then(|| ParameterDeclaration {
            callable: self.0.clone(),
            index,
        })
    }

    pub fn params(&self) -> Vec<ParameterDeclaration> {
        (0..self.0.params.len())
            .map(|index| ParameterDeclaration {
                callable: self.0.clone(),
                index,
            })
            .collect()
    }

    pub fn param_type(&self, index: usize, solver: &dyn TypeSolver) -> Result<ResolvedType> {
        self.0.param_type(index, solver)
    }

    pub fn param_types(&self, solver: &dyn TypeSolver) -> Result<Vec<ResolvedType>> {
        self.0.param_types(solver)
    }

    /// Declared return type, [`ResolvedType::Void`] for `void` methods.
    pub fn return_type(&self, solver: &dyn TypeSolver) -> Result<ResolvedType> {
        match &self.0.return_type {
            Some(ty) => self.0.scope().resolve(ty, solver),
            None => Ok(ResolvedType::Void),
        }
    }

    pub fn type_parameters(&self) -> Vec<TypeParameter> {
        self.0.type_parameters()
    }

    /// `name(param types)`, e.g. `wait(long, int)` or `add(E)`.
    pub fn signature(&self, solver: &dyn TypeSolver) -> Result<String> {
        self.0.signature(solver)
    }
}

impl PartialEq for MethodDeclaration {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.same_declaration(&other.0)
    }
}

impl Eq for MethodDeclaration {}

impl fmt::Debug for MethodDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MethodDeclaration({}/{})", self.qualified_name(), self.number_of_params())
    }
}

#[derive(Clone)]
pub struct ConstructorDeclaration(Arc<CallableData>);

impl ConstructorDeclaration {
    pub(crate) fn new(data: CallableData) -> Self {
        Self(Arc::new(data))
    }

    pub fn declaring_type(&self) -> &TypeDeclaration {
        &self.0.declaring
    }

    pub fn access_specifier(&self) -> AccessSpecifier {
        self.0.access
    }

    pub fn is_variadic(&self) -> bool {
        self.0.is_variadic
    }

    pub fn number_of_params(&self) -> usize {
        self.0.params.len()
    }

    pub fn param(&self, index: usize) -> Option<ParameterDeclaration> {
        (index < self.0.params.len()).then(|| ParameterDeclaration {
            callable: self.0.clone(),
            index,
        })
    }

    pub fn param_type(&self, index: usize, solver: &dyn TypeSolver) -> Result<ResolvedType> {
        self.0.param_type(index, solver)
    }

    pub fn param_types(&self, solver: &dyn TypeSolver) -> Result<Vec<ResolvedType>> {
        self.0.param_types(solver)
    }

    pub fn type_parameters(&self) -> Vec<TypeParameter> {
        self.0.type_parameters()
    }

    pub fn signature(&self, solver: &dyn TypeSolver) -> Result<String> {
        self.0.signature(solver)
    }
}

impl PartialEq for ConstructorDeclaration {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.same_declaration(&other.0)
    }
}

impl Eq for ConstructorDeclaration {}

impl fmt::Debug for ConstructorDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConstructorDeclaration({}/{})",
            self.0.declaring.qualified_name(),
            self.number_of_params()
        )
    }
}

/// A formal parameter of a method or constructor.
#[derive(Clone)]
pub struct ParameterDeclaration {
    callable: Arc<CallableData>,
    index: usize,
}

impl ParameterDeclaration {
    pub fn name(&self) -> &str {
        &self.callable.params[self.index].0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Only the last parameter of a variadic method is variadic.
    pub fn is_variadic(&self) -> bool {
        self.callable.is_variadic && self.index + 1 == self.callable.params.len()
    }

    pub fn ty(&self, solver: &dyn TypeSolver) -> Result<ResolvedType> {
        self.callable.param_type(self.index, solver)
    }
}

impl PartialEq for ParameterDeclaration {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && (Arc::ptr_eq(&self.callable, &other.callable)
                || self.callable.same_declaration(&other.callable))
    }
}

impl Eq for ParameterDeclaration {}

impl fmt::Debug for ParameterDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParameterDeclaration({}#{})", self.callable.qualified_name(), self.index)
    }
}
