use crate::decl::{FieldDeclaration, ParameterDeclaration};
use crate::error::{ResolveError, Result};
use crate::solver::TypeSolver;
use crate::ty::ResolvedType;

/// Outcome of a lookup that may legitimately find nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolReference<T> {
    Solved(T),
    Unsolved,
}

impl<T> SymbolReference<T> {
    pub fn solved(declaration: T) -> Self {
        SymbolReference::Solved(declaration)
    }

    pub fn unsolved() -> Self {
        SymbolReference::Unsolved
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SymbolReference::Solved(_))
    }

    /// Fails with `UnsupportedOperation` on an unsolved reference.
    pub fn corresponding_declaration(&self) -> Result<&T> {
        match self {
            SymbolReference::Solved(declaration) => Ok(declaration),
            SymbolReference::Unsolved => Err(ResolveError::unsupported(
                "corresponding_declaration",
                "unsolved symbol reference",
            )),
        }
    }

    pub fn into_declaration(self) -> Result<T> {
        match self {
            SymbolReference::Solved(declaration) => Ok(declaration),
            SymbolReference::Unsolved => Err(ResolveError::unsupported(
                "into_declaration",
                "unsolved symbol reference",
            )),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SymbolReference<U> {
        match self {
            SymbolReference::Solved(declaration) => SymbolReference::Solved(f(declaration)),
            SymbolReference::Unsolved => SymbolReference::Unsolved,
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            SymbolReference::Solved(declaration) => Some(declaration),
            SymbolReference::Unsolved => None,
        }
    }
}

impl<T> From<Option<T>> for SymbolReference<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(declaration) => SymbolReference::Solved(declaration),
            None => SymbolReference::Unsolved,
        }
    }
}

/// A local variable with its already resolved type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDeclaration {
    pub name: String,
    pub ty: ResolvedType,
}

/// Anything a bare name can denote as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueDeclaration {
    Field(FieldDeclaration),
    Parameter(ParameterDeclaration),
    Local(LocalDeclaration),
}

impl ValueDeclaration {
    pub fn name(&self) -> &str {
        match self {
            ValueDeclaration::Field(field) => field.name(),
            ValueDeclaration::Parameter(param) => param.name(),
            ValueDeclaration::Local(local) => &local.name,
        }
    }

    pub fn is_field(&self) -> bool {
        matches!(self, ValueDeclaration::Field(_))
    }

    pub fn is_parameter(&self) -> bool {
        matches!(self, ValueDeclaration::Parameter(_))
    }

    pub fn is_local(&self) -> bool {
        matches!(self, ValueDeclaration::Local(_))
    }

    pub fn ty(&self, solver: &dyn TypeSolver) -> Result<ResolvedType> {
        match self {
            ValueDeclaration::Field(field) => field.ty(solver),
            ValueDeclaration::Parameter(param) => param.ty(solver),
            ValueDeclaration::Local(local) => Ok(local.ty.clone()),
        }
    }
}
