//! Resolution of source type references against a naming scope.

use crate::ast::{TypeArgRef, TypeRef};
use crate::decl::TypeDeclaration;
use crate::error::{ResolveError, Result};
use crate::reference::ReferenceType;
use crate::solver::TypeSolver;
use crate::symbol::SymbolReference;
use crate::ty::{ResolvedType, Wildcard};
use crate::type_params::TypeParameter;

/// A scope that can answer which type variable or type declaration a simple or dotted name
/// refers to.
pub(crate) trait TypeNameLookup {
    fn type_variable(&self, name: &str, solver: &dyn TypeSolver) -> Result<Option<TypeParameter>>;

    fn type_declaration(
        &self,
        name: &str,
        solver: &dyn TypeSolver,
    ) -> Result<SymbolReference<TypeDeclaration>>;

    /// Human readable description used in `UnsolvedSymbol` errors.
    fn describe_scope(&self) -> String;
}

pub(crate) fn resolve_type_ref(
    lookup: &dyn TypeNameLookup,
    ty: &TypeRef,
    solver: &dyn TypeSolver,
) -> Result<ResolvedType> {
    match ty {
        TypeRef::Primitive(primitive) => Ok(ResolvedType::Primitive(*primitive)),
        TypeRef::Void => Ok(ResolvedType::Void),
        TypeRef::Array(component) => Ok(ResolvedType::array_of(resolve_type_ref(
            lookup, component, solver,
        )?)),
        TypeRef::Named { name, args } => {
            if args.is_empty() && !name.contains('.') {
                if let Some(param) = lookup.type_variable(name, solver)? {
                    return Ok(ResolvedType::TypeVariable(param));
                }
            }
            let declaration = match lookup.type_declaration(name, solver)? {
                SymbolReference::Solved(declaration) => declaration,
                SymbolReference::Unsolved => {
                    return Err(ResolveError::unsolved(name.as_str(), lookup.describe_scope()))
                }
            };
            let arguments = args
                .iter()
                .map(|arg| resolve_type_arg(lookup, arg, solver))
                .collect::<Result<Vec<_>>>()?;
            Ok(ReferenceType::new(declaration, arguments)?.into())
        }
    }
}

fn resolve_type_arg(
    lookup: &dyn TypeNameLookup,
    arg: &TypeArgRef,
    solver: &dyn TypeSolver,
) -> Result<ResolvedType> {
    Ok(match arg {
        TypeArgRef::Type(ty) => resolve_type_ref(lookup, ty, solver)?,
        TypeArgRef::Wildcard => Wildcard::Unbounded.into(),
        TypeArgRef::Extends(ty) => Wildcard::extends_bound(resolve_type_ref(lookup, ty, solver)?).into(),
        TypeArgRef::Super(ty) => Wildcard::super_bound(resolve_type_ref(lookup, ty, solver)?).into(),
    })
}
