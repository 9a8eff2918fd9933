//! `resolve()` entry points for syntax nodes handed over by the AST layer.

use crate::ast::{MethodCallExpr, NameExpr, TypeRef};
use crate::context::Context;
use crate::decl::OBJECT;
use crate::error::{ResolveError, Result};
use crate::methods::MethodUsage;
use crate::reference::ReferenceType;
use crate::solver::TypeSolver;
use crate::symbol::{SymbolReference, ValueDeclaration};
use crate::ty::ResolvedType;

/// A syntax node that can be resolved against a context.
pub trait Resolvable {
    type Resolved;

    /// Fails with `UnsolvedSymbol` when the node does not denote anything in `context`.
    fn resolve(&self, context: &Context, solver: &dyn TypeSolver) -> Result<Self::Resolved>;
}

impl Resolvable for TypeRef {
    type Resolved = ResolvedType;

    fn resolve(&self, context: &Context, solver: &dyn TypeSolver) -> Result<ResolvedType> {
        context.resolve_type_ref(self, solver)
    }
}

impl Resolvable for NameExpr {
    type Resolved = ValueDeclaration;

    fn resolve(&self, context: &Context, solver: &dyn TypeSolver) -> Result<ValueDeclaration> {
        match context.solve_symbol(&self.name, solver)? {
            SymbolReference::Solved(value) => Ok(value),
            SymbolReference::Unsolved => Err(context.unsolved(&self.name)),
        }
    }
}

impl Resolvable for MethodCallExpr {
    type Resolved = MethodUsage;

    fn resolve(&self, context: &Context, solver: &dyn TypeSolver) -> Result<MethodUsage> {
        let Some(receiver) = &self.receiver else {
            return match context.solve_method(&self.name, &self.argument_types, solver)? {
                SymbolReference::Solved(method) => {
                    MethodUsage::new(method, solver)?.infer_method_type_parameters(&self.argument_types, solver)
                }
                SymbolReference::Unsolved => Err(context.unsolved(&self.name)),
            };
        };
        let found = match receiver {
            ResolvedType::Reference(reference) => self.solve_on(reference, solver)?,
            ResolvedType::TypeVariable(param) => {
                let mut found = None;
                for bound in param.bounds(solver)? {
                    if let ResolvedType::Reference(reference) = &bound {
                        found = self.solve_on(reference, solver)?;
                        if found.is_some() {
                            break;
                        }
                    }
                }
                match found {
                    Some(usage) => Some(usage),
                    None => self.solve_on(&ReferenceType::raw(solver.solve_type(OBJECT)?)?, solver)?,
                }
            }
            ResolvedType::Array(_) => self.solve_on(&ReferenceType::raw(solver.solve_type(OBJECT)?)?, solver)?,
            other => {
                return Err(ResolveError::unsupported(
                    "method call",
                    format!("receiver of type {}", other.describe()),
                ))
            }
        };
        found.ok_or_else(|| ResolveError::unsolved(self.name.as_str(), format!("type {}", receiver.describe())))
    }
}

impl MethodCallExpr {
    fn solve_on(&self, receiver: &ReferenceType, solver: &dyn TypeSolver) -> Result<Option<MethodUsage>> {
        receiver.solve_method_as_usage(&self.name, &self.argument_types, solver)
    }
}
