use std::sync::Arc;

use nova_config::{ResolutionConfig, ResolverConfig};

use crate::context::Context;
use crate::decl::{MethodDeclaration, TypeDeclaration};
use crate::error::Result;
use crate::functional::{functional_method, is_functional_interface_type};
use crate::methods::MethodUsage;
use crate::reference::ReferenceType;
use crate::resolvable::Resolvable;
use crate::solver::TypeSolver;
use crate::symbol::SymbolReference;
use crate::ty::ResolvedType;

/// A type solver bundled with resolution settings.
#[derive(Clone)]
pub struct JavaSymbolSolver {
    solver: Arc<dyn TypeSolver>,
    config: ResolutionConfig,
}

impl JavaSymbolSolver {
    pub fn new(solver: Arc<dyn TypeSolver>, config: ResolutionConfig) -> Self {
        Self { solver, config }
    }

    pub fn from_config(solver: Arc<dyn TypeSolver>, config: &ResolverConfig) -> Self {
        Self::new(solver, config.resolution.clone())
    }

    pub fn type_solver(&self) -> &dyn TypeSolver {
        self.solver.as_ref()
    }

    pub fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    pub fn solve_type(&self, qualified_name: &str) -> Result<TypeDeclaration> {
        self.solver.solve_type(qualified_name)
    }

    /// Ancestor closure; unresolvable ancestors are skipped when
    /// `accept_incomplete_ancestors` is configured.
    pub fn all_ancestors(&self, ty: &ReferenceType) -> Result<Vec<ReferenceType>> {
        ty.all_ancestors(self.type_solver(), self.config.accept_incomplete_ancestors)
    }

    pub fn is_assignable_by(&self, target: &ResolvedType, candidate: &ResolvedType) -> Result<bool> {
        target.is_assignable_by(candidate, self.type_solver())
    }

    pub fn solve_method(
        &self,
        declaration: &TypeDeclaration,
        name: &str,
        argument_types: &[ResolvedType],
        static_only: bool,
    ) -> Result<SymbolReference<MethodDeclaration>> {
        declaration.solve_method(name, argument_types, static_only, self.type_solver())
    }

    pub fn functional_method(&self, ty: &ResolvedType) -> Result<Option<MethodUsage>> {
        functional_method(ty, self.type_solver())
    }

    pub fn is_functional_interface(&self, ty: &ResolvedType) -> Result<bool> {
        is_functional_interface_type(ty, self.type_solver())
    }

    pub fn resolve<N: Resolvable>(&self, node: &N, context: &Context) -> Result<N::Resolved> {
        node.resolve(context, self.type_solver())
    }
}

impl std::fmt::Debug for JavaSymbolSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JavaSymbolSolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
