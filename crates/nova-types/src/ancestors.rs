//! Direct supertypes and their transitive closure.

use std::collections::HashSet;

use crate::decl::{NativeType, TypeDeclaration, TypeKind, TypeScope, ENUM, OBJECT};
use crate::error::{ResolveError, Result};
use crate::reference::ReferenceType;
use crate::solver::TypeSolver;
use crate::ty::ResolvedType;

impl TypeDeclaration {
    /// Direct supertypes, superclass first, with implicit ones added:
    ///
    /// * classes extend `java.lang.Object` unless they name a superclass,
    /// * enums extend `java.lang.Enum<Self>`,
    /// * interfaces list `java.lang.Object` after their super-interfaces,
    /// * `java.lang.Object` has none.
    ///
    /// An ancestor that cannot be found fails with `InconsistentClasspath`, unless
    /// `accept_incomplete` is set, in which case only that edge is dropped.
    pub fn ancestors(
        &self,
        solver: &dyn TypeSolver,
        accept_incomplete: bool,
    ) -> Result<Vec<ReferenceType>> {
        if self.is_java_lang_object() {
            return Ok(Vec::new());
        }
        let declared = self.declared_supertypes()?;
        let scope = TypeScope::for_type(self.clone());
        let resolve = |ty: &NativeType| self.resolve_ancestor(&scope, ty, solver, accept_incomplete);

        let mut ancestors = Vec::with_capacity(declared.interfaces.len() + 1);
        match self.kind() {
            TypeKind::Interface | TypeKind::Annotation => {
                for interface in &declared.interfaces {
                    ancestors.extend(resolve(interface)?);
                }
                ancestors.extend(self.implicit_ancestor(OBJECT, Vec::new(), solver, accept_incomplete)?);
            }
            TypeKind::Class | TypeKind::Enum => {
                match &declared.superclass {
                    Some(superclass) => ancestors.extend(resolve(superclass)?),
                    None if self.kind() == TypeKind::Enum => {
                        let this = ReferenceType::raw(self.clone())?;
                        ancestors.extend(self.implicit_ancestor(
                            ENUM,
                            vec![this.into()],
                            solver,
                            accept_incomplete,
                        )?);
                    }
                    None => {
                        ancestors.extend(self.implicit_ancestor(OBJECT, Vec::new(), solver, accept_incomplete)?)
                    }
                }
                for interface in &declared.interfaces {
                    ancestors.extend(resolve(interface)?);
                }
            }
        }
        Ok(ancestors)
    }

    fn resolve_ancestor(
        &self,
        scope: &TypeScope,
        ty: &NativeType,
        solver: &dyn TypeSolver,
        accept_incomplete: bool,
    ) -> Result<Option<ReferenceType>> {
        match scope.resolve(ty, solver) {
            Ok(ResolvedType::Reference(ancestor)) => Ok(Some(ancestor)),
            Ok(other) => Err(ResolveError::Malformed {
                subject: format!("supertype of {}", self.qualified_name()),
                message: format!("`{}` is not a class or interface type", other.describe()),
            }),
            Err(err) => self.missing_ancestor(err, accept_incomplete),
        }
    }

    fn implicit_ancestor(
        &self,
        name: &str,
        arguments: Vec<ResolvedType>,
        solver: &dyn TypeSolver,
        accept_incomplete: bool,
    ) -> Result<Option<ReferenceType>> {
        match solver.solve_type(name) {
            Ok(declaration) => Ok(Some(ReferenceType::new(declaration, arguments)?)),
            Err(err) => self.missing_ancestor(err, accept_incomplete),
        }
    }

    fn missing_ancestor(
        &self,
        err: ResolveError,
        accept_incomplete: bool,
    ) -> Result<Option<ReferenceType>> {
        match err {
            ResolveError::UnsolvedSymbol { name, .. } if accept_incomplete => {
                tracing::debug!(
                    target: "nova.types",
                    declaration = %self.qualified_name(),
                    ancestor = %name,
                    "skipping unresolvable ancestor"
                );
                Ok(None)
            }
            ResolveError::UnsolvedSymbol { name, .. } => Err(ResolveError::InconsistentClasspath {
                ancestor: name,
                declaration: self.qualified_name().to_string(),
            }),
            other => Err(other),
        }
    }

    /// Transitive closure of [`ancestors`](Self::ancestors) in terms of this declaration's own
    /// type parameters.
    pub fn all_ancestors(
        &self,
        solver: &dyn TypeSolver,
        accept_incomplete: bool,
    ) -> Result<Vec<ReferenceType>> {
        ReferenceType::raw(self.clone())?.all_ancestors(solver, accept_incomplete)
    }

    /// Direct superclass; `None` for interfaces and `java.lang.Object`.
    pub fn superclass(&self, solver: &dyn TypeSolver) -> Result<Option<ReferenceType>> {
        if is_interface_like(self) {
            return Ok(None);
        }
        Ok(self
            .ancestors(solver, false)?
            .into_iter()
            .find(|ancestor| !is_interface_like(ancestor.declaration())))
    }

    /// Directly implemented (or, for interfaces, extended) interfaces.
    pub fn interfaces(&self, solver: &dyn TypeSolver) -> Result<Vec<ReferenceType>> {
        Ok(self
            .ancestors(solver, false)?
            .into_iter()
            .filter(|ancestor| is_interface_like(ancestor.declaration()))
            .collect())
    }

    /// The superclass chain, nearest first.
    pub fn all_superclasses(&self, solver: &dyn TypeSolver) -> Result<Vec<ReferenceType>> {
        let mut chain = Vec::new();
        let mut visited = HashSet::from([self.qualified_name().to_string()]);
        let mut current = ReferenceType::raw(self.clone())?;
        loop {
            let next = current
                .ancestors(solver, false)?
                .into_iter()
                .find(|ancestor| !is_interface_like(ancestor.declaration()));
            match next {
                Some(superclass) if visited.insert(superclass.qualified_name().to_string()) => {
                    chain.push(superclass.clone());
                    current = superclass;
                }
                _ => return Ok(chain),
            }
        }
    }

    /// Every interface in the closure, including those implemented by superclasses.
    pub fn all_interfaces(&self, solver: &dyn TypeSolver) -> Result<Vec<ReferenceType>> {
        Ok(self
            .all_ancestors(solver, false)?
            .into_iter()
            .filter(|ancestor| is_interface_like(ancestor.declaration()))
            .collect())
    }

    /// Whether `other` is this declaration or one of its ancestors.
    pub fn is_subtype_of(&self, other: &TypeDeclaration, solver: &dyn TypeSolver) -> Result<bool> {
        if self == other || other.is_java_lang_object() {
            return Ok(true);
        }
        Ok(self
            .all_ancestors(solver, true)?
            .iter()
            .any(|ancestor| ancestor.declaration() == other))
    }
}

fn is_interface_like(declaration: &TypeDeclaration) -> bool {
    matches!(declaration.kind(), TypeKind::Interface | TypeKind::Annotation)
}

impl ReferenceType {
    /// Ancestor closure in depth-first pre-order, each ancestor carrying the type arguments
    /// of the first path that reached it. Terminates on cyclic hierarchies.
    pub fn all_ancestors(
        &self,
        solver: &dyn TypeSolver,
        accept_incomplete: bool,
    ) -> Result<Vec<ReferenceType>> {
        let mut visited = HashSet::from([self.qualified_name().to_string()]);
        let mut closure = Vec::new();
        self.collect_ancestors(solver, accept_incomplete, &mut visited, &mut closure)?;
        Ok(closure)
    }

    fn collect_ancestors(
        &self,
        solver: &dyn TypeSolver,
        accept_incomplete: bool,
        visited: &mut HashSet<String>,
        closure: &mut Vec<ReferenceType>,
    ) -> Result<()> {
        for ancestor in self.ancestors(solver, accept_incomplete)? {
            if visited.insert(ancestor.qualified_name().to_string()) {
                closure.push(ancestor.clone());
                ancestor.collect_ancestors(solver, accept_incomplete, visited, closure)?;
            }
        }
        Ok(())
    }
}
