//! Lexical scopes and outward name lookup.
//!
//! A [`Context`] wraps a single scope and an optional parent. Every lookup checks the scope's
//! own declarations first and then delegates to the parent; "not found" is reported as
//! [`SymbolReference::Unsolved`], only broken input is an error.

use std::sync::Arc;

use crate::ast::{CompilationUnit, Import, LocalVar, TypeRef};
use crate::decl::{MethodDeclaration, TypeDeclaration};
use crate::error::{ResolveError, Result};
use crate::lookup::{resolve_type_ref, TypeNameLookup};
use crate::methods::select_most_specific;
use crate::solver::TypeSolver;
use crate::symbol::{LocalDeclaration, SymbolReference, ValueDeclaration};
use crate::ty::ResolvedType;
use crate::type_params::TypeParameter;

const JAVA_LANG: &str = "java.lang";

#[derive(Debug, Clone)]
pub enum Scope {
    CompilationUnit(Arc<CompilationUnit>),
    Class(TypeDeclaration),
    Method(MethodDeclaration),
    /// Local variables, types already resolved.
    Block(Vec<LocalDeclaration>),
}

#[derive(Debug, Clone)]
pub struct Context {
    scope: Scope,
    parent: Option<Arc<Context>>,
}

impl Context {
    pub fn new(scope: Scope, parent: Option<Arc<Context>>) -> Arc<Self> {
        Arc::new(Self { scope, parent })
    }

    pub fn compilation_unit(unit: Arc<CompilationUnit>) -> Arc<Self> {
        Self::new(Scope::CompilationUnit(unit), None)
    }

    /// Scope chain of a declaration: the class itself, its enclosing classes, then the
    /// compilation unit. Declarations without source only get their class scope.
    pub fn for_declaration(declaration: &TypeDeclaration) -> Arc<Self> {
        let parent = declaration.as_source().map(|source| match source.enclosing() {
            Some(outer) => Self::for_declaration(outer),
            None => Self::compilation_unit(source.unit().clone()),
        });
        Self::new(Scope::Class(declaration.clone()), parent)
    }

    pub fn for_method(method: &MethodDeclaration) -> Arc<Self> {
        let parent = Self::for_declaration(method.declaring_type());
        Self::new(Scope::Method(method.clone()), Some(parent))
    }

    /// A block declaring `locals`, whose types are resolved against `parent`.
    pub fn block(parent: Arc<Context>, locals: &[LocalVar], solver: &dyn TypeSolver) -> Result<Arc<Self>> {
        let locals = locals
            .iter()
            .map(|local| {
                Ok(LocalDeclaration {
                    name: local.name.clone(),
                    ty: parent.resolve_type_ref(&local.ty, solver)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(Scope::Block(locals), Some(parent)))
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn parent(&self) -> Option<&Arc<Context>> {
        self.parent.as_ref()
    }

    /// Type named `name` (simple or dotted) as visible from this scope.
    pub fn solve_type(&self, name: &str, solver: &dyn TypeSolver) -> Result<SymbolReference<TypeDeclaration>> {
        let Some((head, rest)) = name.split_once('.') else {
            return self.solve_simple_type(name, solver);
        };
        if let SymbolReference::Solved(outer) = self.solve_simple_type(head, solver)? {
            if let Some(inner) = internal_type(&outer, rest, solver)? {
                return Ok(SymbolReference::Solved(inner));
            }
        }
        Ok(solver.try_solve_type(name))
    }

    fn solve_simple_type(&self, name: &str, solver: &dyn TypeSolver) -> Result<SymbolReference<TypeDeclaration>> {
        match &self.scope {
            Scope::Class(declaration) => {
                if declaration.name() == name {
                    return Ok(SymbolReference::Solved(declaration.clone()));
                }
                if let Some(inner) = internal_type(declaration, name, solver)? {
                    return Ok(SymbolReference::Solved(inner));
                }
            }
            Scope::CompilationUnit(unit) => {
                if let SymbolReference::Solved(found) = solve_type_in_unit(unit, name, solver) {
                    return Ok(SymbolReference::Solved(found));
                }
            }
            Scope::Method(_) | Scope::Block(_) => {}
        }
        match &self.parent {
            Some(parent) => parent.solve_simple_type(name, solver),
            None if matches!(self.scope, Scope::CompilationUnit(_)) => Ok(SymbolReference::Unsolved),
            None => Ok(solve_implicit(name, solver)),
        }
    }

    /// Type variable `name` declared by an enclosing method or class.
    pub fn solve_generic_type(&self, name: &str, solver: &dyn TypeSolver) -> Result<Option<ResolvedType>> {
        Ok(self
            .type_variable(name, solver)?
            .map(ResolvedType::TypeVariable))
    }

    /// Value named `name`: locals, parameters, fields (inherited ones included), then
    /// statically imported fields.
    pub fn solve_symbol(&self, name: &str, solver: &dyn TypeSolver) -> Result<SymbolReference<ValueDeclaration>> {
        match &self.scope {
            Scope::Block(locals) => {
                if let Some(local) = locals.iter().rev().find(|local| local.name == name) {
                    return Ok(SymbolReference::Solved(ValueDeclaration::Local(local.clone())));
                }
            }
            Scope::Method(method) => {
                if let Some(param) = method.params().into_iter().find(|param| param.name() == name) {
                    return Ok(SymbolReference::Solved(ValueDeclaration::Parameter(param)));
                }
            }
            Scope::Class(declaration) => {
                if let SymbolReference::Solved(field) = declaration.solve_symbol(name, solver)? {
                    return Ok(SymbolReference::Solved(field));
                }
            }
            Scope::CompilationUnit(unit) => {
                for declaration in static_import_sources(unit, name, solver) {
                    if let SymbolReference::Solved(field) = declaration.solve_symbol(name, solver)? {
                        if field_is_static(&field) {
                            return Ok(SymbolReference::Solved(field));
                        }
                    }
                }
            }
        }
        match &self.parent {
            Some(parent) => parent.solve_symbol(name, solver),
            None => Ok(SymbolReference::Unsolved),
        }
    }

    /// Unqualified method call: methods of the enclosing classes, innermost first, then
    /// statically imported methods.
    pub fn solve_method(
        &self,
        name: &str,
        argument_types: &[ResolvedType],
        solver: &dyn TypeSolver,
    ) -> Result<SymbolReference<MethodDeclaration>> {
        match &self.scope {
            Scope::Class(declaration) => {
                if let SymbolReference::Solved(method) =
                    declaration.solve_method(name, argument_types, false, solver)?
                {
                    return Ok(SymbolReference::Solved(method));
                }
            }
            Scope::CompilationUnit(unit) => {
                let mut candidates = Vec::new();
                for declaration in static_import_sources(unit, name, solver) {
                    if let SymbolReference::Solved(method) =
                        declaration.solve_method(name, argument_types, true, solver)?
                    {
                        candidates.push(method);
                    }
                }
                if let SymbolReference::Solved(method) =
                    select_most_specific(name, candidates, argument_types, solver)?
                {
                    return Ok(SymbolReference::Solved(method));
                }
            }
            Scope::Method(_) | Scope::Block(_) => {}
        }
        match &self.parent {
            Some(parent) => parent.solve_method(name, argument_types, solver),
            None => Ok(SymbolReference::Unsolved),
        }
    }

    /// Resolves a source type reference as written in this scope.
    pub fn resolve_type_ref(&self, ty: &TypeRef, solver: &dyn TypeSolver) -> Result<ResolvedType> {
        resolve_type_ref(self, ty, solver)
    }
}

impl TypeNameLookup for Context {
    fn type_variable(&self, name: &str, solver: &dyn TypeSolver) -> Result<Option<TypeParameter>> {
        let found = match &self.scope {
            Scope::Method(method) => method
                .type_parameters()
                .into_iter()
                .find(|param| param.name() == name),
            Scope::Class(declaration) => declaration
                .type_parameters()?
                .into_iter()
                .find(|param| param.name() == name),
            Scope::CompilationUnit(_) | Scope::Block(_) => None,
        };
        match (found, &self.parent) {
            (Some(param), _) => Ok(Some(param)),
            (None, Some(parent)) => parent.type_variable(name, solver),
            (None, None) => Ok(None),
        }
    }

    fn type_declaration(
        &self,
        name: &str,
        solver: &dyn TypeSolver,
    ) -> Result<SymbolReference<TypeDeclaration>> {
        self.solve_type(name, solver)
    }

    fn describe_scope(&self) -> String {
        match &self.scope {
            Scope::CompilationUnit(unit) => match unit.package_name() {
                "" => "compilation unit".to_string(),
                package => format!("compilation unit of package {package}"),
            },
            Scope::Class(declaration) => format!("type {}", declaration.qualified_name()),
            Scope::Method(method) => format!("method {}", method.qualified_name()),
            Scope::Block(_) => match &self.parent {
                Some(parent) => format!("block in {}", parent.describe_scope()),
                None => "block".to_string(),
            },
        }
    }
}

impl Context {
    pub(crate) fn unsolved(&self, name: &str) -> ResolveError {
        ResolveError::unsolved(name, self.describe_scope())
    }
}

/// `None` when `outer` has no such member type.
fn internal_type(outer: &TypeDeclaration, name: &str, solver: &dyn TypeSolver) -> Result<Option<TypeDeclaration>> {
    match outer.internal_type(name, solver) {
        Ok(inner) => Ok(Some(inner)),
        Err(err) if err.is_unsolved() => Ok(None),
        Err(err) => Err(err),
    }
}

/// Top-level types of the unit, single-type imports, the unit's package, on-demand imports,
/// `java.lang`, then the name taken as fully qualified.
fn solve_type_in_unit(
    unit: &Arc<CompilationUnit>,
    name: &str,
    solver: &dyn TypeSolver,
) -> SymbolReference<TypeDeclaration> {
    if unit.types.iter().any(|class| class.name == name) {
        if let Some(declaration) = TypeDeclaration::from_compilation_unit(unit)
            .into_iter()
            .find(|declaration| declaration.name() == name)
        {
            return SymbolReference::Solved(declaration);
        }
    }

    let type_imports = || unit.imports.iter().filter(|import| !import.is_static);
    for import in type_imports().filter(|import| !import.is_asterisk) {
        if import.simple_name() == name {
            if let SymbolReference::Solved(found) = solver.try_solve_type(&import.name) {
                return SymbolReference::Solved(found);
            }
        }
    }

    if let SymbolReference::Solved(found) = solver.try_solve_type(&qualify(unit.package_name(), name)) {
        return SymbolReference::Solved(found);
    }

    for import in type_imports().filter(|import| import.is_asterisk) {
        if let SymbolReference::Solved(found) = solver.try_solve_type(&qualify(&import.name, name)) {
            return SymbolReference::Solved(found);
        }
    }

    solve_implicit(name, solver)
}

fn solve_implicit(name: &str, solver: &dyn TypeSolver) -> SymbolReference<TypeDeclaration> {
    match solver.try_solve_type(&qualify(JAVA_LANG, name)) {
        SymbolReference::Solved(found) => SymbolReference::Solved(found),
        SymbolReference::Unsolved => solver.try_solve_type(name),
    }
}

fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{package}.{name}")
    }
}

/// Types whose static members named `name` are imported into the unit.
fn static_import_sources(unit: &CompilationUnit, name: &str, solver: &dyn TypeSolver) -> Vec<TypeDeclaration> {
    unit.imports
        .iter()
        .filter(|import| import.is_static && (import.is_asterisk || import.simple_name() == name))
        .filter_map(|import: &Import| match solver.try_solve_type(import.type_name()) {
            SymbolReference::Solved(declaration) => Some(declaration),
            SymbolReference::Unsolved => {
                tracing::debug!(
                    target: "nova.types",
                    import = %import.name,
                    "static import does not name a known type"
                );
                None
            }
        })
        .collect()
}

fn field_is_static(value: &ValueDeclaration) -> bool {
    matches!(value, ValueDeclaration::Field(field) if field.is_static())
}
