//! Type solvers: name to declaration lookup over a set of sources.

use std::collections::HashMap;
use std::sync::Arc;

use nova_classfile::{canonical_name, ClassStub};

use crate::ast::CompilationUnit;
use crate::decl::{host_type, TypeDeclaration};
use crate::error::{ResolveError, Result};
use crate::symbol::SymbolReference;

/// Looks up type declarations by canonical name (`java.util.Map.Entry`).
pub trait TypeSolver: Send + Sync {
    fn try_solve_type(&self, qualified_name: &str) -> SymbolReference<TypeDeclaration>;

    fn solve_type(&self, qualified_name: &str) -> Result<TypeDeclaration> {
        match self.try_solve_type(qualified_name) {
            SymbolReference::Solved(declaration) => Ok(declaration),
            SymbolReference::Unsolved => {
                Err(ResolveError::unsolved(qualified_name, "type solver"))
            }
        }
    }
}

impl<T: TypeSolver + ?Sized> TypeSolver for Arc<T> {
    fn try_solve_type(&self, qualified_name: &str) -> SymbolReference<TypeDeclaration> {
        (**self).try_solve_type(qualified_name)
    }
}

/// The built-in core library descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostTypeSolver;

impl TypeSolver for HostTypeSolver {
    fn try_solve_type(&self, qualified_name: &str) -> SymbolReference<TypeDeclaration> {
        host_type(qualified_name).into()
    }
}

/// In-memory declarations, typically the project's own sources and class stubs.
#[derive(Debug, Default, Clone)]
pub struct MemoryTypeSolver {
    types: HashMap<String, TypeDeclaration>,
}

impl MemoryTypeSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_declaration(&mut self, declaration: TypeDeclaration) {
        self.types
            .insert(declaration.qualified_name().to_string(), declaration);
    }

    pub fn add_class_stub(&mut self, stub: ClassStub) -> TypeDeclaration {
        let declaration = TypeDeclaration::from_class_stub(stub);
        self.add_declaration(declaration.clone());
        declaration
    }

    /// Parses a `.class` file and registers the declaration it describes.
    pub fn add_class_bytes(&mut self, bytes: &[u8]) -> Result<TypeDeclaration> {
        let stub = ClassStub::parse(bytes)?;
        tracing::trace!(
            target: "nova.types",
            class = %stub.internal_name,
            len = bytes.len(),
            "loaded class file"
        );
        Ok(self.add_class_stub(stub))
    }

    /// Registers every type of the unit, nested ones included.
    pub fn add_compilation_unit(&mut self, unit: CompilationUnit) -> Vec<TypeDeclaration> {
        let unit = Arc::new(unit);
        let top_level = TypeDeclaration::from_compilation_unit(&unit);
        let mut pending = top_level.clone();
        while let Some(declaration) = pending.pop() {
            if let Some(source) = declaration.as_source() {
                pending.extend(source.member_types(&declaration));
            }
            self.add_declaration(declaration);
        }
        top_level
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeSolver for MemoryTypeSolver {
    fn try_solve_type(&self, qualified_name: &str) -> SymbolReference<TypeDeclaration> {
        match self.types.get(qualified_name) {
            Some(declaration) => SymbolReference::Solved(declaration.clone()),
            // Binary (`a.b.Outer$Inner`) and internal (`a/b/Outer`) spellings.
            None if qualified_name.contains(['/', '$']) => self
                .types
                .get(&canonical_name(qualified_name))
                .cloned()
                .into(),
            None => SymbolReference::Unsolved,
        }
    }
}

/// Chains solvers; the first one that knows a name wins.
#[derive(Clone, Default)]
pub struct CombinedTypeSolver {
    solvers: Vec<Arc<dyn TypeSolver>>,
}

impl CombinedTypeSolver {
    pub fn new(solvers: Vec<Arc<dyn TypeSolver>>) -> Self {
        Self { solvers }
    }

    pub fn add(&mut self, solver: Arc<dyn TypeSolver>) {
        self.solvers.push(solver);
    }

    pub fn with(mut self, solver: impl TypeSolver + 'static) -> Self {
        self.solvers.push(Arc::new(solver));
        self
    }
}

impl TypeSolver for CombinedTypeSolver {
    fn try_solve_type(&self, qualified_name: &str) -> SymbolReference<TypeDeclaration> {
        for solver in &self.solvers {
            if let SymbolReference::Solved(declaration) = solver.try_solve_type(qualified_name) {
                return SymbolReference::Solved(declaration);
            }
        }
        tracing::debug!(
            target: "nova.types",
            name = qualified_name,
            solvers = self.solvers.len(),
            "type not found in any solver"
        );
        SymbolReference::Unsolved
    }
}
