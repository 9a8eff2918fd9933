//! Java symbol and type resolution.
//!
//! Declarations come from three backends behind one [`TypeDeclaration`] handle: parsed source
//! ([`ast`]), class file stubs, and the built-in core library descriptors. On top of them
//! this crate computes ancestor closures, assignability, overload resolution, functional
//! interface methods and scope-ordered name lookup ([`Context`]).
//!
//! Every operation takes the [`TypeSolver`] to use for name lookups explicitly.

#![forbid(unsafe_code)]

mod ancestors;
mod assignability;
pub mod ast;
mod context;
mod decl;
mod error;
mod facade;
mod functional;
mod lookup;
mod methods;
mod reference;
mod resolvable;
mod solver;
mod symbol;
mod ty;
mod type_params;

pub use crate::context::{Context, Scope};
pub use crate::decl::{
    AccessSpecifier, ConstructorDeclaration, DeclarationOrigin, FieldDeclaration,
    MethodDeclaration, ParameterDeclaration, TypeDeclaration, TypeKind,
};
pub use crate::error::{ResolveError, Result};
pub use crate::facade::JavaSymbolSolver;
pub use crate::functional::{functional_method, functional_method_of, is_functional_interface_type};
pub use crate::methods::MethodUsage;
pub use crate::reference::ReferenceType;
pub use crate::resolvable::Resolvable;
pub use crate::solver::{CombinedTypeSolver, HostTypeSolver, MemoryTypeSolver, TypeSolver};
pub use crate::symbol::{LocalDeclaration, SymbolReference, ValueDeclaration};
pub use crate::ty::{PrimitiveType, ResolvedType, Wildcard};
pub use crate::type_params::{TypeParameter, TypeParameterOwner, TypeParametersMap};
