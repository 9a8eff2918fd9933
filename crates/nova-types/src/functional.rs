//! Functional interfaces: interfaces with exactly one abstract method that is not a public
//! method of `java.lang.Object`.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::decl::{host_type, TypeDeclaration, OBJECT};
use crate::error::Result;
use crate::methods::MethodUsage;
use crate::solver::{HostTypeSolver, TypeSolver};
use crate::ty::ResolvedType;

const FUNCTIONAL_INTERFACE: &str = "java.lang.FunctionalInterface";

/// Signatures of the methods declared by `java.lang.Object`, e.g. `equals(java.lang.Object)`.
static OBJECT_METHOD_SIGNATURES: Lazy<HashSet<String>> = Lazy::new(|| {
    let Some(object) = host_type(OBJECT) else {
        return HashSet::new();
    };
    let methods = match object.declared_methods() {
        Ok(methods) => methods,
        Err(err) => {
            tracing::error!(target: "nova.types", error = %err, "failed to load java.lang.Object methods");
            return HashSet::new();
        }
    };
    methods
        .iter()
        .filter_map(|method| method.signature(&HostTypeSolver).ok())
        .collect()
});

/// The single abstract method of `ty`, with the receiver's type arguments substituted;
/// `None` unless `ty` is a functional interface type.
pub fn functional_method(ty: &ResolvedType, solver: &dyn TypeSolver) -> Result<Option<MethodUsage>> {
    let ResolvedType::Reference(reference) = ty else {
        return Ok(None);
    };
    if !reference.declaration().is_interface() {
        return Ok(None);
    }
    Ok(functional_method_of(reference.declaration(), solver)?
        .map(|usage| usage.substitute(reference.type_parameters_map())))
}

/// The single abstract method of `declaration`, in terms of its own type parameters.
pub fn functional_method_of(
    declaration: &TypeDeclaration,
    solver: &dyn TypeSolver,
) -> Result<Option<MethodUsage>> {
    if !declaration.is_interface() {
        return Ok(None);
    }
    let mut abstract_methods = Vec::new();
    for usage in declaration.all_methods(solver)? {
        if !usage.declaration().is_abstract() {
            continue;
        }
        if OBJECT_METHOD_SIGNATURES.contains(&usage.declaration().signature(solver)?) {
            continue;
        }
        abstract_methods.push(usage);
    }
    if abstract_methods.len() == 1 {
        Ok(abstract_methods.pop())
    } else {
        tracing::trace!(
            target: "nova.types",
            declaration = %declaration.qualified_name(),
            abstract_methods = abstract_methods.len(),
            "not a functional interface"
        );
        Ok(None)
    }
}

/// Whether `ty` is an interface annotated `@FunctionalInterface` or has exactly one abstract
/// method.
pub fn is_functional_interface_type(ty: &ResolvedType, solver: &dyn TypeSolver) -> Result<bool> {
    let ResolvedType::Reference(reference) = ty else {
        return Ok(false);
    };
    let declaration = reference.declaration();
    if !declaration.is_interface() {
        return Ok(false);
    }
    if declaration.has_direct_annotation(FUNCTIONAL_INTERFACE, solver) {
        return Ok(true);
    }
    Ok(functional_method_of(declaration, solver)?.is_some())
}
