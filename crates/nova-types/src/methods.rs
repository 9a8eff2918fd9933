//! Method usages and overload resolution.
//!
//! Resolution follows the JLS phases loosely: a candidate is ranked by the cheapest
//! conversion that makes it applicable (identical types, then subtyping and primitive
//! widening, then boxing and unboxing, then variable arity), only the best-ranked
//! candidates are considered, and the most specific one among them wins.

use std::collections::HashSet;
use std::fmt;

use crate::decl::{MethodDeclaration, TypeDeclaration};
use crate::error::{ResolveError, Result};
use crate::reference::ReferenceType;
use crate::solver::TypeSolver;
use crate::symbol::SymbolReference;
use crate::ty::{PrimitiveType, ResolvedType, Wildcard};
use crate::type_params::{TypeParameter, TypeParametersMap};

/// A method as seen from a particular use site: parameter and return types with the
/// receiver's (and possibly the call's) type arguments substituted in.
#[derive(Clone, PartialEq, Eq)]
pub struct MethodUsage {
    declaration: MethodDeclaration,
    param_types: Vec<ResolvedType>,
    return_type: ResolvedType,
}

impl MethodUsage {
    /// The usage of `declaration` with its declared types.
    pub fn new(declaration: MethodDeclaration, solver: &dyn TypeSolver) -> Result<Self> {
        let param_types = declaration.param_types(solver)?;
        let return_type = declaration.return_type(solver)?;
        Ok(Self {
            declaration,
            param_types,
            return_type,
        })
    }

    pub fn declaration(&self) -> &MethodDeclaration {
        &self.declaration
    }

    pub fn name(&self) -> &str {
        self.declaration.name()
    }

    pub fn declaring_type(&self) -> &TypeDeclaration {
        self.declaration.declaring_type()
    }

    pub fn number_of_params(&self) -> usize {
        self.param_types.len()
    }

    pub fn param_types(&self) -> &[ResolvedType] {
        &self.param_types
    }

    pub fn param_type(&self, index: usize) -> Option<&ResolvedType> {
        self.param_types.get(index)
    }

    pub fn return_type(&self) -> &ResolvedType {
        &self.return_type
    }

    /// `name(param types)` with the substituted types.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.param_types.iter().map(ResolvedType::describe).collect();
        format!("{}({})", self.name(), params.join(", "))
    }

    pub fn substitute(&self, map: &TypeParametersMap) -> Self {
        if map.is_empty() {
            return self.clone();
        }
        self.map_types(|ty| ty.substitute(map).into_owned())
    }

    fn map_types(&self, f: impl Fn(&ResolvedType) -> ResolvedType) -> Self {
        Self {
            declaration: self.declaration.clone(),
            param_types: self.param_types.iter().map(&f).collect(),
            return_type: f(&self.return_type),
        }
    }

    /// Binds the method's own type parameters from the argument types of a call.
    ///
    /// A parameter declared as a bare type variable takes the (boxed) argument type; generic
    /// parameter types are matched structurally against arguments of the same declaration.
    pub(crate) fn infer_method_type_parameters(
        self,
        argument_types: &[ResolvedType],
        solver: &dyn TypeSolver,
    ) -> Result<Self> {
        let own = self.declaration.type_parameters();
        if own.is_empty() {
            return Ok(self);
        }
        let mut bindings = TypeParametersMap::new();
        let fixed = if self.declaration.is_variadic() {
            self.param_types.len().saturating_sub(1)
        } else {
            self.param_types.len()
        };
        for (param, argument) in self.param_types.iter().zip(argument_types).take(fixed) {
            bind(param, argument, &own, &mut bindings, solver)?;
        }
        if self.declaration.is_variadic() {
            if let Some(last) = self.param_types.last() {
                let rest = argument_types.get(fixed..).unwrap_or_default();
                match (last, rest) {
                    (_, [single]) if single.is_array() => bind(last, single, &own, &mut bindings, solver)?,
                    (ResolvedType::Array(component), _) => {
                        for argument in rest {
                            bind(component, argument, &own, &mut bindings, solver)?;
                        }
                    }
                    _ => {}
                }
            }
        }
        Ok(self.substitute(&bindings))
    }
}

fn bind(
    param: &ResolvedType,
    argument: &ResolvedType,
    own: &[TypeParameter],
    bindings: &mut TypeParametersMap,
    solver: &dyn TypeSolver,
) -> Result<()> {
    match (param, argument) {
        (_, ResolvedType::Null) => {}
        (ResolvedType::TypeVariable(variable), _) => {
            if own.contains(variable) && !bindings.contains(variable) {
                bindings.set_value(variable, boxed(argument, solver)?);
            }
        }
        (ResolvedType::Array(param), ResolvedType::Array(argument)) => {
            bind(param, argument, own, bindings, solver)?;
        }
        (ResolvedType::Reference(param), ResolvedType::Reference(argument))
            if param.declaration() == argument.declaration() =>
        {
            for (param, argument) in param.type_arguments().zip(argument.type_arguments()) {
                bind(param, argument, own, bindings, solver)?;
            }
        }
        (ResolvedType::Wildcard(Wildcard::Extends(bound) | Wildcard::Super(bound)), argument) => {
            let argument = match argument {
                ResolvedType::Wildcard(wildcard) => match wildcard.bound() {
                    Some(inner) => inner,
                    None => return Ok(()),
                },
                other => other,
            };
            bind(bound, argument, own, bindings, solver)?;
        }
        _ => {}
    }
    Ok(())
}

fn boxed(ty: &ResolvedType, solver: &dyn TypeSolver) -> Result<ResolvedType> {
    match ty {
        ResolvedType::Primitive(primitive) => {
            let declaration = solver.solve_type(primitive.boxed_type_name())?;
            Ok(ReferenceType::raw(declaration)?.into())
        }
        other => Ok(other.clone()),
    }
}

impl fmt::Debug for MethodUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MethodUsage({}.{} -> {})",
            self.declaring_type().qualified_name(),
            self.signature(),
            self.return_type.describe()
        )
    }
}

/// How cheaply a candidate accepts the arguments; lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Applicability {
    Exact,
    Strict,
    Loose,
    Varargs,
}

struct Candidate {
    method: MethodDeclaration,
    param_types: Vec<ResolvedType>,
    applicability: Applicability,
}

impl TypeDeclaration {
    /// Overload resolution for a call of `name` with the given argument types.
    ///
    /// Candidates are the methods declared here and in every ancestor of the closure; an
    /// ancestor that cannot be resolved contributes nothing. All candidates are ranked
    /// together, so only a tie across the whole pool is `AmbiguousOverload`. An empty pool
    /// is `Unsolved`.
    pub fn solve_method(
        &self,
        name: &str,
        argument_types: &[ResolvedType],
        static_only: bool,
        solver: &dyn TypeSolver,
    ) -> Result<SymbolReference<MethodDeclaration>> {
        let mut declarations = vec![self.clone()];
        declarations.extend(
            self.all_ancestors(solver, true)?
                .into_iter()
                .map(|ancestor| ancestor.declaration().clone()),
        );
        let mut pool = Vec::new();
        for declaration in &declarations {
            pool.extend(
                declaration
                    .declared_methods()?
                    .into_iter()
                    .filter(|method| method.name() == name && (!static_only || method.is_static())),
            );
        }
        select_most_specific(name, pool, argument_types, solver)
    }

    /// Every method callable on this type: declared ones first, then inherited ones in
    /// ancestor order, expressed in this declaration's type parameters. Overridden methods
    /// are hidden by the first method with the same signature.
    pub fn all_methods(&self, solver: &dyn TypeSolver) -> Result<Vec<MethodUsage>> {
        let mut seen = HashSet::new();
        let mut methods = Vec::new();
        for method in self.declared_methods()? {
            let usage = MethodUsage::new(method, solver)?;
            if seen.insert(usage.signature()) {
                methods.push(usage);
            }
        }
        for ancestor in self.all_ancestors(solver, true)? {
            for method in ancestor.declaration().declared_methods()? {
                let usage = MethodUsage::new(method, solver)?.substitute(ancestor.type_parameters_map());
                if seen.insert(usage.signature()) {
                    methods.push(usage);
                }
            }
        }
        Ok(methods)
    }
}

impl ReferenceType {
    /// Resolves a call on a value of this type, returning the method with the receiver's type
    /// arguments and the inferred method type arguments substituted in.
    pub fn solve_method_as_usage(
        &self,
        name: &str,
        argument_types: &[ResolvedType],
        solver: &dyn TypeSolver,
    ) -> Result<Option<MethodUsage>> {
        let SymbolReference::Solved(method) =
            self.declaration().solve_method(name, argument_types, false, solver)?
        else {
            return Ok(None);
        };
        let bindings = self.all_type_parameters(solver)?;
        let usage = MethodUsage::new(method, solver)?
            .substitute(&bindings)
            .infer_method_type_parameters(argument_types, solver)?;
        Ok(Some(usage))
    }
}

/// Picks the most specific applicable method out of `candidates`.
pub(crate) fn select_most_specific(
    name: &str,
    candidates: Vec<MethodDeclaration>,
    argument_types: &[ResolvedType],
    solver: &dyn TypeSolver,
) -> Result<SymbolReference<MethodDeclaration>> {
    let mut applicable: Vec<Candidate> = Vec::new();
    for method in candidates {
        let param_types = method.param_types(solver)?;
        let applicability = applicability(&method, &param_types, argument_types, solver)?;
        tracing::trace!(
            target: "nova.types",
            method = %method.qualified_name(),
            params = param_types.len(),
            ?applicability,
            "overload candidate"
        );
        let Some(applicability) = applicability else {
            continue;
        };
        if applicable.iter().any(|other| other.param_types == param_types) {
            continue;
        }
        applicable.push(Candidate {
            method,
            param_types,
            applicability,
        });
    }

    let Some(best) = applicable.iter().map(|candidate| candidate.applicability).min() else {
        return Ok(SymbolReference::Unsolved);
    };
    applicable.retain(|candidate| candidate.applicability == best);
    if applicable.len() == 1 {
        return Ok(applicable.pop().map(|candidate| candidate.method).into());
    }

    for (index, candidate) in applicable.iter().enumerate() {
        let mut most_specific = true;
        for (other_index, other) in applicable.iter().enumerate() {
            if index != other_index && !is_more_specific(candidate, other, solver)? {
                most_specific = false;
                break;
            }
        }
        if most_specific {
            return Ok(SymbolReference::Solved(candidate.method.clone()));
        }
    }

    let arguments: Vec<String> = argument_types.iter().map(ResolvedType::describe).collect();
    let candidates: Vec<String> = applicable
        .iter()
        .map(|candidate| {
            format!(
                "{}.{}",
                candidate.method.declaring_type().qualified_name(),
                describe_params(name, &candidate.param_types)
            )
        })
        .collect();
    tracing::debug!(
        target: "nova.types",
        method = name,
        arguments = ?arguments,
        candidates = ?candidates,
        "ambiguous method call"
    );
    Err(ResolveError::AmbiguousOverload {
        name: name.to_string(),
        arguments,
        candidates,
    })
}

fn describe_params(name: &str, param_types: &[ResolvedType]) -> String {
    let params: Vec<String> = param_types.iter().map(ResolvedType::describe).collect();
    format!("{name}({})", params.join(", "))
}

fn is_more_specific(candidate: &Candidate, other: &Candidate, solver: &dyn TypeSolver) -> Result<bool> {
    let len = candidate.param_types.len().max(other.param_types.len());
    for index in 0..len {
        let (Some(mine), Some(theirs)) = (
            spread_param(candidate, index),
            spread_param(other, index),
        ) else {
            continue;
        };
        if !theirs.is_assignable_by(mine, solver)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Parameter type at `index`, expanding a trailing varargs array when comparing candidates
/// that were applicable by variable arity.
fn spread_param(candidate: &Candidate, index: usize) -> Option<&ResolvedType> {
    let params = &candidate.param_types;
    if candidate.applicability == Applicability::Varargs && index + 1 >= params.len() {
        return match params.last() {
            Some(ResolvedType::Array(component)) => Some(component.as_ref()),
            other => other,
        };
    }
    params.get(index)
}

fn applicability(
    method: &MethodDeclaration,
    param_types: &[ResolvedType],
    argument_types: &[ResolvedType],
    solver: &dyn TypeSolver,
) -> Result<Option<Applicability>> {
    if param_types.len() == argument_types.len() {
        if param_types == argument_types {
            return Ok(Some(Applicability::Exact));
        }
        if all_accept(param_types, argument_types, strict_accepts, solver)? {
            return Ok(Some(Applicability::Strict));
        }
        if all_accept(param_types, argument_types, loose_accepts, solver)? {
            return Ok(Some(Applicability::Loose));
        }
    }
    if !method.is_variadic() || argument_types.len() + 1 < param_types.len() {
        return Ok(None);
    }
    let Some((ResolvedType::Array(component), fixed)) = param_types.split_last() else {
        return Ok(None);
    };
    let (leading, rest) = argument_types.split_at(fixed.len());
    if !all_accept(fixed, leading, loose_accepts, solver)? {
        return Ok(None);
    }
    for argument in rest {
        if !loose_accepts(component, argument, solver)? {
            return Ok(None);
        }
    }
    Ok(Some(Applicability::Varargs))
}

fn all_accept(
    params: &[ResolvedType],
    arguments: &[ResolvedType],
    accepts: fn(&ResolvedType, &ResolvedType, &dyn TypeSolver) -> Result<bool>,
    solver: &dyn TypeSolver,
) -> Result<bool> {
    for (param, argument) in params.iter().zip(arguments) {
        if !accepts(param, argument, solver)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Subtyping and primitive widening only.
fn strict_accepts(param: &ResolvedType, argument: &ResolvedType, solver: &dyn TypeSolver) -> Result<bool> {
    if param.is_primitive() != argument.is_primitive() && !argument.is_null() {
        return Ok(false);
    }
    param.is_assignable_by(argument, solver)
}

/// Strict conversions plus boxing and unboxing.
fn loose_accepts(param: &ResolvedType, argument: &ResolvedType, solver: &dyn TypeSolver) -> Result<bool> {
    if param.is_assignable_by(argument, solver)? {
        return Ok(true);
    }
    Ok(match (param, unboxed(argument)) {
        (ResolvedType::Primitive(target), Some(primitive)) => {
            primitive == *target || primitive.widens_to(*target)
        }
        _ => false,
    })
}

fn unboxed(ty: &ResolvedType) -> Option<PrimitiveType> {
    match ty {
        ResolvedType::Reference(reference) => PrimitiveType::from_boxed_type_name(reference.qualified_name()),
        _ => None,
    }
}
