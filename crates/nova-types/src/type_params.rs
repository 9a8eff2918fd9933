use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::decl::{NativeType, TypeScope};
use crate::error::Result;
use crate::solver::TypeSolver;
use crate::ty::ResolvedType;

/// Entity a type parameter is declared on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeParameterOwner {
    Type { qualified_name: String },
    /// `descriptor` is the erased parameter list as written, `(java.util.List, T)`, which
    /// tells overloads apart.
    Method {
        declaring_type: String,
        method: String,
        descriptor: String,
    },
}

impl TypeParameterOwner {
    pub fn type_owner(qualified_name: impl Into<String>) -> Self {
        TypeParameterOwner::Type {
            qualified_name: qualified_name.into(),
        }
    }

    pub fn method_owner(
        declaring_type: impl Into<String>,
        method: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> Self {
        TypeParameterOwner::Method {
            declaring_type: declaring_type.into(),
            method: method.into(),
            descriptor: descriptor.into(),
        }
    }

    /// `java.util.List` or `java.util.Collections.sort`.
    pub fn qualified_name(&self) -> String {
        match self {
            TypeParameterOwner::Type { qualified_name } => qualified_name.clone(),
            TypeParameterOwner::Method {
                declaring_type,
                method,
                ..
            } => format!("{declaring_type}.{method}"),
        }
    }
}

/// A declared type parameter. Identity is the owner plus the name; bounds are resolved on demand
/// so that mutually recursive bounds (`E extends Enum<E>`) never have to be materialized up
/// front.
#[derive(Clone)]
pub struct TypeParameter(Arc<TypeParameterData>);

struct TypeParameterData {
    name: String,
    owner: TypeParameterOwner,
    index: usize,
    bounds: Vec<NativeType>,
    scope: Option<TypeScope>,
}

impl TypeParameter {
    /// A parameter with no declared bounds.
    pub fn new(name: impl Into<String>, owner: TypeParameterOwner, index: usize) -> Self {
        Self(Arc::new(TypeParameterData {
            name: name.into(),
            owner,
            index,
            bounds: Vec::new(),
            scope: None,
        }))
    }

    pub(crate) fn declared(
        name: impl Into<String>,
        owner: TypeParameterOwner,
        index: usize,
        bounds: Vec<NativeType>,
        scope: TypeScope,
    ) -> Self {
        Self(Arc::new(TypeParameterData {
            name: name.into(),
            owner,
            index,
            bounds,
            scope: Some(scope),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn owner(&self) -> &TypeParameterOwner {
        &self.0.owner
    }

    /// Position in the owner's type parameter list.
    pub fn index(&self) -> usize {
        self.0.index
    }

    pub fn declared_on_type(&self) -> bool {
        matches!(self.0.owner, TypeParameterOwner::Type { .. })
    }

    pub fn declared_on_method(&self) -> bool {
        matches!(self.0.owner, TypeParameterOwner::Method { .. })
    }

    /// `java.util.List.E`
    pub fn qualified_signature(&self) -> String {
        format!("{}.{}", self.0.owner.qualified_name(), self.0.name)
    }

    /// Declared upper bounds, in declaration order. Empty means `java.lang.Object`.
    pub fn bounds(&self, solver: &dyn TypeSolver) -> Result<Vec<ResolvedType>> {
        let Some(scope) = &self.0.scope else {
            return Ok(Vec::new());
        };
        self.0
            .bounds
            .iter()
            .map(|bound| scope.resolve(bound, solver))
            .collect()
    }
}

impl PartialEq for TypeParameter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.0.name == other.0.name && self.0.owner == other.0.owner)
    }
}

impl Eq for TypeParameter {}

impl Hash for TypeParameter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.owner.hash(state);
        self.0.name.hash(state);
    }
}

impl fmt::Debug for TypeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeParameter({})", self.qualified_signature())
    }
}

/// Ordered association from type parameters to the types bound to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TypeParametersMap {
    entries: Vec<(TypeParameter, ResolvedType)>,
}

impl TypeParametersMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs `params` with `values` positionally.
    pub fn from_pairs(
        params: impl IntoIterator<Item = TypeParameter>,
        values: impl IntoIterator<Item = ResolvedType>,
    ) -> Self {
        Self {
            entries: params.into_iter().zip(values).collect(),
        }
    }

    /// Each parameter bound to a type variable referencing itself.
    pub fn identity(params: impl IntoIterator<Item = TypeParameter>) -> Self {
        Self {
            entries: params
                .into_iter()
                .map(|param| (param.clone(), ResolvedType::TypeVariable(param)))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypeParameter, &ResolvedType)> + '_ {
        self.entries.iter().map(|(param, value)| (param, value))
    }

    pub fn parameters(&self) -> impl ExactSizeIterator<Item = &TypeParameter> + '_ {
        self.entries.iter().map(|(param, _)| param)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &ResolvedType> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn value(&self, param: &TypeParameter) -> Option<&ResolvedType> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == param)
            .map(|(_, value)| value)
    }

    /// Look up by `Owner.Name`, e.g. `java.util.List.E`.
    pub fn value_by_signature(&self, signature: &str) -> Option<&ResolvedType> {
        self.entries
            .iter()
            .find(|(param, _)| param.qualified_signature() == signature)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, param: &TypeParameter) -> bool {
        self.value(param).is_some()
    }

    /// A copy with `param` bound to `value`; an existing binding keeps its position.
    pub fn with_value(&self, param: &TypeParameter, value: ResolvedType) -> Self {
        let mut out = self.clone();
        out.set_value(param, value);
        out
    }

    pub(crate) fn set_value(&mut self, param: &TypeParameter, value: ResolvedType) {
        match self.entries.iter_mut().find(|(candidate, _)| candidate == param) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((param.clone(), value)),
        }
    }

    /// Adds the bindings of `other` whose parameters are not bound yet.
    pub(crate) fn extend_missing(&mut self, other: &TypeParametersMap) {
        for (param, value) in other.iter() {
            if !self.contains(param) {
                self.entries.push((param.clone(), value.clone()));
            }
        }
    }
}
