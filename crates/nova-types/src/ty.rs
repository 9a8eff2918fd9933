use std::borrow::Cow;
use std::fmt;

use nova_classfile::BaseType;

use crate::error::{ResolveError, Result};
use crate::reference::ReferenceType;
use crate::type_params::{TypeParameter, TypeParametersMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Boolean,
        PrimitiveType::Byte,
        PrimitiveType::Short,
        PrimitiveType::Char,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Char => "char",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        PrimitiveType::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Qualified name of the wrapper class, e.g. `java.lang.Integer`.
    pub fn boxed_type_name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "java.lang.Boolean",
            PrimitiveType::Byte => "java.lang.Byte",
            PrimitiveType::Short => "java.lang.Short",
            PrimitiveType::Char => "java.lang.Character",
            PrimitiveType::Int => "java.lang.Integer",
            PrimitiveType::Long => "java.lang.Long",
            PrimitiveType::Float => "java.lang.Float",
            PrimitiveType::Double => "java.lang.Double",
        }
    }

    pub fn from_boxed_type_name(qualified_name: &str) -> Option<Self> {
        PrimitiveType::ALL
            .into_iter()
            .find(|p| p.boxed_type_name() == qualified_name)
    }

    pub fn is_numeric(self) -> bool {
        self != PrimitiveType::Boolean
    }

    /// Primitive widening (JLS 5.1.2). `boolean` never participates.
    pub fn widens_to(self, target: PrimitiveType) -> bool {
        use PrimitiveType::*;
        match self {
            Byte => matches!(target, Short | Int | Long | Float | Double),
            Short => matches!(target, Int | Long | Float | Double),
            Char => matches!(target, Int | Long | Float | Double),
            Int => matches!(target, Long | Float | Double),
            Long => matches!(target, Float | Double),
            Float => matches!(target, Double),
            Double | Boolean => false,
        }
    }
}

impl From<BaseType> for PrimitiveType {
    fn from(base: BaseType) -> Self {
        match base {
            BaseType::Byte => PrimitiveType::Byte,
            BaseType::Char => PrimitiveType::Char,
            BaseType::Double => PrimitiveType::Double,
            BaseType::Float => PrimitiveType::Float,
            BaseType::Int => PrimitiveType::Int,
            BaseType::Long => PrimitiveType::Long,
            BaseType::Short => PrimitiveType::Short,
            BaseType::Boolean => PrimitiveType::Boolean,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Wildcard {
    Unbounded,
    Extends(Box<ResolvedType>),
    Super(Box<ResolvedType>),
}

impl Wildcard {
    pub fn extends_bound(bound: ResolvedType) -> Self {
        Wildcard::Extends(Box::new(bound))
    }

    pub fn super_bound(bound: ResolvedType) -> Self {
        Wildcard::Super(Box::new(bound))
    }

    pub fn bound(&self) -> Option<&ResolvedType> {
        match self {
            Wildcard::Unbounded => None,
            Wildcard::Extends(bound) | Wildcard::Super(bound) => Some(bound),
        }
    }

    pub fn is_extends(&self) -> bool {
        matches!(self, Wildcard::Extends(_))
    }

    pub fn is_super(&self) -> bool {
        matches!(self, Wildcard::Super(_))
    }
}

/// A fully determined type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedType {
    Primitive(PrimitiveType),
    Reference(ReferenceType),
    TypeVariable(TypeParameter),
    Wildcard(Wildcard),
    Array(Box<ResolvedType>),
    Void,
    Null,
    Intersection(Vec<ResolvedType>),
}

impl ResolvedType {
    pub fn array_of(component: ResolvedType) -> Self {
        ResolvedType::Array(Box::new(component))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, ResolvedType::Primitive(_))
    }

    pub fn is_reference_type(&self) -> bool {
        matches!(self, ResolvedType::Reference(_))
    }

    /// Anything a reference can point at: classes, arrays, type variables, wildcards, `null`
    /// and intersections.
    pub fn is_reference(&self) -> bool {
        !matches!(
            self,
            ResolvedType::Primitive(_) | ResolvedType::Void
        )
    }

    pub fn is_type_variable(&self) -> bool {
        matches!(self, ResolvedType::TypeVariable(_))
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, ResolvedType::Wildcard(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, ResolvedType::Array(_))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, ResolvedType::Void)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ResolvedType::Null)
    }

    pub fn array_level(&self) -> usize {
        match self {
            ResolvedType::Array(component) => 1 + component.array_level(),
            _ => 0,
        }
    }

    pub fn as_reference_type(&self) -> Result<&ReferenceType> {
        match self {
            ResolvedType::Reference(ty) => Ok(ty),
            other => Err(other.narrowing_error("as_reference_type")),
        }
    }

    pub fn as_type_parameter(&self) -> Result<&TypeParameter> {
        match self {
            ResolvedType::TypeVariable(param) => Ok(param),
            other => Err(other.narrowing_error("as_type_parameter")),
        }
    }

    pub fn as_wildcard(&self) -> Result<&Wildcard> {
        match self {
            ResolvedType::Wildcard(wildcard) => Ok(wildcard),
            other => Err(other.narrowing_error("as_wildcard")),
        }
    }

    /// Component type of an array.
    pub fn as_array_type(&self) -> Result<&ResolvedType> {
        match self {
            ResolvedType::Array(component) => Ok(component),
            other => Err(other.narrowing_error("as_array_type")),
        }
    }

    pub fn as_primitive(&self) -> Result<PrimitiveType> {
        match self {
            ResolvedType::Primitive(primitive) => Ok(*primitive),
            other => Err(other.narrowing_error("as_primitive")),
        }
    }

    fn narrowing_error(&self, operation: &'static str) -> ResolveError {
        ResolveError::unsupported(operation, self.describe())
    }

    /// Canonical text form: `java.util.Map<K, java.lang.String>`, `? extends X`, `int[]`.
    pub fn describe(&self) -> String {
        match self {
            ResolvedType::Primitive(primitive) => primitive.name().to_string(),
            ResolvedType::Reference(ty) => ty.describe(),
            ResolvedType::TypeVariable(param) => param.name().to_string(),
            ResolvedType::Wildcard(Wildcard::Unbounded) => "?".to_string(),
            ResolvedType::Wildcard(Wildcard::Extends(bound)) => {
                format!("? extends {}", bound.describe())
            }
            ResolvedType::Wildcard(Wildcard::Super(bound)) => {
                format!("? super {}", bound.describe())
            }
            ResolvedType::Array(component) => format!("{}[]", component.describe()),
            ResolvedType::Void => "void".to_string(),
            ResolvedType::Null => "null".to_string(),
            ResolvedType::Intersection(bounds) => bounds
                .iter()
                .map(ResolvedType::describe)
                .collect::<Vec<_>>()
                .join(" & "),
        }
    }

    /// Replace every occurrence of `param` with `replacement`.
    ///
    /// Returns `Cow::Borrowed(self)` when `param` does not occur anywhere in the type.
    pub fn replace_type_variables(
        &self,
        param: &TypeParameter,
        replacement: &ResolvedType,
    ) -> Cow<'_, ResolvedType> {
        self.map_type_variables(&|candidate| {
            (candidate == param).then(|| replacement.clone())
        })
    }

    /// Simultaneous substitution of every parameter bound in `map`.
    pub fn substitute(&self, map: &TypeParametersMap) -> Cow<'_, ResolvedType> {
        if map.is_empty() {
            return Cow::Borrowed(self);
        }
        self.map_type_variables(&|candidate| map.value(candidate).cloned())
    }

    pub(crate) fn map_type_variables<'a>(
        &'a self,
        f: &dyn Fn(&TypeParameter) -> Option<ResolvedType>,
    ) -> Cow<'a, ResolvedType> {
        match self {
            ResolvedType::TypeVariable(param) => match f(param) {
                Some(replacement) => Cow::Owned(replacement),
                None => Cow::Borrowed(self),
            },
            ResolvedType::Reference(ty) => match ty.map_type_arguments(f) {
                Some(mapped) => Cow::Owned(ResolvedType::Reference(mapped)),
                None => Cow::Borrowed(self),
            },
            ResolvedType::Wildcard(Wildcard::Extends(bound)) => match bound.map_type_variables(f) {
                Cow::Borrowed(_) => Cow::Borrowed(self),
                Cow::Owned(bound) => Cow::Owned(ResolvedType::Wildcard(Wildcard::extends_bound(bound))),
            },
            ResolvedType::Wildcard(Wildcard::Super(bound)) => match bound.map_type_variables(f) {
                Cow::Borrowed(_) => Cow::Borrowed(self),
                Cow::Owned(bound) => Cow::Owned(ResolvedType::Wildcard(Wildcard::super_bound(bound))),
            },
            ResolvedType::Array(component) => match component.map_type_variables(f) {
                Cow::Borrowed(_) => Cow::Borrowed(self),
                Cow::Owned(component) => Cow::Owned(ResolvedType::array_of(component)),
            },
            ResolvedType::Intersection(bounds) => {
                let mapped: Vec<Cow<'_, ResolvedType>> =
                    bounds.iter().map(|bound| bound.map_type_variables(f)).collect();
                if mapped.iter().all(|bound| matches!(bound, Cow::Borrowed(_))) {
                    Cow::Borrowed(self)
                } else {
                    Cow::Owned(ResolvedType::Intersection(
                        mapped.into_iter().map(Cow::into_owned).collect(),
                    ))
                }
            }
            ResolvedType::Primitive(_)
            | ResolvedType::Wildcard(Wildcard::Unbounded)
            | ResolvedType::Void
            | ResolvedType::Null => Cow::Borrowed(self),
        }
    }

    /// Whether `param` occurs anywhere in this type.
    pub fn mentions(&self, param: &TypeParameter) -> bool {
        matches!(
            self.map_type_variables(&|candidate| (candidate == param).then_some(ResolvedType::Null)),
            Cow::Owned(_)
        )
    }
}

impl From<PrimitiveType> for ResolvedType {
    fn from(primitive: PrimitiveType) -> Self {
        ResolvedType::Primitive(primitive)
    }
}

impl From<ReferenceType> for ResolvedType {
    fn from(ty: ReferenceType) -> Self {
        ResolvedType::Reference(ty)
    }
}

impl From<Wildcard> for ResolvedType {
    fn from(wildcard: Wildcard) -> Self {
        ResolvedType::Wildcard(wildcard)
    }
}

impl From<TypeParameter> for ResolvedType {
    fn from(param: TypeParameter) -> Self {
        ResolvedType::TypeVariable(param)
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
