//! Type declarations and their three backends.
//!
//! A [`TypeDeclaration`] is a cheap, shareable handle. What backs it (a parsed source
//! declaration, a compiled class stub, or the host's built-in descriptors) is private; every
//! query goes through the same surface and the backends must answer identically for the same
//! logical entity.

mod binary;
mod host;
mod jdk;
mod members;
mod scope;
mod source;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use nova_classfile::access::{has, ACC_PRIVATE, ACC_PROTECTED, ACC_PUBLIC};
use nova_classfile::ClassStub;

use crate::ast::CompilationUnit;
use crate::error::{ResolveError, Result};
use crate::solver::TypeSolver;
use crate::symbol::{SymbolReference, ValueDeclaration};
use crate::type_params::{TypeParameter, TypeParameterOwner};

pub use members::{
    ConstructorDeclaration, FieldDeclaration, MethodDeclaration, ParameterDeclaration,
};

pub(crate) use binary::BinaryType;
pub(crate) use host::{host_type, HostType};
pub(crate) use members::CallableData;
pub(crate) use scope::{MethodScope, NativeType, NativeTypeParam, TypeScope};
pub(crate) use source::SourceType;

pub(crate) const OBJECT: &str = "java.lang.Object";
pub(crate) const ENUM: &str = "java.lang.Enum";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessSpecifier {
    Public,
    Protected,
    Private,
    PackagePrivate,
}

impl AccessSpecifier {
    pub(crate) fn from_flags(flags: u16) -> Self {
        if has(flags, ACC_PUBLIC) {
            AccessSpecifier::Public
        } else if has(flags, ACC_PROTECTED) {
            AccessSpecifier::Protected
        } else if has(flags, ACC_PRIVATE) {
            AccessSpecifier::Private
        } else {
            AccessSpecifier::PackagePrivate
        }
    }
}

/// Which backend a declaration came from. Only meant for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationOrigin {
    Source,
    Binary,
    Host,
}

/// Supertypes as written on the declaration, before implicit ones are added.
#[derive(Default)]
pub(crate) struct DeclaredSupertypes {
    pub(crate) superclass: Option<NativeType>,
    pub(crate) interfaces: Vec<NativeType>,
}

/// Capability surface shared by the three backends.
pub(crate) trait TypeBackend: Send + Sync {
    fn qualified_name(&self) -> &str;
    /// Name relative to the package, `Map.Entry` for nested types.
    fn class_name(&self) -> &str;
    fn package_name(&self) -> &str;
    fn kind(&self) -> TypeKind;
    fn access_specifier(&self) -> AccessSpecifier;
    fn native_type_parameters(&self) -> Result<Vec<NativeTypeParam>>;
    fn declared_supertypes(&self) -> Result<DeclaredSupertypes>;
    fn declared_fields(&self, this: &TypeDeclaration) -> Result<Vec<FieldDeclaration>>;
    fn declared_methods(&self, this: &TypeDeclaration) -> Result<Vec<MethodDeclaration>>;
    fn constructors(&self, this: &TypeDeclaration) -> Result<Vec<ConstructorDeclaration>>;
    fn internal_types(
        &self,
        this: &TypeDeclaration,
        solver: &dyn TypeSolver,
    ) -> Result<Vec<TypeDeclaration>>;
    fn containing_type(&self, solver: &dyn TypeSolver) -> Result<Option<TypeDeclaration>>;
    fn has_direct_annotation(
        &self,
        this: &TypeDeclaration,
        qualified_name: &str,
        solver: &dyn TypeSolver,
    ) -> bool;
    fn enum_constants(&self) -> Vec<String>;
}

enum Backend {
    Source(SourceType),
    Binary(BinaryType),
    Host(HostType),
}

/// A class, interface, enum or annotation declaration.
///
/// Equality and hashing go through the qualified name, so handles obtained from different
/// lookups of the same entity compare equal.
#[derive(Clone)]
pub struct TypeDeclaration(Arc<Backend>);

impl TypeDeclaration {
    /// Declaration backed by compiled class metadata.
    pub fn from_class_stub(stub: ClassStub) -> Self {
        Self(Arc::new(Backend::Binary(BinaryType::new(stub))))
    }

    /// Top-level declarations of a compilation unit.
    pub fn from_compilation_unit(unit: &Arc<CompilationUnit>) -> Vec<Self> {
        unit.types
            .iter()
            .map(|class| Self::from_source(SourceType::new(unit.clone(), class.clone(), None)))
            .collect()
    }

    pub(crate) fn from_source(source: SourceType) -> Self {
        Self(Arc::new(Backend::Source(source)))
    }

    pub(crate) fn from_host(host: HostType) -> Self {
        Self(Arc::new(Backend::Host(host)))
    }

    fn backend(&self) -> &dyn TypeBackend {
        match &*self.0 {
            Backend::Source(source) => source,
            Backend::Binary(binary) => binary,
            Backend::Host(host) => host,
        }
    }

    pub(crate) fn as_source(&self) -> Option<&SourceType> {
        match &*self.0 {
            Backend::Source(source) => Some(source),
            _ => None,
        }
    }

    pub fn origin(&self) -> DeclarationOrigin {
        match &*self.0 {
            Backend::Source(_) => DeclarationOrigin::Source,
            Backend::Binary(_) => DeclarationOrigin::Binary,
            Backend::Host(_) => DeclarationOrigin::Host,
        }
    }

    /// Simple name: `Entry` for `java.util.Map.Entry`.
    pub fn name(&self) -> &str {
        let class_name = self.class_name();
        match class_name.rfind('.') {
            Some(idx) => &class_name[idx + 1..],
            None => class_name,
        }
    }

    pub fn class_name(&self) -> &str {
        self.backend().class_name()
    }

    pub fn package_name(&self) -> &str {
        self.backend().package_name()
    }

    pub fn qualified_name(&self) -> &str {
        self.backend().qualified_name()
    }

    pub fn kind(&self) -> TypeKind {
        self.backend().kind()
    }

    pub fn is_class(&self) -> bool {
        self.kind() == TypeKind::Class
    }

    pub fn is_interface(&self) -> bool {
        self.kind() == TypeKind::Interface
    }

    pub fn is_enum(&self) -> bool {
        self.kind() == TypeKind::Enum
    }

    pub fn is_annotation(&self) -> bool {
        self.kind() == TypeKind::Annotation
    }

    pub fn is_java_lang_object(&self) -> bool {
        self.qualified_name() == OBJECT
    }

    pub fn access_specifier(&self) -> AccessSpecifier {
        self.backend().access_specifier()
    }

    pub fn type_parameters(&self) -> Result<Vec<TypeParameter>> {
        let scope = TypeScope::for_type(self.clone());
        Ok(self
            .backend()
            .native_type_parameters()?
            .into_iter()
            .enumerate()
            .map(|(index, param)| {
                TypeParameter::declared(
                    param.name,
                    TypeParameterOwner::type_owner(self.qualified_name()),
                    index,
                    param.bounds,
                    scope.clone(),
                )
            })
            .collect())
    }

    pub fn is_generic(&self) -> Result<bool> {
        Ok(!self.backend().native_type_parameters()?.is_empty())
    }

    pub(crate) fn declared_supertypes(&self) -> Result<DeclaredSupertypes> {
        self.backend().declared_supertypes()
    }

    /// Enclosing declaration of a nested type.
    pub fn containing_type(&self, solver: &dyn TypeSolver) -> Result<Option<TypeDeclaration>> {
        self.backend().containing_type(solver)
    }

    pub fn has_direct_annotation(&self, qualified_name: &str, solver: &dyn TypeSolver) -> bool {
        self.backend()
            .has_direct_annotation(self, qualified_name, solver)
    }

    /// Names of the enum constants, in declaration order. Empty for non-enums.
    pub fn enum_constants(&self) -> Vec<String> {
        self.backend().enum_constants()
    }

    pub fn declared_fields(&self) -> Result<Vec<FieldDeclaration>> {
        self.backend().declared_fields(self)
    }

    /// Declared fields followed by those of every ancestor, in closure order.
    pub fn all_fields(&self, solver: &dyn TypeSolver) -> Result<Vec<FieldDeclaration>> {
        let mut fields = self.declared_fields()?;
        for ancestor in self.all_ancestors(solver, true)? {
            fields.extend(ancestor.declaration().declared_fields()?);
        }
        Ok(fields)
    }

    /// Non-private fields of this type and of its ancestors.
    pub fn all_fields_visible_to_inheritors(
        &self,
        solver: &dyn TypeSolver,
    ) -> Result<Vec<FieldDeclaration>> {
        Ok(self
            .all_fields(solver)?
            .into_iter()
            .filter(|field| field.access_specifier() != AccessSpecifier::Private)
            .collect())
    }

    /// First field named `name`, declared or inherited.
    pub fn field(&self, name: &str, solver: &dyn TypeSolver) -> Result<FieldDeclaration> {
        self.all_fields(solver)?
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| ResolveError::unsolved(name, format!("type {}", self.qualified_name())))
    }

    /// Never fails: lookup problems count as "no such field".
    pub fn has_field(&self, name: &str, solver: &dyn TypeSolver) -> bool {
        match self.all_fields(solver) {
            Ok(fields) => fields.iter().any(|field| field.name() == name),
            Err(err) => {
                tracing::debug!(
                    target: "nova.types",
                    declaration = %self.qualified_name(),
                    field = name,
                    error = %err,
                    "field lookup failed"
                );
                false
            }
        }
    }

    /// Value symbol `name` visible as a member: declared fields first, then inherited ones.
    pub fn solve_symbol(
        &self,
        name: &str,
        solver: &dyn TypeSolver,
    ) -> Result<SymbolReference<ValueDeclaration>> {
        Ok(self
            .all_fields(solver)?
            .into_iter()
            .find(|field| field.name() == name)
            .map(ValueDeclaration::Field)
            .into())
    }

    pub fn declared_methods(&self) -> Result<Vec<MethodDeclaration>> {
        self.backend().declared_methods(self)
    }

    pub fn constructors(&self) -> Result<Vec<ConstructorDeclaration>> {
        self.backend().constructors(self)
    }

    /// Member types declared directly inside this type.
    pub fn internal_types(&self, solver: &dyn TypeSolver) -> Result<Vec<TypeDeclaration>> {
        self.backend().internal_types(self, solver)
    }

    /// Member type by simple name (`Entry`) or enclosing-qualified name (`Map.Entry`,
    /// `Outer.Inner.Deeper`).
    pub fn internal_type(&self, name: &str, solver: &dyn TypeSolver) -> Result<TypeDeclaration> {
        let internal = self.internal_types(solver)?;
        let suffix = format!(".{name}");
        if let Some(found) = internal
            .iter()
            .find(|ty| ty.name() == name || ty.qualified_name().ends_with(&suffix))
        {
            return Ok(found.clone());
        }
        if let Some((head, rest)) = name.split_once('.') {
            if let Some(outer) = internal.iter().find(|ty| ty.name() == head) {
                return outer.internal_type(rest, solver);
            }
        }
        Err(ResolveError::unsolved(
            name,
            format!("internal types of {}", self.qualified_name()),
        ))
    }

    pub fn has_internal_type(&self, name: &str, solver: &dyn TypeSolver) -> bool {
        self.internal_type(name, solver).is_ok()
    }
}

impl PartialEq for TypeDeclaration {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.qualified_name() == other.qualified_name()
    }
}

impl Eq for TypeDeclaration {}

impl Hash for TypeDeclaration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.qualified_name().hash(state);
    }
}

impl fmt::Debug for TypeDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeDeclaration({:?}, {})", self.origin(), self.qualified_name())
    }
}
