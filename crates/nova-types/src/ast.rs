//! Minimal syntax model consumed by the source backend and by context lookups.
//!
//! This is not a parser output format: it carries exactly what declaration and name resolution
//! need. Type references are kept as written (`List<String>`, `Map.Entry`) and resolved lazily.

use std::sync::Arc;

use crate::decl::TypeKind;
use crate::error::{ResolveError, Result};
use crate::ty::{PrimitiveType, ResolvedType};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompilationUnit {
    pub package: Option<String>,
    pub imports: Vec<Import>,
    pub types: Vec<Arc<ClassDecl>>,
}

impl CompilationUnit {
    pub fn new(package: Option<&str>) -> Self {
        Self {
            package: package.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn with_import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn with_type(mut self, class: ClassDecl) -> Self {
        self.types.push(Arc::new(class));
        self
    }

    /// Empty for the default package.
    pub fn package_name(&self) -> &str {
        self.package.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Qualified name without the trailing `.*`.
    pub name: String,
    pub is_static: bool,
    pub is_asterisk: bool,
}

impl Import {
    /// `import java.util.List;`
    pub fn single(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_static: false,
            is_asterisk: false,
        }
    }

    /// `import java.util.*;`
    pub fn on_demand(package: &str) -> Self {
        Self {
            name: package.to_string(),
            is_static: false,
            is_asterisk: true,
        }
    }

    /// `import static java.util.Collections.emptyList;`
    pub fn static_single(member: &str) -> Self {
        Self {
            name: member.to_string(),
            is_static: true,
            is_asterisk: false,
        }
    }

    /// `import static java.util.Collections.*;`
    pub fn static_on_demand(type_name: &str) -> Self {
        Self {
            name: type_name.to_string(),
            is_static: true,
            is_asterisk: true,
        }
    }

    /// Last segment of a single import: the simple name it brings into scope.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// For static imports, the type the members come from.
    pub fn type_name(&self) -> &str {
        if self.is_asterisk {
            &self.name
        } else {
            self.name.rsplit_once('.').map_or("", |(ty, _)| ty)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Abstract,
    Final,
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub kind: TypeKind,
    pub name: String,
    pub modifiers: Vec<Modifier>,
    /// Annotation names as written, simple or qualified.
    pub annotations: Vec<String>,
    pub type_params: Vec<TypeParam>,
    pub extends: Vec<TypeRef>,
    pub implements: Vec<TypeRef>,
    pub fields: Vec<FieldDecl>,
    pub methods: Vec<MethodDecl>,
    pub constructors: Vec<ConstructorDecl>,
    pub enum_constants: Vec<String>,
    pub members: Vec<Arc<ClassDecl>>,
}

impl ClassDecl {
    pub fn new(kind: TypeKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            modifiers: vec![Modifier::Public],
            annotations: Vec::new(),
            type_params: Vec::new(),
            extends: Vec::new(),
            implements: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            enum_constants: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn class(name: &str) -> Self {
        Self::new(TypeKind::Class, name)
    }

    pub fn interface(name: &str) -> Self {
        Self::new(TypeKind::Interface, name)
    }

    pub fn enumeration(name: &str) -> Self {
        Self::new(TypeKind::Enum, name)
    }

    pub fn annotation(name: &str) -> Self {
        Self::new(TypeKind::Annotation, name)
    }

    pub fn with_modifiers(mut self, modifiers: &[Modifier]) -> Self {
        self.modifiers = modifiers.to_vec();
        self
    }

    pub fn with_annotation(mut self, name: &str) -> Self {
        self.annotations.push(name.to_string());
        self
    }

    pub fn with_type_param(mut self, param: TypeParam) -> Self {
        self.type_params.push(param);
        self
    }

    pub fn extending(mut self, ty: TypeRef) -> Self {
        self.extends.push(ty);
        self
    }

    pub fn implementing(mut self, ty: TypeRef) -> Self {
        self.implements.push(ty);
        self
    }

    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorDecl) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn with_enum_constant(mut self, name: &str) -> Self {
        self.enum_constants.push(name.to_string());
        self
    }

    pub fn with_member(mut self, member: ClassDecl) -> Self {
        self.members.push(Arc::new(member));
        self
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeParam {
    pub name: String,
    pub bounds: Vec<TypeRef>,
}

impl TypeParam {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            bounds: Vec::new(),
        }
    }

    pub fn with_bound(mut self, bound: TypeRef) -> Self {
        self.bounds.push(bound);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub modifiers: Vec<Modifier>,
    pub ty: TypeRef,
    pub name: String,
}

impl FieldDecl {
    pub fn new(ty: TypeRef, name: &str) -> Self {
        Self {
            modifiers: Vec::new(),
            ty,
            name: name.to_string(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: &[Modifier]) -> Self {
        self.modifiers = modifiers.to_vec();
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub modifiers: Vec<Modifier>,
    pub type_params: Vec<TypeParam>,
    pub return_type: TypeRef,
    pub name: String,
    pub params: Vec<Param>,
}

impl MethodDecl {
    pub fn new(return_type: TypeRef, name: &str) -> Self {
        Self {
            modifiers: vec![Modifier::Public],
            type_params: Vec::new(),
            return_type,
            name: name.to_string(),
            params: Vec::new(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: &[Modifier]) -> Self {
        self.modifiers = modifiers.to_vec();
        self
    }

    pub fn with_type_param(mut self, param: TypeParam) -> Self {
        self.type_params.push(param);
        self
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDecl {
    pub modifiers: Vec<Modifier>,
    pub params: Vec<Param>,
}

impl ConstructorDecl {
    pub fn new() -> Self {
        Self {
            modifiers: vec![Modifier::Public],
            params: Vec::new(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: &[Modifier]) -> Self {
        self.modifiers = modifiers.to_vec();
        self
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }
}

impl Default for ConstructorDecl {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    /// For a varargs parameter, the element type (`String` in `String... args`).
    pub ty: TypeRef,
    pub varargs: bool,
}

impl Param {
    pub fn new(ty: TypeRef, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ty,
            varargs: false,
        }
    }

    pub fn varargs(ty: TypeRef, name: &str) -> Self {
        Self {
            varargs: true,
            ..Self::new(ty, name)
        }
    }
}

/// Local variable visible in a block.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalVar {
    pub name: String,
    pub ty: TypeRef,
}

impl LocalVar {
    pub fn new(ty: TypeRef, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ty,
        }
    }
}

/// A type as written in source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Primitive(PrimitiveType),
    Void,
    /// Simple (`List`), enclosing-qualified (`Map.Entry`) or fully qualified name.
    Named { name: String, args: Vec<TypeArgRef> },
    Array(Box<TypeRef>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeArgRef {
    Type(TypeRef),
    /// `?`
    Wildcard,
    Extends(TypeRef),
    Super(TypeRef),
}

impl TypeRef {
    pub fn named(name: &str) -> Self {
        TypeRef::Named {
            name: name.to_string(),
            args: Vec::new(),
        }
    }

    pub fn generic(name: &str, args: Vec<TypeArgRef>) -> Self {
        TypeRef::Named {
            name: name.to_string(),
            args,
        }
    }

    pub fn array_of(component: TypeRef) -> Self {
        TypeRef::Array(Box::new(component))
    }

    /// Parse the source spelling of a type: `int`, `String[]`,
    /// `java.util.Map<K, ? extends List<V>>`.
    pub fn parse(text: &str) -> Result<Self> {
        let mut parser = TypeRefParser { text, pos: 0 };
        let ty = parser.type_ref()?;
        parser.skip_whitespace();
        if parser.pos != text.len() {
            return Err(parser.error("trailing input"));
        }
        Ok(ty)
    }
}

struct TypeRefParser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> TypeRefParser<'a> {
    fn error(&self, message: &str) -> ResolveError {
        ResolveError::Malformed {
            subject: format!("type `{}`", self.text),
            message: format!("{message} at offset {}", self.pos),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn name(&mut self) -> Result<&'a str> {
        self.skip_whitespace();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '$' || c == '.' {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        if start == self.pos {
            return Err(self.error("expected a type name"));
        }
        Ok(&self.text[start..self.pos])
    }

    fn type_ref(&mut self) -> Result<TypeRef> {
        let name = self.name()?;
        let mut ty = if name == "void" {
            TypeRef::Void
        } else if let Some(primitive) = PrimitiveType::from_name(name) {
            TypeRef::Primitive(primitive)
        } else {
            let mut args = Vec::new();
            if self.eat('<') {
                loop {
                    args.push(self.type_arg()?);
                    if self.eat('>') {
                        break;
                    }
                    if !self.eat(',') {
                        return Err(self.error("expected `,` or `>`"));
                    }
                }
            }
            TypeRef::generic(name, args)
        };
        while self.eat('[') {
            if !self.eat(']') {
                return Err(self.error("expected `]`"));
            }
            ty = TypeRef::array_of(ty);
        }
        Ok(ty)
    }

    fn type_arg(&mut self) -> Result<TypeArgRef> {
        if !self.eat('?') {
            return Ok(TypeArgRef::Type(self.type_ref()?));
        }
        self.skip_whitespace();
        let rest = &self.text[self.pos..];
        if let Some(after) = rest.strip_prefix("extends") {
            self.pos = self.text.len() - after.len();
            Ok(TypeArgRef::Extends(self.type_ref()?))
        } else if let Some(after) = rest.strip_prefix("super") {
            self.pos = self.text.len() - after.len();
            Ok(TypeArgRef::Super(self.type_ref()?))
        } else {
            Ok(TypeArgRef::Wildcard)
        }
    }
}

/// A bare name used as an expression (`x`, `MAX_VALUE`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameExpr {
    pub name: String,
}

impl NameExpr {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// A method call whose receiver and argument types are already known.
///
/// With no receiver, the call is resolved against the enclosing scopes, including static
/// imports.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCallExpr {
    pub receiver: Option<ResolvedType>,
    pub name: String,
    pub argument_types: Vec<ResolvedType>,
}

impl MethodCallExpr {
    pub fn new(receiver: Option<ResolvedType>, name: &str, argument_types: Vec<ResolvedType>) -> Self {
        Self {
            receiver,
            name: name.to_string(),
            argument_types,
        }
    }
}
