//! Parsers for JVM descriptors and generic signatures (JVMS 4.3, 4.7.9.1).
//!
//! Descriptors are the non-generic subset of the signature grammar, so every entry point
//! here accepts either form: `(ILjava/lang/String;)V` parses the same way as
//! `<T:Ljava/lang/Object;>(TT;)V`.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Boolean,
}

impl BaseType {
    fn from_tag(tag: u8) -> Option<Self> {
        Some(match tag {
            b'B' => BaseType::Byte,
            b'C' => BaseType::Char,
            b'D' => BaseType::Double,
            b'F' => BaseType::Float,
            b'I' => BaseType::Int,
            b'J' => BaseType::Long,
            b'S' => BaseType::Short,
            b'Z' => BaseType::Boolean,
            _ => return None,
        })
    }

    pub fn keyword(self) -> &'static str {
        match self {
            BaseType::Byte => "byte",
            BaseType::Char => "char",
            BaseType::Double => "double",
            BaseType::Float => "float",
            BaseType::Int => "int",
            BaseType::Long => "long",
            BaseType::Short => "short",
            BaseType::Boolean => "boolean",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSignature {
    Base(BaseType),
    Class(ClassTypeSignature),
    TypeVariable(String),
    Array(Box<TypeSignature>),
}

impl TypeSignature {
    /// Java source spelling of the erased type, e.g. `java.util.List` or `int[]`.
    pub fn erased_source_name(&self) -> String {
        match self {
            TypeSignature::Base(base) => base.keyword().to_string(),
            TypeSignature::Class(class) => class.canonical_name(),
            TypeSignature::TypeVariable(name) => name.clone(),
            TypeSignature::Array(component) => format!("{}[]", component.erased_source_name()),
        }
    }
}

/// `Ljava/util/Map<TK;TV;>.Entry<TK;TV;>;`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassTypeSignature {
    /// Package in internal form (`java/util`), empty for the default package.
    pub package: String,
    /// Outermost first.
    pub segments: Vec<SimpleClassTypeSignature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleClassTypeSignature {
    pub name: String,
    pub type_arguments: Vec<TypeArgument>,
}

impl ClassTypeSignature {
    /// A non-generic class reference from an internal name such as `java/util/Map$Entry`.
    pub fn from_internal_name(internal_name: &str) -> Self {
        let (package, simple) = match internal_name.rfind('/') {
            Some(idx) => (&internal_name[..idx], &internal_name[idx + 1..]),
            None => ("", internal_name),
        };
        Self {
            package: package.to_string(),
            segments: vec![SimpleClassTypeSignature {
                name: simple.to_string(),
                type_arguments: Vec::new(),
            }],
        }
    }

    /// `java.util.Map.Entry`
    pub fn canonical_name(&self) -> String {
        let mut out = self.package.replace('/', ".");
        for segment in &self.segments {
            if !out.is_empty() {
                out.push('.');
            }
            out.push_str(&segment.name.replace('$', "."));
        }
        out
    }

    /// Type arguments applied to the innermost class.
    pub fn type_arguments(&self) -> &[TypeArgument] {
        self.segments
            .last()
            .map(|segment| segment.type_arguments.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeArgument {
    /// `*`
    Any,
    Exact(TypeSignature),
    /// `+`
    Extends(TypeSignature),
    /// `-`
    Super(TypeSignature),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeParameter {
    pub name: String,
    pub class_bound: Option<TypeSignature>,
    pub interface_bounds: Vec<TypeSignature>,
}

impl TypeParameter {
    /// Declared bounds in order; an empty class bound is skipped.
    pub fn bounds(&self) -> impl Iterator<Item = &TypeSignature> {
        self.class_bound.iter().chain(self.interface_bounds.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSignature {
    pub type_parameters: Vec<TypeParameter>,
    /// `None` only for `java/lang/Object`.
    pub super_class: Option<ClassTypeSignature>,
    pub interfaces: Vec<ClassTypeSignature>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub type_parameters: Vec<TypeParameter>,
    pub parameters: Vec<TypeSignature>,
    /// `None` for `void`.
    pub return_type: Option<TypeSignature>,
    pub throws: Vec<TypeSignature>,
}

pub fn parse_class_signature(signature: &str) -> Result<ClassSignature> {
    let mut parser = Parser::new(signature);
    let type_parameters = parser.type_parameters()?;
    let super_class = parser.class_type()?;
    let mut interfaces = Vec::new();
    while !parser.at_end() {
        interfaces.push(parser.class_type()?);
    }
    Ok(ClassSignature {
        type_parameters,
        super_class: Some(super_class),
        interfaces,
    })
}

pub fn parse_method_signature(signature: &str) -> Result<MethodSignature> {
    let mut parser = Parser::new(signature);
    let type_parameters = parser.type_parameters()?;
    parser.expect(b'(')?;
    let mut parameters = Vec::new();
    while parser.peek() != Some(b')') {
        parameters.push(parser.type_signature()?);
    }
    parser.expect(b')')?;

    let return_type = if parser.eat(b'V') {
        None
    } else {
        Some(parser.type_signature()?)
    };

    let mut throws = Vec::new();
    while parser.eat(b'^') {
        throws.push(parser.type_signature()?);
    }
    parser.finish()?;

    Ok(MethodSignature {
        type_parameters,
        parameters,
        return_type,
        throws,
    })
}

/// Parse a field signature or a plain field descriptor.
pub fn parse_field_signature(signature: &str) -> Result<TypeSignature> {
    let mut parser = Parser::new(signature);
    let ty = parser.type_signature()?;
    parser.finish()?;
    Ok(ty)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn error(&self) -> Error {
        Error::InvalidSignature {
            signature: self.input.to_string(),
            offset: self.pos,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, byte: u8) -> Result<()> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.error())
        }
    }

    fn finish(&self) -> Result<()> {
        if self.at_end() {
            Ok(())
        } else {
            Err(self.error())
        }
    }

    /// Reads up to (not including) the first byte in `stops`.
    fn identifier(&mut self, stops: &[u8]) -> Result<&'a str> {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if stops.contains(&b) {
                break;
            }
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.error());
        }
        Ok(&self.input[start..self.pos])
    }

    fn type_parameters(&mut self) -> Result<Vec<TypeParameter>> {
        let mut params = Vec::new();
        if !self.eat(b'<') {
            return Ok(params);
        }
        while !self.eat(b'>') {
            let name = self.identifier(b":>")?.to_string();
            self.expect(b':')?;
            // The class bound may be empty when the only bounds are interfaces.
            let class_bound = match self.peek() {
                Some(b':') | Some(b'>') => None,
                _ => Some(self.type_signature()?),
            };
            let mut interface_bounds = Vec::new();
            while self.eat(b':') {
                interface_bounds.push(self.type_signature()?);
            }
            params.push(TypeParameter {
                name,
                class_bound,
                interface_bounds,
            });
        }
        if params.is_empty() {
            return Err(self.error());
        }
        Ok(params)
    }

    fn type_signature(&mut self) -> Result<TypeSignature> {
        let Some(tag) = self.peek() else {
            return Err(self.error());
        };
        if let Some(base) = BaseType::from_tag(tag) {
            self.pos += 1;
            return Ok(TypeSignature::Base(base));
        }
        match tag {
            b'L' => Ok(TypeSignature::Class(self.class_type()?)),
            b'T' => {
                self.pos += 1;
                let name = self.identifier(b";")?.to_string();
                self.expect(b';')?;
                Ok(TypeSignature::TypeVariable(name))
            }
            b'[' => {
                self.pos += 1;
                Ok(TypeSignature::Array(Box::new(self.type_signature()?)))
            }
            _ => Err(self.error()),
        }
    }

    fn class_type(&mut self) -> Result<ClassTypeSignature> {
        self.expect(b'L')?;
        let mut package = String::new();
        let mut segments = Vec::new();
        loop {
            let ident = self.identifier(b"/<.;")?;
            match self.peek() {
                Some(b'/') if segments.is_empty() => {
                    self.pos += 1;
                    if !package.is_empty() {
                        package.push('/');
                    }
                    package.push_str(ident);
                }
                Some(b'<') | Some(b'.') | Some(b';') => {
                    let type_arguments = if self.peek() == Some(b'<') {
                        self.type_arguments()?
                    } else {
                        Vec::new()
                    };
                    segments.push(SimpleClassTypeSignature {
                        name: ident.to_string(),
                        type_arguments,
                    });
                    if self.eat(b';') {
                        break;
                    }
                    self.expect(b'.')?;
                }
                _ => return Err(self.error()),
            }
        }
        Ok(ClassTypeSignature { package, segments })
    }

    fn type_arguments(&mut self) -> Result<Vec<TypeArgument>> {
        self.expect(b'<')?;
        let mut args = Vec::new();
        while !self.eat(b'>') {
            let arg = match self.peek() {
                Some(b'*') => {
                    self.pos += 1;
                    TypeArgument::Any
                }
                Some(b'+') => {
                    self.pos += 1;
                    TypeArgument::Extends(self.type_signature()?)
                }
                Some(b'-') => {
                    self.pos += 1;
                    TypeArgument::Super(self.type_signature()?)
                }
                Some(_) => TypeArgument::Exact(self.type_signature()?),
                None => return Err(self.error()),
            };
            args.push(arg);
        }
        if args.is_empty() {
            return Err(self.error());
        }
        Ok(args)
    }
}
