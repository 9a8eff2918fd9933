use crate::access::{
    has, ACC_ANNOTATION, ACC_BRIDGE, ACC_ENUM, ACC_INTERFACE, ACC_STATIC, ACC_SYNTHETIC,
    ACC_VARARGS,
};
use crate::classfile::{ClassFile, ClassMember};
use crate::error::{Error, Result};
use crate::signature::{
    parse_class_signature, parse_field_signature, parse_method_signature, ClassSignature,
    ClassTypeSignature, MethodSignature, TypeSignature,
};

const OBJECT: &str = "java/lang/Object";

/// Member-level view of one class file. Names are in internal form (`java/util/Map$Entry`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassStub {
    pub internal_name: String,
    pub access_flags: u16,
    pub super_class: Option<String>,
    pub interfaces: Vec<String>,
    /// Raw `Signature` attribute, if the class is generic or extends a generic type.
    pub signature: Option<String>,
    /// Internal names of the annotation types present on the class.
    pub annotations: Vec<String>,
    pub inner_classes: Vec<InnerClassInfo>,
    pub fields: Vec<FieldStub>,
    pub methods: Vec<MethodStub>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerClassInfo {
    pub inner_class: String,
    pub outer_class: Option<String>,
    pub inner_name: Option<String>,
    pub access_flags: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStub {
    pub access_flags: u16,
    pub name: String,
    pub descriptor: String,
    pub signature: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodStub {
    pub access_flags: u16,
    pub name: String,
    pub descriptor: String,
    pub signature: Option<String>,
}

impl ClassStub {
    pub fn new(internal_name: impl Into<String>, access_flags: u16) -> Self {
        let internal_name = internal_name.into();
        let super_class = (internal_name != OBJECT).then(|| OBJECT.to_string());
        Self {
            internal_name,
            access_flags,
            super_class,
            interfaces: Vec::new(),
            signature: None,
            annotations: Vec::new(),
            inner_classes: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Member-level view of a parsed class file.
    pub fn from_classfile(class: &ClassFile) -> Self {
        Self {
            internal_name: class.this_class.clone(),
            access_flags: class.access_flags,
            super_class: class.super_class.clone(),
            interfaces: class.interfaces.clone(),
            signature: class.signature.clone(),
            annotations: class.annotations.clone(),
            inner_classes: class.inner_classes.clone(),
            fields: class.fields.iter().map(FieldStub::from_member).collect(),
            methods: class.methods.iter().map(MethodStub::from_member).collect(),
        }
    }

    /// Reads a stub straight from class file bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        Ok(Self::from_classfile(&ClassFile::parse(bytes)?))
    }

    pub fn with_super_class(mut self, super_class: Option<&str>) -> Self {
        self.super_class = super_class.map(str::to_string);
        self
    }

    pub fn with_interface(mut self, interface: &str) -> Self {
        self.interfaces.push(interface.to_string());
        self
    }

    pub fn with_signature(mut self, signature: &str) -> Self {
        self.signature = Some(signature.to_string());
        self
    }

    pub fn with_annotation(mut self, annotation: &str) -> Self {
        self.annotations.push(annotation.to_string());
        self
    }

    pub fn with_inner_class(mut self, inner_class: &str, inner_name: &str, access_flags: u16) -> Self {
        self.inner_classes.push(InnerClassInfo {
            inner_class: inner_class.to_string(),
            outer_class: Some(self.internal_name.clone()),
            inner_name: Some(inner_name.to_string()),
            access_flags,
        });
        self
    }

    /// Records this class as the member `inner_name` of `outer_class`.
    pub fn with_outer_class(mut self, outer_class: &str, inner_name: &str, access_flags: u16) -> Self {
        self.inner_classes.push(InnerClassInfo {
            inner_class: self.internal_name.clone(),
            outer_class: Some(outer_class.to_string()),
            inner_name: Some(inner_name.to_string()),
            access_flags,
        });
        self
    }

    pub fn with_field(mut self, field: FieldStub) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodStub) -> Self {
        self.methods.push(method);
        self
    }

    pub fn is_interface(&self) -> bool {
        has(self.access_flags, ACC_INTERFACE)
    }

    pub fn is_annotation(&self) -> bool {
        has(self.access_flags, ACC_ANNOTATION)
    }

    pub fn is_enum(&self) -> bool {
        has(self.access_flags, ACC_ENUM)
    }

    /// Package in dotted form, empty for the default package.
    pub fn package_name(&self) -> String {
        match self.internal_name.rfind('/') {
            Some(idx) => self.internal_name[..idx].replace('/', "."),
            None => String::new(),
        }
    }

    /// Generic class signature; synthesized from the raw super class and interfaces when the
    /// class carries no `Signature` attribute.
    pub fn class_signature(&self) -> Result<ClassSignature> {
        if let Some(signature) = &self.signature {
            return parse_class_signature(signature);
        }
        if self.super_class.is_none() && self.internal_name != OBJECT {
            return Err(Error::MalformedStub {
                class: self.internal_name.clone(),
                detail: "missing super class",
            });
        }
        Ok(ClassSignature {
            type_parameters: Vec::new(),
            super_class: self
                .super_class
                .as_deref()
                .map(ClassTypeSignature::from_internal_name),
            interfaces: self
                .interfaces
                .iter()
                .map(|name| ClassTypeSignature::from_internal_name(name))
                .collect(),
        })
    }

    /// Member classes declared directly inside this class.
    pub fn member_classes(&self) -> impl Iterator<Item = &InnerClassInfo> {
        self.inner_classes
            .iter()
            .filter(|info| info.outer_class.as_deref() == Some(self.internal_name.as_str()))
    }
}

impl ClassFile {
    pub fn stub(&self) -> ClassStub {
        ClassStub::from_classfile(self)
    }
}

impl FieldStub {
    fn from_member(member: &ClassMember) -> Self {
        Self {
            access_flags: member.access_flags,
            name: member.name.clone(),
            descriptor: member.descriptor.clone(),
            signature: member.signature.clone(),
        }
    }

    pub fn new(access_flags: u16, name: &str, descriptor: &str) -> Self {
        Self {
            access_flags,
            name: name.to_string(),
            descriptor: descriptor.to_string(),
            signature: None,
        }
    }

    pub fn with_signature(mut self, signature: &str) -> Self {
        self.signature = Some(signature.to_string());
        self
    }

    pub fn type_signature(&self) -> Result<TypeSignature> {
        parse_field_signature(self.signature.as_deref().unwrap_or(&self.descriptor))
    }

    pub fn is_static(&self) -> bool {
        has(self.access_flags, ACC_STATIC)
    }

    pub fn is_synthetic(&self) -> bool {
        has(self.access_flags, ACC_SYNTHETIC)
    }

    pub fn is_enum_constant(&self) -> bool {
        has(self.access_flags, ACC_ENUM)
    }
}

impl MethodStub {
    fn from_member(member: &ClassMember) -> Self {
        Self {
            access_flags: member.access_flags,
            name: member.name.clone(),
            descriptor: member.descriptor.clone(),
            signature: member.signature.clone(),
        }
    }

    pub fn new(access_flags: u16, name: &str, descriptor: &str) -> Self {
        Self {
            access_flags,
            name: name.to_string(),
            descriptor: descriptor.to_string(),
            signature: None,
        }
    }

    pub fn with_signature(mut self, signature: &str) -> Self {
        self.signature = Some(signature.to_string());
        self
    }

    /// Generic signature when present, otherwise the descriptor.
    ///
    /// Constructors of inner classes may carry a signature with fewer parameters than the
    /// descriptor (the outer instance is implicit); the signature wins.
    pub fn method_signature(&self) -> Result<MethodSignature> {
        parse_method_signature(self.signature.as_deref().unwrap_or(&self.descriptor))
    }

    pub fn is_constructor(&self) -> bool {
        self.name == "<init>"
    }

    pub fn is_static_initializer(&self) -> bool {
        self.name == "<clinit>"
    }

    pub fn is_bridge(&self) -> bool {
        has(self.access_flags, ACC_BRIDGE)
    }

    pub fn is_synthetic(&self) -> bool {
        has(self.access_flags, ACC_SYNTHETIC)
    }

    /// Bridge and synthetic methods are compiler artifacts with no source counterpart.
    pub fn is_compiler_generated(&self) -> bool {
        self.is_bridge() || self.is_synthetic()
    }

    pub fn is_varargs(&self) -> bool {
        has(self.access_flags, ACC_VARARGS)
    }
}
