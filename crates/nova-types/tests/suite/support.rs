use std::sync::Arc;

use nova_types::ast::{CompilationUnit, Import, TypeRef};
use nova_types::{
    CombinedTypeSolver, Context, HostTypeSolver, MemoryTypeSolver, ReferenceType, ResolvedType,
    TypeDeclaration, TypeSolver,
};

pub const PACKAGE: &str = "com.example";

pub fn unit() -> CompilationUnit {
    CompilationUnit::new(Some(PACKAGE))
}

/// Project sources layered over the built-in core library.
pub fn project(units: Vec<CompilationUnit>) -> CombinedTypeSolver {
    let mut sources = MemoryTypeSolver::new();
    for unit in units {
        sources.add_compilation_unit(unit);
    }
    CombinedTypeSolver::default().with(sources).with(HostTypeSolver)
}

/// Resolves `text` as if written in a `com.example` file importing `java.util.*`.
pub fn ty(solver: &dyn TypeSolver, text: &str) -> ResolvedType {
    let scope = Arc::new(
        unit()
            .with_import(Import::on_demand("java.util"))
            .with_import(Import::on_demand("java.util.function")),
    );
    Context::compilation_unit(scope)
        .resolve_type_ref(&TypeRef::parse(text).unwrap(), solver)
        .unwrap()
}

pub fn reference(solver: &dyn TypeSolver, text: &str) -> ReferenceType {
    ty(solver, text).as_reference_type().unwrap().clone()
}

pub fn decl(solver: &dyn TypeSolver, qualified_name: &str) -> TypeDeclaration {
    solver.solve_type(qualified_name).unwrap()
}

pub fn type_ref(text: &str) -> TypeRef {
    TypeRef::parse(text).unwrap()
}

pub fn qualified_names(types: &[ReferenceType]) -> Vec<&str> {
    types.iter().map(ReferenceType::qualified_name).collect()
}

/// Field or method entry of an assembled class file.
pub struct MemberBytes<'a> {
    pub access_flags: u16,
    pub name: &'a str,
    pub descriptor: &'a str,
    pub signature: Option<&'a str>,
}

/// Hand-assembles a class file. Methods get an opaque `Code` attribute the reader must skip.
#[derive(Default)]
pub struct ClassBytes<'a> {
    pub name: &'a str,
    pub access_flags: u16,
    pub super_class: Option<&'a str>,
    pub interfaces: Vec<&'a str>,
    pub signature: Option<&'a str>,
    /// Annotation type descriptors.
    pub annotations: Vec<&'a str>,
    pub fields: Vec<MemberBytes<'a>>,
    pub methods: Vec<MemberBytes<'a>>,
    /// `(inner, outer, simple name, flags)`.
    pub inner_classes: Vec<(&'a str, &'a str, &'a str, u16)>,
}

#[derive(Default)]
struct Pool {
    bytes: Vec<u8>,
    count: u16,
}

impl Pool {
    fn utf8(&mut self, text: &str) -> u16 {
        self.bytes.push(1);
        self.bytes.extend((text.len() as u16).to_be_bytes());
        self.bytes.extend(text.as_bytes());
        self.count += 1;
        self.count
    }

    fn class(&mut self, name: &str) -> u16 {
        let name = self.utf8(name);
        self.bytes.push(7);
        self.bytes.extend(name.to_be_bytes());
        self.count += 1;
        self.count
    }

    fn attribute(&mut self, out: &mut Vec<u8>, name: &str, info: &[u8]) {
        out.extend(self.utf8(name).to_be_bytes());
        out.extend((info.len() as u32).to_be_bytes());
        out.extend(info);
    }

    fn member(&mut self, out: &mut Vec<u8>, member: &MemberBytes<'_>, with_code: bool) {
        out.extend(member.access_flags.to_be_bytes());
        out.extend(self.utf8(member.name).to_be_bytes());
        out.extend(self.utf8(member.descriptor).to_be_bytes());
        let count = u16::from(member.signature.is_some()) + u16::from(with_code);
        out.extend(count.to_be_bytes());
        if let Some(signature) = member.signature {
            let index = self.utf8(signature);
            self.attribute(out, "Signature", &index.to_be_bytes());
        }
        if with_code {
            self.attribute(out, "Code", &[0xDE, 0xAD, 0xBE, 0xEF]);
        }
    }
}

impl ClassBytes<'_> {
    pub fn assemble(&self) -> Vec<u8> {
        let mut pool = Pool::default();
        let mut body = Vec::new();
        body.extend(self.access_flags.to_be_bytes());
        body.extend(pool.class(self.name).to_be_bytes());
        let super_index = self.super_class.map_or(0, |name| pool.class(name));
        body.extend(super_index.to_be_bytes());
        body.extend((self.interfaces.len() as u16).to_be_bytes());
        for interface in &self.interfaces {
            body.extend(pool.class(interface).to_be_bytes());
        }
        body.extend((self.fields.len() as u16).to_be_bytes());
        for field in &self.fields {
            pool.member(&mut body, field, false);
        }
        body.extend((self.methods.len() as u16).to_be_bytes());
        for method in &self.methods {
            pool.member(&mut body, method, true);
        }

        let count = u16::from(self.signature.is_some())
            + u16::from(!self.annotations.is_empty())
            + u16::from(!self.inner_classes.is_empty());
        body.extend(count.to_be_bytes());
        if let Some(signature) = self.signature {
            let index = pool.utf8(signature);
            pool.attribute(&mut body, "Signature", &index.to_be_bytes());
        }
        if !self.annotations.is_empty() {
            let mut info = (self.annotations.len() as u16).to_be_bytes().to_vec();
            for annotation in &self.annotations {
                info.extend(pool.utf8(annotation).to_be_bytes());
                info.extend(0u16.to_be_bytes());
            }
            pool.attribute(&mut body, "RuntimeVisibleAnnotations", &info);
        }
        if !self.inner_classes.is_empty() {
            let mut info = (self.inner_classes.len() as u16).to_be_bytes().to_vec();
            for (inner, outer, simple_name, flags) in &self.inner_classes {
                info.extend(pool.class(inner).to_be_bytes());
                info.extend(pool.class(outer).to_be_bytes());
                info.extend(pool.utf8(simple_name).to_be_bytes());
                info.extend(flags.to_be_bytes());
            }
            pool.attribute(&mut body, "InnerClasses", &info);
        }

        let mut bytes = vec![0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00, 0x00, 0x3D];
        bytes.extend((pool.count + 1).to_be_bytes());
        bytes.extend(pool.bytes);
        bytes.extend(body);
        bytes
    }
}
