#![forbid(unsafe_code)]

//! Compiled-binary metadata consumed by the binary declaration backend.
//!
//! [`ClassFile::parse`] reads the header, constant pool, members and the `Signature`,
//! `InnerClasses` and annotation attributes of a `.class` file. A [`ClassStub`] is the
//! member-level view built from it (or by hand): names, access flags, descriptors and the
//! optional generic signatures. Descriptors and signatures are kept as strings and parsed on
//! demand with the functions in [`signature`](crate::parse_class_signature).

pub mod access;
mod classfile;
mod constant_pool;
mod error;
mod reader;
mod signature;
mod stub;

pub use crate::classfile::{ClassFile, ClassMember};
pub use crate::error::{Error, Result};
pub use crate::signature::{
    parse_class_signature, parse_field_signature, parse_method_signature, BaseType,
    ClassSignature, ClassTypeSignature, MethodSignature, SimpleClassTypeSignature, TypeArgument,
    TypeParameter, TypeSignature,
};
pub use crate::stub::{ClassStub, FieldStub, InnerClassInfo, MethodStub};

/// Convert an internal (`java/util/Map$Entry`) or binary (`java.util.Map$Entry`) name into the
/// canonical dotted form (`java.util.Map.Entry`).
pub fn canonical_name(internal_name: &str) -> String {
    internal_name.replace(['/', '$'], ".")
}
