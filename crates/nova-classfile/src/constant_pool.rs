use crate::error::{Error, Result};
use crate::reader::Reader;

/// Constant pool entries the stub reader looks at; everything else is kept only as its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CpInfo {
    Utf8(String),
    Class { name_index: u16 },
    Other(&'static str),
    /// Second slot of a `Long` or `Double` constant.
    Unusable,
}

impl CpInfo {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            CpInfo::Utf8(_) => "Utf8",
            CpInfo::Class { .. } => "Class",
            CpInfo::Other(kind) => kind,
            CpInfo::Unusable => "Unusable",
        }
    }
}

pub(crate) struct ConstantPool {
    /// Index 0 is never valid and holds `Unusable`.
    entries: Vec<CpInfo>,
}

impl ConstantPool {
    pub(crate) fn parse(reader: &mut Reader<'_>) -> Result<Self> {
        let count = reader.read_u2()?;
        let mut entries = Vec::with_capacity(count as usize);
        entries.push(CpInfo::Unusable);
        while entries.len() < count as usize {
            let tag = reader.read_u1()?;
            let entry = match tag {
                1 => {
                    let len = reader.read_u2()? as usize;
                    CpInfo::Utf8(decode_modified_utf8(reader.read_bytes(len)?)?)
                }
                7 => CpInfo::Class {
                    name_index: reader.read_u2()?,
                },
                3 | 4 => {
                    reader.read_u4()?;
                    CpInfo::Other(if tag == 3 { "Integer" } else { "Float" })
                }
                5 | 6 => {
                    reader.read_bytes(8)?;
                    entries.push(CpInfo::Other(if tag == 5 { "Long" } else { "Double" }));
                    CpInfo::Unusable
                }
                8 => {
                    reader.read_u2()?;
                    CpInfo::Other("String")
                }
                9 | 10 | 11 | 12 | 17 | 18 => {
                    reader.read_u4()?;
                    CpInfo::Other(match tag {
                        9 => "Fieldref",
                        10 => "Methodref",
                        11 => "InterfaceMethodref",
                        12 => "NameAndType",
                        17 => "Dynamic",
                        _ => "InvokeDynamic",
                    })
                }
                15 => {
                    reader.read_bytes(3)?;
                    CpInfo::Other("MethodHandle")
                }
                16 | 19 | 20 => {
                    reader.read_u2()?;
                    CpInfo::Other(match tag {
                        16 => "MethodType",
                        19 => "Module",
                        _ => "Package",
                    })
                }
                other => return Err(Error::InvalidConstantPoolTag(other)),
            };
            entries.push(entry);
        }
        if entries.len() > count as usize {
            // A trailing Long/Double claimed a slot past the declared count.
            return Err(Error::InvalidConstantPoolIndex(count));
        }
        Ok(Self { entries })
    }

    pub(crate) fn get(&self, index: u16) -> Result<&CpInfo> {
        match self.entries.get(index as usize) {
            Some(CpInfo::Unusable) | None => Err(Error::InvalidConstantPoolIndex(index)),
            Some(entry) => Ok(entry),
        }
    }

    pub(crate) fn get_utf8(&self, index: u16) -> Result<&str> {
        match self.get(index)? {
            CpInfo::Utf8(value) => Ok(value),
            other => Err(Error::ConstantPoolTypeMismatch {
                index,
                expected: "Utf8",
                found: other.kind(),
            }),
        }
    }

    /// Internal name of a `Class` entry, e.g. `java/util/Map$Entry`.
    pub(crate) fn get_class_name(&self, index: u16) -> Result<String> {
        match self.get(index)? {
            CpInfo::Class { name_index } => Ok(self.get_utf8(*name_index)?.to_string()),
            other => Err(Error::ConstantPoolTypeMismatch {
                index,
                expected: "Class",
                found: other.kind(),
            }),
        }
    }
}

/// JVMS 4.4.7: NUL is encoded on two bytes and supplementary characters as surrogate pairs.
fn decode_modified_utf8(bytes: &[u8]) -> Result<String> {
    let mut units = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b0 = bytes[i] as u16;
        let continuation = |offset: usize| -> Result<u16> {
            match bytes.get(i + offset) {
                Some(&b) if b & 0xC0 == 0x80 => Ok((b & 0x3F) as u16),
                _ => Err(Error::InvalidModifiedUtf8),
            }
        };
        if b0 & 0x80 == 0 && b0 != 0 {
            units.push(b0);
            i += 1;
        } else if b0 & 0xE0 == 0xC0 {
            units.push(((b0 & 0x1F) << 6) | continuation(1)?);
            i += 2;
        } else if b0 & 0xF0 == 0xE0 {
            units.push(((b0 & 0x0F) << 12) | (continuation(1)? << 6) | continuation(2)?);
            i += 3;
        } else {
            return Err(Error::InvalidModifiedUtf8);
        }
    }
    String::from_utf16(&units).map_err(|_| Error::InvalidModifiedUtf8)
}
