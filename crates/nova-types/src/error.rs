use thiserror::Error;

pub type Result<T, E = ResolveError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A name, type or method could not be found where the API guarantees a result.
    #[error("unsolved symbol `{name}` in {context}")]
    UnsolvedSymbol { name: String, context: String },

    /// Narrowing to the wrong variant, or querying an unsolved reference.
    #[error("unsupported operation `{operation}` on {target}")]
    UnsupportedOperation {
        operation: &'static str,
        target: String,
    },

    #[error("inconsistent classpath: ancestor `{ancestor}` of `{declaration}` cannot be resolved")]
    InconsistentClasspath {
        ancestor: String,
        declaration: String,
    },

    #[error(
        "ambiguous call `{name}({})`: candidates are {}",
        .arguments.join(", "),
        .candidates.join(", ")
    )]
    AmbiguousOverload {
        name: String,
        arguments: Vec<String>,
        candidates: Vec<String>,
    },

    #[error("malformed {subject}: {message}")]
    Malformed { subject: String, message: String },
}

impl ResolveError {
    pub(crate) fn unsolved(name: impl Into<String>, context: impl Into<String>) -> Self {
        ResolveError::UnsolvedSymbol {
            name: name.into(),
            context: context.into(),
        }
    }

    pub(crate) fn unsupported(operation: &'static str, target: impl Into<String>) -> Self {
        ResolveError::UnsupportedOperation {
            operation,
            target: target.into(),
        }
    }

    pub fn is_unsolved(&self) -> bool {
        matches!(self, ResolveError::UnsolvedSymbol { .. })
    }
}

impl From<nova_classfile::Error> for ResolveError {
    fn from(err: nova_classfile::Error) -> Self {
        let subject = match &err {
            nova_classfile::Error::InvalidSignature { .. } => "signature".to_string(),
            nova_classfile::Error::MalformedStub { class, .. } => format!("class stub {class}"),
            _ => "class file".to_string(),
        };
        ResolveError::Malformed {
            subject,
            message: err.to_string(),
        }
    }
}
