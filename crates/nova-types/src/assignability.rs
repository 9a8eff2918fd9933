//! `is_assignable_by`: may a value of the candidate type be used where the target is expected.

use crate::decl::OBJECT;
use crate::error::Result;
use crate::reference::ReferenceType;
use crate::solver::TypeSolver;
use crate::ty::{PrimitiveType, ResolvedType, Wildcard};

const ARRAY_SUPERTYPES: [&str; 3] = [OBJECT, "java.lang.Cloneable", "java.io.Serializable"];

impl ResolvedType {
    /// Whether a value of type `candidate` can be assigned to a variable of this type.
    ///
    /// Boxing is applied from primitive candidates to reference targets; unboxing is not.
    pub fn is_assignable_by(&self, candidate: &ResolvedType, solver: &dyn TypeSolver) -> Result<bool> {
        if self == candidate && !self.is_void() {
            return Ok(true);
        }
        match self {
            ResolvedType::Primitive(target) => Ok(match candidate {
                ResolvedType::Primitive(primitive) => primitive.widens_to(*target),
                _ => false,
            }),
            ResolvedType::Void => Ok(false),
            ResolvedType::Null => Ok(candidate.is_null()),
            ResolvedType::Reference(target) => target.is_assignable_by(candidate, solver),
            ResolvedType::TypeVariable(param) => {
                match candidate {
                    ResolvedType::Null => return Ok(true),
                    ResolvedType::Void => return Ok(false),
                    ResolvedType::TypeVariable(other) => {
                        if other.bounds(solver)?.iter().any(|bound| bound == self) {
                            return Ok(true);
                        }
                    }
                    _ => {}
                }
                // Unbounded parameters behave like `java.lang.Object`.
                for bound in param.bounds(solver)? {
                    if !bound.is_assignable_by(candidate, solver)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            ResolvedType::Wildcard(wildcard) => match wildcard.bound() {
                Some(bound) => bound.is_assignable_by(candidate, solver),
                None => Ok(candidate.is_reference()),
            },
            ResolvedType::Array(component) => Ok(match candidate {
                ResolvedType::Null => true,
                ResolvedType::Array(other) if component.is_primitive() || other.is_primitive() => {
                    component == other
                }
                ResolvedType::Array(other) => component.is_assignable_by(other, solver)?,
                _ => false,
            }),
            ResolvedType::Intersection(parts) => {
                for part in parts {
                    if !part.is_assignable_by(candidate, solver)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        }
    }
}

impl ReferenceType {
    pub fn is_assignable_by(&self, candidate: &ResolvedType, solver: &dyn TypeSolver) -> Result<bool> {
        match candidate {
            ResolvedType::Null => Ok(true),
            ResolvedType::Void => Ok(false),
            ResolvedType::Primitive(primitive) => self.accepts_boxed(*primitive, solver),
            ResolvedType::Array(_) => Ok(ARRAY_SUPERTYPES.contains(&self.qualified_name())),
            ResolvedType::TypeVariable(param) => {
                if self.declaration().is_java_lang_object() {
                    return Ok(true);
                }
                for bound in param.bounds(solver)? {
                    if self.is_assignable_by(&bound, solver)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            ResolvedType::Wildcard(Wildcard::Extends(bound)) => self.is_assignable_by(bound, solver),
            ResolvedType::Wildcard(_) => Ok(self.declaration().is_java_lang_object()),
            ResolvedType::Intersection(parts) => {
                for part in parts {
                    if self.is_assignable_by(part, solver)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            ResolvedType::Reference(other) => self.is_assignable_by_reference(other, solver),
        }
    }

    fn is_assignable_by_reference(&self, candidate: &ReferenceType, solver: &dyn TypeSolver) -> Result<bool> {
        if self.declaration() == candidate.declaration() {
            return self.type_arguments_accept(candidate, solver);
        }
        if self.declaration().is_java_lang_object() {
            return Ok(true);
        }
        for ancestor in candidate.all_ancestors(solver, true)? {
            if ancestor.declaration() == self.declaration() {
                return self.type_arguments_accept(&ancestor, solver);
            }
        }
        Ok(false)
    }

    /// Boxing conversion, optionally preceded by primitive widening, then widening reference
    /// conversion (`Number n = 1`).
    fn accepts_boxed(&self, primitive: PrimitiveType, solver: &dyn TypeSolver) -> Result<bool> {
        let target = self.qualified_name();
        if target == OBJECT || target == primitive.boxed_type_name() {
            return Ok(true);
        }
        if PrimitiveType::from_boxed_type_name(target).is_some_and(|wrapped| primitive.widens_to(wrapped)) {
            return Ok(true);
        }
        let boxed = match solver.try_solve_type(primitive.boxed_type_name()).ok() {
            Some(boxed) => ReferenceType::raw(boxed)?,
            None => return Ok(false),
        };
        self.is_assignable_by_reference(&boxed, solver)
    }

    /// Positional comparison of the type arguments of two uses of the same declaration.
    fn type_arguments_accept(&self, candidate: &ReferenceType, solver: &dyn TypeSolver) -> Result<bool> {
        if self.is_raw() || candidate.is_raw() {
            return Ok(true);
        }
        for (target, argument) in self.type_arguments().zip(candidate.type_arguments()) {
            if !argument_accepts(target, argument, solver)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn argument_accepts(target: &ResolvedType, candidate: &ResolvedType, solver: &dyn TypeSolver) -> Result<bool> {
    if target == candidate {
        return Ok(true);
    }
    match target {
        ResolvedType::Wildcard(Wildcard::Unbounded) => Ok(true),
        ResolvedType::Wildcard(Wildcard::Extends(bound)) => match candidate {
            ResolvedType::Wildcard(Wildcard::Extends(other)) => bound.is_assignable_by(other, solver),
            ResolvedType::Wildcard(_) => Ok(false),
            other => bound.is_assignable_by(other, solver),
        },
        ResolvedType::Wildcard(Wildcard::Super(bound)) => match candidate {
            ResolvedType::Wildcard(Wildcard::Super(other)) => other.is_assignable_by(bound, solver),
            ResolvedType::Wildcard(_) => Ok(false),
            other => other.is_assignable_by(bound, solver),
        },
        // A bare type variable stands for an argument still to be inferred.
        ResolvedType::TypeVariable(_) => Ok(true),
        _ => Ok(false),
    }
}
