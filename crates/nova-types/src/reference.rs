use std::hash::{Hash, Hasher};

use crate::decl::TypeDeclaration;
use crate::error::{ResolveError, Result};
use crate::solver::TypeSolver;
use crate::ty::ResolvedType;
use crate::type_params::{TypeParameter, TypeParametersMap};

/// A class or interface type: a declaration plus one type argument per declared parameter.
///
/// Raw uses bind every parameter to a type variable referencing itself, so the argument list
/// always has the declaration's arity.
#[derive(Debug, Clone)]
pub struct ReferenceType {
    declaration: TypeDeclaration,
    type_params: TypeParametersMap,
}

impl ReferenceType {
    /// `type_arguments` must be empty (raw use) or match the declaration's parameter count.
    pub fn new(declaration: TypeDeclaration, type_arguments: Vec<ResolvedType>) -> Result<Self> {
        let params = declaration.type_parameters()?;
        if type_arguments.is_empty() {
            return Ok(Self {
                declaration,
                type_params: TypeParametersMap::identity(params),
            });
        }
        if type_arguments.len() != params.len() {
            return Err(ResolveError::Malformed {
                subject: format!("type {}", declaration.qualified_name()),
                message: format!(
                    "expected {} type arguments, found {}",
                    params.len(),
                    type_arguments.len()
                ),
            });
        }
        Ok(Self {
            declaration,
            type_params: TypeParametersMap::from_pairs(params, type_arguments),
        })
    }

    pub fn raw(declaration: TypeDeclaration) -> Result<Self> {
        Self::new(declaration, Vec::new())
    }

    pub(crate) fn from_parts(declaration: TypeDeclaration, type_params: TypeParametersMap) -> Self {
        Self {
            declaration,
            type_params,
        }
    }

    pub fn declaration(&self) -> &TypeDeclaration {
        &self.declaration
    }

    pub fn qualified_name(&self) -> &str {
        self.declaration.qualified_name()
    }

    pub fn type_parameters_map(&self) -> &TypeParametersMap {
        &self.type_params
    }

    pub fn type_arguments(&self) -> impl ExactSizeIterator<Item = &ResolvedType> + '_ {
        self.type_params.values()
    }

    pub fn type_argument(&self, index: usize) -> Option<&ResolvedType> {
        self.type_params.values().nth(index)
    }

    /// Every parameter is bound to a type variable of this very declaration.
    pub fn is_raw(&self) -> bool {
        !self.type_params.is_empty()
            && self.type_params.iter().all(|(param, value)| {
                matches!(value, ResolvedType::TypeVariable(var) if var == param)
            })
    }

    /// Same declaration, with the bindings of `map` replacing the existing ones. Parameters not
    /// declared on this type are ignored.
    pub fn derive_type_parameters(&self, map: &TypeParametersMap) -> ReferenceType {
        let mut type_params = self.type_params.clone();
        for (param, value) in map.iter() {
            if type_params.contains(param) {
                type_params.set_value(param, value.clone());
            }
        }
        Self::from_parts(self.declaration.clone(), type_params)
    }

    pub fn describe(&self) -> String {
        let mut out = self.qualified_name().to_string();
        if !self.type_params.is_empty() {
            let args: Vec<String> = self.type_params.values().map(ResolvedType::describe).collect();
            out.push('<');
            out.push_str(&args.join(", "));
            out.push('>');
        }
        out
    }

    pub(crate) fn map_type_arguments(
        &self,
        f: &dyn Fn(&TypeParameter) -> Option<ResolvedType>,
    ) -> Option<ReferenceType> {
        let mut changed = false;
        let mut entries = Vec::with_capacity(self.type_params.len());
        for (param, value) in self.type_params.iter() {
            let mapped = value.map_type_variables(f);
            if let std::borrow::Cow::Owned(_) = mapped {
                changed = true;
            }
            entries.push((param.clone(), mapped.into_owned()));
        }
        changed.then(|| {
            let (params, values): (Vec<_>, Vec<_>) = entries.into_iter().unzip();
            Self::from_parts(
                self.declaration.clone(),
                TypeParametersMap::from_pairs(params, values),
            )
        })
    }

    /// Direct supertypes with this type's arguments substituted in.
    pub fn ancestors(
        &self,
        solver: &dyn TypeSolver,
        accept_incomplete: bool,
    ) -> Result<Vec<ReferenceType>> {
        Ok(self
            .declaration
            .ancestors(solver, accept_incomplete)?
            .into_iter()
            .map(|ancestor| self.substitute_into(ancestor))
            .collect())
    }

    fn substitute_into(&self, ancestor: ReferenceType) -> ReferenceType {
        match ancestor.map_type_arguments(&|param| self.type_params.value(param).cloned()) {
            Some(substituted) => substituted,
            None => ancestor,
        }
    }

    /// Bindings of this type and of every ancestor, e.g. `ArrayList<String>` binds
    /// `java.util.Collection.E` to `String`.
    pub(crate) fn all_type_parameters(&self, solver: &dyn TypeSolver) -> Result<TypeParametersMap> {
        let mut map = self.type_params.clone();
        for ancestor in self.all_ancestors(solver, true)? {
            map.extend_missing(ancestor.type_parameters_map());
        }
        Ok(map)
    }

    /// Value of `param` on this type or any of its ancestors.
    pub fn type_param_value(
        &self,
        param: &TypeParameter,
        solver: &dyn TypeSolver,
    ) -> Result<Option<ResolvedType>> {
        if let Some(value) = self.type_params.value(param) {
            return Ok(Some(value.clone()));
        }
        Ok(self.all_type_parameters(solver)?.value(param).cloned())
    }

    /// Declared type of field `name` as seen through this type, `None` when absent.
    pub fn field_type(&self, name: &str, solver: &dyn TypeSolver) -> Result<Option<ResolvedType>> {
        let Some(field) = self
            .declaration
            .all_fields(solver)?
            .into_iter()
            .find(|field| field.name() == name)
        else {
            return Ok(None);
        };
        let declared = field.ty(solver)?;
        let bindings = self.all_type_parameters(solver)?;
        Ok(Some(declared.substitute(&bindings).into_owned()))
    }
}

impl PartialEq for ReferenceType {
    fn eq(&self, other: &Self) -> bool {
        self.declaration == other.declaration && self.type_params == other.type_params
    }
}

impl Eq for ReferenceType {}

impl Hash for ReferenceType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.declaration.hash(state);
        self.type_params.hash(state);
    }
}
