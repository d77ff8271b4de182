//! Command schemas and the token binding algorithm.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::{BindError, Bindings, ParameterKind, ParameterSpec, SchemaError, Value};

/// What happens to positional parameters left without a token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnboundPositional {
    /// Bind the parameter's default value.
    #[default]
    BindDefault,
    /// Leave the parameter out of the bindings.
    Omit,
}

/// An ordered set of parameter specifications describing one command.
///
/// Parameter order matters twice: required parameters are checked in
/// schema order, so the first missing one is reported, and positional
/// parameters consume leftover tokens in schema order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    parameters: Vec<ParameterSpec>,
    unbound_positional: UnboundPositional,
}

impl Schema {
    /// Creates a schema from parameter specifications.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateParameter`] when two parameters share
    /// a canonical name.
    pub fn new(parameters: impl IntoIterator<Item = ParameterSpec>) -> Result<Self, SchemaError> {
        let parameter_list: Vec<ParameterSpec> = parameters.into_iter().collect();
        let mut names = HashSet::new();
        for parameter in &parameter_list {
            if !names.insert(parameter.name()) {
                return Err(SchemaError::DuplicateParameter(parameter.name().to_owned()));
            }
        }

        Ok(Self {
            parameters: parameter_list,
            unbound_positional: UnboundPositional::default(),
        })
    }

    /// Sets the policy for positional parameters that receive no token.
    #[must_use]
    pub const fn with_unbound_positional(mut self, policy: UnboundPositional) -> Self {
        self.unbound_positional = policy;
        self
    }

    /// Returns every parameter in schema order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Returns the configured unbound-positional policy.
    #[must_use]
    pub const fn unbound_positional(&self) -> UnboundPositional {
        self.unbound_positional
    }

    /// Returns the required parameters in schema order.
    pub fn required(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.of_kind(ParameterKind::Required)
    }

    /// Returns the optional parameters in schema order.
    pub fn optional(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.of_kind(ParameterKind::Optional)
    }

    /// Returns the positional parameters in schema order.
    pub fn positional(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.of_kind(ParameterKind::Positional)
    }

    /// Returns the flags in schema order.
    pub fn flags(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.of_kind(ParameterKind::Flag)
    }

    /// Returns the canonical name of every parameter in schema order.
    #[must_use]
    pub fn canonical_names(&self) -> Vec<&str> {
        self.parameters.iter().map(ParameterSpec::name).collect()
    }

    /// Returns the canonical names of the required parameters.
    #[must_use]
    pub fn required_names(&self) -> Vec<&str> {
        self.required().map(ParameterSpec::name).collect()
    }

    /// Returns the canonical names of the optional parameters.
    #[must_use]
    pub fn optional_names(&self) -> Vec<&str> {
        self.optional().map(ParameterSpec::name).collect()
    }

    /// Returns the canonical names of the positional parameters.
    #[must_use]
    pub fn positional_names(&self) -> Vec<&str> {
        self.positional().map(ParameterSpec::name).collect()
    }

    fn of_kind(&self, kind: ParameterKind) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters
            .iter()
            .filter(move |parameter| parameter.kind() == kind)
    }

    /// Binds a token list against this schema.
    ///
    /// Flags and keyword parameters are resolved first, in schema order,
    /// against the full token list. Each match consumes its alias token
    /// (and a keyword's value token). Positional parameters then take the
    /// remaining tokens in order.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::AmbiguousAlias`] when two aliases of one
    /// parameter are present, [`BindError::MissingRequiredParameter`] for
    /// the first required parameter without a value, and
    /// [`BindError::TypeMismatch`] when a value token does not convert to
    /// its declared type.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Bindings, BindError> {
        let original: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        let mut consumed = BTreeSet::new();
        let mut values = BTreeMap::new();
        let mut matched_any = false;

        for parameter in &self.parameters {
            let name = parameter.name().to_owned();
            match parameter.kind() {
                ParameterKind::Positional => {}
                ParameterKind::Flag => {
                    let value = match find_alias(parameter, &original)? {
                        Some(index) => {
                            consumed.insert(index);
                            matched_any = true;
                            Value::Bool(true)
                        }
                        None => parameter.default_value().clone(),
                    };
                    values.insert(name, value);
                }
                ParameterKind::Required | ParameterKind::Optional => {
                    let bound = bind_keyword(parameter, &original, &mut consumed)?;
                    matched_any |= bound.is_some();
                    values.insert(
                        name,
                        bound.unwrap_or_else(|| parameter.default_value().clone()),
                    );
                }
            }
        }

        let leftover: Vec<&str> = original
            .iter()
            .enumerate()
            .filter(|(index, _)| !consumed.contains(index))
            .map(|(_, token)| *token)
            .collect();

        for (index, parameter) in self.positional().enumerate() {
            match leftover.get(index) {
                Some(raw) => {
                    values.insert(parameter.name().to_owned(), parameter.coerce(raw)?);
                    matched_any = true;
                }
                None => {
                    if self.unbound_positional == UnboundPositional::BindDefault {
                        values.insert(
                            parameter.name().to_owned(),
                            parameter.default_value().clone(),
                        );
                    }
                }
            }
        }

        Ok(Bindings::new(values, !matched_any))
    }
}

/// Returns the index of the first token matching one of the parameter's
/// aliases, or `None` when none is present.
fn find_alias(parameter: &ParameterSpec, tokens: &[&str]) -> Result<Option<usize>, BindError> {
    let mut matches: Vec<&str> = Vec::new();
    for alias in parameter.aliases() {
        if tokens.contains(&alias.as_str()) && !matches.contains(&alias.as_str()) {
            matches.push(alias);
        }
    }

    if matches.len() > 1 {
        return Err(BindError::AmbiguousAlias {
            parameter: parameter.name().to_owned(),
            matches: matches.into_iter().map(str::to_owned).collect(),
        });
    }

    Ok(matches
        .first()
        .and_then(|alias| tokens.iter().position(|token| token == alias)))
}

/// Resolves a required or optional parameter.
///
/// Returns `Ok(None)` when the parameter should take its default, which
/// includes an alias found as the last token.
fn bind_keyword(
    parameter: &ParameterSpec,
    tokens: &[&str],
    consumed: &mut BTreeSet<usize>,
) -> Result<Option<Value>, BindError> {
    let missing = || BindError::MissingRequiredParameter {
        parameter: parameter.name().to_owned(),
    };
    let is_required = parameter.kind() == ParameterKind::Required;

    let Some(index) = find_alias(parameter, tokens)? else {
        return if is_required { Err(missing()) } else { Ok(None) };
    };

    // A trailing alias binds the default and stays available to positionals.
    let value_index = index + 1;
    let Some(raw) = tokens.get(value_index) else {
        return Ok(None);
    };

    let value = parameter.coerce(raw)?;
    consumed.insert(index);
    consumed.insert(value_index);
    Ok(Some(value))
}
