use std::fmt;

use crate::InputError;

/// One of the two variables of a bivariate function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Var {
    X1,
    X2,
}

impl Var {
    /// Both variables in declaration order.
    pub const ALL: [Var; 2] = [Var::X1, Var::X2];

    /// Returns the position of this variable (`0` or `1`).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Var::X1 => 0,
            Var::X2 => 1,
        }
    }

    /// Returns the other variable.
    #[must_use]
    pub fn other(self) -> Var {
        match self {
            Var::X1 => Var::X2,
            Var::X2 => Var::X1,
        }
    }
}

/// The names of the two declared variables.
///
/// Names must be distinct identifiers: an ASCII letter or underscore followed
/// by ASCII letters, digits, or underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variables {
    names: [String; 2],
}

impl Default for Variables {
    fn default() -> Self {
        Self {
            names: ["x1".to_owned(), "x2".to_owned()],
        }
    }
}

impl Variables {
    /// Declares two named variables.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidVariableName`] if either name is not an
    /// identifier, or [`InputError::DuplicateVariable`] if the names are equal.
    pub fn new(x1: impl Into<String>, x2: impl Into<String>) -> Result<Self, InputError> {
        let names = [x1.into(), x2.into()];
        for name in &names {
            if !is_identifier(name) {
                return Err(InputError::InvalidVariableName(name.clone()));
            }
        }
        if names[0] == names[1] {
            return Err(InputError::DuplicateVariable(names[0].clone()));
        }
        Ok(Self { names })
    }

    /// Returns the name of `var`.
    #[must_use]
    pub fn name(&self, var: Var) -> &str {
        &self.names[var.index()]
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Var> {
        Var::ALL.into_iter().find(|v| self.name(*v) == name)
    }
}

impl fmt::Display for Variables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.names[0], self.names[1])
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_are_x1_x2() {
        let vars = Variables::default();
        assert_eq!(vars.name(Var::X1), "x1");
        assert_eq!(vars.name(Var::X2), "x2");
    }

    #[test]
    fn lookup_finds_declared_names() {
        let vars = Variables::new("x", "y").unwrap();
        assert_eq!(vars.lookup("x"), Some(Var::X1));
        assert_eq!(vars.lookup("y"), Some(Var::X2));
        assert_eq!(vars.lookup("z"), None);
    }

    #[test]
    fn rejects_bad_names() {
        assert_eq!(
            Variables::new("x", "x"),
            Err(InputError::DuplicateVariable("x".into()))
        );
        assert_eq!(
            Variables::new("1x", "y"),
            Err(InputError::InvalidVariableName("1x".into()))
        );
        assert_eq!(
            Variables::new("x", ""),
            Err(InputError::InvalidVariableName(String::new()))
        );
    }
}
