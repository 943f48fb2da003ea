//! Team entity and related types

use std::str::FromStr;

use super::validation::{validate_count, validate_team_name, TeamValidationError};

/// Team identifier - assigned by the store, never supplied by callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TeamId(u64);

impl TeamId {
    /// The first identifier handed out by an empty store
    pub const FIRST: TeamId = TeamId(1);

    /// Get the numeric value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// The identifier that follows this one
    pub fn next(&self) -> TeamId {
        TeamId(self.0 + 1)
    }
}

impl From<u64> for TeamId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for TeamId {
    type Err = TeamValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| TeamValidationError::InvalidId(s.to_string()))
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Conference grouping of a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    Pacific,
    Central,
    Atlantic,
}

impl Division {
    pub const ALL: [Division; 3] = [Self::Pacific, Self::Central, Self::Atlantic];

    /// External textual name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pacific => "pacific",
            Self::Central => "central",
            Self::Atlantic => "atlantic",
        }
    }
}

impl FromStr for Division {
    type Err = TeamValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|division| division.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TeamValidationError::UnknownDivision(s.to_string()))
    }
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated field values for a team that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDraft {
    name: String,
    wins: u32,
    losses: u32,
    division: Division,
}

impl TeamDraft {
    /// Validate raw values into a draft
    pub fn new(
        name: impl Into<String>,
        wins: i64,
        losses: i64,
        division: &str,
    ) -> Result<Self, TeamValidationError> {
        let name = name.into();
        validate_team_name(&name)?;

        Ok(Self {
            name,
            wins: validate_count("Wins", wins)?,
            losses: validate_count("Losses", losses)?,
            division: division.parse::<Division>()?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn division(&self) -> Division {
        self.division
    }
}

/// Validated partial replacement of a team's fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamPatch {
    name: Option<String>,
    wins: Option<u32>,
    losses: Option<u32>,
    division: Option<Division>,
}

impl TeamPatch {
    /// Validate the supplied raw values; absent values are left untouched
    pub fn new(
        name: Option<String>,
        wins: Option<i64>,
        losses: Option<i64>,
        division: Option<&str>,
    ) -> Result<Self, TeamValidationError> {
        if let Some(ref name) = name {
            validate_team_name(name)?;
        }

        Ok(Self {
            name,
            wins: wins.map(|w| validate_count("Wins", w)).transpose()?,
            losses: losses.map(|l| validate_count("Losses", l)).transpose()?,
            division: division.map(str::parse::<Division>).transpose()?,
        })
    }

    /// Check whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.wins.is_none() && self.losses.is_none() && self.division.is_none()
    }
}

/// Team entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Store-assigned identifier
    id: TeamId,
    /// Display name
    name: String,
    wins: u32,
    losses: u32,
    division: Division,
}

impl Team {
    /// Materialize a draft under the identifier the store assigned to it
    pub fn from_draft(id: TeamId, draft: TeamDraft) -> Self {
        Self {
            id,
            name: draft.name,
            wins: draft.wins,
            losses: draft.losses,
            division: draft.division,
        }
    }

    // Getters

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn division(&self) -> Division {
        self.division
    }

    // Mutators

    /// Replace the fields present in the patch; the id never changes
    pub fn apply(&mut self, patch: TeamPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }

        if let Some(wins) = patch.wins {
            self.wins = wins;
        }

        if let Some(losses) = patch.losses {
            self.losses = losses;
        }

        if let Some(division) = patch.division {
            self.division = division;
        }
    }
}
