// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Entity context types
//!
//! The semantic categories a completion suggestion can carry. Each kind of
//! nameable object appears twice: once for positions that *define* a new
//! name (the slot after `CREATE TABLE`, a column inside a `CREATE`) and
//! once for positions that *reference* an existing one (a table in `FROM`,
//! a column in `WHERE`). Editors treat the two very differently - a
//! creation slot gets no catalog lookup.

use serde::{Deserialize, Serialize};

/// Semantic category of a syntax suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityContextType {
    /// Reference to an existing table
    Table,
    /// Name slot of a table being created
    TableCreate,
    /// Reference to an existing view
    View,
    /// Name slot of a view being created
    ViewCreate,
    /// Reference to an existing database
    Database,
    /// Name slot of a database being created
    DatabaseCreate,
    /// Reference to an existing function
    Function,
    /// Name slot of a function being created
    FunctionCreate,
    /// Reference to an existing column
    Column,
    /// Name slot of a column being defined
    ColumnCreate,
}

impl EntityContextType {
    /// True for the name-being-defined variants.
    pub fn is_creation(self) -> bool {
        matches!(
            self,
            EntityContextType::TableCreate
                | EntityContextType::ViewCreate
                | EntityContextType::DatabaseCreate
                | EntityContextType::FunctionCreate
                | EntityContextType::ColumnCreate
        )
    }

    /// True for the name-being-referenced variants.
    pub fn is_reference(self) -> bool {
        !self.is_creation()
    }
}
