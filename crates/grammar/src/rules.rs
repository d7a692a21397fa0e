// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Grammar rule identifiers
//!
//! Closed set of rule names for the dialect grammar. The ten name-slot
//! rules at the bottom are the ones a completion layer typically marks as
//! preferred: five creation slots (the name being defined) and five
//! reference slots (a name appearing in an expression or clause).

use serde::{Deserialize, Serialize};

/// Identifies a grammar rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    // Entry
    Program,
    SemiOpt,
    Statement,

    // Query
    SelectStatement,
    WithOpt,
    CteList,
    CteTail,
    Cte,
    QueryExpr,
    UnionTail,
    UnionQuantOpt,
    SelectCore,
    DistinctOpt,
    SelectList,
    SelectListTail,
    SelectItem,
    AliasOpt,
    FromPartOpt,
    FromClause,
    FromTail,
    TableRef,
    JoinClause,
    JoinType,
    OuterOpt,
    JoinConditionOpt,
    WhereOpt,
    WhereClause,
    GroupByOpt,
    HavingOpt,
    OrderByOpt,
    SortItem,
    SortListTail,
    SortDirOpt,
    NullsOrderOpt,
    LimitOpt,
    OffsetOpt,

    // Expressions
    Expression,
    OrTail,
    AndExpr,
    AndTail,
    NotExpr,
    Comparison,
    CompTail,
    CompOp,
    NotOpt,
    InBody,
    Additive,
    AddTail,
    Multiplicative,
    MulTail,
    Unary,
    Primary,
    Literal,
    FunctionCall,
    CallArgs,
    ExpressionList,
    ExpressionListTail,
    CaseExpr,
    WhenList,
    WhenListTail,
    WhenClause,
    ElseOpt,

    // Names
    QualifiedName,
    QualifiedTail,
    Name,

    // CREATE
    CreateStatement,
    IfNotExistsOpt,
    CreateTableBody,
    ColumnDefList,
    ColumnDefTail,
    ColumnDefinition,
    ColCommentOpt,
    DataType,
    DecParamsOpt,
    LenOpt,
    TableOptions,
    CommentOpt,
    PartitionedByOpt,
    StoredAsOpt,
    LocationOpt,
    AsSelectOpt,
    ViewBody,
    ViewColumnsOpt,
    ViewColumnList,
    ViewColumnTail,
    ViewColumn,
    DatabaseBody,
    FunctionSig,
    TypeListOpt,
    TypeListTail,
    FunctionProps,
    SymbolOpt,

    // DROP
    DropStatement,
    IfExistsOpt,

    // INSERT / UPDATE / DELETE
    InsertStatement,
    TableKwOpt,
    InsertColumnsOpt,
    ColumnList,
    ColumnListTail,
    PartitionOpt,
    InsertSource,
    ValueRows,
    ValueRowsTail,
    UpdateStatement,
    AssignmentList,
    AssignmentTail,
    Assignment,
    DeleteStatement,

    // Utility statements
    UseStatement,
    ShowStatement,
    InDbOpt,
    DescribeStatement,
    RefreshStatement,
    InvalidateStatement,
    TableNamePathOpt,
    ComputeStatement,

    // Name slots: creation contexts
    TableNameCreate,
    ViewNameCreate,
    DatabaseNameCreate,
    FunctionNameCreate,
    ColumnNameCreate,

    // Name slots: reference contexts
    TableNamePath,
    ViewNamePath,
    DatabaseNamePath,
    FunctionNamePath,
    ColumnNamePath,
}
