// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect grammar tables
//!
//! The Impala-flavored SQL grammar expressed as data: each rule maps to a
//! list of alternatives, each alternative a sequence of terminal or rule
//! symbols. The tables are right-recursive throughout (no left recursion),
//! which keeps the reachability walk and the tolerant matcher loop-free;
//! optional and repeated constructs are expressed through epsilon
//! alternatives (an empty symbol sequence).
//!
//! The grammar is deliberately permissive: it accepts some statements a
//! database would reject (for example an incomplete `CREATE TABLE t`),
//! because the text under a caret is usually still being typed.

use rustc_hash::FxHashMap;

use crate::rules::RuleId;
use crate::token::TokenKind;

/// A grammar symbol: terminal token kind or rule reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sym {
    T(TokenKind),
    R(RuleId),
}

/// Rule table for one dialect.
#[derive(Debug, Clone)]
pub struct Grammar {
    start: RuleId,
    rules: FxHashMap<RuleId, Vec<Vec<Sym>>>,
}

impl Grammar {
    pub fn start_rule(&self) -> RuleId {
        self.start
    }

    pub fn alternatives(&self, rule: RuleId) -> Option<&[Vec<Sym>]> {
        self.rules.get(&rule).map(Vec::as_slice)
    }

    pub fn contains(&self, rule: RuleId) -> bool {
        self.rules.contains_key(&rule)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// The Impala-flavored dialect.
    pub fn impala() -> Self {
        use RuleId::*;
        use TokenKind::*;

        fn t(kind: TokenKind) -> Sym {
            Sym::T(kind)
        }
        fn r(rule: RuleId) -> Sym {
            Sym::R(rule)
        }

        let mut rules: FxHashMap<RuleId, Vec<Vec<Sym>>> = FxHashMap::default();
        let mut add = |rule: RuleId, alts: Vec<Vec<Sym>>| {
            rules.insert(rule, alts);
        };

        // Entry
        add(Program, vec![vec![r(Statement), r(SemiOpt)], vec![r(SemiOpt)]]);
        add(SemiOpt, vec![vec![t(Semicolon)], vec![]]);
        add(
            Statement,
            vec![
                vec![r(SelectStatement)],
                vec![r(CreateStatement)],
                vec![r(DropStatement)],
                vec![r(InsertStatement)],
                vec![r(UpdateStatement)],
                vec![r(DeleteStatement)],
                vec![r(UseStatement)],
                vec![r(ShowStatement)],
                vec![r(DescribeStatement)],
                vec![r(RefreshStatement)],
                vec![r(InvalidateStatement)],
                vec![r(ComputeStatement)],
            ],
        );

        // Query
        add(SelectStatement, vec![vec![r(WithOpt), r(QueryExpr)]]);
        add(WithOpt, vec![vec![t(KwWith), r(CteList)], vec![]]);
        add(CteList, vec![vec![r(Cte), r(CteTail)]]);
        add(CteTail, vec![vec![t(Comma), r(Cte), r(CteTail)], vec![]]);
        add(
            Cte,
            vec![vec![
                r(Name),
                t(KwAs),
                t(LParen),
                r(SelectStatement),
                t(RParen),
            ]],
        );
        add(QueryExpr, vec![vec![r(SelectCore), r(UnionTail)]]);
        add(
            UnionTail,
            vec![
                vec![t(KwUnion), r(UnionQuantOpt), r(SelectCore), r(UnionTail)],
                vec![],
            ],
        );
        add(
            UnionQuantOpt,
            vec![vec![t(KwAll)], vec![t(KwDistinct)], vec![]],
        );
        add(
            SelectCore,
            vec![vec![
                t(KwSelect),
                r(DistinctOpt),
                r(SelectList),
                r(FromPartOpt),
            ]],
        );
        add(
            DistinctOpt,
            vec![vec![t(KwDistinct)], vec![t(KwAll)], vec![]],
        );
        add(SelectList, vec![vec![r(SelectItem), r(SelectListTail)]]);
        add(
            SelectListTail,
            vec![vec![t(Comma), r(SelectItem), r(SelectListTail)], vec![]],
        );
        add(
            SelectItem,
            vec![vec![t(Star)], vec![r(Expression), r(AliasOpt)]],
        );
        add(
            AliasOpt,
            vec![vec![t(KwAs), r(Name)], vec![r(Name)], vec![]],
        );
        add(
            FromPartOpt,
            vec![
                vec![
                    r(FromClause),
                    r(WhereOpt),
                    r(GroupByOpt),
                    r(HavingOpt),
                    r(OrderByOpt),
                    r(LimitOpt),
                ],
                vec![],
            ],
        );
        add(FromClause, vec![vec![t(KwFrom), r(TableRef), r(FromTail)]]);
        add(
            FromTail,
            vec![
                vec![t(Comma), r(TableRef), r(FromTail)],
                vec![r(JoinClause), r(FromTail)],
                vec![],
            ],
        );
        add(
            TableRef,
            vec![
                vec![r(TableNamePath), r(AliasOpt)],
                vec![t(LParen), r(SelectStatement), t(RParen), r(AliasOpt)],
            ],
        );
        add(
            JoinClause,
            vec![vec![
                r(JoinType),
                t(KwJoin),
                r(TableRef),
                r(JoinConditionOpt),
            ]],
        );
        add(
            JoinType,
            vec![
                vec![t(KwInner)],
                vec![t(KwLeft), r(OuterOpt)],
                vec![t(KwRight), r(OuterOpt)],
                vec![t(KwFull), r(OuterOpt)],
                vec![t(KwCross)],
                vec![],
            ],
        );
        add(OuterOpt, vec![vec![t(KwOuter)], vec![]]);
        add(
            JoinConditionOpt,
            vec![
                vec![t(KwOn), r(Expression)],
                vec![t(KwUsing), t(LParen), r(ColumnList), t(RParen)],
                vec![],
            ],
        );
        add(WhereOpt, vec![vec![r(WhereClause)], vec![]]);
        add(WhereClause, vec![vec![t(KwWhere), r(Expression)]]);
        add(
            GroupByOpt,
            vec![vec![t(KwGroup), t(KwBy), r(ExpressionList)], vec![]],
        );
        add(HavingOpt, vec![vec![t(KwHaving), r(Expression)], vec![]]);
        add(
            OrderByOpt,
            vec![
                vec![t(KwOrder), t(KwBy), r(SortItem), r(SortListTail)],
                vec![],
            ],
        );
        add(
            SortListTail,
            vec![vec![t(Comma), r(SortItem), r(SortListTail)], vec![]],
        );
        add(
            SortItem,
            vec![vec![r(Expression), r(SortDirOpt), r(NullsOrderOpt)]],
        );
        add(SortDirOpt, vec![vec![t(KwAsc)], vec![t(KwDesc)], vec![]]);
        add(
            NullsOrderOpt,
            vec![
                vec![t(KwNulls), t(KwFirst)],
                vec![t(KwNulls), t(KwLast)],
                vec![],
            ],
        );
        add(
            LimitOpt,
            vec![vec![t(KwLimit), r(Expression), r(OffsetOpt)], vec![]],
        );
        add(OffsetOpt, vec![vec![t(KwOffset), r(Expression)], vec![]]);

        // Expressions
        add(Expression, vec![vec![r(AndExpr), r(OrTail)]]);
        add(OrTail, vec![vec![t(KwOr), r(AndExpr), r(OrTail)], vec![]]);
        add(AndExpr, vec![vec![r(NotExpr), r(AndTail)]]);
        add(AndTail, vec![vec![t(KwAnd), r(NotExpr), r(AndTail)], vec![]]);
        add(
            NotExpr,
            vec![vec![t(KwNot), r(NotExpr)], vec![r(Comparison)]],
        );
        add(Comparison, vec![vec![r(Additive), r(CompTail)]]);
        add(
            CompTail,
            vec![
                vec![r(CompOp), r(Additive)],
                vec![t(KwIs), r(NotOpt), t(KwNull)],
                vec![r(NotOpt), t(KwIn), t(LParen), r(InBody), t(RParen)],
                vec![r(NotOpt), t(KwLike), r(Additive)],
                vec![r(NotOpt), t(KwBetween), r(Additive), t(KwAnd), r(Additive)],
                vec![],
            ],
        );
        add(
            CompOp,
            vec![
                vec![t(Eq)],
                vec![t(NotEq)],
                vec![t(Lt)],
                vec![t(LtEq)],
                vec![t(Gt)],
                vec![t(GtEq)],
            ],
        );
        add(NotOpt, vec![vec![t(KwNot)], vec![]]);
        add(InBody, vec![vec![r(SelectStatement)], vec![r(ExpressionList)]]);
        add(Additive, vec![vec![r(Multiplicative), r(AddTail)]]);
        add(
            AddTail,
            vec![
                vec![t(Plus), r(Multiplicative), r(AddTail)],
                vec![t(Minus), r(Multiplicative), r(AddTail)],
                vec![],
            ],
        );
        add(Multiplicative, vec![vec![r(Unary), r(MulTail)]]);
        add(
            MulTail,
            vec![
                vec![t(Star), r(Unary), r(MulTail)],
                vec![t(Slash), r(Unary), r(MulTail)],
                vec![t(Percent), r(Unary), r(MulTail)],
                vec![],
            ],
        );
        add(Unary, vec![vec![t(Minus), r(Unary)], vec![r(Primary)]]);
        add(
            Primary,
            vec![
                vec![r(Literal)],
                vec![r(CaseExpr)],
                vec![r(FunctionCall)],
                vec![r(ColumnNamePath)],
                vec![t(LParen), r(Expression), t(RParen)],
                vec![t(LParen), r(SelectStatement), t(RParen)],
                vec![t(KwExists), t(LParen), r(SelectStatement), t(RParen)],
            ],
        );
        add(
            Literal,
            vec![
                vec![t(StringLiteral)],
                vec![t(IntegerLiteral)],
                vec![t(DecimalLiteral)],
                vec![t(KwTrue)],
                vec![t(KwFalse)],
                vec![t(KwNull)],
            ],
        );
        add(
            FunctionCall,
            vec![vec![
                r(FunctionNamePath),
                t(LParen),
                r(CallArgs),
                t(RParen),
            ]],
        );
        add(
            CallArgs,
            vec![
                vec![t(Star)],
                vec![t(KwDistinct), r(ExpressionList)],
                vec![r(ExpressionList)],
                vec![],
            ],
        );
        add(
            ExpressionList,
            vec![vec![r(Expression), r(ExpressionListTail)]],
        );
        add(
            ExpressionListTail,
            vec![vec![t(Comma), r(Expression), r(ExpressionListTail)], vec![]],
        );
        add(
            CaseExpr,
            vec![
                vec![t(KwCase), r(WhenList), r(ElseOpt), t(KwEnd)],
                vec![t(KwCase), r(Expression), r(WhenList), r(ElseOpt), t(KwEnd)],
            ],
        );
        add(WhenList, vec![vec![r(WhenClause), r(WhenListTail)]]);
        add(
            WhenListTail,
            vec![vec![r(WhenClause), r(WhenListTail)], vec![]],
        );
        add(
            WhenClause,
            vec![vec![t(KwWhen), r(Expression), t(KwThen), r(Expression)]],
        );
        add(ElseOpt, vec![vec![t(KwElse), r(Expression)], vec![]]);

        // Names
        add(QualifiedName, vec![vec![r(Name), r(QualifiedTail)]]);
        add(
            QualifiedTail,
            vec![vec![t(Dot), r(Name), r(QualifiedTail)], vec![]],
        );
        add(Name, vec![vec![t(Ident)], vec![t(QuotedIdent)]]);

        // CREATE
        add(
            CreateStatement,
            vec![
                vec![
                    t(KwCreate),
                    t(KwTable),
                    r(IfNotExistsOpt),
                    r(TableNameCreate),
                    r(CreateTableBody),
                ],
                vec![
                    t(KwCreate),
                    t(KwExternal),
                    t(KwTable),
                    r(IfNotExistsOpt),
                    r(TableNameCreate),
                    r(CreateTableBody),
                ],
                vec![
                    t(KwCreate),
                    t(KwView),
                    r(IfNotExistsOpt),
                    r(ViewNameCreate),
                    r(ViewBody),
                ],
                vec![
                    t(KwCreate),
                    t(KwDatabase),
                    r(IfNotExistsOpt),
                    r(DatabaseNameCreate),
                    r(DatabaseBody),
                ],
                vec![
                    t(KwCreate),
                    t(KwSchema),
                    r(IfNotExistsOpt),
                    r(DatabaseNameCreate),
                    r(DatabaseBody),
                ],
                vec![
                    t(KwCreate),
                    t(KwFunction),
                    r(IfNotExistsOpt),
                    r(FunctionNameCreate),
                    r(FunctionSig),
                ],
                vec![
                    t(KwCreate),
                    t(KwAggregate),
                    t(KwFunction),
                    r(IfNotExistsOpt),
                    r(FunctionNameCreate),
                    r(FunctionSig),
                ],
            ],
        );
        add(
            IfNotExistsOpt,
            vec![vec![t(KwIf), t(KwNot), t(KwExists)], vec![]],
        );
        add(
            CreateTableBody,
            vec![
                vec![t(LParen), r(ColumnDefList), t(RParen), r(TableOptions)],
                vec![t(KwAs), r(SelectStatement)],
                vec![t(KwLike), r(TableNamePath)],
                vec![],
            ],
        );
        add(
            ColumnDefList,
            vec![vec![r(ColumnDefinition), r(ColumnDefTail)]],
        );
        add(
            ColumnDefTail,
            vec![vec![t(Comma), r(ColumnDefinition), r(ColumnDefTail)], vec![]],
        );
        add(
            ColumnDefinition,
            vec![vec![r(ColumnNameCreate), r(DataType), r(ColCommentOpt)]],
        );
        add(
            ColCommentOpt,
            vec![vec![t(KwComment), t(StringLiteral)], vec![]],
        );
        add(
            DataType,
            vec![
                vec![t(KwInt)],
                vec![t(KwInteger)],
                vec![t(KwBigint)],
                vec![t(KwSmallint)],
                vec![t(KwTinyint)],
                vec![t(KwBoolean)],
                vec![t(KwString)],
                vec![t(KwTimestamp)],
                vec![t(KwDate)],
                vec![t(KwDouble)],
                vec![t(KwFloat)],
                vec![t(KwDecimal), r(DecParamsOpt)],
                vec![t(KwChar), r(LenOpt)],
                vec![t(KwVarchar), r(LenOpt)],
            ],
        );
        add(
            DecParamsOpt,
            vec![
                vec![
                    t(LParen),
                    t(IntegerLiteral),
                    t(Comma),
                    t(IntegerLiteral),
                    t(RParen),
                ],
                vec![],
            ],
        );
        add(
            LenOpt,
            vec![vec![t(LParen), t(IntegerLiteral), t(RParen)], vec![]],
        );
        add(
            TableOptions,
            vec![vec![
                r(CommentOpt),
                r(PartitionedByOpt),
                r(StoredAsOpt),
                r(LocationOpt),
                r(AsSelectOpt),
            ]],
        );
        add(
            CommentOpt,
            vec![vec![t(KwComment), t(StringLiteral)], vec![]],
        );
        add(
            PartitionedByOpt,
            vec![
                vec![
                    t(KwPartitioned),
                    t(KwBy),
                    t(LParen),
                    r(ColumnDefList),
                    t(RParen),
                ],
                vec![],
            ],
        );
        add(StoredAsOpt, vec![vec![t(KwStored), t(KwAs), r(Name)], vec![]]);
        add(
            LocationOpt,
            vec![vec![t(KwLocation), t(StringLiteral)], vec![]],
        );
        add(AsSelectOpt, vec![vec![t(KwAs), r(SelectStatement)], vec![]]);
        add(
            ViewBody,
            vec![
                vec![r(ViewColumnsOpt), t(KwAs), r(SelectStatement)],
                vec![],
            ],
        );
        add(
            ViewColumnsOpt,
            vec![vec![t(LParen), r(ViewColumnList), t(RParen)], vec![]],
        );
        add(ViewColumnList, vec![vec![r(ViewColumn), r(ViewColumnTail)]]);
        add(
            ViewColumnTail,
            vec![vec![t(Comma), r(ViewColumn), r(ViewColumnTail)], vec![]],
        );
        add(
            ViewColumn,
            vec![vec![r(ColumnNameCreate), r(ColCommentOpt)]],
        );
        add(DatabaseBody, vec![vec![r(CommentOpt), r(LocationOpt)]]);
        add(
            FunctionSig,
            vec![
                vec![
                    t(LParen),
                    r(TypeListOpt),
                    t(RParen),
                    t(KwReturns),
                    r(DataType),
                    r(FunctionProps),
                ],
                vec![],
            ],
        );
        add(TypeListOpt, vec![vec![r(DataType), r(TypeListTail)], vec![]]);
        add(
            TypeListTail,
            vec![vec![t(Comma), r(DataType), r(TypeListTail)], vec![]],
        );
        add(FunctionProps, vec![vec![r(LocationOpt), r(SymbolOpt)]]);
        add(
            SymbolOpt,
            vec![vec![t(KwSymbol), t(Eq), t(StringLiteral)], vec![]],
        );

        // DROP
        add(
            DropStatement,
            vec![
                vec![t(KwDrop), t(KwTable), r(IfExistsOpt), r(TableNamePath)],
                vec![t(KwDrop), t(KwView), r(IfExistsOpt), r(ViewNamePath)],
                vec![
                    t(KwDrop),
                    t(KwDatabase),
                    r(IfExistsOpt),
                    r(DatabaseNamePath),
                ],
                vec![t(KwDrop), t(KwSchema), r(IfExistsOpt), r(DatabaseNamePath)],
                vec![
                    t(KwDrop),
                    t(KwFunction),
                    r(IfExistsOpt),
                    r(FunctionNamePath),
                ],
            ],
        );
        add(IfExistsOpt, vec![vec![t(KwIf), t(KwExists)], vec![]]);

        // INSERT / UPDATE / DELETE
        add(
            InsertStatement,
            vec![
                vec![
                    t(KwInsert),
                    t(KwInto),
                    r(TableKwOpt),
                    r(TableNamePath),
                    r(InsertColumnsOpt),
                    r(PartitionOpt),
                    r(InsertSource),
                ],
                vec![
                    t(KwInsert),
                    t(KwOverwrite),
                    r(TableKwOpt),
                    r(TableNamePath),
                    r(InsertColumnsOpt),
                    r(PartitionOpt),
                    r(InsertSource),
                ],
            ],
        );
        add(TableKwOpt, vec![vec![t(KwTable)], vec![]]);
        add(
            InsertColumnsOpt,
            vec![vec![t(LParen), r(ColumnList), t(RParen)], vec![]],
        );
        add(ColumnList, vec![vec![r(ColumnNamePath), r(ColumnListTail)]]);
        add(
            ColumnListTail,
            vec![vec![t(Comma), r(ColumnNamePath), r(ColumnListTail)], vec![]],
        );
        add(
            PartitionOpt,
            vec![
                vec![t(KwPartition), t(LParen), r(ExpressionList), t(RParen)],
                vec![],
            ],
        );
        add(
            InsertSource,
            vec![vec![t(KwValues), r(ValueRows)], vec![r(SelectStatement)]],
        );
        add(
            ValueRows,
            vec![vec![
                t(LParen),
                r(ExpressionList),
                t(RParen),
                r(ValueRowsTail),
            ]],
        );
        add(
            ValueRowsTail,
            vec![
                vec![
                    t(Comma),
                    t(LParen),
                    r(ExpressionList),
                    t(RParen),
                    r(ValueRowsTail),
                ],
                vec![],
            ],
        );
        add(
            UpdateStatement,
            vec![vec![
                t(KwUpdate),
                r(TableNamePath),
                t(KwSet),
                r(AssignmentList),
                r(WhereOpt),
            ]],
        );
        add(AssignmentList, vec![vec![r(Assignment), r(AssignmentTail)]]);
        add(
            AssignmentTail,
            vec![vec![t(Comma), r(Assignment), r(AssignmentTail)], vec![]],
        );
        add(
            Assignment,
            vec![vec![r(ColumnNamePath), t(Eq), r(Expression)]],
        );
        add(
            DeleteStatement,
            vec![vec![
                t(KwDelete),
                t(KwFrom),
                r(TableNamePath),
                r(WhereOpt),
            ]],
        );

        // Utility statements
        add(UseStatement, vec![vec![t(KwUse), r(DatabaseNamePath)]]);
        add(
            ShowStatement,
            vec![
                vec![t(KwShow), t(KwTables), r(InDbOpt)],
                vec![t(KwShow), t(KwDatabases)],
                vec![t(KwShow), t(KwFunctions), r(InDbOpt)],
            ],
        );
        add(
            InDbOpt,
            vec![
                vec![t(KwIn), r(DatabaseNamePath)],
                vec![t(KwFrom), r(DatabaseNamePath)],
                vec![],
            ],
        );
        add(
            DescribeStatement,
            vec![
                vec![t(KwDescribe), t(KwFormatted), r(TableNamePath)],
                vec![t(KwDescribe), t(KwDatabase), r(DatabaseNamePath)],
                vec![t(KwDescribe), r(TableNamePath)],
            ],
        );
        add(RefreshStatement, vec![vec![t(KwRefresh), r(TableNamePath)]]);
        add(
            InvalidateStatement,
            vec![vec![t(KwInvalidate), t(KwMetadata), r(TableNamePathOpt)]],
        );
        add(TableNamePathOpt, vec![vec![r(TableNamePath)], vec![]]);
        add(
            ComputeStatement,
            vec![vec![t(KwCompute), t(KwStats), r(TableNamePath)]],
        );

        // Name slots
        add(TableNameCreate, vec![vec![r(QualifiedName)]]);
        add(ViewNameCreate, vec![vec![r(QualifiedName)]]);
        add(DatabaseNameCreate, vec![vec![r(Name)]]);
        add(FunctionNameCreate, vec![vec![r(QualifiedName)]]);
        add(ColumnNameCreate, vec![vec![r(Name)]]);
        add(TableNamePath, vec![vec![r(QualifiedName)]]);
        add(ViewNamePath, vec![vec![r(QualifiedName)]]);
        add(DatabaseNamePath, vec![vec![r(Name)]]);
        add(FunctionNamePath, vec![vec![r(QualifiedName)]]);
        add(ColumnNamePath, vec![vec![r(QualifiedName)]]);

        Self {
            start: Program,
            rules,
        }
    }
}
