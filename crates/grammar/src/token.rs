// Copyright (c) 2025 CaretQL Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Token vocabulary
//!
//! The terminal alphabet of the dialect. Keyword tokens are matched
//! case-insensitively; trivia (whitespace and comments) is skipped by the
//! lexer and never reaches the token stream.
//!
//! Every fixed-spelling terminal carries a quoted display form (e.g.
//! `'SELECT'`) alongside its category. The completion layer uses the
//! category to tell reserved words apart from punctuation and identifier
//! placeholders, and strips the quotes when rendering keywords.

use logos::Logos;
use serde::{Deserialize, Serialize};

/// Coarse classification of a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenCategory {
    /// Reserved word of the dialect
    Keyword,
    /// Plain or backquoted identifier
    Identifier,
    /// String, integer or decimal literal
    Literal,
    /// Comparison or arithmetic operator
    Operator,
    /// Structural punctuation
    Punctuation,
    /// Synthesized end-of-stream sentinel
    Eof,
    /// Byte sequence the lexer could not recognize
    Unknown,
}

/// Terminal token kinds of the Impala-flavored dialect.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"--[^\n]*")]
#[logos(skip r"/\*([^*]|\*[^/])*\*/")]
pub enum TokenKind {
    // Statement keywords
    #[token("select", ignore(ascii_case))]
    KwSelect,
    #[token("from", ignore(ascii_case))]
    KwFrom,
    #[token("where", ignore(ascii_case))]
    KwWhere,
    #[token("group", ignore(ascii_case))]
    KwGroup,
    #[token("by", ignore(ascii_case))]
    KwBy,
    #[token("having", ignore(ascii_case))]
    KwHaving,
    #[token("order", ignore(ascii_case))]
    KwOrder,
    #[token("limit", ignore(ascii_case))]
    KwLimit,
    #[token("offset", ignore(ascii_case))]
    KwOffset,
    #[token("as", ignore(ascii_case))]
    KwAs,
    #[token("join", ignore(ascii_case))]
    KwJoin,
    #[token("inner", ignore(ascii_case))]
    KwInner,
    #[token("left", ignore(ascii_case))]
    KwLeft,
    #[token("right", ignore(ascii_case))]
    KwRight,
    #[token("full", ignore(ascii_case))]
    KwFull,
    #[token("outer", ignore(ascii_case))]
    KwOuter,
    #[token("cross", ignore(ascii_case))]
    KwCross,
    #[token("on", ignore(ascii_case))]
    KwOn,
    #[token("using", ignore(ascii_case))]
    KwUsing,
    #[token("and", ignore(ascii_case))]
    KwAnd,
    #[token("or", ignore(ascii_case))]
    KwOr,
    #[token("not", ignore(ascii_case))]
    KwNot,
    #[token("in", ignore(ascii_case))]
    KwIn,
    #[token("is", ignore(ascii_case))]
    KwIs,
    #[token("null", ignore(ascii_case))]
    KwNull,
    #[token("like", ignore(ascii_case))]
    KwLike,
    #[token("between", ignore(ascii_case))]
    KwBetween,
    #[token("case", ignore(ascii_case))]
    KwCase,
    #[token("when", ignore(ascii_case))]
    KwWhen,
    #[token("then", ignore(ascii_case))]
    KwThen,
    #[token("else", ignore(ascii_case))]
    KwElse,
    #[token("end", ignore(ascii_case))]
    KwEnd,
    #[token("distinct", ignore(ascii_case))]
    KwDistinct,
    #[token("all", ignore(ascii_case))]
    KwAll,
    #[token("union", ignore(ascii_case))]
    KwUnion,
    #[token("with", ignore(ascii_case))]
    KwWith,
    #[token("asc", ignore(ascii_case))]
    KwAsc,
    #[token("desc", ignore(ascii_case))]
    KwDesc,
    #[token("nulls", ignore(ascii_case))]
    KwNulls,
    #[token("first", ignore(ascii_case))]
    KwFirst,
    #[token("last", ignore(ascii_case))]
    KwLast,

    // DDL keywords
    #[token("create", ignore(ascii_case))]
    KwCreate,
    #[token("table", ignore(ascii_case))]
    KwTable,
    #[token("view", ignore(ascii_case))]
    KwView,
    #[token("database", ignore(ascii_case))]
    KwDatabase,
    #[token("schema", ignore(ascii_case))]
    KwSchema,
    #[token("function", ignore(ascii_case))]
    KwFunction,
    #[token("aggregate", ignore(ascii_case))]
    KwAggregate,
    #[token("external", ignore(ascii_case))]
    KwExternal,
    #[token("if", ignore(ascii_case))]
    KwIf,
    #[token("exists", ignore(ascii_case))]
    KwExists,
    #[token("drop", ignore(ascii_case))]
    KwDrop,
    #[token("comment", ignore(ascii_case))]
    KwComment,
    #[token("location", ignore(ascii_case))]
    KwLocation,
    #[token("partitioned", ignore(ascii_case))]
    KwPartitioned,
    #[token("partition", ignore(ascii_case))]
    KwPartition,
    #[token("stored", ignore(ascii_case))]
    KwStored,
    #[token("returns", ignore(ascii_case))]
    KwReturns,
    #[token("symbol", ignore(ascii_case))]
    KwSymbol,

    // DML keywords
    #[token("insert", ignore(ascii_case))]
    KwInsert,
    #[token("into", ignore(ascii_case))]
    KwInto,
    #[token("overwrite", ignore(ascii_case))]
    KwOverwrite,
    #[token("values", ignore(ascii_case))]
    KwValues,
    #[token("update", ignore(ascii_case))]
    KwUpdate,
    #[token("set", ignore(ascii_case))]
    KwSet,
    #[token("delete", ignore(ascii_case))]
    KwDelete,

    // Utility statement keywords
    #[token("use", ignore(ascii_case))]
    KwUse,
    #[token("show", ignore(ascii_case))]
    KwShow,
    #[token("describe", ignore(ascii_case))]
    KwDescribe,
    #[token("formatted", ignore(ascii_case))]
    KwFormatted,
    #[token("tables", ignore(ascii_case))]
    KwTables,
    #[token("databases", ignore(ascii_case))]
    KwDatabases,
    #[token("functions", ignore(ascii_case))]
    KwFunctions,
    #[token("refresh", ignore(ascii_case))]
    KwRefresh,
    #[token("invalidate", ignore(ascii_case))]
    KwInvalidate,
    #[token("metadata", ignore(ascii_case))]
    KwMetadata,
    #[token("compute", ignore(ascii_case))]
    KwCompute,
    #[token("stats", ignore(ascii_case))]
    KwStats,

    // Boolean literals are reserved words in the dialect
    #[token("true", ignore(ascii_case))]
    KwTrue,
    #[token("false", ignore(ascii_case))]
    KwFalse,

    // Type keywords
    #[token("int", ignore(ascii_case))]
    KwInt,
    #[token("integer", ignore(ascii_case))]
    KwInteger,
    #[token("bigint", ignore(ascii_case))]
    KwBigint,
    #[token("smallint", ignore(ascii_case))]
    KwSmallint,
    #[token("tinyint", ignore(ascii_case))]
    KwTinyint,
    #[token("boolean", ignore(ascii_case))]
    KwBoolean,
    #[token("string", ignore(ascii_case))]
    KwString,
    #[token("timestamp", ignore(ascii_case))]
    KwTimestamp,
    #[token("date", ignore(ascii_case))]
    KwDate,
    #[token("double", ignore(ascii_case))]
    KwDouble,
    #[token("float", ignore(ascii_case))]
    KwFloat,
    #[token("decimal", ignore(ascii_case))]
    KwDecimal,
    #[token("char", ignore(ascii_case))]
    KwChar,
    #[token("varchar", ignore(ascii_case))]
    KwVarchar,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(";")]
    Semicolon,

    // Operators
    #[token("*")]
    Star,
    #[token("=")]
    Eq,
    #[token("!=")]
    #[token("<>")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    // Identifiers and literals
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    #[regex(r"`[^`]*`")]
    QuotedIdent,
    #[regex(r"'([^'\\]|\\.)*'")]
    #[regex(r#""([^"\\]|\\.)*""#)]
    StringLiteral,
    #[regex(r"[0-9]+")]
    IntegerLiteral,
    #[regex(r"[0-9]+\.[0-9]+")]
    DecimalLiteral,

    // End-of-stream sentinel. Synthesized by the token stream; the NUL
    // pattern also terminates lexing of sentinel-padded buffers.
    #[token("\u{0}")]
    Eof,

    // Lowest-priority catch-all: any byte sequence no other rule claims.
    #[regex(r".", priority = 0)]
    Unknown,
}

impl TokenKind {
    /// Category of this terminal.
    pub fn category(self) -> TokenCategory {
        use TokenKind::*;
        match self {
            Ident | QuotedIdent => TokenCategory::Identifier,
            StringLiteral | IntegerLiteral | DecimalLiteral => TokenCategory::Literal,
            Star | Eq | NotEq | Lt | LtEq | Gt | GtEq | Plus | Minus | Slash | Percent => {
                TokenCategory::Operator
            }
            LParen | RParen | Comma | Dot | Semicolon => TokenCategory::Punctuation,
            Eof => TokenCategory::Eof,
            Unknown => TokenCategory::Unknown,
            _ => TokenCategory::Keyword,
        }
    }

    /// Quoted display form for fixed-spelling terminals, `None` for
    /// identifier/literal placeholders and the sentinels.
    pub fn literal(self) -> Option<&'static str> {
        use TokenKind::*;
        let text = match self {
            KwSelect => "'SELECT'",
            KwFrom => "'FROM'",
            KwWhere => "'WHERE'",
            KwGroup => "'GROUP'",
            KwBy => "'BY'",
            KwHaving => "'HAVING'",
            KwOrder => "'ORDER'",
            KwLimit => "'LIMIT'",
            KwOffset => "'OFFSET'",
            KwAs => "'AS'",
            KwJoin => "'JOIN'",
            KwInner => "'INNER'",
            KwLeft => "'LEFT'",
            KwRight => "'RIGHT'",
            KwFull => "'FULL'",
            KwOuter => "'OUTER'",
            KwCross => "'CROSS'",
            KwOn => "'ON'",
            KwUsing => "'USING'",
            KwAnd => "'AND'",
            KwOr => "'OR'",
            KwNot => "'NOT'",
            KwIn => "'IN'",
            KwIs => "'IS'",
            KwNull => "'NULL'",
            KwLike => "'LIKE'",
            KwBetween => "'BETWEEN'",
            KwCase => "'CASE'",
            KwWhen => "'WHEN'",
            KwThen => "'THEN'",
            KwElse => "'ELSE'",
            KwEnd => "'END'",
            KwDistinct => "'DISTINCT'",
            KwAll => "'ALL'",
            KwUnion => "'UNION'",
            KwWith => "'WITH'",
            KwAsc => "'ASC'",
            KwDesc => "'DESC'",
            KwNulls => "'NULLS'",
            KwFirst => "'FIRST'",
            KwLast => "'LAST'",
            KwCreate => "'CREATE'",
            KwTable => "'TABLE'",
            KwView => "'VIEW'",
            KwDatabase => "'DATABASE'",
            KwSchema => "'SCHEMA'",
            KwFunction => "'FUNCTION'",
            KwAggregate => "'AGGREGATE'",
            KwExternal => "'EXTERNAL'",
            KwIf => "'IF'",
            KwExists => "'EXISTS'",
            KwDrop => "'DROP'",
            KwComment => "'COMMENT'",
            KwLocation => "'LOCATION'",
            KwPartitioned => "'PARTITIONED'",
            KwPartition => "'PARTITION'",
            KwStored => "'STORED'",
            KwReturns => "'RETURNS'",
            KwSymbol => "'SYMBOL'",
            KwInsert => "'INSERT'",
            KwInto => "'INTO'",
            KwOverwrite => "'OVERWRITE'",
            KwValues => "'VALUES'",
            KwUpdate => "'UPDATE'",
            KwSet => "'SET'",
            KwDelete => "'DELETE'",
            KwUse => "'USE'",
            KwShow => "'SHOW'",
            KwDescribe => "'DESCRIBE'",
            KwFormatted => "'FORMATTED'",
            KwTables => "'TABLES'",
            KwDatabases => "'DATABASES'",
            KwFunctions => "'FUNCTIONS'",
            KwRefresh => "'REFRESH'",
            KwInvalidate => "'INVALIDATE'",
            KwMetadata => "'METADATA'",
            KwCompute => "'COMPUTE'",
            KwStats => "'STATS'",
            KwTrue => "'TRUE'",
            KwFalse => "'FALSE'",
            KwInt => "'INT'",
            KwInteger => "'INTEGER'",
            KwBigint => "'BIGINT'",
            KwSmallint => "'SMALLINT'",
            KwTinyint => "'TINYINT'",
            KwBoolean => "'BOOLEAN'",
            KwString => "'STRING'",
            KwTimestamp => "'TIMESTAMP'",
            KwDate => "'DATE'",
            KwDouble => "'DOUBLE'",
            KwFloat => "'FLOAT'",
            KwDecimal => "'DECIMAL'",
            KwChar => "'CHAR'",
            KwVarchar => "'VARCHAR'",
            LParen => "'('",
            RParen => "')'",
            Comma => "','",
            Dot => "'.'",
            Semicolon => "';'",
            Star => "'*'",
            Eq => "'='",
            NotEq => "'<>'",
            Lt => "'<'",
            LtEq => "'<='",
            Gt => "'>'",
            GtEq => "'>='",
            Plus => "'+'",
            Minus => "'-'",
            Slash => "'/'",
            Percent => "'%'",
            Ident | QuotedIdent | StringLiteral | IntegerLiteral | DecimalLiteral | Eof
            | Unknown => return None,
        };
        Some(text)
    }

    /// True for reserved-word terminals.
    pub fn is_keyword(self) -> bool {
        self.category() == TokenCategory::Keyword
    }
}
